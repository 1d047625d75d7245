use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;
use schach_core::{is_on_board, square_name, Game, Move, Verdict};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a game at the terminal", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Do not print the board before each turn
    #[arg(long)]
    no_board: bool,
}

/// Whitespace-separated tokens from a line-oriented reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("input closed before the game ended");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// A coordinate such as `e2`, also accepted as a bare letter followed by
    /// the rank in the next token.
    fn next_coordinate(&mut self) -> Result<String> {
        let mut coordinate = self.next_token()?;
        if coordinate.chars().count() == 1 {
            coordinate.push_str(&self.next_token()?);
        }
        Ok(coordinate)
    }

    /// Drops whatever is left of the current line.
    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

fn describe(mv: &Move) -> String {
    match mv.squares() {
        Some((from, to)) => format!("{}-{}", square_name(from), square_name(to)),
        None => mv.to_string(),
    }
}

fn read_move<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W) -> Result<Move> {
    loop {
        write!(out, "From: ")?;
        out.flush()?;
        let from = tokens.next_coordinate()?;
        write!(out, "To:   ")?;
        out.flush()?;
        let to = tokens.next_coordinate()?;

        match Move::parse(&from, &to) {
            Ok(mv) if is_on_board(&mv) => return Ok(mv),
            Ok(mv) => log::debug!("rejected off-board move {mv}"),
            Err(err) => log::debug!("rejected input {from:?} {to:?}: {err}"),
        }
        tokens.discard_line();
        writeln!(out, "\nMalformed input, try again:")?;
    }
}

fn play<R: BufRead, W: Write>(input: R, out: &mut W, show_board: bool) -> Result<()> {
    let mut game = Game::new();
    let mut tokens = Tokens::new(input);

    let winner = loop {
        if show_board {
            writeln!(out, "\n{}", game.board())?;
        }
        writeln!(out, "{} to move.", game.turn())?;

        let mv = read_move(&mut tokens, out)?;
        match game.submit(&mv)? {
            Verdict::Illegal => writeln!(out, "Illegal move {}.", describe(&mv))?,
            Verdict::GameOver { winner } => {
                log::info!("{winner} ended the game with {}", describe(&mv));
                break winner;
            }
        }
    };

    writeln!(out, "\n\n{winner} wins!")?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = play(stdin.lock(), &mut stdout.lock(), !args.no_board) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = play(input.as_bytes(), &mut out, false);
        (result, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn legal_move_ends_the_game() {
        let (result, out) = run("e7 e6\n");
        assert!(result.is_ok());
        assert!(out.contains("White to move."));
        assert!(out.ends_with("White wins!\n"));
    }

    #[test]
    fn malformed_and_illegal_input_reprompts() {
        let (result, out) = run("z7\ne6\ne7 e5\nd2 d3\na7\na6\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Malformed input, try again:").count(), 1);
        assert_eq!(out.matches("Illegal move").count(), 2);
        assert!(out.contains("Illegal move e7-e5."));
        assert!(out.contains("Illegal move d2-d3."));
        assert!(out.ends_with("White wins!\n"));
    }

    #[test]
    fn letter_and_rank_may_be_separated() {
        let (result, out) = run("e 7 e 6\n");
        assert!(result.is_ok());
        assert!(!out.contains("Malformed input"));
        assert!(out.ends_with("White wins!\n"));
    }

    #[test]
    fn malformed_entry_discards_rest_of_line() {
        let (result, out) = run("z7 e6 e7 e6\na7 a6\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Malformed input, try again:").count(), 1);
        assert!(!out.contains("Illegal move"));
        assert!(out.ends_with("White wins!\n"));
    }

    #[test]
    fn illegal_move_names_its_squares() {
        let mv = Move::parse("e7", "e5").expect("well-formed");
        assert_eq!(describe(&mv), "e7-e5");
        assert_eq!(describe(&Move::new(-1, 0, 0, 0)), "(-1,0)->(0,0)");
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = run("e7\n");
        assert!(result.is_err());
    }
}
