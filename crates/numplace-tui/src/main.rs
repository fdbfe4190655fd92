mod render;
mod theme;

use clap::Parser;
use log::info;
use numplace_core::{Difficulty, Generator, PlaySession};
use std::io::{self, BufRead, Write};
use theme::Theme;

/// Terminal number-placement puzzle.
#[derive(Parser)]
#[command(name = "numplace", version, about)]
struct Args {
    /// Difficulty: easy, medium, or hard (or 1..=3). Prompts when omitted.
    #[arg(short, long)]
    difficulty: Option<Difficulty>,
    /// Fixed seed for a reproducible puzzle.
    #[arg(long)]
    seed: Option<u64>,
    /// Use colors suited to a light terminal background.
    #[arg(long)]
    light: bool,
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Place { row: usize, col: usize, value: u8 },
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => match prompt_difficulty(&mut input, &mut out)? {
            Some(difficulty) => difficulty,
            None => {
                writeln!(out, "Invalid input. Please enter a number between 1 and 3.")?;
                std::process::exit(1);
            }
        },
    };
    info!("starting a {difficulty} game");

    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    let theme = if args.light {
        Theme::light()
    } else {
        Theme::dark()
    };

    let mut session = PlaySession::new(generator.generate(difficulty));
    render::draw(&mut out, &session, &theme)?;

    while !session.is_complete() {
        write!(out, "Enter your solution (row col value) or 'q' to quit: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed; nothing more to play.
            return Ok(());
        }

        match parse_command(&line) {
            None => {
                writeln!(out, "Not possible. Please enter integers.")?;
            }
            Some(Command::Quit) => return Ok(()),
            Some(Command::Place { row, col, value }) => {
                match session.apply_move(row, col, value) {
                    Ok(_) => render::draw(&mut out, &session, &theme)?,
                    Err(reason) => writeln!(out, "Not possible: {reason}.")?,
                }
            }
        }
    }

    render::congratulate(&mut out, &theme)
}

/// Show the difficulty menu and read one choice. `None` means the input
/// was not a number in `1..=3`.
fn prompt_difficulty(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<Difficulty>> {
    writeln!(out, "Welcome to the puzzle!")?;
    writeln!(out, "Choose difficulty level:")?;
    for (i, level) in Difficulty::all().iter().enumerate() {
        writeln!(out, "{}. {level}", i + 1)?;
    }
    write!(out, "Enter your choice: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(match line.trim().parse::<u8>() {
        Ok(level @ 1..=3) => Some(Difficulty::from_level(level)),
        _ => None,
    })
}

/// Parse one input line: `q` to quit, otherwise three integers
/// `row col value`. Range checking is the session's job; this only
/// rejects lines that are not integers at all.
fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens == ["q"] {
        return Some(Command::Quit);
    }
    let &[row, col, value] = tokens.as_slice() else {
        return None;
    };
    Some(Command::Place {
        row: row.parse().ok()?,
        col: col.parse().ok()?,
        value: value.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_quit() {
        assert_eq!(
            parse_command("3 4 5\n"),
            Some(Command::Place {
                row: 3,
                col: 4,
                value: 5
            })
        );
        assert_eq!(parse_command("  1\t2  9 "), Some(Command::Place { row: 1, col: 2, value: 9 }));
        assert_eq!(parse_command("q\n"), Some(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("1 2"), None);
        assert_eq!(parse_command("1 2 3 4"), None);
        assert_eq!(parse_command("a b c"), None);
        assert_eq!(parse_command("1 2 x"), None);
    }

    #[test]
    fn menu_accepts_1_to_3_and_rejects_the_rest() {
        let mut out = Vec::new();
        let read = |s: &str, out: &mut Vec<u8>| {
            prompt_difficulty(&mut s.as_bytes(), out).unwrap()
        };

        assert_eq!(read("1\n", &mut out), Some(Difficulty::Easy));
        assert_eq!(read("2\n", &mut out), Some(Difficulty::Medium));
        assert_eq!(read("3\n", &mut out), Some(Difficulty::Hard));
        assert_eq!(read("4\n", &mut out), None);
        assert_eq!(read("abc\n", &mut out), None);
        assert_eq!(read("\n", &mut out), None);
    }
}
