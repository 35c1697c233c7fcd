//! `tenuki`: reads GTP v2 commands from stdin, drives the engine, and
//! writes framed replies to stdout until `quit` or end of input.

use std::io::{self, BufRead, Write};

use clap::Parser;

use tenuki::gtp::command::Command;
use tenuki::gtp::engine::Engine;
use tenuki::gtp::response::Response;

/// A Go engine that speaks the Go Text Protocol (GTP v2) over stdio.
#[derive(Parser)]
#[command(name = "tenuki", version, about)]
struct Cli {
    /// Seed the move generator's RNG. Overrides `TENUKI_SEED` if both are given.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial board size, before the controller issues its own `boardsize`.
    #[arg(long, default_value_t = 19)]
    boardsize: usize,
}

fn seed(cli: &Cli) -> u64 {
    cli.seed
        .or_else(|| std::env::var("TENUKI_SEED").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(tenuki::game::generator::DEFAULT_SEED)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut engine = Engine::with_seed(seed(&cli));
    if let Some(command) = Command::from_line(&format!("boardsize {}", cli.boardsize)) {
        if let Err(error) = engine.exec(&command) {
            log::warn!("failed to apply --boardsize {}: {error}", cli.boardsize);
        }
    }

    run(&mut engine, io::stdin().lock(), io::stdout());
}

fn run(engine: &mut Engine, input: impl BufRead, mut output: impl Write) {
    for line in input.lines() {
        let Ok(line) = line else {
            log::warn!("failed to read a line from stdin, stopping");
            break;
        };

        let Some(command) = Command::from_line(&line) else {
            continue;
        };
        let quit = command.name == "quit";

        let result = engine.exec(&command);
        let response = Response { id: command.id, result };
        if write!(output, "{response}").is_err() || output.flush().is_err() {
            log::warn!("failed to write a reply, stopping");
            break;
        }

        if quit {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drives_a_short_session_to_quit() {
        let mut engine = Engine::new();
        let input = b"protocol_version\nname\nquit\n" as &[u8];
        let mut output = Vec::new();
        run(&mut engine, input, &mut output);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "= 2\n\n= Tenuki\n\n= \n\n");
    }

    #[test]
    fn stops_cleanly_on_eof_without_quit() {
        let mut engine = Engine::new();
        let input = b"protocol_version\n" as &[u8];
        let mut output = Vec::new();
        run(&mut engine, input, &mut output);
        assert_eq!(String::from_utf8(output).unwrap(), "= 2\n\n");
    }

    #[test]
    fn blank_and_comment_only_lines_produce_no_reply() {
        let mut engine = Engine::new();
        let input = b"\n# just a comment\nprotocol_version\n" as &[u8];
        let mut output = Vec::new();
        run(&mut engine, input, &mut output);
        assert_eq!(String::from_utf8(output).unwrap(), "= 2\n\n");
    }
}
