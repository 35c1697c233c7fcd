use std::collections::HashMap;
use std::fmt;

use rand::rngs::SmallRng;

use crate::game::board::Board;
use crate::game::generator::{self, DEFAULT_SEED};
use crate::game::player::Player;
use crate::game::vertex::Vertex;
use crate::gtp::command::Command;
use crate::gtp::error::GtpError;
use crate::gtp::response::CommandResult;

/// The library version, reported by the `version` command.
pub const AGENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The Go Text Protocol version this engine speaks.
const GTP_PROTOCOL_VERSION: &str = "2";

/// The name this engine reports to `name`.
const PROGRAM_NAME: &str = "Tenuki";

fn gtp_boardsize(args: &[String], board: &mut Board) -> CommandResult {
    let size = args.first().and_then(|arg| arg.parse::<usize>().ok());
    match size {
        Some(size) => board.resize(size).map(|()| None).map_err(|_| GtpError::InvalidBoardsize),
        None => Err(GtpError::InvalidBoardsize),
    }
}

fn gtp_komi(args: &[String], board: &mut Board) -> CommandResult {
    let komi = args.first().and_then(|arg| arg.parse::<f64>().ok());
    match komi {
        Some(komi) if komi.is_finite() => {
            board.set_komi(komi);
            Ok(None)
        }
        _ => Err(GtpError::InvalidKomi),
    }
}

fn gtp_play(args: &[String], board: &mut Board) -> CommandResult {
    let color = args.first().ok_or(GtpError::InvalidColor)?;
    let player: Player = color.parse().map_err(|_| GtpError::InvalidColor)?;
    let vertex = args.get(1).ok_or(GtpError::InvalidVertex)?;
    let vertex = Vertex::parse(vertex, board.size()).map_err(|_| GtpError::InvalidVertex)?;
    board.play(player, vertex).map(|()| None).map_err(|e| GtpError::illegal_move(&e))
}

fn gtp_genmove(args: &[String], board: &mut Board, rng: &mut SmallRng) -> CommandResult {
    let player: Player = args.first().ok_or(GtpError::InvalidColor)?.parse().map_err(|_| GtpError::InvalidColor)?;
    let vertex = generator::generate(player, board, rng);
    board.play(player, vertex).expect("generated move must be legal");
    let reply = vertex.map_or_else(|| "pass".to_owned(), |v| v.to_string());
    Ok(Some(reply))
}

type Handler = Box<dyn Fn(&[String], &mut Board, &mut SmallRng) -> CommandResult>;

/// The GTP command dispatcher: a table of command handlers plus the engine
/// state (the live [`Board`] and its move-generation RNG) they act on.
pub struct Engine {
    commands: HashMap<String, Handler>,
    board: Board,
    rng: SmallRng,
}

impl Engine {
    /// Returns a new engine on a 19x19 board, seeded from [`DEFAULT_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Returns a new engine on a 19x19 board, seeding its move generator
    /// from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Engine {
            commands: Self::command_table(),
            board: Board::new(19).expect("19 is a supported board size"),
            rng: generator::seeded_rng(seed),
        }
    }

    fn command_table() -> HashMap<String, Handler> {
        let mut commands: HashMap<String, Handler> = HashMap::new();

        commands.insert(
            "protocol_version".to_owned(),
            Box::new(|_args, _board, _rng| Ok(Some(GTP_PROTOCOL_VERSION.to_owned()))),
        );
        commands.insert("name".to_owned(), Box::new(|_args, _board, _rng| Ok(Some(PROGRAM_NAME.to_owned()))));
        commands.insert("version".to_owned(), Box::new(|_args, _board, _rng| Ok(Some(AGENT_VERSION.to_owned()))));
        commands.insert(
            "boardsize".to_owned(),
            Box::new(|args, board, _rng| gtp_boardsize(args, board)),
        );
        commands.insert(
            "clear_board".to_owned(),
            Box::new(|_args, board, _rng| {
                board.clear();
                Ok(None)
            }),
        );
        commands.insert("komi".to_owned(), Box::new(|args, board, _rng| gtp_komi(args, board)));
        commands.insert("play".to_owned(), Box::new(|args, board, _rng| gtp_play(args, board)));
        commands.insert("genmove".to_owned(), Box::new(|args, board, rng| gtp_genmove(args, board, rng)));
        commands.insert(
            "showboard".to_owned(),
            Box::new(|_args, board, _rng| Ok(Some(format!("\n{}", board.render())))),
        );
        commands.insert(
            "final_score".to_owned(),
            Box::new(|_args, board, _rng| Ok(Some(board.score().to_string()))),
        );
        commands.insert("quit".to_owned(), Box::new(|_args, _board, _rng| Ok(None)));

        commands
    }

    /// Returns true if `name` is a command this engine recognises.
    #[must_use]
    pub fn known_command(&self, name: &str) -> bool {
        self.commands.contains_key(name) || name == "list_commands" || name == "known_command"
    }

    /// Returns the sorted list of every command name this engine recognises.
    #[must_use]
    pub fn list_commands(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.push("list_commands".to_owned());
        names.push("known_command".to_owned());
        names.sort();
        names
    }

    /// Dispatches one parsed [`Command`] against the live board, returning
    /// its result. `quit` is handled like any other command here; the
    /// caller is responsible for ending the read loop on it.
    ///
    /// # Errors
    /// Returns [`GtpError::UnknownCommand`] for an unrecognised command
    /// name, or whatever error the command's own handler produces
    /// (invalid boardsize/komi/color/vertex, or an illegal move).
    pub fn exec(&mut self, command: &Command) -> CommandResult {
        match command.name.as_str() {
            "list_commands" => Ok(Some(self.list_commands().join("\n"))),
            "known_command" => {
                let found = command.args.first().is_some_and(|name| self.known_command(name));
                Ok(Some(found.to_string()))
            }
            _ => match self.commands.get(&command.name) {
                Some(handler) => handler(&command.args, &mut self.board, &mut self.rng),
                None => Err(GtpError::UnknownCommand),
            },
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Engine").field("board", &self.board).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(engine: &mut Engine, line: &str) -> CommandResult {
        let command = Command::from_line(line).expect("non-empty line");
        engine.exec(&command)
    }

    #[test]
    fn identity_commands() {
        let mut engine = Engine::new();
        assert_eq!(exec(&mut engine, "protocol_version"), Ok(Some("2".to_owned())));
        assert_eq!(exec(&mut engine, "name"), Ok(Some("Tenuki".to_owned())));
    }

    #[test]
    fn unknown_command_fails() {
        let mut engine = Engine::new();
        assert_eq!(exec(&mut engine, "unknown_command_xyz"), Err(GtpError::UnknownCommand));
    }

    #[test]
    fn boardsize_rejects_non_integers() {
        let mut engine = Engine::new();
        assert_eq!(exec(&mut engine, "boardsize cats"), Err(GtpError::InvalidBoardsize));
    }

    #[test]
    fn komi_rejects_non_decimals() {
        let mut engine = Engine::new();
        assert_eq!(exec(&mut engine, "komi nope"), Err(GtpError::InvalidKomi));
    }

    #[test]
    fn play_validates_color_before_vertex() {
        let mut engine = Engine::new();
        assert_eq!(exec(&mut engine, "play X D4"), Err(GtpError::InvalidColor));
    }

    #[test]
    fn play_with_a_valid_color_but_no_vertex_reports_invalid_vertex() {
        let mut engine = Engine::new();
        assert_eq!(exec(&mut engine, "play B"), Err(GtpError::InvalidVertex));
    }

    #[test]
    fn genmove_rejects_bad_color() {
        let mut engine = Engine::new();
        assert_eq!(exec(&mut engine, "genmove Q"), Err(GtpError::InvalidColor));
    }

    #[test]
    fn j9_is_valid_but_i9_is_not_on_a_9x9_board() {
        let mut engine = Engine::new();
        exec(&mut engine, "boardsize 9").unwrap();
        exec(&mut engine, "clear_board").unwrap();
        assert_eq!(exec(&mut engine, "play B J9"), Ok(None));
        assert_eq!(exec(&mut engine, "play W I9"), Err(GtpError::InvalidVertex));
    }

    #[test]
    fn deterministic_scoring_scenario_on_a_5x5_board() {
        let mut engine = Engine::new();
        exec(&mut engine, "boardsize 5").unwrap();
        exec(&mut engine, "clear_board").unwrap();
        exec(&mut engine, "komi 0").unwrap();
        exec(&mut engine, "play B A1").unwrap();
        exec(&mut engine, "play W pass").unwrap();
        exec(&mut engine, "play B pass").unwrap();
        assert_eq!(exec(&mut engine, "final_score"), Ok(Some("B+25.0".to_owned())));
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut engine = Engine::new();
        exec(&mut engine, "boardsize 9").unwrap();
        exec(&mut engine, "clear_board").unwrap();
        assert_eq!(exec(&mut engine, "play B A0"), Err(GtpError::InvalidVertex));
        assert_eq!(exec(&mut engine, "play B Z1"), Err(GtpError::InvalidVertex));
    }

    #[test]
    fn fuzz_loop_across_small_board_sizes() {
        for size in [5, 7, 9] {
            let mut engine = Engine::new();
            exec(&mut engine, &format!("boardsize {size}")).unwrap();
            exec(&mut engine, "clear_board").unwrap();
            exec(&mut engine, "komi 6.5").unwrap();

            let mut color = 'B';
            for _ in 0..30 {
                let reply = exec(&mut engine, &format!("genmove {color}")).unwrap().unwrap();
                let is_vertex = {
                    let mut chars = reply.chars();
                    let letter = chars.next();
                    let rest: String = chars.collect();
                    letter.is_some_and(|c| "ABCDEFGHJKLMNOPQRST".contains(c))
                        && !rest.is_empty()
                        && rest.chars().all(|c| c.is_ascii_digit())
                        && rest.parse::<usize>().is_ok_and(|row| (1..=size).contains(&row))
                };
                assert!(reply == "pass" || is_vertex, "unexpected genmove reply {reply} on size {size}");
                color = if color == 'B' { 'W' } else { 'B' };
            }

            assert!(exec(&mut engine, "final_score").is_ok());
            assert!(exec(&mut engine, "showboard").is_ok());
        }
    }
}
