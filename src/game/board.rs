use std::fmt;

use crate::game::chain::Chain;
use crate::game::chains::Chains;
use crate::game::matrix::Matrix;
use crate::game::player::Player;
use crate::game::stone::Stone;
use crate::game::vertex::{Vertex, GOBAN_LETTERS};

/// The compensation White traditionally receives for playing second.
pub const DEFAULT_KOMI: f64 = 7.5;
const GOBAN_MAX_SIZE: usize = 19;
const GOBAN_MIN_SIZE: usize = 1;

/// Returns the center point (天元 tengen) of the board. Note that even size boards don't have a
/// center point.
#[must_use]
pub fn center_point(board_size: usize) -> Option<Vertex> {
    if board_size % 2 == 0 {
        None
    } else {
        let center = board_size / 2;
        Some(Vertex { x: center, y: center })
    }
}

/// Returns the traditional star points (星 hoshi) for a board of the given size, used only to
/// decorate `showboard` output.
#[must_use]
pub fn star_points(board_size: usize) -> Vec<Vertex> {
    if board_size < 7 {
        return Vec::new();
    }
    let min_line = if board_size > 12 { 3 } else { 2 };
    let max_line = board_size - min_line - 1;
    let mut points = vec![
        Vertex { x: min_line, y: min_line },
        Vertex { x: max_line, y: max_line },
        Vertex { x: min_line, y: max_line },
        Vertex { x: max_line, y: min_line },
    ];
    if board_size == 7 {
        return points;
    }

    if let Some(center) = center_point(board_size) {
        points.push(Vertex { x: min_line, y: center.x });
        points.push(Vertex { x: max_line, y: center.x });
        points.push(Vertex { x: center.x, y: min_line });
        points.push(Vertex { x: center.x, y: max_line });
        points.push(center);
    }
    points
}

/// The verticies neighboring a vertex, grouped by whose stone (if any) occupies them.
#[derive(Clone, Debug)]
pub struct Neighbors {
    /// The mover's own stones.
    pub good: Vec<Vertex>,
    /// The opponent's stones.
    pub evil: Vec<Vertex>,
    /// Empty verticies.
    pub empty: Vec<Vertex>,
}

/// The outcome of area scoring: who is ahead, and by how much.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    /// The game is exactly tied after komi.
    Tied,
    /// Black is ahead by `margin` points.
    Black {
        /// The margin, always strictly positive.
        margin: f64,
    },
    /// White is ahead by `margin` points (after komi).
    White {
        /// The margin, always strictly positive.
        margin: f64,
    },
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Score::Tied => write!(f, "0"),
            Score::Black { margin } => write!(f, "B+{margin:.1}"),
            Score::White { margin } => write!(f, "W+{margin:.1}"),
        }
    }
}

/// The authoritative Go position: stones, captures, ko, and history.
#[derive(Clone, Debug)]
pub struct Board {
    matrix: Matrix<Stone>,
    chains: Chains,
    komi: f64,
    to_move: Player,
    history: Vec<(Player, Option<Vertex>)>,
    /// The vertex (and the color it is forbidden to) that the simple ko rule
    /// currently bars from being retaken.
    ko_point: Option<(Vertex, Player)>,
}

impl Board {
    /// Returns a new empty board of the given size, with komi [`DEFAULT_KOMI`].
    ///
    /// # Errors
    /// Returns `invalid boardsize` if `size` is not in `1..=19`.
    pub fn new(size: usize) -> Result<Self, String> {
        if !(GOBAN_MIN_SIZE..=GOBAN_MAX_SIZE).contains(&size) {
            return Err("invalid boardsize".to_owned());
        }
        Ok(Board {
            matrix: Matrix::with_size(size),
            chains: Chains::default(),
            komi: DEFAULT_KOMI,
            to_move: Player::Black,
            history: Vec::new(),
            ko_point: None,
        })
    }

    /// Installs a fresh empty board of the given size, preserving komi.
    ///
    /// # Errors
    /// Returns `invalid boardsize` if `size` is not in `1..=19`.
    pub fn resize(&mut self, size: usize) -> Result<(), String> {
        if !(GOBAN_MIN_SIZE..=GOBAN_MAX_SIZE).contains(&size) {
            return Err("invalid boardsize".to_owned());
        }
        let komi = self.komi;
        *self = Board::new(size)?;
        self.komi = komi;
        log::debug!("resized board to {size}x{size}");
        Ok(())
    }

    /// Removes all of the stones from the board and clears history and the ko point. Size and
    /// komi are preserved.
    pub fn clear(&mut self) {
        self.matrix.reset();
        self.chains.clear();
        self.history.clear();
        self.ko_point = None;
        self.to_move = Player::Black;
        log::debug!("cleared board");
    }

    /// Sets komi. Any finite value is accepted.
    pub fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    /// Returns the current komi.
    #[must_use]
    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Returns the current board size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Returns the color whose turn it is. Purely informational: GTP clients set the color on
    /// every `play`/`genmove`, so this is never consulted for legality.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the committed `(player, vertex)` history since the last `clear`.
    #[must_use]
    pub fn history(&self) -> &[(Player, Option<Vertex>)] {
        &self.history
    }

    /// Returns true if the vertex is on the board and empty.
    #[must_use]
    pub fn is_vacant(&self, vertex: Vertex) -> bool {
        self.matrix.is_in_state(vertex, Stone::Empty)
    }

    /// Returns all of the empty verticies.
    #[must_use]
    pub fn empty_verts(&self) -> Vec<Vertex> {
        self.matrix.verts_in_state(Stone::Empty)
    }

    /// Returns the stone (or lack of one) at `vertex`.
    #[must_use]
    pub fn stone_at(&self, vertex: Vertex) -> Stone {
        self.matrix[&vertex]
    }

    fn neighbors(&self, player: Player, vertex: Vertex) -> Neighbors {
        let mut adjacencies = self.matrix.exterior(vertex);
        let mut good = adjacencies.clone();
        good.retain(|v| self.matrix[v] == Stone::from(player));
        let mut evil = adjacencies.clone();
        evil.retain(|v| self.matrix[v] == Stone::from(player.enemy()));
        adjacencies.retain(|v| self.matrix[v] == Stone::Empty);

        Neighbors { good, evil, empty: adjacencies }
    }

    fn add_stone(&mut self, player: Player, vertex: &Vertex) {
        self.matrix[vertex] = Stone::from(player);
        self.chains.add_stone(player, vertex);
    }

    /// Places a stone (assumed empty and on the board) and resolves captures.
    ///
    /// Returns `(captured, suicided)`: the verticies removed because `player` captured them, and
    /// the verticies removed because placing this stone left `player`'s own string with no
    /// liberties (suicide).
    fn place_stone(&mut self, player: Player, vertex: Vertex) -> (Vec<Vertex>, Vec<Vertex>) {
        self.add_stone(player, &vertex);
        let neighbors = self.neighbors(player, vertex);

        let mut new_chain = Chain::new(player, vertex, &neighbors);
        for vert in &neighbors.good {
            if let Some(old_chain) = self.chains.remove_chain(vert) {
                new_chain.eat(old_chain);
            }
        }
        self.chains.push(new_chain);

        let captured = self.remove_captures(player);
        let suicided = self.remove_captures(player.enemy());
        (captured, suicided)
    }

    /// Removes all of `capturer`'s enemy chains that have zero liberties and returns their
    /// verticies.
    fn remove_captures(&mut self, capturer: Player) -> Vec<Vertex> {
        let empty_verts = self.chains.remove_dead_chains(capturer.enemy());
        for v in &empty_verts {
            self.matrix[v] = Stone::Empty;
        }
        empty_verts
    }

    /// Commits a move for `player`. `vertex` of `None` is a pass.
    ///
    /// # Errors
    /// - `illegal move: occupied` if the vertex is not empty.
    /// - `illegal move: suicide` if the move would leave its own string with no liberties.
    /// - `illegal move: ko` if the move immediately recreates the position forbidden by the
    ///   current ko point.
    pub fn play(&mut self, player: Player, vertex: Option<Vertex>) -> Result<(), String> {
        let Some(vertex) = vertex else {
            self.history.push((player, None));
            self.ko_point = None;
            self.to_move = player.enemy();
            return Ok(());
        };

        if !self.is_vacant(vertex) {
            log::debug!("rejected occupied point at {vertex} for {player}");
            return Err("illegal move: occupied".to_owned());
        }

        if let Some((ko_vertex, forbidden)) = self.ko_point {
            if ko_vertex == vertex && forbidden == player {
                log::debug!("rejected ko recapture at {vertex} for {player}");
                return Err("illegal move: ko".to_owned());
            }
        }

        let mut trial = self.clone();
        let (captured, suicided) = trial.place_stone(player, vertex);
        if !suicided.is_empty() {
            log::debug!("rejected suicide at {vertex} for {player}");
            return Err("illegal move: suicide".to_owned());
        }

        let recaptures_into_ko = captured.len() == 1
            && trial
                .chains
                .find(&vertex)
                .is_some_and(Chain::is_single_stone_atari);

        *self = trial;
        self.ko_point = recaptures_into_ko.then(|| (captured[0], player.enemy()));
        self.history.push((player, Some(vertex)));
        self.to_move = player.enemy();
        if !captured.is_empty() {
            log::debug!("{player} captured {} stone(s) at {vertex}", captured.len());
        }
        Ok(())
    }

    /// Enumerates all moves (including `Pass`, represented as `None`) that `play(player, _)`
    /// would currently accept.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> Vec<Option<Vertex>> {
        let mut moves = vec![None];
        for vertex in self.empty_verts() {
            let mut trial = self.clone();
            if trial.play(player, Some(vertex)).is_ok() {
                moves.push(Some(vertex));
            }
        }
        moves
    }

    /// Computes the Chinese (area) score: stones on the board plus single-color territory, minus
    /// komi from White's side.
    #[must_use]
    pub fn score(&self) -> Score {
        let size = self.size();
        let mut black_area: i64 = 0;
        let mut white_area: i64 = 0;
        let mut visited = vec![false; size * size];

        for y in 0..size {
            for x in 0..size {
                let vertex = Vertex { x, y };
                let index = y * size + x;
                if visited[index] {
                    continue;
                }
                match self.matrix[&vertex] {
                    Stone::Black => {
                        visited[index] = true;
                        black_area += 1;
                    }
                    Stone::White => {
                        visited[index] = true;
                        white_area += 1;
                    }
                    Stone::Empty => {
                        let (region, borders) = self.empty_region(vertex, &mut visited);
                        match borders {
                            Borders::Black => black_area += region.len() as i64,
                            Borders::White => white_area += region.len() as i64,
                            Borders::Neither | Borders::Both => {}
                        }
                    }
                }
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let margin = black_area as f64 - white_area as f64 - self.komi;
        if margin > 0.0 {
            Score::Black { margin }
        } else if margin < 0.0 {
            Score::White { margin: -margin }
        } else {
            Score::Tied
        }
    }

    /// Flood-fills the maximal empty region containing `start`, marking every member visited and
    /// reporting which color(s), if any, border it.
    fn empty_region(&self, start: Vertex, visited: &mut [bool]) -> (Vec<Vertex>, Borders) {
        let size = self.size();
        let mut region = Vec::new();
        let mut borders = Borders::Neither;
        let mut queue = vec![start];
        visited[start.y * size + start.x] = true;

        while let Some(vertex) = queue.pop() {
            region.push(vertex);
            for neighbor in self.matrix.exterior(vertex) {
                match self.matrix[&neighbor] {
                    Stone::Empty => {
                        let index = neighbor.y * size + neighbor.x;
                        if !visited[index] {
                            visited[index] = true;
                            queue.push(neighbor);
                        }
                    }
                    Stone::Black => borders = borders.meets(Player::Black),
                    Stone::White => borders = borders.meets(Player::White),
                }
            }
        }

        (region, borders)
    }

    fn push_letters(&self, board: &mut String) {
        board.push_str("  ");
        for letter in GOBAN_LETTERS.chars().take(self.size()) {
            board.push(' ');
            board.push(letter);
        }
    }

    /// Returns a human-readable rendering: a column header (skipping `I`), stones as `X`
    /// (Black)/`O` (White)/`.` (Empty, `+` on a star point), and row numbers counting down on
    /// both sides.
    #[must_use]
    pub fn render(&self) -> String {
        let size = self.size();
        let stars = star_points(size);
        let mut board = String::new();
        self.push_letters(&mut board);
        board.push('\n');
        for y in (0..size).rev() {
            board.push_str(&format!("{:2}", y + 1));
            for x in 0..size {
                board.push(' ');
                let vertex = Vertex { x, y };
                let c = match self.matrix[&vertex] {
                    Stone::Empty => {
                        if stars.contains(&vertex) {
                            '+'
                        } else {
                            '.'
                        }
                    }
                    Stone::Black => 'X',
                    Stone::White => 'O',
                };
                board.push(c);
            }
            board.push_str(&format!(" {:2}\n", y + 1));
        }
        self.push_letters(&mut board);
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Which color(s) border an empty region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Borders {
    Neither,
    Black,
    White,
    Both,
}

impl Borders {
    fn meets(self, player: Player) -> Self {
        match (self, player) {
            (Borders::Neither, Player::Black) => Borders::Black,
            (Borders::Neither, Player::White) => Borders::White,
            (Borders::Black, Player::White) | (Borders::White, Player::Black) => Borders::Both,
            (same, _) => same,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_sizes() {
        assert!(Board::new(0).is_err());
        assert!(Board::new(20).is_err());
        assert!(Board::new(9).is_ok());
    }

    #[test]
    fn clear_preserves_size_and_komi() {
        let mut board = Board::new(9).unwrap();
        board.set_komi(6.5);
        board.play(Player::Black, Some(Vertex { x: 0, y: 0 })).unwrap();
        board.clear();
        assert!(board.is_vacant(Vertex { x: 0, y: 0 }));
        assert_eq!(board.size(), 9);
        assert_eq!(board.komi(), 6.5);
        assert!(board.history().is_empty());
    }

    #[test]
    fn occupied_point_is_illegal() {
        let mut board = Board::new(9).unwrap();
        let vertex = Vertex { x: 4, y: 4 };
        board.play(Player::Black, Some(vertex)).unwrap();
        assert_eq!(
            board.play(Player::White, Some(vertex)),
            Err("illegal move: occupied".to_owned())
        );
    }

    #[test]
    fn single_stone_suicide_is_rejected() {
        let mut board = Board::new(9).unwrap();
        let corner = Vertex { x: 0, y: 0 };
        board.play(Player::Black, Some(Vertex { x: 1, y: 0 })).unwrap();
        board.play(Player::White, Some(Vertex { x: 8, y: 8 })).unwrap();
        board.play(Player::Black, Some(Vertex { x: 0, y: 1 })).unwrap();
        board.play(Player::White, Some(Vertex { x: 8, y: 7 })).unwrap();
        assert_eq!(
            board.play(Player::White, Some(corner)),
            Err("illegal move: suicide".to_owned())
        );
    }

    #[test]
    fn captures_remove_the_enemy_string() {
        let mut board = Board::new(9).unwrap();
        // White stone at (1, 0) surrounded on all four sides by Black.
        board.play(Player::White, Some(Vertex { x: 1, y: 0 })).unwrap();
        board.play(Player::Black, Some(Vertex { x: 0, y: 0 })).unwrap();
        board.play(Player::White, Some(Vertex { x: 8, y: 8 })).unwrap();
        board.play(Player::Black, Some(Vertex { x: 2, y: 0 })).unwrap();
        board.play(Player::White, Some(Vertex { x: 8, y: 7 })).unwrap();
        board.play(Player::Black, Some(Vertex { x: 1, y: 1 })).unwrap();
        assert!(board.is_vacant(Vertex { x: 1, y: 0 }));
    }

    #[test]
    fn simple_ko_forbids_the_immediate_recapture() {
        // Classic corner ko shape on a 5x5 board:
        //     . X O . .
        //     X . X O .
        //     . X O . .
        let mut board = Board::new(5).unwrap();
        for (player, (x, y)) in [
            (Player::Black, (1, 3)),
            (Player::White, (2, 3)),
            (Player::Black, (0, 2)),
            (Player::White, (3, 2)),
            (Player::Black, (1, 1)),
            (Player::White, (2, 1)),
            (Player::Black, (2, 2)),
        ] {
            board.play(player, Some(Vertex { x, y })).unwrap();
        }
        // Black's move at (2, 2) captured the lone White stone at (1, 2).
        assert!(board.is_vacant(Vertex { x: 1, y: 2 }));
        assert_eq!(
            board.play(Player::White, Some(Vertex { x: 1, y: 2 })),
            Err("illegal move: ko".to_owned())
        );
        // Any other move is fine and clears the ko.
        board.play(Player::White, Some(Vertex { x: 4, y: 4 })).unwrap();
        board.play(Player::Black, Some(Vertex { x: 4, y: 0 })).unwrap();
        assert!(board.play(Player::White, Some(Vertex { x: 1, y: 2 })).is_ok());
    }

    #[test]
    fn two_passes_leave_the_board_unchanged() {
        let mut board = Board::new(9).unwrap();
        board.play(Player::Black, Some(Vertex { x: 4, y: 4 })).unwrap();
        let before = board.render();
        board.play(Player::White, None).unwrap();
        board.play(Player::Black, None).unwrap();
        assert_eq!(board.render(), before);
    }

    #[test]
    fn score_on_an_empty_board_is_komi() {
        let mut board = Board::new(9).unwrap();
        board.set_komi(0.0);
        assert_eq!(board.score(), Score::Tied);

        board.set_komi(6.5);
        assert_eq!(board.score(), Score::White { margin: 6.5 });
        assert_eq!(board.score().to_string(), "W+6.5");
    }

    #[test]
    fn single_corner_stone_claims_the_whole_board() {
        let mut board = Board::new(5).unwrap();
        board.set_komi(0.0);
        board.play(Player::Black, Some(Vertex { x: 0, y: 0 })).unwrap();
        board.play(Player::White, None).unwrap();
        board.play(Player::Black, None).unwrap();
        assert_eq!(board.score().to_string(), "B+25.0");
    }

    #[test]
    fn dame_between_colors_scores_for_neither() {
        let mut board = Board::new(5).unwrap();
        board.set_komi(0.0);
        // Two parallel walls (columns 1 and 3) leave column 0 as Black territory, column 4 as
        // White territory, and column 2 (touching both walls) as dame.
        for y in 0..5 {
            board.play(Player::Black, Some(Vertex { x: 1, y })).unwrap();
            board.play(Player::White, Some(Vertex { x: 3, y })).unwrap();
        }
        // Black: 5 stones + 5 territory. White: 5 stones + 5 territory. Column 2 is dame.
        assert_eq!(board.score(), Score::Tied);
    }

    #[test]
    fn render_header_skips_the_letter_i() {
        let board = Board::new(9).unwrap();
        assert!(board.render().contains("A B C D E F G H J"));
    }
}
