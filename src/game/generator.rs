//! A deterministic, seedable legal-move generator.
//!
//! [`generate`] is stateless over the [`Board`](crate::game::board::Board):
//! it borrows the board, shuffles the candidate vertices with the caller's
//! RNG, and returns the first one that is actually legal, skipping moves
//! that would fill the mover's own eye. It never mutates the board it is
//! given.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::board::Board;
use crate::game::player::Player;
use crate::game::vertex::Vertex;

/// The seed used when no `--seed`/`TENUKI_SEED` override is given, so fuzz
/// and regression runs are reproducible.
pub const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Returns a small, fast RNG seeded deterministically from `seed`.
#[must_use]
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

fn orthogonal_neighbors(vertex: Vertex, size: usize) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4);
    if vertex.x > 0 {
        out.push(Vertex { x: vertex.x - 1, y: vertex.y });
    }
    if vertex.y > 0 {
        out.push(Vertex { x: vertex.x, y: vertex.y - 1 });
    }
    if vertex.x + 1 < size {
        out.push(Vertex { x: vertex.x + 1, y: vertex.y });
    }
    if vertex.y + 1 < size {
        out.push(Vertex { x: vertex.x, y: vertex.y + 1 });
    }
    out
}

fn diagonal_neighbors(vertex: Vertex, size: usize) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4);
    for (dx, dy) in [(-1i64, -1i64), (-1, 1), (1, -1), (1, 1)] {
        let x = vertex.x as i64 + dx;
        let y = vertex.y as i64 + dy;
        if x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size {
            out.push(Vertex { x: x as usize, y: y as usize });
        }
    }
    out
}

/// Returns the color surrounding `vertex`, if every orthogonal neighbor is
/// either off the board or a stone of the same color. `None` if any
/// orthogonal neighbor is empty or the two colors are mixed.
fn is_eyeish(board: &Board, vertex: Vertex) -> Option<Player> {
    let size = board.size();
    let mut eye_color = None;
    for neighbor in orthogonal_neighbors(vertex, size) {
        let color = board.stone_at(neighbor).player()?;
        match eye_color {
            None => eye_color = Some(color),
            Some(existing) if existing == color => {}
            Some(_) => return None,
        }
    }
    eye_color
}

/// Returns the color of the "true" eye at `vertex`, or `None` if it is not
/// an eye at all. A true eye tolerates at most one diagonal held by the
/// opponent on the edge, and none in the center.
fn is_eye(board: &Board, vertex: Vertex) -> Option<Player> {
    let eye_color = is_eyeish(board, vertex)?;
    let size = board.size();
    let diagonals = diagonal_neighbors(vertex, size);
    let at_edge = diagonals.len() < 4;
    let tolerance = usize::from(at_edge);
    let enemy = eye_color.enemy();
    let bad_diagonals =
        diagonals.iter().filter(|&&d| board.stone_at(d).player() == Some(enemy)).count();
    (bad_diagonals <= tolerance).then_some(eye_color)
}

/// Selects a move for `player` on `board`: a legal vertex that does not
/// fill one of `player`'s own eyes, or `None` (pass) if no such move
/// remains.
///
/// Deterministic given `rng`'s state, so a fixed-seed RNG reproduces the
/// same sequence of moves across runs. The board is never mutated.
#[must_use]
pub fn generate(player: Player, board: &Board, rng: &mut SmallRng) -> Option<Vertex> {
    let mut candidates: Vec<Vertex> = board
        .empty_verts()
        .into_iter()
        .filter(|&vertex| is_eye(board, vertex) != Some(player))
        .collect();
    candidates.shuffle(rng);

    candidates.into_iter().find(|&vertex| board.clone().play(player, Some(vertex)).is_ok())
}
