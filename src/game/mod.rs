//! The core Go logic: vertices, stones, chains, the board, and the move generator.

/// A structure that maintains the board's arrangement of stones and properties derived from the
/// arrangement.
pub mod board;

/// A connected set of verticies in the same state.
pub mod chain;

/// A structure holding all of the chains on a board.
pub mod chains;

/// A deterministic, seedable random move generator.
pub mod generator;

/// A structure that holds the state all of the verticies of the board in a matrix.
pub mod matrix;

/// Black or White.
pub mod player;

/// White, Empty, or Black.
pub mod stone;

/// A structure for storing the x and y coordinates of a board cell.
pub mod vertex;
