use std::fmt;
use std::str::FromStr;

/// Black or White.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    /// Plays first.
    Black,
    /// Plays second; receives komi at scoring time.
    White,
}

impl Player {
    /// The opponent of the player.
    #[must_use]
    pub fn enemy(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = match *self {
            Player::Black => "black",
            Player::White => "white",
        };
        write!(f, "{color}")
    }
}

impl FromStr for Player {
    type Err = String;

    /// Accepts `b`, `w`, `black`, `white`, case-insensitively. Anything else
    /// fails with `invalid color`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Ok(Player::Black),
            "w" | "white" => Ok(Player::White),
            _ => Err("invalid color".to_owned()),
        }
    }
}
