use std::fmt;

/// The wire-visible error kinds a GTP reply can carry.
///
/// `Display` renders exactly the payload text the dispatcher writes after
/// the leading `?`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GtpError {
    /// The command token was not recognised.
    UnknownCommand,
    /// `boardsize`'s argument was missing, non-integer, or unsupported.
    InvalidBoardsize,
    /// `komi`'s argument was missing or not a finite decimal.
    InvalidKomi,
    /// A color argument was not one of `b`/`w`/`black`/`white`.
    InvalidColor,
    /// A vertex argument was syntactically malformed or out of range for the
    /// current board.
    InvalidVertex,
    /// Legal syntax but a rule violation. `reason` is `occupied`, `suicide`,
    /// or `ko`.
    IllegalMove {
        /// Why the move was rejected.
        reason: String,
    },
}

impl fmt::Display for GtpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GtpError::UnknownCommand => write!(f, "unknown_command"),
            GtpError::InvalidBoardsize => write!(f, "invalid boardsize"),
            GtpError::InvalidKomi => write!(f, "invalid komi"),
            GtpError::InvalidColor => write!(f, "invalid color"),
            GtpError::InvalidVertex => write!(f, "invalid vertex"),
            GtpError::IllegalMove { reason } => write!(f, "illegal move: {reason}"),
        }
    }
}

impl GtpError {
    /// Wraps a `Board::play` failure (`"illegal move: <reason>"`) as an
    /// [`GtpError::IllegalMove`], stripping the shared prefix.
    #[must_use]
    pub fn illegal_move(message: &str) -> Self {
        let reason = message.strip_prefix("illegal move: ").unwrap_or(message);
        GtpError::IllegalMove { reason: reason.to_owned() }
    }
}
