use std::fmt;

use crate::gtp::error::GtpError;

/// The result of executing one GTP command: the reply payload, or the
/// error that should be reported instead.
pub type CommandResult = Result<Option<String>, GtpError>;

/// A Go Text Protocol response: a status, an optional echoed sequence id,
/// and a payload.
#[derive(Debug)]
pub struct Response {
    /// The command's sequence id, echoed back if the request carried one.
    pub id: Option<u32>,
    /// The result of running the command.
    pub result: CommandResult,
}

impl fmt::Display for Response {
    /// Renders the framed GTP reply: a status line (`=`/`?`, optional id,
    /// payload) followed by the mandatory terminating blank line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = self.id.map_or(String::new(), |id| id.to_string());
        match &self.result {
            Ok(Some(reply)) => write!(f, "={id} {reply}\n\n"),
            Ok(None) => write!(f, "={id} \n\n"),
            Err(error) => write!(f, "?{id} {error}\n\n"),
        }
    }
}
