//! Tokenizing a raw GTP input line into a [`Command`].

fn preprocess_line(line: &str) -> Vec<String> {
    let mut out = String::new();
    for c in line.chars() {
        if c == '#' {
            break;
        }
        if c == '\t' {
            out.push(' ');
            continue;
        }
        if c.is_control() {
            continue;
        }
        out.push(c);
    }

    out.split_whitespace().map(ToOwned::to_owned).collect()
}

/// A parsed GTP command: an optional sequence id, the command name, and its
/// whitespace-tokenised arguments.
#[derive(Clone, Debug)]
pub struct Command {
    /// The optional leading sequence id, echoed back in the reply.
    pub id: Option<u32>,
    /// The command name (e.g. `play`, `genmove`).
    pub name: String,
    /// The remaining whitespace-tokenised arguments.
    pub args: Vec<String>,
}

impl Command {
    /// Converts one line of input into a `Command`. Strips comments
    /// (`#`...end of line), collapses tabs to spaces, and drops other
    /// control characters before tokenizing. Returns `None` if the line has
    /// no command on it (blank, or comment-only).
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let words = preprocess_line(line);
        if words.is_empty() {
            return None;
        }

        let id = words[0].parse::<u32>().ok();
        let command_index = usize::from(id.is_some());
        if command_index >= words.len() {
            return Some(Command { id, name: String::new(), args: Vec::new() });
        }

        Some(Command {
            id,
            name: words[command_index].clone(),
            args: words[(command_index + 1)..].to_vec(),
        })
    }
}
