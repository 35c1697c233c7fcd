use std::fmt;
use std::str::FromStr;

/// Column letters used on the board and in GTP vertex strings. Skips `I`,
/// so the columns for a 19x19 board are `A B C D E F G H J K L M N O P Q R S T`.
pub const GOBAN_LETTERS: &str = "ABCDEFGHJKLMNOPQRST";

/// A structure for storing the x and y coordinates of a board cell.
///
/// (0, 0) is the bottom left corner of the board.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Vertex {
    /// The x coordinate.
    pub x: usize,
    /// The y coordinate.
    pub y: usize,
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = GOBAN_LETTERS
            .chars()
            .nth(self.x)
            .expect("expected char to be in GOBAN_LETTERS");
        let number = self.y + 1;
        write!(f, "{letter}{number}")
    }
}

impl FromStr for Vertex {
    type Err = String;

    /// Parses a coordinate string with no bound check against any particular
    /// board size. Prefer [`Vertex::parse`] when a board size is known, as the
    /// GTP dispatcher always has one.
    fn from_str(vertex: &str) -> Result<Self, Self::Err> {
        if vertex.len() < 2 {
            return Err("invalid vertex".to_owned());
        }

        let letter = vertex
            .chars()
            .next()
            .expect("expected vertex to contain a letter")
            .to_ascii_uppercase();

        let Some(x) = GOBAN_LETTERS.find(letter) else {
            return Err("invalid vertex".to_owned());
        };

        let number: String = vertex.chars().skip(1).collect();
        let mut digits = number.chars();
        let is_well_formed = match (digits.next(), digits.next(), digits.next()) {
            (Some(first), None, None) => first.is_ascii_digit() && first != '0',
            (Some(first), Some(second), None) => first.is_ascii_digit() && second.is_ascii_digit() && first != '0',
            _ => false,
        };
        if !is_well_formed {
            return Err("invalid vertex".to_owned());
        }

        let y = match number.parse::<u32>() {
            Ok(y) => y as usize,
            Err(_) => return Err("invalid vertex".to_owned()),
        };

        if y == 0 {
            return Err("invalid vertex".to_owned());
        }
        Ok(Vertex { x, y: y - 1 })
    }
}

impl Vertex {
    /// Parses a GTP vertex argument (`"pass"` or a coordinate like `"D4"`)
    /// against a board of the given size.
    ///
    /// Returns `Ok(None)` for `pass`, `Ok(Some(vertex))` for a vertex that
    /// fits on the board, and `Err("invalid vertex")` for anything
    /// syntactically malformed or out of range — including the letter `I`,
    /// row `0`, a row beyond `size`, or a column beyond `size`.
    pub fn parse(s: &str, size: usize) -> Result<Option<Self>, String> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(None);
        }

        let vertex = Vertex::from_str(s)?;
        if vertex.x >= size || vertex.y >= size {
            return Err("invalid vertex".to_owned());
        }
        Ok(Some(vertex))
    }
}

/// A collection of Vertices. This is a wrapper type for providing traits such as Display.
#[derive(Debug)]
pub struct Vertices(pub Vec<Vertex>);

impl fmt::Display for Vertices {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, vert) in self.0.iter().enumerate() {
            if index == 0 {
                write!(f, "{}", &vert)?;
            } else {
                write!(f, " {vert}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pass_case_insensitively() {
        assert_eq!(Vertex::parse("pass", 9), Ok(None));
        assert_eq!(Vertex::parse("PASS", 9), Ok(None));
        assert_eq!(Vertex::parse("Pass", 9), Ok(None));
    }

    #[test]
    fn skips_the_letter_i() {
        assert_eq!(Vertex::parse("J9", 9), Ok(Some(Vertex { x: 8, y: 8 })));
        assert!(Vertex::parse("I9", 9).is_err());
        assert!(Vertex::parse("i9", 9).is_err());
    }

    #[test]
    fn rejects_out_of_range_rows_and_columns() {
        assert!(Vertex::parse("A0", 9).is_err());
        assert!(Vertex::parse("A10", 9).is_err());
        assert!(Vertex::parse("Z1", 9).is_err());
        assert!(Vertex::parse("K1", 9).is_err());
    }

    #[test]
    fn rejects_leading_zeros_and_extra_digits() {
        assert!(Vertex::parse("A007", 19).is_err());
        assert!(Vertex::parse("A019", 19).is_err());
        assert!(Vertex::parse("A00", 19).is_err());
    }

    #[test]
    fn format_vertex_inverts_parse_vertex() {
        let size = 19;
        for letter in GOBAN_LETTERS.chars() {
            for row in 1..=size {
                let s = format!("{letter}{row}");
                let parsed = Vertex::parse(&s, size).unwrap().unwrap();
                assert_eq!(parsed.to_string(), s.to_uppercase());
            }
        }
    }
}
