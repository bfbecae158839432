//! Board coordinates and their `e5`-style text form.

use crate::CoordParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Zero-based `(row, col)` position.
///
/// Ordering is row-major, matching the enumeration order of
/// [`Board::valid_moves`](crate::Board::valid_moves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts by a signed offset, `None` if either index would go negative.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match u8::try_from(self.col) {
            Ok(col) if col < 26 => write!(f, "{}{}", char::from(b'a' + col), self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Parses `e5` as row 4, column 4. Case-insensitive; bounds are the
    /// board's concern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let column = chars.next().ok_or(CoordParseError::Empty)?.to_ascii_lowercase();
        if !column.is_ascii_lowercase() {
            return Err(CoordParseError::BadColumn { found: column });
        }

        let rest = chars.as_str().trim();
        let row = match rest.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                return Err(CoordParseError::BadRow {
                    found: rest.to_string(),
                });
            }
        };

        Ok(Self {
            row,
            col: usize::from(column as u8 - b'a'),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spreadsheet_notation() {
        assert_eq!("e5".parse(), Ok(Coord::new(4, 4)));
        assert_eq!("a1".parse(), Ok(Coord::new(0, 0)));
        assert_eq!(" C12 ".parse(), Ok(Coord::new(11, 2)));
        assert_eq!("b 3".parse(), Ok(Coord::new(2, 1)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Coord>(), Err(CoordParseError::Empty));
        assert_eq!(
            "5e".parse::<Coord>(),
            Err(CoordParseError::BadColumn { found: '5' })
        );
        assert!(matches!("e".parse::<Coord>(), Err(CoordParseError::BadRow { .. })));
        assert!(matches!("e0".parse::<Coord>(), Err(CoordParseError::BadRow { .. })));
        assert!(matches!("ex".parse::<Coord>(), Err(CoordParseError::BadRow { .. })));
        assert!(matches!("é5".parse::<Coord>(), Err(CoordParseError::BadColumn { .. })));
    }

    #[test]
    fn test_display_matches_parse() {
        assert_eq!(Coord::new(4, 4).to_string(), "e5");
        assert_eq!(Coord::new(9, 0).to_string(), "a10");
        let coord: Coord = Coord::new(7, 3).to_string().parse().unwrap();
        assert_eq!(coord, Coord::new(7, 3));
    }

    #[test]
    fn test_offset_stops_at_zero() {
        assert_eq!(Coord::new(0, 3).offset(-1, 0), None);
        assert_eq!(Coord::new(2, 3).offset(-1, 1), Some(Coord::new(1, 4)));
    }
}
