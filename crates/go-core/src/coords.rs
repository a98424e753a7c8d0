//! Go board coordinates.
//!
//! A coordinate is two letters `a`-`s`: column first (left to right), then
//! row (top to bottom), so `aa` is the upper-left corner of the board. `tt`
//! is a pass. Some SGF tooling emits uppercase tokens; parsing normalizes to
//! lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 19;

const PASS_TOKEN: [u8; 2] = *b"tt";

/// One board intersection, or a pass.
///
/// Equality is exact token match; ordering is lexicographic on the token,
/// which gives the canonical tie-break order used by the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord([u8; 2]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate '{0}'")]
pub struct InvalidCoord(pub String);

impl Coord {
    /// The pass move.
    pub const PASS: Coord = Coord(PASS_TOKEN);

    /// Parse a two-character token. Case-insensitive; `tt` is a pass.
    pub fn parse(token: &str) -> Result<Self, InvalidCoord> {
        let bytes = token.as_bytes();
        if bytes.len() != 2 {
            return Err(InvalidCoord(token.to_string()));
        }

        let col = bytes[0].to_ascii_lowercase();
        let row = bytes[1].to_ascii_lowercase();

        if [col, row] == PASS_TOKEN {
            return Ok(Coord::PASS);
        }

        if !(b'a'..=b's').contains(&col) || !(b'a'..=b's').contains(&row) {
            return Err(InvalidCoord(token.to_string()));
        }

        Ok(Coord([col, row]))
    }

    /// Build a coordinate from 0-based column/row integers.
    pub fn from_xy(x: u8, y: u8) -> Result<Self, InvalidCoord> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(InvalidCoord(format!("[{x}, {y}]")));
        }
        Ok(Coord([b'a' + x, b'a' + y]))
    }

    /// 0-based column/row, upper-left is (0, 0). `None` for a pass.
    pub fn xy(&self) -> Option<(u8, u8)> {
        if self.is_pass() {
            None
        } else {
            Some((self.0[0] - b'a', self.0[1] - b'a'))
        }
    }

    pub fn is_pass(&self) -> bool {
        self.0 == PASS_TOKEN
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

impl FromStr for Coord {
    type Err = InvalidCoord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::parse(s)
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Coord::parse(&token).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let coord = Coord::parse("pd").unwrap();
        assert_eq!(coord.to_string(), "pd");
        assert_eq!(coord.xy(), Some((15, 3)));
    }

    #[test]
    fn test_parse_normalizes_case() {
        assert_eq!(Coord::parse("PD").unwrap(), Coord::parse("pd").unwrap());
    }

    #[test]
    fn test_pass() {
        let pass = Coord::parse("tt").unwrap();
        assert!(pass.is_pass());
        assert_eq!(pass.xy(), None);
        assert_eq!(pass, Coord::PASS);
    }

    #[test]
    fn test_rejects_bad_tokens() {
        for bad in ["", "p", "pdq", "zz", "t9", "a ", "xt"] {
            assert!(Coord::parse(bad).is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_from_xy_round_trip() {
        let coord = Coord::from_xy(0, 18).unwrap();
        assert_eq!(coord.to_string(), "as");
        assert_eq!(coord.xy(), Some((0, 18)));
        assert!(Coord::from_xy(19, 0).is_err());
    }

    #[test]
    fn test_token_ordering() {
        assert!(Coord::parse("aa").unwrap() < Coord::parse("ab").unwrap());
        assert!(Coord::parse("dd").unwrap() < Coord::parse("pd").unwrap());
    }
}
