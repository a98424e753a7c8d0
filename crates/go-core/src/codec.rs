//! Move-list codec: converts between a move sequence and the canonical query
//! key used by the next-move statistics service.
//!
//! `[pd, dp, dd]` encodes to `pd+dp+dd`. The empty sequence encodes to the
//! empty string, which keys the opening position.

use crate::coords::Coord;

/// Separator between move tokens in an encoded key.
pub const MOVE_DELIMITER: char = '+';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceFormatError {
    #[error("invalid move token '{token}' at index {index}")]
    InvalidToken { index: usize, token: String },
}

/// Encode a move sequence into its canonical query key.
pub fn encode_moves(moves: &[Coord]) -> String {
    let tokens: Vec<String> = moves.iter().map(Coord::to_string).collect();
    tokens.join(&MOVE_DELIMITER.to_string())
}

/// Decode a query key back into the move sequence it was built from.
///
/// Fails on any malformed token; a key never decodes partially.
pub fn decode_moves(key: &str) -> Result<Vec<Coord>, SequenceFormatError> {
    if key.is_empty() {
        return Ok(Vec::new());
    }

    key.split(MOVE_DELIMITER)
        .enumerate()
        .map(|(index, token)| {
            Coord::parse(token).map_err(|_| SequenceFormatError::InvalidToken {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}
