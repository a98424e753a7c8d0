//! Core Go board domain: coordinates, the move-list codec used to key the
//! next-move statistics index, and the 8 board symmetry transforms.

pub mod codec;
pub mod coords;
pub mod transform;

pub use codec::{decode_moves, encode_moves, SequenceFormatError};
pub use coords::{Coord, InvalidCoord, BOARD_SIZE};
pub use transform::{symmetry_between, transform_moves, Symmetry};
