//! Board symmetry transforms.
//!
//! Any Go position can be rotated and/or flipped into 8 variants. Move
//! sequences must be comparable up to these symmetries: two games whose move
//! lists are rotations of each other reach the same position family.

use crate::coords::{Coord, BOARD_SIZE};

/// Half the board, used to zero-center coordinates before rotating.
const CENTER: i16 = (BOARD_SIZE as i16 - 1) / 2;

/// The 8 symmetries of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    Rotate270,
    Rotate180,
    Rotate90,
    Rotate90FlipVertical,
    FlipHorizontal,
    Rotate270FlipHorizontal,
    FlipVertical,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate270,
        Symmetry::Rotate180,
        Symmetry::Rotate90,
        Symmetry::Rotate90FlipVertical,
        Symmetry::FlipHorizontal,
        Symmetry::Rotate270FlipHorizontal,
        Symmetry::FlipVertical,
    ];

    /// 2x2 transform matrix applied to zero-centered coordinates.
    fn matrix(self) -> [[i16; 2]; 2] {
        match self {
            Symmetry::Identity => [[1, 0], [0, 1]],
            Symmetry::Rotate270 => [[0, -1], [1, 0]],
            Symmetry::Rotate180 => [[-1, 0], [0, -1]],
            Symmetry::Rotate90 => [[0, 1], [-1, 0]],
            Symmetry::Rotate90FlipVertical => [[0, -1], [-1, 0]],
            Symmetry::FlipHorizontal => [[-1, 0], [0, 1]],
            Symmetry::Rotate270FlipHorizontal => [[0, 1], [1, 0]],
            Symmetry::FlipVertical => [[1, 0], [0, -1]],
        }
    }

    /// The symmetry that maps this one's output back to the identity.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate270 => Symmetry::Rotate90,
            Symmetry::Rotate90 => Symmetry::Rotate270,
            other => other,
        }
    }

    /// Apply this symmetry to a single coordinate. Passes are never rotated.
    pub fn apply(self, coord: Coord) -> Coord {
        let Some((x, y)) = coord.xy() else {
            return Coord::PASS;
        };

        let m = self.matrix();
        let cx = x as i16 - CENTER;
        let cy = y as i16 - CENTER;
        let tx = m[0][0] * cx + m[0][1] * cy + CENTER;
        let ty = m[1][0] * cx + m[1][1] * cy + CENTER;

        // Signed permutations of in-range coordinates stay in range.
        Coord::from_xy(tx as u8, ty as u8).expect("symmetry keeps coordinates on the board")
    }
}

/// Apply a symmetry to a whole move sequence.
pub fn transform_moves(moves: &[Coord], symmetry: Symmetry) -> Vec<Coord> {
    moves.iter().map(|&coord| symmetry.apply(coord)).collect()
}

/// Find the symmetry that maps move sequence `a` onto `b`, if any.
///
/// Identical sequences map under the identity. Only move order is considered,
/// not position equality.
pub fn symmetry_between(a: &[Coord], b: &[Coord]) -> Option<Symmetry> {
    if a == b {
        return Some(Symmetry::Identity);
    }

    Symmetry::ALL[1..]
        .iter()
        .copied()
        .find(|&symmetry| transform_moves(a, symmetry) == b)
}
