//! Error types.

use std::num::ParseIntError;

use thiserror::Error;

use crate::{Axis, Cubie};

/// Error produced when a rotation command cannot be applied to a puzzle
/// state. The state is never modified when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Layer coordinate out of range
    #[error("layer coordinate {0} is out of range")]
    LayerOutOfRange(i8),
    /// Cubie index out of range
    #[error("cubie {0} does not exist")]
    CubieOutOfRange(Cubie),
    /// Cubie is not in the rotating layer
    #[error("cubie {cubie} is not in layer {axis}={layer}")]
    CubieNotInLayer {
        /// Offending cubie.
        cubie: Cubie,
        /// Axis of the rotation.
        axis: Axis,
        /// Layer coordinate of the rotation.
        layer: i8,
    },
    /// Affected set does not cover the whole layer
    ///
    /// This also catches duplicate indices.
    #[error("rotation affects {len} distinct cubies, expected {expected}")]
    WrongLayerSize {
        /// Number of distinct cubies in the rotation.
        len: usize,
        /// Number of cubies in a layer.
        expected: usize,
    },
}

/// Reason that a gesture did not produce a rotation.
///
/// None of these are user-facing errors; the gesture is dropped and nothing
/// happens.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoOp {
    /// Surface normal is too short, not finite, or not dominated by a single
    /// axis
    #[error("surface normal does not identify a single axis")]
    AmbiguousNormal,
    /// Grabbed point is not on the lattice
    #[error("grabbed cubie is not on the lattice")]
    HitOutsideLattice,
    /// Drag ended without a picked cubie
    #[error("no cubie was picked")]
    NoPick,
    /// Drag is shorter than the threshold
    #[error("drag is too short")]
    DragTooShort,
    /// Another rotation is still animating
    #[error("a rotation is already in progress")]
    RotationInProgress,
    /// Layer selection did not find exactly one layer of cubies
    ///
    /// This indicates an internal inconsistency.
    #[error("selected layer has {len} cubies")]
    MalformedLayer {
        /// Number of cubies selected.
        len: usize,
    },
}

/// Error produced when parsing a layer turn such as `y1+`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTurnError {
    /// Empty string
    #[error("empty turn")]
    Empty,
    /// Unknown axis letter
    #[error("unknown axis {0:?}; expected x, y, or z")]
    BadAxis(char),
    /// Missing trailing `+` or `-`
    #[error("missing direction; turn must end with '+' or '-'")]
    MissingSign,
    /// Integer parse error
    #[error("{0}")]
    ParseInt(#[from] ParseIntError),
    /// Layer coordinate out of range
    #[error("layer {0} is out of range; expected -1, 0, or 1")]
    LayerOutOfRange(i8),
}
