//! State model and rotation engine for a 3x3x3 twisty puzzle driven by drag
//! gestures.
//!
//! [`PuzzleState`] owns the 27 cubies and their face colors. The functions in
//! [`engine`] turn a picked surface normal and a screen-space drag into a
//! [`LayerRotation`], which the caller animates and then commits with
//! [`PuzzleState::apply()`].

mod cubie;
pub mod engine;
mod errors;
mod faces;
mod rgb;
mod rotation;
mod state;

pub use cubie::{CUBIE_COUNT, Cubie, LATTICE_OFFSETS, LAYER_SIZE, PerCubie, Position};
pub use engine::{
    GestureInput, ResolveParams, apply_color_permutation, axis_from_normal, direction_from_drag,
    layer_coordinate_from, resolve, select_layer,
};
pub use errors::{ApplyError, NoOp, ParseTurnError};
pub use faces::{Color, FaceColors, FaceLabel};
pub use rgb::Rgb;
pub use rotation::{Axis, CubieSet, LayerRotation, LayerTurn, Sign};
pub use state::{CubieView, PuzzleState};

/// Re-export of `cgmath`.
pub use cgmath;

/// Version string such as `quarterturn_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
