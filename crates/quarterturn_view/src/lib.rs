//! Gesture and animation controller for Quarterturn.
//!
//! [`CubeSimulation`] turns pointer events into layer rotations, animates
//! them one step at a time, and commits each rotation to the puzzle state once
//! its animation finishes. Rendering is left to the caller, which reads
//! [`CubeSimulation::render_angle()`] and [`CubeSimulation::cubie_at()`] each
//! frame.

mod animation;
mod simulation;

pub use animation::TwistAnimation;
pub use simulation::{CubeSimulation, GestureState, Pick};
