//! Puzzle state: one slot per lattice position with its face colors.

use serde::{Serialize, Serializer};

use crate::{
    ApplyError, Axis, Cubie, CubieSet, FaceColors, FaceLabel, LayerRotation, PerCubie, Position,
    apply_color_permutation,
};

/// Authoritative state of a 3x3x3 puzzle.
///
/// There is one slot per lattice position. Slots and their positions are fixed
/// for the lifetime of the state; [`PuzzleState::apply()`] moves colors
/// between slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    faces: PerCubie<FaceColors>,
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a single cubie.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CubieView {
    /// Slot index.
    pub index: Cubie,
    /// Lattice position.
    pub position: Position,
    /// Color of each face.
    pub faces: FaceColors,
}

impl PuzzleState {
    /// Constructs a solved puzzle.
    pub fn new() -> Self {
        Self {
            faces: PerCubie::from_fn(|cubie| FaceColors::solved_at(cubie.position())),
        }
    }

    /// Returns a view of a single cubie.
    ///
    /// # Panics
    ///
    /// Panics if `cubie` is out of range.
    pub fn cubie_at(&self, cubie: Cubie) -> CubieView {
        CubieView {
            index: cubie,
            position: cubie.position(),
            faces: self.faces[cubie],
        }
    }
    /// Returns a view of a single cubie, or `None` if `cubie` is out of range.
    pub fn get(&self, cubie: Cubie) -> Option<CubieView> {
        cubie.is_valid().then(|| self.cubie_at(cubie))
    }

    /// Iterates over all cubies in slot order.
    pub fn iter(&self) -> impl Iterator<Item = CubieView> + '_ {
        Cubie::iter().map(|cubie| self.cubie_at(cubie))
    }
    /// Iterates over the center of each cubie.
    pub fn positions(&self) -> impl Iterator<Item = (Cubie, cgmath::Vector3<f32>)> + Clone {
        Cubie::iter().map(|cubie| (cubie, cubie.position().to_vector()))
    }

    /// Returns the cubies in a layer.
    pub fn layer(&self, axis: Axis, layer: i8) -> CubieSet {
        Cubie::iter()
            .filter(|cubie| cubie.position().coord(axis) == layer)
            .collect()
    }

    /// Applies a quarter turn.
    ///
    /// Either every affected cubie is updated or, if the rotation is invalid,
    /// none are.
    pub fn apply(&mut self, rotation: &LayerRotation) -> Result<(), ApplyError> {
        self.faces = apply_color_permutation(rotation, &self.faces)?;
        log::debug!("applied {rotation}");
        Ok(())
    }

    /// Returns whether every outer face of the puzzle shows a single color.
    pub fn is_solved(&self) -> bool {
        FaceLabel::ALL.into_iter().all(|face| {
            let mut colors = self
                .iter()
                .filter(|c| face.is_exterior_at(c.position))
                .map(|c| c.faces[face]);
            match colors.next() {
                Some(first) => colors.all(|c| c == first),
                None => true,
            }
        })
    }
}

impl Serialize for PuzzleState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
