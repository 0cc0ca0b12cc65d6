//! Cubie indices and lattice positions.

use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::Axis;

/// Number of cubies in a 3x3x3 puzzle.
pub const CUBIE_COUNT: usize = 27;

/// Number of cubies in a single layer.
pub const LAYER_SIZE: usize = 9;

/// Coordinates along one axis, in enumeration order.
pub const LATTICE_OFFSETS: [i8; 3] = [-1, 0, 1];

/// Index of a cubie slot.
///
/// Slots are numbered once, at construction, by enumerating positions with
/// `x` outermost and `z` innermost. A slot never moves; rotations move colors
/// between slots.
#[derive(
    Serialize, Deserialize, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Cubie(pub u8);

impl fmt::Debug for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.0)
    }
}
impl fmt::Display for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Cubie {
    /// Returns the cubie with the given index, or `None` if it is out of
    /// range.
    pub fn try_from_index(index: usize) -> Option<Self> {
        (index < CUBIE_COUNT).then(|| Self(index as u8))
    }
    /// Returns the index of the cubie.
    pub fn to_index(self) -> usize {
        self.0 as usize
    }
    /// Returns whether the index is in range.
    pub fn is_valid(self) -> bool {
        self.to_index() < CUBIE_COUNT
    }

    /// Iterates over all cubies in order.
    pub fn iter() -> impl Iterator<Item = Cubie> + Clone {
        (0..CUBIE_COUNT as u8).map(Cubie)
    }

    /// Returns the lattice position of the cubie slot.
    pub fn position(self) -> Position {
        let i = self.0 as i8;
        Position([i / 9 - 1, i / 3 % 3 - 1, i % 3 - 1])
    }
}

/// Lattice position of a cubie, with each coordinate in `{-1, 0, 1}`.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Position(pub [i8; 3]);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

impl Position {
    /// Returns the coordinate along `axis`.
    pub fn coord(self, axis: Axis) -> i8 {
        self.0[axis as usize]
    }

    /// Returns whether every coordinate is in `{-1, 0, 1}`.
    pub fn is_on_lattice(self) -> bool {
        self.0.iter().all(|c| LATTICE_OFFSETS.contains(c))
    }

    /// Returns the cubie slot at this position, or `None` if the position is
    /// off the lattice.
    pub fn cubie(self) -> Option<Cubie> {
        if !self.is_on_lattice() {
            return None;
        }
        let [x, y, z] = self.0.map(|c| (c + 1) as u8);
        Some(Cubie(x * 9 + y * 3 + z))
    }

    /// Returns the position as a floating-point vector, for the render
    /// collaborator.
    pub fn to_vector(self) -> cgmath::Vector3<f32> {
        let [x, y, z] = self.0.map(f32::from);
        cgmath::vec3(x, y, z)
    }
}

/// Fixed-size collection with one element per cubie slot.
///
/// The only constructor is [`PerCubie::from_fn()`], so the length is always
/// [`CUBIE_COUNT`].
#[derive(Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PerCubie<T>(Vec<T>);

impl<T: fmt::Debug> fmt::Debug for PerCubie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contents = self.0.iter().map(|v| format!("{v:?}")).join(", ");
        write!(f, "[{contents}]")
    }
}

impl<T> Index<Cubie> for PerCubie<T> {
    type Output = T;

    fn index(&self, index: Cubie) -> &Self::Output {
        &self.0[index.to_index()]
    }
}
impl<T> IndexMut<Cubie> for PerCubie<T> {
    fn index_mut(&mut self, index: Cubie) -> &mut Self::Output {
        &mut self.0[index.to_index()]
    }
}

impl<T> PerCubie<T> {
    /// Constructs a collection by calling `f` for each cubie in order.
    pub fn from_fn(f: impl FnMut(Cubie) -> T) -> Self {
        Self(Cubie::iter().map(f).collect())
    }

    /// Returns the element for `cubie`, or `None` if it is out of range.
    pub fn get(&self, cubie: Cubie) -> Option<&T> {
        self.0.get(cubie.to_index())
    }

    /// Iterates over cubies and their elements.
    pub fn iter(&self) -> impl Iterator<Item = (Cubie, &T)> {
        Cubie::iter().zip(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cubie_position_roundtrip() {
        for cubie in Cubie::iter() {
            assert_eq!(Some(cubie), cubie.position().cubie());
        }
    }

    #[test]
    fn test_enumeration_order() {
        assert_eq!(Position([-1, -1, -1]), Cubie(0).position());
        assert_eq!(Position([-1, -1, 0]), Cubie(1).position());
        assert_eq!(Position([-1, 0, -1]), Cubie(3).position());
        assert_eq!(Position([0, -1, -1]), Cubie(9).position());
        assert_eq!(Position([0, 0, 0]), Cubie(13).position());
        assert_eq!(Position([1, 1, 1]), Cubie(26).position());
    }

    #[test]
    fn test_off_lattice() {
        assert_eq!(None, Position([2, 0, 0]).cubie());
        assert_eq!(None, Cubie::try_from_index(27));
        assert!(!Cubie(27).is_valid());
    }
}
