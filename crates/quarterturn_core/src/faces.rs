//! Face labels and sticker colors.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::{Axis, Position, Sign};

/// One of the six fixed directions on a cubie.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FaceLabel {
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Front,
    /// -Z
    Back,
}

impl FaceLabel {
    /// All face labels, in the material order of a unit box mesh.
    pub const ALL: [FaceLabel; 6] = [
        FaceLabel::Right,
        FaceLabel::Left,
        FaceLabel::Top,
        FaceLabel::Bottom,
        FaceLabel::Front,
        FaceLabel::Back,
    ];

    /// Returns the axis that the face points along.
    pub fn axis(self) -> Axis {
        match self {
            FaceLabel::Right | FaceLabel::Left => Axis::X,
            FaceLabel::Top | FaceLabel::Bottom => Axis::Y,
            FaceLabel::Front | FaceLabel::Back => Axis::Z,
        }
    }
    /// Returns the direction that the face points along its axis.
    pub fn sign(self) -> Sign {
        match self {
            FaceLabel::Right | FaceLabel::Top | FaceLabel::Front => Sign::Positive,
            FaceLabel::Left | FaceLabel::Bottom | FaceLabel::Back => Sign::Negative,
        }
    }
    /// Returns the face pointing the opposite direction.
    pub fn opposite(self) -> FaceLabel {
        match self {
            FaceLabel::Right => FaceLabel::Left,
            FaceLabel::Left => FaceLabel::Right,
            FaceLabel::Top => FaceLabel::Bottom,
            FaceLabel::Bottom => FaceLabel::Top,
            FaceLabel::Front => FaceLabel::Back,
            FaceLabel::Back => FaceLabel::Front,
        }
    }

    /// Returns the index of the face in [`FaceLabel::ALL`].
    pub fn material_index(self) -> usize {
        self as usize
    }

    /// Returns whether this face is on the exterior of the puzzle for a cubie
    /// at `pos`.
    pub fn is_exterior_at(self, pos: Position) -> bool {
        pos.coord(self.axis()) == self.sign().to_i8()
    }

    /// Returns the color of this face in the solved state.
    pub fn solved_color(self) -> Color {
        match self {
            FaceLabel::Right => Color::Blue,
            FaceLabel::Left => Color::Green,
            FaceLabel::Top => Color::White,
            FaceLabel::Bottom => Color::Yellow,
            FaceLabel::Front => Color::Red,
            FaceLabel::Back => Color::Orange,
        }
    }
}

/// Sticker color.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    /// Top face.
    White,
    /// Bottom face.
    Yellow,
    /// Front face.
    Red,
    /// Back face.
    Orange,
    /// Left face.
    Green,
    /// Right face.
    Blue,
    /// Color of interior faces, which are never visible on a whole puzzle.
    #[default]
    Neutral,
}

/// Color of each face of a single cubie.
#[derive(Serialize, Deserialize, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FaceColors {
    #[serde(with = "face_map")]
    colors: [Color; 6],
}

impl fmt::Debug for FaceColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Index<FaceLabel> for FaceColors {
    type Output = Color;

    fn index(&self, face: FaceLabel) -> &Self::Output {
        &self.colors[face.material_index()]
    }
}
impl IndexMut<FaceLabel> for FaceColors {
    fn index_mut(&mut self, face: FaceLabel) -> &mut Self::Output {
        &mut self.colors[face.material_index()]
    }
}

impl FaceColors {
    /// Returns the solved coloring for a cubie at `pos`: exterior faces get
    /// their face's color and interior faces are [`Color::Neutral`].
    pub fn solved_at(pos: Position) -> Self {
        Self::from_fn(|face| {
            if face.is_exterior_at(pos) {
                face.solved_color()
            } else {
                Color::Neutral
            }
        })
    }

    /// Constructs a mapping by calling `f` for each face.
    pub fn from_fn(mut f: impl FnMut(FaceLabel) -> Color) -> Self {
        Self {
            colors: FaceLabel::ALL.map(&mut f),
        }
    }

    /// Returns the color of `face`.
    pub fn get(&self, face: FaceLabel) -> Color {
        self[face]
    }

    /// Iterates over faces and their colors in material order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceLabel, Color)> + '_ {
        FaceLabel::ALL.into_iter().zip(self.colors)
    }

    /// Returns the colors in the material order of a unit box mesh.
    pub fn in_material_order(&self) -> [Color; 6] {
        self.colors
    }
}

/// Serializes face colors as a map from face name to color name.
mod face_map {
    use std::collections::BTreeMap;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Color, FaceLabel};

    pub fn serialize<S: Serializer>(colors: &[Color; 6], serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<FaceLabel, Color> = FaceLabel::ALL.into_iter().zip(*colors).collect();
        map.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[Color; 6], D::Error> {
        let map = BTreeMap::<FaceLabel, Color>::deserialize(deserializer)?;
        let mut ret = [Color::Neutral; 6];
        for face in FaceLabel::ALL {
            ret[face.material_index()] = *map
                .get(&face)
                .ok_or_else(|| D::Error::custom(format!("missing color for face {face}")))?;
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_material_order_matches_all() {
        for (i, face) in FaceLabel::ALL.into_iter().enumerate() {
            assert_eq!(i, face.material_index());
        }
        assert_eq!(FaceLabel::VARIANTS, &FaceLabel::ALL);
    }

    #[test]
    fn test_opposites() {
        for face in FaceLabel::ALL {
            assert_eq!(face.axis(), face.opposite().axis());
            assert_ne!(face.sign(), face.opposite().sign());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test]
    fn test_solved_corner() {
        let colors = FaceColors::solved_at(Position([1, 1, 1]));
        assert_eq!(Color::Blue, colors[FaceLabel::Right]);
        assert_eq!(Color::White, colors[FaceLabel::Top]);
        assert_eq!(Color::Red, colors[FaceLabel::Front]);
        assert_eq!(Color::Neutral, colors[FaceLabel::Left]);
        assert_eq!(Color::Neutral, colors[FaceLabel::Bottom]);
        assert_eq!(Color::Neutral, colors[FaceLabel::Back]);
    }

    #[test]
    fn test_center_cubie_is_all_neutral() {
        let colors = FaceColors::solved_at(Position([0, 0, 0]));
        assert_eq!([Color::Neutral; 6], colors.in_material_order());
    }

    #[test]
    fn test_face_names() {
        assert_eq!("front", FaceLabel::Front.to_string());
        assert_eq!(Ok(FaceLabel::Bottom), "bottom".parse());
        assert_eq!(Ok(Color::Orange), "orange".parse());
    }
}
