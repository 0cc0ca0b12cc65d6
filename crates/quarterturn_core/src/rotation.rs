//! Axes, turn directions, and layer rotation commands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{Display, EnumString, VariantArray};

use crate::{Cubie, FaceLabel, LATTICE_OFFSETS, LAYER_SIZE, ParseTurnError, Position};

/// Set of cubies affected by a rotation, in ascending order.
pub type CubieSet = SmallVec<[Cubie; LAYER_SIZE]>;

/// Principal axis of the puzzle.
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
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Axis {
    /// Left to right.
    X = 0,
    /// Bottom to top.
    Y = 1,
    /// Back to front.
    Z = 2,
}

impl Axis {
    /// Returns the four faces orthogonal to the axis.
    ///
    /// A [`Sign::Positive`] quarter turn moves the color on `ring[i]` to
    /// `ring[i + 1]`, which is a right-handed turn about the positive axis.
    pub fn ring(self) -> [FaceLabel; 4] {
        use FaceLabel::*;

        match self {
            Axis::X => [Top, Front, Bottom, Back],
            Axis::Y => [Front, Right, Back, Left],
            Axis::Z => [Right, Top, Left, Bottom],
        }
    }

    /// Returns the face that the color on `face` moves to after a quarter turn
    /// about this axis. Faces parallel to the axis are unchanged.
    pub fn turn_face(self, face: FaceLabel, sign: Sign) -> FaceLabel {
        let ring = self.ring();
        match ring.iter().position(|&f| f == face) {
            Some(i) => match sign {
                Sign::Positive => ring[(i + 1) % 4],
                Sign::Negative => ring[(i + 3) % 4],
            },
            None => face,
        }
    }

    /// Returns the position that a cubie at `pos` moves to after a quarter
    /// turn about this axis.
    pub fn turn_position(self, pos: Position, sign: Sign) -> Position {
        let [x, y, z] = pos.0;
        Position(match (self, sign) {
            (Axis::X, Sign::Positive) => [x, -z, y],
            (Axis::X, Sign::Negative) => [x, z, -y],
            (Axis::Y, Sign::Positive) => [z, y, -x],
            (Axis::Y, Sign::Negative) => [-z, y, x],
            (Axis::Z, Sign::Positive) => [-y, x, z],
            (Axis::Z, Sign::Negative) => [y, -x, z],
        })
    }
}

/// Direction of a quarter turn.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// Counterclockwise when looking from the positive end of the axis.
    Positive,
    /// Clockwise when looking from the positive end of the axis.
    Negative,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => write!(f, "+"),
            Sign::Negative => write!(f, "-"),
        }
    }
}

impl std::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        self.flip()
    }
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
    /// Returns `1` or `-1`.
    pub fn to_i8(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
    /// Returns `1.0` or `-1.0`.
    pub fn to_f32(self) -> f32 {
        self.to_i8() as f32
    }
}

/// Quarter turn of a single layer, named by axis, layer coordinate, and
/// direction.
///
/// Written as the axis, the layer coordinate, and the sign: `y1+`, `x-1-`,
/// `z0+`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerTurn {
    /// Axis of rotation.
    pub axis: Axis,
    /// Coordinate of the layer along `axis`, in `{-1, 0, 1}`.
    pub layer: i8,
    /// Direction of the turn.
    pub sign: Sign,
}

impl fmt::Display for LayerTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { axis, layer, sign } = self;
        write!(f, "{axis}{layer}{sign}")
    }
}

impl FromStr for LayerTurn {
    type Err = ParseTurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let axis = chars.next().ok_or(ParseTurnError::Empty)?;
        let axis = axis
            .to_string()
            .parse::<Axis>()
            .map_err(|_| ParseTurnError::BadAxis(axis))?;

        let rest = chars.as_str();
        let (layer_str, sign) = if let Some(layer_str) = rest.strip_suffix('+') {
            (layer_str, Sign::Positive)
        } else if let Some(layer_str) = rest.strip_suffix('-') {
            (layer_str, Sign::Negative)
        } else {
            return Err(ParseTurnError::MissingSign);
        };

        let layer = layer_str.parse::<i8>()?;
        if !LATTICE_OFFSETS.contains(&layer) {
            return Err(ParseTurnError::LayerOutOfRange(layer));
        }

        Ok(Self { axis, layer, sign })
    }
}

impl LayerTurn {
    /// Returns the inverse turn.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            sign: self.sign.flip(),
            ..self
        }
    }

    /// Expands the turn into a full rotation command on the fixed lattice.
    pub fn to_rotation(self) -> LayerRotation {
        LayerRotation {
            axis: self.axis,
            layer: self.layer,
            sign: self.sign,
            affected: Cubie::iter()
                .filter(|c| c.position().coord(self.axis) == self.layer)
                .collect(),
        }
    }
}

/// Command to rotate one layer by a quarter turn.
///
/// This is derived per gesture and never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerRotation {
    /// Axis of rotation.
    pub axis: Axis,
    /// Coordinate of the layer along `axis`, in `{-1, 0, 1}`.
    pub layer: i8,
    /// Direction of the turn.
    pub sign: Sign,
    /// Cubies whose coordinate along `axis` equals `layer`.
    pub affected: CubieSet,
}

impl fmt::Display for LayerRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.turn())
    }
}

impl LayerRotation {
    /// Returns the name of the turn, without the affected cubies.
    pub fn turn(&self) -> LayerTurn {
        LayerTurn {
            axis: self.axis,
            layer: self.layer,
            sign: self.sign,
        }
    }

    /// Returns the inverse rotation, which affects the same cubies.
    #[must_use]
    pub fn rev(&self) -> Self {
        Self {
            sign: self.sign.flip(),
            ..self.clone()
        }
    }

    /// Returns the final rotation angle in radians.
    pub fn angle(&self) -> f32 {
        self.sign.to_f32() * std::f32::consts::FRAC_PI_2
    }
}
