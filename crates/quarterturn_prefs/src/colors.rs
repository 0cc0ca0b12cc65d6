use quarterturn_core::{Color, FaceColors, Rgb};
use serde::{Deserialize, Serialize};

/// Display color for each sticker color.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorScheme {
    pub white: Rgb,
    pub yellow: Rgb,
    pub red: Rgb,
    pub orange: Rgb,
    pub green: Rgb,
    pub blue: Rgb,
    pub neutral: Rgb,
}
impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            white: Rgb::WHITE,
            yellow: Rgb {
                rgb: [0xff, 0xd5, 0x00],
            },
            red: Rgb {
                rgb: [0xff, 0x3d, 0x3d],
            },
            orange: Rgb {
                rgb: [0xff, 0x8c, 0x1a],
            },
            green: Rgb {
                rgb: [0x2e, 0xcc, 0x40],
            },
            blue: Rgb {
                rgb: [0x1f, 0x6f, 0xeb],
            },
            neutral: Rgb {
                rgb: [0x11, 0x11, 0x11],
            },
        }
    }
}
impl ColorScheme {
    pub fn rgb(&self, color: Color) -> Rgb {
        match color {
            Color::White => self.white,
            Color::Yellow => self.yellow,
            Color::Red => self.red,
            Color::Orange => self.orange,
            Color::Green => self.green,
            Color::Blue => self.blue,
            Color::Neutral => self.neutral,
        }
    }

    /// Returns the material colors for a cubie, in the face order of a unit
    /// box mesh.
    pub fn materials(&self, faces: &FaceColors) -> [Rgb; 6] {
        faces.in_material_order().map(|c| self.rgb(c))
    }
}
