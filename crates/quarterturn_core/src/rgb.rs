//! Hex RGB colors.

use std::fmt;
use std::str::FromStr;

use serde::de::Error;

/// 8-bit sRGB color that serializes to a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    /// Parses a hex string like `#ff00ff` or `#f0f`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() == 3 {
            let doubled = s.chars().flat_map(|c| [c, c]).collect::<String>();
            hex::decode_to_slice(doubled, &mut rgb)?;
        } else {
            hex::decode_to_slice(s, &mut rgb)?;
        }
        Ok(Rgb { rgb })
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure white
    pub const WHITE: Rgb = Rgb { rgb: [255; 3] };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rgb_hex() {
        let red = Rgb {
            rgb: [0xff, 0x3d, 0x3d],
        };
        assert_eq!("#ff3d3d", red.to_string());
        assert_eq!(Ok(red), "#ff3d3d".parse());
        assert_eq!(Ok(red), "FF3D3D".parse());
        assert_eq!(Ok(Rgb::WHITE), "#fff".parse());
        assert!("#ff3d".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
    }
}
