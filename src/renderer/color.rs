/// Represents a 24-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }
}

/// Semantic color names used by every sprite layout
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColorKey {
    Skin,
    Hair,
    Shirt,
    Pants,
    Eyes,
    Shoes,
    Blood,
}

pub const PALETTE: [ColorKey; 7] = [
    ColorKey::Skin,
    ColorKey::Hair,
    ColorKey::Shirt,
    ColorKey::Pants,
    ColorKey::Eyes,
    ColorKey::Shoes,
    ColorKey::Blood,
];

impl ColorKey {
    pub const fn rgb(self) -> RgbColor {
        match self {
            ColorKey::Skin => RgbColor(255, 176, 138),
            ColorKey::Hair => RgbColor(58, 31, 15),
            ColorKey::Shirt => RgbColor(76, 125, 255),
            ColorKey::Pants => RgbColor(43, 47, 79),
            ColorKey::Eyes => RgbColor(0, 0, 0),
            ColorKey::Shoes => RgbColor(34, 34, 34),
            ColorKey::Blood => RgbColor(204, 0, 0),
        }
    }

    /// Reverse palette lookup. Returns None for colors outside the palette.
    pub fn from_rgb(color: RgbColor) -> Option<ColorKey> {
        PALETTE.into_iter().find(|key| key.rgb() == color)
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorKey::Skin => "skin",
            ColorKey::Hair => "hair",
            ColorKey::Shirt => "shirt",
            ColorKey::Pants => "pants",
            ColorKey::Eyes => "eyes",
            ColorKey::Shoes => "shoes",
            ColorKey::Blood => "blood",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a.rgb(), b.rgb(), "{} and {} share a color", a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(ColorKey::from_rgb(RgbColor(204, 0, 0)), Some(ColorKey::Blood));
        assert_eq!(ColorKey::from_rgb(RgbColor(34, 34, 34)), Some(ColorKey::Shoes));
        assert_eq!(ColorKey::from_rgb(RgbColor(1, 2, 3)), None);
    }

    #[test]
    fn test_rgba_is_opaque() {
        assert_eq!(ColorKey::Hair.rgb().to_rgba(), [58, 31, 15, 255]);
    }
}
