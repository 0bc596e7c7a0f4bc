//! Interface to the font engine that owns faces and glyphs.
//!
//! The engine itself (file parsing, scaling, hinting) lives elsewhere.
//! Layout only needs the handful of queries described by [`Face`].

use core::ops::BitOr;

use outline_types::{BoundingBox, F26Dot6, Fixed, Point};

/// A sized font face as seen by the layout engine.
pub trait Face {
    /// Error reported by the engine when a query fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the encoding of the currently selected character map, if
    /// any.
    fn charmap_encoding(&self) -> Option<Encoding>;

    /// Maps a character code to a glyph index through the selected
    /// character map. Returns 0 for unmapped characters.
    fn char_to_glyph(&self, code_point: u32) -> u32;

    /// Returns true if the face carries pair kerning data.
    fn has_kerning(&self) -> bool;

    /// Returns the kerning vector, in 26.6, for the given pair of glyphs.
    fn kerning(
        &self,
        left: u32,
        right: u32,
        mode: KerningMode,
    ) -> Result<Point<F26Dot6>, Self::Error>;

    /// Distance from the baseline to the top of the face, in 26.6.
    fn ascender(&self) -> F26Dot6;

    /// Distance from the baseline to the bottom of the face, in 26.6.
    /// Usually negative.
    fn descender(&self) -> F26Dot6;

    /// Loads the glyph with the given index and reports its metrics.
    fn load_glyph(&self, glyph_index: u32, flags: LoadFlags)
        -> Result<GlyphMetrics, Self::Error>;
}

/// Metrics of a loaded glyph.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct GlyphMetrics {
    /// Exact bounding box of the glyph outline in 26.6.
    pub bbox: BoundingBox<F26Dot6>,
    /// Advance vector in 16.16.
    pub advance: Point<Fixed>,
}

/// Character map encodings, identified by FreeType's four byte tags.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    Unicode,
    Symbol,
    Sjis,
    Prc,
    Big5,
    Wansung,
    Johab,
    AdobeStandard,
    AdobeExpert,
    AdobeCustom,
    AdobeLatin1,
    OldLatin2,
    AppleRoman,
    /// Any other tag.
    Other(u32),
}

const fn tag(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

impl Encoding {
    /// Creates an encoding from its four byte tag.
    pub fn from_tag(value: u32) -> Self {
        match &value.to_be_bytes() {
            b"unic" => Self::Unicode,
            b"symb" => Self::Symbol,
            b"sjis" => Self::Sjis,
            b"gb  " => Self::Prc,
            b"big5" => Self::Big5,
            b"wans" => Self::Wansung,
            b"joha" => Self::Johab,
            b"ADOB" => Self::AdobeStandard,
            b"ADBE" => Self::AdobeExpert,
            b"ADBC" => Self::AdobeCustom,
            b"lat1" => Self::AdobeLatin1,
            b"lat2" => Self::OldLatin2,
            b"armn" => Self::AppleRoman,
            _ => Self::Other(value),
        }
    }

    /// Returns the four byte tag for the encoding.
    pub const fn to_tag(self) -> u32 {
        match self {
            Self::Unicode => tag(b"unic"),
            Self::Symbol => tag(b"symb"),
            Self::Sjis => tag(b"sjis"),
            Self::Prc => tag(b"gb  "),
            Self::Big5 => tag(b"big5"),
            Self::Wansung => tag(b"wans"),
            Self::Johab => tag(b"joha"),
            Self::AdobeStandard => tag(b"ADOB"),
            Self::AdobeExpert => tag(b"ADBE"),
            Self::AdobeCustom => tag(b"ADBC"),
            Self::AdobeLatin1 => tag(b"lat1"),
            Self::OldLatin2 => tag(b"lat2"),
            Self::AppleRoman => tag(b"armn"),
            Self::Other(value) => value,
        }
    }
}

/// Precision of kerning values requested from the engine.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum KerningMode {
    /// Scaled and grid-fitted distances.
    #[default]
    Default,
    /// Scaled but not grid-fitted distances.
    Unfitted,
    /// Distances in font units.
    Unscaled,
}

impl KerningMode {
    /// Selects the kerning mode matching the way glyphs are loaded.
    pub fn from_load_flags(flags: LoadFlags) -> Self {
        if flags.contains(LoadFlags::NO_SCALE) {
            Self::Unscaled
        } else if flags.contains(LoadFlags::NO_HINTING) {
            Self::Unfitted
        } else {
            Self::Default
        }
    }
}

/// Flags controlling how glyphs are loaded, using FreeType's bit values.
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadFlags(u32);

impl LoadFlags {
    pub const DEFAULT: Self = Self(0);
    pub const NO_SCALE: Self = Self(1 << 0);
    pub const NO_HINTING: Self = Self(1 << 1);
    pub const RENDER: Self = Self(1 << 2);
    pub const NO_BITMAP: Self = Self(1 << 3);
    pub const VERTICAL_LAYOUT: Self = Self(1 << 4);
    pub const FORCE_AUTOHINT: Self = Self(1 << 5);
    pub const CROP_BITMAP: Self = Self(1 << 6);
    pub const PEDANTIC: Self = Self(1 << 7);
    pub const IGNORE_GLOBAL_ADVANCE_WIDTH: Self = Self(1 << 9);
    pub const NO_RECURSE: Self = Self(1 << 10);
    pub const IGNORE_TRANSFORM: Self = Self(1 << 11);
    pub const MONOCHROME: Self = Self(1 << 12);
    pub const LINEAR_DESIGN: Self = Self(1 << 13);
    pub const NO_AUTOHINT: Self = Self(1 << 15);

    /// Creates flags from raw bits. Unknown bits are kept and passed on
    /// to the engine.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if all flags in `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LoadFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
