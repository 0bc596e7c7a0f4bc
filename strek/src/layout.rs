//! Simple horizontal text layout.
//!
//! Places one glyph per character along the baseline, applying pair
//! kerning when the face provides it. There is no shaping, bidi or line
//! breaking.

use outline_types::{
    f26dot6_to_fixed, fixed_to_26dot6, from_16dot16, from_26dot6, BoundingBox, Point,
};

use crate::{
    error::{Error, Result},
    face::{Encoding, Face, KerningMode, LoadFlags},
};

/// Glyph placements and extents for a run of text.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    glyph_indices: Vec<u32>,
    positions: Vec<Point<f64>>,
    ink_bbox: BoundingBox<f64>,
    layout_bbox: BoundingBox<f64>,
    advance: f64,
}

impl Layout {
    /// Lays out the characters of `text`.
    ///
    /// The face must have a Unicode character map selected.
    pub fn new<F: Face>(face: &F, text: &str, flags: LoadFlags) -> Result<Self> {
        Self::from_code_points(face, text.chars().map(u32::from), flags)
    }

    /// Lays out a sequence of Unicode code points.
    pub fn from_code_points<F: Face>(
        face: &F,
        code_points: impl IntoIterator<Item = u32>,
        flags: LoadFlags,
    ) -> Result<Self> {
        let encoding = face.charmap_encoding();
        if encoding != Some(Encoding::Unicode) {
            return Err(Error::UnsupportedEncoding(encoding));
        }
        let kerning_mode = KerningMode::from_load_flags(flags);
        let use_kerning = face.has_kerning();
        let code_points = code_points.into_iter();
        let (len_hint, _) = code_points.size_hint();
        let mut glyph_indices = Vec::with_capacity(len_hint);
        let mut positions = Vec::with_capacity(len_hint);
        // pen is in 16.16, boxes in 26.6
        let mut pen: Point<i64> = Point::default();
        let mut ink: Option<BoundingBox<i64>> = None;
        let mut prev_glyph = 0;
        for code_point in code_points {
            let glyph_index = face.char_to_glyph(code_point);
            if glyph_index == 0 {
                log::trace!("no glyph for U+{code_point:04X}");
            }
            if use_kerning && prev_glyph != 0 && glyph_index != 0 {
                let delta = face
                    .kerning(prev_glyph, glyph_index, kerning_mode)
                    .map_err(Error::font_engine)?;
                if delta.x.to_bits() != 0 {
                    log::trace!("kerning {prev_glyph} {glyph_index}: {}", delta.x);
                }
                pen.x += f26dot6_to_fixed(delta.x.to_bits() as i64);
            }
            glyph_indices.push(glyph_index);
            positions.push(pen.map(from_16dot16));
            let metrics = face
                .load_glyph(glyph_index, flags)
                .map_err(Error::font_engine)?;
            let glyph_bbox = metrics
                .bbox
                .map(|v| v.to_bits() as i64)
                .translate(pen.map(fixed_to_26dot6));
            ink = Some(match ink {
                Some(ink) => ink.union(&glyph_bbox),
                None => glyph_bbox,
            });
            pen.x += metrics.advance.x.to_bits() as i64;
            prev_glyph = glyph_index;
        }
        let ink_bbox = ink
            .map(|bbox| bbox.map(from_26dot6))
            .unwrap_or(BoundingBox::EMPTY);
        let layout_bbox = BoundingBox {
            x_min: 0,
            y_min: face.descender().to_bits() as i64,
            x_max: fixed_to_26dot6(pen.x),
            y_max: face.ascender().to_bits() as i64,
        }
        .map(from_26dot6);
        log::debug!(
            "laid out {} glyphs, advance {}",
            glyph_indices.len(),
            from_16dot16(pen.x)
        );
        Ok(Self {
            glyph_indices,
            positions,
            ink_bbox,
            layout_bbox,
            advance: from_16dot16(pen.x),
        })
    }

    /// Glyph index for each input character. Unmapped characters have
    /// index 0.
    pub fn glyph_indices(&self) -> &[u32] {
        &self.glyph_indices
    }

    /// Pen position of each glyph, before its advance is applied.
    pub fn positions(&self) -> &[Point<f64>] {
        &self.positions
    }

    /// Union of the outline boxes of all glyphs at their positions.
    ///
    /// For empty input this is the inverted [`BoundingBox::EMPTY`].
    pub fn ink_bbox(&self) -> BoundingBox<f64> {
        self.ink_bbox
    }

    /// Box spanning the face ascender to descender and the origin to the
    /// final pen position.
    pub fn layout_bbox(&self) -> BoundingBox<f64> {
        self.layout_bbox
    }

    /// Final horizontal pen position.
    pub fn advance(&self) -> f64 {
        self.advance
    }

    pub fn len(&self) -> usize {
        self.glyph_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyph_indices.is_empty()
    }
}
