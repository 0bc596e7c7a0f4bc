//! Helpers for unit testing

use core::{cell::RefCell, str::FromStr};
use std::collections::HashMap;

use outline_types::{BoundingBox, F26Dot6, Fixed, Point};

use crate::{
    error::Result,
    face::{Encoding, Face, GlyphMetrics, KerningMode, LoadFlags},
    outline::{Abort, DecompositionEvent, Outline, OutlineSink},
};

/// Owned arrays parsed from an outline dump.
#[derive(Clone, Default, Debug)]
pub struct OutlineData {
    pub contours: Vec<u16>,
    pub tags: Vec<u8>,
    pub points: Vec<Point<i64>>,
}

impl OutlineData {
    pub fn outline(&self) -> Result<Outline<'_>> {
        Outline::from_raw_tags(&self.points, &self.tags, &self.contours)
    }
}

/// Parses all outlines in a dump.
pub fn parse_outlines(source: &str) -> Vec<OutlineData> {
    let mut outlines = vec![];
    let mut cur_outline = OutlineData::default();
    for line in source.lines() {
        let line = line.trim();
        if line == "-" {
            outlines.push(core::mem::take(&mut cur_outline));
        } else if let Some(contours) = line.strip_prefix("contours") {
            for contour in contours.split_whitespace() {
                cur_outline.contours.push(contour.parse().unwrap());
            }
        } else if let Some(tags) = line.strip_prefix("tags") {
            for tag in tags.split_whitespace() {
                cur_outline.tags.push(tag.parse().unwrap());
            }
        } else if let Some(points) = line.strip_prefix("points") {
            for [x, y] in parse_points::<i64>(points) {
                cur_outline.points.push(Point::new(x, y));
            }
        }
    }
    outlines
}

/// Parses a dump holding a single outline.
pub fn parse_outline(source: &str) -> OutlineData {
    parse_outlines(source).into_iter().next().unwrap()
}

/// Parses an expected decomposition. Coordinates are raw 26.6 values.
pub fn parse_events(source: &str) -> Vec<DecompositionEvent> {
    let mut events = vec![];
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (op, rest) = line.split_once(' ').unwrap();
        let points = parse_points::<i64>(rest)
            .into_iter()
            .map(|[x, y]| Point::new(x as f64 / 64.0, y as f64 / 64.0))
            .collect::<Vec<_>>();
        events.push(match op {
            "m" => DecompositionEvent::MoveTo(points[0]),
            "l" => DecompositionEvent::LineTo(points[0]),
            "q" => DecompositionEvent::ConicTo {
                control: points[0],
                to: points[1],
            },
            "c" => DecompositionEvent::CubicTo {
                control1: points[0],
                control2: points[1],
                to: points[2],
            },
            _ => panic!("unexpected path element {op}"),
        });
    }
    events
}

fn parse_points<F>(source: &str) -> Vec<[F; 2]>
where
    F: FromStr + Copy + Default,
    <F as FromStr>::Err: core::fmt::Debug,
{
    let mut points = vec![];
    for point in source.split_whitespace() {
        let mut components = [F::default(); 2];
        for (i, component) in point.split(',').take(2).enumerate() {
            components[i] = F::from_str(component).unwrap();
        }
        points.push(components);
    }
    points
}

/// Sink that records events and can be told to reject conics or abort.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<DecompositionEvent>,
    reject_conics: bool,
    abort_after: Option<usize>,
}

impl Recorder {
    pub fn cubic_only() -> Self {
        Self {
            reject_conics: true,
            ..Default::default()
        }
    }

    pub fn abort_after(count: usize) -> Self {
        Self {
            abort_after: Some(count),
            ..Default::default()
        }
    }

    fn record(&mut self, event: DecompositionEvent) -> Result<(), Abort> {
        if self.abort_after == Some(self.events.len()) {
            return Err(Abort);
        }
        self.events.push(event);
        Ok(())
    }
}

impl OutlineSink for Recorder {
    fn accepts_conics(&self) -> bool {
        !self.reject_conics
    }

    fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.record(DecompositionEvent::MoveTo(to))
    }

    fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.record(DecompositionEvent::LineTo(to))
    }

    fn conic_to(&mut self, control: Point<f64>, to: Point<f64>) -> Result<(), Abort> {
        assert!(!self.reject_conics, "conic_to called on a cubic only sink");
        self.record(DecompositionEvent::ConicTo { control, to })
    }

    fn cubic_to(
        &mut self,
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    ) -> Result<(), Abort> {
        self.record(DecompositionEvent::CubicTo {
            control1,
            control2,
            to,
        })
    }
}

#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum MockError {
    #[error("no glyph with index {0}")]
    InvalidGlyph(u32),
}

/// In-memory face with metrics given in float units.
pub struct MockFace {
    pub encoding: Option<Encoding>,
    ascender: F26Dot6,
    descender: F26Dot6,
    cmap: HashMap<u32, u32>,
    glyphs: HashMap<u32, GlyphMetrics>,
    kerning: HashMap<(u32, u32), Point<F26Dot6>>,
    /// Kerning requests in call order.
    pub kerning_calls: RefCell<Vec<(u32, u32, KerningMode)>>,
    /// Glyph loads in call order.
    pub loads: RefCell<Vec<(u32, LoadFlags)>>,
}

impl MockFace {
    pub fn new(ascender: f64, descender: f64) -> Self {
        Self {
            encoding: Some(Encoding::Unicode),
            ascender: F26Dot6::from_f64(ascender),
            descender: F26Dot6::from_f64(descender),
            cmap: HashMap::new(),
            glyphs: HashMap::new(),
            kerning: HashMap::new(),
            kerning_calls: Default::default(),
            loads: Default::default(),
        }
    }

    /// Maps `ch` to `glyph_index` with the given advance and ink box
    /// (`[x_min, y_min, x_max, y_max]`).
    pub fn with_glyph(mut self, ch: char, glyph_index: u32, advance: f64, bbox: [f64; 4]) -> Self {
        self.cmap.insert(ch as u32, glyph_index);
        self.glyphs.insert(
            glyph_index,
            GlyphMetrics {
                bbox: BoundingBox {
                    x_min: F26Dot6::from_f64(bbox[0]),
                    y_min: F26Dot6::from_f64(bbox[1]),
                    x_max: F26Dot6::from_f64(bbox[2]),
                    y_max: F26Dot6::from_f64(bbox[3]),
                },
                advance: Point::new(Fixed::from_f64(advance), Fixed::ZERO),
            },
        );
        self
    }

    /// Maps `ch` to a glyph index that fails to load.
    pub fn with_broken_glyph(mut self, ch: char, glyph_index: u32) -> Self {
        self.cmap.insert(ch as u32, glyph_index);
        self
    }

    pub fn with_kerning(mut self, left: u32, right: u32, x: f64) -> Self {
        self.kerning.insert(
            (left, right),
            Point::new(F26Dot6::from_f64(x), F26Dot6::from_f64(7.0)),
        );
        self
    }

    pub fn with_encoding(mut self, encoding: Option<Encoding>) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Face for MockFace {
    type Error = MockError;

    fn charmap_encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    fn char_to_glyph(&self, code_point: u32) -> u32 {
        self.cmap.get(&code_point).copied().unwrap_or_default()
    }

    fn has_kerning(&self) -> bool {
        !self.kerning.is_empty()
    }

    fn kerning(
        &self,
        left: u32,
        right: u32,
        mode: KerningMode,
    ) -> Result<Point<F26Dot6>, MockError> {
        self.kerning_calls.borrow_mut().push((left, right, mode));
        Ok(self
            .kerning
            .get(&(left, right))
            .copied()
            .unwrap_or_default())
    }

    fn ascender(&self) -> F26Dot6 {
        self.ascender
    }

    fn descender(&self) -> F26Dot6 {
        self.descender
    }

    fn load_glyph(&self, glyph_index: u32, flags: LoadFlags) -> Result<GlyphMetrics, MockError> {
        self.loads.borrow_mut().push((glyph_index, flags));
        self.glyphs
            .get(&glyph_index)
            .copied()
            .ok_or(MockError::InvalidGlyph(glyph_index))
    }
}
