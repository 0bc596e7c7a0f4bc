//! Drives the public API end to end with a small in-memory face.

use std::collections::HashMap;

use strek::{
    outline::{NullSink, Orientation, PathStringSink},
    types::{BoundingBox, F26Dot6, Fixed, Point, PointTag},
    DecomposeSettings, DecompositionEvent, Encoding, Error, Face, GlyphMetrics, KerningMode,
    Layout, LoadFlags, Outline, PathFormat, PointCode,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Glyph {
    points: Vec<Point<i64>>,
    tags: Vec<PointTag>,
    contours: Vec<u16>,
    advance: f64,
}

impl Glyph {
    fn outline(&self) -> Outline<'_> {
        Outline::new(&self.points, &self.tags, &self.contours).unwrap()
    }
}

/// Face with two glyphs: a cubic circle ('o') and a box ('l').
struct TinyFace {
    glyphs: HashMap<u32, Glyph>,
}

impl TinyFace {
    fn new() -> Self {
        let mut glyphs = HashMap::new();
        let (points, tags, contours) = parse_outline(strek_test_data::outlines::CUBIC_CIRCLE);
        glyphs.insert(
            1,
            Glyph {
                points,
                tags,
                contours,
                advance: 22.0,
            },
        );
        glyphs.insert(
            2,
            Glyph {
                points: [(64, 0), (256, 0), (256, 1600), (64, 1600)]
                    .into_iter()
                    .map(Point::from)
                    .collect(),
                tags: vec![PointTag::on_curve(); 4],
                contours: vec![3],
                advance: 6.0,
            },
        );
        Self { glyphs }
    }
}

fn parse_points(source: &str) -> Vec<Point<i64>> {
    source
        .split_whitespace()
        .map(|point| {
            let (x, y) = point.split_once(',').unwrap();
            Point::new(x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

fn parse_outline(source: &str) -> (Vec<Point<i64>>, Vec<PointTag>, Vec<u16>) {
    let (mut points, mut tags, mut contours) = (vec![], vec![], vec![]);
    for line in source.lines() {
        if let Some(rest) = line.strip_prefix("contours") {
            contours.extend(rest.split_whitespace().map(|c| c.parse::<u16>().unwrap()));
        } else if let Some(rest) = line.strip_prefix("tags") {
            tags.extend(
                rest.split_whitespace()
                    .map(|t| PointTag::from_bits(t.parse().unwrap())),
            );
        } else if let Some(rest) = line.strip_prefix("points") {
            points = parse_points(rest);
        }
    }
    (points, tags, contours)
}

/// Parses `m`/`l`/`q`/`c` lines with raw 26.6 coordinates.
fn parse_events(source: &str) -> Vec<DecompositionEvent> {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (op, rest) = line.split_once(' ').unwrap();
            let p = parse_points(rest)
                .into_iter()
                .map(|p| p.map(|v| v as f64 / 64.0))
                .collect::<Vec<_>>();
            match op {
                "m" => DecompositionEvent::MoveTo(p[0]),
                "l" => DecompositionEvent::LineTo(p[0]),
                "q" => DecompositionEvent::ConicTo {
                    control: p[0],
                    to: p[1],
                },
                "c" => DecompositionEvent::CubicTo {
                    control1: p[0],
                    control2: p[1],
                    to: p[2],
                },
                _ => panic!("unexpected path element {op}"),
            }
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
#[error("missing glyph {0}")]
struct MissingGlyph(u32);

impl Face for TinyFace {
    type Error = MissingGlyph;

    fn charmap_encoding(&self) -> Option<Encoding> {
        Some(Encoding::Unicode)
    }

    fn char_to_glyph(&self, code_point: u32) -> u32 {
        match char::from_u32(code_point) {
            Some('o') => 1,
            Some('l') => 2,
            _ => 0,
        }
    }

    fn has_kerning(&self) -> bool {
        true
    }

    fn kerning(
        &self,
        left: u32,
        right: u32,
        _mode: KerningMode,
    ) -> Result<Point<F26Dot6>, MissingGlyph> {
        let x = if (left, right) == (1, 2) { -0.5 } else { 0.0 };
        Ok(Point::new(F26Dot6::from_f64(x), F26Dot6::ZERO))
    }

    fn ascender(&self) -> F26Dot6 {
        F26Dot6::from_f64(28.0)
    }

    fn descender(&self) -> F26Dot6 {
        F26Dot6::from_f64(-7.0)
    }

    fn load_glyph(
        &self,
        glyph_index: u32,
        _flags: LoadFlags,
    ) -> Result<GlyphMetrics, MissingGlyph> {
        let glyph = self
            .glyphs
            .get(&glyph_index)
            .ok_or(MissingGlyph(glyph_index))?;
        let bbox = glyph
            .outline()
            .bbox()
            .map_err(|_| MissingGlyph(glyph_index))?;
        Ok(GlyphMetrics {
            bbox: bbox.map(F26Dot6::from_f64),
            advance: Point::new(Fixed::from_f64(glyph.advance), Fixed::ZERO),
        })
    }
}

#[test]
fn circle_events_match_fixture() {
    let face = TinyFace::new();
    let outline = face.glyphs[&1].outline();
    assert_eq!(
        outline.events(DecomposeSettings::default()).unwrap(),
        parse_events(strek_test_data::outlines::CUBIC_CIRCLE_EVENTS)
    );
    // handles are tangent at the on-curve points
    let exact = outline.bbox().unwrap();
    let cbox = outline.control_box();
    for (a, b) in [
        (exact.x_min, cbox.x_min),
        (exact.y_min, cbox.y_min),
        (exact.x_max, cbox.x_max),
        (exact.y_max, cbox.y_max),
    ] {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }
    assert_eq!(outline.orientation(), Orientation::PostScript);
}

#[test]
fn circle_to_svg() {
    init_logging();
    let face = TinyFace::new();
    let outline = face.glyphs[&1].outline();
    let svg = outline.to_path_string(&PathFormat::svg()).unwrap();
    assert_eq!(
        svg,
        "M 10 0C 15.53125 0 20 4.46875 20 10C 20 15.53125 15.53125 20 10 20\
         C 4.46875 20 0 15.53125 0 10C 0 4.46875 4.46875 0 10 0"
    );
}

#[test]
fn streaming_sink_matches_convenience_call() {
    let face = TinyFace::new();
    let outline = face.glyphs[&2].outline();
    let format = PathFormat::postscript();
    let mut sink = PathStringSink::new(&format);
    let result = outline.decompose(&mut sink, DecomposeSettings::default());
    let streamed = sink.finish(result).unwrap();
    assert_eq!(streamed, outline.to_path_string(&format).unwrap());
    assert_eq!(
        streamed,
        "1 0 moveto\n4 0 lineto\n4 25 lineto\n1 25 lineto\n1 0 lineto\n"
    );
    outline
        .decompose(NullSink, DecomposeSettings::default())
        .unwrap();
}

#[test]
fn events_and_codes_agree() {
    let face = TinyFace::new();
    let outline = face.glyphs[&1].outline();
    let events = outline.events(DecomposeSettings::default()).unwrap();
    assert!(matches!(events[0], DecompositionEvent::MoveTo(_)));
    let codes = outline.points_and_codes().unwrap();
    assert_eq!(codes.len(), 1 + 3 * (events.len() - 1));
    assert_eq!(
        codes.iter().map(|(code, _)| code).collect::<Vec<_>>()[..4],
        [
            PointCode::MoveTo,
            PointCode::Cubic,
            PointCode::Cubic,
            PointCode::Cubic
        ]
    );
    assert_eq!(codes.points()[3], [20.0, 10.0]);
    assert_eq!(codes.flat_points()[6..8], [20.0, 10.0]);
}

#[test]
fn layout_with_kerning() {
    init_logging();
    let face = TinyFace::new();
    let layout = Layout::new(&face, "olo", LoadFlags::NO_HINTING).unwrap();
    assert_eq!(layout.glyph_indices(), &[1, 2, 1]);
    assert_eq!(
        layout.positions(),
        &[
            Point::new(0.0, 0.0),
            Point::new(21.5, 0.0),
            Point::new(27.5, 0.0)
        ]
    );
    assert_eq!(
        layout.layout_bbox(),
        BoundingBox {
            x_min: 0.0,
            y_min: -7.0,
            x_max: 49.5,
            y_max: 28.0
        }
    );
    assert_eq!(
        layout.ink_bbox(),
        BoundingBox {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 47.5,
            y_max: 25.0
        }
    );
}

#[test]
fn missing_glyph_is_an_engine_error() {
    let face = TinyFace::new();
    let err = Layout::new(&face, "ox", LoadFlags::DEFAULT).unwrap_err();
    assert!(matches!(err, Error::FontEngine(_)));
    assert_eq!(err.to_string(), "font engine error: missing glyph 0");
}
