//! Types for receiving the segments of a decomposed outline.

use outline_types::Point;

/// Signal returned by a sink to stop decomposition.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Abort;

/// Interface for accepting the segments of an outline, one contour at a
/// time.
///
/// All coordinates are in float units, after any shift and delta have been
/// applied. Returning [`Abort`] from any method stops the walk immediately.
pub trait OutlineSink {
    /// Returns true if the sink wants quadratic segments delivered through
    /// [`conic_to`](Self::conic_to).
    ///
    /// Otherwise every quadratic segment is raised to an equivalent cubic
    /// and delivered through [`cubic_to`](Self::cubic_to).
    fn accepts_conics(&self) -> bool {
        false
    }

    /// Begins a new contour at `to`.
    fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort>;

    /// Emits a line from the current point to `to`.
    fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort>;

    /// Emits a quadratic segment from the current point with the given
    /// control point, ending at `to`.
    ///
    /// Only called when [`accepts_conics`](Self::accepts_conics) returns
    /// true. Sinks that accept conics must override this; the default
    /// aborts the walk.
    fn conic_to(&mut self, control: Point<f64>, to: Point<f64>) -> Result<(), Abort> {
        log::warn!("sink accepts conics but does not handle conic_to({control:?}, {to:?})");
        Err(Abort)
    }

    /// Emits a cubic segment from the current point with the given control
    /// points, ending at `to`.
    fn cubic_to(
        &mut self,
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    ) -> Result<(), Abort>;
}

impl<S: OutlineSink + ?Sized> OutlineSink for &mut S {
    fn accepts_conics(&self) -> bool {
        (**self).accepts_conics()
    }

    fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        (**self).move_to(to)
    }

    fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        (**self).line_to(to)
    }

    fn conic_to(&mut self, control: Point<f64>, to: Point<f64>) -> Result<(), Abort> {
        (**self).conic_to(control, to)
    }

    fn cubic_to(
        &mut self,
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    ) -> Result<(), Abort> {
        (**self).cubic_to(control1, control2, to)
    }
}

/// Single segment of a decomposed outline.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecompositionEvent {
    /// Begin a new contour at the point.
    MoveTo(Point<f64>),
    /// Draw a line from the current point.
    LineTo(Point<f64>),
    /// Draw a quadratic curve through a control point.
    ConicTo {
        control: Point<f64>,
        to: Point<f64>,
    },
    /// Draw a cubic curve through two control points.
    CubicTo {
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    },
}

impl DecompositionEvent {
    /// Returns the point where the segment ends.
    pub fn end_point(&self) -> Point<f64> {
        match *self {
            Self::MoveTo(to) | Self::LineTo(to) => to,
            Self::ConicTo { to, .. } | Self::CubicTo { to, .. } => to,
        }
    }

    /// Forwards the event to a sink.
    pub fn apply(&self, sink: &mut impl OutlineSink) -> Result<(), Abort> {
        match *self {
            Self::MoveTo(to) => sink.move_to(to),
            Self::LineTo(to) => sink.line_to(to),
            Self::ConicTo { control, to } => sink.conic_to(control, to),
            Self::CubicTo {
                control1,
                control2,
                to,
            } => sink.cubic_to(control1, control2, to),
        }
    }
}

impl OutlineSink for Vec<DecompositionEvent> {
    fn accepts_conics(&self) -> bool {
        true
    }

    fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.push(DecompositionEvent::MoveTo(to));
        Ok(())
    }

    fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.push(DecompositionEvent::LineTo(to));
        Ok(())
    }

    fn conic_to(&mut self, control: Point<f64>, to: Point<f64>) -> Result<(), Abort> {
        self.push(DecompositionEvent::ConicTo { control, to });
        Ok(())
    }

    fn cubic_to(
        &mut self,
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    ) -> Result<(), Abort> {
        self.push(DecompositionEvent::CubicTo {
            control1,
            control2,
            to,
        });
        Ok(())
    }
}

/// Sink that drops all segments into the ether.
#[derive(Copy, Clone, Default, Debug)]
pub struct NullSink;

impl OutlineSink for NullSink {
    fn accepts_conics(&self) -> bool {
        true
    }
    fn move_to(&mut self, _to: Point<f64>) -> Result<(), Abort> {
        Ok(())
    }
    fn line_to(&mut self, _to: Point<f64>) -> Result<(), Abort> {
        Ok(())
    }
    fn conic_to(&mut self, _control: Point<f64>, _to: Point<f64>) -> Result<(), Abort> {
        Ok(())
    }
    fn cubic_to(&mut self, _c1: Point<f64>, _c2: Point<f64>, _to: Point<f64>) -> Result<(), Abort> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_points() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(3.0, 4.0);
        assert_eq!(DecompositionEvent::MoveTo(p).end_point(), p);
        assert_eq!(
            DecompositionEvent::ConicTo {
                control: p,
                to: q
            }
            .end_point(),
            q
        );
        assert_eq!(
            DecompositionEvent::CubicTo {
                control1: p,
                control2: p,
                to: q
            }
            .end_point(),
            q
        );
    }

    /// Claims conic support without implementing it.
    struct ForgetfulSink(Vec<DecompositionEvent>);

    impl OutlineSink for ForgetfulSink {
        fn accepts_conics(&self) -> bool {
            true
        }
        fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
            self.0.move_to(to)
        }
        fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
            self.0.line_to(to)
        }
        fn cubic_to(
            &mut self,
            c1: Point<f64>,
            c2: Point<f64>,
            to: Point<f64>,
        ) -> Result<(), Abort> {
            self.0.cubic_to(c1, c2, to)
        }
    }

    #[test]
    fn unimplemented_conic_to_aborts() {
        use crate::{
            outline::{DecomposeSettings, Outline},
            Error,
        };
        use outline_types::PointTag;

        let points = [Point::new(0, 0), Point::new(64, 128), Point::new(128, 0)];
        let tags = [PointTag::on_curve(), PointTag::conic(), PointTag::on_curve()];
        let outline = Outline::new(&points, &tags, &[2]).unwrap();
        let mut sink = ForgetfulSink(Vec::new());
        let err = outline
            .decompose(&mut sink, DecomposeSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::ConsumerAbort));
        // the segment is not silently dropped
        assert_eq!(sink.0, [DecompositionEvent::MoveTo(Point::new(0.0, 0.0))]);
    }

    #[test]
    fn replay_into_vec() {
        let events = [
            DecompositionEvent::MoveTo(Point::new(0.0, 0.0)),
            DecompositionEvent::LineTo(Point::new(1.0, 0.0)),
            DecompositionEvent::ConicTo {
                control: Point::new(1.0, 1.0),
                to: Point::new(0.0, 1.0),
            },
        ];
        let mut replayed = Vec::new();
        for event in &events {
            event.apply(&mut replayed).unwrap();
        }
        assert_eq!(replayed, events);
    }
}
