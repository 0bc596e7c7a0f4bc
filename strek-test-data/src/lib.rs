//! test data shared between the strek crates.

pub mod outlines {
    /// 'B' from Bitstream Vera Sans at 12pt, 300dpi.
    pub static VERA_B: &str = include_str!("../test_data/vera_b.txt");

    /// Expected decomposition of [`VERA_B`].
    pub static VERA_B_EVENTS: &str = include_str!("../test_data/vera_b_events.txt");

    /// A circle built from four cubic segments.
    pub static CUBIC_CIRCLE: &str = include_str!("../test_data/cubic_circle.txt");

    /// Expected decomposition of [`CUBIC_CIRCLE`].
    pub static CUBIC_CIRCLE_EVENTS: &str = include_str!("../test_data/cubic_circle_events.txt");
}
