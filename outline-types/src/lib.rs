//! Scalar and geometric types shared by glyph outline consumers.
//!
//! Font engines in the FreeType tradition report coordinates in
//! [26.6](F26Dot6) fixed point, advances and transforms in
//! [16.16](Fixed) fixed point and classify each outline point with a
//! [tag](PointTag) byte. This crate provides those types along with a
//! generic [`Point`] and [`BoundingBox`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod bbox;
mod fixed;
mod point;
mod tag;


pub use bbox::BoundingBox;
pub use fixed::{
    f26dot6_to_fixed, fixed_to_26dot6, from_16dot16, from_26dot6, to_16dot16, to_26dot6, F26Dot6,
    Fixed,
};
pub use point::Point;
pub use tag::PointTag;
