use core::ops::{Add, Mul, Sub};

use crate::Point;

/// Minimum and maximum extents of a rectangular region.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction-- the left side of a region.
    pub x_min: T,
    /// Minimum extent in the y direction. In a Y-up coordinate system,
    /// which is used by fonts, this represents the bottom of a region.
    pub y_min: T,
    /// Maximum extent in the x direction-- the right side of a region.
    pub x_max: T,
    /// Maximum extend in the y direction. In a Y-up coordinate system,
    /// which is used by fonts, this represents the top of the
    /// region.
    pub y_max: T,
}

impl<T> BoundingBox<T>
where
    T: Mul<Output = T> + Copy,
{
    /// Return a `BoundingBox` scaled by a scale factor of the same type
    /// as the stored bounds.
    pub fn scale(&self, factor: T) -> Self {
        Self {
            x_min: self.x_min * factor,
            y_min: self.y_min * factor,
            x_max: self.x_max * factor,
            y_max: self.y_max * factor,
        }
    }
}

impl<T> BoundingBox<T>
where
    T: Copy + PartialOrd,
{
    /// Returns true if the box is inverted, meaning that it encloses
    /// nothing.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Extends the box to enclose the given point.
    pub fn include_point(&mut self, point: Point<T>) {
        if point.x < self.x_min {
            self.x_min = point.x;
        }
        if point.y < self.y_min {
            self.y_min = point.y;
        }
        if point.x > self.x_max {
            self.x_max = point.x;
        }
        if point.y > self.y_max {
            self.y_max = point.y;
        }
    }

    /// Returns the smallest box enclosing both `self` and `other`.
    ///
    /// This is a plain component-wise min/max so an inverted box on either
    /// side is absorbed by the other.
    pub fn union(&self, other: &Self) -> Self {
        fn min<T: PartialOrd>(a: T, b: T) -> T {
            if b < a {
                b
            } else {
                a
            }
        }
        fn max<T: PartialOrd>(a: T, b: T) -> T {
            if b > a {
                b
            } else {
                a
            }
        }
        Self {
            x_min: min(self.x_min, other.x_min),
            y_min: min(self.y_min, other.y_min),
            x_max: max(self.x_max, other.x_max),
            y_max: max(self.y_max, other.y_max),
        }
    }
}

impl<T> BoundingBox<T>
where
    T: Add<Output = T> + Copy,
{
    /// Returns the box moved by the given offset.
    pub fn translate(&self, offset: Point<T>) -> Self {
        Self {
            x_min: self.x_min + offset.x,
            y_min: self.y_min + offset.y,
            x_max: self.x_max + offset.x,
            y_max: self.y_max + offset.y,
        }
    }
}

impl<T> BoundingBox<T>
where
    T: Sub<Output = T> + Copy,
{
    /// Horizontal extent of the box.
    pub fn width(&self) -> T {
        self.x_max - self.x_min
    }
}

impl<T: Copy> BoundingBox<T> {
    /// Extent above the baseline, which is simply `y_max`.
    pub fn height(&self) -> T {
        self.y_max
    }

    /// Extent below the baseline, which is simply `y_min` and is usually
    /// negative.
    pub fn depth(&self) -> T {
        self.y_min
    }

    /// Maps each extent through `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BoundingBox<U> {
        BoundingBox {
            x_min: f(self.x_min),
            y_min: f(self.y_min),
            x_max: f(self.x_max),
            y_max: f(self.y_max),
        }
    }
}

impl BoundingBox<f64> {
    /// An inverted box that any union will replace.
    pub const EMPTY: Self = Self {
        x_min: f64::INFINITY,
        y_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_max: f64::NEG_INFINITY,
    };
}
