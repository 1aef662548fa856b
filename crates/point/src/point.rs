use crate::Error;

use std::{fmt, ops};

/// A point in two-dimensional space
///
/// The coordinates are fixed once the point is created. They can be read
/// through [Point::x] and [Point::y], but not written:
///
/// ```compile_fail
/// let mut point = point::Point::new(30, 40);
/// point.x = 50;
/// ```
///
/// Points only ever compare equal to other points. Comparing against a tuple
/// requires an explicit conversion:
///
/// ```compile_fail
/// let point = point::Point::new(30, 40);
/// assert!(point == (30, 40));
/// ```
///
/// ```
/// use point::Point;
///
/// let point = Point::new(30, 40);
/// assert_eq!(<(i32, i32)>::from(point), (30, 40));
/// assert_eq!(point, Point::from((30, 40)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T = i32> {
    x: T,
    y: T,
}

impl<T> Point<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Point<T>
where
    T: Copy,
{
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.y
    }

    /// Multiply both coordinates by `factor`
    ///
    /// A factor of zero yields the origin, a negative one reflects the point
    /// through it. Integer coordinates follow the usual overflow rules, so
    /// `Point::new(i32::MAX, 0).scale(2)` panics in debug builds and wraps
    /// in release builds.
    #[inline]
    #[must_use]
    pub fn scale<F>(&self, factor: F) -> Self
    where
        T: ops::Mul<F, Output = T>,
        F: Copy,
    {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl<T> Point<T>
where
    T: ops::Add<Output = T> + Copy,
{
    /// Move the point by `dx` horizontally and `dy` vertically
    ///
    /// Like [Point::scale], integer overflow panics in debug builds and wraps
    /// in release builds.
    #[inline]
    #[must_use]
    pub fn translate(&self, dx: T, dy: T) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl<T> Point<T>
where
    T: fmt::Debug,
{
    /// Assign a new value to one of the point's attributes, by name
    ///
    /// Points are immutable, so this always fails with
    /// [Error::ImmutabilityViolation], regardless of whether `attribute`
    /// names a coordinate. The point itself is left untouched.
    pub fn assign<V: fmt::Debug>(&self, attribute: &str, value: V) -> Result<(), Error> {
        log::warn!(
            "Refusing to assign {value:?} to attribute {attribute:?} of {:?}",
            self
        );

        Err(Error::ImmutabilityViolation {
            attribute: attribute.to_string(),
        })
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(value: Point<T>) -> Self {
        (value.x, value.y)
    }
}

impl<T> fmt::Display for Point<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}
