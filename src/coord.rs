use num::{Num, NumCast};

use crate::complex::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis<T> {
    pub min: T,
    pub max: T,
}

impl<T> Axis<T>
where
    T: Num + Copy,
{
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T> Axis<T>
where
    T: Num + NumCast + Copy,
{
    /// Maps pixel `n` of `steps` onto the axis. Half-open: `n == steps` would land on `max`.
    pub fn sample(&self, n: usize, steps: usize) -> T {
        let n = <T as NumCast>::from(n).unwrap_or_else(T::zero);
        let steps = <T as NumCast>::from(steps).unwrap_or_else(T::one);
        n * self.length() / steps + self.min
    }
}

/// Rectangular region of the complex plane, x along the real axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T> {
    pub x: Axis<T>,
    pub y: Axis<T>,
}

pub type Viewport = Frame<f64>;

impl<T> Frame<T>
where
    T: Num + Copy,
{
    pub fn new(x: Axis<T>, y: Axis<T>) -> Self {
        Self { x, y }
    }

    pub fn from_nums(x1: T, x2: T, y1: T, y2: T) -> Self {
        Self::new(Axis::new(x1, x2), Axis::new(y1, y2))
    }
}

impl Frame<f64> {
    pub fn to_complex(&self, px: usize, py: usize, dims: Dimensions) -> C<f64> {
        c(
            self.x.sample(px, dims.width),
            self.y.sample(py, dims.height),
        )
    }
}

impl Default for Frame<f64> {
    fn default() -> Self {
        Self::from_nums(
            crate::defaults::XMIN,
            crate::defaults::XMAX,
            crate::defaults::YMIN,
            crate::defaults::YMAX,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point<T>
where
    T: num::Num + Copy,
{
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: num::Num + Copy,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Pixel grid size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Row-major pixel walk: every x of a row before the next y.
    pub fn pixels(&self) -> PixelIter {
        PixelIter {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

pub struct PixelIter {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl Iterator for PixelIter {
    type Item = Point<usize>;

    fn next(&mut self) -> Option<Point<usize>> {
        if self.width == 0 || self.y >= self.height {
            return None;
        }
        let current = Point::new(self.x, self.y);
        self.x += 1;
        if self.x == self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(current)
    }
}
