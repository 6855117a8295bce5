//! Value types shared by every kernel family.
//!
//! - `Point`: integer coordinate pair; `Point::INVALID` is the "no result" sentinel.
//! - `Line`/`WideLine`: implicit `a·x + b·y + c = 0` with a narrow or wide `c`.
//! - `SlopeLine`: float `y = slope·x + intercept` form.
//! - `Rectangle`: axis-aligned, screen orientation (y grows downward), edges inclusive.

use nalgebra::Vector2;
use serde::Serialize;

/// Float point/vector used by the float overloads.
pub type PointF = Vector2<f64>;

/// Reserved coordinate value signalling "no geometrically defined result".
///
/// Never produced from valid input (coordinates within `cfg::COORDINATE_MAX`).
pub const INVALID_COORDINATE: i32 = i32::MIN;

/// Integer point. No identity beyond value equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Both components set to `INVALID_COORDINATE`.
    pub const INVALID: Point = Point {
        x: INVALID_COORDINATE,
        y: INVALID_COORDINATE,
    };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// False if either component carries the sentinel.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.x != INVALID_COORDINATE && self.y != INVALID_COORDINATE
    }

    #[inline]
    pub fn to_f(self) -> PointF {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Round a float point to the grid; `INVALID` if it is not finite or does
    /// not fit a coordinate.
    pub fn from_f_rounded(v: PointF) -> Point {
        match (round_coord(v.x), round_coord(v.y)) {
            (Some(x), Some(y)) => Point::new(x, y),
            _ => Point::INVALID,
        }
    }

    /// Component-wise `k·p` (wrapping; callers stay within range).
    #[inline]
    pub fn scaled(self, k: i32) -> Point {
        Point::new(self.x.wrapping_mul(k), self.y.wrapping_mul(k))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

fn round_coord(v: f64) -> Option<i32> {
    let r = v.round();
    if r.is_finite() && r > f64::from(INVALID_COORDINATE) && r <= f64::from(i32::MAX) {
        Some(r as i32)
    } else {
        None
    }
}

/// Implicit line `a·x + b·y + c = 0` with a narrow `c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Line {
    #[inline]
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    /// `a == b == 0`: built from two equal points, describes no line.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0 && self.b == 0
    }

    /// `a·x + b·y + c`, exact.
    #[inline]
    pub fn eval(&self, p: Point) -> i128 {
        self.widen().eval(p)
    }

    #[inline]
    pub fn widen(&self) -> WideLine {
        WideLine::new(self.a, self.b, i64::from(self.c))
    }

    /// Proportional triples describe the same line.
    pub fn same_line_as(&self, other: &Line) -> bool {
        self.widen().same_line_as(&other.widen())
    }
}

/// Implicit line with a 64-bit `c` (a product of two coordinates).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WideLine {
    pub a: i32,
    pub b: i32,
    pub c: i64,
}

impl WideLine {
    #[inline]
    pub const fn new(a: i32, b: i32, c: i64) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0 && self.b == 0
    }

    /// `a·x + b·y + c`, exact.
    #[inline]
    pub fn eval(&self, p: Point) -> i128 {
        i128::from(self.a) * i128::from(p.x) + i128::from(self.b) * i128::from(p.y)
            + i128::from(self.c)
    }

    /// `Some` iff `c` fits a coordinate.
    pub fn narrow(&self) -> Option<Line> {
        i32::try_from(self.c)
            .ok()
            .map(|c| Line::new(self.a, self.b, c))
    }

    /// Proportional triples describe the same line. Degenerate triples match nothing.
    pub fn same_line_as(&self, other: &WideLine) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let (a1, b1, c1) = (i128::from(self.a), i128::from(self.b), i128::from(self.c));
        let (a2, b2, c2) = (i128::from(other.a), i128::from(other.b), i128::from(other.c));
        a1 * b2 == a2 * b1 && a1 * c2 == a2 * c1 && b1 * c2 == b2 * c1
    }
}

/// Continuous form `y = slope·x + intercept`; cannot represent vertical lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SlopeLine {
    pub slope: f64,
    pub intercept: f64,
}

impl SlopeLine {
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Intersection point; `None` for parallel (or coincident) lines.
    pub fn intersect(&self, other: &SlopeLine) -> Option<PointF> {
        let ds = self.slope - other.slope;
        if ds == 0.0 || !ds.is_finite() {
            return None;
        }
        let x = (other.intercept - self.intercept) / ds;
        Some(Vector2::new(x, self.y_at(x)))
    }
}

/// Axis-aligned rectangle `(x, y, width, height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle with the given inclusive edges. Sizes wrap past
    /// `i32` like the narrow primitives.
    #[inline]
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.wrapping_sub(left), bottom.wrapping_sub(top))
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }
    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    /// Corners clockwise on screen: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    /// Center, rounded toward negative infinity.
    pub fn center(&self) -> Point {
        Point::new(
            self.x + self.width.div_euclid(2),
            self.y + self.height.div_euclid(2),
        )
    }
}
