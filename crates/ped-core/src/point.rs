//! Planar metric coordinate type.
//!
//! `Point2` uses `f64` x/y in network coordinates (metres).  Unlike
//! geographic lat/lon, all geometry here is Euclidean: lane dilation,
//! point-to-segment projection, and arrival-tolerance checks are plain
//! 2-D vector arithmetic.

/// A planar coordinate in network space, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in metres.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (self - other).length()
    }

    /// Vector length (distance from the origin).
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Dot product, treating both points as vectors.
    #[inline]
    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or the zero vector for zero input.
    pub fn normalized(self) -> Point2 {
        let len = self.length();
        if len > 0.0 {
            Point2::new(self.x / len, self.y / len)
        } else {
            Point2::default()
        }
    }

    /// Angle of the vector from the positive x-axis, in radians.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, rhs: f64) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
