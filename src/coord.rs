//! This module contains a struct, [`Coord`](coord::Coord), that models a point in 3D space. Every
//! color type in Prizm converts to and from a `Coord`, which is how components are read generically
//! without knowing the color space.

use std::ops::Sub;

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any
/// different in any method of `Coord`, so the distinction between them is completely
/// conventional. Any color that converts to a `Coord` matches its components with these axes in the
/// order of the letters in its name: for example, `LabColor` maps to a coordinate such that `l` is on
/// the x-axis, `a` is on the y-axis, and `b` is on the z-axis.
///
/// # Example
/// ```
/// # use prizm::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// assert_eq!(diff.to_array(), [-6., 6., 4.]);
/// assert_eq!(diff.max_abs(), 6.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

/// For any Coords c1, c2, and c3, c1 - c2 = c3 implies c1 - c3 = c2, down to floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(xyz: [f64; 3]) -> Coord {
        Coord {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

impl Coord {
    /// The components in axis order.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The largest absolute value among the three components: the Chebyshev distance from the
    /// origin. Used for per-component tolerance checks.
    pub fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_sub_and_max_abs() {
        let point1 = Coord { x: 0.25, y: -3., z: 1. };
        let point2 = Coord { x: 0.75, y: 1., z: 1. };
        let diff = point1 - point2;
        assert_eq!(diff, Coord { x: -0.5, y: -4., z: 0. });
        assert_eq!(diff.max_abs(), 4.);
    }

    #[test]
    fn test_array_conversion() {
        let point: Coord = [1., 2., 3.].into();
        assert_eq!(point.to_array(), [1., 2., 3.]);
    }
}
