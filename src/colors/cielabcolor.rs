//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module.
//!
//! The functions here are the bare CIE 1976 transforms: they never adapt between white points. The
//! [`Converter`](../../converter/struct.Converter.html) composes them with chromatic adaptation.

use color::XYZColor;
use consts::{CIE_EPSILON, CIE_KAPPA};
use coord::Coord;
use illuminants::Illuminant;

/// A color in the CIELAB color space, together with the reference white it is defined
/// against. Two CIELAB colors are only directly comparable if their white points match.
///
/// # Example
///
/// ```
/// # use prizm::prelude::*;
/// // the default reference white is D50
/// let lab = LabColor::new(50., 20., -30.);
/// assert_eq!(lab.white_point, Illuminant::D50);
/// assert_eq!(lab.vector(), [50., 20., -30.]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and gives
    /// black, whereas 100 is the value of diffuse white: it is possible to have a higher value for
    /// over-range colors, and pathological inputs can give values below 0.
    pub l: f64,
    /// The first opponent color axis: negative is green, positive is magenta. Unbounded, although
    /// most visible colors fall between -128 and 127.
    pub a: f64,
    /// The second opponent color axis: negative is blue, positive is yellow. Unbounded like `a`.
    pub b: f64,
    /// The reference white the components are relative to.
    pub white_point: Illuminant,
}

impl LabColor {
    /// The reference white used when none is given: D50, the CIELAB white of ICC profiles and of
    /// most print workflows.
    pub const DEFAULT_WHITE_POINT: Illuminant = Illuminant::D50;

    /// Constructs a CIELAB color relative to [`DEFAULT_WHITE_POINT`](#associatedconstant.DEFAULT_WHITE_POINT).
    pub fn new(l: f64, a: f64, b: f64) -> LabColor {
        LabColor::with_white_point(l, a, b, LabColor::DEFAULT_WHITE_POINT)
    }

    /// Constructs a CIELAB color relative to the given reference white.
    pub fn with_white_point(l: f64, a: f64, b: f64, white_point: Illuminant) -> LabColor {
        LabColor {
            l,
            a,
            b,
            white_point,
        }
    }

    /// The components as an ordered vector, `[L, a, b]`.
    pub fn vector(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Returns `true` if the two colors share a white point and every component is within
    /// `tolerance` of the other's.
    pub fn approx_equal(&self, other: &LabColor, tolerance: f64) -> bool {
        self.white_point == other.white_point
            && (Coord::from(*self) - Coord::from(*other)).max_abs() <= tolerance
    }
}

// The CIELAB nonlinearity: a cube root, with a linear segment near black so that the slope stays
// finite at 0.
fn compand(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

fn compand_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > CIE_EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / CIE_KAPPA
    }
}

// relative values outside of [0, 1] come from Lab colors that don't exist under the white point
fn crop(t: f64) -> f64 {
    t.max(0.0).min(1.0)
}

/// Encodes an XYZ color as CIELAB relative to `white_point`. No chromatic adaptation is done: the
/// XYZ color is assumed to already be relative to that white. The result is not clamped.
///
/// ```
/// # use prizm::prelude::*;
/// # use prizm::colors::cielabcolor::xyz_to_lab;
/// let white = xyz_to_lab(Illuminant::D65.to_xyz(), Illuminant::D65);
/// assert!((white.l - 100.).abs() <= 1e-10);
/// assert!(white.a.abs() <= 1e-10 && white.b.abs() <= 1e-10);
/// ```
pub fn xyz_to_lab(xyz: XYZColor, white_point: Illuminant) -> LabColor {
    let [xn, yn, zn] = white_point.white_point();
    let fx = compand(xyz.x / xn);
    let fy = compand(xyz.y / yn);
    let fz = compand(xyz.z / zn);

    // the nonlinearity is already applied, so these are just linear formulae
    // note how a and b are opponent color axes
    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
        white_point,
    }
}

/// Decodes a CIELAB color to XYZ relative to the color's own white point. The relative tristimulus
/// values are cropped to [0, 1] before scaling by the white point, so colors that lie outside the
/// range of the white (like L = 10, a = -400) come back as the nearest representable XYZ.
pub fn lab_to_xyz(lab: LabColor) -> XYZColor {
    let [xn, yn, zn] = lab.white_point.white_point();
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    XYZColor {
        x: xn * crop(compand_inv(fx)),
        y: yn * crop(compand_inv(fy)),
        z: zn * crop(compand_inv(fz)),
    }
}

impl From<LabColor> for Coord {
    fn from(val: LabColor) -> Self {
        Coord {
            x: val.l,
            y: val.a,
            z: val.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_xyz_to_lab_d65() {
        // (X, Y, Z) -> (L, a, b), reference values from Bruce Lindbloom's calculator
        let cases = [
            ([0.95047, 1.0, 1.08883], [100.0, 0.0, 0.0]),
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([0.95047, 0.0, 0.0], [0.0, 431.0345, 0.0]),
            ([0.0, 1.0, 0.0], [100.0, -431.0345, 172.4138]),
            ([0.0, 0.0, 1.08883], [0.0, 0.0, -172.4138]),
            ([0.216938, 0.150041, 0.048850], [45.6398, 39.8753, 35.2091]),
        ];
        for &(xyz, expected) in cases.iter() {
            let lab = xyz_to_lab(XYZColor::from(Coord::from(xyz)), Illuminant::D65);
            assert_eq!(lab.white_point, Illuminant::D65);
            assert!(approx_eq!(f64, lab.l, expected[0], epsilon = 1e-4));
            assert!(approx_eq!(f64, lab.a, expected[1], epsilon = 1e-4));
            assert!(approx_eq!(f64, lab.b, expected[2], epsilon = 1e-4));
        }
    }

    #[test]
    fn test_black_is_exactly_zero() {
        let lab = xyz_to_lab(XYZColor::new(0., 0., 0.), Illuminant::D50);
        assert_eq!(lab.vector(), [0., 0., 0.]);
        let xyz = lab_to_xyz(LabColor::new(0., 0., 0.));
        assert_eq!(xyz.vector(), [0., 0., 0.]);
    }

    #[test]
    fn test_lab_to_xyz_d65() {
        // (L, a, b) -> (X, Y, Z)
        let cases = [
            ([100.0, 0.0, 0.0], [0.95047, 1.0, 1.08883]),
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([0.0, 431.0345, 0.0], [0.95047, 0.0, 0.0]),
            ([100.0, -431.0345, 172.4138], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -172.4138], [0.0, 0.0, 1.08883]),
            ([45.6398, 39.8753, 35.2091], [0.216938, 0.150041, 0.048850]),
            ([77.1234, -40.1235, 78.1120], [0.358530, 0.517372, 0.076273]),
            ([10.0, -400.0, 20.0], [0.0, 0.011260, 0.0]),
        ];
        for &(lab, expected) in cases.iter() {
            let input = LabColor::with_white_point(lab[0], lab[1], lab[2], Illuminant::D65);
            let xyz = lab_to_xyz(input);
            assert!(approx_eq!(f64, xyz.x, expected[0], epsilon = 1e-6));
            assert!(approx_eq!(f64, xyz.y, expected[1], epsilon = 1e-6));
            assert!(approx_eq!(f64, xyz.z, expected[2], epsilon = 1e-6));
        }
    }

    #[test]
    fn test_white_is_l_100_for_every_illuminant() {
        for illuminant in ::illuminants::ILLUMINANTS.iter() {
            let lab = xyz_to_lab(illuminant.to_xyz(), *illuminant);
            assert!(lab.approx_equal(
                &LabColor::with_white_point(100., 0., 0., *illuminant),
                1e-4
            ));
        }
    }

    #[test]
    fn test_cielab_xyz_round_trip() {
        let xyz = XYZColor::new(0.4, 0.2, 0.6);
        let lab = xyz_to_lab(xyz, Illuminant::D50);
        let xyz2 = lab_to_xyz(lab);
        assert!(xyz.approx_equal(&xyz2, 1e-10));
    }

    #[test]
    fn test_near_black_uses_linear_segment() {
        // Y/Yn = 0.001 is below ε, so L = κ * 0.001
        let lab = xyz_to_lab(XYZColor::new(0.0, 0.001, 0.0), Illuminant::E);
        assert!(approx_eq!(f64, lab.l, CIE_KAPPA * 0.001, epsilon = 1e-10));
        let xyz = lab_to_xyz(lab);
        assert!(approx_eq!(f64, xyz.y, 0.001, epsilon = 1e-12));
    }

    #[test]
    fn test_approx_equal_requires_same_white_point() {
        let d50 = LabColor::new(50., 1., 2.);
        let d65 = LabColor::with_white_point(50., 1., 2., Illuminant::D65);
        assert!(d50.approx_equal(&d50, 0.));
        assert!(!d50.approx_equal(&d65, 1.));
    }
}
