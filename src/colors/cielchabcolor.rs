//! This file implements the CIELCh(ab) color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. It is a pure reparametrization: converting
//! between the two never touches the reference white, which is simply carried along.

use colors::cielabcolor::LabColor;
use coord::Coord;
use illuminants::Illuminant;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
///
/// # Example
///
/// ```
/// # use prizm::prelude::*;
/// // hue-shift a red a quarter turn, keeping the same lightness and chroma
/// let red = LChabColor::new(54.2917, 106.8391, 40.8526);
/// let mut shifted = red;
/// shifted.h = (shifted.h + 90.) % 360.;
/// let lab = Converter::default().to_lab(shifted);
/// assert!((lab.l - 54.2917).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LChabColor {
    /// The luminance component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component: the distance from the neutral axis a = b = 0. Never negative for
    /// colors derived from CIELAB.
    pub c: f64,
    /// The hue component, in degrees. Colors derived from CIELAB have a hue in [0, 360).
    pub h: f64,
    /// The reference white of the CIELAB color this is a reparametrization of.
    pub white_point: Illuminant,
}

impl LChabColor {
    /// Constructs a new LCh(ab) color relative to the default CIELAB white point.
    pub fn new(l: f64, c: f64, h: f64) -> LChabColor {
        LChabColor::with_white_point(l, c, h, LabColor::DEFAULT_WHITE_POINT)
    }

    /// Constructs a new LCh(ab) color relative to the given white point.
    pub fn with_white_point(l: f64, c: f64, h: f64, white_point: Illuminant) -> LChabColor {
        LChabColor {
            l,
            c,
            h,
            white_point,
        }
    }

    /// The components as an ordered vector, `[L, C, h]`.
    pub fn vector(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    /// Returns `true` if the two colors share a white point and every component is within
    /// `tolerance` of the other's. Hues are compared around the circle, so 359.99 and 0.01 are 0.02
    /// apart.
    pub fn approx_equal(&self, other: &LChabColor, tolerance: f64) -> bool {
        let diff = Coord::from(*self) - Coord::from(*other);
        let hue_diff = diff.z.abs() % 360.0;
        self.white_point == other.white_point
            && diff.x.abs() <= tolerance
            && diff.y.abs() <= tolerance
            && hue_diff.min(360.0 - hue_diff) <= tolerance
    }
}

/// Converts a CIELAB color to its cylindrical form. Achromatic colors (a = b = 0, with either sign
/// of zero) get a chroma and hue of exactly 0.
pub fn lab_to_lchab(lab: LabColor) -> LChabColor {
    // adding +0 turns -0 into +0: atan2(+0, -0) is 180, atan2(+0, +0) is 0
    let (a, b) = (lab.a + 0.0, lab.b + 0.0);
    // radius is sqrt(a^2 + b^2)
    let c = b.hypot(a);
    // atan2 gives (-180, 180]
    let unbounded_h = b.atan2(a).to_degrees();
    // should only need to be done once
    let h = if unbounded_h < 0.0 {
        unbounded_h + 360.0
    } else {
        unbounded_h
    };
    // -1e-20 + 360 rounds up to exactly 360
    let h = if h >= 360.0 { h - 360.0 } else { h };

    LChabColor {
        l: lab.l,
        c,
        h,
        white_point: lab.white_point,
    }
}

/// Converts a cylindrical color back to CIELAB, keeping the white point.
pub fn lchab_to_lab(lch: LChabColor) -> LabColor {
    // a = c cos h, b = c sin h
    let (sin, cos) = lch.h.to_radians().sin_cos();
    LabColor {
        l: lch.l,
        a: lch.c * cos,
        b: lch.c * sin,
        white_point: lch.white_point,
    }
}

impl From<LChabColor> for Coord {
    fn from(val: LChabColor) -> Self {
        Coord {
            x: val.l,
            y: val.c,
            z: val.h,
        }
    }
}
