//! Chromatic adaptation: re-expressing a tristimulus value observed under one illuminant as the
//! value that would give the same color appearance under another. All of the transforms here are of
//! the von Kries type: XYZ is mapped into a cone-response space by a fixed matrix, each cone
//! response is scaled by the ratio of the two whites' responses, and the result is mapped back.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use color::XYZColor;
use consts::{BRADFORD_TRANSFORM, BRADFORD_TRANSFORM_INV, VON_KRIES_TRANSFORM,
             VON_KRIES_TRANSFORM_INV, XYZ_SCALING_TRANSFORM, XYZ_SCALING_TRANSFORM_INV};
use illuminants::Illuminant;

/// The cone-response model used for chromatic adaptation.
///
/// # Example
///
/// ```
/// # use prizm::prelude::*;
/// let xyz = XYZColor::new(0.3, 0.4, 0.5);
/// let d50 = Adaptation::Bradford.adapt(xyz, Illuminant::D65, Illuminant::D50);
/// let back = Adaptation::Bradford.adapt(d50, Illuminant::D50, Illuminant::D65);
/// assert!(back.approx_equal(&xyz, 1e-12));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adaptation {
    /// The Bradford transform, the usual choice and the one ICC profiles use.
    Bradford,
    /// The classic von Kries transform using the Hunt-Pointer-Estevez cone fundamentals.
    VonKries,
    /// Scaling XYZ directly. The least accurate; mostly useful for comparison.
    XYZScaling,
}

impl Default for Adaptation {
    fn default() -> Adaptation {
        Adaptation::Bradford
    }
}

impl Adaptation {
    fn matrices(&self) -> (&'static Matrix<f64>, &'static Matrix<f64>) {
        match *self {
            Adaptation::Bradford => (&*BRADFORD_TRANSFORM, &*BRADFORD_TRANSFORM_INV),
            Adaptation::VonKries => (&*VON_KRIES_TRANSFORM, &*VON_KRIES_TRANSFORM_INV),
            Adaptation::XYZScaling => (&*XYZ_SCALING_TRANSFORM, &*XYZ_SCALING_TRANSFORM_INV),
        }
    }

    /// Adapts `xyz`, relative to `source`, to the equivalent color relative to `target`. If the
    /// two white points are equal the input is returned untouched, without any rounding.
    pub fn adapt(&self, xyz: XYZColor, source: Illuminant, target: Illuminant) -> XYZColor {
        if source == target {
            return xyz;
        }
        trace!("{:?} adaptation from {} to {}", self, source, target);

        let (forward, inverse) = self.matrices();
        let cone = |v: [f64; 3]| forward * Vector::new(v.to_vec());
        let source_cone = cone(source.white_point());
        let target_cone = cone(target.white_point());
        let scaled = cone(xyz.vector()).elemul(&target_cone.elediv(&source_cone));
        let adapted = inverse * scaled;
        XYZColor {
            x: adapted[0],
            y: adapted[1],
            z: adapted[2],
        }
    }
}

/// Adapts `xyz` from `source` to `target` using the Bradford transform.
pub fn adapt(xyz: XYZColor, source: Illuminant, target: Illuminant) -> XYZColor {
    Adaptation::Bradford.adapt(xyz, source, target)
}
