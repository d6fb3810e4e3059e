//! This file provides the constants used for the CIELAB companding function and the cone-response
//! matrices used for chromatic adaptation. The matrices are stored alongside inverses computed once
//! from them rather than separately tabulated inverses: tabulated inverses are rounded, which lets
//! small errors creep in when adapting to an illuminant and back again.

use rulinalg::matrix::Matrix;

/// The CIE standard ε, (6/29)^3. Below this relative luminance CIELAB switches from a cube root to a
/// linear segment.
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// The CIE standard κ, (29/3)^3. The slope of the linear segment near black, scaled by 116.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// Not safe for general use. The only reason this is here is to calculate the inverse of constant
/// matrices. This panics on singular matrices!
fn inv(m: &Matrix<f64>) -> Matrix<f64> {
    match m.clone().inverse() {
        Ok(inverse) => inverse,
        Err(_) => panic!("Constant matrix not invertible!"),
    }
}

lazy_static! {
    /// The Bradford cone-response matrix, as published by Lam (1985).
    pub static ref BRADFORD_TRANSFORM: Matrix<f64> = matrix![
         0.8951,  0.2664, -0.1614;
        -0.7502,  1.7135,  0.0367;
         0.0389, -0.0685,  1.0296
    ];
    pub static ref BRADFORD_TRANSFORM_INV: Matrix<f64> = inv(&BRADFORD_TRANSFORM);

    /// The Hunt-Pointer-Estevez matrix, normalized to D65, used by the classic von Kries transform.
    pub static ref VON_KRIES_TRANSFORM: Matrix<f64> = matrix![
         0.40024, 0.70760, -0.08081;
        -0.22630, 1.16532,  0.04570;
         0.00000, 0.00000,  0.91822
    ];
    pub static ref VON_KRIES_TRANSFORM_INV: Matrix<f64> = inv(&VON_KRIES_TRANSFORM);

    /// Plain XYZ scaling: the "cone space" is XYZ itself.
    pub static ref XYZ_SCALING_TRANSFORM: Matrix<f64> = Matrix::identity(3);
    pub static ref XYZ_SCALING_TRANSFORM_INV: Matrix<f64> = Matrix::identity(3);
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cie_constants() {
        // the two constants are tied together: κε = 8, the L* where the segments meet
        assert!((CIE_KAPPA * CIE_EPSILON - 8.0).abs() <= 1e-12);
        assert!((CIE_EPSILON - (6.0f64 / 29.0).powi(3)).abs() <= 1e-15);
    }

    #[test]
    fn test_bradford_inverse() {
        let product = &*BRADFORD_TRANSFORM * &*BRADFORD_TRANSFORM_INV;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product[[i, j]] - expected).abs() <= 1e-12);
            }
        }
        // the published inverse, to the precision it was published with
        assert!((BRADFORD_TRANSFORM_INV[[0, 0]] - 0.9869929).abs() <= 1e-6);
        assert!((BRADFORD_TRANSFORM_INV[[1, 1]] - 0.5183603).abs() <= 1e-6);
        assert!((BRADFORD_TRANSFORM_INV[[2, 2]] - 0.9684867).abs() <= 1e-6);
    }

    #[test]
    fn test_von_kries_inverse() {
        let product = &*VON_KRIES_TRANSFORM * &*VON_KRIES_TRANSFORM_INV;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product[[i, j]] - expected).abs() <= 1e-12);
            }
        }
    }
}
