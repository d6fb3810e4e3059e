//! The conversion context: the one place where white points are configured. A [`Converter`] holds
//! the working white point that XYZ colors are relative to and the white point CIELAB output is
//! encoded under, and threads both through every conversion it runs.
//!
//! Each conversion works on a copy of the converter taken when it starts, so a single call always
//! sees a consistent pair of white points even if the caller reconfigures the converter between
//! calls.
//!
//! [`Converter`]: struct.Converter.html

use adaptation::Adaptation;
use color::{Color, XYZColor};
use colors::cielabcolor::{lab_to_xyz, xyz_to_lab};
use colors::cielchabcolor::{lab_to_lchab, lchab_to_lab};
use colors::{LChabColor, LabColor};
use illuminants::Illuminant;

/// Converts colors between XYZ, CIELAB, and CIELCh(ab), adapting between white points as needed.
///
/// The default converter treats XYZ colors as relative to D65 and encodes CIELAB under D50
/// ([`LabColor::DEFAULT_WHITE_POINT`]), adapting with the Bradford transform.
///
/// # Example
///
/// ```
/// # use prizm::prelude::*;
/// let converter = Converter::new(Illuminant::D65, Illuminant::D65);
/// let lab = converter.to_lab(XYZColor::new(0.216938, 0.150041, 0.048850));
/// assert!((lab.l - 45.6398).abs() <= 1e-4);
/// assert!((lab.a - 39.8753).abs() <= 1e-4);
/// assert!((lab.b - 35.2091).abs() <= 1e-4);
///
/// let xyz = converter.to_xyz(LabColor::with_white_point(100., 0., 0., Illuminant::D65));
/// assert!(xyz.approx_equal(&XYZColor::new(0.95047, 1., 1.08883), 1e-6));
///
/// let lab = converter.to_lab(LChabColor::new(54.2917, 106.8391, 40.8526));
/// assert!((lab.a - 80.8125).abs() <= 1e-4);
/// assert!((lab.b - 69.8851).abs() <= 1e-4);
/// ```
///
/// [`LabColor::DEFAULT_WHITE_POINT`]: ../colors/cielabcolor/struct.LabColor.html#associatedconstant.DEFAULT_WHITE_POINT
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Converter {
    /// The white point XYZ colors are relative to, both as input and as output.
    pub white_point: Illuminant,
    /// The white point CIELAB colors produced from XYZ are encoded under.
    pub target_lab_white_point: Illuminant,
    /// The chromatic adaptation used whenever two white points differ.
    #[serde(default)]
    pub adaptation: Adaptation,
}

impl Default for Converter {
    fn default() -> Converter {
        Converter {
            white_point: Illuminant::D65,
            target_lab_white_point: LabColor::DEFAULT_WHITE_POINT,
            adaptation: Adaptation::default(),
        }
    }
}

impl Converter {
    /// Constructs a converter with the given working and CIELAB white points, adapting with the
    /// Bradford transform.
    pub fn new(white_point: Illuminant, target_lab_white_point: Illuminant) -> Converter {
        Converter {
            white_point,
            target_lab_white_point,
            adaptation: Adaptation::default(),
        }
    }

    /// Returns a copy of this converter with a different working white point.
    pub fn with_white_point(self, white_point: Illuminant) -> Converter {
        Converter {
            white_point,
            ..self
        }
    }

    /// Returns a copy of this converter with a different CIELAB white point.
    pub fn with_target_lab_white_point(self, target_lab_white_point: Illuminant) -> Converter {
        Converter {
            target_lab_white_point,
            ..self
        }
    }

    /// Returns a copy of this converter using a different chromatic adaptation.
    pub fn with_adaptation(self, adaptation: Adaptation) -> Converter {
        Converter {
            adaptation,
            ..self
        }
    }

    /// Adapts an XYZ color from one white point to another with this converter's adaptation.
    pub fn adapt(&self, xyz: XYZColor, source: Illuminant, target: Illuminant) -> XYZColor {
        self.adaptation.adapt(xyz, source, target)
    }

    /// Converts a color to XYZ relative to the working white point.
    ///
    /// CIELAB and LCh(ab) colors are decoded with their relative tristimulus values cropped to
    /// [0, 1], so nothing comes out brighter than the white point it was encoded under. Over-range
    /// or emissive XYZ colors therefore don't survive a trip through CIELAB:
    ///
    /// ```
    /// # use prizm::prelude::*;
    /// let converter = Converter::new(Illuminant::D65, Illuminant::D65);
    /// let lab = converter.to_lab(XYZColor::new(2., 2., 2.));
    /// assert!(lab.l > 130.);
    /// let xyz = converter.to_xyz(lab);
    /// assert!(xyz.approx_equal(&Illuminant::D65.to_xyz(), 1e-10));
    /// ```
    pub fn to_xyz<T: IntoXYZ>(&self, color: T) -> XYZColor {
        color.into_xyz(*self)
    }

    /// Converts a color to CIELAB. XYZ colors are adapted from the working white point and encoded
    /// under the target CIELAB white point; CIELAB colors are re-expressed under the target white
    /// point; LCh(ab) colors are reparametrized and keep their white point.
    pub fn to_lab<T: IntoLab>(&self, color: T) -> LabColor {
        color.into_lab(*self)
    }

    /// Converts a color to CIELCh(ab). XYZ colors go through [`to_lab`](#method.to_lab) first.
    pub fn to_lchab<T: IntoLChab>(&self, color: T) -> LChabColor {
        color.into_lchab(*self)
    }
}

/// A color that a [`Converter`](struct.Converter.html) can turn into XYZ.
pub trait IntoXYZ {
    /// Converts to XYZ relative to `converter.white_point`.
    fn into_xyz(self, converter: Converter) -> XYZColor;
}

/// A color that a [`Converter`](struct.Converter.html) can turn into CIELAB.
pub trait IntoLab {
    /// Converts to CIELAB using the white points of `converter`.
    fn into_lab(self, converter: Converter) -> LabColor;
}

/// A color that a [`Converter`](struct.Converter.html) can turn into CIELCh(ab).
pub trait IntoLChab {
    /// Converts to CIELCh(ab) using the white points of `converter`.
    fn into_lchab(self, converter: Converter) -> LChabColor;
}

impl IntoXYZ for XYZColor {
    fn into_xyz(self, _converter: Converter) -> XYZColor {
        self
    }
}

impl IntoXYZ for LabColor {
    /// Decodes under the color's own white point, then adapts to the working white point.
    fn into_xyz(self, converter: Converter) -> XYZColor {
        let xyz = lab_to_xyz(self);
        converter.adapt(xyz, self.white_point, converter.white_point)
    }
}

impl IntoXYZ for LChabColor {
    fn into_xyz(self, converter: Converter) -> XYZColor {
        lchab_to_lab(self).into_xyz(converter)
    }
}

impl IntoLab for XYZColor {
    fn into_lab(self, converter: Converter) -> LabColor {
        let target = converter.target_lab_white_point;
        let adapted = converter.adapt(self, converter.white_point, target);
        xyz_to_lab(adapted, target)
    }
}

impl IntoLab for LabColor {
    /// Identity if the color is already under the target white point. Otherwise decodes, adapts,
    /// and encodes again, which crops colors outside the range of their own white.
    fn into_lab(self, converter: Converter) -> LabColor {
        let target = converter.target_lab_white_point;
        if self.white_point == target {
            return self;
        }
        let xyz = converter.adapt(lab_to_xyz(self), self.white_point, target);
        xyz_to_lab(xyz, target)
    }
}

impl IntoLab for LChabColor {
    fn into_lab(self, _converter: Converter) -> LabColor {
        lchab_to_lab(self)
    }
}

impl IntoLChab for XYZColor {
    fn into_lchab(self, converter: Converter) -> LChabColor {
        lab_to_lchab(self.into_lab(converter))
    }
}

impl IntoLChab for LabColor {
    fn into_lchab(self, _converter: Converter) -> LChabColor {
        lab_to_lchab(self)
    }
}

impl IntoLChab for LChabColor {
    fn into_lchab(self, _converter: Converter) -> LChabColor {
        self
    }
}

impl IntoXYZ for Color {
    fn into_xyz(self, converter: Converter) -> XYZColor {
        match self {
            Color::XYZ(xyz) => xyz.into_xyz(converter),
            Color::Lab(lab) => lab.into_xyz(converter),
            Color::LChab(lch) => lch.into_xyz(converter),
        }
    }
}

impl IntoLab for Color {
    fn into_lab(self, converter: Converter) -> LabColor {
        match self {
            Color::XYZ(xyz) => xyz.into_lab(converter),
            Color::Lab(lab) => lab.into_lab(converter),
            Color::LChab(lch) => lch.into_lab(converter),
        }
    }
}

impl IntoLChab for Color {
    fn into_lchab(self, converter: Converter) -> LChabColor {
        match self {
            Color::XYZ(xyz) => xyz.into_lchab(converter),
            Color::Lab(lab) => lab.into_lchab(converter),
            Color::LChab(lch) => lch.into_lchab(converter),
        }
    }
}
