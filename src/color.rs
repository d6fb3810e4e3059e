//! This file defines `XYZColor`, the tristimulus representation every other space is defined
//! against, and `Color`, the closed set of color spaces Prizm knows about. `Color` is what generic
//! code (logging, display) should use when it only needs a color's components as numbers and not
//! its semantics.

use colors::{LChabColor, LabColor};
use coord::Coord;

/// A point in the CIE 1931 XYZ color space. Components are usually between 0 and 1 for reflective
/// colors, with Y = 1 being the luminance of the reference white, but nothing stops them from going
/// higher (emissive or over-range colors) and such values are still valid input.
///
/// An `XYZColor` does not carry an illuminant: which white point it is relative to is configured on
/// the [`Converter`] that interprets it.
///
/// [`Converter`]: ../converter/struct.Converter.html
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly representing the long-wavelength receptors in
    /// the human eye.
    pub x: f64,
    /// The Y axis of the CIE 1931 XYZ space, defined to be the luminance of the color.
    pub y: f64,
    /// The Z axis of the CIE 1931 XYZ space, roughly representing the short-wavelength receptors.
    pub z: f64,
}

impl XYZColor {
    /// Constructs a new XYZ color from its three tristimulus values.
    pub fn new(x: f64, y: f64, z: f64) -> XYZColor {
        XYZColor { x, y, z }
    }

    /// The components as an ordered vector, `[X, Y, Z]`.
    pub fn vector(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `true` if every component is within `tolerance` of the other color's.
    pub fn approx_equal(&self, other: &XYZColor, tolerance: f64) -> bool {
        (Coord::from(*self) - Coord::from(*other)).max_abs() <= tolerance
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(val: XYZColor) -> Self {
        Coord {
            x: val.x,
            y: val.y,
            z: val.z,
        }
    }
}

/// A color in any of the spaces Prizm supports. Each variant carries its fixed-arity component
/// data; `vector` projects it to a plain sequence of numbers.
///
/// # Example
///
/// ```
/// # use prizm::prelude::*;
/// let colors: Vec<Color> = vec![
///     XYZColor::new(0.2, 0.3, 0.4).into(),
///     LabColor::new(50., 10., -10.).into(),
///     LChabColor::new(50., 20., 270.).into(),
/// ];
/// for color in colors.iter() {
///     assert_eq!(color.vector().len(), 3);
/// }
/// assert_eq!(colors[2].vector(), vec![50., 20., 270.]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// A CIE 1931 XYZ color.
    XYZ(XYZColor),
    /// A CIELAB color with its reference white.
    Lab(LabColor),
    /// A CIELCh(ab) color with its reference white.
    LChab(LChabColor),
}

impl Color {
    /// The components of the color in the order its space defines: `[X, Y, Z]`, `[L, a, b]`, or
    /// `[L, C, h]`. Never empty.
    pub fn vector(&self) -> Vec<f64> {
        match *self {
            Color::XYZ(ref xyz) => xyz.vector().to_vec(),
            Color::Lab(ref lab) => lab.vector().to_vec(),
            Color::LChab(ref lch) => lch.vector().to_vec(),
        }
    }

    /// The short name of the color space: "XYZ", "Lab", or "LChab".
    pub fn space(&self) -> &'static str {
        match *self {
            Color::XYZ(_) => "XYZ",
            Color::Lab(_) => "Lab",
            Color::LChab(_) => "LChab",
        }
    }
}

impl From<XYZColor> for Color {
    fn from(xyz: XYZColor) -> Color {
        Color::XYZ(xyz)
    }
}

impl From<LabColor> for Color {
    fn from(lab: LabColor) -> Color {
        Color::Lab(lab)
    }
}

impl From<LChabColor> for Color {
    fn from(lch: LChabColor) -> Color {
        Color::LChab(lch)
    }
}
