//! This module provides an enum of the illuminants supported by Prizm, along with a table of white
//! point values for the named CIE illuminants. The values are for the CIE 1931 2° standard observer
//! and are normalized so that the Y (luminance) value is 1, the same scale that `XYZColor` uses. The
//! source for the table is Bruce Lindbloom's compilation of CIE data.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use color::XYZColor;

/// A listing of the supported CIE standard illuminants, standards that describe a particular set of
/// lighting conditions. An illuminant is used as the reference white point of a CIELAB color and as
/// the source or target of a chromatic adaptation.
///
/// Two illuminants compare equal whenever their white points are equal, so a `Custom` white point
/// with the same coordinates as a named one is interchangeable with it.
///
/// # Example
///
/// ```
/// # use prizm::prelude::*;
/// let d65: Illuminant = "D65".parse().unwrap();
/// assert_eq!(d65, Illuminant::D65);
/// assert_eq!(Illuminant::Custom([0.95047, 1.0, 1.08883]), Illuminant::D65);
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub enum Illuminant {
    /// Incandescent (tungsten) light, about 2856K.
    A,
    /// Simulated noon sunlight (obsolete).
    B,
    /// Simulated average daylight (obsolete).
    C,
    /// Horizon light, about 5003K. The reference white of ICC profiles and of CIELAB in printing.
    D50,
    /// Mid-morning or mid-afternoon daylight, about 5500K.
    D55,
    /// Noon daylight, about 6504K. The white point of sRGB and most displays.
    D65,
    /// North sky daylight, about 7500K.
    D75,
    /// The equal-energy radiator.
    E,
    /// Cool white fluorescent.
    F2,
    /// Broad-band daylight fluorescent.
    F7,
    /// Narrow-band white fluorescent.
    F11,
    /// A white point given directly as an array [X, Y, Z] in CIE 1931 space.
    Custom([f64; 3]),
}

/// An array of the named illuminants, in the same order as the enum definition.
pub static ILLUMINANTS: [Illuminant; 11] = [
    Illuminant::A,
    Illuminant::B,
    Illuminant::C,
    Illuminant::D50,
    Illuminant::D55,
    Illuminant::D65,
    Illuminant::D75,
    Illuminant::E,
    Illuminant::F2,
    Illuminant::F7,
    Illuminant::F11,
];

/// A table of white point values for the named illuminants, in the order of [`ILLUMINANTS`]. Each
/// white point is an array of 3 `f64` values X, Y, and Z, normalized so that Y is 1.
///
/// [`ILLUMINANTS`]: static.ILLUMINANTS.html
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 11] = [
    [1.09850, 1.0, 0.35585],
    [0.99072, 1.0, 0.85223],
    [0.98074, 1.0, 1.18232],
    [0.96422, 1.0, 0.82521],
    [0.95682, 1.0, 0.92149],
    [0.95047, 1.0, 1.08883],
    [0.94972, 1.0, 1.22638],
    [1.00000, 1.0, 1.00000],
    [0.99186, 1.0, 0.67393],
    [0.95041, 1.0, 1.08747],
    [1.00962, 1.0, 0.64350],
];

static ILLUMINANT_NAMES: [&str; 11] = [
    "A", "B", "C", "D50", "D55", "D65", "D75", "E", "F2", "F7", "F11",
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::A => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::B => ILLUMINANT_WHITE_POINTS[1],
            Illuminant::C => ILLUMINANT_WHITE_POINTS[2],
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[3],
            Illuminant::D55 => ILLUMINANT_WHITE_POINTS[4],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[5],
            Illuminant::D75 => ILLUMINANT_WHITE_POINTS[6],
            Illuminant::E => ILLUMINANT_WHITE_POINTS[7],
            Illuminant::F2 => ILLUMINANT_WHITE_POINTS[8],
            Illuminant::F7 => ILLUMINANT_WHITE_POINTS[9],
            Illuminant::F11 => ILLUMINANT_WHITE_POINTS[10],
            Illuminant::Custom(xyz) => xyz,
        }
    }

    /// Gets the white point as an `XYZColor`. Converting this color to CIELAB under the same
    /// illuminant always gives L = 100, a = b = 0.
    pub fn to_xyz(&self) -> XYZColor {
        let [x, y, z] = self.white_point();
        XYZColor { x, y, z }
    }

    /// The standard name of a named illuminant, or `None` for a custom white point.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Illuminant::Custom(_) => None,
            named => ILLUMINANTS
                .iter()
                .position(|i| i.white_point() == named.white_point())
                .map(|i| ILLUMINANT_NAMES[i]),
        }
    }
}

impl PartialEq for Illuminant {
    fn eq(&self, other: &Illuminant) -> bool {
        self.white_point() == other.white_point()
    }
}

/// An error in parsing the name of an illuminant.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum IlluminantParseError {
    /// The string was empty or only whitespace.
    Empty,
    /// The string did not name any supported illuminant. Holds the offending name.
    UnknownName(String),
}

impl fmt::Display for IlluminantParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IlluminantParseError::Empty => write!(f, "empty illuminant name"),
            IlluminantParseError::UnknownName(ref name) => {
                write!(f, "unknown illuminant \"{}\"", name)
            }
        }
    }
}

impl Error for IlluminantParseError {}

impl FromStr for Illuminant {
    type Err = IlluminantParseError;

    /// Parses the standard name of an illuminant, ignoring case and surrounding whitespace: "D65",
    /// "d50", and " F11 " are all valid.
    fn from_str(s: &str) -> Result<Illuminant, IlluminantParseError> {
        let name = s.trim();
        if name.is_empty() {
            return Err(IlluminantParseError::Empty);
        }
        ILLUMINANT_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| ILLUMINANTS[i])
            .ok_or_else(|| IlluminantParseError::UnknownName(name.to_string()))
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => {
                let [x, y, z] = self.white_point();
                write!(f, "Custom({}, {}, {})", x, y, z)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_named_white_points() {
        assert_eq!(Illuminant::D65.white_point(), [0.95047, 1.0, 1.08883]);
        assert_eq!(Illuminant::D50.white_point(), [0.96422, 1.0, 0.82521]);
        for illuminant in ILLUMINANTS.iter() {
            // every named white point is normalized to Y = 1
            assert_eq!(illuminant.white_point()[1], 1.0);
        }
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Illuminant::Custom([0.96422, 1.0, 0.82521]), Illuminant::D50);
        assert_ne!(Illuminant::D50, Illuminant::D65);
        assert_ne!(Illuminant::Custom([0.5, 1.0, 0.5]), Illuminant::E);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("d65".parse::<Illuminant>(), Ok(Illuminant::D65));
        assert_eq!(" F11 ".parse::<Illuminant>(), Ok(Illuminant::F11));
        for illuminant in ILLUMINANTS.iter() {
            let name = illuminant.to_string();
            assert_eq!(name.parse::<Illuminant>(), Ok(*illuminant));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Illuminant>(), Err(IlluminantParseError::Empty));
        assert_eq!(
            "D66".parse::<Illuminant>(),
            Err(IlluminantParseError::UnknownName("D66".to_string()))
        );
        assert_eq!(
            IlluminantParseError::UnknownName("D66".to_string()).to_string(),
            "unknown illuminant \"D66\""
        );
    }

    #[test]
    fn test_custom_display() {
        let custom = Illuminant::Custom([0.5, 1.0, 0.25]);
        assert_eq!(custom.name(), None);
        assert_eq!(custom.to_string(), "Custom(0.5, 1, 0.25)");
    }
}
