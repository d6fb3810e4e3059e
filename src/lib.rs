//! Prizm converts colors between the CIE 1931 XYZ tristimulus space, CIELAB (L\*a\*b\*), and its
//! cylindrical form CIELCh(ab), taking care of the reference white points involved. CIELAB is only
//! meaningful relative to a white, and XYZ measurements are made under some illuminant: Prizm keeps
//! the white point attached to every CIELAB color and uses chromatic adaptation to move between
//! whites whenever a conversion crosses from one to another.
//!
//! The entry point is the [`Converter`](converter/struct.Converter.html), which holds the working
//! white point for XYZ colors and the white point CIELAB output is encoded under.
//!
//! ```
//! # use prizm::prelude::*;
//! let converter = Converter::new(Illuminant::D65, Illuminant::D50);
//! let lab = converter.to_lab(XYZColor::new(0.95047, 1.0, 1.08883));
//! // D65 white, adapted to D50, is CIELAB white
//! assert!((lab.l - 100.).abs() <= 1e-6);
//! assert!(lab.a.abs() <= 1e-6 && lab.b.abs() <= 1e-6);
//! ```

#![doc(html_root_url = "https://docs.rs/prizm/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate toml;

pub mod adaptation;
pub mod color;
pub mod colors;
mod consts;
pub mod converter;
pub mod coord;
pub mod illuminants;
pub mod prelude;
