//! This module simply brings the most common Prizm functionality under a single namespace, to
//! prevent excessive imports: the three color types, the `Color` enum, the `Converter` and its
//! conversion traits, `Illuminant`, and `Adaptation`.

pub use adaptation::Adaptation;
pub use color::{Color, XYZColor};
pub use colors::{LChabColor, LabColor};
pub use converter::{Converter, IntoLChab, IntoLab, IntoXYZ};
pub use illuminants::Illuminant;
