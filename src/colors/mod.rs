//! This module contains the CIELAB-family color types and the bare transforms between them and
//! XYZ. For convenience, each main type is imported into this module's namespace directly.
pub mod cielabcolor;
pub mod cielchabcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::LabColor;
pub use self::cielchabcolor::LChabColor;
