//! Re-export public algorithms.

pub mod curve_checks;
pub mod face_walk;
pub mod longitude;
pub mod meridian;
pub mod peripheral;

pub use face_walk::{has_meridian, walk_faces};
pub use longitude::install_longitude;
pub use meridian::install_meridian;
pub use peripheral::{InstallOptions, install_peripheral_curves, install_peripheral_curves_with};
