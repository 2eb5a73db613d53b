//! Data module: per-tetrahedron curve storage and flat exports
#![warn(missing_docs)]

pub mod face_pairing;
pub mod peripheral_curves;

pub use face_pairing::FacePairing;
pub use peripheral_curves::{PeripheralCurves, Sheet};
