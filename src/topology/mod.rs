//! Top-level module for triangulation topology.
//!
//! This module provides the combinatorial model of a 3-manifold triangulation:
//! - Vertex and face labels of a tetrahedron
//! - Handedness flags and gluing permutations
//! - The `Triangulation` arena, its builder and gluing validation
//!
//! Most users build a `Triangulation` with `TriangulationBuilder` or from a
//! `GluingTable`, then hand it to the installers in `crate::algs`.

pub mod builder;
pub mod orientation;
pub mod simplex;
pub mod triangulation;
pub mod validation;

pub use builder::TriangulationBuilder;
pub use orientation::*;
pub use simplex::{Face, Vertex};
pub use triangulation::{GluingTable, TetGluingRow, TetId, Tetrahedron, Triangulation};

#[cfg(test)]
mod tests;
