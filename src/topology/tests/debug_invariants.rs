#![cfg(any(debug_assertions, feature = "strict-invariants"))]

use crate::debug_invariants::DebugInvariants;
use crate::topology::orientation::{Handedness, Perm4};
use crate::topology::triangulation::{GluingTable, TetGluingRow, Triangulation};

#[test]
#[should_panic]
fn asymmetric_gluing_panics_in_debug() {
    let table = GluingTable {
        tetrahedra: vec![
            TetGluingRow {
                orientation: Handedness::Right,
                neighbors: [1, 1, 1, 1],
                perms: [Perm4::IDENTITY; 4],
            },
            TetGluingRow {
                orientation: Handedness::Left,
                neighbors: [0, 0, 0, 1],
                perms: [Perm4::IDENTITY, Perm4::IDENTITY, Perm4::IDENTITY, Perm4::new([0, 1, 3, 2]).unwrap()],
            },
        ],
    };
    let tri = Triangulation::from_table_unchecked(table).unwrap();
    tri.debug_assert_invariants();
}
