//! Flat face-pairing arrays, indexed by `4 * tet + face`.
//!
//! This is the layout a ray marcher uploads per tetrahedron face: when a ray
//! leaves tetrahedron `t` through face `f`, it continues in
//! `other_tet_nums[4t + f]`, entering through face
//! `entering_face_nums[4t + f]`.

use crate::cusp_error::{CuspError, Malformation};
use crate::topology::simplex::Face;
use crate::topology::triangulation::{TetId, Triangulation};

/// Neighbor and entering face of every tetrahedron face, flattened.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FacePairing {
    /// Tetrahedron across face `f` of tetrahedron `t`, at `4t + f`.
    pub other_tet_nums: Vec<u32>,
    /// Face of that tetrahedron the ray enters through, at `4t + f`.
    pub entering_face_nums: Vec<u8>,
}

impl FacePairing {
    /// Flatten the gluings of `tri`.
    pub fn from_triangulation(tri: &Triangulation) -> Self {
        let mut other_tet_nums = Vec::with_capacity(4 * tri.len());
        let mut entering_face_nums = Vec::with_capacity(4 * tri.len());
        for (_, tet) in tri.tetrahedra() {
            for face in Face::ALL {
                let g = tet.gluing(face);
                other_tet_nums.push(g.neighbor.get());
                entering_face_nums.push(g.glued_face(face).index() as u8);
            }
        }
        Self {
            other_tet_nums,
            entering_face_nums,
        }
    }

    /// Number of tetrahedra described.
    pub fn num_tets(&self) -> usize {
        self.other_tet_nums.len() / 4
    }

    /// Where a ray leaving `tet` through `face` continues.
    pub fn across(&self, tet: TetId, face: Face) -> Option<(TetId, Face)> {
        let i = 4 * tet.index() + face.index();
        let other = *self.other_tet_nums.get(i)?;
        let entering = Face::from_index(*self.entering_face_nums.get(i)? as usize)?;
        Some((TetId::new(other), entering))
    }

    /// Check that crossing a face and crossing back returns to where the ray
    /// started, for every face.
    pub fn check_consistency(&self) -> Result<(), CuspError> {
        let n = self.num_tets();
        if self.other_tet_nums.len() != 4 * n || self.entering_face_nums.len() != 4 * n {
            return Err(CuspError::FacePairingLengthMismatch {
                other_tet_nums: self.other_tet_nums.len(),
                entering_face_nums: self.entering_face_nums.len(),
            });
        }
        for t in 0..n as u32 {
            let tet = TetId::new(t);
            for face in Face::ALL {
                let back = self
                    .across(tet, face)
                    .and_then(|(other, entering)| self.across(other, entering));
                if back != Some((tet, face)) {
                    return Err(Malformation::AsymmetricGluing { tet, face }.into());
                }
            }
        }
        Ok(())
    }
}
