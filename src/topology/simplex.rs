//! Vertex and face labels of a single tetrahedron.
//!
//! Faces follow the opposite-vertex convention: face `Fi` is the face that
//! does not contain vertex `Vi`. The cusp cross-section the installers work
//! on sits at the corner `V0`, so only the faces `F1`, `F2`, `F3` (the ones
//! incident to `V0`) are ever crossed by a peripheral curve.

use core::fmt;

/// One of the four faces of a tetrahedron.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Face {
    F0,
    F1,
    F2,
    F3,
}

/// One of the four vertices of a tetrahedron.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Vertex {
    V0,
    V1,
    V2,
    V3,
}

impl Face {
    /// All faces in label order.
    pub const ALL: [Face; 4] = [Face::F0, Face::F1, Face::F2, Face::F3];

    /// Faces incident to the cusp vertex `V0`, in the order the longitude
    /// search expands them.
    pub const WALK_FACES: [Face; 3] = [Face::F1, Face::F2, Face::F3];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face with the given index, or `None` if `i > 3`.
    #[inline]
    pub const fn from_index(i: usize) -> Option<Face> {
        match i {
            0 => Some(Face::F0),
            1 => Some(Face::F1),
            2 => Some(Face::F2),
            3 => Some(Face::F3),
            _ => None,
        }
    }

    /// The vertex this face does not contain.
    #[inline]
    pub const fn opposite_vertex(self) -> Vertex {
        match self {
            Face::F0 => Vertex::V0,
            Face::F1 => Vertex::V1,
            Face::F2 => Vertex::V2,
            Face::F3 => Vertex::V3,
        }
    }

    /// Whether `v` is one of the three corners of this face.
    #[inline]
    pub fn contains(self, v: Vertex) -> bool {
        self.opposite_vertex() != v
    }
}

impl Vertex {
    pub const ALL: [Vertex; 4] = [Vertex::V0, Vertex::V1, Vertex::V2, Vertex::V3];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(i: usize) -> Option<Vertex> {
        match i {
            0 => Some(Vertex::V0),
            1 => Some(Vertex::V1),
            2 => Some(Vertex::V2),
            3 => Some(Vertex::V3),
            _ => None,
        }
    }

    /// The face not containing this vertex.
    #[inline]
    pub const fn opposite_face(self) -> Face {
        match self {
            Vertex::V0 => Face::F0,
            Vertex::V1 => Face::F1,
            Vertex::V2 => Face::F2,
            Vertex::V3 => Face::F3,
        }
    }

    /// The three faces meeting at this vertex, in label order.
    pub fn incident_faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| f.contains(self))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.index())
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_roundtrip() {
        for f in Face::ALL {
            assert_eq!(f.opposite_vertex().opposite_face(), f);
            assert!(!f.contains(f.opposite_vertex()));
        }
    }

    #[test]
    fn walk_faces_are_the_faces_at_v0() {
        let at_v0: Vec<Face> = Vertex::V0.incident_faces().collect();
        assert_eq!(at_v0, Face::WALK_FACES.to_vec());
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Face::from_index(2), Some(Face::F2));
        assert_eq!(Face::from_index(4), None);
        assert_eq!(Vertex::from_index(7), None);
    }
}
