//! Orientation data attached to tetrahedra and their gluings, with small,
//! copyable representations.
//!
//! - [`Handedness`]: the per-tetrahedron orientation flag (group C₂).
//! - [`Perm4`]: the vertex permutation of a face gluing (group S₄).

use core::fmt::{Debug, Formatter};

use crate::topology::simplex::{Face, Vertex};

/// A group of orientation elements: `compose` is associative, `Default`
/// is the identity and `inverse` undoes an element.
pub trait Orientation: Copy + Default + Debug + 'static {
    fn compose(a: Self, b: Self) -> Self;
    fn inverse(a: Self) -> Self;
}

/// Combinatorial handedness of a tetrahedron.
/// Compose = XOR; inverse = self.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    /// Index into the orientation axis of a peripheral curve store.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Handedness::Right => 0,
            Handedness::Left => 1,
        }
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Handedness::Right => Handedness::Left,
            Handedness::Left => Handedness::Right,
        }
    }
}

impl Debug for Handedness {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Handedness::Right => f.write_str("Right"),
            Handedness::Left => f.write_str("Left"),
        }
    }
}

impl Orientation for Handedness {
    #[inline]
    fn compose(a: Self, b: Self) -> Self {
        if a == b {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }
    #[inline]
    fn inverse(a: Self) -> Self {
        a
    }
}

/// Vertex permutation of a face gluing, represented as mapping [0..4) -> [0..4).
/// Compose(p,q) = p ∘ q (apply q, then p).
///
/// Under the opposite-vertex convention a gluing that sends vertex `i` to
/// vertex `p(i)` also sends face `Fi` to face `Fp(i)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Perm4(pub [u8; 4]);

impl Default for Perm4 {
    fn default() -> Self {
        Perm4::IDENTITY
    }
}

impl Debug for Perm4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Perm4").field(&self.0).finish()
    }
}

impl Perm4 {
    pub const IDENTITY: Perm4 = Perm4([0, 1, 2, 3]);

    /// Builds a permutation, returning `None` unless `p` is a bijection of `0..4`.
    pub fn new(p: [u8; 4]) -> Option<Self> {
        let perm = Perm4(p);
        perm.is_valid().then_some(perm)
    }

    #[inline]
    pub fn new_unchecked(p: [u8; 4]) -> Self {
        Perm4(p)
    }

    /// Whether the mapping is a bijection of `0..4`.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; 4];
        for &i in &self.0 {
            match seen.get_mut(i as usize) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }

    #[inline]
    pub fn invert(&self) -> Self {
        let mut inv = [0u8; 4];
        let mut i = 0;
        while i < 4 {
            inv[self.0[i] as usize] = i as u8;
            i += 1;
        }
        Perm4(inv)
    }

    #[inline]
    pub fn image(&self, v: Vertex) -> Vertex {
        Vertex::from_index(self.0[v.index()] as usize).unwrap_or(v)
    }

    #[inline]
    pub fn face_image(&self, f: Face) -> Face {
        Face::from_index(self.0[f.index()] as usize).unwrap_or(f)
    }

    /// Number of inversions is odd.
    pub fn is_odd(&self) -> bool {
        let mut inversions = 0;
        for i in 0..4 {
            for j in (i + 1)..4 {
                if self.0[i] > self.0[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 1
    }
}

impl Orientation for Perm4 {
    #[inline]
    fn compose(a: Self, b: Self) -> Self {
        let mut out = [0u8; 4];
        let mut i = 0;
        while i < 4 {
            out[i] = a.0[b.0[i] as usize];
            i += 1;
        }
        Perm4(out)
    }
    #[inline]
    fn inverse(a: Self) -> Self {
        a.invert()
    }
}

/// Accumulate a sequence of orientation steps along a path, left-to-right.
/// Returns the total orientation from the seed to the end of the path.
/// Identity is `O::default()`.
#[inline]
pub fn accumulate_path<O, I>(path: I) -> O
where
    O: Orientation,
    I: IntoIterator<Item = O>,
{
    path.into_iter()
        .fold(O::default(), |acc, step| O::compose(step, acc))
}
