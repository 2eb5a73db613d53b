//! Per-tetrahedron storage of peripheral curve crossings.
//!
//! A peripheral curve on a cusp torus is recorded combinatorially: for each
//! tetrahedron corner (vertex) it passes through, the signed number of times
//! it crosses each face near that corner. The store is dense and
//! fixed-size, addressed as `[sheet][handedness][vertex][face]`.

use crate::topology::orientation::Handedness;
use crate::topology::simplex::{Face, Vertex};

/// Which of the two tracked curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Sheet {
    /// Bounds a disk in the filled solid torus.
    Meridian,
    /// Meets the meridian once.
    Longitude,
}

impl Sheet {
    /// Both sheets, meridian first.
    pub const ALL: [Sheet; 2] = [Sheet::Meridian, Sheet::Longitude];

    /// Position in the store's outermost axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Sheet::Meridian => 0,
            Sheet::Longitude => 1,
        }
    }
}

type Crossings = [[[[i32; 4]; 4]; 2]; 2];

/// Signed crossing counts of the meridian and longitude at every corner.
#[derive(Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[repr(transparent)]
pub struct PeripheralCurves(Crossings);

impl core::fmt::Debug for PeripheralCurves {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // only the nonzero entries are interesting
        let mut m = f.debug_map();
        for sheet in Sheet::ALL {
            for h in [Handedness::Right, Handedness::Left] {
                for v in Vertex::ALL {
                    for face in Face::ALL {
                        let x = self.get(sheet, h, v, face);
                        if x != 0 {
                            m.entry(&(sheet, h, v, face), &x);
                        }
                    }
                }
            }
        }
        m.finish()
    }
}

impl PeripheralCurves {
    /// Crossing of `sheet` through `face` near corner `v`, handedness slot `h`.
    #[inline]
    pub fn get(&self, sheet: Sheet, h: Handedness, v: Vertex, face: Face) -> i32 {
        self.0[sheet.index()][h.index()][v.index()][face.index()]
    }

    /// Overwrite one entry.
    #[inline]
    pub fn set(&mut self, sheet: Sheet, h: Handedness, v: Vertex, face: Face, value: i32) {
        self.0[sheet.index()][h.index()][v.index()][face.index()] = value;
    }

    /// Crossings of `sheet` at corner `v` in the slot for handedness `h`.
    #[inline]
    pub fn corner(&self, sheet: Sheet, h: Handedness, v: Vertex) -> &[i32; 4] {
        &self.0[sheet.index()][h.index()][v.index()]
    }

    /// Whether `sheet` crosses any face at corner `v`, in either handedness slot.
    pub fn has_curve(&self, sheet: Sheet, v: Vertex) -> bool {
        self.0[sheet.index()]
            .iter()
            .any(|slot| slot[v.index()].iter().any(|&x| x != 0))
    }

    /// Signed sum of all crossings of `sheet` at corner `v`, both slots.
    pub fn crossing_sum(&self, sheet: Sheet, v: Vertex) -> i32 {
        self.0[sheet.index()]
            .iter()
            .map(|slot| slot[v.index()].iter().sum::<i32>())
            .sum()
    }

    /// True if no crossing of either sheet is recorded.
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// Zero the whole store.
    pub fn clear(&mut self) {
        self.0 = Default::default();
    }

    /// Zero one sheet, leaving the other untouched.
    pub fn clear_sheet(&mut self, sheet: Sheet) {
        self.0[sheet.index()] = Default::default();
    }
}
