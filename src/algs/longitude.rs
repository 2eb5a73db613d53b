//! Longitude installation.
//!
//! With the meridian in place, the longitude is found by a breadth-first
//! search through tetrahedra the meridian does not touch. Around the start
//! tetrahedron `tet1` the shape of the curve is fixed:
//!
//! ```text
//!   tet0 = tet1.F1-neighbor      no meridian, where the search starts
//!   tet1 = start                 meridian, left through F2
//!   tet2 = tet1.F2-neighbor      meridian, left through F3
//!   tet3 = tet2.F3-neighbor      no meridian, where the search must arrive
//! ```
//!
//! The search records for each tetrahedron the face it was entered through.
//! Read backwards, those faces lead from `tet3` to `tet0` and on to `tet1`,
//! which closes the longitude. Ties between equally short paths go to the
//! first one found, expanding faces in the order `F1, F2, F3`.

use std::collections::{HashMap, VecDeque};

use crate::algs::face_walk::{cross_face, has_meridian};
use crate::algs::meridian::DEFAULT_STEP_LIMIT_FACTOR;
use crate::cusp_error::{CuspError, Malformation, Precondition};
use crate::data::peripheral_curves::Sheet;
use crate::topology::simplex::Face;
use crate::topology::triangulation::{TetId, Triangulation};

/// The four tetrahedra around the start that anchor the longitude.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LongitudeAnchors {
    pub tet0: TetId,
    pub tet1: TetId,
    pub tet2: TetId,
    pub tet3: TetId,
}

/// Tetrahedron → face to leave it through on the way back to the start.
pub type EntryFaces = HashMap<TetId, Face>;

/// Outcome of a longitude installation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LongitudePath {
    /// Tetrahedra occupied before each crossing, start first.
    pub tets: Vec<TetId>,
    /// How many tetrahedra the search visited (seeds included).
    pub visited: usize,
}

/// Locate the anchors and check the meridian pattern around them.
pub fn check_longitude_preconditions(
    tri: &Triangulation,
    start: TetId,
) -> Result<LongitudeAnchors, CuspError> {
    tri.tet(start)?;
    let tet0 = tri.neighbor(start, Face::F1);
    let tet1 = start;
    let tet2 = tri.neighbor(start, Face::F2);
    let tet3 = tri.neighbor(tet2, Face::F3);

    if has_meridian(tri, tet0) {
        return Err(Precondition::F1NeighborHasMeridian { tet: tet0 }.into());
    }
    if !has_meridian(tri, tet1) {
        return Err(Precondition::StartLacksMeridian { tet: tet1 }.into());
    }
    if !has_meridian(tri, tet2) {
        return Err(Precondition::F2NeighborLacksMeridian { tet: tet2 }.into());
    }
    if has_meridian(tri, tet3) {
        return Err(Precondition::TargetHasMeridian { tet: tet3 }.into());
    }
    Ok(LongitudeAnchors {
        tet0,
        tet1,
        tet2,
        tet3,
    })
}

/// Breadth-first search from `tet0` to `tet3` avoiding meridian tetrahedra.
///
/// Dequeues are bounded by `step_limit_factor * len`.
pub fn search_longitude(
    tri: &Triangulation,
    anchors: &LongitudeAnchors,
    step_limit_factor: usize,
) -> Result<EntryFaces, CuspError> {
    let LongitudeAnchors {
        tet0,
        tet1,
        tet2,
        tet3,
    } = *anchors;
    let limit = step_limit_factor * tri.len();

    let mut visited: EntryFaces = HashMap::from([(tet2, Face::F3), (tet1, Face::F2)]);
    let mut pending: VecDeque<(TetId, Face)> =
        VecDeque::from([(tet0, tri.glued_face(tet1, Face::F1))]);
    let mut expansions = 0usize;

    loop {
        let Some((tet, entry)) = pending.pop_front() else {
            return Err(Malformation::LongitudeUnreachable { target: tet3 }.into());
        };
        expansions += 1;
        if expansions > limit {
            return Err(Malformation::SearchLimitExceeded { limit }.into());
        }
        if visited.contains_key(&tet) {
            continue;
        }
        visited.insert(tet, entry);
        log::trace!("longitude search: visit tet {tet} entered through {entry}");
        if tet == tet3 {
            break;
        }
        for face in Face::WALK_FACES {
            if face == entry {
                continue;
            }
            let neighbor = tri.neighbor(tet, face);
            if !has_meridian(tri, neighbor) {
                pending.push_back((neighbor, tri.glued_face(tet, face)));
            }
        }
    }

    log::debug!(
        "longitude search reached tet {tet3} after {expansions} expansions, {} visited",
        visited.len()
    );
    Ok(visited)
}

/// Replay `entry_faces` as a closed walk from `start`, stamping the
/// longitude sheet. Fails instead of looping when the faces do not lead
/// back to `start`.
pub fn walk_tet_to_face(
    tri: &mut Triangulation,
    start: TetId,
    entry_faces: &EntryFaces,
) -> Result<Vec<TetId>, CuspError> {
    let limit = entry_faces.len();
    let mut path = Vec::new();
    let mut tet = start;
    loop {
        let face = *entry_faces
            .get(&tet)
            .ok_or(Malformation::BrokenLongitudePath { tet })?;
        if path.len() >= limit {
            return Err(Malformation::LongitudeNotClosed {
                start,
                steps: path.len(),
            }
            .into());
        }
        path.push(tet);
        tet = cross_face(tri, tet, face, Sheet::Longitude)?;
        if tet == start {
            break;
        }
    }
    Ok(path)
}

/// Find and stamp the longitude through `start`. The meridian must already
/// be installed there.
pub fn install_longitude(tri: &mut Triangulation, start: TetId) -> Result<LongitudePath, CuspError> {
    install_longitude_bounded(tri, start, DEFAULT_STEP_LIMIT_FACTOR)
}

pub fn install_longitude_bounded(
    tri: &mut Triangulation,
    start: TetId,
    step_limit_factor: usize,
) -> Result<LongitudePath, CuspError> {
    let anchors = check_longitude_preconditions(tri, start)?;
    let entry_faces = search_longitude(tri, &anchors, step_limit_factor)?;
    let tets = walk_tet_to_face(tri, start, &entry_faces)?;
    log::debug!(
        "longitude installed from tet {start}: {} crossings",
        tets.len()
    );
    Ok(LongitudePath {
        tets,
        visited: entry_faces.len(),
    })
}
