mod util;
use cusp_curves::algs::curve_checks::{check_sign_balance, crossing, curve_support};
use cusp_curves::algs::face_walk::walk_faces;
use cusp_curves::algs::meridian::{MERIDIAN_FACES, install_meridian};
use cusp_curves::prelude::*;
use util::*;

#[test]
fn meridian_face_sequence_closes_at_start() {
    for tri in [six_tet_cusp(), cusp_ladder(5), branching_cusp()] {
        let walk = walk_faces(&tri, tid(0), MERIDIAN_FACES).unwrap();
        assert!(walk.is_closed(), "walk ended at {:?}", walk.end);
        assert_eq!(walk.tets, vec![tid(0), tid(1), tid(2), tid(3)]);
        assert_eq!(walk.holonomy, Perm4::IDENTITY);
    }
}

#[test]
fn meridian_visits_four_tets_with_eight_stamps() {
    let mut tri = six_tet_cusp();
    let path = install_meridian(&mut tri, tid(0)).unwrap();
    assert_eq!(path, vec![tid(0), tid(1), tid(2), tid(3)]);
    assert_eq!(stamped_entries(&tri, Sheet::Meridian), 8);
    assert_eq!(stamped_entries(&tri, Sheet::Longitude), 0);
    assert_eq!(curve_support(&tri, Sheet::Meridian), path);

    // exit on the start tet, entry on its F2-neighbor
    assert_eq!(crossing(&tri, tid(0), Sheet::Meridian, Face::F2), -1);
    assert_eq!(crossing(&tri, tid(1), Sheet::Meridian, Face::F2), 1);
    assert_eq!(crossing(&tri, tid(0), Sheet::Meridian, Face::F3), 1);
    check_sign_balance(&tri, Sheet::Meridian).unwrap();
}

#[test]
fn stamps_land_in_each_tets_own_handedness_slot() {
    let mut tri = six_tet_cusp();
    install_meridian(&mut tri, tid(0)).unwrap();
    // tet 1 is left-handed, so its right-handed slot stays empty
    let curves = &tri[tid(1)].peripheral_curves;
    assert_eq!(
        curves.corner(Sheet::Meridian, Handedness::Right, Vertex::V0),
        &[0, 0, 0, 0]
    );
    assert_eq!(
        curves.corner(Sheet::Meridian, Handedness::Left, Vertex::V0),
        &[0, -1, 1, 0]
    );
}

#[test]
fn meridian_repeats_rounds_until_it_closes() {
    // same as the six-tet cusp except F3 pairs {0,2}, {1,5}, {3,4}:
    // the first round ends in 4, the second comes back to 0
    let mut b = TriangulationBuilder::new(6);
    b.glue_matching(Face::F0, &[(0, 1), (2, 3), (4, 5)])
        .unwrap()
        .glue_matching(Face::F1, &[(0, 4), (1, 2), (3, 5)])
        .unwrap()
        .glue_matching(Face::F2, &[(0, 1), (2, 3), (4, 5)])
        .unwrap()
        .glue_matching(Face::F3, &[(0, 2), (1, 5), (3, 4)])
        .unwrap();
    let mut tri = b.build().unwrap();

    let path = install_meridian(&mut tri, tid(0)).unwrap();
    assert_eq!(path.len(), 8);
    assert_eq!(&path[..5], &[tid(0), tid(1), tid(2), tid(3), tid(4)]);
    check_sign_balance(&tri, Sheet::Meridian).unwrap();
    assert_eq!(total_crossing_sum(&tri, Sheet::Meridian), 0);
}

#[test]
fn crossing_that_moves_the_cusp_vertex_is_rejected_before_stamping() {
    // F2 of 0 is glued to F0 of 1 by swapping V0 and V2
    let swap = Perm4::new([2, 1, 0, 3]).unwrap();
    let mut b = TriangulationBuilder::new(6);
    b.glue(tid(0), Face::F2, tid(1), swap)
        .unwrap()
        .glue(tid(0), Face::F0, tid(1), swap)
        .unwrap()
        .glue_matching(Face::F0, &[(2, 3), (4, 5)])
        .unwrap()
        .glue_matching(Face::F1, &[(0, 4), (1, 2), (3, 5)])
        .unwrap()
        .glue_matching(Face::F2, &[(2, 3), (4, 5)])
        .unwrap()
        .glue_matching(Face::F3, &[(0, 3), (1, 5), (2, 4)])
        .unwrap();
    let mut tri = b.build().unwrap();

    let err = install_meridian(&mut tri, tid(0)).unwrap_err();
    assert_eq!(
        err,
        CuspError::MalformedTriangulation(Malformation::CuspVertexNotPreserved {
            tet: tid(0),
            face: Face::F2
        })
    );
    assert_eq!(stamped_entries(&tri, Sheet::Meridian), 0);
}

#[test]
fn unknown_start_is_rejected() {
    let mut tri = six_tet_cusp();
    assert!(matches!(
        install_meridian(&mut tri, tid(42)),
        Err(CuspError::TetOutOfRange { len: 6, .. })
    ));
}

#[test]
fn non_closing_walk_is_reported_instead_of_looping() {
    // gluings are not involutive (tet 0's F2 goes to 1, tet 1's F2 goes
    // back to 0, but tet 2 and 3 disagree on F1): rounds from 0 settle into
    // a cycle through 2 and 3 that never returns to 0
    let id = [Perm4::IDENTITY; 4];
    let row = |neighbors: [u32; 4]| cusp_curves::topology::TetGluingRow {
        orientation: Handedness::Right,
        neighbors,
        perms: id,
    };
    let table = GluingTable {
        tetrahedra: vec![
            row([1, 1, 1, 2]),
            row([0, 2, 0, 2]),
            row([3, 1, 3, 2]),
            row([2, 3, 2, 3]),
        ],
    };
    let mut tri = Triangulation::from_table_unchecked(table).unwrap();
    let err = install_meridian(&mut tri, tid(0)).unwrap_err();
    assert!(matches!(
        err,
        CuspError::MalformedTriangulation(Malformation::MeridianNotClosed { steps: 16, .. })
    ));
}
