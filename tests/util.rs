#![allow(dead_code)]
use cusp_curves::prelude::*;

pub fn tid(i: u32) -> TetId {
    TetId::new(i)
}

/// Glue identity matchings for each face label, then set handedness.
fn from_matchings(
    n: usize,
    matchings: [Vec<(u32, u32)>; 4],
    left_handed: &[u32],
) -> TriangulationBuilder {
    let mut b = TriangulationBuilder::new(n);
    for (face, pairs) in Face::ALL.into_iter().zip(matchings.iter()) {
        b.glue_matching(face, pairs).expect("matching glues cleanly");
    }
    for &i in left_handed {
        b.set_orientation(tid(i), Handedness::Left).unwrap();
    }
    b
}

/// Cusp neighborhood with a longitude of `m + 3` crossings (`m` odd).
///
/// Tetrahedra 0..4 carry the meridian from 0 (`F2, F1, F2, F3` closes after
/// one round). The longitude leaves 0 through F2 into 1, 1 through F3 into
/// 5, then runs down a path `5 = P_m, ..., P_1, P_0 = 4` back into 0
/// through F1. Path interiors are the ids `6..m+5`. All gluings are the
/// identity and handedness alternates, so the result is orientable.
pub fn cusp_ladder(m: usize) -> Triangulation {
    assert!(m % 2 == 1, "ladder length must be odd");
    let mut path: Vec<u32> = vec![4];
    path.extend(6..(m as u32 + 5));
    path.push(5);

    let mut m0 = vec![(0, 1), (2, 3)];
    let mut m1 = vec![(1, 2), (0, 4), (3, 5)];
    let mut m2 = vec![(0, 1), (2, 3)];
    let mut m3 = vec![(0, 3), (1, 5), (2, 4)];
    for i in 0..m {
        let link = (path[i], path[i + 1]);
        if i % 2 == 0 {
            m0.push(link);
            m2.push(link);
        } else {
            m1.push(link);
            m3.push(link);
        }
    }

    let mut left = vec![1, 3];
    left.extend(path.iter().step_by(2).copied());
    from_matchings(m + 5, [m0, m1, m2, m3], &left)
        .build_with(GluingValidationOptions::all())
        .expect("ladder is a valid orientable triangulation")
}

/// The smallest ladder: six tetrahedra, longitude `0 -> 1 -> 5 -> 4 -> 0`.
pub fn six_tet_cusp() -> Triangulation {
    cusp_ladder(1)
}

/// Ten tetrahedra where the longitude search also wanders into the side
/// branch `8, 9` that the final longitude does not use.
pub fn branching_cusp() -> Triangulation {
    from_matchings(
        10,
        [
            vec![(0, 1), (2, 3), (4, 5), (6, 7), (8, 9)],
            vec![(1, 2), (0, 4), (6, 8), (3, 5), (7, 9)],
            vec![(0, 1), (2, 3), (4, 6), (5, 7), (8, 9)],
            vec![(0, 3), (1, 5), (2, 4), (6, 7), (8, 9)],
        ],
        &[],
    )
    .build()
    .expect("branching fixture glues symmetrically")
}

/// Renumber tetrahedron `i` as `sigma[i]`.
pub fn relabel(tri: &Triangulation, sigma: &[u32]) -> Triangulation {
    let table = tri.to_table();
    let mut rows = table.tetrahedra.clone();
    for (i, row) in table.tetrahedra.into_iter().enumerate() {
        let mut row = row;
        row.neighbors = row.neighbors.map(|nb| sigma[nb as usize]);
        rows[sigma[i] as usize] = row;
    }
    Triangulation::from_table(GluingTable { tetrahedra: rows }).expect("relabeling keeps validity")
}

/// Number of nonzero entries of `sheet` across all corners and slots.
pub fn stamped_entries(tri: &Triangulation, sheet: Sheet) -> usize {
    let mut count = 0;
    for (_, t) in tri.tetrahedra() {
        for h in [Handedness::Right, Handedness::Left] {
            for v in Vertex::ALL {
                count += t
                    .peripheral_curves
                    .corner(sheet, h, v)
                    .iter()
                    .filter(|&&x| x != 0)
                    .count();
            }
        }
    }
    count
}

/// Put a meridian crossing on `tet` by hand.
pub fn mark_meridian(tri: &mut Triangulation, tet: TetId) {
    let t = tri.tet_mut(tet).unwrap();
    let h = t.orientation;
    t.peripheral_curves
        .set(Sheet::Meridian, h, Vertex::V0, Face::F1, 1);
}

/// Vertex map fixing `V0` and `V2`, swapping `V1` and `V3`: glues `F1` to
/// `F3` and back.
pub fn swap13() -> Perm4 {
    Perm4::new([0, 3, 2, 1]).expect("transposition")
}

/// The six-tet cusp with four of its gluings twisted by [`swap13`]:
/// `0.F1 - 4.F3`, `2.F3 - 4.F1`, `1.F3 - 5.F1` and `3.F1 - 5.F3`.
/// Curves have the same shape as on [`six_tet_cusp`] but every crossing
/// through a twisted gluing enters through a different face label.
pub fn twisted_cusp() -> Triangulation {
    let p = swap13();
    let mut b = TriangulationBuilder::new(6);
    b.glue_matching(Face::F0, &[(0, 1), (2, 3), (4, 5)])
        .unwrap()
        .glue_matching(Face::F1, &[(1, 2)])
        .unwrap()
        .glue_matching(Face::F2, &[(0, 1), (2, 3), (4, 5)])
        .unwrap()
        .glue_matching(Face::F3, &[(0, 3)])
        .unwrap();
    b.glue(tid(0), Face::F1, tid(4), p)
        .unwrap()
        .glue(tid(2), Face::F3, tid(4), p)
        .unwrap()
        .glue(tid(1), Face::F3, tid(5), p)
        .unwrap()
        .glue(tid(3), Face::F1, tid(5), p)
        .unwrap();
    b.build().expect("twisted fixture glues symmetrically")
}
