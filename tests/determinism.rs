//! Installed curves depend only on the gluings, not on how the tetrahedra
//! happen to be numbered.
mod util;
use cusp_curves::prelude::*;
use proptest::prelude::*;
use util::*;

fn fixture(which: usize) -> Triangulation {
    match which {
        0 => six_tet_cusp(),
        1 => cusp_ladder(5),
        _ => branching_cusp(),
    }
}

fn fixture_and_relabeling() -> impl Strategy<Value = (usize, Vec<u32>)> {
    (0usize..3).prop_flat_map(|which| {
        let n = fixture(which).len() as u32;
        (Just(which), Just((0..n).collect::<Vec<u32>>()).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn relabeling_commutes_with_installation((which, sigma) in fixture_and_relabeling()) {
        let mut tri = fixture(which);
        let mut renamed = relabel(&tri, &sigma);
        let map = |t: &TetId| tid(sigma[t.index()]);

        let report = install_peripheral_curves(&mut tri, tid(0)).unwrap();
        let renamed_report = install_peripheral_curves(&mut renamed, tid(sigma[0])).unwrap();

        prop_assert_eq!(
            report.meridian.iter().map(map).collect::<Vec<_>>(),
            renamed_report.meridian
        );
        prop_assert_eq!(
            report.longitude.iter().map(map).collect::<Vec<_>>(),
            renamed_report.longitude
        );
        prop_assert_eq!(report.visited, renamed_report.visited);
    }
}

#[test]
fn repeated_runs_agree() {
    let runs: Vec<PeripheralCurveReport> = (0..8)
        .map(|_| {
            let mut tri = branching_cusp();
            install_peripheral_curves(&mut tri, tid(0)).unwrap()
        })
        .collect();
    assert!(runs.windows(2).all(|w| w[0] == w[1]));
}
