//! Install a meridian and a longitude on the cusp at a start tetrahedron.

use crate::algs::curve_checks::check_sign_balance;
use crate::algs::longitude::install_longitude_bounded;
use crate::algs::meridian::{DEFAULT_STEP_LIMIT_FACTOR, install_meridian_bounded};
use crate::cusp_error::CuspError;
use crate::data::peripheral_curves::Sheet;
use crate::debug_invariants::DebugInvariants;
use crate::topology::triangulation::{TetId, Triangulation};
use crate::topology::validation::{GluingValidationOptions, validate_gluings};

/// Knobs for [`install_peripheral_curves_with`].
#[derive(Debug, Clone, Copy)]
pub struct InstallOptions {
    /// Re-validate the gluings before walking (useful for triangulations
    /// built with `from_table_unchecked`).
    pub validation: Option<GluingValidationOptions>,
    /// Walks and the longitude search give up after this many multiples of
    /// the tetrahedron count.
    pub step_limit_factor: usize,
    /// After installing, check that every stamped crossing is answered by
    /// the opposite sign on the glued face.
    pub verify_sign_balance: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            validation: None,
            step_limit_factor: DEFAULT_STEP_LIMIT_FACTOR,
            verify_sign_balance: false,
        }
    }
}

impl InstallOptions {
    /// Validate before and verify after.
    pub fn strict() -> Self {
        Self {
            validation: Some(GluingValidationOptions::default()),
            step_limit_factor: DEFAULT_STEP_LIMIT_FACTOR,
            verify_sign_balance: true,
        }
    }
}

/// What an installation touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeripheralCurveReport {
    pub start: TetId,
    /// Tetrahedra the meridian left, in order.
    pub meridian: Vec<TetId>,
    /// Tetrahedra the longitude left, in order.
    pub longitude: Vec<TetId>,
    /// Tetrahedra visited by the longitude search.
    pub visited: usize,
}

/// Install the meridian and then the longitude at `start`.
///
/// There is no rollback: if the longitude fails, the meridian stays
/// stamped and the triangulation should be discarded (or cleared with
/// [`Triangulation::clear_peripheral_curves`]).
pub fn install_peripheral_curves(
    tri: &mut Triangulation,
    start: TetId,
) -> Result<PeripheralCurveReport, CuspError> {
    install_peripheral_curves_with(tri, start, &InstallOptions::default())
}

pub fn install_peripheral_curves_with(
    tri: &mut Triangulation,
    start: TetId,
    options: &InstallOptions,
) -> Result<PeripheralCurveReport, CuspError> {
    tri.tet(start)?;
    let mut gluings_checked = false;
    if let Some(v) = options.validation {
        validate_gluings(tri.raw_tets(), v)?;
        gluings_checked = v.check_permutations && v.check_symmetry;
    }
    let started_clear = tri
        .tetrahedra()
        .all(|(_, t)| t.peripheral_curves.is_clear());

    let meridian = install_meridian_bounded(tri, start, options.step_limit_factor)?;
    let longitude = install_longitude_bounded(tri, start, options.step_limit_factor)?;

    if options.verify_sign_balance {
        for sheet in Sheet::ALL {
            check_sign_balance(tri, sheet)?;
        }
    }
    // Involutive gluings and an empty store leave nothing unbalanced.
    if gluings_checked && started_clear {
        tri.debug_assert_invariants();
    }

    Ok(PeripheralCurveReport {
        start,
        meridian,
        longitude: longitude.tets,
        visited: longitude.visited,
    })
}
