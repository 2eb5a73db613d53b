use crate::algs::curve_checks::check_sign_balance;
use crate::cusp_error::CuspError;
use crate::data::peripheral_curves::Sheet;
use crate::topology::triangulation::Triangulation;
use crate::topology::validation::{GluingValidationOptions, validate_gluings};

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), CuspError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

impl DebugInvariants for Triangulation {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Triangulation");
    }

    /// Gluing permutations are bijections, every gluing is answered by its
    /// inverse, and every stamped crossing is answered on the glued face.
    fn validate_invariants(&self) -> Result<(), CuspError> {
        validate_gluings(self.raw_tets(), GluingValidationOptions::default())?;
        for sheet in Sheet::ALL {
            check_sign_balance(self, sheet)?;
        }
        Ok(())
    }
}
