//! Diminishing-returns gain model for the zergrush solver.
//!
//! Sending `z` zerg to a base defended by `s` terrans and holding `m`
//! minerals gains
//!
//! ```text
//! g = m * e^n / (1 + e^n),   n = -63 s + 10 + 21 z
//! ```
//!
//! rounded to the nearest integer. A base is worth attacking when at least
//! one mineral can be gained, i.e. `ln(m - 1) + (-63 s + 10) >= -21 z`.

use serde::{Deserialize, Serialize};

/// Constants of the gain curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainModel {
    /// Weight of the terran defence in the exponent
    pub terran_weight: i64,
    /// Constant offset of the exponent
    pub offset: i64,
    /// Weight of each zerg unit in the exponent
    pub resource_weight: i64,
    /// Exponent above which the gain is taken as saturated
    pub saturation: i64,
}

impl Default for GainModel {
    fn default() -> Self {
        GainModel {
            terran_weight: 63,
            offset: 10,
            resource_weight: 21,
            saturation: 10,
        }
    }
}

impl GainModel {
    /// Exact exponent; `i128` holds any product of two `i64` values.
    fn exponent(&self, terran_cost: i64, resource: i64) -> i128 {
        -i128::from(self.terran_weight) * i128::from(terran_cost)
            + i128::from(self.offset)
            + i128::from(self.resource_weight) * i128::from(resource)
    }

    /// `ln(m - 1) + (-63 s + 10)`, the left side of the feasibility test.
    fn feasibility_margin(&self, minerals: i64, terran_cost: i64) -> f64 {
        ((minerals - 1) as f64).ln() - self.terran_weight as f64 * terran_cost as f64
            + self.offset as f64
    }

    /// Minerals gained when sending `resource` zerg.
    ///
    /// Exponents above the saturation point return `minerals` directly so
    /// `e^n` is never evaluated where it could overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use puzzlers::gain::GainModel;
    ///
    /// let model = GainModel::default();
    /// assert_eq!(model.gain(100, 1, 2), 0);
    /// assert_eq!(model.gain(100, 1, 3), 100);
    /// assert_eq!(model.gain(100_000, 0, 0), 99_995);
    /// assert_eq!(model.gain(100_000, 0, 1), 100_000);
    /// ```
    pub fn gain(&self, minerals: i64, terran_cost: i64, resource: i64) -> i64 {
        let n = self.exponent(terran_cost, resource);
        if n < 0 {
            return 0;
        }
        if n > i128::from(self.saturation) {
            return minerals;
        }
        let cc = (n as f64).exp();
        (minerals as f64 * cc / (1.0 + cc)).round() as i64
    }

    /// Whether sending `resource` zerg gains at least one mineral.
    pub fn feasible(&self, minerals: i64, terran_cost: i64, resource: i64) -> bool {
        if minerals <= 1 {
            return false;
        }
        let needed = -(self.resource_weight as f64) * resource as f64;
        self.feasibility_margin(minerals, terran_cost) >= needed
    }

    /// Smallest non-negative zerg count satisfying [`GainModel::feasible`].
    ///
    /// Returns `None` for bases holding at most one mineral, which are
    /// never feasible.
    pub fn minimal_feasible_resource(&self, minerals: i64, terran_cost: i64) -> Option<i64> {
        if minerals <= 1 {
            return None;
        }
        let margin = self.feasibility_margin(minerals, terran_cost);
        let needed = (margin / -(self.resource_weight as f64)).ceil() as i64;
        Some(needed.max(0))
    }
}
