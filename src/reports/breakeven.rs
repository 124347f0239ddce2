//! Break-even estimate
//!
//! Classic break-even revenue: fixed costs divided by the average
//! contribution-margin ratio. A ratio at or below zero has no meaningful
//! break-even point, so the estimate is defined as 0 there instead of
//! failing.

use serde::Serialize;

/// Revenue needed to cover fixed costs at the given contribution ratio.
///
/// Returns `0.0` when the ratio is zero or negative.
pub fn breakeven_revenue(fixed_costs: f64, avg_contribution_ratio: f64) -> f64 {
    if avg_contribution_ratio > 0.0 {
        fixed_costs / avg_contribution_ratio
    } else {
        0.0
    }
}

/// Break-even estimate with its inputs, for display and export
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakevenEstimate {
    /// Monthly fixed cost base
    pub fixed_costs: f64,
    /// Average contribution-margin ratio, e.g. 0.4 for 40%
    pub contribution_ratio: f64,
    /// Revenue needed to break even
    pub revenue_needed: f64,
}

impl BreakevenEstimate {
    /// Compute the estimate from its inputs
    pub fn new(fixed_costs: f64, contribution_ratio: f64) -> Self {
        Self {
            fixed_costs,
            contribution_ratio,
            revenue_needed: breakeven_revenue(fixed_costs, contribution_ratio),
        }
    }
}
