//! The projection formula
//!
//! Only the initial amount compounds. Monthly contributions are summed
//! linearly and never earn growth:
//!
//! ```text
//! final  = initial * (1 + rate/100)^months + contribution * months
//! profit = final - initial - contribution * months
//! ```

use serde::{Deserialize, Serialize};

use super::ProjectionInput;

/// Outcome of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Estimated value at the end of the period
    pub final_value: f64,
    /// Growth earned on the initial amount
    pub total_profit: f64,
}

/// One month of a projection schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Month number, 1-indexed
    pub month: u32,
    /// Initial amount after compounding through this month
    pub growth_value: f64,
    /// Contributions accumulated through this month
    pub contributed: f64,
    pub total_value: f64,
    pub profit: f64,
}

/// Evaluate the formula at month `m`
fn evaluate(input: &ProjectionInput, m: u32) -> (f64, f64, f64) {
    // Nothing invested grows to nothing, even when the factor overflows
    let growth_value = if input.initial_amount == 0.0 {
        0.0
    } else {
        let growth_factor = 1.0 + input.periodic_rate_percent / 100.0;
        input.initial_amount * growth_factor.powf(m as f64)
    };
    let contributed = input.monthly_contribution * m as f64;
    let total_value = growth_value + contributed;
    (growth_value, contributed, total_value)
}

/// Project the final value and profit. Total over its domain, no rounding.
///
/// Results too large for `f64` come back as infinity rather than panicking.
pub fn compute(input: &ProjectionInput) -> ProjectionResult {
    let (_, contributed, final_value) = evaluate(input, input.months);
    let total_profit = final_value - input.initial_amount - contributed;

    log::debug!(
        "projection: initial={} months={} rate={}% contribution={} -> final={:.4} profit={:.4}",
        input.initial_amount,
        input.months,
        input.periodic_rate_percent,
        input.monthly_contribution,
        final_value,
        total_profit
    );

    ProjectionResult { final_value, total_profit }
}

/// Month-by-month evolution of a projection.
///
/// The last row matches [`compute`] exactly; zero months gives no rows.
pub fn schedule(input: &ProjectionInput) -> Vec<ProjectionRow> {
    schedule_iter(input).collect()
}

/// Lazy form of [`schedule`], for horizons too long to hold in memory
pub fn schedule_iter(input: &ProjectionInput) -> impl Iterator<Item = ProjectionRow> {
    let input = *input;
    (1..=input.months).map(move |month| {
        let (growth_value, contributed, total_value) = evaluate(&input, month);
        ProjectionRow {
            month,
            growth_value,
            contributed,
            total_value,
            profit: total_value - input.initial_amount - contributed,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(initial_amount: f64, months: u32, rate: f64, contribution: f64) -> ProjectionInput {
        ProjectionInput {
            initial_amount,
            months,
            periodic_rate_percent: rate,
            monthly_contribution: contribution,
        }
    }

    #[test]
    fn test_default_scenario() {
        // 1000 × 1.008^12 ≈ 1100.34, plus 12 × 200 contributed
        let result = compute(&input(1000.0, 12, 0.8, 200.0));
        assert_abs_diff_eq!(result.final_value, 3500.34, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_profit, 100.34, epsilon = 0.01);
    }

    #[test]
    fn test_zero_months() {
        let result = compute(&input(1000.0, 0, 5.0, 500.0));
        assert_eq!(result.final_value, 1000.0);
        assert_eq!(result.total_profit, 0.0);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let result = compute(&input(0.0, 10, 0.0, 100.0));
        assert_eq!(result.final_value, 1000.0);
        assert_eq!(result.total_profit, 0.0);
    }

    #[test]
    fn test_contributions_do_not_compound() {
        // Doubling the contribution adds exactly contribution × months
        let base = compute(&input(5000.0, 60, 1.0, 100.0));
        let more = compute(&input(5000.0, 60, 1.0, 200.0));
        assert_abs_diff_eq!(more.final_value - base.final_value, 6000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(more.total_profit, base.total_profit, epsilon = 1e-6);
    }

    #[test]
    fn test_formula_identities() {
        let cases = [
            input(1000.0, 12, 0.8, 200.0),
            input(0.0, 0, 0.0, 0.0),
            input(250.5, 1, 12.5, 0.0),
            input(1_000_000.0, 360, 0.65, 1500.0),
            input(42.0, 7, 3.3, 9.99),
            input(10.0, 1200, 2.0, 1.0),
        ];

        for case in &cases {
            let result = compute(case);
            let expected_final = case.initial_amount
                * (1.0 + case.periodic_rate_percent / 100.0).powf(case.months as f64)
                + case.monthly_contribution * case.months as f64;
            assert_eq!(result.final_value, expected_final);
            assert_eq!(
                result.total_profit,
                result.final_value - case.initial_amount - case.monthly_contribution * case.months as f64
            );
        }
    }

    #[test]
    fn test_schedule_ends_at_final_value() {
        let case = input(1000.0, 12, 0.8, 200.0);
        let rows = schedule(&case);
        let result = compute(&case);

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].month, 1);
        assert_abs_diff_eq!(rows[0].growth_value, 1008.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[0].contributed, 200.0, epsilon = 1e-9);

        let last = rows.last().expect("non-empty schedule");
        assert_eq!(last.total_value, result.final_value);
        assert_eq!(last.profit, result.total_profit);

        // Value never decreases with a non-negative rate
        assert!(rows.windows(2).all(|w| w[1].total_value >= w[0].total_value));
    }

    #[test]
    fn test_zero_initial_with_overflowing_rate() {
        let result = compute(&input(0.0, 2, 1e308, 100.0));
        assert_eq!(result.final_value, 200.0);
        assert_eq!(result.total_profit, 0.0);

        let rows = schedule(&input(0.0, 2, 1e308, 100.0));
        assert!(rows.iter().all(|r| r.total_value.is_finite() && r.profit == 0.0));
    }

    #[test]
    fn test_overflow_is_infinite_not_nan() {
        let result = compute(&input(1.0, 2, 1e308, 0.0));
        assert_eq!(result.final_value, f64::INFINITY);
        assert!(!result.total_profit.is_nan());
    }

    #[test]
    fn test_schedule_iter_is_lazy() {
        let rows: Vec<ProjectionRow> = schedule_iter(&input(1000.0, u32::MAX, 0.8, 200.0))
            .take(3)
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].month, 3);
        assert_eq!(rows[2], schedule(&input(1000.0, 3, 0.8, 200.0))[2]);
    }

    #[test]
    fn test_empty_schedule() {
        assert!(schedule(&input(1000.0, 0, 0.8, 200.0)).is_empty());
    }
}
