// License: MIT
// Copyright © 2026 Energy DaVinci

//! This module defines the monthly consumption estimator and the `UsageUnit`
//! enum for the duration input.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The fixed month length used when extrapolating daily consumption.
///
/// A 30-day month is deliberately not calendar-accurate; estimates stay
/// deterministic and comparable across months.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// The unit of a daily usage duration.
///
/// Serialized as `"hours"` / `"minutes"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageUnit {
    Hours,
    Minutes,
}

impl Display for UsageUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageUnit::Hours => write!(f, "hours"),
            UsageUnit::Minutes => write!(f, "minutes"),
        }
    }
}

/// Estimates a device's monthly energy consumption in kWh from its power draw
/// and daily usage duration.
///
/// The duration is normalized to hours, daily energy is
/// `watts * hours / 1000`, and the monthly figure is the daily figure
/// extrapolated over [`DAYS_PER_MONTH`] days, rounded half-up to two decimal
/// places.
///
/// Negative or non-finite inputs are caller contract violations and are
/// rejected with an `InvalidArgument` error rather than clamped.
pub fn estimate_monthly_usage(
    watts: f64,
    usage_amount: f64,
    unit: UsageUnit,
) -> Result<f64, Error> {
    if !watts.is_finite() || watts < 0.0 {
        return Err(Error::invalid_argument(format!(
            "watts must be a non-negative finite number, got: {watts}"
        )));
    }
    if !usage_amount.is_finite() || usage_amount < 0.0 {
        return Err(Error::invalid_argument(format!(
            "usage amount must be a non-negative finite number, got: {usage_amount}"
        )));
    }

    let usage_hours = match unit {
        UsageUnit::Hours => usage_amount,
        UsageUnit::Minutes => usage_amount / 60.0,
    };
    let daily_kwh = watts * usage_hours / 1000.0;

    Ok(round_to_hundredths(daily_kwh * DAYS_PER_MONTH))
}

/// Rounds half-up at the hundredths digit.  `f64::round` rounds halves away
/// from zero, which is half-up on the non-negative domain this is used for.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_estimate() {
        // 1000 W for 2 h/day -> 2 kWh/day -> 60 kWh/month.
        assert_eq!(
            estimate_monthly_usage(1000.0, 2.0, UsageUnit::Hours),
            Ok(60.0)
        );
    }

    #[test]
    fn test_minutes_are_normalized_to_hours() {
        assert_eq!(
            estimate_monthly_usage(1000.0, 60.0, UsageUnit::Minutes),
            estimate_monthly_usage(1000.0, 1.0, UsageUnit::Hours)
        );
        assert_eq!(
            estimate_monthly_usage(1000.0, 1.0, UsageUnit::Minutes),
            Ok(0.5)
        );
    }

    #[test]
    fn test_zero_inputs_are_valid() {
        assert_eq!(estimate_monthly_usage(0.0, 5.0, UsageUnit::Hours), Ok(0.0));
        assert_eq!(estimate_monthly_usage(1500.0, 0.0, UsageUnit::Hours), Ok(0.0));
    }

    #[test]
    fn test_result_is_rounded_to_two_decimals() {
        // 90 W for 1.25 h/day -> 0.1125 kWh/day -> 3.375 kWh/month -> 3.38.
        assert_eq!(
            estimate_monthly_usage(90.0, 1.25, UsageUnit::Hours),
            Ok(3.38)
        );
    }

    #[test]
    fn test_monotonic_in_watts_and_duration() {
        let base = estimate_monthly_usage(500.0, 3.0, UsageUnit::Hours).unwrap();
        for (watts, hours) in [(500.0, 4.0), (600.0, 3.0), (800.0, 8.0)] {
            let higher = estimate_monthly_usage(watts, hours, UsageUnit::Hours).unwrap();
            assert!(higher >= base, "({watts}, {hours}) -> {higher} < {base}");
        }
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        assert_eq!(
            estimate_monthly_usage(-1.0, 2.0, UsageUnit::Hours),
            Err(Error::invalid_argument(
                "watts must be a non-negative finite number, got: -1"
            ))
        );
        assert_eq!(
            estimate_monthly_usage(1000.0, -0.5, UsageUnit::Minutes),
            Err(Error::invalid_argument(
                "usage amount must be a non-negative finite number, got: -0.5"
            ))
        );
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        assert!(estimate_monthly_usage(f64::NAN, 1.0, UsageUnit::Hours).is_err());
        assert!(estimate_monthly_usage(1.0, f64::INFINITY, UsageUnit::Hours).is_err());
    }
}
