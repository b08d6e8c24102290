// License: MIT
// Copyright © 2026 Energy DaVinci

//! This module defines the `DeviceAnalysis` snapshot record.

use serde::{Deserialize, Serialize};

use crate::Grade;

/// A point-in-time snapshot of a device's estimated consumption and
/// efficiency grade.
///
/// Derived, not authoritative: it captures the device's attributes and an
/// observed wattage at the moment of analysis, and is ephemeral until the
/// caller persists it as part of a report.  Field names serialize in the
/// store's `camelCase` spelling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAnalysis {
    /// The device the analysis was computed for.
    pub device_id: u64,
    /// The observed (or injected) power draw, in watts.
    pub device_current_watts: f64,
    /// The estimated monthly consumption in kWh, rounded to two decimals.
    pub energy_usage_monthly: f64,
    /// The efficiency grade for that consumption.
    pub efficiency_class: Grade,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_camel_case() {
        let analysis = DeviceAnalysis {
            device_id: 7,
            device_current_watts: 250.0,
            energy_usage_monthly: 60.0,
            efficiency_class: Grade::B,
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "deviceId": 7,
                "deviceCurrentWatts": 250.0,
                "energyUsageMonthly": 60.0,
                "efficiencyClass": "B",
            })
        );
    }
}
