// License: MIT
// Copyright © 2026 Energy DaVinci

//! Methods for computing [`DeviceAnalysis`] snapshots over the devices in a
//! [`HouseholdGraph`].

use crate::consumption::{estimate_monthly_usage, UsageUnit};
use crate::efficiency::classify;
use crate::{Analysis, Device, DeviceAnalysis, Error, Meter, Report};

use super::HouseholdGraph;

/// Analysis computation.
impl<D, M, A, R> HouseholdGraph<D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    /// Computes an analysis snapshot for the given device from its stored
    /// attributes and the observed wattage.
    ///
    /// The wattage is injected by the caller: a sensor reading where one
    /// exists, or a value drawn from
    /// [`DeviceType::typical_watts_range`][crate::DeviceType::typical_watts_range]
    /// where it doesn't.
    pub fn analyze_device(
        &self,
        device_id: u64,
        observed_watts: f64,
    ) -> Result<DeviceAnalysis, Error> {
        let device = self.device(device_id)?;
        let energy_usage_monthly = estimate_monthly_usage(
            observed_watts,
            device.estimated_usage_hours(),
            UsageUnit::Hours,
        )?;

        Ok(DeviceAnalysis {
            device_id,
            device_current_watts: observed_watts,
            energy_usage_monthly,
            efficiency_class: classify(device.device_type(), energy_usage_monthly),
        })
    }

    /// Computes analysis snapshots for every device in the graph, in
    /// insertion order, with `observed_watts` supplying the wattage for each
    /// device.
    pub fn analyze_all(
        &self,
        mut observed_watts: impl FnMut(&D) -> f64,
    ) -> Result<Vec<DeviceAnalysis>, Error> {
        let mut analyses = Vec::new();
        for device in self.devices() {
            let watts = observed_watts(device);
            analyses.push(self.analyze_device(device.device_id(), watts)?);
        }

        Ok(analyses)
    }
}
