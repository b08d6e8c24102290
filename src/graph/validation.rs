// License: MIT
// Copyright © 2026 Energy DaVinci

//! Methods for validating the consistency invariants of a
//! [`HouseholdGraph`], and candidate checks for create/update flows.

use crate::consistency;
use crate::{Analysis, Device, Error, Meter, Report};

use super::HouseholdGraph;

/// Invariant validation and candidate checks.
impl<D, M, A, R> HouseholdGraph<D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    /// Validates the snapshot invariants: no two devices or meters share a
    /// name, and no meter is assigned to more than one device.
    ///
    /// Cycles cannot occur: records are inserted kind by kind and edges only
    /// run meter → device → analysis → report.  Standalone meters and
    /// tolerated disconnected records are legitimate, so there is no
    /// connectedness requirement either.
    pub(super) fn validate(&self) -> Result<(), Error> {
        for device in self.devices() {
            if self.is_duplicate_device_name(device.name(), Some(device.device_id())) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate device name found: {}",
                    device.name().trim()
                )));
            }
            if self.is_meter_already_assigned(device.meter_id(), Some(device.device_id())) {
                return Err(Error::invalid_graph(format!(
                    "Meter {} is assigned to more than one device.",
                    device.meter_id()
                )));
            }
        }

        for meter in self.meters() {
            if self.is_duplicate_meter_name(meter.name(), Some(meter.meter_id())) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate meter name found: {}",
                    meter.name().trim()
                )));
            }
        }

        Ok(())
    }

    /// Returns `true` if one of the user's devices other than `excluding_id`
    /// already carries the given name (trimmed, case-insensitive).
    ///
    /// Run this before creating or renaming a device and refuse the operation
    /// on `true`.
    pub fn is_duplicate_device_name(&self, name: &str, excluding_id: Option<u64>) -> bool {
        consistency::is_duplicate_device_name(&self.user_id, name, self.devices(), excluding_id)
    }

    /// Returns `true` if one of the user's meters other than `excluding_id`
    /// already carries the given name (trimmed, case-insensitive).
    pub fn is_duplicate_meter_name(&self, name: &str, excluding_id: Option<u64>) -> bool {
        consistency::is_duplicate_meter_name(&self.user_id, name, self.meters(), excluding_id)
    }

    /// Returns `true` if a device other than `excluding_device_id` is already
    /// assigned to the given meter.
    pub fn is_meter_already_assigned(
        &self,
        meter_id: u64,
        excluding_device_id: Option<u64>,
    ) -> bool {
        consistency::is_meter_already_assigned(
            &self.user_id,
            meter_id,
            self.devices(),
            excluding_device_id,
        )
    }
}
