// License: MIT
// Copyright © 2026 Energy DaVinci

//! This module contains the traits that need to be implemented by the types
//! that represent the stored records: devices, energy meters, device analyses
//! and reports.
//!
//! Because this is an independent library, it does not know the record types
//! of the backing store.  Callers implement these traits for their own rows or
//! documents and hand snapshots of them to
//! [`HouseholdGraph::try_new`][crate::HouseholdGraph::try_new].
//!
//! Every record reports the id of the user that owns it; user identity is
//! always threaded in explicitly and never read from ambient session state.

use crate::DeviceType;

/**
This trait needs to be implemented by the type that represents a registered
device.

Example implementation for a typical store row:

```ignore
impl household_energy_graph::Device for DeviceRow {
    fn device_id(&self) -> u64 {
        self.device_id
    }

    fn name(&self) -> &str {
        &self.device_name
    }

    fn device_type(&self) -> household_energy_graph::DeviceType {
        household_energy_graph::DeviceType::from_label(&self.device_type)
    }

    fn estimated_usage_hours(&self) -> f64 {
        self.estimated_usage_hours
    }

    fn meter_id(&self) -> u64 {
        self.energy_meter_id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }
}
```
*/
pub trait Device {
    /// Returns the id of the device, unique within the owning user's devices.
    fn device_id(&self) -> u64;
    /// Returns the display name of the device.
    fn name(&self) -> &str;
    /// Returns the kind of appliance this device is.
    fn device_type(&self) -> DeviceType;
    /// Returns the estimated daily usage, normalized to hours.
    fn estimated_usage_hours(&self) -> f64;
    /// Returns the id of the energy meter this device is assigned to.
    fn meter_id(&self) -> u64;
    /// Returns the id of the user that owns the device.
    fn user_id(&self) -> &str;
}

/// This trait needs to be implemented by the type that represents an energy
/// meter.  A meter may be referenced by at most one device at a time.
pub trait Meter {
    /// Returns the id of the meter, unique within the owning user's meters.
    fn meter_id(&self) -> u64;
    /// Returns the display name of the meter.
    fn name(&self) -> &str;
    /// Returns the id of the user that owns the meter.
    fn user_id(&self) -> &str;
}

/// This trait needs to be implemented by the type that represents a persisted
/// device analysis snapshot.
pub trait Analysis {
    /// Returns the id of the analysis.
    fn analysis_id(&self) -> u64;
    /// Returns the id of the device the analysis was computed for.
    fn device_id(&self) -> u64;
    /// Returns the id of the user that owns the analysis.
    fn user_id(&self) -> &str;
}

/// This trait needs to be implemented by the type that represents a generated
/// report.
pub trait Report {
    /// Returns the id of the report.
    fn report_id(&self) -> u64;
    /// Returns the id of the analysis the report snapshots.
    fn analysis_id(&self) -> u64;
    /// Returns the id of the user that owns the report.
    fn user_id(&self) -> &str;
}
