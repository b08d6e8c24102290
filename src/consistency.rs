// License: MIT
// Copyright © 2026 Energy DaVinci

//! Pure consistency checks over snapshots of a user's devices and meters.
//!
//! Callers run these before any create or update call to the backing store
//! and refuse the operation when a check returns `true`.  The functions never
//! mutate state and never perform I/O; they only inspect the in-memory
//! snapshot they are given.

use crate::{Device, Meter};

/// Name comparisons are trimmed and case-insensitive.
fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns `true` if another of the user's devices already carries the given
/// name.
///
/// Pass the id of the record being edited as `excluding_id` in update flows,
/// so a device does not collide with itself.
pub fn is_duplicate_device_name<'a, D, I>(
    user_id: &str,
    name: &str,
    devices: I,
    excluding_id: Option<u64>,
) -> bool
where
    D: Device + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let candidate = normalized(name);
    devices.into_iter().any(|device| {
        device.user_id() == user_id
            && excluding_id != Some(device.device_id())
            && normalized(device.name()) == candidate
    })
}

/// Returns `true` if another of the user's meters already carries the given
/// name.  Same semantics as [`is_duplicate_device_name`], scoped to meters.
pub fn is_duplicate_meter_name<'a, M, I>(
    user_id: &str,
    name: &str,
    meters: I,
    excluding_id: Option<u64>,
) -> bool
where
    M: Meter + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let candidate = normalized(name);
    meters.into_iter().any(|meter| {
        meter.user_id() == user_id
            && excluding_id != Some(meter.meter_id())
            && normalized(meter.name()) == candidate
    })
}

/// Returns `true` if one of the user's devices other than
/// `excluding_device_id` already references the given meter.
pub fn is_meter_already_assigned<'a, D, I>(
    user_id: &str,
    meter_id: u64,
    devices: I,
    excluding_device_id: Option<u64>,
) -> bool
where
    D: Device + 'a,
    I: IntoIterator<Item = &'a D>,
{
    devices.into_iter().any(|device| {
        device.user_id() == user_id
            && excluding_device_id != Some(device.device_id())
            && device.meter_id() == meter_id
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_types::{TestDevice, TestMeter};
    use crate::DeviceType;

    const USER: &str = "user-1";

    fn devices() -> Vec<TestDevice> {
        vec![
            TestDevice::new(1, "TV", DeviceType::Television, 4.0, 10),
            TestDevice::new(2, "Geladeira", DeviceType::Refrigerator, 24.0, 11),
        ]
    }

    #[test]
    fn test_duplicate_device_name_ignores_case_and_whitespace() {
        let devices = devices();

        assert!(is_duplicate_device_name(USER, "  Tv  ", &devices, None));
        assert!(is_duplicate_device_name(USER, "GELADEIRA", &devices, None));
        assert!(!is_duplicate_device_name(USER, "Ventilador", &devices, None));
    }

    #[test]
    fn test_duplicate_device_name_skips_the_record_being_edited() {
        let devices = devices();

        assert!(!is_duplicate_device_name(USER, "TV", &devices, Some(1)));
        assert!(is_duplicate_device_name(USER, "TV", &devices, Some(2)));
    }

    #[test]
    fn test_duplicate_device_name_is_scoped_to_the_user() {
        let devices = vec![
            TestDevice::new(1, "TV", DeviceType::Television, 4.0, 10).owned_by("user-2")
        ];

        assert!(!is_duplicate_device_name(USER, "TV", &devices, None));
        assert!(is_duplicate_device_name("user-2", "TV", &devices, None));
    }

    #[test]
    fn test_duplicate_meter_name() {
        let meters = vec![TestMeter::new(10, "Medidor Sala")];

        assert!(is_duplicate_meter_name(USER, " medidor sala", &meters, None));
        assert!(!is_duplicate_meter_name(USER, "Medidor Sala", &meters, Some(10)));
        assert!(!is_duplicate_meter_name(USER, "Medidor Cozinha", &meters, None));
    }

    #[test]
    fn test_meter_already_assigned() {
        let devices = devices();

        assert!(is_meter_already_assigned(USER, 10, &devices, None));
        assert!(!is_meter_already_assigned(USER, 10, &devices, Some(1)));
        assert!(is_meter_already_assigned(USER, 10, &devices, Some(2)));
        assert!(!is_meter_already_assigned(USER, 12, &devices, None));
        assert!(!is_meter_already_assigned("user-2", 10, &devices, None));
    }
}
