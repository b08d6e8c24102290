// License: MIT
// Copyright © 2026 Energy DaVinci

//! This module defines the `DeviceType` enum, which represents the kind of
//! household appliance a device record describes, along with the per-type
//! classification thresholds and typical power-draw ranges.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The classification thresholds used for device types that are not in the
/// catalog, so that classification stays a total function.
pub const DEFAULT_THRESHOLDS: [f64; 3] = [50.0, 100.0, 200.0];

/// Represents the kind of appliance a device is.
///
/// Serialized with (and displayed as) the canonical Portuguese labels used by
/// the registration forms, e.g. `"Ar Condicionado"` for
/// [`DeviceType::AirConditioner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "Ar Condicionado")]
    AirConditioner,
    #[serde(rename = "Fogão")]
    Stove,
    #[serde(rename = "Micro-ondas")]
    Microwave,
    #[serde(rename = "Forno elétrico")]
    ElectricOven,
    #[serde(rename = "Lâmpada")]
    Lamp,
    #[serde(rename = "Lavador de roupa")]
    WashingMachine,
    #[serde(rename = "Refrigerador")]
    Refrigerator,
    #[serde(rename = "Televisor")]
    Television,
    #[serde(rename = "Ventilador")]
    Fan,
    Unspecified,
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceType::AirConditioner => write!(f, "Ar Condicionado"),
            DeviceType::Stove => write!(f, "Fogão"),
            DeviceType::Microwave => write!(f, "Micro-ondas"),
            DeviceType::ElectricOven => write!(f, "Forno elétrico"),
            DeviceType::Lamp => write!(f, "Lâmpada"),
            DeviceType::WashingMachine => write!(f, "Lavador de roupa"),
            DeviceType::Refrigerator => write!(f, "Refrigerador"),
            DeviceType::Television => write!(f, "Televisor"),
            DeviceType::Fan => write!(f, "Ventilador"),
            DeviceType::Unspecified => write!(f, "Unspecified"),
        }
    }
}

impl DeviceType {
    /// The catalog of known device types, in the order the registration forms
    /// offer them.
    pub const ALL: [DeviceType; 9] = [
        DeviceType::AirConditioner,
        DeviceType::Stove,
        DeviceType::Microwave,
        DeviceType::ElectricOven,
        DeviceType::Lamp,
        DeviceType::WashingMachine,
        DeviceType::Refrigerator,
        DeviceType::Television,
        DeviceType::Fan,
    ];

    /// Parses a device type from its canonical label, ignoring surrounding
    /// whitespace.  Returns `None` for labels that are not in the catalog.
    pub fn parse_label(label: &str) -> Option<DeviceType> {
        match label.trim() {
            "Ar Condicionado" => Some(DeviceType::AirConditioner),
            "Fogão" => Some(DeviceType::Stove),
            "Micro-ondas" => Some(DeviceType::Microwave),
            "Forno elétrico" => Some(DeviceType::ElectricOven),
            "Lâmpada" => Some(DeviceType::Lamp),
            "Lavador de roupa" => Some(DeviceType::WashingMachine),
            "Refrigerador" => Some(DeviceType::Refrigerator),
            "Televisor" => Some(DeviceType::Television),
            "Ventilador" => Some(DeviceType::Fan),
            _ => None,
        }
    }

    /// Parses a device type from its canonical label, falling back to
    /// [`DeviceType::Unspecified`] for unknown labels.
    ///
    /// The fallback keeps classification a total function, so a record with a
    /// mistyped label still gets a grade (from [`DEFAULT_THRESHOLDS`]) instead
    /// of blocking the analysis.  It also masks data-entry bugs, which is why
    /// unknown labels are logged.
    pub fn from_label(label: &str) -> DeviceType {
        DeviceType::parse_label(label).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown device type label: {:?}. Falling back to default thresholds.",
                label
            );
            DeviceType::Unspecified
        })
    }

    /// Returns the ascending monthly-kWh thresholds `[t1, t2, t3]` that bound
    /// the efficiency grades A, B and C for this device type.  Anything above
    /// `t3` is grade D.
    ///
    /// The table is kept separate from the classification algorithm so that
    /// the domain data and the bracket scan can be tested independently.
    pub fn thresholds(&self) -> [f64; 3] {
        match self {
            DeviceType::AirConditioner => [100.0, 200.0, 300.0],
            DeviceType::Stove => [20.0, 40.0, 60.0],
            DeviceType::Microwave => [30.0, 60.0, 90.0],
            DeviceType::ElectricOven => [50.0, 100.0, 150.0],
            DeviceType::Lamp => [5.0, 10.0, 15.0],
            DeviceType::WashingMachine => [80.0, 150.0, 200.0],
            DeviceType::Refrigerator => [50.0, 100.0, 150.0],
            DeviceType::Television => [30.0, 60.0, 90.0],
            DeviceType::Fan => [15.0, 30.0, 50.0],
            DeviceType::Unspecified => DEFAULT_THRESHOLDS,
        }
    }

    /// Returns the typical `(min, max)` power draw in watts for this device
    /// type.
    ///
    /// Callers that have no sensor input can draw an observed wattage from
    /// this range and inject it into
    /// [`analyze_device`][crate::HouseholdGraph::analyze_device].
    pub fn typical_watts_range(&self) -> (f64, f64) {
        match self {
            DeviceType::AirConditioner => (1000.0, 3000.0),
            DeviceType::Stove => (800.0, 1500.0),
            DeviceType::Microwave => (600.0, 1200.0),
            DeviceType::ElectricOven => (1000.0, 2500.0),
            DeviceType::Lamp => (5.0, 100.0),
            DeviceType::WashingMachine => (500.0, 1500.0),
            DeviceType::Refrigerator => (100.0, 400.0),
            DeviceType::Television => (50.0, 400.0),
            DeviceType::Fan => (20.0, 100.0),
            DeviceType::Unspecified => (1000.0, 1000.0),
        }
    }
}
