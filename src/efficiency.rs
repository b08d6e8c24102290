// License: MIT
// Copyright © 2026 Energy DaVinci

//! This module defines the `Grade` enum and the efficiency classification
//! functions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::DeviceType;

/// An efficiency classification grade, from [`Grade::A`] (best) to
/// [`Grade::D`] (worst).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
        }
    }
}

/// Classifies a device's estimated monthly consumption into an efficiency
/// grade, using the threshold table of the given device type.
///
/// The brackets use inclusive upper bounds: a consumption exactly on a
/// threshold gets the better grade.  This is a total function with no error
/// path.
pub fn classify(device_type: DeviceType, monthly_kwh: f64) -> Grade {
    let [t1, t2, t3] = device_type.thresholds();

    if monthly_kwh <= t1 {
        Grade::A
    } else if monthly_kwh <= t2 {
        Grade::B
    } else if monthly_kwh <= t3 {
        Grade::C
    } else {
        Grade::D
    }
}

/// Classifies by the raw device type label, as received from external
/// records.
///
/// Labels that are not in the catalog are graded against
/// [`DEFAULT_THRESHOLDS`][crate::DEFAULT_THRESHOLDS] instead of failing, so an
/// unexpected label never blocks classification.  See
/// [`DeviceType::from_label`] for the logging this fallback carries.
pub fn classify_label(label: &str, monthly_kwh: f64) -> Grade {
    classify(DeviceType::from_label(label), monthly_kwh)
}
