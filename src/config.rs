// License: MIT
// Copyright © 2026 Energy DaVinci

//! This module contains the configuration options for the `HouseholdGraph`.

/// Configuration options for the `HouseholdGraph`.
#[derive(Clone, Default, Debug)]
pub struct HouseholdGraphConfig {
    /// Whether analyses referencing missing devices, and reports referencing
    /// missing analyses, are rejected at construction.  When this is `false`
    /// they are kept as disconnected records and logged; deletion plans treat
    /// them as no-ops.
    pub strict_references: bool,
}
