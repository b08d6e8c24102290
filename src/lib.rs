// License: MIT
// Copyright © 2026 Energy DaVinci

/*!
# Household Energy Graph

This is a library for tracking a household's electrical devices, the energy
meters they are assigned to, and the consumption analyses and reports derived
from them, as a user-scoped dependency graph.

A graph representation makes it easy to enforce the consistency rules between
the records (unique names, exclusive meter assignment) and to compute cascade
deletion plans without dangling references.

## The record traits

The main struct is [`HouseholdGraph`], instances of which can be created by
passing snapshots of a user's records to the
[`try_new`][HouseholdGraph::try_new] method.

But because `household_energy_graph` is an independent library, it doesn't
know about the backing store's record types and instead uses traits to
interact with them.  Therefore, to be usable with this library, the record
types must implement the [`Device`], [`Meter`], [`Analysis`] and [`Report`]
traits.  Check out the documentation for these traits for sample
implementations.

## Validation

The [`try_new`][HouseholdGraph::try_new] method runs several checks on the
snapshot, including checking that:

- No two records of a kind share an id, and every record belongs to the
  graph's user.
- Every device references an existing meter, and no meter is referenced by
  more than one device.
- No two devices, and no two meters, share a trimmed, case-insensitive name.

If any of the validation steps fail, the method will return an [`Error`], and
a [`HouseholdGraph`] instance otherwise.  The same name and assignment checks
are also available standalone ([`is_duplicate_device_name`],
[`is_duplicate_meter_name`], [`is_meter_already_assigned`]) and as graph
methods, for validating a candidate record before it is sent to the store.

## Estimation and classification

[`estimate_monthly_usage`] extrapolates a device's monthly consumption from
its power draw and daily usage duration, and [`classify`] grades that
consumption against the per-type threshold tables of [`DeviceType`].  Device
types outside the catalog are graded against [`DEFAULT_THRESHOLDS`] instead
of failing, so an unexpected type never blocks classification.  Note that
this masks data-entry bugs, which is why the fallback is logged.
[`HouseholdGraph::analyze_device`] combines both over a stored device and an
injected wattage observation.

## Cascade deletion planning

Deleting a device or meter must also delete the records that depend on it.
[`HouseholdGraph::plan_device_deletion`] and
[`HouseholdGraph::plan_meter_deletion`] compute the affected ids in the
mandatory child-first order (reports, then analyses, then devices, then the
meter), and [`HouseholdGraph::plan_report_deletion`] takes a report's
snapshotted analyses with it; executing the plans is the backing store's
responsibility.
*/

mod analysis;
pub use analysis::DeviceAnalysis;

mod consistency;
pub use consistency::{is_duplicate_device_name, is_duplicate_meter_name, is_meter_already_assigned};

mod consumption;
pub use consumption::{estimate_monthly_usage, UsageUnit, DAYS_PER_MONTH};

mod config;
pub use config::HouseholdGraphConfig;

mod device_type;
pub use device_type::{DeviceType, DEFAULT_THRESHOLDS};

mod efficiency;
pub use efficiency::{classify, classify_label, Grade};

mod graph;
pub use graph::{iterators, DeviceDeletionPlan, HouseholdGraph, MeterDeletionPlan, ReportDeletionPlan};

mod graph_traits;
pub use graph_traits::{Analysis, Device, Meter, Report};

mod error;
pub use error::Error;
