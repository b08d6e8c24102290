// License: MIT
// Copyright © 2026 Energy DaVinci

//! A graph representation of a user's energy records (devices, the meters
//! they are assigned to, and the analyses and reports derived from them)
//! and the dependencies between them.

mod analysis;
mod creation;
mod deletion;
mod retrieval;
mod validation;

pub mod iterators;

pub use deletion::{DeviceDeletionPlan, MeterDeletionPlan, ReportDeletionPlan};

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::{Analysis, Device, Meter, Report};

/// Records stored in the `DiGraph` are addressed with `NodeIndex`es.
///
/// One `RecordIndexMap` per record kind stores the `NodeIndex` for each
/// record id, so records can be retrieved by id.  Ids are only unique within
/// a kind, which is why the graph keeps four maps instead of one.
pub(crate) type RecordIndexMap = HashMap<u64, NodeIndex>;

/// The node weight of the graph: one of the four record kinds.
pub(crate) enum Record<D, M, A, R> {
    Device(D),
    Meter(M),
    Analysis(A),
    Report(R),
}

/// A graph of one user's energy records.
///
/// Edges run from a record to the records that depend on it:
/// meter → device → analysis → report.  Deleting a record therefore means
/// deleting its successors first, which is exactly what the deletion planners
/// compute.
pub struct HouseholdGraph<D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    graph: DiGraph<Record<D, M, A, R>, ()>,
    device_indices: RecordIndexMap,
    meter_indices: RecordIndexMap,
    analysis_indices: RecordIndexMap,
    report_indices: RecordIndexMap,
    user_id: String,
}

#[cfg(test)]
pub(crate) mod test_types {
    //! This module contains test record types implementing the `Device`,
    //! `Meter`, `Analysis` and `Report` traits.
    //!
    //! They are shared by all the test modules in the crate.  Records default
    //! to the owner `"user-1"`; use `owned_by` to move one to another user.

    use crate::{Analysis, Device, DeviceType, Meter, Report};

    pub(crate) const TEST_USER: &str = "user-1";

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct TestDevice {
        id: u64,
        name: String,
        device_type: DeviceType,
        usage_hours: f64,
        meter_id: u64,
        user_id: String,
    }

    impl TestDevice {
        pub(crate) fn new(
            id: u64,
            name: &str,
            device_type: DeviceType,
            usage_hours: f64,
            meter_id: u64,
        ) -> Self {
            TestDevice {
                id,
                name: name.to_owned(),
                device_type,
                usage_hours,
                meter_id,
                user_id: TEST_USER.to_owned(),
            }
        }

        pub(crate) fn owned_by(mut self, user_id: &str) -> Self {
            self.user_id = user_id.to_owned();
            self
        }
    }

    impl Device for TestDevice {
        fn device_id(&self) -> u64 {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn device_type(&self) -> DeviceType {
            self.device_type
        }

        fn estimated_usage_hours(&self) -> f64 {
            self.usage_hours
        }

        fn meter_id(&self) -> u64 {
            self.meter_id
        }

        fn user_id(&self) -> &str {
            &self.user_id
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct TestMeter {
        id: u64,
        name: String,
        user_id: String,
    }

    impl TestMeter {
        pub(crate) fn new(id: u64, name: &str) -> Self {
            TestMeter {
                id,
                name: name.to_owned(),
                user_id: TEST_USER.to_owned(),
            }
        }

        pub(crate) fn owned_by(mut self, user_id: &str) -> Self {
            self.user_id = user_id.to_owned();
            self
        }
    }

    impl Meter for TestMeter {
        fn meter_id(&self) -> u64 {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn user_id(&self) -> &str {
            &self.user_id
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct TestAnalysis {
        id: u64,
        device_id: u64,
        user_id: String,
    }

    impl TestAnalysis {
        pub(crate) fn new(id: u64, device_id: u64) -> Self {
            TestAnalysis {
                id,
                device_id,
                user_id: TEST_USER.to_owned(),
            }
        }
    }

    impl Analysis for TestAnalysis {
        fn analysis_id(&self) -> u64 {
            self.id
        }

        fn device_id(&self) -> u64 {
            self.device_id
        }

        fn user_id(&self) -> &str {
            &self.user_id
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct TestReport {
        id: u64,
        analysis_id: u64,
        user_id: String,
    }

    impl TestReport {
        pub(crate) fn new(id: u64, analysis_id: u64) -> Self {
            TestReport {
                id,
                analysis_id,
                user_id: TEST_USER.to_owned(),
            }
        }
    }

    impl Report for TestReport {
        fn report_id(&self) -> u64 {
            self.id
        }

        fn analysis_id(&self) -> u64 {
            self.analysis_id
        }

        fn user_id(&self) -> &str {
            &self.user_id
        }
    }
}
