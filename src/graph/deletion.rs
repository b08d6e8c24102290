// License: MIT
// Copyright © 2026 Energy DaVinci

//! Cascade deletion planning.
//!
//! Deleting a device must also delete the analyses computed for it and the
//! reports snapshotting those analyses; deleting a meter must first delete
//! the device assigned to it; deleting a report takes its snapshotted
//! analyses with it.  The planners compute the full set of affected
//! record ids in the mandatory child-first order, and performing the
//! deletions is left to the backing stores.  Each deletion is expected to be
//! idempotent, so replanning over a partially executed plan is safe.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::{Analysis, Device, Meter, Report};

use super::{HouseholdGraph, Record};

/// The records to delete when removing a device, in deletion order: reports
/// first, then analyses, then the device itself.
///
/// Ids are sorted ascending within each tier, so planning over the same
/// snapshot always yields the same plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDeletionPlan {
    pub report_ids: Vec<u64>,
    pub analysis_ids: Vec<u64>,
    pub device_id: u64,
}

impl DeviceDeletionPlan {
    /// The number of dependent records (reports and analyses) the plan
    /// removes besides the device itself.
    pub fn dependent_record_count(&self) -> usize {
        self.report_ids.len() + self.analysis_ids.len()
    }

    /// Returns `true` if the plan removes anything besides the device
    /// itself.  Callers use this to decide whether to warn the user before
    /// executing the plan.
    pub fn has_dependents(&self) -> bool {
        self.dependent_record_count() > 0
    }
}

/// The records to delete when removing a report, in deletion order: the
/// report first, then the analyses it snapshots.
///
/// An analysis is only included if no other report still references it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDeletionPlan {
    pub report_id: u64,
    pub analysis_ids: Vec<u64>,
}

/// The records to delete when removing a meter, in deletion order: reports,
/// then analyses, then devices, then the meter itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterDeletionPlan {
    pub report_ids: Vec<u64>,
    pub analysis_ids: Vec<u64>,
    pub device_ids: Vec<u64>,
    pub meter_id: u64,
}

impl MeterDeletionPlan {
    /// The number of dependent records the plan removes besides the meter
    /// itself.
    pub fn dependent_record_count(&self) -> usize {
        self.report_ids.len() + self.analysis_ids.len() + self.device_ids.len()
    }

    /// Returns `true` if the plan removes anything besides the meter itself.
    pub fn has_dependents(&self) -> bool {
        self.dependent_record_count() > 0
    }
}

/// Cascade deletion planning.
impl<D, M, A, R> HouseholdGraph<D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    /// Computes the deletion plan for the given device.
    ///
    /// An unknown `device_id` yields a plan with no dependent records; the
    /// stores treat deleting an absent id as a no-op, so the plan stays
    /// executable either way.
    pub fn plan_device_deletion(&self, device_id: u64) -> DeviceDeletionPlan {
        let mut report_ids = Vec::new();
        let mut analysis_ids = Vec::new();

        if let Some(&index) = self.device_indices.get(&device_id) {
            self.collect_dependents(index, &mut analysis_ids, &mut report_ids);
        }

        report_ids.sort_unstable();
        analysis_ids.sort_unstable();

        DeviceDeletionPlan {
            report_ids,
            analysis_ids,
            device_id,
        }
    }

    /// Computes the deletion plan for the given meter, folding in the plans
    /// of the devices assigned to it.
    ///
    /// An unknown `meter_id` yields a plan with no dependent records.
    pub fn plan_meter_deletion(&self, meter_id: u64) -> MeterDeletionPlan {
        let mut report_ids = Vec::new();
        let mut analysis_ids = Vec::new();
        let mut device_ids = Vec::new();

        if let Some(&index) = self.meter_indices.get(&meter_id) {
            for device_index in self
                .graph
                .neighbors_directed(index, petgraph::Direction::Outgoing)
            {
                if let Record::Device(device) = &self.graph[device_index] {
                    device_ids.push(device.device_id());
                    self.collect_dependents(device_index, &mut analysis_ids, &mut report_ids);
                }
            }
        }

        report_ids.sort_unstable();
        analysis_ids.sort_unstable();
        device_ids.sort_unstable();

        MeterDeletionPlan {
            report_ids,
            analysis_ids,
            device_ids,
            meter_id,
        }
    }

    /// Computes the deletion plan for the given report.
    ///
    /// Analyses are ephemeral until persisted as part of a report, so the
    /// snapshotted analysis goes with the report, unless another report
    /// still references it.  An unknown `report_id` yields a plan with no
    /// analyses.
    pub fn plan_report_deletion(&self, report_id: u64) -> ReportDeletionPlan {
        let mut analysis_ids = Vec::new();

        if let Some(&index) = self.report_indices.get(&report_id) {
            for analysis_index in self
                .graph
                .neighbors_directed(index, petgraph::Direction::Incoming)
            {
                if let Record::Analysis(analysis) = &self.graph[analysis_index] {
                    let still_referenced = self
                        .graph
                        .neighbors_directed(analysis_index, petgraph::Direction::Outgoing)
                        .filter(|&i| i != index)
                        .any(|i| matches!(self.graph[i], Record::Report(_)));
                    if !still_referenced {
                        analysis_ids.push(analysis.analysis_id());
                    }
                }
            }
        }

        analysis_ids.sort_unstable();

        ReportDeletionPlan {
            report_id,
            analysis_ids,
        }
    }

    /// Collects the analysis and report ids hanging off the device at
    /// `device_index`.
    fn collect_dependents(
        &self,
        device_index: NodeIndex,
        analysis_ids: &mut Vec<u64>,
        report_ids: &mut Vec<u64>,
    ) {
        for analysis_index in self
            .graph
            .neighbors_directed(device_index, petgraph::Direction::Outgoing)
        {
            if let Record::Analysis(analysis) = &self.graph[analysis_index] {
                analysis_ids.push(analysis.analysis_id());
                for report_index in self
                    .graph
                    .neighbors_directed(analysis_index, petgraph::Direction::Outgoing)
                {
                    if let Record::Report(report) = &self.graph[report_index] {
                        report_ids.push(report.report_id());
                    }
                }
            }
        }
    }
}
