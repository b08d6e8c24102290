// License: MIT
// Copyright © 2026 Energy DaVinci

//! Methods for creating [`HouseholdGraph`] instances from snapshots of a
//! user's records.

use petgraph::graph::DiGraph;

use crate::{Analysis, Device, Error, HouseholdGraphConfig, Meter, Report};

use super::{HouseholdGraph, Record, RecordIndexMap};

/// `HouseholdGraph` instantiation.
impl<D, M, A, R> HouseholdGraph<D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    /// Creates a new [`HouseholdGraph`] for the given user from snapshots of
    /// the user's meters, devices, analyses and reports.
    ///
    /// Returns an error if a record is owned by another user, if ids repeat
    /// within a kind, if a device references a missing meter, or if any of
    /// the consistency invariants (unique names, exclusive meter assignment)
    /// are violated.  Analyses and reports whose parent record is missing are
    /// kept as disconnected records unless
    /// [`strict_references`][HouseholdGraphConfig::strict_references] is set.
    pub fn try_new<MeterIter, DeviceIter, AnalysisIter, ReportIter>(
        user_id: impl Into<String>,
        meters: MeterIter,
        devices: DeviceIter,
        analyses: AnalysisIter,
        reports: ReportIter,
        config: HouseholdGraphConfig,
    ) -> Result<Self, Error>
    where
        MeterIter: IntoIterator<Item = M>,
        DeviceIter: IntoIterator<Item = D>,
        AnalysisIter: IntoIterator<Item = A>,
        ReportIter: IntoIterator<Item = R>,
    {
        let mut hg = Self {
            graph: DiGraph::new(),
            device_indices: RecordIndexMap::new(),
            meter_indices: RecordIndexMap::new(),
            analysis_indices: RecordIndexMap::new(),
            report_indices: RecordIndexMap::new(),
            user_id: user_id.into(),
        };

        hg.add_meters(meters)?;
        hg.add_devices(devices)?;
        hg.add_analyses(analyses, &config)?;
        hg.add_reports(reports, &config)?;

        hg.validate()?;

        Ok(hg)
    }

    fn ensure_owned(&self, kind: &str, id: u64, owner: &str) -> Result<(), Error> {
        if owner != self.user_id {
            return Err(Error::invalid_record(format!(
                "{kind} {id} is owned by user {owner}, not by user {}.",
                self.user_id
            )));
        }
        Ok(())
    }

    fn add_meters(&mut self, meters: impl IntoIterator<Item = M>) -> Result<(), Error> {
        for meter in meters {
            let mid = meter.meter_id();

            self.ensure_owned("Meter", mid, meter.user_id())?;
            if self.meter_indices.contains_key(&mid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate meter ID found: {mid}"
                )));
            }

            let idx = self.graph.add_node(Record::Meter(meter));
            self.meter_indices.insert(mid, idx);
        }

        Ok(())
    }

    fn add_devices(&mut self, devices: impl IntoIterator<Item = D>) -> Result<(), Error> {
        for device in devices {
            let did = device.device_id();
            let mid = device.meter_id();

            self.ensure_owned("Device", did, device.user_id())?;
            if self.device_indices.contains_key(&did) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate device ID found: {did}"
                )));
            }
            // A device references exactly one existing meter.
            let Some(&meter_idx) = self.meter_indices.get(&mid) else {
                return Err(Error::invalid_record(format!(
                    "Device {did} references a meter that does not exist: {mid}"
                )));
            };

            let idx = self.graph.add_node(Record::Device(device));
            self.device_indices.insert(did, idx);
            self.graph.update_edge(meter_idx, idx, ());
        }

        Ok(())
    }

    fn add_analyses(
        &mut self,
        analyses: impl IntoIterator<Item = A>,
        config: &HouseholdGraphConfig,
    ) -> Result<(), Error> {
        for analysis in analyses {
            let aid = analysis.analysis_id();
            let did = analysis.device_id();

            self.ensure_owned("Analysis", aid, analysis.user_id())?;
            if self.analysis_indices.contains_key(&aid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate analysis ID found: {aid}"
                )));
            }

            let parent = self.device_indices.get(&did).copied();
            if parent.is_none() {
                if config.strict_references {
                    return Err(Error::invalid_record(format!(
                        "Analysis {aid} references a device that does not exist: {did}"
                    )));
                }
                tracing::warn!(
                    "Analysis {} references a missing device {}; keeping it as a \
                     disconnected record.",
                    aid,
                    did
                );
            }

            let idx = self.graph.add_node(Record::Analysis(analysis));
            self.analysis_indices.insert(aid, idx);
            if let Some(parent) = parent {
                self.graph.update_edge(parent, idx, ());
            }
        }

        Ok(())
    }

    fn add_reports(
        &mut self,
        reports: impl IntoIterator<Item = R>,
        config: &HouseholdGraphConfig,
    ) -> Result<(), Error> {
        for report in reports {
            let rid = report.report_id();
            let aid = report.analysis_id();

            self.ensure_owned("Report", rid, report.user_id())?;
            if self.report_indices.contains_key(&rid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate report ID found: {rid}"
                )));
            }

            let parent = self.analysis_indices.get(&aid).copied();
            if parent.is_none() {
                if config.strict_references {
                    return Err(Error::invalid_record(format!(
                        "Report {rid} references an analysis that does not exist: {aid}"
                    )));
                }
                tracing::warn!(
                    "Report {} references a missing analysis {}; keeping it as a \
                     disconnected record.",
                    rid,
                    aid
                );
            }

            let idx = self.graph.add_node(Record::Report(report));
            self.report_indices.insert(rid, idx);
            if let Some(parent) = parent {
                self.graph.update_edge(parent, idx, ());
            }
        }

        Ok(())
    }
}
