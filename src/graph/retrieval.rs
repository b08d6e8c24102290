// License: MIT
// Copyright © 2026 Energy DaVinci

//! Methods for retrieving records and their relationships from a
//! [`HouseholdGraph`].

use crate::iterators::{Analyses, Devices, Meters, Reports};
use crate::{Analysis, Device, Error, Meter, Report};

use super::{HouseholdGraph, Record};

/// Record retrieval.
impl<D, M, A, R> HouseholdGraph<D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    /// Returns the id of the user whose records the graph holds.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the device with the given `device_id`, if it exists.
    pub fn device(&self, device_id: u64) -> Result<&D, Error> {
        let &index = self.device_indices.get(&device_id).ok_or_else(|| {
            Error::record_not_found(format!("Device with id {} not found.", device_id))
        })?;
        match &self.graph[index] {
            Record::Device(device) => Ok(device),
            _ => Err(Error::internal(format!(
                "Index for device {} points at a different record kind.",
                device_id
            ))),
        }
    }

    /// Returns the meter with the given `meter_id`, if it exists.
    pub fn meter(&self, meter_id: u64) -> Result<&M, Error> {
        let &index = self.meter_indices.get(&meter_id).ok_or_else(|| {
            Error::record_not_found(format!("Meter with id {} not found.", meter_id))
        })?;
        match &self.graph[index] {
            Record::Meter(meter) => Ok(meter),
            _ => Err(Error::internal(format!(
                "Index for meter {} points at a different record kind.",
                meter_id
            ))),
        }
    }

    /// Returns the analysis with the given `analysis_id`, if it exists.
    pub fn analysis(&self, analysis_id: u64) -> Result<&A, Error> {
        let &index = self.analysis_indices.get(&analysis_id).ok_or_else(|| {
            Error::record_not_found(format!("Analysis with id {} not found.", analysis_id))
        })?;
        match &self.graph[index] {
            Record::Analysis(analysis) => Ok(analysis),
            _ => Err(Error::internal(format!(
                "Index for analysis {} points at a different record kind.",
                analysis_id
            ))),
        }
    }

    /// Returns the report with the given `report_id`, if it exists.
    pub fn report(&self, report_id: u64) -> Result<&R, Error> {
        let &index = self.report_indices.get(&report_id).ok_or_else(|| {
            Error::record_not_found(format!("Report with id {} not found.", report_id))
        })?;
        match &self.graph[index] {
            Record::Report(report) => Ok(report),
            _ => Err(Error::internal(format!(
                "Index for report {} points at a different record kind.",
                report_id
            ))),
        }
    }

    /// Returns an iterator over the devices in the graph, in insertion order.
    pub fn devices(&self) -> Devices<'_, D, M, A, R> {
        Devices {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the meters in the graph, in insertion order.
    pub fn meters(&self) -> Meters<'_, D, M, A, R> {
        Meters {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the analyses in the graph, in insertion
    /// order.
    pub fn analyses(&self) -> Analyses<'_, D, M, A, R> {
        Analyses {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the reports in the graph, in insertion order.
    pub fn reports(&self) -> Reports<'_, D, M, A, R> {
        Reports {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns the device assigned to the given meter, if any.
    ///
    /// Returns an error if the meter does not exist.
    pub fn device_on_meter(&self, meter_id: u64) -> Result<Option<&D>, Error> {
        let &index = self.meter_indices.get(&meter_id).ok_or_else(|| {
            Error::record_not_found(format!("Meter with id {} not found.", meter_id))
        })?;

        Ok(self
            .graph
            .neighbors_directed(index, petgraph::Direction::Outgoing)
            .find_map(|i| match &self.graph[i] {
                Record::Device(device) => Some(device),
                _ => None,
            }))
    }

    /// Returns the analyses computed for the given device, sorted by id.
    ///
    /// Returns an error if the device does not exist.
    pub fn analyses_for_device(&self, device_id: u64) -> Result<Vec<&A>, Error> {
        let &index = self.device_indices.get(&device_id).ok_or_else(|| {
            Error::record_not_found(format!("Device with id {} not found.", device_id))
        })?;

        let mut found: Vec<&A> = self
            .graph
            .neighbors_directed(index, petgraph::Direction::Outgoing)
            .filter_map(|i| match &self.graph[i] {
                Record::Analysis(analysis) => Some(analysis),
                _ => None,
            })
            .collect();
        found.sort_by_key(|analysis| analysis.analysis_id());

        Ok(found)
    }

    /// Returns the reports snapshotting the given analysis, sorted by id.
    ///
    /// Returns an error if the analysis does not exist.
    pub fn reports_for_analysis(&self, analysis_id: u64) -> Result<Vec<&R>, Error> {
        let &index = self.analysis_indices.get(&analysis_id).ok_or_else(|| {
            Error::record_not_found(format!("Analysis with id {} not found.", analysis_id))
        })?;

        let mut found: Vec<&R> = self
            .graph
            .neighbors_directed(index, petgraph::Direction::Outgoing)
            .filter_map(|i| match &self.graph[i] {
                Record::Report(report) => Some(report),
                _ => None,
            })
            .collect();
        found.sort_by_key(|report| report.report_id());

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_types::{TestAnalysis, TestDevice, TestMeter, TestReport};
    use crate::{DeviceType, HouseholdGraphConfig};

    fn graph() -> HouseholdGraph<TestDevice, TestMeter, TestAnalysis, TestReport> {
        let meters = vec![
            TestMeter::new(10, "Medidor Sala"),
            TestMeter::new(11, "Medidor Cozinha"),
            TestMeter::new(12, "Medidor Quarto"),
        ];
        let devices = vec![
            TestDevice::new(1, "TV", DeviceType::Television, 4.0, 10),
            TestDevice::new(2, "Geladeira", DeviceType::Refrigerator, 24.0, 11),
        ];
        let analyses = vec![
            TestAnalysis::new(101, 1),
            TestAnalysis::new(100, 1),
            TestAnalysis::new(102, 2),
        ];
        let reports = vec![TestReport::new(501, 100), TestReport::new(500, 100)];

        HouseholdGraph::try_new(
            "user-1",
            meters,
            devices,
            analyses,
            reports,
            HouseholdGraphConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let graph = graph();

        assert_eq!(
            graph.device(1),
            Ok(&TestDevice::new(1, "TV", DeviceType::Television, 4.0, 10))
        );
        assert_eq!(graph.meter(12), Ok(&TestMeter::new(12, "Medidor Quarto")));
        assert_eq!(graph.analysis(102), Ok(&TestAnalysis::new(102, 2)));
        assert_eq!(graph.report(501), Ok(&TestReport::new(501, 100)));

        assert_eq!(
            graph.device(9),
            Err(Error::record_not_found("Device with id 9 not found."))
        );
        assert_eq!(
            graph.meter(9),
            Err(Error::record_not_found("Meter with id 9 not found."))
        );
    }

    #[test]
    fn test_iterators_preserve_insertion_order() {
        let graph = graph();

        assert!(graph
            .devices()
            .map(|d| d.device_id())
            .eq([1, 2]));
        assert!(graph.meters().map(|m| m.meter_id()).eq([10, 11, 12]));
        assert!(graph
            .analyses()
            .map(|a| a.analysis_id())
            .eq([101, 100, 102]));
        assert!(graph.reports().map(|r| r.report_id()).eq([501, 500]));
    }

    #[test]
    fn test_device_on_meter() {
        let graph = graph();

        assert_eq!(
            graph.device_on_meter(10).unwrap().map(|d| d.device_id()),
            Some(1)
        );
        assert_eq!(graph.device_on_meter(12).unwrap().map(|d| d.device_id()), None);
        assert_eq!(
            graph.device_on_meter(9),
            Err(Error::record_not_found("Meter with id 9 not found."))
        );
    }

    #[test]
    fn test_relationship_lookups_are_sorted_by_id() {
        let graph = graph();

        let analyses: Vec<u64> = graph
            .analyses_for_device(1)
            .unwrap()
            .iter()
            .map(|a| a.analysis_id())
            .collect();
        assert_eq!(analyses, [100, 101]);

        let reports: Vec<u64> = graph
            .reports_for_analysis(100)
            .unwrap()
            .iter()
            .map(|r| r.report_id())
            .collect();
        assert_eq!(reports, [500, 501]);

        assert_eq!(graph.reports_for_analysis(101), Ok(vec![]));
    }
}
