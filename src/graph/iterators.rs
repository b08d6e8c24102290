// License: MIT
// Copyright © 2026 Energy DaVinci

//! Iterators over the records in a `HouseholdGraph`.

use crate::{Analysis, Device, Meter, Report};

use super::Record;

type RawNodes<'a, D, M, A, R> = std::slice::Iter<'a, petgraph::graph::Node<Record<D, M, A, R>>>;

/// An iterator over the devices in a `HouseholdGraph`.
pub struct Devices<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    pub(crate) iter: RawNodes<'a, D, M, A, R>,
}

impl<'a, D, M, A, R> Iterator for Devices<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.find_map(|n| match &n.weight {
            Record::Device(device) => Some(device),
            _ => None,
        })
    }
}

/// An iterator over the meters in a `HouseholdGraph`.
pub struct Meters<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    pub(crate) iter: RawNodes<'a, D, M, A, R>,
}

impl<'a, D, M, A, R> Iterator for Meters<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    type Item = &'a M;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.find_map(|n| match &n.weight {
            Record::Meter(meter) => Some(meter),
            _ => None,
        })
    }
}

/// An iterator over the analyses in a `HouseholdGraph`.
pub struct Analyses<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    pub(crate) iter: RawNodes<'a, D, M, A, R>,
}

impl<'a, D, M, A, R> Iterator for Analyses<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.find_map(|n| match &n.weight {
            Record::Analysis(analysis) => Some(analysis),
            _ => None,
        })
    }
}

/// An iterator over the reports in a `HouseholdGraph`.
pub struct Reports<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    pub(crate) iter: RawNodes<'a, D, M, A, R>,
}

impl<'a, D, M, A, R> Iterator for Reports<'a, D, M, A, R>
where
    D: Device,
    M: Meter,
    A: Analysis,
    R: Report,
{
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.find_map(|n| match &n.weight {
            Record::Report(report) => Some(report),
            _ => None,
        })
    }
}
