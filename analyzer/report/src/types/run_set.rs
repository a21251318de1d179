use super::run_metrics::RunMetrics;
use serde::{Deserialize, Serialize};

/// Metrics of one named run together with the log it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedRun {
    pub name: String,
    pub source: Option<String>,
    pub metrics: RunMetrics,
}

/// Insertion-ordered collection of run name -> metrics.
///
/// Order is the order in which runs were added, which is also the order
/// used on every comparative chart axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct RunSet {
    runs: Vec<NamedRun>,
}

impl RunSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a run and returns the name it was stored under.
    ///
    /// Names are unique within the set, a clashing name gets a ` (2)`, ` (3)`...
    /// suffix.
    pub fn insert(
        &mut self,
        name: &str,
        source: Option<String>,
        metrics: RunMetrics,
    ) -> String {
        let mut unique_name = name.to_owned();
        let mut suffix = 2;
        while self.get(&unique_name).is_some() {
            unique_name = format!("{name} ({suffix})");
            suffix += 1;
        }

        self.runs.push(NamedRun {
            name: unique_name.clone(),
            source,
            metrics,
        });
        unique_name
    }

    pub fn get(&self, name: &str) -> Option<&RunMetrics> {
        self.runs
            .iter()
            .find(|run| run.name == name)
            .map(|run| &run.metrics)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedRun> {
        self.runs.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.runs.iter().map(|run| run.name.clone()).collect()
    }

    /// Collects one value per run, in run order.
    pub fn values<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&RunMetrics) -> f64,
    {
        self.runs.iter().map(|run| f(&run.metrics)).collect()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn total_requests(&self) -> u64 {
        self.runs.iter().map(|run| run.metrics.total_requests).sum()
    }
}
