use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use super::normalize::{clean_field, split_disciplines};
use super::types::{IndexedLab, LabRecord};

/// The loaded lab dataset.
///
/// Constructed once at startup and shared behind an `Arc`; nothing mutates
/// it afterwards, so concurrent requests read it without locking. The global
/// facet lists are precomputed here because they only depend on the dataset,
/// not on any request.
pub struct LabStore {
    labs: Vec<IndexedLab>,
    states: Vec<String>,
    cities: Vec<String>,
    disciplines: Vec<String>,
}

impl LabStore {
    /// Reads and parses the source JSON file. A missing or malformed file is
    /// a startup failure, not a per-request error.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lab dataset {}", path.display()))?;
        let records: Vec<LabRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("lab dataset {} is not a valid record array", path.display()))?;
        tracing::info!("Loaded {} lab records from {}", records.len(), path.display());
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<LabRecord>) -> Self {
        let labs: Vec<IndexedLab> = records.into_iter().map(index_record).collect();

        let states = distinct_sorted(labs.iter().map(|lab| lab.state_clean.as_str()));
        let cities = distinct_sorted(labs.iter().map(|lab| lab.city_clean.as_str()));
        let disciplines = distinct_sorted(
            labs.iter()
                .flat_map(|lab| lab.disciplines.iter().map(String::as_str)),
        );

        Self {
            labs,
            states,
            cities,
            disciplines,
        }
    }

    pub fn labs(&self) -> &[IndexedLab] {
        &self.labs
    }

    /// Distinct cleaned states across the whole dataset, sorted ascending.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Distinct canonical disciplines across the whole dataset, sorted
    /// ascending.
    pub fn disciplines(&self) -> &[String] {
        &self.disciplines
    }

    /// Distinct cleaned cities, cascaded by state: with a state selected the
    /// list narrows to that state's cities, without one it is the global
    /// list.
    pub fn cities_in(&self, state: Option<&str>) -> Vec<String> {
        match state {
            Some(state) => distinct_sorted(
                self.labs
                    .iter()
                    .filter(|lab| lab.state_clean == state)
                    .map(|lab| lab.city_clean.as_str()),
            ),
            None => self.cities.clone(),
        }
    }
}

fn index_record(record: LabRecord) -> IndexedLab {
    // The free-text filter scans raw values; only lowercasing is needed.
    let haystack = format!(
        "{} {} {} {} {} {}",
        record.lab_name,
        record.address,
        record.city,
        record.state,
        record.contact_person,
        record.email_id
    )
    .to_lowercase();

    IndexedLab {
        state_clean: clean_field(&record.state),
        city_clean: clean_field(&record.city),
        disciplines: split_disciplines(&record.discipline),
        haystack,
        record,
    }
}

/// Empty values are skipped: an empty filter chip is useless to the UI these
/// lists exist to drive.
fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
