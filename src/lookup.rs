//! Lookup-table-driven alignment.
//!
//! A [`PositionTable`] maps a configuration size (as decimal integer
//! text) to the last-known actuator position for that size. The aligner
//! seeds its scan window from the table, runs a step-scan fit-move, then
//! overwrites the entry with the post-move readback so the table tracks
//! drift. The table is caller-owned and mutated in place; concurrent
//! alignment calls against one table must be serialized by the caller.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::align::FitMoveScan;
use crate::error::AlignError;
use crate::feature::FeatureSelector;
use crate::hardware::{Actuator, Detector};
use crate::range::range_from_center;
use crate::stats::FitCollector;

/// Last-known actuator position per configuration size.
///
/// Keys are decimal integer text (the size in µm); values are positions.
pub type PositionTable = BTreeMap<String, f64>;

/// Scan policy derived from the configuration size.
///
/// The window half-width and step scale with the size being aligned:
/// larger openings move the feature further and need a coarser scan.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LookupPolicy {
    /// Window half-width per unit of size.
    pub span_scale: f64,
    /// Step size per unit of size.
    pub step_scale: f64,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            span_scale: 3.0 / 1000.0,
            step_scale: 1.0 / 5000.0,
        }
    }
}

impl LookupPolicy {
    /// Window half-width for a given size.
    pub fn span(&self, size: f64) -> f64 {
        size * self.span_scale
    }

    /// Scan step for a given size.
    pub fn step(&self, size: f64) -> f64 {
        size * self.step_scale
    }
}

/// Canonical table key for a size: decimal text of the truncated value.
pub fn table_key(size: f64) -> String {
    format!("{}", size as i64)
}

/// Check the table against the schema: every key decimal integer text,
/// every value finite. Runs before every table use.
pub fn validate_table(table: &PositionTable) -> Result<(), AlignError> {
    for (key, value) in table {
        if key.parse::<i64>().is_err() {
            return Err(AlignError::Validation(format!(
                "key {key:?} is not decimal integer text"
            )));
        }
        if !value.is_finite() {
            return Err(AlignError::Validation(format!(
                "value for key {key:?} is not finite: {value}"
            )));
        }
    }
    Ok(())
}

fn lookup_center(table: &PositionTable, size: f64) -> Result<f64, AlignError> {
    validate_table(table)?;
    table
        .get(&table_key(size))
        .copied()
        .ok_or_else(|| AlignError::KeyNotFound {
            size,
            available: table.keys().cloned().collect(),
        })
}

/// Align `motor` for a given configuration size using the lookup table,
/// with the default scan policy.
///
/// Scans around the stored position, moves to the fitted feature, then
/// overwrites the table entry with the settled readback. Any failure
/// before the final readback leaves the table unmodified.
pub fn align_with_lookup<M, D, C, F>(
    motor: &mut M,
    size: f64,
    table: &mut PositionTable,
    det: &mut D,
    feature: FeatureSelector,
    make_collector: F,
) -> Result<(), AlignError>
where
    M: Actuator,
    D: Detector,
    C: FitCollector,
    F: Fn(&str, &str) -> C,
{
    align_with_lookup_policy(
        motor,
        size,
        table,
        det,
        feature,
        make_collector,
        LookupPolicy::default(),
    )
}

/// [`align_with_lookup`] with an explicit scan policy.
pub fn align_with_lookup_policy<M, D, C, F>(
    motor: &mut M,
    size: f64,
    table: &mut PositionTable,
    det: &mut D,
    feature: FeatureSelector,
    make_collector: F,
    policy: LookupPolicy,
) -> Result<(), AlignError>
where
    M: Actuator,
    D: Detector,
    C: FitCollector,
    F: Fn(&str, &str) -> C,
{
    let center = lookup_center(table, size)?;
    let (window, num) = range_from_center(center, policy.span(size), policy.step(size))?;

    FitMoveScan::stepped(num, make_collector).run(det, motor, &window, feature)?;

    let settled = motor.position().map_err(AlignError::Motion)?;
    info!(
        "Aligned size {}: table entry {} -> {:.4}",
        size,
        table_key(size),
        settled
    );
    table.insert(table_key(size), settled);
    Ok(())
}

/// Move `motor` straight to the stored position for a size, no scan.
///
/// The table is validated but never mutated.
pub fn move_with_lookup<M: Actuator>(
    motor: &mut M,
    size: f64,
    table: &PositionTable,
) -> Result<(), AlignError> {
    let target = lookup_center(table, size)?;
    info!("Moving {} to stored position {:.4}", motor.name(), target);
    motor.move_to(target).map_err(AlignError::Motion)?;
    motor.wait_settled().map_err(AlignError::Motion)
}

/// Load a position table from a JSON file, validating it on load.
pub fn load_table(path: impl AsRef<Path>) -> Result<PositionTable, std::io::Error> {
    let json = std::fs::read_to_string(path)?;
    let table: PositionTable = serde_json::from_str(&json)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    validate_table(&table)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    Ok(table)
}

/// Save a position table to a JSON file.
pub fn save_table(path: impl AsRef<Path>, table: &PositionTable) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(table)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}
