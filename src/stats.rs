//! Fitted-statistics data model and feature extraction.
//!
//! The statistics engine itself lives outside this crate; it is reached
//! through the [`FitCollector`] seam. What this module owns is the shape
//! of a finished fit ([`FitResult`]) and the validated extraction of a
//! single target position from it ([`extract`]).

use serde::{Deserialize, Serialize};

use crate::error::FitError;
use crate::feature::{FeatureSelector, StatField, StatGroup};
use crate::sweep::SampleSink;

/// A fitted field value: a single scalar, or an ordered list of
/// candidate positions when the fit found more than one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FitValue {
    Scalar(f64),
    Candidates(Vec<f64>),
}

impl FitValue {
    /// First candidate, or `None` for an empty candidate list.
    ///
    /// Multi-valued fits are ordered by the engine; the first entry is
    /// the preferred one, so ties break deterministically.
    pub fn first(&self) -> Option<f64> {
        match self {
            FitValue::Scalar(v) => Some(*v),
            FitValue::Candidates(vs) => vs.first().copied(),
        }
    }
}

impl From<f64> for FitValue {
    fn from(v: f64) -> Self {
        FitValue::Scalar(v)
    }
}

/// Fitted statistics for one group (raw signal or derivative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Centre of mass.
    pub centroid: f64,
    /// Fitted peak position.
    pub peak_position: FitValue,
    /// Position of the minimum value.
    pub minimum: FitValue,
    /// Position of the maximum value.
    pub maximum: FitValue,
    /// Full width at half maximum. `None` or `0.0` means the fit did not
    /// resolve a peak and the group's positions are not trustworthy.
    pub fwhm: Option<f64>,
}

impl GroupStats {
    /// Whether the fit resolved a peak (FWHM present and non-zero).
    pub fn has_peak(&self) -> bool {
        matches!(self.fwhm, Some(w) if w != 0.0)
    }

    fn field(&self, field: StatField) -> FitValue {
        match field {
            StatField::Centroid => FitValue::Scalar(self.centroid),
            StatField::PeakPosition => self.peak_position.clone(),
            StatField::Minimum => self.minimum.clone(),
            StatField::Maximum => self.maximum.clone(),
        }
    }
}

/// Finished output of one scan's statistics collection.
///
/// Created fresh per scan, read once by [`extract`], then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Statistics of the detector signal, if any samples produced a fit.
    pub raw: Option<GroupStats>,
    /// Statistics of the signal's derivative.
    pub derivative: Option<GroupStats>,
}

impl FitResult {
    /// Statistics for the requested group, if present.
    pub fn group(&self, group: StatGroup) -> Option<&GroupStats> {
        match group {
            StatGroup::Raw => self.raw.as_ref(),
            StatGroup::Derivative => self.derivative.as_ref(),
        }
    }
}

/// Seam to the external statistics engine.
///
/// A collector is constructed per scan, bound to the motor readback and
/// detector value channels, with derivative computation enabled. It
/// receives every sample emitted during the sweep and exposes the
/// finished [`FitResult`] once the sweep has completed.
pub trait FitCollector: SampleSink {
    /// Finished statistics for the samples recorded so far.
    fn result(&self) -> FitResult;
}

/// Validate a finished fit and extract the requested feature position.
///
/// Fails if the group is absent, if no peak was resolved (falsy FWHM),
/// or if a multi-valued field carries no candidates. On a multi-valued
/// field the first candidate is returned.
///
/// Pure: identical inputs always yield identical output.
pub fn extract(result: &FitResult, feature: FeatureSelector) -> Result<f64, FitError> {
    let group = feature.group();
    let stats = result.group(group).ok_or(FitError::NoData(group))?;
    if !stats.has_peak() {
        return Err(FitError::NoPeak);
    }
    stats
        .field(feature.field())
        .first()
        .ok_or(FitError::NoCandidates(feature.field()))
}
