//! Error types for alignment operations.

use thiserror::Error;

use crate::feature::StatGroup;

/// Error while extracting a feature value from a finished fit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// The statistics result carries no data for the requested group.
    #[error("fit failed: no {0} statistics, check device names are correct")]
    NoData(StatGroup),

    /// FWHM is zero or missing, so no peak was resolved in the scan range.
    #[error("fit failed: no resolvable peak within scan range")]
    NoPeak,

    /// The requested field resolved to an empty candidate list.
    #[error("fit failed: {0} produced no candidate positions")]
    NoCandidates(crate::feature::StatField),
}

/// Error during an alignment run.
#[derive(Error, Debug)]
pub enum AlignError {
    /// Lookup table failed schema validation.
    #[error("lookup table failed validation: {0}")]
    Validation(String),

    /// Requested size has no entry in the lookup table.
    #[error("size {size} is not in the lookup table (available keys: {available:?})")]
    KeyNotFound {
        size: f64,
        available: Vec<String>,
    },

    /// Scan window parameters are unusable.
    #[error("invalid scan range: {0}")]
    BadRange(String),

    /// Feature extraction rejected the fit.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// Actuator motion error, message preserved from the device layer.
    #[error("actuator error: {0}")]
    Motion(String),

    /// Detector readout error, message preserved from the device layer.
    #[error("detector error: {0}")]
    Detector(String),
}
