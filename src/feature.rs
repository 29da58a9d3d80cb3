//! Catalog of fitted features an alignment can target.
//!
//! A [`FeatureSelector`] names which statistic of the fitted curve the
//! actuator should be moved to: the centroid, the peak position, the
//! minimum or the maximum, each either of the raw signal or of its
//! derivative. The catalog is fixed; every selector maps statically to a
//! `(StatGroup, StatField)` pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which fitted curve a statistic is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatGroup {
    /// Statistics of the detector signal itself.
    Raw,
    /// Statistics of the numerical derivative of the signal.
    Derivative,
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatGroup::Raw => write!(f, "raw"),
            StatGroup::Derivative => write!(f, "derivative"),
        }
    }
}

/// Which field of a fitted statistics group to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatField {
    /// Centre of mass of the curve.
    Centroid,
    /// Position of the fitted peak.
    PeakPosition,
    /// Position of the minimum value.
    Minimum,
    /// Position of the maximum value.
    Maximum,
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatField::Centroid => write!(f, "centroid"),
            StatField::PeakPosition => write!(f, "peak position"),
            StatField::Minimum => write!(f, "minimum"),
            StatField::Maximum => write!(f, "maximum"),
        }
    }
}

/// Target feature for an alignment move.
///
/// Eight fixed members: the four statistic fields, each available on the
/// raw signal or on its derivative. Derivative features locate edges
/// (e.g. a slit blade crossing the beam) where the raw signal has no peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureSelector {
    /// Centre of mass of the raw signal.
    Centroid,
    /// Fitted peak position of the raw signal.
    PeakPosition,
    /// Minimum of the raw signal.
    Minimum,
    /// Maximum of the raw signal.
    Maximum,
    /// Centre of mass of the derivative.
    DerivativeCentroid,
    /// Fitted peak position of the derivative.
    DerivativePeakPosition,
    /// Minimum of the derivative.
    DerivativeMinimum,
    /// Maximum of the derivative.
    DerivativeMaximum,
}

impl FeatureSelector {
    /// Statistics group this feature is read from.
    pub fn group(&self) -> StatGroup {
        match self {
            FeatureSelector::Centroid
            | FeatureSelector::PeakPosition
            | FeatureSelector::Minimum
            | FeatureSelector::Maximum => StatGroup::Raw,
            FeatureSelector::DerivativeCentroid
            | FeatureSelector::DerivativePeakPosition
            | FeatureSelector::DerivativeMinimum
            | FeatureSelector::DerivativeMaximum => StatGroup::Derivative,
        }
    }

    /// Field within the group this feature extracts.
    pub fn field(&self) -> StatField {
        match self {
            FeatureSelector::Centroid | FeatureSelector::DerivativeCentroid => StatField::Centroid,
            FeatureSelector::PeakPosition | FeatureSelector::DerivativePeakPosition => {
                StatField::PeakPosition
            }
            FeatureSelector::Minimum | FeatureSelector::DerivativeMinimum => StatField::Minimum,
            FeatureSelector::Maximum | FeatureSelector::DerivativeMaximum => StatField::Maximum,
        }
    }
}

impl fmt::Display for FeatureSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.group(), self.field())
    }
}
