//! Fit-and-move beamline alignment.
//!
//! Sweep an actuator across a window while sampling a detector, fit the
//! resulting curve, and move the actuator to a chosen statistical
//! feature of the fit (peak, centroid, minimum/maximum, or their
//! derivatives). A lookup-table variant seeds the scan window from the
//! last-known position per configuration size and self-corrects the
//! table from the post-move readback.
//!
//! # Overview
//!
//! - [`hardware`]: [`Actuator`]/[`Detector`] trait seams to the devices.
//! - [`sweep`]: the two scan primitives, step scan and constant-speed
//!   sweep, behind one [`SweepPlan`] signature.
//! - [`stats`]: the fitted-statistics model and validated feature
//!   extraction; the statistics engine itself sits behind
//!   [`FitCollector`].
//! - [`align`]: [`FitMoveScan`], the wrapper that turns any sweep into
//!   a scan-fit-move operation.
//! - [`lookup`]: the position table, its validation, and the
//!   table-driven aligner.
//!
//! Execution is synchronous and strictly sequential: the move is never
//! issued before the sweep has completed and the fit has been
//! validated, and the table is never updated before the move has
//! settled.

pub mod align;
pub mod error;
pub mod feature;
pub mod hardware;
pub mod lookup;
pub mod range;
pub mod stats;
pub mod sweep;

#[cfg(test)]
pub(crate) mod testing;

pub use align::FitMoveScan;
pub use error::{AlignError, FitError};
pub use feature::{FeatureSelector, StatField, StatGroup};
pub use hardware::{Actuator, Detector};
pub use lookup::{
    align_with_lookup, align_with_lookup_policy, load_table, move_with_lookup, save_table,
    table_key, validate_table, LookupPolicy, PositionTable,
};
pub use range::range_from_center;
pub use stats::{extract, FitCollector, FitResult, FitValue, GroupStats};
pub use sweep::{SampleSink, ScanWindow, SpeedSweep, StepSweep, SweepPlan};
