//! Fit-and-move alignment wrapper.
//!
//! [`FitMoveScan`] decorates any [`SweepPlan`] with the alignment
//! contract: subscribe a fresh statistics collector for the duration of
//! the sweep, validate and extract the requested feature from the
//! finished fit, then drive the actuator to that position and wait for
//! it to settle. The move is only ever issued after the sweep has
//! completed and the fit has been validated; a failed fit leaves the
//! actuator wherever the sweep ended.

use tracing::info;

use crate::error::AlignError;
use crate::feature::FeatureSelector;
use crate::hardware::{Actuator, Detector};
use crate::stats::{extract, FitCollector};
use crate::sweep::{ScanWindow, SpeedSweep, StepSweep, SweepPlan};

/// A sweep plan decorated with fit extraction and the final move.
///
/// The collector factory is invoked once per run with the motor and
/// detector readback channel names; it must return a collector with
/// derivative computation enabled. The collector's lifetime is scoped to
/// the run, so a sweep error tears it down without any motion command.
pub struct FitMoveScan<S, F> {
    sweep: S,
    make_collector: F,
}

impl<S, F, C> FitMoveScan<S, F>
where
    S: SweepPlan,
    C: FitCollector,
    F: Fn(&str, &str) -> C,
{
    pub fn new(sweep: S, make_collector: F) -> Self {
        Self {
            sweep,
            make_collector,
        }
    }

    /// Sweep, fit, and move to the fitted feature position.
    ///
    /// Issues exactly one move command on success and none on failure.
    /// Returns the commanded target position.
    pub fn run<D: Detector, M: Actuator>(
        &self,
        det: &mut D,
        motor: &mut M,
        window: &ScanWindow,
        feature: FeatureSelector,
    ) -> Result<f64, AlignError> {
        let mut collector = (self.make_collector)(motor.name(), det.name());
        self.sweep.run(det, motor, window, &mut collector)?;

        let result = collector.result();
        let target = extract(&result, feature)?;
        info!("Fit result for {}: {:?}, moving to {:.4}", feature, result, target);

        motor.move_to(target).map_err(AlignError::Motion)?;
        motor.wait_settled().map_err(AlignError::Motion)?;
        Ok(target)
    }
}

impl<F> FitMoveScan<StepSweep, F> {
    /// Step-scan specialization: settle and read at `num` points.
    pub fn stepped<C>(num: usize, make_collector: F) -> Self
    where
        C: FitCollector,
        F: Fn(&str, &str) -> C,
    {
        Self {
            sweep: StepSweep::new(num),
            make_collector,
        }
    }
}

impl<F> FitMoveScan<SpeedSweep, F> {
    /// Constant-speed specialization: sample on the fly during one
    /// continuous move, optionally at `speed`.
    pub fn swept<C>(speed: Option<f64>, make_collector: F) -> Self
    where
        C: FitCollector,
        F: Fn(&str, &str) -> C,
    {
        Self {
            sweep: SpeedSweep::new(speed),
            make_collector,
        }
    }
}
