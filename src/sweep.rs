//! Scan primitives: sweep an actuator while sampling a detector.
//!
//! Two sweep shapes share one signature so the alignment wrapper can
//! decorate either uniformly: [`StepSweep`] stops and settles at each
//! point, [`SpeedSweep`] samples on the fly during one continuous move.

use tracing::{debug, info};

use crate::error::AlignError;
use crate::hardware::{Actuator, Detector};

/// Start and end of a single sweep. The point count or sweep speed is
/// carried by the primitive itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanWindow {
    pub start: f64,
    pub end: f64,
}

impl ScanWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Receiver for `(position, value)` samples streamed during a sweep.
pub trait SampleSink {
    /// Record one sample of the detector value at an actuator position.
    fn record(&mut self, position: f64, value: f64);
}

/// A scan-producing operation: drives `motor` across `window` while
/// reading `det`, streaming every sample into `sink`.
///
/// Implementations must leave the actuator wherever the sweep ends and
/// must propagate device errors unchanged; they never command a move to
/// a fitted position themselves.
pub trait SweepPlan {
    fn run<D: Detector, M: Actuator>(
        &self,
        det: &mut D,
        motor: &mut M,
        window: &ScanWindow,
        sink: &mut dyn SampleSink,
    ) -> Result<(), AlignError>;
}

/// Fixed-step-count sweep: move, settle, read, `num` times.
#[derive(Debug, Clone, Copy)]
pub struct StepSweep {
    /// Number of points, inclusive of both window endpoints.
    pub num: usize,
}

impl StepSweep {
    pub fn new(num: usize) -> Self {
        Self { num }
    }

    /// Evenly spaced positions across the window, endpoints inclusive.
    fn positions(&self, window: &ScanWindow) -> Vec<f64> {
        if self.num <= 1 {
            return vec![window.start];
        }
        let span = window.end - window.start;
        (0..self.num)
            .map(|i| window.start + span * i as f64 / (self.num - 1) as f64)
            .collect()
    }
}

impl SweepPlan for StepSweep {
    fn run<D: Detector, M: Actuator>(
        &self,
        det: &mut D,
        motor: &mut M,
        window: &ScanWindow,
        sink: &mut dyn SampleSink,
    ) -> Result<(), AlignError> {
        if self.num == 0 {
            return Err(AlignError::BadRange("step sweep needs at least one point".into()));
        }
        info!(
            "Step scanning {} with {}: {} points over [{:.4}, {:.4}]",
            motor.name(),
            det.name(),
            self.num,
            window.start,
            window.end
        );
        for pos in self.positions(window) {
            motor.move_to(pos).map_err(AlignError::Motion)?;
            motor.wait_settled().map_err(AlignError::Motion)?;
            let readback = motor.position().map_err(AlignError::Motion)?;
            let value = det.read().map_err(AlignError::Detector)?;
            debug!("sample at {:.4}: {:.4}", readback, value);
            sink.record(readback, value);
        }
        Ok(())
    }
}

/// Constant-speed non-stopping sweep: one continuous move from start to
/// end, sampling the readback and detector while in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedSweep {
    /// Sweep velocity; `None` keeps the actuator's current speed.
    pub speed: Option<f64>,
}

impl SpeedSweep {
    pub fn new(speed: Option<f64>) -> Self {
        Self { speed }
    }
}

impl SweepPlan for SpeedSweep {
    fn run<D: Detector, M: Actuator>(
        &self,
        det: &mut D,
        motor: &mut M,
        window: &ScanWindow,
        sink: &mut dyn SampleSink,
    ) -> Result<(), AlignError> {
        info!(
            "Fast scanning {} with {} over [{:.4}, {:.4}]",
            motor.name(),
            det.name(),
            window.start,
            window.end
        );
        motor.move_to(window.start).map_err(AlignError::Motion)?;
        motor.wait_settled().map_err(AlignError::Motion)?;
        if let Some(speed) = self.speed {
            motor.set_speed(speed).map_err(AlignError::Motion)?;
        }
        motor.move_to(window.end).map_err(AlignError::Motion)?;
        loop {
            let settled = motor.on_target().map_err(AlignError::Motion)?;
            let position = motor.position().map_err(AlignError::Motion)?;
            let value = det.read().map_err(AlignError::Detector)?;
            sink.record(position, value);
            if settled {
                break;
            }
        }
        Ok(())
    }
}
