//! Shared fakes for unit tests.
//!
//! Fake devices implement the hardware seams against in-memory state and
//! can share an event log, so tests can assert on command ordering.

use std::cell::RefCell;
use std::rc::Rc;

use crate::hardware::{Actuator, Detector};
use crate::stats::{FitCollector, FitResult};
use crate::sweep::SampleSink;

/// Shared, ordered record of device and collector activity.
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// In-memory actuator. Moves complete on `wait_settled` or, for
/// in-flight sweeps, after a configurable number of `on_target` polls.
pub struct FakeMotor {
    name: String,
    position: f64,
    target: f64,
    settle_polls: usize,
    polls_left: usize,
    pub commanded_speed: Option<f64>,
    pub moves: Vec<f64>,
    pub fail_move: Option<String>,
    events: Option<EventLog>,
}

impl FakeMotor {
    pub fn at(position: f64) -> Self {
        Self {
            name: "motor".into(),
            position,
            target: position,
            settle_polls: 0,
            polls_left: 0,
            commanded_speed: None,
            moves: Vec::new(),
            fail_move: None,
            events: None,
        }
    }

    /// Report on-target only after `polls` calls to `on_target`.
    pub fn settling_after(mut self, polls: usize) -> Self {
        self.settle_polls = polls;
        self
    }

    pub fn with_events(mut self, events: EventLog) -> Self {
        self.events = Some(events);
        self
    }

    fn log(&self, event: String) {
        if let Some(events) = &self.events {
            events.borrow_mut().push(event);
        }
    }
}

impl Actuator for FakeMotor {
    fn name(&self) -> &str {
        &self.name
    }

    fn move_to(&mut self, position: f64) -> Result<(), String> {
        if let Some(msg) = &self.fail_move {
            return Err(msg.clone());
        }
        self.target = position;
        self.polls_left = self.settle_polls;
        if self.settle_polls == 0 {
            self.position = position;
        }
        self.moves.push(position);
        self.log(format!("move:{position}"));
        Ok(())
    }

    fn wait_settled(&mut self) -> Result<(), String> {
        self.position = self.target;
        self.polls_left = 0;
        Ok(())
    }

    fn position(&mut self) -> Result<f64, String> {
        Ok(self.position)
    }

    fn on_target(&mut self) -> Result<bool, String> {
        if self.polls_left > 0 {
            self.polls_left -= 1;
            Ok(false)
        } else {
            self.position = self.target;
            Ok(true)
        }
    }

    fn set_speed(&mut self, speed: f64) -> Result<(), String> {
        self.commanded_speed = Some(speed);
        Ok(())
    }
}

/// Detector returning a fixed value or a fixed error.
pub struct FakeDetector {
    name: String,
    value: Result<f64, String>,
}

impl FakeDetector {
    pub fn constant(value: f64) -> Self {
        Self {
            name: "det".into(),
            value: Ok(value),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            name: "det".into(),
            value: Err(msg.into()),
        }
    }
}

impl Detector for FakeDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<f64, String> {
        self.value.clone()
    }
}

/// Sink that keeps every sample it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub samples: Vec<(f64, f64)>,
}

impl SampleSink for RecordingSink {
    fn record(&mut self, position: f64, value: f64) {
        self.samples.push((position, value));
    }
}

/// Collector that records samples and hands back a canned result.
pub struct FakeCollector {
    pub samples: Vec<(f64, f64)>,
    pub canned: FitResult,
    events: Option<EventLog>,
}

impl FakeCollector {
    pub fn returning(canned: FitResult) -> Self {
        Self {
            samples: Vec::new(),
            canned,
            events: None,
        }
    }

    pub fn with_events(mut self, events: EventLog) -> Self {
        self.events = Some(events);
        self
    }
}

impl SampleSink for FakeCollector {
    fn record(&mut self, position: f64, value: f64) {
        self.samples.push((position, value));
        if let Some(events) = &self.events {
            events.borrow_mut().push("sample".into());
        }
    }
}

impl FitCollector for FakeCollector {
    fn result(&self) -> FitResult {
        self.canned.clone()
    }
}
