//! Hardware trait seams for the alignment loop.
//!
//! The alignment code never talks to a transport directly; it drives an
//! [`Actuator`] and samples a [`Detector`] through these traits. Errors
//! cross the seam as plain strings and are wrapped into [`AlignError`]
//! variants by the caller with the message preserved.
//!
//! [`AlignError`]: crate::error::AlignError

/// A positionable axis with a settled-position readback.
///
/// Motion is split into a command phase and a wait phase so that sweeps
/// can sample while the axis is in flight. Callers wanting classic
/// move-and-wait semantics issue `move_to` followed by `wait_settled`.
pub trait Actuator {
    /// Device name, used for log output and collector channel binding.
    fn name(&self) -> &str;

    /// Command an absolute move. Returns once the command is accepted,
    /// not once the move completes.
    fn move_to(&mut self, position: f64) -> Result<(), String>;

    /// Block until the axis reports motion-complete.
    fn wait_settled(&mut self) -> Result<(), String>;

    /// Current readback position.
    fn position(&mut self) -> Result<f64, String>;

    /// Whether the axis currently reports on-target.
    fn on_target(&mut self) -> Result<bool, String>;

    /// Set the closed-loop velocity used for subsequent moves.
    fn set_speed(&mut self, speed: f64) -> Result<(), String>;
}

/// A scalar readout channel used as the alignment signal.
pub trait Detector {
    /// Device name, used for log output and collector channel binding.
    fn name(&self) -> &str;

    /// Take one reading.
    fn read(&mut self) -> Result<f64, String>;
}
