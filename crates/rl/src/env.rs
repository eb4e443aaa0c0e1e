//! # Environment Interface
//!
//! The episodic environment contract shared by every arena in this
//! crate, plus the step result and error types that travel with it.

use thiserror::Error;

/// What happened during a step, beyond the scalar reward.
///
/// At most one terminal cause is reported per step. When several fire
/// at once their rewards still all apply, but the event names the first
/// cause checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// Nothing notable; the episode continues.
    None,
    /// The agent came within the success radius of the target.
    ReachedTarget,
    /// The agent came within the collision radius of an obstacle.
    HitObstacle,
    /// The configured step limit expired before any terminal event.
    Truncated,
    /// The action was malformed and ignored; state did not advance.
    Rejected,
}

/// Result of advancing an environment by one action.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Observation after the transition.
    pub obs: Vec<f32>,
    /// Reward earned by the transition.
    pub reward: f32,
    /// True when the episode has ended and `reset` is required.
    pub done: bool,
    /// Cause classification for this step.
    pub event: StepEvent,
}

/// Errors surfaced by [`Env::step`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The episode already ended; call [`Env::reset`] before stepping.
    #[error("episode is over, reset the environment before stepping")]
    EpisodeOver,
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines
/// the core interface an environment must provide. Each call to
/// [`step`] advances the simulation by one action and returns the new
/// observation vector, a reward signal, and whether the episode has
/// terminated.
///
/// Unlike the classic formulation, actions are slices so environments
/// with multi-component continuous controls share the interface, and
/// stepping a finished episode is an error rather than silent
/// undefined behavior.
///
/// [`step`]: Env::step
pub trait Env {
    /// Reset the environment to a fresh episode and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Observation of the current state, without advancing it.
    fn observe(&self) -> Vec<f32>;

    /// Advance the environment by one action.
    fn step(&mut self, action: &[f32]) -> Result<Step, StepError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}
