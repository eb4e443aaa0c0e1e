#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # Arena RL
//!
//! Episodic reinforcement learning environments over the `physics`
//! crate, plus the policies and rollout plumbing to drive them.
//!
//! The centerpiece is [`AvoidEnv`], a navigate-and-avoid arena: reach a
//! sampled target, stay clear of sampled obstacles, and collect shaping
//! reward from side-facing ray scans. Environments implement the
//! [`Env`] trait; anything implementing [`Policy`] can drive them
//! through [`rollout::run_episode`].

pub mod avoid;
pub mod env;
pub mod policy;
pub mod rollout;

pub use avoid::{ArenaEnv, AvoidConfig, AvoidEnv};
pub use env::{Env, Step, StepError, StepEvent};
pub use policy::{AxisInput, ManualPolicy, Policy, RandomPolicy, SeekPolicy};
pub use rollout::{run_episode, EpisodeReport, RolloutStats};
