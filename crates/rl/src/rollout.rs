//! # Rollout Driver
//!
//! Runs episodes by wiring a [`Policy`] to an [`Env`] and collects the
//! per-episode and aggregate numbers training and evaluation loops care
//! about.

use crate::env::{Env, StepError, StepEvent};
use crate::policy::Policy;

/// Summary of one finished episode.
#[derive(Clone, Debug)]
pub struct EpisodeReport {
    /// Simulated steps taken. Rejected actions do not count.
    pub steps: u32,
    /// Total reward over the episode.
    pub reward: f32,
    /// Terminal event, or [`StepEvent::None`] when the driver step
    /// limit stopped the episode first.
    pub outcome: StepEvent,
    /// Malformed actions the environment ignored.
    pub rejected_actions: u32,
}

/// Drives `env` with `policy` until the episode ends or `step_limit`
/// driver iterations elapse.
///
/// The environment is reset at the start, so any in-progress episode is
/// discarded.
///
/// # Errors
///
/// Returns [`StepError`] if the environment refuses a step, which only
/// happens when its episode state is corrupted externally.
pub fn run_episode<E, P>(
    env: &mut E,
    policy: &mut P,
    step_limit: u32,
) -> Result<EpisodeReport, StepError>
where
    E: Env,
    P: Policy + ?Sized,
{
    let mut obs = env.reset();
    let mut report = EpisodeReport {
        steps: 0,
        reward: 0.0,
        outcome: StepEvent::None,
        rejected_actions: 0,
    };

    for _ in 0..step_limit {
        let action = policy.act(&obs);
        let step = env.step(&action)?;
        report.reward += step.reward;
        if step.event == StepEvent::Rejected {
            report.rejected_actions += 1;
        } else {
            report.steps += 1;
        }
        obs = step.obs;
        if step.done {
            report.outcome = step.event;
            break;
        }
    }
    Ok(report)
}

/// Aggregate counters over many episodes.
#[derive(Clone, Debug, Default)]
pub struct RolloutStats {
    pub episodes: u32,
    pub successes: u32,
    pub collisions: u32,
    pub truncations: u32,
    pub total_reward: f32,
    pub total_steps: u64,
}

impl RolloutStats {
    /// Folds one episode into the totals.
    pub fn record(&mut self, report: &EpisodeReport) {
        self.episodes += 1;
        self.total_reward += report.reward;
        self.total_steps += u64::from(report.steps);
        match report.outcome {
            StepEvent::ReachedTarget => self.successes += 1,
            StepEvent::HitObstacle => self.collisions += 1,
            StepEvent::Truncated => self.truncations += 1,
            StepEvent::None | StepEvent::Rejected => {}
        }
    }

    /// Mean episode reward, zero before any episode is recorded.
    #[must_use]
    pub fn mean_reward(&self) -> f32 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / self.episodes as f32
        }
    }

    /// Fraction of episodes that reached the target.
    #[must_use]
    pub fn success_rate(&self) -> f32 {
        if self.episodes == 0 {
            0.0
        } else {
            self.successes as f32 / self.episodes as f32
        }
    }
}
