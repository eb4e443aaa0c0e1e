//! # Policies
//!
//! Action sources for driving environments. These are deliberately
//! tiny: a uniform random explorer, a straight-line seeker for smoke
//! tests, and a manual policy that forwards externally set axis input.

use physics::Vec3;

/// Maps observations to actions.
///
/// Policies may keep internal state (an RNG, a controller reading), so
/// acting takes `&mut self`.
pub trait Policy {
    /// Produces the action for the given observation.
    fn act(&mut self, obs: &[f32]) -> Vec<f32>;
}

/// Uniform random actions in `[-1, 1]` per component.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _obs: &[f32]) -> Vec<f32> {
        vec![
            self.rng.f32() * 2.0 - 1.0,
            self.rng.f32() * 2.0 - 1.0,
        ]
    }
}

/// Walks straight at the target.
///
/// Reads the relative target position from the head of the observation
/// and normalizes it into a unit planar move. Useful as a behavioral
/// baseline and in tests that need an agent that actually arrives.
#[derive(Default)]
pub struct SeekPolicy;

impl Policy for SeekPolicy {
    fn act(&mut self, obs: &[f32]) -> Vec<f32> {
        if obs.len() < 3 {
            return vec![0.0, 0.0];
        }
        let to_target = Vec3::new(obs[0], 0.0, obs[2]);
        let dir = to_target.normalize();
        vec![dir.x, dir.z]
    }
}

/// Axis reading fed into [`ManualPolicy`], in the style of a game
/// input layer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisInput {
    /// Sideways component, becomes the x action.
    pub horizontal: f32,
    /// Forward component, becomes the z action.
    pub vertical: f32,
}

/// Forwards whatever axis input was last set.
///
/// The caller owns the input lifecycle: set [`ManualPolicy::input`]
/// from a controller or script, then let the rollout loop act.
#[derive(Default)]
pub struct ManualPolicy {
    pub input: AxisInput,
}

impl ManualPolicy {
    #[must_use]
    pub fn new(input: AxisInput) -> Self {
        Self { input }
    }

    /// Writes the current axes into an action buffer, mirroring
    /// heuristic controllers that fill a caller-provided slice. Buffers
    /// shorter than two components are left untouched.
    pub fn write_into(&self, out: &mut [f32]) {
        if out.len() < 2 {
            tracing::error!(
                "Action buffer has {} slots, expected at least 2. Leaving it unchanged.",
                out.len()
            );
            return;
        }
        out[0] = self.input.horizontal;
        out[1] = self.input.vertical;
    }
}

impl Policy for ManualPolicy {
    fn act(&mut self, _obs: &[f32]) -> Vec<f32> {
        vec![self.input.horizontal, self.input.vertical]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_policy_stays_in_unit_range() {
        let mut policy = RandomPolicy::new(9);
        for _ in 0..100 {
            let action = policy.act(&[]);
            assert_eq!(action.len(), 2);
            assert!(action.iter().all(|a| (-1.0..=1.0).contains(a)));
        }
    }

    #[test]
    fn seek_policy_points_at_the_target() {
        let mut policy = SeekPolicy;
        let action = policy.act(&[3.0, 0.0, 4.0, 9.9, 9.9, 9.9]);
        assert!((action[0] - 0.6).abs() < 1e-5);
        assert!((action[1] - 0.8).abs() < 1e-5);
    }

    #[test]
    fn seek_policy_handles_degenerate_observation() {
        let mut policy = SeekPolicy;
        assert_eq!(policy.act(&[1.0]), vec![0.0, 0.0]);
        // On top of the target the direction collapses to zero.
        assert_eq!(policy.act(&[0.0, 0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn manual_policy_forwards_axes() {
        let mut policy = ManualPolicy::new(AxisInput {
            horizontal: -0.25,
            vertical: 1.0,
        });
        assert_eq!(policy.act(&[]), vec![-0.25, 1.0]);
    }

    #[test]
    fn write_into_respects_short_buffers() {
        let policy = ManualPolicy::new(AxisInput {
            horizontal: 0.5,
            vertical: 0.5,
        });
        let mut short = [7.0];
        policy.write_into(&mut short);
        assert_eq!(short, [7.0]);

        let mut full = [0.0, 0.0, 0.0];
        policy.write_into(&mut full);
        assert_eq!(full, [0.5, 0.5, 0.0]);
    }
}
