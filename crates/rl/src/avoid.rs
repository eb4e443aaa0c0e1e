//! # Obstacle Avoidance Arena
//!
//! An episodic navigation environment. The agent is a velocity-driven
//! point in a square arena that must reach a target position while
//! staying clear of scattered obstacles. Side-facing ray scans feed
//! additional shaping reward when they strike tagged scenery.
//!
//! Episode flow per step: apply the action as a planar velocity,
//! integrate, pay a small time penalty, then check the target radius,
//! the obstacle radii, and finally run the configured number of ray
//! scans. Reaching the target or touching any obstacle ends the
//! episode; ray hits only shape the reward and never terminate.

use physics::{Body, ColliderTag, Ray, RayQuery, Vec3};
use serde::{Deserialize, Serialize};

use crate::env::{Env, Step, StepError, StepEvent};

/// Tuning knobs for [`AvoidEnv`].
///
/// Every field has a default matching the classic arena, so partial
/// scenario files only need to name what they change.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AvoidConfig {
    /// Scale applied to action components to produce velocity.
    pub move_speed: f32,
    /// Simulated seconds per step.
    pub dt: f32,
    /// Target and obstacles respawn uniformly in
    /// `[-spawn_extent, spawn_extent]` on x and z.
    pub spawn_extent: f32,
    /// Distance to the target that counts as success.
    pub target_radius: f32,
    /// Distance to an obstacle that counts as a collision.
    pub collision_radius: f32,
    /// Reach of each side scan ray.
    pub ray_length: f32,
    /// Reward added every simulated step.
    pub time_penalty: f32,
    /// Reward for reaching the target.
    pub target_reward: f32,
    /// Reward for touching one obstacle. Applied once per obstacle in
    /// range, so overlapping obstacles stack.
    pub collision_penalty: f32,
    /// Reward when a side ray strikes a block.
    pub block_reward: f32,
    /// Reward when a side ray strikes a wall.
    pub wall_penalty: f32,
    /// Ray scan rounds per step. Zero disables scanning.
    pub scans_per_step: u32,
    /// Steps after which the episode truncates, if set.
    pub max_steps: Option<u32>,
    /// Where the agent respawns on reset. `None` leaves the agent
    /// wherever the previous episode ended.
    pub agent_spawn: Option<[f32; 3]>,
    /// Number of obstacles sampled each episode.
    pub num_obstacles: usize,
}

impl Default for AvoidConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            dt: 0.02,
            spawn_extent: 4.0,
            target_radius: 1.5,
            collision_radius: 1.0,
            ray_length: 5.0,
            time_penalty: -0.01,
            target_reward: 30.0,
            collision_penalty: -50.0,
            block_reward: 30.0,
            wall_penalty: -1.0,
            scans_per_step: 1,
            max_steps: None,
            agent_spawn: Some([0.0, 0.0, 0.0]),
            num_obstacles: 3,
        }
    }
}

/// Obstacle avoidance environment over an injected ray query service.
///
/// The scenery `Q` is consulted only through [`RayQuery`], so tests can
/// swap the real [`physics::Scene`] for scripted hits.
pub struct AvoidEnv<Q> {
    pub config: AvoidConfig,
    pub agent: Body,
    pub target: Vec3,
    pub obstacles: Vec<Vec3>,
    scene: Q,
    rng: fastrand::Rng,
    steps: u32,
    episode_reward: f32,
    rejected_actions: u32,
    done: bool,
}

impl<Q: RayQuery> AvoidEnv<Q> {
    /// Creates the environment. Call [`Env::reset`] before stepping;
    /// until then the episode counts as over.
    #[must_use]
    pub fn new(config: AvoidConfig, scene: Q, seed: u64) -> Self {
        Self {
            config,
            agent: Body::at(Vec3::ZERO),
            target: Vec3::ZERO,
            obstacles: Vec::new(),
            scene,
            rng: fastrand::Rng::with_seed(seed),
            steps: 0,
            episode_reward: 0.0,
            rejected_actions: 0,
            done: true,
        }
    }

    /// Steps taken in the current episode.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Reward accumulated over the current episode.
    #[must_use]
    pub fn episode_reward(&self) -> f32 {
        self.episode_reward
    }

    /// Malformed actions ignored since the last reset.
    #[must_use]
    pub fn rejected_actions(&self) -> u32 {
        self.rejected_actions
    }

    /// True when the episode has ended or the environment was never
    /// reset.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Uniform sample on the arena floor, y pinned to zero.
    fn sample_position(&mut self) -> Vec3 {
        let extent = self.config.spawn_extent;
        let x = -extent + 2.0 * extent * self.rng.f32();
        let z = -extent + 2.0 * extent * self.rng.f32();
        Vec3::new(x, 0.0, z)
    }

    /// Casts the side scan rays once and returns their shaping reward.
    fn scan_reward(&self) -> f32 {
        let mut reward = 0.0;
        for dir in [Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)] {
            let ray = Ray::new(self.agent.pos, dir);
            if let Some(hit) = self.scene.cast(ray, self.config.ray_length) {
                reward += match hit.tag {
                    ColliderTag::Block => self.config.block_reward,
                    ColliderTag::Wall => self.config.wall_penalty,
                };
            }
        }
        reward
    }
}

impl<Q: RayQuery> Env for AvoidEnv<Q> {
    fn reset(&mut self) -> Vec<f32> {
        if let Some(spawn) = self.config.agent_spawn {
            self.agent.pos = Vec3::new(spawn[0], spawn[1], spawn[2]);
        }
        self.agent.vel = Vec3::ZERO;
        self.target = self.sample_position();
        self.obstacles = (0..self.config.num_obstacles)
            .map(|_| self.sample_position())
            .collect();
        self.steps = 0;
        self.episode_reward = 0.0;
        self.rejected_actions = 0;
        self.done = false;
        self.observe()
    }

    fn observe(&self) -> Vec<f32> {
        let mut obs = Vec::with_capacity(self.obs_size());
        let mut push = |v: Vec3| {
            obs.push(v.x);
            obs.push(v.y);
            obs.push(v.z);
        };
        push(self.target - self.agent.pos);
        for &obstacle in &self.obstacles {
            push(obstacle - self.agent.pos);
        }
        push(self.agent.vel);
        obs
    }

    fn step(&mut self, action: &[f32]) -> Result<Step, StepError> {
        if self.done {
            return Err(StepError::EpisodeOver);
        }
        if action.len() < 2 {
            tracing::error!(
                "Ignoring action with {} components, expected at least 2.",
                action.len()
            );
            self.rejected_actions += 1;
            return Ok(Step {
                obs: self.observe(),
                reward: 0.0,
                done: false,
                event: StepEvent::Rejected,
            });
        }

        self.steps += 1;
        self.agent.vel = Vec3::new(action[0], 0.0, action[1]) * self.config.move_speed;
        self.agent.integrate(self.config.dt);

        let mut reward = self.config.time_penalty;
        let mut event = StepEvent::None;

        if self.agent.pos.distance(self.target) < self.config.target_radius {
            reward += self.config.target_reward;
            self.done = true;
            event = StepEvent::ReachedTarget;
        }
        for &obstacle in &self.obstacles {
            if self.agent.pos.distance(obstacle) < self.config.collision_radius {
                reward += self.config.collision_penalty;
                self.done = true;
                if event == StepEvent::None {
                    event = StepEvent::HitObstacle;
                }
            }
        }

        for _ in 0..self.config.scans_per_step {
            reward += self.scan_reward();
        }

        if !self.done && self.config.max_steps.is_some_and(|limit| self.steps >= limit) {
            self.done = true;
            event = StepEvent::Truncated;
        }

        self.episode_reward += reward;
        Ok(Step {
            obs: self.observe(),
            reward,
            done: self.done,
            event,
        })
    }

    fn obs_size(&self) -> usize {
        3 * (2 + self.config.num_obstacles)
    }

    fn action_size(&self) -> usize {
        2
    }
}

/// The common pairing of [`AvoidEnv`] with real scene geometry.
pub type ArenaEnv = AvoidEnv<physics::Scene>;
