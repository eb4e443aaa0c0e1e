use physics::Scene;
use rl::{
    run_episode, AvoidConfig, AvoidEnv, AxisInput, ManualPolicy, Policy, RandomPolicy,
    RolloutStats, SeekPolicy, StepEvent,
};

/// Spawns the agent far outside the sampling region so nothing sampled
/// can ever touch it. Episodes then only end how the test dictates.
fn parked_config() -> AvoidConfig {
    AvoidConfig {
        agent_spawn: Some([50.0, 0.0, 0.0]),
        ..AvoidConfig::default()
    }
}

#[test]
fn seek_policy_reaches_the_target() {
    // No obstacles: the straight line to the target is always safe.
    let config = AvoidConfig {
        num_obstacles: 0,
        ..AvoidConfig::default()
    };
    let mut env = AvoidEnv::new(config, Scene::new(), 21);
    let mut policy = SeekPolicy;

    let report = run_episode(&mut env, &mut policy, 500).unwrap();
    assert_eq!(report.outcome, StepEvent::ReachedTarget);
    assert!(report.steps < 500);
    assert_eq!(report.rejected_actions, 0);
    // Success bonus minus at most half a unit of time penalties.
    assert!(report.reward > 25.0, "reward={}", report.reward);
}

#[test]
fn driver_limit_stops_parked_episodes() {
    let mut env = AvoidEnv::new(parked_config(), Scene::new(), 3);
    let mut policy = ManualPolicy::new(AxisInput::default());

    let report = run_episode(&mut env, &mut policy, 25).unwrap();
    assert_eq!(report.outcome, StepEvent::None);
    assert_eq!(report.steps, 25);
    assert!((report.reward - (-0.25)).abs() < 1e-4);
}

#[test]
fn environment_truncation_shows_up_in_the_report() {
    let config = AvoidConfig {
        max_steps: Some(10),
        ..parked_config()
    };
    let mut env = AvoidEnv::new(config, Scene::new(), 3);
    let mut policy = ManualPolicy::new(AxisInput::default());

    let report = run_episode(&mut env, &mut policy, 100).unwrap();
    assert_eq!(report.outcome, StepEvent::Truncated);
    assert_eq!(report.steps, 10);
}

/// Alternates between a valid move and a malformed one-component
/// action.
struct FlakyPolicy {
    flip: bool,
}

impl Policy for FlakyPolicy {
    fn act(&mut self, _obs: &[f32]) -> Vec<f32> {
        self.flip = !self.flip;
        if self.flip {
            vec![0.7, 0.1]
        } else {
            vec![0.5]
        }
    }
}

#[test]
fn rejected_actions_are_counted_not_simulated() {
    let mut env = AvoidEnv::new(parked_config(), Scene::new(), 3);
    let mut policy = FlakyPolicy { flip: false };

    let report = run_episode(&mut env, &mut policy, 10).unwrap();
    assert_eq!(report.steps, 5);
    assert_eq!(report.rejected_actions, 5);
    assert!((report.reward - (-0.05)).abs() < 1e-4);
}

#[test]
fn stats_cover_every_episode_when_the_env_truncates() {
    let config = AvoidConfig {
        max_steps: Some(200),
        ..AvoidConfig::default()
    };
    let mut env = AvoidEnv::new(config, Scene::new(), 77);
    let mut policy = RandomPolicy::new(78);
    let mut stats = RolloutStats::default();

    for _ in 0..20 {
        let report = run_episode(&mut env, &mut policy, 200).unwrap();
        stats.record(&report);
    }

    assert_eq!(stats.episodes, 20);
    // The env truncates before the driver limit, so every episode has a
    // terminal outcome.
    assert_eq!(stats.successes + stats.collisions + stats.truncations, 20);
    assert!(stats.total_steps <= 20 * 200);
    assert!(stats.mean_reward().is_finite());
    assert!((0.0..=1.0).contains(&stats.success_rate()));
}
