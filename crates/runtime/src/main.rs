#![deny(clippy::all, clippy::pedantic)]
//! # Arena Runtime
//!
//! Headless rollout driver for the obstacle avoidance arena. Builds an
//! environment from a scenario file (or the built-in default arena),
//! runs a batch of episodes with the chosen policy, and logs aggregate
//! statistics.

mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use physics::{ColliderTag, Scene, Vec3};
use rl::{run_episode, AvoidConfig, AvoidEnv, Policy, RandomPolicy, RolloutStats, SeekPolicy};

use crate::scenario::Scenario;

/// Batch rollouts for the obstacle avoidance arena.
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Run batches of obstacle avoidance episodes", long_about = None)]
struct Args {
    /// Number of episodes to run
    #[arg(long, default_value_t = 100)]
    episodes: u32,

    /// Policy driving the agent: "seek" or "random"
    #[arg(long, default_value = "seek")]
    policy: String,

    /// Seed for arena sampling and the random policy
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Hard cap on driver iterations per episode
    #[arg(long, default_value_t = 1000)]
    step_limit: u32,

    /// Scenario file describing the environment and scenery
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the number of obstacles sampled per episode
    #[arg(long)]
    obstacles: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let (mut config, scene) = match &args.scenario {
        Some(path) => {
            tracing::info!("Loading scenario from {}...", path.display());
            let text = std::fs::read_to_string(path)?;
            Scenario::from_str(&text)?.into_parts()
        }
        None => (AvoidConfig::default(), default_scene()),
    };
    if let Some(obstacles) = args.obstacles {
        config.num_obstacles = obstacles;
    }

    tracing::info!(
        "Running {} episodes with the {} policy (seed {}).",
        args.episodes,
        args.policy,
        args.seed
    );
    tracing::debug!("Environment config: {}", serde_json::to_string(&config)?);

    let mut env = AvoidEnv::new(config, scene, args.seed);
    let mut policy = build_policy(&args)?;
    let mut stats = RolloutStats::default();

    for episode in 0..args.episodes {
        let report = run_episode(&mut env, policy.as_mut(), args.step_limit)?;
        tracing::debug!(
            "Episode {} finished after {} steps: reward {:.2}, outcome {:?}.",
            episode,
            report.steps,
            report.reward,
            report.outcome
        );
        if report.rejected_actions > 0 {
            tracing::warn!(
                "Episode {} had {} rejected actions.",
                episode,
                report.rejected_actions
            );
        }
        stats.record(&report);
    }

    tracing::info!(
        "Done: {} episodes, {} successes, {} collisions, {} truncations.",
        stats.episodes,
        stats.successes,
        stats.collisions,
        stats.truncations
    );
    tracing::info!(
        "Mean reward {:.3}, success rate {:.1}%, {} total steps.",
        stats.mean_reward(),
        stats.success_rate() * 100.0,
        stats.total_steps
    );

    Ok(())
}

fn build_policy(args: &Args) -> Result<Box<dyn Policy>> {
    match args.policy.as_str() {
        "seek" => Ok(Box::new(SeekPolicy)),
        "random" => Ok(Box::new(RandomPolicy::new(args.seed))),
        other => anyhow::bail!("unknown policy '{other}', expected 'seek' or 'random'"),
    }
}

/// Walled square matching the default sampling extent, with a pair of
/// beacon blocks for the side scans to find.
fn default_scene() -> Scene {
    let mut scene = Scene::walled_square(4.0, 2.0, 0.5);
    scene.add_box(
        Vec3::new(2.5, 0.0, 2.5),
        Vec3::new(0.4, 0.4, 0.4),
        ColliderTag::Block,
    );
    scene.add_box(
        Vec3::new(-2.5, 0.0, -2.5),
        Vec3::new(0.4, 0.4, 0.4),
        ColliderTag::Block,
    );
    scene
}
