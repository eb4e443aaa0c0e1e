use criterion::{criterion_group, criterion_main, Criterion};
use physics::{ColliderTag, Ray, RayQuery, Scene, Vec3};
use rl::{AvoidConfig, AvoidEnv, Env};

fn cluttered_arena() -> Scene {
    let mut scene = Scene::walled_square(4.0, 2.0, 0.5);
    for i in 0..8 {
        let angle = (i as f32) * std::f32::consts::FRAC_PI_4;
        scene.add_box(
            Vec3::new(2.5 * angle.cos(), 0.0, 2.5 * angle.sin()),
            Vec3::new(0.3, 0.3, 0.3),
            ColliderTag::Block,
        );
    }
    scene
}

fn bench_env_step(c: &mut Criterion) {
    c.bench_function("avoid_step", |b| {
        // Parked far outside the arena so no event ever ends the episode.
        let config = AvoidConfig {
            agent_spawn: Some([50.0, 0.0, 0.0]),
            ..AvoidConfig::default()
        };
        let mut env = AvoidEnv::new(config, cluttered_arena(), 7);
        env.reset();
        b.iter(|| env.step(&[0.3, -0.2]).unwrap());
    });
}

fn bench_scene_cast(c: &mut Criterion) {
    let scene = cluttered_arena();
    let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
    c.bench_function("scene_cast", |b| b.iter(|| scene.cast(ray, 5.0)));
}

criterion_group!(benches, bench_env_step, bench_scene_cast);
criterion_main!(benches);
