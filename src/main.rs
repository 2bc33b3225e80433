//! Simulation driver: builds a crude atom, serves its state over
//! WebSocket, and steps it in real time for 30 simulated seconds.

use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use glam::DVec3;
use parking_lot::Mutex;
use rand::{rngs::StdRng, SeedableRng};

use atom_sim::{
    config::{SimulationParams, DEFAULT_TIME_STEP},
    scene,
    utils::logging::warn_if_step_budget_exceeded,
    BroadcastServer, ParticleKind, SimulationWorld,
};

/// How many leading steps get a CSV trace on stdout.
const TRACE_STEPS: usize = 100;

/// Simulated seconds to run before shutting down.
const RUN_SECONDS: f64 = 30.0;

const WEBSOCKET_PORT: u16 = 8080;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let params = SimulationParams {
        coulomb_constant: 1.2,
        min_distance: 2.0,
        rest_distance: 1.0,
        constraint_iterations: 4,
        jitter_intensity: 0.008,
    };
    let dt = DEFAULT_TIME_STEP;

    let mut world = SimulationWorld::new(params);
    scene::spawn_tetrahedron_nucleus(&mut world, 1.0, 1.0);

    let electron_mass = 0.02;
    let mut rng = StdRng::from_entropy();

    // One electron on a clean XY orbit, two more on random orbital planes
    // further out.
    scene::spawn_orbiting_electron(
        &mut world,
        DVec3::new(5.0, 0.0, 0.0),
        DVec3::new(0.0, 6.5, 0.0),
        electron_mass,
        -1.0,
        dt,
    );
    scene::spawn_orbiting_electron(
        &mut world,
        DVec3::new(7.0, 0.0, 0.0),
        scene::random_velocity(&mut rng, 5.0),
        electron_mass,
        -1.0,
        dt,
    );
    scene::spawn_orbiting_electron(
        &mut world,
        DVec3::new(10.0, 0.0, 0.0),
        scene::random_velocity(&mut rng, 4.0),
        electron_mass,
        -1.0,
        dt,
    );

    let world = Arc::new(Mutex::new(world));
    let mut server = BroadcastServer::new(WEBSOCKET_PORT);
    server.start(Arc::clone(&world))?;

    let total_steps = (RUN_SECONDS / dt) as usize;
    let budget = Duration::from_secs_f64(dt);
    log::info!("running {total_steps} steps of {dt} s");

    println!("step,pid,type,x,y,z");

    let started = Instant::now();
    for step in 0..total_steps {
        let step_started = Instant::now();
        {
            let mut world = world.lock();
            world.step(dt);

            if step < TRACE_STEPS {
                for p in world.particles() {
                    let kind = match p.kind {
                        ParticleKind::Nucleus => "nucleus",
                        ParticleKind::Electron => "electron",
                    };
                    println!(
                        "{},{},{},{:.6},{:.6},{:.6}",
                        step + 1,
                        p.id,
                        kind,
                        p.position.x,
                        p.position.y,
                        p.position.z
                    );
                }
            }
        }
        warn_if_step_budget_exceeded(step_started.elapsed(), budget);

        // Pace against the start time so one slow step does not shift every
        // later deadline.
        let target = started + budget * (step as u32 + 1);
        if let Some(remaining) = target.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
    }

    server.stop();
    log::info!("simulation finished after {:.1} s", started.elapsed().as_secs_f64());
    Ok(())
}
