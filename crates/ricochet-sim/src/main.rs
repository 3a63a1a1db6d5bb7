//! Demo runner: fires a volley of ricocheting projectiles at a floor and
//! prints the final snapshot as JSON.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;
use log::{debug, info};

use ricochet_sim::core::events::HitEvent;
use ricochet_sim::core::materials::PhysicalMaterial;
use ricochet_sim::systems::trace::{CollisionPlane, PlaneScene};
use ricochet_sim::world_setup::VolleySpawn;
use ricochet_sim::{logging, ProjectileSim, SimConfig};

/// Headless projectile ricochet simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Projectiles in the volley
    #[arg(short = 'n', long, default_value_t = 32)]
    count: usize,

    /// Restitution of the floor material
    #[arg(short, long, default_value_t = 0.6)]
    restitution: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => SimConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };
    info!(
        "seed {}, {} Hz, {} ticks, {} projectiles",
        config.seed, config.tick_rate, args.ticks, args.count
    );

    let mut sim = ProjectileSim::new(config);
    let floor = sim
        .materials_mut()
        .insert(PhysicalMaterial::new("floor", args.restitution));
    sim.set_scene(
        PlaneScene::new().with_plane(CollisionPlane::new(Vec3::ZERO, Vec3::Z).with_material(floor)),
    );
    sim.spawn_volley(VolleySpawn {
        origin: Vec3::new(0.0, 0.0, 500.0),
        direction: Vec3::new(1.0, 0.0, -1.0),
        speed: 2000.0,
        spread: 0.3,
        count: args.count,
        ricochet: true,
    });

    let mut stopped = 0;
    let mut ricocheted = 0;
    let mut at_rest = 0;
    let mut last = None;
    for _ in 0..args.ticks {
        let snapshot = sim.tick();
        for event in &snapshot.events {
            debug!("tick {}: {event:?}", snapshot.time.tick);
            match event {
                HitEvent::Stopped { .. } => stopped += 1,
                HitEvent::Ricocheted { .. } => ricocheted += 1,
                HitEvent::CameToRest { .. } => at_rest += 1,
                HitEvent::ActorNotified { .. } => {}
            }
        }
        last = Some(snapshot);
    }

    info!("{stopped} stopped, {ricocheted} ricochets, {at_rest} came to rest");
    if let Some(snapshot) = last {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
