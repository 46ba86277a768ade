//! Demonstration of entity registry: a few entities moving for a few ticks.

use std::error::Error;

use log::LevelFilter;

use titan_registry::ecs::{DeltaTime, Entity, Matches, Query, Registry, System};
use titan_registry::{Config, RegistryError};

mod logger;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");

const TICKS: u32 = 5;

#[derive(Debug, Clone, Copy)]
struct Position(f32, f32);

#[derive(Debug, Clone, Copy)]
struct Velocity(f32, f32);

#[derive(Debug, Clone, Copy)]
struct Frozen;

/// Moves every entity which has velocity and is not frozen.
struct Movement {
    query: Query,
}

impl System for Movement {
    fn query(&self) -> &Query {
        &self.query
    }

    fn update(
        &mut self,
        registry: &mut Registry,
        matches: &Matches,
        delta_time: DeltaTime,
    ) -> titan_registry::Result<()> {
        let seconds = delta_time.as_secs_f32();
        for &key in matches {
            let velocity = *registry
                .entity(key)
                .and_then(Entity::get::<Velocity>)
                .ok_or(RegistryError::UnknownEntity(key))?;
            if let Some(position) = registry.component_mut::<Position>(key) {
                position.0 += velocity.0 * seconds;
                position.1 += velocity.1 * seconds;
            }
        }
        log::debug!("moved {} entities", matches.len());
        Ok(())
    }
}

/// Entry point of registry demonstration
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let _handle = logger::init(LevelFilter::Debug)?;
    log::info!("logger initialized successfully");

    let version = APP_VERSION_STR.parse()?;
    let enable_validation = cfg!(debug_assertions);
    let config = Config::new(APP_NAME.to_string(), version, enable_validation);
    let mut registry = Registry::new(config);

    let player = registry.add(
        Entity::with_id("player")
            .with(Position(0.0, 0.0))
            .with(Velocity(1.0, 0.5)),
    )?;
    let rock = registry.add(Entity::with_id("rock").with(Position(4.0, 4.0)))?;
    let ghost = registry.add(
        Entity::new()
            .with(Position(-2.0, 1.0))
            .with(Velocity(0.0, -1.0)),
    )?;
    registry.on_teardown([player, ghost], |entity| {
        log::info!("entity `{}` lived for {}", entity.id(), entity.age());
    });

    let mut movement = Movement {
        query: Query::new()
            .with::<Position>()
            .with::<Velocity>()
            .without::<Frozen>(),
    };
    let delta_time = DeltaTime::from_millis(100);
    for tick in 0..TICKS {
        if tick == 2 {
            registry.add_component(ghost, Frozen)?;
            log::info!("ghost is frozen");
        }
        if tick == 3 {
            registry.add_components(rock, (Velocity(-1.0, -1.0),))?;
            log::info!("rock started to move");
        }
        registry.run(&mut movement, delta_time)?;
    }

    let everything = registry.get(&Query::new());
    for entity in registry.entities(&everything) {
        log::info!("{:?} at {:?}", entity, entity.get::<Position>());
    }
    log::info!("{}", registry.statistics());

    registry.remove(registry.find("player"));
    registry.clear();
    log::info!("{} entities left", registry.count());
    Ok(())
}
