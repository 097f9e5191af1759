pub mod config;
pub mod error;
pub mod interaction;
pub mod particle;
pub mod simulation;

pub type Vec2 = cgmath::Vector2<f64>;

pub use config::{ArenaConfig, Config, GroupConfig, PhysicsConfig, WindowConfig};
pub use error::ConfigError;
pub use interaction::{
    InteractionParams, InteractivityMatrix, Separation, apply_interactivity, separation, update_pair,
};
pub use particle::{Arena, Color, Particle, ParticleGroup, create_group, create_particle};
pub use simulation::Simulation;
