//! Configuration for a particle life run, loadable from YAML.
//!
//! A configuration consists of:
//!
//! - [`WindowConfig`]  – window title, size, frame rate and background
//! - [`ArenaConfig`]   – particle radius (the arena spans the whole window)
//! - [`PhysicsConfig`] – damping and interaction range
//! - [`GroupConfig`]   – name, particle count and color of each group
//! - `interactivity`   – one row of coefficients per group
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   title: "Particle Life"
//!   width: 800
//!   height: 450
//!   fps: 60
//!   background: [0, 0, 0]
//!
//! arena:
//!   radius: 2.0
//!
//! physics:
//!   velocity_factor: 0.01
//!   action_distance: 75.0
//!
//! seed: 42                  # optional, random when omitted
//!
//! groups:
//!   - { name: red,    count: 300, color: [230, 41, 55] }
//!   - { name: yellow, count: 300, color: [253, 249, 0] }
//!   - { name: blue,   count: 300, color: [0, 121, 241] }
//!
//! interactivity:            # row = group acted upon, column = acting group
//!   - [0.02, -0.5, -0.02]
//!   - [0.02, -0.04, -0.7]
//!   - [0.02, 0.02, 0.02]
//! ```
//!
//! [`Config::default`] holds exactly the values above minus the seed.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::interaction::{InteractionParams, InteractivityMatrix};
use crate::particle::{Arena, Color};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,            // simulation steps per second
    pub background: Color,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ArenaConfig {
    pub radius: f64, // drawn circle radius and spawn margin
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PhysicsConfig {
    pub velocity_factor: f64,
    pub action_distance: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,
    pub count: usize,
    pub color: Color,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub arena: ArenaConfig,
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub seed: Option<u64>,
    pub groups: Vec<GroupConfig>,
    pub interactivity: Vec<Vec<f64>>,
}

impl Default for Config {
    fn default() -> Self {
        let group = |name: &str, color: Color| GroupConfig {
            name: name.to_owned(),
            count: 300,
            color,
        };

        Self {
            window: WindowConfig {
                title: "Particle Life".to_owned(),
                width: 800,
                height: 450,
                fps: 60,
                background: [0, 0, 0],
            },
            arena: ArenaConfig { radius: 2.0 },
            physics: PhysicsConfig {
                velocity_factor: 0.01,
                action_distance: 75.0,
            },
            seed: None,
            groups: vec![
                group("red", [230, 41, 55]),
                group("yellow", [253, 249, 0]),
                group("blue", [0, 121, 241]),
            ],
            interactivity: vec![
                vec![0.02, -0.5, -0.02],
                vec![0.02, -0.04, -0.7],
                vec![0.02, 0.02, 0.02],
            ],
        }
    }
}

impl Config {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(
            f64::from(self.window.width),
            f64::from(self.window.height),
            self.arena.radius,
        )
    }

    pub fn interaction_params(&self) -> InteractionParams {
        InteractionParams {
            arena: self.arena(),
            velocity_factor: self.physics.velocity_factor,
            action_distance: self.physics.action_distance,
        }
    }

    /// Only meaningful on a validated config; panics on a ragged matrix.
    pub fn interactivity_matrix(&self) -> InteractivityMatrix {
        InteractivityMatrix::from_rows(&self.interactivity)
            .expect("interactivity matrix is square after validation")
    }

    /// Checks every precondition the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: window.width,
                height: window.height,
            });
        }
        if window.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        let radius = self.arena.radius;
        if !radius.is_finite() || radius < 0.0 || !self.arena().has_spawn_room() {
            return Err(ConfigError::DegenerateArena {
                width: f64::from(window.width),
                height: f64::from(window.height),
                radius,
            });
        }

        for (name, value) in [
            ("velocity_factor", self.physics.velocity_factor),
            ("action_distance", self.physics.action_distance),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }

        let first = self.groups.first().ok_or(ConfigError::NoGroups)?;
        // every pair is visited in both directions, so sizes must all agree
        if let Some(group) = self.groups.iter().find(|g| g.count != first.count) {
            return Err(ConfigError::UnevenGroups {
                name: group.name.clone(),
                expected: first.count,
                actual: group.count,
            });
        }

        let expected = self.groups.len();
        if self.interactivity.len() != expected
            || self.interactivity.iter().any(|row| row.len() != expected)
        {
            return Err(ConfigError::MatrixShape { expected });
        }
        for (row, values) in self.interactivity.iter().enumerate() {
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteCoefficient { row, column });
            }
        }

        Ok(())
    }
}
