use cgmath::prelude::*;
use rand::Rng;

use crate::Vec2;

/// RGB triple a group is drawn with. Physics never looks at it.
pub type Color = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
}

/// Rectangular arena particles live in. `radius` is both the drawn particle
/// size and the spawn margin kept from every edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64, radius: f64) -> Self {
        Self { width, height, radius }
    }

    /// Whole-pixel coordinates along an axis of length `extent` that keep
    /// `radius` clear of both ends, as an inclusive `(low, high)` pair.
    fn spawn_span(&self, extent: f64) -> (i64, i64) {
        (self.radius.ceil() as i64, (extent - self.radius).floor() as i64)
    }

    /// True when a particle can be placed on a whole pixel at least `radius`
    /// away from every edge.
    pub fn has_spawn_room(&self) -> bool {
        let (x_low, x_high) = self.spawn_span(self.width);
        let (y_low, y_high) = self.spawn_span(self.height);
        self.width > 2.0 * self.radius
            && self.height > 2.0 * self.radius
            && x_low <= x_high
            && y_low <= y_high
    }

    pub fn contains(&self, position: Vec2) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleGroup {
    pub name: String,
    pub color: Color,
    pub particles: Vec<Particle>,
}

impl ParticleGroup {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Mean position, `None` for an empty group.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.particles.is_empty() {
            return None;
        }
        let sum = self
            .particles
            .iter()
            .fold(Vec2::zero(), |acc, particle| acc + particle.position);
        Some(sum / self.particles.len() as f64)
    }

    /// One line naming the group with its centroid and mean speed.
    pub fn summary(&self) -> String {
        match self.centroid() {
            Some(centroid) => format!(
                "{:>10}: centroid ({:.3}, {:.3}), mean speed {:.6}",
                self.name,
                centroid.x,
                centroid.y,
                self.mean_speed()
            ),
            None => format!("{:>10}: empty", self.name),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let total: f64 = self.particles.iter().map(|p| p.velocity.magnitude()).sum();
        total / self.particles.len() as f64
    }
}

/// Spawns a resting particle on a random whole pixel inside `arena`, keeping
/// `arena.radius` clear of every edge.
pub fn create_particle<R: Rng + ?Sized>(arena: &Arena, color: Color, rng: &mut R) -> Particle {
    assert!(
        arena.has_spawn_room(),
        "arena {}x{} has no room for particles of radius {}",
        arena.width,
        arena.height,
        arena.radius
    );

    let (x_low, x_high) = arena.spawn_span(arena.width);
    let (y_low, y_high) = arena.spawn_span(arena.height);

    Particle {
        position: cgmath::vec2(
            rng.gen_range(x_low..=x_high) as f64,
            rng.gen_range(y_low..=y_high) as f64,
        ),
        velocity: Vec2::zero(),
        color,
    }
}

pub fn create_group<R: Rng + ?Sized>(
    name: impl Into<String>,
    count: usize,
    arena: &Arena,
    color: Color,
    rng: &mut R,
) -> ParticleGroup {
    let particles = (0..count).map(|_| create_particle(arena, color, &mut *rng)).collect();
    let group = ParticleGroup {
        name: name.into(),
        color,
        particles,
    };
    log::debug!("spawned group {:?} with {} particles", group.name, group.len());
    group
}
