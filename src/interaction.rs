use cgmath::prelude::*;

use crate::Vec2;
use crate::particle::{Arena, Particle, ParticleGroup};

/// Row-major table of signed coefficients; `get(i, j)` is how strongly group
/// `j` acts on group `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractivityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl InteractivityMatrix {
    /// Builds the matrix from its rows. Returns `None` unless every row has
    /// exactly as many entries as there are rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            values: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, source: usize, target: usize) -> f64 {
        assert!(source < self.size && target < self.size);
        self.values[source * self.size + target]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionParams {
    pub arena: Arena,
    /// Damping applied to velocity after each force contribution.
    pub velocity_factor: f64,
    /// Pairs at this distance or further apart do not interact.
    pub action_distance: f64,
}

/// Offset from one particle to another along with its length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separation {
    pub delta: Vec2,
    pub distance: f64,
}

pub fn separation(from: Vec2, to: Vec2) -> Separation {
    let delta = from - to;
    Separation {
        delta,
        distance: delta.magnitude(),
    }
}

fn apply_boundary_conditions(particle: &mut Particle, arena: &Arena) {
    macro_rules! reflect {
        ($coord:expr, $vel:expr, $limit:expr) => {
            if $coord < 0.0 || $coord >= $limit {
                $vel = -$vel;
            }
        };
    }

    reflect!(particle.position.x, particle.velocity.x, arena.width);
    reflect!(particle.position.y, particle.velocity.y, arena.height);
}

/// Moves every particle of group `a` under the influence of group `b`.
///
/// `a` and `b` index into `groups` and may be equal. The force accumulator is
/// reset once per particle of `a` but keeps growing across the inner loop, and
/// the particle is integrated after every single contribution, so particles of
/// `b` see the positions left behind by earlier iterations. Both loops run to
/// `groups[a].len()`; a shorter `groups[b]` panics on indexing.
///
/// Positions, coefficient and accumulator are all `f64`. Only velocities need
/// double precision; keeping positions and force sums in `f32` instead gives
/// trajectories that drift apart from these in the last bits over long runs.
pub fn update_pair(
    groups: &mut [ParticleGroup],
    a: usize,
    b: usize,
    gravity: f64,
    params: &InteractionParams,
) {
    let max = groups[a].len();

    for i in 0..max {
        let mut force = Vec2::zero();

        for j in 0..max {
            let other = groups[b].particles[j].position;
            let particle = &mut groups[a].particles[i];

            let separation = separation(particle.position, other);
            if separation.distance > 0.0 && separation.distance < params.action_distance {
                force += separation.delta * (gravity / separation.distance);
            }

            particle.velocity = (particle.velocity + force) * params.velocity_factor;
            particle.position += particle.velocity;

            apply_boundary_conditions(particle, &params.arena);
        }
    }
}

/// Runs `update_pair` for every ordered group pair in row-major order, self
/// pairs included. Later pairs observe the state earlier pairs left behind.
pub fn apply_interactivity(
    groups: &mut [ParticleGroup],
    matrix: &InteractivityMatrix,
    params: &InteractionParams,
) {
    assert_eq!(
        matrix.size(),
        groups.len(),
        "interactivity matrix does not match the number of groups"
    );

    for i in 0..groups.len() {
        for j in 0..groups.len() {
            update_pair(groups, i, j, matrix.get(i, j), params);
        }
    }
}
