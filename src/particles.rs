use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One short-lived trail particle. `life` runs 1.0 -> 0.0 and scales both
/// the drawn radius and the fill alpha.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub size: f32,
    pub hue: f32,
}

/// Pool of live particles, oldest first. The cap holds at every
/// observable point; overflow drops the oldest entries.
#[derive(Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Emit one burst at `at`, then trim the front back to the cap.
    pub fn spawn_burst(&mut self, at: Vec2, rng: &mut impl Rng) {
        for _ in 0..TRAIL_SPAWN_PER_MOVE {
            let angle = rng.gen::<f32>() * TAU;
            let speed = TRAIL_SPEED_MIN + rng.gen::<f32>() * TRAIL_SPEED_SPAN;
            let mut vel = Vec2::new(angle.cos(), angle.sin()) * speed;
            vel.y += TRAIL_GRAVITY_BIAS;
            self.particles.push(Particle {
                pos: at,
                vel,
                life: 1.0,
                size: TRAIL_SIZE_MIN + rng.gen::<f32>() * TRAIL_SIZE_SPAN,
                hue: TRAIL_HUE_BASE + rng.gen::<f32>() * TRAIL_HUE_SPAN,
            });
        }
        let excess = self.particles.len().saturating_sub(TRAIL_PARTICLE_CAP);
        if excess > 0 {
            self.particles.drain(0..excess);
        }
    }

    /// Advance every particle one frame and drop the expired ones in place,
    /// preserving the order of survivors.
    pub fn step(&mut self) {
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel *= TRAIL_DAMPING;
            p.life -= TRAIL_LIFE_DECAY;
            p.life > 0.0
        });
    }
}
