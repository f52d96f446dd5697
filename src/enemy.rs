//! The three enemy archetypes and their state machines.
//!
//! Flame and guy run explicit finite-state machines driven by countdown
//! timers and ground contact; the bird is stateless drift. All three share
//! the inhalable flag, which the scene re-evaluates every frame against the
//! player's inhale zone.

use rand::Rng;
use raylib::prelude::Vector2;

use crate::anim::{self, Animator};
use crate::body::Body;
use crate::constants::{
    BIRD_SPEEDS, FLAME_IDLE_SECS, FLAME_JUMP_IMPULSE, GUY_IDLE_SECS, GUY_SPEED, GUY_WALK_SECS,
    SCALE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Flame,
    Guy,
    Bird,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlameState {
    Idle,
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuyState {
    Idle,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ai {
    Flame(FlameState),
    Guy(GuyState),
    Bird,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub body: Body,
    pub animator: Animator,
    /// True only while overlapping the player's inhale zone.
    pub inhalable: bool,
    pub speed: f32,
    pub facing_left: bool,
    /// Contact tracking so player collisions fire on contact begin, not on
    /// every overlapping frame.
    pub(crate) touching_player: bool,
    ai: Ai,
    state_timer: f32,
}

impl Enemy {
    pub fn flame(spawn: Vector2) -> Self {
        Self {
            kind: EnemyKind::Flame,
            body: Body::new(spawn, Vector2::new(8.0 * SCALE, 12.0 * SCALE)),
            animator: Animator::new(anim::FLAME),
            inhalable: false,
            speed: 0.0,
            facing_left: false,
            touching_player: false,
            ai: Ai::Flame(FlameState::Idle),
            state_timer: FLAME_IDLE_SECS,
        }
    }

    pub fn guy(spawn: Vector2) -> Self {
        Self {
            kind: EnemyKind::Guy,
            body: Body::new(spawn, Vector2::new(8.0 * SCALE, 10.0 * SCALE)),
            animator: Animator::new(anim::GUY_IDLE),
            inhalable: false,
            speed: GUY_SPEED,
            facing_left: false,
            touching_player: false,
            ai: Ai::Guy(GuyState::Idle),
            state_timer: GUY_IDLE_SECS,
        }
    }

    /// Birds are respawned on a fixed interval by the scene; each instance
    /// draws its speed from a fixed small set.
    pub fn bird(spawn: Vector2, rng: &mut impl Rng) -> Self {
        let speed = BIRD_SPEEDS[rng.gen_range(0..BIRD_SPEEDS.len())];
        let mut body = Body::new_static(spawn, Vector2::new(12.0 * SCALE, 12.0 * SCALE));
        body.vel.x = -speed;
        Self {
            kind: EnemyKind::Bird,
            body,
            animator: Animator::new(anim::BIRD),
            inhalable: false,
            speed,
            facing_left: true,
            touching_player: false,
            ai: Ai::Bird,
            state_timer: 0.0,
        }
    }

    /// One behavior step. Runs before the body integrates, so a state
    /// entered here already moves the enemy this frame.
    pub fn update(&mut self, dt: f32) {
        match self.ai {
            Ai::Flame(FlameState::Idle) => {
                self.state_timer -= dt;
                if self.state_timer <= 0.0 {
                    self.body.impulse_up(FLAME_JUMP_IMPULSE);
                    self.ai = Ai::Flame(FlameState::Jump);
                }
            }
            Ai::Flame(FlameState::Jump) => {
                // vuelve a idle solo al tocar suelo
                if self.body.grounded {
                    self.ai = Ai::Flame(FlameState::Idle);
                    self.state_timer = FLAME_IDLE_SECS;
                }
            }
            Ai::Guy(GuyState::Idle) => {
                self.state_timer -= dt;
                if self.state_timer <= 0.0 {
                    self.enter_guy(GuyState::Left);
                }
            }
            Ai::Guy(GuyState::Left) => {
                self.body.vel.x = -self.speed;
                self.state_timer -= dt;
                if self.state_timer <= 0.0 {
                    self.enter_guy(GuyState::Right);
                }
            }
            Ai::Guy(GuyState::Right) => {
                self.body.vel.x = self.speed;
                self.state_timer -= dt;
                if self.state_timer <= 0.0 {
                    self.enter_guy(GuyState::Left);
                }
            }
            Ai::Bird => {}
        }
        self.animator.update(dt);
    }

    fn enter_guy(&mut self, next: GuyState) {
        self.ai = Ai::Guy(next);
        self.state_timer = GUY_WALK_SECS;
        self.facing_left = next == GuyState::Left;
        self.animator.play(anim::GUY_WALK);
    }

    pub fn flame_state(&self) -> Option<FlameState> {
        match self.ai {
            Ai::Flame(s) => Some(s),
            _ => None,
        }
    }

    pub fn guy_state(&self) -> Option<GuyState> {
        match self.ai {
            Ai::Guy(s) => Some(s),
            _ => None,
        }
    }
}
