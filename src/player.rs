//! Player controller: keyboard-driven state transitions, the inhale zone,
//! and the damage flicker.
//!
//! The interaction state is the pair of flags `is_inhaling`/`is_full` plus
//! the facing direction; the transition table lives in `handle_input` and
//! `on_enemy_collision`.

use raylib::prelude::{Rectangle, Vector2};

use crate::anim::{self, Animator};
use crate::body::Body;
use crate::constants::{
    EFFECT_OFFSET_X, FALL_RESTART_Y, FLICKER_SECS, PLAYER_SPEED, PLAYER_START_HP, SCALE,
    SPIT_IDLE_DELAY_SECS,
};
use crate::star::Star;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// One frame of keyboard state, sampled once at the top of the frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub inhale_down: bool,
    pub inhale_released: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlickerStage {
    Inactive,
    FadeOut,
    FadeIn,
}

/// Two-stage damage flicker: opacity 1 -> 0, then 0 -> 1. The fade-in stage
/// is unreachable until the fade-out has hit zero.
#[derive(Debug, Clone)]
struct Flicker {
    stage: FlickerStage,
    elapsed: f32,
}

impl Flicker {
    fn new() -> Self {
        Self {
            stage: FlickerStage::Inactive,
            elapsed: 0.0,
        }
    }

    fn start(&mut self) {
        self.stage = FlickerStage::FadeOut;
        self.elapsed = 0.0;
    }

    fn active(&self) -> bool {
        self.stage != FlickerStage::Inactive
    }

    fn update(&mut self, dt: f32, opacity: &mut f32) {
        match self.stage {
            FlickerStage::Inactive => {}
            FlickerStage::FadeOut => {
                self.elapsed += dt;
                if self.elapsed >= FLICKER_SECS {
                    *opacity = 0.0;
                    self.stage = FlickerStage::FadeIn;
                    self.elapsed = 0.0;
                } else {
                    *opacity = 1.0 - self.elapsed / FLICKER_SECS;
                }
            }
            FlickerStage::FadeIn => {
                self.elapsed += dt;
                if self.elapsed >= FLICKER_SECS {
                    *opacity = 1.0;
                    self.stage = FlickerStage::Inactive;
                } else {
                    *opacity = self.elapsed / FLICKER_SECS;
                }
            }
        }
    }
}

/// What a player/enemy contact produced; the scene applies the fallout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Enemy swallowed: destroy it, no damage taken.
    Consumed,
    /// Hit point lost, flicker started.
    Damaged,
    /// Hit with no hit points left: destroy the player, restart the level.
    Killed,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub animator: Animator,
    pub effect_animator: Animator,
    pub facing: Facing,
    pub speed: f32,
    pub is_inhaling: bool,
    pub is_full: bool,
    pub hp: u32,
    pub opacity: f32,
    /// Whether the inhale effect sprite is shown this frame.
    pub effect_visible: bool,
    flicker: Flicker,
    spit_idle_timer: f32,
}

impl Player {
    pub fn new(spawn: Vector2) -> Self {
        Self {
            body: Body::new(spawn, Vector2::new(8.0 * SCALE, 10.0 * SCALE)),
            animator: Animator::new(anim::KIRB_IDLE),
            effect_animator: Animator::new(anim::INHALE_EFFECT),
            facing: Facing::Right,
            speed: PLAYER_SPEED,
            is_inhaling: false,
            is_full: false,
            hp: PLAYER_START_HP,
            opacity: 1.0,
            effect_visible: false,
            flicker: Flicker::new(),
            spit_idle_timer: 0.0,
        }
    }

    /// Apply one frame of input. Returns the star to spawn, if the release
    /// of the inhale key spat one out.
    pub fn handle_input(&mut self, input: &InputState) -> Option<Star> {
        self.body.vel.x = 0.0;
        if input.left {
            self.facing = Facing::Left;
            self.body.vel.x = -self.speed;
        }
        if input.right {
            self.facing = Facing::Right;
            self.body.vel.x = self.speed;
        }
        if input.jump_pressed {
            self.body.jump();
        }

        let mut star = None;
        if input.inhale_down {
            if self.is_full {
                // lleno: no se puede volver a aspirar
                self.animator.play(anim::KIRB_FULL);
                self.effect_visible = false;
            } else {
                self.is_inhaling = true;
                self.animator.play(anim::KIRB_INHALING);
                self.effect_visible = true;
            }
        }
        if input.inhale_released {
            if self.is_full {
                self.animator.play(anim::KIRB_INHALING);
                star = Some(Star::new(self.body.pos, self.facing));
                self.is_full = false;
                self.spit_idle_timer = SPIT_IDLE_DELAY_SECS;
            } else {
                self.effect_visible = false;
                self.is_inhaling = false;
                self.animator.play(anim::KIRB_IDLE);
            }
        }
        star
    }

    /// Route a contact with an enemy through the interaction table.
    pub fn on_enemy_collision(&mut self, enemy_inhalable: bool) -> HitOutcome {
        if self.is_inhaling && enemy_inhalable {
            self.is_inhaling = false;
            self.is_full = true;
            return HitOutcome::Consumed;
        }
        if self.hp == 0 {
            return HitOutcome::Killed;
        }
        self.hp -= 1;
        self.flicker.start();
        HitOutcome::Damaged
    }

    /// Per-frame bookkeeping that isn't input-driven. Returns true when the
    /// player fell out of the world.
    pub fn update(&mut self, dt: f32) -> bool {
        self.flicker.update(dt, &mut self.opacity);
        if self.spit_idle_timer > 0.0 {
            self.spit_idle_timer -= dt;
            if self.spit_idle_timer <= 0.0 {
                self.animator.play(anim::KIRB_IDLE);
            }
        }
        self.animator.update(dt);
        self.effect_animator.update(dt);
        self.body.pos.y > FALL_RESTART_Y
    }

    /// Detection region in front of the player, on the facing side.
    pub fn inhale_zone(&self) -> Rectangle {
        let off_x = self.facing.sign() * 14.0 * SCALE;
        Rectangle::new(
            self.body.pos.x + off_x,
            self.body.pos.y + 8.0 * SCALE,
            20.0 * SCALE,
            4.0 * SCALE,
        )
    }

    /// Where the inhale effect sprite sits this frame.
    pub fn effect_pos(&self) -> Vector2 {
        Vector2::new(
            self.body.pos.x + self.facing.sign() * EFFECT_OFFSET_X,
            self.body.pos.y,
        )
    }

    pub fn flicker_active(&self) -> bool {
        self.flicker.active()
    }
}
