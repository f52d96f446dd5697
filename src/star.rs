//! Shooting-star projectile, spawned when a full player releases the inhale
//! key. Travels in the firing direction at fixed speed; the scene destroys
//! it on contact with a platform or an enemy, or once it leaves the world.

use raylib::prelude::Vector2;

use crate::anim::{self, Animator};
use crate::body::Body;
use crate::constants::{SCALE, STAR_SPAWN_OFFSET, STAR_SPEED};
use crate::player::Facing;

#[derive(Debug, Clone)]
pub struct Star {
    pub body: Body,
    pub animator: Animator,
    pub facing: Facing,
}

impl Star {
    pub fn new(origin: Vector2, facing: Facing) -> Self {
        let mut body = Body::new_static(
            Vector2::new(origin.x + facing.sign() * STAR_SPAWN_OFFSET, origin.y),
            Vector2::new(8.0 * SCALE, 8.0 * SCALE),
        );
        body.vel.x = facing.sign() * STAR_SPEED;
        Self {
            body,
            animator: Animator::new(anim::SHOOTING_STAR),
            facing,
        }
    }
}
