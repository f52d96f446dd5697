//! Gravity bodies and movement against the static platform rects.
//!
//! Movement resolves one axis at a time, clamping against the first solid
//! rect it overlaps, so bodies slide along surfaces instead of sticking.

use raylib::prelude::{Rectangle, Vector2};

use crate::constants::{GRAVITY, JUMP_FORCE, MAX_JUMPS};

#[derive(Debug, Clone)]
pub struct Body {
    pub pos: Vector2,
    pub vel: Vector2,
    pub size: Vector2,
    /// Static bodies ignore gravity and platforms; they only integrate
    /// their own velocity (bird, shooting star).
    pub is_static: bool,
    pub grounded: bool,
    jumps_left: u32,
}

impl Body {
    pub fn new(pos: Vector2, size: Vector2) -> Self {
        Self {
            pos,
            vel: Vector2::new(0.0, 0.0),
            size,
            is_static: false,
            grounded: false,
            jumps_left: MAX_JUMPS,
        }
    }

    pub fn new_static(pos: Vector2, size: Vector2) -> Self {
        Self {
            is_static: true,
            ..Self::new(pos, size)
        }
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Upward impulse if a jump charge remains. Charges refill on landing,
    /// so two jumps are available between ground contacts.
    pub fn jump(&mut self) -> bool {
        if self.jumps_left == 0 {
            return false;
        }
        self.jumps_left -= 1;
        self.vel.y = -JUMP_FORCE;
        self.grounded = false;
        true
    }

    /// Direct vertical impulse (flame hop). Clears ground contact so state
    /// machines watching `grounded` don't see the pre-jump frame.
    pub fn impulse_up(&mut self, speed: f32) {
        self.vel.y = -speed;
        self.grounded = false;
    }

    pub fn update(&mut self, platforms: &[Rectangle], dt: f32) {
        if self.is_static {
            self.pos.x += self.vel.x * dt;
            self.pos.y += self.vel.y * dt;
            return;
        }

        self.vel.y += GRAVITY * dt;

        // eje X
        self.pos.x += self.vel.x * dt;
        if let Some(hit) = self.first_overlap(platforms) {
            if self.vel.x > 0.0 {
                self.pos.x = hit.x - self.size.x;
            } else if self.vel.x < 0.0 {
                self.pos.x = hit.x + hit.width;
            }
        }

        // eje Y
        self.grounded = false;
        self.pos.y += self.vel.y * dt;
        if let Some(hit) = self.first_overlap(platforms) {
            if self.vel.y > 0.0 {
                // aterrizó encima de la plataforma
                self.pos.y = hit.y - self.size.y;
                self.grounded = true;
                self.jumps_left = MAX_JUMPS;
            } else if self.vel.y < 0.0 {
                self.pos.y = hit.y + hit.height;
            }
            self.vel.y = 0.0;
        }
    }

    fn first_overlap(&self, platforms: &[Rectangle]) -> Option<Rectangle> {
        let rect = self.rect();
        platforms.iter().find(|p| rect.check_collision_recs(p)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ground() -> Vec<Rectangle> {
        vec![Rectangle::new(-1000.0, 100.0, 2000.0, 32.0)]
    }

    fn settle(body: &mut Body, platforms: &[Rectangle]) {
        for _ in 0..120 {
            body.update(platforms, DT);
        }
    }

    #[test]
    fn gravity_lands_on_platform() {
        let mut body = Body::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
        let platforms = ground();
        settle(&mut body, &platforms);
        assert!(body.grounded);
        assert_eq!(body.pos.y, 90.0); // resting on top of the platform
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn double_jump_allows_exactly_two_charges() {
        let mut body = Body::new(Vector2::new(0.0, 80.0), Vector2::new(10.0, 10.0));
        let platforms = ground();
        settle(&mut body, &platforms);

        assert!(body.jump());
        body.update(&platforms, DT);
        assert!(body.jump());
        body.update(&platforms, DT);
        assert!(!body.jump());
    }

    #[test]
    fn landing_restores_jump_charges() {
        let mut body = Body::new(Vector2::new(0.0, 80.0), Vector2::new(10.0, 10.0));
        let platforms = ground();
        settle(&mut body, &platforms);

        assert!(body.jump());
        assert!(body.jump());
        settle(&mut body, &platforms);
        assert!(body.grounded);
        assert!(body.jump());
    }

    #[test]
    fn static_bodies_ignore_gravity_and_platforms() {
        let mut body = Body::new_static(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
        body.vel.x = -50.0;
        for _ in 0..60 {
            body.update(&ground(), DT);
        }
        assert_eq!(body.pos.y, 0.0);
        assert!((body.pos.x - -50.0).abs() < 0.5);
    }

    #[test]
    fn horizontal_motion_clamps_against_walls() {
        let platforms = vec![
            Rectangle::new(-1000.0, 10.0, 2000.0, 32.0),
            Rectangle::new(40.0, -100.0, 16.0, 110.0),
        ];
        let mut walker = Body::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
        walker.vel.x = 300.0;
        for _ in 0..30 {
            walker.update(&platforms, DT);
        }
        assert_eq!(walker.pos.x, 30.0); // flush against the wall
        assert!(walker.grounded);
    }
}
