//! Texture loading and scene drawing.
//!
//! Tries to load the sprite sheet from assets/; if it's missing, entities
//! draw as flat-colored rects so the game still runs without assets.

use raylib::core::texture::RaylibTexture2D; // trait para .width()/.height()
use raylib::prelude::*;

use crate::anim::Animator;
use crate::constants::SCALE;
use crate::enemy::EnemyKind;
use crate::map::ColliderKind;
use crate::player::Facing;
use crate::scene::Scene;

const SHEET_COLS: u32 = 9;
const SHEET_ROWS: u32 = 10;

pub struct Textures {
    sheet: Option<Texture2D>,
    frame_w: f32,
    frame_h: f32,
}

impl Textures {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let candidates = ["assets/kirby-like.png", "kirby-like.png"];
        for path in candidates {
            if let Ok(img) = Image::load_image(path) {
                if let Ok(tex) = rl.load_texture_from_image(thread, &img) {
                    let frame_w = tex.width() as f32 / SHEET_COLS as f32;
                    let frame_h = tex.height() as f32 / SHEET_ROWS as f32;
                    return Self {
                        sheet: Some(tex),
                        frame_w,
                        frame_h,
                    };
                }
            }
        }
        log::warn!("sprite sheet not found, falling back to flat colors");
        Self {
            sheet: None,
            frame_w: 16.0,
            frame_h: 16.0,
        }
    }

    pub fn draw_scene(&self, d: &mut impl RaylibDraw, scene: &Scene) {
        // geometría estática
        for c in &scene.map.colliders {
            let color = match c.kind {
                ColliderKind::Platform => Color::new(90, 70, 90, 255),
                ColliderKind::Exit => Color::new(110, 200, 120, 160),
            };
            d.draw_rectangle_rec(c.rect, color);
        }

        for star in &scene.stars {
            self.draw_frame(
                d,
                &star.animator,
                star.body.pos,
                star.facing == Facing::Left,
                1.0,
                Color::GOLD,
            );
        }

        for enemy in &scene.enemies {
            let fallback = match enemy.kind {
                EnemyKind::Flame => Color::ORANGE,
                EnemyKind::Guy => Color::MAROON,
                EnemyKind::Bird => Color::SKYBLUE,
            };
            self.draw_frame(
                d,
                &enemy.animator,
                enemy.body.pos,
                enemy.facing_left,
                1.0,
                fallback,
            );
        }

        let player = &scene.player;
        if player.effect_visible {
            self.draw_frame(
                d,
                &player.effect_animator,
                player.effect_pos(),
                player.facing == Facing::Left,
                1.0,
                Color::new(255, 255, 255, 120),
            );
        }
        self.draw_frame(
            d,
            &player.animator,
            player.body.pos,
            player.facing == Facing::Left,
            player.opacity,
            Color::PINK,
        );
    }

    fn draw_frame(
        &self,
        d: &mut impl RaylibDraw,
        animator: &Animator,
        pos: Vector2,
        flip: bool,
        opacity: f32,
        fallback: Color,
    ) {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
        match &self.sheet {
            Some(tex) => {
                let frame = animator.frame();
                let col = (frame % SHEET_COLS) as f32;
                let row = (frame / SHEET_COLS) as f32;
                let src = Rectangle::new(
                    col * self.frame_w,
                    row * self.frame_h,
                    if flip { -self.frame_w } else { self.frame_w },
                    self.frame_h,
                );
                let dest = Rectangle::new(pos.x, pos.y, self.frame_w * SCALE, self.frame_h * SCALE);
                d.draw_texture_pro(
                    tex,
                    src,
                    dest,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::new(255, 255, 255, alpha),
                );
            }
            None => {
                let rect = Rectangle::new(pos.x, pos.y, self.frame_w * SCALE, self.frame_h * SCALE);
                d.draw_rectangle_rec(rect, Color::new(fallback.r, fallback.g, fallback.b, alpha));
            }
        }
    }
}
