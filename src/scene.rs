//! Per-level composition and the frame update.
//!
//! A scene owns the loaded map, the player, the live enemies and stars, and
//! the bird respawn timers. `update` runs one frame in a fixed order: input,
//! enemy behavior, inhalability, body integration, then collision routing.

use rand::Rng;
use raylib::prelude::{Rectangle, Vector2};

use crate::constants::{
    BIRD_SPAWN_SECS, CAMERA_Y, INHALE_PULL_SPEED, OFFSCREEN_DESPAWN_DISTANCE, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use crate::enemy::{Enemy, EnemyKind};
use crate::map::{self, ColliderKind, LevelMap, MapError};
use crate::player::{HitOutcome, InputState, Player};
use crate::star::Star;

/// Why the current scene ends. Exits always lead to level-2; death and
/// falling out always restart level-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneSwitch {
    Restart,
    Next,
}

impl SceneSwitch {
    pub fn target(self) -> &'static str {
        match self {
            SceneSwitch::Restart => "level-1",
            SceneSwitch::Next => "level-2",
        }
    }
}

#[derive(Debug, Clone)]
struct BirdSpawner {
    spawn: Vector2,
    timer: f32,
}

pub struct Scene {
    pub map: LevelMap,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub stars: Vec<Star>,
    pub camera_target: Vector2,
    solids: Vec<Rectangle>,
    bounds: Rectangle,
    bird_spawners: Vec<BirdSpawner>,
}

impl Scene {
    pub fn load(name: &str) -> Result<Self, MapError> {
        let map = map::load_map(name)?;
        let scene = Self::from_map(map)?;
        log::info!(
            "scene '{}' ready: {} colliders, {} enemies",
            scene.map.name,
            scene.map.colliders.len(),
            scene.enemies.len()
        );
        Ok(scene)
    }

    /// Build a scene from already-parsed map data. Fails when the map has
    /// no player spawn point.
    pub fn from_map(map: LevelMap) -> Result<Self, MapError> {
        let player_spawn = map
            .spawn_points("player")
            .first()
            .copied()
            .ok_or_else(|| MapError::MissingPlayerSpawn(map.name.clone()))?;

        let mut enemies = Vec::new();
        for &p in map.spawn_points("flame") {
            enemies.push(Enemy::flame(p));
        }
        for &p in map.spawn_points("guy") {
            enemies.push(Enemy::guy(p));
        }
        let bird_spawners = map
            .spawn_points("bird")
            .iter()
            .map(|&p| BirdSpawner {
                spawn: p,
                timer: BIRD_SPAWN_SECS,
            })
            .collect();

        let solids = map.solid_rects();
        let bounds = map.bounds();
        let player = Player::new(player_spawn);
        let camera_target = Vector2::new(player_spawn.x, CAMERA_Y);

        Ok(Self {
            map,
            player,
            enemies,
            stars: Vec::new(),
            camera_target,
            solids,
            bounds,
            bird_spawners,
        })
    }

    /// Advance the scene by one frame.
    pub fn update(
        &mut self,
        input: &InputState,
        rng: &mut impl Rng,
        dt: f32,
    ) -> Option<SceneSwitch> {
        // entrada
        if let Some(star) = self.player.handle_input(input) {
            self.stars.push(star);
        }

        // comportamiento de enemigos + respawn de pájaros
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        for spawner in &mut self.bird_spawners {
            spawner.timer -= dt;
            if spawner.timer <= 0.0 {
                spawner.timer = BIRD_SPAWN_SECS;
                self.enemies.push(Enemy::bird(spawner.spawn, rng));
            }
        }

        // inhalabilidad y tirón hacia el jugador
        let zone = self.player.inhale_zone();
        let pull = -self.player.facing.sign() * INHALE_PULL_SPEED;
        for enemy in &mut self.enemies {
            enemy.inhalable = zone.check_collision_recs(&enemy.body.rect());
            if self.player.is_inhaling && enemy.inhalable {
                enemy.body.pos.x += pull * dt;
            }
        }

        // integración de cuerpos
        self.player.body.update(&self.solids, dt);
        for enemy in &mut self.enemies {
            enemy.body.update(&self.solids, dt);
        }
        for star in &mut self.stars {
            star.body.update(&self.solids, dt);
        }

        // flicker, timers y caída fuera del mundo
        if self.player.update(dt) {
            log::info!("player fell out of the world");
            return Some(SceneSwitch::Restart);
        }

        if let Some(switch) = self.route_collisions() {
            return Some(switch);
        }

        self.despawn_offscreen_birds();

        // la cámara sigue al jugador sin salirse del mapa
        let half_w = WINDOW_WIDTH as f32 * 0.5;
        let min_x = self.bounds.x + half_w;
        let max_x = self.bounds.x + self.bounds.width - half_w;
        self.camera_target.x = if min_x < max_x {
            self.player.body.pos.x.clamp(min_x, max_x)
        } else {
            self.player.body.pos.x
        };
        None
    }

    fn route_collisions(&mut self) -> Option<SceneSwitch> {
        // estrellas contra plataformas, enemigos y límites del mundo
        let star_bounds = grow(self.bounds, OFFSCREEN_DESPAWN_DISTANCE);
        let mut i = 0;
        while i < self.stars.len() {
            let rect = self.stars[i].body.rect();
            let hit_platform = self.solids.iter().any(|p| rect.check_collision_recs(p));
            let hit_enemy = self
                .enemies
                .iter()
                .position(|e| rect.check_collision_recs(&e.body.rect()));
            if let Some(e) = hit_enemy {
                self.enemies.swap_remove(e);
            }
            if hit_platform || hit_enemy.is_some() || !rect.check_collision_recs(&star_bounds) {
                self.stars.swap_remove(i);
            } else {
                i += 1;
            }
        }

        // jugador contra enemigos (solo al comenzar el contacto)
        let player_rect = self.player.body.rect();
        let mut idx = 0;
        while idx < self.enemies.len() {
            let overlap = player_rect.check_collision_recs(&self.enemies[idx].body.rect());
            let begun = overlap && !self.enemies[idx].touching_player;
            self.enemies[idx].touching_player = overlap;
            if !begun {
                idx += 1;
                continue;
            }
            match self.player.on_enemy_collision(self.enemies[idx].inhalable) {
                HitOutcome::Consumed => {
                    self.enemies.swap_remove(idx);
                }
                HitOutcome::Damaged => {
                    idx += 1;
                }
                HitOutcome::Killed => {
                    log::info!("player destroyed");
                    return Some(SceneSwitch::Restart);
                }
            }
        }

        // salida del nivel
        for c in &self.map.colliders {
            if c.kind == ColliderKind::Exit && player_rect.check_collision_recs(&c.rect) {
                return Some(SceneSwitch::Next);
            }
        }
        None
    }

    /// Birds despawn once they get far enough outside the camera view.
    fn despawn_offscreen_birds(&mut self) {
        let view = grow(
            Rectangle::new(
                self.camera_target.x - WINDOW_WIDTH as f32 * 0.5,
                self.camera_target.y - WINDOW_HEIGHT as f32 * 0.5,
                WINDOW_WIDTH as f32,
                WINDOW_HEIGHT as f32,
            ),
            OFFSCREEN_DESPAWN_DISTANCE,
        );
        self.enemies
            .retain(|e| e.kind != EnemyKind::Bird || view.check_collision_recs(&e.body.rect()));
    }
}

fn grow(rect: Rectangle, margin: f32) -> Rectangle {
    Rectangle::new(
        rect.x - margin,
        rect.y - margin,
        rect.width + 2.0 * margin,
        rect.height + 2.0 * margin,
    )
}
