//! Core game logic for a small inhale-and-spit platformer.
//!
//! Re-exports:
//! - `map`: level loading (colliders + spawn points)
//! - `body`: gravity bodies and move-and-collide
//! - `anim`: named frame animations
//! - `enemy`: the three enemy archetypes and their state machines
//! - `player`: player controller and damage flicker
//! - `star`: shooting-star projectile
//! - `scene`: per-level composition and the frame update
//! - `render`: texture loading and drawing

pub mod anim;
pub mod body;
pub mod constants;
pub mod enemy;
pub mod map;
pub mod player;
pub mod render;
pub mod scene;
pub mod star;
