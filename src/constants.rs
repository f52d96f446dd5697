//! Tuning constants shared across the game modules.

/// Factor de escala: los mapas se exportan en unidades de 16px y todo el
/// mundo se multiplica por esto al cargar.
pub const SCALE: f32 = 4.0;

pub const WINDOW_WIDTH: i32 = 256 * SCALE as i32;
pub const WINDOW_HEIGHT: i32 = 144 * SCALE as i32;
/// The camera follows the player horizontally; vertically it stays fixed.
pub const CAMERA_Y: f32 = WINDOW_HEIGHT as f32 * 0.5;

pub const GRAVITY: f32 = 2200.0;
pub const JUMP_FORCE: f32 = 800.0;
pub const MAX_JUMPS: u32 = 2;

pub const PLAYER_SPEED: f32 = 300.0;
pub const PLAYER_START_HP: u32 = 3;
/// Falling below this world y restarts the level.
pub const FALL_RESTART_Y: f32 = 2000.0;
/// Duration of each half of the damage flicker (1 -> 0, then 0 -> 1).
pub const FLICKER_SECS: f32 = 0.05;
/// After spitting a star, the idle animation resumes this much later.
pub const SPIT_IDLE_DELAY_SECS: f32 = 1.0;

/// Enemies caught in the inhale zone get dragged at this speed.
pub const INHALE_PULL_SPEED: f32 = 800.0;
/// Distancia del efecto de aspirado respecto al jugador.
pub const EFFECT_OFFSET_X: f32 = 60.0;

pub const STAR_SPEED: f32 = 800.0;
pub const STAR_SPAWN_OFFSET: f32 = 80.0;

pub const GUY_SPEED: f32 = 100.0;
pub const GUY_IDLE_SECS: f32 = 1.0;
pub const GUY_WALK_SECS: f32 = 2.0;

pub const FLAME_IDLE_SECS: f32 = 1.0;
pub const FLAME_JUMP_IMPULSE: f32 = 1000.0;

pub const BIRD_SPAWN_SECS: f32 = 10.0;
pub const BIRD_SPEEDS: [f32; 3] = [100.0, 200.0, 300.0];
/// Birds despawn once they are this far outside the camera view.
pub const OFFSCREEN_DESPAWN_DISTANCE: f32 = 400.0;
