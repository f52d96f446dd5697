//! End-to-end scenarios for the scene update: consuming enemies, taking
//! damage, dying, spitting stars and switching levels.

use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::Vector2;

use puffball::enemy::EnemyKind;
use puffball::map::{MapError, parse_map};
use puffball::player::InputState;
use puffball::scene::{Scene, SceneSwitch};

const DT: f32 = 1.0 / 60.0;
/// A dt small enough that nothing moves measurably in one frame.
const DT_STILL: f32 = 0.001;

// Ground top sits at y=200 world units; the player rests at y=160.
const BASE_MAP: &str = r#"{
    "layers": [
        { "name": "colliders", "objects": [
            { "name": "ground", "x": -100, "y": 50, "width": 300, "height": 8 },
            { "name": "exit", "x": 200, "y": 30, "width": 8, "height": 20 }
        ]},
        { "name": "spawnpoints", "objects": [
            { "name": "player", "x": 0, "y": 40 },
            { "name": "guy", "x": 50, "y": 40 }
        ]}
    ]
}"#;

const BIRD_MAP: &str = r#"{
    "layers": [
        { "name": "colliders", "objects": [
            { "name": "ground", "x": -100, "y": 50, "width": 300, "height": 8 }
        ]},
        { "name": "spawnpoints", "objects": [
            { "name": "player", "x": 0, "y": 40 },
            { "name": "bird", "x": 30, "y": 10 }
        ]}
    ]
}"#;

fn scene_from(data: &str) -> Scene {
    Scene::from_map(parse_map("test", data).unwrap()).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn idle() -> InputState {
    InputState::default()
}

fn inhaling() -> InputState {
    InputState {
        inhale_down: true,
        ..InputState::default()
    }
}

#[test]
fn construction_fails_without_player_spawn() {
    const NO_PLAYER: &str = r#"{
        "layers": [
            { "name": "colliders", "objects": [
                { "name": "ground", "x": 0, "y": 50, "width": 100, "height": 8 }
            ]},
            { "name": "spawnpoints", "objects": [
                { "name": "flame", "x": 10, "y": 40 }
            ]}
        ]
    }"#;
    let map = parse_map("test", NO_PLAYER).unwrap();
    assert!(matches!(
        Scene::from_map(map),
        Err(MapError::MissingPlayerSpawn(_))
    ));
}

#[test]
fn inhalable_exactly_while_overlapping_the_zone() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();

    // park the guy inside the zone on the player's facing side
    scene.enemies[0].body.pos = Vector2::new(80.0, 165.0);
    scene.update(&idle(), &mut rng, DT_STILL);
    assert!(scene.enemies[0].inhalable); // overlap alone is enough

    // and the flag drops the moment the overlap ends
    scene.enemies[0].body.pos = Vector2::new(400.0, 165.0);
    scene.update(&idle(), &mut rng, DT_STILL);
    assert!(!scene.enemies[0].inhalable);
}

#[test]
fn inhaled_enemy_is_pulled_in_and_consumed() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();
    scene.enemies[0].body.pos = Vector2::new(80.0, 165.0);

    let mut consumed = false;
    for _ in 0..30 {
        if scene.update(&inhaling(), &mut rng, DT).is_some() {
            panic!("no scene switch expected");
        }
        if scene.enemies.is_empty() {
            consumed = true;
            break;
        }
        // while being dragged the enemy keeps closing in on the player
        assert!(scene.enemies[0].body.pos.x < 80.0 + 1.0);
    }
    assert!(consumed);
    assert!(scene.player.is_full);
    assert!(!scene.player.is_inhaling);
    assert_eq!(scene.player.hp, 3); // swallowing costs nothing
}

#[test]
fn contact_damage_then_death_restarts_level_one() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();
    scene.player.hp = 1;

    // first hit: damage + flicker, player survives
    scene.enemies[0].body.pos = scene.player.body.pos;
    assert_eq!(scene.update(&idle(), &mut rng, DT_STILL), None);
    assert_eq!(scene.player.hp, 0);
    assert!(scene.player.flicker_active());

    // break contact, then hit again with nothing left
    scene.enemies[0].body.pos = Vector2::new(600.0, 165.0);
    scene.update(&idle(), &mut rng, DT_STILL);
    scene.enemies[0].body.pos = scene.player.body.pos;
    let switch = scene.update(&idle(), &mut rng, DT_STILL);
    assert_eq!(switch, Some(SceneSwitch::Restart));
    assert_eq!(SceneSwitch::Restart.target(), "level-1");
}

#[test]
fn overlapping_does_not_drain_hp_every_frame() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();

    scene.enemies[0].body.pos = scene.player.body.pos;
    for _ in 0..5 {
        scene.update(&idle(), &mut rng, DT_STILL);
    }
    // one contact, one hit point
    assert_eq!(scene.player.hp, 2);
}

#[test]
fn exit_contact_switches_to_level_two() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();

    scene.player.body.pos = Vector2::new(805.0, 130.0);
    let switch = scene.update(&idle(), &mut rng, DT_STILL);
    assert_eq!(switch, Some(SceneSwitch::Next));
    assert_eq!(SceneSwitch::Next.target(), "level-2");
}

#[test]
fn releasing_inhale_while_full_spits_one_star() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();
    scene.player.is_full = true;

    let release = InputState {
        inhale_released: true,
        ..InputState::default()
    };
    scene.update(&release, &mut rng, DT);
    assert_eq!(scene.stars.len(), 1);
    assert!(!scene.player.is_full);
    assert!(scene.stars[0].body.vel.x > 0.0); // fired toward the facing side

    // the star keeps flying; no second star appears
    scene.update(&idle(), &mut rng, DT);
    assert_eq!(scene.stars.len(), 1);
}

#[test]
fn star_destroys_enemy_and_itself() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();
    scene.player.is_full = true;

    // line the guy up with the star's flight path
    scene.enemies[0].body.pos = Vector2::new(200.0, 160.0);
    let release = InputState {
        inhale_released: true,
        ..InputState::default()
    };
    scene.update(&release, &mut rng, DT);

    let mut gone = false;
    for _ in 0..30 {
        scene.update(&idle(), &mut rng, DT);
        if scene.enemies.is_empty() {
            gone = true;
            break;
        }
    }
    assert!(gone);
    assert!(scene.stars.is_empty()); // the star went with it
}

#[test]
fn falling_out_of_the_world_restarts() {
    let mut scene = scene_from(BASE_MAP);
    let mut rng = rng();
    scene.player.body.pos = Vector2::new(0.0, 2100.0);
    let switch = scene.update(&idle(), &mut rng, DT_STILL);
    assert_eq!(switch, Some(SceneSwitch::Restart));
}

#[test]
fn birds_respawn_on_the_fixed_interval() {
    let mut scene = scene_from(BIRD_MAP);
    let mut rng = rng();

    // just before the interval there is no bird yet
    let steps_9_5s = (9.5 / DT) as u32;
    for _ in 0..steps_9_5s {
        assert_eq!(scene.update(&idle(), &mut rng, DT), None);
    }
    assert!(!scene.enemies.iter().any(|e| e.kind == EnemyKind::Bird));

    // past it, one appears with a speed from the fixed set
    for _ in 0..60 {
        scene.update(&idle(), &mut rng, DT);
    }
    let bird = scene
        .enemies
        .iter()
        .find(|e| e.kind == EnemyKind::Bird)
        .expect("bird spawned");
    assert!([100.0, 200.0, 300.0].contains(&bird.speed));
    assert!(bird.body.vel.x < 0.0);
}
