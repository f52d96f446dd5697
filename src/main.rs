use raylib::prelude::*;

use puffball::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use puffball::player::InputState;
use puffball::render::Textures;
use puffball::scene::Scene;

fn poll_input(rl: &RaylibHandle) -> InputState {
    InputState {
        left: rl.is_key_down(KeyboardKey::KEY_LEFT),
        right: rl.is_key_down(KeyboardKey::KEY_RIGHT),
        jump_pressed: rl.is_key_pressed(KeyboardKey::KEY_X),
        inhale_down: rl.is_key_down(KeyboardKey::KEY_Z),
        inhale_released: rl.is_key_released(KeyboardKey::KEY_Z),
    }
}

fn main() {
    env_logger::init();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Puffball")
        .build();
    rl.set_target_fps(60);

    let textures = Textures::load(&mut rl, &thread);
    let mut rng = rand::thread_rng();

    let mut scene = match Scene::load("level-1") {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("failed to load level-1: {e}");
            std::process::exit(1);
        }
    };

    let mut camera = Camera2D {
        target: scene.camera_target,
        offset: Vector2::new(WINDOW_WIDTH as f32 * 0.5, WINDOW_HEIGHT as f32 * 0.5),
        rotation: 0.0,
        zoom: 1.0,
    };

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let input = poll_input(&rl);

        if let Some(switch) = scene.update(&input, &mut rng, dt) {
            let target = switch.target();
            log::info!("switching to {target}");
            match Scene::load(target) {
                Ok(next) => scene = next,
                Err(e) => {
                    log::error!("failed to load {target}: {e}");
                    break;
                }
            }
        }
        camera.target = scene.camera_target;

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(247, 215, 219, 255));
        {
            let mut d2 = d.begin_mode2D(camera);
            textures.draw_scene(&mut d2, &scene);
        }
        d.draw_text(&format!("HP: {}", scene.player.hp), 10, 10, 20, Color::DARKGRAY);
    }
}
