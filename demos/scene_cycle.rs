//=========================================================================
// Scene Cycle Demo
//=========================================================================
//
// Two scenes on a 20 TPS loop. A fake host thread presses keys; the menu
// switches to the game on a key press and the game counts its frames
// until the host terminates.
//
// Run with:
//   RUST_LOG=debug cargo run --example scene_cycle
//
//=========================================================================

use std::any::Any;
use std::thread;
use std::time::Duration;

use log::info;
use scene_engine::logging;
use scene_engine::prelude::*;

const MENU: SceneId = SceneId(1);
const GAME: SceneId = SceneId(2);

//=== Scenes ==============================================================

struct Game {
    level: u32,
    frames: u32,
}

impl Scene<&'static str> for Game {
    fn id(&self) -> SceneId {
        GAME
    }

    fn init(&mut self, device: &&'static str, payload: Option<&dyn Any>) {
        self.level = payload.and_then(|p| p.downcast_ref::<u32>()).copied().unwrap_or(1);
        self.frames = 0;
        info!("Game starting level {} on {}", self.level, device);
    }

    fn update(&mut self) -> bool {
        self.frames += 1;
        self.frames % 5 == 0
    }

    fn event(&mut self, event: SystemEvent, arg: u32) -> i32 {
        info!("Game got {} ({}) at frame {}", event, arg, self.frames);
        EVENT_STATUS_OK
    }

    fn unload(&mut self) {
        info!("Game leaving level {} after {} frame(s)", self.level, self.frames);
    }
}

//=== Entry Point =========================================================

fn main() {
    logging::init();

    let mut game = Game { level: 0, frames: 0 };
    let mut menu: SceneDescriptor<&'static str>;
    let mut engine = EngineBuilder::new().with_tps(20.0).build("demo-device");

    let switcher = engine.director().switcher();
    menu = SceneDescriptor::new(MENU)
        .on_init(|device, _| info!("Menu shown on {}", device))
        .on_event(move |event, arg| {
            if event == SystemEvent::KeyPressed {
                if let Err(e) = switcher.request_load_with(GAME, arg) {
                    log::error!("Could not queue game: {}", e);
                }
            }
            EVENT_STATUS_OK
        })
        .on_unload(|| info!("Menu hidden"));

    let scenes: [&mut dyn Scene<&'static str>; 2] = [&mut menu, &mut game];
    if let Err(e) = engine.register_bulk(scenes) {
        log::error!("Registration failed: {}", e);
        return;
    }
    if let Err(e) = engine.load(MENU, None) {
        log::error!("Initial load failed: {}", e);
        return;
    }

    let host = engine.host_handle();
    let driver = thread::spawn(move || {
        let script = [
            (SystemEvent::Init, 0),
            (SystemEvent::KeyPressed, 3),
            (SystemEvent::Pause, 0),
            (SystemEvent::Resume, 0),
            (SystemEvent::KeyReleased, 3),
            (SystemEvent::Terminate, 0),
        ];

        for (event, arg) in script {
            thread::sleep(Duration::from_millis(150));
            if host.system_event(event, arg).is_err() {
                break;
            }
        }
    });

    let frames = engine.run();
    let _ = driver.join();

    info!("Demo finished after {} frame(s)", frames);
}
