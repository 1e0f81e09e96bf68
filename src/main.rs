//! Pig Rhythm entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlButtonElement, KeyboardEvent, PointerEvent, Window};

    use pig_rhythm::audio::AudioManager;
    use pig_rhythm::persistence::LocalStorageStore;
    use pig_rhythm::platform::{
        Command, FrameId, FrameScheduler, command_for_key, command_for_pointer,
    };
    use pig_rhythm::renderer::DomRenderer;
    use pig_rhythm::{Collaborators, Game, Settings, Tuning};

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// `requestAnimationFrame` scheduler. The callback is installed once the
    /// game exists; requests made before that are refused.
    struct RafScheduler {
        window: Window,
        callback: FrameCallback,
    }

    impl FrameScheduler for RafScheduler {
        fn request_frame(&mut self) -> Option<FrameId> {
            let slot = self.callback.borrow();
            let callback = slot.as_ref()?;
            match self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                Ok(id) => Some(FrameId(id)),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    None
                }
            }
        }

        fn cancel_frame(&mut self, id: FrameId) {
            let _ = self.window.cancel_animation_frame(id.0);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Pig Rhythm starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window - not running in a browser?");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let settings = Settings::load();
        let renderer = DomRenderer::new(document.clone(), settings.clone());
        let container = renderer.container().cloned();

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let collaborators = Collaborators {
            renderer: Box::new(renderer),
            audio: Box::new(AudioManager::new(&settings)),
            store: Box::new(LocalStorageStore::new()),
            frames: Box::new(RafScheduler {
                window: window.clone(),
                callback: callback.clone(),
            }),
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            Tuning::load_or_default(),
            collaborators,
            Box::new(Pcg32::seed_from_u64(seed)),
        )));
        log::info!("Game initialized with seed: {}", seed);

        {
            let game = game.clone();
            *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                game.borrow_mut().frame();
            }));
        }

        setup_keyboard(&window, game.clone());
        if let Some(container) = container {
            setup_pointer(&container, game.clone());
        } else {
            log::warn!("No #game-container, pointer input disabled");
        }
        setup_start_button(&document, game);

        log::info!("Pig Rhythm ready!");
    }

    fn setup_keyboard(window: &Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(command) = command_for_key(&event.code()) else {
                return;
            };
            // Keep Space/ArrowUp from scrolling the page
            if command == Command::Activate {
                event.prevent_default();
            }
            game.borrow_mut().handle(command);
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_pointer(container: &web_sys::HtmlElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            let on_button = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlButtonElement>().ok())
                .is_some();
            if let Some(command) = command_for_pointer(on_button) {
                game.borrow_mut().handle(command);
            }
        });
        let _ = container
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("start-button") else {
            log::warn!("No #start-button");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            event.stop_propagation();
            game.borrow_mut().handle(Command::Restart);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the autopilot plays one round up to a target score, then
/// lets the hand catch the pig.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pig_rhythm::audio::SilentAudio;
    use pig_rhythm::persistence::JsonFileStore;
    use pig_rhythm::platform::ManualScheduler;
    use pig_rhythm::renderer::LogRenderer;
    use pig_rhythm::sim::GamePhase;
    use pig_rhythm::{Collaborators, Game, Tuning};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Upper bound on pumped frames, in case a custom tuning makes the
    /// autopilot miss forever
    const MAX_FRAMES: u64 = 1_000_000;

    env_logger::init();
    log::info!("Pig Rhythm (native) starting...");

    let target: u32 = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("usage: pig-rhythm [target-score]");
                std::process::exit(2);
            }
        },
        None => 10,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let store = JsonFileStore::from_env();
    log::info!("Best score file: {}", store.path().display());

    let mut game = Game::new(
        Tuning::load_or_default(),
        Collaborators {
            renderer: Box::new(LogRenderer::new()),
            audio: Box::new(SilentAudio),
            store: Box::new(store),
            frames: Box::new(ManualScheduler::new()),
        },
        Box::new(Pcg32::seed_from_u64(seed)),
    );

    game.set_autopilot(true);
    game.activate();

    let mut frames = 0u64;
    while game.has_pending_frame() && frames < MAX_FRAMES {
        if game.autopilot() && game.session().score >= target {
            game.set_autopilot(false);
        }
        game.frame();
        frames += 1;
    }
    game.shutdown();

    let session = game.session();
    if session.phase == GamePhase::GameOver {
        println!(
            "Round over after {} frames: score {}, best {}",
            frames, session.score, session.high_score
        );
    } else {
        println!("Stopped after {} frames at score {}", frames, session.score);
    }
}
