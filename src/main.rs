//! Meteor Guard entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use meteor_guard::audio::{AudioPlayer, Cue};
    use meteor_guard::consts::*;
    use meteor_guard::renderer::CanvasRenderer;
    use meteor_guard::settings::Settings;
    use meteor_guard::sim::{GameEvent, GameState, InputSnapshot, advance};

    /// Game instance holding all host-side state
    struct Game {
        state: GameState,
        input: InputSnapshot,
        last_time: f64,
        audio: AudioPlayer,
        renderer: Option<CanvasRenderer>,
        settings: Settings,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioPlayer::new();
            audio.set_volume(settings.volume);
            audio.set_muted(settings.muted);
            Self {
                state: GameState::new(seed),
                input: InputSnapshot::default(),
                last_time: 0.0,
                audio,
                renderer: None,
                settings,
            }
        }

        /// Run one frame: simulate, relay events, draw, refresh HUD
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                FRAME_MS
            };
            self.last_time = time;

            advance(&mut self.state, &self.input, dt, time);
            self.relay_events();

            if let Some(renderer) = &self.renderer {
                renderer.render(&self.state, &self.settings);
            }
            self.update_hud();
        }

        /// Map simulation events to audio cues and overlay changes
        fn relay_events(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for event in self.state.drain_events() {
                match event {
                    GameEvent::Started | GameEvent::Restarted => {
                        add_class(&document, "title-screen", "hide");
                        add_class(&document, "game-over-screen", "hide");
                        self.audio.start_ambience();
                    }
                    GameEvent::LaserFired => self.audio.play(Cue::Laser),
                    GameEvent::AsteroidDestroyed { .. } => self.audio.play(Cue::Explosion),
                    GameEvent::LevelUp { level } => log::info!("reached level {level}"),
                    GameEvent::Breach { health } => log::debug!("breach, health {health}"),
                    GameEvent::GameOver { final_score } => {
                        set_text(&document, "final-score", &final_score.to_string());
                        remove_class(&document, "game-over-screen", "hide");
                        self.audio.stop_ambience();
                        self.audio.play(Cue::GameOver);
                    }
                }
            }
        }

        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            set_text(&document, "score-value", &self.state.score.to_string());
            set_text(&document, "level-value", &self.state.level().to_string());

            if let Some(el) = document.get_element_by_id("health-bar") {
                if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
                    let pct = (self.state.health_pct() * 100.0).round();
                    let _ = el.style().set_property("width", &format!("{pct}%"));
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn add_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().remove_1(class);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Meteor Guard starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAY_WIDTH as u32);
        canvas.set_height(PLAY_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed);
        game.renderer = CanvasRenderer::new(&canvas);
        if game.renderer.is_none() {
            log::error!("no 2d canvas context available");
        }
        let game = Rc::new(RefCell::new(game));

        log::info!("game initialized with seed {seed}");

        setup_key_handlers(game.clone());
        setup_buttons(&document, game.clone());

        // Title overlay is visible until the start button fires
        remove_class(&document, "title-screen", "hide");
        add_class(&document, "game-over-screen", "hide");

        request_animation_frame(game);

        log::info!("Meteor Guard running");
    }

    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Held-key snapshot: keydown sets, keyup clears
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "ArrowLeft" => g.input.rotate_left = true,
                    "ArrowRight" => g.input.rotate_right = true,
                    "Space" => {
                        event.prevent_default();
                        g.input.fire = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "ArrowLeft" => g.input.rotate_left = false,
                    "ArrowRight" => g.input.rotate_right = false,
                    "Space" => g.input.fire = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("start-button") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game.borrow_mut().frame(time);
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use meteor_guard::consts::FRAME_MS;
    use meteor_guard::sim::{GameState, InputSnapshot, advance};

    env_logger::init();
    log::info!("Meteor Guard (native) - headless smoke run; use `trunk serve` for the browser build");

    let mut state = GameState::new(42);
    state.start();
    let input = InputSnapshot {
        fire: true,
        ..Default::default()
    };
    for frame in 0..600 {
        let now = frame as f64 * FRAME_MS;
        advance(&mut state, &input, FRAME_MS, now);
    }

    println!(
        "simulated 10s: score {}, level {}, health {}",
        state.score,
        state.level(),
        state.health
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main; this satisfies the bin target
}
