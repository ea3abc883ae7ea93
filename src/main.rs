//! Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use breakout::audio::WebAudio;
    use breakout::input::Key;
    use breakout::renderer::{CanvasRenderer, build_scene};
    use breakout::ui::{Message, message_for};
    use breakout::{Game, Settings, Tuning};

    /// Page-level state: the session plus its DOM/canvas adapters
    struct App {
        game: Game<WebAudio>,
        renderer: CanvasRenderer,
        document: Document,
        shown_message: Option<Message>,
    }

    impl App {
        /// Render the current frame
        fn render(&self) {
            let scene = build_scene(self.game.state());
            if let Err(e) = self.renderer.draw(&scene) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let update = self.game.hud_update();
            if let Some(score) = update.score {
                set_text(&self.document, "score", &score.to_string());
            }
            if let Some(lives) = update.lives {
                set_text(&self.document, "lives", &lives.to_string());
            }

            let message = message_for(self.game.state().phase);
            if message != self.shown_message {
                self.show_message(message);
                self.shown_message = message;
            }
        }

        fn show_message(&self, message: Option<Message>) {
            let Some(el) = self.document.get_element_by_id("gameMessage") else {
                return;
            };
            match message {
                Some(msg) => {
                    el.set_text_content(Some(msg.text));
                    el.set_class_name(&format!("game-message {}", msg.class));
                }
                None => {
                    let _ = el.class_list().add_1("hidden");
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Optional inline JSON config: `<script type="application/json" id="...">`
    fn inline_json(document: &Document, id: &str) -> Option<String> {
        document.get_element_by_id(id)?.text_content()
    }

    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = inline_json(document, "tuning") else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from page");
                tuning
            }
            Err(e) => {
                log::error!("Ignoring page tuning: {}", e);
                Tuning::default()
            }
        }
    }

    fn load_settings(document: &Document) -> Settings {
        let Some(json) = inline_json(document, "settings") else {
            return Settings::default();
        };
        Settings::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring page settings: {}", e);
            Settings::default()
        })
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Breakout starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let tuning = load_tuning(&document);
        let settings = load_settings(&document);

        // Canvas matches the arena one-to-one
        canvas.set_width(tuning.arena_width as u32);
        canvas.set_height(tuning.arena_height as u32);
        let renderer = CanvasRenderer::new(&canvas)?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(tuning, seed, WebAudio::new(&settings));
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            document: document.clone(),
            shown_message: None,
        }));

        setup_input_handlers(&document, app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    app.borrow_mut().game.input_mut().key_down(key);
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    app.borrow_mut().game.input_mut().key_up(key);
                }
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: keyups won't arrive, release everything
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.input_mut().clear();
                log::info!("Input released (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.game.frame();
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Breakout failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames the headless demo runs before giving up (ten minutes at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_FRAMES: u32 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use breakout::{Game, Tuning};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Breakout (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let tuning = match std::env::var("BREAKOUT_TUNING") {
        Ok(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::silent(tuning, seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut frames = 0;
    while !game.state().phase.is_terminal() && frames < MAX_DEMO_FRAMES {
        let input = autopilot(game.state());
        game.step(&input);
        frames += 1;
    }

    let state = game.state();
    println!(
        "Demo finished after {} frames: {:?}, score {}, lives {}, {} bricks left",
        frames,
        state.phase,
        state.score,
        state.lives,
        state.visible_bricks()
    );
}

/// Demo AI: launch immediately, keep the paddle under the ball with a
/// drifting offset so returns don't settle into a fixed loop
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &breakout::sim::GameState) -> breakout::sim::TickInput {
    use breakout::sim::{GamePhase, TickInput};

    let paddle = &state.paddle;
    let time_factor = state.time_ticks as f32 * 0.01;
    let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.1) * paddle.width;
    let target = state.ball.pos.x + offset;
    let center = paddle.center_x();
    let deadzone = paddle.speed / 2.0;

    TickInput {
        move_left: center > target + deadzone,
        move_right: center < target - deadzone,
        launch: state.phase == GamePhase::Waiting,
        reset: false,
    }
}
