//! Sheep Sort entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

    use sheep_sort::FrameDriver;
    use sheep_sort::platform::{FrameScheduler, FrameView, Intent, Renderer};
    use sheep_sort::sim::{GamePhase, GameState};

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver<RafScheduler>,
        hud: HudRenderer,
    }

    /// Frame callbacks via `requestAnimationFrame`
    struct RafScheduler {
        game: Weak<RefCell<Game>>,
    }

    impl FrameScheduler for RafScheduler {
        fn request_frame(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let game = self.game.clone();
            let closure = Closure::once(move |time: f64| {
                if let Some(game) = game.upgrade() {
                    game_loop(&game, time);
                }
            });
            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Score/missed/status text in the page HUD
    struct HudRenderer {
        score: Option<Element>,
        missed: Option<Element>,
        status: Option<Element>,
        last: Option<(u32, u32, GamePhase)>,
    }

    impl HudRenderer {
        fn new(document: &Document) -> Self {
            Self {
                score: document.get_element_by_id("score"),
                missed: document.get_element_by_id("missed"),
                status: document.get_element_by_id("status"),
                last: None,
            }
        }
    }

    impl Renderer for HudRenderer {
        fn render(&mut self, view: &FrameView<'_>) {
            let hud = (view.score, view.missed, view.phase);
            if self.last == Some(hud) {
                return;
            }
            self.last = Some(hud);

            if let Some(el) = &self.score {
                el.set_text_content(Some(&format!("Score: {}", view.score)));
            }
            if let Some(el) = &self.missed {
                el.set_text_content(Some(&format!("Missed: {}", view.missed)));
            }
            if let Some(el) = &self.status {
                let text = match view.phase {
                    GamePhase::Running => String::new(),
                    GamePhase::Paused => "Paused - press SPACE to resume".to_string(),
                    GamePhase::GameOver => {
                        format!("Game Over! Final Score: {} - press SPACE to restart", view.score)
                    }
                };
                el.set_text_content(Some(&text));
            }
        }
    }

    fn game_loop(game: &Rc<RefCell<Game>>, time: f64) {
        let mut g = game.borrow_mut();
        let Game { driver, hud } = &mut *g;
        driver.frame(time, hud);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Sheep Sort starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window available");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document available");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let hud = HudRenderer::new(&document);
        let game = Rc::new_cyclic(|weak: &Weak<RefCell<Game>>| {
            RefCell::new(Game {
                driver: FrameDriver::new(GameState::new(seed), RafScheduler { game: weak.clone() }),
                hud,
            })
        });

        setup_input_handlers(&document, game.clone());
        setup_auto_pause(&document, game.clone());

        game.borrow_mut().driver.start();
        log::info!("Sheep Sort running!");
    }

    /// Handlers only stage intents; the next frame applies them
    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if key == "a" || key == "A" {
                    let on = !g.driver.autopilot();
                    g.driver.set_autopilot(on);
                    return;
                }
                if let Some(intent) = Intent::from_key(&key, g.driver.phase()) {
                    g.driver.stage(intent);
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click/tap on the field
        if let Some(canvas) = document.get_element_by_id("canvas") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let intent = Intent::from_click(g.driver.phase());
                g.driver.stage(intent);
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.driver.phase() == GamePhase::Running {
                        g.driver.stage(Intent::TogglePause);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.driver.phase() == GamePhase::Running {
                    g.driver.stage(Intent::TogglePause);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;
    use env_logger::{Builder, Env};
    use log::LevelFilter;
    use serde::Serialize;

    use sheep_sort::platform::{Clock, LogRenderer, ManualClock, ManualScheduler};
    use sheep_sort::sim::{GamePhase, GameState};
    use sheep_sort::{FrameDriver, Tuning};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Headless Sheep Sort: plays one round on a simulated clock
    #[derive(Parser)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file with balance overrides
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Let the autopilot work the gate
        #[arg(long)]
        autopilot: bool,
        /// Give up after this many simulated seconds
        #[arg(long, default_value_t = 300.0)]
        max_seconds: f64,
        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    }

    #[derive(Serialize)]
    struct Summary {
        seed: u64,
        score: u32,
        missed: u32,
        phase: GamePhase,
        ticks: u64,
        frames: u64,
        simulated_seconds: f64,
    }

    fn init_logging(verbose: bool) {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        let env = Env::default().default_filter_or(level.to_string());
        let _ = Builder::from_env(env).try_init();
    }

    pub fn run() {
        let args = Args::parse();
        init_logging(args.verbose);
        log::info!("Sheep Sort (headless) starting...");

        let tuning = match &args.tuning {
            Some(path) => match Tuning::load(path) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::error!("{e}");
                    std::process::exit(1);
                }
            },
            None => Tuning::default(),
        };

        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let state = match GameState::with_tuning(seed, tuning) {
            Ok(state) => state,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        };
        let mut driver = FrameDriver::new(state, ManualScheduler::default());
        driver.set_autopilot(args.autopilot);

        let mut clock = ManualClock::default();
        let mut renderer = LogRenderer::default();
        let limit_ms = args.max_seconds * 1000.0;

        driver.start();
        while driver.scheduler_mut().take_request() {
            if clock.now_ms() >= limit_ms {
                log::warn!("Stopping after {} simulated seconds", args.max_seconds);
                break;
            }
            driver.frame(clock.now_ms(), &mut renderer);
            clock.advance(FRAME_MS);
        }

        let state = driver.state();
        let summary = Summary {
            seed,
            score: state.score,
            missed: state.missed,
            phase: state.phase,
            ticks: state.time_ticks,
            frames: renderer.frames,
            simulated_seconds: clock.now_ms() / 1000.0,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to write summary: {e}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
