//! Eternal Edge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use eternal_edge::consts::*;
    use eternal_edge::renderer::RenderState;
    use eternal_edge::sim::{RoundEvent, RoundState, TickInput, drain_substeps, step};
    use eternal_edge::{InputAction, Settings, StartupError, Tuning};

    /// Game instance holding all state
    struct Game {
        state: RoundState,
        settings: Settings,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(tuning: Tuning, settings: Settings) -> Self {
            Self {
                state: RoundState::new(tuning),
                settings,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            for _ in 0..drain_substeps(&mut self.accumulator) {
                let input = self.input.clone();
                if let Some(event) = step(&mut self.state, &input) {
                    log_event(event);
                }
                // Clear one-shot inputs after processing
                self.input.clear_one_shots();
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-knives .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.throws_remaining().to_string()));
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    if let Some(val) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                        val.set_text_content(Some(&self.fps.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Show/hide the end-of-round banner
            if let Some(el) = document.get_element_by_id("status-message") {
                match self.state.status_message() {
                    Some(text) => {
                        el.set_text_content(Some(text));
                        let class = if self.state.is_lost() { "lost" } else { "cleared" };
                        let _ = el.set_attribute("class", class);
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            if let Some(el) = document.get_element_by_id("idle-badge") {
                let class = if self.input.idle_mode { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }

        fn handle_key(&mut self, key: &str) {
            match self.settings.action_for_key(key) {
                Some(InputAction::Throw) => self.input.throw = true,
                Some(InputAction::Reset) => self.input.reset = true,
                Some(InputAction::ToggleIdle) => {
                    self.input.idle_mode = !self.input.idle_mode;
                    log::info!("Idle mode: {}", self.input.idle_mode);
                }
                None => {}
            }
        }
    }

    fn log_event(event: RoundEvent) {
        match event {
            RoundEvent::Embedded { angle, remaining } => {
                log::debug!("Embedded at {angle:.0}°, {remaining} left");
            }
            RoundEvent::Lost { angle } => log::info!("Game over at {angle:.0}°"),
            RoundEvent::Cleared { angle } => log::info!("Level complete, last knife at {angle:.0}°"),
        }
    }

    pub async fn run() -> Result<(), StartupError> {
        console_error_panic_hook::set_once();
        // Fails only if a logger is already installed
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Eternal Edge starting...");

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoWindow)?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(StartupError::NoCanvas)?
            .dyn_into()
            .map_err(|_| StartupError::NoCanvas)?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = Tuning::default();
        let settings = Settings::load();
        // Write back so bindings can be edited from devtools
        settings.save();
        let game = Rc::new(RefCell::new(Game::new(tuning, settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let logical = glam::Vec2::new(tuning.screen_width, tuning.screen_height);
        let render_state = RenderState::new(surface, &adapter, width, height, logical).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Eternal Edge running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.repeat() {
                return;
            }
            let key = event.key();
            if key == " " {
                // Keep space from scrolling the page
                event.prevent_default();
            }
            game.borrow_mut().handle_key(&key);
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Eternal Edge (native) starting...");
    log::info!("Native mode runs a headless autopilot round - run with `trunk serve` to play");

    let tuning = match load_tuning() {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    run_demo(tuning);
}

/// Read tuning from the file named by `EDGE_TUNING`, if set
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> Result<eternal_edge::Tuning, eternal_edge::StartupError> {
    use eternal_edge::Tuning;

    match std::env::var_os("EDGE_TUNING") {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path.to_string_lossy());
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(tuning: eternal_edge::Tuning) {
    use eternal_edge::sim::{RoundEvent, RoundState, TickInput, step};

    // Generous cap: every slot comes round at least once per revolution
    const MAX_TICKS: u64 = 60 * 60 * 10;

    let mut state = RoundState::new(tuning);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    while state.time_ticks < MAX_TICKS {
        match step(&mut state, &input) {
            Some(RoundEvent::Embedded { angle, remaining }) => {
                log::info!("Knife stuck at {angle:.0}°, {remaining} left");
            }
            Some(RoundEvent::Lost { .. } | RoundEvent::Cleared { .. }) => break,
            None => {}
        }
    }

    let seconds = state.time_ticks as f32 * eternal_edge::consts::SIM_DT;
    match state.status_message() {
        Some(message) => log::info!(
            "{message} {} knives embedded after {} ticks ({seconds:.1}s)",
            state.knives.len(),
            state.time_ticks
        ),
        None => log::warn!(
            "Autopilot stopped after {} ticks with {} throws left",
            state.time_ticks,
            state.throws_remaining()
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {e}");
    }
}
