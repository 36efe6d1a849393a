//! Browser entry points for the flap game.
//!
//! The page owns the DOM: overlays, buttons and event listeners. It calls
//! `game_init` once, `game_start` with its canvas id, forwards input with
//! `game_input` / `game_pointer_down` / `game_key_down`, forwards viewport
//! changes with `game_resize`, and reads back `get_hud_json` or the event
//! buffer to update its overlays.

pub mod canvas;
pub mod frame_loop;
pub mod runner;
pub mod storage;

use std::cell::{Cell, RefCell};

use flap_engine::{DisplayProfile, FlapError, FlappyGame, GameConfig, InputEvent, ScoreStore, Viewport};
use wasm_bindgen::prelude::*;

pub use canvas::CanvasSurface;
pub use runner::{FixedFrames, FrameSource, GameRunner};

type WebRunner = GameRunner<FlappyGame, Box<dyn ScoreStore>>;

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = const { RefCell::new(None) };
    static SURFACE: RefCell<Option<CanvasSurface>> = const { RefCell::new(None) };
    static LOOP_STARTED: Cell<bool> = const { Cell::new(false) };
}

fn to_js(err: FlapError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Run `f` against the runner, or `None` before `game_init`.
fn with_runner<R>(f: impl FnOnce(&mut WebRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn push(event: InputEvent) {
    if with_runner(|r| r.push_input(event)).is_none() {
        log::warn!("input before game_init ignored: {:?}", event);
    }
}

/// Mark the frame loop as running. Returns false if it already was.
fn claim_frame_loop() -> bool {
    !LOOP_STARTED.with(|started| started.replace(true))
}

fn release_frame_loop() {
    LOOP_STARTED.with(|started| started.set(false));
}

fn install(config: GameConfig) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let store = storage::open_store(&config.storage_key);
    let mut runner = GameRunner::new(FlappyGame::new(config), store);
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("flap: initialized");
}

/// Initialize with an explicit display profile and the current viewport.
#[wasm_bindgen]
pub fn game_init(touch_primary: bool, width: f32, height: f32) -> Result<(), JsValue> {
    let viewport = Viewport::new(width, height).map_err(to_js)?;
    let profile = DisplayProfile::from_touch_primary(touch_primary);
    install(GameConfig::for_profile(profile, viewport));
    Ok(())
}

/// Initialize from a JSON `GameConfig`; missing fields take defaults.
#[wasm_bindgen]
pub fn game_init_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(to_js)?;
    install(config);
    Ok(())
}

/// Bind to `<canvas id=canvas_id>` and start the frame loop. Calling it
/// again only rebinds the canvas; the loop keeps a single chain.
#[wasm_bindgen]
pub fn game_start(canvas_id: &str) -> Result<(), JsValue> {
    let surface = CanvasSurface::from_element_id(canvas_id)?;
    let canvas_size = with_runner(|r| r.game().metrics().canvas)
        .ok_or_else(|| JsValue::from_str("call game_init first"))?;
    surface.fit(canvas_size);
    SURFACE.with(|cell| {
        *cell.borrow_mut() = Some(surface);
    });

    if !claim_frame_loop() {
        log::warn!("game_start: frame loop already running, rebound canvas #{}", canvas_id);
        return Ok(());
    }

    frame_loop::start(|dt_ms| {
        SURFACE.with(|cell| {
            if let Some(surface) = cell.borrow_mut().as_mut() {
                with_runner(|r| r.frame(dt_ms, surface));
            }
        });
    })
    .inspect_err(|_| release_frame_loop())
}

/// The primary action (flap / start / restart), already filtered by the page.
#[wasm_bindgen]
pub fn game_input() {
    push(InputEvent::Action);
}

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32) {
    push(InputEvent::PointerDown { x, y });
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    push(InputEvent::KeyDown { key_code });
}

/// Viewport changed. Invalid sizes are rejected here, before the game sees them.
#[wasm_bindgen]
pub fn game_resize(width: f32, height: f32) -> Result<(), JsValue> {
    let viewport = Viewport::new(width, height).map_err(to_js)?;
    let canvas_size = with_runner(|r| {
        r.push_input(InputEvent::Resize { width, height });
        r.config().profile.canvas_size(viewport)
    })
    .ok_or_else(|| JsValue::from_str("call game_init first"))?;
    SURFACE.with(|cell| {
        if let Some(surface) = cell.borrow().as_ref() {
            surface.fit(canvas_size);
        }
    });
    Ok(())
}

// ---- State accessors ----

/// 0 = start, 1 = playing, 2 = game over.
#[wasm_bindgen]
pub fn get_phase() -> u8 {
    with_runner(|r| r.game().phase().code()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.game().score()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_best_score() -> u32 {
    with_runner(|r| r.game().best_score()).unwrap_or(0)
}

/// Overlay visibility and text values as JSON.
#[wasm_bindgen]
pub fn get_hud_json() -> Result<String, JsValue> {
    let hud = with_runner(|r| r.game().hud()).ok_or_else(|| JsValue::from_str("call game_init first"))?;
    serde_json::to_string(&hud).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.game().metrics().canvas.width).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.game().metrics().canvas.height).unwrap_or(0.0)
}

// ---- Event buffer (4 floats per event) ----

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flap_engine::Phase;

    #[test]
    fn accessors_before_init_are_neutral() {
        assert_eq!(get_phase(), 0);
        assert_eq!(get_score(), 0);
        assert!(get_game_events_ptr().is_null());
        assert_eq!(get_game_events_len(), 0);
    }

    #[test]
    fn frame_loop_is_claimed_once() {
        assert!(claim_frame_loop());
        assert!(!claim_frame_loop());
        assert!(!claim_frame_loop());
        release_frame_loop();
        assert!(claim_frame_loop());
    }

    #[test]
    fn hud_reflects_runner_state() {
        let config = GameConfig::default();
        let mut runner: WebRunner =
            GameRunner::new(FlappyGame::new(config), Box::new(flap_engine::MemoryStore::with_best(3)));
        runner.init();
        RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

        let json = get_hud_json().unwrap();
        assert!(json.contains("\"show_start\":true"));
        assert_eq!(get_best_score(), 3);

        game_input();
        let mut surface = flap_engine::DrawList::new();
        with_runner(|r| r.frame(16.0, &mut surface));
        assert_eq!(get_phase(), Phase::Playing.code());
        assert_eq!(get_world_width(), 400.0);
    }
}
