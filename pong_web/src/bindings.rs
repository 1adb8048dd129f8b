//! `wasm-bindgen` exports
//!
//! The JS side calls `game_frame` from `requestAnimationFrame` and only
//! re-requests a frame while it returns true. Control exports return true when
//! an idle loop has to be restarted.

use std::cell::RefCell;

use pong_core::{MatchAction, Simulation};
use wasm_bindgen::prelude::*;

use crate::{control_for_key, fit_viewport, render_frame, PointerInput};

struct WebGame {
    sim: Simulation,
    pointer: PointerInput,
}

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

fn with_game<R>(f: impl FnOnce(&mut WebGame) -> R) -> Option<R> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn control(action: MatchAction) -> bool {
    let now = now_ms();
    with_game(|game| game.sim.control(action, now)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn game_init(inner_width: f64, inner_height: f64) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let viewport = fit_viewport(inner_width, inner_height);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let game = WebGame {
        sim: Simulation::new(viewport, seed),
        pointer: PointerInput::new(),
    };
    GAME.with(|cell| *cell.borrow_mut() = Some(game));

    log::info!("pong: initialized {}x{}", viewport.width(), viewport.height());
}

#[wasm_bindgen]
pub fn game_resize(inner_width: f64, inner_height: f64) {
    let viewport = fit_viewport(inner_width, inner_height);
    with_game(|game| game.sim.resize(viewport));
}

#[wasm_bindgen]
pub fn game_pointer_move(y: f32) {
    with_game(|game| game.pointer.on_move(y));
}

/// Returns true when a double tap restarted an idle loop
#[wasm_bindgen]
pub fn game_pointer_down(y: f32) -> bool {
    let now = now_ms();
    with_game(|game| match game.pointer.on_down(y, now) {
        Some(action) => game.sim.control(action, now),
        None => false,
    })
    .unwrap_or(false)
}

/// Returns true when the key restarted an idle loop
#[wasm_bindgen]
pub fn game_key_down(code: &str) -> bool {
    match control_for_key(code) {
        Some(action) => control(action),
        None => false,
    }
}

/// Whether the page should `preventDefault()` this key
#[wasm_bindgen]
pub fn game_is_game_key(code: &str) -> bool {
    crate::is_game_key(code)
}

/// One animation frame. Returns whether to request another.
#[wasm_bindgen]
pub fn game_frame(timestamp: f64) -> bool {
    with_game(|game| {
        let input = game.pointer.snapshot();
        game.sim.tick(timestamp, &input)
    })
    .unwrap_or(false)
}

/// Postcard-encoded `RenderFrame` for the renderer
#[wasm_bindgen]
pub fn game_render_frame() -> Result<Vec<u8>, JsValue> {
    let frame = with_game(|game| render_frame(&game.sim.snapshot()))
        .ok_or_else(|| JsValue::from_str("game not initialized, call game_init() first"))?;
    frame
        .to_bytes()
        .map_err(|e| JsValue::from_str(&format!("Failed to encode frame: {}", e)))
}
