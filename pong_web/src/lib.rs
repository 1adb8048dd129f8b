//! Browser glue for the Pong simulation
//!
//! The browser owns the clock (`requestAnimationFrame`), the canvas and the
//! input events; this crate forwards them into a `pong_core::Simulation` and
//! hands back a postcard-encoded `RenderFrame` for the canvas renderer.

mod frame;
mod input;

#[cfg(target_arch = "wasm32")]
mod bindings;

pub use frame::*;
pub use input::*;
