pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod rules;
pub mod session;
pub mod square;

pub use error::{Error, Result};

#[cfg(target_arch = "wasm32")]
mod wasm_api;
