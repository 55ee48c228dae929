pub mod data;
pub mod schedule;
pub mod time;
#[cfg(feature = "wasm")]
pub mod wasm;
