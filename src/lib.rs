pub mod calc;
pub mod config;
pub mod convert;
pub mod records;
pub mod store;
pub mod tools;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
