pub mod api;
pub mod config;
pub mod effects;
pub mod error;
pub mod export;
pub mod filter;
pub mod inventory;
pub mod matching;
pub mod model;
pub mod optimizer;
pub mod presets;
pub mod scorer;
pub mod util;

pub use crate::error::{GearForgeError, GfResult};
