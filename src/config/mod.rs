//! Application configuration module
//!
//! `Config` is read from the environment (and `.env`); defaults live in
//! `constants`.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
