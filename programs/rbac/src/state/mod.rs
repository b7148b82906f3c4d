
pub mod config;
pub mod user_profile;

pub use config::*;
pub use user_profile::*;
