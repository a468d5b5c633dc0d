pub mod asr;
pub mod config;
pub mod server;
pub mod session;
pub mod translate;

pub use config::Config;
