pub mod client;
pub mod config;

pub use client::NvidiaClient;
pub use config::NvidiaConfig;
