// Public API exports (shared between client and server)
pub mod config;
pub mod domain;
pub mod shared;

pub mod app;
