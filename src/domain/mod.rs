// Domain layer
// Pure Rust, no framework dependencies
pub mod models;
