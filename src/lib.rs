pub mod config;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod layouts;
pub mod metrics;
pub mod optimizer;
pub mod reports;
pub mod scorer;
// cmd is a module of the binary crate (main.rs).
