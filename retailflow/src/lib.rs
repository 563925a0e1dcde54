// Application state and key handling
pub mod app;

// Command line and environment configuration
pub mod config;

// SQLite-backed storage slots
pub mod database;

// File logging setup
pub mod logging;

// Save sinks (simulated and HTTP)
pub mod sink;

// Terminal rendering
pub mod ui;
