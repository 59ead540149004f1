pub mod commands;
pub mod config;
pub mod context;
pub mod global;
pub mod journal;
pub mod steps;
pub mod ui;
pub mod utils;
