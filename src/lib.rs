// src/lib.rs

pub mod app;
pub mod bubble;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod highlight;
pub mod history;
pub mod keys;
pub mod logging;
pub mod markup;
pub mod message;
pub mod theme;
pub mod ui;
