// src/lib.rs

#[macro_use]
pub mod macros;

pub mod attributes;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod file;
pub mod log;
pub mod normalize;
pub mod rank;
pub mod render;
pub mod runner;
pub mod scoring;
pub mod store;
pub mod table;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
