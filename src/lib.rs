// src/lib.rs

pub mod config;
pub mod log;
pub mod progress;

pub mod openalex;
pub mod lookup;
pub mod collect;

pub mod csv;
pub mod file;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;
