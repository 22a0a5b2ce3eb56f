// src/lib.rs

#[macro_use]
pub mod log;

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod inventory;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod tool;

pub use error::{ Error, Result };
