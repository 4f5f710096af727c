// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod enrich;
pub mod extract;
pub mod json;
pub mod normalize;
pub mod pipeline;
pub mod sql;
pub mod store;
