#![no_std]

//! Enlarger timer application layer
//!
//! Layers:
//! - `domain` - Paper profiles, menu actions, DTOs and ports
//! - `app` - Exposure use cases on top of the engine
//! - `controllers` - Menu action handling and value editors
//! - `infrastructure` - Profile storage adapters and the exposure task
//!
//! The exposure engine itself lives in the `enlarger-exposure` crate.

pub mod app;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod infrastructure;

pub use enlarger_exposure as exposure;
