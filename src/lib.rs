// SPDX-License-Identifier: MIT

//! Traillog: a map-based workout log core.
//!
//! This crate provides the workout data model (Running/Cycling variants)
//! and the session store that owns the workout collection and its
//! persistence. Presentation concerns (map rendering, geolocation, forms)
//! live outside the crate and drive it through [`SessionStore`].

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Coords, Workout, WorkoutKind, WorkoutUpdate};
pub use services::SessionStore;
pub use storage::{FileStorage, MemoryStorage, Storage};
