// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod workout;

pub use workout::{Coords, Workout, WorkoutKind, WorkoutUpdate};
