// SPDX-License-Identifier: MIT

//! Workout model: the polymorphic Running/Cycling entity.
//!
//! A workout's core fields (id, creation time, coordinates, type) are fixed
//! at construction. The derived metric (pace or speed) is computed once in
//! the constructor and carried in the serialized form, so a restored workout
//! never has to re-derive it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::time_utils;

/// A latitude/longitude pair. Serializes as a 2-element array `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// Variant-specific fields, tagged by workout type.
///
/// The derived metric lives next to the input metric it was computed from:
/// `pace` in minutes per km for running, `speed` in km/h for cycling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per km, duration / distance
        pace: f64,
    },
    Cycling {
        /// Meters climbed; may be zero or negative (net descent)
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// Km/h, distance / (duration / 60)
        speed: f64,
    },
}

impl WorkoutKind {
    /// Lowercase discriminator, matches the serialized `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running { .. } => "running",
            WorkoutKind::Cycling { .. } => "cycling",
        }
    }

    /// Capitalized type name used in descriptions.
    fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running { .. } => "Running",
            WorkoutKind::Cycling { .. } => "Cycling",
        }
    }
}

/// A single recorded workout.
///
/// Serializes to the flat camelCase record stored in the snapshot: base
/// fields plus the variant fields flattened in, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coords,
    /// Distance in km
    distance: f64,
    /// Duration in minutes
    duration: f64,
    /// Cached human-readable label, e.g. "Running on August 23".
    /// Computed once at construction, never recomputed.
    description: String,
    /// Times the workout was selected in the UI
    #[serde(default)]
    interaction_count: u32,
    #[serde(flatten)]
    kind: WorkoutKind,
}

/// Replacement metrics for an in-place edit. The variant must match the
/// workout being updated; coordinates and type are immutable.
#[derive(Debug, Clone, Copy)]
pub enum WorkoutUpdate {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    },
}

impl Workout {
    /// Construct a running workout.
    ///
    /// Fails with [`Error::InvalidMetric`] unless distance, duration, and
    /// cadence are all positive finite numbers.
    pub fn running(coords: Coords, distance: f64, duration: f64, cadence: f64) -> Result<Self> {
        ensure_positive_finite("distance", distance)?;
        ensure_positive_finite("duration", duration)?;
        ensure_positive_finite("cadence", cadence)?;

        let pace = duration / distance;
        Ok(Self::new(
            coords,
            distance,
            duration,
            WorkoutKind::Running { cadence, pace },
        ))
    }

    /// Construct a cycling workout.
    ///
    /// Distance and duration must be positive finite numbers. Elevation gain
    /// may be any finite number, including zero or negative for a net
    /// descent.
    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Result<Self> {
        ensure_positive_finite("distance", distance)?;
        ensure_positive_finite("duration", duration)?;
        ensure_finite("elevation gain", elevation_gain)?;

        let speed = distance / (duration / 60.0);
        Ok(Self::new(
            coords,
            distance,
            duration,
            WorkoutKind::Cycling {
                elevation_gain,
                speed,
            },
        ))
    }

    fn new(coords: Coords, distance: f64, duration: f64, kind: WorkoutKind) -> Self {
        let created_at = Utc::now();
        let description = format!(
            "{} on {}",
            kind.label(),
            time_utils::format_month_day(created_at)
        );

        Self {
            id: Uuid::new_v4().simple().to_string(),
            created_at,
            coords,
            distance,
            duration,
            description,
            interaction_count: 0,
            kind,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    /// The cached description. Pure read, no side effect.
    pub fn describe(&self) -> &str {
        &self.description
    }

    /// Pace in min/km for running workouts.
    pub fn pace(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { pace, .. } => Some(pace),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    /// Speed in km/h for cycling workouts.
    pub fn speed(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { speed, .. } => Some(speed),
            WorkoutKind::Running { .. } => None,
        }
    }

    pub fn cadence(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { cadence, .. } => Some(cadence),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { elevation_gain, .. } => Some(elevation_gain),
            WorkoutKind::Running { .. } => None,
        }
    }

    /// Record a UI selection of this workout. Increments the interaction
    /// counter; no other state changes.
    pub fn activate(&mut self) {
        self.interaction_count += 1;
    }

    /// Replace the editable metrics in place, recomputing the derived
    /// metric. Validates everything before touching any field, so a failed
    /// update leaves the workout unchanged.
    ///
    /// Id, creation time, coordinates, type, description, and the
    /// interaction counter are never modified.
    pub(crate) fn apply_update(&mut self, update: WorkoutUpdate) -> Result<()> {
        match (&self.kind, update) {
            (
                WorkoutKind::Running { .. },
                WorkoutUpdate::Running {
                    distance,
                    duration,
                    cadence,
                },
            ) => {
                ensure_positive_finite("distance", distance)?;
                ensure_positive_finite("duration", duration)?;
                ensure_positive_finite("cadence", cadence)?;

                self.distance = distance;
                self.duration = duration;
                self.kind = WorkoutKind::Running {
                    cadence,
                    pace: duration / distance,
                };
                Ok(())
            }
            (
                WorkoutKind::Cycling { .. },
                WorkoutUpdate::Cycling {
                    distance,
                    duration,
                    elevation_gain,
                },
            ) => {
                ensure_positive_finite("distance", distance)?;
                ensure_positive_finite("duration", duration)?;
                ensure_finite("elevation gain", elevation_gain)?;

                self.distance = distance;
                self.duration = duration;
                self.kind = WorkoutKind::Cycling {
                    elevation_gain,
                    speed: distance / (duration / 60.0),
                };
                Ok(())
            }
            _ => Err(Error::InvalidMetric(format!(
                "update variant does not match workout type {}",
                self.kind.type_name()
            ))),
        }
    }
}

fn ensure_positive_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidMetric(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidMetric(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    Ok(())
}
