// SPDX-License-Identifier: MIT

use traillog::{Coords, MemoryStorage, Storage, Workout};

/// Build a valid running workout at the default test location.
#[allow(dead_code)]
pub fn running(distance: f64, duration: f64, cadence: f64) -> Workout {
    Workout::running(Coords(40.7, -74.0), distance, duration, cadence)
        .expect("valid running workout")
}

/// Build a valid cycling workout at the default test location.
#[allow(dead_code)]
pub fn cycling(distance: f64, duration: f64, elevation_gain: f64) -> Workout {
    Workout::cycling(Coords(46.2, 6.1), distance, duration, elevation_gain)
        .expect("valid cycling workout")
}

/// Storage wrapper that fails the next N writes, for exercising the
/// best-effort persistence policy.
#[allow(dead_code)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_next_writes: u32,
}

#[allow(dead_code)]
impl FlakyStorage {
    pub fn failing(fail_next_writes: u32) -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_next_writes,
        }
    }
}

impl Storage for FlakyStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_next_writes > 0 {
            self.fail_next_writes -= 1;
            anyhow::bail!("simulated write failure");
        }
        self.inner.write(key, value)
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        if self.fail_next_writes > 0 {
            self.fail_next_writes -= 1;
            anyhow::bail!("simulated remove failure");
        }
        self.inner.remove(key)
    }
}
