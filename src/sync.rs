//! A parking lot shareable across threads.

use std::string::String;
use std::sync::Arc;
use std::vec::Vec;

use parking_lot::Mutex;

use crate::error::Result;
use crate::parking::{Admission, Departure, LotConfig, Occupant, ParkingLot};

/// Clonable handle to one [`ParkingLot`] guarded by a single mutex.
///
/// Each call holds the lock for the whole operation, so an `enter` or a
/// `leave` (including the admission it triggers) is never observed half
/// done.
#[derive(Debug, Clone)]
pub struct SharedParkingLot {
    inner: Arc<Mutex<ParkingLot>>,
}

impl SharedParkingLot {
    pub fn new(capacity: usize, rate: f64) -> Result<Self> {
        ParkingLot::new(capacity, rate).map(Self::from)
    }

    pub fn with_config(config: LotConfig) -> Result<Self> {
        ParkingLot::with_config(config).map(Self::from)
    }

    pub fn enter(&self, license_plate_number: impl Into<String>) -> Admission {
        self.inner.lock().enter(license_plate_number)
    }

    pub fn leave(&self, license_plate_number: &str) -> Result<Departure> {
        self.inner.lock().leave(license_plate_number)
    }

    pub fn vacant_spaces(&self) -> usize {
        self.inner.lock().vacant_spaces()
    }

    pub fn total_revenue(&self) -> f64 {
        self.inner.lock().total_revenue()
    }

    pub fn occupants(&self) -> Vec<Occupant> {
        self.inner.lock().occupants()
    }

    /// Runs `f` against the lot under the lock, for reads that must agree
    /// with each other.
    pub fn with_lot<R>(&self, f: impl FnOnce(&ParkingLot) -> R) -> R {
        f(&*self.inner.lock())
    }
}

impl From<ParkingLot> for SharedParkingLot {
    fn from(lot: ParkingLot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(lot)),
        }
    }
}
