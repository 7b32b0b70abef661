//! Parking lot admission and release simulator.
//!
//! A lot has a fixed number of spaces and a FIFO waiting queue. Cars are
//! parked in the lowest numbered vacant space; when the lot is full they
//! wait in arrival order. A car leaving a space pays the flat rate and
//! the first waiting car is admitted within the same call.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::queue::Queue;

/// How vacant spaces are rendered in [`Occupant::license_plate_number`].
pub const VACANT: &str = "vacant";

/// Lot construction parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LotConfig {
    /// Number of spaces, must be positive.
    pub capacity: usize,
    /// Fee charged per departure from a space, must be non-negative.
    pub rate: f64,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            capacity: 1,
            rate: 0.0,
        }
    }
}

impl LotConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if !self.rate.is_finite() || self.rate < 0.0 {
            return Err(Error::InvalidRate(self.rate));
        }
        Ok(())
    }
}

/// State of a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Space {
    Vacant,
    Occupied(String),
}

impl Space {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Space::Vacant)
    }

    /// Returns the occupant's plate, if any.
    pub fn plate(&self) -> Option<&str> {
        match self {
            Space::Vacant => None,
            Space::Occupied(plate) => Some(plate),
        }
    }
}

/// One row of [`ParkingLot::occupants`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Occupant {
    /// 1-based space number.
    pub space: usize,
    /// Plate of the parked car, or [`VACANT`].
    pub license_plate_number: String,
}

/// Outcome of [`ParkingLot::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Parked in the given 1-based space.
    Parked { space: usize },
    /// Lot full, waiting at the given 1-based queue position.
    Queued { position: usize },
}

/// Outcome of a successful [`ParkingLot::leave`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure {
    /// The car left the given 1-based space and paid the rate. `admitted`
    /// is the waiting car that took the space, if any.
    Parked {
        space: usize,
        admitted: Option<String>,
    },
    /// The car was only waiting; `removed` queue entries carried its plate.
    Waiting { removed: usize },
}

/// A fixed size parking lot with a waiting queue.
#[derive(Debug)]
pub struct ParkingLot {
    spaces: Vec<Space>,
    rate: f64,
    revenue: f64,
    queue: Queue<String>,
}

impl ParkingLot {
    /// Creates a lot with `capacity` vacant spaces charging `rate` per
    /// departure.
    pub fn new(capacity: usize, rate: f64) -> Result<Self> {
        Self::with_config(LotConfig { capacity, rate })
    }

    pub fn with_config(config: LotConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(capacity = config.capacity, rate = config.rate, "parking lot opened");
        Ok(Self {
            spaces: alloc::vec![Space::Vacant; config.capacity],
            rate: config.rate,
            revenue: 0.0,
            queue: Queue::new(),
        })
    }

    /// Parks the car in the lowest numbered vacant space, or puts it at the
    /// back of the waiting queue when the lot is full.
    ///
    /// Plates are opaque and never checked for duplicates.
    pub fn enter(&mut self, license_plate_number: impl Into<String>) -> Admission {
        let plate = license_plate_number.into();
        match self.spaces.iter().position(Space::is_vacant) {
            Some(index) => {
                tracing::debug!(plate = %plate, space = index + 1, "car parked");
                self.spaces[index] = Space::Occupied(plate);
                Admission::Parked { space: index + 1 }
            }
            None => {
                tracing::debug!(plate = %plate, waiting = self.queue.len() + 1, "lot full, car queued");
                self.queue.enqueue(plate);
                Admission::Queued {
                    position: self.queue.len(),
                }
            }
        }
    }

    /// Releases a car from its space or from the waiting queue.
    ///
    /// A parked car takes priority over waiting entries with the same
    /// plate. Leaving a space adds the rate to the revenue and admits the
    /// front of the queue. Leaving the queue is free and removes every
    /// waiting entry with that plate. An unknown plate is rejected and the
    /// lot is left untouched.
    pub fn leave(&mut self, license_plate_number: &str) -> Result<Departure> {
        if let Some(index) = self.index_of(license_plate_number) {
            self.spaces[index] = Space::Vacant;
            self.revenue += self.rate;
            tracing::debug!(
                plate = license_plate_number,
                space = index + 1,
                revenue = self.revenue,
                "car left space"
            );

            let admitted = match self.queue.first() {
                Some(_) => {
                    let next = self.queue.dequeue()?;
                    self.enter(next.clone());
                    Some(next)
                }
                None => None,
            };
            return Ok(Departure::Parked {
                space: index + 1,
                admitted,
            });
        }

        let removed = self.queue.remove_all(|plate| plate == license_plate_number);
        if removed == 0 {
            tracing::warn!(plate = license_plate_number, "leave of unknown car");
            return Err(Error::UnknownLicensePlate(license_plate_number.to_string()));
        }
        tracing::debug!(plate = license_plate_number, removed, "car left waiting queue");
        Ok(Departure::Waiting { removed })
    }

    fn index_of(&self, license_plate_number: &str) -> Option<usize> {
        self.spaces
            .iter()
            .position(|space| space.plate() == Some(license_plate_number))
    }

    /// Returns the 1-based space occupied by the plate, if parked.
    pub fn space_of(&self, license_plate_number: &str) -> Option<usize> {
        self.index_of(license_plate_number).map(|index| index + 1)
    }

    pub fn vacant_spaces(&self) -> usize {
        self.spaces.iter().filter(|space| space.is_vacant()).count()
    }

    pub fn occupied_spaces(&self) -> usize {
        self.capacity() - self.vacant_spaces()
    }

    pub fn capacity(&self) -> usize {
        self.spaces.len()
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Cumulative fees collected. Each departure from a space pays the
    /// rate once, regardless of how long the car stayed.
    pub fn total_revenue(&self) -> f64 {
        self.revenue
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Lists every space in order with its occupant, or [`VACANT`].
    pub fn occupants(&self) -> Vec<Occupant> {
        self.spaces
            .iter()
            .enumerate()
            .map(|(index, space)| Occupant {
                space: index + 1,
                license_plate_number: space.plate().unwrap_or(VACANT).to_string(),
            })
            .collect()
    }

    /// Plates waiting for a space, front first.
    pub fn waiting(&self) -> impl Iterator<Item = &str> + '_ {
        self.queue.iter().map(String::as_str)
    }

    pub fn waiting_len(&self) -> usize {
        self.queue.len()
    }
}
