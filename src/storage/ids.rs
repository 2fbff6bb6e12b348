//! Sale id allocation
//!
//! Two strategies exist and a store uses exactly one of them, chosen by the
//! `id_strategy` setting:
//!
//! - [`MaxPlusOne`] scans the store and returns the highest id plus one.
//! - [`RandomDraw`] draws from 1000-9999 with an explicitly seeded generator.
//!   It does not look at the store, so a collision with an existing id is
//!   possible and is not detected.

use std::fs::File;
use std::ops::RangeInclusive;
use std::path::Path;

use csv::ReaderBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::IdStrategy;
use crate::error::{SalesError, SalesResult};
use crate::models::SaleId;

/// Range used by the random strategy
pub const RANDOM_ID_RANGE: RangeInclusive<SaleId> = 1000..=9999;

/// Produces the id for a new sale
pub trait IdAllocator {
    fn next_id(&mut self, store: &Path) -> SalesResult<SaleId>;
}

/// Highest parsable id in the store plus one, or 1 for an empty store
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxPlusOne;

impl MaxPlusOne {
    /// Highest id in the store; rows whose id field does not parse are ignored
    pub fn max_id(store: &Path) -> SalesResult<Option<SaleId>> {
        if !store.exists() {
            return Ok(None);
        }

        let file = File::open(store).map_err(|e| {
            SalesError::Storage(format!("Failed to open {}: {}", store.display(), e))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let max = reader
            .records()
            .filter_map(Result::ok)
            .filter_map(|row| row.get(1).and_then(|id| id.trim().parse::<SaleId>().ok()))
            .max();

        Ok(max)
    }
}

impl IdAllocator for MaxPlusOne {
    fn next_id(&mut self, store: &Path) -> SalesResult<SaleId> {
        let next = match Self::max_id(store)? {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| SalesError::Storage("Sale id space exhausted".into()))?,
            None => 1,
        };
        debug!(id = next, "allocated sale id by scan");
        Ok(next)
    }
}

/// Uniform draw from [`RANDOM_ID_RANGE`]
#[derive(Debug, Clone)]
pub struct RandomDraw {
    rng: StdRng,
}

impl RandomDraw {
    /// Seed once from the operating system's entropy source
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for reproducible sequences
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn draw(&mut self) -> SaleId {
        self.rng.gen_range(RANDOM_ID_RANGE)
    }
}

impl IdAllocator for RandomDraw {
    fn next_id(&mut self, _store: &Path) -> SalesResult<SaleId> {
        let id = self.draw();
        debug!(id, "allocated sale id by random draw");
        Ok(id)
    }
}

/// Build the allocator for a configured strategy
pub fn allocator_for(strategy: IdStrategy) -> Box<dyn IdAllocator> {
    match strategy {
        IdStrategy::MaxPlusOne => Box::new(MaxPlusOne),
        IdStrategy::Random => Box::new(RandomDraw::from_entropy()),
    }
}
