use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::num::NonZeroU64;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

/// A cheap, non-reproducible pseudo-random stream.
///
/// Seeded once from the sub-second part of the wall clock so that fixtures
/// started in quick succession still draw different values.
pub struct TimeSeededRng {
    inner: StdRng,
}

impl TimeSeededRng {
    pub fn from_wall_clock() -> Result<Self> {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH)?;
        let seed = u64::from(since_epoch.subsec_nanos());
        trace!(seed, "seeding from wall clock");
        Ok(Self::with_seed(seed))
    }

    pub fn with_seed(seed: u64) -> Self {
        TimeSeededRng {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws uniformly from `[0, bound)`.
    pub fn below(&mut self, bound: NonZeroU64) -> u64 {
        self.inner.gen_range(0..bound.get())
    }

    /// Draws an exit status, either 0 or 1.
    pub fn exit_status(&mut self) -> u8 {
        self.inner.gen_range(0..2u8)
    }
}
