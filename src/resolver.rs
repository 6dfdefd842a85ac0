use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::attempt::AttemptKind;

/// Source of uniform percentile rolls in the inclusive range 1..=100.
///
/// The resolver consumes exactly one roll per attempt, so a test can script
/// outcomes by supplying its own source.
pub trait RollSource {
    fn roll(&mut self) -> u32;
}

/// A [`RollSource`] backed by any [`Rng`].
pub struct PercentileDie<R: Rng> {
    rng: R,
}

impl<R: Rng> PercentileDie<R> {
    pub fn new(rng: R) -> Self {
        PercentileDie { rng }
    }
}

impl PercentileDie<ChaCha8Rng> {
    /// Die seeded from OS entropy.
    pub fn from_entropy() -> Self {
        PercentileDie::new(ChaCha8Rng::from_entropy())
    }

    /// Deterministically seeded die, for reproducible tournaments.
    pub fn seeded(seed: u64) -> Self {
        PercentileDie::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RollSource for PercentileDie<R> {
    fn roll(&mut self) -> u32 {
        self.rng.gen_range(1..=100)
    }
}

/// Resolves attempts against their success probability.
///
/// A technique with probability `p` lands exactly when the roll `r` satisfies
/// `r <= p`, so probability 100 always succeeds and probability 0 never does.
pub struct AttemptResolver<S: RollSource> {
    rolls: S,
}

impl AttemptResolver<PercentileDie<ChaCha8Rng>> {
    pub fn from_entropy() -> Self {
        AttemptResolver::new(PercentileDie::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        AttemptResolver::new(PercentileDie::seeded(seed))
    }
}

impl<S: RollSource> AttemptResolver<S> {
    pub fn new(rolls: S) -> Self {
        AttemptResolver { rolls }
    }

    /// Draw one roll for `kind` and return the points earned, 0 on a miss.
    ///
    /// Total over the whole [`AttemptKind`] set; consuming one roll is the
    /// only side effect.
    pub fn resolve(&mut self, kind: AttemptKind) -> i32 {
        let landed = if self.rolls.roll() <= kind.probability() {
            kind
        } else {
            AttemptKind::SinEmbocada
        };
        landed.points()
    }
}
