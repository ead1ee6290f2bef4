use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::marker::PhantomData;

use crate::error::RandomError;
use crate::random::distribution::{BoundedDistribution, UnitInterval};

/// Draws values of `T` from a distribution `D` using the engine `G`.
///
/// ```
/// use crescent::random::distribution::UniformRange;
/// use crescent::random::generator::RandomNumberGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut gen = RandomNumberGenerator::new(
///     StdRng::seed_from_u64(0),
///     UniformRange::new(1, 6).unwrap(),
/// );
/// let roll = gen.generate();
/// assert!((gen.min()..=gen.max()).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator<T, D, G = StdRng> {
    engine: G,
    distribution: D,
    _marker: PhantomData<T>,
}

/// Generator of uniform probabilities in `[0, 1)`.
pub type UniformProbabilityGenerator<G = StdRng> = RandomNumberGenerator<f64, UnitInterval, G>;

impl<T, D: BoundedDistribution<T>, G: Rng> RandomNumberGenerator<T, D, G> {
    pub fn new(engine: G, distribution: D) -> Self {
        RandomNumberGenerator {
            engine,
            distribution,
            _marker: PhantomData,
        }
    }

    pub fn generate(&mut self) -> T {
        self.distribution.sample(&mut self.engine)
    }

    pub fn samples(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::repeat_with(move || self.generate())
    }

    pub fn min(&self) -> T {
        self.distribution.min()
    }

    pub fn max(&self) -> T {
        self.distribution.max()
    }

    pub fn reset(&mut self) {
        self.distribution.reset();
    }

    pub fn param(&self) -> D::Param {
        self.distribution.param()
    }

    /// Replaces the distribution parameters. On error the previous
    /// parameters are kept.
    pub fn set_param(&mut self, param: D::Param) -> Result<(), RandomError> {
        self.distribution.set_param(param)
    }

    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    pub fn engine_mut(&mut self) -> &mut G {
        &mut self.engine
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T, D: BoundedDistribution<T>> RandomNumberGenerator<T, D, StdRng> {
    pub fn from_distribution(distribution: D) -> Self {
        Self::new(StdRng::from_entropy(), distribution)
    }
}

impl<G: Rng> UniformProbabilityGenerator<G> {
    pub fn probability(engine: G) -> Self {
        Self::new(engine, UnitInterval)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
