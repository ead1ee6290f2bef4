use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform, WeightedIndex};
use rand::Rng;
use std::fmt::Debug;

use crate::error::RandomError;

/// A [`Distribution`] that knows its support and can be re-parameterized.
pub trait BoundedDistribution<T>: Distribution<T> {
    type Param: Clone + Debug;

    fn min(&self) -> T;
    fn max(&self) -> T;

    fn param(&self) -> Self::Param;
    fn set_param(&mut self, param: Self::Param) -> Result<(), RandomError>;

    fn reset(&mut self) {}
}

pub trait UniformBound: SampleUniform + PartialOrd + Clone + Debug {
    fn is_sampleable(_low: &Self, _high: &Self) -> bool {
        true
    }
}

macro_rules! impl_uniform_bound_int {
    ($($t:ty),*) => {
        $(impl UniformBound for $t {})*
    };
}

impl_uniform_bound_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_uniform_bound_float {
    ($($t:ty),*) => {
        $(
            impl UniformBound for $t {
                // rand scales the span by the largest unit draw, `1 - EPSILON`
                fn is_sampleable(low: &$t, high: &$t) -> bool {
                    ((high - low) / (1.0 - <$t>::EPSILON)).is_finite()
                }
            }
        )*
    };
}

impl_uniform_bound_float!(f32, f64);

/// Uniform distribution over the closed interval `[low, high]`.
pub struct UniformRange<T: SampleUniform> {
    low: T,
    high: T,
    uniform: Uniform<T>,
}

impl<T: UniformBound> UniformRange<T> {
    pub fn new(low: T, high: T) -> Result<Self, RandomError> {
        check_range(&low, &high)?;
        let uniform = Uniform::new_inclusive(low.clone(), high.clone());
        Ok(UniformRange { low, high, uniform })
    }
}

fn check_range<T: UniformBound>(low: &T, high: &T) -> Result<(), RandomError> {
    // `!(low <= high)` also rejects NaN bounds
    if !(low <= high) || !T::is_sampleable(low, high) {
        return Err(RandomError::InvalidRange {
            low: format!("{:?}", low),
            high: format!("{:?}", high),
        });
    }
    Ok(())
}

impl<T> Clone for UniformRange<T>
where
    T: SampleUniform + Clone,
    T::Sampler: Clone,
{
    fn clone(&self) -> Self {
        UniformRange {
            low: self.low.clone(),
            high: self.high.clone(),
            uniform: self.uniform.clone(),
        }
    }
}

impl<T: SampleUniform + Debug> Debug for UniformRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniformRange")
            .field("low", &self.low)
            .field("high", &self.high)
            .finish()
    }
}

impl<T: SampleUniform + PartialEq> PartialEq for UniformRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl<T: SampleUniform> Distribution<T> for UniformRange<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.uniform.sample(rng)
    }
}

impl<T: UniformBound> BoundedDistribution<T> for UniformRange<T> {
    type Param = (T, T);

    fn min(&self) -> T {
        self.low.clone()
    }

    fn max(&self) -> T {
        self.high.clone()
    }

    fn param(&self) -> (T, T) {
        (self.low.clone(), self.high.clone())
    }

    fn set_param(&mut self, (low, high): (T, T)) -> Result<(), RandomError> {
        *self = UniformRange::new(low, high)?;
        Ok(())
    }
}

/// Uniform `f64` probabilities in `[0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitInterval;

impl Distribution<f64> for UnitInterval {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen::<f64>()
    }
}

impl BoundedDistribution<f64> for UnitInterval {
    type Param = ();

    fn min(&self) -> f64 {
        0.0
    }

    fn max(&self) -> f64 {
        1.0
    }

    fn param(&self) {}

    fn set_param(&mut self, _param: ()) -> Result<(), RandomError> {
        Ok(())
    }
}

/// Integers on `[0, n)` where the weight of `i` grows linearly with `i`
/// (ascending) or with `n - i` (descending).
#[derive(Debug, Clone)]
pub struct DiscreteTriangular {
    n: usize,
    ascending: bool,
    weights: Vec<u32>,
    index: WeightedIndex<u32>,
}

impl DiscreteTriangular {
    pub fn new(n: usize, ascending: bool) -> Result<Self, RandomError> {
        let weights = triangular_weights(n, ascending)?;
        let index = WeightedIndex::new(&weights)
            .map_err(|e| RandomError::InvalidWeights(e.to_string()))?;

        Ok(DiscreteTriangular {
            n,
            ascending,
            weights,
            index,
        })
    }

    pub fn probabilities(&self) -> Vec<f64> {
        let total: f64 = self.weights.iter().map(|w| *w as f64).sum();
        self.weights.iter().map(|w| *w as f64 / total).collect()
    }
}

fn triangular_weights(n: usize, ascending: bool) -> Result<Vec<u32>, RandomError> {
    (0..n)
        .map(|i| {
            let weight = if ascending { i } else { n - i };
            u32::try_from(weight).map_err(|_| {
                RandomError::InvalidWeights(format!("weight {} does not fit in u32", weight))
            })
        })
        .collect()
}

impl Distribution<usize> for DiscreteTriangular {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }
}

impl BoundedDistribution<usize> for DiscreteTriangular {
    type Param = (usize, bool);

    fn min(&self) -> usize {
        0
    }

    fn max(&self) -> usize {
        self.n.saturating_sub(1)
    }

    fn param(&self) -> (usize, bool) {
        (self.n, self.ascending)
    }

    fn set_param(&mut self, (n, ascending): (usize, bool)) -> Result<(), RandomError> {
        *self = DiscreteTriangular::new(n, ascending)?;
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
