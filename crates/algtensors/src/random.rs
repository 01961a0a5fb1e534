//! Random tensor construction.

use rand::distr::StandardUniform;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::scalar::{Complex64, Ring};
use crate::tensor::DenseTensor;

/// Trait for element types that can be sampled from a uniform distribution.
pub trait RandomUniform: Ring {
    /// Sample a random value from the uniform distribution [0, 1).
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for Complex64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        Complex64::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
    }
}

/// Trait for element types that can be sampled from a normal distribution.
pub trait RandomNormal: Ring {
    /// Sample a random value from the standard normal distribution.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for f32 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for Complex64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        // Standard complex normal: real and imaginary parts independent
        // N(0, 1/2) so that |z|^2 has mean 1
        let scale = std::f64::consts::FRAC_1_SQRT_2;
        Complex64::new(
            rng.sample::<f64, _>(StandardNormal) * scale,
            rng.sample::<f64, _>(StandardNormal) * scale,
        )
    }
}

impl<T: RandomUniform> DenseTensor<T> {
    /// Create a tensor with uniform random values in [0, 1).
    pub fn random(shape: &[usize]) -> Self {
        Self::random_with_rng(shape, &mut rand::rng())
    }

    /// Create a tensor with uniform random values using a specific RNG.
    ///
    /// Useful for reproducible results with a seeded RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let t1: DenseTensor<f64> = DenseTensor::random_with_rng(&[2, 3], &mut rng);
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let t2: DenseTensor<f64> = DenseTensor::random_with_rng(&[2, 3], &mut rng);
    ///
    /// assert_eq!(t1, t2);
    /// ```
    pub fn random_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let len = crate::strides::element_count(shape);
        let data: Vec<T> = (0..len).map(|_| T::sample_uniform(rng)).collect();
        Self::from_vec(data, shape).expect("shape and data length match")
    }

    /// Create a tensor with standard normal random values.
    pub fn randn(shape: &[usize]) -> Self
    where
        T: RandomNormal,
    {
        Self::randn_with_rng(shape, &mut rand::rng())
    }

    /// Create a tensor with standard normal random values using a specific
    /// RNG.
    pub fn randn_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self
    where
        T: RandomNormal,
    {
        let len = crate::strides::element_count(shape);
        let data: Vec<T> = (0..len).map(|_| T::sample_normal(rng)).collect();
        Self::from_vec(data, shape).expect("shape and data length match")
    }
}
