//! Scalar algebra capability traits for tensor element types.
//!
//! The hierarchy follows the classical tower
//!
//! ```text
//! Ring ⊂ DivisionRing ⊂ NormedDivisionRing
//! Real (orthogonal refinement: ordered, lifts plain numbers)
//! ```
//!
//! Operations on [`DenseTensor`](crate::tensor::DenseTensor) request the
//! weakest capability that serves them. Wherever a trait bound can express
//! the gate, the check is a compile-time one. Operations whose legality is
//! decided by a runtime value instead go through the hook constants on
//! [`Ring`] ([`Ring::DIV`], [`Ring::POWF`]) and fail with
//! [`TensorError::UnsupportedArithmetic`](crate::error::TensorError) when the
//! algebra left a hook unpopulated.

use std::fmt::{self, Debug};
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use num_complex::Complex64;

/// Names of the algebra capabilities, used in unsupported-arithmetic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Ring,
    DivisionRing,
    NormedDivisionRing,
    Real,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Capability::Ring => "Ring",
            Capability::DivisionRing => "DivisionRing",
            Capability::NormedDivisionRing => "NormedDivisionRing",
            Capability::Real => "Real",
        };
        f.write_str(s)
    }
}

/// The base capability every tensor element type must provide.
///
/// A ring supplies the additive identity, addition, subtraction, negation
/// and multiplication (through the standard operator traits), exponentiation
/// by a non-negative integer exponent, and the transcendental `exp`/`exp_m1`
/// used by the elementwise operations.
pub trait Ring:
    Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Informational tag describing this element type.
    const DATA_TYPE: &'static str;

    /// Runtime division hook. `None` for algebras without division;
    /// [`DivisionRing`] implementors also expose the operation here so that
    /// dynamically gated operations can detect support.
    const DIV: Option<fn(Self, Self) -> Self> = None;

    /// Runtime real-exponent power hook, populated by
    /// [`NormedDivisionRing`] implementors.
    const POWF: Option<fn(Self, f64) -> Self> = None;

    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Raise to a non-negative integer power by binary exponentiation.
    fn powu(mut self, mut exp: u32) -> Self {
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * self;
            }
            self = self * self;
            exp >>= 1;
        }
        acc
    }

    /// The exponential function.
    fn exp(self) -> Self;

    /// `exp(self) - 1`. Override for element types with a fused form.
    fn exp_m1(self) -> Self {
        self.exp() - Self::one()
    }
}

/// A ring with division.
pub trait DivisionRing: Ring + Div<Output = Self> {}

/// A division ring with a norm mapping each element to a magnitude, and
/// exponentiation by a real exponent.
///
/// The magnitude type is itself an ordered normed algebra so that norm
/// accumulations (sums of powers, max/min scans) stay inside one type.
pub trait NormedDivisionRing: DivisionRing {
    /// The magnitude type `norm` maps into.
    type Magnitude: Real + NormedDivisionRing<Magnitude = Self::Magnitude>;

    /// The magnitude (absolute value / modulus) of this element.
    fn norm(self) -> Self::Magnitude;

    /// Raise to a real exponent.
    fn powf(self, exponent: f64) -> Self;
}

/// An ordered ring that can lift plain numeric literals into itself.
///
/// Ordering comes from `PartialOrd`; `from_f64` exists so that sentinels
/// such as positive infinity can be represented in the scalar type.
pub trait Real: Ring + PartialOrd {
    /// Lift a plain number into the scalar type.
    fn from_f64(value: f64) -> Self;
}

impl Ring for f64 {
    const DATA_TYPE: &'static str = "f64";
    const DIV: Option<fn(f64, f64) -> f64> = Some(<f64 as Div>::div);
    const POWF: Option<fn(f64, f64) -> f64> = Some(f64::powf);

    fn one() -> Self {
        1.0
    }

    fn powu(self, exp: u32) -> Self {
        self.powi(exp as i32)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn exp_m1(self) -> Self {
        f64::exp_m1(self)
    }
}

impl DivisionRing for f64 {}

impl NormedDivisionRing for f64 {
    type Magnitude = f64;

    fn norm(self) -> f64 {
        self.abs()
    }

    fn powf(self, exponent: f64) -> Self {
        f64::powf(self, exponent)
    }
}

impl Real for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Ring for f32 {
    const DATA_TYPE: &'static str = "f32";
    const DIV: Option<fn(f32, f32) -> f32> = Some(<f32 as Div>::div);
    const POWF: Option<fn(f32, f64) -> f32> = Some(f32_powf);

    fn one() -> Self {
        1.0
    }

    fn powu(self, exp: u32) -> Self {
        self.powi(exp as i32)
    }

    fn exp(self) -> Self {
        f32::exp(self)
    }

    fn exp_m1(self) -> Self {
        f32::exp_m1(self)
    }
}

impl DivisionRing for f32 {}

impl NormedDivisionRing for f32 {
    type Magnitude = f32;

    fn norm(self) -> f32 {
        self.abs()
    }

    fn powf(self, exponent: f64) -> Self {
        f32_powf(self, exponent)
    }
}

impl Real for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

fn f32_powf(base: f32, exponent: f64) -> f32 {
    base.powf(exponent as f32)
}

impl Ring for Complex64 {
    const DATA_TYPE: &'static str = "Complex64";
    const DIV: Option<fn(Complex64, Complex64) -> Complex64> = Some(<Complex64 as Div>::div);
    const POWF: Option<fn(Complex64, f64) -> Complex64> = Some(complex_powf);

    fn one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    fn exp(self) -> Self {
        // e^(a+bi) = e^a (cos b + i sin b)
        let r = self.re.exp();
        Complex64::new(r * self.im.cos(), r * self.im.sin())
    }
}

impl DivisionRing for Complex64 {}

impl NormedDivisionRing for Complex64 {
    type Magnitude = f64;

    fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    fn powf(self, exponent: f64) -> Self {
        complex_powf(self, exponent)
    }
}

fn complex_powf(base: Complex64, exponent: f64) -> Complex64 {
    let r = base.re.hypot(base.im);
    if r == 0.0 {
        if exponent == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        return Complex64::new(0.0, 0.0);
    }
    let theta = base.im.atan2(base.re) * exponent;
    let scale = r.powf(exponent);
    Complex64::new(scale * theta.cos(), scale * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(Complex64::zero(), Complex64::new(0.0, 0.0));
        assert_eq!(Complex64::one(), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_powu_f64() {
        assert_eq!(2.0f64.powu(10), 1024.0);
        assert_eq!(3.0f64.powu(0), 1.0);
    }

    #[test]
    fn test_powu_complex_default_impl() {
        // i^2 = -1 via the binary-exponentiation default
        let i = Complex64::new(0.0, 1.0);
        let sq = i.powu(2);
        assert_relative_eq!(sq.re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(sq.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exp_complex() {
        // e^(i pi) = -1
        let z = Complex64::new(0.0, std::f64::consts::PI);
        let e = Ring::exp(z);
        assert_relative_eq!(e.re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(e.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exp_m1_default() {
        assert_relative_eq!(Ring::exp_m1(1.0f64), f64::exp(1.0) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_complex() {
        assert_relative_eq!(Complex64::new(3.0, 4.0).norm(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_powf_complex() {
        // (3+4i)^2 = -7 + 24i
        let z = Complex64::new(3.0, 4.0).powf(2.0);
        assert_relative_eq!(z.re, -7.0, epsilon = 1e-9);
        assert_relative_eq!(z.im, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_powf_complex_zero_base() {
        let z = Complex64::new(0.0, 0.0).powf(2.0);
        assert_eq!(z, Complex64::new(0.0, 0.0));
        let w = Complex64::new(0.0, 0.0).powf(0.0);
        assert_eq!(w, Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_division_hooks() {
        assert!(f64::DIV.is_some());
        assert!(f64::POWF.is_some());
        assert!(Complex64::DIV.is_some());
        let div = f64::DIV.unwrap();
        assert_eq!(div(6.0, 3.0), 2.0);
    }

    #[test]
    fn test_real_from_f64() {
        assert_eq!(f64::from_f64(2.5), 2.5);
        assert!(f64::from_f64(f64::INFINITY) > 1e300);
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(Capability::Ring.to_string(), "Ring");
        assert_eq!(Capability::NormedDivisionRing.to_string(), "NormedDivisionRing");
    }
}
