//! Complex numbers and the floating-point abstraction the transforms are
//! generic over.
//!
//! All transcendental functions go through [`libm`] so the crate builds
//! without `std`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Minimal float trait for the generic transforms.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Narrow (or pass through) an `f64`. Twiddle angles are evaluated in
    /// double precision and converted with this.
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn sin_cos(self) -> (Self, Self);
    fn abs(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
    fn pi() -> Self;
    fn epsilon() -> Self;

    fn to_degrees(self) -> Self {
        self * Self::from_f64(180.0) / Self::pi()
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypotf(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
    fn epsilon() -> Self {
        f32::EPSILON
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn epsilon() -> Self {
        f64::EPSILON
    }
}

/// A complex number in rectangular form.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn from_real(re: T) -> Self {
        Self::new(re, T::zero())
    }

    /// `e^{i theta}`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    pub fn from_polar(r: T, theta: T) -> Self {
        Self::expi(theta).scale(r)
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Multiply both components by a real factor.
    #[inline(always)]
    pub fn scale(self, k: T) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Magnitude `sqrt(re² + im²)`, computed without intermediate overflow.
    pub fn norm(self) -> T {
        self.re.hypot(self.im)
    }

    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle in radians, in `(-π, π]`.
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl<T: Float> Default for Complex<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::zero() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Float> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, k: T) -> Self {
        self.scale(k)
    }
}

impl<T: Float> AddAssign for Complex<T> {
    fn add_assign(&mut self, other: Self) {
        *self = Complex::<T>::add(*self, other);
    }
}

impl<T: Float> SubAssign for Complex<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = Complex::<T>::sub(*self, other);
    }
}

impl<T: Float> MulAssign for Complex<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = Complex::<T>::mul(*self, other);
    }
}

/// Element types accepted by [`fft`](crate::fft::fft) and
/// [`ifft`](crate::fft::ifft).
///
/// Real samples are lifted to complex values with a zero imaginary part.
pub trait Sample: Copy {
    type Real: Float;
    fn to_complex(self) -> Complex<Self::Real>;
}

impl Sample for f32 {
    type Real = f32;
    fn to_complex(self) -> Complex32 {
        Complex::from_real(self)
    }
}

impl Sample for f64 {
    type Real = f64;
    fn to_complex(self) -> Complex64 {
        Complex::from_real(self)
    }
}

impl<T: Float> Sample for Complex<T> {
    type Real = T;
    fn to_complex(self) -> Complex<T> {
        self
    }
}

impl<T: Float> Sample for (T, T) {
    type Real = T;
    fn to_complex(self) -> Complex<T> {
        Complex::new(self.0, self.1)
    }
}
