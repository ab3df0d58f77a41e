// src/complex.rs

//! The immutable complex value type.
//!
//! A `Complex` is a plain `(re, im)` pair of `f64`s. Every operation returns
//! a fresh value; nothing here mutates in place, so values can be shared
//! across threads freely. Equality is exact floating-point equality of both
//! components, while the integer-classification predicates use a fixed
//! absolute tolerance. The two notions are intentionally different: callers
//! comparing values get bit-level semantics, callers asking "is this a
//! Gaussian/Eisenstein integer" get a 1e-6 neighborhood.
//!
//! Division by zero is not guarded anywhere in this module. `reciprocal` of
//! zero produces IEEE infinities/NaNs and they propagate; callers that need
//! to detect domain violations check `is_finite` on the result.

use once_cell::sync::Lazy;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Absolute tolerance for the integer-classification predicates.
const INT_TOLERANCE: f64 = 1e-6;

/// An immutable complex number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

/// The primitive cube root of unity, ω = −1/2 + i·√3/2.
///
/// Eisenstein integers are the lattice generated by 1 and ω. Needs a runtime
/// square root, hence a lazily initialized static rather than a `const`.
pub static OMEGA: Lazy<Complex> = Lazy::new(|| Complex::new(-0.5, 3.0_f64.sqrt() / 2.0));

impl Complex {
    /// The imaginary unit, 0 + 1i.
    pub const I: Complex = Complex::new(0.0, 1.0);
    /// The multiplicative identity, 1 + 0i.
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// −1 + 0i.
    pub const NEG_ONE: Complex = Complex::new(-1.0, 0.0);
    /// 2 + 0i.
    pub const TWO: Complex = Complex::new(2.0, 0.0);
    /// Euler's number as a complex value.
    pub const E: Complex = Complex::new(std::f64::consts::E, 0.0);
    /// π as a complex value.
    pub const PI: Complex = Complex::new(std::f64::consts::PI, 0.0);

    /// Creates a value from rectangular components.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Creates a value on the real axis.
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Creates a value from polar coordinates.
    #[inline]
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Self::new(magnitude * phase.cos(), magnitude * phase.sin())
    }

    /// Magnitude (modulus). Uses `hypot`, which stays accurate when the
    /// components are large enough that squaring them would overflow.
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Phase (argument) in radians, in (−π, π].
    #[inline]
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Phase in degrees, in (−180, 180].
    #[inline]
    pub fn phase_degrees(self) -> f64 {
        self.phase() * 180.0 / std::f64::consts::PI
    }

    /// Multiplies both components by a real scalar.
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self::new(k * self.re, k * self.im)
    }

    /// Complex conjugate.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Multiplicative inverse, (re, −im) / (re² + im²).
    ///
    /// Undefined at zero: the denominator vanishes and the components come
    /// back as infinities/NaNs rather than an error.
    #[inline]
    pub fn reciprocal(self) -> Self {
        let scale = self.re * self.re + self.im * self.im;
        Self::new(self.re / scale, -self.im / scale)
    }

    /// Complex exponentiation `self^b` for an arbitrary complex exponent.
    ///
    /// Computed as the four-factor product
    ///
    /// ```text
    /// e^(−b.im·φ) · |a|^b.re · polar(1, ln(|a|^b.im)) · polar(1, b.re·φ)
    /// ```
    ///
    /// where φ is the principal phase of `self`. All four factors use the
    /// same principal branch, which keeps roots and powers consistent with
    /// the rest of the library near branch cuts.
    pub fn powc(self, b: Complex) -> Self {
        let f1 = Complex::from_real((-b.im * self.phase()).exp());
        let f2 = Complex::from_real(self.abs().powf(b.re));
        let f3 = Complex::from_polar(1.0, self.abs().powf(b.im).ln());
        let f4 = Complex::from_polar(1.0, b.re * self.phase());
        f1 * f2 * f3 * f4
    }

    /// Coordinates (c, b) of this value in the Eisenstein basis (1, ω),
    /// i.e. the unique pair with `self = c + b·ω`.
    ///
    /// Shared by [`Complex::is_eisenstein_integer`] and the Eisenstein
    /// rendering so the basis transform lives in exactly one place.
    #[inline]
    pub fn eisenstein_coords(self) -> (f64, f64) {
        let b = self.im * 2.0 / 3.0_f64.sqrt();
        let c = self.re + b / 2.0;
        (c, b)
    }

    /// True if both components are within tolerance of an integer.
    pub fn is_gaussian_integer(self) -> bool {
        is_near_integer(self.re) && is_near_integer(self.im)
    }

    /// True if this value is within tolerance of the lattice c + b·ω.
    pub fn is_eisenstein_integer(self) -> bool {
        let (c, b) = self.eisenstein_coords();
        is_near_integer(c) && is_near_integer(b)
    }

    /// Renders in the Eisenstein basis as "c + bw" / "c - bw".
    ///
    /// When b is negative the raw (signed) value follows the minus sign,
    /// e.g. "0.0 - -1.0w"; callers that want a tidier sign fold it in
    /// themselves.
    pub fn to_eisenstein_string(self) -> String {
        let (c, b) = self.eisenstein_coords();
        if b >= 0.0 {
            format!("{:?} + {:?}w", c, b)
        } else {
            format!("{:?} - {:?}w", c, b)
        }
    }
}

/// True if `x` is within [`INT_TOLERANCE`] of its floor or its ceiling.
///
/// A disjunction against floor and ceiling separately, not
/// `|x − round(x)| ≤ tol`. The two differ near half-integers, where the
/// disjunction is marginally looser; the classification predicates are
/// defined in terms of this form.
#[inline]
fn is_near_integer(x: f64) -> bool {
    (x - x.floor()).abs() <= INT_TOLERANCE || (x - x.ceil()).abs() <= INT_TOLERANCE
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    /// `a / b` as `a · b⁻¹`. Division by zero follows `reciprocal`.
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        self * rhs.reciprocal()
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Complex {
        Complex::from_real(re)
    }
}

impl fmt::Display for Complex {
    /// Renders "re", "im i", "re + im i" or "re - |im| i" depending on
    /// which components are zero/negative. Components print with at least
    /// one decimal ("1.0", not "1").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            write!(f, "{:?}", self.re)
        } else if self.re == 0.0 {
            write!(f, "{:?}i", self.im)
        } else if self.im < 0.0 {
            write!(f, "{:?} - {:?}i", self.re, -self.im)
        } else {
            write!(f, "{:?} + {:?}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn close_c(a: Complex, b: Complex) -> bool {
        close(a.re, b.re) && close(a.im, b.im)
    }

    #[test]
    fn rectangular_and_real_constructors() {
        let z = Complex::new(3.0, -4.0);
        assert_eq!(z.re, 3.0);
        assert_eq!(z.im, -4.0);
        assert_eq!(Complex::from_real(2.5), Complex::new(2.5, 0.0));
    }

    #[test]
    fn polar_constructor() {
        let z = Complex::from_polar(2.0, std::f64::consts::FRAC_PI_2);
        assert!(close(z.re, 0.0));
        assert!(close(z.im, 2.0));
    }

    #[test]
    fn addition_and_multiplication_commute() {
        let a = Complex::new(1.5, -2.0);
        let b = Complex::new(-0.25, 3.0);
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
    }

    #[test]
    fn multiplication_follows_field_rule() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i − 8 = −5 + 10i
        let z = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(z, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn reciprocal_round_trip() {
        let a = Complex::new(2.0, -7.0);
        assert!(close_c(a * a.reciprocal(), Complex::ONE));
    }

    #[test]
    fn conjugate_is_involution() {
        let a = Complex::new(0.1, -9.25);
        assert_eq!(a.conjugate().conjugate(), a);
    }

    #[test]
    fn scale_and_negate() {
        let a = Complex::new(1.0, -2.0);
        assert_eq!(a.scale(3.0), Complex::new(3.0, -6.0));
        assert_eq!(-a, Complex::new(-1.0, 2.0));
    }

    #[test]
    fn division_by_zero_degrades_to_non_finite() {
        let z = Complex::ONE / Complex::new(0.0, 0.0);
        assert!(!z.re.is_finite() || z.re.is_nan());
        assert!(!z.im.is_finite() || z.im.is_nan());
    }

    #[test]
    fn magnitude_and_phase_of_one_plus_i() {
        let z = Complex::new(1.0, 1.0);
        assert!((z.abs() - 1.4142135).abs() < 1e-6);
        assert!(close(z.phase_degrees(), 45.0));
        assert_eq!(format!("{}", z), "1.0 + 1.0i");
    }

    #[test]
    fn magnitude_survives_huge_components() {
        // re² would overflow; hypot must not.
        let z = Complex::new(1e200, 1e200);
        assert!(z.abs().is_finite());
    }

    #[test]
    fn display_covers_all_sign_shapes() {
        assert_eq!(format!("{}", Complex::new(2.0, 0.0)), "2.0");
        assert_eq!(format!("{}", Complex::new(0.0, 3.5)), "3.5i");
        assert_eq!(format!("{}", Complex::new(1.0, -2.0)), "1.0 - 2.0i");
        assert_eq!(format!("{}", Complex::new(-1.5, 0.25)), "-1.5 + 0.25i");
    }

    #[test]
    fn eisenstein_string_keeps_raw_sign() {
        // ω itself is 0 + 1ω.
        let s = OMEGA.to_eisenstein_string();
        assert!(s.ends_with("w"));
        assert!(s.contains(" + "));
        // Negative b prints the raw value after the minus sign.
        let t = Complex::new(0.5, -3.0_f64.sqrt() / 2.0).to_eisenstein_string();
        assert!(t.contains(" - -1"));
    }

    #[test]
    fn gaussian_integer_classification() {
        assert!(Complex::new(3.0, 4.0).is_gaussian_integer());
        assert!(Complex::new(3.0 + 1e-8, 4.0).is_gaussian_integer());
        assert!(!Complex::new(3.4, 4.0).is_gaussian_integer());
    }

    #[test]
    fn omega_is_an_eisenstein_integer() {
        let (c, b) = OMEGA.eisenstein_coords();
        assert!(close(c, 0.0));
        assert!(close(b, 1.0));
        assert!(OMEGA.is_eisenstein_integer());
        // 1 + 0ω and an off-lattice point.
        assert!(Complex::ONE.is_eisenstein_integer());
        assert!(!Complex::new(0.3, 0.1).is_eisenstein_integer());
    }

    #[test]
    fn near_integer_accepts_floor_and_ceiling_sides() {
        assert!(is_near_integer(2.0 + 5e-7));
        assert!(is_near_integer(3.0 - 5e-7));
        assert!(!is_near_integer(2.5));
    }

    #[test]
    fn equality_is_exact_not_tolerant() {
        // A value the predicates accept as integer still compares unequal.
        let nudged = Complex::new(3.0 + 1e-8, 4.0);
        assert!(nudged.is_gaussian_integer());
        assert_ne!(nudged, Complex::new(3.0, 4.0));
    }

    #[test]
    fn powc_squares_the_imaginary_unit() {
        let z = Complex::I.powc(Complex::TWO);
        assert!(close_c(z, Complex::NEG_ONE));
    }

    #[test]
    fn powc_principal_square_root() {
        // √(−1) on the principal branch is i.
        let z = Complex::NEG_ONE.powc(Complex::from_real(0.5));
        assert!(close_c(z, Complex::I));
    }

    #[test]
    fn constants_have_expected_components() {
        assert_eq!(Complex::I, Complex::new(0.0, 1.0));
        assert_eq!(Complex::E.im, 0.0);
        assert_eq!(Complex::PI.re, std::f64::consts::PI);
        assert!(close(OMEGA.abs(), 1.0));
        // ω³ = 1.
        let cube = *OMEGA * *OMEGA * *OMEGA;
        assert!(close_c(cube, Complex::ONE));
    }
}
