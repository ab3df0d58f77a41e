// src/functions.rs

//! Elementary and transcendental functions over the complex plane.
//!
//! Only two operations here are primitive: [`exp`] and [`ln`]. The rest of
//! the trigonometric, hyperbolic, and inverse families are algebraic
//! compositions of those two, [`Complex::powc`], and the four field
//! operations. No series expansions: correctness reduces to the
//! correctness of exp/ln/powc, and every square-root sub-expression goes
//! through `powc(0.5)` so the whole library shares one principal-branch
//! convention. Mixing branch choices here would make neighboring
//! functions disagree near the cuts.
//!
//! All functions are pure and total over the plane except at isolated
//! poles (reciprocal-family zeros, ln at the origin), where IEEE
//! infinities/NaNs come back instead of errors.

use crate::complex::Complex;

/// Complex exponential, `e^a`.
#[inline]
pub fn exp(a: Complex) -> Complex {
    Complex::E.powc(a)
}

/// Principal-branch natural logarithm, `ln|a| + i·phase(a)`.
///
/// The imaginary part lies in (−π, π]. `ln(0)` is −∞ + 0i.
#[inline]
pub fn ln(a: Complex) -> Complex {
    Complex::new(a.abs().ln(), a.phase())
}

/// Sine: (e^(ia) − e^(−ia)) / 2i.
pub fn sin(a: Complex) -> Complex {
    (exp(a * Complex::I) - exp(-a * Complex::I)) / (Complex::I * Complex::TWO)
}

/// Cosine: (e^(ia) + e^(−ia)) / 2.
pub fn cos(a: Complex) -> Complex {
    (exp(a * Complex::I) + exp(-a * Complex::I)) / Complex::TWO
}

/// Tangent: sin/cos. Poles at the zeros of cosine.
pub fn tan(a: Complex) -> Complex {
    sin(a) / cos(a)
}

/// Cosecant: 1/sin.
pub fn csc(a: Complex) -> Complex {
    Complex::ONE / sin(a)
}

/// Secant: 1/cos.
pub fn sec(a: Complex) -> Complex {
    Complex::ONE / cos(a)
}

/// Cotangent: 1/tan.
pub fn cot(a: Complex) -> Complex {
    Complex::ONE / tan(a)
}

/// Inverse sine: −i·ln(ia + (1 − a²)^½).
pub fn arcsin(a: Complex) -> Complex {
    let root = (Complex::ONE - a.powc(Complex::TWO)).powc(Complex::from_real(0.5));
    -Complex::I * ln(Complex::I * a + root)
}

/// Inverse cosine: π/2 − arcsin(a).
pub fn arccos(a: Complex) -> Complex {
    Complex::PI / Complex::TWO - arcsin(a)
}

/// Inverse tangent: (i/2)·ln((1 − ia)/(1 + ia)).
pub fn arctan(a: Complex) -> Complex {
    let ratio = (Complex::ONE - Complex::I * a) / (Complex::ONE + Complex::I * a);
    Complex::I / Complex::TWO * ln(ratio)
}

/// Inverse cosecant: arcsin(1/a).
pub fn arccsc(a: Complex) -> Complex {
    arcsin(Complex::ONE / a)
}

/// Inverse secant: arccos(1/a).
pub fn arcsec(a: Complex) -> Complex {
    arccos(Complex::ONE / a)
}

/// Inverse cotangent: arctan(1/a).
pub fn arccot(a: Complex) -> Complex {
    arctan(Complex::ONE / a)
}

/// Hyperbolic sine: (e^a − e^(−a)) / 2.
pub fn sinh(a: Complex) -> Complex {
    (exp(a) - exp(-a)) / Complex::TWO
}

/// Hyperbolic cosine: (e^a + e^(−a)) / 2.
pub fn cosh(a: Complex) -> Complex {
    (exp(a) + exp(-a)) / Complex::TWO
}

/// Hyperbolic tangent: sinh/cosh.
pub fn tanh(a: Complex) -> Complex {
    sinh(a) / cosh(a)
}

/// Hyperbolic cosecant: 1/sinh.
pub fn csch(a: Complex) -> Complex {
    Complex::ONE / sinh(a)
}

/// Hyperbolic secant: 1/cosh.
pub fn sech(a: Complex) -> Complex {
    Complex::ONE / cosh(a)
}

/// Hyperbolic cotangent: 1/tanh.
pub fn coth(a: Complex) -> Complex {
    Complex::ONE / tanh(a)
}

/// Inverse hyperbolic sine: ln(a + (a² + 1)^½).
pub fn arcsinh(a: Complex) -> Complex {
    let root = (a.powc(Complex::TWO) + Complex::ONE).powc(Complex::from_real(0.5));
    ln(a + root)
}

/// Inverse hyperbolic cosine: ln(a + (a² − 1)^½).
pub fn arccosh(a: Complex) -> Complex {
    let root = (a.powc(Complex::TWO) - Complex::ONE).powc(Complex::from_real(0.5));
    ln(a + root)
}

/// Inverse hyperbolic tangent: (1/2)·ln((a + 1)/(1 − a)).
pub fn arctanh(a: Complex) -> Complex {
    Complex::from_real(0.5) * ln((a + Complex::ONE) / (Complex::ONE - a))
}

/// Inverse hyperbolic cosecant: arcsinh(1/a).
pub fn arccsch(a: Complex) -> Complex {
    arcsinh(Complex::ONE / a)
}

/// Inverse hyperbolic secant: arccosh(1/a).
pub fn arcsech(a: Complex) -> Complex {
    arccosh(Complex::ONE / a)
}

/// Inverse hyperbolic cotangent: arctanh(1/a).
pub fn arccoth(a: Complex) -> Complex {
    arctanh(Complex::ONE / a)
}
