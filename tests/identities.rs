//! Algebraic identity sweeps across a grid of sample points.
//!
//! These exercise the library the way the unit tests can't: each identity
//! runs over a lattice of points in both half-planes so branch handling and
//! the exp/ln plumbing get hit away from the nice axes.

use argand::{functions, Complex};

const EPS: f64 = 1e-9;

fn close_c(a: Complex, b: Complex) -> bool {
    (a.re - b.re).abs() < EPS && (a.im - b.im).abs() < EPS
}

/// A lattice of sample points avoiding the origin and the real-axis branch
/// cuts of the inverse functions.
fn lattice() -> Vec<Complex> {
    let mut points = Vec::new();
    for i in -2..=2 {
        for j in -2..=2 {
            let z = Complex::new(i as f64 + 0.31, j as f64 + 0.17);
            points.push(z);
        }
    }
    points
}

#[test]
fn addition_and_multiplication_commute_on_the_lattice() {
    let points = lattice();
    for &a in &points {
        for &b in &points {
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
        }
    }
}

#[test]
fn multiplicative_inverse_round_trips_on_the_lattice() {
    for &a in &lattice() {
        assert!(close_c(a * a.reciprocal(), Complex::ONE), "failed at {}", a);
    }
}

#[test]
fn conjugation_is_an_exact_involution_on_the_lattice() {
    for &a in &lattice() {
        assert_eq!(a.conjugate().conjugate(), a);
    }
}

#[test]
fn exp_ln_round_trips_on_the_lattice() {
    for &a in &lattice() {
        assert!(
            close_c(functions::exp(functions::ln(a)), a),
            "exp(ln(z)) != z at {}",
            a
        );
    }
}

#[test]
fn pythagorean_identity_on_the_lattice() {
    for &a in &lattice() {
        let s = functions::sin(a);
        let c = functions::cos(a);
        assert!(close_c(s * s + c * c, Complex::ONE), "failed at {}", a);
    }
}

#[test]
fn exp_splits_into_sinh_plus_cosh() {
    for &a in &lattice() {
        let lhs = functions::exp(a);
        let rhs = functions::cosh(a) + functions::sinh(a);
        assert!(close_c(lhs, rhs), "exp != cosh + sinh at {}", a);
    }
}

#[test]
fn sin_of_i_z_relates_to_sinh() {
    // sin(iz) = i·sinh(z).
    for &a in &lattice() {
        let lhs = functions::sin(Complex::I * a);
        let rhs = Complex::I * functions::sinh(a);
        assert!(close_c(lhs, rhs), "failed at {}", a);
    }
}

#[test]
fn powc_agrees_with_repeated_multiplication() {
    for &a in &lattice() {
        let direct = a * a * a;
        let via_pow = a.powc(Complex::from_real(3.0));
        let err_re = (direct.re - via_pow.re).abs();
        let err_im = (direct.im - via_pow.im).abs();
        let scale = direct.abs().max(1.0);
        assert!(
            err_re / scale < 1e-9 && err_im / scale < 1e-9,
            "z^3 mismatch at {}",
            a
        );
    }
}

#[test]
fn principal_square_root_squares_back() {
    let half = Complex::from_real(0.5);
    for &a in &lattice() {
        let root = a.powc(half);
        assert!(close_c(root * root, a), "sqrt(z)^2 != z at {}", a);
        // The principal root lives in the right half-plane (or on its edge).
        assert!(root.re > -EPS, "non-principal root at {}", a);
    }
}

#[test]
fn gaussian_and_eisenstein_lattices_agree_on_ordinary_integers() {
    // Plain integers lie in both lattices.
    for i in -3..=3 {
        let z = Complex::from_real(i as f64);
        assert!(z.is_gaussian_integer());
        assert!(z.is_eisenstein_integer());
    }
    // ω is Eisenstein but not Gaussian.
    assert!(argand::OMEGA.is_eisenstein_integer());
    assert!(!argand::OMEGA.is_gaussian_integer());
    // i is Gaussian but not Eisenstein.
    assert!(Complex::I.is_gaussian_integer());
    assert!(!Complex::I.is_eisenstein_integer());
}
