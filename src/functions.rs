//! The easing functions themselves.
//!
//! Every function maps a progress value `t` to an eased progress value. The
//! functions are meant for `t` in `[0.0 .. 1.0]`, where they start at `0.0`
//! and end at `1.0`, but they never clamp their input. Curves like
//! [`in_back`](fn.in_back.html) or [`out_elastic`](fn.out_elastic.html)
//! deliberately leave `[0.0 .. 1.0]` in between.
//!
//! All functions are generic over [`num_traits::Float`], so they can be used
//! with both `f32` and `f64`:
//! ```
//! # use assert_approx_eq::assert_approx_eq;
//! use ease_core::functions;
//!
//! assert_approx_eq!(functions::in_quad(0.5f32), 0.25);
//! assert_approx_eq!(functions::in_quad(0.5f64), 0.25);
//! ```

use num_traits::{Float, FloatConst, NumCast};

/// Tolerance used by [`is_equal_approx`](fn.is_equal_approx.html).
pub const EQUAL_APPROX_EPSILON: f64 = 1e-5;

#[inline]
fn lit<F: Float>(x: f64) -> F {
    <F as NumCast>::from(x).unwrap_or_else(F::nan)
}

/// `13·(π/2)`, the angular frequency of the elastic curves.
#[inline]
fn elastic_freq<F: Float + FloatConst>() -> F {
    lit::<F>(13.0) * F::FRAC_PI_2()
}

/// Returns true if `a` and `b` are equal up to a small tolerance.
///
/// The tolerance is `1e-5`, scaled by `|a|` once `|a|` exceeds one.
///
/// # Example
/// ```
/// use ease_core::functions::is_equal_approx;
///
/// assert!(is_equal_approx(0.0f32, 0.000_001));
/// assert!(!is_equal_approx(0.0f32, 0.001));
/// assert!(is_equal_approx(1000.0f32, 1000.005));
/// ```
pub fn is_equal_approx<F: Float>(a: F, b: F) -> bool {
    if a == b {
        return true;
    }

    let epsilon = lit::<F>(EQUAL_APPROX_EPSILON);
    let tolerance = (epsilon * a.abs()).max(epsilon);

    (a - b).abs() < tolerance
}

pub fn linear<F: Float>(t: F) -> F {
    t
}

pub fn in_back<F: Float + FloatConst>(t: F) -> F {
    t * t * t - t * (t * F::PI()).sin()
}

pub fn out_back<F: Float + FloatConst>(t: F) -> F {
    F::one() - in_back(F::one() - t)
}

pub fn in_out_back<F: Float + FloatConst>(t: F) -> F {
    let half = lit::<F>(0.5);
    let two = lit::<F>(2.0);

    if t < half {
        half * in_back(two * t)
    } else {
        half * out_back(two * t - F::one()) + half
    }
}

pub fn in_bounce<F: Float>(t: F) -> F {
    F::one() - out_bounce(F::one() - t)
}

/// A bouncing ball settling at `1.0`, built from four parabolic segments.
///
/// The segments meet at `t = 4/11`, `t = 8/11` and `t = 9/10`.
pub fn out_bounce<F: Float>(t: F) -> F {
    let t2 = t * t;

    if t < lit(4.0 / 11.0) {
        lit::<F>(121.0) * t2 / lit(16.0)
    } else if t < lit(8.0 / 11.0) {
        lit::<F>(363.0 / 40.0) * t2 - lit::<F>(99.0 / 10.0) * t + lit(17.0 / 5.0)
    } else if t < lit(9.0 / 10.0) {
        lit::<F>(4356.0 / 361.0) * t2 - lit::<F>(35442.0 / 1805.0) * t + lit(16061.0 / 1805.0)
    } else {
        lit::<F>(54.0 / 5.0) * t2 - lit::<F>(513.0 / 25.0) * t + lit(268.0 / 25.0)
    }
}

pub fn in_out_bounce<F: Float>(t: F) -> F {
    let half = lit::<F>(0.5);
    let two = lit::<F>(2.0);

    if t < half {
        half * in_bounce(two * t)
    } else {
        half * out_bounce(two * t - F::one()) + half
    }
}

pub fn in_circ<F: Float>(t: F) -> F {
    F::one() - (F::one() - t * t).sqrt()
}

pub fn out_circ<F: Float>(t: F) -> F {
    ((lit::<F>(2.0) - t) * t).sqrt()
}

pub fn in_out_circ<F: Float>(t: F) -> F {
    let half = lit::<F>(0.5);
    let two = lit::<F>(2.0);

    if t < half {
        half * (F::one() - (F::one() - lit::<F>(4.0) * (t * t)).sqrt())
    } else {
        half * ((-(two * t - lit(3.0)) * (two * t - F::one())).sqrt() + F::one())
    }
}

pub fn in_cubic<F: Float>(t: F) -> F {
    t * t * t
}

pub fn out_cubic<F: Float>(t: F) -> F {
    in_cubic(t - F::one()) + F::one()
}

pub fn in_out_cubic<F: Float>(t: F) -> F {
    let half = lit::<F>(0.5);
    let two = lit::<F>(2.0);

    if t < half {
        lit::<F>(4.0) * t * t * t
    } else {
        half * in_cubic(two * t - two) + F::one()
    }
}

/// A sine wave of frequency `13·(π/2)` under an exponentially growing
/// envelope.
///
/// # Example
/// The curve dips below zero before it reaches one:
/// ```
/// let lowest = (0..100)
///     .map(|i| ease_core::functions::in_elastic(i as f32 / 100.0))
///     .fold(f32::INFINITY, f32::min);
///
/// assert!(lowest < 0.0);
/// ```
pub fn in_elastic<F: Float + FloatConst>(t: F) -> F {
    (elastic_freq::<F>() * t).sin() * (lit::<F>(10.0) * (t - F::one())).exp2()
}

pub fn out_elastic<F: Float + FloatConst>(t: F) -> F {
    (-elastic_freq::<F>() * (t + F::one())).sin() * (lit::<F>(-10.0) * t).exp2() + F::one()
}

pub fn in_out_elastic<F: Float + FloatConst>(t: F) -> F {
    let half = lit::<F>(0.5);
    let two = lit::<F>(2.0);
    let ten = lit::<F>(10.0);

    if t < half {
        half * (elastic_freq::<F>() * (two * t)).sin() * (ten * (two * t - F::one())).exp2()
    } else {
        half * ((-elastic_freq::<F>() * (two * t - F::one() + F::one())).sin()
            * (-ten * (two * t - F::one())).exp2()
            + two)
    }
}

/// Exponential ease-in.
///
/// For `t` approximately zero, `t` is returned unchanged, so that the curve
/// starts exactly at zero instead of at `2^-10`.
pub fn in_expo<F: Float>(t: F) -> F {
    if is_equal_approx(F::zero(), t) {
        t
    } else {
        (lit::<F>(10.0) * (t - F::one())).exp2()
    }
}

/// Exponential ease-out.
///
/// For `t` approximately one, `t` is returned unchanged.
pub fn out_expo<F: Float>(t: F) -> F {
    if is_equal_approx(F::one(), t) {
        t
    } else {
        F::one() - (lit::<F>(-10.0) * t).exp2()
    }
}

pub fn in_out_expo<F: Float>(t: F) -> F {
    if is_equal_approx(F::zero(), t) || is_equal_approx(F::one(), t) {
        return t;
    }

    let half = lit::<F>(0.5);
    let twenty = lit::<F>(20.0);
    let ten = lit::<F>(10.0);

    if t < half {
        half * (twenty * t - ten).exp2()
    } else {
        -half * (-twenty * t + ten).exp2() + F::one()
    }
}

pub fn in_quad<F: Float>(t: F) -> F {
    t * t
}

pub fn out_quad<F: Float>(t: F) -> F {
    -t * (t - lit(2.0))
}

pub fn in_out_quad<F: Float>(t: F) -> F {
    let two = lit::<F>(2.0);

    if t < lit(0.5) {
        two * t * t
    } else {
        -two * t * t + lit::<F>(4.0) * t - F::one()
    }
}

pub fn in_quart<F: Float>(t: F) -> F {
    t * t * t * t
}

pub fn out_quart<F: Float>(t: F) -> F {
    let u = t - F::one();

    u * u * u * (F::one() - t) + F::one()
}

pub fn in_out_quart<F: Float>(t: F) -> F {
    let eight = lit::<F>(8.0);

    if t < lit(0.5) {
        eight * in_quart(t)
    } else {
        -eight * in_quart(t - F::one()) + F::one()
    }
}

pub fn in_quint<F: Float>(t: F) -> F {
    t * t * t * t * t
}

pub fn out_quint<F: Float>(t: F) -> F {
    in_quint(t - F::one()) + F::one()
}

pub fn in_out_quint<F: Float>(t: F) -> F {
    let half = lit::<F>(0.5);
    let two = lit::<F>(2.0);

    if t < half {
        lit::<F>(16.0) * in_quint(t)
    } else {
        half * in_quint(two * t - two) + F::one()
    }
}

pub fn in_sine<F: Float + FloatConst>(t: F) -> F {
    ((t - F::one()) * F::FRAC_PI_2()).sin() + F::one()
}

pub fn out_sine<F: Float + FloatConst>(t: F) -> F {
    (t * F::FRAC_PI_2()).sin()
}

pub fn in_out_sine<F: Float + FloatConst>(t: F) -> F {
    lit::<F>(0.5) * (F::one() - (t * F::PI()).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_approx_eq::assert_approx_eq;
    use easer::functions::{Circ, Cubic, Easing, Expo, Quad, Quart, Quint, Sine};

    fn samples() -> impl Iterator<Item = f64> {
        (0..=200).map(|i| i as f64 / 200.0)
    }

    #[test]
    fn out_bounce_segments_meet() {
        for &split in &[4.0 / 11.0, 8.0 / 11.0, 0.9] {
            assert_approx_eq!(out_bounce(split - 1e-9), out_bounce(split), 1e-3);
        }

        assert_approx_eq!(out_bounce(0.9f32), 1.0, 1e-4);
        assert_approx_eq!(out_bounce(4.0f64 / 11.0), 1.0, 1e-9);
        assert_approx_eq!(out_bounce(8.0f64 / 11.0), 1.0, 1e-9);
    }

    #[test]
    fn expo_endpoints_pass_through() {
        assert_eq!(in_expo(0.0f32), 0.0);
        assert_eq!(in_expo(0.000_001f32), 0.000_001);
        assert_eq!(out_expo(1.0f32), 1.0);
        assert_eq!(in_out_expo(0.0f32), 0.0);
        assert_eq!(in_out_expo(1.0f32), 1.0);

        // Just outside the tolerance, the formula takes over again.
        assert_approx_eq!(in_expo(0.001f64), 2.0f64.powf(10.0 * (0.001 - 1.0)), 1e-12);
    }

    #[test]
    fn is_equal_approx_scales_with_magnitude() {
        assert!(is_equal_approx(1.0f64, 1.0 + 9e-6));
        assert!(!is_equal_approx(1.0f64, 1.0 + 2e-5));
        assert!(is_equal_approx(100.0f64, 100.0 + 9e-4));
        assert!(!is_equal_approx(100.0f64, 100.0 + 2e-3));
        assert!(!is_equal_approx(0.0f64, f64::NAN));
    }

    #[test]
    fn elastic_constants() {
        // sin(13·π/2) == 1, so the curve ends exactly at its envelope.
        assert_approx_eq!(in_elastic(1.0f64), 1.0, 1e-12);
        assert_approx_eq!(out_elastic(0.0f64), 0.0, 1e-12);
        assert_approx_eq!(in_out_elastic(0.5f64), 0.5, 1e-12);

        // Overshoots past one on the way out.
        assert!(samples().map(out_elastic).any(|v| v > 1.0));
    }

    #[test]
    fn back_overshoots() {
        assert!(samples().map(in_back).any(|v| v < 0.0));
        assert!(samples().map(out_back).any(|v| v > 1.0));
    }

    #[test]
    fn input_is_not_clamped() {
        assert_approx_eq!(in_quad(2.0f64), 4.0);
        assert_approx_eq!(in_cubic(-1.0f64), -1.0);
        assert_approx_eq!(linear(-3.5f64), -3.5);
        assert!(in_circ(2.0f64).is_nan());
    }

    #[test]
    fn matches_penner_equations() {
        let pairs: &[(fn(f64) -> f64, fn(f64) -> f64)] = &[
            (in_quad, |t| Quad::ease_in(t, 0.0, 1.0, 1.0)),
            (out_quad, |t| Quad::ease_out(t, 0.0, 1.0, 1.0)),
            (in_out_quad, |t| Quad::ease_in_out(t, 0.0, 1.0, 1.0)),
            (in_cubic, |t| Cubic::ease_in(t, 0.0, 1.0, 1.0)),
            (out_cubic, |t| Cubic::ease_out(t, 0.0, 1.0, 1.0)),
            (in_out_cubic, |t| Cubic::ease_in_out(t, 0.0, 1.0, 1.0)),
            (in_quart, |t| Quart::ease_in(t, 0.0, 1.0, 1.0)),
            (out_quart, |t| Quart::ease_out(t, 0.0, 1.0, 1.0)),
            (in_out_quart, |t| Quart::ease_in_out(t, 0.0, 1.0, 1.0)),
            (in_quint, |t| Quint::ease_in(t, 0.0, 1.0, 1.0)),
            (out_quint, |t| Quint::ease_out(t, 0.0, 1.0, 1.0)),
            (in_out_quint, |t| Quint::ease_in_out(t, 0.0, 1.0, 1.0)),
            (in_sine, |t| Sine::ease_in(t, 0.0, 1.0, 1.0)),
            (out_sine, |t| Sine::ease_out(t, 0.0, 1.0, 1.0)),
            (in_out_sine, |t| Sine::ease_in_out(t, 0.0, 1.0, 1.0)),
            (in_circ, |t| Circ::ease_in(t, 0.0, 1.0, 1.0)),
            (out_circ, |t| Circ::ease_out(t, 0.0, 1.0, 1.0)),
            (in_out_circ, |t| Circ::ease_in_out(t, 0.0, 1.0, 1.0)),
        ];

        for (ours, penner) in pairs {
            for t in samples() {
                assert_approx_eq!(ours(t), penner(t), 1e-9);
            }
        }

        // Away from the endpoints, where the tolerance branch takes over.
        for t in samples().filter(|&t| t > 0.01 && t < 0.99) {
            assert_approx_eq!(in_expo(t), Expo::ease_in(t, 0.0, 1.0, 1.0), 1e-9);
            assert_approx_eq!(out_expo(t), Expo::ease_out(t, 0.0, 1.0, 1.0), 1e-9);
            assert_approx_eq!(in_out_expo(t), Expo::ease_in_out(t, 0.0, 1.0, 1.0), 1e-9);
        }
    }
}
