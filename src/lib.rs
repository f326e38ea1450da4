//! ease-core is a small library of deterministic *easing curves*.
//!
//! An easing curve remaps linear progress in `[0.0 .. 1.0]` to a
//! perceptually different progress, shaping how fast an animated value
//! (position, opacity, scale, ...) moves over time. Each curve is a plain,
//! stateless function, so evaluating it is cheap enough to do every frame and
//! safe to do from any thread.
//!
//! The curves are identified by [`Ease`](enum.Ease.html), grouped into
//! families (`Quad`, `Cubic`, `Bounce`, ...) and phases (`In`, `Out` and
//! `InOut`), plus `Linear`.
//!
//! ## Examples
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! use ease_core::Ease;
//!
//! // Evaluate a curve directly
//! assert_approx_eq!(ease_core::evaluate(Ease::InQuad, 0.5), 0.25);
//!
//! // Or look up its function once and call it every frame
//! let f = ease_core::get_function(Ease::OutQuad);
//! assert_approx_eq!(f(0.5), 0.75);
//!
//! // Curves can be picked by name, e.g. from a configuration file
//! let ease: Ease = "in_out_elastic".parse().unwrap();
//! assert_eq!(ease, Ease::InOutElastic);
//!
//! // Progress is never clamped, and some curves overshoot on purpose
//! assert!(ease_core::evaluate(Ease::OutBack, 0.5) > 1.0);
//! ```
//!
//! Curves can also be combined into new ones with [`Eased`](struct.Eased.html):
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! use ease_core::{ease, Ease};
//!
//! let curve = ease(Ease::InQuad)
//!     .in_out(Ease::OutBounce)
//!     .squeeze(0.25..=0.75);
//!
//! assert_approx_eq!(curve.eval(0.25), 0.0);
//! assert_approx_eq!(curve.eval(0.5), 0.5);
//! ```

mod curve;
mod ease;
mod error;
pub mod functions;

pub use curve::{ease, fun, linear, Curve, Eased, EasedBox};
pub use ease::{Ease, EasingFunction, Family, Phase};
pub use error::ParseEaseError;

/// Get the easing function for a curve.
///
/// This is the same as [`Ease::function`](enum.Ease.html#method.function).
pub fn get_function(ease: Ease) -> EasingFunction {
    ease.function()
}

/// Evaluate a curve at progress `t`.
///
/// This is the same as calling the function returned by
/// [`get_function`](fn.get_function.html).
///
/// # Example
/// ```
/// use ease_core::{evaluate, Ease};
///
/// assert_eq!(evaluate(Ease::InCubic, 0.5), 0.125);
/// assert_eq!(evaluate(Ease::Linear, 0.37), 0.37);
/// ```
pub fn evaluate(ease: Ease, t: f32) -> f32 {
    get_function(ease)(t)
}
