use std::marker::PhantomData;
use std::ops::{Deref, RangeInclusive};

use num_traits::{Float, One};

use crate::Ease;

/// A `Curve` maps progress `t` to eased progress of the same type.
///
/// This is implemented by [`Ease`](enum.Ease.html) and by everything that the
/// combinators of [`Eased`](struct.Eased.html) produce.
///
/// ## Implementation details
/// We define this trait instead of just using `Fn(T) -> T` so that the
/// combinators can return named closure types, and so that
/// [`Eased`](struct.Eased.html) can hold either an `Ease` or an arbitrary
/// function. The progress type is an associated type because a curve only
/// ever works with one of them.
pub trait Curve {
    /// The progress type. Usually `f32`.
    type T;

    /// Evaluate the curve at progress `t`.
    fn eval(&self, t: Self::T) -> Self::T;
}

impl<'a, C> Curve for &'a C
where
    C: Curve,
{
    type T = C::T;

    fn eval(&self, t: Self::T) -> Self::T {
        (*self).eval(t)
    }
}

impl<T> Curve for Box<dyn Curve<T = T>> {
    type T = T;

    fn eval(&self, t: Self::T) -> Self::T {
        self.deref().eval(t)
    }
}

impl Curve for Ease {
    type T = f32;

    fn eval(&self, t: f32) -> f32 {
        Ease::eval(*self, t)
    }
}

/// `Eased` wraps any [`Curve`](trait.Curve.html) and provides methods to
/// derive new curves from it.
///
/// None of the combinators allocate or keep state; evaluating the result is
/// as pure as evaluating the curves it was built from.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use ease_core::{ease, Ease};
///
/// // Cubic ease-in for the first half, bounce out for the second half.
/// let curve = ease(Ease::InCubic).in_out(Ease::OutBounce);
///
/// assert_approx_eq!(curve.eval(0.0), 0.0);
/// assert_approx_eq!(curve.eval(0.25), 0.5 * Ease::InCubic.eval(0.5f32));
/// assert_approx_eq!(curve.eval(1.0), 1.0, 1e-5);
/// ```
#[derive(Clone, Debug)]
pub struct Eased<C>(pub C);

pub type EasedBox<T> = Eased<Box<dyn Curve<T = T>>>;

impl<C> Eased<C>
where
    C: Curve,
{
    /// Evaluate the curve at progress `t`.
    pub fn eval(&self, t: C::T) -> C::T {
        self.0.eval(t)
    }

    /// Transform the eased values of a curve with the given function.
    pub fn map(self, f: impl Fn(C::T) -> C::T) -> Eased<impl Curve<T = C::T>> {
        Eased(ThenClosure(self.0, fun(f).0))
    }

    /// Transform progress with the given function before evaluating the curve.
    ///
    /// # Example
    /// Play a curve backwards:
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use ease_core::{ease, Ease};
    ///
    /// let curve = ease(Ease::InQuad).map_time(|t| 1.0 - t);
    ///
    /// assert_approx_eq!(curve.eval(0.0), 1.0);
    /// assert_approx_eq!(curve.eval(1.0), 0.0);
    /// ```
    pub fn map_time(self, f: impl Fn(C::T) -> C::T) -> Eased<impl Curve<T = C::T>> {
        Eased(ThenClosure(fun(f).0, self.0))
    }

    /// Feed the eased values of `self` into `next` as progress.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use ease_core::{ease, Ease};
    ///
    /// let curve = ease(Ease::InQuad).then(Ease::InQuad);
    ///
    /// assert_approx_eq!(curve.eval(0.5), Ease::InQuart.eval(0.5f32));
    /// ```
    pub fn then<D, A>(self, next: A) -> Eased<impl Curve<T = C::T>>
    where
        D: Curve<T = C::T>,
        A: Into<Eased<D>>,
    {
        Eased(ThenClosure(self.0, next.into().0))
    }

    /// Converts from `Eased<C>` to `Eased<&C>`.
    pub fn as_ref(&self) -> Eased<&C> {
        Eased(&self.0)
    }
}

impl<C> Eased<C>
where
    C: Curve + 'static,
{
    /// Returns a boxed version of this curve.
    ///
    /// This allows storing curves of different types together, e.g. when they
    /// are picked at runtime.
    pub fn into_box(self) -> EasedBox<C::T> {
        Eased(Box::new(self.0))
    }
}

impl<C> Eased<C>
where
    C: Curve,
    C::T: Float,
{
    /// Mirror a curve through the point `(0.5, 0.5)`, i.e. evaluate
    /// `1 - c(1 - t)`.
    ///
    /// This turns an `In` curve into its `Out` counterpart and vice versa.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use ease_core::{ease, Ease};
    ///
    /// let curve = ease(Ease::InQuad).mirror();
    ///
    /// assert_approx_eq!(curve.eval(0.3), Ease::OutQuad.eval(0.3f32));
    /// ```
    pub fn mirror(self) -> Eased<impl Curve<T = C::T>> {
        Eased(MirrorClosure(self.0))
    }

    /// Play `self` squeezed into the first half of progress and `out`
    /// squeezed into the second half, each scaled to cover half of the value
    /// range.
    ///
    /// With an `In` curve and its `Out` counterpart, this yields the
    /// corresponding `InOut` curve.
    pub fn in_out<D, A>(self, out: A) -> Eased<impl Curve<T = C::T>>
    where
        D: Curve<T = C::T>,
        A: Into<Eased<D>>,
    {
        Eased(InOutClosure(self.0, out.into().0))
    }

    /// Transform a curve in time, so that its progress `[0 .. 1]` is shifted
    /// and scaled into the given `range`.
    ///
    /// Progress is not clamped: outside of `range`, the curve is evaluated
    /// outside of `[0 .. 1]`.
    ///
    /// # Example
    /// Delay a curve until progress `0.5`:
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use ease_core::{ease, Ease};
    ///
    /// let curve = ease(Ease::InQuad).squeeze(0.5..=1.0);
    ///
    /// assert_approx_eq!(curve.eval(0.5), 0.0);
    /// assert_approx_eq!(curve.eval(0.75), 0.25);
    /// assert_approx_eq!(curve.eval(1.0), 1.0);
    /// ```
    pub fn squeeze(self, range: RangeInclusive<C::T>) -> Eased<impl Curve<T = C::T>> {
        let time_shift = *range.start();
        let time_scale = C::T::one() / (*range.end() - *range.start());

        self.map_time(move |t| (t - time_shift) * time_scale)
    }

    /// Given eased values in `[0.0 .. 1.0]`, this function transforms the
    /// values so that they are in `[min .. max]`.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use ease_core::{ease, Ease};
    ///
    /// let curve = ease(Ease::OutCubic).scale_min_max(-3.0, 10.0);
    ///
    /// assert_approx_eq!(curve.eval(0.0), -3.0);
    /// assert_approx_eq!(curve.eval(1.0), 10.0);
    /// ```
    pub fn scale_min_max(self, min: C::T, max: C::T) -> Eased<impl Curve<T = C::T>> {
        self.map(move |v| v * (max - min) + min)
    }
}

impl From<Ease> for Eased<Ease> {
    fn from(ease: Ease) -> Self {
        Eased(ease)
    }
}

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct ThenClosure<C, D>(C, D);

impl<C, D> Curve for ThenClosure<C, D>
where
    C: Curve,
    D: Curve<T = C::T>,
{
    type T = C::T;

    fn eval(&self, t: C::T) -> C::T {
        self.1.eval(self.0.eval(t))
    }
}

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct MirrorClosure<C>(C);

impl<C> Curve for MirrorClosure<C>
where
    C: Curve,
    C::T: Float,
{
    type T = C::T;

    fn eval(&self, t: C::T) -> C::T {
        C::T::one() - self.0.eval(C::T::one() - t)
    }
}

#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct InOutClosure<C, D>(C, D);

impl<C, D> Curve for InOutClosure<C, D>
where
    C: Curve,
    C::T: Float,
    D: Curve<T = C::T>,
{
    type T = C::T;

    fn eval(&self, t: C::T) -> C::T {
        let one = C::T::one();
        let two = one + one;
        let half = one / two;

        if t < half {
            half * self.0.eval(two * t)
        } else {
            half * self.1.eval(two * t - one) + half
        }
    }
}

struct WrapFn<T, F: Fn(T) -> T>(F, PhantomData<T>);

impl<T, F> From<F> for Eased<WrapFn<T, F>>
where
    F: Fn(T) -> T,
{
    fn from(f: F) -> Self {
        Eased(WrapFn(f, PhantomData))
    }
}

impl<T, F> Curve for WrapFn<T, F>
where
    F: Fn(T) -> T,
{
    type T = T;

    fn eval(&self, t: T) -> T {
        self.0(t)
    }
}

/// Turn any function `Fn(T) -> T` into a curve.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// fn smoothstep(t: f32) -> f32 {
///     t * t * (3.0 - 2.0 * t)
/// }
///
/// let curve = ease_core::fun(smoothstep).mirror();
///
/// assert_approx_eq!(curve.eval(0.25), smoothstep(0.25));
/// ```
pub fn fun<T>(f: impl Fn(T) -> T) -> Eased<impl Curve<T = T>> {
    From::from(f)
}

/// Wrap an [`Ease`](enum.Ease.html), so that it can be combined with other
/// curves.
pub fn ease(ease: Ease) -> Eased<Ease> {
    Eased(ease)
}

/// The identity curve, for any progress type.
pub fn linear<T>() -> Eased<impl Curve<T = T>> {
    fun(|t| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_approx_eq::assert_approx_eq;

    use crate::{Family, Phase};

    fn samples() -> impl Iterator<Item = f32> {
        (0..=100).map(|i| i as f32 / 100.0)
    }

    #[test]
    fn mirror_turns_in_into_out() {
        for &ease_in in Ease::ALL.iter().filter(|e| e.phase() == Some(Phase::In)) {
            let mirrored = ease(ease_in).mirror();
            let ease_out = ease_in.complement();

            for t in samples() {
                assert_approx_eq!(mirrored.eval(t), ease_out.eval(t), 1e-4);
            }
        }
    }

    #[test]
    fn in_out_builds_in_out_curves() {
        let families = [
            Family::Quad,
            Family::Cubic,
            Family::Quart,
            Family::Quint,
            Family::Circ,
            Family::Back,
            Family::Bounce,
            Family::Elastic,
            Family::Expo,
            Family::Sine,
        ];

        for &family in families.iter() {
            let curve = ease(Ease::from_parts(family, Phase::In))
                .in_out(Ease::from_parts(family, Phase::Out));
            let expected = Ease::from_parts(family, Phase::InOut);

            for t in samples() {
                assert_approx_eq!(curve.eval(t), expected.eval(t), 1e-4);
            }
        }
    }

    #[test]
    fn boxed_curves_can_be_mixed() {
        let curves: Vec<EasedBox<f32>> = vec![
            ease(Ease::OutBounce).into_box(),
            linear().into_box(),
            fun(|t: f32| t * t).mirror().into_box(),
        ];

        for curve in curves.iter() {
            assert_approx_eq!(curve.eval(0.0), 0.0, 1e-5);
            assert_approx_eq!(curve.eval(1.0), 1.0, 1e-5);
        }

        assert_approx_eq!(curves[2].eval(0.5), Ease::OutQuad.eval(0.5f32));
    }

    #[test]
    fn combinators_do_not_clamp() {
        let curve = linear::<f64>().squeeze(0.25..=0.75);

        assert_approx_eq!(curve.eval(0.0), -0.5);
        assert_approx_eq!(curve.eval(1.0), 1.5);

        let overshoot = ease(Ease::OutBack).scale_min_max(10.0, 20.0);
        assert!(samples().any(|t| overshoot.eval(t) > 20.0));
    }

    #[test]
    fn float_combinators_on_f64() {
        let quad = || fun(|t: f64| t * t);

        let squeezed = quad().squeeze(0.5..=1.0);
        assert_approx_eq!(squeezed.eval(0.75), 0.25);

        let mirrored = quad().mirror();
        assert_approx_eq!(mirrored.eval(0.5), Ease::OutQuad.eval(0.5f64));

        let in_out = quad().in_out(|t: f64| 1.0 - (1.0 - t) * (1.0 - t));
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            assert_approx_eq!(in_out.eval(t), Ease::InOutQuad.eval(t), 1e-12);
        }
    }

    #[test]
    fn generic_progress_type() {
        let curve = fun(|t: f64| Ease::InOutSine.eval(t)).then(|t: f64| t * 2.0);

        assert_approx_eq!(curve.eval(0.5), 1.0);
        assert_approx_eq!(curve.as_ref().eval(1.0), 2.0);
    }
}
