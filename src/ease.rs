use std::fmt;
use std::str::FromStr;

use num_traits::{Float, FloatConst};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseEaseError;
use crate::functions;

/// A plain easing function, mapping progress `t` to eased progress.
///
/// Easing functions carry no state, so they can be copied around freely and
/// called from any thread.
pub type EasingFunction<F = f32> = fn(F) -> F;

/// Identifies one of the easing curves.
///
/// The discriminant of each variant is its [`tag`](enum.Ease.html#method.tag).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Ease {
    #[default]
    Linear,
    InBack,
    InBounce,
    InCirc,
    InCubic,
    InElastic,
    InExpo,
    InQuad,
    InQuart,
    InQuint,
    InSine,
    OutBack,
    OutBounce,
    OutCirc,
    OutCubic,
    OutElastic,
    OutExpo,
    OutQuad,
    OutQuart,
    OutQuint,
    OutSine,
    InOutBack,
    InOutBounce,
    InOutCirc,
    InOutCubic,
    InOutElastic,
    InOutExpo,
    InOutQuad,
    InOutQuart,
    InOutQuint,
    InOutSine,
}

/// The shape of an easing curve, independent of its [`Phase`](enum.Phase.html).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Family {
    Linear,
    Back,
    Bounce,
    Circ,
    Cubic,
    Elastic,
    Expo,
    Quad,
    Quart,
    Quint,
    Sine,
}

/// Whether a curve accelerates at the start, decelerates at the end, or both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    In,
    Out,
    /// `In` for the first half and `Out` for the second half, split at
    /// `t = 0.5`.
    InOut,
}

impl Ease {
    /// Number of easing curves.
    pub const COUNT: usize = 31;

    /// All easing curves, ordered by tag.
    pub const ALL: [Ease; Ease::COUNT] = [
        Ease::Linear,
        Ease::InBack,
        Ease::InBounce,
        Ease::InCirc,
        Ease::InCubic,
        Ease::InElastic,
        Ease::InExpo,
        Ease::InQuad,
        Ease::InQuart,
        Ease::InQuint,
        Ease::InSine,
        Ease::OutBack,
        Ease::OutBounce,
        Ease::OutCirc,
        Ease::OutCubic,
        Ease::OutElastic,
        Ease::OutExpo,
        Ease::OutQuad,
        Ease::OutQuart,
        Ease::OutQuint,
        Ease::OutSine,
        Ease::InOutBack,
        Ease::InOutBounce,
        Ease::InOutCirc,
        Ease::InOutCubic,
        Ease::InOutElastic,
        Ease::InOutExpo,
        Ease::InOutQuad,
        Ease::InOutQuart,
        Ease::InOutQuint,
        Ease::InOutSine,
    ];

    /// Get the `f32` easing function for this curve.
    ///
    /// # Example
    /// ```
    /// use ease_core::Ease;
    ///
    /// let f = Ease::InQuad.function();
    /// assert_eq!(f(0.5), 0.25);
    /// ```
    pub fn function(self) -> EasingFunction {
        self.function_for::<f32>()
    }

    /// Get the easing function for this curve, for any float type.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use ease_core::Ease;
    ///
    /// let f = Ease::OutQuad.function_for::<f64>();
    /// assert_approx_eq!(f(0.5), 0.75);
    /// ```
    pub fn function_for<F: Float + FloatConst>(self) -> EasingFunction<F> {
        match self {
            Ease::Linear => functions::linear,
            Ease::InBack => functions::in_back,
            Ease::InBounce => functions::in_bounce,
            Ease::InCirc => functions::in_circ,
            Ease::InCubic => functions::in_cubic,
            Ease::InElastic => functions::in_elastic,
            Ease::InExpo => functions::in_expo,
            Ease::InQuad => functions::in_quad,
            Ease::InQuart => functions::in_quart,
            Ease::InQuint => functions::in_quint,
            Ease::InSine => functions::in_sine,
            Ease::OutBack => functions::out_back,
            Ease::OutBounce => functions::out_bounce,
            Ease::OutCirc => functions::out_circ,
            Ease::OutCubic => functions::out_cubic,
            Ease::OutElastic => functions::out_elastic,
            Ease::OutExpo => functions::out_expo,
            Ease::OutQuad => functions::out_quad,
            Ease::OutQuart => functions::out_quart,
            Ease::OutQuint => functions::out_quint,
            Ease::OutSine => functions::out_sine,
            Ease::InOutBack => functions::in_out_back,
            Ease::InOutBounce => functions::in_out_bounce,
            Ease::InOutCirc => functions::in_out_circ,
            Ease::InOutCubic => functions::in_out_cubic,
            Ease::InOutElastic => functions::in_out_elastic,
            Ease::InOutExpo => functions::in_out_expo,
            Ease::InOutQuad => functions::in_out_quad,
            Ease::InOutQuart => functions::in_out_quart,
            Ease::InOutQuint => functions::in_out_quint,
            Ease::InOutSine => functions::in_out_sine,
        }
    }

    /// Evaluate the curve at progress `t`.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use ease_core::Ease;
    ///
    /// assert_approx_eq!(Ease::InCubic.eval(0.5f32), 0.125);
    /// assert_approx_eq!(Ease::InCubic.eval(0.5f64), 0.125);
    /// ```
    pub fn eval<F: Float + FloatConst>(self, t: F) -> F {
        self.function_for::<F>()(t)
    }

    /// The tag of this curve, i.e. its position in [`Ease::ALL`](#associatedconstant.ALL).
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a curve by its tag.
    ///
    /// Tags that do not name a curve resolve to `Linear`, so that data written
    /// by a version with more curves still evaluates to something sensible.
    ///
    /// # Example
    /// ```
    /// use ease_core::Ease;
    ///
    /// assert_eq!(Ease::from_tag(Ease::OutBounce.tag()), Ease::OutBounce);
    /// assert_eq!(Ease::from_tag(200), Ease::Linear);
    /// ```
    pub fn from_tag(tag: u8) -> Ease {
        match Ease::ALL.get(usize::from(tag)) {
            Some(&ease) => ease,
            None => {
                log::warn!("Unknown easing tag {}, falling back to Linear", tag);
                Ease::Linear
            }
        }
    }

    /// The family of this curve.
    ///
    /// ```
    /// use ease_core::{Ease, Family};
    ///
    /// assert_eq!(Ease::InOutBounce.family(), Family::Bounce);
    /// ```
    pub fn family(self) -> Family {
        match self {
            Ease::Linear => Family::Linear,
            Ease::InBack | Ease::OutBack | Ease::InOutBack => Family::Back,
            Ease::InBounce | Ease::OutBounce | Ease::InOutBounce => Family::Bounce,
            Ease::InCirc | Ease::OutCirc | Ease::InOutCirc => Family::Circ,
            Ease::InCubic | Ease::OutCubic | Ease::InOutCubic => Family::Cubic,
            Ease::InElastic | Ease::OutElastic | Ease::InOutElastic => Family::Elastic,
            Ease::InExpo | Ease::OutExpo | Ease::InOutExpo => Family::Expo,
            Ease::InQuad | Ease::OutQuad | Ease::InOutQuad => Family::Quad,
            Ease::InQuart | Ease::OutQuart | Ease::InOutQuart => Family::Quart,
            Ease::InQuint | Ease::OutQuint | Ease::InOutQuint => Family::Quint,
            Ease::InSine | Ease::OutSine | Ease::InOutSine => Family::Sine,
        }
    }

    /// The phase of this curve. `Linear` has none.
    pub fn phase(self) -> Option<Phase> {
        match self.tag() {
            0 => None,
            1..=10 => Some(Phase::In),
            11..=20 => Some(Phase::Out),
            _ => Some(Phase::InOut),
        }
    }

    /// Build a curve from its family and phase.
    ///
    /// The phase is ignored for `Family::Linear`.
    ///
    /// # Example
    /// ```
    /// use ease_core::{Ease, Family, Phase};
    ///
    /// assert_eq!(Ease::from_parts(Family::Expo, Phase::InOut), Ease::InOutExpo);
    /// assert_eq!(Ease::from_parts(Family::Linear, Phase::Out), Ease::Linear);
    /// ```
    pub fn from_parts(family: Family, phase: Phase) -> Ease {
        // Families other than Linear are laid out alphabetically within each
        // phase block.
        let offset = match family {
            Family::Linear => return Ease::Linear,
            Family::Back => 0,
            Family::Bounce => 1,
            Family::Circ => 2,
            Family::Cubic => 3,
            Family::Elastic => 4,
            Family::Expo => 5,
            Family::Quad => 6,
            Family::Quart => 7,
            Family::Quint => 8,
            Family::Sine => 9,
        };
        let block = match phase {
            Phase::In => 1,
            Phase::Out => 11,
            Phase::InOut => 21,
        };

        Ease::ALL[block + offset]
    }

    /// The curve mirrored through the point `(0.5, 0.5)`.
    ///
    /// `In` and `Out` curves swap, while `InOut` curves and `Linear` are
    /// their own complement. For every curve `c`,
    /// `c.complement().eval(t) ≈ 1 - c.eval(1 - t)`.
    pub fn complement(self) -> Ease {
        match (self.family(), self.phase()) {
            (family, Some(Phase::In)) => Ease::from_parts(family, Phase::Out),
            (family, Some(Phase::Out)) => Ease::from_parts(family, Phase::In),
            _ => self,
        }
    }

    /// The name of this curve, as used by `Display` and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "Linear",
            Ease::InBack => "InBack",
            Ease::InBounce => "InBounce",
            Ease::InCirc => "InCirc",
            Ease::InCubic => "InCubic",
            Ease::InElastic => "InElastic",
            Ease::InExpo => "InExpo",
            Ease::InQuad => "InQuad",
            Ease::InQuart => "InQuart",
            Ease::InQuint => "InQuint",
            Ease::InSine => "InSine",
            Ease::OutBack => "OutBack",
            Ease::OutBounce => "OutBounce",
            Ease::OutCirc => "OutCirc",
            Ease::OutCubic => "OutCubic",
            Ease::OutElastic => "OutElastic",
            Ease::OutExpo => "OutExpo",
            Ease::OutQuad => "OutQuad",
            Ease::OutQuart => "OutQuart",
            Ease::OutQuint => "OutQuint",
            Ease::OutSine => "OutSine",
            Ease::InOutBack => "InOutBack",
            Ease::InOutBounce => "InOutBounce",
            Ease::InOutCirc => "InOutCirc",
            Ease::InOutCubic => "InOutCubic",
            Ease::InOutElastic => "InOutElastic",
            Ease::InOutExpo => "InOutExpo",
            Ease::InOutQuad => "InOutQuad",
            Ease::InOutQuart => "InOutQuart",
            Ease::InOutQuint => "InOutQuint",
            Ease::InOutSine => "InOutSine",
        }
    }
}

impl From<u8> for Ease {
    fn from(tag: u8) -> Self {
        Ease::from_tag(tag)
    }
}

impl From<Ease> for u8 {
    fn from(ease: Ease) -> Self {
        ease.tag()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses curve names, ignoring case and `_`, `-` or whitespace separators.
///
/// # Example
/// ```
/// use ease_core::Ease;
///
/// assert_eq!("InOutBack".parse::<Ease>().unwrap(), Ease::InOutBack);
/// assert_eq!("in_out_back".parse::<Ease>().unwrap(), Ease::InOutBack);
/// assert_eq!("out-bounce".parse::<Ease>().unwrap(), Ease::OutBounce);
/// assert!("wobble".parse::<Ease>().is_err());
/// ```
impl FromStr for Ease {
    type Err = ParseEaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !(*c == '_' || *c == '-' || c.is_whitespace()))
            .flat_map(char::to_lowercase)
            .collect();

        if normalized.is_empty() {
            return Err(ParseEaseError::Empty);
        }

        Ease::ALL
            .iter()
            .copied()
            .find(|ease| ease.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseEaseError::UnknownName(s.to_owned()))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
