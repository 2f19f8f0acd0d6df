//! Enter/exit transitions as configuration values.
//!
//! Nothing here animates. A [`Motion`] describes the initial, resting and
//! exit poses of an element plus the timing between them, and renders to an
//! inline CSS declaration for a given [`PresencePhase`]. The browser does the
//! interpolation.

use crate::presence::PresencePhase;

/// Exit/settle threshold for springs: 0.1% of the travelled distance.
const SETTLE_EPSILON: f64 = 1e-3;
const MIN_SETTLE_MS: u32 = 100;
const MAX_SETTLE_MS: u32 = 2000;
/// Number of segments in the sampled `linear()` easing.
const EASING_SEGMENTS: u32 = 20;
/// Ease-out curve used by every tween.
const TWEEN_EASING: &str = "cubic-bezier(0, 0, 0.58, 1)";
/// Delay between consecutive navigation entries.
pub const STAGGER_MS: u32 = 100;

/// Visual state of an element at one end of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal offset in px.
    pub x: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose { x: 0.0, opacity: 1.0, scale: 1.0 };

    pub const fn offset(x: f32) -> Self {
        Self { x, ..Self::REST }
    }

    pub const fn faded() -> Self {
        Self { opacity: 0.0, ..Self::REST }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translateX({}px) scale({}); opacity: {};",
            self.x, self.scale, self.opacity
        )
    }
}

/// Damped harmonic oscillator released from rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub delay_ms: u32,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            delay_ms: 0,
        }
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Fraction of the distance covered after `t` seconds.
    ///
    /// Starts at 0 with zero velocity and converges to 1. Underdamped springs
    /// overshoot past 1 before settling.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time until the response envelope decays below [`SETTLE_EPSILON`].
    pub fn settle_ms(&self) -> u32 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay = if zeta < 1.0 {
            zeta * w0
        } else {
            w0 * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if decay.is_nan() || decay <= 0.0 {
            return MAX_SETTLE_MS;
        }
        let secs = SETTLE_EPSILON.recip().ln() / decay;
        ((secs * 1000.0).round() as u32).clamp(MIN_SETTLE_MS, MAX_SETTLE_MS)
    }

    /// The response sampled into a CSS `linear()` easing over [`Self::settle_ms`].
    pub fn css_easing(&self) -> String {
        let secs = f64::from(self.settle_ms()) / 1000.0;
        let stops: Vec<String> = (0..=EASING_SEGMENTS)
            .map(|i| match i {
                0 => "0".to_string(),
                EASING_SEGMENTS => "1".to_string(),
                _ => {
                    let t = secs * f64::from(i) / f64::from(EASING_SEGMENTS);
                    format!("{:.3}", self.progress(t))
                }
            })
            .collect();
        format!("linear({})", stops.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Ease-out tween.
    Tween { duration_ms: u32, delay_ms: u32 },
    Spring(Spring),
}

impl Transition {
    pub const fn tween(duration_ms: u32) -> Self {
        Transition::Tween {
            duration_ms,
            delay_ms: 0,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        match self {
            Transition::Tween { duration_ms, .. } => *duration_ms,
            Transition::Spring(spring) => spring.settle_ms(),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        match self {
            Transition::Tween { delay_ms, .. } => *delay_ms,
            Transition::Spring(spring) => spring.delay_ms,
        }
    }

    pub fn with_delay(self, delay: u32) -> Self {
        match self {
            Transition::Tween { duration_ms, .. } => Transition::Tween {
                duration_ms,
                delay_ms: delay,
            },
            Transition::Spring(spring) => Transition::Spring(Spring {
                delay_ms: delay,
                ..spring
            }),
        }
    }

    fn easing_css(&self) -> String {
        match self {
            Transition::Tween { .. } => TWEEN_EASING.to_string(),
            Transition::Spring(spring) => spring.css_easing(),
        }
    }

    /// `duration easing delay`, for a CSS `transition` entry.
    pub fn css_timing(&self, with_delay: bool) -> String {
        let delay = if with_delay { self.delay_ms() } else { 0 };
        format!("{}ms {} {}ms", self.duration_ms(), self.easing_css(), delay)
    }
}

/// Declarative enter/exit description for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub animate: Pose,
    /// `None` means the element never animates out.
    pub exit: Option<Pose>,
    pub transition: Transition,
}

impl Motion {
    /// Default positional spring used when no transition is given.
    pub const POSITION_SPRING: Spring = Spring::new(500.0, 25.0);

    pub fn desktop_panel() -> Self {
        Self {
            initial: Pose::offset(-280.0),
            animate: Pose::REST,
            exit: None,
            transition: Transition::Spring(Self::POSITION_SPRING),
        }
    }

    pub fn mobile_panel() -> Self {
        Self {
            initial: Pose::offset(-300.0),
            animate: Pose::REST,
            exit: Some(Pose::offset(-300.0)),
            transition: Transition::Spring(Spring::new(200.0, 25.0)),
        }
    }

    pub fn backdrop() -> Self {
        Self {
            initial: Pose::faded(),
            animate: Pose::REST,
            exit: Some(Pose::faded()),
            transition: Transition::tween(300),
        }
    }

    /// Navigation entry at `index`, staggered after the ones above it.
    pub fn nav_item(index: usize) -> Self {
        let delay = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(STAGGER_MS);
        Self {
            initial: Pose {
                x: -20.0,
                opacity: 0.0,
                scale: 1.0,
            },
            animate: Pose::REST,
            exit: None,
            transition: Transition::tween(300).with_delay(delay),
        }
    }

    /// How long the exit transition runs before the element can unmount.
    pub fn exit_ms(&self) -> u32 {
        if self.exit.is_some() {
            self.transition.duration_ms()
        } else {
            0
        }
    }

    /// Inline CSS for the element in `phase`.
    pub fn style(&self, phase: PresencePhase) -> String {
        match phase {
            PresencePhase::Hidden | PresencePhase::Entering => {
                format!("{} transition: none;", self.initial.css())
            }
            PresencePhase::Shown => self.transitioning(self.animate, true),
            PresencePhase::Exiting => self.transitioning(self.exit.unwrap_or(self.initial), false),
        }
    }

    fn transitioning(&self, pose: Pose, with_delay: bool) -> String {
        let timing = self.transition.css_timing(with_delay);
        format!(
            "{} transition: transform {timing}, opacity {timing};",
            pose.css()
        )
    }
}
