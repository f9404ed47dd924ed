use super::spring::SpringConfig;
use super::state::{CssProperty, VisualState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    OnEnterViewport { once: bool },
    OnHover,
    OnPress,
}

impl Trigger {
    // Hover and press follow their condition both ways
    pub fn is_gesture(self) -> bool {
        matches!(self, Trigger::OnHover | Trigger::OnPress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    Spring(SpringConfig),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)".to_string(),
            Easing::Spring(spring) => spring.css_easing(24),
        }
    }
}

// Seconds throughout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Timing {
    pub const fn tween(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn spring(config: SpringConfig) -> Self {
        Self {
            duration: config.settle_time(0.001),
            delay: 0.0,
            easing: Easing::Spring(config),
        }
    }

    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// One `transition` entry for `property`. Reverts start immediately,
    /// so the delay only applies when `advancing`.
    pub fn css_transition(&self, property: CssProperty, advancing: bool) -> String {
        let delay = if advancing { self.delay } else { 0.0 };
        format!(
            "{} {}s {} {}s",
            property.name(),
            self.duration,
            self.easing.css(),
            delay
        )
    }
}

pub fn stagger_delay(index: usize, increment: f64) -> f64 {
    index as f64 * increment
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub initial: VisualState,
    pub target: VisualState,
    pub trigger: Trigger,
    pub timing: Timing,
}

impl AnimationDescriptor {
    pub const fn new(
        initial: VisualState,
        target: VisualState,
        trigger: Trigger,
        timing: Timing,
    ) -> Self {
        Self {
            initial,
            target,
            trigger,
            timing,
        }
    }

    pub const fn on_mount(initial: VisualState, target: VisualState, timing: Timing) -> Self {
        Self::new(initial, target, Trigger::OnMount, timing)
    }

    pub const fn in_view(initial: VisualState, target: VisualState, timing: Timing) -> Self {
        Self::new(
            initial,
            target,
            Trigger::OnEnterViewport { once: true },
            timing,
        )
    }

    pub const fn on_hover(target: VisualState, timing: Timing) -> Self {
        Self::new(VisualState::EMPTY, target, Trigger::OnHover, timing)
    }

    pub const fn on_press(target: VisualState, timing: Timing) -> Self {
        Self::new(VisualState::EMPTY, target, Trigger::OnPress, timing)
    }

    pub const fn initial(mut self, initial: VisualState) -> Self {
        self.initial = initial;
        self
    }

    pub fn staggered(mut self, index: usize, increment: f64) -> Self {
        self.timing.delay += stagger_delay(index, increment);
        self
    }
}
