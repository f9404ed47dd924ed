use super::pointer::PointerPosition;
use super::spring::{SpringAxis, SpringConfig};

// Top-left corner of the glow element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPosition {
    pub left: f64,
    pub top: f64,
}

pub fn glow_target(pointer: PointerPosition, size: f64) -> GlowPosition {
    let half = size / 2.0;
    GlowPosition {
        left: pointer.x - half,
        top: pointer.y - half,
    }
}

// The first frame after a pause gets `default_step`
pub fn frame_delta(last_ms: Option<f64>, now_ms: f64, default_step: f64, max_step: f64) -> f64 {
    match last_ms {
        Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, max_step),
        None => default_step,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlowFollower {
    size: f64,
    left: SpringAxis,
    top: SpringAxis,
}

impl GlowFollower {
    pub fn new(size: f64, spring: SpringConfig) -> Self {
        let start = glow_target(PointerPosition::ORIGIN, size);
        Self {
            size,
            left: SpringAxis::new(spring, start.left),
            top: SpringAxis::new(spring, start.top),
        }
    }

    pub fn retarget(&mut self, pointer: PointerPosition) {
        let target = glow_target(pointer, self.size);
        self.left.set_target(target.left);
        self.top.set_target(target.top);
    }

    #[cfg(test)]
    pub fn target(&self) -> GlowPosition {
        GlowPosition {
            left: self.left.target(),
            top: self.top.target(),
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.left.advance(dt);
        self.top.advance(dt);
    }

    pub fn position(&self) -> GlowPosition {
        GlowPosition {
            left: self.left.position(),
            top: self.top.position(),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.left.is_at_rest() && self.top.is_at_rest()
    }

    pub fn to_css_transform(&self) -> String {
        let GlowPosition { left, top } = self.position();
        format!("translate3d({:.2}px, {:.2}px, 0)", left, top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRING: SpringConfig = SpringConfig::new(200.0, 30.0);

    #[test]
    fn target_centers_glow_on_pointer() {
        let target = glow_target(PointerPosition::new(1000.0, 300.0), 800.0);
        assert_eq!(target, GlowPosition { left: 600.0, top: -100.0 });
    }

    #[test]
    fn starts_centered_on_origin_at_rest() {
        let glow = GlowFollower::new(800.0, SPRING);
        assert_eq!(glow.position(), GlowPosition { left: -400.0, top: -400.0 });
        assert!(glow.is_at_rest());
    }

    #[test]
    fn converges_to_target_without_overshoot() {
        let mut glow = GlowFollower::new(800.0, SPRING);
        glow.retarget(PointerPosition::new(900.0, 500.0));
        assert!(!glow.is_at_rest());
        let target = glow.target();
        for _ in 0..300 {
            glow.advance(1.0 / 60.0);
            let p = glow.position();
            assert!(p.left <= target.left && p.top <= target.top);
        }
        assert!(glow.is_at_rest());
        assert_eq!(glow.position(), target);
    }

    #[test]
    fn retarget_mid_flight_keeps_momentum() {
        let mut glow = GlowFollower::new(800.0, SPRING);
        glow.retarget(PointerPosition::new(400.0, 400.0));
        glow.advance(0.05);
        let before = glow.position();
        glow.retarget(PointerPosition::new(800.0, 800.0));
        assert_eq!(glow.position(), before);
        assert_eq!(glow.target(), GlowPosition { left: 400.0, top: 400.0 });
        assert!(!glow.is_at_rest());
    }

    #[test]
    fn frame_delta_is_clamped() {
        assert_eq!(frame_delta(None, 5000.0, 1.0 / 60.0, 0.1), 1.0 / 60.0);
        assert!((frame_delta(Some(1000.0), 1016.0, 0.0, 0.1) - 0.016).abs() < 1e-12);
        assert_eq!(frame_delta(Some(1000.0), 9000.0, 0.0, 0.1), 0.1);
        assert_eq!(frame_delta(Some(1000.0), 900.0, 0.0, 0.1), 0.0);
    }

    #[test]
    fn css_transform_uses_position() {
        let glow = GlowFollower::new(800.0, SPRING);
        assert_eq!(glow.to_css_transform(), "translate3d(-400.00px, -400.00px, 0)");
    }
}
