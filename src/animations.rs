// Animation table for the landing page. The page only decides where each
// set of descriptors goes.

use crate::config;
use crate::motion::{AnimationDescriptor, Timing, VisualState};

const HIDDEN: VisualState = VisualState::new().opacity(0.0);
const SHOWN: VisualState = VisualState::new().opacity(1.0);

const PRIMARY_CTA_SHADOW: &str = "0 0 60px rgba(94, 23, 235, 0.4)";
const SERVICE_CARD_SHADOW: &str = "0 12px 40px rgba(94, 23, 235, 0.25)";

fn gesture_timing() -> Timing {
    Timing::spring(config::GESTURE_SPRING)
}

fn hover_scale(scale: f64) -> AnimationDescriptor {
    AnimationDescriptor::on_hover(VisualState::new().scale(scale), gesture_timing())
        .initial(VisualState::new().scale(1.0))
}

fn press_scale(scale: f64) -> AnimationDescriptor {
    AnimationDescriptor::on_press(VisualState::new().scale(scale), gesture_timing())
}

fn fade_up(offset: f64, duration: f64, delay: f64) -> AnimationDescriptor {
    AnimationDescriptor::on_mount(
        HIDDEN.y(offset),
        SHOWN.y(0.0),
        Timing::tween(duration).delay(delay),
    )
}

fn fade_in(duration: f64, delay: f64) -> AnimationDescriptor {
    AnimationDescriptor::on_mount(HIDDEN, SHOWN, Timing::tween(duration).delay(delay))
}

fn reveal_up(offset: f64, duration: f64) -> AnimationDescriptor {
    AnimationDescriptor::in_view(HIDDEN.y(offset), SHOWN.y(0.0), Timing::tween(duration))
}

pub fn nav_bar() -> Vec<AnimationDescriptor> {
    vec![AnimationDescriptor::on_mount(
        VisualState::new().y(-100.0),
        VisualState::new().y(0.0),
        Timing::tween(0.8),
    )]
}

pub fn logo() -> Vec<AnimationDescriptor> {
    vec![hover_scale(1.05)]
}

// Plain buttons: grow on hover, shrink while pressed.
pub fn button() -> Vec<AnimationDescriptor> {
    vec![hover_scale(1.05), press_scale(0.95)]
}

// The hero's main call to action also lights up.
pub fn primary_button() -> Vec<AnimationDescriptor> {
    vec![
        AnimationDescriptor::on_hover(
            VisualState::new().scale(1.05).box_shadow(PRIMARY_CTA_SHADOW),
            gesture_timing(),
        )
        .initial(VisualState::new().scale(1.0)),
        press_scale(0.95),
    ]
}

pub fn hero() -> Vec<AnimationDescriptor> {
    vec![fade_up(30.0, 1.0, 0.2)]
}

pub fn hero_badge() -> Vec<AnimationDescriptor> {
    vec![AnimationDescriptor::on_mount(
        HIDDEN.scale(0.9),
        SHOWN.scale(1.0),
        Timing::tween(0.8).delay(0.4),
    )]
}

pub fn hero_title() -> Vec<AnimationDescriptor> {
    vec![fade_up(20.0, 0.8, 0.5)]
}

pub fn hero_tagline() -> Vec<AnimationDescriptor> {
    vec![fade_in(0.8, 0.7)]
}

pub fn hero_lead() -> Vec<AnimationDescriptor> {
    vec![fade_in(0.8, 0.8)]
}

pub fn hero_actions() -> Vec<AnimationDescriptor> {
    vec![fade_up(20.0, 0.8, 0.9)]
}

pub fn stats_grid() -> Vec<AnimationDescriptor> {
    vec![fade_up(30.0, 0.8, 1.1)]
}

pub fn stat_card() -> Vec<AnimationDescriptor> {
    vec![hover_scale(1.05)]
}

pub fn section_heading() -> Vec<AnimationDescriptor> {
    vec![reveal_up(30.0, 0.8)]
}

pub fn service_card(index: usize) -> Vec<AnimationDescriptor> {
    vec![
        reveal_up(30.0, 0.6).staggered(index, config::SERVICE_STAGGER),
        AnimationDescriptor::on_hover(
            VisualState::new().y(-10.0).box_shadow(SERVICE_CARD_SHADOW),
            gesture_timing(),
        ),
    ]
}

// Process steps slide in from alternating sides.
pub fn process_step(index: usize) -> Vec<AnimationDescriptor> {
    let from = if index % 2 == 0 { -50.0 } else { 50.0 };
    vec![AnimationDescriptor::in_view(HIDDEN.x(from), SHOWN.x(0.0), Timing::tween(0.8))
        .staggered(index, config::PROCESS_STAGGER)]
}

pub fn process_card() -> Vec<AnimationDescriptor> {
    vec![hover_scale(1.02)]
}

pub fn cta_panel() -> Vec<AnimationDescriptor> {
    vec![AnimationDescriptor::in_view(
        HIDDEN.scale(0.95),
        SHOWN.scale(1.0),
        Timing::tween(0.8),
    )]
}

pub fn cta_content() -> Vec<AnimationDescriptor> {
    vec![AnimationDescriptor::in_view(
        HIDDEN.y(20.0),
        SHOWN.y(0.0),
        Timing::tween(0.8).delay(0.2),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::state::CssProperty;
    use crate::motion::{ElementMotion, Signal, Trigger};

    fn delays(descriptors: impl Iterator<Item = AnimationDescriptor>) -> Vec<f64> {
        descriptors.map(|d| d.timing.delay).collect()
    }

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-9, "{got:?} != {want:?}");
        }
    }

    #[test]
    fn service_cards_cascade() {
        let got = delays((0..6).map(|i| service_card(i)[0]));
        assert_close(&got, &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
    }

    #[test]
    fn hover_before_stagger_elapses_keeps_the_cascade() {
        let mut motion = ElementMotion::new(service_card(5).into());
        motion.signal(Signal::EnteredViewport);
        motion.signal(Signal::HoverStart);
        let resolved = motion.resolve();

        let opacity = resolved.transition_for(CssProperty::Opacity).unwrap();
        assert!(opacity.starts_with("opacity 0.6s cubic-bezier"), "{opacity}");
        assert!(opacity.ends_with(" 0.5s"), "{opacity}");

        let transform = resolved.transition_for(CssProperty::Transform).unwrap();
        assert!(transform.contains("linear("), "{transform}");
        assert_eq!(resolved.state.opacity, Some(1.0));
        assert_eq!(resolved.state.y, Some(-10.0));
    }

    #[test]
    fn process_steps_cascade_and_alternate() {
        let got = delays((0..3).map(|i| process_step(i)[0]));
        assert_close(&got, &[0.0, 0.2, 0.4]);
        let sides: Vec<Option<f64>> = (0..3).map(|i| process_step(i)[0].initial.x).collect();
        assert_eq!(sides, vec![Some(-50.0), Some(50.0), Some(-50.0)]);
    }

    #[test]
    fn section_reveals_fire_once() {
        let reveals = [section_heading(), service_card(0), process_step(1), cta_panel(), cta_content()];
        for descriptors in reveals {
            assert_eq!(descriptors[0].trigger, Trigger::OnEnterViewport { once: true });
        }
    }

    #[test]
    fn hero_sequence_is_ordered() {
        let got = delays(
            [hero(), hero_badge(), hero_title(), hero_tagline(), hero_lead(), hero_actions(), stats_grid()]
                .into_iter()
                .map(|d| d[0]),
        );
        assert!(got.windows(2).all(|w| w[0] < w[1]), "{got:?}");
    }

    #[test]
    fn buttons_press_over_hover() {
        let mut motion = ElementMotion::new(button().into());
        motion.signal(Signal::HoverStart);
        assert_eq!(motion.displayed().scale, Some(1.05));
        motion.signal(Signal::PressStart);
        assert_eq!(motion.displayed().scale, Some(0.95));
        motion.signal(Signal::PressEnd);
        assert_eq!(motion.displayed().scale, Some(1.05));
        motion.signal(Signal::HoverEnd);
        assert_eq!(motion.displayed().scale, Some(1.0));
    }

    #[test]
    fn nav_slides_in_on_mount() {
        let mut motion = ElementMotion::new(nav_bar().into());
        assert_eq!(motion.displayed().y, Some(-100.0));
        motion.signal(Signal::Mounted);
        assert_eq!(motion.displayed().y, Some(0.0));
    }
}
