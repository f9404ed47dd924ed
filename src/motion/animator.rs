use std::rc::Rc;

use super::descriptor::{AnimationDescriptor, Trigger};
use super::state::{CssProperty, VisualState};
use super::trigger::{evaluate, Change, Signal, TriggerState};

/// Evaluation state for one element and the descriptors attached to it.
///
/// The displayed state stacks each descriptor's current layer in
/// declaration order, so later descriptors (hover, then press) win over
/// earlier ones (the reveal).
#[derive(Clone, Debug, PartialEq)]
pub struct ElementMotion {
    descriptors: Rc<[AnimationDescriptor]>,
    states: Vec<TriggerState>,
    changes: Vec<Option<LastChange>>,
    clock: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LastChange {
    at: u64,
    change: Change,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub state: VisualState,
    // One entry per property that has moved so far
    pub transitions: Vec<String>,
}

impl Resolved {
    pub fn to_css(&self) -> String {
        if self.transitions.is_empty() {
            self.state.to_css()
        } else {
            format!(
                "{} transition: {};",
                self.state.to_css(),
                self.transitions.join(", ")
            )
        }
    }

    #[cfg(test)]
    pub fn transition_for(&self, property: CssProperty) -> Option<&str> {
        let prefix = format!("{} ", property.name());
        self.transitions
            .iter()
            .find(|t| t.starts_with(&prefix))
            .map(String::as_str)
    }
}

impl ElementMotion {
    pub fn new(descriptors: Rc<[AnimationDescriptor]>) -> Self {
        let states = vec![TriggerState::default(); descriptors.len()];
        let changes = vec![None; descriptors.len()];
        Self {
            descriptors,
            states,
            changes,
            clock: 0,
        }
    }

    pub fn has_trigger(&self, wanted: impl Fn(Trigger) -> bool) -> bool {
        self.descriptors.iter().any(|d| wanted(d.trigger))
    }

    #[cfg(test)]
    pub fn trigger_state(&self, index: usize) -> Option<&TriggerState> {
        self.states.get(index)
    }

    // True when any descriptor moved
    pub fn signal(&mut self, signal: Signal) -> bool {
        self.clock += 1;
        let mut changed = false;
        for ((descriptor, state), last) in self
            .descriptors
            .iter()
            .zip(self.states.iter_mut())
            .zip(self.changes.iter_mut())
        {
            let change = evaluate(descriptor.trigger, state, signal);
            if change != Change::Hold {
                *last = Some(LastChange {
                    at: self.clock,
                    change,
                });
                changed = true;
            }
        }
        changed
    }

    pub fn displayed(&self) -> VisualState {
        self.descriptors
            .iter()
            .zip(&self.states)
            .fold(VisualState::EMPTY, |shown, (descriptor, state)| {
                let layer = if state.is_active() {
                    &descriptor.target
                } else {
                    &descriptor.initial
                };
                shown.overlay(layer)
            })
    }

    // Timing comes from whichever descriptor touched `property` last
    fn transition(&self, property: CssProperty) -> Option<String> {
        self.descriptors
            .iter()
            .zip(&self.changes)
            .filter(|(d, _)| d.initial.sets(property) || d.target.sets(property))
            .filter_map(|(d, last)| last.map(|last| (d, last)))
            .max_by_key(|(_, last)| last.at)
            .map(|(d, last)| {
                d.timing
                    .css_transition(property, last.change == Change::Advance)
            })
    }

    pub fn resolve(&self) -> Resolved {
        Resolved {
            state: self.displayed(),
            transitions: CssProperty::ALL
                .iter()
                .filter_map(|&property| self.transition(property))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::descriptor::Timing;

    fn card() -> ElementMotion {
        let descriptors: Vec<AnimationDescriptor> = vec![
            AnimationDescriptor::in_view(
                VisualState::new().opacity(0.0).y(30.0),
                VisualState::new().opacity(1.0).y(0.0),
                Timing::tween(0.6).delay(0.1),
            ),
            AnimationDescriptor::on_hover(
                VisualState::new().y(-10.0).box_shadow("0 12px 40px black"),
                Timing::tween(0.2),
            ),
            AnimationDescriptor::on_press(VisualState::new().scale(0.95), Timing::tween(0.1)),
        ];
        ElementMotion::new(descriptors.into())
    }

    #[test]
    fn starts_in_initial_state_without_transition() {
        let motion = card();
        let resolved = motion.resolve();
        assert_eq!(resolved.state.opacity, Some(0.0));
        assert_eq!(resolved.state.y, Some(30.0));
        assert!(resolved.transitions.is_empty());
        assert!(!resolved.to_css().contains("transition"));
    }

    #[test]
    fn reveal_fires_once_across_scroll_back() {
        let mut motion = card();
        assert!(motion.signal(Signal::EnteredViewport));
        assert!(!motion.signal(Signal::LeftViewport));
        assert!(!motion.signal(Signal::EnteredViewport));
        assert_eq!(motion.trigger_state(0).map(|s| s.has_fired()), Some(true));
        assert_eq!(motion.displayed().opacity, Some(1.0));
    }

    #[test]
    fn hover_round_trips_to_prior_state() {
        let mut motion = card();
        motion.signal(Signal::EnteredViewport);
        let before = motion.displayed();

        motion.signal(Signal::HoverStart);
        let hovered = motion.displayed();
        assert_eq!(hovered.y, Some(-10.0));
        assert_eq!(hovered.opacity, Some(1.0));

        motion.signal(Signal::HoverEnd);
        assert_eq!(motion.displayed(), before);
    }

    #[test]
    fn hover_only_element_returns_to_its_initial_state() {
        let hover = AnimationDescriptor::on_hover(VisualState::new().scale(1.05), Timing::tween(0.2))
            .initial(VisualState::new().scale(1.0));
        let mut motion = ElementMotion::new(vec![hover].into());
        let initial = motion.displayed();
        motion.signal(Signal::HoverStart);
        assert_eq!(motion.displayed().scale, Some(1.05));
        motion.signal(Signal::HoverEnd);
        assert_eq!(motion.displayed(), initial);
        assert_eq!(initial, hover.initial);
    }

    #[test]
    fn press_layers_over_hover() {
        let mut motion = card();
        motion.signal(Signal::EnteredViewport);
        motion.signal(Signal::HoverStart);
        motion.signal(Signal::PressStart);
        let shown = motion.displayed();
        assert_eq!(shown.scale, Some(0.95));
        assert_eq!(shown.y, Some(-10.0));
    }

    #[test]
    fn reveal_sets_transition_for_its_own_properties() {
        let mut motion = card();
        motion.signal(Signal::EnteredViewport);
        let resolved = motion.resolve();
        assert_eq!(
            resolved.transition_for(CssProperty::Opacity),
            Some("opacity 0.6s cubic-bezier(0, 0, 0.58, 1) 0.1s")
        );
        assert_eq!(
            resolved.transition_for(CssProperty::Transform),
            Some("transform 0.6s cubic-bezier(0, 0, 0.58, 1) 0.1s")
        );
        assert_eq!(resolved.transition_for(CssProperty::BoxShadow), None);
    }

    #[test]
    fn hover_during_pending_reveal_keeps_reveal_opacity_timing() {
        let mut motion = card();
        motion.signal(Signal::EnteredViewport);
        motion.signal(Signal::HoverStart);
        let resolved = motion.resolve();
        assert_eq!(
            resolved.transition_for(CssProperty::Opacity),
            Some("opacity 0.6s cubic-bezier(0, 0, 0.58, 1) 0.1s")
        );
        assert_eq!(
            resolved.transition_for(CssProperty::Transform),
            Some("transform 0.2s cubic-bezier(0, 0, 0.58, 1) 0s")
        );
        assert!(resolved
            .transition_for(CssProperty::BoxShadow)
            .is_some_and(|t| t.starts_with("box-shadow 0.2s")));
    }

    #[test]
    fn hover_end_reverts_without_delay() {
        let mut motion = card();
        motion.signal(Signal::EnteredViewport);
        motion.signal(Signal::HoverStart);
        motion.signal(Signal::HoverEnd);
        let resolved = motion.resolve();
        assert_eq!(
            resolved.transition_for(CssProperty::Transform),
            Some("transform 0.2s cubic-bezier(0, 0, 0.58, 1) 0s")
        );
        assert!(resolved
            .transition_for(CssProperty::Opacity)
            .is_some_and(|t| t.ends_with(" 0.1s")));
    }

    #[test]
    fn press_release_times_transform_by_the_latest_layer() {
        let mut motion = card();
        motion.signal(Signal::EnteredViewport);
        motion.signal(Signal::HoverStart);
        motion.signal(Signal::PressStart);
        assert_eq!(
            motion.resolve().transition_for(CssProperty::Transform),
            Some("transform 0.1s cubic-bezier(0, 0, 0.58, 1) 0s")
        );
        // Leaving ends hover and press in the same signal; press is layered last
        motion.signal(Signal::HoverEnd);
        assert_eq!(
            motion.resolve().transition_for(CssProperty::Transform),
            Some("transform 0.1s cubic-bezier(0, 0, 0.58, 1) 0s")
        );
    }

    #[test]
    fn trigger_lookup() {
        let motion = card();
        assert!(motion.has_trigger(|t| matches!(t, Trigger::OnEnterViewport { .. })));
        assert!(!motion.has_trigger(|t| t == Trigger::OnMount));
    }

    #[test]
    fn css_appends_transition() {
        let mut motion = card();
        motion.signal(Signal::EnteredViewport);
        let css = motion.resolve().to_css();
        assert!(css.starts_with("opacity: 1;"));
        assert!(css.contains(" transition: opacity 0.6s"));
        assert!(css.ends_with("0.1s;"));
    }
}
