use super::descriptor::Trigger;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Mounted,
    EnteredViewport,
    LeftViewport,
    HoverStart,
    HoverEnd,
    PressStart,
    PressEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Advance,
    Revert,
    Hold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerState {
    active: bool,
    // Sticky once set
    fired: bool,
}

impl TriggerState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    fn advance(&mut self) -> Change {
        self.active = true;
        self.fired = true;
        Change::Advance
    }

    fn revert(&mut self) -> Change {
        if self.active {
            self.active = false;
            Change::Revert
        } else {
            Change::Hold
        }
    }

    fn fire_once(&mut self) -> Change {
        if self.fired {
            Change::Hold
        } else {
            self.advance()
        }
    }

    fn engage(&mut self) -> Change {
        if self.active {
            Change::Hold
        } else {
            self.advance()
        }
    }
}

/// Applies `signal` to a trigger's state. Duplicate or out-of-order signals
/// resolve to `Change::Hold`.
pub fn evaluate(trigger: Trigger, state: &mut TriggerState, signal: Signal) -> Change {
    match (trigger, signal) {
        (Trigger::OnMount, Signal::Mounted) => state.fire_once(),
        (Trigger::OnEnterViewport { once: true }, Signal::EnteredViewport) => state.fire_once(),
        (Trigger::OnEnterViewport { once: false }, Signal::EnteredViewport) => state.engage(),
        (Trigger::OnEnterViewport { once: false }, Signal::LeftViewport) => state.revert(),
        (Trigger::OnHover, Signal::HoverStart) => state.engage(),
        (Trigger::OnHover, Signal::HoverEnd) => state.revert(),
        (Trigger::OnPress, Signal::PressStart) => state.engage(),
        // Sliding off the element also ends a press.
        (Trigger::OnPress, Signal::PressEnd | Signal::HoverEnd) => state.revert(),
        _ => Change::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(trigger: Trigger, signals: &[Signal]) -> (TriggerState, Vec<Change>) {
        let mut state = TriggerState::default();
        let changes = signals
            .iter()
            .map(|&signal| evaluate(trigger, &mut state, signal))
            .collect();
        (state, changes)
    }

    fn advances(changes: &[Change]) -> usize {
        changes.iter().filter(|&&c| c == Change::Advance).count()
    }

    #[test]
    fn mount_fires_once() {
        let (state, changes) = run(Trigger::OnMount, &[Signal::Mounted, Signal::Mounted]);
        assert_eq!(changes, vec![Change::Advance, Change::Hold]);
        assert_eq!(advances(&changes), 1);
        assert!(state.has_fired());
    }

    #[test]
    fn once_viewport_trigger_fires_a_single_time() {
        use Signal::*;
        let (state, changes) = run(
            Trigger::OnEnterViewport { once: true },
            &[EnteredViewport, LeftViewport, EnteredViewport],
        );
        assert_eq!(changes, vec![Change::Advance, Change::Hold, Change::Hold]);
        assert_eq!(advances(&changes), 1);
        assert!(state.has_fired());
        assert!(state.is_active());
    }

    #[test]
    fn once_viewport_ignores_duplicates_and_stray_leaves() {
        use Signal::*;
        let (state, changes) = run(
            Trigger::OnEnterViewport { once: true },
            &[LeftViewport, EnteredViewport, EnteredViewport, LeftViewport],
        );
        assert_eq!(
            changes,
            vec![Change::Hold, Change::Advance, Change::Hold, Change::Hold]
        );
        assert_eq!(advances(&changes), 1);
        assert!(state.is_active());
    }

    #[test]
    fn repeatable_viewport_trigger_follows_visibility() {
        use Signal::*;
        let (state, changes) = run(
            Trigger::OnEnterViewport { once: false },
            &[EnteredViewport, LeftViewport, EnteredViewport],
        );
        assert_eq!(changes, vec![Change::Advance, Change::Revert, Change::Advance]);
        assert_eq!(advances(&changes), 2);
        assert!(state.is_active());
    }

    #[test]
    fn hover_is_unbounded_and_reversible() {
        use Signal::*;
        let signals: Vec<Signal> = std::iter::repeat([HoverStart, HoverEnd])
            .take(50)
            .flatten()
            .collect();
        let (state, changes) = run(Trigger::OnHover, &signals);
        assert_eq!(advances(&changes), 50);
        assert!(!state.is_active());
        assert_eq!(changes.last(), Some(&Change::Revert));
    }

    #[test]
    fn press_ends_on_release_or_leave() {
        use Signal::*;
        let (_, changes) = run(
            Trigger::OnPress,
            &[PressStart, PressEnd, PressStart, HoverEnd, PressEnd],
        );
        assert_eq!(
            changes,
            vec![
                Change::Advance,
                Change::Revert,
                Change::Advance,
                Change::Revert,
                Change::Hold
            ]
        );
    }

    #[test]
    fn unrelated_signals_hold() {
        let (state, changes) = run(Trigger::OnHover, &[Signal::Mounted, Signal::PressStart]);
        assert_eq!(changes, vec![Change::Hold, Change::Hold]);
        assert!(!state.has_fired());
    }
}
