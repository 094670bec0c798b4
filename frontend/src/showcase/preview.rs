use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use super::device::DeviceMode;

/// A switch that has been requested but not yet committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingSwitch {
    pub target: usize,
    pub mode: DeviceMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchPhase {
    Idle,
    Switching,
}

/// Which project and device frame the showcase presents.
///
/// Requests do not take effect immediately: they open a `Switching` phase
/// tagged with a generation number, and only a `settle` carrying the current
/// generation commits them. A newer request bumps the generation, so a timer
/// armed for an older one settles nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState {
    catalog_len: usize,
    active_id: usize,
    mode: DeviceMode,
    pending: Option<PendingSwitch>,
    generation: u64,
}

pub enum PreviewAction {
    Select(usize),
    ToggleMode,
    Settle(u64),
}

impl PreviewState {
    pub fn new(catalog_len: usize) -> Self {
        Self {
            catalog_len,
            active_id: 0,
            mode: DeviceMode::default(),
            pending: None,
            generation: 0,
        }
    }

    pub fn active_id(&self) -> usize {
        self.active_id
    }

    /// The committed, explicitly chosen device mode.
    pub fn mode(&self) -> DeviceMode {
        self.mode
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<PendingSwitch> {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> SwitchPhase {
        if self.pending.is_some() {
            SwitchPhase::Switching
        } else {
            SwitchPhase::Idle
        }
    }

    pub fn is_switching(&self) -> bool {
        self.phase() == SwitchPhase::Switching
    }

    /// Where the controller is heading: the pending switch if there is one,
    /// otherwise what is already committed.
    fn intended(&self) -> PendingSwitch {
        self.pending.unwrap_or(PendingSwitch {
            target: self.active_id,
            mode: self.mode,
        })
    }

    /// Requests a different project. Returns false when nothing changes.
    pub fn select(&mut self, id: usize) -> bool {
        if id >= self.catalog_len {
            debug!("Ignoring selection of unknown project {}", id);
            return false;
        }
        let intended = self.intended();
        if intended.target == id {
            return false;
        }
        self.begin(PendingSwitch { target: id, ..intended })
    }

    pub fn toggle_mode(&mut self) -> bool {
        let intended = self.intended();
        self.begin(PendingSwitch {
            mode: intended.mode.toggled(),
            ..intended
        })
    }

    fn begin(&mut self, next: PendingSwitch) -> bool {
        if self.pending.is_some() {
            debug!("Superseding pending switch (generation {})", self.generation);
        }
        self.generation += 1;
        self.pending = Some(next);
        true
    }

    /// Commits the pending switch if `generation` is still current.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping stale settle for generation {} (current {})",
                generation, self.generation
            );
            return false;
        }
        let Some(next) = self.pending.take() else {
            return false;
        };
        self.active_id = next.target;
        self.mode = next.mode;
        info!("Preview committed: project {} on {}", next.target, next.mode.label());
        true
    }
}

impl Reducible for PreviewState {
    type Action = PreviewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            PreviewAction::Select(id) => next.select(id),
            PreviewAction::ToggleMode => next.toggle_mode(),
            PreviewAction::Settle(generation) => next.settle(generation),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::scale::ScaleState;

    #[test]
    fn selecting_active_project_is_noop() {
        let mut state = PreviewState::new(6);
        assert!(!state.select(0));
        assert_eq!(state.phase(), SwitchPhase::Idle);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn selection_commits_after_settle() {
        let mut state = PreviewState::new(6);
        assert!(state.select(3));
        assert!(state.is_switching());
        assert_eq!(state.active_id(), 0);

        let generation = state.generation();
        assert!(state.settle(generation));
        assert_eq!(state.phase(), SwitchPhase::Idle);
        assert_eq!(state.active_id(), 3);
    }

    #[test]
    fn last_request_wins_within_window() {
        let mut state = PreviewState::new(6);
        state.select(1);
        let stale = state.generation();
        state.select(2);
        let current = state.generation();

        assert!(!state.settle(stale));
        assert!(state.is_switching());
        assert_eq!(state.active_id(), 0);

        assert!(state.settle(current));
        assert_eq!(state.active_id(), 2);
        assert_eq!(state.phase(), SwitchPhase::Idle);
        assert!(!state.settle(current));
    }

    #[test]
    fn reselecting_pending_target_does_not_restart() {
        let mut state = PreviewState::new(6);
        state.select(4);
        let generation = state.generation();
        assert!(!state.select(4));
        assert_eq!(state.generation(), generation);
    }

    #[test]
    fn returning_to_active_mid_switch_supersedes() {
        let mut state = PreviewState::new(6);
        state.select(4);
        assert!(state.select(0));
        assert!(state.settle(state.generation()));
        assert_eq!(state.active_id(), 0);
    }

    #[test]
    fn unknown_project_is_ignored() {
        let mut state = PreviewState::new(6);
        assert!(!state.select(6));
        assert!(!state.is_switching());
    }

    #[test]
    fn toggle_keeps_target_and_flips_mode() {
        let mut state = PreviewState::new(6);
        state.select(2);
        state.toggle_mode();
        assert_eq!(
            state.pending(),
            Some(PendingSwitch { target: 2, mode: DeviceMode::Mobile })
        );
        state.settle(state.generation());
        assert_eq!(state.active_id(), 2);
        assert_eq!(state.mode(), DeviceMode::Mobile);
    }

    #[test]
    fn mode_toggle_rescales_on_commit() {
        let container_width = 720.0;
        let mut state = PreviewState::new(6);
        let mut scale = ScaleState::new(state.mode().resolution().width);
        scale.observe(container_width);
        assert!((scale.scale() - 0.5).abs() < 1e-9);

        state.toggle_mode();
        scale.rebase(state.mode().resolution().width);
        assert!((scale.scale() - 0.5).abs() < 1e-9);

        state.settle(state.generation());
        scale.rebase(state.mode().resolution().width);
        assert!((scale.scale() - container_width / 390.0).abs() < 1e-9);
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let state = Rc::new(PreviewState::new(6));
        let same = state.clone().reduce(PreviewAction::Select(0));
        assert!(Rc::ptr_eq(&state, &same));
        let next = state.clone().reduce(PreviewAction::Select(1));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.is_switching());
    }

    #[test]
    fn toggles_then_select_commit_only_the_last_request() {
        let mut state = PreviewState::new(6);
        state.toggle_mode();
        let first = state.generation();
        state.toggle_mode();
        state.select(5);
        assert_eq!(
            state.pending(),
            Some(PendingSwitch { target: 5, mode: DeviceMode::Desktop })
        );
        assert!(!state.settle(first));
        assert!(state.settle(state.generation()));
        assert_eq!(state.active_id(), 5);
        assert_eq!(state.mode(), DeviceMode::Desktop);
        assert!(!state.is_switching());
    }

    #[test]
    fn empty_catalog_ignores_selection() {
        let mut state = PreviewState::new(0);
        assert!(!state.select(0));
        assert!(!state.is_switching());
        assert_eq!(state.generation(), 0);
    }
}
