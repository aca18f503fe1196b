use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::handlers::{GestureHandler, GestureInput, WheelDecision, WheelTarget};
use super::modifiers::{ModifierSnapshot, MouseButton};
use super::predicates::{ActivationInput, ActivationPredicate, PredicateConflict, find_conflicts};
use super::region::{RegionHit, RegionKind};
use super::view::{ViewDelta, ViewFrame};
use super::{GestureMode, GesturePhase};

/// A gesture the router may activate on pointer-down.
pub struct GestureRegistration {
    mode: GestureMode,
    predicate: ActivationPredicate,
    handler: Box<dyn GestureHandler>,
}

impl GestureRegistration {
    #[must_use]
    pub fn new(
        mode: GestureMode,
        predicate: ActivationPredicate,
        handler: Box<dyn GestureHandler>,
    ) -> Self {
        Self {
            mode,
            predicate,
            handler,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.handler.phase()
    }

    #[must_use]
    pub fn matches(&self, input: &ActivationInput) -> bool {
        (self.predicate)(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RouterState {
    #[default]
    Idle,
    Active(GestureMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureOutcome {
    Committed(GestureMode),
    Cancelled(GestureMode),
}

/// How one wheel tick is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelRoute {
    /// Not over any region: leave it to the host widget.
    Forward,
    /// Consumed without effect.
    Suppress,
    Apply(WheelDecision),
}

#[derive(Debug, Clone, Copy)]
struct ActiveSlot {
    index: usize,
    button: MouseButton,
}

/// Decides which single gesture owns the pointer.
///
/// The active slot is the only path to a handler, so at most one handler is
/// ever `Active` and no other handler receives events while it is.
#[derive(Default)]
pub struct GestureRouter {
    registrations: Vec<GestureRegistration>,
    /// Ambiguities found when registrations were installed.
    conflicts: Vec<PredicateConflict>,
    active: Option<ActiveSlot>,
    last_outcome: Option<GestureOutcome>,
}

impl GestureRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a router from registrations in priority order. Ambiguous
    /// predicate combinations are logged once and kept in [`Self::conflicts`].
    #[must_use]
    pub fn with_registrations(registrations: Vec<GestureRegistration>) -> Self {
        let mut router = Self {
            registrations,
            conflicts: Vec::new(),
            active: None,
            last_outcome: None,
        };
        let _ = router.revalidate();
        router
    }

    /// Appends a registration; earlier registrations keep priority.
    ///
    /// Returns the conflicts this registration introduced.
    pub fn register(&mut self, registration: GestureRegistration) -> Vec<PredicateConflict> {
        self.registrations.push(registration);
        self.revalidate()
    }

    /// Inputs claimed by more than one registration. Runtime resolution stays
    /// first-registered-wins.
    #[must_use]
    pub fn conflicts(&self) -> &[PredicateConflict] {
        &self.conflicts
    }

    /// Rescans the registrations and logs conflicts not seen before.
    fn revalidate(&mut self) -> Vec<PredicateConflict> {
        let conflicts = find_conflicts(&self.registrations);
        let fresh: Vec<PredicateConflict> = conflicts
            .iter()
            .filter(|conflict| !self.conflicts.contains(*conflict))
            .copied()
            .collect();
        for conflict in &fresh {
            warn!(
                winner = ?conflict.winner,
                shadowed = ?conflict.shadowed,
                input = ?conflict.input,
                "ambiguous gesture predicates"
            );
        }
        self.conflicts = conflicts;
        fresh
    }

    #[must_use]
    pub fn registered_modes(&self) -> Vec<GestureMode> {
        self.registrations.iter().map(GestureRegistration::mode).collect()
    }

    #[must_use]
    pub fn state(&self) -> RouterState {
        match self.active {
            Some(slot) => RouterState::Active(self.registrations[slot.index].mode),
            None => RouterState::Idle,
        }
    }

    #[must_use]
    pub fn active_mode(&self) -> Option<GestureMode> {
        self.active.map(|slot| self.registrations[slot.index].mode)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.last_outcome
    }

    /// Phase of every registered handler, in registration order.
    #[must_use]
    pub fn phases(&self) -> Vec<(GestureMode, GesturePhase)> {
        self.registrations
            .iter()
            .map(|registration| (registration.mode, registration.phase()))
            .collect()
    }

    #[must_use]
    pub fn active_handler_count(&self) -> usize {
        self.registrations
            .iter()
            .filter(|registration| registration.phase() == GesturePhase::Active)
            .count()
    }

    /// Whether the active handler applies its pending deltas while dragging.
    #[must_use]
    pub fn active_applies_live(&self) -> bool {
        self.active
            .is_some_and(|slot| self.registrations[slot.index].handler.applies_live())
    }

    /// Evaluates predicates in registration order; the first match becomes
    /// the active gesture. Returns `None` when nothing matched or a gesture
    /// is already active.
    pub fn pointer_down(
        &mut self,
        input: &GestureInput,
        button: MouseButton,
        frame: &ViewFrame<'_>,
    ) -> Option<GestureMode> {
        if self.active.is_some() {
            debug!(?button, "pointer down ignored while a gesture is active");
            return None;
        }

        let activation = ActivationInput {
            snapshot: input.snapshot,
            region: input.region.kind,
            button,
        };
        let index = self
            .registrations
            .iter()
            .position(|registration| registration.matches(&activation))?;

        let registration = &mut self.registrations[index];
        registration.handler.activate(input, frame);
        self.active = Some(ActiveSlot { index, button });
        debug!(mode = ?registration.mode, region = ?input.region.kind, "gesture activated");
        Some(registration.mode)
    }

    /// Forwards a move to the active handler only.
    pub fn pointer_move(
        &mut self,
        input: &GestureInput,
        frame: &ViewFrame<'_>,
    ) -> Option<(GestureMode, ViewDelta)> {
        let slot = self.active?;
        let registration = &mut self.registrations[slot.index];
        let delta = registration.handler.update(input, frame);
        Some((registration.mode, delta))
    }

    /// Commits the active gesture when `button` is the one that started it.
    pub fn pointer_up(
        &mut self,
        input: &GestureInput,
        button: MouseButton,
        frame: &ViewFrame<'_>,
    ) -> Option<(GestureMode, ViewDelta)> {
        let slot = self.active?;
        if slot.button != button {
            return None;
        }

        let registration = &mut self.registrations[slot.index];
        let _ = registration.handler.update(input, frame);
        let delta = registration.handler.commit();
        let mode = registration.mode;
        self.active = None;
        self.last_outcome = Some(GestureOutcome::Committed(mode));
        debug!(?mode, "gesture committed");
        Some((mode, delta))
    }

    /// Cancels the active gesture when it no longer holds under `snapshot`.
    pub fn modifiers_changed(&mut self, snapshot: &ModifierSnapshot) -> Option<GestureMode> {
        let slot = self.active?;
        if self.registrations[slot.index].handler.holds_under(snapshot) {
            return None;
        }
        self.cancel()
    }

    /// Cancels the active gesture, if any.
    pub fn cancel(&mut self) -> Option<GestureMode> {
        let slot = self.active.take()?;
        let registration = &mut self.registrations[slot.index];
        registration.handler.cancel();
        self.last_outcome = Some(GestureOutcome::Cancelled(registration.mode));
        debug!(mode = ?registration.mode, "gesture cancelled");
        Some(registration.mode)
    }

    /// Decides one wheel tick. Wheel gestures never become active.
    #[must_use]
    pub fn route_wheel(&self, hit: RegionHit, snapshot: &ModifierSnapshot) -> WheelRoute {
        if self.active.is_some() {
            return WheelRoute::Suppress;
        }

        match (hit.kind, hit.axis) {
            (RegionKind::XAxis | RegionKind::YAxis, Some(axis)) => {
                let mode = if snapshot.ctrl {
                    GestureMode::WheelZoom
                } else {
                    GestureMode::WheelPan
                };
                WheelRoute::Apply(WheelDecision {
                    mode,
                    target: WheelTarget::Axis(axis),
                })
            }
            (RegionKind::PlotArea, _) if !snapshot.ctrl => WheelRoute::Apply(WheelDecision {
                mode: GestureMode::WheelZoom,
                target: WheelTarget::AllAxes,
            }),
            (RegionKind::PlotArea, _) => WheelRoute::Suppress,
            (RegionKind::XAxis | RegionKind::YAxis, None) | (RegionKind::None, _) => {
                WheelRoute::Forward
            }
        }
    }
}
