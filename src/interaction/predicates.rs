use serde::{Deserialize, Serialize};

use super::handlers::{
    AxisDragGesture, GestureHandler, PanGesture, PointSelectGesture, RubberBandZoomGesture,
};
use super::modifiers::{ModifierFlags, ModifierSnapshot, MouseButton};
use super::region::RegionKind;
use super::router::GestureRegistration;
use super::GestureMode;

/// Everything an activation predicate may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationInput {
    pub snapshot: ModifierSnapshot,
    pub region: RegionKind,
    pub button: MouseButton,
}

pub type ActivationPredicate = Box<dyn Fn(&ActivationInput) -> bool>;

/// Input matched by more than one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateConflict {
    pub input: ActivationInput,
    /// Registration that wins at runtime.
    pub winner: GestureMode,
    pub shadowed: GestureMode,
}

#[must_use]
pub fn pan_predicate(input: &ActivationInput) -> bool {
    input.button == MouseButton::Left
        && input.region == RegionKind::PlotArea
        && input.snapshot.has_no_modifiers()
}

#[must_use]
pub fn rubber_band_predicate(input: &ActivationInput) -> bool {
    input.button == MouseButton::Left && input.region == RegionKind::PlotArea && input.snapshot.shift
}

#[must_use]
pub fn point_select_predicate(input: &ActivationInput) -> bool {
    input.button == MouseButton::Left && input.region == RegionKind::PlotArea && input.snapshot.ctrl
}

#[must_use]
pub fn axis_drag_predicate(input: &ActivationInput) -> bool {
    input.button == MouseButton::Left && input.region.is_axis()
}

/// Default registrations, in priority order: pan, rubber-band zoom, point
/// select, axis drag.
#[must_use]
pub fn default_gestures() -> Vec<GestureRegistration> {
    vec![
        registration(GestureMode::Pan, pan_predicate, PanGesture::new()),
        registration(
            GestureMode::RubberBandZoom,
            rubber_band_predicate,
            RubberBandZoomGesture::new(),
        ),
        registration(
            GestureMode::PointSelect,
            point_select_predicate,
            PointSelectGesture::new(),
        ),
        registration(GestureMode::AxisDrag, axis_drag_predicate, AxisDragGesture::new()),
    ]
}

fn registration<H>(
    mode: GestureMode,
    predicate: fn(&ActivationInput) -> bool,
    handler: H,
) -> GestureRegistration
where
    H: GestureHandler + 'static,
{
    GestureRegistration::new(mode, Box::new(predicate), Box::new(handler))
}

/// Every activation input the predicates can observe: modifier combinations ×
/// region kinds × buttons.
pub(crate) fn activation_domain() -> impl Iterator<Item = ActivationInput> {
    ModifierFlags::all_combinations().flat_map(|flags| {
        RegionKind::ALL.into_iter().flat_map(move |region| {
            MouseButton::ALL.into_iter().map(move |button| ActivationInput {
                snapshot: ModifierSnapshot::new(flags, Some(button)),
                region,
                button,
            })
        })
    })
}

/// Lists inputs claimed by more than one registration.
pub(crate) fn find_conflicts(registrations: &[GestureRegistration]) -> Vec<PredicateConflict> {
    let mut conflicts = Vec::new();
    for input in activation_domain() {
        let mut matching = registrations
            .iter()
            .filter(|registration| registration.matches(&input));
        let Some(winner) = matching.next() else {
            continue;
        };
        for shadowed in matching {
            conflicts.push(PredicateConflict {
                input,
                winner: winner.mode(),
                shadowed: shadowed.mode(),
            });
        }
    }
    conflicts
}
