use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Keyboard modifier flags carried by pointer and wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierFlags {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ModifierFlags {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
        alt: false,
    };
    pub const ALT: Self = Self {
        ctrl: false,
        shift: false,
        alt: true,
    };

    #[must_use]
    pub fn any(self) -> bool {
        self.ctrl || self.shift || self.alt
    }

    /// All eight flag combinations, used for exhaustive predicate checks.
    pub fn all_combinations() -> impl Iterator<Item = Self> {
        (0u8..8).map(|bits| Self {
            ctrl: bits & 0b001 != 0,
            shift: bits & 0b010 != 0,
            alt: bits & 0b100 != 0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Control,
    Shift,
    Alt,
    Escape,
    Other,
}

/// Raw input as delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RawInputEvent {
    PointerDown {
        position: Point,
        button: MouseButton,
        modifiers: ModifierFlags,
    },
    PointerMove {
        position: Point,
        modifiers: ModifierFlags,
    },
    PointerUp {
        position: Point,
        button: MouseButton,
        modifiers: ModifierFlags,
    },
    /// `delta_y` follows DOM wheel units: `120` per notch, negative scrolls up.
    Wheel {
        position: Point,
        delta_y: f64,
        modifiers: ModifierFlags,
    },
    DoubleClick {
        position: Point,
        button: MouseButton,
        modifiers: ModifierFlags,
    },
    KeyDown {
        key: Key,
    },
    KeyUp {
        key: Key,
    },
    FocusLost,
}

impl RawInputEvent {
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { position, .. }
            | Self::PointerMove { position, .. }
            | Self::PointerUp { position, .. }
            | Self::Wheel { position, .. }
            | Self::DoubleClick { position, .. } => Some(position),
            Self::KeyDown { .. } | Self::KeyUp { .. } | Self::FocusLost => None,
        }
    }

    #[must_use]
    pub fn modifiers(&self) -> Option<ModifierFlags> {
        match *self {
            Self::PointerDown { modifiers, .. }
            | Self::PointerMove { modifiers, .. }
            | Self::PointerUp { modifiers, .. }
            | Self::Wheel { modifiers, .. }
            | Self::DoubleClick { modifiers, .. } => Some(modifiers),
            Self::KeyDown { .. } | Self::KeyUp { .. } | Self::FocusLost => None,
        }
    }
}

/// Immutable modifier/button state at one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierSnapshot {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub button: Option<MouseButton>,
}

impl ModifierSnapshot {
    #[must_use]
    pub fn new(flags: ModifierFlags, button: Option<MouseButton>) -> Self {
        Self {
            ctrl: flags.ctrl,
            shift: flags.shift,
            alt: flags.alt,
            button,
        }
    }

    #[must_use]
    pub fn flags(self) -> ModifierFlags {
        ModifierFlags {
            ctrl: self.ctrl,
            shift: self.shift,
            alt: self.alt,
        }
    }

    #[must_use]
    pub fn has_no_modifiers(self) -> bool {
        !self.flags().any()
    }
}

/// Derives a fresh [`ModifierSnapshot`] per raw event.
///
/// The only memory is the previous snapshot, used where an event carries
/// no button (wheel, move) or no flags (keys).
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierState {
    last: ModifierSnapshot,
}

impl ModifierState {
    #[must_use]
    pub fn snapshot(&self) -> ModifierSnapshot {
        self.last
    }

    pub fn update(&mut self, event: &RawInputEvent) -> ModifierSnapshot {
        let previous = self.last;
        self.last = match *event {
            RawInputEvent::PointerDown {
                button, modifiers, ..
            } => ModifierSnapshot::new(modifiers, Some(button)),
            RawInputEvent::PointerUp { modifiers, .. } => ModifierSnapshot::new(modifiers, None),
            RawInputEvent::PointerMove { modifiers, .. }
            | RawInputEvent::Wheel { modifiers, .. }
            | RawInputEvent::DoubleClick { modifiers, .. } => {
                ModifierSnapshot::new(modifiers, previous.button)
            }
            RawInputEvent::KeyDown { key } => with_key(previous, key, true),
            RawInputEvent::KeyUp { key } => with_key(previous, key, false),
            RawInputEvent::FocusLost => ModifierSnapshot::default(),
        };
        self.last
    }
}

fn with_key(mut snapshot: ModifierSnapshot, key: Key, pressed: bool) -> ModifierSnapshot {
    match key {
        Key::Control => snapshot.ctrl = pressed,
        Key::Shift => snapshot.shift = pressed,
        Key::Alt => snapshot.alt = pressed,
        Key::Escape | Key::Other => {}
    }
    snapshot
}
