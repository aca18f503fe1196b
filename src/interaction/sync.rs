//! Visible-range mirroring between axes of different surfaces.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::core::{AxisId, VisibleRange};

type RangeListener = Box<dyn FnMut(AxisId, VisibleRange)>;

struct AxisCell {
    id: AxisId,
    range: Cell<VisibleRange>,
    writes: Cell<u64>,
    links: RefCell<Vec<Weak<BindingLink>>>,
    listeners: RefCell<Vec<RangeListener>>,
}

/// Shared, single-threaded handle to one axis' visible range.
///
/// Every effective write notifies the axis listeners and the bindings the
/// axis takes part in.
#[derive(Clone)]
pub struct AxisHandle {
    cell: Rc<AxisCell>,
}

impl fmt::Debug for AxisHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisHandle")
            .field("id", &self.cell.id)
            .field("range", &self.cell.range.get())
            .field("writes", &self.cell.writes.get())
            .finish()
    }
}

impl AxisHandle {
    #[must_use]
    pub fn new(id: AxisId, range: VisibleRange) -> Self {
        Self {
            cell: Rc::new(AxisCell {
                id,
                range: Cell::new(range),
                writes: Cell::new(0),
                links: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> AxisId {
        self.cell.id
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.cell.range.get()
    }

    /// Number of effective range writes since creation.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.cell.writes.get()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &AxisHandle) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    /// Registers a callback invoked after every effective write.
    ///
    /// Listeners must not write to this same axis.
    pub fn subscribe(&self, listener: impl FnMut(AxisId, VisibleRange) + 'static) {
        self.cell.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Writes `range`; returns `false` when it equals the current range and
    /// nothing was written or propagated.
    pub fn set_visible_range(&self, range: VisibleRange) -> bool {
        if self.cell.range.get() == range {
            return false;
        }
        self.cell.range.set(range);
        self.cell.writes.set(self.cell.writes.get() + 1);
        trace!(axis = %self.cell.id, min = range.min(), max = range.max(), "axis range written");

        self.notify_listeners(range);
        self.propagate(range);
        true
    }

    fn notify_listeners(&self, range: VisibleRange) {
        let mut listeners = self.cell.listeners.take();
        for listener in &mut listeners {
            listener(self.cell.id, range);
        }
        let mut slot = self.cell.listeners.borrow_mut();
        listeners.append(&mut slot);
        *slot = listeners;
    }

    fn propagate(&self, range: VisibleRange) {
        let links: Vec<Rc<BindingLink>> = {
            let mut links = self.cell.links.borrow_mut();
            links.retain(|link| link.strong_count() > 0);
            links.iter().filter_map(Weak::upgrade).collect()
        };
        for link in links {
            link.mirror_from(&self.cell, range);
        }
    }
}

struct BindingLink {
    a: Weak<AxisCell>,
    b: Weak<AxisCell>,
    propagating: Cell<bool>,
}

impl BindingLink {
    fn mirror_from(&self, source: &Rc<AxisCell>, range: VisibleRange) {
        // Echo from the counterpart while this binding is already writing.
        if self.propagating.get() {
            return;
        }
        let target = if std::ptr::eq(self.a.as_ptr(), Rc::as_ptr(source)) {
            &self.b
        } else {
            &self.a
        };
        let Some(cell) = target.upgrade() else {
            return;
        };

        self.propagating.set(true);
        AxisHandle { cell }.set_visible_range(range);
        self.propagating.set(false);
    }
}

/// Keeps two axes mirrored for as long as the binding is alive.
#[must_use = "dropping the binding unbinds the axes"]
pub struct AxisBinding {
    link: Rc<BindingLink>,
}

impl fmt::Debug for AxisBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisBinding")
            .field("propagating", &self.link.propagating.get())
            .finish()
    }
}

impl AxisBinding {
    /// Whether both axes are still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.link.a.strong_count() > 0 && self.link.b.strong_count() > 0
    }
}

/// Mirrors visible-range writes between `a` and `b`, in both directions.
pub fn bind(a: &AxisHandle, b: &AxisHandle) -> AxisBinding {
    let link = Rc::new(BindingLink {
        a: Rc::downgrade(&a.cell),
        b: Rc::downgrade(&b.cell),
        propagating: Cell::new(false),
    });
    a.cell.links.borrow_mut().push(Rc::downgrade(&link));
    if !a.ptr_eq(b) {
        b.cell.links.borrow_mut().push(Rc::downgrade(&link));
    }
    AxisBinding { link }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{AxisHandle, bind};
    use crate::core::{AxisId, VisibleRange};

    fn range(min: f64, max: f64) -> VisibleRange {
        VisibleRange::new(min, max).expect("range")
    }

    #[test]
    fn listeners_see_every_effective_write() {
        let axis = AxisHandle::new(AxisId::PRIMARY_X, range(0.0, 1.0));
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        axis.subscribe(move |_, _| counter.set(counter.get() + 1));

        assert!(axis.set_visible_range(range(0.0, 2.0)));
        assert!(!axis.set_visible_range(range(0.0, 2.0)));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn dropped_binding_stops_mirroring() {
        let a = AxisHandle::new(AxisId::PRIMARY_X, range(0.0, 1.0));
        let b = AxisHandle::new(AxisId::PRIMARY_X, range(0.0, 1.0));
        let binding = bind(&a, &b);
        assert!(binding.is_live());
        drop(binding);

        a.set_visible_range(range(5.0, 6.0));
        assert_eq!(b.visible_range(), range(0.0, 1.0));
    }
}
