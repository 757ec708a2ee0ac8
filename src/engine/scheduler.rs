//! Frame scheduling.
//!
//! A [`FrameScheduler`] queues one-shot callbacks to run on the next
//! animation frame, the way `requestAnimationFrame` does. The browser
//! implementation lives in the `web` module; [`ManualScheduler`] is pumped by
//! hand for headless rendering and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::MolsketchError;

/// Callback run on a frame, given the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Identifies a queued frame so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i64);

/// Something that can run a callback on the next frame.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame.
    ///
    /// # Errors
    ///
    /// [`MolsketchError::Scheduler`] if the host refused the request.
    fn schedule_frame(
        &self,
        callback: FrameCallback,
    ) -> Result<FrameHandle, MolsketchError>;

    /// Drop a queued callback. Unknown or already-run handles are ignored.
    fn cancel(&self, handle: FrameHandle);
}

#[derive(Default)]
struct ManualQueue {
    next_id: i64,
    pending: Vec<(FrameHandle, FrameCallback)>,
}

/// Scheduler driven by explicit [`ManualScheduler::run_frame`] calls.
///
/// Clones share one queue, so a clone can be handed to a render loop while
/// the owner keeps pumping frames.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

impl ManualScheduler {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued callbacks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Run every callback queued before this call. Callbacks queued while
    /// running wait for the next call. Returns how many ran.
    pub fn run_frame(&self, timestamp: f64) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = due.len();
        for (_, callback) in due {
            callback(timestamp);
        }
        count
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_frame(
        &self,
        callback: FrameCallback,
    ) -> Result<FrameHandle, MolsketchError> {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let handle = FrameHandle(queue.next_id);
        queue.pending.push((handle, callback));
        Ok(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        self.queue.borrow_mut().pending.retain(|(h, _)| *h != handle);
    }
}

/// Host-side objects that must stay alive while their frame is queued,
/// keyed by frame handle.
///
/// An entry cannot be freed from inside its own callback, so a fired entry
/// is only marked; marked entries are released on the next
/// [`RetainedCallbacks::insert`] or [`RetainedCallbacks::release`].
/// Cancelled entries are released immediately.
#[derive(Debug)]
pub struct RetainedCallbacks<T> {
    live: RefCell<HashMap<FrameHandle, T>>,
    fired: RefCell<Vec<FrameHandle>>,
}

impl<T> Default for RetainedCallbacks<T> {
    fn default() -> Self {
        Self {
            live: RefCell::new(HashMap::new()),
            fired: RefCell::new(Vec::new()),
        }
    }
}

impl<T> RetainedCallbacks<T> {
    /// Keep `value` alive until `handle` fires or is released.
    pub fn insert(&self, handle: FrameHandle, value: T) {
        self.sweep();
        drop(self.live.borrow_mut().insert(handle, value));
    }

    /// Called from inside the callback once it has run.
    pub fn mark_fired(&self, handle: FrameHandle) {
        self.fired.borrow_mut().push(handle);
    }

    /// Drop the entry for a cancelled frame.
    pub fn release(&self, handle: FrameHandle) {
        self.sweep();
        drop(self.live.borrow_mut().remove(&handle));
    }

    /// Entries still held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.borrow().len()
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.borrow().is_empty()
    }

    fn sweep(&self) {
        let fired = std::mem::take(&mut *self.fired.borrow_mut());
        let mut live = self.live.borrow_mut();
        for handle in fired {
            drop(live.remove(&handle));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn runs_only_previously_queued_callbacks() {
        let scheduler = ManualScheduler::new();
        let ran = Rc::new(Cell::new(0));

        let inner = scheduler.clone();
        let counter = Rc::clone(&ran);
        let _ = scheduler
            .schedule_frame(Box::new(move |_| {
                counter.set(counter.get() + 1);
                let counter = Rc::clone(&counter);
                let _ = inner.schedule_frame(Box::new(move |_| {
                    counter.set(counter.get() + 10);
                }));
            }))
            .unwrap();

        assert_eq!(scheduler.run_frame(16.0), 1);
        assert_eq!(ran.get(), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.run_frame(32.0), 1);
        assert_eq!(ran.get(), 11);
    }

    #[test]
    fn cancelled_callbacks_never_run() {
        let scheduler = ManualScheduler::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let handle = scheduler
            .schedule_frame(Box::new(move |_| flag.set(true)))
            .unwrap();
        scheduler.cancel(handle);
        assert_eq!(scheduler.run_frame(0.0), 0);
        assert!(!ran.get());
    }

    #[test]
    fn timestamp_is_forwarded() {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(Cell::new(0.0));
        let slot = Rc::clone(&seen);
        let _ = scheduler
            .schedule_frame(Box::new(move |ts| slot.set(ts)))
            .unwrap();
        let _ = scheduler.run_frame(123.5);
        assert_eq!(seen.get(), 123.5);
    }

    #[test]
    fn retained_callbacks_freed_on_cancel_and_after_firing() {
        let token = Rc::new(());
        let slots = RetainedCallbacks::default();
        slots.insert(FrameHandle(1), Rc::clone(&token));
        slots.insert(FrameHandle(2), Rc::clone(&token));
        assert_eq!(Rc::strong_count(&token), 3);

        slots.release(FrameHandle(2));
        assert_eq!(Rc::strong_count(&token), 2);

        // Marked entries survive until the next insert or release.
        slots.mark_fired(FrameHandle(1));
        assert_eq!(slots.len(), 1);
        slots.insert(FrameHandle(3), Rc::clone(&token));
        assert_eq!(slots.len(), 1);
        assert_eq!(Rc::strong_count(&token), 2);
    }

    #[test]
    fn start_stop_cycles_do_not_accumulate() {
        let token = Rc::new(());
        let slots = RetainedCallbacks::default();
        for id in 0..100 {
            slots.insert(FrameHandle(id), Rc::clone(&token));
            slots.release(FrameHandle(id));
        }
        assert!(slots.is_empty());
        assert_eq!(Rc::strong_count(&token), 1);
    }
}
