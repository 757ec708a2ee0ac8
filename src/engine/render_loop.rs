//! Self-rearming, cancelable animation loop.
//!
//! Each frame callback runs the user's frame function and then requests the
//! next frame. [`RenderLoop::stop`] (or dropping the loop) cancels the
//! outstanding request, so no frame function runs after the loop is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::scheduler::{FrameHandle, FrameScheduler};
use crate::error::MolsketchError;

type FrameFn = Box<dyn FnMut(f64)>;

struct LoopState {
    scheduler: Rc<dyn FrameScheduler>,
    /// Taken out while it runs so it may call back into the loop.
    frame_fn: Option<FrameFn>,
    pending: Option<FrameHandle>,
    running: bool,
    frames: u64,
}

/// Handle to a running animation loop.
pub struct RenderLoop {
    state: Rc<RefCell<LoopState>>,
}

impl std::fmt::Debug for RenderLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderLoop")
            .field("running", &self.is_running())
            .field("frames", &self.frames())
            .finish()
    }
}

impl RenderLoop {
    /// Request the first frame and keep calling `frame_fn` once per frame.
    ///
    /// # Errors
    ///
    /// [`MolsketchError::Scheduler`] if the first frame cannot be requested.
    pub fn start<F>(
        scheduler: Rc<dyn FrameScheduler>,
        frame_fn: F,
    ) -> Result<Self, MolsketchError>
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(RefCell::new(LoopState {
            scheduler,
            frame_fn: Some(Box::new(frame_fn)),
            pending: None,
            running: true,
            frames: 0,
        }));
        arm(&state)?;
        log::info!("render loop started");
        Ok(Self { state })
    }

    /// Cancel the outstanding frame. Idempotent.
    pub fn stop(&self) {
        let (scheduler, pending) = {
            let mut state = self.state.borrow_mut();
            if !state.running {
                return;
            }
            state.running = false;
            (Rc::clone(&state.scheduler), state.pending.take())
        };
        if let Some(handle) = pending {
            scheduler.cancel(handle);
        }
        log::info!("render loop stopped after {} frames", self.frames());
    }

    /// Whether frames are still being requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    /// Frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.state.borrow().frames
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm(state: &Rc<RefCell<LoopState>>) -> Result<(), MolsketchError> {
    let weak = Rc::downgrade(state);
    let scheduler = Rc::clone(&state.borrow().scheduler);
    let handle = scheduler.schedule_frame(Box::new(move |timestamp| {
        run_frame(&weak, timestamp);
    }))?;
    state.borrow_mut().pending = Some(handle);
    Ok(())
}

fn run_frame(weak: &Weak<RefCell<LoopState>>, timestamp: f64) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let frame_fn = {
        let mut s = state.borrow_mut();
        s.pending = None;
        if !s.running {
            return;
        }
        s.frame_fn.take()
    };
    let Some(mut frame_fn) = frame_fn else {
        return;
    };

    frame_fn(timestamp);

    let still_running = {
        let mut s = state.borrow_mut();
        s.frame_fn = Some(frame_fn);
        s.frames += 1;
        s.running
    };
    if still_running {
        if let Err(e) = arm(&state) {
            log::error!("render loop could not request next frame: {e}");
            state.borrow_mut().running = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::engine::scheduler::ManualScheduler;

    fn counting_loop(
        scheduler: &ManualScheduler,
    ) -> (RenderLoop, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let render_loop =
            RenderLoop::start(Rc::new(scheduler.clone()), move |_| {
                counter.set(counter.get() + 1);
            })
            .unwrap();
        (render_loop, count)
    }

    #[test]
    fn rearms_every_frame() {
        let scheduler = ManualScheduler::new();
        let (render_loop, count) = counting_loop(&scheduler);
        for t in 0..5 {
            assert_eq!(scheduler.run_frame(f64::from(t) * 16.0), 1);
        }
        assert_eq!(count.get(), 5);
        assert_eq!(render_loop.frames(), 5);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn stop_cancels_outstanding_frame() {
        let scheduler = ManualScheduler::new();
        let (render_loop, count) = counting_loop(&scheduler);
        let _ = scheduler.run_frame(0.0);
        render_loop.stop();
        assert!(!render_loop.is_running());
        assert_eq!(scheduler.pending(), 0);
        let _ = scheduler.run_frame(16.0);
        assert_eq!(count.get(), 1);
        render_loop.stop();
    }

    #[test]
    fn drop_stops_the_loop() {
        let scheduler = ManualScheduler::new();
        let (render_loop, count) = counting_loop(&scheduler);
        drop(render_loop);
        assert_eq!(scheduler.pending(), 0);
        let _ = scheduler.run_frame(0.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn frame_fn_may_stop_its_own_loop() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<RenderLoop>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let render_loop =
            RenderLoop::start(Rc::new(scheduler.clone()), move |_| {
                if let Some(l) = inner.borrow().as_ref() {
                    l.stop();
                }
            })
            .unwrap();
        *slot.borrow_mut() = Some(render_loop);

        let _ = scheduler.run_frame(0.0);
        assert_eq!(scheduler.pending(), 0);
        assert!(!slot.borrow().as_ref().unwrap().is_running());
    }
}
