//! Cancellable per-frame task.
//!
//! A [`FrameLoop`] runs its body once per display refresh until stopped. The
//! host decides what a "display refresh" is: `requestAnimationFrame` in the
//! browser, a manual queue in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Id of a pending frame request, as returned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub i32);

pub trait FrameHost {
    /// Run `frame` once on the next display refresh. `None` means the host
    /// could not schedule it.
    fn request(&self, frame: Box<dyn FnOnce()>) -> Option<FrameRequest>;
    fn cancel(&self, request: FrameRequest);
}

struct LoopState<H> {
    host: H,
    running: Cell<bool>,
    pending: Cell<Option<FrameRequest>>,
    frames: Cell<u64>,
    body: RefCell<Box<dyn FnMut()>>,
}

/// Handle to a running frame loop. Dropping it stops the loop.
pub struct FrameLoop<H: FrameHost + 'static> {
    state: Rc<LoopState<H>>,
}

impl<H: FrameHost + 'static> FrameLoop<H> {
    pub fn start(host: H, body: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            host,
            running: Cell::new(true),
            pending: Cell::new(None),
            frames: Cell::new(0),
            body: RefCell::new(Box::new(body)),
        });
        schedule(&state);
        Self { state }
    }

    /// Cancel the pending frame and release the body. Safe to call any
    /// number of times; once it returns the body never runs again.
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let Some(req) = self.state.pending.take() {
            self.state.host.cancel(req);
        }
        // A frame already handed to the host may still fire; it sees
        // `running == false` and returns without touching the body.
        if let Ok(mut body) = self.state.body.try_borrow_mut() {
            *body = Box::new(|| {});
        }
        log::debug!("[frame] loop stopped after {} frames", self.state.frames.get());
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Number of frames whose body has completed.
    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }
}

impl<H: FrameHost + 'static> Drop for FrameLoop<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<H: FrameHost + 'static>(state: &Rc<LoopState<H>>) {
    let next = Rc::clone(state);
    match state.host.request(Box::new(move || run_frame(&next))) {
        Some(req) => state.pending.set(Some(req)),
        None => {
            state.running.set(false);
            log::warn!("[frame] host refused a frame request; loop stopped");
        }
    }
}

fn run_frame<H: FrameHost + 'static>(state: &Rc<LoopState<H>>) {
    state.pending.set(None);
    if !state.running.get() {
        return;
    }
    {
        let mut body = state.body.borrow_mut();
        (*body)();
    }
    state.frames.set(state.frames.get() + 1);
    if state.running.get() {
        schedule(state);
    }
}
