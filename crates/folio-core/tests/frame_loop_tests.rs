// Host-side tests for the cancellable frame loop, driven by a manual host.

use folio_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Queued = (FrameRequest, Box<dyn FnOnce()>);

#[derive(Default)]
struct Queue {
    next_id: i32,
    queued: Vec<Queued>,
    cancelled: Vec<FrameRequest>,
    refuse: bool,
}

/// Frames only fire when the test calls `fire`.
#[derive(Clone, Default)]
struct ManualHost {
    queue: Rc<RefCell<Queue>>,
}

impl FrameHost for ManualHost {
    fn request(&self, frame: Box<dyn FnOnce()>) -> Option<FrameRequest> {
        let mut q = self.queue.borrow_mut();
        if q.refuse {
            return None;
        }
        q.next_id += 1;
        let req = FrameRequest(q.next_id);
        q.queued.push((req, frame));
        Some(req)
    }

    fn cancel(&self, request: FrameRequest) {
        let mut q = self.queue.borrow_mut();
        q.queued.retain(|(r, _)| *r != request);
        q.cancelled.push(request);
    }
}

impl ManualHost {
    fn take(&self) -> Vec<Queued> {
        std::mem::take(&mut self.queue.borrow_mut().queued)
    }

    /// Run one display refresh; returns how many callbacks fired.
    fn fire(&self) -> usize {
        let batch = self.take();
        let n = batch.len();
        for (_, f) in batch {
            f();
        }
        n
    }

    fn pending(&self) -> usize {
        self.queue.borrow().queued.len()
    }
}

fn counting_loop(host: &ManualHost) -> (FrameLoop<ManualHost>, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let handle = FrameLoop::start(host.clone(), move || c.set(c.get() + 1));
    (handle, count)
}

#[test]
fn runs_body_once_per_refresh() {
    let host = ManualHost::default();
    let (handle, count) = counting_loop(&host);
    assert_eq!(count.get(), 0);
    assert_eq!(host.pending(), 1);

    for expected in 1..=5 {
        assert_eq!(host.fire(), 1);
        assert_eq!(count.get(), expected);
        assert_eq!(host.pending(), 1);
    }
    assert!(handle.is_running());
    assert_eq!(handle.frames(), 5);
}

#[test]
fn stop_cancels_pending_request_and_is_idempotent() {
    let host = ManualHost::default();
    let (handle, count) = counting_loop(&host);
    host.fire();

    handle.stop();
    assert!(!handle.is_running());
    assert_eq!(host.pending(), 0);
    assert_eq!(host.queue.borrow().cancelled.len(), 1);

    handle.stop();
    handle.stop();
    assert_eq!(host.queue.borrow().cancelled.len(), 1);

    assert_eq!(host.fire(), 0);
    assert_eq!(count.get(), 1);
}

#[test]
fn already_delivered_frame_does_not_run_after_stop() {
    let host = ManualHost::default();
    let (handle, count) = counting_loop(&host);

    // the host has handed the callback out but not yet run it
    let in_flight = host.take();
    handle.stop();
    for (_, f) in in_flight {
        f();
    }
    assert_eq!(count.get(), 0);
    assert_eq!(host.pending(), 0);
}

#[test]
fn dropping_the_handle_stops_the_loop() {
    let host = ManualHost::default();
    let (handle, count) = counting_loop(&host);
    host.fire();
    drop(handle);

    assert_eq!(host.pending(), 0);
    host.fire();
    assert_eq!(count.get(), 1);
}

#[test]
fn refused_request_leaves_loop_stopped() {
    let host = ManualHost::default();
    host.queue.borrow_mut().refuse = true;
    let (handle, count) = counting_loop(&host);
    assert!(!handle.is_running());
    assert_eq!(host.fire(), 0);
    assert_eq!(count.get(), 0);
}

#[test]
fn stop_releases_the_body() {
    let host = ManualHost::default();
    let captured = Rc::new(());
    let held = captured.clone();
    let handle = FrameLoop::start(host.clone(), move || {
        assert!(Rc::strong_count(&held) > 0);
    });
    assert_eq!(Rc::strong_count(&captured), 2);
    handle.stop();
    assert_eq!(Rc::strong_count(&captured), 1);
}

#[derive(Default)]
struct CountingSurface {
    clears: usize,
    circles: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _size: Vec2) {
        self.clears += 1;
    }
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _opacity: f32) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32) {
        self.circles += 1;
    }
}

#[test]
fn field_ticks_once_per_frame_with_interleaved_events() {
    let host = ManualHost::default();
    let field = Rc::new(RefCell::new(ParticleField::new(
        FieldConfig::default(),
        Vec2::new(800.0, 600.0),
        &mut StdRng::seed_from_u64(3),
    )));
    let surface = Rc::new(RefCell::new(CountingSurface::default()));

    let f = field.clone();
    let s = surface.clone();
    let handle = FrameLoop::start(host.clone(), move || {
        f.borrow_mut().tick(&mut *s.borrow_mut());
    });

    host.fire();
    field.borrow_mut().on_pointer_move(Vec2::new(10.0, 10.0));
    field.borrow_mut().on_resize(Vec2::new(640.0, 480.0));
    host.fire();
    host.fire();

    assert_eq!(surface.borrow().clears, 3);
    assert_eq!(surface.borrow().circles, 3 * field.borrow().len());
    assert_eq!(field.borrow().bounds(), Vec2::new(640.0, 480.0));

    handle.stop();
    host.fire();
    assert_eq!(surface.borrow().clears, 3);
}
