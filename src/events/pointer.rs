use crate::dom::{self, Listener};
use folio_core::PointerRig;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Feed window pointer moves into `rig`, measuring `anchor` on every event.
pub fn wire_rig_pointermove(
    window: &web::Window,
    anchor: web::Element,
    rig: Rc<RefCell<PointerRig>>,
) -> anyhow::Result<Listener<web::MouseEvent>> {
    let wnd = window.clone();
    Listener::new(window.as_ref(), "mousemove", move |ev: web::MouseEvent| {
        let rect = dom::client_rect(&anchor);
        let viewport = dom::viewport_size(&wnd);
        rig.borrow_mut()
            .on_pointer_move(client_point(&ev), rect, viewport);
    })
}
