use crate::dom::{self, Listener};
use crate::events;
use folio_core::avatar::render_svg;
use folio_core::{PointerRig, RigConfig, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Avatar drawn into a container element and re-rendered on every offset
/// change. The container doubles as the rig's anchor.
pub struct AvatarMount {
    rig: Rc<RefCell<PointerRig>>,
    subscription: SubscriptionId,
    _pointer: Listener<web::MouseEvent>,
}

impl AvatarMount {
    pub fn mount(container: web::Element) -> anyhow::Result<Self> {
        let window = dom::window()?;
        let rig = Rc::new(RefCell::new(PointerRig::new(RigConfig::default())));

        container.set_inner_html(&render_svg(&rig.borrow().pose()));
        let target = container.clone();
        let subscription = rig
            .borrow_mut()
            .subscribe(move |pose| target.set_inner_html(&render_svg(pose)));

        let pointer = events::wire_rig_pointermove(&window, container, rig.clone())?;

        log::info!("[avatar] mounted");
        Ok(Self {
            rig,
            subscription,
            _pointer: pointer,
        })
    }
}

impl Drop for AvatarMount {
    fn drop(&mut self) {
        self.rig.borrow_mut().unsubscribe(self.subscription);
        log::info!("[avatar] unmounted");
    }
}
