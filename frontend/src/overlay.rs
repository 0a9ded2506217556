//! Open/close state for the off-canvas menu and the modal dialogs.
//!
//! The controller owns all overlay state and publishes an [`OverlayView`]
//! after every change; components render from the view and never mutate it.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::window;
use yew::Callback;

use crate::scheduler::Scheduler;

pub const LEAD_MODAL: &str = "lead";
pub const CALC_MODAL: &str = "calc";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuPhase {
    Hidden,
    /// Unhidden but without `is-active`, so the closed state gets painted
    /// before the transition starts.
    Revealed,
    Active,
    /// `is-active` removed, waiting for the transition to finish.
    Closing,
}

/// What the page should currently look like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayView {
    pub menu_hidden: bool,
    pub menu_active: bool,
    pub active_modal: Option<String>,
    pub scroll_locked: bool,
}

impl Default for OverlayView {
    fn default() -> Self {
        Self {
            menu_hidden: true,
            menu_active: false,
            active_modal: None,
            scroll_locked: false,
        }
    }
}

impl OverlayView {
    pub fn is_modal_open(&self, name: &str) -> bool {
        self.active_modal.as_deref() == Some(name)
    }
}

struct Overlay {
    menu_mounted: bool,
    menu: MenuPhase,
    /// Bumped on every menu transition; deferred callbacks carrying an older
    /// epoch are stale and do nothing.
    menu_epoch: u64,
    modals: BTreeSet<String>,
    active_modal: Option<String>,
}

impl Overlay {
    fn view(&self) -> OverlayView {
        let menu_hidden = self.menu == MenuPhase::Hidden;
        OverlayView {
            menu_hidden,
            menu_active: self.menu == MenuPhase::Active,
            active_modal: self.active_modal.clone(),
            scroll_locked: !menu_hidden || self.active_modal.is_some(),
        }
    }
}

#[derive(Clone)]
pub struct OverlayController {
    state: Rc<RefCell<Overlay>>,
    scheduler: Rc<dyn Scheduler>,
    close_delay_ms: u32,
    listener: Rc<RefCell<Option<Callback<OverlayView>>>>,
}

impl PartialEq for OverlayController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl OverlayController {
    pub fn new(scheduler: Rc<dyn Scheduler>, close_delay_ms: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(Overlay {
                menu_mounted: false,
                menu: MenuPhase::Hidden,
                menu_epoch: 0,
                modals: BTreeSet::new(),
                active_modal: None,
            })),
            scheduler,
            close_delay_ms,
            listener: Rc::new(RefCell::new(None)),
        }
    }

    pub fn view(&self) -> OverlayView {
        self.state.borrow().view()
    }

    pub fn subscribe(&self, listener: Callback<OverlayView>) {
        *self.listener.borrow_mut() = Some(listener);
    }

    pub fn unsubscribe(&self) {
        self.listener.borrow_mut().take();
    }

    fn publish(&self) {
        let view = self.view();
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener.emit(view);
        }
    }

    pub fn attach_menu(&self) {
        self.state.borrow_mut().menu_mounted = true;
    }

    pub fn detach_menu(&self) {
        let was_showing = {
            let mut state = self.state.borrow_mut();
            let was_showing = state.menu != MenuPhase::Hidden;
            state.menu_mounted = false;
            state.menu = MenuPhase::Hidden;
            state.menu_epoch += 1;
            was_showing
        };
        if was_showing {
            self.publish();
        }
    }

    pub fn register_modal(&self, name: &str) {
        self.state.borrow_mut().modals.insert(name.to_string());
    }

    pub fn unregister_modal(&self, name: &str) {
        let was_active = {
            let mut state = self.state.borrow_mut();
            state.modals.remove(name);
            let was_active = state.active_modal.as_deref() == Some(name);
            if was_active {
                state.active_modal = None;
            }
            was_active
        };
        if was_active {
            self.publish();
        }
    }

    pub fn open_menu(&self) {
        let epoch = {
            let mut state = self.state.borrow_mut();
            if !state.menu_mounted {
                debug!("open_menu: no menu mounted");
                return;
            }
            if matches!(state.menu, MenuPhase::Revealed | MenuPhase::Active) {
                return;
            }
            state.menu = MenuPhase::Revealed;
            state.menu_epoch += 1;
            state.menu_epoch
        };
        self.publish();

        let this = self.clone();
        self.scheduler.next_frame(Box::new(move || this.activate_menu(epoch)));
    }

    fn activate_menu(&self, epoch: u64) {
        {
            let mut state = self.state.borrow_mut();
            if state.menu_epoch != epoch || state.menu != MenuPhase::Revealed {
                return;
            }
            state.menu = MenuPhase::Active;
        }
        self.publish();
    }

    pub fn close_menu(&self) {
        let epoch = {
            let mut state = self.state.borrow_mut();
            if !state.menu_mounted {
                debug!("close_menu: no menu mounted");
                return;
            }
            if matches!(state.menu, MenuPhase::Hidden | MenuPhase::Closing) {
                return;
            }
            state.menu = MenuPhase::Closing;
            state.menu_epoch += 1;
            state.menu_epoch
        };
        self.publish();

        let this = self.clone();
        self.scheduler
            .after(self.close_delay_ms, Box::new(move || this.finish_menu_close(epoch)));
    }

    fn finish_menu_close(&self, epoch: u64) {
        {
            let mut state = self.state.borrow_mut();
            if state.menu_epoch != epoch || state.menu != MenuPhase::Closing {
                return;
            }
            state.menu = MenuPhase::Hidden;
        }
        self.publish();
    }

    /// Opening a modal while another one is showing replaces it.
    pub fn open_modal(&self, name: &str) {
        {
            let mut state = self.state.borrow_mut();
            if !state.modals.contains(name) {
                debug!("open_modal: no modal named {:?}", name);
                return;
            }
            state.active_modal = Some(name.to_string());
        }
        self.publish();
    }

    pub fn close_modal(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.active_modal.take().is_none() {
                return;
            }
        }
        self.publish();
    }

    /// A click that landed on a modal's backdrop rather than its panel.
    pub fn backdrop_click(&self, inside_panel: bool) {
        if !inside_panel {
            self.close_modal();
        }
    }

    pub fn escape(&self) {
        self.close_menu();
        self.close_modal();
    }
}

/// Mirrors `OverlayView::scroll_locked` onto `<body>`.
pub fn apply_body_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        warn!("Failed to update body overflow: {:?}", e);
    }
}
