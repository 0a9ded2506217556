use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub type Task = Box<dyn FnOnce()>;

/// Deferred work for UI transitions. Implementations must never run a task
/// inline from `next_frame` or `after`.
pub trait Scheduler {
    /// Runs `task` on the next animation frame.
    fn next_frame(&self, task: Task);
    /// Runs `task` once `millis` have elapsed.
    fn after(&self, millis: u32, task: Task);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn next_frame(&self, task: Task) {
        let Some(window) = web_sys::window() else {
            Timeout::new(0, task).forget();
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            warn!("requestAnimationFrame failed, falling back to a timeout: {:?}", e);
            let callback: web_sys::js_sys::Function = callback.unchecked_into();
            Timeout::new(0, move || {
                let _ = callback.call0(&JsValue::NULL);
            })
            .forget();
        }
    }

    fn after(&self, millis: u32, task: Task) {
        Timeout::new(millis, task).forget();
    }
}
