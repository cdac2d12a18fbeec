//! Animation Frame Driver
//!
//! One requestAnimationFrame loop per chart, started on demand and
//! stopped again once every tween has settled.

use leptos::*;
use std::rc::Rc;

/// Wall-clock milliseconds, the time base every tween runs on.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Drive `frame` once per animation frame while it returns true.
///
/// `running` belongs to the calling component. Calling this while a
/// loop is already live is a no-op, so effects can request a restart
/// on every data change without stacking parallel loops. Disposing the
/// owner stops the loop on its next frame.
pub fn run_frames(running: StoredValue<bool>, frame: impl Fn(f64) -> bool + 'static) {
    match running.try_get_value() {
        // Idle and alive, take the loop over.
        Some(false) => {}
        _ => return,
    }
    running.set_value(true);
    tick(running, Rc::new(frame));
}

fn tick(running: StoredValue<bool>, frame: Rc<dyn Fn(f64) -> bool>) {
    request_animation_frame(move || {
        if running.try_get_value() != Some(true) {
            return;
        }
        if frame(now_ms()) {
            tick(running, frame);
        } else {
            let _ = running.try_set_value(false);
        }
    });
}
