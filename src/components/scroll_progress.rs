//! Scroll Progress Divider
//!
//! Gradient divider bar between dashboard sections. The fill animates
//! from empty to full the first time the bar scrolls into view and
//! stays full afterwards.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Section divider that fills once on first sight
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let (filled, set_filled) = create_signal(false);
    let handle = store_value(None::<web_sys::IntersectionObserver>);

    create_effect(move |_| {
        let Some(node) = container.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let crossed = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if crossed {
                    set_filled.set(true);
                    observer.disconnect();
                }
            },
        );

        if let Ok(observer) =
            web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        {
            observer.observe(&node);
            if let Some(previous) = handle
                .try_update_value(|slot| slot.replace(observer))
                .flatten()
            {
                previous.disconnect();
            }
        }
        callback.forget();
    });

    on_cleanup(move || {
        if let Some(observer) = handle.try_update_value(|slot| slot.take()).flatten() {
            observer.disconnect();
        }
    });

    view! {
        <div node_ref=container class="w-full py-8">
            <div class="h-1.5 rounded-full overflow-hidden bg-gray-500/20">
                <div
                    class="h-full rounded-full scroll-fill"
                    class=("scroll-fill-done", move || filled.get())
                    style="background: linear-gradient(90deg, #ff4b1f, #ff9068, #4286f4);"
                />
            </div>
        </div>
    }
}
