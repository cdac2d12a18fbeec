//! Toast Notifications
//!
//! Success and error banners fed by the global state. Both clear
//! themselves after a few seconds; errors can also be dismissed early.

use leptos::*;

use crate::state::global::GlobalState;

/// Notification area pinned above the footer
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|message| view! {
                    <div class="flex items-center gap-3 bg-green-600 text-white px-4 py-3 \
                                rounded-lg shadow-lg animate-slide-in">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                })
            }}

            {move || {
                state.error.get().map(|message| view! {
                    <div class="flex items-center gap-3 bg-red-600 text-white px-4 py-3 \
                                rounded-lg shadow-lg animate-slide-in">
                        <span class="text-lg">"⚠"</span>
                        <span class="text-sm font-medium">{message}</span>
                        <button
                            class="ml-1 opacity-75 hover:opacity-100"
                            title="Dismiss"
                            on:click=move |_| state.clear_error()
                        >
                            "✕"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
