//! Navigation Component
//!
//! Header navigation bar with brand, page links, and the theme switch.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav
            class="border-b border-gray-500/20 shadow-sm"
            style=move || format!("background-color: {};", state.palette().surface)
        >
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📡"</span>
                        <span
                            class="text-xl font-bold"
                            style=move || format!("color: {};", state.palette().heading)
                        >
                            "TrafficLens"
                        </span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/supervised" label="Supervised" />
                        <NavLink href="/unsupervised" label="Unsupervised" />
                        <NavLink href="/architecture" label="Architecture" />
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="nav-link px-4 py-2 rounded-lg transition-colors"
            active_class="nav-link-active"
        >
            {label}
        </A>
    }
}

/// Light/dark switch, persisted across visits
#[component]
fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            class="nav-link px-3 py-2 rounded-lg text-lg"
            title="Toggle color scheme"
            on:click=move |_| state.toggle_theme()
        >
            {move || if state.theme.get().is_dark() { "🌞" } else { "🌙" }}
        </button>
    }
}
