//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="rounded-lg p-4 animate-pulse bg-gray-500/10">
            <div class="h-4 bg-gray-500/30 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-500/30 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-500/30 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for chart
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="rounded-lg p-6 animate-pulse bg-gray-500/10">
            <div class="h-6 bg-gray-500/30 rounded w-1/4 mb-4" />
            <div class="h-64 bg-gray-500/30 rounded" />
        </div>
    }
}

/// Loading overlay for charts waiting on a response
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative">
            {children()}

            {move || {
                if loading.get() {
                    view! {
                        <div class="absolute inset-0 bg-gray-900/40 flex items-center justify-center rounded-lg">
                            <div class="loading-spinner w-8 h-8" />
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}
