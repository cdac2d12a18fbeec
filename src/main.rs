//! TrafficLens Dashboard
//!
//! Network traffic classification dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Interactive feature sliders with live Random Forest predictions
//! - Animated probability charts (decision flow, donut, live histogram)
//! - DBSCAN confidence feed polled from the inference API
//! - Dataset comparison against the TII-SSRC-23 reference set
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to an external model inference API over HTTP; no
//! data is stored locally beyond UI preferences.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod render;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
