//! Reflections
//!
//! Daily journaling app built with Leptos (WASM).
//!
//! # Features
//!
//! - Login, registration and a persisted session
//! - One day's reflections at a time, with a date picker
//! - Generated daily summaries and insights
//! - Admin panel: stats, roster, promote/demote/delete
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state transitions live in the `reflections` crate; this
//! crate binds them to signals and talks to the backend with `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
