//! Generated Panel Component
//!
//! Daily summary or insights, generated on demand.

use leptos::*;
use reflections::{Panel, PanelKind};

use crate::state::GlobalState;

/// Summary or insights card
#[component]
pub fn GeneratedPanel(kind: PanelKind) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let (icon, title, action, placeholder) = match kind {
        PanelKind::Summary => (
            "📝",
            "Daily Summary",
            "Generate Summary",
            "Generate a summary of this day's reflections.",
        ),
        PanelKind::Insights => (
            "💡",
            "Insights",
            "Generate Insights",
            "Generate insights from this day's reflections.",
        ),
    };

    let pending = move || state.entries.with(|v| v.panel(kind) == &Panel::Pending);

    view! {
        <div class="bg-gray-800 rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold flex items-center space-x-2">
                    <span>{icon}</span>
                    <span>{title}</span>
                </h3>
                <button
                    type="button"
                    disabled=pending
                    on:click=move |_| state.generate(kind)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || if pending() { "Generating..." } else { action }}
                </button>
            </div>

            {move || match state.entries.with(|v| v.panel(kind).clone()) {
                Panel::Placeholder => view! {
                    <p class="text-gray-500 italic">{placeholder}</p>
                }.into_view(),
                Panel::Pending => view! { <PanelSkeleton /> }.into_view(),
                Panel::Ready(text) => view! {
                    <div class="bg-gray-700 rounded-lg p-4">
                        <p class="text-gray-200 leading-relaxed whitespace-pre-wrap">{text}</p>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// Loading skeleton for generated text
#[component]
fn PanelSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4 animate-pulse space-y-2">
            <div class="h-4 bg-gray-600 rounded w-3/4" />
            <div class="h-4 bg-gray-600 rounded w-full" />
            <div class="h-4 bg-gray-600 rounded w-5/6" />
        </div>
    }
}
