//! Stat Card Component
//!
//! One aggregate counter on the admin page.

use leptos::*;

#[component]
pub fn StatCard(
    label: &'static str,
    icon: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </div>
    }
}
