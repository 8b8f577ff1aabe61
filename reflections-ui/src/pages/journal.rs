//! Journal Page
//!
//! Date picker, new reflection form, the day's entries and the generated
//! panels.

use chrono::NaiveDate;
use leptos::*;
use reflections::PanelKind;

use crate::components::{EntryForm, EntryList, GeneratedPanel, Header};
use crate::state::GlobalState;

/// Main journal page
#[component]
pub fn JournalPage() -> impl IntoView {
    view! {
        <Header />

        <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-6">
            <DatePicker />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="space-y-6">
                    <EntryForm />
                    <EntryList />
                </div>
                <div class="space-y-6">
                    <GeneratedPanel kind=PanelKind::Summary />
                    <GeneratedPanel kind=PanelKind::Insights />
                </div>
            </div>
        </main>
    }
}

#[component]
fn DatePicker() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let on_change = move |ev: web_sys::Event| {
        match NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
            Ok(date) => state.select_date(date),
            Err(e) => web_sys::console::warn_1(&format!("Ignoring date input: {}", e).into()),
        }
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 flex items-center space-x-4">
            <label class="text-gray-300 font-medium">"Date"</label>
            <input
                type="date"
                class="bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                prop:value=move || state.entries.with(|v| v.date().format("%Y-%m-%d").to_string())
                on:change=on_change
            />
        </div>
    }
}
