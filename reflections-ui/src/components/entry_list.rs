//! Entry List Component
//!
//! The selected day's reflections in backend order.

use chrono::Local;
use leptos::*;
use reflections::entries::EntryRow;

use super::ListSkeleton;
use crate::state::GlobalState;

/// Entry list with count and empty state
#[component]
pub fn EntryList() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let count_label = move || {
        let count = state.entries.with(|v| v.count());
        if count == 1 {
            "1 entry".to_string()
        } else {
            format!("{} entries", count)
        }
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Reflections"</h2>
                <span class="text-sm text-gray-400">{count_label}</span>
            </div>

            {move || {
                let (loading, empty, rows) = state
                    .entries
                    .with(|v| (v.is_loading(), v.empty_message(), v.rows(&Local)));
                if loading {
                    view! { <ListSkeleton /> }.into_view()
                } else if let Some(message) = empty {
                    view! {
                        <p class="text-gray-500 italic text-center py-8">{message}</p>
                    }.into_view()
                } else {
                    view! {
                        <ul class="space-y-3">
                            {rows.into_iter().map(|row| view! { <EntryItem row=row /> }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn EntryItem(row: EntryRow) -> impl IntoView {
    view! {
        <li class="bg-gray-700 rounded-lg p-4">
            <div class="text-xs text-gray-400 mb-1">{row.time}</div>
            <p class="text-gray-100 whitespace-pre-wrap">{row.text}</p>
        </li>
    }
}
