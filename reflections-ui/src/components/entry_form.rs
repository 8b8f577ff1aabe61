//! Entry Form Component
//!
//! Text area for a new reflection.

use leptos::*;

use crate::state::GlobalState;

/// New reflection form
#[component]
pub fn EntryForm() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let saving = move || state.entries.with(|v| v.is_saving());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.save_entry();
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-lg p-6 space-y-4">
            <label class="block text-lg font-semibold">"How was your day?"</label>

            <textarea
                rows="4"
                placeholder="Write a reflection..."
                class="w-full bg-gray-700 border border-gray-600 rounded-lg p-3
                       focus:outline-none focus:border-primary-500"
                prop:value=move || state.entries.with(|v| v.draft.clone())
                on:input=move |ev| state.entries.update(|v| v.draft = event_target_value(&ev))
            />

            {move || state.entries.with(|v| v.error().map(str::to_string)).map(|msg| view! {
                <p class="text-red-400 text-sm">{msg}</p>
            })}

            <button
                type="submit"
                disabled=saving
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if saving() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Saving..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Save Reflection"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}
