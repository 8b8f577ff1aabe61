//! User Table Component
//!
//! The admin roster with per-row actions.

use chrono::Local;
use leptos::*;
use reflections::{RowAction, UserRow};

use crate::state::GlobalState;

/// Roster table. The signed-in admin's own row has no controls.
#[component]
pub fn UserTable() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let rows = move || {
        let current = state.username().unwrap_or_default();
        state.admin.with(|v| v.rows(&current, &Local))
    };

    view! {
        <div class="bg-gray-800 rounded-lg overflow-x-auto">
            <table class="w-full text-left text-sm">
                <thead class="bg-gray-700 text-gray-300">
                    <tr>
                        <th class="px-4 py-3">"Username"</th>
                        <th class="px-4 py-3">"Email"</th>
                        <th class="px-4 py-3">"Entries"</th>
                        <th class="px-4 py-3">"Role"</th>
                        <th class="px-4 py-3">"Joined"</th>
                        <th class="px-4 py-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows().into_iter().map(|row| view! { <UserRowView row=row /> }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn UserRowView(row: UserRow) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let role_class = if row.is_admin { "px-4 py-3 text-green-400" } else { "px-4 py-3 text-gray-500" };
    let username = row.username.clone();

    view! {
        <tr class="border-t border-gray-700">
            <td class="px-4 py-3 font-medium">{row.username}</td>
            <td class="px-4 py-3 text-gray-300">{row.email}</td>
            <td class="px-4 py-3">{row.entry_count.to_string()}</td>
            <td class=role_class>{row.role}</td>
            <td class="px-4 py-3 text-gray-400">{row.joined}</td>
            <td class="px-4 py-3 space-x-2">
                {row.actions.into_iter().map(|action| {
                    let name = username.clone();
                    view! {
                        <button
                            type="button"
                            class=action_class(action)
                            on:click=move |_| state.admin_action(action, name.clone())
                        >
                            {action.label()}
                        </button>
                    }
                }).collect_view()}
            </td>
        </tr>
    }
}

fn action_class(action: RowAction) -> &'static str {
    match action {
        RowAction::MakeAdmin => "px-3 py-1 rounded bg-green-700 hover:bg-green-600 text-xs",
        RowAction::RemoveAdmin => "px-3 py-1 rounded bg-amber-700 hover:bg-amber-600 text-xs",
        RowAction::Delete => "px-3 py-1 rounded bg-red-700 hover:bg-red-600 text-xs",
    }
}
