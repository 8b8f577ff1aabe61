//! Admin Page
//!
//! Aggregate stats and the user roster.

use leptos::*;

use crate::components::{Header, StatCard, UserTable};
use crate::state::GlobalState;

/// Admin panel page
#[component]
pub fn AdminPage() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let stat = move |pick: fn(&reflections::AdminStats) -> u64| {
        Signal::derive(move || {
            state
                .admin
                .with(|v| v.stats())
                .map(|s| pick(&s).to_string())
                .unwrap_or_else(|| "—".to_string())
        })
    };

    view! {
        <Header />

        <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Admin Panel"</h1>
                    <p class="text-gray-400 mt-1">"Manage users and view usage"</p>
                </div>
                <button
                    type="button"
                    on:click=move |_| state.load_admin()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm"
                >
                    "Refresh"
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard label="Total Users" icon="👥" value=stat(|s| s.total_users) />
                <StatCard label="Total Entries" icon="📝" value=stat(|s| s.total_entries) />
                <StatCard label="Admins" icon="🛡" value=stat(|s| s.total_admins) />
            </div>

            <UserTable />
        </main>
    }
}
