//! App Root Component
//!
//! Provides global state and switches between the three top-level views.

use leptos::*;
use reflections::View;

use crate::api;
use crate::components::Toast;
use crate::pages::{AdminPage, AuthPage, JournalPage};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Restores any persisted session
    let state = provide_global_state();

    state.check_health();
    if state.session.with_untracked(|m| m.view()) == View::Main {
        state.select_date(reflections::time::today());
    }

    // Memoised so typing into the auth form does not rebuild the page
    let current_view = create_memo(move |_| state.session.with(|m| m.view()));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            {move || match current_view.get() {
                View::Auth => view! { <AuthPage /> }.into_view(),
                View::Main => view! { <JournalPage /> }.into_view(),
                View::Admin => view! { <AdminPage /> }.into_view(),
            }}

            // Footer with connection status
            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer component showing connection status
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Backend status
                <div class="flex items-center space-x-2">
                    {move || {
                        let status = state.health.get();
                        let color = match status {
                            reflections::ConnectionStatus::Checking => "text-amber-400",
                            reflections::ConnectionStatus::Connected => "text-green-400",
                            reflections::ConnectionStatus::Disconnected => "text-red-400",
                        };
                        view! { <span class=color>{status.label()}</span> }
                    }}
                </div>

                // Backend address
                <div class="text-gray-400">{api::get_api_base()}</div>
            </div>
        </footer>
    }
}
