//! Header Component
//!
//! Brand, current user and the view switch buttons.

use leptos::*;
use reflections::View;

use crate::state::GlobalState;

/// Header shown on the journal and admin pages
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let admin_button = move || state.session.with(|m| m.admin_button_visible());
    let on_admin_page = move || state.session.with(|m| m.view() == View::Admin);

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"📓"</span>
                        <span class="text-xl font-bold text-white">"Reflections"</span>
                    </div>

                    <div class="flex items-center space-x-3">
                        <span class="text-gray-300">
                            "Welcome, "
                            <span class="font-semibold text-white">
                                {move || state.username().unwrap_or_default()}
                            </span>
                        </span>

                        <Show when=admin_button>
                            <NavButton label="Admin Panel" on_click=move |_| state.open_admin() />
                        </Show>

                        <Show when=on_admin_page>
                            <NavButton label="Back to Journal" on_click=move |_| state.back_to_journal() />
                        </Show>

                        <NavButton label="Logout" on_click=move |_| state.logout() />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavButton(
    label: &'static str,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        >
            {label}
        </button>
    }
}
