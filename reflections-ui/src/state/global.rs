//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use reflections::admin::AdminView;
use reflections::entries::EntryView;
use reflections::{ConnectionStatus, SessionManager};

use super::storage::LocalStore;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Auth state and the visible top-level view
    pub session: RwSignal<SessionManager<LocalStore>>,
    /// The selected day's entries, draft and generated panels
    pub entries: RwSignal<EntryView>,
    /// Admin stats and roster
    pub admin: RwSignal<AdminView>,
    /// Backend connectivity
    pub health: RwSignal<ConnectionStatus>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        session: create_rw_signal(SessionManager::restore(LocalStore)),
        entries: create_rw_signal(EntryView::new(reflections::time::today())),
        admin: create_rw_signal(AdminView::new()),
        health: create_rw_signal(ConnectionStatus::Checking),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Current username, tracked
    pub fn username(&self) -> Option<String> {
        self.session.with(|m| m.username().map(str::to_string))
    }
}
