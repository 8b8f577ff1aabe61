//! User actions.
//!
//! Each action applies its synchronous half to the signals, awaits the
//! backend on a local task, then applies the response. Nothing holds a
//! signal borrowed across an await.

use chrono::NaiveDate;
use leptos::*;
use reflections::admin::AdminController;
use reflections::entries::PanelKind;
use reflections::api::CONNECT_ERROR_MESSAGE;
use reflections::health;
use reflections::{AdminView, ConnectionStatus, EntryView, JournalApi, RowAction, Session};

use super::GlobalState;
use crate::api::GlooClient;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

/// Error toast for a failed connection test
fn unreachable_message(base_url: &str) -> String {
    format!("{} at {}", CONNECT_ERROR_MESSAGE, base_url)
}

impl GlobalState {
    fn current_session(&self) -> Option<Session> {
        self.session.with_untracked(|m| m.session().cloned())
    }

    pub fn check_health(self) {
        self.health.set(ConnectionStatus::Checking);
        spawn_local(async move {
            let status = health::check(&GlooClient::from_storage()).await;
            if !status.is_connected() {
                web_sys::console::error_1(&"Health check failed".into());
            }
            self.health.set(status);
        });
    }

    /// The server settings "Test" button: same probe, but reported
    pub fn test_connection(self) {
        self.health.set(ConnectionStatus::Checking);
        spawn_local(async move {
            let api = GlooClient::from_storage();
            let status = health::check(&api).await;
            self.health.set(status);
            if status.is_connected() {
                self.show_success("Connected");
            } else {
                self.show_error(&unreachable_message(api.base_url()));
            }
        });
    }

    // ============================================
    // SESSION
    // ============================================

    pub fn login(self) {
        let Some(credentials) = self.session.try_update(|m| m.begin_login()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = GlooClient::from_storage().login(&credentials).await;
            let signed_in = self
                .session
                .try_update(|m| m.finish_login(result))
                .map_or(false, |r| r.is_ok());
            if signed_in {
                self.select_date(reflections::time::today());
            }
        });
    }

    pub fn register(self) {
        let Some(registration) = self.session.try_update(|m| m.begin_register()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = GlooClient::from_storage().register(&registration).await;
            let registered = self
                .session
                .try_update(|m| m.finish_register(&registration.username, result))
                .map_or(false, |r| r.is_ok());
            if registered {
                self.show_success("Account created. Please log in.");
            }
        });
    }

    /// Tell the backend, then clear everything whatever it answered
    pub fn logout(self) {
        let token = self.current_session().map(|s| s.token);

        spawn_local(async move {
            if let Some(token) = token {
                if let Err(e) = GlooClient::from_storage().logout(&token).await {
                    web_sys::console::warn_1(&format!("Logout request failed: {}", e).into());
                }
            }
            if let Some(Err(e)) = self.session.try_update(|m| m.clear()) {
                web_sys::console::error_1(&format!("Could not clear session: {}", e).into());
                self.show_error("Signed out, but the saved session could not be removed");
            }
            self.entries.set(EntryView::new(reflections::time::today()));
            self.admin.set(AdminView::new());
        });
    }

    // ============================================
    // ENTRIES
    // ============================================

    pub fn select_date(self, date: NaiveDate) {
        let Some(session) = self.current_session() else {
            return;
        };
        self.entries.update(|v| v.select_date(date));

        spawn_local(async move {
            let result = GlooClient::from_storage().entries(&session.token, date).await;
            self.entries.update(|v| v.entries_loaded(date, result));
        });
    }

    pub fn save_entry(self) {
        let Some(session) = self.current_session() else {
            return;
        };
        let pending = self
            .entries
            .try_update(|v| {
                let date = v.date();
                v.begin_save().map(|text| (date, text))
            })
            .flatten();
        let Some((date, reflection)) = pending else {
            return;
        };

        spawn_local(async move {
            let result = GlooClient::from_storage()
                .save_entry(&session.token, date, &reflection)
                .await;
            let saved = result.is_ok();
            self.entries.update(|v| v.entry_saved(date, result));
            if saved {
                self.show_success("Reflection saved");
            }
            self.raise_entry_alert();
        });
    }

    pub fn generate(self, kind: PanelKind) {
        let Some(session) = self.current_session() else {
            return;
        };
        let date = self.entries.with_untracked(|v| v.date());
        self.entries.update(|v| v.panel_requested(kind));

        spawn_local(async move {
            let api = GlooClient::from_storage();
            let result = match kind {
                PanelKind::Summary => api.summary(&session.token, date).await,
                PanelKind::Insights => api.insights(&session.token, date).await,
            };
            self.entries.update(|v| v.panel_loaded(kind, date, result));
            self.raise_entry_alert();
        });
    }

    fn raise_entry_alert(self) {
        if let Some(message) = self.entries.try_update(|v| v.take_alert()).flatten() {
            alert(&message);
        }
    }

    // ============================================
    // ADMIN
    // ============================================

    pub fn open_admin(self) {
        if self.session.try_update(|m| m.show_admin()).unwrap_or(false) {
            self.load_admin();
        }
    }

    pub fn back_to_journal(self) {
        self.session.update(|m| {
            m.show_main();
        });
    }

    pub fn load_admin(self) {
        let Some(session) = self.current_session() else {
            return;
        };

        spawn_local(async move {
            let api = GlooClient::from_storage();
            let mut view = self.admin.get_untracked();
            AdminController::new(&api, &session)
                .load_admin_data(&mut view)
                .await;
            self.admin.set(view);
        });
    }

    /// Run one roster action; deletes ask for confirmation first
    pub fn admin_action(self, action: RowAction, username: String) {
        let Some(session) = self.current_session() else {
            return;
        };

        spawn_local(async move {
            let api = GlooClient::from_storage();
            let controller = AdminController::new(&api, &session);
            let mut view = self.admin.get_untracked();

            let result = match action {
                RowAction::MakeAdmin => controller.make_admin(&mut view, &username).await,
                RowAction::RemoveAdmin => controller.remove_admin(&mut view, &username).await,
                RowAction::Delete => controller
                    .delete_user(&mut view, &username, confirm)
                    .await
                    .map(|_| ()),
            };
            if let Err(e) = &result {
                web_sys::console::warn_1(&format!("{} {} failed: {}", action.label(), username, e).into());
            }

            let message = view.take_alert();
            self.admin.set(view);
            if let Some(message) = message {
                alert(&message);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_message_names_backend() {
        assert_eq!(
            unreachable_message("http://10.0.0.2:5000/api"),
            "Error connecting to server at http://10.0.0.2:5000/api"
        );
    }
}
