//! Pages
//!
//! One component per top-level view.

pub mod admin;
pub mod auth;
pub mod journal;

pub use admin::AdminPage;
pub use auth::AuthPage;
pub use journal::JournalPage;
