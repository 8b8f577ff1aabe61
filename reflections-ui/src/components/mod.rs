//! UI Components
//!
//! Reusable Leptos components for the journal and admin pages.

pub mod entry_form;
pub mod entry_list;
pub mod header;
pub mod loading;
pub mod panel;
pub mod stat_card;
pub mod toast;
pub mod user_table;

pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use header::Header;
pub use loading::ListSkeleton;
pub use panel::GeneratedPanel;
pub use stat_card::StatCard;
pub use toast::Toast;
pub use user_table::UserTable;
