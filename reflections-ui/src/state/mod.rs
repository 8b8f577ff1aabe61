//! State Management
//!
//! Signals over the shared client state machines, plus the browser session
//! store.

pub mod actions;
pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
pub use storage::LocalStore;
