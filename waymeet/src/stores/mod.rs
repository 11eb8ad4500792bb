//! In-memory state containers.
//!
//! Each container is independent: nothing here coordinates across them. The
//! [`crate::app::App`] shell is where a join also posts a chat notice.

mod chat;
mod events;
mod ui;
mod user;

pub use chat::{ChatStore, SYSTEM_USER_ID};
pub use events::{DEFAULT_EVENT_IMAGE, DEFAULT_MAX_PARTICIPANTS, EventsStore};
pub use ui::UiStore;
pub use user::{StoredSession, UserStore};
