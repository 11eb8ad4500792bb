//! WayMeet client core: session, event feed, group chat and location state for
//! an event-discovery app, backed by a mock catalogue and a small key-value
//! store for the persisted session.

extern crate self as waymeet;

pub mod app;
pub mod config;
pub mod errors;
pub mod format;
pub mod id;
pub mod keys;
pub mod latency;
pub mod location;
pub mod mock;
pub mod patch;
pub mod storage;
pub mod stores;
pub mod tour;
pub mod types;
pub mod validators;

pub use app::{App, Attendance, Gate};
pub use config::{ConfigContext, StorageBackend, WaymeetConfig};
pub use errors::{StoreError, StoreResult, ValidationError, ValidationIssue};
pub use latency::{Latency, Operation};
pub use location::{DEFAULT_LOCATION, DeniedProvider, FixedProvider, LocationProvider, LocationService};
pub use patch::Patch;
pub use storage::{AnyStorage, FileStorage, KeyValueStorage, MemoryStorage, RedisStorage};
pub use stores::{ChatStore, EventsStore, UiStore, UserStore};
pub use types::{
    AuthStatus, Category, ChatMessage, Event, ExploreTab, FilterState, FilterStatePatch, Itinerary, NewEvent, Place,
    SocialProvider, User, UserLocation, UserPatch,
};
