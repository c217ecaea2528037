//! Client-side engine for the trip planner: the in-memory trip
//! document, its update protocol, derived start times, markup
//! rendering, and the coordinators that turn host events into pure
//! document transforms.

pub mod bind;
pub mod coordinator;
pub mod event;
pub mod field;
pub mod host;
pub mod lookup;
pub mod model;
pub mod render;
pub mod schedule;
pub mod service;
pub mod store;
pub mod transform;

pub use event::{DropEvent, EditEvent, PlaceSelectedEvent, SelectedPlace};
pub use field::{ActivityField, DayField, FieldAddress, FieldTarget};
pub use host::{BufferHost, DetachedHost, RenderHost};
pub use lookup::LocationLookupClient;
pub use model::{Activity, Day, Lodging, PlaceRef, Suggestions, TripDocument};
pub use service::{ServiceClient, ServiceConfig, ServiceError};
pub use store::{EngineError, TripStore};
