// Crate root library declaration and module exports.
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod store;

pub use config::{SourceKind, WidgetConfig};
pub use controller::{CardWidget, LoadOutcome, WidgetState};
pub use error::Error;
pub use model::{DisplayRecord, EventCard, ImageCard, RawRecord};
