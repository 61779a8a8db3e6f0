//! Booking session domain module.
//!
//! # Module Structure
//!
//! - `model`: core session domain model (`Session`, `PatientDetails`)
//! - `step`: conversation state types (`ConversationStep`, `DetailField`)
//! - `event`: user input events (`SessionEvent`)
//! - `message`: transcript types (`ChatRole`, `ConversationMessage`)
//! - `engine`: the state machine (`ConversationEngine`, `RenderDirective`)

mod engine;
mod event;
mod message;
mod model;
mod step;

// Re-export public API
pub use engine::{ConversationEngine, RenderDirective};
pub use event::SessionEvent;
pub use message::{ChatRole, ConversationMessage};
pub use model::{BedSelection, BookingType, PatientDetails, Session};
pub use step::{ConversationStep, DetailField};
