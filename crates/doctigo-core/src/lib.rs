//! Doctigo booking core.
//!
//! The conversational intake flow for booking a medical appointment:
//! a per-session state machine (`session::ConversationEngine`), the
//! shared bed inventory (`inventory::InventoryManager`), the read-only
//! doctor/hospital directory (`catalog::Catalog`), the vitals
//! collaborator contract (`vitals::VitalsProvider`), and the terminal
//! appointment assembler (`appointment::build`).

pub mod appointment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod session;
pub mod vitals;

// Re-export common error type
pub use error::BookingError;
