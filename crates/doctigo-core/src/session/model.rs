//! Session domain model.
//!
//! One `Session` per user interaction, owned exclusively by the
//! conversation engine for its lifetime. Every field that the source
//! flow kept in loosely-shaped state is an explicit typed field here.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::message::ConversationMessage;
use super::step::{ConversationStep, DetailField};
use crate::appointment::Appointment;
use crate::catalog::{Doctor, Hospital};
use crate::inventory::BedType;
use crate::vitals::VitalsSnapshot;

/// Urgency of the booking, fixed at the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingType {
    Normal,
    Emergency,
}

/// A confirmed bed reservation held by a session.
///
/// `serial` is only ever populated from a successful inventory
/// reservation; there is no provisional state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedSelection {
    pub bed_type: BedType,
    pub price_per_night: u32,
    pub features: Vec<String>,
    pub serial: u32,
}

/// The five patient detail fields, filled strictly in `DetailField::ORDER`.
///
/// `Some("")` is a legal value: the flow accepts empty submissions and
/// only distinguishes set from unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl PatientDetails {
    pub fn set(&mut self, field: DetailField, value: String) {
        match field {
            DetailField::Phone => self.phone = Some(value),
            DetailField::Gender => self.gender = Some(value),
            DetailField::Age => self.age = Some(value),
            DetailField::Email => self.email = Some(value),
            DetailField::Address => self.address = Some(value),
        }
    }

    pub fn get(&self, field: DetailField) -> Option<&str> {
        match field {
            DetailField::Phone => self.phone.as_deref(),
            DetailField::Gender => self.gender.as_deref(),
            DetailField::Age => self.age.as_deref(),
            DetailField::Email => self.email.as_deref(),
            DetailField::Address => self.address.as_deref(),
        }
    }

    /// True once every field has been submitted (empty or not).
    pub fn is_complete(&self) -> bool {
        DetailField::ORDER.iter().all(|f| self.get(*f).is_some())
    }
}

/// One user's in-progress booking conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
    /// Current conversation step
    pub step: ConversationStep,
    /// Booking urgency; immutable once chosen
    pub booking_type: Option<BookingType>,
    /// Patient name; set once, immutable after set
    pub patient_name: String,
    /// Symptoms in selection order, deduplicated
    pub symptoms: Vec<String>,
    /// Doctor chosen on the doctor path (exclusive with `selected_hospital`)
    pub selected_doctor: Option<Doctor>,
    /// Hospital chosen on the hospital path (exclusive with `selected_doctor`)
    pub selected_hospital: Option<Hospital>,
    /// Tentative appointment slot, captured when the doctor is selected
    pub tentative_slot: Option<String>,
    /// Confirmed bed reservation, if any
    pub bed_selection: Option<BedSelection>,
    /// Attached vitals reading, if any
    pub vitals: Option<VitalsSnapshot>,
    /// Collected patient details
    pub details: PatientDetails,
    /// Index into `DetailField::ORDER`; `0 <= detail_cursor <= 5`
    pub detail_cursor: usize,
    /// The appointment built on entry to the terminal step. Doubles as
    /// the finalized guard: entry actions never run twice.
    pub final_appointment: Option<Appointment>,
    /// Conversation transcript
    #[serde(default)]
    pub transcript: Vec<ConversationMessage>,
}

impl Session {
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now.clone(),
            updated_at: now,
            step: ConversationStep::Initial,
            booking_type: None,
            patient_name: String::new(),
            symptoms: Vec::new(),
            selected_doctor: None,
            selected_hospital: None,
            tentative_slot: None,
            bed_selection: None,
            vitals: None,
            details: PatientDetails::default(),
            detail_cursor: 0,
            final_appointment: None,
            transcript: Vec::new(),
        }
    }

    /// Name of the facility a bed would be reserved at: the selected
    /// doctor's chamber, or the selected hospital.
    pub fn admitting_hospital(&self) -> Option<&str> {
        self.selected_doctor
            .as_ref()
            .map(|d| d.chamber.as_str())
            .or(self.selected_hospital.as_ref().map(|h| h.name.as_str()))
    }

    pub(crate) fn push_patient(&mut self, content: impl Into<String>) {
        self.transcript.push(ConversationMessage::patient(content));
    }

    pub(crate) fn push_bot(&mut self, content: impl Into<String>) {
        self.transcript.push(ConversationMessage::bot(content));
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
