use serde::{Deserialize, Serialize};

use super::model::BookingType;
use crate::inventory::BedType;

/// Discrete named events a user (or the presentation layer on their
/// behalf) can submit to a booking session.
///
/// Every event is validated against the current step before it mutates
/// anything; an event that does not apply is rejected, not deferred.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Pick normal or emergency booking.
    ChooseBookingType { booking_type: BookingType },
    /// Submit the patient's name.
    SubmitName { name: String },
    /// Submit zero or more symptoms.
    SubmitSymptoms { symptoms: Vec<String> },
    /// Explicitly skip the symptom step.
    SkipSymptoms,
    /// Browse doctors filtered by the submitted symptoms.
    PickDoctors,
    /// Browse hospitals instead of doctors.
    PickHospitals,
    /// Book the named doctor from the filtered list.
    SelectDoctor { name: String },
    /// Book admission at the named hospital.
    SelectHospital { name: String },
    /// Reserve a unit of the given bed type.
    SelectBed { bed_type: BedType },
    /// Proceed without a bed.
    DeclineBed,
    /// Answer the "attach recent vitals?" question.
    AnswerVitals { answer: String },
    /// Submit the value for the current patient detail field.
    SubmitDetail { value: String },
}

impl SessionEvent {
    /// Stable event name for logs and validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::ChooseBookingType { .. } => "choose_booking_type",
            SessionEvent::SubmitName { .. } => "submit_name",
            SessionEvent::SubmitSymptoms { .. } => "submit_symptoms",
            SessionEvent::SkipSymptoms => "skip_symptoms",
            SessionEvent::PickDoctors => "pick_doctors",
            SessionEvent::PickHospitals => "pick_hospitals",
            SessionEvent::SelectDoctor { .. } => "select_doctor",
            SessionEvent::SelectHospital { .. } => "select_hospital",
            SessionEvent::SelectBed { .. } => "select_bed",
            SessionEvent::DeclineBed => "decline_bed",
            SessionEvent::AnswerVitals { .. } => "answer_vitals",
            SessionEvent::SubmitDetail { .. } => "submit_detail",
        }
    }
}
