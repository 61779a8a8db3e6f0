//! Conversation step types for session state management.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The intake flow states: linear, with one branch point after the
/// symptom step (doctor path vs hospital path).
///
/// The engine never advances past a step whose required input is
/// missing or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConversationStep {
    Initial,
    AskName,
    AskSymptoms,
    ChoosePath,
    ListDoctors,
    ListHospitals,
    AskBed,
    AskVitals,
    CollectDetails,
    FinalCard,
}

/// Patient detail fields, collected one per step, strictly in `ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DetailField {
    Phone,
    Gender,
    Age,
    Email,
    Address,
}

impl DetailField {
    /// The fixed collection order.
    pub const ORDER: [DetailField; 5] = [
        DetailField::Phone,
        DetailField::Gender,
        DetailField::Age,
        DetailField::Email,
        DetailField::Address,
    ];

    /// Human-readable prompt label.
    pub fn label(&self) -> &'static str {
        match self {
            DetailField::Phone => "phone number",
            DetailField::Gender => "gender (male/female/other)",
            DetailField::Age => "age",
            DetailField::Email => "email address",
            DetailField::Address => "address",
        }
    }
}
