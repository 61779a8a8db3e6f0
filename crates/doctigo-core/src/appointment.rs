//! The finalized appointment record and its assembler.
//!
//! `build` folds a terminal-step session into an immutable
//! `Appointment`. It is pure aside from capturing the wall clock for
//! the appointment timestamp; ownership of the result passes to
//! whatever exports or renders it.

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::inventory::BedType;
use crate::session::{BookingType, ConversationStep, Session};
use crate::vitals::VitalsSnapshot;

/// Doctor-name sentinel for the hospital-only path.
pub const HOSPITAL_ADMISSION_DOCTOR: &str = "(Hospital admission)";

/// Slot placeholder used when no doctor (and so no slot list) was chosen.
pub const HOSPITAL_ADMISSION_SLOT: &str = "10:00am-10:30am";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// Bed assignment carried on the appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedAssignment {
    pub bed_type: BedType,
    pub price_per_night: u32,
    pub features: Vec<String>,
    pub serial: u32,
}

/// The terminal, immutable output of a completed booking conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient_name: String,
    pub booking_type: BookingType,
    pub symptoms: Vec<String>,
    pub doctor_name: String,
    pub hospital_name: String,
    /// When the appointment was booked (ISO 8601 format).
    pub appointment_date: String,
    /// The visiting slot, e.g. "11:00am-11:30am".
    pub appointment_time: String,
    pub patient_phone: String,
    pub patient_gender: String,
    pub patient_age: String,
    pub patient_email: String,
    pub patient_address: String,
    pub needs_bed: bool,
    pub bed: Option<BedAssignment>,
    pub vitals: Option<VitalsSnapshot>,
    pub status: AppointmentStatus,
}

/// Builds the appointment for a session in its terminal step.
///
/// # Errors
///
/// `InvariantViolation` when called outside `FinalCard`, when required
/// fields are missing, or when both a doctor and a hospital are set.
pub fn build(session: &Session) -> Result<Appointment> {
    if session.step != ConversationStep::FinalCard {
        return Err(BookingError::invariant(format!(
            "appointment assembly requires the final_card step, session is in {}",
            session.step
        )));
    }
    if session.patient_name.trim().is_empty() {
        return Err(BookingError::invariant("patient name is not set"));
    }
    let booking_type = session
        .booking_type
        .ok_or_else(|| BookingError::invariant("booking type is not set"))?;
    if !session.details.is_complete() {
        return Err(BookingError::invariant("patient details are incomplete"));
    }
    if session.selected_doctor.is_some() && session.selected_hospital.is_some() {
        return Err(BookingError::invariant(
            "doctor and hospital selections are mutually exclusive",
        ));
    }

    let (doctor_name, hospital_name) = match (&session.selected_doctor, &session.selected_hospital)
    {
        (Some(doctor), None) => (doctor.name.clone(), doctor.chamber.clone()),
        (None, Some(hospital)) => (HOSPITAL_ADMISSION_DOCTOR.to_string(), hospital.name.clone()),
        (None, None) => (HOSPITAL_ADMISSION_DOCTOR.to_string(), String::new()),
        (Some(_), Some(_)) => unreachable!("exclusivity checked above"),
    };

    let appointment_time = session
        .tentative_slot
        .clone()
        .unwrap_or_else(|| HOSPITAL_ADMISSION_SLOT.to_string());

    let details = &session.details;
    Ok(Appointment {
        patient_name: session.patient_name.clone(),
        booking_type,
        symptoms: session.symptoms.clone(),
        doctor_name,
        hospital_name,
        appointment_date: chrono::Utc::now().to_rfc3339(),
        appointment_time,
        patient_phone: details.phone.clone().unwrap_or_default(),
        patient_gender: details.gender.clone().unwrap_or_default(),
        patient_age: details.age.clone().unwrap_or_default(),
        patient_email: details.email.clone().unwrap_or_default(),
        patient_address: details.address.clone().unwrap_or_default(),
        needs_bed: session.bed_selection.is_some(),
        bed: session.bed_selection.as_ref().map(|b| BedAssignment {
            bed_type: b.bed_type,
            price_per_night: b.price_per_night,
            features: b.features.clone(),
            serial: b.serial,
        }),
        vitals: session.vitals.clone(),
        status: AppointmentStatus::Confirmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_doctors;
    use crate::session::DetailField;

    fn terminal_session() -> Session {
        let mut session = Session::new();
        session.step = ConversationStep::FinalCard;
        session.booking_type = Some(BookingType::Normal);
        session.patient_name = "Asha".to_string();
        for field in DetailField::ORDER {
            session.details.set(field, format!("{field} value"));
        }
        session.detail_cursor = DetailField::ORDER.len();
        session
    }

    #[test]
    fn test_build_outside_terminal_step_is_invariant_violation() {
        let mut session = terminal_session();
        session.step = ConversationStep::AskBed;
        let err = build(&session).unwrap_err();
        assert!(matches!(err, BookingError::InvariantViolation(_)));
    }

    #[test]
    fn test_doctor_path_derives_chamber_and_slot() {
        let mut session = terminal_session();
        let doctor = default_doctors().remove(0);
        session.tentative_slot = doctor.available_slots.first().cloned();
        session.selected_doctor = Some(doctor.clone());

        let appointment = build(&session).unwrap();
        assert_eq!(appointment.doctor_name, doctor.name);
        assert_eq!(appointment.hospital_name, doctor.chamber);
        assert_eq!(appointment.appointment_time, doctor.available_slots[0]);
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_hospital_path_uses_admission_sentinels() {
        let mut session = terminal_session();
        session.selected_hospital = Some(crate::catalog::default_hospitals().remove(0));

        let appointment = build(&session).unwrap();
        assert_eq!(appointment.doctor_name, HOSPITAL_ADMISSION_DOCTOR);
        assert_eq!(appointment.hospital_name, "City Hospital");
        assert_eq!(appointment.appointment_time, HOSPITAL_ADMISSION_SLOT);
    }

    #[test]
    fn test_empty_detail_values_are_accepted() {
        let mut session = terminal_session();
        for field in DetailField::ORDER {
            session.details.set(field, String::new());
        }
        let appointment = build(&session).unwrap();
        assert_eq!(appointment.patient_phone, "");
        assert_eq!(appointment.patient_address, "");
    }

    #[test]
    fn test_missing_details_are_rejected() {
        let mut session = terminal_session();
        session.details.email = None;
        assert!(build(&session).is_err());
    }

    #[test]
    fn test_both_selections_set_is_invariant_violation() {
        let mut session = terminal_session();
        session.selected_doctor = Some(default_doctors().remove(0));
        session.selected_hospital = Some(crate::catalog::default_hospitals().remove(0));
        assert!(build(&session).is_err());
    }
}
