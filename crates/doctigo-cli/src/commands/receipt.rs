//! Plain-text booking summary.
//!
//! The terminal analog of the printable receipt: the finalized
//! appointment is the only input, rendered section by section.

use chrono::DateTime;
use doctigo_core::appointment::{Appointment, HOSPITAL_ADMISSION_DOCTOR};

fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn doctor_line(appointment: &Appointment) -> String {
    if appointment.doctor_name == HOSPITAL_ADMISSION_DOCTOR {
        appointment.doctor_name.clone()
    } else {
        format!("Dr. {}", appointment.doctor_name)
    }
}

/// Renders the booking summary as plain text.
pub fn render(appointment: &Appointment) -> String {
    let mut out = String::new();
    let line = "=".repeat(46);

    out.push_str(&format!("{line}\n"));
    out.push_str("          Doctigo Booking Summary\n");
    if !appointment.hospital_name.is_empty() {
        out.push_str(&format!("          {}\n", appointment.hospital_name));
    }
    out.push_str(&format!("{line}\n\n"));

    out.push_str("Patient Details\n---------------\n");
    out.push_str(&format!("Patient Name: {}\n", appointment.patient_name));
    out.push_str(&format!("Age: {}\n", appointment.patient_age));
    out.push_str(&format!("Gender: {}\n", appointment.patient_gender));
    out.push_str(&format!("Phone: {}\n", appointment.patient_phone));
    out.push_str(&format!("Email: {}\n", appointment.patient_email));
    out.push_str(&format!("Address: {}\n\n", appointment.patient_address));

    out.push_str("Appointment Details\n-------------------\n");
    out.push_str(&format!("Doctor: {}\n", doctor_line(appointment)));
    out.push_str(&format!("Booking Type: {}\n", appointment.booking_type));
    out.push_str(&format!(
        "Date: {}\n",
        format_date(&appointment.appointment_date)
    ));
    out.push_str(&format!("Time: {}\n", appointment.appointment_time));
    if !appointment.symptoms.is_empty() {
        out.push_str(&format!("Symptoms: {}\n", appointment.symptoms.join(", ")));
    }
    out.push('\n');

    if let Some(bed) = &appointment.bed {
        out.push_str("Bed/Cabin Details\n-----------------\n");
        out.push_str(&format!("Type: {}\n", bed.bed_type));
        out.push_str(&format!("Unit No: {}\n", bed.serial));
        out.push_str(&format!("Price per night: ₹{}\n", bed.price_per_night));
        out.push_str("Features:\n");
        for feature in &bed.features {
            out.push_str(&format!("  - {feature}\n"));
        }
        out.push('\n');
    }

    if let Some(vitals) = &appointment.vitals {
        out.push_str("Recent Vitals\n-------------\n");
        out.push_str(&format!(
            "Blood pressure: {}/{} mmHg\n",
            vitals.systolic_bp, vitals.diastolic_bp
        ));
        out.push_str(&format!("Temperature: {} C\n", vitals.body_temperature));
        out.push_str(&format!("Recorded: {}\n\n", vitals.timestamp));
    }

    out.push_str("This receipt was auto-generated by Doctigo.\n");
    out.push_str(&format!(
        "Issued on: {}\n",
        chrono::Utc::now().format("%d/%m/%Y, %I:%M %p")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctigo_core::appointment::{AppointmentStatus, BedAssignment};
    use doctigo_core::inventory::BedType;
    use doctigo_core::session::BookingType;

    fn appointment() -> Appointment {
        Appointment {
            patient_name: "Asha".to_string(),
            booking_type: BookingType::Normal,
            symptoms: vec!["Fever".to_string()],
            doctor_name: "Amit Kumar".to_string(),
            hospital_name: "City Hospital".to_string(),
            appointment_date: "2026-08-06T09:30:00+00:00".to_string(),
            appointment_time: "11:00am-11:30am".to_string(),
            patient_phone: "0123456789".to_string(),
            patient_gender: "female".to_string(),
            patient_age: "29".to_string(),
            patient_email: "asha@example.com".to_string(),
            patient_address: "12 Park St".to_string(),
            needs_bed: true,
            bed: Some(BedAssignment {
                bed_type: BedType::GeneralCabin,
                price_per_night: 1000,
                features: vec!["2 beds".to_string()],
                serial: 4,
            }),
            vitals: None,
            status: AppointmentStatus::Confirmed,
        }
    }

    #[test]
    fn test_render_includes_every_section() {
        let text = render(&appointment());
        assert!(text.contains("Doctigo Booking Summary"));
        assert!(text.contains("Patient Name: Asha"));
        assert!(text.contains("Doctor: Dr. Amit Kumar"));
        assert!(text.contains("Date: 06/08/2026"));
        assert!(text.contains("Symptoms: Fever"));
        assert!(text.contains("Type: General Cabin"));
        assert!(text.contains("Unit No: 4"));
    }

    #[test]
    fn test_hospital_admission_has_no_doctor_prefix() {
        let mut appointment = appointment();
        appointment.doctor_name = HOSPITAL_ADMISSION_DOCTOR.to_string();
        appointment.bed = None;
        let text = render(&appointment);
        assert!(text.contains("Doctor: (Hospital admission)"));
        assert!(!text.contains("Dr. (Hospital admission)"));
        assert!(!text.contains("Bed/Cabin Details"));
    }
}
