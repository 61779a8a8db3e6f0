//! Built-in directory data and the symptom mapping table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::model::{Doctor, Hospital};

/// Symptoms offered as quick choices during intake.
pub const COMMON_SYMPTOMS: [&str; 15] = [
    "Fever",
    "Headache",
    "Cough",
    "Sore throat",
    "Body ache",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Chest pain",
    "Shortness of breath",
    "Dizziness",
    "Fatigue",
    "Loss of appetite",
    "Stomach pain",
    "Joint pain",
];

/// Maps a lowercased symptom to the specialization that treats it.
/// Symptoms outside this table do not narrow the doctor list.
pub static SYMPTOM_SPECIALIZATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("fever", "General Medicine"),
        ("headache", "Neurology"),
        ("cough", "Pulmonology"),
        ("sore throat", "ENT"),
        ("body ache", "General Medicine"),
        ("nausea", "Gastroenterology"),
        ("vomiting", "Gastroenterology"),
        ("diarrhea", "Gastroenterology"),
        ("chest pain", "Cardiology"),
        ("shortness of breath", "Pulmonology"),
        ("dizziness", "Neurology"),
        ("fatigue", "General Medicine"),
        ("loss of appetite", "Gastroenterology"),
        ("stomach pain", "Gastroenterology"),
        ("joint pain", "Orthopedics"),
    ])
});

/// Returns the built-in doctor directory.
pub fn default_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            name: "Amit Kumar".to_string(),
            specialization: "General Medicine".to_string(),
            chamber: "City Hospital".to_string(),
            visiting_hours: Some("Mon-Sat 10am-2pm".to_string()),
            available_slots: vec!["11:00am-11:30am".to_string(), "12:00pm-12:30pm".to_string()],
            experience: Some("15 yrs".to_string()),
        },
        Doctor {
            name: "Suvajoyti Chakraborty".to_string(),
            specialization: "Surgeon".to_string(),
            chamber: "Munni Medical Hall".to_string(),
            visiting_hours: Some("Mon-Fri 1pm-5pm".to_string()),
            available_slots: vec!["1:00pm-1:30pm".to_string(), "2:00pm-2:30pm".to_string()],
            experience: Some("20 yrs".to_string()),
        },
        Doctor {
            name: "Rina Banerjee".to_string(),
            specialization: "Cardiology".to_string(),
            chamber: "City Hospital".to_string(),
            visiting_hours: Some("Mon-Sat 9am-1pm".to_string()),
            available_slots: vec![
                "9:00am-9:30am".to_string(),
                "10:00am-10:30am".to_string(),
                "5:00pm-5:30pm".to_string(),
            ],
            experience: Some("12 yrs".to_string()),
        },
        Doctor {
            name: "Farhan Ali".to_string(),
            specialization: "Gastroenterology".to_string(),
            chamber: "Green Park Nursing Home".to_string(),
            visiting_hours: Some("Tue-Sun 3pm-7pm".to_string()),
            available_slots: vec!["3:00pm-3:30pm".to_string(), "4:00pm-4:30pm".to_string()],
            experience: Some("9 yrs".to_string()),
        },
        Doctor {
            name: "Meera Pillai".to_string(),
            specialization: "Neurology".to_string(),
            chamber: "Eastern Care Institute".to_string(),
            visiting_hours: Some("Mon-Fri 10am-1pm".to_string()),
            available_slots: vec!["10:30am-11:00am".to_string(), "11:30am-12:00pm".to_string()],
            experience: Some("18 yrs".to_string()),
        },
        Doctor {
            name: "Joydeep Sen".to_string(),
            specialization: "Pulmonology".to_string(),
            chamber: "Munni Medical Hall".to_string(),
            visiting_hours: Some("Mon-Sat 12pm-7pm".to_string()),
            available_slots: vec!["12:30pm-1:00pm".to_string(), "6:00pm-6:30pm".to_string()],
            experience: Some("11 yrs".to_string()),
        },
        Doctor {
            name: "Kavita Rao".to_string(),
            specialization: "Orthopedics".to_string(),
            chamber: "Green Park Nursing Home".to_string(),
            visiting_hours: Some("Wed-Mon 2pm-6pm".to_string()),
            available_slots: vec!["2:30pm-3:00pm".to_string(), "5:30pm-6:00pm".to_string()],
            experience: Some("14 yrs".to_string()),
        },
        Doctor {
            name: "Anirban Dutta".to_string(),
            specialization: "ENT".to_string(),
            chamber: "City Hospital".to_string(),
            visiting_hours: Some("Mon-Thu 9am-12pm".to_string()),
            available_slots: vec!["9:30am-10:00am".to_string()],
            experience: Some("7 yrs".to_string()),
        },
    ]
}

/// Returns the built-in hospital directory.
pub fn default_hospitals() -> Vec<Hospital> {
    vec![
        Hospital {
            name: "City Hospital".to_string(),
            address: "152 College Street, Kolkata".to_string(),
            latitude: Some(22.5744),
            longitude: Some(88.3629),
        },
        Hospital {
            name: "Munni Medical Hall".to_string(),
            address: "7 Lansdowne Terrace, Kolkata".to_string(),
            latitude: Some(22.5205),
            longitude: Some(88.3476),
        },
        Hospital {
            name: "Green Park Nursing Home".to_string(),
            address: "44 Jessore Road, Kolkata".to_string(),
            latitude: Some(22.6203),
            longitude: Some(88.4097),
        },
        Hospital {
            name: "Eastern Care Institute".to_string(),
            address: "19 Salt Lake Sector V, Kolkata".to_string(),
            latitude: Some(22.5697),
            longitude: Some(88.4337),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_doctors_have_unique_names() {
        let doctors = default_doctors();
        let mut names = std::collections::HashSet::new();
        for doctor in &doctors {
            assert!(
                names.insert(doctor.name.clone()),
                "Doctor names must be unique, found duplicate: {}",
                doctor.name
            );
        }
    }

    #[test]
    fn test_every_chamber_is_a_known_hospital() {
        let hospitals: std::collections::HashSet<String> =
            default_hospitals().into_iter().map(|h| h.name).collect();
        for doctor in default_doctors() {
            assert!(
                hospitals.contains(&doctor.chamber),
                "chamber {} of {} is not in the hospital directory",
                doctor.chamber,
                doctor.name
            );
        }
    }

    #[test]
    fn test_every_common_symptom_is_mapped() {
        for symptom in COMMON_SYMPTOMS {
            assert!(
                SYMPTOM_SPECIALIZATIONS.contains_key(symptom.to_lowercase().as_str()),
                "symptom {} has no specialization mapping",
                symptom
            );
        }
    }

    #[test]
    fn test_mapped_specializations_have_a_doctor() {
        let doctors = default_doctors();
        for specialization in SYMPTOM_SPECIALIZATIONS.values() {
            assert!(
                doctors
                    .iter()
                    .any(|d| d.specialization.eq_ignore_ascii_case(specialization)),
                "no doctor covers {}",
                specialization
            );
        }
    }
}
