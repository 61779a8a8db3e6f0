//! Read-only doctor and hospital directory.
//!
//! # Module Structure
//!
//! - `model`: directory entry types (`Doctor`, `Hospital`)
//! - `preset`: built-in directory data and the symptom mapping table
//! - `geo`: distance and travel-time helpers
//!
//! The catalog is immutable once built; every lookup is a pure read.

pub mod geo;
mod model;
mod preset;

pub use model::{Doctor, Hospital};
pub use preset::{COMMON_SYMPTOMS, SYMPTOM_SPECIALIZATIONS, default_doctors, default_hospitals};

use std::collections::HashSet;

use crate::config::ConfigRoot;

/// The doctor/hospital directory consulted by the conversation flow.
#[derive(Debug, Clone)]
pub struct Catalog {
    doctors: Vec<Doctor>,
    hospitals: Vec<Hospital>,
}

impl Catalog {
    pub fn new(doctors: Vec<Doctor>, hospitals: Vec<Hospital>) -> Self {
        Self { doctors, hospitals }
    }

    /// Catalog holding only the built-in directory.
    pub fn with_defaults() -> Self {
        Self::new(default_doctors(), default_hospitals())
    }

    /// Built-in directory plus any extra entries from configuration.
    pub fn from_config(config: &ConfigRoot) -> Self {
        let mut doctors = default_doctors();
        doctors.extend(config.doctors.iter().cloned());
        let mut hospitals = default_hospitals();
        hospitals.extend(config.hospitals.iter().cloned());
        Self::new(doctors, hospitals)
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn list_hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn find_hospital(&self, name: &str) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.name == name)
    }

    /// Filters doctors by the specializations the given symptoms map to.
    ///
    /// Symptoms are trimmed and matched case-insensitively. When no
    /// symptom maps to a known specialization, or the input is empty,
    /// the full list is returned so the flow never dead-ends.
    pub fn filter_doctors_by_symptoms(&self, symptoms: &[String]) -> Vec<Doctor> {
        let specializations: HashSet<&str> = symptoms
            .iter()
            .filter_map(|s| {
                SYMPTOM_SPECIALIZATIONS
                    .get(s.trim().to_lowercase().as_str())
                    .copied()
            })
            .collect();

        if specializations.is_empty() {
            return self.doctors.clone();
        }

        self.doctors
            .iter()
            .filter(|d| {
                specializations
                    .iter()
                    .any(|spec| d.specialization.eq_ignore_ascii_case(spec))
            })
            .cloned()
            .collect()
    }

    /// Every hospital name the inventory needs stock for: the hospital
    /// directory plus each doctor's chamber, deduplicated in order.
    pub fn hospital_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for hospital in &self.hospitals {
            if !names.contains(&hospital.name) {
                names.push(hospital.name.clone());
            }
        }
        for doctor in &self.doctors {
            if !names.contains(&doctor.chamber) {
                names.push(doctor.chamber.clone());
            }
        }
        names
    }
}
