//! Catalog domain models.
//!
//! Doctors and hospitals are read-only directory entries, assumed static
//! for a process lifetime.

use serde::{Deserialize, Serialize};

/// A doctor in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialization: String,
    /// Name of the hospital the doctor practices at.
    pub chamber: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visiting_hours: Option<String>,
    #[serde(default)]
    pub available_slots: Vec<String>,
    /// Display string such as "15 yrs".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

/// A hospital in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
