use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Doctor, Hospital};
use crate::error::Result;
use crate::inventory::BedType;

/// Stock level for one bed type at one hospital.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevel {
    pub total: u32,
    #[serde(default)]
    pub pre_booked: u32,
}

/// Default stock levels applied to every hospital.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StockDefaults {
    pub general_bed: StockLevel,
    pub general_cabin: StockLevel,
    pub vip_cabin: StockLevel,
}

impl Default for StockDefaults {
    fn default() -> Self {
        Self {
            general_bed: StockLevel {
                total: 20,
                pre_booked: 8,
            },
            general_cabin: StockLevel {
                total: 8,
                pre_booked: 3,
            },
            vip_cabin: StockLevel {
                total: 3,
                pre_booked: 1,
            },
        }
    }
}

/// Per-hospital stock override.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StockOverride {
    pub hospital: String,
    pub bed_type: BedType,
    pub total: u32,
    #[serde(default)]
    pub pre_booked: u32,
}

/// Stock configuration: defaults plus explicit overrides.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StockSettings {
    #[serde(default)]
    pub defaults: StockDefaults,
    #[serde(default, rename = "override")]
    pub overrides: Vec<StockOverride>,
}

impl StockSettings {
    /// Resolves the stock level for a `(hospital, bed type)` pair.
    pub fn level(&self, hospital: &str, bed_type: BedType) -> StockLevel {
        self.overrides
            .iter()
            .find(|o| o.hospital == hospital && o.bed_type == bed_type)
            .map(|o| StockLevel {
                total: o.total,
                pre_booked: o.pre_booked,
            })
            .unwrap_or(match bed_type {
                BedType::GeneralBed => self.defaults.general_bed,
                BedType::GeneralCabin => self.defaults.general_cabin,
                BedType::VipCabin => self.defaults.vip_cabin,
            })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConfigRoot {
    #[serde(default)]
    pub stock: StockSettings,
    /// Extra doctors appended to the built-in directory.
    #[serde(default, rename = "doctor")]
    pub doctors: Vec<Doctor>,
    /// Extra hospitals appended to the built-in directory.
    #[serde(default, rename = "hospital")]
    pub hospitals: Vec<Hospital>,
}

impl ConfigRoot {
    /// Loads configuration from a TOML file. A missing file yields the
    /// built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigRoot::load(&dir.path().join("doctigo.toml")).unwrap();
        assert_eq!(config.stock.defaults.vip_cabin.total, 3);
        assert!(config.doctors.is_empty());
    }

    #[test]
    fn test_parse_overrides_and_extra_hospital() {
        let raw = r#"
            [stock.defaults]
            general_bed = { total = 10, pre_booked = 2 }
            general_cabin = { total = 4 }
            vip_cabin = { total = 2, pre_booked = 1 }

            [[stock.override]]
            hospital = "Munni Medical Hall"
            bed_type = "VIP Cabin"
            total = 1

            [[hospital]]
            name = "Lakeview Clinic"
            address = "12 Lake Road"
            latitude = 22.57
            longitude = 88.36
        "#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(raw.as_bytes()).unwrap();
        let config = ConfigRoot::load(file.path()).unwrap();

        assert_eq!(
            config.stock.level("Munni Medical Hall", BedType::VipCabin),
            StockLevel {
                total: 1,
                pre_booked: 0
            }
        );
        assert_eq!(
            config.stock.level("City Hospital", BedType::VipCabin),
            StockLevel {
                total: 2,
                pre_booked: 1
            }
        );
        assert_eq!(config.hospitals.len(), 1);
        assert_eq!(config.hospitals[0].name, "Lakeview Clinic");
    }

    #[test]
    fn test_invalid_bed_type_is_rejected() {
        let raw = r#"
            [[stock.override]]
            hospital = "City Hospital"
            bed_type = "Suite"
            total = 1
        "#;
        assert!(toml::from_str::<ConfigRoot>(raw).is_err());
    }
}
