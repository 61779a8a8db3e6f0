//! Bed and cabin inventory.
//!
//! The inventory is the only mutable resource shared between booking
//! sessions. Each hospital carries a finite stock per bed type,
//! materialized at startup from configuration; units move `Free ->
//! Reserved` exactly once and there is no release path, so the free
//! count decreases monotonically for the process lifetime.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::StockSettings;
use crate::error::{BookingError, Result};

/// The closed set of reservable unit types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum BedType {
    #[serde(rename = "General Bed")]
    #[strum(serialize = "General Bed")]
    GeneralBed,
    #[serde(rename = "General Cabin")]
    #[strum(serialize = "General Cabin")]
    GeneralCabin,
    #[serde(rename = "VIP Cabin")]
    #[strum(serialize = "VIP Cabin")]
    VipCabin,
}

/// A bookable bed/cabin offering shown to the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedOption {
    pub bed_type: BedType,
    /// Price per night in rupees.
    pub price_per_night: u32,
    pub features: Vec<String>,
}

/// Returns the fixed bed/cabin offerings.
pub fn bed_options() -> Vec<BedOption> {
    vec![
        BedOption {
            bed_type: BedType::GeneralBed,
            price_per_night: 100,
            features: vec![
                "1 bed".to_string(),
                "1 chair".to_string(),
                "bed table".to_string(),
            ],
        },
        BedOption {
            bed_type: BedType::GeneralCabin,
            price_per_night: 1000,
            features: vec![
                "2 beds".to_string(),
                "attached washroom".to_string(),
                "bed table".to_string(),
                "chair".to_string(),
                "food x3 times".to_string(),
            ],
        },
        BedOption {
            bed_type: BedType::VipCabin,
            price_per_night: 4000,
            features: vec![
                "premium bed x2".to_string(),
                "sofa".to_string(),
                "Air Conditioning".to_string(),
                "attached washroom".to_string(),
                "TV".to_string(),
                "fridge".to_string(),
                "bed table x2".to_string(),
                "coffee table".to_string(),
                "2 chairs".to_string(),
            ],
        },
    ]
}

/// Looks up the offering for a bed type.
pub fn bed_option(bed_type: BedType) -> BedOption {
    // Safe to expect because bed_options() covers every BedType variant
    bed_options()
        .into_iter()
        .find(|o| o.bed_type == bed_type)
        .expect("bed_options covers every BedType")
}

/// Free/total counts for one `(hospital, bed type)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub free: u32,
    pub total: u32,
}

/// Stock for one `(hospital, bed type)` pair.
///
/// `pre_booked` units occupy serials `1..=pre_booked`; serials issued by
/// this process start above that range.
#[derive(Debug)]
struct Stock {
    total: u32,
    pre_booked: u32,
    issued: BTreeSet<u32>,
}

impl Stock {
    fn used(&self) -> u32 {
        self.pre_booked + self.issued.len() as u32
    }

    fn free(&self) -> u32 {
        self.total.saturating_sub(self.used())
    }
}

/// Owns the per-hospital bed stock and issues reservation serials.
///
/// `reserve` holds a single critical section spanning the exhaustion
/// check and the serial issuance, so concurrent sessions can never
/// double-book a unit or exceed the configured total.
pub struct InventoryManager {
    stocks: Mutex<HashMap<(String, BedType), Stock>>,
}

impl InventoryManager {
    /// Materializes the stock table for every hospital name from the
    /// configured defaults plus any explicit overrides.
    pub fn new(hospitals: &[String], settings: &StockSettings) -> Self {
        let mut stocks = HashMap::new();
        for hospital in hospitals {
            for bed_type in BedType::iter() {
                let level = settings.level(hospital, bed_type);
                stocks.insert(
                    (hospital.clone(), bed_type),
                    Stock {
                        total: level.total,
                        pre_booked: level.pre_booked.min(level.total),
                        issued: BTreeSet::new(),
                    },
                );
            }
        }
        Self {
            stocks: Mutex::new(stocks),
        }
    }

    /// Reserves one unit of `bed_type` at `hospital`.
    ///
    /// Returns the issued serial, unique within `(hospital, bed_type)`
    /// for the process lifetime. Serials are assigned contiguously
    /// starting at the lowest integer above the pre-booked range.
    ///
    /// # Errors
    ///
    /// `InventoryExhausted` when every unit is already taken;
    /// `Validation` when the hospital is not part of the stock table.
    pub async fn reserve(&self, hospital: &str, bed_type: BedType) -> Result<u32> {
        let mut stocks = self.stocks.lock().await;
        let stock = stocks
            .get_mut(&(hospital.to_string(), bed_type))
            .ok_or_else(|| {
                BookingError::validation(format!("unknown hospital in reservation: {hospital}"))
            })?;

        if stock.used() >= stock.total {
            info!(hospital, %bed_type, "bed stock exhausted");
            return Err(BookingError::exhausted(hospital, bed_type));
        }

        let mut serial = stock.pre_booked + 1;
        while stock.issued.contains(&serial) {
            serial += 1;
        }
        stock.issued.insert(serial);
        debug!(hospital, %bed_type, serial, "reserved bed unit");
        Ok(serial)
    }

    /// Returns free/total counts for one `(hospital, bed type)` pair,
    /// or `None` for a hospital outside the stock table.
    pub async fn availability(&self, hospital: &str, bed_type: BedType) -> Option<Availability> {
        let stocks = self.stocks.lock().await;
        stocks
            .get(&(hospital.to_string(), bed_type))
            .map(|stock| Availability {
                free: stock.free(),
                total: stock.total,
            })
    }

    /// Snapshot of the whole stock table, sorted by hospital then type.
    /// Display-only; the counts may be stale by the time they are shown.
    pub async fn snapshot(&self) -> Vec<(String, BedType, Availability)> {
        let stocks = self.stocks.lock().await;
        let mut rows: Vec<_> = stocks
            .iter()
            .map(|((hospital, bed_type), stock)| {
                (
                    hospital.clone(),
                    *bed_type,
                    Availability {
                        free: stock.free(),
                        total: stock.total,
                    },
                )
            })
            .collect();
        rows.sort_by(|a, b| (&a.0, a.1.to_string()).cmp(&(&b.0, b.1.to_string())));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StockLevel, StockOverride, StockSettings};
    use std::sync::Arc;

    fn settings(total: u32, pre_booked: u32) -> StockSettings {
        let level = StockLevel { total, pre_booked };
        StockSettings {
            defaults: crate::config::StockDefaults {
                general_bed: level,
                general_cabin: level,
                vip_cabin: level,
            },
            overrides: Vec::new(),
        }
    }

    fn manager(total: u32, pre_booked: u32) -> InventoryManager {
        InventoryManager::new(&["City Hospital".to_string()], &settings(total, pre_booked))
    }

    #[test]
    fn test_bed_options_cover_every_type() {
        let options = bed_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].price_per_night, 100);
        assert_eq!(options[1].price_per_night, 1000);
        assert_eq!(options[2].price_per_night, 4000);
    }

    #[tokio::test]
    async fn test_serials_start_above_pre_booked_range() {
        let manager = manager(5, 2);
        let first = manager
            .reserve("City Hospital", BedType::GeneralBed)
            .await
            .unwrap();
        let second = manager
            .reserve("City Hospital", BedType::GeneralBed)
            .await
            .unwrap();
        assert_eq!(first, 3);
        assert_eq!(second, 4);
    }

    #[tokio::test]
    async fn test_single_vip_cabin_then_exhausted() {
        let manager = manager(1, 0);
        let serial = manager
            .reserve("City Hospital", BedType::VipCabin)
            .await
            .unwrap();
        assert_eq!(serial, 1);

        let err = manager
            .reserve("City Hospital", BedType::VipCabin)
            .await
            .unwrap_err();
        assert!(err.is_exhausted());
    }

    #[tokio::test]
    async fn test_unknown_hospital_is_rejected() {
        let manager = manager(1, 0);
        let err = manager
            .reserve("Nowhere Clinic", BedType::GeneralBed)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_availability_tracks_reservations() {
        let manager = manager(4, 1);
        let before = manager
            .availability("City Hospital", BedType::GeneralCabin)
            .await
            .unwrap();
        assert_eq!(before, Availability { free: 3, total: 4 });

        manager
            .reserve("City Hospital", BedType::GeneralCabin)
            .await
            .unwrap();
        let after = manager
            .availability("City Hospital", BedType::GeneralCabin)
            .await
            .unwrap();
        assert_eq!(after, Availability { free: 2, total: 4 });
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reserves_never_exceed_capacity() {
        let manager = Arc::new(manager(6, 2));

        let mut handles = Vec::new();
        for _ in 0..10 {
            let manager = manager.clone();
            handles.push(tokio::spawn(async move {
                manager.reserve("City Hospital", BedType::GeneralBed).await
            }));
        }

        let mut serials = Vec::new();
        let mut exhausted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(serial) => serials.push(serial),
                Err(err) => {
                    assert!(err.is_exhausted());
                    exhausted += 1;
                }
            }
        }

        // capacity is total - pre_booked = 4
        assert_eq!(serials.len(), 4);
        assert_eq!(exhausted, 6);
        serials.sort_unstable();
        serials.dedup();
        assert_eq!(serials.len(), 4, "issued serials must be pairwise distinct");
        assert!(serials.iter().all(|s| *s >= 3));
    }

    #[tokio::test]
    async fn test_override_takes_precedence_over_defaults() {
        let mut settings = settings(5, 0);
        settings.overrides.push(StockOverride {
            hospital: "City Hospital".to_string(),
            bed_type: BedType::VipCabin,
            total: 1,
            pre_booked: 1,
        });
        let manager = InventoryManager::new(&["City Hospital".to_string()], &settings);

        let err = manager
            .reserve("City Hospital", BedType::VipCabin)
            .await
            .unwrap_err();
        assert!(err.is_exhausted());

        // other types still use the defaults
        manager
            .reserve("City Hospital", BedType::GeneralBed)
            .await
            .unwrap();
    }
}
