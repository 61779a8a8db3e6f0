//! Read-only directory listings.

use std::path::Path;

use anyhow::{Context, Result, bail};
use doctigo_core::catalog::{Catalog, geo};
use doctigo_core::config::ConfigRoot;
use doctigo_core::inventory::InventoryManager;

/// Prints doctors, narrowed by symptoms when given.
pub fn doctors(symptoms: Option<&str>) -> Result<()> {
    let catalog = Catalog::with_defaults();
    let symptoms: Vec<String> = symptoms
        .map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    for doctor in catalog.filter_doctors_by_symptoms(&symptoms) {
        let experience = doctor.experience.as_deref().unwrap_or("-");
        println!(
            "Dr. {} — {} — {} ({} Exp.)",
            doctor.name, doctor.specialization, doctor.chamber, experience
        );
        if let Some(hours) = &doctor.visiting_hours {
            println!("    Visiting hours: {hours}");
        }
        if !doctor.available_slots.is_empty() {
            println!("    Slots: {}", doctor.available_slots.join(", "));
        }
    }
    Ok(())
}

/// Prints hospitals; with a "lat,lng" location also distance and ETA.
pub fn hospitals(near: Option<&str>) -> Result<()> {
    let catalog = Catalog::with_defaults();
    let location = near.map(parse_location).transpose()?;

    for hospital in catalog.list_hospitals() {
        println!("{} — {}", hospital.name, hospital.address);
        if let (Some((lat, lng)), Some(h_lat), Some(h_lng)) =
            (location, hospital.latitude, hospital.longitude)
        {
            let distance = geo::distance_km(lat, lng, h_lat, h_lng);
            let eta = geo::estimated_travel_minutes(distance);
            println!("    {distance:.1}km away • ~{eta} min travel");
        }
    }
    Ok(())
}

/// Prints free/total counts per hospital and bed type.
pub async fn availability(config: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => ConfigRoot::load(path)?,
        None => ConfigRoot::default(),
    };
    let catalog = Catalog::from_config(&config);
    let inventory = InventoryManager::new(&catalog.hospital_names(), &config.stock);

    for (hospital, bed_type, availability) in inventory.snapshot().await {
        println!(
            "{hospital} — {bed_type}: {}/{} free",
            availability.free, availability.total
        );
    }
    Ok(())
}

fn parse_location(raw: &str) -> Result<(f64, f64)> {
    let Some((lat, lng)) = raw.split_once(',') else {
        bail!("location must be \"lat,lng\", got {raw}");
    };
    let lat = lat.trim().parse::<f64>().context("invalid latitude")?;
    let lng = lng.trim().parse::<f64>().context("invalid longitude")?;
    Ok((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_accepts_spaces() {
        assert_eq!(parse_location("22.57, 88.36").unwrap(), (22.57, 88.36));
    }

    #[test]
    fn test_parse_location_rejects_garbage() {
        assert!(parse_location("nowhere").is_err());
        assert!(parse_location("22.57;88.36").is_err());
    }
}
