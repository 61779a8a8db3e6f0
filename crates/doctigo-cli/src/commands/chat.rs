//! Interactive booking conversation on stdin/stdout.
//!
//! The loop renders each `RenderDirective` as a prompt, parses the
//! reply into a `SessionEvent`, and feeds it back to the engine.
//! Recoverable errors (validation, exhaustion) re-prompt; anything
//! else aborts.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use doctigo_core::catalog::{COMMON_SYMPTOMS, Catalog};
use doctigo_core::config::ConfigRoot;
use doctigo_core::inventory::InventoryManager;
use doctigo_core::session::{BookingType, ConversationEngine, RenderDirective, SessionEvent};
use doctigo_core::vitals::{LatestVitals, sample_snapshot};

use super::receipt;

pub async fn run(config: Option<&Path>, json: bool, sample_vitals: bool) -> Result<()> {
    let config = match config {
        Some(path) => ConfigRoot::load(path)?,
        None => ConfigRoot::default(),
    };
    let catalog = Arc::new(Catalog::from_config(&config));
    let inventory = Arc::new(InventoryManager::new(
        &catalog.hospital_names(),
        &config.stock,
    ));
    let vitals = Arc::new(LatestVitals::new());
    if sample_vitals {
        vitals.publish(sample_snapshot()).await;
        println!("(published a sample vitals reading for this session)");
    }

    let mut engine = ConversationEngine::new(catalog, inventory, vitals);

    println!("🩺 Doctigo");
    println!("Your medical booking assistant\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut directive = engine.directive()?;

    loop {
        if let RenderDirective::FinalCard { appointment } = &directive {
            println!("\n🎉 Appointment confirmed! Here's your appointment card:\n");
            println!("{}", receipt::render(appointment));
            if json {
                println!("{}", serde_json::to_string_pretty(appointment.as_ref())?);
            }
            return Ok(());
        }

        print_prompt(&directive);
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!("\nSession abandoned.");
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        let Some(event) = parse_event(&directive, line.trim()) else {
            println!("Sorry, I didn't catch that. Please try again.");
            continue;
        };

        match engine.handle(event).await {
            Ok(next) => directive = next,
            Err(err) if err.is_recoverable() => {
                println!("{err}");
                directive = engine.directive()?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn print_prompt(directive: &RenderDirective) {
    match directive {
        RenderDirective::ChooseBookingType => {
            println!("Choose booking type:");
            println!("  [1] 📋 Normal Booking");
            println!("  [2] 🚨 Emergency Booking");
        }
        RenderDirective::AskName => {
            println!("Hello! I am Doc, your friendly neighborhood Spider Doc. What's your name?");
        }
        RenderDirective::AskSymptoms { booking_type } => {
            if *booking_type == BookingType::Emergency {
                println!("Woooo it's an EMERGENCY! Just enter symptoms or type 'next'.");
            } else {
                println!("Enter your symptoms (comma-separated) or type 'next' to skip.");
            }
            println!("Common symptoms: {}", COMMON_SYMPTOMS.join(", "));
        }
        RenderDirective::ChoosePath => {
            println!("How would you like to continue?");
            println!("  [1] Browse doctors");
            println!("  [2] Browse hospitals");
        }
        RenderDirective::ListDoctors { doctors } => {
            println!("Based on your information, here are available doctors:");
            for (i, doctor) in doctors.iter().enumerate() {
                let experience = doctor.experience.as_deref().unwrap_or("-");
                println!(
                    "  [{}] Dr. {} — {} — {} ({} Exp.)",
                    i + 1,
                    doctor.name,
                    doctor.specialization,
                    doctor.chamber,
                    experience
                );
                if !doctor.available_slots.is_empty() {
                    println!("      Available today: {}", doctor.available_slots.join(", "));
                }
            }
            println!("Pick a doctor by number or name:");
        }
        RenderDirective::ListHospitals { hospitals } => {
            println!("Here are the hospitals in the directory:");
            for (i, hospital) in hospitals.iter().enumerate() {
                println!("  [{}] {} — {}", i + 1, hospital.name, hospital.address);
            }
            println!("Pick a hospital by number or name:");
        }
        RenderDirective::AskBed {
            options,
            unavailable,
        } => {
            if let Some(bed_type) = unavailable {
                println!("Sorry, no {bed_type} is free right now. Please choose another option.");
            } else {
                println!("Do you need to book a Bed or Cabin? Please choose:");
            }
            for (i, option) in options.iter().enumerate() {
                println!(
                    "  [{}] {} — ₹{}/night ({})",
                    i + 1,
                    option.bed_type,
                    option.price_per_night,
                    option.features.join(", ")
                );
            }
            println!("Or type 'no' if you don't need one.");
        }
        RenderDirective::AskVitals => {
            println!("Do you want to attach your recent vitals to the appointment? (yes/no)");
        }
        RenderDirective::AskDetail { field } => {
            println!("Please enter patient's {}:", field.label());
        }
        RenderDirective::FinalCard { .. } => {
            // handled by the loop before prompting
        }
    }
}

fn parse_event(directive: &RenderDirective, input: &str) -> Option<SessionEvent> {
    match directive {
        RenderDirective::ChooseBookingType => match input.to_lowercase().as_str() {
            "1" | "normal" => Some(SessionEvent::ChooseBookingType {
                booking_type: BookingType::Normal,
            }),
            "2" | "emergency" => Some(SessionEvent::ChooseBookingType {
                booking_type: BookingType::Emergency,
            }),
            _ => None,
        },
        RenderDirective::AskName => Some(SessionEvent::SubmitName {
            name: input.to_string(),
        }),
        RenderDirective::AskSymptoms { .. } => match input.to_lowercase().as_str() {
            "" | "next" | "skip" => Some(SessionEvent::SkipSymptoms),
            _ => Some(SessionEvent::SubmitSymptoms {
                symptoms: input.split(',').map(|s| s.trim().to_string()).collect(),
            }),
        },
        RenderDirective::ChoosePath => match input.to_lowercase().as_str() {
            "1" | "doctors" => Some(SessionEvent::PickDoctors),
            "2" | "hospitals" => Some(SessionEvent::PickHospitals),
            _ => None,
        },
        RenderDirective::ListDoctors { doctors } => {
            let name = match input.parse::<usize>() {
                Ok(i) => doctors.get(i.checked_sub(1)?)?.name.clone(),
                Err(_) => input.to_string(),
            };
            Some(SessionEvent::SelectDoctor { name })
        }
        RenderDirective::ListHospitals { hospitals } => {
            let name = match input.parse::<usize>() {
                Ok(i) => hospitals.get(i.checked_sub(1)?)?.name.clone(),
                Err(_) => input.to_string(),
            };
            Some(SessionEvent::SelectHospital { name })
        }
        RenderDirective::AskBed { options, .. } => match input.to_lowercase().as_str() {
            "no" | "none" | "skip" => Some(SessionEvent::DeclineBed),
            _ => {
                let bed_type = match input.parse::<usize>() {
                    Ok(i) => options.get(i.checked_sub(1)?)?.bed_type,
                    Err(_) => options
                        .iter()
                        .find(|o| o.bed_type.to_string().eq_ignore_ascii_case(input))?
                        .bed_type,
                };
                Some(SessionEvent::SelectBed { bed_type })
            }
        },
        RenderDirective::AskVitals => Some(SessionEvent::AnswerVitals {
            answer: input.to_string(),
        }),
        RenderDirective::AskDetail { .. } => Some(SessionEvent::SubmitDetail {
            value: input.to_string(),
        }),
        RenderDirective::FinalCard { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctigo_core::inventory::{BedType, bed_options};

    #[test]
    fn test_parse_booking_type_choices() {
        let directive = RenderDirective::ChooseBookingType;
        assert!(matches!(
            parse_event(&directive, "1"),
            Some(SessionEvent::ChooseBookingType {
                booking_type: BookingType::Normal
            })
        ));
        assert!(matches!(
            parse_event(&directive, "Emergency"),
            Some(SessionEvent::ChooseBookingType {
                booking_type: BookingType::Emergency
            })
        ));
        assert!(parse_event(&directive, "3").is_none());
    }

    #[test]
    fn test_parse_symptom_skip_and_list() {
        let directive = RenderDirective::AskSymptoms {
            booking_type: BookingType::Normal,
        };
        assert!(matches!(
            parse_event(&directive, "next"),
            Some(SessionEvent::SkipSymptoms)
        ));
        let Some(SessionEvent::SubmitSymptoms { symptoms }) =
            parse_event(&directive, "Fever, Cough")
        else {
            panic!("expected a symptom submission");
        };
        assert_eq!(symptoms, vec!["Fever".to_string(), "Cough".to_string()]);
    }

    #[test]
    fn test_parse_bed_by_index_name_or_decline() {
        let directive = RenderDirective::AskBed {
            options: bed_options(),
            unavailable: None,
        };
        assert!(matches!(
            parse_event(&directive, "3"),
            Some(SessionEvent::SelectBed {
                bed_type: BedType::VipCabin
            })
        ));
        assert!(matches!(
            parse_event(&directive, "general bed"),
            Some(SessionEvent::SelectBed {
                bed_type: BedType::GeneralBed
            })
        ));
        assert!(matches!(
            parse_event(&directive, "no"),
            Some(SessionEvent::DeclineBed)
        ));
        assert!(parse_event(&directive, "9").is_none());
    }
}
