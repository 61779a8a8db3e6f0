//! The booking conversation state machine.
//!
//! The engine owns one `Session` and processes one event at a time,
//! synchronously to completion: validate against the current step,
//! consult the catalog or inventory where the step requires it, mutate
//! the session, and hand a `RenderDirective` back to the presentation
//! layer. Invalid events are rejected with the session untouched.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::event::SessionEvent;
use super::model::{BedSelection, BookingType, Session};
use super::step::{ConversationStep, DetailField};
use crate::appointment::{self, Appointment};
use crate::catalog::{Catalog, Doctor, Hospital};
use crate::error::{BookingError, Result};
use crate::inventory::{BedOption, BedType, InventoryManager, bed_option, bed_options};
use crate::vitals::VitalsProvider;

/// What the presentation layer should render next.
///
/// The engine returns one of these from every accepted event; the
/// presentation layer observes it instead of being driven by the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderDirective {
    ChooseBookingType,
    AskName,
    AskSymptoms {
        booking_type: BookingType,
    },
    ChoosePath,
    ListDoctors {
        doctors: Vec<Doctor>,
    },
    ListHospitals {
        hospitals: Vec<Hospital>,
    },
    AskBed {
        options: Vec<BedOption>,
        /// Set when the previous selection could not be reserved.
        unavailable: Option<BedType>,
    },
    AskVitals,
    AskDetail {
        field: DetailField,
    },
    FinalCard {
        appointment: Box<Appointment>,
    },
}

/// Drives one booking conversation from `Initial` to `FinalCard`.
pub struct ConversationEngine {
    session: Session,
    catalog: Arc<Catalog>,
    inventory: Arc<InventoryManager>,
    vitals: Arc<dyn VitalsProvider>,
}

impl ConversationEngine {
    pub fn new(
        catalog: Arc<Catalog>,
        inventory: Arc<InventoryManager>,
        vitals: Arc<dyn VitalsProvider>,
    ) -> Self {
        Self {
            session: Session::new(),
            catalog,
            inventory,
            vitals,
        }
    }

    /// Read access to the session owned by this engine.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The directive for the current step, for (re-)prompting without an
    /// event.
    ///
    /// # Errors
    ///
    /// `InvariantViolation` if the session claims the terminal step but
    /// carries no appointment; that state is unreachable through `handle`.
    pub fn directive(&self) -> Result<RenderDirective> {
        let directive = match self.session.step {
            ConversationStep::Initial => RenderDirective::ChooseBookingType,
            ConversationStep::AskName => RenderDirective::AskName,
            ConversationStep::AskSymptoms => RenderDirective::AskSymptoms {
                booking_type: self.session.booking_type.unwrap_or(BookingType::Normal),
            },
            ConversationStep::ChoosePath => RenderDirective::ChoosePath,
            ConversationStep::ListDoctors => RenderDirective::ListDoctors {
                doctors: self
                    .catalog
                    .filter_doctors_by_symptoms(&self.session.symptoms),
            },
            ConversationStep::ListHospitals => RenderDirective::ListHospitals {
                hospitals: self.catalog.list_hospitals().to_vec(),
            },
            ConversationStep::AskBed => RenderDirective::AskBed {
                options: bed_options(),
                unavailable: None,
            },
            ConversationStep::AskVitals => RenderDirective::AskVitals,
            ConversationStep::CollectDetails => RenderDirective::AskDetail {
                field: DetailField::ORDER
                    [self.session.detail_cursor.min(DetailField::ORDER.len() - 1)],
            },
            ConversationStep::FinalCard => {
                let appointment = self.session.final_appointment.clone().ok_or_else(|| {
                    BookingError::invariant("terminal step reached without an appointment")
                })?;
                RenderDirective::FinalCard {
                    appointment: Box::new(appointment),
                }
            }
        };
        Ok(directive)
    }

    /// Processes one user event.
    ///
    /// # Errors
    ///
    /// `Validation` for events that do not apply to the current step or
    /// carry malformed input; the session is left unchanged and the
    /// caller should re-prompt. Invariant and plumbing errors pass
    /// through untouched.
    pub async fn handle(&mut self, event: SessionEvent) -> Result<RenderDirective> {
        let step = self.session.step;
        debug!(session = %self.session.id, %step, event = event.kind(), "handling event");

        let directive = match (step, event) {
            (ConversationStep::Initial, SessionEvent::ChooseBookingType { booking_type }) => {
                self.on_booking_type(booking_type)
            }
            (ConversationStep::AskName, SessionEvent::SubmitName { name }) => self.on_name(name)?,
            (ConversationStep::AskSymptoms, SessionEvent::SubmitSymptoms { symptoms }) => {
                self.on_symptoms(symptoms)
            }
            (ConversationStep::AskSymptoms, SessionEvent::SkipSymptoms) => {
                self.on_symptoms(Vec::new())
            }
            (ConversationStep::ChoosePath, SessionEvent::PickDoctors) => {
                self.session.selected_hospital = None;
                self.session.step = ConversationStep::ListDoctors;
                self.directive()?
            }
            (ConversationStep::ChoosePath, SessionEvent::PickHospitals) => {
                self.session.selected_doctor = None;
                self.session.tentative_slot = None;
                self.session.step = ConversationStep::ListHospitals;
                self.directive()?
            }
            (ConversationStep::ListDoctors, SessionEvent::SelectDoctor { name }) => {
                self.on_select_doctor(&name)?
            }
            (ConversationStep::ListHospitals, SessionEvent::SelectHospital { name }) => {
                self.on_select_hospital(&name)?
            }
            (ConversationStep::AskBed, SessionEvent::SelectBed { bed_type }) => {
                self.on_select_bed(bed_type).await?
            }
            (ConversationStep::AskBed, SessionEvent::DeclineBed) => {
                self.session.push_patient("No bed needed.");
                self.session.step = ConversationStep::AskVitals;
                RenderDirective::AskVitals
            }
            (ConversationStep::AskVitals, SessionEvent::AnswerVitals { answer }) => {
                self.on_vitals_answer(&answer).await
            }
            (ConversationStep::CollectDetails, SessionEvent::SubmitDetail { value }) => {
                self.on_detail(value)?
            }
            // Duplicate terminal-entry events are idempotent: the built
            // appointment is returned as-is and nothing is re-reserved.
            (ConversationStep::FinalCard, SessionEvent::SubmitDetail { .. }) => {
                return self.directive();
            }
            (step, event) => {
                warn!(session = %self.session.id, %step, event = event.kind(), "event rejected");
                return Err(BookingError::validation(format!(
                    "event {} does not apply to step {}",
                    event.kind(),
                    step
                )));
            }
        };

        self.session.touch();
        Ok(directive)
    }

    fn on_booking_type(&mut self, booking_type: BookingType) -> RenderDirective {
        self.session.booking_type = Some(booking_type);
        self.session
            .push_patient(format!("I want {booking_type} booking"));
        self.session.step = ConversationStep::AskName;
        RenderDirective::AskName
    }

    fn on_name(&mut self, name: String) -> Result<RenderDirective> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(BookingError::validation("name must not be empty"));
        }
        // booking_type is always set before AskName is reachable
        let booking_type = self.session.booking_type.unwrap_or(BookingType::Normal);
        self.session.push_patient(name.clone());
        self.session
            .push_bot(format!("Hello {name}! So you opted for {booking_type} booking."));
        self.session.patient_name = name;
        self.session.step = ConversationStep::AskSymptoms;
        Ok(RenderDirective::AskSymptoms { booking_type })
    }

    fn on_symptoms(&mut self, symptoms: Vec<String>) -> RenderDirective {
        let mut deduped: Vec<String> = Vec::new();
        for symptom in symptoms {
            let symptom = symptom.trim().to_string();
            if !symptom.is_empty() && !deduped.contains(&symptom) {
                deduped.push(symptom);
            }
        }
        let summary = if deduped.is_empty() {
            "None".to_string()
        } else {
            deduped.join(", ")
        };
        self.session.push_patient(format!("Symptoms: {summary}"));
        self.session.symptoms = deduped;
        self.session.step = ConversationStep::ChoosePath;
        RenderDirective::ChoosePath
    }

    fn on_select_doctor(&mut self, name: &str) -> Result<RenderDirective> {
        let filtered = self
            .catalog
            .filter_doctors_by_symptoms(&self.session.symptoms);
        let doctor = filtered
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| {
                BookingError::validation(format!("doctor {name} is not in the offered list"))
            })?;
        let slot = doctor.available_slots.first().cloned().ok_or_else(|| {
            BookingError::validation(format!("doctor {name} has no available slots"))
        })?;

        info!(session = %self.session.id, doctor = %doctor.name, %slot, "doctor selected");
        self.session.push_patient(format!("Selected Dr. {}", doctor.name));
        self.session.tentative_slot = Some(slot);
        self.session.selected_hospital = None;
        self.session.selected_doctor = Some(doctor);
        self.session.step = ConversationStep::AskBed;
        self.directive()
    }

    fn on_select_hospital(&mut self, name: &str) -> Result<RenderDirective> {
        let hospital = self
            .catalog
            .find_hospital(name)
            .ok_or_else(|| {
                BookingError::validation(format!("hospital {name} is not in the directory"))
            })?
            .clone();

        info!(session = %self.session.id, hospital = %hospital.name, "hospital selected");
        self.session.push_patient(format!("Selected {}", hospital.name));
        self.session.selected_doctor = None;
        self.session.tentative_slot = None;
        self.session.selected_hospital = Some(hospital);
        self.session.step = ConversationStep::AskBed;
        self.directive()
    }

    /// Reserves a unit before anything is recorded on the session; on
    /// exhaustion the step does not advance and the directive carries
    /// the unavailable type back to the presentation layer.
    async fn on_select_bed(&mut self, bed_type: BedType) -> Result<RenderDirective> {
        let hospital = self
            .session
            .admitting_hospital()
            .ok_or_else(|| {
                BookingError::invariant("bed step reached without a doctor or hospital")
            })?
            .to_string();

        match self.inventory.reserve(&hospital, bed_type).await {
            Ok(serial) => {
                let option = bed_option(bed_type);
                self.session.bed_selection = Some(BedSelection {
                    bed_type,
                    price_per_night: option.price_per_night,
                    features: option.features,
                    serial,
                });
                self.session.push_patient(format!("Selected {bed_type}"));
                self.session.step = ConversationStep::AskVitals;
                Ok(RenderDirective::AskVitals)
            }
            Err(BookingError::InventoryExhausted { .. }) => {
                info!(session = %self.session.id, %hospital, %bed_type, "bed type unavailable, re-prompting");
                Ok(RenderDirective::AskBed {
                    options: bed_options(),
                    unavailable: Some(bed_type),
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Any answer other than yes means no; a failed or empty provider
    /// response degrades to "no vitals".
    async fn on_vitals_answer(&mut self, answer: &str) -> RenderDirective {
        let wants_vitals = matches!(answer.trim().to_lowercase().as_str(), "yes" | "y");
        self.session.push_patient(answer.trim());
        if wants_vitals {
            match self.vitals.get_snapshot().await {
                Ok(Some(snapshot)) => {
                    debug!(session = %self.session.id, "vitals attached");
                    self.session.vitals = Some(snapshot);
                }
                Ok(None) => {
                    info!(session = %self.session.id, "no recent vitals available");
                }
                Err(err) => {
                    warn!(session = %self.session.id, error = %err, "vitals provider unavailable");
                }
            }
        }
        self.session.detail_cursor = 0;
        self.session.step = ConversationStep::CollectDetails;
        RenderDirective::AskDetail {
            field: DetailField::ORDER[0],
        }
    }

    fn on_detail(&mut self, value: String) -> Result<RenderDirective> {
        let field = DetailField::ORDER[self.session.detail_cursor];
        self.session.details.set(field, value.clone());
        self.session.push_patient(value);
        self.session.detail_cursor += 1;

        if self.session.detail_cursor < DetailField::ORDER.len() {
            return Ok(RenderDirective::AskDetail {
                field: DetailField::ORDER[self.session.detail_cursor],
            });
        }

        // Terminal entry: build exactly once, then only ever replay.
        self.session.step = ConversationStep::FinalCard;
        let appointment = appointment::build(&self.session)?;
        info!(session = %self.session.id, patient = %appointment.patient_name, "appointment confirmed");
        self.session.final_appointment = Some(appointment.clone());
        self.session
            .push_bot("Appointment confirmed! Here's your appointment card.");
        Ok(RenderDirective::FinalCard {
            appointment: Box::new(appointment),
        })
    }
}
