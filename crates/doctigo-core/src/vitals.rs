//! Vitals snapshot contract.
//!
//! The booking flow only consumes a get-snapshot contract; where the
//! readings come from (device sync, CSV import, manual entry) is outside
//! the core. A failed or empty response always means "no vitals", never
//! a blocked flow.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::Result;

/// One point-in-time vitals reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsSnapshot {
    /// When the reading was taken (ISO 8601 format).
    pub timestamp: String,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub body_temperature: f64,
}

/// Supplies the most recent vitals reading on request.
#[async_trait]
pub trait VitalsProvider: Send + Sync {
    /// Returns the latest snapshot, or `None` when nothing has been
    /// recorded yet.
    async fn get_snapshot(&self) -> Result<Option<VitalsSnapshot>>;
}

/// In-memory provider holding whatever was last published.
#[derive(Default)]
pub struct LatestVitals {
    latest: RwLock<Option<VitalsSnapshot>>,
}

impl LatestVitals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a reading, replacing any previous one.
    pub async fn publish(&self, snapshot: VitalsSnapshot) {
        *self.latest.write().await = Some(snapshot);
    }
}

#[async_trait]
impl VitalsProvider for LatestVitals {
    async fn get_snapshot(&self) -> Result<Option<VitalsSnapshot>> {
        Ok(self.latest.read().await.clone())
    }
}

/// Generates a plausible demo reading: jittered around 120/80 mmHg and
/// 36.7 C, clamped to the ranges a monitoring hub would accept.
pub fn sample_snapshot() -> VitalsSnapshot {
    let mut rng = rand::thread_rng();
    let systolic: f64 = (120.0_f64 + rng.gen_range(-5.0..5.0)).clamp(100.0, 150.0);
    let diastolic: f64 = (80.0_f64 + rng.gen_range(-3.0..3.0)).clamp(60.0, 100.0);
    let temperature: f64 = (36.7_f64 + rng.gen_range(-0.2..0.2)).clamp(36.0, 38.0);
    VitalsSnapshot {
        timestamp: chrono::Utc::now().to_rfc3339(),
        systolic_bp: (systolic * 10.0).round() / 10.0,
        diastolic_bp: (diastolic * 10.0).round() / 10.0,
        body_temperature: (temperature * 10.0).round() / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_provider_returns_none() {
        let provider = LatestVitals::new();
        assert_eq!(provider.get_snapshot().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_publish_then_fetch() {
        let provider = LatestVitals::new();
        let snapshot = sample_snapshot();
        provider.publish(snapshot.clone()).await;
        assert_eq!(provider.get_snapshot().await.unwrap(), Some(snapshot));
    }

    #[test]
    fn test_sample_snapshot_stays_in_range() {
        for _ in 0..100 {
            let s = sample_snapshot();
            assert!((100.0..=150.0).contains(&s.systolic_bp));
            assert!((60.0..=100.0).contains(&s.diastolic_bp));
            assert!((36.0..=38.0).contains(&s.body_temperature));
        }
    }
}
