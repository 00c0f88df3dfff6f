use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::model::{RoadmapId, UserId};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum PercentageError {
    #[error("progress must be between 0 and 100, got {0}")]
    OutOfRange(f64),

    #[error("progress must be a finite number")]
    NotFinite,
}

/// Completion measure for one (user, roadmap) pair, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(try_from = "f64")]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Self = Self(0.0);
    pub const COMPLETE: Self = Self(100.0);

    /// Validates a raw percentage.
    ///
    /// # Errors
    ///
    /// Returns `PercentageError::NotFinite` for NaN/infinite input and
    /// `PercentageError::OutOfRange` outside `[0, 100]`.
    pub fn new(value: f64) -> Result<Self, PercentageError> {
        if !value.is_finite() {
            return Err(PercentageError::NotFinite);
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(PercentageError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn from_whole(value: u8) -> Self {
        Self(f64::from(value.min(100)))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }

    #[must_use]
    pub fn is_started(self) -> bool {
        self.0 > 0.0
    }
}

impl TryFrom<f64> for Percentage {
    type Error = PercentageError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Whole values go out as JSON integers (`57`, not `57.0`).
impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let whole = self.0 as u64;
            serializer.serialize_u64(whole)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Stored progress for one user on one roadmap.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub user_id: UserId,
    pub roadmap_id: RoadmapId,
    pub percentage: Percentage,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Percentage::new(0.0).unwrap(), Percentage::ZERO);
        assert_eq!(Percentage::new(100.0).unwrap(), Percentage::COMPLETE);
        assert_eq!(Percentage::new(28.5).unwrap().value(), 28.5);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Percentage::new(100.5).unwrap_err(),
            PercentageError::OutOfRange(100.5)
        );
        assert_eq!(
            Percentage::new(-1.0).unwrap_err(),
            PercentageError::OutOfRange(-1.0)
        );
        assert_eq!(
            Percentage::new(f64::NAN).unwrap_err(),
            PercentageError::NotFinite
        );
    }

    #[test]
    fn serializes_whole_values_as_integers() {
        let whole = serde_json::to_string(&Percentage::from_whole(57)).unwrap();
        let fraction = serde_json::to_string(&Percentage::new(14.25).unwrap()).unwrap();
        assert_eq!(whole, "57");
        assert_eq!(fraction, "14.25");
    }

    #[test]
    fn deserialize_validates_range() {
        assert!(serde_json::from_str::<Percentage>("101").is_err());
        let p: Percentage = serde_json::from_str("43").unwrap();
        assert_eq!(p.value(), 43.0);
    }
}
