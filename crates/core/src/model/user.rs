use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use crate::model::UserId;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignupError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email is invalid")]
    InvalidEmail,

    #[error("unknown dream job: {0}")]
    UnknownDreamJob(String),

    #[error("daily time must be a whole number of hours between 1 and 24, got {0:?}")]
    InvalidDailyTime(String),
}

//
// ─── EMAIL ─────────────────────────────────────────────────────────────────────
//

/// Email address as typed by the user.
///
/// Uniqueness and lookup go through [`EmailAddress::key`], which is
/// case-insensitive; the casing as typed is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates the address shape (`something@host.tld`).
    ///
    /// # Errors
    ///
    /// Returns `SignupError::MissingField` when blank and
    /// `SignupError::InvalidEmail` when malformed.
    pub fn parse(raw: &str) -> Result<Self, SignupError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SignupError::MissingField("email"));
        }
        if !EMAIL_SHAPE.is_match(trimmed) {
            return Err(SignupError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Normalized lookup key for any caller-supplied address.
    #[must_use]
    pub fn lookup_key(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    #[must_use]
    pub fn key(&self) -> String {
        Self::lookup_key(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ─── DREAM JOB ─────────────────────────────────────────────────────────────────
//

/// Target role picked at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DreamJob {
    #[serde(rename = "frontend")]
    Frontend,
    #[serde(rename = "backend")]
    Backend,
    #[serde(rename = "fullstack")]
    Fullstack,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "ui-ux", alias = "ui")]
    UiUx,
    #[serde(rename = "pm")]
    ProductManager,
    #[serde(rename = "swe")]
    SoftwareEngineer,
    #[serde(rename = "sde")]
    SoftwareDevelopmentEngineer,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl DreamJob {
    pub const ALL: [DreamJob; 9] = [
        DreamJob::Frontend,
        DreamJob::Backend,
        DreamJob::Fullstack,
        DreamJob::Data,
        DreamJob::UiUx,
        DreamJob::ProductManager,
        DreamJob::SoftwareEngineer,
        DreamJob::SoftwareDevelopmentEngineer,
        DreamJob::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DreamJob::Frontend => "frontend",
            DreamJob::Backend => "backend",
            DreamJob::Fullstack => "fullstack",
            DreamJob::Data => "data",
            DreamJob::UiUx => "ui-ux",
            DreamJob::ProductManager => "pm",
            DreamJob::SoftwareEngineer => "swe",
            DreamJob::SoftwareDevelopmentEngineer => "sde",
            DreamJob::Other => "other",
        }
    }

    /// Catalog roadmap suggested for this role when the user has no
    /// unfinished progress yet.
    #[must_use]
    pub fn suggested_roadmap(self) -> &'static str {
        match self {
            DreamJob::Backend => "backend-dev",
            DreamJob::Fullstack => "fullstack-dev",
            DreamJob::Data => "data-scientist",
            _ => "frontend-dev",
        }
    }
}

impl FromStr for DreamJob {
    type Err = SignupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle == "ui" {
            return Ok(DreamJob::UiUx);
        }
        DreamJob::ALL
            .into_iter()
            .find(|job| job.as_str() == needle)
            .ok_or_else(|| SignupError::UnknownDreamJob(s.to_owned()))
    }
}

impl fmt::Display for DreamJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── DAILY TIME ────────────────────────────────────────────────────────────────
//

/// Daily time commitment in whole hours.
///
/// Travels as a string on the wire (`"2"`) but accepts bare numbers too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DailyTime(u8);

impl DailyTime {
    pub const MAX_HOURS: u8 = 24;

    /// # Errors
    ///
    /// Returns `SignupError::InvalidDailyTime` outside `1..=24`.
    pub fn new(hours: u8) -> Result<Self, SignupError> {
        if hours == 0 || hours > Self::MAX_HOURS {
            return Err(SignupError::InvalidDailyTime(hours.to_string()));
        }
        Ok(Self(hours))
    }

    /// Parses `"2"`, `" 3 "` or `"5+"` (the signup form's top bucket).
    ///
    /// # Errors
    ///
    /// Returns `SignupError::InvalidDailyTime` when the text is not a small
    /// positive integer.
    pub fn parse(raw: &str) -> Result<Self, SignupError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_suffix('+').unwrap_or(trimmed);
        let hours: u8 = digits
            .parse()
            .map_err(|_| SignupError::InvalidDailyTime(raw.to_owned()))?;
        Self::new(hours).map_err(|_| SignupError::InvalidDailyTime(raw.to_owned()))
    }

    #[must_use]
    pub fn hours(self) -> u8 {
        self.0
    }
}

impl Default for DailyTime {
    fn default() -> Self {
        Self(1)
    }
}

impl Serialize for DailyTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DailyTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => DailyTime::parse(&text),
            Raw::Number(n) => u8::try_from(n)
                .map_err(|_| SignupError::InvalidDailyTime(n.to_string()))
                .and_then(DailyTime::new),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

//
// ─── SIGNUP ────────────────────────────────────────────────────────────────────
//

/// Unvalidated signup form. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub dream_job: String,
    pub daily_time: String,
}

/// Signup fields that passed validation; not yet persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub full_name: String,
    pub email: EmailAddress,
    pub password: String,
    pub dream_job: DreamJob,
    pub daily_time: DailyTime,
}

// Keeps the password out of logs.
impl fmt::Debug for ValidSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidSignup")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("dream_job", &self.dream_job)
            .field("daily_time", &self.daily_time)
            .finish_non_exhaustive()
    }
}

impl SignupDraft {
    /// Validates required fields first, then field formats.
    ///
    /// A blank dream job defaults to `other` and a blank daily time to one
    /// hour; a value that is present must be valid.
    ///
    /// # Errors
    ///
    /// Returns the first `SignupError` encountered.
    pub fn validate(self) -> Result<ValidSignup, SignupError> {
        if self.full_name.trim().is_empty() {
            return Err(SignupError::MissingField("fullName"));
        }
        if self.email.trim().is_empty() {
            return Err(SignupError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(SignupError::MissingField("password"));
        }

        let email = EmailAddress::parse(&self.email)?;
        let dream_job = if self.dream_job.trim().is_empty() {
            DreamJob::default()
        } else {
            self.dream_job.parse()?
        };
        let daily_time = if self.daily_time.trim().is_empty() {
            DailyTime::default()
        } else {
            DailyTime::parse(&self.daily_time)?
        };

        Ok(ValidSignup {
            full_name: self.full_name.trim().to_owned(),
            email,
            password: self.password,
            dream_job,
            daily_time,
        })
    }
}

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// The caller-facing projection of a user. Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub dream_job: DreamJob,
    pub daily_time: DailyTime,
    pub created_at: DateTime<Utc>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn draft() -> SignupDraft {
        SignupDraft {
            full_name: "Ada".into(),
            email: "ada@x.com".into(),
            password: "secret1".into(),
            dream_job: "frontend".into(),
            daily_time: "2".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let valid = draft().validate().unwrap();
        assert_eq!(valid.full_name, "Ada");
        assert_eq!(valid.email.as_str(), "ada@x.com");
        assert_eq!(valid.dream_job, DreamJob::Frontend);
        assert_eq!(valid.daily_time.hours(), 2);
    }

    #[test]
    fn required_fields_checked_in_order() {
        let mut d = draft();
        d.full_name = " ".into();
        d.email = String::new();
        assert_eq!(
            d.validate().unwrap_err(),
            SignupError::MissingField("fullName")
        );

        let mut d = draft();
        d.password = String::new();
        assert_eq!(
            d.validate().unwrap_err(),
            SignupError::MissingField("password")
        );
    }

    #[test]
    fn malformed_email_rejected() {
        let mut d = draft();
        d.email = "ada-at-x".into();
        assert_eq!(d.validate().unwrap_err(), SignupError::InvalidEmail);
    }

    #[test]
    fn email_key_is_case_insensitive_but_display_preserved() {
        let email = EmailAddress::parse(" Ada@X.com ").unwrap();
        assert_eq!(email.as_str(), "Ada@X.com");
        assert_eq!(email.key(), "ada@x.com");
        assert_eq!(EmailAddress::lookup_key("ADA@x.COM"), email.key());
    }

    #[test]
    fn optional_fields_default_when_blank() {
        let mut d = draft();
        d.dream_job = String::new();
        d.daily_time = String::new();
        let valid = d.validate().unwrap();
        assert_eq!(valid.dream_job, DreamJob::Other);
        assert_eq!(valid.daily_time.hours(), 1);
    }

    #[test]
    fn unknown_dream_job_rejected() {
        let mut d = draft();
        d.dream_job = "astronaut".into();
        assert_eq!(
            d.validate().unwrap_err(),
            SignupError::UnknownDreamJob("astronaut".into())
        );
    }

    #[test]
    fn dream_job_parse_accepts_ui_alias() {
        assert_eq!("ui".parse::<DreamJob>().unwrap(), DreamJob::UiUx);
        assert_eq!("UI-UX".parse::<DreamJob>().unwrap(), DreamJob::UiUx);
        assert_eq!(DreamJob::Data.suggested_roadmap(), "data-scientist");
        assert_eq!(DreamJob::Other.suggested_roadmap(), "frontend-dev");
    }

    #[test]
    fn daily_time_parsing() {
        assert_eq!(DailyTime::parse("5+").unwrap().hours(), 5);
        assert!(DailyTime::parse("0").is_err());
        assert!(DailyTime::parse("25").is_err());
        assert!(DailyTime::parse("two").is_err());
    }

    #[test]
    fn daily_time_accepts_string_or_number() {
        let from_text: DailyTime = serde_json::from_str("\"3\"").unwrap();
        let from_number: DailyTime = serde_json::from_str("3").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"3\"");
    }

    #[test]
    fn valid_signup_debug_hides_password() {
        let valid = draft().validate().unwrap();
        assert!(!format!("{valid:?}").contains("secret1"));
    }

    #[test]
    fn profile_serializes_camel_case_without_secret() {
        let profile = Profile {
            id: UserId::parse("u1").unwrap(),
            full_name: "Ada".into(),
            email: "ada@x.com".into(),
            dream_job: DreamJob::Frontend,
            daily_time: DailyTime::new(2).unwrap(),
            created_at: fixed_now(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["fullName"], "Ada");
        assert_eq!(json["dreamJob"], "frontend");
        assert_eq!(json["dailyTime"], "2");
        assert!(json.get("password").is_none());

        let back: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
