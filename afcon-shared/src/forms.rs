//! Validation for the login and staff forms.
//!
//! Kept out of the components so the rules can be tested without a browser.

use thiserror::Error;
use url::Url;

use crate::models::{LoginRequest, NewFixture, NewTeam, NewTicket};

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("{0} is required")]
    Required(&'static str),
    /// Email address is invalid (missing @ symbol)
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Not an absolute http(s) URL
    #[error("{0} must be an http or https URL")]
    InvalidUrl(&'static str),
    /// Both sides of a fixture are the same team
    #[error("A team cannot play against itself")]
    SameTeam,
}

/// Validates that a field has non-blank content.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol with text on both sides
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    validate_required("Email", email)?;
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Validates an absolute `http`/`https` URL.
pub fn validate_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    validate_required(field, value)?;
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidUrl(field)),
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        validate_required("Password", &self.password)
    }
}

impl NewTeam {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("Team name", &self.name)?;
        validate_required("Country", &self.country)?;
        validate_url("Logo URL", &self.logo_url)
    }
}

impl NewFixture {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("Team A", &self.team_a)?;
        validate_required("Team B", &self.team_b)?;
        if self.team_a == self.team_b {
            return Err(ValidationError::SameTeam);
        }
        validate_required("Date", &self.date)?;
        validate_required("Venue", &self.venue)
    }
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("User", &self.user)?;
        validate_required("Match", &self.fixture)?;
        validate_required("Seat number", &self.seat_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("fan@example.com").is_ok());
        assert_eq!(validate_email(""), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("fan.example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("Logo URL", "https://img.example.com/ma.png").is_ok());
        assert_eq!(
            validate_url("Logo URL", "ftp://img.example.com/ma.png"),
            Err(ValidationError::InvalidUrl("Logo URL"))
        );
        assert_eq!(
            validate_url("Logo URL", "not a url"),
            Err(ValidationError::InvalidUrl("Logo URL"))
        );
    }

    #[test]
    fn test_login_request_validation() {
        let mut request = LoginRequest {
            email: "fan@example.com".into(),
            password: String::new(),
        };
        assert_eq!(request.validate(), Err(ValidationError::Required("Password")));
        request.password = "secret".into();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_new_team_validation() {
        let mut team = NewTeam {
            name: "Morocco".into(),
            country: " ".into(),
            logo_url: "https://img.example.com/ma.png".into(),
        };
        assert_eq!(team.validate(), Err(ValidationError::Required("Country")));
        team.country = "Morocco".into();
        assert!(team.validate().is_ok());
    }

    #[test]
    fn test_new_fixture_rejects_same_team() {
        let fixture = NewFixture {
            team_a: "t1".into(),
            team_b: "t1".into(),
            date: "2025-12-21T20:00".into(),
            venue: "Rabat".into(),
        };
        assert_eq!(fixture.validate(), Err(ValidationError::SameTeam));
    }

    #[test]
    fn test_new_fixture_requires_all_fields() {
        let fixture = NewFixture {
            team_a: "t1".into(),
            team_b: "t2".into(),
            date: String::new(),
            venue: "Rabat".into(),
        };
        assert_eq!(fixture.validate(), Err(ValidationError::Required("Date")));
    }

    #[test]
    fn test_new_ticket_validation() {
        let ticket = NewTicket {
            user: "u1".into(),
            fixture: "m1".into(),
            seat_number: String::new(),
        };
        assert_eq!(
            ticket.validate(),
            Err(ValidationError::Required("Seat number"))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Required("Venue").to_string(),
            "Venue is required"
        );
        assert_eq!(
            ValidationError::SameTeam.to_string(),
            "A team cannot play against itself"
        );
    }
}
