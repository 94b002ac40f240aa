use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use voting_errors::AppError;

use super::{NewCandidate, Role};

const MAX_FIELD_LENGTH: usize = 200;
const MAX_AGE: u32 = 150;
const NATIONAL_ID_PATTERN: &str = r"^\d{12}$";

static NATIONAL_ID: LazyLock<Result<Regex, regex_lite::Error>> =
    LazyLock::new(|| Regex::new(NATIONAL_ID_PATTERN));

/// Registration form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupInput {
    pub name: String,
    pub aadhar_card_number: String,
    pub password: String,
    pub age: String,
    pub address: String,
    pub role: String,
}

/// Validated registration, serialized with the backend's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub aadhar_card_number: String,
    pub password: String,
    pub age: u32,
    pub address: String,
    pub role: Role,
}

impl SignupInput {
    pub fn validate(&self) -> Result<SignupForm, AppError> {
        let name = required("Full name", &self.name)?;
        let address = required("Address", &self.address)?;
        let age = parse_age(&self.age)?;

        if self.password.trim().is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }

        let aadhar_card_number: String = self
            .aadhar_card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let pattern = NATIONAL_ID
            .as_ref()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        if !pattern.is_match(&aadhar_card_number) {
            return Err(AppError::Validation(
                "Aadhar number must be 12 digits".to_string(),
            ));
        }

        Ok(SignupForm {
            name,
            aadhar_card_number,
            password: self.password.clone(),
            age,
            address,
            role: Role::parse_lossy(&self.role),
        })
    }
}

/// Add-candidate form as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateInput {
    pub name: String,
    pub party: String,
    pub age: String,
}

impl CandidateInput {
    pub fn validate(&self) -> Result<NewCandidate, AppError> {
        Ok(NewCandidate {
            name: required("Candidate name", &self.name)?,
            party: required("Party", &self.party)?,
            age: parse_age(&self.age)?,
        })
    }
}

fn required(label: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }

    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(AppError::Validation(format!("{} is too long", label)));
    }

    Ok(value.to_string())
}

fn parse_age(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(age) if age > 0 && age <= MAX_AGE => Ok(age),
        _ => Err(AppError::Validation("Age must be a positive whole number".to_string())),
    }
}
