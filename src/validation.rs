use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::registration::{FieldError, Registration, RegistrationForm};

// local@domain.tld, with at least one dot in the domain part
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern is a valid regex")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 -]+$").expect("phone pattern is a valid regex"));

const MAX_EMAIL_LEN: usize = 254;

pub const INVALID_FORM_MESSAGE: &str = "Données invalides";

/// Checks a submitted form and returns the trimmed registration, or every
/// rule it breaks.
pub fn validate(form: RegistrationForm) -> Result<Registration, Vec<FieldError>> {
    let registration = Registration {
        last_name: form.nom.trim().to_string(),
        middle_name: form.postnom.trim().to_string(),
        first_name: form.prenom.trim().to_string(),
        birth_place: form.lieu_naissance.trim().to_string(),
        birth_date: form.date_naissance.trim().to_string(),
        province: form.province.trim().to_string(),
        formation_code: form.formation.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.telephone.trim().to_string(),
    };

    let mut errors = Vec::new();

    if registration.last_name.is_empty() {
        errors.push(FieldError::new("nom", "Le nom est requis"));
    }
    if registration.middle_name.is_empty() {
        errors.push(FieldError::new("postnom", "Le post-nom est requis"));
    }
    if registration.first_name.is_empty() {
        errors.push(FieldError::new("prenom", "Le prénom est requis"));
    }
    if !is_email(&registration.email) {
        errors.push(FieldError::new("email", "Email invalide"));
    }
    if !is_phone(&registration.phone) {
        errors.push(FieldError::new("telephone", "Numéro de téléphone invalide"));
    }
    if registration.formation_code.is_empty() {
        errors.push(FieldError::new("formation", "Veuillez choisir une formation"));
    }

    if errors.is_empty() {
        Ok(registration)
    } else {
        Err(errors)
    }
}

pub fn is_email(value: &str) -> bool {
    value.len() <= MAX_EMAIL_LEN && EMAIL_PATTERN.is_match(value)
}

/// Optional leading `+`, then digits, spaces and hyphens, with at least one digit.
pub fn is_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value) && value.bytes().any(|b| b.is_ascii_digit())
}
