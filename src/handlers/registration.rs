use tracing::{info, warn};

use crate::error::RegistrationError;
use crate::mail;
use crate::models::registration::RegistrationForm;
use crate::rate_limit::Decision;
use crate::state::AppState;
use crate::validation;

/// Runs one submission through the quota gate, validation, composition and
/// dispatch. Every failure ends the request; nothing is retried.
#[tracing::instrument(name = "registration", skip_all, fields(client = %identity))]
pub async fn register(
    state: &AppState,
    identity: &str,
    form: RegistrationForm,
) -> Result<(), RegistrationError> {
    if state.limiter.check(identity).await == Decision::Deny {
        warn!("request quota exceeded");
        return Err(RegistrationError::RateLimited);
    }

    let registration = validation::validate(form).map_err(|errors| {
        info!(invalid_fields = errors.len(), "registration rejected");
        RegistrationError::Invalid(errors)
    })?;

    let notifications = mail::compose(&registration, &state.contacts);
    state.dispatcher.dispatch(&notifications).await?;

    info!(formation = %registration.formation_code, "registration accepted");
    Ok(())
}
