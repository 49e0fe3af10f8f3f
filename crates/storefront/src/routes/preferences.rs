//! Language and cookie-notice preferences.

use axum::{
    Form,
    response::{IntoResponse, Redirect},
};
use farah_core::ConsentDecision;
use farah_core::Locale;
use serde::Deserialize;
use tracing::instrument;

use super::safe_return_path;
use crate::error::{AppError, Result};
use crate::middleware::Visitor;

/// Language form data. Without `lang` the language is toggled.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: Option<String>,
    pub return_to: Option<String>,
}

/// Cookie notice form data.
#[derive(Debug, Deserialize)]
pub struct CookieForm {
    pub decision: String,
    pub return_to: Option<String>,
}

/// Set or toggle the display language.
#[instrument(skip(visitor))]
pub async fn language(visitor: Visitor, Form(form): Form<LanguageForm>) -> Result<impl IntoResponse> {
    let requested = form
        .lang
        .as_deref()
        .filter(|lang| !lang.trim().is_empty())
        .map(str::parse::<Locale>)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut session = visitor.lock().await;
    let locale = match requested {
        Some(locale) => {
            session.preferences.set_locale(locale);
            locale
        }
        None => session.preferences.toggle_locale(),
    };
    tracing::debug!(locale = %locale, "Language changed");

    Ok(Redirect::to(&safe_return_path(form.return_to.as_deref(), "/")))
}

/// Record the visitor's answer to the cookie notice.
#[instrument(skip(visitor))]
pub async fn cookies(visitor: Visitor, Form(form): Form<CookieForm>) -> Result<impl IntoResponse> {
    let decision = ConsentDecision::parse(&form.decision)
        .ok_or_else(|| AppError::BadRequest(format!("unknown decision: {}", form.decision)))?;

    visitor.lock().await.preferences.set_consent(decision);

    Ok(Redirect::to(&safe_return_path(form.return_to.as_deref(), "/")))
}
