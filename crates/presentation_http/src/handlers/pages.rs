//! Page handlers for the login form and the deal analyzer

use application::{AccessDecision, ApplicationError, LoginAttempt, PASSWORD_INCORRECT};
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    session::{load_session, session_cookie},
    state::AppState,
    views::{AnalyzerPage, DealForm},
};

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Landing page: the password form while locked, the analyzer once unlocked
#[instrument(skip(state, jar))]
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Result<Response, ApiError> {
    let (mut session, jar) = load_session(&state, jar).await?;

    let decision = state
        .access_gate
        .check_access(LoginAttempt::NotSubmitted, &mut session)?;

    let html = if decision.is_granted() {
        state.views.analyzer(&AnalyzerPage::default())?
    } else {
        state.views.login(None)?
    };

    Ok((jar, Html(html)).into_response())
}

/// Submit the access password
#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let (mut session, jar) = load_session(&state, jar).await?;

    let decision = match state
        .access_gate
        .check_access(LoginAttempt::Submitted(&form.password), &mut session)
    {
        Ok(decision) => decision,
        Err(ApplicationError::Configuration(msg)) => {
            let html = state.views.error(&format!("Configuration error: {msg}"))?;
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, jar, Html(html)).into_response());
        },
        Err(e) => return Err(e.into()),
    };

    match decision {
        AccessDecision::Granted => {
            // Unlocked state never stays on an ID issued before login
            let session = state.sessions.rotate(&session).await?;
            info!(session = %session.id, "Session unlocked");
            let jar = jar.add(session_cookie(
                session.id,
                state.config.security.session_cookie_secure,
            ));
            Ok((jar, Redirect::to("/")).into_response())
        },
        AccessDecision::AlreadyAuthenticated => Ok((jar, Redirect::to("/")).into_response()),
        AccessDecision::Denied => {
            let html = state.views.login(Some(PASSWORD_INCORRECT))?;
            Ok((StatusCode::UNAUTHORIZED, jar, Html(html)).into_response())
        },
        AccessDecision::AwaitingSubmission => {
            let html = state.views.login(None)?;
            Ok((jar, Html(html)).into_response())
        },
    }
}

/// Submit a deal for analysis
#[instrument(skip(state, jar, form))]
pub async fn analyze(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<DealForm>,
) -> Result<Response, ApiError> {
    let (session, jar) = load_session(&state, jar).await?;

    if !session.is_authenticated() {
        warn!(session = %session.id, "Analyze submitted by a locked session");
        return Ok((jar, Redirect::to("/")).into_response());
    }

    let input = match form.to_input() {
        Ok(input) => input,
        Err(e) => {
            let html = state
                .views
                .analyzer(&AnalyzerPage::with_form(form).error(e.to_string()))?;
            return Ok((StatusCode::BAD_REQUEST, jar, Html(html)).into_response());
        },
    };

    match state.analysis_service.analyze(&session, &input).await {
        Ok(result) => {
            info!(result_len = result.as_str().len(), "Deal analysis rendered");
            let html = state
                .views
                .analyzer(&AnalyzerPage::with_form(form).result(result.as_str()))?;
            Ok((jar, Html(html)).into_response())
        },
        Err(ApplicationError::Dispatch(e)) => {
            let html = state
                .views
                .analyzer(&AnalyzerPage::with_form(form).error(e.to_string()))?;
            Ok((StatusCode::BAD_GATEWAY, jar, Html(html)).into_response())
        },
        Err(ApplicationError::NotAuthorized(_)) => Ok((jar, Redirect::to("/")).into_response()),
        Err(e) => Err(e.into()),
    }
}
