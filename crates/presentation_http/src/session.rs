//! Session cookie binding
//!
//! Each browser carries an opaque session ID in the `deal_session` cookie.
//! The access state itself stays server-side in the session store.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use domain::{SessionContext, SessionId};
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "deal_session";

/// Read the session ID from the request cookies, ignoring malformed values
pub fn session_id_from(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| SessionId::parse(cookie.value()).ok())
}

/// Build the session cookie for an ID
pub fn session_cookie(id: SessionId, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Load the caller's session, starting a new one when needed.
///
/// The returned jar carries a fresh cookie whenever the session ID changed.
pub async fn load_session(
    state: &AppState,
    jar: CookieJar,
) -> Result<(SessionContext, CookieJar), ApiError> {
    let requested = session_id_from(&jar);
    let session = state.sessions.load_or_create(requested).await?;

    let jar = if requested == Some(session.id) {
        jar
    } else {
        debug!(session = %session.id, "Issuing session cookie");
        jar.add(session_cookie(
            session.id,
            state.config.security.session_cookie_secure,
        ))
    };

    Ok((session, jar))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_attributes() {
        let id = SessionId::new();
        let cookie = session_cookie(id, true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn reads_session_id_from_jar() {
        let id = SessionId::new();
        let jar = CookieJar::new().add(session_cookie(id, false));
        assert_eq!(session_id_from(&jar), Some(id));
    }

    #[test]
    fn ignores_malformed_cookie() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-uuid"));
        assert_eq!(session_id_from(&jar), None);
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(session_id_from(&CookieJar::new()), None);
    }
}
