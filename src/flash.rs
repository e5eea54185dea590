//! One-shot alerts that survive a redirect.
//!
//! A handler stores an [Alert] in a private cookie before redirecting and the
//! next page to render takes it out of the cookie jar and shows it once.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

use crate::{Error, alert::Alert};

pub(crate) const FLASH_COOKIE: &str = "flash";

/// Store `alert` in the cookie jar to be shown by the next page load.
///
/// # Errors
/// Returns [Error::JSONSerializationError] if the alert cannot be serialized.
pub(crate) fn set_flash(jar: PrivateCookieJar, alert: &Alert) -> Result<PrivateCookieJar, Error> {
    let value = serde_json::to_string(alert)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    ))
}

/// Remove the flash alert from the cookie jar, returning it if there was one.
///
/// A cookie that cannot be decoded is dropped and logged.
pub(crate) fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Alert>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let alert = match serde_json::from_str(cookie.value()) {
        Ok(alert) => Some(alert),
        Err(error) => {
            tracing::warn!("discarding unreadable flash cookie: {error}");
            None
        }
    };

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), alert)
}
