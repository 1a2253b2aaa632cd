//! Cookie-backed session.
//!
//! The session lives in a signed `session` cookie so clients can read but not forge it.
//! The chosen language is additionally mirrored into a plain, long-lived `lang` cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

pub const SESSION_COOKIE: &str = "session";
pub const LANG_COOKIE: &str = "lang";
pub const LANG_COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Derive the 64-byte cookie signing key from the configured secret
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub lang: Option<String>,
}

impl SessionData {
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        jar.get(SESSION_COOKIE)
            .map(|cookie| Self::decode(cookie.value()))
            .unwrap_or_default()
    }

    /// `lang=pt&...`; unknown keys are ignored
    fn decode(raw: &str) -> Self {
        let mut data = Self::default();
        for (key, value) in raw.split('&').filter_map(|pair| pair.split_once('=')) {
            if key == "lang" && !value.is_empty() {
                data.lang = Some(value.to_string());
            }
        }
        data
    }

    fn encode(&self) -> String {
        match &self.lang {
            Some(lang) => format!("lang={lang}"),
            None => String::new(),
        }
    }

    pub fn save(&self, jar: SignedCookieJar) -> SignedCookieJar {
        let cookie = Cookie::build((SESSION_COOKIE, self.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        jar.add(cookie)
    }
}

pub fn lang_cookie_value(jar: &CookieJar) -> Option<String> {
    jar.get(LANG_COOKIE).map(|cookie| cookie.value().to_string())
}

pub fn set_lang_cookie(jar: CookieJar, lang: &str) -> CookieJar {
    let cookie = Cookie::build((LANG_COOKIE, lang.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(LANG_COOKIE_MAX_AGE_DAYS));
    jar.add(cookie)
}
