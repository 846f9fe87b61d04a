//! Anonymous cart identity.
//!
//! Gives every unauthenticated browser a stable, unguessable identity so its
//! cart persists across requests without an account. The identity is a random
//! token carried in the `cart_anon_key` cookie; minting one is the only side
//! effect here.

use rand::{Rng, distributions::Alphanumeric};
use salvo::{
    Depot, Request, Response,
    http::cookie::{Cookie, SameSite, time::Duration},
};

use sokonova_app::domain::carts::{AnonKey, CartKey};

use crate::extensions::DepotExt as _;

/// Cookie carrying the guest cart token.
pub(crate) const ANON_COOKIE: &str = "cart_anon_key";

/// Cookie carrying the authenticated session id.
pub(crate) const SESSION_COOKIE: &str = "sn_sid";

const ANON_KEY_LEN: usize = 32;
const COOKIE_MAX_AGE_DAYS: i64 = 30;

/// Request-time cookie settings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CookieSettings {
    /// Mark identity cookies `Secure`.
    pub(crate) secure: bool,
}

/// Read the caller's anonymous key, minting and setting a fresh one when the
/// cookie is absent. Total; never fails.
pub(crate) fn resolve_anonymous_key(
    req: &Request,
    res: &mut Response,
    settings: CookieSettings,
) -> AnonKey {
    if let Some(cookie) = req.cookie(ANON_COOKIE) {
        let token = cookie.value();

        if !token.is_empty() {
            return AnonKey::new(token);
        }
    }

    let key = mint_anon_key();

    res.add_cookie(
        Cookie::build((ANON_COOKIE, key.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(settings.secure)
            .max_age(Duration::days(COOKIE_MAX_AGE_DAYS))
            .build(),
    );

    key
}

/// The single place deciding which cart a request operates on: the user cart
/// when the session middleware resolved a user, the guest cart otherwise.
pub(crate) fn resolve_cart_key(
    req: &Request,
    depot: &Depot,
    res: &mut Response,
    settings: CookieSettings,
) -> CartKey {
    if let Some(user) = depot.user_id() {
        return CartKey::User(user.clone());
    }

    CartKey::Anonymous(resolve_anonymous_key(req, res, settings))
}

fn mint_anon_key() -> AnonKey {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ANON_KEY_LEN)
        .map(char::from)
        .collect();

    AnonKey::new(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_keys_are_cookie_safe_tokens() {
        let key = mint_anon_key();

        assert_eq!(key.as_str().len(), ANON_KEY_LEN);
        assert!(
            key.as_str().chars().all(|c| c.is_ascii_alphanumeric()),
            "token must be alphanumeric, got {key}"
        );
    }

    #[test]
    fn minted_keys_are_unique_per_call() {
        assert_ne!(mint_anon_key(), mint_anon_key());
    }
}
