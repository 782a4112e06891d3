// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process session store with HMAC-signed cookies.
//!
//! Sessions live in a concurrent map keyed by a random UUID; the browser
//! only ever sees `<id>.<hex hmac-sha256(id)>` so a forged or tampered
//! cookie never reaches the map. Expiry is enforced lazily on access; there
//! is no background sweeper.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

/// Server-side session state.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Concurrent store for admin sessions.
///
/// Cloning is cheap; all clones share the same map and signing key.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionRecord>>,
    secret: Arc<Vec<u8>>,
    ttl_secs: u64,
}

impl SessionStore {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            secret: Arc::new(secret.to_vec()),
            ttl_secs,
        }
    }

    /// Create a fresh admin session and return the signed cookie value.
    pub fn create_admin(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let record = SessionRecord {
            is_admin: true,
            created_at: now,
            expires_at: now + Duration::seconds(self.ttl_secs as i64),
        };
        self.sessions.insert(id.clone(), record);
        format!("{id}.{}", self.sign(&id))
    }

    /// True when the cookie value names a live admin session.
    ///
    /// Tampered, unknown, and expired cookies all resolve to `false`;
    /// expired entries are dropped on the way out.
    pub fn is_admin(&self, cookie_value: &str) -> bool {
        let Some((id, sig)) = cookie_value.split_once('.') else {
            return false;
        };
        if !self.verify(id, sig) {
            return false;
        }

        let expired = match self.sessions.get(id) {
            Some(record) if record.expires_at > Utc::now() => return record.is_admin,
            Some(_) => true,
            None => false,
        };
        if expired {
            self.sessions.remove(id);
        }
        false
    }

    /// Destroy the session named by the cookie value. Unknown or invalid
    /// cookies are a no-op.
    pub fn destroy(&self, cookie_value: &str) {
        if let Some((id, sig)) = cookie_value.split_once('.') {
            if self.verify(id, sig) {
                self.sessions.remove(id);
            }
        }
    }

    /// Number of live entries (expired ones may still be counted until
    /// their next access).
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn sign(&self, id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn verify(&self, id: &str, sig_hex: &str) -> bool {
        let Ok(sig) = hex::decode(sig_hex) else {
            return false;
        };
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(id.as_bytes());
        mac.verify_slice(&sig).is_ok()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.sessions.len())
            .field("secret", &"[redacted]")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
