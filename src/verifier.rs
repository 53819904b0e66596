use crate::credentials::Credentials;
use crate::digest::{constant_time_eq, digest};
use crate::error::*;
use crate::header::Header;
use crate::mac::request_mac;
use crate::payload::canonical_payload;
use crate::request::Request;
use crate::store::{CredentialStore, NonceStore};
use log::{debug, trace};
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The allowed difference between a request's `ts` and the server clock, unless configured
/// otherwise.
pub const DEFAULT_MAX_SKEW: Duration = Duration::from_secs(60);

/// The result of verifying a request: authenticated with the stored credentials, or rejected
/// for exactly one reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Authenticated(Credentials),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Outcome::Authenticated(_))
    }

    /// The matched credentials, if the request was authenticated.
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Outcome::Authenticated(c) => Some(c),
            Outcome::Rejected(_) => None,
        }
    }

    /// The reason the request was rejected, if it was.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Authenticated(_) => None,
            Outcome::Rejected(r) => Some(*r),
        }
    }

    pub fn into_result(self) -> std::result::Result<Credentials, Rejection> {
        match self {
            Outcome::Authenticated(c) => Ok(c),
            Outcome::Rejected(r) => Err(r),
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(r: Rejection) -> Self {
        Outcome::Rejected(r)
    }
}

/// Verifies Hawk `Authorization` headers against a credential store and a nonce store.
///
/// A Verifier holds no per-request state, so one instance can serve any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct Verifier<C, N> {
    credentials: C,
    nonces: N,
    max_skew: Duration,
}

impl<C, N> Verifier<C, N>
where
    C: CredentialStore,
    N: NonceStore,
{
    pub fn builder(credentials: C, nonces: N) -> VerifierBuilder<C, N> {
        VerifierBuilder::new(credentials, nonces)
    }

    pub fn max_skew(&self) -> Duration {
        self.max_skew
    }

    /// Verify `header` (the full `Authorization` value, including `Hawk `) for `request`, using
    /// the system clock.
    pub async fn authenticate(&self, header: &str, request: &Request<'_>) -> Result<Outcome> {
        self.authenticate_at(SystemTime::now(), header, request).await
    }

    /// Verify `header` for `request` as if the current time were `now`.
    pub async fn authenticate_at(
        &self,
        now: SystemTime,
        header: &str,
        request: &Request<'_>,
    ) -> Result<Outcome> {
        verify(
            &self.credentials,
            &self.nonces,
            self.max_skew,
            now,
            header,
            request,
        )
        .await
    }
}

#[derive(Debug, Clone)]
pub struct VerifierBuilder<C, N>(Verifier<C, N>);

impl<C, N> VerifierBuilder<C, N>
where
    C: CredentialStore,
    N: NonceStore,
{
    pub fn new(credentials: C, nonces: N) -> Self {
        VerifierBuilder(Verifier {
            credentials,
            nonces,
            max_skew: DEFAULT_MAX_SKEW,
        })
    }

    /// Set the largest accepted difference, in whole seconds, between a request's `ts` and the
    /// server clock.  The bound is inclusive.
    pub fn max_skew(mut self, max_skew: Duration) -> Self {
        self.0.max_skew = max_skew;
        self
    }

    pub fn build(self) -> Verifier<C, N> {
        self.0
    }
}

/// Verify a single request with the given collaborators, using the system clock.
///
/// This is equivalent to building a [`Verifier`] and calling [`Verifier::authenticate`].
pub async fn authenticate<C, N>(
    credentials: &C,
    nonces: &N,
    max_skew: Duration,
    header: &str,
    request: &Request<'_>,
) -> Result<Outcome>
where
    C: CredentialStore + ?Sized,
    N: NonceStore + ?Sized,
{
    verify(
        credentials,
        nonces,
        max_skew,
        SystemTime::now(),
        header,
        request,
    )
    .await
}

fn within_skew(now: SystemTime, ts: &Header, max_skew: Duration) -> bool {
    let now = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    match ts.timestamp() {
        Some(ts) => {
            let skew = if now > ts { now - ts } else { ts - now };
            skew <= max_skew.as_secs()
        }
        // too large for u64, so certainly in the far future
        None => false,
    }
}

async fn verify<C, N>(
    credentials: &C,
    nonces: &N,
    max_skew: Duration,
    now: SystemTime,
    header: &str,
    request: &Request<'_>,
) -> Result<Outcome>
where
    C: CredentialStore + ?Sized,
    N: NonceStore + ?Sized,
{
    let header = match Header::from_str(header) {
        Ok(header) => header,
        Err(rejection) => {
            debug!("rejecting request: {}", rejection);
            return Ok(rejection.into());
        }
    };

    let creds = match credentials.lookup_credentials(&header.id).await {
        Ok(Some(creds)) => {
            trace!("found credentials for id {:?}", header.id);
            creds
        }
        Ok(None) => {
            debug!("rejecting request: unknown id {:?}", header.id);
            return Ok(Rejection::UnidentifiedId.into());
        }
        Err(e) => {
            debug!("credential lookup for id {:?} failed: {}", header.id, e);
            return Err(Error::CredentialLookup(e));
        }
    };

    let payload_hash = digest(&canonical_payload(
        request.content_type(),
        request.content(),
    ))?;
    let correct_mac = request_mac(
        &creds.key,
        &header.ts,
        &header.nonce,
        request.method(),
        request.path(),
        request.host(),
        request.port(),
        &payload_hash,
    )?;

    // the hash is checked before the timestamp, so a stale request with a bad payload is
    // reported as `Invalid hash`
    let rejection = if !constant_time_eq(&payload_hash, &header.hash) {
        Some(Rejection::InvalidHash)
    } else if !within_skew(now, &header, max_skew) {
        Some(Rejection::StaleTs)
    } else if !constant_time_eq(&correct_mac, &header.mac) {
        Some(Rejection::InvalidMac)
    } else {
        None
    };
    if let Some(rejection) = rejection {
        debug!("rejecting request from id {:?}: {}", creds.id, rejection);
        return Ok(rejection.into());
    }

    match nonces.seen_nonce(&header.nonce, &creds.id).await {
        Ok(false) => {
            trace!("authenticated request from id {:?}", creds.id);
            Ok(Outcome::Authenticated(creds))
        }
        Ok(true) => {
            debug!("rejecting request from id {:?}: {}", creds.id, Rejection::InvalidNonce);
            Ok(Rejection::InvalidNonce.into())
        }
        Err(e) => {
            debug!("nonce check for id {:?} failed: {}", creds.id, e);
            Err(Error::NonceCheck(e))
        }
    }
}
