//! Order nonces.
//!
//! A nonce packs the time the engine should receive the order by, in
//! milliseconds, above 20 random low bits:
//!
//! ```text
//! | recv_time_ms | random  |
//! | 63..20       | 19..0   |
//! ```
//!
//! Nonces therefore grow with recv time, and the random part keeps orders
//! placed within the same millisecond apart.

use std::{
    fmt,
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use rand::Rng as _;

/// Width of the random part of a nonce.
pub const RANDOM_BITS: u32 = 20;

/// Exclusive upper bound of the random part picked by [`OrderNonce::at`].
pub const DEFAULT_RANDOM_BOUND: u64 = 1000;

/// Offset of the default recv time from now.
pub const DEFAULT_RECV_TIME_OFFSET: Duration = Duration::from_secs(90);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NonceError {
    #[error("random part {0} does not fit in {RANDOM_BITS} bits")]
    RandomOutOfRange(u64),

    #[error("recv time {0}ms does not fit in a 64-bit nonce")]
    RecvTimeOutOfRange(u64),

    #[error("invalid order nonce: {0}")]
    InvalidNonce(String),
}

/// Order nonce, sent over the wire as a decimal string.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct OrderNonce(u64);

impl OrderNonce {
    /// Nonce from an explicit recv time and random part.
    pub fn new(recv_time_ms: u64, random: u64) -> Result<Self, NonceError> {
        if random >> RANDOM_BITS != 0 {
            return Err(NonceError::RandomOutOfRange(random));
        }
        let nonce = ((recv_time_ms as u128) << RANDOM_BITS) + random as u128;
        u64::try_from(nonce)
            .map(Self)
            .map_err(|_| NonceError::RecvTimeOutOfRange(recv_time_ms))
    }

    /// Nonce for `recv_time_ms` with a random part in `[0, 1000)`.
    pub fn at(recv_time_ms: u64) -> Result<Self, NonceError> {
        Self::new(
            recv_time_ms,
            rand::rng().random_range(0..DEFAULT_RANDOM_BOUND),
        )
    }

    /// Nonce for an order the engine should receive within 90 seconds.
    pub fn generate() -> Result<Self, NonceError> {
        Self::at(default_recv_time_ms())
    }

    /// Recv time in milliseconds the nonce was generated for.
    pub fn recv_time_ms(&self) -> u64 {
        self.0 >> RANDOM_BITS
    }

    pub fn random(&self) -> u64 {
        self.0 & ((1 << RANDOM_BITS) - 1)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Now plus [`DEFAULT_RECV_TIME_OFFSET`], in milliseconds since the epoch.
pub fn default_recv_time_ms() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    u64::try_from((now + DEFAULT_RECV_TIME_OFFSET).as_millis()).unwrap_or(u64::MAX)
}

/// Recv time in milliseconds of a decimal-string nonce.
pub fn recv_time_from_nonce(nonce: &str) -> Result<u64, NonceError> {
    Ok(nonce.parse::<OrderNonce>()?.recv_time_ms())
}

impl From<u64> for OrderNonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<OrderNonce> for u64 {
    fn from(value: OrderNonce) -> Self {
        value.0
    }
}

impl From<OrderNonce> for String {
    fn from(value: OrderNonce) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for OrderNonce {
    type Error = NonceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for OrderNonce {
    type Err = NonceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| NonceError::InvalidNonce(s.to_string()))
    }
}

impl fmt::Display for OrderNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
