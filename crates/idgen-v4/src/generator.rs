//! Identifier generation backed by an injected randomness source.

use crate::{IdError, IdResult, UniqueId};
use chrono::{DateTime, Utc};
use idkit_entropy::{OsRandom, RandomSource};
use std::str::FromStr;
use uuid::{Builder, Uuid};

/// Largest Unix millisecond value that fits the 48-bit timestamp field.
const MAX_V7_MILLIS: u64 = (1 << 48) - 1;

/// Creates identifiers.
///
/// The generator owns its [`RandomSource`]; it keeps no other state, so every call is
/// independent. Use [`Generator::new`] for the operating system CSPRNG or
/// [`Generator::with_source`] to inject a different source.
#[derive(Clone, Debug)]
pub struct Generator<R = OsRandom> {
    source: R,
}

impl Generator<OsRandom> {
    /// Creates a generator reading from the operating system CSPRNG.
    pub fn new() -> Self {
        Self { source: OsRandom }
    }
}

impl Default for Generator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Generator<R> {
    /// Creates a generator reading from `source`.
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Generates a random (version 4) identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::RandomnessSource`] if the source cannot supply 16 bytes.
    pub fn new_v4(&self) -> IdResult<UniqueId> {
        let mut bytes = [0u8; 16];
        self.source.fill(&mut bytes)?;

        let id = UniqueId::from(Builder::from_random_bytes(bytes).into_uuid());
        tracing::debug!(%id, "generated v4 identifier");
        Ok(id)
    }

    /// Generates a time-ordered (version 7) identifier for the current time.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::RandomnessSource`] if the source cannot supply 10 bytes.
    pub fn new_v7(&self) -> IdResult<UniqueId> {
        self.v7_from_millis(Utc::now().timestamp_millis())
    }

    /// Generates a time-ordered (version 7) identifier for `timestamp`.
    ///
    /// Sub-millisecond precision is discarded.
    ///
    /// # Errors
    ///
    /// - [`IdError::InvalidInput`] if `timestamp` is before the Unix epoch or does not fit in 48
    ///   bits of milliseconds.
    /// - [`IdError::RandomnessSource`] if the source cannot supply 10 bytes.
    pub fn new_v7_at(&self, timestamp: DateTime<Utc>) -> IdResult<UniqueId> {
        self.v7_from_millis(timestamp.timestamp_millis())
    }

    /// Generates a version 7 identifier that sorts strictly after `last`.
    ///
    /// If the clock has not moved past the millisecond embedded in `last`, the new identifier
    /// uses that millisecond plus one. Without a previous identifier (or when `last` is not
    /// version 7) this behaves like [`Generator::new_v7`].
    ///
    /// Callers that need a strictly increasing sequence must serialise calls that share the
    /// same `last` value.
    ///
    /// # Errors
    ///
    /// As for [`Generator::new_v7_at`].
    pub fn new_v7_after(&self, last: Option<&UniqueId>) -> IdResult<UniqueId> {
        let now = Utc::now().timestamp_millis();

        let millis = match last.filter(|prev| prev.version() == Some(7)) {
            Some(prev) if now <= prev.unix_millis() as i64 => prev.unix_millis() as i64 + 1,
            _ => now,
        };

        self.v7_from_millis(millis)
    }

    /// Like [`Generator::new_v7_after`], parsing the previous identifier from text first.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `last` cannot be parsed, otherwise as for
    /// [`Generator::new_v7_at`].
    pub fn new_v7_after_str(&self, last: Option<&str>) -> IdResult<UniqueId> {
        let parsed = match last {
            Some(s) => Some(UniqueId::from_str(s)?),
            None => None,
        };

        self.new_v7_after(parsed.as_ref())
    }

    /// Generates a name-based identifier using MD5 (version 3).
    pub fn new_v3(&self, namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
        new_v3(namespace, name)
    }

    /// Generates a name-based identifier using SHA-1 (version 5).
    pub fn new_v5(&self, namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
        new_v5(namespace, name)
    }

    fn v7_from_millis(&self, millis: i64) -> IdResult<UniqueId> {
        let millis = u64::try_from(millis)
            .ok()
            .filter(|m| *m <= MAX_V7_MILLIS)
            .ok_or_else(|| {
                IdError::InvalidInput(format!(
                    "timestamp {} ms is outside the 48-bit version 7 range",
                    millis
                ))
            })?;

        let mut random = [0u8; 10];
        self.source.fill(&mut random)?;

        let id = UniqueId::from(Builder::from_unix_timestamp_millis(millis, &random).into_uuid());
        tracing::debug!(%id, millis, "generated v7 identifier");
        Ok(id)
    }
}

/// Generates a random (version 4) identifier from the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`IdError::RandomnessSource`] if the operating system cannot supply bytes.
pub fn new_v4() -> IdResult<UniqueId> {
    Generator::new().new_v4()
}

/// Generates a time-ordered (version 7) identifier from the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`IdError::RandomnessSource`] if the operating system cannot supply bytes.
pub fn new_v7() -> IdResult<UniqueId> {
    Generator::new().new_v7()
}

/// Generates a name-based identifier using MD5 (version 3).
pub fn new_v3(namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
    UniqueId::from(Uuid::new_v3(&namespace.uuid(), name.as_ref()))
}

/// Generates a name-based identifier using SHA-1 (version 5).
pub fn new_v5(namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
    UniqueId::from(Uuid::new_v5(&namespace.uuid(), name.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NAMESPACE_DNS, NAMESPACE_URL};
    use idkit_entropy::{EntropyError, EntropyResult, SeededRandom};
    use std::collections::HashSet;

    struct Exhausted;

    impl RandomSource for Exhausted {
        fn fill(&self, _dest: &mut [u8]) -> EntropyResult<()> {
            Err(EntropyError::Unavailable("entropy pool exhausted".into()))
        }
    }

    fn fixed_time(millis: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_new_v4_canonical_format() {
        let id = new_v4().unwrap();
        let s = id.to_string();

        assert!(UniqueId::is_canonical(&s));
        assert_eq!(&s[14..15], "4");
        assert!(matches!(&s[19..20], "8" | "9" | "a" | "b"));
        assert_eq!(id.version(), Some(4));
        assert!(id.is_rfc4122());
    }

    #[test]
    fn test_new_v4_ten_thousand_distinct() {
        let generator = Generator::new();
        let ids: HashSet<String> = (0..10_000)
            .map(|_| generator.new_v4().unwrap().to_string())
            .collect();

        assert_eq!(ids.len(), 10_000);
        assert!(ids.iter().all(|s| UniqueId::is_canonical(s)));
    }

    #[test]
    fn test_seeded_v4_is_reproducible_and_valid() {
        let a = Generator::with_source(SeededRandom::new(1234));
        let b = Generator::with_source(SeededRandom::new(1234));

        for _ in 0..16 {
            let x = a.new_v4().unwrap();
            assert_eq!(x, b.new_v4().unwrap());
            assert_eq!(x.version(), Some(4));
            assert!(x.is_rfc4122());
        }
    }

    #[test]
    fn test_exhausted_source_fails_v4_and_v7() {
        let generator = Generator::with_source(Exhausted);

        assert!(matches!(
            generator.new_v4(),
            Err(IdError::RandomnessSource(_))
        ));
        assert!(matches!(
            generator.new_v7(),
            Err(IdError::RandomnessSource(_))
        ));
    }

    #[test]
    fn test_new_v7_embeds_current_time() {
        let before = Utc::now().timestamp_millis();
        let id = new_v7().unwrap();
        let after = Utc::now().timestamp_millis();

        assert_eq!(id.version(), Some(7));
        assert!(id.is_rfc4122());
        assert!(UniqueId::is_canonical(&id.to_string()));

        let ts = id.timestamp().unwrap().timestamp_millis();
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn test_new_v7_at_uses_given_time() {
        let generator = Generator::with_source(SeededRandom::new(5));
        let id = generator.new_v7_at(fixed_time(1_700_000_000_123)).unwrap();

        assert_eq!(
            id.timestamp().unwrap().timestamp_millis(),
            1_700_000_000_123
        );
        assert!(id.to_string().starts_with("018bcfe5-687b-7"));
    }

    #[test]
    fn test_new_v7_at_rejects_pre_epoch() {
        let generator = Generator::new();
        let result = generator.new_v7_at(fixed_time(-1));

        match result {
            Err(IdError::InvalidInput(msg)) => assert!(msg.contains("48-bit")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_new_v7_at_rejects_beyond_48_bits() {
        let generator = Generator::new();
        let result = generator.new_v7_at(fixed_time(1 << 48));

        assert!(matches!(result, Err(IdError::InvalidInput(_))));
    }

    #[test]
    fn test_new_v7_after_monotonic_same_instant() {
        let generator = Generator::new();
        let mut last = generator.new_v7_after(None).unwrap();

        for _ in 0..1_000 {
            let next = generator.new_v7_after(Some(&last)).unwrap();
            assert!(next > last);
            assert!(next.timestamp().unwrap() > last.timestamp().unwrap());
            last = next;
        }
    }

    #[test]
    fn test_new_v7_after_future_last_increments() {
        let generator = Generator::new();
        let future_ms = Utc::now().timestamp_millis() + 60_000;
        let last = generator.new_v7_at(fixed_time(future_ms)).unwrap();

        let next = generator.new_v7_after(Some(&last)).unwrap();
        assert_eq!(
            next.timestamp().unwrap().timestamp_millis(),
            future_ms + 1
        );
    }

    #[test]
    fn test_new_v7_after_ignores_non_v7_last() {
        let generator = Generator::new();
        let v4 = generator.new_v4().unwrap();

        let before = Utc::now().timestamp_millis();
        let next = generator.new_v7_after(Some(&v4)).unwrap();
        assert!(next.timestamp().unwrap().timestamp_millis() >= before);
    }

    #[test]
    fn test_new_v7_after_str() {
        let generator = Generator::new();
        let prev = "018bcfe5-6a7b-7000-8000-000000000000";
        let prev_id = UniqueId::parse(prev).unwrap();

        let next = generator.new_v7_after_str(Some(prev)).unwrap();
        assert!(next > prev_id);

        assert!(generator.new_v7_after_str(None).is_ok());
        assert!(matches!(
            generator.new_v7_after_str(Some("not-an-id")),
            Err(IdError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_name_based_known_values() {
        assert_eq!(
            new_v3(&NAMESPACE_DNS, "python.org").to_string(),
            "6fa459ea-ee8a-3ca4-894e-db77e160355e"
        );
        assert_eq!(
            new_v5(&NAMESPACE_DNS, "python.org").to_string(),
            "886313e1-3b8a-5372-9b90-0c9aee199e5d"
        );
    }

    #[test]
    fn test_name_based_is_deterministic_and_namespaced() {
        let generator = Generator::with_source(Exhausted);

        let a = generator.new_v5(&NAMESPACE_DNS, "example.org");
        let b = generator.new_v5(&NAMESPACE_DNS, "example.org");
        let c = generator.new_v5(&NAMESPACE_URL, "example.org");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(generator.new_v3(&NAMESPACE_DNS, "x").version(), Some(3));
    }
}
