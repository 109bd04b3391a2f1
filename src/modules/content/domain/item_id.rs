use chrono::Utc;
use rand_core::{OsRng, RngCore};
use uuid::Builder;

/// Item families that carry a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Thought,
    Achievement,
    Timeline,
}

impl ItemKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ItemKind::Thought => "t",
            ItemKind::Achievement => "ach",
            ItemKind::Timeline => "exp",
        }
    }
}

pub trait ItemIdGenerator: Send + Sync {
    fn next_id(&self, kind: ItemKind) -> String;
}

/// `<prefix>-<uuid v4>` from the OS random source.
///
/// Collisions are not checked. With 122 random bits per id the chance is
/// negligible for a single document. If the OS source is unavailable the
/// suffix degrades to the current epoch milliseconds in base 36.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomItemIds;

impl ItemIdGenerator for RandomItemIds {
    fn next_id(&self, kind: ItemKind) -> String {
        id_from_source(&mut OsRng, kind)
    }
}

fn id_from_source<R: RngCore>(rng: &mut R, kind: ItemKind) -> String {
    let mut bytes = [0u8; 16];
    match rng.try_fill_bytes(&mut bytes) {
        Ok(()) => format!(
            "{}-{}",
            kind.prefix(),
            Builder::from_random_bytes(bytes).into_uuid()
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Secure random source unavailable, using time-based id");
            format!("{}-{}", kind.prefix(), time_token())
        }
    }
}

fn time_token() -> String {
    to_base36(Utc::now().timestamp_millis().unsigned_abs())
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;
    use uuid::Uuid;

    struct BrokenSource;

    impl RngCore for BrokenSource {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap().into())
        }
    }

    #[test]
    fn random_ids_are_prefixed_uuids() {
        let id = RandomItemIds.next_id(ItemKind::Achievement);
        let (prefix, rest) = id.split_once('-').unwrap();

        assert_eq!(prefix, "ach");
        let parsed = Uuid::parse_str(rest).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn random_ids_differ() {
        let a = RandomItemIds.next_id(ItemKind::Thought);
        let b = RandomItemIds.next_id(ItemKind::Thought);
        assert_ne!(a, b);
        assert!(a.starts_with("t-"));
    }

    #[test]
    fn base36_matches_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn unavailable_source_falls_back_to_time_token() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = id_from_source(&mut BrokenSource, ItemKind::Timeline);
        let after = Utc::now().timestamp_millis() as u64;

        let (prefix, token) = id.split_once('-').unwrap();
        assert_eq!(prefix, "exp");
        assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        let millis = u64::from_str_radix(token, 36).unwrap();
        assert!((before..=after).contains(&millis));
    }
}
