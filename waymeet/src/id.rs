use chrono::{DateTime, Utc};
use nanoid::nanoid;

/// Canonical alphabet for record identifiers (no ambiguous glyphs).
const ENTITY_ID_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
    'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
/// Default id length for events and chat messages.
const ENTITY_ID_LENGTH: usize = 20;

/// Generates a new identifier for client-created events and messages.
pub fn generate_entity_id() -> String {
    nanoid!(ENTITY_ID_LENGTH, ENTITY_ID_ALPHABET)
}

/// Signed-up users are keyed by their creation instant in epoch milliseconds.
pub fn user_id_at(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_expected_length_and_charset() {
        let id = generate_entity_id();
        assert_eq!(id.len(), ENTITY_ID_LENGTH);
        assert!(id.chars().all(|c| ENTITY_ID_ALPHABET.contains(&c)));
    }

    #[test]
    fn user_ids_are_epoch_millis() {
        let at = DateTime::<Utc>::from_timestamp(1_700_000_000, 123_000_000).unwrap();
        assert_eq!(user_id_at(at), "1700000000123");
    }
}
