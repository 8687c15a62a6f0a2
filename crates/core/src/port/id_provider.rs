// ID Provider Port (for deterministic testing)

use crate::domain::EntityId;
use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new unique entity ID
    fn generate_id(&self) -> EntityId;
}

/// Object-id style provider (production)
///
/// Layout: 4-byte big-endian seconds timestamp, 5 random bytes fixed for the
/// lifetime of the provider, 3-byte big-endian counter (wraps at 2^24).
pub struct ObjectIdProvider {
    process_unique: [u8; 5],
    counter: AtomicU32,
}

impl ObjectIdProvider {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            process_unique: rng.gen(),
            counter: AtomicU32::new(rng.gen_range(0..0x00FF_FFFF)),
        }
    }

    fn build(&self, seconds: u32) -> EntityId {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF;

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.process_unique);
        bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..4]);
        EntityId::from_bytes(bytes)
    }
}

impl Default for ObjectIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for ObjectIdProvider {
    fn generate_id(&self) -> EntityId {
        let seconds = chrono::Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32;
        self.build(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_valid_and_unique() {
        let provider = ObjectIdProvider::new();
        let ids: HashSet<EntityId> = (0..1000).map(|_| provider.generate_id()).collect();
        assert_eq!(ids.len(), 1000);
        for id in &ids {
            assert_eq!(EntityId::parse(id.as_str()).as_ref(), Ok(id));
        }
    }

    #[test]
    fn test_layout_embeds_timestamp_and_counter() {
        let provider = ObjectIdProvider {
            process_unique: [1, 2, 3, 4, 5],
            counter: AtomicU32::new(0x00FF_FFFF),
        };

        let first = provider.build(0x6500_0000);
        assert_eq!(first.as_str(), "650000000102030405ffffff");

        // Counter wraps within 3 bytes
        let second = provider.build(0x6500_0000);
        assert_eq!(second.as_str(), "650000000102030405000000");
    }
}
