//! Identifier and join code minting

use rand::Rng;
use std::collections::HashSet;
use uuid::{Builder, Uuid};

pub const JOIN_CODE_LENGTH: usize = 6;

const JOIN_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Mints row ids and join codes from a single random source
///
/// Join codes are unique within one minter; a repeated draw is redrawn.
pub struct IdMinter<R> {
    rng: R,
    issued_codes: HashSet<String>,
}

impl<R: Rng> IdMinter<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            issued_codes: HashSet::new(),
        }
    }

    /// Random (version 4) UUID
    pub fn uuid(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.random()).into_uuid()
    }

    pub fn join_code(&mut self) -> String {
        loop {
            let code: String = (0..JOIN_CODE_LENGTH)
                .map(|_| JOIN_CODE_CHARSET[self.rng.random_range(0..JOIN_CODE_CHARSET.len())] as char)
                .collect();

            if self.issued_codes.insert(code.clone()) {
                return code;
            }
            log::debug!("Join code {} already issued, drawing again", code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_uuid_is_v4() {
        let mut minter = IdMinter::new(StdRng::seed_from_u64(7));
        let id = minter.uuid();
        assert_eq!(id.get_version_num(), 4);
        assert_ne!(id, minter.uuid());
    }

    #[test]
    fn test_join_code_shape() {
        let mut minter = IdMinter::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            let code = minter.join_code();
            assert_eq!(code.len(), JOIN_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_join_codes_unique_within_run() {
        let mut minter = IdMinter::new(StdRng::seed_from_u64(42));
        let codes: HashSet<String> = (0..500).map(|_| minter.join_code()).collect();
        assert_eq!(codes.len(), 500);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = IdMinter::new(StdRng::seed_from_u64(1));
        let mut b = IdMinter::new(StdRng::seed_from_u64(1));
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.join_code(), b.join_code());
    }
}
