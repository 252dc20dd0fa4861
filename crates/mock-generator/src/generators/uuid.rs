//! UUID value generator.

use mock_core::{GeneratorArgs, MockValue};
use rand::{Rng, RngCore};
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
pub fn uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes)
}

/// `@uuid()`
pub fn generate_uuid(_args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    MockValue::String(uuid_v4(rng).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuid_version() {
        let mut rng = StdRng::seed_from_u64(42);
        let uuid = uuid_v4(&mut rng);
        assert_eq!(uuid.get_version_num(), 4);

        // Ensure uniqueness
        assert_ne!(uuid, uuid_v4(&mut rng));
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(uuid_v4(&mut rng1), uuid_v4(&mut rng2));
    }

    #[test]
    fn test_generate_uuid_string() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_uuid(&GeneratorArgs::default(), &mut rng);

        let s = value.as_str().unwrap();
        assert_eq!(s.len(), 36);
        assert!(Uuid::parse_str(s).is_ok());
    }
}
