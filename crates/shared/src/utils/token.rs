use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Alphanumeric token from an OS-seeded generator, as stored in the members
/// `active_token` column.
pub fn random_token(length: usize) -> Result<String> {
    let mut rng = StdRng::try_from_os_rng()?;

    Ok((0..length)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_alphanumeric_at_the_requested_length() {
        let token = random_token(60).unwrap();

        assert_eq!(token.len(), 60);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn tokens_differ_between_calls() {
        assert_ne!(random_token(60).unwrap(), random_token(60).unwrap());
    }
}
