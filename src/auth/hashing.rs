//! Credential Hashing
//!
//! One-way transform of a password into a fixed-length digest: SHA-512
//! over the secret bytes followed by a process-wide pepper. Deterministic
//! by construction - the same input under the same pepper always yields
//! the same 64 bytes - which is what lets authentication be a single
//! store lookup on (login, digest). There is no per-user salt.

use sha2::{Digest, Sha512};

/// Length in bytes of every digest produced by [`CredentialHasher`].
pub const DIGEST_LEN: usize = 64;

/// Hasher holding the process-wide pepper, constructed once from
/// configuration.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    pepper: String,
}

impl CredentialHasher {
    pub fn new(pepper: impl Into<String>) -> Self {
        Self {
            pepper: pepper.into(),
        }
    }

    /// Digest a secret together with the pepper. Pure; no error
    /// conditions.
    pub fn digest(&self, secret: &[u8]) -> Vec<u8> {
        let mut hasher = Sha512::new();
        hasher.update(secret);
        hasher.update(self.pepper.as_bytes());
        hasher.finalize().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let hasher = CredentialHasher::new("pepper");
        assert_eq!(hasher.digest(b"secret123"), hasher.digest(b"secret123"));
    }

    #[test]
    fn test_digest_has_fixed_length() {
        let hasher = CredentialHasher::new("pepper");
        assert_eq!(hasher.digest(b"").len(), DIGEST_LEN);
        assert_eq!(hasher.digest(b"a").len(), DIGEST_LEN);
        assert_eq!(hasher.digest(&[0u8; 1024]).len(), DIGEST_LEN);
    }

    #[test]
    fn test_digest_depends_on_input() {
        let hasher = CredentialHasher::new("pepper");
        assert_ne!(hasher.digest(b"secret123"), hasher.digest(b"secret124"));
    }

    #[test]
    fn test_digest_depends_on_pepper() {
        let a = CredentialHasher::new("pepper-a");
        let b = CredentialHasher::new("pepper-b");
        assert_ne!(a.digest(b"secret123"), b.digest(b"secret123"));
    }
}
