use crate::tools::error::ToolError;
use rand::Rng;

/// Characters a generated password is drawn from
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

/// Generate a password with the thread-local, OS-seeded RNG
pub fn generate_password(length: usize) -> Result<String, ToolError> {
    generate_password_with(&mut rand::thread_rng(), length)
}

/// Generate a password from a caller-supplied RNG.
///
/// Every character is sampled uniformly from [`ALPHABET`].
pub fn generate_password_with<R: Rng>(
    rng: &mut R,
    length: usize,
) -> Result<String, ToolError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(ToolError::PasswordLength {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
            got: length,
        });
    }

    Ok((0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect())
}
