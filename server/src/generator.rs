//! Password generation: one charset draw per output character

use rand::Rng;
use shared::{PasswordType, DIGIT_CHARSET, LOWERCASE_CHARSET, SECURE_CHARSET, UNAMBIGUOUS_CHARSET};

/// Generates a password of exactly `length` characters for the given type.
///
/// Every character is an independent uniform draw from the type's charset.
/// The caller is responsible for bounds: `length` must already be validated
/// against the protocol's 1..=32 range, this function does not check it.
///
/// The thread-local RNG is seeded from OS entropy the first time it is used
/// in this thread and never reseeded per call, so back-to-back requests
/// within the same process cannot repeat a sequence the way a per-call
/// wall-clock seed would.
pub fn generate(kind: PasswordType, length: usize) -> String {
    let mut rng = rand::thread_rng();
    match kind {
        PasswordType::Numeric => draw(&mut rng, DIGIT_CHARSET, length),
        PasswordType::Alpha => draw(&mut rng, LOWERCASE_CHARSET, length),
        PasswordType::Mixed => generate_mixed(&mut rng, length),
        PasswordType::Secure => draw(&mut rng, SECURE_CHARSET, length),
        PasswordType::Unambiguous => draw(&mut rng, UNAMBIGUOUS_CHARSET, length),
    }
}

fn draw<R: Rng>(rng: &mut R, charset: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Mixed passwords use a two-stage draw: a fair coin picks the digit or the
/// letter charset for each position, then the character is drawn uniformly
/// within the chosen set. Letters therefore come out less often per glyph
/// than digits (26 vs 10 candidates behind the same coin face), which is the
/// established output distribution of this service and must not be replaced
/// by a single uniform draw over the 36-character union.
fn generate_mixed<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            if rng.gen_bool(0.5) {
                LOWERCASE_CHARSET[rng.gen_range(0..LOWERCASE_CHARSET.len())] as char
            } else {
                DIGIT_CHARSET[rng.gen_range(0..DIGIT_CHARSET.len())] as char
            }
        })
        .collect()
}
