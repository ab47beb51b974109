use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{error_500, UseCaseError};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[tracing::instrument(name = "Hashing user password", skip(password))]
pub fn hash(password: &[u8]) -> Result<String, UseCaseError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password, &salt)
        .map(|hash| hash.to_string())
        .map_err(error_500)
}

#[tracing::instrument(name = "Verifying user password", skip(password, hash))]
pub fn verify_password(hash: &str, password: &[u8]) -> Result<(), argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    Argon2::default().verify_password(password, &parsed_hash)
}

pub(crate) fn validate_new_password(password: &str) -> Result<(), UseCaseError> {
    match password.chars().count() < MIN_PASSWORD_LENGTH {
        true => Err(UseCaseError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ))),
        false => Ok(()),
    }
}
