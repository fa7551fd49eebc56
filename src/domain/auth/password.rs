//! Password hashing with Argon2id (PHC string format)

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::error::AuthServiceError;

pub fn hash_password(password: &str) -> Result<String, AuthServiceError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthServiceError::Dependency(format!("Password hashing failed: {}", e)))
}

/// Constant-time check of `password` against a stored PHC hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthServiceError> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e| {
        AuthServiceError::Dependency(format!("Invalid password hash format: {}", e))
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthServiceError::Dependency(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
