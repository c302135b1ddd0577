use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;

/// A registered user. No route exposes these yet; the store keeps
/// credentials in a shape that is safe to build authentication on.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    password_hash: String,
}

/// A registration request. The plaintext password lives only here and
/// only until it is hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("username {0:?} is already taken")]
    UsernameTaken(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl User {
    /// Build a user from a registration, salting and hashing the password.
    pub fn register(new_user: NewUser) -> Result<Self, StoreError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(new_user.password.as_bytes(), &salt)
            .map_err(|e| StoreError::Hash(e.to_string()))?
            .to_string();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            username: new_user.username,
            password_hash,
        })
    }

    /// Whether a candidate password matches the stored hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}
