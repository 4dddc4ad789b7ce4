use crate::core::error::{AppError, Result};

/// One-way password hashing with bcrypt
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash `password`, returning the modular-crypt string (`$2b$10$...`)
    pub async fn hash(&self, password: String) -> Result<String> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(AppError::Hashing)
    }
}
