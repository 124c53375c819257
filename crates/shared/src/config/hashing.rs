use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};

#[derive(Debug, Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Lower cost for tests and seeding in development.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, self.cost).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        verify(password, hashed_password)
            .map_err(ServiceError::Bcrypt)
            .and_then(|is_valid| {
                if is_valid {
                    Ok(())
                } else {
                    Err(ServiceError::InvalidCredentials)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_compare() {
        let hashing = Hashing::with_cost(4);
        let hashed = hashing.hash_password("s3cret").await.expect("hash");

        assert!(hashing.compare_password(&hashed, "s3cret").await.is_ok());
        assert!(matches!(
            hashing.compare_password(&hashed, "wrong").await,
            Err(ServiceError::InvalidCredentials)
        ));
    }
}
