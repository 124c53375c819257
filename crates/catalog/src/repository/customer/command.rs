use crate::{
    abstract_trait::customer::repository::CustomerCommandRepositoryTrait,
    domain::requests::customer::{CustomerChanges, NewCustomer},
    model::customer::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CustomerModel>(
            r#"
            INSERT INTO customers (id, name, email, phone, notes, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            RETURNING id, name, email, phone, notes, status, created_at, updated_at
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.notes)
        .bind(customer.status.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create customer {}: {:?}", customer.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created customer ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update_customer(
        &self,
        id: Uuid,
        changes: &CustomerChanges,
    ) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CustomerModel>(
            r#"
            UPDATE customers
            SET name = COALESCE($2, name),
                email = CASE WHEN $3 THEN $4 ELSE email END,
                phone = CASE WHEN $5 THEN $6 ELSE phone END,
                notes = CASE WHEN $7 THEN $8 ELSE notes END,
                status = COALESCE($9, status),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, email, phone, notes, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.email.is_some())
        .bind(changes.email.clone().flatten())
        .bind(changes.phone.is_some())
        .bind(changes.phone.clone().flatten())
        .bind(changes.notes.is_some())
        .bind(changes.notes.clone().flatten())
        .bind(changes.status.map(|s| s.as_str()))
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update customer ID {id}: {:?}", err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated customer ID {}", result.id);
        Ok(result)
    }

    async fn delete_customer(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete customer ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted customer ID {id}");
        Ok(())
    }
}
