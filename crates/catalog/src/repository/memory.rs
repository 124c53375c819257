use crate::{
    abstract_trait::{
        auth::{AdminSeed, AdminUserRepositoryTrait},
        category::repository::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
        customer::repository::{CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait},
        image::repository::{ProductImageCommandRepositoryTrait, ProductImageQueryRepositoryTrait},
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    },
    domain::requests::{
        category::{CategoryChanges, NewCategory},
        customer::{CustomerChanges, NewCustomer},
        image::ImageUpsert,
        product::{NewProduct, ProductChanges},
    },
    model::{
        admin_user::AdminUser, category::Category, customer::Customer, product::Product,
        product_image::ProductImage,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::{cmp::Reverse, sync::Arc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    admins: Vec<AdminUser>,
    categories: Vec<Category>,
    products: Vec<Product>,
    images: Vec<ProductImage>,
    customers: Vec<Customer>,
}

impl Tables {
    /// Fills the joined columns the SQL projection would produce.
    fn project(&self, product: &Product) -> Product {
        let category = product
            .category_id
            .and_then(|id| self.categories.iter().find(|c| c.id == id));
        let primary = self
            .images
            .iter()
            .find(|i| i.product_id == product.id && i.is_primary);

        Product {
            category_name: category.map(|c| c.name.clone()),
            category_slug: category.map(|c| c.slug.clone()),
            image_url: primary.map(|i| i.url.clone()),
            ..product.clone()
        }
    }

    fn check_category_ref(&self, category_id: Option<Uuid>) -> Result<(), RepositoryError> {
        match category_id {
            Some(id) if !self.categories.iter().any(|c| c.id == id) => Err(
                RepositoryError::ForeignKey("products_category_id_fkey".into()),
            ),
            _ => Ok(()),
        }
    }

    fn check_category_unique(
        &self,
        id: Uuid,
        name: &str,
        slug: &str,
    ) -> Result<(), RepositoryError> {
        let others = self.categories.iter().filter(|c| c.id != id);
        for other in others {
            if other.name == name {
                return Err(RepositoryError::AlreadyExists("categories_name_key".into()));
            }
            if other.slug == slug {
                return Err(RepositoryError::AlreadyExists("categories_slug_key".into()));
            }
        }
        Ok(())
    }
}

/// Process-local tables with the same constraints as the SQL schema.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let tables = self.tables.read().await;

        let mut products: Vec<Product> =
            tables.products.iter().map(|p| tables.project(p)).collect();
        products.sort_by_key(|p| (Reverse(p.created_at), p.id));

        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .find(|p| p.id == id)
            .map(|p| tables.project(p)))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut tables = self.tables.write().await;
        tables.check_category_ref(product.category_id)?;

        let now = Utc::now();
        let row = Product {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price_cents: product.price_cents,
            stock: product.stock,
            status: product.status.as_str().to_string(),
            category_id: product.category_id,
            category_name: None,
            category_slug: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        };
        tables.products.push(row.clone());

        info!("✅ Created product ID {} in memory", row.id);
        Ok(tables.project(&row))
    }

    async fn update_product(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(category_id) = changes.category_id {
            tables.check_category_ref(category_id)?;
        }

        let row = tables
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(description) = &changes.description {
            row.description = description.clone();
        }
        if let Some(price_cents) = changes.price_cents {
            row.price_cents = price_cents;
        }
        if let Some(stock) = changes.stock {
            row.stock = stock;
        }
        if let Some(status) = changes.status {
            row.status = status.as_str().to_string();
        }
        if let Some(category_id) = changes.category_id {
            row.category_id = category_id;
        }
        row.updated_at = Utc::now();

        let row = row.clone();
        Ok(tables.project(&row))
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;

        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Err(RepositoryError::NotFound);
        }

        // cascade
        tables.images.retain(|i| i.product_id != id);
        Ok(())
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let tables = self.tables.read().await;

        let mut customers = tables.customers.clone();
        customers.sort_by_key(|c| (Reverse(c.created_at), c.id));

        Ok(customers)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.customers.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for MemoryStore {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, RepositoryError> {
        let mut tables = self.tables.write().await;

        let now = Utc::now();
        let row = Customer {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            notes: customer.notes.clone(),
            status: customer.status.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.customers.push(row.clone());

        Ok(row)
    }

    async fn update_customer(
        &self,
        id: Uuid,
        changes: &CustomerChanges,
    ) -> Result<Customer, RepositoryError> {
        let mut tables = self.tables.write().await;

        let row = tables
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(email) = &changes.email {
            row.email = email.clone();
        }
        if let Some(phone) = &changes.phone {
            row.phone = phone.clone();
        }
        if let Some(notes) = &changes.notes {
            row.notes = notes.clone();
        }
        if let Some(status) = changes.status {
            row.status = status.as_str().to_string();
        }
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete_customer(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;

        let before = tables.customers.len();
        tables.customers.retain(|c| c.id != id);
        if tables.customers.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let tables = self.tables.read().await;

        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(categories)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for MemoryStore {
    async fn create_category(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let mut tables = self.tables.write().await;
        tables.check_category_unique(category.id, &category.name, &category.slug)?;

        let now = Utc::now();
        let row = Category {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.categories.push(row.clone());

        Ok(row)
    }

    async fn upsert_by_slug(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let mut tables = self.tables.write().await;

        let existing = tables
            .categories
            .iter()
            .find(|c| c.slug == category.slug)
            .map(|c| c.id);

        match existing {
            Some(id) => {
                tables.check_category_unique(id, &category.name, &category.slug)?;
                let row = tables
                    .categories
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or(RepositoryError::NotFound)?;
                row.name = category.name.clone();
                row.updated_at = Utc::now();
                Ok(row.clone())
            }
            None => {
                tables.check_category_unique(category.id, &category.name, &category.slug)?;
                let now = Utc::now();
                let row = Category {
                    id: category.id,
                    name: category.name.clone(),
                    slug: category.slug.clone(),
                    created_at: now,
                    updated_at: now,
                };
                tables.categories.push(row.clone());
                Ok(row)
            }
        }
    }

    async fn update_category(
        &self,
        id: Uuid,
        changes: &CategoryChanges,
    ) -> Result<Category, RepositoryError> {
        let mut tables = self.tables.write().await;

        let current = tables
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)?;

        let name = changes.name.clone().unwrap_or(current.name);
        let slug = changes.slug.clone().unwrap_or(current.slug);
        tables.check_category_unique(id, &name, &slug)?;

        let row = tables
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        row.name = name;
        row.slug = slug;
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;

        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(RepositoryError::NotFound);
        }

        // ON DELETE SET NULL
        for product in tables
            .products
            .iter_mut()
            .filter(|p| p.category_id == Some(id))
        {
            product.category_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl ProductImageQueryRepositoryTrait for MemoryStore {
    async fn find_by_product(&self, product_id: Uuid) -> Result<Vec<ProductImage>, RepositoryError> {
        let tables = self.tables.read().await;

        let mut images: Vec<ProductImage> = tables
            .images
            .iter()
            .filter(|i| i.product_id == product_id)
            .cloned()
            .collect();
        images.sort_by_key(|i| (Reverse(i.created_at), i.id));

        Ok(images)
    }
}

#[async_trait]
impl ProductImageCommandRepositoryTrait for MemoryStore {
    async fn upsert_image(&self, image: &ImageUpsert) -> Result<ProductImage, RepositoryError> {
        let mut tables = self.tables.write().await;

        if !tables.products.iter().any(|p| p.id == image.product_id) {
            return Err(RepositoryError::ForeignKey(
                "product_images_product_id_fkey".into(),
            ));
        }

        let provider = image.provider.map(|p| p.as_str().to_string());

        if let Some(row) = tables
            .images
            .iter_mut()
            .find(|i| i.product_id == image.product_id && i.url == image.url)
        {
            if provider.is_some() {
                row.provider = provider;
            }
            if image.public_id.is_some() {
                row.public_id = image.public_id.clone();
            }
            return Ok(row.clone());
        }

        let row = ProductImage {
            id: image.id,
            product_id: image.product_id,
            url: image.url.clone(),
            provider,
            public_id: image.public_id.clone(),
            is_primary: false,
            created_at: Utc::now(),
        };
        tables.images.push(row.clone());

        Ok(row)
    }

    async fn set_primary(
        &self,
        product_id: Uuid,
        image_id: Uuid,
    ) -> Result<ProductImage, RepositoryError> {
        let mut tables = self.tables.write().await;

        if !tables
            .images
            .iter()
            .any(|i| i.id == image_id && i.product_id == product_id)
        {
            return Err(RepositoryError::NotFound);
        }

        let mut primary = None;
        for image in tables.images.iter_mut().filter(|i| i.product_id == product_id) {
            image.is_primary = image.id == image_id;
            if image.is_primary {
                primary = Some(image.clone());
            }
        }

        primary.ok_or(RepositoryError::NotFound)
    }

    async fn clear_primary(&self, product_id: Uuid) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        for image in tables.images.iter_mut().filter(|i| i.product_id == product_id) {
            image.is_primary = false;
        }
        Ok(())
    }

    async fn delete_image(&self, product_id: Uuid, image_id: Uuid) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;

        let before = tables.images.len();
        tables
            .images
            .retain(|i| !(i.id == image_id && i.product_id == product_id));
        if tables.images.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AdminUserRepositoryTrait for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.admins.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.admins.iter().find(|a| a.id == id).cloned())
    }

    async fn upsert_admin(&self, admin: &AdminSeed) -> Result<AdminUser, RepositoryError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();

        if let Some(row) = tables.admins.iter_mut().find(|a| a.email == admin.email) {
            row.password_hash = admin.password_hash.clone();
            row.role = admin.role.clone();
            row.updated_at = now;
            return Ok(row.clone());
        }

        let row = AdminUser {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
            password_hash: admin.password_hash.clone(),
            role: admin.role.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.admins.push(row.clone());

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::{ImageProvider, RecordStatus};

    fn new_product(name: &str, category_id: Option<Uuid>) -> NewProduct {
        NewProduct {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            price_cents: 1000,
            stock: 1,
            status: RecordStatus::Active,
            category_id,
        }
    }

    #[tokio::test]
    async fn product_projection_follows_category_and_primary_image() {
        let store = MemoryStore::new();
        let category = store
            .create_category(&NewCategory::new("Moda Praia", "praia"))
            .await
            .expect("category");
        let product = store
            .create_product(&new_product("Biquíni", Some(category.id)))
            .await
            .expect("product");

        let image = store
            .upsert_image(&ImageUpsert::new(
                product.id,
                "/uploads/a.png",
                Some(ImageProvider::Local),
                None,
            ))
            .await
            .expect("image");
        store
            .set_primary(product.id, image.id)
            .await
            .expect("primary");

        let found = ProductQueryRepositoryTrait::find_by_id(&store, product.id)
            .await
            .expect("query")
            .expect("exists");
        assert_eq!(found.category_slug.as_deref(), Some("praia"));
        assert_eq!(found.image_url.as_deref(), Some("/uploads/a.png"));
    }

    #[tokio::test]
    async fn only_one_primary_image_per_product() {
        let store = MemoryStore::new();
        let product = store
            .create_product(&new_product("Top", None))
            .await
            .expect("product");

        let first = store
            .upsert_image(&ImageUpsert::new(product.id, "/uploads/1.png", None, None))
            .await
            .expect("first");
        let second = store
            .upsert_image(&ImageUpsert::new(product.id, "/uploads/2.png", None, None))
            .await
            .expect("second");

        store.set_primary(product.id, first.id).await.expect("first primary");
        store.set_primary(product.id, second.id).await.expect("second primary");

        let images = store.find_by_product(product.id).await.expect("images");
        let primaries: Vec<Uuid> = images.iter().filter(|i| i.is_primary).map(|i| i.id).collect();
        assert_eq!(primaries, vec![second.id]);
    }

    #[tokio::test]
    async fn upsert_keeps_one_row_per_url() {
        let store = MemoryStore::new();
        let product = store
            .create_product(&new_product("Top", None))
            .await
            .expect("product");

        let first = store
            .upsert_image(&ImageUpsert::new(product.id, "https://cdn/x.jpg", None, None))
            .await
            .expect("first");
        let again = store
            .upsert_image(&ImageUpsert::new(
                product.id,
                "https://cdn/x.jpg",
                Some(ImageProvider::Cloudinary),
                Some("catalog/x".into()),
            ))
            .await
            .expect("again");

        assert_eq!(first.id, again.id);
        assert_eq!(again.provider.as_deref(), Some("cloudinary"));
        assert_eq!(store.find_by_product(product.id).await.expect("images").len(), 1);
    }

    #[tokio::test]
    async fn deleting_category_unlinks_products() {
        let store = MemoryStore::new();
        let category = store
            .create_category(&NewCategory::new("Lingerie", "lingerie"))
            .await
            .expect("category");
        let product = store
            .create_product(&new_product("Conjunto", Some(category.id)))
            .await
            .expect("product");

        store.delete_category(category.id).await.expect("delete");

        let found = ProductQueryRepositoryTrait::find_by_id(&store, product.id)
            .await
            .expect("query")
            .expect("exists");
        assert_eq!(found.category_id, None);
        assert_eq!(found.category_name, None);
    }

    #[tokio::test]
    async fn constraint_violations_surface_as_repository_errors() {
        let store = MemoryStore::new();
        store
            .create_category(&NewCategory::new("Sex Shop", "sex-shop"))
            .await
            .expect("category");

        let duplicate = store
            .create_category(&NewCategory::new("Outra", "sex-shop"))
            .await;
        assert!(matches!(duplicate, Err(RepositoryError::AlreadyExists(_))));

        let dangling = store
            .create_product(&new_product("Órfão", Some(Uuid::new_v4())))
            .await;
        assert!(matches!(dangling, Err(RepositoryError::ForeignKey(_))));

        let missing = store.delete_product(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(RepositoryError::NotFound)));
    }
}
