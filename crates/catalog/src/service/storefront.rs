use crate::{
    abstract_trait::{
        product::repository::DynProductQueryRepository, storefront::StorefrontServiceTrait,
    },
    domain::response::{
        api::ApiResponse,
        storefront::{StorefrontProduct, StorefrontResponse, StorefrontSection},
    },
    model::{product::Product as ProductModel, status::RecordStatus},
    service::repo_failure,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, ServiceTracer, format_brl, whatsapp_link},
};
use std::collections::BTreeMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone)]
pub struct StorefrontSettings {
    pub store_name: String,
    pub whatsapp_phone: String,
}

impl StorefrontSettings {
    fn greeting(&self) -> String {
        format!(
            "Hi! I found the {} catalog and would like to place an order.",
            self.store_name
        )
    }

    fn order_message(&self, product: &ProductModel, category: &str) -> String {
        format!(
            "{}\n\nProduct: {}\nPrice: {}\nCategory: {category}\n\nCould you share options and availability?",
            self.greeting(),
            product.name,
            format_brl(product.price_cents),
        )
    }
}

#[derive(Clone)]
pub struct StorefrontService {
    products: DynProductQueryRepository,
    settings: StorefrontSettings,
    tracer: ServiceTracer,
}

impl StorefrontService {
    pub fn new(
        products: DynProductQueryRepository,
        settings: StorefrontSettings,
        registry: &mut Registry,
    ) -> Self {
        Self {
            products,
            settings,
            tracer: ServiceTracer::new("storefront-service", registry),
        }
    }

    fn card(&self, product: ProductModel, category: &str) -> StorefrontProduct {
        let order_link = whatsapp_link(
            &self.settings.whatsapp_phone,
            &self.settings.order_message(&product, category),
        );

        StorefrontProduct {
            id: product.id,
            price_label: format_brl(product.price_cents),
            name: product.name,
            description: product.description,
            price_cents: product.price_cents,
            stock: product.stock,
            image_url: product.image_url,
            order_link,
        }
    }

    /// Active products grouped by category name; products without one come last.
    fn sections(&self, products: Vec<ProductModel>) -> Vec<StorefrontSection> {
        let mut named: BTreeMap<String, (Option<String>, Vec<StorefrontProduct>)> = BTreeMap::new();
        let mut loose = Vec::new();

        let active = products
            .into_iter()
            .filter(|p| p.status == RecordStatus::Active.as_str());

        for product in active {
            match product.category_name.clone() {
                Some(name) => {
                    let card = self.card(product.clone(), &name);
                    named
                        .entry(name)
                        .or_insert_with(|| (product.category_slug.clone(), Vec::new()))
                        .1
                        .push(card);
                }
                None => loose.push(self.card(product, UNCATEGORIZED)),
            }
        }

        let mut sections: Vec<StorefrontSection> = named
            .into_iter()
            .map(|(category, (slug, products))| StorefrontSection {
                category,
                slug,
                products,
            })
            .collect();

        if !loose.is_empty() {
            sections.push(StorefrontSection {
                category: UNCATEGORIZED.to_string(),
                slug: None,
                products: loose,
            });
        }

        sections
    }
}

#[async_trait]
impl StorefrontServiceTrait for StorefrontService {
    async fn catalog(&self) -> Result<ApiResponse<StorefrontResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "storefront_catalog",
            vec![KeyValue::new("component", "storefront")],
        );

        let products = match self.products.find_all().await {
            Ok(products) => products,
            Err(e) => {
                let (msg, err) = repo_failure("Failed to load storefront products", e);
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                return Err(err);
            }
        };

        let response = StorefrontResponse {
            store_name: self.settings.store_name.clone(),
            contact_link: whatsapp_link(&self.settings.whatsapp_phone, &self.settings.greeting()),
            sections: self.sections(products),
        };

        self.tracer
            .success(&tracing_ctx, Method::Get, "Storefront built");

        Ok(ApiResponse::success("Storefront retrieved successfully", response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use chrono::{Duration, Utc};
    use std::sync::Arc;
    use uuid::Uuid;

    fn product(name: &str, category: Option<&str>, status: RecordStatus, age_mins: i64) -> ProductModel {
        let at = Utc::now() - Duration::minutes(age_mins);
        ProductModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            price_cents: 12990,
            stock: 3,
            status: status.as_str().to_string(),
            category_id: category.map(|_| Uuid::new_v4()),
            category_name: category.map(str::to_string),
            category_slug: category.map(|c| c.to_lowercase()),
            image_url: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn service() -> StorefrontService {
        let mut registry = Registry::default();
        StorefrontService::new(
            Arc::new(MemoryStore::new()),
            StorefrontSettings {
                store_name: "Loja".into(),
                whatsapp_phone: "+55 (11) 99999-0000".into(),
            },
            &mut registry,
        )
    }

    #[test]
    fn groups_active_products_by_category() {
        let products = vec![
            product("Top", Some("Roupas de Academia"), RecordStatus::Active, 1),
            product("Avulso", None, RecordStatus::Active, 2),
            product("Biquíni", Some("Moda Praia"), RecordStatus::Active, 3),
            product("Oculto", Some("Moda Praia"), RecordStatus::Inactive, 4),
            product("Legging", Some("Roupas de Academia"), RecordStatus::Active, 5),
        ];

        let sections = service().sections(products);
        let names: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Moda Praia", "Roupas de Academia", UNCATEGORIZED]);

        let academia: Vec<&str> = sections[1].products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(academia, vec!["Top", "Legging"]);
        assert_eq!(sections[0].products.len(), 1);
    }

    #[test]
    fn order_link_names_product_price_and_category() {
        let sections = service().sections(vec![product(
            "Biquíni",
            Some("Moda Praia"),
            RecordStatus::Active,
            0,
        )]);
        let card = &sections[0].products[0];

        assert_eq!(card.price_label, "R$ 129,90");
        assert!(card.order_link.starts_with("https://wa.me/5511999990000?text="));
        assert!(card.order_link.contains("Product%3A%20Biqu%C3%ADni"));
        assert!(card.order_link.contains("Category%3A%20Moda%20Praia"));
    }
}
