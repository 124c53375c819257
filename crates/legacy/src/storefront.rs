use crate::{
    category::CategoryKey,
    defaults::{BRAND, DEFAULT_TAG},
    document::{CatalogDocument, CatalogItem},
};
use serde::Serialize;
use shared::utils::whatsapp_link;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tag: String,
    pub image: String,
    pub order_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSection {
    pub category: CategoryKey,
    pub label: String,
    pub cards: Vec<StorefrontCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Storefront {
    pub contact_link: String,
    pub sections: Vec<StorefrontSection>,
}

pub fn greeting() -> String {
    format!("Hi! I found the {BRAND} catalog and would like to place an order.")
}

pub fn order_message(item: &CatalogItem, category: CategoryKey) -> String {
    format!(
        "{}\n\nProduct: {}\nCategory: {}\n\nCould you send me the price and options?",
        greeting(),
        item.name,
        category.label()
    )
}

fn card(item: &CatalogItem, category: CategoryKey, phone: &str) -> StorefrontCard {
    let tag = if item.tag.is_empty() {
        DEFAULT_TAG.to_string()
    } else {
        item.tag.clone()
    };

    StorefrontCard {
        id: item.id.clone(),
        name: item.name.clone(),
        description: item.description.clone(),
        tag,
        image: item.image.clone(),
        order_link: whatsapp_link(phone, &order_message(item, category)),
    }
}

/// Every category in document order, cards by rank; empty categories included.
pub fn build_storefront(doc: &CatalogDocument, phone: &str) -> Storefront {
    let sections = CategoryKey::ALL
        .into_iter()
        .map(|key| {
            let mut items: Vec<&CatalogItem> = doc.list(key).iter().collect();
            items.sort_by_key(|item| item.sort_index);

            StorefrontSection {
                category: key,
                label: key.label().to_string(),
                cards: items.into_iter().map(|item| card(item, key, phone)).collect(),
            }
        })
        .collect();

    Storefront {
        contact_link: whatsapp_link(phone, &greeting()),
        sections,
    }
}
