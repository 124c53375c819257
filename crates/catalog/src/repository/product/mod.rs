mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

/// Product projection over `source`, joined with category and primary image.
pub(crate) fn select_products_from(source: &str) -> String {
    format!(
        r#"
        SELECT
            p.id,
            p.name,
            p.description,
            p.price_cents,
            p.stock,
            p.status,
            p.category_id,
            c.name AS category_name,
            c.slug AS category_slug,
            i.url AS image_url,
            p.created_at,
            p.updated_at
        FROM {source} p
        LEFT JOIN categories c ON c.id = p.category_id
        LEFT JOIN product_images i ON i.product_id = p.id AND i.is_primary
        "#
    )
}
