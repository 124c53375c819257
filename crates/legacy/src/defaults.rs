use crate::{
    category::CategoryKey,
    document::{CatalogDocument, CatalogItem},
    ids::make_id,
};
use shared::utils::encode_uri_component;

pub const DEFAULT_TAG: &str = "Selected";
pub const FALLBACK_LABEL: &str = "Product";
pub const BRAND: &str = "Total Encanto";

const PLACEHOLDER_FROM: &str = "#f1e3d7";
const PLACEHOLDER_TO: &str = "#e7c7ad";

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Gradient card with the label and brand name, as an SVG data URL.
pub fn placeholder_image(label: &str, from: &str, to: &str) -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="900" height="700" viewBox="0 0 900 700">"#,
            r#"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"#,
            r#"<stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/>"#,
            r#"</linearGradient><radialGradient id="r" cx="30%" cy="20%" r="70%">"#,
            r#"<stop offset="0" stop-color="rgba(255,255,255,.65)"/>"#,
            r#"<stop offset="1" stop-color="rgba(255,255,255,0)"/></radialGradient></defs>"#,
            r#"<rect width="900" height="700" rx="46" fill="url(#g)"/>"#,
            r#"<rect width="900" height="700" rx="46" fill="url(#r)"/>"#,
            r#"<text x="60" y="120" font-family="Manrope, Arial" font-size="40" fill="rgba(31,26,23,.78)" font-weight="700">{label}</text>"#,
            r#"<text x="60" y="170" font-family="Manrope, Arial" font-size="22" fill="rgba(31,26,23,.62)">{brand}</text>"#,
            r#"</svg>"#,
        ),
        from = escape_xml(from),
        to = escape_xml(to),
        label = escape_xml(label),
        brand = BRAND,
    );

    format!(
        "data:image/svg+xml;charset=UTF-8,{}",
        encode_uri_component(&svg)
    )
}

/// Placeholder used when an item arrives without an image.
pub fn fallback_image(name: &str) -> String {
    let label = if name.trim().is_empty() {
        FALLBACK_LABEL
    } else {
        name
    };
    placeholder_image(label, PLACEHOLDER_FROM, PLACEHOLDER_TO)
}

struct Sample {
    name: &'static str,
    description: &'static str,
    tag: &'static str,
    label: &'static str,
    from: &'static str,
    to: &'static str,
}

const ACADEMIA: [Sample; 3] = [
    Sample {
        name: "Conjunto Fitness Nude Glow",
        description: "Tecido encorpado e confortável, ideal para treinos com estilo.",
        tag: "Alta sustentação",
        label: "Nude Glow",
        from: "#e7c7ad",
        to: "#c8a27a",
    },
    Sample {
        name: "Legging Cintura Alta Rose",
        description: "Modelagem que valoriza e acompanha seus movimentos.",
        tag: "Cintura alta",
        label: "Legging Rose",
        from: "#f1e3d7",
        to: "#e7c7ad",
    },
    Sample {
        name: "Top Elegance Fit",
        description: "Recortes delicados e toque macio para o dia a dia.",
        tag: "Conforto",
        label: "Elegance Fit",
        from: "#fbf8f5",
        to: "#c8a27a",
    },
];

const PRAIA: [Sample; 3] = [
    Sample {
        name: "Biquíni Golden Nude",
        description: "Acabamento sofisticado e caimento que realça a beleza natural.",
        tag: "Charmoso",
        label: "Golden Nude",
        from: "#e7c7ad",
        to: "#f1e3d7",
    },
    Sample {
        name: "Maiô Power Elegance",
        description: "Elegância atemporal com toque moderno e confortável.",
        tag: "Modelador",
        label: "Power Elegance",
        from: "#c8a27a",
        to: "#fbf8f5",
    },
    Sample {
        name: "Saída de Praia Soft",
        description: "Leve, fluida e perfeita para compor looks de verão.",
        tag: "Levinha",
        label: "Soft",
        from: "#f1e3d7",
        to: "#fbf8f5",
    },
];

const LINGERIE: [Sample; 3] = [
    Sample {
        name: "Conjunto Renda Delicata",
        description: "Renda delicada e elegante, sensual na medida certa.",
        tag: "Renda",
        label: "Delicata",
        from: "#fbf8f5",
        to: "#e7c7ad",
    },
    Sample {
        name: "Body Nude Lux",
        description: "Versátil, perfeito para usar por baixo ou como peça principal.",
        tag: "Luxo",
        label: "Nude Lux",
        from: "#e7c7ad",
        to: "#c8a27a",
    },
    Sample {
        name: "Sutiã Conforto Premium",
        description: "Toque macio e sustentação para o dia a dia.",
        tag: "Premium",
        label: "Premium",
        from: "#f1e3d7",
        to: "#e7c7ad",
    },
];

const SEXSHOP: [Sample; 3] = [
    Sample {
        name: "Óleo Massageador Aromático",
        description: "Sensação suave e perfumada, ideal para momentos especiais.",
        tag: "Bem-estar",
        label: "Massagem",
        from: "#fbf8f5",
        to: "#c8a27a",
    },
    Sample {
        name: "Vela de Massagem (Aroma)",
        description: "Aquece levemente e vira óleo, com toque sofisticado e sensorial.",
        tag: "Sensorial",
        label: "Vela",
        from: "#e7c7ad",
        to: "#fbf8f5",
    },
    Sample {
        name: "Kit Intimidade Discreta",
        description: "Produtos selecionados com descrição e praticidade.",
        tag: "Discreto",
        label: "Kit",
        from: "#f1e3d7",
        to: "#c8a27a",
    },
];

fn samples(key: CategoryKey) -> &'static [Sample] {
    match key {
        CategoryKey::Academia => &ACADEMIA,
        CategoryKey::Praia => &PRAIA,
        CategoryKey::Lingerie => &LINGERIE,
        CategoryKey::SexShop => &SEXSHOP,
    }
}

/// Sample catalog shown before anything has been saved.
pub fn default_document() -> CatalogDocument {
    let mut doc = CatalogDocument::default();

    for key in CategoryKey::ALL {
        *doc.list_mut(key) = samples(key)
            .iter()
            .enumerate()
            .map(|(rank, sample)| CatalogItem {
                id: make_id(),
                name: sample.name.to_string(),
                description: sample.description.to_string(),
                tag: sample.tag.to_string(),
                image: placeholder_image(sample.label, sample.from, sample.to),
                sort_index: rank,
            })
            .collect();
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_document_has_three_ranked_items_per_category() {
        let doc = default_document();

        for key in CategoryKey::ALL {
            let ranks: Vec<usize> = doc.list(key).iter().map(|i| i.sort_index).collect();
            assert_eq!(ranks, vec![0, 1, 2]);
        }

        let ids: HashSet<&str> = CategoryKey::ALL
            .iter()
            .flat_map(|key| doc.list(*key).iter().map(|i| i.id.as_str()))
            .collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn placeholder_is_an_encoded_svg_data_url() {
        let url = placeholder_image("A & B <C>", "#fff", "#000");

        assert!(url.starts_with("data:image/svg+xml;charset=UTF-8,%3Csvg"));
        assert!(url.contains("A%20%26amp%3B%20B%20%26lt%3BC%26gt%3B"));
        assert!(url.contains("Total%20Encanto"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn blank_names_get_the_generic_label() {
        assert!(fallback_image("  ").contains(FALLBACK_LABEL));
    }
}
