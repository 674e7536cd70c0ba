//! 輸入正規化
//!
//! 將可編輯表格的原始資料列整理為模型建構器可用的型號表。預設規則：
//! - 型號名稱去除前後空白，空白或缺漏的資料列整列捨棄
//! - 類別缺漏或無法辨識時，採用配置中的預設類別（大）
//! - 售價、成本、最低銷量、最高銷量缺漏時以 0 補齊

use rust_decimal::Decimal;

use crate::{Category, PlanError, PlannerConfig, RawVariant, Result, Variant};

/// 正規化原始型號表
///
/// 正規化後沒有任何有效資料列時返回 [`PlanError::EmptyTable`]。
pub fn normalize(rows: &[RawVariant], config: &PlannerConfig) -> Result<Vec<Variant>> {
    let mut variants = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let id = match row.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                tracing::debug!("第 {} 列缺少型號名稱，捨棄", index);
                continue;
            }
        };

        let category = resolve_category(&id, row.category.as_deref(), config.default_category);

        variants.push(Variant {
            sale_price: or_zero(&id, "sale_price", row.sale_price),
            cost_price: or_zero(&id, "cost_price", row.cost_price),
            min_units: or_zero(&id, "min_units", row.min_units),
            max_units: or_zero(&id, "max_units", row.max_units),
            id,
            category,
        });
    }

    if variants.is_empty() {
        return Err(PlanError::EmptyTable);
    }

    tracing::debug!(
        "正規化完成：輸入 {} 列，有效 {} 列",
        rows.len(),
        variants.len()
    );

    Ok(variants)
}

fn resolve_category(id: &str, label: Option<&str>, default: Category) -> Category {
    match label {
        None => {
            tracing::warn!("型號 {} 缺少類別，採用預設類別 {}", id, default);
            default
        }
        Some(label) => Category::parse_label(label).unwrap_or_else(|| {
            tracing::warn!("型號 {} 的類別 {:?} 無法辨識，採用預設類別 {}", id, label, default);
            default
        }),
    }
}

fn or_zero(id: &str, field: &str, value: Option<Decimal>) -> Decimal {
    value.unwrap_or_else(|| {
        tracing::warn!("型號 {} 缺少欄位 {}，以 0 補齊", id, field);
        Decimal::ZERO
    })
}

/// 預設的起始型號表
pub fn seed_table() -> Vec<RawVariant> {
    vec![
        RawVariant::new(
            "B1 G",
            "G",
            Decimal::new(4558, 2),
            Decimal::new(2681, 2),
            Decimal::from(18),
            Decimal::from(36),
        ),
        RawVariant::new(
            "B2 M",
            "M",
            Decimal::new(3718, 2),
            Decimal::new(2187, 2),
            Decimal::from(16),
            Decimal::from(28),
        ),
        RawVariant::new(
            "B1 P",
            "P",
            Decimal::new(2310, 2),
            Decimal::new(1359, 2),
            Decimal::from(12),
            Decimal::from(24),
        ),
        RawVariant::new(
            "Novo Modelo",
            "G",
            Decimal::new(5000, 2),
            Decimal::new(2500, 2),
            Decimal::from(10),
            Decimal::from(50),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    #[test]
    fn test_seed_table_normalizes() {
        let variants = normalize(&seed_table(), &config()).unwrap();

        assert_eq!(variants.len(), 4);
        assert_eq!(variants[0].id, "B1 G");
        assert_eq!(variants[0].category, Category::Large);
        assert_eq!(variants[1].category, Category::Medium);
        assert_eq!(variants[2].category, Category::Small);
        assert_eq!(variants[3].unit_profit().unwrap(), Decimal::from(25));
    }

    #[test]
    fn test_missing_id_dropped() {
        let rows = vec![
            RawVariant {
                id: None,
                ..seed_table()[0].clone()
            },
            RawVariant {
                id: Some("   ".to_string()),
                ..seed_table()[1].clone()
            },
            seed_table()[2].clone(),
        ];

        let variants = normalize(&rows, &config()).unwrap();

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].id, "B1 P");
    }

    #[test]
    fn test_id_is_trimmed() {
        let rows = vec![RawVariant {
            id: Some("  B9 M ".to_string()),
            ..seed_table()[1].clone()
        }];

        let variants = normalize(&rows, &config()).unwrap();
        assert_eq!(variants[0].id, "B9 M");
    }

    #[test]
    fn test_missing_category_defaults_to_large() {
        let rows = vec![RawVariant {
            id: Some("NEW".to_string()),
            ..Default::default()
        }];

        let variants = normalize(&rows, &config()).unwrap();

        assert_eq!(variants[0].category, Category::Large);
    }

    #[test]
    fn test_unknown_category_defaults_to_large() {
        // 無法辨識的類別不捨棄，也不給 0 工時，而是採用預設類別
        let rows = vec![RawVariant {
            category: Some("XL".to_string()),
            ..seed_table()[2].clone()
        }];

        let variants = normalize(&rows, &config()).unwrap();

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].category, Category::Large);
        assert_eq!(config().category_times.unit_time(variants[0].category), 0.45);
    }

    #[test]
    fn test_custom_default_category() {
        let config = PlannerConfig::default().with_default_category(Category::Small);
        let rows = vec![RawVariant {
            id: Some("NEW".to_string()),
            ..Default::default()
        }];

        let variants = normalize(&rows, &config).unwrap();
        assert_eq!(variants[0].category, Category::Small);
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let rows = vec![RawVariant {
            id: Some("NEW".to_string()),
            category: Some("M".to_string()),
            sale_price: Some(Decimal::from(40)),
            ..Default::default()
        }];

        let variants = normalize(&rows, &config()).unwrap();
        let variant = &variants[0];

        assert_eq!(variant.sale_price, Decimal::from(40));
        assert_eq!(variant.cost_price, Decimal::ZERO);
        assert_eq!(variant.min_units, Decimal::ZERO);
        assert_eq!(variant.max_units, Decimal::ZERO);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(normalize(&[], &config()), Err(PlanError::EmptyTable));

        let rows = vec![RawVariant::default(), RawVariant::default()];
        assert_eq!(normalize(&rows, &config()), Err(PlanError::EmptyTable));
    }
}
