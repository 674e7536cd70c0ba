//! 產品型號模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Category, PlanError, Result};

/// 原始型號資料列（來自可編輯表格，任何欄位都可能缺漏）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVariant {
    /// 型號名稱
    pub id: Option<String>,

    /// 類別標籤（如 "G" / "Large"）
    pub category: Option<String>,

    /// 售價
    pub sale_price: Option<Decimal>,

    /// 成本
    pub cost_price: Option<Decimal>,

    /// 最低銷量
    pub min_units: Option<Decimal>,

    /// 最高銷量
    pub max_units: Option<Decimal>,
}

impl RawVariant {
    /// 創建完整的原始資料列
    pub fn new(
        id: &str,
        category: &str,
        sale_price: Decimal,
        cost_price: Decimal,
        min_units: Decimal,
        max_units: Decimal,
    ) -> Self {
        Self {
            id: Some(id.to_string()),
            category: Some(category.to_string()),
            sale_price: Some(sale_price),
            cost_price: Some(cost_price),
            min_units: Some(min_units),
            max_units: Some(max_units),
        }
    }
}

/// 產品型號（正規化後）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// 型號名稱（不強制唯一）
    pub id: String,

    /// 尺寸類別
    pub category: Category,

    /// 售價
    pub sale_price: Decimal,

    /// 成本
    pub cost_price: Decimal,

    /// 最低銷量
    pub min_units: Decimal,

    /// 最高銷量
    pub max_units: Decimal,
}

impl Variant {
    /// 創建新的型號，銷量上下限預設為 0
    pub fn new(id: String, category: Category, sale_price: Decimal, cost_price: Decimal) -> Self {
        Self {
            id,
            category,
            sale_price,
            cost_price,
            min_units: Decimal::ZERO,
            max_units: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置銷量上下限
    pub fn with_bounds(mut self, min_units: Decimal, max_units: Decimal) -> Self {
        self.min_units = min_units;
        self.max_units = max_units;
        self
    }

    /// 單位利潤 = 售價 - 成本；超出數值範圍時返回錯誤
    pub fn unit_profit(&self) -> Result<Decimal> {
        self.sale_price
            .checked_sub(self.cost_price)
            .ok_or_else(|| {
                PlanError::InvalidInput(format!(
                    "型號 {} 的單位利潤超出數值範圍: {} - {}",
                    self.id, self.sale_price, self.cost_price
                ))
            })
    }

    /// 檢查上下限是否一致
    pub fn has_valid_bounds(&self) -> bool {
        self.min_units <= self.max_units
    }
}
