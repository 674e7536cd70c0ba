//! 尺寸類別與單位工時表

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{PlanError, Result};

/// 尺寸類別（決定每單位生產工時）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 大（G）
    Large,
    /// 中（M）
    Medium,
    /// 小（P）
    Small,
}

impl Category {
    /// 所有類別，由大到小
    pub const ALL: [Category; 3] = [Category::Large, Category::Medium, Category::Small];

    /// 簡寫標籤
    pub fn code(&self) -> &'static str {
        match self {
            Category::Large => "G",
            Category::Medium => "M",
            Category::Small => "P",
        }
    }

    /// 寬鬆解析類別標籤，無法辨識時返回 None
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "large" | "l" | "g" | "grande" => Some(Category::Large),
            "medium" | "m" | "médio" | "medio" => Some(Category::Medium),
            "small" | "s" | "p" | "pequeno" => Some(Category::Small),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Large => "Large",
            Category::Medium => "Medium",
            Category::Small => "Small",
        };
        f.write_str(name)
    }
}

/// 類別 → 每單位工時（小時）對照表
///
/// 以不可變的配置值傳入模型建構器，而非全域常數。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTimes {
    hours_per_unit: BTreeMap<Category, f64>,
}

impl CategoryTimes {
    /// 標準工時：大 9h、中 8h、小 6h（每批 20 件）
    pub fn standard() -> Self {
        Self::empty()
            .with_unit_time(Category::Large, 0.45)
            .with_unit_time(Category::Medium, 0.40)
            .with_unit_time(Category::Small, 0.30)
    }

    /// 空的工時表
    pub fn empty() -> Self {
        Self {
            hours_per_unit: BTreeMap::new(),
        }
    }

    /// 由批量工時推算單位工時
    ///
    /// # 參數
    /// * `batch_size` - 每批件數
    /// * `hours_per_batch` - 每個類別生產一批所需工時
    pub fn from_batch(batch_size: u32, hours_per_batch: &[(Category, f64)]) -> Result<Self> {
        if batch_size == 0 {
            return Err(PlanError::InvalidConfig("批量必須大於 0".to_string()));
        }

        let times = hours_per_batch
            .iter()
            .fold(Self::empty(), |times, &(category, hours)| {
                times.with_unit_time(category, hours / f64::from(batch_size))
            });
        times.validate()?;
        Ok(times)
    }

    /// 建構器模式：設置類別單位工時
    pub fn with_unit_time(mut self, category: Category, hours: f64) -> Self {
        self.hours_per_unit.insert(category, hours);
        self
    }

    /// 查詢單位工時；表中沒有的類別視為 0（不佔用產能）
    pub fn unit_time(&self, category: Category) -> f64 {
        match self.hours_per_unit.get(&category) {
            Some(&hours) => hours,
            None => {
                tracing::warn!("類別 {} 不在工時表中，單位工時以 0 計算", category);
                0.0
            }
        }
    }

    /// 驗證工時皆為有限且非負
    pub fn validate(&self) -> Result<()> {
        for (category, &hours) in &self.hours_per_unit {
            if !hours.is_finite() || hours < 0.0 {
                return Err(PlanError::InvalidConfig(format!(
                    "類別 {} 的單位工時無效: {}",
                    category, hours
                )));
            }
        }
        Ok(())
    }
}

impl Default for CategoryTimes {
    fn default() -> Self {
        Self::standard()
    }
}
