//! 計劃配置模型

use serde::{Deserialize, Serialize};

use crate::{Category, CategoryTimes, PlanError, Result};

/// 最佳化器配置（程序層級的靜態配置，不屬於單次請求）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 類別單位工時表
    pub category_times: CategoryTimes,

    /// 求解後檢查產能與上下限時的容許誤差（小時 / 件）
    pub capacity_tolerance: f64,

    /// 缺少或無法辨識類別時採用的類別
    pub default_category: Category,
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            category_times: CategoryTimes::standard(),
            capacity_tolerance: 1e-6,
            default_category: Category::Large,
        }
    }

    /// 建構器模式：設置工時表
    pub fn with_category_times(mut self, times: CategoryTimes) -> Self {
        self.category_times = times;
        self
    }

    /// 建構器模式：設置容許誤差
    pub fn with_capacity_tolerance(mut self, tolerance: f64) -> Self {
        self.capacity_tolerance = tolerance;
        self
    }

    /// 建構器模式：設置預設類別
    pub fn with_default_category(mut self, category: Category) -> Self {
        self.default_category = category;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if !self.capacity_tolerance.is_finite() || self.capacity_tolerance < 0.0 {
            return Err(PlanError::InvalidConfig(format!(
                "容許誤差必須為非負有限值: {}",
                self.capacity_tolerance
            )));
        }
        self.category_times.validate()
    }

    /// 從 JSON 字串讀取配置
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PlanError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
