//! 取整後處理
//!
//! 將連續解四捨五入為整數產量（銀行家捨入：.5 取最近偶數）。取整後不重新求解，
//! 也不強制回到上下限或產能內；偏離時只產生警告，利潤與工時由最終產量重新計算。

use plan_core::{PlanWarning, WarningKind};

use crate::model::LpModel;

/// 單一數值取整（.5 取最近偶數），-0 正規化為 0
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even() + 0.0
}

/// 取整後處理器
#[derive(Debug, Clone, Copy)]
pub struct RoundingPostProcessor {
    /// 檢查上下限與產能時的容許誤差
    tolerance: f64,
}

impl RoundingPostProcessor {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// 依開關處理連續解；關閉時原樣返回
    pub fn apply(&self, values: &[f64], enabled: bool) -> Vec<f64> {
        if enabled {
            values.iter().map(|&v| round_half_even(v)).collect()
        } else {
            values.to_vec()
        }
    }

    /// 檢查最終產量是否偏離上下限或超出產能
    ///
    /// # 參數
    /// * `ids` - 型號名稱，與模型變數順序一致
    pub fn check(&self, model: &LpModel, ids: &[&str], quantities: &[f64]) -> Vec<PlanWarning> {
        let mut warnings = Vec::new();

        for ((&id, &quantity), &(lower, upper)) in ids.iter().zip(quantities).zip(&model.bounds) {
            if quantity < lower - self.tolerance {
                warnings.push(PlanWarning::new(
                    WarningKind::BelowMinimum,
                    Some(id.to_string()),
                    format!("型號 {} 取整後產量 {} 低於最低銷量 {}", id, quantity, lower),
                ));
            } else if quantity > upper + self.tolerance {
                warnings.push(PlanWarning::new(
                    WarningKind::AboveMaximum,
                    Some(id.to_string()),
                    format!("型號 {} 取整後產量 {} 高於最高銷量 {}", id, quantity, upper),
                ));
            }
        }

        let total_time = model.time_of(quantities);
        if total_time > model.capacity_hours + self.tolerance {
            warnings.push(PlanWarning::new(
                WarningKind::OverCapacity,
                None,
                format!(
                    "取整後總工時 {:.2}h 超出可用工時 {}h",
                    total_time, model.capacity_hours
                ),
            ));
        }

        for warning in &warnings {
            tracing::warn!("{}", warning.message);
        }

        warnings
    }
}
