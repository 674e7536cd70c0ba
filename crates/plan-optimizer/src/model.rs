//! 線性規劃模型建構

use plan_core::{CategoryTimes, PlanError, Result, Variant};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 線性規劃模型
///
/// minimize `objective · x`
/// subject to `capacity_row · x <= capacity_hours`, `bounds[i].0 <= x[i] <= bounds[i].1`
#[derive(Debug, Clone, PartialEq)]
pub struct LpModel {
    /// 目標係數 = -(單位利潤)，求解器為最小化
    pub objective: Vec<f64>,

    /// 產能限制係數 = 單位工時
    pub capacity_row: Vec<f64>,

    /// 產能限制右端值 = 可用工時
    pub capacity_hours: f64,

    /// 各型號產量上下限
    pub bounds: Vec<(f64, f64)>,
}

impl LpModel {
    /// 變數數量
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// 單位利潤（目標係數取負）
    pub fn unit_profits(&self) -> Vec<f64> {
        self.objective.iter().map(|c| -c).collect()
    }

    /// 單位工時
    pub fn unit_times(&self) -> &[f64] {
        &self.capacity_row
    }

    /// 以產量計算總利潤
    pub fn profit_of(&self, quantities: &[f64]) -> f64 {
        quantities
            .iter()
            .zip(&self.objective)
            .map(|(q, c)| q * -c)
            .sum()
    }

    /// 以產量計算總工時
    pub fn time_of(&self, quantities: &[f64]) -> f64 {
        quantities
            .iter()
            .zip(&self.capacity_row)
            .map(|(q, t)| q * t)
            .sum()
    }
}

/// 模型建構器
pub struct ModelBuilder<'a> {
    category_times: &'a CategoryTimes,
}

impl<'a> ModelBuilder<'a> {
    /// 以指定的工時表創建建構器
    pub fn new(category_times: &'a CategoryTimes) -> Self {
        Self { category_times }
    }

    /// 由型號表與可用工時組裝模型
    pub fn build(&self, variants: &[Variant], capacity_hours: f64) -> Result<LpModel> {
        if variants.is_empty() {
            return Err(PlanError::EmptyTable);
        }
        if !capacity_hours.is_finite() || capacity_hours < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "可用工時必須為非負有限值: {}",
                capacity_hours
            )));
        }

        let mut objective = Vec::with_capacity(variants.len());
        let mut capacity_row = Vec::with_capacity(variants.len());
        let mut bounds = Vec::with_capacity(variants.len());

        for variant in variants {
            check_variant(variant)?;
            let unit_profit = to_f64(&variant.id, "unit_profit", variant.unit_profit()?)?;
            let unit_time = self.category_times.unit_time(variant.category);

            objective.push(-unit_profit);
            capacity_row.push(unit_time);
            bounds.push((
                to_f64(&variant.id, "min_units", variant.min_units)?,
                to_f64(&variant.id, "max_units", variant.max_units)?,
            ));

            tracing::debug!(
                "型號 {}: 單位利潤 {}, 單位工時 {}h",
                variant.id,
                unit_profit,
                unit_time
            );
        }

        Ok(LpModel {
            objective,
            capacity_row,
            capacity_hours,
            bounds,
        })
    }
}

/// 售價與成本不可為負，銷量下限不可高於上限
fn check_variant(variant: &Variant) -> Result<()> {
    for (field, value) in [
        ("sale_price", variant.sale_price),
        ("cost_price", variant.cost_price),
    ] {
        if value < Decimal::ZERO {
            return Err(PlanError::InvalidInput(format!(
                "型號 {} 的 {} 不可為負: {}",
                variant.id, field, value
            )));
        }
    }
    if !variant.has_valid_bounds() {
        return Err(PlanError::InvalidInput(format!(
            "型號 {} 的最低銷量 {} 高於最高銷量 {}",
            variant.id, variant.min_units, variant.max_units
        )));
    }
    Ok(())
}

fn to_f64(id: &str, field: &str, value: Decimal) -> Result<f64> {
    value.to_f64().ok_or_else(|| {
        PlanError::InvalidInput(format!("型號 {} 的 {} 無法轉換為數值: {}", id, field, value))
    })
}
