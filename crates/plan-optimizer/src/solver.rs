//! 線性規劃求解器介面
//!
//! 求解器視為黑盒：`minimize c·x s.t. A x <= b, lower <= x <= upper`，
//! 返回最佳解或不可行。每次請求只求解一次，不重試。

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem, Variable};
use plan_core::{PlanError, Result};

use crate::model::LpModel;

/// 連續最佳解
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// 各變數值（與模型變數順序一致）
    pub values: Vec<f64>,

    /// 最小化目標值
    pub objective: f64,

    /// 求解器狀態訊息
    pub message: String,
}

impl LpSolution {
    /// 最大化利潤（目標值取負）
    pub fn profit(&self) -> f64 {
        -self.objective
    }
}

/// 求解結果
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// 找到最佳解
    Optimal(LpSolution),
    /// 上下限與產能限制無法同時滿足
    Infeasible(String),
}

/// 線性規劃求解器
pub trait LpSolver: Send + Sync {
    /// 求解器名稱（記錄用）
    fn name(&self) -> &'static str;

    /// 求解模型
    ///
    /// 格式錯誤的模型或求解器內部錯誤返回 [`PlanError::InvalidInput`]。
    fn solve(&self, model: &LpModel) -> Result<SolveOutcome>;
}

/// 檢查模型維度與數值，避免格式錯誤的資料進入求解器
pub fn validate_model(model: &LpModel) -> Result<()> {
    let n = model.num_vars();
    if model.capacity_row.len() != n || model.bounds.len() != n {
        return Err(PlanError::InvalidInput(format!(
            "模型維度不一致: 目標 {} 個, 限制係數 {} 個, 上下限 {} 組",
            n,
            model.capacity_row.len(),
            model.bounds.len()
        )));
    }
    if !model.capacity_hours.is_finite() || model.capacity_hours < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "可用工時無效: {}",
            model.capacity_hours
        )));
    }

    for (i, ((&c, &t), &(lower, upper))) in model
        .objective
        .iter()
        .zip(&model.capacity_row)
        .zip(&model.bounds)
        .enumerate()
    {
        if !c.is_finite() || !t.is_finite() || t < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "第 {} 個變數的係數無效: 目標 {}, 工時 {}",
                i, c, t
            )));
        }
        if !lower.is_finite() || !upper.is_finite() || lower < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "第 {} 個變數的上下限無效: ({}, {})",
                i, lower, upper
            )));
        }
        if lower > upper {
            return Err(PlanError::InvalidInput(format!(
                "第 {} 個變數的最低銷量 {} 大於最高銷量 {}",
                i, lower, upper
            )));
        }
    }

    Ok(())
}

/// 基於 microlp（單純形法）的求解器
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl LpSolver for MicrolpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &LpModel) -> Result<SolveOutcome> {
        validate_model(model)?;

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<Variable> = model
            .objective
            .iter()
            .zip(&model.bounds)
            .map(|(&c, &bounds)| problem.add_var(c, bounds))
            .collect();

        // 係數全為 0 時產能限制恆成立（可用工時已檢查為非負）
        let mut capacity = LinearExpr::empty();
        let mut has_terms = false;
        for (&var, &t) in vars.iter().zip(&model.capacity_row) {
            if t != 0.0 {
                capacity.add(var, t);
                has_terms = true;
            }
        }
        if has_terms {
            problem.add_constraint(capacity, ComparisonOp::Le, model.capacity_hours);
        }

        match problem.solve() {
            Ok(solution) => {
                let values = vars.iter().map(|&v| solution[v]).collect();
                Ok(SolveOutcome::Optimal(LpSolution {
                    values,
                    objective: solution.objective(),
                    message: "最佳化成功完成（最佳解）".to_string(),
                }))
            }
            Err(microlp::Error::Infeasible) => {
                Ok(SolveOutcome::Infeasible(microlp::Error::Infeasible.to_string()))
            }
            Err(err) => {
                tracing::error!("求解器 {} 失敗: {}", self.name(), err);
                Err(PlanError::InvalidInput(format!("求解器錯誤: {}", err)))
            }
        }
    }
}
