//! 利潤最佳化主流程
//!
//! 正規化 → 模型建構 → 求解 → 取整後處理，資料單向流動，不保留任何請求間狀態。

use plan_core::{
    normalize, PlanError, PlanLine, PlannerConfig, ProductionPlan, RawVariant, Result, Variant,
};

use crate::model::ModelBuilder;
use crate::rounding::RoundingPostProcessor;
use crate::solver::{LpSolver, MicrolpSolver, SolveOutcome};

/// 利潤最佳化器
pub struct ProfitPlanner<S: LpSolver = MicrolpSolver> {
    /// 配置
    config: PlannerConfig,

    /// 線性規劃求解器
    solver: S,
}

impl ProfitPlanner<MicrolpSolver> {
    /// 以預設求解器創建最佳化器
    pub fn new(config: PlannerConfig) -> Result<Self> {
        Self::with_solver(config, MicrolpSolver::new())
    }
}

impl<S: LpSolver> ProfitPlanner<S> {
    /// 以指定求解器創建最佳化器
    pub fn with_solver(config: PlannerConfig, solver: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, solver })
    }

    /// 主最佳化入口
    ///
    /// # 參數
    /// * `rows` - 原始型號表
    /// * `capacity_hours` - 可用工時
    /// * `round_to_integers` - 是否將產量取整
    pub fn optimize(
        &self,
        rows: &[RawVariant],
        capacity_hours: f64,
        round_to_integers: bool,
    ) -> Result<ProductionPlan> {
        tracing::info!(
            "開始利潤最佳化：型號 {} 列，可用工時 {}h，取整 {}",
            rows.len(),
            capacity_hours,
            round_to_integers
        );

        tracing::debug!("Step 1: 輸入正規化");
        let variants = normalize(rows, &self.config)?;

        self.optimize_variants(&variants, capacity_hours, round_to_integers)
    }

    /// 對已正規化的型號表進行最佳化
    pub fn optimize_variants(
        &self,
        variants: &[Variant],
        capacity_hours: f64,
        round_to_integers: bool,
    ) -> Result<ProductionPlan> {
        let start_time = std::time::Instant::now();

        tracing::debug!("Step 2: 模型建構");
        let model = ModelBuilder::new(&self.config.category_times).build(variants, capacity_hours)?;

        tracing::debug!("Step 3: 求解（{}）", self.solver.name());
        let solution = match self.solver.solve(&model)? {
            SolveOutcome::Optimal(solution) => solution,
            SolveOutcome::Infeasible(message) => {
                tracing::info!("無可行解: {}", message);
                return Err(PlanError::Infeasible(message));
            }
        };
        tracing::debug!("連續最佳利潤: {}", solution.profit());

        tracing::debug!("Step 4: 取整後處理");
        let processor = RoundingPostProcessor::new(self.config.capacity_tolerance);
        let quantities = processor.apply(&solution.values, round_to_integers);
        let ids: Vec<&str> = variants.iter().map(|v| v.id.as_str()).collect();
        let warnings = processor.check(&model, &ids, &quantities);

        let unit_profits = model.unit_profits();
        let lines = variants
            .iter()
            .zip(quantities)
            .zip(unit_profits.iter().zip(model.unit_times()))
            .map(|((variant, quantity), (&unit_profit, &unit_time))| PlanLine {
                variant_id: variant.id.clone(),
                category: variant.category,
                quantity,
                unit_profit,
                unit_time,
                min_units: variant.min_units,
                max_units: variant.max_units,
            })
            .collect();

        let plan = ProductionPlan::new(
            lines,
            capacity_hours,
            round_to_integers,
            solution.profit(),
            solution.message,
        )
        .with_warnings(warnings);

        tracing::info!("利潤最佳化完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "總利潤 {:.2}，使用工時 {:.2}h / {}h",
            plan.total_profit,
            plan.total_time,
            plan.capacity_hours
        );

        Ok(plan)
    }
}

/// 以預設配置執行單次最佳化
pub fn optimize(
    rows: &[RawVariant],
    capacity_hours: f64,
    round_to_integers: bool,
) -> Result<ProductionPlan> {
    ProfitPlanner::new(PlannerConfig::default())?.optimize(rows, capacity_hours, round_to_integers)
}
