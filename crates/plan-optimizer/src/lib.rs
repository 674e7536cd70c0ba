//! # Plan Optimizer
//!
//! 利潤最佳化引擎（模型建構、線性規劃求解、取整後處理）

pub mod model;
pub mod planner;
pub mod rounding;
pub mod solver;

// Re-export 主要類型
pub use model::{LpModel, ModelBuilder};
pub use planner::{optimize, ProfitPlanner};
pub use rounding::RoundingPostProcessor;
pub use solver::{LpSolution, LpSolver, MicrolpSolver, SolveOutcome};
