//! # Plan Core
//!
//! 生產計劃核心資料模型與類型定義

pub mod category;
pub mod config;
pub mod normalize;
pub mod plan;
pub mod variant;

// Re-export 主要類型
pub use category::{Category, CategoryTimes};
pub use config::PlannerConfig;
pub use normalize::{normalize, seed_table};
pub use plan::{PlanLine, PlanWarning, ProductionPlan, WarningKind};
pub use variant::{RawVariant, Variant};

/// 生產計劃錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("請至少填寫一個有效的產品型號")]
    EmptyTable,

    #[error("找不到可行的生產計劃: {0}")]
    Infeasible(String),

    #[error("輸入資料錯誤: {0}")]
    InvalidInput(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),
}

/// 錯誤分類（提供給呈現層）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 正規化後沒有任何有效型號
    EmptyInput,
    /// 最低銷量與可用工時無法同時滿足
    Infeasible,
    /// 送進求解器的資料格式錯誤，或求解器本身失敗
    SolverError,
    /// 配置錯誤
    Config,
}

impl PlanError {
    /// 錯誤分類
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::EmptyTable => ErrorKind::EmptyInput,
            PlanError::Infeasible(_) => ErrorKind::Infeasible,
            PlanError::InvalidInput(_) => ErrorKind::SolverError,
            PlanError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    /// 可直接顯示給使用者的訊息
    pub fn user_message(&self) -> String {
        match self {
            PlanError::Infeasible(_) => format!(
                "{}\n請確認在可用工時內能否達成各型號的最低銷量。",
                self
            ),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
