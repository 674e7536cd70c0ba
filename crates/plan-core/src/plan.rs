//! 生產計劃模型（最佳化結果）

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Category;

/// 單一型號的計劃明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLine {
    /// 型號名稱
    pub variant_id: String,

    /// 尺寸類別
    pub category: Category,

    /// 計劃產量
    pub quantity: f64,

    /// 單位利潤
    pub unit_profit: f64,

    /// 單位工時（小時）
    pub unit_time: f64,

    /// 最低銷量
    pub min_units: Decimal,

    /// 最高銷量
    pub max_units: Decimal,
}

impl PlanLine {
    /// 此型號佔用工時 = 單位工時 × 產量
    pub fn line_time(&self) -> f64 {
        self.unit_time * self.quantity
    }

    /// 此型號利潤 = 單位利潤 × 產量
    pub fn line_profit(&self) -> f64 {
        self.unit_profit * self.quantity
    }
}

/// 計劃警告類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// 取整後低於最低銷量
    BelowMinimum,
    /// 取整後高於最高銷量
    AboveMaximum,
    /// 取整後超出可用工時
    OverCapacity,
}

/// 計劃警告（僅提示，不修正計劃）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanWarning {
    pub kind: WarningKind,
    /// 相關型號，產能警告時為 None
    pub variant_id: Option<String>,
    pub message: String,
}

impl PlanWarning {
    pub fn new(kind: WarningKind, variant_id: Option<String>, message: String) -> Self {
        Self {
            kind,
            variant_id,
            message,
        }
    }
}

/// 生產計劃（單次最佳化的結果，交給呈現層後即丟棄）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 計劃ID
    pub id: Uuid,

    /// 產生時間
    pub generated_at: DateTime<Utc>,

    /// 可用工時
    pub capacity_hours: f64,

    /// 產量是否已取整
    pub rounded: bool,

    /// 各型號明細（與輸入表順序一致）
    pub lines: Vec<PlanLine>,

    /// 總利潤（由最終產量重新計算）
    pub total_profit: f64,

    /// 總工時（由最終產量重新計算）
    pub total_time: f64,

    /// 求解器回報的最佳目標值（已轉回最大化利潤）
    pub solver_objective: f64,

    /// 求解器狀態訊息
    pub solver_message: String,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,
}

impl ProductionPlan {
    /// 由明細創建計劃，總利潤與總工時由產量重新計算
    pub fn new(
        lines: Vec<PlanLine>,
        capacity_hours: f64,
        rounded: bool,
        solver_objective: f64,
        solver_message: String,
    ) -> Self {
        let (total_profit, total_time) = Self::totals(&lines);
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            capacity_hours,
            rounded,
            lines,
            total_profit,
            total_time,
            solver_objective,
            solver_message,
            warnings: Vec::new(),
        }
    }

    /// 建構器模式：設置警告
    pub fn with_warnings(mut self, warnings: Vec<PlanWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// 計算總利潤與總工時
    pub fn totals(lines: &[PlanLine]) -> (f64, f64) {
        let profit: f64 = lines.iter().map(|l| l.quantity * l.unit_profit).sum();
        let time: f64 = lines.iter().map(|l| l.quantity * l.unit_time).sum();
        (profit, time)
    }

    /// 各型號產量
    pub fn quantities(&self) -> Vec<f64> {
        self.lines.iter().map(|l| l.quantity).collect()
    }

    /// 剩餘工時（負值表示超出）
    pub fn capacity_slack(&self) -> f64 {
        self.capacity_hours - self.total_time
    }

    /// 產能使用率；可用工時為 0 時返回 0
    pub fn utilization(&self) -> f64 {
        if self.capacity_hours > 0.0 {
            self.total_time / self.capacity_hours
        } else {
            0.0
        }
    }

    /// 依單位利潤由高到低排序的明細（呈現順序）
    pub fn lines_by_unit_profit(&self) -> Vec<&PlanLine> {
        let mut lines: Vec<&PlanLine> = self.lines.iter().collect();
        lines.sort_by(|a, b| b.unit_profit.total_cmp(&a.unit_profit));
        lines
    }

    /// 是否有警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
