//! # Profit Plan
//!
//! 生產利潤最佳化：命令列前端的輸入讀取與結果報表

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use plan_core::{PlannerConfig, ProductionPlan, RawVariant};

/// 讀取 JSON 格式的原始型號表
pub fn load_table(path: &Path) -> Result<Vec<RawVariant>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("無法讀取型號表 {}", path.display()))?;
    parse_table(&text).with_context(|| format!("型號表格式錯誤 {}", path.display()))
}

/// 解析 JSON 陣列為原始型號表
pub fn parse_table(json: &str) -> Result<Vec<RawVariant>> {
    Ok(serde_json::from_str(json)?)
}

/// 讀取配置檔
pub fn load_config(path: &Path) -> Result<PlannerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("無法讀取配置檔 {}", path.display()))?;
    Ok(PlannerConfig::from_json(&text)?)
}

/// 產生文字報表（明細依單位利潤由高到低）
pub fn render_summary(plan: &ProductionPlan) -> String {
    let mut out = String::new();

    // 寫入 String 不會失敗
    let _ = writeln!(out, "最大月利潤: {:.2}", plan.total_profit);
    let _ = writeln!(
        out,
        "使用工時: {:.2}h / {}h（{:+.2}h 剩餘/不足）",
        plan.total_time,
        plan.capacity_hours,
        plan.capacity_slack()
    );
    let _ = writeln!(out, "求解狀態: {}", plan.solver_message);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<16} {:<8} {:>12} {:>12} {:>10}",
        "型號", "類別", "產量", "單位利潤", "工時(h)"
    );

    for line in plan.lines_by_unit_profit() {
        let quantity = if plan.rounded {
            format!("{:.0}", line.quantity)
        } else {
            format!("{:.2}", line.quantity)
        };
        let _ = writeln!(
            out,
            "{:<16} {:<8} {:>12} {:>12.2} {:>10.2}",
            line.variant_id,
            line.category.code(),
            quantity,
            line.unit_profit,
            line.line_time()
        );
    }

    if plan.has_warnings() {
        let _ = writeln!(out);
        for warning in &plan.warnings {
            let _ = writeln!(out, "警告: {}", warning.message);
        }
    }

    out
}
