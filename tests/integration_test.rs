//! 集成測試

use plan_core::*;
use plan_optimizer::{optimize, ProfitPlanner};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io::Write;

const EPS: f64 = 1e-6;

/// 測試用暫存目錄，離開作用域時刪除
struct ScratchDir(std::path::PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("profit-plan-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn raw(id: &str, category: &str, sale: Decimal, cost: Decimal, min: i64, max: i64) -> RawVariant {
    RawVariant::new(id, category, sale, cost, Decimal::from(min), Decimal::from(max))
}

#[test]
fn test_seed_table_ample_capacity() {
    // 場景：預設型號表，300h 足以讓所有型號達到最高銷量
    // 所需工時 36*0.45 + 28*0.4 + 24*0.3 + 50*0.45 = 57.1h
    let plan = optimize(&seed_table(), 300.0, true).unwrap();

    assert_eq!(plan.quantities(), vec![36.0, 28.0, 24.0, 50.0]);
    assert!((plan.total_time - 57.1).abs() < EPS);
    assert!((plan.capacity_slack() - 242.9).abs() < EPS);
    assert!(!plan.has_warnings());

    let expected = 36.0 * 18.77 + 28.0 * 15.31 + 24.0 * 9.51 + 50.0 * 25.0;
    assert!((plan.total_profit - expected).abs() < 1e-6);
}

#[test]
fn test_seed_table_tight_capacity() {
    // 場景：40h，最低銷量需 18*0.45 + 16*0.4 + 12*0.3 + 10*0.45 = 22.6h
    // 剩餘 17.4h 依利潤/工時比分配：Novo Modelo (55.6) 先用滿 40 件 = 18h > 17.4h
    let plan = optimize(&seed_table(), 40.0, false).unwrap();
    let q = plan.quantities();

    assert!((q[0] - 18.0).abs() < EPS);
    assert!((q[1] - 16.0).abs() < EPS);
    assert!((q[2] - 12.0).abs() < EPS);
    assert!((q[3] - (10.0 + 17.4 / 0.45)).abs() < EPS);
    assert!((plan.total_time - 40.0).abs() < EPS);
    assert!((plan.total_profit - plan.solver_objective).abs() < EPS);

    for line in &plan.lines {
        let lower: f64 = line.min_units.to_f64().unwrap();
        let upper: f64 = line.max_units.to_f64().unwrap();
        assert!(line.quantity >= lower - EPS && line.quantity <= upper + EPS);
    }
}

#[test]
fn test_seed_table_infeasible() {
    // 最低銷量需 22.6h > 20h
    let err = optimize(&seed_table(), 20.0, true).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Infeasible);
    assert!(err.user_message().contains("最低銷量"));
}

#[test]
fn test_messy_table() {
    // 缺名稱的列被捨棄，缺類別採用大尺寸，缺數值補 0
    let rows = vec![
        RawVariant {
            id: None,
            ..raw("ignored", "G", Decimal::from(100), Decimal::ZERO, 0, 100)
        },
        RawVariant {
            category: None,
            ..raw("NO-CAT", "", Decimal::from(30), Decimal::from(20), 0, 10)
        },
        RawVariant {
            id: Some("NO-MIN".to_string()),
            category: Some("P".to_string()),
            sale_price: Some(Decimal::from(15)),
            cost_price: Some(Decimal::from(10)),
            min_units: None,
            max_units: Some(Decimal::from(5)),
        },
    ];

    let plan = optimize(&rows, 100.0, true).unwrap();

    assert_eq!(plan.lines.len(), 2);
    assert_eq!(plan.lines[0].variant_id, "NO-CAT");
    assert_eq!(plan.lines[0].category, Category::Large);
    assert_eq!(plan.lines[0].unit_time, 0.45);
    assert_eq!(plan.quantities(), vec![10.0, 5.0]);
    assert_eq!(plan.total_profit, 125.0);
}

#[test]
fn test_custom_config_from_json() {
    let config = PlannerConfig::from_json(
        r#"{"category_times": {"Large": 1.0, "Medium": 0.5, "Small": 0.25}, "default_category": "Small"}"#,
    )
    .unwrap();
    let planner = ProfitPlanner::new(config).unwrap();

    let rows = vec![
        raw("L", "G", Decimal::from(20), Decimal::from(10), 0, 100),
        raw("S", "??", Decimal::from(14), Decimal::from(10), 0, 100),
    ];

    // S 無法辨識 → Small (0.25h)，利潤/工時比 16 > L 的 10
    let plan = planner.optimize(&rows, 10.0, false).unwrap();
    let q = plan.quantities();

    assert_eq!(plan.lines[1].category, Category::Small);
    assert!(q[0].abs() < EPS);
    assert!((q[1] - 40.0).abs() < EPS);
}

#[test]
fn test_table_file_round_trip() {
    let dir = ScratchDir::new("table");
    let path = dir.0.join("table.json");

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(serde_json::to_string(&seed_table()).unwrap().as_bytes())
        .unwrap();
    drop(file);

    let rows = profit_plan::load_table(&path).unwrap();
    assert_eq!(rows, seed_table());

    let plan = optimize(&rows, 300.0, true).unwrap();
    let summary = profit_plan::render_summary(&plan);
    assert!(summary.contains("Novo Modelo"));
}

#[test]
fn test_plan_serializes() {
    let plan = optimize(&seed_table(), 300.0, true).unwrap();

    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["rounded"], serde_json::Value::Bool(true));
    assert_eq!(json["lines"].as_array().unwrap().len(), 4);
    assert!(json["id"].is_string());
}
