//! 預設型號表的利潤最佳化示例

use plan_core::{seed_table, PlannerConfig};
use plan_optimizer::ProfitPlanner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 生產利潤最佳化示例 ===\n");

    let rows = seed_table();
    println!("型號清單:");
    for row in &rows {
        println!(
            "  - 型號: {}, 類別: {}, 售價: {}, 成本: {}",
            row.id.as_deref().unwrap_or("-"),
            row.category.as_deref().unwrap_or("-"),
            row.sale_price.unwrap_or_default(),
            row.cost_price.unwrap_or_default()
        );
    }

    let planner = ProfitPlanner::new(PlannerConfig::default())?;

    for round in [false, true] {
        println!("\n--- 取整: {} ---", round);
        let plan = planner.optimize(&rows, 300.0, round)?;
        print!("{}", profit_plan::render_summary(&plan));
    }

    // 最低銷量需要 22.6h，可用工時不足
    println!("\n--- 可用工時 20h ---");
    match planner.optimize(&rows, 20.0, true) {
        Ok(plan) => print!("{}", profit_plan::render_summary(&plan)),
        Err(err) => println!("{}", err.user_message()),
    }

    Ok(())
}
