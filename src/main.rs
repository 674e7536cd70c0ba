use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use plan_core::{seed_table, PlannerConfig};
use plan_optimizer::ProfitPlanner;
use tracing::Level;

/// 生產利潤最佳化：在可用工時與銷量上下限內求最大月利潤
#[derive(Parser, Debug)]
#[command(name = "profit-plan", version, about)]
struct Args {
    /// 型號表（JSON 陣列）；未提供時使用預設型號表
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// 配置檔（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 每月可用工時
    #[arg(long, default_value_t = 300.0)]
    capacity_hours: f64,

    /// 不將產量取整
    #[arg(long)]
    no_round: bool,

    /// 以 JSON 輸出計劃
    #[arg(long)]
    json: bool,

    /// 日誌詳細程度（-v info, -vv debug, -vvv trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => profit_plan::load_config(path)?,
        None => PlannerConfig::default(),
    };
    let rows = match &args.table {
        Some(path) => profit_plan::load_table(path)?,
        None => {
            tracing::info!("未提供型號表，使用預設型號表");
            seed_table()
        }
    };

    let planner = ProfitPlanner::new(config)?;
    match planner.optimize(&rows, args.capacity_hours, !args.no_round) {
        Ok(plan) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", profit_plan::render_summary(&plan));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!("最佳化失敗: {:?}", err.kind());
            eprintln!("{}", err.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
