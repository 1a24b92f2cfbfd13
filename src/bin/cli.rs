//! LetterGraph CLI 工具
//!
//! 从邻接矩阵文件构建图，然后进入交互式菜单

use clap::Parser;
use colored::Colorize;
use lettergraph::cli::{ReadlineInput, ScriptedInput, Session};
use lettergraph::graph::Graph;
use lettergraph::import::MatrixLoader;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "lettergraph-cli")]
#[command(author, version, about = "LetterGraph 命令行工具")]
struct Args {
    /// 邻接矩阵文件
    #[arg(
        short,
        long,
        default_value = "data/graph_matrix.txt",
        env = "LETTERGRAPH_MATRIX"
    )]
    matrix: PathBuf,

    /// 从空图开始，不加载矩阵文件
    #[arg(long)]
    empty: bool,

    /// 直接从标准输入逐行读取（不使用行编辑器）
    #[arg(long)]
    plain: bool,

    /// 以 JSON 输出加载后的图并退出
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // 日志写到 stderr，不与菜单输出混在一起
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let graph = if args.empty {
        Graph::new()
    } else {
        let matrix = MatrixLoader::new().load(&args.matrix).map_err(|e| {
            eprintln!("{} {}", "Failed to load".red().bold(), args.matrix.display());
            e
        })?;
        Graph::from_matrix(&matrix)?
    };
    tracing::info!(vertices = graph.vertex_count(), edges = graph.count_edges(), "graph ready");

    if args.json {
        println!("{}", graph.snapshot().to_json()?);
        return Ok(());
    }

    println!("{}", "LetterGraph CLI".green().bold());
    println!("===============");
    println!("{}", graph.render());

    let mut session = Session::new(graph);
    let mut stdout = io::stdout();
    if args.plain {
        let stdin = io::stdin();
        let mut input = ScriptedInput::new(stdin.lock()).with_prompt_echo();
        session.run(&mut input, &mut stdout)?;
    } else {
        let mut input = ReadlineInput::new()?;
        session.run(&mut input, &mut stdout)?;
    }

    println!("{}", "Bye!".green());
    Ok(())
}
