use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use support_triage::{TriageConfig, TriagePipeline};

#[derive(Parser)]
#[command(name = "support-triage")]
#[command(about = "Triage a customer-support query and draft a reply")]
#[command(version)]
struct Cli {
    /// Config file (TOML); SUPPORT_TRIAGE_* environment variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full triage result as JSON instead of the reply text
    #[arg(long)]
    json: bool,

    /// Query text; read from stdin when omitted
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = TriageConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let pipeline = TriagePipeline::new(&config);

    let query = if cli.query.is_empty() {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read query from stdin")?;
        line.trim_end_matches(['\r', '\n']).to_string()
    } else {
        cli.query.join(" ")
    };

    let result = pipeline.run(&query);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.response);
    }

    Ok(())
}
