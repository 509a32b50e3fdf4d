//! lpp-facts CLI - report installed AIX filesets

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use lpp_facts::cli::{Args, SubCommand};
use lpp_facts::{explain_query, facts_from_output, format_output, gather_facts, FactsContext, OutputFormat, SystemRunner};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "lpp_facts=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let ctx = FactsContext {
        lslpp: args.lslpp,
        output_format: if args.json { OutputFormat::Json } else { OutputFormat::Human },
    };

    match args.command {
        SubCommand::Query { selection } => {
            let request = selection.to_criteria().validate()?;
            let facts = gather_facts(&request, &ctx, &SystemRunner)?;
            println!("{}", format_output(&facts, &ctx.output_format)?);
        }

        SubCommand::Parse { file } => {
            let content = match file.as_deref() {
                Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                _ => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            let facts = facts_from_output(&content)?;
            println!("{}", format_output(&facts, &ctx.output_format)?);
        }

        SubCommand::Explain { selection } => {
            let request = selection.to_criteria().validate()?;
            let command = explain_query(&request, &ctx);
            if ctx.output_format == OutputFormat::Json {
                let value = serde_json::json!({ "command": command, "request": request });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", command);
            }
        }
    }

    Ok(())
}
