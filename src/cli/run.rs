use crate::cli::args::Cli;
use crate::core::engine::{self, RunConfig};
use crate::core::timing::{fmt_dur, log_stage, stage, stats_enabled};
use crate::report;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::time::Instant;

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(args: Cli) -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    stage(stats, "preflight", || {
        if args.input.as_os_str() == "-" {
            bail!("stdin is not supported; provide a FASTA file path");
        }
        if args.threads == 0 {
            bail!("--threads must be >= 1");
        }
        Ok(())
    })?;

    let input_size = fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);

    let config = RunConfig {
        input: args.input.clone(),
        threads: args.threads,
    };

    let t_engine = Instant::now();
    let output = match engine::run(&config) {
        Ok(output) => output,
        Err(e) if e.is_malformed_input() => {
            return Err(e).with_context(|| format!("invalid input {}", args.input.display()));
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to compute statistics for {}", args.input.display())
            });
        }
    };
    log_stage(stats, "engine", t_engine);
    if stats {
        eprintln!(
            "GENOME_STATS input={} bytes={} sequences={} genome_size={} threads={}",
            args.input.display(),
            input_size,
            output.agg.scaffold_count(),
            output.agg.genome_size,
            args.threads
        );
    }

    let t_report = Instant::now();
    report::stats_txt::write(&args.output, &output.summary)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log_stage(stats, "report", t_report);

    println!("Genome statistics written to {}", args.output.display());

    if stats {
        eprintln!("GENOME_STATS total={}", fmt_dur(t0.elapsed()));
    }

    Ok(())
}
