use crate::core::analyze::analyze;
use crate::core::error::{Result, StatsError};
use crate::core::fasta::{self, SequenceRecord};
use crate::core::metrics::Agg;
use crate::core::model::SequenceStats;
use crate::core::summary::Summary;
use crate::core::timing::{log_stage, stage, stats_enabled};
use crossbeam_channel as channel;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

pub struct RunConfig {
    pub input: PathBuf,
    pub threads: usize,
}

pub struct RunOutput {
    pub agg: Agg,
    pub summary: Summary,
}

pub fn run(cfg: &RunConfig) -> Result<RunOutput> {
    let stats = stats_enabled();
    let t_total = Instant::now();

    let records = stage(stats, "engine.load", || fasta::read_path(&cfg.input))?;
    if stats && let Some(longest) = records.iter().max_by_key(|r| r.seq.len()) {
        eprintln!(
            "GENOME_STATS sequences={} longest={} length={}",
            records.len(),
            longest.id,
            longest.seq.len()
        );
    }
    let agg = stage(stats, "engine.analyze", || analyze_records(&records, cfg.threads))?;
    drop(records);
    let summary = stage(stats, "engine.summary", || Summary::build(&agg));

    log_stage(stats, "engine.total", t_total);
    Ok(RunOutput { agg, summary })
}

/// Analyzes every record and folds the results in record order.
///
/// Uses a pool of `threads` workers when there is more than one thread and
/// more than one record; otherwise runs on the calling thread.
pub fn analyze_records(records: &[SequenceRecord], threads: usize) -> Result<Agg> {
    if threads <= 1 || records.len() < 2 {
        let mut agg = Agg::new();
        for record in records {
            agg.update(&analyze(&record.seq));
        }
        return Ok(agg);
    }
    let parts = analyze_parallel(records, threads)?;
    Ok(parts.iter().collect())
}

fn analyze_parallel(records: &[SequenceRecord], threads: usize) -> Result<Vec<SequenceStats>> {
    let workers = threads.min(records.len());

    let parts = thread::scope(|s| -> Result<Vec<Option<SequenceStats>>> {
        let (job_tx, job_rx) = channel::bounded::<usize>(workers * 2);
        let (result_tx, result_rx) = channel::unbounded::<(usize, SequenceStats)>();

        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let rx = job_rx.clone();
            let tx = result_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("analyze-{}", id))
                .spawn_scoped(s, move || {
                    for index in rx.iter() {
                        let stats = analyze(&records[index].seq);
                        if tx.send((index, stats)).is_err() {
                            break;
                        }
                    }
                })
                .map_err(StatsError::WorkerPool)?;
            handles.push(handle);
        }
        drop(job_rx);
        drop(result_tx);

        for index in 0..records.len() {
            if job_tx.send(index).is_err() {
                break;
            }
        }
        drop(job_tx);

        let mut parts: Vec<Option<SequenceStats>> = vec![None; records.len()];
        for (index, stats) in result_rx.iter() {
            parts[index] = Some(stats);
        }

        let mut panicked = false;
        for handle in handles {
            panicked |= handle.join().is_err();
        }
        if panicked {
            return Err(StatsError::WorkerPanicked);
        }
        Ok(parts)
    })?;

    parts
        .into_iter()
        .map(|part| part.ok_or(StatsError::WorkerPanicked))
        .collect()
}
