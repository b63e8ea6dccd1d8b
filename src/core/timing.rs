use std::env;
use std::time::{Duration, Instant};

pub fn stats_enabled() -> bool {
    matches!(env::var("GENOME_STATS").as_deref(), Ok("1"))
}

pub fn log_stage(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("GENOME_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

pub fn stage<T, F>(stats: bool, name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let t = Instant::now();
    let res = f();
    log_stage(stats, name, t);
    res
}

pub fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
