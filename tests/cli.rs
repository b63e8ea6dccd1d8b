use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn genome_stats(input: &Path, output: &Path, threads: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genome-stats"))
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
        .args(["--threads", threads])
        .output()
        .unwrap()
}

#[test]
fn writes_report_for_gapped_assembly() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genome.fa");
    let output = dir.path().join("stats.txt");
    fs::write(&input, ">A chromosome A\nACGTACGTNNNNN\nNNNNNACGT\n>B\nNNNN\n").unwrap();

    let out = genome_stats(&input, &output, "2");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        format!("Genome statistics written to {}", output.display())
    );

    let report = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "genome_size: 26");
    assert_eq!(lines[1], "scaffold_count: 2");
    assert_eq!(lines[6], "scaffold_N50: 22");
    assert_eq!(lines[7], "scaffold_N90: 4");
    assert_eq!(lines[8], "contig_N50: 4");
    assert_eq!(lines[9], "contig_N90: NA");
}

#[test]
fn empty_input_gives_empty_statistics() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.fa");
    let output = dir.path().join("stats.txt");
    fs::write(&input, "").unwrap();

    let out = genome_stats(&input, &output, "1");
    assert!(out.status.success());
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("genome_size: 0\nscaffold_count: 0\n"));
    assert!(report.contains("rate_of_N: 0\nrate_of_GC: 0\n"));
    assert_eq!(report.matches(": NA\n").count(), 4);
}

#[test]
fn thread_count_does_not_change_the_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genome.fa");
    let mut fasta = String::new();
    for i in 0..25 {
        fasta.push_str(&format!(">ctg{}\n", i));
        fasta.push_str(&"GATTACA".repeat(150 * (i + 1)));
        fasta.push_str(&"N".repeat(i % 4 * 5));
        fasta.push_str("CCGG\n");
    }
    fs::write(&input, fasta).unwrap();

    let one = dir.path().join("one.txt");
    let many = dir.path().join("many.txt");
    assert!(genome_stats(&input, &one, "1").status.success());
    assert!(genome_stats(&input, &many, "6").status.success());
    assert_eq!(
        fs::read_to_string(&one).unwrap(),
        fs::read_to_string(&many).unwrap()
    );
}

#[test]
fn malformed_input_writes_no_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.fa");
    let output = dir.path().join("stats.txt");
    fs::write(&input, "ACGT\n>a\nACGT\n").unwrap();

    let out = genome_stats(&input, &output, "2");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("malformed FASTA input at line 1"));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("stats.txt");
    let out = genome_stats(&dir.path().join("absent.fa"), &output, "1");
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported_once() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genome.fa");
    let output = dir.path().join("no_such_dir").join("stats.txt");
    fs::write(&input, ">a\nACGT\n").unwrap();

    let out = genome_stats(&input, &output, "1");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(&format!("failed to write {}", output.display())));
    assert_eq!(stderr.matches(&output.display().to_string()).count(), 1, "{}", stderr);
}

#[test]
fn zero_threads_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("genome.fa");
    fs::write(&input, ">a\nACGT\n").unwrap();
    let out = genome_stats(&input, &dir.path().join("stats.txt"), "0");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--threads must be >= 1"));
}
