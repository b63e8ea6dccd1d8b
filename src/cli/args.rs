use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "genome-stats",
    version,
    about = "Calculate genome statistics from a FASTA file"
)]
pub struct Cli {
    /// Input genome FASTA file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output statistics file
    #[arg(short, long)]
    pub output: PathBuf,

    #[arg(long, default_value_t = num_cpus::get())]
    pub threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from(["genome-stats", "-i", "asm.fa", "--output", "out.txt"])
            .unwrap();
        assert_eq!(cli.input, PathBuf::from("asm.fa"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.threads, num_cpus::get());
    }

    #[test]
    fn threads_override() {
        let cli = Cli::try_parse_from([
            "genome-stats",
            "--input",
            "asm.fa",
            "-o",
            "out.txt",
            "--threads",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.threads, 3);
    }

    #[test]
    fn input_and_output_are_required() {
        assert!(Cli::try_parse_from(["genome-stats", "-i", "asm.fa"]).is_err());
        assert!(Cli::try_parse_from(["genome-stats", "-o", "out.txt"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
