// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! vanno CLI
//!
//! Command-line interface for variant extraction and multi-source
//! annotation.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use vanno::pipeline::AlignmentPipeline;
use vanno::{
    extract_variants, write_csv, write_csv_file, AnnotateConfig, PipelineConfig, Resolver,
    VannoError,
};

#[derive(Parser)]
#[command(name = "vanno")]
#[command(author, version, about = "Genomic variant annotator with multi-source fallback")]
#[command(
    long_about = "Extract variant records from VCF text and annotate each one by querying \
NCBI dbSNP, MyVariant.info, and Ensembl VEP in priority order, with a UCSC genome \
browser link as guaranteed fallback.

Examples:
  vanno annotate -i variants.vcf -o annotated.csv
  cat variants.vcf | vanno annotate -i - -o -
  vanno extract -i variants.vcf
  vanno run -i sample.fastq --reference data/hg38.fa --work-dir tmp -o annotated.csv"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate variants from a VCF file and write CSV
    Annotate {
        /// Input VCF file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Per-request timeout for annotation sources, in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// UCSC genome browser database for fallback links
        #[arg(long, default_value = "hg38")]
        ucsc_db: String,
    },

    /// Extract variant records from a VCF file and list them
    Extract {
        /// Input VCF file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Align, call variants, and annotate a FASTA/FASTQ input
    Run {
        /// Input FASTA or FASTQ file
        #[arg(short, long)]
        input: PathBuf,

        /// Reference genome FASTA
        #[arg(long)]
        reference: PathBuf,

        /// Directory for intermediate SAM/BAM/BCF/VCF files
        #[arg(long, default_value = "vanno-work")]
        work_dir: PathBuf,

        /// Output CSV file (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Per-request timeout for annotation sources, in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(level)
        .compact()
        .init();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), VannoError> {
    match command {
        Commands::Annotate {
            input,
            output,
            timeout_secs,
            ucsc_db,
        } => {
            let config = AnnotateConfig {
                ucsc_db,
                ..AnnotateConfig::default().with_timeout_secs(timeout_secs)
            };
            annotate_to_csv(&input, &output, &config).await
        }

        Commands::Extract { input } => {
            let text = read_input(&input)?;
            let variants = extract_variants(&text);
            info!("extracted {} variant(s)", variants.len());
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for v in &variants {
                writeln!(out, "{}", v).map_err(|e| VannoError::Io { msg: e.to_string() })?;
            }
            Ok(())
        }

        Commands::Run {
            input,
            reference,
            work_dir,
            output,
            timeout_secs,
        } => {
            let pipeline = AlignmentPipeline::new(PipelineConfig::new(reference, work_dir))?;
            let vcf = pipeline.run(&input)?;
            info!("variant calling complete: {}", vcf.display());

            let config = AnnotateConfig::default().with_timeout_secs(timeout_secs);
            annotate_to_csv(&vcf, &output, &config).await
        }
    }
}

async fn annotate_to_csv(
    input: &Path,
    output: &Path,
    config: &AnnotateConfig,
) -> Result<(), VannoError> {
    let text = read_input(input)?;
    let variants = extract_variants(&text);
    info!("found {} variant(s), annotating", variants.len());

    let resolver = Resolver::new(config)?;
    let annotations = resolver.resolve_all(&variants).await;

    if output == Path::new("-") {
        write_csv(&annotations, io::stdout().lock())?;
    } else {
        write_csv_file(&annotations, output)?;
        info!("wrote {} annotation(s) to {}", annotations.len(), output.display());
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, VannoError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| VannoError::Io {
                msg: format!("failed to read stdin: {}", e),
            })?;
        Ok(text)
    } else {
        fs::read_to_string(path).map_err(|e| VannoError::Io {
            msg: format!("failed to read {}: {}", path.display(), e),
        })
    }
}
