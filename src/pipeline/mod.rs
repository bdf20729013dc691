//! Alignment and variant-calling pipeline driver
//!
//! Thin orchestration of the external `bwa`, `samtools`, and
//! `bcftools` binaries: align a FASTA/FASTQ input against the
//! configured reference, convert/sort/index the alignment, and call
//! variants into a VCF file. There is no decision logic here — each
//! step is one subprocess whose failure (missing binary, non-zero
//! exit) maps to [`VannoError::Pipeline`] with the tool name and its
//! stderr.
//!
//! Intermediate files live in the configured work directory; nothing
//! is written to a process-wide temp path.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::VannoError;

/// Orchestrates alignment and variant calling for one input file.
#[derive(Debug, Clone)]
pub struct AlignmentPipeline {
    config: PipelineConfig,
}

impl AlignmentPipeline {
    /// Create a pipeline with an explicit reference and work directory.
    pub fn new(config: PipelineConfig) -> Result<Self, VannoError> {
        if !config.reference_fasta.exists() {
            return Err(VannoError::Config {
                msg: format!(
                    "reference FASTA does not exist: {}",
                    config.reference_fasta.display()
                ),
            });
        }
        fs::create_dir_all(&config.work_dir).map_err(|e| VannoError::Io {
            msg: format!(
                "failed to create work directory {}: {}",
                config.work_dir.display(),
                e
            ),
        })?;
        Ok(Self { config })
    }

    /// Run the whole pipeline: align, sort, index, call. Returns the
    /// path of the produced VCF file.
    pub fn run(&self, input: &Path) -> Result<PathBuf, VannoError> {
        let sam = self.align(input)?;
        self.call_variants(&sam)
    }

    /// Align a FASTA/FASTQ input with `bwa mem`, producing a SAM file
    /// in the work directory.
    pub fn align(&self, input: &Path) -> Result<PathBuf, VannoError> {
        let sam = self.work_path(input, "sam");
        info!(input = %input.display(), sam = %sam.display(), "running bwa mem");

        let out = create_output(&sam)?;
        let mut cmd = Command::new("bwa");
        cmd.arg("mem")
            .arg(&self.config.reference_fasta)
            .arg(input)
            .stdout(Stdio::from(out));
        run_tool("bwa", cmd)?;

        Ok(sam)
    }

    /// Convert, sort, and index the alignment, then call variants with
    /// `bcftools mpileup | call`. Returns the VCF path.
    pub fn call_variants(&self, sam: &Path) -> Result<PathBuf, VannoError> {
        let bam = sam.with_extension("bam");
        let sorted_bam = sam.with_extension("sorted.bam");
        let bcf = sam.with_extension("bcf");
        let vcf = sam.with_extension("vcf");

        info!(sam = %sam.display(), "converting to BAM");
        let mut cmd = Command::new("samtools");
        cmd.args(["view", "-bS"]).arg(sam).arg("-o").arg(&bam);
        run_tool("samtools", cmd)?;

        info!(bam = %bam.display(), "sorting");
        let mut cmd = Command::new("samtools");
        cmd.arg("sort").arg(&bam).arg("-o").arg(&sorted_bam);
        run_tool("samtools", cmd)?;

        info!(bam = %sorted_bam.display(), "indexing");
        let mut cmd = Command::new("samtools");
        cmd.arg("index").arg(&sorted_bam);
        run_tool("samtools", cmd)?;

        info!(bam = %sorted_bam.display(), "pileup");
        let out = create_output(&bcf)?;
        let mut cmd = Command::new("bcftools");
        cmd.arg("mpileup")
            .arg("-f")
            .arg(&self.config.reference_fasta)
            .arg(&sorted_bam)
            .arg("-Ou")
            .stdout(Stdio::from(out));
        run_tool("bcftools", cmd)?;

        info!(vcf = %vcf.display(), "calling variants");
        let mut cmd = Command::new("bcftools");
        cmd.args(["call", "-mv", "-Ov", "-o"]).arg(&vcf).arg(&bcf);
        run_tool("bcftools", cmd)?;

        Ok(vcf)
    }

    /// Path in the work directory derived from the input file name.
    fn work_path(&self, input: &Path, extension: &str) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());
        self.config.work_dir.join(format!("{}.{}", stem, extension))
    }
}

fn create_output(path: &Path) -> Result<File, VannoError> {
    File::create(path).map_err(|e| VannoError::Io {
        msg: format!("failed to create {}: {}", path.display(), e),
    })
}

/// Run one external tool, mapping spawn failures and non-zero exits to
/// [`VannoError::Pipeline`].
fn run_tool(tool: &str, mut cmd: Command) -> Result<(), VannoError> {
    let output = cmd
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| VannoError::Pipeline {
            tool: tool.to_string(),
            msg: format!("failed to launch: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VannoError::Pipeline {
            tool: tool.to_string(),
            msg: format!("{}: {}", output.status, stderr.trim()),
        });
    }

    Ok(())
}
