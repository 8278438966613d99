//! MethylTrack CLI entry point
//!
//! Plots methylation percentage tracks from haplotype-phased BED files.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use methyltrack::core::{prepare_series, ColumnLayout, SmoothParams};
use methyltrack::locus::{parse_locus, parse_vline};
use methyltrack::plot::{render_series, LineAnnotation, PlotConfig, SpanAnnotation};
use std::path::PathBuf;
use std::time::Instant;

/// Sequencing platform, selecting the BED column layout (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    /// ONT modkit pileup BED (percent in column 10)
    #[value(name = "ont")]
    Ont,
    /// PacBio pb-CpG-tools BED (percent in column 8)
    #[value(name = "pb")]
    Pb,
}

impl From<PlatformArg> for ColumnLayout {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ont => ColumnLayout::modkit(),
            PlatformArg::Pb => ColumnLayout::pb_cpg(),
        }
    }
}

#[derive(Parser)]
#[command(name = "methyltrack")]
#[command(about = "Plot methylation percentage tracks from haplotype-phased BED files")]
#[command(version)]
#[command(author = "MethylTrack Contributors")]
struct Cli {
    /// Sequencing platform: ont or pb
    #[arg(short = 'p', long)]
    platform: PlatformArg,

    /// Input haplotype-phased BED file(s), repeatable
    #[arg(short = 'b', long = "bed", required = true)]
    bed: Vec<PathBuf>,

    /// Sample name(s), in the same order as the BED files
    #[arg(short = 's', long = "sample", required = true)]
    sample: Vec<String>,

    /// Gene locus: chr:start-end:name, e.g. chr15:80143550-80197576:FAH
    #[arg(short = 'g', long)]
    gene: String,

    /// Region to plot: chr:start-end. Defaults to the gene span +/- 500 bp
    #[arg(short = 'r', long)]
    region: Option<String>,

    /// Output image path (.png or .svg)
    #[arg(short = 'o', long, default_value = "methylation_plot.png")]
    output: PathBuf,

    /// Vertical-line annotation: name,position (e.g. a TR breakpoint)
    #[arg(short = 'l', long)]
    line: Option<String>,

    /// Number of consecutive points averaged per smoothing window
    #[arg(short = 'w', long, default_value = "20")]
    window_size: usize,

    /// Minimum number of points required before smoothing kicks in
    #[arg(short = 'm', long, default_value = "3")]
    min_points_for_smooth: usize,
}

/// Default padding around the gene span when no region is given (bp)
const DEFAULT_REGION_PAD: u64 = 500;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    if cli.bed.len() != cli.sample.len() {
        bail!(
            "Got {} BED file(s) but {} sample name(s); counts must match",
            cli.bed.len(),
            cli.sample.len()
        );
    }

    let gene = parse_locus(&cli.gene).context("Invalid --gene")?;
    let region = match &cli.region {
        Some(region_str) => {
            let locus = parse_locus(region_str).context("Invalid --region")?;
            locus.region
        }
        None => gene.padded_region(DEFAULT_REGION_PAD),
    };

    let vlines: Vec<LineAnnotation> = match &cli.line {
        Some(spec) => {
            let (label, position) = parse_vline(spec).context("Invalid --line")?;
            vec![LineAnnotation { label, position }]
        }
        None => Vec::new(),
    };

    let spans: Vec<SpanAnnotation> = match &gene.name {
        Some(name) => vec![SpanAnnotation {
            label: name.clone(),
            start: gene.region.start,
            end: gene.region.end,
        }],
        None => Vec::new(),
    };

    let named_sources: Vec<(String, PathBuf)> = cli
        .sample
        .iter()
        .cloned()
        .zip(cli.bed.iter().cloned())
        .collect();

    let params = SmoothParams {
        window_size: cli.window_size,
        min_points_for_smooth: cli.min_points_for_smooth,
    };
    let layout: ColumnLayout = cli.platform.into();

    eprintln!("Preparing {} track(s) over {}", named_sources.len(), region);
    let (series, raw_region) = prepare_series(&named_sources, &region, &params, &layout)?;

    render_series(
        &series,
        &region,
        &spans,
        &vlines,
        &PlotConfig::default(),
        &cli.output,
    )?;

    eprintln!("\n=== Track Statistics ===");
    for ((name, records), track) in raw_region.iter().zip(series.iter()) {
        eprintln!(
            "{:<16} {} record(s) in region, {} plotted point(s)",
            name,
            records.len(),
            track.positions.len()
        );
    }
    eprintln!("Output:          {}", cli.output.display());
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
