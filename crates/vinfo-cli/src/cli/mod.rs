//! CLI for the vinfo rendition fetcher.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use vinfo_core::config;
use vinfo_core::video_info::{parse_renditions, Rendition, VideoInfoRequest, ADAPTIVE_FMTS_KEY};

/// Length of the diagnostic excerpt printed after a fetch.
const EXCERPT_LEN: usize = 80;

/// Fetch video info and list the available stream renditions.
#[derive(Debug, Parser)]
#[command(name = "vinfo")]
#[command(about = "List stream renditions of a video", long_about = None)]
pub struct Cli {
    /// Video identifier; prompted for on stdin when omitted.
    pub video_id: Option<String>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let video_id = match cli.video_id {
        Some(id) => id,
        None => prompt_video_id()?,
    };
    println!("video id = {}", video_id);

    let request = VideoInfoRequest::with_endpoint(&video_id, &cfg.endpoint)?;
    let raw = request.fetch()?;
    print_payload_diagnostics(&raw);

    let renditions = parse_renditions(&raw)?;
    println!("fetch {} videos", renditions.len());
    print_table(&renditions);

    Ok(())
}

/// Reads the video id from stdin after an interactive prompt.
fn prompt_video_id() -> Result<String> {
    print!("input video id: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read video id from stdin")?;
    Ok(line.trim().to_string())
}

/// Prints fetch diagnostics: body length, target key position, and an
/// excerpt from the key onwards.
fn print_payload_diagnostics(raw: &str) {
    println!(">> text len = {}", raw.len());
    match raw.find(ADAPTIVE_FMTS_KEY) {
        Some(p) => {
            println!(">> {} position = {}", ADAPTIVE_FMTS_KEY, p);
            let excerpt: String = raw[p..].chars().take(EXCERPT_LEN).collect();
            println!(">> {}", excerpt);
        }
        None => println!(">> {} position = not found", ADAPTIVE_FMTS_KEY),
    }
}

/// One line per rendition: quality label, media type, playback URL.
fn print_table(renditions: &[Rendition]) {
    for r in renditions {
        println!(
            "{:<5} | {:<32} | {}",
            r.quality_label.as_deref().unwrap_or("-"),
            r.media_type,
            r.url
        );
    }
}
