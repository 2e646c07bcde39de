//! Thin JSON-in/JSON-out demo of the alignment pipeline, standing in for
//! the out-of-scope HTTP service. Two word sources are supported: a real
//! forced-aligner output file (`words.json`), or `--fixture <text-file>`,
//! which runs the bundled `FakeAligner` over whitespace-separated text so
//! the pipeline can be exercised without a speech model installed.

use std::env;
use std::fs;
use std::process::ExitCode;

use hardy_align::forced_align::{FakeAligner, ForcedAligner};
use hardy_align::{align_transcript, logger, AlignmentSummary, Segment, Word};

enum WordSource {
    Aligned(String),
    Fixture(String),
}

fn main() -> ExitCode {
    logger::init_logger();

    let mut args = env::args().skip(1);
    let Some(segments_path) = args.next() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let source = match args.next().as_deref() {
        Some("--fixture") => match args.next() {
            Some(path) => WordSource::Fixture(path),
            None => {
                print_usage();
                return ExitCode::FAILURE;
            }
        },
        Some(words_path) => WordSource::Aligned(words_path.to_string()),
        None => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(&segments_path, &source) {
        Ok(summary) => match serde_json::to_string_pretty(&summary_json(&summary)) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("failed to serialize result: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("alignment failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("usage: hardy-align-cli <segments.json> <words.json>");
    eprintln!("       hardy-align-cli <segments.json> --fixture <text-file>");
}

fn run(segments_path: &str, source: &WordSource) -> Result<AlignmentSummary, hardy_align::AlignmentError> {
    let segments_data = fs::read_to_string(segments_path)?;
    let segments: Vec<Segment> = serde_json::from_str(&segments_data)?;

    let words = match source {
        WordSource::Aligned(words_path) => {
            let words_data = fs::read_to_string(words_path)?;
            let words: Vec<Word> = serde_json::from_str(&words_data)?;
            words
        }
        WordSource::Fixture(text_path) => {
            let text_data = fs::read_to_string(text_path)?;
            FakeAligner::default().align(text_data.as_bytes())?
        }
    };

    if words.is_empty() {
        return Err(hardy_align::AlignmentError::EmptyWords);
    }

    Ok(align_transcript(&segments, &words))
}

fn summary_json(summary: &AlignmentSummary) -> serde_json::Value {
    serde_json::json!({
        "segments": summary.segments,
        "average_confidence": summary.average_confidence,
    })
}
