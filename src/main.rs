// Passport MRZ extraction tool: reads the machine readable zone from a
// passport image (or raw MRZ lines) and prints the decoded record as JSON.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use visum::decoding::MrzDecoder;
use visum::models::PassportRecord;
use visum::processing::OcrEngine;
use visum::utils::PassportError;
use visum::PassportReader;

#[derive(Parser)]
#[command(name = "visum", about = "Decode TD3 passport MRZ data")]
struct Args {
    /// Passport image to read the MRZ from
    #[arg(conflicts_with_all = ["line1", "line2"])]
    image: Option<PathBuf>,

    /// First raw MRZ line (skips image processing and OCR)
    #[arg(long, requires = "line2")]
    line1: Option<String>,

    /// Second raw MRZ line
    #[arg(long, requires = "line1")]
    line2: Option<String>,

    /// Tesseract data directory
    #[arg(long)]
    tessdata: Option<String>,
}

fn run(args: Args) -> Result<PassportRecord, PassportError> {
    match (args.image, args.line1, args.line2) {
        (_, Some(line1), Some(line2)) => MrzDecoder::decode(&[line1, line2]),
        (Some(image), _, _) => {
            let mut engine = OcrEngine::new();
            if let Some(dir) = args.tessdata {
                engine = engine.with_datapath(dir);
            }
            PassportReader::new(engine).read(&image)
        }
        _ => {
            eprintln!("Provide an image path, or both --line1 and --line2");
            process::exit(2);
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(record) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&record).expect("record serializes to JSON")
            );
        }
        Err(err) => {
            eprintln!("Error decoding passport: {}", err);
            process::exit(1);
        }
    }
}
