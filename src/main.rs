use deltapdf::{ExportConfig, ExportError, generate_pdf};
use serde_json::Value;
use std::env;
use std::fs;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Exports a delta JSON file to PDF.
#[tokio::main]
async fn main() -> Result<(), ExportError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Export a rich-text delta (raw or parsed, or an array of them) to PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/input.json> <path/to/output.pdf> [path/to/config.json]",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    log::info!("Loading input from {}", input_path);
    let input: Value = serde_json::from_str(&fs::read_to_string(input_path)?)?;

    let config = match args.get(3) {
        Some(config_path) => {
            log::info!("Loading config from {}", config_path);
            ExportConfig::from_json(&fs::read_to_string(config_path)?)?
        }
        None => ExportConfig::default(),
    };

    let bytes = generate_pdf(input, &config).await?;
    fs::write(output_path, &bytes)?;
    println!("Successfully generated {} ({} bytes)", output_path, bytes.len());
    Ok(())
}
