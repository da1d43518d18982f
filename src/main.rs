use std::process;

use clap::Parser;

use gemimg::{
    cli::Cli,
    config::GeminiConfig,
    error::{GemimgError, Result},
    gemini::GeminiClient,
    logger,
    models::ImageGenerationRequest,
    output, reference,
};

#[tokio::main]
async fn main() {
    // A .env file is optional; the system environment always works.
    let _ = dotenv::dotenv();

    if let Err(e) = logger::init() {
        eprintln!("Warning: {e}");
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = GeminiConfig::from_env()?;

    let references = reference::load_references(&cli.references)?;

    output::prepare_output_dir(&cli.output)?;

    let client = GeminiClient::new(config);
    let request = ImageGenerationRequest {
        prompt: cli.prompt,
        references,
        size: cli.size,
    };

    let response = client.image().generate(request).await?;

    if !output::persist_response(&response, &cli.output)? {
        return Err(GemimgError::Response(
            "no image was generated in the response".to_string(),
        ));
    }

    Ok(())
}
