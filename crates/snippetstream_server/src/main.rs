use clap::Parser;
use snippetstream_core::{CallerIdentity, GenerationRequest};
use snippetstream_server::{
    Cli, Commands, ObservabilityConfig, Service, ServiceConfig, init_observability,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Caller used by `generate`: unlimited, URL-capable.
const LOCAL_USER: &str = "local";
const LOCAL_TIER: &str = "pro";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            bind,
            verbose,
        } => serve(config.as_deref(), bind, verbose).await?,
        Commands::Generate {
            file,
            url,
            platforms,
            config,
            verbose,
        } => generate(config.as_deref(), file, url, platforms, verbose).await?,
    }

    Ok(())
}

fn load_config(path: Option<&Path>, verbose: bool) -> Result<ServiceConfig, Box<dyn std::error::Error>> {
    let config = ServiceConfig::load(path)?;
    let mut logging = ObservabilityConfig::new().with_json_logs(*config.server().json_logs());
    if verbose {
        logging = logging.with_log_level("debug");
    }
    init_observability(logging)?;
    Ok(config)
}

async fn serve(
    path: Option<&Path>,
    bind: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(path, verbose)?;
    if let Some(bind) = bind {
        config = config.with_bind(bind);
    }

    let service = Service::from_config(&config)?;
    let listener = tokio::net::TcpListener::bind(config.server().bind()).await?;
    info!(address = %listener.local_addr()?, "SnippetStream listening");

    axum::serve(listener, service.router())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;
    Ok(())
}

async fn generate(
    path: Option<&Path>,
    file: Option<PathBuf>,
    url: Option<String>,
    platforms: Option<Vec<String>>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(path, verbose)?;
    let service = Service::from_config(&config)?;

    let mut request = match (file, url) {
        (_, Some(url)) => GenerationRequest::from_url(url),
        (Some(file), None) => GenerationRequest::from_text(std::fs::read_to_string(file)?),
        (None, None) => GenerationRequest::from_text(std::io::read_to_string(std::io::stdin())?),
    };
    if let Some(platforms) = platforms {
        request = request.with_platforms(platforms);
    }

    let caller = CallerIdentity::new(LOCAL_USER, LOCAL_TIER);
    let response = service.orchestrator().repurpose(&caller, &request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
