use anyhow::Context;
use clap::Parser;
use dataviz_tools::utils::{logger, validation::Validate};
use dataviz_tools::{FileHandler, FileServer, MimeRegistry, ServerConfig};

fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let root = config
        .resolve_root()
        .context("could not resolve the directory to serve")?;

    let mut mime = MimeRegistry::with_defaults();
    for (ext, content_type) in &config.mime {
        tracing::debug!("Extra content type: .{} -> {}", ext, content_type);
        mime.insert(ext, content_type);
    }

    let handler = FileHandler::new(root.clone(), mime);
    let server = match FileServer::bind(&config.address(), handler) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!("Serving files from {}", root.display());
    println!("✅ Server running at: {}", config.url());

    server.serve_forever();
    Ok(())
}
