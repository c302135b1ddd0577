use anyhow::{Context, Result};
use clap::Parser;
use mc_server::{routes, seed, store::MemStore};
use tracing_subscriber::EnvFilter;

/// Serve the recipe discovery API
#[derive(Parser, Debug)]
struct Args {
    /// The address and optionally port to bind to
    #[clap(long, default_value = "0.0.0.0:3000")]
    address: String,

    /// Whether to use HTTPS / TLS
    #[clap(long)]
    tls: bool,

    /// Path to the TLS certificate chain, used with --tls
    #[clap(long, default_value = "certs/fullchain.pem")]
    tls_cert: String,

    /// Path to the TLS private key, used with --tls
    #[clap(long, default_value = "certs/privkey.pem")]
    tls_key: String,

    /// Load the embedded starter recipes at boot
    #[clap(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args = Args::parse();

    // The store lives for the whole process; handlers share the handle.
    let store = MemStore::new();
    if args.seed {
        seed::load_starter_recipes(&store)
            .await
            .context("Seeding starter recipes")?;
    }

    let app = routes::app(store);

    // In development, use HTTP. In production, use HTTPS.
    if args.tls {
        rustls::crypto::ring::default_provider()
            .install_default()
            .expect("Failed to install rustls crypto provider");
        let tls_config =
            axum_server::tls_rustls::RustlsConfig::from_pem_file(&args.tls_cert, &args.tls_key)
                .await
                .context("Loading TLS certificate")?;

        let addr = args.address.parse()?;
        tracing::info!("Listening on {}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .context("Starting TLS server")?;
    } else {
        let listener = tokio::net::TcpListener::bind(&args.address).await?;
        tracing::info!("Listening on {}", args.address);
        axum::serve(listener, app).await?;
    }
    Ok(())
}
