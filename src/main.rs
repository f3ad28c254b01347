use homebrew_web::config::Config;
use homebrew_web::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    tracing::info!(
        static_root = %cfg.static_files.root.display(),
        "Starting HomebrewWebServer"
    );

    tokio::select! {
        res = server::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
