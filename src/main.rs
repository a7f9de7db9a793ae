use llmproxy::config::Config;
use llmproxy::runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::default();

    // Request failures are reported on stdout and never change the exit
    // code; only a failed write to stdout does.
    let mut stdout = std::io::stdout().lock();
    let outcome = runner::run(&config, &mut stdout).await?;
    tracing::debug!(success = outcome.is_success(), "run finished");

    Ok(())
}
