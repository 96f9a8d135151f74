//! daisy-atoms - Entry point for the component preview

use daisy_atoms::App;

fn main() {
    // Initialize logging; stdout carries the rendered HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = App::run(std::env::args().skip(1)) {
        tracing::error!("Preview error: {:#}", e);
        std::process::exit(1);
    }
}
