use anyhow::Result;

use hn_pager::config::AppConfig;
use hn_pager::internal::ui::app::App;
use hn_pager::internal::ui::pager;
use hn_pager::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load();

    // An optional page number on the command line jumps straight to that
    // list page; anything unparsable means page 1.
    let start_page = std::env::args().nth(1).map(|raw| pager::parse_page(&raw));

    // Initialize the terminal before choosing where tracing writes: while
    // the TUI owns the screen, logs must go to a file or they corrupt the
    // UI. If TUI init fails, log to the console instead.
    match tui::init() {
        Ok(terminal) => {
            let log_dir = config.logging.log_directory.as_deref().unwrap_or("logs");
            let file_appender = tracing_appender::rolling::daily(log_dir, "hn-pager.log");
            let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

            // RUST_LOG takes precedence over the configured level.
            let env_filter = match std::env::var("RUST_LOG") {
                Ok(_) => tracing_subscriber::EnvFilter::from_default_env(),
                Err(_) => tracing_subscriber::EnvFilter::new(config.logging.level.clone()),
            };

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .compact()
                .init();

            let mut app = App::new(config, start_page);
            let res = app.run(terminal).await;

            // Restore the console before reporting anything.
            tui::restore()?;

            if let Err(err) = res {
                eprintln!("{err:?}");
            }

            Ok(())
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .init();

            eprintln!("Failed to initialize TUI: {e:?}");
            Err(e)
        }
    }
}
