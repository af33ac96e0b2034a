use anyhow::Result;

fn main() -> Result<()> {
    if std::env::var("TRAKR_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("trakr=debug")
            .init();
    }

    trakr::tui::run()
}
