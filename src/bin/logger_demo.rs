use panel_auth::logger::*;

fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();
    trace!("bootstrap trace log");
    debug!("bootstrap debug log");
    info!("bootstrap info log");

    let config = LogConfig {
        filter: "panel_auth=debug,info".to_string(),
    };
    logger.reload_from_config(&config)?;
    trace!("application trace log");
    debug!("application debug log");
    info!("application info log");

    let is_err = logger
        .reload_from_config(&LogConfig {
            filter: "[not a filter".to_string(),
        })
        .is_err();
    info!(is_err, "reload with a malformed filter");

    Ok(())
}
