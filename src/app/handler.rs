use {
    crate::app::caller::ContractCaller,
    crate::libs::config::Config,
    crate::libs::market::client::{connect_http, TokenReader},
    crate::libs::writing::{cc, short_addr},
    crate::{log, warn},
    anyhow::Result,
    nftmarket::TokenQuery,
    std::io::Write,
};

/// Entry point shared by both binaries: config, provider, two calls, print.
/// Any failure is logged and returned so the process exits non-zero.
pub async fn init(query: TokenQuery) -> Result<()> {
    let config = Config::from_env(query).inspect_err(|e| log!(cc::RED, "{}", e))?;
    log!(
        cc::LIGHT_CYAN,
        "rpc {} | contract {} | holder {}",
        config.endpoint_url.host_str().unwrap_or("?"),
        short_addr(&config.contract_address),
        short_addr(&config.target_address)
    );

    let reader = connect_http(config.endpoint_url.clone());
    init_with(reader, &config, query, &mut std::io::stdout().lock()).await
}

/// Runs both calls through `reader` and writes the report to `out`.
pub async fn init_with<R: TokenReader, W: Write>(
    reader: R,
    config: &Config,
    query: TokenQuery,
    out: &mut W,
) -> Result<()> {
    let caller = ContractCaller::new(reader, config, query)?;
    let report = caller
        .run()
        .await
        .inspect_err(|e| log!(cc::RED, "{}", e))?;
    if report.tokens.is_empty() {
        warn!("{} returned no tokens", query.function_name());
    }

    report.write_to(out)?;
    Ok(())
}
