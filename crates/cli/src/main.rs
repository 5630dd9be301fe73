use clap::Parser;
use tracing::info;
use zkns_pdns_domain::CliOverrides;
use zkns_pdns_infrastructure::pipe::SessionFactory;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "zkns-pdns")]
#[command(version = "0.1.0")]
#[command(about = "PowerDNS pipe backend serving names from a ZooKeeper-style store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Domain suffix served by this backend
    #[arg(long, value_name = "SUFFIX")]
    domain: Option<String>,

    /// Store path the suffix maps to
    #[arg(long, value_name = "PATH")]
    root: Option<String>,

    /// Host named in the SOA record
    #[arg(long, value_name = "HOST")]
    soa_hostname: Option<String>,

    /// Accept pipe sessions over TCP instead of stdin/stdout
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,

    /// Read store nodes from files under DIR
    #[arg(long, value_name = "DIR", conflicts_with = "store_url")]
    store_dir: Option<String>,

    /// Read store nodes through an HTTP gateway
    #[arg(long, value_name = "URL")]
    store_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        domain_suffix: cli.domain,
        store_root: cli.root,
        soa_hostname: cli.soa_hostname,
        listen: cli.listen,
        store_dir: cli.store_dir,
        store_url: cli.store_url,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // stdout belongs to the pipe protocol, logs go to stderr
    bootstrap::init_logging(&config);

    info!("Starting zkns-pdns v{}", env!("CARGO_PKG_VERSION"));

    let store = di::build_store(&config.store)?;
    let resolver = di::build_resolver(&config, store);
    let factory = SessionFactory::new(resolver, config.pipe.banner.as_str());

    tokio::select! {
        result = server::start_pipe_server(config.pipe.listen.as_deref(), factory) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    info!("zkns-pdns stopped");
    Ok(())
}
