use anyhow::Context;
use clap::Parser;
use rootwalk_domain::{CliOverrides, DomainName, RecordType, Resolution};
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version = "0.1.0")]
#[command(about = "Rootwalk - iterative DNS lookups starting from the root servers")]
struct Cli {
    /// Domain name to resolve
    #[arg(default_value = "example.com.")]
    domain: String,

    /// Record type to ask for (A, AAAA, NS, ...)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-operation timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Destination port for nameserver queries
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Maximum referrals to follow from one root server
    #[arg(long)]
    max_depth: Option<usize>,

    /// Seed for picking the first root server
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the bootstrap server table and exit
    #[arg(long)]
    list_roots: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        query_timeout_secs: cli.timeout,
        port: cli.port,
        max_referral_depth: cli.max_depth,
        rng_seed: cli.seed,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let services = di::ResolverServices::new(&config)?;

    if cli.list_roots {
        for server in services.directory.servers() {
            println!("{}", server);
        }
        return Ok(());
    }

    let domain: DomainName = cli
        .domain
        .parse()
        .with_context(|| format!("Invalid domain name '{}'", cli.domain))?;
    let record_type: RecordType = cli
        .record_type
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid record type: {}", e))?;

    info!("Rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let resolution = services
        .resolve
        .execute(&domain, record_type)
        .await
        .with_context(|| format!("Could not resolve {}", domain))?;

    print_resolution(&resolution);
    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    if let Some(target) = &resolution.cname {
        println!("{}\tCNAME\t{}", resolution.domain, target);
    }

    for address in &resolution.addresses {
        let kind = if address.is_ipv4() { "A" } else { "AAAA" };
        println!("{}\t{}\t{}", resolution.domain, kind, address);
    }

    if resolution.is_empty() && resolution.cname.is_none() {
        println!(
            "{}\t{}\tno records (answered by {})",
            resolution.domain, resolution.record_type, resolution.server
        );
    }

    println!(
        ";; {} queries, authoritative answer from {}",
        resolution.queries_sent, resolution.server
    );
}
