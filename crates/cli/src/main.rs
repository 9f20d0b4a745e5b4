use clap::Parser;
use ferrous_stub_application::ports::DnsResolver;
use ferrous_stub_domain::{CliOverrides, Message, NormalizedRecord, RecordType, ResourceRecord};
use ferrous_stub_infrastructure::dns::{SharedResolver, StubResolver};
use ferrous_stub_jobs::CacheMaintenanceJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-stub")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Stub - caching DNS stub resolver")]
struct Cli {
    /// Domain name to look up
    domain: String,

    /// Record type (A, AAAA, CNAME, MX, NS, PTR, SOA, TXT)
    #[arg(default_value = "A")]
    record_type: String,

    /// Nameserver to query, `ip` or `ip:port`; repeat to set failover order
    #[arg(short = 's', long = "server", value_name = "ADDR")]
    servers: Vec<String>,

    /// Query over TCP instead of UDP
    #[arg(long)]
    tcp: bool,

    /// Do not read or populate the cache
    #[arg(long)]
    no_cache: bool,

    /// Per-server timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the full sectioned response instead of the flattened records
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let record_type: RecordType = cli.record_type.parse()?;

    let cli_overrides = CliOverrides {
        servers: cli.servers.clone(),
        timeout_ms: cli.timeout_ms,
        tcp: cli.tcp,
        no_cache: cli.no_cache,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(&config);

    let resolver = SharedResolver::new(StubResolver::new(config.resolver.clone())?);

    let shutdown = CancellationToken::new();
    let maintenance = Arc::new(
        CacheMaintenanceJob::new(Arc::new(resolver.clone())).with_cancellation(shutdown.clone()),
    );
    let maintenance_task = maintenance.start();

    let result = if cli.raw {
        resolver
            .resolve_raw(&cli.domain, record_type)
            .await
            .map(|message| print_message(&message))
    } else {
        resolver
            .resolve(&cli.domain, record_type)
            .await
            .map(|records| print_records(&records))
    };

    shutdown.cancel();
    if let Err(e) = maintenance_task.await {
        debug!(error = %e, "Maintenance task did not stop cleanly");
    }

    if let Err(e) = &result {
        error!(domain = %cli.domain, record_type = %record_type, error = %e, "Lookup failed");
    }
    result?;
    Ok(())
}

fn print_records(records: &[NormalizedRecord]) {
    for record in records {
        match record.priority {
            Some(priority) => println!(
                "{}\t{}\t{}\t{} {}",
                record.name, record.class, record.record_type, priority, record.content
            ),
            None => println!(
                "{}\t{}\t{}\t{}",
                record.name, record.class, record.record_type, record.content
            ),
        }
    }
}

fn print_message(message: &Message) {
    let header = &message.header;
    println!(
        ";; id: {}, opcode: {}, rcode: {}, flags:{}{}{}{}{}",
        header.id,
        header.opcode,
        header.rcode,
        if header.is_response { " qr" } else { "" },
        if header.authoritative { " aa" } else { "" },
        if header.truncated { " tc" } else { "" },
        if header.recursion_desired { " rd" } else { "" },
        if header.recursion_available { " ra" } else { "" },
    );
    println!(
        ";; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}, TTL: {}",
        header.question_count,
        header.answer_count,
        header.authority_count,
        header.additional_count,
        header.ttl
    );

    println!("\n;; QUESTION SECTION:");
    for question in &message.questions {
        println!(";{}\t{}\t{}", question.name, question.qclass, question.qtype);
    }

    print_section("ANSWER", &message.answers);
    print_section("AUTHORITY", &message.authorities);
    print_section("ADDITIONAL", &message.additionals);
}

fn print_section(title: &str, records: &[ResourceRecord]) {
    if records.is_empty() {
        return;
    }
    println!("\n;; {} SECTION:", title);
    for record in records {
        println!("{}", record);
    }
}
