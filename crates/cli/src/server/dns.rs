use loopy_dns_application::ports::ServerEventSink;
use loopy_dns_application::use_cases::PlanResponseUseCase;
use loopy_dns_domain::Config;
use loopy_dns_infrastructure::dns::{DnsListener, QueryResolver, TracingEventSink};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_dns_server(config: &Config, shutdown: CancellationToken) -> anyhow::Result<()> {
    let zone = config.zone()?;

    match &zone {
        Some(zone) => info!(zone = %zone, "Restricting DNS queries to zone"),
        None => info!("Answering DNS queries for all names"),
    }

    let events: Arc<dyn ServerEventSink> = Arc::new(TracingEventSink);
    let planner = Arc::new(PlanResponseUseCase::new(zone, Arc::clone(&events)));
    let resolver = Arc::new(QueryResolver::new(planner));

    DnsListener::start(&config.server.listen_address, resolver, events, shutdown).await?;
    Ok(())
}
