use anyhow::Context;
use dnstamper_infrastructure::StubResolver;
use tracing::info;

pub async fn run_resolve(resolver: &str, hostname: &str) -> anyhow::Result<()> {
    info!(resolver = %resolver, hostname = %hostname, "Resolving");

    let addresses = StubResolver::new()
        .lookup_ip(resolver, hostname)
        .await
        .with_context(|| format!("Failed to resolve {} at {}", hostname, resolver))?;

    for address in addresses {
        println!("{}", address);
    }
    Ok(())
}
