use dnstamper_application::use_cases::{CheckTamperingUseCase, TamperReport, Verdict};
use dnstamper_domain::{CheckConfig, DomainError};
use dnstamper_infrastructure::StubResolver;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::info;

/// Runs the comparison and prints one line per verdict. Returns whether
/// every verdict was consistent.
pub async fn run_check(config: &CheckConfig) -> bool {
    info!(
        hostnames = config.hostnames.len(),
        resolvers = config.resolvers.len(),
        control = %config.control_resolver,
        "Starting tamper check"
    );

    let use_case = CheckTamperingUseCase::new(Arc::new(StubResolver::new()));
    let reports = use_case.execute(config).await;

    for report in &reports {
        println!("{}", format_report(report));
    }

    let failed = reports.iter().filter(|r| !r.is_consistent()).count();
    info!(reports = reports.len(), failed, "Tamper check finished");
    failed == 0
}

fn format_report(report: &TamperReport) -> String {
    let verdict = match &report.verdict {
        Verdict::Consistent { addresses } => format!("ok {}", join(addresses)),
        Verdict::Divergent { expected, got } => {
            format!("TAMPERED expected [{}] got [{}]", join(expected), join(got))
        }
        Verdict::LookupFailed(e) => format!("FAILED{} {}", failure_hint(e), e),
        Verdict::ControlFailed(e) => format!("CONTROL FAILED {}", e),
    };
    format!("{} @ {}: {}", report.hostname, report.resolver, verdict)
}

/// Blocked names commonly come back as NXDOMAIN or as silence.
fn failure_hint(error: &DomainError) -> &'static str {
    if error.is_not_found() {
        " (no such host)"
    } else if error.is_timeout() {
        " (no answer)"
    } else {
        ""
    }
}

fn join(addresses: &[IpAddr]) -> String {
    addresses
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
