use futures::{Future, FutureExt};
use tracing::error;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt, prelude::*};

/// Crates whose request-level logging drowns out ours.
const QUIET_TARGETS: &[&str] = &[
    "hyper_util",
    "alloy_rpc_client",
    "alloy_transport_http",
    "reqwest",
];

fn env_filter() -> EnvFilter {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    for target in QUIET_TARGETS {
        if let Ok(directive) = format!("{target}=off").parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

pub fn setup_tracing() {
    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(std::io::stdout);

    // try_init so tests and embedders that already installed a subscriber keep it
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init();
}

pub async fn run_with_tracing<F, Fut>(future: F) -> Result<(), anyhow::Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), anyhow::Error>> + Send + 'static,
{
    setup_tracing();

    let result = std::panic::AssertUnwindSafe(future()).catch_unwind().await;

    match result {
        Ok(outcome) => {
            if let Err(e) = &outcome {
                error!(error = %e, error_chain = ?e, "Service exited with error");
            }
            outcome
        }
        Err(panic) => {
            capture_panic_details(panic);
            Err(anyhow::anyhow!("service panicked"))
        }
    }
}

fn capture_panic_details(e: Box<dyn std::any::Any + Send>) {
    let backtrace = backtrace::Backtrace::new();
    if let Some(s) = e.downcast_ref::<&str>() {
        error!(panic_message = *s, backtrace = ?backtrace, "Panic occurred with message");
    } else if let Some(s) = e.downcast_ref::<String>() {
        error!(panic_message = s, backtrace = ?backtrace, "Panic occurred with message");
    } else {
        error!(backtrace = ?backtrace, "Panic occurred but the payload is not a string");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_through_success_and_errors() {
        assert!(run_with_tracing(|| async { Ok::<(), anyhow::Error>(()) }).await.is_ok());

        let err = run_with_tracing(|| async { Err::<(), _>(anyhow::anyhow!("boom")) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    fn explode() -> Result<(), anyhow::Error> {
        panic!("tenant exploded")
    }

    #[tokio::test]
    async fn converts_panics_into_errors() {
        let err = run_with_tracing(|| async { explode() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "service panicked");
    }
}
