//! Blocking bridge between a synchronous caller and the async transformer.
//!
//! The OS integration point that triggers a transformation is synchronous and
//! has no event loop of its own, while the network round trip is async.
//! [`SyncBridge`] adapts the two: it owns a small tokio runtime, spawns the
//! transformation onto it, and blocks the calling thread in short slices
//! until the outcome arrives or a fixed wall-clock deadline passes.
//!
//! # Outcome guarantee
//!
//! Every invocation terminates in exactly one of three ways:
//! * the spawned task delivers its result (success or error) first;
//! * the deadline passes first — the caller gets [`TransformError::Timeout`]
//!   and the in-flight task is abandoned, its eventual outcome discarded;
//! * the task dies without delivering (e.g. a panic) — reported as a
//!   transport failure rather than hanging the caller.
//!
//! Abandoning rather than cancelling on timeout is deliberate: the caller's
//! contract has already returned, and the leaked request is bounded by the
//! HTTP client's own backstop timeout.
//!
//! # Cooperative pumping
//!
//! While waiting, [`SyncBridge::invoke_with_pump`] calls a caller-supplied
//! hook once per wait slice (~10 ms) so a host UI thread can keep processing
//! pending events.  The hook must not re-enter the bridge.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::transform::{ServiceType, TransformError, Transformer};

/// Wall-clock budget for one invocation, measured from dispatch.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(60);

/// How long each blocking wait slice lasts before the pump hook runs.
const PUMP_SLICE: Duration = Duration::from_millis(10);

// ---------------------------------------------------------------------------
// SyncBridge
// ---------------------------------------------------------------------------

/// Deadline-bounded blocking facade over an async [`Transformer`].
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use text_correct::bridge::SyncBridge;
/// use text_correct::config::{new_shared_config, AppConfig};
/// use text_correct::transform::{ApiTransformer, ServiceType};
///
/// let config = AppConfig::load().unwrap();
/// let transformer = Arc::new(ApiTransformer::new(new_shared_config(config.api)));
/// let bridge = SyncBridge::new(transformer).unwrap();
///
/// // Blocks until result, error, or the 60 s deadline.
/// let outcome = bridge.invoke("merhaba nasılsın iyimisin", ServiceType::Correction);
/// ```
pub struct SyncBridge {
    runtime: tokio::runtime::Runtime,
    transformer: Arc<dyn Transformer>,
    deadline: Duration,
}

impl SyncBridge {
    /// Create a bridge with its own 2-worker runtime and the default 60 s
    /// deadline.
    ///
    /// # Errors
    ///
    /// Propagates the I/O error if the tokio runtime cannot be created.
    pub fn new(transformer: Arc<dyn Transformer>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            transformer,
            deadline: DEFAULT_DEADLINE,
        })
    }

    /// Override the invocation deadline (used by tests and custom callers).
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Blocking transform: returns the outcome or [`TransformError::Timeout`].
    ///
    /// Safe to call from multiple threads at once; concurrent invocations are
    /// independent.  Must not be called from inside the bridge's own runtime.
    pub fn invoke(&self, text: &str, service: ServiceType) -> Result<String, TransformError> {
        self.invoke_with_pump(text, service, || {})
    }

    /// Like [`invoke`](Self::invoke), but runs `pump` once per wait slice so
    /// the calling thread can keep a host event loop alive.
    pub fn invoke_with_pump(
        &self,
        text: &str,
        service: ServiceType,
        mut pump: impl FnMut(),
    ) -> Result<String, TransformError> {
        // Single-use completion channel: the task is the only sender and
        // sends exactly once.
        let (tx, rx) = mpsc::channel();

        let transformer = Arc::clone(&self.transformer);
        let text = text.to_string();

        log::debug!("bridge: dispatching {service} request");
        self.runtime.spawn(async move {
            let outcome = transformer.transform(&text, service).await;
            // A send failure means the caller already timed out and dropped
            // the receiver; the outcome is discarded.
            if tx.send(outcome).is_err() {
                log::warn!("bridge: outcome arrived after the deadline, discarding");
            }
        });

        let deadline = Instant::now() + self.deadline;

        loop {
            match rx.recv_timeout(PUMP_SLICE) {
                Ok(outcome) => {
                    log::debug!("bridge: outcome delivered");
                    return outcome;
                }
                Err(RecvTimeoutError::Timeout) => {
                    if Instant::now() >= deadline {
                        log::error!(
                            "bridge: no outcome after {:?}, abandoning request",
                            self.deadline
                        );
                        return Err(TransformError::Timeout);
                    }
                    pump();
                }
                Err(RecvTimeoutError::Disconnected) => {
                    log::error!("bridge: worker dropped without delivering an outcome");
                    return Err(TransformError::Transport(
                        "worker finished without delivering a result".into(),
                    ));
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Resolves with a fixed string after an optional delay.
    struct ResolvesAfter {
        delay: Duration,
        output: String,
    }

    #[async_trait]
    impl Transformer for ResolvesAfter {
        async fn transform(
            &self,
            _text: &str,
            _service: ServiceType,
        ) -> Result<String, TransformError> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.output.clone())
        }
    }

    /// Always fails with `Unauthorized`.
    struct AlwaysUnauthorized;

    #[async_trait]
    impl Transformer for AlwaysUnauthorized {
        async fn transform(
            &self,
            _text: &str,
            _service: ServiceType,
        ) -> Result<String, TransformError> {
            Err(TransformError::Unauthorized)
        }
    }

    /// Never resolves — forces the deadline path.
    struct NeverResolves;

    #[async_trait]
    impl Transformer for NeverResolves {
        async fn transform(
            &self,
            _text: &str,
            _service: ServiceType,
        ) -> Result<String, TransformError> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    fn bridge_over(transformer: impl Transformer + 'static) -> SyncBridge {
        SyncBridge::new(Arc::new(transformer)).expect("runtime")
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    /// A transformation resolving in ~100 ms must return promptly, not at the
    /// full deadline.
    #[test]
    fn fast_resolution_returns_promptly() {
        let bridge = bridge_over(ResolvesAfter {
            delay: Duration::from_millis(100),
            output: "Merhaba, nasılsın?".into(),
        });

        let start = Instant::now();
        let result = bridge.invoke("merhaba nasılsın", ServiceType::Correction);
        let elapsed = start.elapsed();

        assert_eq!(result.unwrap(), "Merhaba, nasılsın?");
        assert!(elapsed >= Duration::from_millis(90), "returned too early");
        assert!(
            elapsed < Duration::from_secs(5),
            "took {elapsed:?}, should be well under the deadline"
        );
    }

    /// A transformation that never resolves must return `Timeout` at
    /// approximately the deadline — not earlier, not unboundedly later.
    #[test]
    fn never_resolving_hits_the_deadline() {
        let bridge = bridge_over(NeverResolves).with_deadline(Duration::from_millis(200));

        let start = Instant::now();
        let result = bridge.invoke("merhaba", ServiceType::Correction);
        let elapsed = start.elapsed();

        assert!(matches!(result, Err(TransformError::Timeout)));
        assert!(elapsed >= Duration::from_millis(190), "timed out too early");
        assert!(elapsed < Duration::from_secs(5), "timed out too late");
    }

    /// Transformer errors pass through the bridge unchanged.
    #[test]
    fn errors_pass_through_unchanged() {
        let bridge = bridge_over(AlwaysUnauthorized);
        let result = bridge.invoke("merhaba", ServiceType::Correction);
        assert!(matches!(result, Err(TransformError::Unauthorized)));
    }

    /// The pump hook must run while the bridge is waiting.
    #[test]
    fn pump_runs_during_the_wait() {
        let bridge = bridge_over(ResolvesAfter {
            delay: Duration::from_millis(100),
            output: "ok".into(),
        });

        let mut pumps = 0u32;
        let result =
            bridge.invoke_with_pump("merhaba", ServiceType::Correction, || pumps += 1);

        assert!(result.is_ok());
        assert!(pumps > 0, "pump hook never ran during a 100 ms wait");
    }

    /// An instantly-resolving transformer should not wait for a full slice
    /// budget per invocation — a batch of calls must stay fast.
    #[test]
    fn immediate_resolution_is_cheap() {
        let bridge = bridge_over(ResolvesAfter {
            delay: Duration::ZERO,
            output: "ok".into(),
        });

        let start = Instant::now();
        for _ in 0..10 {
            assert!(bridge.invoke("x", ServiceType::Correction).is_ok());
        }
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    /// Concurrent invocations are independent — both get their own outcome.
    #[test]
    fn concurrent_invocations_each_get_an_outcome() {
        let bridge = Arc::new(bridge_over(ResolvesAfter {
            delay: Duration::from_millis(50),
            output: "sonuç".into(),
        }));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let bridge = Arc::clone(&bridge);
                std::thread::spawn(move || {
                    bridge.invoke("merhaba", ServiceType::TranslateToEnglish)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "sonuç");
        }
    }
}
