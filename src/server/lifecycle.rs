//! Listener ownership, background serving and graceful shutdown.
//!
//! A [`Server`] moves through `Idle -> Listening -> Draining -> Stopped`:
//!
//! - `Idle` - the address is bound but no connection has been accepted yet
//! - `Listening` - connections are accepted on a background task, each served concurrently
//! - `Draining` - the first shutdown request arrived; the listener is closed and in-flight
//!   requests get up to the shutdown timeout to finish
//! - `Stopped` - draining finished ([`ShutdownOutcome::Clean`]) or was cut short by the
//!   timeout or a second shutdown request ([`ShutdownOutcome::Forced`])
//!
//! Shutdown requests arrive through a [`Shutdown`] handle, normally fed by
//! [`watch_signals`].

use std::{fmt, io, net::SocketAddr, time::Duration};

use axum::Router;
use tokio::{
    net::TcpListener,
    sync::watch,
    task::{JoinError, JoinHandle},
};
use tokio_util::sync::CancellationToken;

use crate::server::error::server::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Listening,
    Draining,
    Stopped,
}

/// How draining ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every in-flight request finished within the shutdown timeout.
    Clean,
    /// The timeout elapsed or a second shutdown request arrived first.
    Forced,
}

impl fmt::Display for ShutdownOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => f.write_str("clean"),
            Self::Forced => f.write_str("forced"),
        }
    }
}

/// Handle through which shutdown is requested.
///
/// The first request starts draining, any later one forces an immediate stop.
#[derive(Clone, Debug, Default)]
pub struct Shutdown {
    drain: CancellationToken,
    force: CancellationToken,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one shutdown request.
    pub fn trigger(&self) {
        if self.drain.is_cancelled() {
            self.force.cancel();
        } else {
            self.drain.cancel();
        }
    }

    pub fn is_draining(&self) -> bool {
        self.drain.is_cancelled()
    }

    pub fn is_forced(&self) -> bool {
        self.force.is_cancelled()
    }
}

/// A bound listener plus the state machine driving its shutdown.
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
    shutdown_timeout: Duration,
    state: watch::Sender<LifecycleState>,
}

impl Server {
    /// Binds `addr`, leaving the server `Idle`.
    ///
    /// # Arguments
    /// - `addr` - Address to listen on, e.g. `127.0.0.1:8080`; port `0` picks a free port
    /// - `shutdown_timeout` - How long in-flight requests may run once draining starts
    ///
    /// # Returns
    /// - `Ok(Server)` - Listener bound
    /// - `Err(ServerError::Bind)` - Address invalid or already in use
    pub async fn bind(addr: &str, shutdown_timeout: Duration) -> Result<Self, ServerError> {
        let bind_err = |source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        };

        let listener = TcpListener::bind(addr).await.map_err(bind_err)?;
        let addr = listener.local_addr().map_err(bind_err)?;
        let (state, _) = watch::channel(LifecycleState::Idle);

        Ok(Self {
            listener,
            addr,
            shutdown_timeout,
            state,
        })
    }

    /// Address actually bound, useful when binding port `0`.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Serves `router` until shutdown is requested and draining ends.
    ///
    /// # Arguments
    /// - `router` - Fully layered application router
    /// - `shutdown` - Handle whose first trigger starts draining and second forces a stop
    ///
    /// # Returns
    /// - `Ok(ShutdownOutcome)` - How draining ended
    /// - `Err(ServerError)` - The serving task failed or panicked
    pub async fn run(
        self,
        router: Router,
        shutdown: Shutdown,
    ) -> Result<ShutdownOutcome, ServerError> {
        let Self {
            listener,
            addr,
            shutdown_timeout,
            state,
        } = self;

        let drain = shutdown.drain.clone();
        let serve = axum::serve(listener, router)
            .with_graceful_shutdown(async move { drain.cancelled_owned().await });
        let task = tokio::spawn(async move { serve.await });

        state.send_replace(LifecycleState::Listening);
        tracing::info!("Listening on {}", addr);

        supervise(task, &state, &shutdown, shutdown_timeout).await
    }
}

/// Follows the serving task from `Listening` to `Stopped`.
///
/// `state` ends at `Stopped` on every path, including a failed or panicked task.
async fn supervise(
    mut task: JoinHandle<io::Result<()>>,
    state: &watch::Sender<LifecycleState>,
    shutdown: &Shutdown,
    shutdown_timeout: Duration,
) -> Result<ShutdownOutcome, ServerError> {
    let finished_early = tokio::select! {
        joined = &mut task => Some(joined),
        _ = shutdown.drain.cancelled() => None,
    };

    if let Some(joined) = finished_early {
        state.send_replace(LifecycleState::Stopped);
        return match flatten(joined) {
            Ok(()) => {
                tracing::info!("Server stopped");
                Ok(ShutdownOutcome::Clean)
            }
            Err(e) => {
                tracing::error!("Server stopped before shutdown was requested: {}", e);
                Err(e)
            }
        };
    }

    state.send_replace(LifecycleState::Draining);
    tracing::info!("Draining, waiting up to {:?} for in-flight requests", shutdown_timeout);

    let outcome = tokio::select! {
        result = tokio::time::timeout(shutdown_timeout, &mut task) => match result {
            Ok(joined) => flatten(joined).map(|()| ShutdownOutcome::Clean),
            Err(_) => {
                tracing::warn!("Shutdown timeout elapsed with requests still in flight");
                Ok(ShutdownOutcome::Forced)
            }
        },
        _ = shutdown.force.cancelled() => {
            tracing::warn!("Second shutdown signal received, forcing stop");
            Ok(ShutdownOutcome::Forced)
        }
    };

    if matches!(outcome, Ok(ShutdownOutcome::Forced)) {
        task.abort();
    }

    state.send_replace(LifecycleState::Stopped);
    match &outcome {
        Ok(outcome) => tracing::info!("Server stopped ({})", outcome),
        Err(e) => tracing::error!("Server failed while draining: {}", e),
    }

    outcome
}

fn flatten(joined: Result<io::Result<()>, JoinError>) -> Result<(), ServerError> {
    joined?.map_err(ServerError::Serve)
}

/// Feeds interrupt and termination signals into `shutdown`.
///
/// Returns after the second signal; the first starts draining and the second forces
/// the stop.
pub async fn watch_signals(shutdown: Shutdown) {
    wait_for_signal().await;
    tracing::info!("Shutdown signal received, press CTRL+C again to force");
    shutdown.trigger();

    wait_for_signal().await;
    shutdown.trigger();
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for CTRL+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
