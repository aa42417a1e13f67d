use crate::scan::{LogSource, ScanError};
use crate::scheduler::SchedulerState;
use crate::session::ScanSession;
use crate::settings::MonitorSettings;
use crate::sink::{FilePersistence, PersistenceSink, Severity, Sinks};
use std::sync::Arc;
use tokio::sync::watch;

pub(super) struct SessionContext {
    pub settings: MonitorSettings,
    pub source: Arc<dyn LogSource>,
    pub sinks: Sinks,
    pub state: Arc<watch::Sender<SchedulerState>>,
}

/// The session loop: scan, evaluate, display, sleep; until stopped or a cycle fails.
pub(super) async fn run_session(
    ctx: SessionContext,
    mut stop_rx: watch::Receiver<bool>,
) -> SchedulerState {
    let SessionContext {
        settings,
        source,
        sinks,
        state,
    } = ctx;
    if *stop_rx.borrow_and_update() {
        tracing::debug!("stop requested before the first cycle");
        state.send_replace(SchedulerState::Stopped);
        return SchedulerState::Stopped;
    }

    let settings = Arc::new(settings);
    let persistence = persistence_for(&settings, &sinks);

    tracing::info!(
        handle = %settings.handle,
        interval_secs = settings.interval.as_secs(),
        channel = %settings.channel,
        log_path = %settings.log_path.display(),
        "starting scan for kill events"
    );
    sinks.display.reset(settings.modes.killer_mode);

    let mut session = ScanSession::new();

    let outcome = loop {
        let (returned, result) = match run_cycle(session, &settings, &source, &persistence).await
        {
            Ok(cycle) => cycle,
            Err(e) => {
                tracing::error!(error = %e, "scan cycle panicked");
                sinks
                    .alert
                    .notify(Severity::Error, "Scan failed", "The scan stopped unexpectedly.");
                break SchedulerState::Failed;
            }
        };
        session = returned;

        if let Err(err) = result {
            tracing::error!(error = %err, "scan cycle failed, monitoring stopped");
            sinks
                .alert
                .notify(Severity::Error, err.alert_title(), err.alert_message());
            break SchedulerState::Failed;
        }
        tracing::debug!("finished extracting kill events");

        for evaluated in session.evaluate_pending(&settings) {
            sinks.display.show(
                &evaluated.event,
                evaluated.classification,
                evaluated.tally,
                settings.modes.streamer_mode,
            );
        }

        tokio::select! {
            _ = tokio::time::sleep(settings.interval) => {}
            _ = stop_rx.changed() => {
                tracing::debug!("scan task stop requested, terminating");
                break SchedulerState::Stopped;
            }
        }
    };

    state.send_replace(outcome);
    outcome
}

type Cycle = (ScanSession, Result<usize, ScanError>);

/// One blocking read of the log, off the async workers. The session moves into the
/// blocking task and comes back with the result.
async fn run_cycle(
    mut session: ScanSession,
    settings: &Arc<MonitorSettings>,
    source: &Arc<dyn LogSource>,
    persistence: &Option<Arc<dyn PersistenceSink>>,
) -> Result<Cycle, tokio::task::JoinError> {
    let settings = settings.clone();
    let source = source.clone();
    let persistence = persistence.clone();

    tokio::task::spawn_blocking(move || {
        let result = session.scan(source.as_ref(), &settings, persistence.as_deref());
        (session, result)
    })
    .await
}

fn persistence_for(settings: &MonitorSettings, sinks: &Sinks) -> Option<Arc<dyn PersistenceSink>> {
    if !settings.modes.write_to_file {
        return None;
    }

    Some(sinks.persistence.clone().unwrap_or_else(|| {
        Arc::new(FilePersistence::new(&settings.output_dir)) as Arc<dyn PersistenceSink>
    }))
}
