//! Single-actor analyzer session.
//!
//! One task owns the [`AnalyzerState`]. User actions arrive on a bounded
//! queue, remote calls run as spawned tasks, and their tagged outcomes come
//! back on an internal channel to be folded in by the same task. A train or
//! analyze request made while busy is dropped, never queued.

use std::{ops::ControlFlow, sync::Arc};

use thiserror::Error;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    catalog::ExampleCategory,
    service::{execute, Completion, RemoteCall, SentimentService},
    state::AnalyzerState,
};

const ACTION_QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Train,
    /// Analyze the current draft.
    Analyze,
    SetDraft(String),
    LoadExample {
        category: ExampleCategory,
        index: usize,
    },
    Clear,
    Shutdown,
}

impl UserAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Analyze => "analyze",
            Self::SetDraft(_) => "set_draft",
            Self::LoadExample { .. } => "load_example",
            Self::Clear => "clear",
            Self::Shutdown => "shutdown",
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Snapshot published after every processed action or completion.
    State(AnalyzerState),
    Notice(String),
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session action queue is full; please retry")]
    QueueFull,
    #[error("session has stopped")]
    Closed,
}

pub struct SessionHandle {
    actions: mpsc::Sender<UserAction>,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub fn dispatch(&self, action: UserAction) -> Result<(), SessionError> {
        let name = action.name();
        match self.actions.try_send(action) {
            Ok(()) => {
                debug!(action = name, "queued session action");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(SessionError::QueueFull),
            Err(TrySendError::Closed(_)) => Err(SessionError::Closed),
        }
    }

    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events.recv().await
    }

    /// Stops the actor and waits for it. Calls still in flight are not
    /// cancelled; their results are discarded.
    pub async fn shutdown(self) {
        let _ = self.actions.send(UserAction::Shutdown).await;
        if let Err(err) = self.task.await {
            warn!(error = %err, "session task ended abnormally");
        }
    }
}

/// Starts a session and immediately issues the status probe.
pub fn spawn(service: Arc<dyn SentimentService>) -> SessionHandle {
    let (action_tx, action_rx) = mpsc::channel(ACTION_QUEUE_CAPACITY);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run_session(service, action_rx, event_tx));
    SessionHandle {
        actions: action_tx,
        events: event_rx,
        task,
    }
}

async fn run_session(
    service: Arc<dyn SentimentService>,
    mut actions: mpsc::Receiver<UserAction>,
    events: mpsc::UnboundedSender<SessionEvent>,
) {
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
    let mut state = AnalyzerState::default();

    if let Some(call) = state.begin_status_probe() {
        spawn_call(&service, call, &done_tx);
    }
    publish(&events, SessionEvent::State(state.clone()));

    loop {
        tokio::select! {
            action = actions.recv() => {
                let Some(action) = action else { break };
                if apply_action(&mut state, action, &service, &done_tx, &events).is_break() {
                    break;
                }
            }
            Some(completion) = done_rx.recv() => {
                if let Some(notice) = state.complete(completion) {
                    publish(&events, SessionEvent::Notice(notice));
                }
            }
        }
        publish(&events, SessionEvent::State(state.clone()));
    }

    info!("session: stopped");
}

fn apply_action(
    state: &mut AnalyzerState,
    action: UserAction,
    service: &Arc<dyn SentimentService>,
    done: &mpsc::UnboundedSender<Completion>,
    events: &mpsc::UnboundedSender<SessionEvent>,
) -> ControlFlow<()> {
    match action {
        UserAction::Train => {
            if let Some(call) = state.begin_train() {
                spawn_call(service, call, done);
            }
        }
        UserAction::Analyze => {
            if let Some(call) = state.begin_analyze_draft() {
                spawn_call(service, call, done);
            }
        }
        UserAction::SetDraft(text) => state.set_draft(&text),
        UserAction::LoadExample { category, index } => {
            if let Err(err) = state.load_example(category, index) {
                publish(events, SessionEvent::Rejected(err.to_string()));
            }
        }
        UserAction::Clear => state.clear_all(),
        UserAction::Shutdown => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn spawn_call(
    service: &Arc<dyn SentimentService>,
    call: RemoteCall,
    done: &mpsc::UnboundedSender<Completion>,
) {
    let service = Arc::clone(service);
    let done = done.clone();
    tokio::spawn(async move {
        let completion = execute(service, call).await;
        if done.send(completion).is_err() {
            debug!("session gone; dropping remote call result");
        }
    });
}

fn publish(events: &mpsc::UnboundedSender<SessionEvent>, event: SessionEvent) {
    let _ = events.send(event);
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
