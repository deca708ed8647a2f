//! Scripted generation driver for app-level tests.

use async_trait::async_trait;
use nightingale_core::GenerationRequest;
use nightingale_error::{GeminiError, GeminiErrorKind, NightingaleResult};
use nightingale_interface::TextGenerator;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Observations shared between a [`ScriptedDriver`] and the test that built
/// it, surviving the move of the driver into an app.
#[derive(Debug, Default)]
pub(crate) struct Probe {
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl Probe {
    /// Number of generation calls issued so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any call was made.
    pub(crate) fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

/// Replays a fixed script of replies, recording every request it sees.
///
/// Calls past the end of the script answer with a fixed reply so tests only
/// script the turns they assert on.
#[derive(Debug)]
pub(crate) struct ScriptedDriver {
    probe: Arc<Probe>,
    script: Mutex<VecDeque<Result<String, GeminiErrorKind>>>,
}

impl ScriptedDriver {
    pub(crate) fn new(script: Vec<Result<String, GeminiErrorKind>>) -> (Self, Arc<Probe>) {
        let probe = Arc::new(Probe::default());
        let driver = Self {
            probe: Arc::clone(&probe),
            script: Mutex::new(script.into()),
        };
        (driver, probe)
    }
}

#[async_trait]
impl TextGenerator for ScriptedDriver {
    async fn generate(&self, request: &GenerationRequest) -> NightingaleResult<String> {
        self.probe.calls.fetch_add(1, Ordering::SeqCst);
        *self.probe.last_request.lock().unwrap() = Some(request.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(kind)) => Err(GeminiError::new(kind).into()),
            None => Ok("scripted reply".to_string()),
        }
    }
}
