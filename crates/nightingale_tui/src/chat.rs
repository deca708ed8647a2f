//! Chat screen state and key handling.

use crate::messages;
use crate::runner::Signal;
use crossterm::event::{KeyCode, KeyEvent};
use nightingale_core::{GenerationOptions, GenerationRequest, ModelChoice, Transcript};
use nightingale_interface::TextGenerator;
use tracing::debug;

/// Chat screen state, generic over the text generator driving it.
///
/// `driver` is `None` when no API key was configured; the screen still opens
/// and every submit resolves to the configuration notice without touching the
/// transcript or the network.
#[derive(Debug)]
pub struct ChatApp<D: TextGenerator> {
    driver: Option<D>,
    /// Conversation so far, oldest first.
    pub transcript: Transcript,
    /// Text being composed in the input line.
    pub input: String,
    /// Model the next submit will use.
    pub model: ModelChoice,
    /// Status line under the input.
    pub status: String,
    /// Lines scrolled back from the newest turn.
    pub scroll: u16,
}

impl<D: TextGenerator> ChatApp<D> {
    /// Creates the chat screen over an optional generation driver.
    pub fn new(driver: Option<D>) -> Self {
        let status = if driver.is_some() {
            messages::model_header(ModelChoice::default())
        } else {
            messages::MISSING_KEY_NOTICE.to_string()
        };
        Self {
            driver,
            transcript: Transcript::new(),
            input: String::new(),
            model: ModelChoice::default(),
            status,
            scroll: 0,
        }
    }

    /// Applies one key press, reporting what the event loop should do next.
    pub fn handle_key(&mut self, key: KeyEvent) -> Signal {
        match key.code {
            KeyCode::Esc => return Signal::Quit,
            KeyCode::Enter => {
                if self.input.trim().is_empty() {
                    return Signal::Continue;
                }
                if self.driver.is_none() {
                    self.status = messages::MISSING_KEY_NOTICE.to_string();
                    return Signal::Continue;
                }
                return Signal::Submit;
            }
            KeyCode::Tab => {
                self.model = self.model.cycle();
                self.status = messages::model_header(self.model);
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        Signal::Continue
    }

    /// Switches the status line to the in-flight text so the event loop can
    /// draw one generating frame before awaiting the reply.
    pub fn begin_generating(&mut self) {
        self.status = messages::generating_status(self.model);
    }

    /// Runs the submit pipeline for the text currently in the input line.
    ///
    /// Appends the user turn, issues exactly one generation call carrying the
    /// whole transcript, and appends the reply (or the operator-facing error
    /// message) as the paired assistant turn.
    pub async fn submit(&mut self) {
        let prompt = self.input.trim().to_string();
        if prompt.is_empty() {
            return;
        }
        let Some(driver) = &self.driver else {
            self.status = messages::MISSING_KEY_NOTICE.to_string();
            return;
        };

        self.input.clear();
        self.transcript.push_user(prompt);

        let request = GenerationRequest::new(
            self.model.to_string(),
            self.transcript.turns().to_vec(),
            GenerationOptions::default(),
        );
        let reply = match driver.generate(&request).await {
            Ok(text) => text,
            Err(err) => messages::operator_message(&err),
        };

        debug!(turns = self.transcript.len() + 1, "Recording chat reply");
        self.transcript.push_assistant(reply);
        self.scroll = 0;
        self.status = messages::model_header(self.model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::ScriptedDriver;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use nightingale_core::Role;
    use nightingale_error::GeminiErrorKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut ChatApp<ScriptedDriver>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_submit_pairs_user_and_assistant_turns() {
        let (driver, probe) = ScriptedDriver::new(vec![Ok("はい、承知しました。".to_string())]);
        let mut app = ChatApp::new(Some(driver));

        type_text(&mut app, "勤務表について");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Signal::Submit);
        app.submit().await;

        assert_eq!(probe.calls(), 1);
        assert_eq!(app.transcript.len(), 2);
        assert_eq!(*app.transcript.turns()[0].role(), Role::User);
        assert_eq!(app.transcript.turns()[0].content(), "勤務表について");
        assert_eq!(*app.transcript.turns()[1].role(), Role::Assistant);
        assert_eq!(app.transcript.turns()[1].content(), "はい、承知しました。");
        assert!(app.input.is_empty());
    }

    #[tokio::test]
    async fn test_request_carries_whole_transcript() {
        let (driver, probe) = ScriptedDriver::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]);
        let mut app = ChatApp::new(Some(driver));

        type_text(&mut app, "one");
        app.submit().await;
        type_text(&mut app, "two");
        app.submit().await;

        let request = probe.last_request().unwrap();
        assert_eq!(request.model(), "gemini-2.5-flash");
        assert_eq!(request.turns().len(), 3);
        assert_eq!(request.turns()[2].content(), "two");
        assert_eq!(*request.options(), GenerationOptions::default());
        assert_eq!(probe.calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_recorded_as_assistant_turn() {
        let (driver, probe) = ScriptedDriver::new(vec![Err(GeminiErrorKind::Transport(
            "connection refused".to_string(),
        ))]);
        let mut app = ChatApp::new(Some(driver));

        type_text(&mut app, "hello");
        app.submit().await;

        assert_eq!(probe.calls(), 1);
        assert_eq!(app.transcript.len(), 2);
        let recorded = app.transcript.last_assistant().unwrap();
        assert!(
            recorded
                .content()
                .starts_with("APIリクエストエラーが発生しました: ")
        );
        assert!(recorded.content().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_missing_driver_never_touches_transcript() {
        let mut app: ChatApp<ScriptedDriver> = ChatApp::new(None);
        assert_eq!(app.status, messages::MISSING_KEY_NOTICE);

        type_text(&mut app, "hello");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Signal::Continue);
        app.submit().await;

        assert!(app.transcript.is_empty());
        assert_eq!(app.input, "hello");
        assert_eq!(app.status, messages::MISSING_KEY_NOTICE);
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let (driver, probe) = ScriptedDriver::new(vec![]);
        let mut app = ChatApp::new(Some(driver));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), Signal::Continue);
        type_text(&mut app, "   ");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Signal::Continue);
        app.submit().await;

        assert_eq!(probe.calls(), 0);
        assert!(app.transcript.is_empty());
    }

    #[test]
    fn test_tab_cycles_model_and_updates_status() {
        let (driver, _probe) = ScriptedDriver::new(vec![]);
        let mut app = ChatApp::new(Some(driver));

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.model, ModelChoice::Pro);
        assert_eq!(app.status, "現在のモデル: gemini-2.5-pro");

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.model, ModelChoice::Flash);
    }

    #[test]
    fn test_backspace_edits_input() {
        let (driver, _probe) = ScriptedDriver::new(vec![]);
        let mut app = ChatApp::new(Some(driver));

        type_text(&mut app, "abc");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input, "ab");
    }

    #[test]
    fn test_escape_quits() {
        let (driver, _probe) = ScriptedDriver::new(vec![]);
        let mut app = ChatApp::new(Some(driver));
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Signal::Quit);
    }
}
