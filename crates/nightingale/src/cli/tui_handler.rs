//! Launchers wiring Gemini clients into the TUI screens.

use nightingale_error::GeminiErrorKind;
use nightingale_gemini::{GeminiClient, GeminiConfig};
use nightingale_tui::{ChatApp, PlanApp, run_chat, run_plan};
use std::time::Duration;
use tracing::warn;

/// Timeout for planner requests; the longer structured prompt gets more
/// time than the chat default.
const PLAN_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds a client from the environment.
///
/// A missing API key means "open the screen without a driver"; any other
/// configuration failure is fatal.
fn driver_from_env(timeout: Option<Duration>) -> anyhow::Result<Option<GeminiClient>> {
    let config = match GeminiConfig::from_env() {
        Ok(config) => config,
        Err(err) if matches!(err.kind, GeminiErrorKind::MissingApiKey) => {
            warn!("GEMINI_API_KEY not set; the screen opens without generation");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let config = match timeout {
        Some(timeout) => config.with_timeout(timeout),
        None => config,
    };
    Ok(Some(GeminiClient::new(config)?))
}

/// Opens the chat screen with the default request timeout.
#[tracing::instrument(skip_all)]
pub async fn launch_chat() -> anyhow::Result<()> {
    let driver = driver_from_env(None)?;
    let app = ChatApp::new(driver);
    run_chat(app).await?;
    Ok(())
}

/// Opens the planner screen, exporting into the current working directory.
#[tracing::instrument(skip_all)]
pub async fn launch_plan() -> anyhow::Result<()> {
    let driver = driver_from_env(Some(PLAN_TIMEOUT))?;
    let app = PlanApp::new(driver).with_export_dir(std::env::current_dir()?);
    run_plan(app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightingale_gemini::DEFAULT_TIMEOUT;

    #[test]
    fn test_planner_gets_twice_the_chat_timeout() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
        assert_eq!(PLAN_TIMEOUT, Duration::from_secs(60));
    }

    #[test]
    fn test_plan_timeout_applies_to_config() {
        let config = GeminiConfig::new("test-key")
            .unwrap()
            .with_timeout(PLAN_TIMEOUT);
        assert_eq!(config.timeout(), PLAN_TIMEOUT);
    }
}
