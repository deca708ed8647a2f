//! Operator-facing strings shared by the chat and planner screens.
//!
//! Everything the terminal shows is Japanese for the nursing-manager
//! audience; log output stays English.

use nightingale_core::{ModelChoice, Role};
use nightingale_error::{GeminiErrorKind, NightingaleError, NightingaleErrorKind, StorageError};
use std::path::Path;

/// Chat screen title.
pub const CHAT_TITLE: &str = "💬 Gemini チャットボット";

/// Planner screen title.
pub const PLANNER_TITLE: &str = "残業削減アクションプランナー";

/// Shown instead of contacting the API when no key is configured.
pub const MISSING_KEY_NOTICE: &str = "環境変数 GEMINI_API_KEY を設定してください。";

/// Hint shown in the empty chat input line.
pub const INPUT_PLACEHOLDER: &str = "ここにメッセージを入力";

/// Transcript display name for operator-authored turns.
pub const USER_LABEL: &str = "ユーザー";

/// Transcript display name for model-authored turns.
pub const ASSISTANT_LABEL: &str = "アシスタント";

/// Planner status after a successful generation.
pub const PLAN_READY_STATUS: &str = "行動計画を生成しました。";

/// Planner status for an export attempt with nothing to write.
pub const EXPORT_EMPTY_NOTICE: &str = "エクスポートする計画がまだありません。";

/// Header fragment naming the model the next request will use.
pub fn model_header(model: ModelChoice) -> String {
    format!("現在のモデル: {model}")
}

/// Status text while a request is in flight.
pub fn generating_status(model: ModelChoice) -> String {
    format!("{model} が応答を生成中...")
}

/// Planner status naming the CSV document just written.
pub fn export_done_status(path: &Path) -> String {
    format!("CSVを保存しました: {}", path.display())
}

/// Planner status when the CSV document could not be written.
pub fn export_failed_status(err: &StorageError) -> String {
    format!("CSVの保存に失敗しました: {}", err.message)
}

/// Display name for a transcript role.
pub fn role_label(role: &Role) -> &'static str {
    match role {
        Role::User => USER_LABEL,
        _ => ASSISTANT_LABEL,
    }
}

/// Formats a generation failure for the transcript and status line.
///
/// Request-level failures (transport and non-success HTTP) share one prefix;
/// anything else gets the catch-all prefix, so connectivity trouble reads
/// differently from response trouble.
pub fn operator_message(err: &NightingaleError) -> String {
    match err.kind() {
        NightingaleErrorKind::Gemini(gemini) => match gemini.kind() {
            GeminiErrorKind::MissingApiKey => MISSING_KEY_NOTICE.to_string(),
            GeminiErrorKind::Api { .. } | GeminiErrorKind::Transport(_) => {
                format!("APIリクエストエラーが発生しました: {}", gemini.kind())
            }
            GeminiErrorKind::Unexpected(_) => {
                format!("予期せぬエラーが発生しました: {}", gemini.kind())
            }
        },
        other => format!("予期せぬエラーが発生しました: {other}"),
    }
}
