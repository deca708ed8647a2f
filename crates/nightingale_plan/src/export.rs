//! CSV export of the session plan log.

use crate::PlanLog;
use chrono::Local;
use nightingale_error::StorageError;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Longest excerpt carried into an export row, in characters.
pub const EXCERPT_MAX_CHARS: usize = 300;

/// Header row of the export document.
pub const CSV_HEADER: [&str; 3] = ["部署", "提案", "説明（抜粋）"];

/// Fixed label tagging every exported row.
pub const PLAN_LABEL: &str = "AI提案";

/// Stands in for an empty department name in the export filename.
pub const FALLBACK_FACILITY: &str = "未設定";

/// Derives the excerpt carried in an export row.
///
/// Newlines (LF and CR) become spaces and the result is cut at
/// [`EXCERPT_MAX_CHARS`] characters, counted in characters so multibyte
/// text is never split. Short, newline-free input passes through
/// unchanged.
pub fn excerpt(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(EXCERPT_MAX_CHARS)
        .collect()
}

/// The export filename for a department and date.
///
/// An empty department name falls back to [`FALLBACK_FACILITY`] here, and
/// only here; rows keep the department cell as entered.
pub fn export_filename(facility: &str, date: &str) -> String {
    let org = if facility.trim().is_empty() {
        FALLBACK_FACILITY
    } else {
        facility
    };
    format!("action_plan_{org}_{date}.csv")
}

/// Serializes the plan log as a CSV document, one row per plan.
pub fn to_csv(facility: &str, log: &PlanLog) -> Result<String, StorageError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| StorageError::new(format!("failed to write CSV header: {e}")))?;

    for record in log.records() {
        let summary = excerpt(record.content());
        writer
            .write_record([facility, PLAN_LABEL, summary.as_str()])
            .map_err(|e| StorageError::new(format!("failed to write CSV row: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StorageError::new(format!("failed to flush CSV document: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| StorageError::new(format!("CSV document was not UTF-8: {e}")))
}

/// Writes the export document into `dir`, named for the department and
/// today's date, and returns the full path.
#[instrument(skip(log), fields(plan_count = log.len()))]
pub fn write_export(
    dir: impl AsRef<Path> + std::fmt::Debug,
    facility: &str,
    log: &PlanLog,
) -> Result<PathBuf, StorageError> {
    let date = Local::now().format("%Y-%m-%d").to_string();
    let path = dir.as_ref().join(export_filename(facility, &date));
    let document = to_csv(facility, log)?;

    std::fs::write(&path, document)
        .map_err(|e| StorageError::new(format!("failed to write {}: {e}", path.display())))?;

    debug!(path = %path.display(), "Wrote plan export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanRecord;

    #[test]
    fn test_excerpt_idempotent_on_short_clean_input() {
        let input = "夜勤の引き継ぎ時間を15分短縮する。";
        assert_eq!(excerpt(input), input);
        assert_eq!(excerpt(&excerpt(input)), excerpt(input));
    }

    #[test]
    fn test_excerpt_caps_at_300_chars() {
        let input = "提".repeat(400);
        let result = excerpt(&input);
        assert_eq!(result.chars().count(), 300);
    }

    #[test]
    fn test_excerpt_replaces_newlines_with_spaces() {
        let result = excerpt("第一案\r\n夜勤を減らす\n第二案");
        assert!(!result.contains('\n'));
        assert!(!result.contains('\r'));
        assert_eq!(result, "第一案  夜勤を減らす 第二案");
    }

    #[test]
    fn test_filename_embeds_facility_and_date() {
        assert_eq!(
            export_filename("三階病棟", "2026-08-21"),
            "action_plan_三階病棟_2026-08-21.csv"
        );
    }

    #[test]
    fn test_filename_falls_back_when_facility_empty() {
        assert_eq!(
            export_filename("", "2026-08-21"),
            "action_plan_未設定_2026-08-21.csv"
        );
        assert_eq!(
            export_filename("  ", "2026-08-21"),
            "action_plan_未設定_2026-08-21.csv"
        );
    }

    #[test]
    fn test_to_csv_one_row_per_plan() {
        let mut log = PlanLog::new();
        log.push(PlanRecord::new(
            "2026-08-20".to_string(),
            "夜勤配置を見直す".to_string(),
        ));
        log.push(PlanRecord::new(
            "2026-08-21".to_string(),
            "引き継ぎを短縮する".to_string(),
        ));

        let doc = to_csv("三階病棟", &log).unwrap();
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some("部署,提案,説明（抜粋）"));
        assert_eq!(lines.next(), Some("三階病棟,AI提案,夜勤配置を見直す"));
        assert_eq!(lines.next(), Some("三階病棟,AI提案,引き継ぎを短縮する"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_to_csv_keeps_empty_facility_in_rows() {
        let mut log = PlanLog::new();
        log.push(PlanRecord::new("2026-08-21".to_string(), "plan".to_string()));
        let doc = to_csv("", &log).unwrap();
        assert!(doc.lines().nth(1).unwrap().starts_with(",AI提案,"));
    }

    #[test]
    fn test_write_export_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = PlanLog::new();
        log.push(PlanRecord::today("休憩の交代制を導入する。".to_string()));

        let path = write_export(dir.path(), "外来", &log).unwrap();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("action_plan_外来_"));
        assert!(name.ends_with(".csv"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("部署,提案,説明（抜粋）"));
        assert!(written.contains("外来,AI提案,休憩の交代制を導入する。"));
    }
}
