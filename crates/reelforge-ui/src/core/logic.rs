//! Pure UI helpers extracted from components for non-wasm testing.

use crate::core::endpoint::ApiBase;
use crate::models::{DepsHealth, RunOutcome, RunRecord, RunStatus, Stage};

/// Aggregate run counters for the stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunCounts {
    /// Runs submitted this session.
    pub total: usize,
    /// Runs that produced an artifact.
    pub succeeded: usize,
    /// Runs that ended in an error.
    pub failed: usize,
}

/// Clamp a value to the renderable 0–100 percent range.
#[must_use]
pub fn clamp_percent(value: usize) -> u8 {
    u8::try_from(value.min(100)).unwrap_or(100)
}

/// Pill tone class for a run status.
#[must_use]
pub const fn status_tone(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Pending => "subtle",
        RunStatus::Running => "info",
        RunStatus::Success => "success",
        RunStatus::Error => "error",
    }
}

/// How far through the pipeline a finished run got, as a percent.
///
/// Each of the five stages contributes 20 points. A failed run is credited
/// with the stages before the one that errored; an unrecognized or missing
/// stage slug counts as no progress.
#[must_use]
pub fn run_progress(status: RunStatus, stage: Option<&str>) -> u8 {
    match status {
        RunStatus::Success => 100,
        RunStatus::Error => stage
            .and_then(Stage::from_slug)
            .map_or(0, |stage| (stage.ordinal() - 1) * 20),
        RunStatus::Pending | RunStatus::Running => 0,
    }
}

/// Display text for a backend stage slug.
#[must_use]
pub fn stage_display(stage: Option<&str>) -> String {
    stage.map_or_else(
        || "\u{2014}".to_string(),
        |slug| {
            Stage::from_slug(slug)
                .map_or_else(|| slug.to_string(), |stage| stage.label().to_string())
        },
    )
}

/// Derive the terminal status from a backend outcome.
#[must_use]
pub const fn outcome_status(outcome: &RunOutcome) -> RunStatus {
    if outcome.error.is_some() {
        RunStatus::Error
    } else {
        RunStatus::Success
    }
}

/// Settle the run with the given id; other entries pass through untouched.
#[must_use]
pub fn complete_run(runs: &[RunRecord], id: u64, outcome: RunOutcome) -> Vec<RunRecord> {
    runs.iter()
        .map(|record| {
            if record.id == id {
                let mut settled = record.clone();
                settled.status = outcome_status(&outcome);
                settled.outcome = Some(outcome.clone());
                settled
            } else {
                record.clone()
            }
        })
        .collect()
}

/// Count totals for the stat cards.
#[must_use]
pub fn run_counts(runs: &[RunRecord]) -> RunCounts {
    let mut counts = RunCounts {
        total: runs.len(),
        ..RunCounts::default()
    };
    for record in runs {
        match record.status {
            RunStatus::Success => counts.succeeded += 1,
            RunStatus::Error => counts.failed += 1,
            RunStatus::Pending | RunStatus::Running => {}
        }
    }
    counts
}

/// Trimmed niche text; `None` when there is nothing to submit.
#[must_use]
pub fn normalize_niche(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build the dependency-readiness path with the optional live-check flag.
#[must_use]
pub fn build_deps_health_path(live: bool) -> String {
    if live {
        "/api/health/deps?live=true".to_string()
    } else {
        "/api/health/deps".to_string()
    }
}

/// Build the model-ping path with the model name query-encoded.
#[must_use]
pub fn build_gemini_ping_path(model: &str) -> String {
    format!(
        "/api/providers/gemini/ping?model={}",
        urlencoding::encode(model)
    )
}

/// Resolve an artifact location: origin-relative paths go through the
/// endpoint resolver, absolute URLs are used as-is.
#[must_use]
pub fn artifact_href(base: &ApiBase, url: &str) -> String {
    if url.starts_with('/') {
        base.resolve(url)
    } else {
        url.to_string()
    }
}

/// Number of providers reporting ready.
#[must_use]
pub fn ready_providers(report: &DepsHealth) -> usize {
    report.checks().iter().filter(|(_, check)| check.ok).count()
}

/// Share of providers that are ready, as a percent.
#[must_use]
pub fn readiness_percent(report: &DepsHealth) -> u8 {
    clamp_percent(ready_providers(report) * 100 / report.checks().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, status: RunStatus) -> RunRecord {
        RunRecord {
            id,
            title: "space facts".to_string(),
            time: "12:00:00".to_string(),
            status,
            outcome: None,
        }
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(clamp_percent(0), 0);
        assert_eq!(clamp_percent(64), 64);
        assert_eq!(clamp_percent(400), 100);
    }

    #[test]
    fn status_tones_cover_all_states() {
        assert_eq!(status_tone(RunStatus::Pending), "subtle");
        assert_eq!(status_tone(RunStatus::Running), "info");
        assert_eq!(status_tone(RunStatus::Success), "success");
        assert_eq!(status_tone(RunStatus::Error), "error");
    }

    #[test]
    fn progress_credits_completed_stages() {
        assert_eq!(run_progress(RunStatus::Success, Some("renderer")), 100);
        assert_eq!(run_progress(RunStatus::Error, Some("renderer")), 60);
        assert_eq!(run_progress(RunStatus::Error, Some("idea_engine")), 0);
        assert_eq!(run_progress(RunStatus::Error, Some("mystery")), 0);
        assert_eq!(run_progress(RunStatus::Running, None), 0);
    }

    #[test]
    fn stage_display_prefers_labels() {
        assert_eq!(stage_display(Some("media_engine")), "Media engine");
        assert_eq!(stage_display(Some("stage_9")), "stage_9");
        assert_eq!(stage_display(None), "\u{2014}");
    }

    #[test]
    fn outcome_error_wins_over_success() {
        let failed = RunOutcome {
            error: Some("render timed out".to_string()),
            ..RunOutcome::default()
        };
        assert_eq!(outcome_status(&failed), RunStatus::Error);
        assert_eq!(outcome_status(&RunOutcome::default()), RunStatus::Success);
    }

    #[test]
    fn complete_run_settles_only_the_target() {
        let runs = vec![record(1, RunStatus::Running), record(2, RunStatus::Running)];
        let settled = complete_run(&runs, 2, RunOutcome::default());
        assert_eq!(settled[0].status, RunStatus::Running);
        assert_eq!(settled[1].status, RunStatus::Success);
        assert!(settled[1].outcome.is_some());
    }

    #[test]
    fn run_counts_split_by_status() {
        let runs = vec![
            record(1, RunStatus::Success),
            record(2, RunStatus::Error),
            record(3, RunStatus::Running),
        ];
        let counts = run_counts(&runs);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.succeeded, 1);
        assert_eq!(counts.failed, 1);
    }

    #[test]
    fn niche_is_trimmed_or_rejected() {
        assert_eq!(normalize_niche("  deep sea  ").as_deref(), Some("deep sea"));
        assert_eq!(normalize_niche("   "), None);
    }

    #[test]
    fn deps_health_path_toggles_live_checks() {
        assert_eq!(build_deps_health_path(false), "/api/health/deps");
        assert_eq!(build_deps_health_path(true), "/api/health/deps?live=true");
    }

    #[test]
    fn ping_path_encodes_model_names() {
        assert_eq!(
            build_gemini_ping_path("gemini-1.5-flash"),
            "/api/providers/gemini/ping?model=gemini-1.5-flash"
        );
        assert_eq!(
            build_gemini_ping_path("models/exp 1"),
            "/api/providers/gemini/ping?model=models%2Fexp%201"
        );
    }

    #[test]
    fn artifact_links_resolve_relative_paths_only() {
        let base = ApiBase::new("https://backend.example.com");
        assert_eq!(
            artifact_href(&base, "/files/out.mp4"),
            "https://backend.example.com/files/out.mp4"
        );
        assert_eq!(
            artifact_href(&base, "https://cdn.example.com/out.mp4"),
            "https://cdn.example.com/out.mp4"
        );
    }

    #[test]
    fn readiness_counts_ok_providers() {
        let mut report = DepsHealth::default();
        assert_eq!(ready_providers(&report), 0);
        assert_eq!(readiness_percent(&report), 0);
        report.gemini.ok = true;
        report.pexels.ok = true;
        assert_eq!(ready_providers(&report), 2);
        assert_eq!(readiness_percent(&report), 50);
    }
}
