//! Shared DTOs matching the pipeline backend API.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a submitted pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Accepted but not yet started.
    Pending,
    /// Request in flight; the pipeline is executing.
    Running,
    /// Pipeline finished and produced an artifact.
    Success,
    /// Pipeline failed or the request errored.
    Error,
}

impl RunStatus {
    /// Display label shown in pills and the timeline.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// Pipeline stages in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Topic selection.
    IdeaEngine,
    /// Script generation.
    Scriptwriter,
    /// Stock footage and narration assembly.
    MediaEngine,
    /// Video rendering.
    Renderer,
    /// Upload/distribution.
    Distributor,
}

impl Stage {
    /// All stages in execution order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::IdeaEngine,
            Self::Scriptwriter,
            Self::MediaEngine,
            Self::Renderer,
            Self::Distributor,
        ]
    }

    /// Parse the stage slug reported by the backend.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "idea_engine" => Some(Self::IdeaEngine),
            "scriptwriter" => Some(Self::Scriptwriter),
            "media_engine" => Some(Self::MediaEngine),
            "renderer" => Some(Self::Renderer),
            "distributor" => Some(Self::Distributor),
            _ => None,
        }
    }

    /// Display label for the stage.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IdeaEngine => "Idea engine",
            Self::Scriptwriter => "Scriptwriter",
            Self::MediaEngine => "Media engine",
            Self::Renderer => "Renderer",
            Self::Distributor => "Distributor",
        }
    }

    /// 1-based position in the pipeline.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::IdeaEngine => 1,
            Self::Scriptwriter => 2,
            Self::MediaEngine => 3,
            Self::Renderer => 4,
            Self::Distributor => 5,
        }
    }
}

/// Request body for starting a pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunRequest {
    /// Topic the pipeline should produce a video for.
    pub niche: String,
    /// Whether the distributor stage should upload the result.
    pub upload: bool,
    /// Request debug-level backend logging for this run.
    pub verbose: bool,
}

/// Terminal outcome of a pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RunOutcome {
    /// Queue ticket; currently always absent.
    #[serde(default)]
    pub job_id: Option<String>,
    /// Slug of the last stage the pipeline reached.
    #[serde(default)]
    pub stage: Option<String>,
    /// Location of the rendered video, origin-relative or absolute.
    #[serde(default)]
    pub final_video_url: Option<String>,
    /// Whether the distributor uploaded the result.
    #[serde(default)]
    pub uploaded: bool,
    /// Failure detail when the pipeline did not complete.
    #[serde(default)]
    pub error: Option<String>,
}

/// Niche suggestion response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SuggestResponse {
    /// Suggested topic, when the model produced one.
    #[serde(default)]
    pub niche: Option<String>,
    /// Failure detail otherwise.
    #[serde(default)]
    pub error: Option<String>,
}

/// Liveness probe payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when the backend is up.
    pub status: String,
}

/// Single provider credential/readiness check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DepCheck {
    /// Whether the provider is usable.
    #[serde(default)]
    pub ok: bool,
    /// Human-readable detail (missing key, HTTP status, ...).
    #[serde(default)]
    pub message: String,
}

/// Dependency readiness report for all upstream providers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DepsHealth {
    /// Backend is running with stubbed providers.
    #[serde(default)]
    pub dev_mode: bool,
    /// Script/idea model provider.
    #[serde(default)]
    pub gemini: DepCheck,
    /// Stock footage provider.
    #[serde(default)]
    pub pexels: DepCheck,
    /// Narration provider.
    #[serde(default)]
    pub elevenlabs: DepCheck,
    /// Render provider.
    #[serde(default)]
    pub shotstack: DepCheck,
}

impl DepsHealth {
    /// Labelled provider checks in display order.
    #[must_use]
    pub fn checks(&self) -> [(&'static str, &DepCheck); 4] {
        [
            ("Gemini", &self.gemini),
            ("Pexels", &self.pexels),
            ("ElevenLabs", &self.elevenlabs),
            ("Shotstack", &self.shotstack),
        ]
    }
}

/// Model inventory for the script provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GeminiModels {
    /// Whether the inventory request succeeded.
    #[serde(default)]
    pub ok: bool,
    /// Model names available to the configured key.
    #[serde(default)]
    pub models: Vec<String>,
}

/// Result of pinging one script-provider model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GeminiPing {
    /// Whether the model answered.
    #[serde(default)]
    pub ok: bool,
    /// Upstream HTTP status code.
    #[serde(default)]
    pub status: u16,
}

/// One timeline entry for a submitted run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRecord {
    /// Locally assigned, monotonically increasing id.
    pub id: u64,
    /// Topic the run was started with.
    pub title: String,
    /// Wall-clock label captured at submission.
    pub time: String,
    /// Current lifecycle status.
    pub status: RunStatus,
    /// Backend outcome once the run finished.
    pub outcome: Option<RunOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_outcome_deserializes_backend_shape() {
        let outcome: RunOutcome = serde_json::from_str(
            r#"{"job_id":null,"stage":"renderer","final_video_url":"/files/out.mp4","uploaded":false,"error":null}"#,
        )
        .expect("valid payload");
        assert_eq!(outcome.stage.as_deref(), Some("renderer"));
        assert_eq!(outcome.final_video_url.as_deref(), Some("/files/out.mp4"));
        assert!(!outcome.uploaded);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn deps_health_tolerates_missing_providers() {
        let report: DepsHealth =
            serde_json::from_str(r#"{"dev_mode":true,"gemini":{"ok":true,"message":""}}"#)
                .expect("valid payload");
        assert!(report.dev_mode);
        assert!(report.gemini.ok);
        assert!(!report.pexels.ok);
        assert_eq!(report.checks().len(), 4);
    }

    #[test]
    fn run_request_serializes_expected_fields() {
        let body = serde_json::to_value(RunRequest {
            niche: "space facts".to_string(),
            upload: true,
            verbose: false,
        })
        .expect("serializable");
        assert_eq!(body["niche"], "space facts");
        assert_eq!(body["upload"], true);
        assert_eq!(body["verbose"], false);
    }

    #[test]
    fn stage_slugs_round_trip_in_order() {
        let ordinals: Vec<u8> = Stage::all().iter().map(|stage| stage.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
        assert_eq!(Stage::from_slug("media_engine"), Some(Stage::MediaEngine));
        assert_eq!(Stage::from_slug("unknown"), None);
    }

    #[test]
    fn status_labels_match_display_domain() {
        assert_eq!(RunStatus::Pending.label(), "Pending");
        assert_eq!(RunStatus::Error.label(), "Error");
    }
}
