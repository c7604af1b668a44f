//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::analyzer::AnalysisResult;
use crate::analysis::keywords::{extract_keywords, KeywordEntry};
use crate::analysis::scoring::ScoreBand;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreBandSummary {
    pub band: ScoreBand,
    pub headline: &'static str,
    pub description: &'static str,
}

impl From<ScoreBand> for ScoreBandSummary {
    fn from(band: ScoreBand) -> Self {
        Self {
            band,
            headline: band.headline(),
            description: band.description(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub score_band: ScoreBandSummary,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<KeywordEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores a resume against a job description and returns the full analysis
/// plus the display band for the score.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let analyzer = Arc::clone(&state.analyzer);
    let analysis = tokio::task::spawn_blocking(move || {
        analyzer.analyze(&request.resume_text, &request.job_description)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Analysis task failed: {e}")))??;

    let band = ScoreBand::from_score(analysis.ats_score);
    info!(
        "Analysis served: score {} ({:?}), {} suggestions",
        analysis.ats_score,
        band,
        analysis.suggestions.len()
    );

    Ok(Json(AnalyzeResponse {
        analysis,
        score_band: band.into(),
    }))
}

/// POST /api/v1/keywords
///
/// Previews the ranked keyword inventory of a job description.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let keywords = extract_keywords(&request.text, &state.analyzer.tables().stopwords);
    Ok(Json(KeywordsResponse { keywords }))
}
