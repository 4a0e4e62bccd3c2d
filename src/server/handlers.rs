use std::sync::Arc;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::prompt::{Analysis, EnhancedPrompt, ModelRecommendation, PromptPipeline, PromptReport};
use super::error::{ApiError, ApiResult};

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Prompt Processing API</title></head>
<body>
<h1>Prompt Processing API</h1>
<p>Analyze a prompt, get a model recommendation for it and an enhanced version.</p>
<ul>
<li><code>POST /analyze-prompt</code> with <code>{"prompt": "..."}</code></li>
<li><code>POST /select-llm</code> with <code>{"prompt": "...", "analysis": {...}}</code></li>
<li><code>POST /enhance-prompt</code> with <code>{"prompt": "...", "analysis": {...}}</code></li>
<li><code>POST /process-prompt</code> with <code>{"prompt": "..."}</code></li>
</ul>
</body>
</html>
"#;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PromptPipeline>,
}

impl AppState {
    pub fn new(pipeline: PromptPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    #[serde(default)]
    pub analysis: Option<Analysis>,
}

impl PromptRequest {
    fn require_analysis(&self) -> ApiResult<&Analysis> {
        self.analysis
            .as_ref()
            .ok_or_else(|| ApiError::internal("analysis is required for this operation"))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: Analysis,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommended_llm: ModelRecommendation,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhancementResponse {
    pub enhanced_prompt: EnhancedPrompt,
}

fn prompt_size(prompt: &str) -> String {
    format!("{} chars", prompt.chars().count())
}

/// GET /
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

/// POST /analyze-prompt
pub async fn analyze_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> ApiResult<Json<AnalysisResponse>> {
    info!("Analyze request ({})", prompt_size(&request.prompt));
    let analysis = state.pipeline.analyze(&request.prompt).await;
    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /select-llm
pub async fn select_llm(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> ApiResult<Json<RecommendationResponse>> {
    let analysis = request.require_analysis()?;
    let recommended_llm = state.pipeline.select(analysis);
    Ok(Json(RecommendationResponse { recommended_llm }))
}

/// POST /enhance-prompt
pub async fn enhance_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> ApiResult<Json<EnhancementResponse>> {
    let analysis = request.require_analysis()?;
    let enhanced_prompt = state.pipeline.enhance(&request.prompt, analysis).await;
    Ok(Json(EnhancementResponse { enhanced_prompt }))
}

/// POST /process-prompt
pub async fn process_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> ApiResult<Json<PromptReport>> {
    info!("Process request ({})", prompt_size(&request.prompt));
    Ok(Json(state.pipeline.process(&request.prompt).await))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/analyze-prompt", post(analyze_prompt))
        .route("/select-llm", post(select_llm))
        .route("/enhance-prompt", post(enhance_prompt))
        .route("/process-prompt", post(process_prompt))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_analysis_is_rejected() {
        let request: PromptRequest = serde_json::from_value(json!({ "prompt": "hi" })).unwrap();
        let error = request.require_analysis().unwrap_err();
        assert_eq!(error.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn prompt_size_counts_characters_not_bytes() {
        assert_eq!(prompt_size("résumé"), "6 chars");
        assert_eq!(prompt_size(""), "0 chars");
    }

    #[test]
    fn request_with_null_analysis_is_rejected() {
        let request: PromptRequest =
            serde_json::from_value(json!({ "prompt": "hi", "analysis": null })).unwrap();
        assert!(request.require_analysis().is_err());
    }
}
