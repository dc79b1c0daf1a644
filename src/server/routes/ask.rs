//! Question-answering endpoint

use axum::{extract::State, Json};

use crate::error::{Error, Result};
use crate::generation::{build_context, FALLBACK_ANSWER, SYSTEM_INSTRUCTION};
use crate::server::state::AppState;
use crate::types::{AskRequest, AskResponse};

/// POST /ask/ - Answer a question about a stored document
///
/// Looks up the document, extracts its page texts, joins them into one flat
/// context string, and forwards system instruction, context, and question to
/// the answer engine as three distinct segments. The context is unbounded:
/// no chunking, summarization, or retrieval-narrowing happens here.
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    tracing::info!(
        "Question for document {}: \"{}\"",
        request.document_id,
        request.question
    );

    let record = state
        .repository()
        .get(request.document_id)?
        .ok_or(Error::DocumentNotFound(request.document_id))?;

    let pages = state.extractor().extract(&record.url).await?;
    let context = build_context(&pages);

    tracing::debug!(
        "Extracted {} pages ({} chars of context) from {}",
        pages.len(),
        context.len(),
        record.file_name
    );

    let answer = state
        .answer_engine()
        .complete(SYSTEM_INSTRUCTION, &context, &request.question)
        .await?
        .unwrap_or_else(|| FALLBACK_ANSWER.to_string());

    Ok(Json(AskResponse { answer }))
}
