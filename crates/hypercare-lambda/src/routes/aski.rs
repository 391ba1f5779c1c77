//! `/api/aski/*`: the interview registry and per-conversation state rows.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use hypercare_aski::error::AskiError;
use hypercare_aski::tracker::{self, PhaseProgress};
use hypercare_aski::variable::InterviewVariable;
use hypercare_aski::{get_variable, variables};
use hypercare_core::keys;
use hypercare_core::models::aski_state::AssessmentStateRow;
use hypercare_core::models::phase::Phase;
use hypercare_storage::objects::Precondition;
use hypercare_storage::store::Versioned;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ConversationQuery {
    pub user_id: String,
    pub conversation_id: String,
}

#[derive(Deserialize)]
pub struct CaptureRequest {
    pub user_id: String,
    pub conversation_id: String,
    pub variable: String,
    pub value: serde_json::Value,
}

#[derive(Deserialize)]
pub struct SafetyPatch {
    pub user_id: String,
    pub conversation_id: String,
    pub is_high_risk: Option<bool>,
    pub safety_acknowledged: Option<bool>,
    pub current_phase: Option<String>,
}

#[derive(Serialize)]
pub struct AssessmentStateResponse {
    #[serde(flatten)]
    pub state: AssessmentStateRow,
    pub phase_progress: PhaseProgress,
    pub overall_progress: PhaseProgress,
}

impl From<AssessmentStateRow> for AssessmentStateResponse {
    fn from(state: AssessmentStateRow) -> Self {
        let phase_progress =
            tracker::phase_progress_by_name(&state.current_phase, &state.captured_variables);
        let overall_progress = tracker::overall_progress(&state.captured_variables);
        Self {
            state,
            phase_progress,
            overall_progress,
        }
    }
}

#[derive(Serialize)]
pub struct PhaseInfo {
    phase: Phase,
    variables: Vec<&'static str>,
}

pub async fn list_variables() -> Json<&'static [InterviewVariable]> {
    Json(variables())
}

pub async fn list_phases() -> Json<Vec<PhaseInfo>> {
    let phases = Phase::ALL
        .into_iter()
        .map(|phase| PhaseInfo {
            phase,
            variables: hypercare_aski::variables_for_phase(phase).map(|v| v.id).collect(),
        })
        .collect();
    Json(phases)
}

/// Point the row at the next question, walking forward through phases as
/// they run dry. Rows holding an unrecognised phase restart the walk from
/// orientation; captured answers are kept so nothing is asked twice.
fn apply_advance(row: &mut AssessmentStateRow) {
    let from = row.phase().unwrap_or(Phase::Orientation);
    let step = tracker::advance(from, &row.captured_variables);
    if step.phase.as_str() != row.current_phase {
        tracing::info!(
            user_id = %row.user_id,
            conversation_id = %row.conversation_id,
            from = %row.current_phase,
            to = %step.phase,
            "interview phase advanced"
        );
        row.current_phase = step.phase.as_str().to_string();
    }
    row.current_variable = step.current_variable.map(str::to_string);
}

/// Point a row that lost its current question back at the next one in its
/// own phase. Only a capture moves the interview to a later phase, so a
/// phase forced through PUT holds even when it has nothing left to ask.
fn fill_current_variable(row: &mut AssessmentStateRow) {
    match row.phase() {
        Some(phase) => {
            row.current_variable =
                tracker::get_next_askable_variable(phase, &row.captured_variables)
                    .map(str::to_string);
        }
        None => apply_advance(row),
    }
}

async fn save_row(
    state: &AppState,
    key: &str,
    row: &AssessmentStateRow,
    precondition: &Precondition,
) -> Result<(), ApiError> {
    state.store.save(key, row, precondition).await?;
    Ok(())
}

pub async fn get_assessment_state(
    State(state): State<AppState>,
    Query(query): Query<ConversationQuery>,
) -> Result<Json<AssessmentStateResponse>, ApiError> {
    let key = keys::assessment_state(&query.user_id, &query.conversation_id)?;
    let _guard = state.locks.lock(&key).await;

    let row = match state.store.load::<AssessmentStateRow>(&key).await? {
        Some(Versioned { value: mut row, etag }) => {
            if row.current_variable.is_none() {
                let before = row.clone();
                fill_current_variable(&mut row);
                if row != before {
                    row.updated_at = jiff::Timestamp::now();
                    save_row(&state, &key, &row, &Precondition::IfMatch(etag)).await?;
                }
            }
            row
        }
        None => {
            let mut row = AssessmentStateRow::new(
                &query.user_id,
                &query.conversation_id,
                jiff::Timestamp::now(),
            );
            apply_advance(&mut row);
            save_row(&state, &key, &row, &Precondition::IfAbsent).await?;
            tracing::info!(key = %key, "assessment state created");
            row
        }
    };

    Ok(Json(row.into()))
}

pub async fn capture_variable(
    State(state): State<AppState>,
    Json(req): Json<CaptureRequest>,
) -> Result<Json<AssessmentStateResponse>, ApiError> {
    let variable = get_variable(&req.variable)
        .ok_or_else(|| AskiError::UnknownVariable(req.variable.clone()))?;
    let key = keys::assessment_state(&req.user_id, &req.conversation_id)?;
    let _guard = state.locks.lock(&key).await;

    let (mut row, precondition) = match state.store.load::<AssessmentStateRow>(&key).await? {
        Some(loaded) => {
            let precondition = loaded.precondition();
            (loaded.value, precondition)
        }
        None => (
            AssessmentStateRow::new(&req.user_id, &req.conversation_id, jiff::Timestamp::now()),
            Precondition::IfAbsent,
        ),
    };

    row.captured_variables =
        tracker::capture_variable(variable.id, req.value, &row.captured_variables);
    if !row.is_high_risk && tracker::is_high_risk(&row.captured_variables) {
        tracing::warn!(key = %key, "suicidal ideation reported, conversation flagged high risk");
        row.is_high_risk = true;
    }
    apply_advance(&mut row);
    row.updated_at = jiff::Timestamp::now();

    save_row(&state, &key, &row, &precondition).await?;
    tracing::debug!(
        key = %key,
        variable = variable.id,
        next = ?row.current_variable,
        "variable captured"
    );

    Ok(Json(row.into()))
}

pub async fn patch_assessment_state(
    State(state): State<AppState>,
    Json(patch): Json<SafetyPatch>,
) -> Result<Json<AssessmentStateResponse>, ApiError> {
    let key = keys::assessment_state(&patch.user_id, &patch.conversation_id)?;
    let forced_phase = patch
        .current_phase
        .as_deref()
        .map(str::parse::<Phase>)
        .transpose()?;
    let _guard = state.locks.lock(&key).await;

    let loaded = state
        .store
        .load::<AssessmentStateRow>(&key)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no assessment state for {key}")))?;
    let precondition = loaded.precondition();
    let mut row = loaded.value;

    if let Some(flag) = patch.is_high_risk {
        row.is_high_risk = flag;
    }
    if let Some(flag) = patch.safety_acknowledged {
        row.safety_acknowledged = flag;
    }
    if let Some(phase) = forced_phase {
        tracing::info!(key = %key, phase = %phase, "interview phase forced");
        row.current_phase = phase.as_str().to_string();
        row.current_variable = tracker::get_next_askable_variable(phase, &row.captured_variables)
            .map(str::to_string);
    }
    row.updated_at = jiff::Timestamp::now();

    save_row(&state, &key, &row, &precondition).await?;
    Ok(Json(row.into()))
}
