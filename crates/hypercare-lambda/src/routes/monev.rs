//! `/api/monev/*`: diagnosis reference data and per-session tracking.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use hypercare_core::keys;
use hypercare_core::models::diagnosis::DiagnosisCode;
use hypercare_core::models::monev::{MonevAssessment, MonevSummary, PracticeDetail};
use hypercare_monev::knowledge::Diagnosis;
use hypercare_monev::tracker::MonevTracker;
use hypercare_monev::{all_diagnoses, diagnosis, get_diagnosis_details};
use hypercare_storage::objects::Precondition;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AbilityRequest {
    pub ability: String,
}

#[derive(Deserialize)]
pub struct PracticeDetailsRequest {
    pub ability: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub benefit: String,
    #[serde(default)]
    pub challenges: String,
}

#[derive(Serialize)]
pub struct MonevView {
    pub assessment: Option<MonevAssessment>,
    pub summary: Option<MonevSummary>,
}

pub async fn list_diagnoses() -> Json<Vec<&'static Diagnosis>> {
    Json(all_diagnoses())
}

pub async fn get_diagnosis(Path(code): Path<String>) -> Result<Json<&'static Diagnosis>, ApiError> {
    get_diagnosis_details(&code)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("diagnosis not found: {code}")))
}

fn view(tracker: &MonevTracker, code: DiagnosisCode) -> MonevView {
    MonevView {
        assessment: tracker.snapshot(code),
        summary: tracker.get_summary(code).cloned(),
    }
}

/// Rebuild the tracker for one diagnosis from the stored snapshot, returning
/// the guard the snapshot must be written back with.
async fn load_tracker(
    state: &AppState,
    key: &str,
) -> Result<(MonevTracker, Precondition), ApiError> {
    let mut tracker = MonevTracker::new();
    let precondition = match state.store.load::<MonevAssessment>(key).await? {
        Some(stored) => {
            let precondition = stored.precondition();
            tracker.restore(stored.value);
            precondition
        }
        None => Precondition::IfAbsent,
    };
    Ok((tracker, precondition))
}

/// Run `mutate` against one diagnosis of a session under its key lock, then
/// save against the ETag that was read and return the fresh view. A write
/// that lost a race with another instance surfaces as a conflict.
async fn mutate_session(
    state: &AppState,
    session_id: &str,
    code: &str,
    mutate: impl FnOnce(&mut MonevTracker, DiagnosisCode) -> Result<(), ApiError>,
) -> Result<Json<MonevView>, ApiError> {
    let code: DiagnosisCode = code.parse()?;
    let key = keys::monev_assessment(session_id, code)?;
    let _guard = state.locks.lock(&key).await;

    let (mut tracker, precondition) = load_tracker(state, &key).await?;
    mutate(&mut tracker, code)?;
    if let Some(snapshot) = tracker.snapshot(code) {
        state.store.save(&key, &snapshot, &precondition).await?;
    }
    tracing::debug!(session_id, code = %code, "monev assessment updated");

    Ok(Json(view(&tracker, code)))
}

pub async fn get_session_assessment(
    State(state): State<AppState>,
    Path((session_id, code)): Path<(String, String)>,
) -> Result<Json<MonevView>, ApiError> {
    let code: DiagnosisCode = code.parse()?;
    let key = keys::monev_assessment(&session_id, code)?;
    let (tracker, _) = load_tracker(&state, &key).await?;
    Ok(Json(view(&tracker, code)))
}

pub async fn toggle_symptom(
    State(state): State<AppState>,
    Path((session_id, code, symptom_id)): Path<(String, String, String)>,
) -> Result<Json<MonevView>, ApiError> {
    mutate_session(&state, &session_id, &code, |tracker, code| {
        diagnosis(code).require_symptom(&symptom_id)?;
        tracker.toggle_symptom(code, &symptom_id);
        Ok(())
    })
    .await
}

pub async fn toggle_ability_known(
    State(state): State<AppState>,
    Path((session_id, code)): Path<(String, String)>,
    Json(req): Json<AbilityRequest>,
) -> Result<Json<MonevView>, ApiError> {
    mutate_session(&state, &session_id, &code, |tracker, code| {
        diagnosis(code).require_ability(&req.ability)?;
        tracker.toggle_ability_known(code, &req.ability);
        Ok(())
    })
    .await
}

pub async fn toggle_ability_practiced(
    State(state): State<AppState>,
    Path((session_id, code)): Path<(String, String)>,
    Json(req): Json<AbilityRequest>,
) -> Result<Json<MonevView>, ApiError> {
    mutate_session(&state, &session_id, &code, |tracker, code| {
        diagnosis(code).require_ability(&req.ability)?;
        tracker.toggle_ability_practiced(code, &req.ability);
        Ok(())
    })
    .await
}

pub async fn update_practice_details(
    State(state): State<AppState>,
    Path((session_id, code)): Path<(String, String)>,
    Json(req): Json<PracticeDetailsRequest>,
) -> Result<Json<MonevView>, ApiError> {
    mutate_session(&state, &session_id, &code, |tracker, code| {
        diagnosis(code).require_ability(&req.ability)?;
        tracker.update_practice_details(
            code,
            &req.ability,
            PracticeDetail {
                frequency: req.frequency,
                benefit: req.benefit,
                challenges: req.challenges,
            },
        );
        Ok(())
    })
    .await
}

pub async fn clear_session_assessment(
    State(state): State<AppState>,
    Path((session_id, code)): Path<(String, String)>,
) -> Result<Json<()>, ApiError> {
    let code: DiagnosisCode = code.parse()?;
    let key = keys::monev_assessment(&session_id, code)?;
    let _guard = state.locks.lock(&key).await;

    state.store.delete(&key).await?;
    tracing::info!(session_id = %session_id, code = %code, "monev assessment cleared");
    Ok(Json(()))
}
