use axum::Json;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use crate::config::Config;
use crate::models::profile::{ExperienceLevel, Lift, LiftMaxes, LifterProfile};
use crate::models::program::Scheme;
use crate::services::program_generator::ProgramGenerator;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: ProgramGenerator,
}

/// Wire format of the profile as the web client stores it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProgramRequest {
    pub experience: ExperienceLevel,
    pub bodyweight: Option<f64>,
    pub current_maxes: LiftMaxes,
    pub days_per_week: u32,
    pub duration_weeks: Option<u32>,
    pub priority_lift: Lift,
    /// Discount applied to the stored 1RMs before any percentage math.
    pub training_max_percentage: Option<u32>,
    pub scheme: Option<Scheme>,
}

fn training_max_factor(value: Option<u32>) -> Result<f64, String> {
    match value {
        None | Some(100) => Ok(1.0),
        Some(95) => Ok(0.95),
        Some(90) => Ok(0.90),
        Some(other) => Err(format!(
            "trainingMaxPercentage must be 90, 95 or 100 (got {other})"
        )),
    }
}

pub async fn generate_program(
    State(state): State<AppState>,
    Json(request): Json<GenerateProgramRequest>,
) -> impl IntoResponse {
    tracing::info!(
        experience = ?request.experience,
        days_per_week = request.days_per_week,
        bodyweight = ?request.bodyweight,
        "program.requested"
    );

    let factor = match training_max_factor(request.training_max_percentage) {
        Ok(factor) => factor,
        Err(message) => {
            tracing::warn!(error = %message, "program.rejected");
            return (StatusCode::UNPROCESSABLE_ENTITY, message).into_response();
        }
    };

    let profile = LifterProfile {
        experience: request.experience,
        maxes: request.current_maxes.scaled(factor),
        days_per_week: request.days_per_week,
        duration_weeks: request.duration_weeks,
        priority_lift: request.priority_lift,
        scheme: request.scheme,
    };

    match state.generator.generate(&profile) {
        Ok(recommendation) => {
            tracing::info!(
                scheme = recommendation.program.scheme.label(),
                duration_weeks = recommendation.program.duration_weeks,
                "program.generated"
            );
            (StatusCode::OK, Json(recommendation)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "program.rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
    }
}
