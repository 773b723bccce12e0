//! `POST /predict` — pass an audio upload through the classifier.

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use wavekey_app::ports::{AudioControl, BrightnessControl, CommandClassifier, ScreenCapture};

use crate::error::ApiError;
use crate::state::AppState;

/// Success body for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Wire word of the predicted command.
    pub prediction: String,
}

/// Classify an uploaded audio file.
///
/// Pure pass-through: the upload's `file` field goes to the classifier
/// collaborator and the predicted wire word comes back. Not part of the
/// command path — nothing is dispatched here.
pub async fn predict<AU, SC, BR, CL>(
    State(state): State<AppState<AU, SC, BR, CL>>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, ApiError>
where
    AU: AudioControl + 'static,
    SC: ScreenCapture + 'static,
    BR: BrightnessControl + 'static,
    CL: CommandClassifier + 'static,
{
    let mut audio = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::Upload(err.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ApiError::Upload(err.to_string()))?;
            audio = Some(bytes);
        }
    }

    let audio = audio.ok_or(ApiError::MissingFile)?;
    let token = state
        .classifier
        .classify(&audio)
        .await
        .map_err(ApiError::Classify)?;

    state.log.append(format!("prediction completed: {token}"));
    Ok(Json(PredictResponse {
        prediction: token.wire_word().to_owned(),
    }))
}
