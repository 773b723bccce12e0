//! `POST /command` — manual command submission.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use wavekey_app::ports::{AudioControl, BrightnessControl, CommandClassifier, ScreenCapture};
use wavekey_domain::command::{CommandOrigin, CommandToken};
use wavekey_domain::outcome::ActionOutcome;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /command`.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    /// The wire word to execute.
    #[serde(default)]
    pub command: Option<String>,
}

/// Success body for `POST /command`.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// Always `true` — failures return an error body instead.
    pub success: bool,
}

/// Submit one command through the shared dispatcher.
///
/// A missing or empty `command` field is rejected with 400 before anything
/// is dispatched. Unrecognised words are *not* rejected: they dispatch as
/// [`CommandToken::Unknown`], resolve to a logged no-op, and still report
/// success. Only an executed-and-failed action maps to 500.
pub async fn submit<AU, SC, BR, CL>(
    State(state): State<AppState<AU, SC, BR, CL>>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, ApiError>
where
    AU: AudioControl + 'static,
    SC: ScreenCapture + 'static,
    BR: BrightnessControl + 'static,
    CL: CommandClassifier + 'static,
{
    let word = request
        .command
        .as_deref()
        .filter(|word| !word.is_empty())
        .ok_or(ApiError::MissingCommand)?;

    let token = CommandToken::from_wire(word);
    let outcome = state.dispatcher.submit(token, CommandOrigin::Http).await;

    match outcome {
        ActionOutcome::Failed(detail) => Err(ApiError::ActionFailed(detail)),
        ActionOutcome::Completed(_) | ActionOutcome::Skipped(_) => {
            Ok(Json(CommandResponse { success: true }))
        }
    }
}
