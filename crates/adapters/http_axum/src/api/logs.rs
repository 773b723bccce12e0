//! `GET /logs` — read-only view over the shared activity log.

use axum::Json;
use axum::extract::State;

use wavekey_app::ports::{AudioControl, BrightnessControl, CommandClassifier, ScreenCapture};

use crate::state::AppState;

/// Return every retained log entry as a plain string, in insertion order.
pub async fn list<AU, SC, BR, CL>(
    State(state): State<AppState<AU, SC, BR, CL>>,
) -> Json<Vec<String>>
where
    AU: AudioControl + 'static,
    SC: ScreenCapture + 'static,
    BR: BrightnessControl + 'static,
    CL: CommandClassifier + 'static,
{
    Json(state.log.messages())
}
