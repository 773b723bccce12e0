//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use wavekey_app::ports::{AudioControl, BrightnessControl, CommandClassifier, ScreenCapture};

use crate::api;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<AU, SC, BR, CL>(state: AppState<AU, SC, BR, CL>) -> Router
where
    AU: AudioControl + 'static,
    SC: ScreenCapture + 'static,
    BR: BrightnessControl + 'static,
    CL: CommandClassifier + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/command", post(api::command::submit::<AU, SC, BR, CL>))
        .route("/logs", get(api::logs::list::<AU, SC, BR, CL>))
        .route("/predict", post(api::predict::predict::<AU, SC, BR, CL>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use wavekey_app::activity_log::ActivityLog;
    use wavekey_app::dispatcher::CommandDispatcher;
    use wavekey_app::executor::ActionExecutor;
    use wavekey_app::ports::VolumeLevel;
    use wavekey_domain::command::CommandToken;
    use wavekey_domain::error::{ActionError, ClassifyError};

    use super::*;

    #[derive(Clone, Default)]
    struct StubAudio {
        applied: Arc<Mutex<Vec<VolumeLevel>>>,
        fail: bool,
    }

    impl AudioControl for StubAudio {
        async fn set_volume(&self, level: VolumeLevel) -> Result<(), ActionError> {
            if self.fail {
                return Err(ActionError::Unavailable("audio endpoint"));
            }
            self.applied.lock().unwrap().push(level);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct StubScreen;

    impl ScreenCapture for StubScreen {
        async fn capture(&self) -> Result<PathBuf, ActionError> {
            Ok(PathBuf::from("/tmp/screenshot.png"))
        }
    }

    #[derive(Clone, Default)]
    struct StubBrightness;

    impl BrightnessControl for StubBrightness {
        async fn set_brightness(&self, _percent: u8) -> Result<(), ActionError> {
            Ok(())
        }
    }

    #[derive(Clone, Copy, Default)]
    struct StubClassifier;

    impl CommandClassifier for StubClassifier {
        async fn classify(&self, audio: &[u8]) -> Result<CommandToken, ClassifyError> {
            let text = std::str::from_utf8(audio).map_err(|_| ClassifyError::InvalidAudio)?;
            Ok(CommandToken::from_wire(text))
        }
    }

    fn app_with(
        audio: StubAudio,
        log: ActivityLog,
    ) -> Router {
        let executor = ActionExecutor::new(
            audio,
            StubScreen,
            StubBrightness,
            Duration::from_secs(5),
        );
        let dispatcher = Arc::new(CommandDispatcher::new(executor, log.clone()));
        build(AppState::new(dispatcher, log, Arc::new(StubClassifier)))
    }

    fn app() -> Router {
        app_with(StubAudio::default(), ActivityLog::default())
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_execute_volume_command_and_report_success() {
        let audio = StubAudio::default();
        let app = app_with(audio.clone(), ActivityLog::default());

        let response = app
            .oneshot(json_request("/command", r#"{"command":"ses_ac"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"success": true}));
        assert_eq!(audio.applied.lock().unwrap().as_slice(), &[VolumeLevel::Max]);
    }

    #[tokio::test]
    async fn should_report_success_for_unmapped_command() {
        let audio = StubAudio::default();
        let log = ActivityLog::default();
        let app = app_with(audio.clone(), log.clone());

        let response = app
            .oneshot(json_request("/command", r#"{"command":"bilinmeyen"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"success": true}));
        assert!(audio.applied.lock().unwrap().is_empty());
        assert!(log.messages().iter().any(|m| m.contains("skipped")));
    }

    #[tokio::test]
    async fn should_reject_missing_command_with_bad_request() {
        let log = ActivityLog::default();
        let app = app_with(StubAudio::default(), log.clone());

        let response = app.oneshot(json_request("/command", "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
        // Rejected before dispatch: no receipt/outcome entries.
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn should_reject_empty_command_with_bad_request() {
        let response = app()
            .oneshot(json_request("/command", r#"{"command":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_map_action_failure_to_internal_error() {
        let audio = StubAudio {
            fail: true,
            ..StubAudio::default()
        };
        let app = app_with(audio, ActivityLog::default());

        let response = app
            .oneshot(json_request("/command", r#"{"command":"ses_kapat"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "audio endpoint unavailable");
    }

    #[tokio::test]
    async fn should_list_logs_in_insertion_order() {
        let log = ActivityLog::default();
        log.append("scanning for 'ESP32_Control'");
        log.append("found 'ESP32_Control' at AA:BB:CC:DD:EE:FF");
        let app = app_with(StubAudio::default(), log);

        let response = app
            .oneshot(Request::builder().uri("/logs").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!([
                "scanning for 'ESP32_Control'",
                "found 'ESP32_Control' at AA:BB:CC:DD:EE:FF",
            ])
        );
    }

    fn multipart_request(uri: &str, payload: &[u8]) -> Request<Body> {
        let boundary = "wavekey-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\ncontent-disposition: form-data; name=\"file\"; filename=\"clip.wav\"\r\ncontent-type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn should_predict_command_from_upload() {
        let response = app()
            .oneshot(multipart_request("/predict", b"ekran_goruntusu"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"prediction": "ekran_goruntusu"})
        );
    }

    #[tokio::test]
    async fn should_reject_upload_without_file_field() {
        let boundary = "wavekey-test-boundary";
        let body = format!(
            "--{boundary}\r\ncontent-disposition: form-data; name=\"other\"\r\n\r\nx\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/predict")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_invalid_audio_with_bad_request() {
        let response = app()
            .oneshot(multipart_request("/predict", &[0xff, 0x00, 0x12]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
