use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{SendOtpRequest, SendOtpResponse};
use crate::{
  state::{AppState, SharedAppState},
  utils::error::AppError,
};

pub fn otp_routes() -> Router<SharedAppState> {
  Router::new().route("/send-otp", post(send_otp_handler))
}

pub async fn send_otp_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendOtpRequest>,
) -> Result<JsonResponse<SendOtpResponse>, AppError> {
  let (email, otp) = match (payload.email.as_deref(), payload.otp.as_deref()) {
    (Some(email), Some(otp)) if !email.is_empty() && !otp.is_empty() => (email, otp),
    _ => return Err(AppError::bad_request("email and otp are required")),
  };

  match state.send_verification_code(email, otp).await {
    Ok(message_id) => Ok(JsonResponse(SendOtpResponse {
      success: true,
      message_id,
    })),
    Err(e) => {
      tracing::error!("send-otp error: {}", e);
      Err(AppError::internal_server_error("Failed to send email").with_details(e.to_string()))
    }
  }
}
