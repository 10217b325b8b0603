use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SendOtpRequest {
  pub email: Option<String>,
  pub otp: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendOtpResponse {
  pub success: bool,
  #[serde(rename = "messageId")]
  pub message_id: String,
}
