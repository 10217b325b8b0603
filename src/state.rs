use std::sync::Arc;

use crate::{domains::otp::service::OtpService, email::Mailer};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_verification_code(
    &self,
    email: &str,
    otp: &str,
  ) -> impl std::future::Future<Output = anyhow::Result<String>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub otp_service: Arc<OtpService>,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn Mailer>) -> Self {
    let otp_service = Arc::new(OtpService::new(mailer));

    Self { otp_service }
  }
}

impl AppState for SharedAppState {
  async fn send_verification_code(&self, email: &str, otp: &str) -> anyhow::Result<String> {
    self.otp_service.send_verification_code(email, otp).await
  }
}
