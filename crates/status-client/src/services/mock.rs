//! Recording transport for unit tests

use async_trait::async_trait;
use parking_lot::Mutex;
use status_core::{
    DomainError, PortResult, StatusTransport, UpdateSettingsRequest, UpdateStatusRequest,
};

#[derive(Default)]
pub struct MockTransport {
    pub status_requests: Mutex<Vec<UpdateStatusRequest>>,
    pub settings_requests: Mutex<Vec<UpdateSettingsRequest>>,
    /// HTTP status to fail every request with
    pub fail_with: Option<u16>,
}

impl MockTransport {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    fn outcome(&self) -> PortResult<()> {
        match self.fail_with {
            Some(status) => Err(DomainError::transport(Some(status), "rejected by mock")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StatusTransport for MockTransport {
    async fn update_status(&self, request: &UpdateStatusRequest) -> PortResult<()> {
        self.status_requests.lock().push(request.clone());
        self.outcome()
    }

    async fn update_settings(&self, request: &UpdateSettingsRequest) -> PortResult<()> {
        self.settings_requests.lock().push(*request);
        self.outcome()
    }
}
