//! Dashboard metrics operation

use super::{ApiClient, ApiError};
use crate::models::DashboardMetrics;

impl ApiClient {
    /// Fetch the derived counts; recomputed server-side per request,
    /// never cached here.
    pub async fn get_dashboard(&self) -> Result<DashboardMetrics, ApiError> {
        self.get_json("/dashboard").await
    }
}
