use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::errors::api::TrustError;
use crate::providers::TrustScoreProvider;
use crate::types::dto::trust::TrustScore;

/// Trust score API endpoints
pub struct TrustScoreApi {
    provider: Arc<TrustScoreProvider>,
}

impl TrustScoreApi {
    pub fn new(provider: Arc<TrustScoreProvider>) -> Self {
        Self { provider }
    }
}

/// API tags for trust endpoints
#[derive(Tags)]
enum ApiTags {
    /// Reputation endpoints
    Trust,
}

#[OpenApi]
impl TrustScoreApi {
    /// Get a user's trust score
    ///
    /// Keyed by user id; unknown ids return 404.
    #[oai(path = "/trust-score/:user_id", method = "get", tag = "ApiTags::Trust")]
    async fn get_trust_score(&self, user_id: Path<String>) -> Result<Json<TrustScore>, TrustError> {
        match self.provider.get(&user_id.0) {
            Some(score) => Ok(Json(score)),
            None => Err(TrustError::not_found(&user_id.0)),
        }
    }
}
