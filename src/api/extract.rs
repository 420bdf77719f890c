// =============================================================================
// ChainTrack AI - Request Extractors
// =============================================================================

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};

use crate::error::ApiError;
use crate::predictor::FeatureVector;

/// JSON feature vector whose parse failures become 422 validation errors.
#[derive(Debug, Clone, Copy)]
pub struct Features(pub FeatureVector);

#[async_trait]
impl<S> FromRequest<S> for Features
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(features) = Json::<FeatureVector>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(features))
    }
}
