use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteImageParams {
    pub image_id: i64,
}

#[async_trait]
pub trait DeleteImageUseCase: Send + Sync {
    async fn execute(&self, params: DeleteImageParams) -> Result<(), ProductError>;
}
