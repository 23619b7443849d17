use async_trait::async_trait;

use crate::{Lead, StoreError};

/// Identifier assigned by the store to a created row.
pub type RecordId = String;

/// Remote table holding lead records.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Creates one row for the lead. Duplicate leads create duplicate rows.
    async fn create_record(&self, lead: &Lead) -> Result<RecordId, StoreError>;
}
