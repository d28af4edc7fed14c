use super::{AuditQueryService, common};
use crate::{
    application::{
        dto::{AuditRecordDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::audit::cursor::AuditCursor,
};

pub struct RecordHistoryQuery {
    pub record_type: String,
    pub record_id: i64,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl AuditQueryService {
    /// All audit rows whose polymorphic link matches the given tracked
    /// record, newest first.
    pub async fn record_history(
        &self,
        query: RecordHistoryQuery,
    ) -> ApplicationResult<CursorPage<AuditRecordDto>> {
        let limit = common::normalize_limit(query.limit);
        let typed_cursor = self.decode_cursor(query.cursor.as_deref())?;

        let (items, next_cursor) = self
            .repo
            .find_by_record(&query.record_type, query.record_id, limit, typed_cursor)
            .await
            .map_err(ApplicationError::from)?;
        let dtos: Vec<_> = items.into_iter().map(Into::<AuditRecordDto>::into).collect();
        Ok(CursorPage::new(
            dtos,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }

    fn decode_cursor(&self, cursor: Option<&str>) -> ApplicationResult<Option<AuditCursor>> {
        match cursor {
            Some(token) => Ok(Some(
                AuditCursor::decode(token).map_err(ApplicationError::from)?,
            )),
            None => Ok(None),
        }
    }
}
