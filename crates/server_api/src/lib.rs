use shared::{
    error::{ApiError, ErrorCode},
    protocol::Record,
};
use store::RecordStore;

#[derive(Clone)]
pub struct ApiContext {
    pub store: RecordStore,
}

/// Returns the full ordered record collection. Reads the backing file on
/// every call; a missing or malformed file surfaces as an internal error with
/// no partial result.
pub async fn list_records(ctx: &ApiContext) -> Result<Vec<Record>, ApiError> {
    let records = ctx.store.load().await.map_err(internal)?;
    Ok(records)
}

fn internal(err: anyhow::Error) -> ApiError {
    ApiError::new(ErrorCode::Internal, err.to_string())
}

#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use shared::domain::RecordId;

    use super::*;

    fn context_with_file(contents: &str) -> (ApiContext, PathBuf) {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("server_api_test_{suffix}.json"));
        fs::write(&path, contents).expect("write record file");
        (
            ApiContext {
                store: RecordStore::new(&path),
            },
            path,
        )
    }

    #[tokio::test]
    async fn lists_records_in_file_order() {
        let (ctx, path) = context_with_file(
            r#"[{"id":1,"name":"Item 1"},{"id":2,"name":"Item 2"},{"id":3,"name":"Item 3"}]"#,
        );

        let records = list_records(&ctx).await.expect("records");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, RecordId(1));
        assert_eq!(records[1].name, "Item 2");

        fs::remove_file(path).expect("cleanup");
    }

    #[tokio::test]
    async fn missing_file_maps_to_internal_error() {
        let ctx = ApiContext {
            store: RecordStore::new("/nonexistent/records.json"),
        };
        let err = list_records(&ctx).await.expect_err("should fail");
        assert!(matches!(err.code, ErrorCode::Internal));
    }

    #[tokio::test]
    async fn malformed_file_maps_to_internal_error() {
        let (ctx, path) = context_with_file(r#"[{"id":"one","name":1}]"#);
        let err = list_records(&ctx).await.expect_err("should fail");
        assert!(matches!(err.code, ErrorCode::Internal));

        fs::remove_file(path).expect("cleanup");
    }
}
