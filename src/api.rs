use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::auth::Session;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    parse_records, CategoryCorrection, CategoryTotals, Insights, MonthlySummary, Summary, TransactionId,
    TransactionRecord, UploadResult,
};

pub const TRANSACTIONS_PATH: &str = "/transactions";
pub const SUMMARY_PATH: &str = "/summary";
pub const CATEGORIES_PATH: &str = "/summary/categories";
pub const MONTHLY_PATH: &str = "/summary/monthly";
pub const INSIGHTS_PATH: &str = "/summary/insights";
pub const UPLOAD_PATH: &str = "/transactions/upload";

pub fn correction_path(id: TransactionId) -> String {
    format!("{TRANSACTIONS_PATH}/{id}/correct")
}

/// Maps a non-2xx status to an error. FastAPI puts the reason in `detail`.
pub fn status_error(path: &str, status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_default();
    ApiError::Status {
        path: path.to_string(),
        status,
        message,
    }
}

/// Thin wrapper over the tracker's HTTP API. Every request carries the
/// session's bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self { config, session }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", &self.session.bearer())
    }

    async fn checked(&self, path: &str, request: Request) -> Result<Response, ApiError> {
        let response = request.send().await?;
        log::debug!("{} -> {}", path, response.status());
        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(path, response.status(), &body))
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorized(Request::get(&self.config.api_url(path)))
            .build()?;
        let response = self.checked(path, request).await?;
        Self::decode(path, response).await
    }

    pub async fn transactions(&self) -> Result<Vec<TransactionRecord>, ApiError> {
        let raw: Vec<Value> = self.get_json(TRANSACTIONS_PATH).await?;
        Ok(parse_records(raw))
    }

    pub async fn summary(&self) -> Result<Summary, ApiError> {
        self.get_json(SUMMARY_PATH).await
    }

    pub async fn category_totals(&self) -> Result<CategoryTotals, ApiError> {
        self.get_json(CATEGORIES_PATH).await
    }

    pub async fn monthly(&self) -> Result<MonthlySummary, ApiError> {
        self.get_json(MONTHLY_PATH).await
    }

    pub async fn insights(&self) -> Result<Insights, ApiError> {
        self.get_json(INSIGHTS_PATH).await
    }

    pub async fn correct_category(&self, id: TransactionId, category: &str) -> Result<(), ApiError> {
        let path = correction_path(id);
        let request = self
            .authorized(Request::put(&self.config.api_url(&path)))
            .json(&CategoryCorrection { category })?;
        self.checked(&path, request).await?;
        log::info!("transaction {id} recategorised as {category}");
        Ok(())
    }

    pub async fn upload_csv(&self, file: &File) -> Result<UploadResult, ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Browser(format!("{e:?}")))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Browser(format!("{e:?}")))?;

        let request = self
            .authorized(Request::post(&self.config.api_url(UPLOAD_PATH)))
            .body(form)?;
        let response = self.checked(UPLOAD_PATH, request).await?;
        let result: UploadResult = Self::decode(UPLOAD_PATH, response).await?;
        log::info!(
            "uploaded {}: {} ({} transactions inserted)",
            file.name(),
            result.message,
            result.transactions_inserted
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_path() {
        assert_eq!(correction_path(42), "/transactions/42/correct");
    }

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(status_error("/summary", 401, ""), ApiError::Unauthorized);
    }

    #[test]
    fn test_status_error_reads_detail() {
        let err = status_error(
            "/transactions/9/correct",
            404,
            r#"{"detail": "Transaction not found"}"#,
        );
        assert_eq!(
            err,
            ApiError::Status {
                path: "/transactions/9/correct".into(),
                status: 404,
                message: "Transaction not found".into(),
            }
        );
    }

    #[test]
    fn test_status_error_without_detail() {
        match status_error("/summary", 500, "<html>oops</html>") {
            ApiError::Status { status, message, .. } => {
                assert_eq!(status, 500);
                assert!(message.is_empty());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
