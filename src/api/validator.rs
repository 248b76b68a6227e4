// ==========================================
// Hệ thống báo cáo công việc tuần - Bộ kiểm tra phạm vi tuần/năm
// ==========================================
// Trách nhiệm: chặn (tuần, năm) ngoài phạm vi nghiệp vụ trước khi
// đi vào engine và kho dữ liệu
// Phạm vi tuần: [1, 53]; phạm vi năm đọc từ cấu hình
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::report_config_trait::ReportConfigReader;
use std::sync::Arc;

// ==========================================
// WeekRangeValidator
// ==========================================
pub struct WeekRangeValidator<C>
where
    C: ReportConfigReader,
{
    config: Arc<C>,
}

impl<C> WeekRangeValidator<C>
where
    C: ReportConfigReader,
{
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Kiểm tra (tuần, năm) nằm trong phạm vi nghiệp vụ
    ///
    /// # Quy tắc
    /// - Số tuần thuộc [1, 53] (tuần 53 có thực hay không do
    ///   WorkWeekCore quyết định tiếp theo từng năm)
    /// - Năm thuộc cửa sổ cấu hình (mặc định 2020-2030)
    ///
    /// # Trả về
    /// - Ok(()): hợp lệ
    /// - Err(ApiError::InvalidInput): ngoài phạm vi, kèm thông điệp
    pub async fn validate_week_year(&self, week_number: u32, year: i32) -> ApiResult<()> {
        if week_number < 1 || week_number > 53 {
            return Err(ApiError::InvalidInput(
                "Số tuần phải nằm trong khoảng 1-53".to_string(),
            ));
        }

        let min_year = self
            .config
            .get_report_min_year()
            .await
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        let max_year = self
            .config
            .get_report_max_year()
            .await
            .map_err(|e| ApiError::InternalError(e.to_string()))?;

        if year < min_year || year > max_year {
            return Err(ApiError::InvalidInput(format!(
                "Năm báo cáo phải nằm trong khoảng {}-{}",
                min_year, max_year
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::error::Error;

    // ==========================================
    // Mock ConfigReader
    // ==========================================
    struct MockConfigReader;

    #[async_trait]
    impl ReportConfigReader for MockConfigReader {
        async fn get_report_min_year(&self) -> Result<i32, Box<dyn Error>> {
            Ok(2020)
        }

        async fn get_report_max_year(&self) -> Result<i32, Box<dyn Error>> {
            Ok(2030)
        }

        async fn get_trend_weeks(&self) -> Result<u32, Box<dyn Error>> {
            Ok(8)
        }

        async fn get_default_locale(&self) -> Result<String, Box<dyn Error>> {
            Ok("vi".to_string())
        }
    }

    #[tokio::test]
    async fn test_validate_week_year_ok() {
        let validator = WeekRangeValidator::new(Arc::new(MockConfigReader));
        assert!(validator.validate_week_year(1, 2020).await.is_ok());
        assert!(validator.validate_week_year(53, 2030).await.is_ok());
        assert!(validator.validate_week_year(32, 2025).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_week_out_of_range() {
        let validator = WeekRangeValidator::new(Arc::new(MockConfigReader));

        let err = validator.validate_week_year(0, 2025).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = validator.validate_week_year(54, 2025).await.unwrap_err();
        assert!(err.to_string().contains("1-53"));
    }

    #[tokio::test]
    async fn test_validate_year_out_of_window() {
        let validator = WeekRangeValidator::new(Arc::new(MockConfigReader));

        let err = validator.validate_week_year(10, 2019).await.unwrap_err();
        assert!(err.to_string().contains("2020-2030"));

        let err = validator.validate_week_year(10, 2031).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
