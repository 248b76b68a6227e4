// ==========================================
// Hệ thống báo cáo công việc tuần - Lỗi tầng API
// ==========================================
// Trách nhiệm: định nghĩa lỗi tầng API, chuyển lỗi Repository thành
// thông điệp thân thiện với người dùng
// Nguyên tắc: mọi lỗi đều phải nêu rõ nguyên nhân
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Kiểu lỗi tầng API
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Lỗi quy tắc nghiệp vụ
    // ==========================================
    /// Thao tác ngoài cửa sổ tuần cho phép (mang nguyên văn lý do
    /// từ engine kiểm tra để hiển thị cho người dùng)
    #[error("{0}")]
    EligibilityViolation(String),

    #[error("Dữ liệu đầu vào không hợp lệ: {0}")]
    InvalidInput(String),

    #[error("Không tìm thấy: {0}")]
    NotFound(String),

    #[error("Vi phạm quy tắc nghiệp vụ: {0}")]
    BusinessRuleViolation(String),

    // ==========================================
    // Lỗi truy xuất dữ liệu
    // ==========================================
    #[error("Lỗi cơ sở dữ liệu: {0}")]
    DatabaseError(String),

    #[error("Kết nối cơ sở dữ liệu thất bại: {0}")]
    DatabaseConnectionError(String),

    #[error("Giao dịch cơ sở dữ liệu thất bại: {0}")]
    DatabaseTransactionError(String),

    // ==========================================
    // Lỗi xuất dữ liệu
    // ==========================================
    #[error("Xuất báo cáo thất bại: {0}")]
    ExportError(String),

    #[error("Xác thực dữ liệu thất bại: {0}")]
    ValidationError(String),

    // ==========================================
    // Lỗi chung
    // ==========================================
    #[error("Lỗi nội bộ: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Chuyển đổi từ RepositoryError
// Mục đích: biến lỗi kỹ thuật tầng kho thành lỗi nghiệp vụ dễ hiểu
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // Lỗi cơ sở dữ liệu
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) không tồn tại", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("Không lấy được khóa cơ sở dữ liệu: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("Vi phạm ràng buộc duy nhất: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("Vi phạm ràng buộc khóa ngoại: {}", msg))
            }

            // Lỗi quy tắc nghiệp vụ
            RepositoryError::BusinessRuleViolation(msg) => ApiError::BusinessRuleViolation(msg),

            // Lỗi chất lượng dữ liệu
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),

            // Lỗi chung
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Bí danh kiểu Result
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        // Chuyển đổi NotFound
        let repo_err = RepositoryError::NotFound {
            entity: "WeeklyReport".to_string(),
            id: "R001".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("WeeklyReport"));
                assert!(msg.contains("R001"));
            }
            _ => panic!("Expected NotFound"),
        }

        // Chuyển đổi ràng buộc duy nhất
        let repo_err = RepositoryError::UniqueConstraintViolation("UNIQUE".to_string());
        let api_err: ApiError = repo_err.into();
        assert!(matches!(api_err, ApiError::BusinessRuleViolation(_)));
    }

    #[test]
    fn test_eligibility_violation_preserves_reason() {
        let err = ApiError::EligibilityViolation(
            "Chỉ có thể xóa báo cáo của tuần hiện tại và tuần tiếp theo".to_string(),
        );
        // Thông điệp hiển thị đúng nguyên văn lý do
        assert_eq!(
            err.to_string(),
            "Chỉ có thể xóa báo cáo của tuần hiện tại và tuần tiếp theo"
        );
    }
}
