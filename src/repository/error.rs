// ==========================================
// Hệ thống báo cáo công việc tuần - Lỗi tầng kho dữ liệu
// ==========================================
// Công cụ: macro derive của thiserror
// ==========================================

use thiserror::Error;

/// Kiểu lỗi tầng kho dữ liệu
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Lỗi cơ sở dữ liệu =====
    #[error("Không tìm thấy bản ghi: {entity} với id={id}")]
    NotFound { entity: String, id: String },

    #[error("Kết nối cơ sở dữ liệu thất bại: {0}")]
    DatabaseConnectionError(String),

    #[error("Không lấy được khóa cơ sở dữ liệu: {0}")]
    LockError(String),

    #[error("Giao dịch cơ sở dữ liệu thất bại: {0}")]
    DatabaseTransactionError(String),

    #[error("Truy vấn cơ sở dữ liệu thất bại: {0}")]
    DatabaseQueryError(String),

    #[error("Vi phạm ràng buộc duy nhất: {0}")]
    UniqueConstraintViolation(String),

    #[error("Vi phạm ràng buộc khóa ngoại: {0}")]
    ForeignKeyViolation(String),

    // ===== Lỗi quy tắc nghiệp vụ =====
    #[error("Vi phạm quy tắc nghiệp vụ: {0}")]
    BusinessRuleViolation(String),

    // ===== Lỗi chất lượng dữ liệu =====
    #[error("Xác thực dữ liệu thất bại: {0}")]
    ValidationError(String),

    // ===== Lỗi chung =====
    #[error("Lỗi nội bộ: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Chuyển đổi từ rusqlite::Error
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Bí danh kiểu Result
pub type RepositoryResult<T> = Result<T, RepositoryError>;
