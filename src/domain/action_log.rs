// ==========================================
// Hệ thống báo cáo công việc tuần - Nhật ký thao tác
// ==========================================
// Mọi thao tác ghi (tạo/sửa/xóa báo cáo) đều phải để lại dấu vết
// ==========================================

use crate::domain::types::ReportAction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ActionLog - Bản ghi nhật ký
// ==========================================
// Dùng cho kiểm toán và màn hình "hoạt động gần đây"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    pub log_id: String,             // ID bản ghi (uuid)
    pub action_type: ReportAction,  // Loại thao tác
    pub report_id: Option<String>,  // Báo cáo liên quan (None nếu đã bị xóa)
    pub employee_id: String,        // Nhân viên thực hiện
    pub week_number: u32,           // Tuần của báo cáo
    pub year: i32,                  // Năm của báo cáo
    pub detail: Option<String>,     // Mô tả chi tiết
    pub created_at: DateTime<Utc>,  // Thời điểm thao tác
}

impl ActionLog {
    /// Tạo bản ghi mới cho một thao tác báo cáo
    pub fn new(
        action_type: ReportAction,
        report_id: Option<String>,
        employee_id: &str,
        week_number: u32,
        year: i32,
        detail: Option<String>,
    ) -> Self {
        Self {
            log_id: uuid::Uuid::new_v4().to_string(),
            action_type,
            report_id,
            employee_id: employee_id.to_string(),
            week_number,
            year,
            detail,
            created_at: Utc::now(),
        }
    }
}
