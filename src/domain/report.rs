// ==========================================
// Hệ thống báo cáo công việc tuần - Mô hình báo cáo
// ==========================================
// Một nhân viên có tối đa một báo cáo cho mỗi (tuần, năm)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// WeeklyReport - Báo cáo tuần
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub report_id: String,          // ID báo cáo (uuid)
    pub employee_id: String,        // Nhân viên lập báo cáo
    pub week_number: u32,           // Số tuần làm việc [1..53]
    pub year: i32,                  // Năm của tuần làm việc
    pub tasks: Vec<ReportTask>,     // Danh sách đầu việc trong tuần
    pub created_at: DateTime<Utc>,  // Thời điểm tạo
    pub updated_at: DateTime<Utc>,  // Thời điểm cập nhật gần nhất
}

impl WeeklyReport {
    /// Tỷ lệ hoàn thành (%) = số đầu việc hoàn thành / tổng số đầu việc × 100
    ///
    /// Báo cáo không có đầu việc nào → 0%
    pub fn completion_rate(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let completed = self.tasks.iter().filter(|t| t.is_completed).count();
        completed as f64 / self.tasks.len() as f64 * 100.0
    }

    /// Số đầu việc đã hoàn thành
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }
}

// ==========================================
// ReportTask - Đầu việc trong báo cáo
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTask {
    pub task_id: String,        // ID đầu việc (uuid)
    pub name: String,           // Nội dung công việc
    pub is_completed: bool,     // Đã hoàn thành chưa
    pub note: Option<String>,   // Ghi chú (tuỳ chọn)
    pub seq_no: i32,            // Thứ tự hiển thị trong báo cáo
}
