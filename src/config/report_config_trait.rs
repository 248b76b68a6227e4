// ==========================================
// Hệ thống báo cáo công việc tuần - Trait đọc cấu hình báo cáo
// ==========================================
// Trách nhiệm: định nghĩa giao diện đọc cấu hình cho tầng API/engine
// (không bao gồm hiện thực)
// Nguyên tắc: không chứa ghi cấu hình, không chứa logic nghiệp vụ
// ==========================================

use async_trait::async_trait;
use std::error::Error;

// ==========================================
// ReportConfigReader Trait
// ==========================================
// Hiện thực: ConfigManager (đọc từ bảng config_kv)
#[async_trait]
pub trait ReportConfigReader: Send + Sync {
    // ===== Cửa sổ năm hợp lệ của báo cáo =====

    /// Năm báo cáo nhỏ nhất được chấp nhận
    ///
    /// # Mặc định
    /// - 2020
    async fn get_report_min_year(&self) -> Result<i32, Box<dyn Error>>;

    /// Năm báo cáo lớn nhất được chấp nhận
    ///
    /// # Mặc định
    /// - 2030
    async fn get_report_max_year(&self) -> Result<i32, Box<dyn Error>>;

    // ===== Dashboard =====

    /// Số tuần hiển thị trên biểu đồ xu hướng
    ///
    /// # Mặc định
    /// - 8
    async fn get_trend_weeks(&self) -> Result<u32, Box<dyn Error>>;

    // ===== Giao diện =====

    /// Ngôn ngữ mặc định của ứng dụng
    ///
    /// # Mặc định
    /// - "vi"
    async fn get_default_locale(&self) -> Result<String, Box<dyn Error>>;
}
