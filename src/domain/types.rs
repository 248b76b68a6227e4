// ==========================================
// Hệ thống báo cáo công việc tuần - Kiểu dữ liệu miền
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Bậc hiệu suất (Performance Level)
// ==========================================
// Thứ tự: Poor < Average < Good < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceLevel {
    Poor,      // Yếu
    Average,   // Trung bình
    Good,      // Tốt
    Excellent, // Xuất sắc
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceLevel::Poor => write!(f, "POOR"),
            PerformanceLevel::Average => write!(f, "AVERAGE"),
            PerformanceLevel::Good => write!(f, "GOOD"),
            PerformanceLevel::Excellent => write!(f, "EXCELLENT"),
        }
    }
}

impl PerformanceLevel {
    /// Phân tích từ chuỗi
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "EXCELLENT" => PerformanceLevel::Excellent,
            "GOOD" => PerformanceLevel::Good,
            "AVERAGE" => PerformanceLevel::Average,
            _ => PerformanceLevel::Poor, // Giá trị mặc định
        }
    }

    /// Chuỗi lưu trong cơ sở dữ liệu
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Poor => "POOR",
            PerformanceLevel::Average => "AVERAGE",
            PerformanceLevel::Good => "GOOD",
            PerformanceLevel::Excellent => "EXCELLENT",
        }
    }
}

// ==========================================
// Vai trò người dùng (User Role)
// ==========================================
// Quyết định phạm vi dashboard: toàn hệ thống / phòng ban / cá nhân
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,    // Quản trị hệ thống
    Manager,  // Trưởng phòng
    Employee, // Nhân viên
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "ADMIN"),
            UserRole::Manager => write!(f, "MANAGER"),
            UserRole::Employee => write!(f, "EMPLOYEE"),
        }
    }
}

impl UserRole {
    /// Phân tích từ chuỗi
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ADMIN" => UserRole::Admin,
            "MANAGER" => UserRole::Manager,
            _ => UserRole::Employee, // Giá trị mặc định
        }
    }

    /// Chuỗi lưu trong cơ sở dữ liệu
    pub fn to_db_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Manager => "MANAGER",
            UserRole::Employee => "EMPLOYEE",
        }
    }
}

// ==========================================
// Thao tác báo cáo (Report Action)
// ==========================================
// Mỗi thao tác có cửa sổ tuần hợp lệ riêng (xem engine::eligibility_core)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportAction {
    Create, // Tạo báo cáo
    Edit,   // Chỉnh sửa báo cáo
    Delete, // Xóa báo cáo
}

impl fmt::Display for ReportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportAction::Create => write!(f, "CREATE"),
            ReportAction::Edit => write!(f, "EDIT"),
            ReportAction::Delete => write!(f, "DELETE"),
        }
    }
}

impl ReportAction {
    /// Chuỗi lưu trong cơ sở dữ liệu (dùng cho action_log)
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReportAction::Create => "CREATE",
            ReportAction::Edit => "EDIT",
            ReportAction::Delete => "DELETE",
        }
    }
}
