// ==========================================
// Hệ thống báo cáo công việc tuần - Mô hình tổ chức
// ==========================================
// Cây tổ chức: văn phòng → phòng ban → vị trí công việc → nhân viên
// ==========================================

use crate::domain::types::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Office - Văn phòng
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub office_id: String,         // ID văn phòng
    pub name: String,              // Tên văn phòng
    pub address: Option<String>,   // Địa chỉ
    pub created_at: DateTime<Utc>, // Thời điểm tạo
}

// ==========================================
// Department - Phòng ban
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub department_id: String,     // ID phòng ban
    pub office_id: String,         // Văn phòng trực thuộc
    pub name: String,              // Tên phòng ban
    pub created_at: DateTime<Utc>, // Thời điểm tạo
}

// ==========================================
// JobPosition - Vị trí công việc
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosition {
    pub position_id: String,       // ID vị trí
    pub department_id: String,     // Phòng ban trực thuộc
    pub title: String,             // Chức danh
    pub created_at: DateTime<Utc>, // Thời điểm tạo
}

// ==========================================
// Employee - Nhân viên
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,         // ID nhân viên
    pub department_id: String,       // Phòng ban trực thuộc
    pub position_id: Option<String>, // Vị trí công việc (có thể chưa gán)
    pub full_name: String,           // Họ tên
    pub email: Option<String>,       // Email liên hệ
    pub role: UserRole,              // Vai trò trong hệ thống
    pub created_at: DateTime<Utc>,   // Thời điểm tạo
}
