// ==========================================
// Hệ thống báo cáo công việc tuần - Mô hình tuần làm việc
// ==========================================
// Tuần làm việc: chu kỳ 6 ngày Thứ Sáu → Thứ Năm, không gồm Chủ nhật
// (Thứ Sáu + Thứ Bảy khép sổ chu kỳ trước, Thứ Hai → Thứ Năm mở chu kỳ mới)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// WorkWeekKey - Định danh tuần làm việc
// ==========================================
// Giá trị dẫn xuất, không lưu trữ; luôn tính lại từ ngày hoặc từ input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkWeekKey {
    pub week_number: u32, // Số tuần [1..53]
    pub year: i32,        // Năm ISO mà tuần thuộc về (sau điều chỉnh cuối năm)
}

impl WorkWeekKey {
    pub fn new(week_number: u32, year: i32) -> Self {
        Self { week_number, year }
    }
}

impl fmt::Display for WorkWeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuần {}/{}", self.week_number, self.year)
    }
}

// ==========================================
// WorkWeekRange - Khoảng ngày của một tuần làm việc
// ==========================================
// Bất biến: end_date - start_date = 6 ngày; work_days không chứa Chủ nhật;
// result_days là 4 ngày cuối của work_days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkWeekRange {
    pub start_date: NaiveDate,       // Thứ Sáu mở tuần
    pub end_date: NaiveDate,         // Thứ Năm khép tuần (6 ngày sau)
    pub work_days: Vec<NaiveDate>,   // [T6, T7, T2, T3, T4, T5]
    pub result_days: Vec<NaiveDate>, // [T2, T3, T4, T5] - ngày chốt kết quả
    pub display_label: String,       // Nhãn hiển thị, ví dụ "Tuần 32/2025 (01/08 - 07/08/2025)"
}

impl WorkWeekRange {
    /// Ngày có nằm trong khoảng [start_date, end_date] không
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

// ==========================================
// WeekEligibility - Kết quả kiểm tra cửa sổ tuần
// ==========================================
// Không bao giờ là exception: mọi kiểm tra đều trả về giá trị này,
// reason là chuỗi hiển thị trực tiếp cho người dùng
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEligibility {
    pub is_valid: bool,         // Có được phép thao tác không
    pub reason: Option<String>, // Lý do từ chối (nếu có)
}

impl WeekEligibility {
    /// Kết quả hợp lệ
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    /// Kết quả không hợp lệ kèm lý do
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}
