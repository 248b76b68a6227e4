use crate::app::state::AppState;
use crate::domain::types::ReportAction;
use crate::domain::workweek::WorkWeekKey;
use crate::engine::{EligibilityCore, PerformanceCore, WorkWeekCore};

use super::common::parse_date;

// ==========================================
// Lệnh liên quan đến tuần làm việc & phân loại hiệu suất
// ==========================================
// Các lệnh này là hàm thuần, không cần AppState (trừ kiểm tra cửa sổ
// dùng đồng hồ hệ thống)
// ==========================================

/// Tuần làm việc hiện tại
#[tauri::command(rename_all = "snake_case")]
pub async fn get_current_week() -> Result<String, String> {
    let key = WorkWeekCore::current_week();
    serde_json::to_string(&key).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Tuần làm việc chứa một ngày bất kỳ
#[tauri::command(rename_all = "snake_case")]
pub async fn get_work_week_from_date(date: String) -> Result<String, String> {
    let date = parse_date(&date)?;
    let key = WorkWeekCore::work_week_from_date(date);
    serde_json::to_string(&key).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Khoảng ngày của một tuần làm việc
#[tauri::command(rename_all = "snake_case")]
pub async fn get_work_week_range(week_number: u32, year: i32) -> Result<String, String> {
    let range = WorkWeekCore::work_week_range(week_number, year).map_err(|e| e.to_string())?;
    serde_json::to_string(&range).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Kiểm tra cửa sổ tuần cho một thao tác báo cáo
///
/// action: "CREATE" | "EDIT" | "DELETE"
#[tauri::command(rename_all = "snake_case")]
pub async fn check_week_eligibility(
    _state: tauri::State<'_, AppState>,
    action: String,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    let action = match action.to_uppercase().as_str() {
        "CREATE" => ReportAction::Create,
        "EDIT" => ReportAction::Edit,
        "DELETE" => ReportAction::Delete,
        other => return Err(format!("Thao tác không hợp lệ: {}", other)),
    };

    let target = WorkWeekKey::new(week_number, year);
    let current = WorkWeekCore::current_week();
    let result = EligibilityCore::check_action(action, target, current);

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Phân loại hiệu suất từ tỷ lệ hoàn thành
#[tauri::command(rename_all = "snake_case")]
pub async fn classify_performance(percentage: f64) -> Result<String, String> {
    let classification = PerformanceCore::classify(percentage);
    serde_json::to_string(&classification).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}
