use crate::api::report_api::ReportTaskInput;
use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// Lệnh liên quan đến báo cáo
// ==========================================

/// Tạo báo cáo tuần
#[tauri::command(rename_all = "snake_case")]
pub async fn create_report(
    state: tauri::State<'_, AppState>,
    employee_id: String,
    week_number: u32,
    year: i32,
    tasks: Vec<ReportTaskInput>,
) -> Result<String, String> {
    let result = state
        .report_api
        .create_report(&employee_id, week_number, year, tasks)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Cập nhật báo cáo tuần
#[tauri::command(rename_all = "snake_case")]
pub async fn update_report(
    state: tauri::State<'_, AppState>,
    report_id: String,
    tasks: Vec<ReportTaskInput>,
) -> Result<String, String> {
    let result = state
        .report_api
        .update_report(&report_id, tasks)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Xóa báo cáo tuần
#[tauri::command(rename_all = "snake_case")]
pub async fn delete_report(
    state: tauri::State<'_, AppState>,
    report_id: String,
) -> Result<String, String> {
    state
        .report_api
        .delete_report(&report_id)
        .await
        .map_err(map_api_error)?;

    Ok(crate::i18n::t("report.deleted"))
}

/// Lấy chi tiết báo cáo
#[tauri::command(rename_all = "snake_case")]
pub async fn get_report(
    state: tauri::State<'_, AppState>,
    report_id: String,
) -> Result<String, String> {
    let result = state.report_api.get_report(&report_id).map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Danh sách báo cáo của một tuần
#[tauri::command(rename_all = "snake_case")]
pub async fn list_reports_by_week(
    state: tauri::State<'_, AppState>,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    let result = state
        .report_api
        .list_reports_by_week(week_number, year)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Danh sách báo cáo của một nhân viên
#[tauri::command(rename_all = "snake_case")]
pub async fn list_reports_by_employee(
    state: tauri::State<'_, AppState>,
    employee_id: String,
    limit: Option<u32>,
) -> Result<String, String> {
    let limit = limit.unwrap_or(20);

    let result = state
        .report_api
        .list_reports_by_employee(&employee_id, limit)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Xuất báo cáo của một tuần ra CSV
#[tauri::command(rename_all = "snake_case")]
pub async fn export_week_csv(
    state: tauri::State<'_, AppState>,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    state
        .report_api
        .export_week_csv(week_number, year)
        .await
        .map_err(map_api_error)
}
