use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// Lệnh liên quan đến dashboard
// ==========================================

/// Tổng quan một tuần (khoảng ngày + số liệu chung)
#[tauri::command(rename_all = "snake_case")]
pub async fn get_week_overview(
    state: tauri::State<'_, AppState>,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_week_overview(week_number, year)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Bảng xếp hạng hiệu suất nhân viên của một tuần
#[tauri::command(rename_all = "snake_case")]
pub async fn get_week_ranking(
    state: tauri::State<'_, AppState>,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_week_ranking(week_number, year)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Tổng hợp theo phòng ban của một tuần
#[tauri::command(rename_all = "snake_case")]
pub async fn get_department_summaries(
    state: tauri::State<'_, AppState>,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_department_summaries(week_number, year)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Tổng hợp theo phòng ban của một văn phòng
#[tauri::command(rename_all = "snake_case")]
pub async fn get_office_department_summaries(
    state: tauri::State<'_, AppState>,
    office_id: String,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_office_department_summaries(&office_id, week_number, year)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Xu hướng hoàn thành các tuần gần đây (kết thúc tại tuần hiện tại)
#[tauri::command(rename_all = "snake_case")]
pub async fn get_weekly_trend(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_weekly_trend()
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Xu hướng hoàn thành kết thúc tại tuần chỉ định
#[tauri::command(rename_all = "snake_case")]
pub async fn get_weekly_trend_from(
    state: tauri::State<'_, AppState>,
    week_number: u32,
    year: i32,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_weekly_trend_from(week_number, year)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Các thao tác gần nhất
#[tauri::command(rename_all = "snake_case")]
pub async fn get_recent_actions(
    state: tauri::State<'_, AppState>,
    limit: Option<u32>,
) -> Result<String, String> {
    let limit = limit.unwrap_or(50);

    let result = state
        .dashboard_api
        .get_recent_actions(limit)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}
