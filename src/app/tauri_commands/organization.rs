use crate::app::state::AppState;
use crate::domain::types::UserRole;

use super::common::map_api_error;

// ==========================================
// Lệnh liên quan đến tổ chức
// ==========================================

/// Tạo văn phòng
#[tauri::command(rename_all = "snake_case")]
pub async fn create_office(
    state: tauri::State<'_, AppState>,
    name: String,
    address: Option<String>,
) -> Result<String, String> {
    let result = state
        .organization_api
        .create_office(&name, address)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Danh sách văn phòng
#[tauri::command(rename_all = "snake_case")]
pub async fn list_offices(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.organization_api.list_offices().map_err(map_api_error)?;
    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Tạo phòng ban
#[tauri::command(rename_all = "snake_case")]
pub async fn create_department(
    state: tauri::State<'_, AppState>,
    office_id: String,
    name: String,
) -> Result<String, String> {
    let result = state
        .organization_api
        .create_department(&office_id, &name)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Danh sách phòng ban (toàn hệ thống hoặc theo văn phòng)
#[tauri::command(rename_all = "snake_case")]
pub async fn list_departments(
    state: tauri::State<'_, AppState>,
    office_id: Option<String>,
) -> Result<String, String> {
    let result = match office_id {
        Some(office_id) => state
            .organization_api
            .list_departments_by_office(&office_id)
            .map_err(map_api_error)?,
        None => state.organization_api.list_departments().map_err(map_api_error)?,
    };

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Tạo vị trí công việc
#[tauri::command(rename_all = "snake_case")]
pub async fn create_position(
    state: tauri::State<'_, AppState>,
    department_id: String,
    title: String,
) -> Result<String, String> {
    let result = state
        .organization_api
        .create_position(&department_id, &title)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Danh sách vị trí của một phòng ban
#[tauri::command(rename_all = "snake_case")]
pub async fn list_positions_by_department(
    state: tauri::State<'_, AppState>,
    department_id: String,
) -> Result<String, String> {
    let result = state
        .organization_api
        .list_positions_by_department(&department_id)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Thêm nhân viên
#[tauri::command(rename_all = "snake_case")]
pub async fn create_employee(
    state: tauri::State<'_, AppState>,
    department_id: String,
    position_id: Option<String>,
    full_name: String,
    email: Option<String>,
    role: Option<String>,
) -> Result<String, String> {
    let role = role
        .map(|r| UserRole::from_str(&r))
        .unwrap_or(UserRole::Employee);

    let result = state
        .organization_api
        .create_employee(&department_id, position_id, &full_name, email, role)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Thông tin một nhân viên
#[tauri::command(rename_all = "snake_case")]
pub async fn get_employee(
    state: tauri::State<'_, AppState>,
    employee_id: String,
) -> Result<String, String> {
    let result = state
        .organization_api
        .get_employee(&employee_id)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Danh sách nhân viên (toàn hệ thống hoặc theo phòng ban)
#[tauri::command(rename_all = "snake_case")]
pub async fn list_employees(
    state: tauri::State<'_, AppState>,
    department_id: Option<String>,
) -> Result<String, String> {
    let result = match department_id {
        Some(department_id) => state
            .organization_api
            .list_employees_by_department(&department_id)
            .map_err(map_api_error)?,
        None => state.organization_api.list_employees().map_err(map_api_error)?,
    };

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}
