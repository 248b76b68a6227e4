use crate::app::state::AppState;

// ==========================================
// Lệnh liên quan đến cấu hình
// ==========================================

/// Liệt kê toàn bộ cấu hình
#[tauri::command(rename_all = "snake_case")]
pub async fn list_configs(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .config_manager
        .list_configs()
        .map_err(|e| format!("Đọc cấu hình thất bại: {}", e))?;

    serde_json::to_string(&result).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Đọc một khóa cấu hình
#[tauri::command(rename_all = "snake_case")]
pub async fn get_config(
    state: tauri::State<'_, AppState>,
    key: String,
) -> Result<String, String> {
    let value = state
        .config_manager
        .get_global_config_value(&key)
        .map_err(|e| format!("Đọc cấu hình thất bại: {}", e))?;

    serde_json::to_string(&value).map_err(|e| format!("Tuần tự hóa thất bại: {}", e))
}

/// Cập nhật một khóa cấu hình
#[tauri::command(rename_all = "snake_case")]
pub async fn update_config(
    state: tauri::State<'_, AppState>,
    key: String,
    value: String,
) -> Result<String, String> {
    state
        .config_manager
        .update_config(&key, &value)
        .map_err(|e| format!("Cập nhật cấu hình thất bại: {}", e))?;

    Ok(crate::i18n::t("config.updated"))
}

/// Ảnh chụp cấu hình (JSON)
#[tauri::command(rename_all = "snake_case")]
pub async fn get_config_snapshot(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state
        .config_manager
        .get_config_snapshot()
        .map_err(|e| format!("Tạo ảnh chụp cấu hình thất bại: {}", e))
}

/// Đổi ngôn ngữ giao diện
#[tauri::command(rename_all = "snake_case")]
pub async fn set_app_locale(locale: String) -> Result<String, String> {
    crate::i18n::set_locale(&locale);
    Ok(crate::i18n::current_locale())
}
