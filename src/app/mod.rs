// ==========================================
// Hệ thống báo cáo công việc tuần - Tầng ứng dụng
// ==========================================
// Trách nhiệm: tích hợp Tauri, nối front-end với back-end
// ==========================================

pub mod state;
pub mod tauri_commands;

// Tái xuất
pub use state::{get_default_db_path, AppState};

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
