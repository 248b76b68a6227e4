// ==========================================
// Hệ thống báo cáo công việc tuần - Điểm vào Tauri
// ==========================================
// Kiến trúc: Tauri + Rust + SQLite
// ==========================================

// Không hiện cửa sổ console (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use weekly_report_system::app::{get_default_db_path, AppState};

#[cfg(feature = "tauri-app")]
fn main() {
    use weekly_report_system::app::tauri_commands::*;

    // Khởi tạo hệ thống log
    weekly_report_system::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", weekly_report_system::APP_NAME);
    tracing::info!("Phiên bản: {}", weekly_report_system::VERSION);
    tracing::info!("==================================================");

    // Đường dẫn cơ sở dữ liệu
    let db_path = get_default_db_path();
    tracing::info!("Cơ sở dữ liệu: {}", db_path);

    // Khởi tạo AppState
    tracing::info!("Đang khởi tạo AppState...");
    let app_state = AppState::new(db_path).expect("Không khởi tạo được AppState");

    tracing::info!("AppState khởi tạo thành công");
    tracing::info!("Khởi động ứng dụng Tauri...");

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // Lệnh báo cáo (7 lệnh)
            // ==========================================
            create_report,
            update_report,
            delete_report,
            get_report,
            list_reports_by_week,
            list_reports_by_employee,
            export_week_csv,

            // ==========================================
            // Lệnh tuần làm việc & phân loại (5 lệnh)
            // ==========================================
            get_current_week,
            get_work_week_from_date,
            get_work_week_range,
            check_week_eligibility,
            classify_performance,

            // ==========================================
            // Lệnh dashboard (7 lệnh)
            // ==========================================
            get_week_overview,
            get_week_ranking,
            get_department_summaries,
            get_office_department_summaries,
            get_weekly_trend,
            get_weekly_trend_from,
            get_recent_actions,

            // ==========================================
            // Lệnh tổ chức (9 lệnh)
            // ==========================================
            create_office,
            list_offices,
            create_department,
            list_departments,
            create_position,
            list_positions_by_department,
            create_employee,
            get_employee,
            list_employees,

            // ==========================================
            // Lệnh cấu hình (5 lệnh)
            // ==========================================
            list_configs,
            get_config,
            update_config,
            get_config_snapshot,
            set_app_locale,
        ])
        .run(tauri::generate_context!())
        .expect("Khởi động ứng dụng Tauri thất bại");

    tracing::info!("Ứng dụng Tauri đã thoát");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", weekly_report_system::APP_NAME);
    println!("Phiên bản: {}", weekly_report_system::VERSION);
    println!("==================================================");
    println!();
    println!("File thực thi này cần đặc tính tauri-app");
    println!("Dùng: cargo run --features tauri-app");
    println!();
    println!("Hoặc dùng ở chế độ thư viện:");
    println!("use weekly_report_system::app::AppState;");

    // Ở chế độ thư viện vẫn có thể kiểm tra nhanh cơ sở dữ liệu
    let db_path = get_default_db_path();
    match AppState::new(db_path) {
        Ok(state) => println!("Cơ sở dữ liệu sẵn sàng: {}", state.get_db_path()),
        Err(e) => eprintln!("Không khởi tạo được AppState: {}", e),
    }
}
