// ==========================================
// Công cụ seed dữ liệu demo
// ==========================================
// Tạo cây tổ chức mẫu + báo cáo mẫu cho vài tuần gần nhất
// Cách dùng: cargo run --bin seed_demo_data [đường_dẫn_db]
// ==========================================

use std::error::Error;
use std::sync::Arc;

use chrono::Local;

use weekly_report_system::api::report_api::ReportTaskInput;
use weekly_report_system::api::{OrganizationApi, ReportApi};
use weekly_report_system::app::get_default_db_path;
use weekly_report_system::config::ConfigManager;
use weekly_report_system::db;
use weekly_report_system::domain::types::UserRole;
use weekly_report_system::engine::WorkWeekCore;
use weekly_report_system::repository::{
    ActionLogRepository, OrganizationRepository, ReportRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    weekly_report_system::logging::init();

    let db_path = std::env::args().nth(1).unwrap_or_else(get_default_db_path);
    tracing::info!("Seed dữ liệu demo vào: {}", db_path);

    let conn = db::open_sqlite_connection(&db_path)?;
    db::init_schema(&conn)?;
    let conn = Arc::new(std::sync::Mutex::new(conn));

    let organization_repo = Arc::new(OrganizationRepository::from_connection(conn.clone()));
    let report_repo = Arc::new(ReportRepository::from_connection(conn.clone()));
    let action_log_repo = Arc::new(ActionLogRepository::from_connection(conn.clone()));
    let config_manager = Arc::new(ConfigManager::from_connection(conn)?);

    let organization_api = OrganizationApi::new(organization_repo.clone());
    let report_api = ReportApi::new(
        report_repo,
        organization_repo,
        action_log_repo,
        config_manager,
    );

    // ==========================================
    // Cây tổ chức mẫu
    // ==========================================
    let office = organization_api.create_office("Văn phòng Hà Nội", Some("Cầu Giấy, Hà Nội".to_string()))?;
    let dept_tech = organization_api.create_department(&office.office_id, "Phòng Kỹ thuật")?;
    let dept_sales = organization_api.create_department(&office.office_id, "Phòng Kinh doanh")?;

    let pos_dev = organization_api.create_position(&dept_tech.department_id, "Lập trình viên")?;
    let pos_sale = organization_api.create_position(&dept_sales.department_id, "Nhân viên kinh doanh")?;

    let employees = [
        ("Nguyễn Văn An", &dept_tech, &pos_dev, UserRole::Manager),
        ("Trần Thị Bình", &dept_tech, &pos_dev, UserRole::Employee),
        ("Lê Minh Chi", &dept_sales, &pos_sale, UserRole::Employee),
        ("Phạm Quốc Dũng", &dept_sales, &pos_sale, UserRole::Employee),
    ];

    let mut employee_ids = Vec::new();
    for (name, dept, pos, role) in employees {
        let employee = organization_api.create_employee(
            &dept.department_id,
            Some(pos.position_id.clone()),
            name,
            None,
            role,
        )?;
        employee_ids.push(employee.employee_id);
    }

    // ==========================================
    // Báo cáo mẫu: tuần hiện tại và tuần trước
    // ==========================================
    let today = Local::now().date_naive();
    let current = WorkWeekCore::work_week_from_date(today);
    let previous = WorkWeekCore::previous_week(current);

    for (idx, employee_id) in employee_ids.iter().enumerate() {
        for key in [previous, current] {
            let tasks: Vec<ReportTaskInput> = (0..5)
                .map(|i| ReportTaskInput {
                    name: format!("Công việc {} tuần {}", i + 1, key.week_number),
                    // Mỗi nhân viên một mức hoàn thành khác nhau cho dashboard có dữ liệu
                    is_completed: i < 5 - idx,
                    note: None,
                })
                .collect();

            report_api
                .create_report_at(employee_id, key.week_number, key.year, tasks, today)
                .await?;
        }
    }

    tracing::info!(
        "Đã seed: 1 văn phòng, 2 phòng ban, {} nhân viên, {} báo cáo",
        employee_ids.len(),
        employee_ids.len() * 2
    );

    Ok(())
}
