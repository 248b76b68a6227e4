// ==========================================
// Test tích hợp API dashboard
// ==========================================
// Mục tiêu: xếp hạng, tổng hợp phòng ban, tổng quan tuần và
// xu hướng tuần trên cơ sở dữ liệu thật
// ==========================================


use std::sync::Arc;

use chrono::NaiveDate;
use weekly_report_system::api::report_api::ReportTaskInput;
use weekly_report_system::api::{DashboardApi, ReportApi};
use weekly_report_system::config::ConfigManager;
use weekly_report_system::domain::types::PerformanceLevel;
use weekly_report_system::repository::{
    ActionLogRepository, OrganizationRepository, ReportRepository,
};
use test_helpers::{create_test_db, insert_test_config, open_test_connection, seed_test_organization};

// 12/03/2025 (Thứ Tư) → tuần làm việc hiện tại 11/2025
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

fn build_apis(db_path: &str) -> (ReportApi<ConfigManager>, DashboardApi<ConfigManager>) {
    let report_repo = Arc::new(ReportRepository::new(db_path).expect("report repo"));
    let organization_repo = Arc::new(OrganizationRepository::new(db_path).expect("org repo"));
    let action_log_repo = Arc::new(ActionLogRepository::new(db_path).expect("log repo"));
    let config_manager = Arc::new(ConfigManager::new(db_path).expect("config manager"));

    let report_api = ReportApi::new(
        report_repo.clone(),
        organization_repo.clone(),
        action_log_repo.clone(),
        config_manager.clone(),
    );
    let dashboard_api = DashboardApi::new(
        report_repo,
        organization_repo,
        action_log_repo,
        config_manager,
    );

    (report_api, dashboard_api)
}

fn tasks(completed: usize, total: usize) -> Vec<ReportTaskInput> {
    (0..total)
        .map(|i| ReportTaskInput {
            name: format!("Công việc {}", i + 1),
            is_completed: i < completed,
            note: None,
        })
        .collect()
}

async fn seed_week_11_reports(report_api: &ReportApi<ConfigManager>) {
    // E001 (D001): 80% | E002 (D001): 60% | E003 (D002): 100%
    report_api
        .create_report_at("E001", 11, 2025, tasks(4, 5), today())
        .await
        .expect("báo cáo E001");
    report_api
        .create_report_at("E002", 11, 2025, tasks(3, 5), today())
        .await
        .expect("báo cáo E002");
    report_api
        .create_report_at("E003", 11, 2025, tasks(5, 5), today())
        .await
        .expect("báo cáo E003");
}

fn setup() -> (tempfile::NamedTempFile, String) {
    let (temp_file, db_path) = create_test_db().expect("tạo db test");
    let conn = open_test_connection(&db_path).expect("mở db test");
    seed_test_organization(&conn).expect("seed tổ chức");
    insert_test_config(&conn).expect("seed cấu hình");
    (temp_file, db_path)
}

#[tokio::test]
async fn test_week_ranking() {
    let (_temp, db_path) = setup();
    let (report_api, dashboard_api) = build_apis(&db_path);
    seed_week_11_reports(&report_api).await;

    let ranking = dashboard_api.get_week_ranking(11, 2025).await.expect("xếp hạng");

    assert_eq!(ranking.len(), 3);

    // Hạng 1: E003 (100%, Xuất sắc)
    assert_eq!(ranking[0].employee_id, "E003");
    assert_eq!(ranking[0].rank, 1);
    assert_eq!(ranking[0].classification.level, PerformanceLevel::Excellent);
    assert_eq!(ranking[0].classification.label, "Xuất sắc");

    // Hạng 2: E001 (80%, Tốt)
    assert_eq!(ranking[1].employee_id, "E001");
    assert_eq!(ranking[1].classification.level, PerformanceLevel::Good);

    // Hạng 3: E002 (60%, Yếu)
    assert_eq!(ranking[2].employee_id, "E002");
    assert_eq!(ranking[2].classification.level, PerformanceLevel::Poor);
}

#[tokio::test]
async fn test_department_summaries() {
    let (_temp, db_path) = setup();
    let (report_api, dashboard_api) = build_apis(&db_path);
    seed_week_11_reports(&report_api).await;

    let summaries = dashboard_api
        .get_department_summaries(11, 2025)
        .await
        .expect("tổng hợp phòng ban");

    assert_eq!(summaries.len(), 2);

    let d1 = summaries
        .iter()
        .find(|s| s.department_id == "D001")
        .expect("có D001");
    // (80 + 60) / 2 = 70% → Trung bình
    assert_eq!(d1.report_count, 2);
    assert!((d1.avg_completion_rate - 70.0).abs() < f64::EPSILON);
    assert_eq!(d1.classification.level, PerformanceLevel::Average);

    let d2 = summaries
        .iter()
        .find(|s| s.department_id == "D002")
        .expect("có D002");
    assert_eq!(d2.report_count, 1);
    assert_eq!(d2.classification.level, PerformanceLevel::Excellent);
}

#[tokio::test]
async fn test_week_overview() {
    let (_temp, db_path) = setup();
    let (report_api, dashboard_api) = build_apis(&db_path);
    seed_week_11_reports(&report_api).await;

    let overview = dashboard_api.get_week_overview(11, 2025).await.expect("tổng quan");

    assert_eq!(overview.week_number, 11);
    assert_eq!(overview.year, 2025);
    assert_eq!(overview.report_count, 3);
    // (80 + 60 + 100) / 3 = 80% → Tốt
    assert!((overview.avg_completion_rate - 80.0).abs() < f64::EPSILON);
    assert_eq!(overview.classification.level, PerformanceLevel::Good);

    // Khoảng ngày của tuần 11/2025: Thứ Sáu 07/03 → Thứ Năm 13/03
    assert_eq!(overview.start_date, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
    assert_eq!(overview.end_date, NaiveDate::from_ymd_opt(2025, 3, 13).unwrap());
}

#[tokio::test]
async fn test_week_overview_empty_week() {
    let (_temp, db_path) = setup();
    let (_report_api, dashboard_api) = build_apis(&db_path);

    let overview = dashboard_api.get_week_overview(20, 2025).await.expect("tổng quan");

    assert_eq!(overview.report_count, 0);
    assert_eq!(overview.avg_completion_rate, 0.0);
    assert_eq!(overview.classification.level, PerformanceLevel::Poor);
}

#[tokio::test]
async fn test_weekly_trend() {
    let (_temp, db_path) = setup();
    let (report_api, dashboard_api) = build_apis(&db_path);
    seed_week_11_reports(&report_api).await;

    // Thêm một báo cáo tuần 10 (tuần trước, vẫn trong cửa sổ tạo)
    report_api
        .create_report_at("E001", 10, 2025, tasks(1, 2), today())
        .await
        .expect("báo cáo tuần 10");

    // Cấu hình test: trend_weeks = 4 → các tuần 8, 9, 10, 11
    let trend = dashboard_api
        .get_weekly_trend_from(11, 2025)
        .await
        .expect("xu hướng");

    assert_eq!(trend.len(), 4);
    assert_eq!(trend[0].week_number, 8);
    assert_eq!(trend[0].report_count, 0);
    assert_eq!(trend[1].week_number, 9);
    assert_eq!(trend[2].week_number, 10);
    assert_eq!(trend[2].report_count, 1);
    assert!((trend[2].avg_completion_rate - 50.0).abs() < f64::EPSILON);
    assert_eq!(trend[3].week_number, 11);
    assert_eq!(trend[3].report_count, 3);
    assert!((trend[3].avg_completion_rate - 80.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_recent_actions_feed() {
    let (_temp, db_path) = setup();
    let (report_api, dashboard_api) = build_apis(&db_path);
    seed_week_11_reports(&report_api).await;

    let actions = dashboard_api.get_recent_actions(10).expect("hoạt động gần đây");
    assert_eq!(actions.len(), 3);
    assert!(actions.iter().all(|a| a.week_number == 11 && a.year == 2025));
}

#[tokio::test]
async fn test_office_department_summaries() {
    let (_temp, db_path) = setup();
    let (report_api, dashboard_api) = build_apis(&db_path);
    seed_week_11_reports(&report_api).await;

    let summaries = dashboard_api
        .get_office_department_summaries("O001", 11, 2025)
        .await
        .expect("tổng hợp theo văn phòng");

    // Cả hai phòng ban đều thuộc O001
    assert_eq!(summaries.len(), 2);

    let unknown = dashboard_api
        .get_office_department_summaries("O999", 11, 2025)
        .await
        .expect("văn phòng không tồn tại");
    assert!(unknown.is_empty());
}
