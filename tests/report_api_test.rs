// ==========================================
// Test tích hợp API báo cáo
// ==========================================
// Mục tiêu: toàn bộ vòng đời tạo / sửa / xóa báo cáo qua cửa sổ tuần,
// chạy trên cơ sở dữ liệu thật (file tạm)
// ==========================================


use std::sync::Arc;

use chrono::NaiveDate;
use weekly_report_system::api::report_api::ReportTaskInput;
use weekly_report_system::api::{ApiError, ReportApi};
use weekly_report_system::config::ConfigManager;
use weekly_report_system::repository::{
    ActionLogRepository, OrganizationRepository, ReportRepository,
};
use test_helpers::{create_test_db, insert_test_config, open_test_connection, seed_test_organization};

// 12/03/2025 là Thứ Tư thuộc tuần ISO 11 → tuần làm việc hiện tại 11/2025
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

fn build_report_api(db_path: &str) -> ReportApi<ConfigManager> {
    let report_repo = Arc::new(ReportRepository::new(db_path).expect("report repo"));
    let organization_repo = Arc::new(OrganizationRepository::new(db_path).expect("org repo"));
    let action_log_repo = Arc::new(ActionLogRepository::new(db_path).expect("log repo"));
    let config_manager = Arc::new(ConfigManager::new(db_path).expect("config manager"));

    ReportApi::new(report_repo, organization_repo, action_log_repo, config_manager)
}

fn sample_tasks(completed: usize, total: usize) -> Vec<ReportTaskInput> {
    (0..total)
        .map(|i| ReportTaskInput {
            name: format!("Công việc {}", i + 1),
            is_completed: i < completed,
            note: if i == 0 { Some("ưu tiên".to_string()) } else { None },
        })
        .collect()
}

fn setup() -> (tempfile::NamedTempFile, String) {
    let (temp_file, db_path) = create_test_db().expect("tạo db test");
    let conn = open_test_connection(&db_path).expect("mở db test");
    seed_test_organization(&conn).expect("seed tổ chức");
    insert_test_config(&conn).expect("seed cấu hình");
    (temp_file, db_path)
}

#[tokio::test]
async fn test_create_report_success() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    let report = api
        .create_report_at("E001", 11, 2025, sample_tasks(3, 5), today())
        .await
        .expect("tạo báo cáo");

    assert_eq!(report.employee_id, "E001");
    assert_eq!(report.week_number, 11);
    assert_eq!(report.year, 2025);
    assert_eq!(report.tasks.len(), 5);
    assert!((report.completion_rate() - 60.0).abs() < f64::EPSILON);

    // Đọc lại từ cơ sở dữ liệu
    let loaded = api.get_report(&report.report_id).expect("đọc lại báo cáo");
    assert_eq!(loaded.tasks.len(), 5);
    assert_eq!(loaded.tasks[0].name, "Công việc 1");
    assert_eq!(loaded.tasks[0].note.as_deref(), Some("ưu tiên"));
}

#[tokio::test]
async fn test_create_report_for_previous_and_next_week() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    // Tuần trước (10/2025) và tuần tiếp theo (12/2025) đều tạo được
    assert!(api
        .create_report_at("E001", 10, 2025, sample_tasks(2, 4), today())
        .await
        .is_ok());
    assert!(api
        .create_report_at("E002", 12, 2025, sample_tasks(2, 4), today())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_create_report_outside_window_rejected() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    let err = api
        .create_report_at("E001", 8, 2025, sample_tasks(1, 3), today())
        .await
        .unwrap_err();

    match err {
        ApiError::EligibilityViolation(reason) => {
            assert_eq!(
                reason,
                "Chỉ có thể tạo báo cáo cho tuần trước, tuần hiện tại hoặc tuần tiếp theo"
            );
        }
        other => panic!("Expected EligibilityViolation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_duplicate_report_rejected() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    api.create_report_at("E001", 11, 2025, sample_tasks(1, 3), today())
        .await
        .expect("tạo lần đầu");

    let err = api
        .create_report_at("E001", 11, 2025, sample_tasks(2, 3), today())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::BusinessRuleViolation(_)));
    assert!(err.to_string().contains("đã có báo cáo"));
}

#[tokio::test]
async fn test_create_report_unknown_employee() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    let err = api
        .create_report_at("E999", 11, 2025, sample_tasks(1, 3), today())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_create_report_empty_tasks_rejected() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    let err = api
        .create_report_at("E001", 11, 2025, vec![], today())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn test_create_report_range_validation() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    // Số tuần ngoài [1, 53]
    let err = api
        .create_report_at("E001", 0, 2025, sample_tasks(1, 3), today())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = api
        .create_report_at("E001", 54, 2025, sample_tasks(1, 3), today())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("1-53"));

    // Năm ngoài cửa sổ cấu hình 2020-2030
    let err = api
        .create_report_at("E001", 11, 2019, sample_tasks(1, 3), today())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("2020-2030"));
}

#[tokio::test]
async fn test_update_report_replaces_tasks() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    let report = api
        .create_report_at("E001", 11, 2025, sample_tasks(1, 4), today())
        .await
        .expect("tạo báo cáo");

    let updated = api
        .update_report_at(&report.report_id, sample_tasks(3, 3), today())
        .await
        .expect("cập nhật báo cáo");

    assert_eq!(updated.tasks.len(), 3);
    assert!((updated.completion_rate() - 100.0).abs() < f64::EPSILON);

    // Đầu việc cũ phải bị thay thế hoàn toàn
    let loaded = api.get_report(&report.report_id).expect("đọc lại");
    assert_eq!(loaded.tasks.len(), 3);
}

#[tokio::test]
async fn test_update_old_report_rejected() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    // Tạo báo cáo tuần 9/2025 khi còn trong cửa sổ (26/02/2025 thuộc tuần 9)
    let in_week_9 = NaiveDate::from_ymd_opt(2025, 2, 26).unwrap();
    let report = api
        .create_report_at("E001", 9, 2025, sample_tasks(2, 4), in_week_9)
        .await
        .expect("tạo báo cáo tuần 9");

    // Sang tuần 11, tuần 9 đã ngoài cửa sổ chỉnh sửa
    let err = api
        .update_report_at(&report.report_id, sample_tasks(4, 4), today())
        .await
        .unwrap_err();

    match err {
        ApiError::EligibilityViolation(reason) => {
            assert_eq!(
                reason,
                "Chỉ có thể chỉnh sửa báo cáo của tuần trước, tuần hiện tại hoặc tuần tiếp theo"
            );
        }
        other => panic!("Expected EligibilityViolation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_report_current_week() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    let report = api
        .create_report_at("E001", 11, 2025, sample_tasks(2, 4), today())
        .await
        .expect("tạo báo cáo");

    api.delete_report_at(&report.report_id, today())
        .await
        .expect("xóa báo cáo tuần hiện tại");

    let err = api.get_report(&report.report_id).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_previous_week_rejected() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    // Tuần 10 là tuần trước: tạo được nhưng không xóa được
    let report = api
        .create_report_at("E001", 10, 2025, sample_tasks(2, 4), today())
        .await
        .expect("tạo báo cáo tuần trước");

    let err = api.delete_report_at(&report.report_id, today()).await.unwrap_err();

    match err {
        ApiError::EligibilityViolation(reason) => {
            assert_eq!(reason, "Chỉ có thể xóa báo cáo của tuần hiện tại và tuần tiếp theo");
        }
        other => panic!("Expected EligibilityViolation, got {:?}", other),
    }

    // Báo cáo vẫn còn nguyên
    assert!(api.get_report(&report.report_id).is_ok());
}

#[tokio::test]
async fn test_actions_are_logged() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);
    let log_repo = ActionLogRepository::new(&db_path).expect("log repo");

    let report = api
        .create_report_at("E001", 11, 2025, sample_tasks(2, 4), today())
        .await
        .expect("tạo");
    api.update_report_at(&report.report_id, sample_tasks(3, 4), today())
        .await
        .expect("sửa");
    api.delete_report_at(&report.report_id, today()).await.expect("xóa");

    let logs = log_repo.list_by_employee("E001", 10).expect("đọc nhật ký");
    assert_eq!(logs.len(), 3);

    let mut types: Vec<String> = logs.iter().map(|l| l.action_type.to_db_str().to_string()).collect();
    types.sort();
    assert_eq!(types, vec!["CREATE", "DELETE", "EDIT"]);
}

#[tokio::test]
async fn test_list_reports_by_week() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    api.create_report_at("E001", 11, 2025, sample_tasks(2, 4), today())
        .await
        .expect("tạo E001");
    api.create_report_at("E002", 11, 2025, sample_tasks(4, 4), today())
        .await
        .expect("tạo E002");
    api.create_report_at("E003", 12, 2025, sample_tasks(1, 4), today())
        .await
        .expect("tạo E003 tuần khác");

    let reports = api.list_reports_by_week(11, 2025).await.expect("liệt kê tuần 11");
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.week_number == 11 && r.year == 2025));
}

#[tokio::test]
async fn test_export_week_csv() {
    let (_temp, db_path) = setup();
    let api = build_report_api(&db_path);

    api.create_report_at("E001", 11, 2025, sample_tasks(1, 2), today())
        .await
        .expect("tạo báo cáo");

    let csv_text = api.export_week_csv(11, 2025).await.expect("xuất CSV");

    // Header + mỗi đầu việc một dòng
    assert!(csv_text.starts_with("ma_nhan_vien,ho_ten,tuan,nam,cong_viec,hoan_thanh,ghi_chu"));
    assert!(csv_text.contains("Nguyễn Văn An"));
    assert!(csv_text.contains("Công việc 1"));
    assert_eq!(csv_text.lines().count(), 3);
}
