// ==========================================
// Test tích hợp tầng kho dữ liệu
// ==========================================
// Mục tiêu: CRUD của các kho trên cơ sở dữ liệu thật
// ==========================================


use chrono::Utc;
use weekly_report_system::domain::action_log::ActionLog;
use weekly_report_system::domain::report::{ReportTask, WeeklyReport};
use weekly_report_system::domain::types::ReportAction;
use weekly_report_system::repository::{
    ActionLogRepository, OrganizationRepository, ReportRepository, RepositoryError,
};
use test_helpers::{create_test_db, open_test_connection, seed_test_organization};

fn make_report(report_id: &str, employee_id: &str, week: u32, year: i32) -> WeeklyReport {
    let now = Utc::now();
    WeeklyReport {
        report_id: report_id.to_string(),
        employee_id: employee_id.to_string(),
        week_number: week,
        year,
        tasks: vec![
            ReportTask {
                task_id: format!("{}-t0", report_id),
                name: "Viết tài liệu".to_string(),
                is_completed: true,
                note: Some("đã xong sớm".to_string()),
                seq_no: 0,
            },
            ReportTask {
                task_id: format!("{}-t1", report_id),
                name: "Review mã nguồn".to_string(),
                is_completed: false,
                note: None,
                seq_no: 1,
            },
        ],
        created_at: now,
        updated_at: now,
    }
}

fn setup() -> (tempfile::NamedTempFile, String) {
    let (temp_file, db_path) = create_test_db().expect("tạo db test");
    let conn = open_test_connection(&db_path).expect("mở db");
    seed_test_organization(&conn).expect("seed tổ chức");
    (temp_file, db_path)
}

// ==========================================
// ReportRepository
// ==========================================

#[test]
fn test_report_repo_insert_and_find() {
    let (_temp, db_path) = setup();
    let repo = ReportRepository::new(&db_path).expect("repo");

    let report = make_report("R001", "E001", 11, 2025);
    repo.insert(&report).expect("ghi báo cáo");

    let loaded = repo.find_by_id("R001").expect("truy vấn").expect("có bản ghi");
    assert_eq!(loaded.employee_id, "E001");
    assert_eq!(loaded.tasks.len(), 2);
    // Đầu việc giữ đúng thứ tự seq_no
    assert_eq!(loaded.tasks[0].name, "Viết tài liệu");
    assert!(loaded.tasks[0].is_completed);
    assert_eq!(loaded.tasks[1].seq_no, 1);

    let by_week = repo
        .find_by_employee_and_week("E001", 11, 2025)
        .expect("truy vấn theo tuần")
        .expect("có bản ghi");
    assert_eq!(by_week.report_id, "R001");
}

#[test]
fn test_report_repo_unique_per_employee_week() {
    let (_temp, db_path) = setup();
    let repo = ReportRepository::new(&db_path).expect("repo");

    repo.insert(&make_report("R001", "E001", 11, 2025)).expect("ghi lần đầu");

    // Cùng nhân viên + cùng tuần → vi phạm ràng buộc duy nhất
    let err = repo.insert(&make_report("R002", "E001", 11, 2025)).unwrap_err();
    assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)));
}

#[test]
fn test_report_repo_update_replaces_tasks() {
    let (_temp, db_path) = setup();
    let repo = ReportRepository::new(&db_path).expect("repo");

    let mut report = make_report("R001", "E001", 11, 2025);
    repo.insert(&report).expect("ghi báo cáo");

    report.tasks = vec![ReportTask {
        task_id: "R001-new".to_string(),
        name: "Họp khách hàng".to_string(),
        is_completed: true,
        note: None,
        seq_no: 0,
    }];
    report.updated_at = Utc::now();
    repo.update(&report).expect("cập nhật");

    let loaded = repo.find_by_id("R001").expect("truy vấn").expect("có bản ghi");
    assert_eq!(loaded.tasks.len(), 1);
    assert_eq!(loaded.tasks[0].name, "Họp khách hàng");
}

#[test]
fn test_report_repo_update_missing_report() {
    let (_temp, db_path) = setup();
    let repo = ReportRepository::new(&db_path).expect("repo");

    let report = make_report("R404", "E001", 11, 2025);
    let err = repo.update(&report).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[test]
fn test_report_repo_delete_cascades_tasks() {
    let (_temp, db_path) = setup();
    let repo = ReportRepository::new(&db_path).expect("repo");

    repo.insert(&make_report("R001", "E001", 11, 2025)).expect("ghi báo cáo");
    repo.delete("R001").expect("xóa");

    assert!(repo.find_by_id("R001").expect("truy vấn").is_none());

    // Đầu việc phải bị xóa theo (ON DELETE CASCADE)
    let conn = open_test_connection(&db_path).expect("mở db");
    let task_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM report_tasks WHERE report_id = 'R001'", [], |row| {
            row.get(0)
        })
        .expect("đếm đầu việc");
    assert_eq!(task_count, 0);

    // Xóa bản ghi không tồn tại → NotFound
    let err = repo.delete("R001").unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[test]
fn test_report_repo_foreign_key_enforced() {
    let (_temp, db_path) = setup();
    let repo = ReportRepository::new(&db_path).expect("repo");

    // Nhân viên không tồn tại → vi phạm khóa ngoại
    let err = repo.insert(&make_report("R001", "E404", 11, 2025)).unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::ForeignKeyViolation(_) | RepositoryError::DatabaseQueryError(_)
    ));
}

#[test]
fn test_report_repo_list_by_employee_ordering() {
    let (_temp, db_path) = setup();
    let repo = ReportRepository::new(&db_path).expect("repo");

    repo.insert(&make_report("R001", "E001", 50, 2024)).expect("ghi 50/2024");
    repo.insert(&make_report("R002", "E001", 2, 2025)).expect("ghi 2/2025");
    repo.insert(&make_report("R003", "E001", 1, 2025)).expect("ghi 1/2025");

    let reports = repo.list_by_employee("E001", 10).expect("liệt kê");
    // Mới nhất trước: 2/2025, 1/2025, 50/2024
    let keys: Vec<(i32, u32)> = reports.iter().map(|r| (r.year, r.week_number)).collect();
    assert_eq!(keys, vec![(2025, 2), (2025, 1), (2024, 50)]);
}

// ==========================================
// OrganizationRepository
// ==========================================

#[test]
fn test_organization_repo_tree_queries() {
    let (_temp, db_path) = setup();
    let repo = OrganizationRepository::new(&db_path).expect("repo");

    let offices = repo.list_offices().expect("văn phòng");
    assert_eq!(offices.len(), 1);
    assert_eq!(offices[0].name, "Văn phòng Hà Nội");

    let departments = repo.list_departments_by_office("O001").expect("phòng ban");
    assert_eq!(departments.len(), 2);

    let positions = repo.list_positions_by_department("D001").expect("vị trí");
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].title, "Lập trình viên");

    let employees = repo.list_employees_by_department("D001").expect("nhân viên");
    assert_eq!(employees.len(), 2);

    let employee = repo.find_employee("E001").expect("truy vấn").expect("có E001");
    assert_eq!(employee.full_name, "Nguyễn Văn An");
    assert_eq!(employee.role.to_db_str(), "MANAGER");

    assert!(repo.find_employee("E404").expect("truy vấn").is_none());
}

// ==========================================
// ActionLogRepository
// ==========================================

#[test]
fn test_action_log_repo_insert_and_query() {
    let (_temp, db_path) = setup();
    let repo = ActionLogRepository::new(&db_path).expect("repo");

    let log1 = ActionLog::new(
        ReportAction::Create,
        Some("R001".to_string()),
        "E001",
        11,
        2025,
        None,
    );
    let log2 = ActionLog::new(ReportAction::Delete, None, "E002", 11, 2025, None);

    repo.insert(&log1).expect("ghi log1");
    repo.insert(&log2).expect("ghi log2");

    let recent = repo.list_recent(10).expect("truy vấn gần đây");
    assert_eq!(recent.len(), 2);

    let by_employee = repo.list_by_employee("E001", 10).expect("theo nhân viên");
    assert_eq!(by_employee.len(), 1);
    assert_eq!(by_employee[0].action_type, ReportAction::Create);
    assert_eq!(by_employee[0].report_id.as_deref(), Some("R001"));
}
