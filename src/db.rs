// ==========================================
// Hệ thống báo cáo công việc tuần - Khởi tạo SQLite
// ==========================================
// Mục tiêu:
// - Thống nhất PRAGMA cho mọi Connection::open, tránh "module này bật
//   foreign key, module kia không bật"
// - Thống nhất busy_timeout, giảm lỗi busy khi ghi đồng thời
// - Tập trung khởi tạo schema tại một chỗ
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// busy_timeout mặc định (mili giây)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// schema_version mà mã nguồn hiện tại kỳ vọng
///
/// Ghi chú: số phiên bản này dùng để cảnh báo khi chạy trên cơ sở dữ
/// liệu cũ, không tự động migrate.
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Cấu hình PRAGMA thống nhất cho kết nối SQLite
///
/// Ghi chú:
/// - foreign_keys phải bật cho từng kết nối
/// - busy_timeout phải cấu hình cho từng kết nối
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Mở kết nối SQLite và áp dụng cấu hình thống nhất
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Đọc schema_version (trả về None nếu bảng chưa tồn tại)
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Khởi tạo schema (idempotent - dùng CREATE TABLE IF NOT EXISTS)
///
/// Bao gồm: bảng cấu hình, cây tổ chức, báo cáo tuần và nhật ký thao tác.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS config_scope (
            scope_id TEXT PRIMARY KEY,
            scope_type TEXT NOT NULL,
            scope_key TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(scope_type, scope_key)
        );

        INSERT OR IGNORE INTO config_scope (scope_id, scope_type, scope_key)
        VALUES ('global', 'GLOBAL', 'global');

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL REFERENCES config_scope(scope_id) ON DELETE CASCADE,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scope_id, key)
        );

        CREATE TABLE IF NOT EXISTS offices (
            office_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS departments (
            department_id TEXT PRIMARY KEY,
            office_id TEXT NOT NULL REFERENCES offices(office_id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS job_positions (
            position_id TEXT PRIMARY KEY,
            department_id TEXT NOT NULL REFERENCES departments(department_id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS employees (
            employee_id TEXT PRIMARY KEY,
            department_id TEXT NOT NULL REFERENCES departments(department_id) ON DELETE CASCADE,
            position_id TEXT REFERENCES job_positions(position_id) ON DELETE SET NULL,
            full_name TEXT NOT NULL,
            email TEXT,
            role TEXT NOT NULL DEFAULT 'EMPLOYEE',
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS weekly_reports (
            report_id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL REFERENCES employees(employee_id) ON DELETE CASCADE,
            week_number INTEGER NOT NULL,
            year INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(employee_id, week_number, year)
        );

        CREATE TABLE IF NOT EXISTS report_tasks (
            task_id TEXT PRIMARY KEY,
            report_id TEXT NOT NULL REFERENCES weekly_reports(report_id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            is_completed INTEGER NOT NULL DEFAULT 0,
            note TEXT,
            seq_no INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_reports_week
            ON weekly_reports(year, week_number);
        CREATE INDEX IF NOT EXISTS idx_tasks_report
            ON report_tasks(report_id);

        CREATE TABLE IF NOT EXISTS action_log (
            log_id TEXT PRIMARY KEY,
            action_type TEXT NOT NULL,
            report_id TEXT,
            employee_id TEXT NOT NULL,
            week_number INTEGER NOT NULL,
            year INTEGER NOT NULL,
            detail TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_action_log_created
            ON action_log(created_at);
        "#,
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;

    Ok(())
}
