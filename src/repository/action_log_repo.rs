// ==========================================
// Hệ thống báo cáo công việc tuần - Kho nhật ký thao tác
// ==========================================
// Trách nhiệm: ghi và truy vấn bảng action_log
// Nguyên tắc: chỉ ghi thêm (append-only), không sửa không xóa
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::action_log::ActionLog;
use crate::domain::types::ReportAction;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ActionLogRepository - Kho nhật ký
// ==========================================
pub struct ActionLogRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ActionLogRepository {
    /// Tạo kho từ đường dẫn cơ sở dữ liệu
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Tạo kho từ kết nối sẵn có
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Ghi một bản ghi nhật ký
    pub fn insert(&self, log: &ActionLog) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO action_log (
                log_id, action_type, report_id, employee_id,
                week_number, year, detail, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                log.log_id,
                log.action_type.to_db_str(),
                log.report_id,
                log.employee_id,
                log.week_number,
                log.year,
                log.detail,
                log.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Truy vấn các thao tác gần nhất
    pub fn list_recent(&self, limit: u32) -> RepositoryResult<Vec<ActionLog>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT log_id, action_type, report_id, employee_id,
                   week_number, year, detail, created_at
            FROM action_log
            ORDER BY created_at DESC
            LIMIT ?1
            "#,
        )?;

        let logs = stmt
            .query_map(params![limit], Self::map_row)?
            .collect::<Result<_, _>>()?;

        Ok(logs)
    }

    /// Truy vấn nhật ký của một nhân viên
    pub fn list_by_employee(
        &self,
        employee_id: &str,
        limit: u32,
    ) -> RepositoryResult<Vec<ActionLog>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT log_id, action_type, report_id, employee_id,
                   week_number, year, detail, created_at
            FROM action_log
            WHERE employee_id = ?1
            ORDER BY created_at DESC
            LIMIT ?2
            "#,
        )?;

        let logs = stmt
            .query_map(params![employee_id, limit], Self::map_row)?
            .collect::<Result<_, _>>()?;

        Ok(logs)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ActionLog> {
        let action_raw: String = row.get(1)?;
        let action_type = match action_raw.as_str() {
            "CREATE" => ReportAction::Create,
            "EDIT" => ReportAction::Edit,
            _ => ReportAction::Delete,
        };

        Ok(ActionLog {
            log_id: row.get(0)?,
            action_type,
            report_id: row.get(2)?,
            employee_id: row.get(3)?,
            week_number: row.get(4)?,
            year: row.get(5)?,
            detail: row.get(6)?,
            created_at: parse_utc(&row.get::<_, String>(7)?),
        })
    }
}

fn parse_utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH)
}
