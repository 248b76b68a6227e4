// ==========================================
// Hệ thống báo cáo công việc tuần - Kho báo cáo
// ==========================================
// Trách nhiệm: CRUD bảng weekly_reports + report_tasks
// Nguyên tắc: không chứa logic nghiệp vụ, chỉ truy xuất dữ liệu
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::report::{ReportTask, WeeklyReport};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ReportRepository - Kho báo cáo tuần
// ==========================================
pub struct ReportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ReportRepository {
    /// Tạo kho từ đường dẫn cơ sở dữ liệu
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Tạo kho từ kết nối sẵn có (chia sẻ giữa các kho)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Ghi mới báo cáo cùng danh sách đầu việc (một giao dịch)
    pub fn insert(&self, report: &WeeklyReport) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            r#"
            INSERT INTO weekly_reports (
                report_id, employee_id, week_number, year, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                report.report_id,
                report.employee_id,
                report.week_number,
                report.year,
                report.created_at.to_rfc3339(),
                report.updated_at.to_rfc3339(),
            ],
        )?;

        for task in &report.tasks {
            tx.execute(
                r#"
                INSERT INTO report_tasks (task_id, report_id, name, is_completed, note, seq_no)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    task.task_id,
                    report.report_id,
                    task.name,
                    task.is_completed as i32,
                    task.note,
                    task.seq_no,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Cập nhật báo cáo: ghi đè danh sách đầu việc (một giao dịch)
    pub fn update(&self, report: &WeeklyReport) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let updated = tx.execute(
            "UPDATE weekly_reports SET updated_at = ?1 WHERE report_id = ?2",
            params![report.updated_at.to_rfc3339(), report.report_id],
        )?;

        if updated == 0 {
            return Err(RepositoryError::NotFound {
                entity: "WeeklyReport".to_string(),
                id: report.report_id.clone(),
            });
        }

        tx.execute(
            "DELETE FROM report_tasks WHERE report_id = ?1",
            params![report.report_id],
        )?;

        for task in &report.tasks {
            tx.execute(
                r#"
                INSERT INTO report_tasks (task_id, report_id, name, is_completed, note, seq_no)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    task.task_id,
                    report.report_id,
                    task.name,
                    task.is_completed as i32,
                    task.note,
                    task.seq_no,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Xóa báo cáo (đầu việc xóa theo nhờ ON DELETE CASCADE)
    pub fn delete(&self, report_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let deleted = conn.execute(
            "DELETE FROM weekly_reports WHERE report_id = ?1",
            params![report_id],
        )?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound {
                entity: "WeeklyReport".to_string(),
                id: report_id.to_string(),
            });
        }
        Ok(())
    }

    /// Tìm báo cáo theo ID
    pub fn find_by_id(&self, report_id: &str) -> RepositoryResult<Option<WeeklyReport>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT report_id, employee_id, week_number, year, created_at, updated_at
            FROM weekly_reports WHERE report_id = ?1
            "#,
            params![report_id],
            Self::map_report_row,
        );

        match result {
            Ok(mut report) => {
                report.tasks = Self::load_tasks(&conn, &report.report_id)?;
                Ok(Some(report))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Tìm báo cáo của một nhân viên trong một tuần
    pub fn find_by_employee_and_week(
        &self,
        employee_id: &str,
        week_number: u32,
        year: i32,
    ) -> RepositoryResult<Option<WeeklyReport>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT report_id, employee_id, week_number, year, created_at, updated_at
            FROM weekly_reports
            WHERE employee_id = ?1 AND week_number = ?2 AND year = ?3
            "#,
            params![employee_id, week_number, year],
            Self::map_report_row,
        );

        match result {
            Ok(mut report) => {
                report.tasks = Self::load_tasks(&conn, &report.report_id)?;
                Ok(Some(report))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Liệt kê toàn bộ báo cáo của một tuần
    pub fn list_by_week(&self, week_number: u32, year: i32) -> RepositoryResult<Vec<WeeklyReport>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT report_id, employee_id, week_number, year, created_at, updated_at
            FROM weekly_reports
            WHERE week_number = ?1 AND year = ?2
            ORDER BY employee_id
            "#,
        )?;

        let mut reports: Vec<WeeklyReport> = stmt
            .query_map(params![week_number, year], Self::map_report_row)?
            .collect::<Result<_, _>>()?;

        for report in &mut reports {
            report.tasks = Self::load_tasks(&conn, &report.report_id)?;
        }

        Ok(reports)
    }

    /// Liệt kê báo cáo của một nhân viên (mới nhất trước)
    pub fn list_by_employee(
        &self,
        employee_id: &str,
        limit: u32,
    ) -> RepositoryResult<Vec<WeeklyReport>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT report_id, employee_id, week_number, year, created_at, updated_at
            FROM weekly_reports
            WHERE employee_id = ?1
            ORDER BY year DESC, week_number DESC
            LIMIT ?2
            "#,
        )?;

        let mut reports: Vec<WeeklyReport> = stmt
            .query_map(params![employee_id, limit], Self::map_report_row)?
            .collect::<Result<_, _>>()?;

        for report in &mut reports {
            report.tasks = Self::load_tasks(&conn, &report.report_id)?;
        }

        Ok(reports)
    }

    // Ánh xạ một dòng weekly_reports (chưa kèm đầu việc)
    fn map_report_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<WeeklyReport> {
        Ok(WeeklyReport {
            report_id: row.get(0)?,
            employee_id: row.get(1)?,
            week_number: row.get(2)?,
            year: row.get(3)?,
            tasks: Vec::new(),
            created_at: parse_utc(&row.get::<_, String>(4)?),
            updated_at: parse_utc(&row.get::<_, String>(5)?),
        })
    }

    // Nạp danh sách đầu việc của một báo cáo
    fn load_tasks(conn: &Connection, report_id: &str) -> RepositoryResult<Vec<ReportTask>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT task_id, name, is_completed, note, seq_no
            FROM report_tasks
            WHERE report_id = ?1
            ORDER BY seq_no
            "#,
        )?;

        let tasks = stmt
            .query_map(params![report_id], |row| {
                Ok(ReportTask {
                    task_id: row.get(0)?,
                    name: row.get(1)?,
                    is_completed: row.get::<_, i32>(2)? != 0,
                    note: row.get(3)?,
                    seq_no: row.get(4)?,
                })
            })?
            .collect::<Result<_, _>>()?;

        Ok(tasks)
    }
}

// Phân tích thời điểm RFC3339, dữ liệu hỏng quy về epoch để không panic
fn parse_utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH)
}
