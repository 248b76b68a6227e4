// ==========================================
// Hệ thống báo cáo công việc tuần - Kho tổ chức
// ==========================================
// Trách nhiệm: truy xuất cây tổ chức
// (offices / departments / job_positions / employees)
// Nguyên tắc: không chứa logic nghiệp vụ
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::organization::{Department, Employee, JobPosition, Office};
use crate::domain::types::UserRole;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// OrganizationRepository - Kho cây tổ chức
// ==========================================
pub struct OrganizationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl OrganizationRepository {
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

    // ==========================================
    // Văn phòng
    // ==========================================

    pub fn insert_office(&self, office: &Office) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO offices (office_id, name, address, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                office.office_id,
                office.name,
                office.address,
                office.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn list_offices(&self) -> RepositoryResult<Vec<Office>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT office_id, name, address, created_at FROM offices ORDER BY name")?;

        let offices = stmt
            .query_map([], |row| {
                Ok(Office {
                    office_id: row.get(0)?,
                    name: row.get(1)?,
                    address: row.get(2)?,
                    created_at: parse_utc(&row.get::<_, String>(3)?),
                })
            })?
            .collect::<Result<_, _>>()?;

        Ok(offices)
    }

    // ==========================================
    // Phòng ban
    // ==========================================

    pub fn insert_department(&self, department: &Department) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO departments (department_id, office_id, name, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                department.department_id,
                department.office_id,
                department.name,
                department.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT department_id, office_id, name, created_at FROM departments ORDER BY name",
        )?;

        let departments = stmt
            .query_map([], Self::map_department_row)?
            .collect::<Result<_, _>>()?;

        Ok(departments)
    }

    pub fn list_departments_by_office(&self, office_id: &str) -> RepositoryResult<Vec<Department>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT department_id, office_id, name, created_at
            FROM departments WHERE office_id = ?1 ORDER BY name
            "#,
        )?;

        let departments = stmt
            .query_map(params![office_id], Self::map_department_row)?
            .collect::<Result<_, _>>()?;

        Ok(departments)
    }

    fn map_department_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Department> {
        Ok(Department {
            department_id: row.get(0)?,
            office_id: row.get(1)?,
            name: row.get(2)?,
            created_at: parse_utc(&row.get::<_, String>(3)?),
        })
    }

    // ==========================================
    // Vị trí công việc
    // ==========================================

    pub fn insert_position(&self, position: &JobPosition) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO job_positions (position_id, department_id, title, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                position.position_id,
                position.department_id,
                position.title,
                position.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn list_positions_by_department(
        &self,
        department_id: &str,
    ) -> RepositoryResult<Vec<JobPosition>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT position_id, department_id, title, created_at
            FROM job_positions WHERE department_id = ?1 ORDER BY title
            "#,
        )?;

        let positions = stmt
            .query_map(params![department_id], |row| {
                Ok(JobPosition {
                    position_id: row.get(0)?,
                    department_id: row.get(1)?,
                    title: row.get(2)?,
                    created_at: parse_utc(&row.get::<_, String>(3)?),
                })
            })?
            .collect::<Result<_, _>>()?;

        Ok(positions)
    }

    // ==========================================
    // Nhân viên
    // ==========================================

    pub fn insert_employee(&self, employee: &Employee) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO employees (
                employee_id, department_id, position_id, full_name, email, role, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                employee.employee_id,
                employee.department_id,
                employee.position_id,
                employee.full_name,
                employee.email,
                employee.role.to_db_str(),
                employee.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn find_employee(&self, employee_id: &str) -> RepositoryResult<Option<Employee>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT employee_id, department_id, position_id, full_name, email, role, created_at
            FROM employees WHERE employee_id = ?1
            "#,
            params![employee_id],
            Self::map_employee_row,
        );

        match result {
            Ok(employee) => Ok(Some(employee)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_employees(&self) -> RepositoryResult<Vec<Employee>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT employee_id, department_id, position_id, full_name, email, role, created_at
            FROM employees ORDER BY full_name
            "#,
        )?;

        let employees = stmt
            .query_map([], Self::map_employee_row)?
            .collect::<Result<_, _>>()?;

        Ok(employees)
    }

    pub fn list_employees_by_department(
        &self,
        department_id: &str,
    ) -> RepositoryResult<Vec<Employee>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT employee_id, department_id, position_id, full_name, email, role, created_at
            FROM employees WHERE department_id = ?1 ORDER BY full_name
            "#,
        )?;

        let employees = stmt
            .query_map(params![department_id], Self::map_employee_row)?
            .collect::<Result<_, _>>()?;

        Ok(employees)
    }

    fn map_employee_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
        Ok(Employee {
            employee_id: row.get(0)?,
            department_id: row.get(1)?,
            position_id: row.get(2)?,
            full_name: row.get(3)?,
            email: row.get(4)?,
            role: UserRole::from_str(&row.get::<_, String>(5)?),
            created_at: parse_utc(&row.get::<_, String>(6)?),
        })
    }
}

// Phân tích thời điểm lưu dạng chuỗi; chấp nhận cả RFC3339 lẫn định dạng
// datetime('now') của SQLite (dữ liệu seed tay)
fn parse_utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH)
}
