// ==========================================
// Hệ thống báo cáo công việc tuần - API tổ chức
// ==========================================
// Trách nhiệm: quản lý cây tổ chức
// (văn phòng / phòng ban / vị trí / nhân viên)
// ==========================================

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::organization::{Department, Employee, JobPosition, Office};
use crate::domain::types::UserRole;
use crate::repository::organization_repo::OrganizationRepository;

// ==========================================
// OrganizationApi
// ==========================================
pub struct OrganizationApi {
    organization_repo: Arc<OrganizationRepository>,
}

impl OrganizationApi {
    pub fn new(organization_repo: Arc<OrganizationRepository>) -> Self {
        Self { organization_repo }
    }

    // ==========================================
    // Văn phòng
    // ==========================================

    /// Tạo văn phòng mới
    pub fn create_office(&self, name: &str, address: Option<String>) -> ApiResult<Office> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("Tên văn phòng không được rỗng".to_string()));
        }

        let office = Office {
            office_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            address,
            created_at: Utc::now(),
        };

        self.organization_repo.insert_office(&office)?;
        info!(office_id = %office.office_id, name = %office.name, "Đã tạo văn phòng");
        Ok(office)
    }

    /// Danh sách văn phòng
    pub fn list_offices(&self) -> ApiResult<Vec<Office>> {
        Ok(self.organization_repo.list_offices()?)
    }

    // ==========================================
    // Phòng ban
    // ==========================================

    /// Tạo phòng ban trực thuộc một văn phòng
    pub fn create_department(&self, office_id: &str, name: &str) -> ApiResult<Department> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("Tên phòng ban không được rỗng".to_string()));
        }

        let department = Department {
            department_id: Uuid::new_v4().to_string(),
            office_id: office_id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };

        self.organization_repo.insert_department(&department)?;
        info!(department_id = %department.department_id, "Đã tạo phòng ban");
        Ok(department)
    }

    /// Danh sách phòng ban (toàn hệ thống)
    pub fn list_departments(&self) -> ApiResult<Vec<Department>> {
        Ok(self.organization_repo.list_departments()?)
    }

    /// Danh sách phòng ban của một văn phòng
    pub fn list_departments_by_office(&self, office_id: &str) -> ApiResult<Vec<Department>> {
        Ok(self.organization_repo.list_departments_by_office(office_id)?)
    }

    // ==========================================
    // Vị trí công việc
    // ==========================================

    /// Tạo vị trí công việc trong một phòng ban
    pub fn create_position(&self, department_id: &str, title: &str) -> ApiResult<JobPosition> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ApiError::InvalidInput("Chức danh không được rỗng".to_string()));
        }

        let position = JobPosition {
            position_id: Uuid::new_v4().to_string(),
            department_id: department_id.to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        };

        self.organization_repo.insert_position(&position)?;
        Ok(position)
    }

    /// Danh sách vị trí của một phòng ban
    pub fn list_positions_by_department(&self, department_id: &str) -> ApiResult<Vec<JobPosition>> {
        Ok(self.organization_repo.list_positions_by_department(department_id)?)
    }

    // ==========================================
    // Nhân viên
    // ==========================================

    /// Thêm nhân viên vào một phòng ban
    pub fn create_employee(
        &self,
        department_id: &str,
        position_id: Option<String>,
        full_name: &str,
        email: Option<String>,
        role: UserRole,
    ) -> ApiResult<Employee> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(ApiError::InvalidInput("Họ tên không được rỗng".to_string()));
        }

        let employee = Employee {
            employee_id: Uuid::new_v4().to_string(),
            department_id: department_id.to_string(),
            position_id,
            full_name: full_name.to_string(),
            email,
            role,
            created_at: Utc::now(),
        };

        self.organization_repo.insert_employee(&employee)?;
        info!(employee_id = %employee.employee_id, "Đã thêm nhân viên");
        Ok(employee)
    }

    /// Lấy thông tin nhân viên
    pub fn get_employee(&self, employee_id: &str) -> ApiResult<Employee> {
        self.organization_repo
            .find_employee(employee_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Nhân viên (id={}) không tồn tại", employee_id)))
    }

    /// Danh sách nhân viên toàn hệ thống
    pub fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        Ok(self.organization_repo.list_employees()?)
    }

    /// Danh sách nhân viên của một phòng ban
    pub fn list_employees_by_department(&self, department_id: &str) -> ApiResult<Vec<Employee>> {
        Ok(self.organization_repo.list_employees_by_department(department_id)?)
    }
}
