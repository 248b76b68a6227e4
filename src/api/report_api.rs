// ==========================================
// Hệ thống báo cáo công việc tuần - API báo cáo
// ==========================================
// Trách nhiệm: tạo / chỉnh sửa / xóa / truy vấn / xuất báo cáo tuần
// Mọi thao tác ghi đều đi qua bộ kiểm tra phạm vi + engine cửa sổ tuần
// và để lại bản ghi nhật ký
// ==========================================

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::WeekRangeValidator;
use crate::config::report_config_trait::ReportConfigReader;
use crate::domain::action_log::ActionLog;
use crate::domain::report::{ReportTask, WeeklyReport};
use crate::domain::types::ReportAction;
use crate::domain::workweek::WorkWeekKey;
use crate::engine::eligibility::EligibilityEngine;
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::organization_repo::OrganizationRepository;
use crate::repository::report_repo::ReportRepository;

// ==========================================
// ReportTaskInput - Đầu việc do người dùng nhập
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTaskInput {
    pub name: String,
    pub is_completed: bool,
    pub note: Option<String>,
}

// ==========================================
// ReportApi - API báo cáo tuần
// ==========================================
pub struct ReportApi<C>
where
    C: ReportConfigReader,
{
    report_repo: Arc<ReportRepository>,
    organization_repo: Arc<OrganizationRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    eligibility_engine: EligibilityEngine,
    validator: WeekRangeValidator<C>,
}

impl<C> ReportApi<C>
where
    C: ReportConfigReader,
{
    pub fn new(
        report_repo: Arc<ReportRepository>,
        organization_repo: Arc<OrganizationRepository>,
        action_log_repo: Arc<ActionLogRepository>,
        config: Arc<C>,
    ) -> Self {
        Self {
            report_repo,
            organization_repo,
            action_log_repo,
            eligibility_engine: EligibilityEngine::new(),
            validator: WeekRangeValidator::new(config),
        }
    }

    // ==========================================
    // Tạo báo cáo
    // ==========================================

    /// Tạo báo cáo với "hôm nay" truyền vào tường minh (phục vụ test)
    ///
    /// # Quy trình
    /// 1. Kiểm tra phạm vi (tuần, năm)
    /// 2. Kiểm tra nhân viên tồn tại
    /// 3. Kiểm tra cửa sổ tuần cho thao tác tạo
    /// 4. Chặn báo cáo trùng (mỗi nhân viên một báo cáo mỗi tuần)
    /// 5. Ghi báo cáo + nhật ký
    pub async fn create_report_at(
        &self,
        employee_id: &str,
        week_number: u32,
        year: i32,
        tasks: Vec<ReportTaskInput>,
        today: NaiveDate,
    ) -> ApiResult<WeeklyReport> {
        self.validator.validate_week_year(week_number, year).await?;

        if tasks.is_empty() {
            return Err(ApiError::InvalidInput(
                "Báo cáo phải có ít nhất một đầu việc".to_string(),
            ));
        }

        let employee = self
            .organization_repo
            .find_employee(employee_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Nhân viên (id={}) không tồn tại", employee_id)))?;

        let target = WorkWeekKey::new(week_number, year);
        let eligibility = self
            .eligibility_engine
            .check_at(ReportAction::Create, target, today);
        if !eligibility.is_valid {
            return Err(ApiError::EligibilityViolation(
                eligibility.reason.unwrap_or_default(),
            ));
        }

        if self
            .report_repo
            .find_by_employee_and_week(employee_id, week_number, year)?
            .is_some()
        {
            return Err(ApiError::BusinessRuleViolation(format!(
                "Nhân viên {} đã có báo cáo cho tuần {}/{}",
                employee.full_name, week_number, year
            )));
        }

        let now = Utc::now();
        let report = WeeklyReport {
            report_id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            week_number,
            year,
            tasks: Self::build_tasks(tasks),
            created_at: now,
            updated_at: now,
        };

        self.report_repo.insert(&report)?;
        self.log_action(ReportAction::Create, Some(&report.report_id), &report, None)?;

        info!(
            report_id = %report.report_id,
            employee_id = %employee_id,
            week = week_number,
            year = year,
            "Đã tạo báo cáo tuần"
        );

        Ok(report)
    }

    /// Tạo báo cáo theo đồng hồ hệ thống
    pub async fn create_report(
        &self,
        employee_id: &str,
        week_number: u32,
        year: i32,
        tasks: Vec<ReportTaskInput>,
    ) -> ApiResult<WeeklyReport> {
        self.create_report_at(employee_id, week_number, year, tasks, Local::now().date_naive())
            .await
    }

    // ==========================================
    // Chỉnh sửa báo cáo
    // ==========================================

    /// Cập nhật danh sách đầu việc của báo cáo (ghi đè toàn bộ)
    pub async fn update_report_at(
        &self,
        report_id: &str,
        tasks: Vec<ReportTaskInput>,
        today: NaiveDate,
    ) -> ApiResult<WeeklyReport> {
        if tasks.is_empty() {
            return Err(ApiError::InvalidInput(
                "Báo cáo phải có ít nhất một đầu việc".to_string(),
            ));
        }

        let mut report = self
            .report_repo
            .find_by_id(report_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Báo cáo (id={}) không tồn tại", report_id)))?;

        let target = WorkWeekKey::new(report.week_number, report.year);
        let eligibility = self
            .eligibility_engine
            .check_at(ReportAction::Edit, target, today);
        if !eligibility.is_valid {
            return Err(ApiError::EligibilityViolation(
                eligibility.reason.unwrap_or_default(),
            ));
        }

        report.tasks = Self::build_tasks(tasks);
        report.updated_at = Utc::now();

        self.report_repo.update(&report)?;
        self.log_action(ReportAction::Edit, Some(report_id), &report, None)?;

        info!(report_id = %report_id, "Đã cập nhật báo cáo tuần");

        Ok(report)
    }

    /// Cập nhật báo cáo theo đồng hồ hệ thống
    pub async fn update_report(
        &self,
        report_id: &str,
        tasks: Vec<ReportTaskInput>,
    ) -> ApiResult<WeeklyReport> {
        self.update_report_at(report_id, tasks, Local::now().date_naive())
            .await
    }

    // ==========================================
    // Xóa báo cáo
    // ==========================================

    /// Xóa báo cáo (cửa sổ hẹp hơn tạo/sửa: không xóa tuần trước)
    pub async fn delete_report_at(&self, report_id: &str, today: NaiveDate) -> ApiResult<()> {
        let report = self
            .report_repo
            .find_by_id(report_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Báo cáo (id={}) không tồn tại", report_id)))?;

        let target = WorkWeekKey::new(report.week_number, report.year);
        let eligibility = self
            .eligibility_engine
            .check_at(ReportAction::Delete, target, today);
        if !eligibility.is_valid {
            return Err(ApiError::EligibilityViolation(
                eligibility.reason.unwrap_or_default(),
            ));
        }

        self.report_repo.delete(report_id)?;
        self.log_action(ReportAction::Delete, None, &report, None)?;

        info!(report_id = %report_id, "Đã xóa báo cáo tuần");

        Ok(())
    }

    /// Xóa báo cáo theo đồng hồ hệ thống
    pub async fn delete_report(&self, report_id: &str) -> ApiResult<()> {
        self.delete_report_at(report_id, Local::now().date_naive()).await
    }

    // ==========================================
    // Truy vấn
    // ==========================================

    /// Lấy báo cáo theo ID
    pub fn get_report(&self, report_id: &str) -> ApiResult<WeeklyReport> {
        self.report_repo
            .find_by_id(report_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Báo cáo (id={}) không tồn tại", report_id)))
    }

    /// Danh sách báo cáo của một tuần
    pub async fn list_reports_by_week(
        &self,
        week_number: u32,
        year: i32,
    ) -> ApiResult<Vec<WeeklyReport>> {
        self.validator.validate_week_year(week_number, year).await?;
        Ok(self.report_repo.list_by_week(week_number, year)?)
    }

    /// Danh sách báo cáo của một nhân viên (mới nhất trước)
    pub fn list_reports_by_employee(
        &self,
        employee_id: &str,
        limit: u32,
    ) -> ApiResult<Vec<WeeklyReport>> {
        Ok(self.report_repo.list_by_employee(employee_id, limit)?)
    }

    // ==========================================
    // Xuất CSV
    // ==========================================

    /// Xuất toàn bộ báo cáo của một tuần ra CSV (mỗi đầu việc một dòng)
    pub async fn export_week_csv(&self, week_number: u32, year: i32) -> ApiResult<String> {
        self.validator.validate_week_year(week_number, year).await?;

        let reports = self.report_repo.list_by_week(week_number, year)?;
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record([
                "ma_nhan_vien",
                "ho_ten",
                "tuan",
                "nam",
                "cong_viec",
                "hoan_thanh",
                "ghi_chu",
            ])
            .map_err(|e| ApiError::ExportError(e.to_string()))?;

        for report in &reports {
            let full_name = self
                .organization_repo
                .find_employee(&report.employee_id)?
                .map(|e| e.full_name)
                .unwrap_or_default();

            let week_str = report.week_number.to_string();
            let year_str = report.year.to_string();

            for task in &report.tasks {
                writer
                    .write_record([
                        report.employee_id.as_str(),
                        full_name.as_str(),
                        week_str.as_str(),
                        year_str.as_str(),
                        task.name.as_str(),
                        if task.is_completed { "x" } else { "" },
                        task.note.as_deref().unwrap_or(""),
                    ])
                    .map_err(|e| ApiError::ExportError(e.to_string()))?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ApiError::ExportError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ApiError::ExportError(e.to_string()))
    }

    // ==========================================
    // Hàm hỗ trợ
    // ==========================================

    fn build_tasks(inputs: Vec<ReportTaskInput>) -> Vec<ReportTask> {
        inputs
            .into_iter()
            .enumerate()
            .map(|(idx, input)| ReportTask {
                task_id: Uuid::new_v4().to_string(),
                name: input.name,
                is_completed: input.is_completed,
                note: input.note,
                seq_no: idx as i32,
            })
            .collect()
    }

    fn log_action(
        &self,
        action: ReportAction,
        report_id: Option<&str>,
        report: &WeeklyReport,
        detail: Option<String>,
    ) -> ApiResult<()> {
        let log = ActionLog::new(
            action,
            report_id.map(|s| s.to_string()),
            &report.employee_id,
            report.week_number,
            report.year,
            detail,
        );
        self.action_log_repo.insert(&log)?;
        Ok(())
    }
}
