// ==========================================
// Hệ thống báo cáo công việc tuần - API dashboard
// ==========================================
// Trách nhiệm: tổng hợp số liệu cho màn hình dashboard
// (tổng quan tuần, xếp hạng nhân viên, tổng hợp phòng ban,
// xu hướng tuần, hoạt động gần đây)
// Kiến trúc: API → StatisticsEngine (hàm thuần) + Repository
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::WeekRangeValidator;
use crate::config::report_config_trait::ReportConfigReader;
use crate::domain::action_log::ActionLog;
use crate::domain::organization::Employee;
use crate::domain::report::WeeklyReport;
use crate::domain::workweek::WorkWeekKey;
use crate::engine::performance_core::{PerformanceClassification, PerformanceCore};
use crate::engine::statistics::{
    DepartmentSummary, EmployeePerformance, StatisticsEngine, WeeklyTrendPoint,
};
use crate::engine::workweek_core::WorkWeekCore;
use crate::repository::action_log_repo::ActionLogRepository;
use crate::repository::organization_repo::OrganizationRepository;
use crate::repository::report_repo::ReportRepository;

// ==========================================
// WeekOverview - Tổng quan một tuần
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekOverview {
    pub week_number: u32,                          // Số tuần
    pub year: i32,                                 // Năm
    pub display_label: String,                     // Nhãn hiển thị khoảng ngày
    pub start_date: chrono::NaiveDate,             // Thứ Sáu mở tuần
    pub end_date: chrono::NaiveDate,               // Thứ Năm khép tuần
    pub report_count: usize,                       // Số báo cáo đã nộp
    pub avg_completion_rate: f64,                  // Tỷ lệ hoàn thành trung bình
    pub classification: PerformanceClassification, // Bậc hiệu suất trung bình
}

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi<C>
where
    C: ReportConfigReader,
{
    report_repo: Arc<ReportRepository>,
    organization_repo: Arc<OrganizationRepository>,
    action_log_repo: Arc<ActionLogRepository>,
    config: Arc<C>,
    validator: WeekRangeValidator<C>,
}

impl<C> DashboardApi<C>
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
            config: config.clone(),
            validator: WeekRangeValidator::new(config),
        }
    }

    // ==========================================
    // Tổng quan tuần
    // ==========================================

    /// Tổng quan một tuần: khoảng ngày, số báo cáo, tỷ lệ trung bình
    pub async fn get_week_overview(&self, week_number: u32, year: i32) -> ApiResult<WeekOverview> {
        self.validator.validate_week_year(week_number, year).await?;

        let range = WorkWeekCore::work_week_range(week_number, year)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        let reports = self.report_repo.list_by_week(week_number, year)?;
        let avg = if reports.is_empty() {
            0.0
        } else {
            reports.iter().map(|r| r.completion_rate()).sum::<f64>() / reports.len() as f64
        };

        Ok(WeekOverview {
            week_number,
            year,
            display_label: range.display_label.clone(),
            start_date: range.start_date,
            end_date: range.end_date,
            report_count: reports.len(),
            avg_completion_rate: avg,
            classification: PerformanceCore::classify(avg),
        })
    }

    // ==========================================
    // Xếp hạng & tổng hợp
    // ==========================================

    /// Bảng xếp hạng hiệu suất nhân viên của một tuần
    pub async fn get_week_ranking(
        &self,
        week_number: u32,
        year: i32,
    ) -> ApiResult<Vec<EmployeePerformance>> {
        let entries = self.load_week_entries(week_number, year).await?;
        Ok(StatisticsEngine::rank_employees(&entries))
    }

    /// Tổng hợp tỷ lệ hoàn thành theo phòng ban của một tuần
    pub async fn get_department_summaries(
        &self,
        week_number: u32,
        year: i32,
    ) -> ApiResult<Vec<DepartmentSummary>> {
        let entries = self.load_week_entries(week_number, year).await?;
        let departments = self.organization_repo.list_departments()?;
        Ok(StatisticsEngine::summarize_departments(&departments, &entries))
    }

    /// Tổng hợp theo phòng ban của một văn phòng
    pub async fn get_office_department_summaries(
        &self,
        office_id: &str,
        week_number: u32,
        year: i32,
    ) -> ApiResult<Vec<DepartmentSummary>> {
        let entries = self.load_week_entries(week_number, year).await?;
        let departments = self.organization_repo.list_departments_by_office(office_id)?;
        Ok(StatisticsEngine::summarize_departments(&departments, &entries))
    }

    // ==========================================
    // Xu hướng tuần
    // ==========================================

    /// Xu hướng hoàn thành qua các tuần, kết thúc tại tuần chỉ định
    ///
    /// Số tuần hiển thị đọc từ cấu hình (dashboard/trend_weeks)
    pub async fn get_weekly_trend_from(
        &self,
        week_number: u32,
        year: i32,
    ) -> ApiResult<Vec<WeeklyTrendPoint>> {
        self.validator.validate_week_year(week_number, year).await?;

        let weeks = self
            .config
            .get_trend_weeks()
            .await
            .map_err(|e| ApiError::InternalError(e.to_string()))? as usize;

        let current = WorkWeekKey::new(week_number, year);

        // Gom báo cáo của đúng các tuần trên biểu đồ
        let mut reports: Vec<WeeklyReport> = Vec::new();
        let mut key = current;
        for _ in 0..weeks {
            reports.extend(self.report_repo.list_by_week(key.week_number, key.year)?);
            key = WorkWeekCore::previous_week(key);
        }

        Ok(StatisticsEngine::weekly_trend(&reports, current, weeks))
    }

    /// Xu hướng hoàn thành kết thúc tại tuần hiện tại (đồng hồ hệ thống)
    pub async fn get_weekly_trend(&self) -> ApiResult<Vec<WeeklyTrendPoint>> {
        let current = WorkWeekCore::current_week();
        self.get_weekly_trend_from(current.week_number, current.year).await
    }

    // ==========================================
    // Hoạt động gần đây
    // ==========================================

    /// Các thao tác báo cáo gần nhất
    pub fn get_recent_actions(&self, limit: u32) -> ApiResult<Vec<ActionLog>> {
        Ok(self.action_log_repo.list_recent(limit)?)
    }

    /// Nhật ký thao tác của một nhân viên
    pub fn get_actions_by_employee(
        &self,
        employee_id: &str,
        limit: u32,
    ) -> ApiResult<Vec<ActionLog>> {
        Ok(self.action_log_repo.list_by_employee(employee_id, limit)?)
    }

    // ==========================================
    // Hàm hỗ trợ
    // ==========================================

    // Nạp cặp (nhân viên, báo cáo) của một tuần
    async fn load_week_entries(
        &self,
        week_number: u32,
        year: i32,
    ) -> ApiResult<Vec<(Employee, WeeklyReport)>> {
        self.validator.validate_week_year(week_number, year).await?;

        let reports = self.report_repo.list_by_week(week_number, year)?;
        let mut entries = Vec::with_capacity(reports.len());

        for report in reports {
            // Báo cáo mồ côi (nhân viên đã bị xóa) bỏ qua khỏi thống kê
            if let Some(employee) = self.organization_repo.find_employee(&report.employee_id)? {
                entries.push((employee, report));
            }
        }

        Ok(entries)
    }
}
