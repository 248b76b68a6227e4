// ==========================================
// Hệ thống báo cáo công việc tuần - Engine thống kê
// ==========================================
// Trách nhiệm: tổng hợp tỷ lệ hoàn thành và xếp hạng hiệu suất cho
// dashboard (theo nhân viên / phòng ban / văn phòng / xu hướng tuần)
// Nguyên tắc: hàm thuần trên dữ liệu miền, không truy xuất dữ liệu
// ==========================================

use crate::domain::organization::{Department, Employee};
use crate::domain::report::WeeklyReport;
use crate::domain::workweek::WorkWeekKey;
use crate::engine::performance_core::{PerformanceClassification, PerformanceCore};
use crate::engine::workweek_core::WorkWeekCore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// EmployeePerformance - Hiệu suất một nhân viên trong tuần
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePerformance {
    pub employee_id: String,                        // ID nhân viên
    pub full_name: String,                          // Họ tên
    pub department_id: String,                      // Phòng ban
    pub total_tasks: usize,                         // Tổng số đầu việc
    pub completed_tasks: usize,                     // Số đầu việc hoàn thành
    pub completion_rate: f64,                       // Tỷ lệ hoàn thành (%)
    pub classification: PerformanceClassification,  // Bậc hiệu suất
    pub rank: usize,                                // Hạng trong danh sách (1 là cao nhất)
}

// ==========================================
// DepartmentSummary - Tổng hợp theo phòng ban
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub department_id: String,                      // ID phòng ban
    pub name: String,                               // Tên phòng ban
    pub report_count: usize,                        // Số báo cáo đã nộp
    pub avg_completion_rate: f64,                   // Tỷ lệ hoàn thành trung bình (%)
    pub classification: PerformanceClassification,  // Bậc hiệu suất trung bình
}

// ==========================================
// WeeklyTrendPoint - Một điểm trên biểu đồ xu hướng
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    pub week_number: u32,          // Số tuần
    pub year: i32,                 // Năm
    pub report_count: usize,       // Số báo cáo trong tuần
    pub avg_completion_rate: f64,  // Tỷ lệ hoàn thành trung bình (%)
}

// ==========================================
// StatisticsEngine
// ==========================================
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Xếp hạng nhân viên theo tỷ lệ hoàn thành trong một tuần
    ///
    /// # Quy tắc
    /// - Sắp giảm dần theo completion_rate; bằng nhau thì theo số đầu việc
    ///   hoàn thành, rồi theo họ tên để kết quả ổn định
    /// - Nhân viên không có báo cáo trong tuần không xuất hiện trong bảng
    ///
    /// # Tham số
    /// - entries: cặp (nhân viên, báo cáo của tuần đang xét)
    pub fn rank_employees(entries: &[(Employee, WeeklyReport)]) -> Vec<EmployeePerformance> {
        let mut rows: Vec<EmployeePerformance> = entries
            .iter()
            .map(|(employee, report)| {
                let rate = report.completion_rate();
                EmployeePerformance {
                    employee_id: employee.employee_id.clone(),
                    full_name: employee.full_name.clone(),
                    department_id: employee.department_id.clone(),
                    total_tasks: report.tasks.len(),
                    completed_tasks: report.completed_count(),
                    completion_rate: rate,
                    classification: PerformanceCore::classify(rate),
                    rank: 0, // Gán sau khi sắp xếp
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.completion_rate
                .partial_cmp(&a.completion_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.completed_tasks.cmp(&a.completed_tasks))
                .then(a.full_name.cmp(&b.full_name))
        });

        for (idx, row) in rows.iter_mut().enumerate() {
            row.rank = idx + 1;
        }

        rows
    }

    /// Tổng hợp tỷ lệ hoàn thành trung bình theo phòng ban
    ///
    /// # Tham số
    /// - departments: danh sách phòng ban cần lên bảng
    /// - entries: cặp (nhân viên, báo cáo) của tuần đang xét
    pub fn summarize_departments(
        departments: &[Department],
        entries: &[(Employee, WeeklyReport)],
    ) -> Vec<DepartmentSummary> {
        // Gom tỷ lệ hoàn thành theo phòng ban
        let mut rates_by_department: HashMap<&str, Vec<f64>> = HashMap::new();
        for (employee, report) in entries {
            rates_by_department
                .entry(employee.department_id.as_str())
                .or_default()
                .push(report.completion_rate());
        }

        departments
            .iter()
            .map(|department| {
                let rates = rates_by_department
                    .get(department.department_id.as_str())
                    .cloned()
                    .unwrap_or_default();
                let avg = Self::average(&rates);

                DepartmentSummary {
                    department_id: department.department_id.clone(),
                    name: department.name.clone(),
                    report_count: rates.len(),
                    avg_completion_rate: avg,
                    classification: PerformanceCore::classify(avg),
                }
            })
            .collect()
    }

    /// Xu hướng hoàn thành qua các tuần gần nhất
    ///
    /// # Quy tắc
    /// - Đi lùi từ tuần `current` đúng `weeks` tuần (có cuộn qua biên năm),
    ///   trả về theo thứ tự thời gian tăng dần
    /// - Tuần không có báo cáo vẫn có mặt với report_count = 0
    ///
    /// # Tham số
    /// - reports: toàn bộ báo cáo trong khoảng quan tâm
    /// - current: tuần mới nhất của biểu đồ
    /// - weeks: số tuần hiển thị
    pub fn weekly_trend(
        reports: &[WeeklyReport],
        current: WorkWeekKey,
        weeks: usize,
    ) -> Vec<WeeklyTrendPoint> {
        // Gom tỷ lệ theo (năm, tuần)
        let mut rates_by_week: HashMap<(i32, u32), Vec<f64>> = HashMap::new();
        for report in reports {
            rates_by_week
                .entry((report.year, report.week_number))
                .or_default()
                .push(report.completion_rate());
        }

        // Danh sách tuần: đi lùi rồi đảo lại cho đúng trục thời gian
        let mut keys = Vec::with_capacity(weeks);
        let mut key = current;
        for _ in 0..weeks {
            keys.push(key);
            key = WorkWeekCore::previous_week(key);
        }
        keys.reverse();

        keys.into_iter()
            .map(|week_key| {
                let rates = rates_by_week
                    .get(&(week_key.year, week_key.week_number))
                    .cloned()
                    .unwrap_or_default();

                WeeklyTrendPoint {
                    week_number: week_key.week_number,
                    year: week_key.year,
                    report_count: rates.len(),
                    avg_completion_rate: Self::average(&rates),
                }
            })
            .collect()
    }

    fn average(rates: &[f64]) -> f64 {
        if rates.is_empty() {
            return 0.0;
        }
        rates.iter().sum::<f64>() / rates.len() as f64
    }
}
