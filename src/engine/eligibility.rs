// ==========================================
// Hệ thống báo cáo công việc tuần - Engine kiểm tra cửa sổ tuần
// ==========================================
// Trách nhiệm: xác định tuần hiện tại từ đồng hồ (hoặc ngày được tiêm
// vào khi test) rồi ủy quyền cho EligibilityCore
// Nguyên tắc: không ghi dữ liệu, chỉ tính toán và trả kết quả
// ==========================================

use crate::domain::types::ReportAction;
use crate::domain::workweek::{WeekEligibility, WorkWeekKey};
use crate::engine::eligibility_core::EligibilityCore;
use crate::engine::workweek_core::WorkWeekCore;
use chrono::{Local, NaiveDate};
use tracing::instrument;

// ==========================================
// EligibilityEngine
// ==========================================
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Kiểm tra thao tác với "hôm nay" truyền vào tường minh
    ///
    /// # Tham số
    /// - action: loại thao tác (tạo / sửa / xóa)
    /// - target: tuần đích
    /// - today: ngày làm mốc tính tuần hiện tại
    #[instrument(skip(self), fields(action = %action, target = %target))]
    pub fn check_at(
        &self,
        action: ReportAction,
        target: WorkWeekKey,
        today: NaiveDate,
    ) -> WeekEligibility {
        let current = WorkWeekCore::work_week_from_date(today);
        EligibilityCore::check_action(action, target, current)
    }

    /// Kiểm tra thao tác theo đồng hồ hệ thống
    pub fn check(&self, action: ReportAction, target: WorkWeekKey) -> WeekEligibility {
        self.check_at(action, target, Local::now().date_naive())
    }

    /// Kiểm tra tạo báo cáo theo đồng hồ hệ thống
    pub fn check_creation(&self, target: WorkWeekKey) -> WeekEligibility {
        self.check(ReportAction::Create, target)
    }

    /// Kiểm tra chỉnh sửa báo cáo theo đồng hồ hệ thống
    pub fn check_edit(&self, target: WorkWeekKey) -> WeekEligibility {
        self.check(ReportAction::Edit, target)
    }

    /// Kiểm tra xóa báo cáo theo đồng hồ hệ thống
    pub fn check_deletion(&self, target: WorkWeekKey) -> WeekEligibility {
        self.check(ReportAction::Delete, target)
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
