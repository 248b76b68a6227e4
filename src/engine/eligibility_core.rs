// ==========================================
// Hệ thống báo cáo công việc tuần - Eligibility Core (thư viện hàm thuần)
// ==========================================
// Trách nhiệm: kiểm tra một (tuần, năm) có nằm trong cửa sổ cho phép
// của từng thao tác báo cáo hay không, so với tuần hiện tại
// Nguyên tắc: không trạng thái, không side effect, không ngoại lệ -
// mọi lời gọi đều trả về WeekEligibility
// ==========================================
// Cửa sổ cho phép:
// - Tạo / chỉnh sửa: tuần trước, tuần hiện tại, tuần tiếp theo
// - Xóa: chỉ tuần hiện tại và tuần tiếp theo (tuần trước bị loại)
// "Trước"/"sau" tính theo không gian số tuần làm việc (±1, có cuộn
// qua biên năm 52/53), không trừ ngày lịch.
// ==========================================

use crate::domain::types::ReportAction;
use crate::domain::workweek::{WeekEligibility, WorkWeekKey};
use crate::engine::workweek_core::WorkWeekCore;

/// Lý do từ chối tạo báo cáo ngoài cửa sổ cho phép
pub const REASON_CREATE_OUT_OF_WINDOW: &str =
    "Chỉ có thể tạo báo cáo cho tuần trước, tuần hiện tại hoặc tuần tiếp theo";

/// Lý do từ chối chỉnh sửa báo cáo ngoài cửa sổ cho phép
pub const REASON_EDIT_OUT_OF_WINDOW: &str =
    "Chỉ có thể chỉnh sửa báo cáo của tuần trước, tuần hiện tại hoặc tuần tiếp theo";

/// Lý do từ chối xóa báo cáo ngoài cửa sổ cho phép
pub const REASON_DELETE_OUT_OF_WINDOW: &str =
    "Chỉ có thể xóa báo cáo của tuần hiện tại và tuần tiếp theo";

// ==========================================
// EligibilityCore - thư viện hàm thuần
// ==========================================
pub struct EligibilityCore;

impl EligibilityCore {
    /// Kiểm tra cửa sổ tạo báo cáo
    ///
    /// # Quy tắc
    /// - Hợp lệ khi target ∈ {tuần trước, tuần hiện tại, tuần tiếp theo}
    ///
    /// # Tham số
    /// - target: tuần muốn tạo báo cáo
    /// - current: tuần làm việc hiện tại (caller truyền vào để test ổn định)
    pub fn check_creation(target: WorkWeekKey, current: WorkWeekKey) -> WeekEligibility {
        if Self::in_three_week_window(target, current) {
            WeekEligibility::valid()
        } else {
            WeekEligibility::invalid(REASON_CREATE_OUT_OF_WINDOW)
        }
    }

    /// Kiểm tra cửa sổ chỉnh sửa báo cáo (cùng quy tắc với tạo)
    pub fn check_edit(target: WorkWeekKey, current: WorkWeekKey) -> WeekEligibility {
        if Self::in_three_week_window(target, current) {
            WeekEligibility::valid()
        } else {
            WeekEligibility::invalid(REASON_EDIT_OUT_OF_WINDOW)
        }
    }

    /// Kiểm tra cửa sổ xóa báo cáo
    ///
    /// # Quy tắc
    /// - Hẹp hơn tạo/sửa: chỉ tuần hiện tại và tuần tiếp theo,
    ///   tuần trước không được xóa
    pub fn check_deletion(target: WorkWeekKey, current: WorkWeekKey) -> WeekEligibility {
        if target == current || target == WorkWeekCore::next_week(current) {
            WeekEligibility::valid()
        } else {
            WeekEligibility::invalid(REASON_DELETE_OUT_OF_WINDOW)
        }
    }

    /// Kiểm tra theo loại thao tác
    pub fn check_action(
        action: ReportAction,
        target: WorkWeekKey,
        current: WorkWeekKey,
    ) -> WeekEligibility {
        match action {
            ReportAction::Create => Self::check_creation(target, current),
            ReportAction::Edit => Self::check_edit(target, current),
            ReportAction::Delete => Self::check_deletion(target, current),
        }
    }

    // Cửa sổ 3 tuần: trước / hiện tại / tiếp theo
    fn in_three_week_window(target: WorkWeekKey, current: WorkWeekKey) -> bool {
        target == current
            || target == WorkWeekCore::previous_week(current)
            || target == WorkWeekCore::next_week(current)
    }
}
