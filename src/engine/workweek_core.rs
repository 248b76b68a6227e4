// ==========================================
// Hệ thống báo cáo công việc tuần - WorkWeek Core (thư viện hàm thuần)
// ==========================================
// Trách nhiệm: ánh xạ hai chiều giữa ngày lịch và tuần làm việc
// Nguyên tắc: không trạng thái, không side effect, không I/O
// ==========================================
// Định nghĩa tuần làm việc N của năm Y: {Thứ Sáu, Thứ Bảy} của tuần ISO
// (N-1) nối với {Thứ Hai..Thứ Năm} của tuần ISO N. Chủ nhật không thuộc
// tuần làm việc nào (ngày nghỉ trọn vẹn).
// ==========================================

use crate::domain::workweek::{WorkWeekKey, WorkWeekRange};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use thiserror::Error;

// ==========================================
// Lỗi của WorkWeek Core
// ==========================================
// Kiểm tra phạm vi là một phần của hợp đồng hàm: số tuần nằm ngoài
// [1, số tuần ISO thực của năm] trả về lỗi có kiểu thay vì ngoại suy
// ra một khoảng ngày vô nghĩa.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkWeekError {
    #[error("Số tuần không hợp lệ: {week_number} (năm {year} chỉ có {max_week} tuần)")]
    WeekOutOfRange {
        week_number: u32,
        year: i32,
        max_week: u32,
    },

    #[error("Năm không hợp lệ: {0}")]
    InvalidYear(i32),
}

// ==========================================
// WorkWeekCore - thư viện hàm thuần
// ==========================================
pub struct WorkWeekCore;

impl WorkWeekCore {
    /// Số tuần ISO cuối cùng của một năm (52 hoặc 53)
    ///
    /// # Quy tắc
    /// - Ngày 28/12 luôn nằm trong tuần ISO cuối cùng của năm đó
    ///   (tuần ISO 1 là tuần chứa ngày 04/01, nên tuần cuối chứa 28/12)
    pub fn last_iso_week(year: i32) -> u32 {
        match NaiveDate::from_ymd_opt(year, 12, 28) {
            Some(d) => d.iso_week().week(),
            None => 52,
        }
    }

    /// Tính tuần làm việc từ một ngày lịch
    ///
    /// # Quy tắc
    /// - Thứ Sáu/Thứ Bảy → tuần ISO + 1 (hai ngày này khép sổ cho tuần kế)
    ///   - Nếu tuần ISO + 1 vượt quá tuần ISO cuối của năm → tuần 1 năm sau
    /// - Thứ Hai..Thứ Năm và Chủ nhật → đúng tuần ISO hiện hành
    ///   (Chủ nhật quy về tuần ISO như Thứ Hai..Thứ Năm, dù không ngày
    ///   làm việc nào là Chủ nhật)
    ///
    /// # Đảm bảo
    /// - week_number luôn thuộc [1, 53]
    pub fn work_week_from_date(date: NaiveDate) -> WorkWeekKey {
        let iso = date.iso_week();

        match date.weekday() {
            Weekday::Fri | Weekday::Sat => {
                let next = iso.week() + 1;
                if next > Self::last_iso_week(iso.year()) {
                    WorkWeekKey::new(1, iso.year() + 1)
                } else {
                    WorkWeekKey::new(next, iso.year())
                }
            }
            _ => WorkWeekKey::new(iso.week(), iso.year()),
        }
    }

    /// Tuần làm việc hiện tại theo đồng hồ hệ thống
    ///
    /// Test không dùng hàm này - luôn truyền ngày cố định qua
    /// work_week_from_date để kết quả ổn định.
    pub fn current_week() -> WorkWeekKey {
        Self::work_week_from_date(Local::now().date_naive())
    }

    /// Tính khoảng ngày của một tuần làm việc (ánh xạ ngược)
    ///
    /// # Thuật toán
    /// 1. Ngày 04/01 của năm luôn thuộc tuần ISO 1 → lùi về Thứ Hai của
    ///    tuần đó được Thứ Hai đầu năm
    /// 2. Cộng (week_number - 1) × 7 ngày → Thứ Hai của tuần N
    /// 3. Thứ Sáu = Thứ Hai - 3 ngày; Thứ Bảy = Thứ Hai - 2 ngày
    /// 4. work_days = [T6, T7, T2, T3, T4, T5]; result_days = 4 ngày cuối
    ///
    /// # Tham số
    /// - week_number: số tuần [1, số tuần ISO của năm]
    /// - year: năm ISO
    pub fn work_week_range(week_number: u32, year: i32) -> Result<WorkWeekRange, WorkWeekError> {
        let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or(WorkWeekError::InvalidYear(year))?;

        let max_week = Self::last_iso_week(year);
        if week_number == 0 || week_number > max_week {
            return Err(WorkWeekError::WeekOutOfRange {
                week_number,
                year,
                max_week,
            });
        }

        let first_monday = jan4 - Duration::days(jan4.weekday().num_days_from_monday() as i64);
        let monday = first_monday + Duration::days(((week_number - 1) * 7) as i64);

        let friday = monday - Duration::days(3);
        let saturday = monday - Duration::days(2);
        let thursday = monday + Duration::days(3);

        let work_days = vec![
            friday,
            saturday,
            monday,
            monday + Duration::days(1),
            monday + Duration::days(2),
            thursday,
        ];
        let result_days = work_days[2..].to_vec();

        let display_label = format!(
            "Tuần {}/{} ({} - {})",
            week_number,
            year,
            friday.format("%d/%m"),
            thursday.format("%d/%m/%Y"),
        );

        Ok(WorkWeekRange {
            start_date: friday,
            end_date: thursday,
            work_days,
            result_days,
            display_label,
        })
    }

    /// Tuần làm việc liền trước (lùi 1 trong không gian số tuần)
    ///
    /// # Quy tắc biên năm
    /// - Tuần 1 → tuần cuối (52 hoặc 53) của năm trước
    pub fn previous_week(key: WorkWeekKey) -> WorkWeekKey {
        if key.week_number <= 1 {
            WorkWeekKey::new(Self::last_iso_week(key.year - 1), key.year - 1)
        } else {
            WorkWeekKey::new(key.week_number - 1, key.year)
        }
    }

    /// Tuần làm việc liền sau (tiến 1 trong không gian số tuần)
    ///
    /// # Quy tắc biên năm
    /// - Vượt quá tuần cuối của năm → tuần 1 năm sau
    pub fn next_week(key: WorkWeekKey) -> WorkWeekKey {
        if key.week_number + 1 > Self::last_iso_week(key.year) {
            WorkWeekKey::new(1, key.year + 1)
        } else {
            WorkWeekKey::new(key.week_number + 1, key.year)
        }
    }
}
