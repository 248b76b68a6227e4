// ==========================================
// Hệ thống báo cáo công việc tuần - Performance Core (thư viện hàm thuần)
// ==========================================
// Trách nhiệm: ánh xạ tỷ lệ hoàn thành (%) sang bậc hiệu suất rời rạc
// kèm metadata hiển thị (nhãn, màu, lớp CSS)
// Nguyên tắc: không trạng thái, không side effect
// ==========================================
// Bốn bậc phủ kín [0, 100], không chồng lấn:
//   0-69 POOR | 70-79 AVERAGE | 80-89 GOOD | 90-100 EXCELLENT
// ==========================================

use crate::domain::types::PerformanceLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// PerformanceClassification - Kết quả phân loại
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceClassification {
    pub level: PerformanceLevel, // Bậc hiệu suất
    pub label: String,           // Nhãn hiển thị tiếng Việt
    pub color: String,           // Màu chủ đạo (hex)
    pub min_percentage: u32,     // Cận dưới của bậc
    pub max_percentage: u32,     // Cận trên của bậc
}

// Bảng bậc hiệu suất: (bậc, nhãn, màu, cận dưới, cận trên)
// Chọn bậc theo cận dưới, duyệt từ cao xuống thấp
const PERFORMANCE_BANDS: &[(PerformanceLevel, &str, &str, u32, u32)] = &[
    (PerformanceLevel::Excellent, "Xuất sắc", "#22c55e", 90, 100),
    (PerformanceLevel::Good, "Tốt", "#3b82f6", 80, 89),
    (PerformanceLevel::Average, "Trung bình", "#f59e0b", 70, 79),
    (PerformanceLevel::Poor, "Yếu", "#ef4444", 0, 69),
    // Bậc "Kém" (FAIL, 0-49) tạm ngưng sử dụng theo yêu cầu nghiệp vụ;
    // khi khôi phục phải tách lại cận của bậc Yếu.
    // (PerformanceLevel::Fail, "Kém", "#991b1b", 0, 49),
];

// ==========================================
// PerformanceCore - thư viện hàm thuần
// ==========================================
pub struct PerformanceCore;

impl PerformanceCore {
    /// Phân loại hiệu suất từ tỷ lệ hoàn thành
    ///
    /// # Quy tắc
    /// - Kẹp percentage về [0, 100] trước khi phân loại
    /// - Luôn trả về đúng một bậc (các bậc phủ kín [0, 100])
    ///
    /// # Biên bậc
    /// - 69 → POOR, 70 → AVERAGE, 79 → AVERAGE, 80 → GOOD,
    ///   89 → GOOD, 90 → EXCELLENT
    pub fn classify(percentage: f64) -> PerformanceClassification {
        let clamped = percentage.clamp(0.0, 100.0);

        let (level, label, color, min_pct, max_pct) = PERFORMANCE_BANDS
            .iter()
            .find(|band| clamped >= band.3 as f64)
            .copied()
            // Bậc cuối có cận dưới 0 nên nhánh này không thể xảy ra
            .unwrap_or(PERFORMANCE_BANDS[PERFORMANCE_BANDS.len() - 1]);

        PerformanceClassification {
            level,
            label: label.to_string(),
            color: color.to_string(),
            min_percentage: min_pct,
            max_percentage: max_pct,
        }
    }

    /// Biến thể badge cho bậc hiệu suất (khớp bộ component phía UI)
    pub fn badge_variant(level: PerformanceLevel) -> &'static str {
        match level {
            PerformanceLevel::Excellent => "success",
            PerformanceLevel::Good => "info",
            PerformanceLevel::Average => "warning",
            PerformanceLevel::Poor => "destructive",
        }
    }

    /// Lớp màu chữ
    pub fn text_class(level: PerformanceLevel) -> &'static str {
        match level {
            PerformanceLevel::Excellent => "text-green-600",
            PerformanceLevel::Good => "text-blue-600",
            PerformanceLevel::Average => "text-amber-600",
            PerformanceLevel::Poor => "text-red-600",
        }
    }

    /// Lớp màu nền
    pub fn bg_class(level: PerformanceLevel) -> &'static str {
        match level {
            PerformanceLevel::Excellent => "bg-green-50",
            PerformanceLevel::Good => "bg-blue-50",
            PerformanceLevel::Average => "bg-amber-50",
            PerformanceLevel::Poor => "bg-red-50",
        }
    }

    /// Lớp màu viền
    pub fn border_class(level: PerformanceLevel) -> &'static str {
        match level {
            PerformanceLevel::Excellent => "border-green-200",
            PerformanceLevel::Good => "border-blue-200",
            PerformanceLevel::Average => "border-amber-200",
            PerformanceLevel::Poor => "border-red-200",
        }
    }

    /// Lớp gradient cho thanh tiến độ
    pub fn gradient_class(level: PerformanceLevel) -> &'static str {
        match level {
            PerformanceLevel::Excellent => "from-green-400 to-green-600",
            PerformanceLevel::Good => "from-blue-400 to-blue-600",
            PerformanceLevel::Average => "from-amber-400 to-amber-600",
            PerformanceLevel::Poor => "from-red-400 to-red-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================
    // Test 1: biên giữa các bậc
    // ==========================================

    #[test]
    fn test_classify_band_boundaries() {
        assert_eq!(PerformanceCore::classify(69.0).level, PerformanceLevel::Poor);
        assert_eq!(PerformanceCore::classify(70.0).level, PerformanceLevel::Average);
        assert_eq!(PerformanceCore::classify(79.0).level, PerformanceLevel::Average);
        assert_eq!(PerformanceCore::classify(80.0).level, PerformanceLevel::Good);
        assert_eq!(PerformanceCore::classify(89.0).level, PerformanceLevel::Good);
        assert_eq!(PerformanceCore::classify(90.0).level, PerformanceLevel::Excellent);
        assert_eq!(PerformanceCore::classify(100.0).level, PerformanceLevel::Excellent);
        assert_eq!(PerformanceCore::classify(0.0).level, PerformanceLevel::Poor);
    }

    #[test]
    fn test_classify_fractional_boundary() {
        // 69.9 vẫn thuộc bậc Yếu, 89.9 vẫn thuộc bậc Tốt
        assert_eq!(PerformanceCore::classify(69.9).level, PerformanceLevel::Poor);
        assert_eq!(PerformanceCore::classify(89.9).level, PerformanceLevel::Good);
    }

    // ==========================================
    // Test 2: kẹp giá trị ngoài miền
    // ==========================================

    #[test]
    fn test_classify_clamps_below_zero() {
        assert_eq!(PerformanceCore::classify(-5.0), PerformanceCore::classify(0.0));
    }

    #[test]
    fn test_classify_clamps_above_hundred() {
        assert_eq!(PerformanceCore::classify(150.0), PerformanceCore::classify(100.0));
    }

    // ==========================================
    // Test 3: metadata của bậc
    // ==========================================

    #[test]
    fn test_classification_metadata() {
        let c = PerformanceCore::classify(95.0);
        assert_eq!(c.label, "Xuất sắc");
        assert_eq!(c.color, "#22c55e");
        assert_eq!(c.min_percentage, 90);
        assert_eq!(c.max_percentage, 100);

        let c = PerformanceCore::classify(50.0);
        assert_eq!(c.label, "Yếu");
        assert_eq!(c.min_percentage, 0);
        assert_eq!(c.max_percentage, 69);
    }

    #[test]
    fn test_bands_partition_0_to_100() {
        // Mỗi giá trị nguyên trong [0, 100] rơi vào đúng một bậc
        // và nằm trong [min, max] của bậc đó
        for pct in 0..=100u32 {
            let c = PerformanceCore::classify(pct as f64);
            assert!(
                pct >= c.min_percentage && pct <= c.max_percentage,
                "{}% nằm ngoài bậc [{}, {}]",
                pct,
                c.min_percentage,
                c.max_percentage
            );
        }
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(PerformanceCore::badge_variant(PerformanceLevel::Excellent), "success");
        assert_eq!(PerformanceCore::badge_variant(PerformanceLevel::Poor), "destructive");
        assert_eq!(PerformanceCore::text_class(PerformanceLevel::Good), "text-blue-600");
        assert_eq!(PerformanceCore::bg_class(PerformanceLevel::Average), "bg-amber-50");
        assert_eq!(PerformanceCore::border_class(PerformanceLevel::Poor), "border-red-200");
        assert_eq!(
            PerformanceCore::gradient_class(PerformanceLevel::Excellent),
            "from-green-400 to-green-600"
        );
    }
}
