// ==========================================
// Module đa ngôn ngữ (i18n)
// ==========================================
// Dùng thư viện rust-i18n
// Hỗ trợ tiếng Việt (mặc định) và tiếng Anh
// ==========================================
// Lưu ý: macro rust_i18n::i18n! đã được khởi tạo trong lib.rs
// ==========================================

/// Lấy ngôn ngữ hiện tại
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Đặt ngôn ngữ
///
/// # Tham số
/// - locale: mã ngôn ngữ ("vi" hoặc "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Dịch thông điệp (không tham số)
///
/// # Ví dụ
/// ```no_run
/// use weekly_report_system::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Dịch thông điệp (có tham số)
///
/// # Ví dụ
/// ```no_run
/// use weekly_report_system::i18n::t_with_args;
/// let msg = t_with_args("report.week_label", &[("week", "32"), ("year", "2025")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
