// ==========================================
// Khởi tạo hệ thống log
// ==========================================
// Dùng tracing và tracing-subscriber
// Hỗ trợ cấu hình mức log qua biến môi trường
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Khởi tạo hệ thống log
///
/// # Biến môi trường
/// - RUST_LOG: bộ lọc mức log (mặc định: info)
///   Ví dụ: RUST_LOG=debug hoặc RUST_LOG=weekly_report_system=trace
///
/// # Ví dụ
/// ```no_run
/// use weekly_report_system::logging;
/// logging::init();
/// ```
pub fn init() {
    // Đọc mức log từ biến môi trường, mặc định là info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Cấu hình định dạng log
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Khởi tạo log cho môi trường test
///
/// Dùng mức log chi tiết hơn để tiện gỡ lỗi
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
