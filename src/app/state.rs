// ==========================================
// Hệ thống báo cáo công việc tuần - Trạng thái ứng dụng
// ==========================================
// Trách nhiệm: quản lý trạng thái chia sẻ cấp ứng dụng và các API
// ==========================================

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::api::{DashboardApi, OrganizationApi, ReportApi};
use crate::config::config_manager::ConfigManager;
use crate::db;
use crate::repository::{ActionLogRepository, OrganizationRepository, ReportRepository};

/// Trạng thái ứng dụng
///
/// Chứa toàn bộ API và tài nguyên chia sẻ,
/// được Tauri quản lý như trạng thái toàn cục
pub struct AppState {
    /// Đường dẫn cơ sở dữ liệu
    pub db_path: String,

    /// API báo cáo
    pub report_api: Arc<ReportApi<ConfigManager>>,

    /// API dashboard
    pub dashboard_api: Arc<DashboardApi<ConfigManager>>,

    /// API tổ chức
    pub organization_api: Arc<OrganizationApi>,

    /// Quản lý cấu hình
    pub config_manager: Arc<ConfigManager>,
}

impl AppState {
    /// Tạo AppState mới
    ///
    /// # Tham số
    /// - db_path: đường dẫn file cơ sở dữ liệu
    ///
    /// # Quy trình
    /// 1. Mở kết nối + khởi tạo schema (idempotent)
    /// 2. Khởi tạo tầng Repository (chia sẻ một kết nối)
    /// 3. Khởi tạo các API
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("Khởi tạo AppState, cơ sở dữ liệu: {}", db_path);

        let conn = db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("Không mở được cơ sở dữ liệu: {}", e))?;

        db::init_schema(&conn).map_err(|e| format!("Không khởi tạo được schema: {}", e))?;

        match db::read_schema_version(&conn) {
            Ok(Some(version)) if version != db::CURRENT_SCHEMA_VERSION => {
                tracing::warn!(
                    "schema_version={} khác phiên bản mã nguồn kỳ vọng ({})",
                    version,
                    db::CURRENT_SCHEMA_VERSION
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Không đọc được schema_version: {}", e),
        }

        let conn: Arc<Mutex<Connection>> = Arc::new(Mutex::new(conn));

        // ==========================================
        // Tầng Repository
        // ==========================================
        let report_repo = Arc::new(ReportRepository::from_connection(conn.clone()));
        let organization_repo = Arc::new(OrganizationRepository::from_connection(conn.clone()));
        let action_log_repo = Arc::new(ActionLogRepository::from_connection(conn.clone()));

        // Quản lý cấu hình
        let config_manager = Arc::new(
            ConfigManager::from_connection(conn)
                .map_err(|e| format!("Không tạo được ConfigManager: {}", e))?,
        );

        // ==========================================
        // Tầng API
        // ==========================================
        let report_api = Arc::new(ReportApi::new(
            report_repo.clone(),
            organization_repo.clone(),
            action_log_repo.clone(),
            config_manager.clone(),
        ));

        let dashboard_api = Arc::new(DashboardApi::new(
            report_repo,
            organization_repo.clone(),
            action_log_repo,
            config_manager.clone(),
        ));

        let organization_api = Arc::new(OrganizationApi::new(organization_repo));

        tracing::info!("AppState khởi tạo xong");

        Ok(Self {
            db_path,
            report_api,
            dashboard_api,
            organization_api,
            config_manager,
        })
    }

    /// Đường dẫn cơ sở dữ liệu đang dùng
    pub fn get_db_path(&self) -> &str {
        &self.db_path
    }
}

// ==========================================
// Đường dẫn cơ sở dữ liệu mặc định
// ==========================================

/// Lấy đường dẫn cơ sở dữ liệu mặc định
///
/// # Trả về
/// - Môi trường dev: thư mục dữ liệu người dùng/weekly-report-dev/weekly_report.db
/// - Môi trường production: thư mục dữ liệu người dùng/weekly-report/weekly_report.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // Cho phép chỉ định đường dẫn DB qua biến môi trường (debug/test/CI)
    if let Ok(path) = std::env::var("WEEKLY_REPORT_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // Dùng thư mục dữ liệu người dùng để file DB thay đổi trong lúc dev
    // không kích hoạt cơ chế theo dõi file của `tauri dev` (gây restart).
    let mut path = PathBuf::from("./weekly_report.db");

    if let Some(data_dir) = dirs::data_dir() {
        // Môi trường dev dùng thư mục riêng, tránh lẫn dữ liệu production
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("weekly-report-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("weekly-report");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("weekly_report.db");
    }

    path.to_string_lossy().to_string()
}
