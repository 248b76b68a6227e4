// ==========================================
// Hệ thống báo cáo công việc tuần - Quản lý cấu hình
// ==========================================
// Trách nhiệm: nạp, truy vấn và cập nhật cấu hình
// Lưu trữ: bảng config_kv (key-value + scope)
// ==========================================

use crate::config::report_config_trait::ReportConfigReader;
use crate::db::open_sqlite_connection;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use serde_json::json;
use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// Khóa cấu hình
// ==========================================
pub mod config_keys {
    /// Năm báo cáo nhỏ nhất được chấp nhận
    pub const REPORT_MIN_YEAR: &str = "report/min_year";
    /// Năm báo cáo lớn nhất được chấp nhận
    pub const REPORT_MAX_YEAR: &str = "report/max_year";
    /// Số tuần trên biểu đồ xu hướng
    pub const TREND_WEEKS: &str = "dashboard/trend_weeks";
    /// Ngôn ngữ mặc định
    pub const DEFAULT_LOCALE: &str = "app/locale";
}

// ==========================================
// ConfigManager - Quản lý cấu hình
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Tạo ConfigManager từ đường dẫn cơ sở dữ liệu
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Tạo ConfigManager từ kết nối sẵn có
    ///
    /// Ghi chú: áp lại PRAGMA thống nhất lên kết nối được truyền vào
    /// (idempotent) để hành vi nhất quán giữa các kho.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("Không lấy được khóa: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// Đọc giá trị cấu hình từ config_kv (scope_id='global')
    ///
    /// # Trả về
    /// - Some(String): giá trị cấu hình
    /// - None: khóa chưa tồn tại
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("Không lấy được khóa: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Đọc giá trị cấu hình scope global (phương thức công khai cho module khác)
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// Đọc giá trị cấu hình kèm giá trị mặc định
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Cập nhật một khóa cấu hình (upsert)
    pub fn update_config(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("Không lấy được khóa: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;

        Ok(())
    }

    /// Liệt kê toàn bộ cấu hình scope global
    pub fn list_configs(&self) -> Result<HashMap<String, String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("Không lấy được khóa: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut config_map: HashMap<String, String> = HashMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(config_map)
    }

    /// Ảnh chụp toàn bộ cấu hình (chuỗi JSON)
    ///
    /// # Mục đích
    /// - Lưu lại trạng thái cấu hình phục vụ kiểm toán / sao lưu
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let config_map = self.list_configs()?;
        let json_value = json!(config_map);
        Ok(serde_json::to_string(&json_value)?)
    }
}

// ==========================================
// Hiện thực ReportConfigReader
// ==========================================
#[async_trait]
impl ReportConfigReader for ConfigManager {
    async fn get_report_min_year(&self) -> Result<i32, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::REPORT_MIN_YEAR, "2020")?;
        Ok(value.parse::<i32>().unwrap_or(2020))
    }

    async fn get_report_max_year(&self) -> Result<i32, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::REPORT_MAX_YEAR, "2030")?;
        Ok(value.parse::<i32>().unwrap_or(2030))
    }

    async fn get_trend_weeks(&self) -> Result<u32, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::TREND_WEEKS, "8")?;
        let weeks = value.parse::<u32>().unwrap_or(8);
        // Biểu đồ rỗng không có ý nghĩa - tối thiểu 1 tuần
        Ok(weeks.max(1))
    }

    async fn get_default_locale(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default(config_keys::DEFAULT_LOCALE, "vi")
    }
}
