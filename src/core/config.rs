//! 配置管理模块
//!
//! 提供加载器配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [loader]
//! winding = "preserve"  # 或 "reverse"
//! dedup = "hashed"      # 或 "linear"
//!
//! [logging]
//! level = "info"        # trace, debug, info, warn, error
//! file_output = false
//! log_file = "obj_loader.log"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// 加载器配置
///
/// 可以从配置文件加载，也可以通过代码构建。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// OBJ 解析配置
    #[serde(default)]
    pub loader: LoaderConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// OBJ 解析配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// 三角形顶点的输出顺序
    #[serde(default = "default_winding")]
    pub winding: Winding,

    /// 顶点去重策略
    #[serde(default = "default_dedup")]
    pub dedup: DedupStrategy,
}

/// 三角形环绕顺序约定
///
/// OBJ 文件中的三角形按逆时针顺序给出。一次解析只使用一种约定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winding {
    /// 按文件顺序输出 (g1, g2, g3)，由渲染管线自行解释环绕方向
    Preserve,
    /// 每个三角形输出为 (g1, g3, g2)，逆时针转为顺时针
    ///
    /// 首顶点（provoking vertex）保持不变，索引序列为 0, 2, 1, 3, 5, 4, ...
    Reverse,
}

/// 顶点去重策略
///
/// 两种策略对任何输入都产生完全相同的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupStrategy {
    /// 以精确分量元组为键的哈希表，O(1) 查找
    Hashed,
    /// 按插入顺序线性扫描，O(n) 查找
    Linear,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_winding() -> Winding { Winding::Preserve }
fn default_dedup() -> DedupStrategy { DedupStrategy::Hashed }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "obj_loader.log".to_string() }

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            winding: default_winding(),
            dedup: default_dedup(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use obj_mesh_loader::core::Config;
    ///
    /// let config = Config::from_file("config.toml")?;
    /// # Ok::<(), obj_mesh_loader::core::ObjLoaderError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--reverse-winding`: 输出顺时针三角形
    /// - `--linear-dedup`: 使用线性扫描去重
    /// - `--log-level <level>`: 设置日志级别
    ///
    /// 无法识别的日志级别保持原配置不变。
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if args.iter().any(|a| a == "--reverse-winding") {
            self.loader.winding = Winding::Reverse;
        }

        if args.iter().any(|a| a == "--linear-dedup") {
            self.loader.dedup = DedupStrategy::Linear;
        }

        if let Some(idx) = args.iter().position(|a| a == "--log-level") {
            if let Some(level) = args.get(idx + 1).and_then(|s| LogLevel::parse(s)) {
                self.logging.level = level;
            }
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.logging.file_output && self.logging.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "Log file path must not be empty when file output is enabled".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl LogLevel {
    /// 解析日志级别名称（不区分大小写）
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl Winding {
    /// 将文件顺序的三个索引按约定排列
    #[inline]
    pub fn order(&self, triangle: [u32; 3]) -> [u32; 3] {
        match self {
            Winding::Preserve => triangle,
            Winding::Reverse => [triangle[0], triangle[2], triangle[1]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.loader.winding, Winding::Preserve);
        assert_eq!(config.loader.dedup, DedupStrategy::Hashed);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.logging.file_output);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            [loader]
            winding = "reverse"
            "#,
        )
        .unwrap();

        assert_eq!(config.loader.winding, Winding::Reverse);
        assert_eq!(config.loader.dedup, DedupStrategy::Hashed);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::from_toml_str("[loader]\nwinding = \"sideways\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config.apply_args(["app", "--reverse-winding", "--linear-dedup", "--log-level", "DEBUG"]);

        assert_eq!(config.loader.winding, Winding::Reverse);
        assert_eq!(config.loader.dedup, DedupStrategy::Linear);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_apply_args_ignores_unknown_level() {
        let mut config = Config::default();
        config.apply_args(["app", "--log-level", "loud"]);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.file_output = true;
        config.logging.log_file = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!(
            "obj_mesh_loader_config_{}.toml",
            std::process::id()
        ));
        let mut config = Config::default();
        config.loader.winding = Winding::Reverse;
        config.logging.level = LogLevel::Warn;

        config.save_to_file(&path).unwrap();
        let reloaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_winding_order() {
        assert_eq!(Winding::Preserve.order([0, 1, 2]), [0, 1, 2]);
        assert_eq!(Winding::Reverse.order([0, 1, 2]), [0, 2, 1]);
        assert_eq!(Winding::Reverse.order([3, 4, 5]), [3, 5, 4]);
    }
}
