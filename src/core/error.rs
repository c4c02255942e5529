//! 错误处理模块
//!
//! 定义了加载器中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 为每种错误类型提供清晰的上下文信息（行号、关键字、索引）
//! - 支持错误链（error source）
//! - 易于模式匹配和错误处理

use std::fmt;
use std::io;
use std::path::PathBuf;

/// 加载器统一的 Result 类型
///
/// 所有可能返回错误的函数都应该使用这个类型。
pub type Result<T> = std::result::Result<T, ObjLoaderError>;

/// 加载器的错误类型
#[derive(Debug)]
pub enum ObjLoaderError {
    /// 配置错误
    Config(ConfigError),

    /// 网格加载错误
    MeshLoading(MeshLoadError),

    /// IO 错误
    Io(io::Error),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 面语句中索引引用的属性表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Position,
    TexCoord,
    Normal,
}

impl AttributeKind {
    /// 声明该属性的 OBJ 关键字
    pub fn keyword(&self) -> &'static str {
        match self {
            AttributeKind::Position => "v",
            AttributeKind::TexCoord => "vt",
            AttributeKind::Normal => "vn",
        }
    }
}

/// 网格加载相关的错误
///
/// 行号从 1 开始，与文本编辑器中看到的一致。
#[derive(Debug)]
pub enum MeshLoadError {
    /// 文件不存在或无法打开
    OpenFailure { path: PathBuf, source: io::Error },

    /// 读取过程中出现 IO 错误或非 UTF-8 内容
    ReadFailure { line: usize, source: io::Error },

    /// 已识别的语句字段数量错误或数值无法解析
    MalformedRecord {
        line: usize,
        keyword: String,
        reason: String,
    },

    /// 面语句引用了不存在的属性
    DanglingReference {
        line: usize,
        attribute: AttributeKind,
        index: i64,
        available: usize,
    },

    /// 顶点数量超出 u32 索引范围
    TooManyVertices { line: usize },

    /// 不支持的文件格式
    UnsupportedFormat(String),

    /// 数据验证失败
    ValidationError(String),
}

impl fmt::Display for ObjLoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjLoaderError::Config(e) => write!(f, "Configuration error: {}", e),
            ObjLoaderError::MeshLoading(e) => write!(f, "Mesh loading error: {}", e),
            ObjLoaderError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for MeshLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshLoadError::OpenFailure { path, source } => {
                write!(f, "Cannot open mesh file {}: {}", path.display(), source)
            }
            MeshLoadError::ReadFailure { line, source } => {
                write!(f, "Failed to read line {}: {}", line, source)
            }
            MeshLoadError::MalformedRecord {
                line,
                keyword,
                reason,
            } => write!(f, "Malformed '{}' record on line {}: {}", keyword, line, reason),
            MeshLoadError::DanglingReference {
                line,
                attribute,
                index,
                available,
            } => write!(
                f,
                "Face on line {} references {} index {} but only {} declared",
                line,
                attribute.keyword(),
                index,
                available
            ),
            MeshLoadError::TooManyVertices { line } => write!(
                f,
                "Vertex count exceeds u32 index range at line {}",
                line
            ),
            MeshLoadError::UnsupportedFormat(msg) => write!(f, "Unsupported mesh format: {}", msg),
            MeshLoadError::ValidationError(msg) => write!(f, "Mesh validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ObjLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObjLoaderError::Config(e) => Some(e),
            ObjLoaderError::MeshLoading(e) => Some(e),
            ObjLoaderError::Io(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for MeshLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshLoadError::OpenFailure { source, .. } | MeshLoadError::ReadFailure { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

// 实现 From trait 以便于错误转换
impl From<io::Error> for ObjLoaderError {
    fn from(err: io::Error) -> Self {
        ObjLoaderError::Io(err)
    }
}

impl From<ConfigError> for ObjLoaderError {
    fn from(err: ConfigError) -> Self {
        ObjLoaderError::Config(err)
    }
}

impl From<MeshLoadError> for ObjLoaderError {
    fn from(err: MeshLoadError) -> Self {
        ObjLoaderError::MeshLoading(err)
    }
}
