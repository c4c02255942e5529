/// 模型加载器模块
///
/// 提供统一的模型加载接口和具体格式的实现。
///
/// # 支持的格式
///
/// - **OBJ**: Wavefront OBJ 三角形子集（`v`/`vt`/`vn`/`f`）
///
/// # 使用示例
///
/// ```rust,no_run
/// use obj_mesh_loader::core::LoaderConfig;
/// use obj_mesh_loader::geometry::loaders::load_mesh;
/// use std::path::Path;
///
/// let mesh = load_mesh(Path::new("model.obj"), LoaderConfig::default())?;
/// # Ok::<(), obj_mesh_loader::core::ObjLoaderError>(())
/// ```
use crate::core::config::LoaderConfig;
use crate::core::error::{MeshLoadError, Result};
use crate::geometry::mesh::MeshData;
use std::path::Path;

pub mod obj_face;
pub mod obj_loader;

// 重新导出加载器
pub use obj_loader::{LoadStats, ObjLoader};

/// 网格加载器 trait
///
/// 所有格式的加载器都实现此 trait，返回 CPU 侧的 `MeshData`，不涉及 GPU 资源。
/// 加载失败时不会返回任何部分结果。
pub trait MeshLoader {
    /// 从文件路径加载网格
    ///
    /// # 错误
    ///
    /// - 文件不存在或无法读取
    /// - 文件格式错误或引用了不存在的属性
    fn load_from_file(&self, path: &Path) -> Result<MeshData>;

    /// 从内存数据加载网格
    fn load_from_memory(&self, data: &[u8]) -> Result<MeshData>;

    /// 获取支持的文件扩展名列表（小写，不含点号）
    fn supported_extensions() -> &'static [&'static str]
    where
        Self: Sized;
}

/// 根据文件扩展名选择合适的加载器
pub fn load_mesh(path: &Path, config: LoaderConfig) -> Result<MeshData> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            MeshLoadError::UnsupportedFormat(format!(
                "cannot determine file extension of {}",
                path.display()
            ))
        })?;

    if ObjLoader::supported_extensions().contains(&extension.as_str()) {
        return ObjLoader::new(config).load_from_file(path);
    }

    Err(MeshLoadError::UnsupportedFormat(format!("unsupported file extension: .{}", extension)).into())
}
