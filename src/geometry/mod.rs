/// 几何体加载和处理模块
///
/// 将 Wavefront OBJ 文本转换为可直接上传 GPU 的顶点和索引缓冲区。
///
/// # 模块结构
///
/// - `attributes`: OBJ 原始属性表（`v`/`vt`/`vn`）
/// - `vertex`: 组合顶点结构及坐标系转换
/// - `vertex_table`: 精确相等的顶点去重表
/// - `mesh`: 网格数据结构
/// - `loaders`: 模型加载器
///
/// # 架构设计
///
/// ```text
/// OBJ 文本
///     ↓
/// AttributeTables (原始属性)
///     ↓
/// VertexTable + 索引列表 (转换、去重)
///     ↓
/// MeshData (CPU侧数据，交给渲染端上传)
/// ```

pub mod attributes;
pub mod vertex;
pub mod vertex_table;
pub mod mesh;
pub mod loaders;

// 重新导出常用类型
pub use vertex::Vertex;
pub use mesh::MeshData;
