/// 网格数据结构模块
///
/// 定义CPU侧的网格数据容器，即加载器交给渲染端的最终结果。

use super::vertex::Vertex;

/// CPU侧网格数据
///
/// 存储去重后的顶点和三角形列表索引。不包含GPU资源，
/// 渲染端负责创建缓冲区并以三角形列表拓扑绘制 `index_count()` 个索引。
///
/// # 示例
///
/// ```rust
/// use obj_mesh_loader::geometry::{MeshData, Vertex};
///
/// let mesh = MeshData {
///     vertices: vec![
///         Vertex::new([0.0, 0.0, 0.0], [0.0, 1.0], [0.0, 0.0, -1.0]),
///         Vertex::new([1.0, 0.0, 0.0], [1.0, 1.0], [0.0, 0.0, -1.0]),
///         Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0], [0.0, 0.0, -1.0]),
///     ],
///     indices: vec![0, 1, 2],
///     name: Some("Triangle".to_string()),
/// };
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// 顶点数组，互不相等，顺序即顶点缓冲区顺序
    pub vertices: Vec<Vertex>,

    /// 索引数组
    ///
    /// 每3个索引定义一个三角形。
    /// 使用32位索引以支持超过65535个顶点的模型。
    pub indices: Vec<u32>,

    /// 网格名称（可选），从文件名推导
    pub name: Option<String>,
}

impl MeshData {
    /// 创建一个空的网格数据
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取顶点数量
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取索引数量
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// 获取三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// 按三角形遍历索引
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// 顶点缓冲区的字节视图
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// 索引缓冲区的字节视图
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// 验证网格数据的有效性
    ///
    /// 检查：
    /// - 索引数量是3的倍数（每个三角形3个顶点）
    /// - 所有索引都在有效范围内
    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "Index count must be a multiple of 3, got {}",
                self.indices.len()
            ));
        }

        let vertex_count = self.vertices.len();
        if let Some((i, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(format!(
                "Index {} at position {} is out of range for {} vertices",
                index, i, vertex_count
            ));
        }

        Ok(())
    }
}
