/// 几何体顶点定义模块
///
/// 定义上传到 GPU 的组合顶点结构：位置、UV 坐标和法线。

use bytemuck::{Pod, Zeroable};

/// 组合顶点
///
/// 已完成坐标系转换（左手系，Z 轴取反，V 轴翻转）的顶点属性集合。
/// 内存布局与GPU兼容，使用 `#[repr(C)]` 保证顺序和对齐。
///
/// # 内存布局
///
/// - position: 12 bytes (3 * f32)
/// - texcoord: 8 bytes (2 * f32)
/// - normal: 12 bytes (3 * f32)
/// - **总计**: 32 bytes
///
/// 相等性为 8 个分量的精确数值相等（`0.0 == -0.0`），不使用 epsilon。
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// 顶点位置 (x, y, z)
    pub position: [f32; 3],

    /// 纹理坐标 (u, v)，V 轴向下
    pub texcoord: [f32; 2],

    /// 法线向量 (nx, ny, nz)
    pub normal: [f32; 3],
}

impl Vertex {
    /// 创建一个新的顶点（不做任何转换）
    #[inline]
    pub fn new(position: [f32; 3], texcoord: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            texcoord,
            normal,
        }
    }

    /// 由 OBJ 原始属性构建顶点
    ///
    /// OBJ 使用右手系且纹理 V 轴向上；渲染端使用左手系且 V 轴向下：
    /// 位置和法线的 Z 分量取反，纹理坐标 V 替换为 `1 - v`。
    #[inline]
    pub fn from_obj(position: [f32; 3], texcoord: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position: [position[0], position[1], -position[2]],
            texcoord: [texcoord[0], 1.0 - texcoord[1]],
            normal: [normal[0], normal[1], -normal[2]],
        }
    }

    /// 按内存顺序排列的 8 个分量
    #[inline]
    pub fn components(&self) -> [f32; 8] {
        let [px, py, pz] = self.position;
        let [u, v] = self.texcoord;
        let [nx, ny, nz] = self.normal;
        [px, py, pz, u, v, nx, ny, nz]
    }
}
