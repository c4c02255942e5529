/// OBJ 原始属性表
///
/// 按声明顺序累积 `v`、`vt`、`vn` 语句的原始数据，不做坐标转换。
/// 面语句使用 1 起始的索引引用这些表。

use crate::core::error::AttributeKind;

/// 原始属性表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeTables {
    /// `v` 语句，几何顶点 (x, y, z)
    pub positions: Vec<[f32; 3]>,

    /// `vt` 语句，纹理坐标 (u, v)
    pub texcoords: Vec<[f32; 2]>,

    /// `vn` 语句，法线 (x, y, z)
    pub normals: Vec<[f32; 3]>,
}

/// 一个面顶点的三个 1 起始索引，与文件中的写法一致
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexGroup {
    pub position: i64,
    pub texcoord: i64,
    pub normal: i64,
}

/// 解析后的属性集合
pub type ResolvedAttributes = ([f32; 3], [f32; 2], [f32; 3]);

/// 引用越界时的描述：属性类型、原始索引、当前表长度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub attribute: AttributeKind,
    pub index: i64,
    pub available: usize,
}

impl AttributeTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 1 起始索引查找一个面顶点的全部属性
    ///
    /// 依次检查位置、纹理坐标、法线，返回第一个越界的引用。
    pub fn resolve(&self, group: IndexGroup) -> Result<ResolvedAttributes, OutOfRange> {
        let position = lookup(&self.positions, AttributeKind::Position, group.position)?;
        let texcoord = lookup(&self.texcoords, AttributeKind::TexCoord, group.texcoord)?;
        let normal = lookup(&self.normals, AttributeKind::Normal, group.normal)?;
        Ok((position, texcoord, normal))
    }
}

fn lookup<T: Copy>(table: &[T], attribute: AttributeKind, index: i64) -> Result<T, OutOfRange> {
    let out_of_range = OutOfRange {
        attribute,
        index,
        available: table.len(),
    };

    // OBJ 索引从 1 开始，0 和负数均视为越界
    let zero_based = index
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .ok_or(out_of_range)?;

    table.get(zero_based).copied().ok_or(out_of_range)
}
