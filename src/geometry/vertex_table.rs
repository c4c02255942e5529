/// 去重顶点表
///
/// 按插入顺序保存互不相等的组合顶点，插入顺序即顶点缓冲区顺序。
/// 相等性为全部分量的精确数值相等，重复顶点总是映射到首次插入的位置。

use std::collections::HashMap;

use crate::core::config::DedupStrategy;
use crate::geometry::vertex::Vertex;

/// 顶点数量超出 u32 索引范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOverflow;

/// 哈希键：8 个分量的位模式
///
/// `-0.0` 先归一化为 `0.0`，使位相等与数值相等一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u32; 8]);

impl VertexKey {
    /// NaN 与任何值都不相等，返回 `None`
    fn of(vertex: &Vertex) -> Option<Self> {
        let components = vertex.components();
        if components.iter().any(|c| c.is_nan()) {
            return None;
        }
        Some(Self(components.map(|c| (c + 0.0).to_bits())))
    }
}

/// 去重顶点表
#[derive(Debug, Clone)]
pub struct VertexTable {
    strategy: DedupStrategy,
    vertices: Vec<Vertex>,
    lookup: HashMap<VertexKey, u32>,
}

impl VertexTable {
    pub fn new(strategy: DedupStrategy) -> Self {
        Self {
            strategy,
            vertices: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// 插入顶点并返回其索引
    ///
    /// 已存在相等顶点时返回已有索引，表不增长。
    pub fn insert(&mut self, vertex: Vertex) -> Result<u32, IndexOverflow> {
        match self.strategy {
            DedupStrategy::Hashed => self.insert_hashed(vertex),
            DedupStrategy::Linear => self.insert_linear(vertex),
        }
    }

    fn insert_hashed(&mut self, vertex: Vertex) -> Result<u32, IndexOverflow> {
        let Some(key) = VertexKey::of(&vertex) else {
            return self.push(vertex);
        };

        if let Some(&index) = self.lookup.get(&key) {
            return Ok(index);
        }

        let index = self.push(vertex)?;
        self.lookup.insert(key, index);
        Ok(index)
    }

    fn insert_linear(&mut self, vertex: Vertex) -> Result<u32, IndexOverflow> {
        match self.vertices.iter().position(|existing| *existing == vertex) {
            // 表长已保证在 u32 范围内
            Some(index) => Ok(index as u32),
            None => self.push(vertex),
        }
    }

    fn push(&mut self, vertex: Vertex) -> Result<u32, IndexOverflow> {
        let index = u32::try_from(self.vertices.len()).map_err(|_| IndexOverflow)?;
        self.vertices.push(vertex);
        Ok(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [DedupStrategy; 2] = [DedupStrategy::Hashed, DedupStrategy::Linear];

    fn vertex(x: f32) -> Vertex {
        Vertex::new([x, 0.0, 0.0], [0.0, 0.0], [0.0, 1.0, 0.0])
    }

    #[test]
    fn test_duplicate_returns_first_index() {
        for strategy in STRATEGIES {
            let mut table = VertexTable::new(strategy);

            assert_eq!(table.insert(vertex(1.0)), Ok(0));
            assert_eq!(table.insert(vertex(2.0)), Ok(1));
            assert_eq!(table.insert(vertex(1.0)), Ok(0));
            assert_eq!(table.len(), 2);
        }
    }

    #[test]
    fn test_no_epsilon_tolerance() {
        for strategy in STRATEGIES {
            let mut table = VertexTable::new(strategy);
            table.insert(vertex(1.0)).unwrap();
            table.insert(vertex(1.0 + f32::EPSILON)).unwrap();
            assert_eq!(table.len(), 2);
        }
    }

    #[test]
    fn test_signed_zero_is_equal() {
        for strategy in STRATEGIES {
            let mut table = VertexTable::new(strategy);
            assert_eq!(table.insert(vertex(-0.0)), Ok(0));
            assert_eq!(table.insert(vertex(0.0)), Ok(0));

            // 首次插入的值保留
            assert!(table.into_vec()[0].position[0].is_sign_negative());
        }
    }

    #[test]
    fn test_nan_never_matches() {
        for strategy in STRATEGIES {
            let mut table = VertexTable::new(strategy);
            assert_eq!(table.insert(vertex(f32::NAN)), Ok(0));
            assert_eq!(table.insert(vertex(f32::NAN)), Ok(1));
        }
    }

    #[test]
    fn test_strategies_agree() {
        let values = [3.0, 1.0, 3.0, -0.0, 2.0, 0.0, 1.0, 2.0, 5.0];
        let mut hashed = VertexTable::new(DedupStrategy::Hashed);
        let mut linear = VertexTable::new(DedupStrategy::Linear);

        for x in values {
            assert_eq!(hashed.insert(vertex(x)), linear.insert(vertex(x)));
        }
        assert_eq!(hashed.into_vec(), linear.into_vec());
    }
}
