/// OBJ 面语句解析
///
/// 只接受三角形，每个顶点组必须是完整的 `v/vt/vn` 形式。

use crate::core::error::MeshLoadError;
use crate::geometry::attributes::IndexGroup;

/// 每个面的顶点组数量
pub const FACE_GROUPS: usize = 3;

/// 解析 `f` 语句关键字之后的字段
///
/// 索引保持文件中的 1 起始写法，越界检查在解析属性时进行。
pub fn parse_face<'a>(
    fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[IndexGroup; FACE_GROUPS], MeshLoadError> {
    let groups: Vec<&str> = fields.collect();
    if groups.len() != FACE_GROUPS {
        return Err(malformed(
            line,
            format!(
                "expected {} vertex groups, found {}",
                FACE_GROUPS,
                groups.len()
            ),
        ));
    }

    let mut parsed = [IndexGroup {
        position: 0,
        texcoord: 0,
        normal: 0,
    }; FACE_GROUPS];
    for (slot, group) in parsed.iter_mut().zip(groups) {
        *slot = parse_group(group, line)?;
    }
    Ok(parsed)
}

fn parse_group(group: &str, line: usize) -> Result<IndexGroup, MeshLoadError> {
    let parts: Vec<&str> = group.split('/').collect();
    let [position, texcoord, normal] = parts.as_slice() else {
        return Err(malformed(
            line,
            format!("vertex group '{}' must have the form v/vt/vn", group),
        ));
    };

    Ok(IndexGroup {
        position: parse_index(position, group, line)?,
        texcoord: parse_index(texcoord, group, line)?,
        normal: parse_index(normal, group, line)?,
    })
}

fn parse_index(token: &str, group: &str, line: usize) -> Result<i64, MeshLoadError> {
    if token.is_empty() {
        return Err(malformed(
            line,
            format!("missing index in vertex group '{}'", group),
        ));
    }

    token.parse::<i64>().map_err(|_| {
        malformed(
            line,
            format!("invalid index '{}' in vertex group '{}'", token, group),
        )
    })
}

fn malformed(line: usize, reason: String) -> MeshLoadError {
    MeshLoadError::MalformedRecord {
        line,
        keyword: "f".to_string(),
        reason,
    }
}
