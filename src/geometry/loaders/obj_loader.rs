/// OBJ 文件加载器
///
/// 单遍解析 Wavefront OBJ 文本：先累积 `v`/`vt`/`vn` 原始属性，
/// 再为每个 `f` 语句解析属性引用、转换到左手坐标系并去重，
/// 输出可直接上传 GPU 的顶点和索引缓冲区。
use super::obj_face::{parse_face, FACE_GROUPS};
use super::MeshLoader;
use crate::core::config::{LoaderConfig, Winding};
use crate::core::error::{MeshLoadError, Result};
use crate::geometry::attributes::AttributeTables;
use crate::geometry::mesh::MeshData;
use crate::geometry::vertex::Vertex;
use crate::geometry::vertex_table::VertexTable;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// OBJ 格式加载器
///
/// 支持的语句子集：
///
/// - `v x y z [...]`：几何顶点
/// - `vt u v [...]`：纹理坐标
/// - `vn x y z [...]`：法线
/// - `f v/vt/vn v/vt/vn v/vt/vn`：三角形面，索引从 1 开始
///
/// 必需分量之后的数值字段（`w`、顶点颜色 `r g b` 等）被忽略；
/// `#` 起始到行尾为注释。文件开头的 UTF-8 BOM 被去除。
/// 其他语句（空行、`o`、`g`、`usemtl` 等）被跳过。
///
/// # 使用示例
///
/// ```rust,no_run
/// use obj_mesh_loader::core::LoaderConfig;
/// use obj_mesh_loader::geometry::loaders::{MeshLoader, ObjLoader};
/// use std::path::Path;
///
/// let loader = ObjLoader::new(LoaderConfig::default());
/// let mesh = loader.load_from_file(Path::new("model.obj"))?;
/// println!("加载了 {} 个顶点", mesh.vertex_count());
/// # Ok::<(), obj_mesh_loader::core::ObjLoaderError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjLoader {
    config: LoaderConfig,
}

/// 单次加载的统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// `v` 语句数量
    pub positions: usize,
    /// `vt` 语句数量
    pub texcoords: usize,
    /// `vn` 语句数量
    pub normals: usize,
    /// `f` 语句数量
    pub faces: usize,
    /// 被跳过的语句数量（不含空行和注释）
    pub skipped: usize,
}

impl ObjLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// 从任意 `BufRead` 解析，同时返回统计信息
    pub fn load_with_stats<R: BufRead>(&self, reader: R) -> Result<(MeshData, LoadStats)> {
        let mut parser = ObjParser::new(&self.config);

        for (line_idx, line) in reader.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = line.map_err(|source| MeshLoadError::ReadFailure {
                line: line_no,
                source,
            })?;
            let line = match line_no {
                1 => line.strip_prefix('\u{feff}').unwrap_or(line.as_str()),
                _ => line.as_str(),
            };
            parser.parse_line(line_no, line)?;
        }

        parser.finish()
    }

    /// 从任意 `BufRead` 解析
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<MeshData> {
        self.load_with_stats(reader).map(|(mesh, _)| mesh)
    }

    /// 解析 OBJ 字符串
    pub fn load_from_str(&self, contents: &str) -> Result<MeshData> {
        self.load_from_reader(contents.as_bytes())
    }
}

impl MeshLoader for ObjLoader {
    fn load_from_file(&self, path: &Path) -> Result<MeshData> {
        // 文件句柄在本函数内作用域结束时释放，包括出错提前返回的情况
        let file = File::open(path).map_err(|source| MeshLoadError::OpenFailure {
            path: path.to_path_buf(),
            source,
        })?;

        let (mut mesh_data, _) = self.load_with_stats(BufReader::new(file))?;
        mesh_data.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string);

        tracing::info!(
            path = %path.display(),
            vertices = mesh_data.vertex_count(),
            triangles = mesh_data.triangle_count(),
            "Loaded OBJ file"
        );

        Ok(mesh_data)
    }

    fn load_from_memory(&self, data: &[u8]) -> Result<MeshData> {
        self.load_from_reader(Cursor::new(data))
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }
}

/// 单次解析的全部状态，由解析调用独占
struct ObjParser {
    winding: Winding,
    attributes: AttributeTables,
    vertices: VertexTable,
    indices: Vec<u32>,
    stats: LoadStats,
}

impl ObjParser {
    fn new(config: &LoaderConfig) -> Self {
        Self {
            winding: config.winding,
            attributes: AttributeTables::new(),
            vertices: VertexTable::new(config.dedup),
            indices: Vec::new(),
            stats: LoadStats::default(),
        }
    }

    fn parse_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let mut fields = line
            .split_whitespace()
            .take_while(|token| !token.starts_with('#'));
        let Some(keyword) = fields.next() else {
            return Ok(());
        };

        match keyword {
            "v" => {
                let [x, y, z] = parse_floats::<3>(fields, line_no, keyword)?;
                self.attributes.positions.push([x, y, z]);
                self.stats.positions += 1;
            }
            "vt" => {
                let [u, v] = parse_floats::<2>(fields, line_no, keyword)?;
                self.attributes.texcoords.push([u, v]);
                self.stats.texcoords += 1;
            }
            "vn" => {
                let [x, y, z] = parse_floats::<3>(fields, line_no, keyword)?;
                self.attributes.normals.push([x, y, z]);
                self.stats.normals += 1;
            }
            "f" => {
                self.parse_face_line(fields, line_no)?;
                self.stats.faces += 1;
            }
            _ => {
                tracing::debug!(line = line_no, keyword, "Skipping unsupported OBJ statement");
                self.stats.skipped += 1;
            }
        }

        Ok(())
    }

    fn parse_face_line<'a>(
        &mut self,
        fields: impl Iterator<Item = &'a str>,
        line_no: usize,
    ) -> Result<()> {
        let groups = parse_face(fields, line_no)?;

        let mut triangle = [0u32; FACE_GROUPS];
        for (slot, group) in triangle.iter_mut().zip(groups) {
            let (position, texcoord, normal) =
                self.attributes
                    .resolve(group)
                    .map_err(|out| MeshLoadError::DanglingReference {
                        line: line_no,
                        attribute: out.attribute,
                        index: out.index,
                        available: out.available,
                    })?;

            *slot = self
                .vertices
                .insert(Vertex::from_obj(position, texcoord, normal))
                .map_err(|_| MeshLoadError::TooManyVertices { line: line_no })?;
        }

        self.indices.extend(self.winding.order(triangle));
        Ok(())
    }

    fn finish(self) -> Result<(MeshData, LoadStats)> {
        let mesh_data = MeshData {
            vertices: self.vertices.into_vec(),
            indices: self.indices,
            name: None,
        };

        mesh_data
            .validate()
            .map_err(MeshLoadError::ValidationError)?;

        if mesh_data.indices.is_empty() {
            tracing::warn!("OBJ source contains no faces");
        }

        tracing::debug!(
            positions = self.stats.positions,
            texcoords = self.stats.texcoords,
            normals = self.stats.normals,
            faces = self.stats.faces,
            skipped = self.stats.skipped,
            vertices = mesh_data.vertex_count(),
            winding = ?self.winding,
            "Parsed OBJ source"
        );

        Ok((mesh_data, self.stats))
    }
}

/// 解析 `N` 个必需的浮点字段
///
/// 之后的字段必须是数值，但不参与结果。
fn parse_floats<'a, const N: usize>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
    keyword: &str,
) -> std::result::Result<[f32; N], MeshLoadError> {
    let malformed = |reason: String| MeshLoadError::MalformedRecord {
        line,
        keyword: keyword.to_string(),
        reason,
    };

    let mut values = [0.0f32; N];
    for (found, slot) in values.iter_mut().enumerate() {
        let token = fields
            .next()
            .ok_or_else(|| malformed(format!("expected {} fields, found {}", N, found)))?;
        *slot = parse_float(token).map_err(&malformed)?;
    }

    for extra in fields {
        parse_float(extra).map_err(&malformed)?;
    }

    Ok(values)
}

fn parse_float(token: &str) -> std::result::Result<f32, String> {
    let value = token
        .parse::<f32>()
        .map_err(|_| format!("invalid number '{}'", token))?;
    if !value.is_finite() {
        return Err(format!("non-finite number '{}'", token));
    }
    Ok(value)
}
