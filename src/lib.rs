//! OBJ Mesh Loader - Wavefront OBJ 网格加载库
//!
//! 将 OBJ 文本解析为去重后的顶点缓冲区和三角形索引缓冲区，
//! 并从 OBJ 的右手坐标系（逆时针、纹理 V 轴向上）转换到
//! 左手渲染坐标系（Z 轴取反、纹理 V 轴向下）。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理）
//! - `geometry`: 几何体加载模块（顶点、网格、OBJ 加载器）
//!
//! # 使用示例
//!
//! ```
//! use obj_mesh_loader::core::LoaderConfig;
//! use obj_mesh_loader::geometry::loaders::ObjLoader;
//!
//! let source = "
//! v 0 0 0
//! v 1 0 0
//! v 0 1 1
//! vt 0 0
//! vn 0 0 1
//! f 1/1/1 2/1/1 3/1/1
//! ";
//!
//! let mesh = ObjLoader::new(LoaderConfig::default()).load_from_str(source)?;
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.indices, vec![0, 1, 2]);
//! assert_eq!(mesh.vertices[2].position, [0.0, 1.0, -1.0]);
//! # Ok::<(), obj_mesh_loader::core::ObjLoaderError>(())
//! ```

pub mod core;
pub mod geometry;
