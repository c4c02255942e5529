//! OBJ Mesh Loader 命令行工具
//!
//! 加载一个 Wavefront OBJ 文件并输出顶点/索引缓冲区的概要。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件 config.toml（不存在则使用默认配置）
//! cargo run -- assets/cube.obj
//!
//! # 命令行覆盖
//! cargo run -- --reverse-winding --linear-dedup --log-level debug assets/cube.obj
//! ```

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use obj_mesh_loader::core::{log, Config};
use obj_mesh_loader::geometry::loaders::load_mesh;
use obj_mesh_loader::geometry::MeshData;

/// 预览输出的条目数
const PREVIEW_COUNT: usize = 3;

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// 初始化流程
///
/// 1. 加载配置文件（config.toml）
/// 2. 应用命令行参数覆盖
/// 3. 初始化日志系统
/// 4. 加载网格并输出概要
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = Config::from_file_or_default("config.toml");
    config.apply_args(&args);
    config.validate().context("invalid configuration")?;

    let log_file = config
        .logging
        .file_output
        .then_some(config.logging.log_file.as_str());
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    info!(version = env!("CARGO_PKG_VERSION"), "OBJ mesh loader starting");

    let Some(path) = input_path(&args) else {
        bail!("usage: obj_mesh_loader [--reverse-winding] [--linear-dedup] [--log-level <level>] <file.obj>");
    };

    info!(
        winding = ?config.loader.winding,
        dedup = ?config.loader.dedup,
        path = %path.display(),
        "Loader configuration"
    );

    let mesh_data = load_mesh(&path, config.loader)
        .with_context(|| format!("failed to load {}", path.display()))?;

    print_summary(&path, &mesh_data);
    Ok(())
}

/// 第一个不是选项的参数即输入文件
fn input_path(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--log-level" => {
                iter.next();
            }
            flag if flag.starts_with("--") => {}
            path => return Some(PathBuf::from(path)),
        }
    }
    None
}

fn print_summary(path: &Path, mesh_data: &MeshData) {
    println!("Mesh: {}", mesh_data.name.as_deref().unwrap_or("Unnamed"));
    println!("  Source:    {}", path.display());
    println!("  Vertices:  {} ({} bytes)", mesh_data.vertex_count(), mesh_data.vertex_bytes().len());
    println!("  Indices:   {} ({} bytes)", mesh_data.index_count(), mesh_data.index_bytes().len());
    println!("  Triangles: {}", mesh_data.triangle_count());

    for (i, vertex) in mesh_data.vertices.iter().take(PREVIEW_COUNT).enumerate() {
        println!(
            "  v[{}] pos [{:.3}, {:.3}, {:.3}]  uv [{:.3}, {:.3}]  n [{:.3}, {:.3}, {:.3}]",
            i,
            vertex.position[0], vertex.position[1], vertex.position[2],
            vertex.texcoord[0], vertex.texcoord[1],
            vertex.normal[0], vertex.normal[1], vertex.normal[2],
        );
    }

    for (i, triangle) in mesh_data.triangles().take(PREVIEW_COUNT).enumerate() {
        println!("  tri[{}] {:?}", i, triangle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_input_path_skips_flags() {
        let args = args(&["app", "--reverse-winding", "--log-level", "debug", "cube.obj"]);
        assert_eq!(input_path(&args), Some(PathBuf::from("cube.obj")));
    }

    #[test]
    fn test_input_path_missing() {
        let args = args(&["app", "--linear-dedup"]);
        assert_eq!(input_path(&args), None);
    }
}
