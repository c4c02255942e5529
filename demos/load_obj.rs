/// OBJ 模型加载示例
///
/// 演示两种环绕约定下同一个立方体的加载结果。
///
/// 运行方式：
/// ```
/// cargo run --example load_obj
/// ```

use obj_mesh_loader::core::{LoaderConfig, Winding};
use obj_mesh_loader::geometry::loaders::{MeshLoader, ObjLoader};
use std::path::Path;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let obj_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("cube.obj");

    for winding in [Winding::Preserve, Winding::Reverse] {
        let loader = ObjLoader::new(LoaderConfig {
            winding,
            ..LoaderConfig::default()
        });

        match loader.load_from_file(&obj_path) {
            Ok(mesh_data) => {
                println!("{:?}: {} vertices, {} indices", winding, mesh_data.vertex_count(), mesh_data.index_count());
                for (i, triangle) in mesh_data.triangles().take(2).enumerate() {
                    println!("  triangle {}: {:?}", i, triangle);
                }
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", obj_path.display(), e);
                std::process::exit(1);
            }
        }
    }
}
