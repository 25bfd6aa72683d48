//! Triangle meshes loaded from OBJ files.

use std::path::Path;

use log::{debug, warn};

use crate::error::RenderError;
use crate::matrix::Matrix;
use crate::shapes::add_polygon;

/// Loads every model in the OBJ file at `path` and appends its triangles to
/// `polygons` in file order, keeping the file's vertex winding.
///
/// Faces with more than three vertices are triangulated on load. Returns the
/// number of triangles appended.
pub fn add_mesh<P: AsRef<Path>>(polygons: &mut Matrix, path: P) -> Result<usize, RenderError> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )?;

    let mut added = 0;
    for model in &models {
        let mesh = &model.mesh;
        if mesh.indices.len() % 3 != 0 {
            warn!(
                "mesh '{}' has {} indices, ignoring the trailing partial face",
                model.name,
                mesh.indices.len()
            );
        }

        let vertex = |i: u32| {
            let i = i as usize * 3;
            (
                mesh.positions[i] as f64,
                mesh.positions[i + 1] as f64,
                mesh.positions[i + 2] as f64,
            )
        };

        for face in mesh.indices.chunks_exact(3) {
            let (x0, y0, z0) = vertex(face[0]);
            let (x1, y1, z1) = vertex(face[1]);
            let (x2, y2, z2) = vertex(face[2]);
            add_polygon(polygons, x0, y0, z0, x1, y1, z1, x2, y2, z2);
            added += 1;
        }
    }

    debug!("loaded {} triangles from {}", added, path.display());
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("solidraster_{}_{}.obj", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn quad_is_triangulated() {
        let path = write_obj(
            "quad",
            "v 0 0 0\nv 10 0 0\nv 10 10 0\nv 0 10 0\nf 1 2 3 4\n",
        );
        let mut polygons = Matrix::new(0);
        let added = add_mesh(&mut polygons, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(added, 2);
        assert_eq!(polygons.len(), 6);
        assert!(polygons.points().all(|p| p.z == 0.0));
        let xs: Vec<f64> = polygons.points().map(|p| p.x).collect();
        assert!(xs.iter().all(|&x| x == 0.0 || x == 10.0));
    }

    #[test]
    fn appends_after_existing_triangles() {
        let path = write_obj("tri", "v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\n");
        let mut polygons = Matrix::new(0);
        polygons.append_point(0.0, 0.0, 0.0);
        polygons.append_point(1.0, 0.0, 0.0);
        polygons.append_point(0.0, 1.0, 0.0);

        assert_eq!(add_mesh(&mut polygons, &path).unwrap(), 1);
        std::fs::remove_file(&path).ok();

        assert_eq!(polygons.len(), 6);
        assert_eq!(polygons.column(3), [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(polygons.column(5), [7.0, 8.0, 9.0, 1.0]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut polygons = Matrix::new(0);
        let result = add_mesh(&mut polygons, "/nonexistent/solidraster/mesh.obj");
        assert!(matches!(result, Err(RenderError::Mesh(_))));
        assert!(polygons.is_empty());
    }
}
