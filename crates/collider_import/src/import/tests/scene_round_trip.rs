//! Scene file in, processed scene file out

use crate::config::{Config, ImportPreferences};
use crate::import::ColliderImporter;
use crate::scene::{ColliderDescription, SceneDescription, SceneHierarchy};

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIR_RON: &str = r#"(
        roots: [
            (
                name: "Chair",
                children: [
                    (
                        name: "Seat",
                        transform: (position: (0.0, 1.0, 0.0)),
                        children: [
                            (
                                name: "ucx_Collision",
                                transform: (position: (0.0, 0.0, 2.0)),
                                mesh: Some((
                                    name: "ucx_Collision",
                                    vertices: [(-1.0, -1.0, -1.0), (1.0, 1.0, 1.0), (1.0, -1.0, 1.0)],
                                )),
                            ),
                        ],
                    ),
                    (
                        name: "Legs",
                        mesh: Some((name: "ubx_Legs", vertices: [(-0.5, 0.0, -0.5), (0.5, 1.0, 0.5)])),
                    ),
                ],
            ),
        ],
    )"#;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("collider_import_scene_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_processed_scene_file_round_trip() {
        let input = temp_path("chair.ron");
        let output = temp_path("chair.processed.ron");
        std::fs::write(&input, CHAIR_RON).unwrap();

        let mut scene = SceneHierarchy::load(&input).unwrap();
        let reports = ColliderImporter::new(ImportPreferences::enabled())
            .process_scene(&mut scene)
            .unwrap();
        scene.save(&output).unwrap();

        let written = SceneDescription::load_from_file(&output).unwrap();
        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].generated.len(), 2);

        let chair = &written.roots[0];
        assert!(chair.children.iter().all(|child| child.name == "Seat"));
        assert!(matches!(chair.colliders[0], ColliderDescription::Box { .. }));

        let seat = &chair.children[0];
        assert!(seat.children.is_empty());
        match &seat.colliders[0] {
            ColliderDescription::ConvexMesh { mesh: Some(mesh), convex } => {
                assert!(*convex);
                assert_eq!(mesh.vertices[0], [-1.0, -1.0, 1.0]);
            }
            other => panic!("expected an embedded convex mesh, got {:?}", other),
        }
    }
}
