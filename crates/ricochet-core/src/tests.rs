#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};

    use crate::components::{ActorId, HitResult, PhysMaterialId};
    use crate::events::HitEvent;
    use crate::materials::{MaterialLibrary, PhysicalMaterial};
    use crate::state::{ProjectileView, SimSnapshot};
    use crate::types::{reflect, rotation_from_direction, SimTime, Transform, Velocity};

    // ---- Reflection ----

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(300.0, 0.0, -400.0);
        let r = reflect(v, Vec3::Z);
        assert!(r.abs_diff_eq(Vec3::new(300.0, 0.0, 400.0), 1e-4));
    }

    #[test]
    fn test_reflect_parallel_to_surface_is_unchanged() {
        let v = Vec3::new(200.0, 0.0, 0.0);
        let r = reflect(v, Vec3::Y);
        assert!(r.abs_diff_eq(v, 1e-4));
    }

    #[test]
    fn test_reflect_normalizes_normal() {
        let v = Vec3::new(0.0, 0.0, -10.0);
        let r = reflect(v, Vec3::new(0.0, 0.0, 25.0));
        assert!(r.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-4));
    }

    #[test]
    fn test_reflect_zero_normal_is_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(reflect(v, Vec3::ZERO), v);
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let v = Vec3::new(120.0, -80.0, -310.0);
        let n = Vec3::new(0.3, 0.1, 1.0);
        assert_relative_eq!(reflect(v, n).length(), v.length(), epsilon = 1e-3);
    }

    // ---- Orientation ----

    #[test]
    fn test_rotation_points_forward_along_direction() {
        let directions = [
            Vec3::X,
            Vec3::Y,
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, -3.0, -4.0),
            Vec3::Z,
        ];
        for dir in directions {
            let q = rotation_from_direction(dir);
            let forward = q * Vec3::X;
            assert!(
                forward.abs_diff_eq(dir.normalize(), 1e-4),
                "forward {forward:?} should match {dir:?}"
            );
        }
    }

    #[test]
    fn test_rotation_of_zero_direction_is_identity() {
        assert_eq!(rotation_from_direction(Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn test_rotation_has_no_roll() {
        // Local +Y stays horizontal for any direction.
        let q = rotation_from_direction(Vec3::new(2.0, 1.0, 3.0));
        let right = q * Vec3::Y;
        assert_relative_eq!(right.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_looking_along() {
        let t = Transform::looking_along(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.translation, Vec3::new(1.0, 2.0, 3.0));
        assert!(t.forward().abs_diff_eq(Vec3::Y, 1e-5));
    }

    // ---- Types ----

    #[test]
    fn test_velocity_speed() {
        assert_relative_eq!(Velocity::new(3.0, 4.0, 0.0).speed(), 5.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert_relative_eq!(time.elapsed_secs, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hit_result_trace_delta() {
        let hit = HitResult {
            trace_start: Vec3::new(0.0, 0.0, 10.0),
            trace_end: Vec3::new(10.0, 0.0, -10.0),
            impact_point: Vec3::new(5.0, 0.0, 0.0),
            impact_normal: Vec3::Z,
            phys_material: None,
            actor: None,
        };
        assert_eq!(hit.trace_delta(), Vec3::new(10.0, 0.0, -20.0));
    }

    // ---- Materials ----

    #[test]
    fn test_material_restitution_lookup() {
        let mut library = MaterialLibrary::new();
        let rubber = library.insert(PhysicalMaterial::new("rubber", 0.8));
        let steel = library.insert(PhysicalMaterial::new("steel", 0.3));
        assert_ne!(rubber, steel);
        assert_eq!(library.restitution(Some(rubber)), Some(0.8));
        assert_eq!(library.restitution(Some(steel)), Some(0.3));
        assert_eq!(library.restitution(None), None);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_removed_material_is_invalid() {
        let mut library = MaterialLibrary::new();
        let id = library.insert(PhysicalMaterial::new("glass", 0.1));
        library.remove(id);
        assert_eq!(library.restitution(Some(id)), None);
        assert_eq!(library.restitution(Some(PhysMaterialId(99))), None);
        assert!(library.is_empty());
    }

    #[test]
    fn test_material_library_from_json() {
        let mut library = MaterialLibrary::new();
        let id = library.insert(PhysicalMaterial::new("concrete", 0.35));
        let json = serde_json::to_string(&library).unwrap();
        let back: MaterialLibrary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(id), Some(&PhysicalMaterial::new("concrete", 0.35)));
    }

    // ---- Events and snapshots ----

    #[test]
    fn test_hit_event_tagged_serde() {
        let event = HitEvent::ActorNotified {
            entity: 7,
            actor: ActorId(3),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ActorNotified\""), "got {json}");
        let back: HitEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.entity(), 7);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot {
            projectiles: vec![ProjectileView {
                id: 1,
                position: Vec3::new(1.0, 2.0, 3.0),
                velocity: None,
                ricochet: true,
                hit_pending: false,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.projectiles, snapshot.projectiles);
    }
}
