// Combat hit-testing shared by the hero and enemy state machines

use parry2d::bounding_volume::BoundingVolume;

use super::actor::ActorBody;

/// Animation frame at which an attack swing connects
pub const IMPACT_FRAME: usize = 4;

/// Whether two actors' collision bounds overlap
pub fn actors_overlap(a: &ActorBody, b: &ActorBody) -> bool {
    a.bounds().intersects(&b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body_at(x: f32, y: f32) -> ActorBody {
        ActorBody::new(Vec2::new(x, y), Vec2::new(20.0, 80.0))
    }

    #[test]
    fn test_overlapping_actors() {
        let a = body_at(100.0, 420.0);
        let b = body_at(110.0, 420.0);
        assert!(actors_overlap(&a, &b));
    }

    #[test]
    fn test_separated_actors() {
        let a = body_at(100.0, 420.0);
        let b = body_at(200.0, 420.0);
        assert!(!actors_overlap(&a, &b));
    }

    #[test]
    fn test_vertically_separated_actors() {
        let a = body_at(100.0, 420.0);
        let b = body_at(100.0, 200.0);
        assert!(!actors_overlap(&a, &b));
    }
}
