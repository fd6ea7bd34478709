//! Reine Geometrie-Funktionen für Punkt-Segment-Distanzen.
//!
//! Layer-neutral: wird vom Accessor und von den Region-Typen genutzt,
//! ohne Abhängigkeiten auf Graph- oder Layout-Typen.

use glam::Vec2;

/// Projektionsparameter des Punkts `query` auf die Gerade durch `a` und `b`.
///
/// `0.0` entspricht `a`, `1.0` entspricht `b`; Werte außerhalb von [0, 1]
/// liegen jenseits der Segmentenden. Gibt `None` zurück, wenn `a == b`
/// (degeneriertes Segment, Division durch Null).
pub fn projection_parameter(query: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq == 0.0 {
        return None;
    }
    Some((query - a).dot(ab) / length_sq)
}

/// Quadrierte Distanz von `query` zum Segment `a`–`b`.
///
/// Der Lotfußpunkt wird auf das Segment geklemmt: für `b <= 0` zählt die
/// Distanz zum Anfangspunkt, für `b >= 1` die zum Endpunkt, dazwischen die
/// zum Punkt auf dem Segment. `None` für degenerierte Segmente.
pub fn segment_distance_sq(query: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let t = projection_parameter(query, a, b)?;
    let closest = if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a + t * (b - a)
    };
    Some(query.distance_squared(closest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn projection_hits_segment_midpoint() {
        let t = projection_parameter(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("Segment ist nicht degeneriert");

        assert_relative_eq!(t, 0.5);
    }

    #[test]
    fn projection_is_none_for_coincident_endpoints() {
        let p = Vec2::new(3.0, 3.0);
        assert!(projection_parameter(Vec2::new(1.0, 1.0), p, p).is_none());
        assert!(segment_distance_sq(Vec2::new(1.0, 1.0), p, p).is_none());
    }

    #[test]
    fn interior_projection_uses_foot_point() {
        let d = segment_distance_sq(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("Segment ist nicht degeneriert");

        // Lotfußpunkt (5, 0), Abstand 3
        assert_relative_eq!(d, 9.0);
    }

    #[test]
    fn projection_before_start_clamps_to_start() {
        let d = segment_distance_sq(
            Vec2::new(-5.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("Segment ist nicht degeneriert");

        assert_relative_eq!(d, 25.0);
    }

    #[test]
    fn projection_past_end_clamps_to_end() {
        let d = segment_distance_sq(
            Vec2::new(14.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("Segment ist nicht degeneriert");

        // geklemmt auf (10, 0): 4² + 3²
        assert_relative_eq!(d, 25.0);
    }

    #[test]
    fn segment_distance_matches_brute_force_sampling() {
        let a = Vec2::new(-3.0, 2.0);
        let b = Vec2::new(7.0, -4.0);
        let query = Vec2::new(1.5, 3.5);

        let exact = segment_distance_sq(query, a, b).expect("Segment ist nicht degeneriert");

        let sampled = (0..=1000)
            .map(|i| {
                let t = i as f32 / 1000.0;
                query.distance_squared(a + t * (b - a))
            })
            .fold(f32::MAX, f32::min);

        assert_relative_eq!(exact, sampled, epsilon = 1e-3);
    }
}
