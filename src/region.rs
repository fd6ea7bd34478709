//! Planare Regionen für Flächen-Selektion.
//!
//! [`Region`] abstrahiert den Punkt-Enthaltenseins-Test; konkrete Formen:
//! achsenparalleles Rechteck, Kreis und Polygon (Lasso).

use glam::Vec2;

/// Planare Region mit Punkt-Enthaltenseins-Test.
pub trait Region {
    /// Gibt `true` zurück, wenn `point` innerhalb der Region liegt
    /// (Randpunkte zählen als enthalten).
    fn contains(&self, point: Vec2) -> bool;
}

/// Achsenparalleles Rechteck, definiert über Min-/Max-Ecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Ecke mit minimalem x und y
    pub min: Vec2,
    /// Ecke mit maximalem x und y
    pub max: Vec2,
}

impl Rect {
    /// Erstellt ein Rechteck aus zwei beliebigen gegenüberliegenden Ecken.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

impl Region for Rect {
    fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Kreis um `center` mit Radius `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Mittelpunkt
    pub center: Vec2,
    /// Radius (negativ ⇒ leere Region)
    pub radius: f32,
}

impl Region for Circle {
    fn contains(&self, point: Vec2) -> bool {
        if self.radius.is_sign_negative() {
            return false;
        }
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// Geschlossenes Polygon (Lasso-Selektion).
///
/// Weniger als 3 Eckpunkte ergeben eine leere Region.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    /// Erstellt ein Polygon aus den Eckpunkten (implizit geschlossen).
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Die Eckpunkte des Polygons.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

impl Region for Polygon {
    /// Ray-Casting-Test; Punkte auf dem Rand zählen als enthalten.
    fn contains(&self, point: Vec2) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut previous = *self.points.last().expect("Polygon hat mindestens 3 Punkte");

        for &current in &self.points {
            if point_on_segment(point, previous, current) {
                return true;
            }

            // Die Kreuzungsbedingung garantiert previous.y != current.y,
            // der Divisor ist also nie null.
            let intersect = ((current.y > point.y) != (previous.y > point.y))
                && (point.x
                    < (previous.x - current.x) * (point.y - current.y)
                        / (previous.y - current.y)
                        + current.x);

            if intersect {
                inside = !inside;
            }

            previous = current;
        }

        inside
    }
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let cross = ab.perp_dot(ap).abs();
    if cross > 1e-4 {
        return false;
    }

    let dot = ap.dot(ab);
    if dot < 0.0 {
        return false;
    }

    let ab_length_sq = ab.length_squared();
    if dot > ab_length_sq {
        return false;
    }

    true
}
