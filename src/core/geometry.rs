//! Rein-mathematische Hilfsfunktionen: Punktspiegelung, Drag-Toleranz, Bézier-Auswertung.

use glam::Vec2;

/// Bewegungen bis einschließlich dieser Distanz gelten als Klick, nicht als Drag.
pub const DRAG_TOLERANCE: f32 = 1.0;

/// Punktspiegelung von `point` an `pivot`: `2·pivot − point`.
///
/// Einzige Stelle, an der Kontrollpunkte gespiegelt werden. PathBuilder und
/// Handle-Drags nutzen beide diese Funktion.
pub fn mirror(point: Vec2, pivot: Vec2) -> Vec2 {
    2.0 * pivot - point
}

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Ist die Bewegung von `start` nach `current` ein Drag (statt Klick)?
///
/// Strikt größer: Ein Abstand von genau `tolerance` gilt noch als Klick.
pub fn is_drag(start: Vec2, current: Vec2, tolerance: f32) -> bool {
    distance(start, current) > tolerance
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Obergrenze der Stützpunkte pro Kurvensegment beim Abtasten.
pub const FLATTEN_MAX_SAMPLES_PER_SEGMENT: usize = 1024;

/// Auflösung der Bogenlängen-Tabelle (Anzahl Teilintervalle in `t`).
const ARC_LENGTH_TABLE_STEPS: usize = 256;

/// Tastet eine parametrische Kurve in gleichen Bogenlängen-Abständen ab.
///
/// Erster und letzter Punkt entsprechen exakt `eval(0.0)` bzw. `eval(1.0)`.
/// Die Punktzahl ist auf `FLATTEN_MAX_SAMPLES_PER_SEGMENT + 1` begrenzt.
/// Bei entarteter oder nicht endlicher Länge (z.B. f32-Überlauf bei sehr
/// großen Koordinaten) sowie ungültigem Abstand bleiben nur die Endpunkte.
pub fn sample_by_arc_length(eval: impl Fn(f32) -> Vec2, max_segment_length: f32) -> Vec<Vec2> {
    let start = eval(0.0);
    let end = eval(1.0);

    let table = arc_length_table(&eval);
    let total_length = table[ARC_LENGTH_TABLE_STEPS];
    if !total_length.is_finite()
        || total_length < f32::EPSILON
        || max_segment_length.is_nan()
        || max_segment_length <= 0.0
    {
        return vec![start, end];
    }

    let steps = (total_length / max_segment_length)
        .ceil()
        .clamp(1.0, FLATTEN_MAX_SAMPLES_PER_SEGMENT as f32) as usize;
    let spacing = total_length / steps as f32;

    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);
    points.extend((1..steps).map(|i| eval(param_at_length(&table, i as f32 * spacing))));
    points.push(end);
    points
}

/// Kumulierte Bogenlänge an den Stellen `t = i / ARC_LENGTH_TABLE_STEPS`.
fn arc_length_table(eval: &impl Fn(f32) -> Vec2) -> Vec<f32> {
    let mut table = Vec::with_capacity(ARC_LENGTH_TABLE_STEPS + 1);
    let mut length = 0.0f32;
    let mut prev = eval(0.0);
    table.push(length);
    for i in 1..=ARC_LENGTH_TABLE_STEPS {
        let p = eval(i as f32 / ARC_LENGTH_TABLE_STEPS as f32);
        length += prev.distance(p);
        table.push(length);
        prev = p;
    }
    table
}

/// Parameter `t`, an dem die Tabelle `length` erreicht (linear interpoliert).
fn param_at_length(table: &[f32], length: f32) -> f32 {
    let steps = table.len() - 1;
    let idx = table.partition_point(|&l| l < length).clamp(1, steps);
    let (before, after) = (table[idx - 1], table[idx]);
    let frac = if after - before > f32::EPSILON {
        (length - before) / (after - before)
    } else {
        0.0
    };
    ((idx - 1) as f32 + frac) / steps as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mirror_around_pivot() {
        let mirrored = mirror(Vec2::new(80.0, 20.0), Vec2::new(50.0, 0.0));
        assert_eq!(mirrored, Vec2::new(20.0, -20.0));
    }

    #[test]
    fn test_mirror_is_involution() {
        let samples = [
            (Vec2::new(3.0, -7.0), Vec2::new(10.0, 2.0)),
            (Vec2::new(-120.5, 44.25), Vec2::new(0.0, 0.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(-8.0, 16.0)),
        ];
        for (p, q) in samples {
            let back = mirror(mirror(p, q), q);
            assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_mirror_of_pivot_is_pivot() {
        let q = Vec2::new(4.0, 9.0);
        assert_eq!(mirror(q, q), q);
    }

    #[test]
    fn test_is_drag_boundary_is_strict() {
        let start = Vec2::new(0.0, 0.0);
        assert!(!is_drag(start, Vec2::new(1.0, 0.0), 1.0));
        assert!(!is_drag(start, Vec2::new(0.0, -1.0), 1.0));
        assert!(is_drag(start, Vec2::new(1.001, 0.0), 1.0));
        assert!(!is_drag(start, start, 1.0));
    }

    #[test]
    fn test_distance_pythagoras() {
        assert_relative_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_bezier_endpoints() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(3.0, 10.0);
        let p2 = Vec2::new(7.0, 10.0);
        let p3 = Vec2::new(10.0, 0.0);

        assert!((cubic_bezier(p0, p1, p2, p3, 0.0) - p0).length() < 0.001);
        assert!((cubic_bezier(p0, p1, p2, p3, 1.0) - p3).length() < 0.001);
        assert!((quadratic_bezier(p0, p1, p3, 0.0) - p0).length() < 0.001);
        assert!((quadratic_bezier(p0, p1, p3, 1.0) - p3).length() < 0.001);
    }

    #[test]
    fn test_quadratic_bezier_midpoint() {
        let mid = quadratic_bezier(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(10.0, 0.0),
            0.5,
        );
        assert!((mid - Vec2::new(5.0, 5.0)).length() < 0.001);
    }

    #[test]
    fn test_sample_by_arc_length_spacing() {
        let start = Vec2::new(0.0, 0.0);
        let control = Vec2::new(5.0, 10.0);
        let end = Vec2::new(10.0, 0.0);

        let positions = sample_by_arc_length(|t| quadratic_bezier(start, control, end, t), 2.0);
        assert!(positions.len() >= 3);
        assert_eq!(positions[0], start);
        assert!((positions[positions.len() - 1] - end).length() < 0.01);
        for pair in positions.windows(2) {
            let dist = pair[0].distance(pair[1]);
            assert!(dist < 2.5, "Abstand {:.2} zu groß", dist);
        }
    }

    #[test]
    fn test_sample_tiny_spacing_is_capped() {
        let start = Vec2::new(0.0, 0.0);
        let control = Vec2::new(20.0, -20.0);
        let end = Vec2::new(50.0, 0.0);

        let positions =
            sample_by_arc_length(|t| quadratic_bezier(start, control, end, t), 1e-30);

        assert_eq!(positions.len(), FLATTEN_MAX_SAMPLES_PER_SEGMENT + 1);
        assert_eq!(positions[0], start);
        assert!((positions[positions.len() - 1] - end).length() < 0.01);
    }

    #[test]
    fn test_sample_overflowing_length_keeps_both_ends() {
        // Teilstrecken um 1e36 laufen beim Quadrieren in f32 über
        let start = Vec2::new(0.0, 0.0);
        let control = Vec2::new(1e38, -1e38);
        let end = Vec2::new(3e38, 0.0);

        let positions = sample_by_arc_length(|t| quadratic_bezier(start, control, end, t), 4.0);

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0], start);
        assert_eq!(positions[1], quadratic_bezier(start, control, end, 1.0));
    }

    #[test]
    fn test_sample_huge_finite_length_is_capped() {
        let start = Vec2::new(0.0, 0.0);
        let control = Vec2::new(2e20, -2e20);
        let end = Vec2::new(5e20, 0.0);

        let positions = sample_by_arc_length(|t| quadratic_bezier(start, control, end, t), 4.0);

        assert_eq!(positions.len(), FLATTEN_MAX_SAMPLES_PER_SEGMENT + 1);
        assert_eq!(positions[0], start);
        assert_eq!(positions[positions.len() - 1], end);
    }

    #[test]
    fn test_sample_invalid_spacing_keeps_both_ends() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(10.0, 0.0);
        for spacing in [0.0, -3.0, f32::NAN] {
            let positions = sample_by_arc_length(|t| start.lerp(end, t), spacing);
            assert_eq!(positions, vec![start, end]);
        }
    }

    #[test]
    fn test_sample_degenerate_curve_keeps_both_ends() {
        let p = Vec2::new(2.0, 2.0);
        let positions = sample_by_arc_length(|_| p, 1.0);
        assert_eq!(positions, vec![p, p]);
    }
}
