//! Pfad-Segmente und der Builder, der aus Ankern zeichenbare Kurven macht.
//!
//! Jeder Anker trägt höchstens einen gespeicherten Kontrollpunkt. Dieser
//! formt das *ankommende* Segment; sein Spiegelbild am Anker formt das
//! *abgehende*. Damit liegen beide Kontrollpunkte auf einer Geraden durch
//! den Anker (C1-Stetigkeit).
//!
//! Segmenttyp pro Übergang `prev → a`:
//!
//! | abgehend von `prev` | ankommend an `a` | Segment |
//! |---------------------|------------------|---------|
//! | ja                  | ja               | `CubicCurve` |
//! | ja                  | nein             | `QuadCurve` (abgehender CP) |
//! | nein                | ja               | `QuadCurve` (ankommender CP) |
//! | nein                | nein             | `Line` |

use super::geometry::{cubic_bezier, mirror, quadratic_bezier, sample_by_arc_length};
use super::Anchor;
use glam::Vec2;

/// Ein Zeichenbefehl für den Renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Startpunkt setzen (ohne Strich)
    Move { to: Vec2 },
    /// Gerade zum Zielpunkt
    Line { to: Vec2 },
    /// Quadratische Bézier-Kurve
    QuadCurve { to: Vec2, control: Vec2 },
    /// Kubische Bézier-Kurve
    CubicCurve {
        to: Vec2,
        control1: Vec2,
        control2: Vec2,
    },
}

impl Segment {
    /// Endpunkt des Segments.
    pub fn end_point(&self) -> Vec2 {
        match *self {
            Segment::Move { to }
            | Segment::Line { to }
            | Segment::QuadCurve { to, .. }
            | Segment::CubicCurve { to, .. } => to,
        }
    }

    /// Evaluiert das Segment bei `t ∈ [0, 1]`, ausgehend von `from`.
    ///
    /// `Move` springt ohne Interpolation auf den Zielpunkt.
    pub fn eval(&self, from: Vec2, t: f32) -> Vec2 {
        match *self {
            Segment::Move { to } => to,
            Segment::Line { to } => from.lerp(to, t),
            Segment::QuadCurve { to, control } => quadratic_bezier(from, control, to, t),
            Segment::CubicCurve {
                to,
                control1,
                control2,
            } => cubic_bezier(from, control1, control2, to, t),
        }
    }

    /// Ist das Segment eine Kurve (quadratisch oder kubisch)?
    pub fn is_curve(&self) -> bool {
        matches!(self, Segment::QuadCurve { .. } | Segment::CubicCurve { .. })
    }
}

/// Baut die Segmentfolge für eine Ankerfolge.
///
/// Reine Funktion: gleiche Eingabe liefert strukturell gleiche Ausgabe.
pub fn build_segments(anchors: &[Anchor]) -> Vec<Segment> {
    let Some((first, rest)) = anchors.split_first() else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(anchors.len());
    segments.push(Segment::Move { to: first.point });

    let mut departing = departing_control(first);
    for anchor in rest {
        let to = anchor.point;
        let segment = match (departing, anchor.control_offset) {
            (Some(control1), Some(control2)) => Segment::CubicCurve {
                to,
                control1,
                control2,
            },
            (Some(control), None) | (None, Some(control)) => Segment::QuadCurve { to, control },
            (None, None) => Segment::Line { to },
        };
        segments.push(segment);
        departing = departing_control(anchor);
    }

    segments
}

/// Kontrollpunkt, mit dem das Segment hinter `anchor` startet.
fn departing_control(anchor: &Anchor) -> Option<Vec2> {
    anchor.control_offset.map(|offset| mirror(offset, anchor.point))
}

/// Tastet eine Segmentfolge als Polylinie ab (für Renderer ohne Kurven-Support).
///
/// Kurven werden per Arc-Length mit höchstens `max_segment_length` Abstand
/// abgetastet, Geraden liefern nur ihren Endpunkt. Ein `Move` mitten in der
/// Folge startet keinen neuen Zug, sondern wird wie eine Gerade behandelt.
pub fn flatten_segments(segments: &[Segment], max_segment_length: f32) -> Vec<Vec2> {
    let mut points = Vec::new();
    let mut cursor: Option<Vec2> = None;

    for segment in segments {
        let to = segment.end_point();
        match (cursor, segment.is_curve()) {
            (Some(from), true) => {
                let samples = sample_by_arc_length(|t| segment.eval(from, t), max_segment_length);
                // Startpunkt ist bereits enthalten
                points.extend(samples.into_iter().skip(1));
            }
            _ => points.push(to),
        }
        cursor = Some(to);
    }

    points
}
