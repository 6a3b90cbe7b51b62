//! Builder für Pfad-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::build_segments;
use crate::shared::{AnchorHandle, PathScene};

/// Baut eine PathScene aus dem aktuellen AppState.
///
/// Läuft eine Geste, wird die Vorschau aus committeten Ankern plus Kandidat
/// frisch berechnet; der Pfad im State bleibt unangetastet.
pub fn build(state: &AppState) -> PathScene {
    let (anchors, preview_anchor) = match state.live_gesture.as_ref() {
        Some(gesture) => (
            state.gesture_reducer().preview(&state.path, gesture),
            Some(state.path.next_id()),
        ),
        None => (state.path.anchors(), None),
    };

    let handles = anchors
        .iter()
        .map(|anchor| AnchorHandle::from_anchor(anchor, Some(anchor.id) == preview_anchor))
        .collect();

    PathScene {
        segments: build_segments(&anchors),
        handles,
        preview_anchor,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{GestureValue, Segment};
    use glam::Vec2;

    #[test]
    fn build_without_gesture_shows_committed_path() {
        let mut state = AppState::new();
        state.path.append(Vec2::new(0.0, 0.0), None);
        state.path.append(Vec2::new(10.0, 0.0), None);

        let scene = build(&state);

        assert!(!scene.has_preview());
        assert_eq!(scene.handles.len(), 2);
        assert!(scene.handles.iter().all(|h| !h.is_preview));
        assert_eq!(scene.segments[1], Segment::Line { to: Vec2::new(10.0, 0.0) });
    }

    #[test]
    fn build_with_gesture_appends_preview_only_to_scene() {
        let mut state = AppState::new();
        state.path.append(Vec2::new(0.0, 0.0), None);
        state.live_gesture = Some(GestureValue::new(
            Vec2::new(50.0, 0.0),
            Vec2::new(80.0, 20.0),
        ));

        let scene = build(&state);

        assert_eq!(state.path.len(), 1);
        assert_eq!(scene.handles.len(), 2);
        assert_eq!(scene.preview_anchor, Some(state.path.next_id()));
        assert!(scene.handles[1].is_preview);
        assert_eq!(
            scene.handles[1].guide_line(),
            Some([
                Vec2::new(80.0, 20.0),
                Vec2::new(50.0, 0.0),
                Vec2::new(20.0, -20.0)
            ])
        );
        assert!(scene.handles[0].guide_line().is_none());
        assert_eq!(
            scene.segments[1],
            Segment::QuadCurve {
                to: Vec2::new(50.0, 0.0),
                control: Vec2::new(20.0, -20.0),
            }
        );
    }

    #[test]
    fn build_uses_configured_drag_tolerance() {
        let mut state = AppState::new();
        state.options.drag_tolerance = 50.0;
        state.path.append(Vec2::new(0.0, 0.0), None);
        state.live_gesture = Some(GestureValue::new(
            Vec2::new(50.0, 0.0),
            Vec2::new(80.0, 20.0),
        ));

        let scene = build(&state);

        assert_eq!(scene.segments[1], Segment::Line { to: Vec2::new(50.0, 0.0) });
        assert!(scene.handles[1].control_pair.is_none());
    }

    #[test]
    fn polyline_ends_at_last_anchor() {
        let mut state = AppState::new();
        state.path.append(Vec2::new(0.0, 0.0), None);
        state.path.append(Vec2::new(50.0, 0.0), Some(Vec2::new(20.0, -20.0)));

        let polyline = build(&state).polyline();

        assert_eq!(polyline[0], Vec2::new(0.0, 0.0));
        let last = polyline[polyline.len() - 1];
        assert!((last - Vec2::new(50.0, 0.0)).length() < 0.01);
        for pair in polyline.windows(2) {
            assert!(pair[0].distance(pair[1]) <= state.options.flatten_max_segment_length + 0.5);
        }
    }
}
