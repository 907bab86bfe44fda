// Drives the frame pass against an in-memory scene.

use parallax_core::*;

#[derive(Default)]
struct RecordingScene {
    widths: Vec<f64>,
    offset: f64,
    transitions: Vec<Transition>,
    dragging: bool,
    effects: Vec<Option<SectionEffect>>,
    in_view: Vec<bool>,
    log: Vec<&'static str>,
}

impl RecordingScene {
    fn new(widths: &[f64]) -> Self {
        Self {
            widths: widths.to_vec(),
            effects: vec![None; widths.len()],
            in_view: vec![false; widths.len()],
            ..Default::default()
        }
    }
}

impl Scene for RecordingScene {
    fn set_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn translate_strip(&mut self, offset: f64) {
        self.log.push("translate");
        self.offset = offset;
    }

    fn section_rects(&self) -> Vec<SectionRect> {
        let mut left = -self.offset;
        self.widths
            .iter()
            .map(|w| {
                let r = SectionRect::new(left, *w);
                left += w;
                r
            })
            .collect()
    }

    fn apply_effect(&mut self, index: usize, effect: &SectionEffect) {
        self.log.push("effect");
        self.effects[index] = Some(effect.clone());
    }

    fn set_in_view(&mut self, index: usize, in_view: bool) {
        self.log.push("visibility");
        self.in_view[index] = in_view;
    }
}

fn make(widths: &[f64], viewport: f64) -> (ScrollController, RecordingScene) {
    let sections = widths
        .iter()
        .map(|w| Section::new(SectionKind::Text, *w).with_text_count(2))
        .collect();
    (
        ScrollController::new(sections, viewport, ScrollConfig::default()),
        RecordingScene::new(widths),
    )
}

#[test]
fn frame_orders_translate_effects_visibility() {
    let (mut ctrl, mut scene) = make(&[500.0, 500.0], 500.0);
    render_frame(&mut ctrl, &mut scene);
    assert_eq!(
        scene.log,
        vec!["translate", "effect", "effect", "visibility", "visibility"]
    );
}

#[test]
fn frame_eases_and_translates() {
    let (mut ctrl, mut scene) = make(&[500.0, 500.0, 500.0], 500.0);
    ctrl.scroll_to_section(2);
    render_frame(&mut ctrl, &mut scene);
    assert!((scene.offset - 80.0).abs() < 1e-9);
    assert_eq!(scene.transitions, vec![Transition::Section]);

    render_frame(&mut ctrl, &mut scene);
    assert_eq!(scene.transitions.len(), 1, "transition applied once");
}

#[test]
fn dragging_flag_follows_session() {
    let (mut ctrl, mut scene) = make(&[500.0, 500.0], 500.0);
    ctrl.drag_start(100.0, 0.0);
    render_frame(&mut ctrl, &mut scene);
    assert!(scene.dragging);
    assert_eq!(scene.transitions, vec![Transition::Direct]);
    ctrl.drag_end();
    render_frame(&mut ctrl, &mut scene);
    assert!(!scene.dragging);
    assert_eq!(scene.transitions, vec![Transition::Direct, Transition::Release]);
}

#[test]
fn visibility_tracks_offset() {
    let (mut ctrl, mut scene) = make(&[500.0, 500.0, 500.0], 500.0);
    render_frame(&mut ctrl, &mut scene);
    assert_eq!(scene.in_view, vec![true, false, false]);

    ctrl.scroll_to_section(2);
    let token = LoopToken::new();
    run_frames(&mut ctrl, &mut scene, &token, 400);
    assert!((scene.offset - 1000.0).abs() < 0.01);
    assert!(!scene.in_view[0]);
    assert!(scene.in_view[2]);
}

#[test]
fn centred_section_has_no_parallax() {
    let (mut ctrl, mut scene) = make(&[500.0], 500.0);
    render_frame(&mut ctrl, &mut scene);
    let effect = scene.effects[0].clone().unwrap();
    assert_eq!(
        effect.section,
        Some(Transform::TranslateXScale { x: 0.0, scale: 1.0 })
    );
    match effect.text {
        TextEffect::Parallax(styles) => {
            assert_eq!(styles.len(), 2);
            for s in styles {
                assert_eq!(s.translate_y, 0.0);
                assert_eq!(s.opacity, 1.0);
            }
        }
        other => panic!("expected text parallax, got {other:?}"),
    }
}

#[test]
fn run_frames_is_bounded() {
    let (mut ctrl, mut scene) = make(&[500.0, 500.0], 500.0);
    let token = LoopToken::new();
    assert_eq!(run_frames(&mut ctrl, &mut scene, &token, 7), 7);
    assert_eq!(scene.log.iter().filter(|s| **s == "translate").count(), 7);
}

#[test]
fn cancelled_token_stops_loop() {
    let (mut ctrl, mut scene) = make(&[500.0, 500.0], 500.0);
    let token = LoopToken::new();
    let remote = token.clone();
    assert_eq!(run_frames(&mut ctrl, &mut scene, &token, 3), 3);
    remote.cancel();
    assert!(token.is_cancelled());
    assert_eq!(run_frames(&mut ctrl, &mut scene, &token, 100), 0);
}
