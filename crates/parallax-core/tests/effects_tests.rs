use parallax_core::*;

const VW: f64 = 1000.0;

// Section centred at `center` with the given width.
fn rect_at(center: f64, width: f64) -> SectionRect {
    SectionRect::new(center - width / 2.0, width)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn hero_image_and_background_image_shift_independently() {
    let section = Section::new(SectionKind::Plain, 1000.0).with_media(SectionMedia {
        hero_image: true,
        background_image: true,
    });
    // centre 250px right of viewport centre -> distance 0.25
    let effect = section_effect(&section, &rect_at(750.0, 1000.0), VW);

    match effect.hero_image {
        Some(Transform::TranslateXScale { x, scale }) => {
            assert!(approx(x, 10.0));
            assert!(approx(scale, 1.0075));
        }
        other => panic!("unexpected hero transform {other:?}"),
    }
    match effect.background_image {
        Some(Transform::TranslateXScale { x, scale }) => {
            assert!(approx(x, 8.75));
            assert!(approx(scale, 1.00625));
        }
        other => panic!("unexpected background transform {other:?}"),
    }
    // plain sections keep their own transform and shadow
    assert_eq!(effect.section, None);
    assert!(!effect.clear_shadow);
}

#[test]
fn missing_media_is_skipped() {
    let section = Section::new(SectionKind::Plain, 1000.0);
    let effect = section_effect(&section, &rect_at(750.0, 1000.0), VW);
    assert_eq!(effect.hero_image, None);
    assert_eq!(effect.background_image, None);
}

#[test]
fn overlay_sections_shift_scale_and_drop_shadow() {
    for kind in [SectionKind::Text, SectionKind::White, SectionKind::Final] {
        let section = Section::new(kind, 1000.0);
        let effect = section_effect(&section, &rect_at(0.0, 1000.0), VW);
        // distance -0.5
        match effect.section {
            Some(Transform::TranslateXScale { x, scale }) => {
                assert!(approx(x, -40.0), "{kind:?}");
                assert!(approx(scale, 1.01), "{kind:?}");
            }
            other => panic!("{kind:?}: unexpected transform {other:?}"),
        }
        assert!(effect.clear_shadow);
    }
}

#[test]
fn image_background_section_shifts_without_scale() {
    let section = Section::new(SectionKind::ImageBackground, 1000.0);
    let effect = section_effect(&section, &rect_at(1500.0, 1000.0), VW);
    assert_eq!(effect.section, Some(Transform::TranslateX(20.0)));
    assert!(effect.clear_shadow);
}

#[test]
fn hero_section_is_pinned() {
    let section = Section::new(SectionKind::Hero, 1000.0)
        .with_media(SectionMedia {
            hero_image: true,
            background_image: false,
        })
        .with_text_count(3);
    let effect = section_effect(&section, &rect_at(1200.0, 1000.0), VW);
    assert_eq!(effect.section, Some(Transform::Identity));
    assert!(effect.clear_shadow);
    assert_eq!(effect.text, TextEffect::Untouched);
    // the hero image still drifts
    assert!(effect.hero_image.is_some());
}

#[test]
fn text_drifts_more_for_later_elements() {
    let section = Section::new(SectionKind::Text, 1000.0).with_text_count(3);
    let effect = section_effect(&section, &rect_at(1500.0, 1000.0), VW);
    // distance 1.0
    let TextEffect::Parallax(styles) = effect.text else {
        panic!("expected parallax text");
    };
    let shifts: Vec<f64> = styles.iter().map(|s| s.translate_y).collect();
    assert_eq!(shifts, vec![3.0, 3.5, 4.0]);
    for s in &styles {
        assert!(approx(s.opacity, 0.85));
    }
}

#[test]
fn text_opacity_never_drops_below_floor() {
    let section = Section::new(SectionKind::Plain, 1000.0).with_text_count(1);
    let effect = section_effect(&section, &rect_at(10_500.0, 1000.0), VW);
    let TextEffect::Parallax(styles) = effect.text else {
        panic!("expected parallax text");
    };
    assert_eq!(styles[0].opacity, 0.7);
    assert!(styles[0].translate_y > 0.0);
}

#[test]
fn white_and_final_reset_text() {
    for kind in [SectionKind::White, SectionKind::Final] {
        let section = Section::new(kind, 1000.0).with_text_count(4);
        let effect = section_effect(&section, &rect_at(900.0, 1000.0), VW);
        assert_eq!(effect.text, TextEffect::Reset, "{kind:?}");
    }
}

#[test]
fn centred_section_has_zero_offsets_everywhere() {
    let section = Section::new(SectionKind::Text, 1000.0)
        .with_media(SectionMedia {
            hero_image: true,
            background_image: true,
        })
        .with_text_count(2);
    let effect = section_effect(&section, &rect_at(500.0, 1000.0), VW);
    let zero = Some(Transform::TranslateXScale { x: 0.0, scale: 1.0 });
    assert_eq!(effect.hero_image, zero);
    assert_eq!(effect.background_image, zero);
    assert_eq!(effect.section, zero);
    assert_eq!(
        effect.text,
        TextEffect::Parallax(vec![
            TextStyle {
                translate_y: 0.0,
                opacity: 1.0
            };
            2
        ])
    );
}

#[test]
fn layout_rects_match_visibility_rule() {
    let sections = vec![
        Section::new(SectionKind::Hero, 600.0),
        Section::new(SectionKind::Text, 600.0),
        Section::new(SectionKind::Final, 600.0),
    ];
    let rects = layout_rects(&sections, 700.0);
    let visible: Vec<bool> = rects.iter().map(|r| is_in_view(r, VW)).collect();
    assert_eq!(visible, vec![false, true, true]);
}
