#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

const KINDS: [ShapeKind; 14] = ShapeKind::KNOWN;

fn desc(kind: ShapeKind, theme: Theme) -> ShapeDescriptor {
    let mut d = ShapeDescriptor::new("shape-1234", kind, 120.0, 80.0);
    d.theme = theme;
    d.stroke_width = 3.0;
    if matches!(kind, ShapeKind::Brush | ShapeKind::Line) {
        d.points = vec![Point::new(0.0, 0.0), Point::new(40.0, 30.0), Point::new(90.0, 10.0)];
    }
    d
}

fn line(len: f64, stroke_width: f64, theme: Theme) -> ShapeDescriptor {
    ShapeDescriptor {
        points: vec![Point::new(0.0, 0.0), Point::new(len, 0.0)],
        stroke_width,
        theme,
        ..ShapeDescriptor::new("7", ShapeKind::Line, len, 0.0)
    }
}

// =============================================================
// Theme / ShapeKind parsing
// =============================================================

#[test]
fn theme_names_round_trip() {
    for theme in Theme::ALL {
        assert_eq!(Theme::parse(theme.as_str()), theme);
    }
}

#[test]
fn unknown_theme_selects_default() {
    assert_eq!(Theme::parse("sparkle"), Theme::Default);
    assert_eq!(Theme::parse(""), Theme::Default);
}

#[test]
fn unknown_ruled_theme_selects_rough() {
    assert_eq!(Theme::parse_ruled("sparkle"), Theme::Rough);
    assert_eq!(Theme::parse_ruled("glow"), Theme::Glow);
}

#[test]
fn theme_serializes_as_identifier() {
    let raw = serde_json::to_string(&Theme::MultiStrokes).unwrap_or_default();
    assert_eq!(raw, "\"multi-strokes\"");
    let back: Theme = serde_json::from_str("\"candy\"").unwrap_or_default();
    assert_eq!(back, Theme::Candy);
}

#[test]
fn shape_kind_parses_kebab_case() {
    assert_eq!(ShapeKind::parse("speech-bubble"), ShapeKind::SpeechBubble);
    assert_eq!(ShapeKind::parse("hexagram"), ShapeKind::Unsupported);
}

#[test]
fn descriptor_deserializes_with_defaults() {
    let raw = r#"{"id":"42","type":"star","width":10,"height":20,"theme":"glow"}"#;
    let d: ShapeDescriptor = serde_json::from_str(raw).unwrap_or_default();
    assert_eq!(d.kind, ShapeKind::Star);
    assert_eq!(d.theme, Theme::Glow);
    assert_eq!(d.stroke_color, DEFAULT_STROKE_COLOR);
    assert_eq!(d.stroke_width, 1.0);
    assert_eq!(d.height, 20.0);
}

#[test]
fn descriptor_with_unknown_type_is_unsupported() {
    let d: ShapeDescriptor = serde_json::from_str(r#"{"id":"1","type":"blob"}"#).unwrap_or_default();
    assert_eq!(d.kind, ShapeKind::Unsupported);
}

// =============================================================
// from_props
// =============================================================

#[test]
fn from_props_reads_flat_points_and_styling() {
    let props = json!({
        "strokeColor": "#112233",
        "strokeWidth": 4,
        "fillOpacity": 0.5,
        "theme": "candy",
        "candyRandomness": true,
        "candyIntensity": "strong",
        "points": [0, 0, 10, 5, 20],
        "zigzagSize": 9
    });
    let d = ShapeDescriptor::from_props("99", "brush", 20.0, 5.0, &props);
    assert_eq!(d.kind, ShapeKind::Brush);
    assert_eq!(d.stroke_color, "#112233");
    assert_eq!(d.stroke_width, 4.0);
    assert_eq!(d.fill_opacity, 0.5);
    assert_eq!(d.theme, Theme::Candy);
    assert_eq!(d.points, vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)]);
    assert_eq!(d.candy, CandyOptions { randomness: true, intensity: CandyIntensity::Strong });
    assert_eq!(d.zigzag_size, Some(9.0));
    assert_eq!(d.zigzag_thickness, None);
}

#[test]
fn from_props_defaults_match_editor_defaults() {
    let d = ShapeDescriptor::from_props("1", "rect", 10.0, 10.0, &json!({}));
    assert_eq!(d.stroke_color, "#1F1A17");
    assert_eq!(d.fill_color, "#D94B4B");
    assert_eq!(d.stroke_width, 1.0);
    assert_eq!(d.theme, Theme::Default);
    assert!(d.points.is_empty());
}

#[test]
fn from_props_accepts_point_objects() {
    let props = json!({ "points": [{ "x": 1, "y": 2 }, { "x": 3, "y": 4 }] });
    let d = ShapeDescriptor::from_props("1", "line", 0.0, 0.0, &props);
    assert_eq!(d.points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
}

// =============================================================
// Cross-theme properties
// =============================================================

#[test]
fn every_theme_is_deterministic() {
    for theme in Theme::ALL {
        for kind in KINDS {
            let d = desc(kind, theme);
            assert_eq!(generate_path(&d, 1.0), generate_path(&d, 1.0), "{theme:?} {kind:?}");
        }
    }
}

#[test]
fn every_theme_draws_every_known_kind() {
    for theme in Theme::ALL {
        for kind in KINDS {
            assert!(!generate_path(&desc(kind, theme), 1.0).is_empty(), "{theme:?} {kind:?}");
        }
    }
}

#[test]
fn unsupported_kind_is_empty_for_every_theme() {
    for theme in Theme::ALL {
        assert_eq!(generate_path(&desc(ShapeKind::Unsupported, theme), 1.0), "");
    }
}

#[test]
fn fill_color_does_not_affect_geometry() {
    for theme in Theme::ALL {
        for kind in KINDS {
            let a = desc(kind, theme);
            let b = ShapeDescriptor { fill_color: "#00FF00".to_owned(), ..a.clone() };
            assert_eq!(generate_path(&a, 1.0), generate_path(&b, 1.0), "{theme:?} {kind:?}");
        }
    }
}

#[test]
fn non_finite_size_yields_empty_path() {
    let d = ShapeDescriptor::new("1", ShapeKind::Rect, f64::NAN, 10.0);
    assert_eq!(generate_path(&d, 1.0), "");
}

#[test]
fn open_shapes_are_not_filled() {
    assert!(stroke_props(&desc(ShapeKind::Line, Theme::Default), 1.0).fill.is_none());
    assert!(stroke_props(&desc(ShapeKind::Brush, Theme::Rough), 1.0).fill.is_none());
    assert_eq!(stroke_props(&desc(ShapeKind::Rect, Theme::Default), 1.0).fill.as_deref(), Some("#D94B4B"));
}

#[test]
fn hairline_strokes_get_a_screen_space_floor() {
    let d = ShapeDescriptor { stroke_width: 0.1, ..ShapeDescriptor::new("1", ShapeKind::Rect, 10.0, 10.0) };
    assert_eq!(stroke_props(&d, 1.0).stroke_width, 0.5);
    assert_eq!(stroke_props(&d, 0.25).stroke_width, 2.0);
    assert_eq!(stroke_props(&d, f64::NAN).stroke_width, 0.5);
    assert_eq!(stroke_props(&d, 0.0).stroke_width, 0.5);
}

// =============================================================
// Default theme
// =============================================================

#[test]
fn default_rect_is_exact() {
    let d = ShapeDescriptor::new("1", ShapeKind::Rect, 100.0, 50.0);
    assert_eq!(generate_path(&d, 1.0), "M 0 0 L 100 0 L 100 50 L 0 50 Z");
}

#[test]
fn default_rounded_rect_uses_corner_arcs() {
    let d = ShapeDescriptor { corner_radius: Some(10.0), ..ShapeDescriptor::new("1", ShapeKind::Rect, 100.0, 50.0) };
    assert_eq!(
        generate_path(&d, 1.0),
        "M 10 0 L 90 0 A 10 10 0 0 1 100 10 L 100 40 A 10 10 0 0 1 90 50 \
         L 10 50 A 10 10 0 0 1 0 40 L 0 10 A 10 10 0 0 1 10 0 Z"
    );
}

#[test]
fn default_circle_is_two_arcs() {
    let d = ShapeDescriptor::new("1", ShapeKind::Circle, 40.0, 20.0);
    assert_eq!(generate_path(&d, 1.0), "M 0 10 A 20 10 0 1 0 40 10 A 20 10 0 1 0 0 10 Z");
}

#[test]
fn default_brush_is_literal_polyline() {
    let d = desc(ShapeKind::Brush, Theme::Default);
    assert_eq!(generate_path(&d, 1.0), "M 0 0 L 40 30 L 90 10");
}

#[test]
fn default_triangle_has_centered_apex() {
    let d = ShapeDescriptor::new("1", ShapeKind::Triangle, 60.0, 30.0);
    assert_eq!(generate_path(&d, 1.0), "M 30 0 L 60 30 L 0 30 Z");
}

// =============================================================
// Rough
// =============================================================

#[test]
fn rough_draws_each_edge_twice() {
    let d = desc(ShapeKind::Rect, Theme::Rough);
    let path = generate_path(&d, 1.0);
    // One fill polygon, then two cubic passes per edge.
    assert_eq!(path.matches('M').count(), 9);
    assert_eq!(path.matches('C').count(), 8);
}

#[test]
fn rough_filled_shapes_start_with_closed_region() {
    for kind in [ShapeKind::Rect, ShapeKind::Triangle, ShapeKind::Polygon] {
        let d = desc(kind, Theme::Rough);
        let path = generate_path(&d, 1.0);
        let first = path.split('M').nth(1).unwrap_or_default();
        assert!(first.trim_end().ends_with('Z'), "{kind:?}: {path}");
        assert!(!first.contains('C'), "{kind:?}: {path}");
        assert_eq!(stroke_props(&d, 1.0).fill.as_deref(), Some(d.fill_color.as_str()));
    }
}

#[test]
fn rough_lines_have_no_fill_region() {
    let path = generate_path(&line(100.0, 1.0, Theme::Rough), 1.0);
    assert!(!path.contains('Z'));
}

#[test]
fn rough_varies_with_id() {
    let a = desc(ShapeKind::Rect, Theme::Rough);
    let b = ShapeDescriptor { id: "shape-5678".to_owned(), ..a.clone() };
    assert_ne!(generate_path(&a, 1.0), generate_path(&b, 1.0));
}

#[test]
fn rough_with_zero_roughness_is_straight() {
    let d = ShapeDescriptor { roughness: Some(0.0), ..line(10.0, 1.0, Theme::Rough) };
    assert_eq!(generate_path(&d, 1.0), "M 0 0 C 3.5 0 7 0 10 0 M 0 0 C 3.5 0 7 0 10 0");
}

#[test]
fn rough_brush_with_one_point_falls_back_to_default() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let rough = ShapeDescriptor {
        points: vec![Point::new(5.0, 5.0)],
        theme: Theme::Rough,
        ..ShapeDescriptor::new("1", ShapeKind::Brush, 10.0, 10.0)
    };
    let default = ShapeDescriptor { theme: Theme::Default, ..rough.clone() };
    assert_eq!(generate_path(&rough, 1.0), "M 5 5");
    assert_eq!(generate_path(&rough, 1.0), generate_path(&default, 1.0));
}

#[test]
fn rough_props_use_round_joins() {
    let props = stroke_props(&desc(ShapeKind::Rect, Theme::Rough), 1.0);
    assert_eq!(props.line_cap, LineCap::Round);
    assert_eq!(props.line_join, LineJoin::Round);
}

// =============================================================
// Glow / multi-strokes
// =============================================================

#[test]
fn glow_doubles_width_and_adds_shadow() {
    let d = desc(ShapeKind::Circle, Theme::Glow);
    let props = stroke_props(&d, 1.0);
    assert_eq!(props.stroke_width, 6.0);
    assert!((props.stroke_opacity - 0.6).abs() < 1e-12);
    assert_eq!(props.line_cap, LineCap::Round);
    assert_eq!(props.line_join, LineJoin::Round);
    let Some(shadow) = props.shadow else {
        panic!("glow must carry a shadow");
    };
    assert_eq!(shadow.color, d.stroke_color);
    assert_eq!(shadow.blur, 6.0);
    assert_eq!(shadow.opacity, 0.4);
}

#[test]
fn glow_opacity_ignores_descriptor_opacity() {
    let d = ShapeDescriptor { stroke_opacity: 0.5, ..desc(ShapeKind::Rect, Theme::Glow) };
    assert_eq!(stroke_props(&d, 1.0).stroke_opacity, 0.6);
}

#[test]
fn glow_keeps_exact_geometry() {
    let glow = desc(ShapeKind::Heart, Theme::Glow);
    let exact = desc(ShapeKind::Heart, Theme::Default);
    assert_eq!(generate_path(&glow, 1.0), generate_path(&exact, 1.0));
}

#[test]
fn multi_strokes_adds_wider_outline() {
    let props = stroke_props(&desc(ShapeKind::Star, Theme::MultiStrokes), 1.0);
    assert_eq!(props.stroke_width, 3.0);
    assert!(props.fill.is_some());
    let Some(outline) = props.outline else {
        panic!("multi-strokes must carry an outline");
    };
    assert_eq!(outline.width, 4.5);
}

// =============================================================
// Candy
// =============================================================

#[test]
fn candy_open_count_follows_spacing() {
    // Diameter 1.5, spacing 3: floor(30 / 3) + 1 dots.
    let path = generate_path(&line(30.0, 2.0, Theme::Candy), 1.0);
    assert_eq!(path.matches('M').count(), 11);
    assert!(path.starts_with("M -0.75 0 A 0.75 0.75"));
}

#[test]
fn candy_closed_count_spreads_evenly() {
    let d = ShapeDescriptor { stroke_width: 2.0, theme: Theme::Candy, ..ShapeDescriptor::new("1", ShapeKind::Rect, 30.0, 30.0) };
    assert_eq!(generate_path(&d, 1.0).matches('M').count(), 40);
}

#[test]
fn candy_count_helper() {
    assert_eq!(candy::dot_count(30.0, 3.0, false), 11);
    assert_eq!(candy::dot_count(1.0, 3.0, false), 1);
    assert_eq!(candy::dot_count(1.0, 3.0, true), 1);
    assert_eq!(candy::dot_count(120.0, 3.0, true), 40);
}

#[test]
fn candy_without_randomness_ignores_seed() {
    let a = line(30.0, 2.0, Theme::Candy);
    let b = ShapeDescriptor { id: "8".to_owned(), ..a.clone() };
    assert_eq!(generate_path(&a, 1.0), generate_path(&b, 1.0));
}

#[test]
fn candy_randomness_changes_sizes_not_count() {
    let plain = line(30.0, 2.0, Theme::Candy);
    let random = ShapeDescriptor {
        candy: CandyOptions { randomness: true, intensity: CandyIntensity::Strong },
        ..plain.clone()
    };
    let (p, r) = (generate_path(&plain, 1.0), generate_path(&random, 1.0));
    assert_ne!(p, r);
    assert_eq!(p.matches('M').count(), r.matches('M').count());
}

#[test]
fn candy_fills_with_stroke_color() {
    let props = stroke_props(&desc(ShapeKind::Circle, Theme::Candy), 1.0);
    assert!(props.stroke.is_none());
    assert_eq!(props.fill.as_deref(), Some(DEFAULT_STROKE_COLOR));
}

#[test]
fn candy_icons_use_default_theme() {
    let candy = desc(ShapeKind::Cloud, Theme::Candy);
    let exact = desc(ShapeKind::Cloud, Theme::Default);
    assert_eq!(generate_path(&candy, 1.0), generate_path(&exact, 1.0));
    assert_eq!(stroke_props(&candy, 1.0), stroke_props(&exact, 1.0));
}

#[test]
fn candy_zero_stroke_draws_nothing() {
    assert_eq!(generate_path(&line(30.0, 0.0, Theme::Candy), 1.0), "");
}

// =============================================================
// Zigzag
// =============================================================

#[test]
fn zigzag_open_line_alternates_one_side() {
    // Tooth size max(4 * 1, 6) = 6, thickness 1.5.
    let path = generate_path(&line(60.0, 1.0, Theme::Zigzag), 1.0);
    assert!(path.starts_with("M 0 0 L 6 1.5 L 12 0 L 18 1.5"));
    assert_eq!(path.matches('L').count(), 10);
}

#[test]
fn zigzag_closed_uses_even_count() {
    let d = ShapeDescriptor { theme: Theme::Zigzag, ..ShapeDescriptor::new("1", ShapeKind::Rect, 40.0, 40.0) };
    let path = generate_path(&d, 1.0);
    // ceil(160 / 6) = 27 rounds up to 28 vertices.
    assert_eq!(path.matches('L').count(), 27);
    assert!(path.ends_with('Z'));
}

#[test]
fn zigzag_teeth_point_outward() {
    let d = ShapeDescriptor { theme: Theme::Zigzag, ..ShapeDescriptor::new("1", ShapeKind::Rect, 40.0, 40.0) };
    // Second vertex sits on the top edge, pushed up out of the box.
    assert!(generate_path(&d, 1.0).contains("L 5.71 -1.5"));
}

#[test]
fn zigzag_point_count_helper() {
    assert_eq!(zigzag::point_count(160.0, 6.0, true), 28);
    assert_eq!(zigzag::point_count(1.0, 6.0, true), 4);
    assert_eq!(zigzag::point_count(1.0, 6.0, false), 2);
    assert_eq!(zigzag::point_count(60.0, 6.0, false), 10);
}

#[test]
fn zigzag_size_override_changes_path() {
    let d = line(60.0, 1.0, Theme::Zigzag);
    let bigger = ShapeDescriptor { zigzag_size: Some(12.0), ..d.clone() };
    assert_eq!(generate_path(&bigger, 1.0).matches('L').count(), 5);
}

#[test]
fn zigzag_reads_config() {
    let mut config = RenderConfig::default();
    config.zigzag.min_size = 12.0;
    let d = line(60.0, 1.0, Theme::Zigzag);
    assert_eq!(generate_path_with(&d, 1.0, &config).matches('L').count(), 5);
}

#[test]
fn zigzag_props_use_miter_join() {
    let props = stroke_props(&desc(ShapeKind::Polygon, Theme::Zigzag), 1.0);
    assert_eq!(props.line_join, LineJoin::Miter);
}

// =============================================================
// Wobbly
// =============================================================

#[test]
fn wobbly_rect_is_one_ribbon_per_edge() {
    let path = generate_path(&desc(ShapeKind::Rect, Theme::Wobbly), 1.0);
    assert_eq!(path.matches('M').count(), 4);
    assert_eq!(path.matches('Z').count(), 4);
}

#[test]
fn wobbly_circle_is_four_ribbons() {
    let path = generate_path(&desc(ShapeKind::Circle, Theme::Wobbly), 1.0);
    assert_eq!(path.matches('M').count(), 4);
}

#[test]
fn wobbly_triangle_is_three_ribbons() {
    let path = generate_path(&desc(ShapeKind::Triangle, Theme::Wobbly), 1.0);
    assert_eq!(path.matches('M').count(), 3);
}

#[test]
fn wobbly_line_is_one_ribbon() {
    let path = generate_path(&line(50.0, 4.0, Theme::Wobbly), 1.0);
    assert_eq!(path.matches('M').count(), 1);
    assert!(path.ends_with('Z'));
}

#[test]
fn wobbly_is_filled_with_stroke_color() {
    let props = stroke_props(&desc(ShapeKind::Rect, Theme::Wobbly), 1.0);
    assert!(props.stroke.is_none());
    assert_eq!(props.fill.as_deref(), Some(DEFAULT_STROKE_COLOR));
}

#[test]
fn wobbly_varies_with_seed() {
    let d = desc(ShapeKind::Rect, Theme::Wobbly);
    let config = RenderConfig::default();
    assert_ne!(generate_path_seeded(&d, 1.0, 1, &config), generate_path_seeded(&d, 1.0, 2, &config));
}

// =============================================================
// Fallback props
// =============================================================

#[test]
fn failed_theme_paints_with_default_props() {
    for theme in [Theme::Candy, Theme::Wobbly, Theme::Zigzag] {
        let d = ShapeDescriptor {
            points: vec![Point::new(5.0, 5.0)],
            theme,
            ..ShapeDescriptor::new("1", ShapeKind::Brush, 10.0, 10.0)
        };
        let default = ShapeDescriptor { theme: Theme::Default, ..d.clone() };
        assert_eq!(generate_path(&d, 1.0), "M 5 5");
        let props = stroke_props(&d, 1.0);
        assert_eq!(props, stroke_props(&default, 1.0), "{theme:?}");
        assert_eq!(props.stroke.as_deref(), Some(d.stroke_color.as_str()));
    }
}

#[test]
fn successful_theme_keeps_its_props() {
    let props = stroke_props(&desc(ShapeKind::Brush, Theme::Candy), 1.0);
    assert!(props.stroke.is_none());
    assert!(props.fill.is_some());
}
