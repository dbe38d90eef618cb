use maplet_symbolizer::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

// End-to-end placement tests: a real map view, a path geometry and a canvas
// layer driving the point symbolizer the way a frame's draw pass does.

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// 512x512 view centered on (0, 0) at zoom 4, which is also the max native zoom
fn view() -> MapView {
    let options = MapViewOptions::default()
        .with_size(512.0, 512.0)
        .with_max_native_zoom(4);
    let mut view = MapView::new(options).unwrap();
    view.set_view(LatLng::new(0.0, 0.0), 4.0);
    view
}

fn path() -> PathPlacement {
    PathPlacement::line_string(vec![
        Point::new(2048.0, 2048.0),
        Point::new(2148.0, 2048.0),
        Point::new(2148.0, 2148.0),
    ])
}

fn layer(view: &MapView) -> CanvasLayer {
    let mut layer = CanvasLayer::new("markers".into());
    layer.prepare_frame(view, Point::new(1802.0, 1782.0));
    layer
}

#[test]
fn test_view_center_is_canvas_center() {
    init();
    let view = view();
    assert_eq!(view.center(), Point::new(2048.0, 2048.0));
    assert_eq!(
        view.point_to_container(view.center(), 4.0, 0.0),
        Point::new(256.0, 256.0)
    );
}

#[test]
fn test_vertex_markers_are_layer_relative() {
    init();
    let view = view();
    let geometry = path();
    let layer = layer(&view);
    let symbol = SymbolConfig::new()
        .with_offset(0.0, -5.0)
        .with_placement(PlacementMode::Vertex);

    let symbolizer = PointSymbolizer::new(symbol, &geometry)
        .with_map(&view)
        .with_layer(&layer)
        .with_sprite_flag(&layer);

    assert_eq!(layer.surface_origin().unwrap(), Point::new(10.0, -10.0));
    assert_eq!(
        symbolizer.container_points(false).unwrap(),
        vec![
            Point::new(246.0, 261.0),
            Point::new(346.0, 261.0),
            Point::new(346.0, 361.0),
        ]
    );
}

#[test]
fn test_vertex_rotation_follows_path() {
    init();
    let view = view();
    let geometry = path();
    let symbol = SymbolConfig::new().with_placement(PlacementMode::Vertex);
    let symbolizer = PointSymbolizer::new(symbol, &geometry).with_map(&view);

    let rotations: Vec<f64> = (0..3)
        .map(|i| symbolizer.rotation_at(i).unwrap().unwrap())
        .collect();
    assert!(approx(rotations[0], 0.0));
    assert!(approx(rotations[1], FRAC_PI_4));
    assert!(approx(rotations[2], FRAC_PI_2));
}

#[test]
fn test_rotation_tracks_map_bearing_only_while_transforming() {
    init();
    let mut view = view();
    view.set_bearing(90.0);
    let geometry = path();
    let symbol = SymbolConfig::new().with_placement(PlacementMode::VertexFirst);

    {
        let symbolizer = PointSymbolizer::new(symbol.clone(), &geometry).with_map(&view);
        let settled = symbolizer.rotation_at(0).unwrap().unwrap();
        assert!(approx(settled, 0.0));
    }

    view.begin_gesture();
    let symbolizer = PointSymbolizer::new(symbol, &geometry).with_map(&view);
    let during = symbolizer.rotation_at(0).unwrap().unwrap();
    assert!(approx(during, FRAC_PI_2));
}

#[test]
fn test_sprite_layer_skips_projection() {
    init();
    let view = view();
    let geometry = PathPlacement::multi_point(vec![Point::new(3.0, 4.0), Point::new(5.0, 6.0)]);
    let mut layer = CanvasLayer::new("sprites".into());
    layer.set_spriting(true);

    // The layer has no frame yet; sprite mode must not ask for its origin.
    let symbolizer = PointSymbolizer::new(SymbolConfig::new().with_offset(9.0, 9.0), &geometry)
        .with_map(&view)
        .with_layer(&layer)
        .with_sprite_flag(&layer);

    assert_eq!(
        symbolizer.container_points(false).unwrap(),
        vec![Point::new(3.0, 4.0), Point::new(5.0, 6.0)]
    );
}

#[test]
fn test_extent_at_current_zoom() {
    init();
    let mut view = view();
    view.set_zoom(3.0);
    let geometry = path();
    let symbol = SymbolConfig::new().with_placement(PlacementMode::Vertex);
    let symbolizer = PointSymbolizer::new(symbol, &geometry).with_map(&view);

    let extent = symbolizer.get_2d_extent().unwrap();
    assert_eq!(extent, Extent::from_coords(1024.0, 1024.0, 1074.0, 1074.0));
}

#[test]
fn test_extent_of_degenerate_line_fails() {
    init();
    let view = view();
    let geometry = PathPlacement::line_string(vec![Point::new(1.0, 1.0)]);
    let symbol = SymbolConfig::new().with_placement(PlacementMode::Line);
    let symbolizer = PointSymbolizer::new(symbol, &geometry).with_map(&view);

    assert!(matches!(
        symbolizer.get_2d_extent(),
        Err(MapError::EmptyPlacement(PlacementMode::Line))
    ));
}

#[test]
fn test_geographic_path_round_trip() {
    init();
    let view = view();
    let geometry = PathPlacement::from_lat_lngs(
        &view,
        PathKind::LineString,
        &[LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)],
    );
    let layer = {
        let mut layer = CanvasLayer::new("geo".into());
        layer.prepare_frame(&view, Point::new(1792.0, 1792.0));
        layer
    };
    let symbol = SymbolConfig::new().with_placement(PlacementMode::VertexFirst);
    let symbolizer = PointSymbolizer::new(symbol, &geometry)
        .with_map(&view)
        .with_layer(&layer);

    let points = symbolizer.container_points(true).unwrap();
    assert!(approx(points[0].x, 256.0));
    assert!(approx(points[0].y, 256.0));
    // Heading east along the equator
    assert!(approx(symbolizer.rotation_at(0).unwrap().unwrap(), 0.0));
}

#[test]
fn test_marker_pass_from_json_symbol() {
    init();
    let view = view();
    let geometry = path().with_altitude(4.0);
    let layer = layer(&view);
    let symbol = SymbolConfig::from_json(
        r#"{ "markerDx": 2, "markerDy": "auto", "markerRotation": 0, "markerPlacement": "line" }"#,
    )
    .unwrap();

    let markers = MarkerSymbolizer::new(
        PointSymbolizer::new(symbol, &geometry)
            .with_map(&view)
            .with_layer(&layer),
    );
    let mut canvas = RecordingCanvas::new();
    let mut anchors = Vec::new();

    let drawn = markers
        .symbolize(&mut canvas, |canvas, anchor| {
            canvas.translate(-1.0, -1.0);
            anchors.push(anchor);
            Ok(())
        })
        .unwrap();

    assert_eq!(drawn, 2);
    assert_eq!(canvas.depth(), 0);
    assert_eq!(canvas.max_depth(), 1);
    assert_eq!(anchors[0].position, Point::new(2.0, 0.0));
    assert!(approx(anchors[1].rotation.unwrap(), FRAC_PI_2));

    // Segment midpoint (2098, 2048) lifted by 4px, shifted by dx and the layer
    // corner, minus the offset translated back out.
    assert_eq!(
        canvas.commands[..3],
        [
            CanvasCommand::Save,
            CanvasCommand::Translate(Point::new(296.0, 262.0)),
            CanvasCommand::Rotate(0.0),
        ]
    );
    let saves = canvas
        .commands
        .iter()
        .filter(|c| matches!(c, CanvasCommand::Save))
        .count();
    let restores = canvas
        .commands
        .iter()
        .filter(|c| matches!(c, CanvasCommand::Restore))
        .count();
    assert_eq!(saves, restores);
}
