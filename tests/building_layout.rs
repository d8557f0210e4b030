use wall_layout::{
    BuildingConfig, ElementKind, EngineConstants, Size, WallLayout, WallLayoutEngine, WallSide,
    WallSpec, assemble_building,
};

fn door_and_window_wall() -> WallSpec {
    WallSpec {
        length: 20,
        height: 3,
        door: Size::new(4, 2),
        window: Size::new(2, 1),
        window_spacing: 2,
        door_count: 1,
    }
}

fn assert_row_invariants(layout: &WallLayout, spec: &WallSpec, constants: &EngineConstants) {
    assert_eq!(layout.row_count(), spec.height as usize);

    for (index, row) in layout.rows().iter().enumerate() {
        let index = index as u32;
        for pair in row.windows(2) {
            assert!(pair[0].position < pair[1].position);
            assert!(pair[0].end() <= pair[1].position);
            assert!(pair[0].end() <= spec.length);
        }

        let doors = row.iter().filter(|e| e.kind == ElementKind::Door).count();
        assert!(doors <= spec.door_count as usize);
        if doors > 0 {
            assert!(index < spec.door.height);
        }

        let windows = row.iter().filter(|e| e.kind == ElementKind::Window).count();
        if windows > 0 {
            assert!(index >= constants.window_base());
            assert!(index < constants.window_base() + spec.window.height);
        }

        for element in row {
            let expected = match element.kind {
                ElementKind::Door => spec.door.width,
                ElementKind::Window => spec.window.width,
                ElementKind::Brick => constants.brick_unit(),
            };
            assert_eq!(element.width, expected);
        }
    }
}

#[test]
fn reference_wall_places_door_then_windows() {
    let spec = door_and_window_wall();
    let engine = WallLayoutEngine::default();
    let layout = engine.layout_wall(&spec);

    assert_row_invariants(&layout, &spec, engine.constants());

    let rows = layout.rows();
    let doors: Vec<_> = rows[0]
        .iter()
        .filter(|e| e.kind == ElementKind::Door)
        .collect();
    assert_eq!(doors.len(), 1);
    assert_eq!(doors[0].position, 4);
    assert_eq!(doors[0].width, 4);

    assert!(rows[0].iter().all(|e| e.kind != ElementKind::Window));
    assert!(rows[1].iter().all(|e| e.kind != ElementKind::Window));
    assert!(rows[2].iter().all(|e| e.kind != ElementKind::Door));
    for window in rows[2].iter().filter(|e| e.kind == ElementKind::Window) {
        assert_eq!((window.position as i64 - 1).rem_euclid(4), 0);
    }
}

#[test]
fn doorless_wall_is_brick_run() {
    let spec = WallSpec {
        length: 11,
        height: 2,
        door: Size::new(0, 0),
        window: Size::new(0, 0),
        window_spacing: 0,
        door_count: 0,
    };
    let layout = WallLayoutEngine::default().layout_wall(&spec);

    for row in layout.rows() {
        let positions: Vec<_> = row.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 2, 4, 6, 8, 10]);
        assert!(row.iter().all(|e| e.kind == ElementKind::Brick));
    }
    assert_eq!(layout.overshoot(), 1);
}

#[test]
fn invariants_hold_across_parameter_grid() {
    let engine = WallLayoutEngine::default();
    for length in [0, 1, 7, 16, 25] {
        for door in [Size::new(0, 0), Size::new(3, 2), Size::new(4, 5)] {
            for window in [Size::new(0, 2), Size::new(2, 2), Size::new(3, 1)] {
                for window_spacing in [0, 1, 2, 5] {
                    for door_count in [0, 1, 3] {
                        let spec = WallSpec {
                            length,
                            height: 6,
                            door,
                            window,
                            window_spacing,
                            door_count,
                        };
                        let layout = engine.layout_wall(&spec);
                        assert_row_invariants(&layout, &spec, engine.constants());
                        if !door.is_enabled() || door_count == 0 {
                            assert_eq!(layout.count(ElementKind::Door), 0);
                        }
                        if !window.is_enabled() {
                            assert_eq!(layout.count(ElementKind::Window), 0);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn building_from_json_document() {
    let config = BuildingConfig::from_json_str(
        r#"{
            "length": {"value": 32, "random": {"enabled": true, "strength": 0.25}},
            "width": 16,
            "height": 6,
            "window_size": [2, 2],
            "window_spacing": 4,
            "door_size": {"value": [4, 3]},
            "number_of_doors": 10,
            "primary_material": "3010"
        }"#,
    )
    .unwrap();

    let layout = assemble_building(&config).unwrap();
    assert_eq!(layout.quota.front, 3);
    assert_eq!(layout.quota.back, 3);
    assert_eq!(layout.quota.left, 2);
    assert_eq!(layout.quota.right, 1);
    assert_eq!(layout.quota.total(), 9);

    for side in WallSide::ALL {
        let wall = layout.wall(side).unwrap();
        let expected_length = if side.runs_along_length() { 32 } else { 16 };
        assert_eq!(wall.length, expected_length);
        assert_eq!(wall.row_count(), 6);
    }

    let again = assemble_building(&config).unwrap();
    assert_eq!(layout.to_json().unwrap(), again.to_json().unwrap());
    assert_eq!(layout.fingerprint().unwrap(), again.fingerprint().unwrap());
}
