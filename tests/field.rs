use glam::DVec2;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use voltage_wasm::draw::{fade, Command, CommandLog};
use voltage_wasm::shape;
use voltage_wasm::{ConfigError, Control, Extent, Field, FieldConfig, FrameLoop, LineStyle, PointerMode};

fn config(count: usize) -> FieldConfig {
    FieldConfig {
        count,
        ..FieldConfig::default()
    }
}

fn assert_inside(field: &Field) {
    let extent = field.extent();
    for (i, s) in field.shapes().iter().enumerate() {
        assert!(
            extent.contains(s.position, s.size),
            "shape {i} at {:?} (size {}) escaped {extent:?}",
            s.position,
            s.size
        );
    }
}

fn run_inside(mode: PointerMode) {
    let cfg = FieldConfig {
        pointer_mode: mode,
        ..config(40)
    };
    let mut field = Field::new(cfg, Extent::new(320.0, 240.0), 7).unwrap();
    field.set_pointer(160.0, 120.0);
    for step in 0..2_000 {
        if step == 1_000 {
            field.clear_pointer();
        }
        field.step();
        assert_inside(&field);
    }
}

#[test]
fn shapes_stay_inside_canvas() {
    run_inside(PointerMode::Repel);
}

#[test]
fn attracted_shapes_stay_inside_canvas() {
    run_inside(PointerMode::Attract);
}

#[test]
fn attraction_to_a_corner_keeps_shapes_inside() {
    let cfg = FieldConfig {
        pointer_mode: PointerMode::Attract,
        pointer_radius: 400.0,
        ..config(20)
    };
    let mut field = Field::new(cfg, Extent::new(300.0, 200.0), 13).unwrap();
    field.set_pointer(0.0, 0.0);
    for _ in 0..1_000 {
        field.step();
        assert_inside(&field);
    }
}

#[test]
fn new_rejects_invalid_config() {
    let inverted = FieldConfig {
        size_min: 5.0,
        size_max: 2.0,
        ..FieldConfig::default()
    };
    let err = Field::new(inverted, Extent::new(800.0, 600.0), 1).err();
    assert!(
        matches!(err, Some(ConfigError::EmptyRange { field: "size", .. })),
        "{err:?}"
    );

    let full_pulse = FieldConfig {
        pulse_factor: 1.0,
        ..FieldConfig::default()
    };
    assert!(Field::from_config(full_pulse, Extent::new(800.0, 600.0)).is_err());

    let unbounded = FieldConfig {
        speed: f64::INFINITY,
        ..FieldConfig::default()
    };
    assert!(Field::new(unbounded, Extent::new(800.0, 600.0), 1).is_err());
}

#[test]
fn size_stays_within_pulse_band() {
    let cfg = config(25);
    let pf = cfg.pulse_factor;
    let mut field = Field::new(cfg, Extent::new(800.0, 600.0), 3).unwrap();
    for _ in 0..500 {
        field.step();
        for s in field.shapes() {
            assert!(s.size > 0.0);
            assert!(s.size >= s.base_size * (1.0 - pf) - 1e-9);
            assert!(s.size <= s.base_size * (1.0 + pf) + 1e-9);
        }
    }
}

#[test]
fn flicker_recovers_monotonically() {
    let cfg = FieldConfig {
        count: 1,
        flicker_chance: 0.0,
        ..FieldConfig::default()
    };
    let field = Field::new(cfg, Extent::new(400.0, 400.0), 5).unwrap();
    // Pretend a dip just ended.
    let mut shape = field.shapes()[0].clone();
    shape.flicker = 0.2;
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut gap = (shape.flicker - 1.0).abs();
    for _ in 0..100 {
        shape.step(field.config(), field.extent(), None, &mut rng);
        let next = (shape.flicker - 1.0).abs();
        assert!(next <= gap);
        gap = next;
    }
    assert!(gap < 1e-6);
}

#[test]
fn resize_respawns_full_store_in_bounds() {
    let mut field = Field::new(config(30), Extent::new(1280.0, 720.0), 11).unwrap();
    for _ in 0..10 {
        field.step();
    }
    field.resize(Extent::new(400.0, 300.0));
    assert_eq!(field.shapes().len(), 30);
    assert_inside(&field);
    assert!(field.shapes().iter().all(|s| s.flicker == 1.0));
}

#[test]
fn seeded_run_is_reproducible() {
    let run = || {
        let mut field = Field::new(config(10), Extent::new(800.0, 600.0), 0x5eed).unwrap();
        for _ in 0..60 {
            field.step();
        }
        field
            .shapes()
            .iter()
            .map(|s| (s.position, s.size))
            .collect::<Vec<_>>()
    };
    let first = run();
    assert_eq!(first.len(), 10);
    assert_eq!(first, run());
}

#[test]
fn seed_replays_spawn_then_steps() {
    let cfg = config(10);
    let extent = Extent::new(800.0, 600.0);
    let mut field = Field::new(cfg.clone(), extent, 0x5eed).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut expected = shape::spawn(10, extent, &cfg, &mut rng);
    assert_eq!(field.shapes(), expected.as_slice());

    for _ in 0..60 {
        field.step();
        for s in &mut expected {
            s.step(&cfg, extent, None, &mut rng);
        }
    }
    assert_eq!(field.shapes(), expected.as_slice());
    assert_eq!(field.frame(), 60);
}

#[test]
fn configured_seed_matches_explicit_seed() {
    let extent = Extent::new(800.0, 600.0);
    let seeded = FieldConfig {
        seed: Some(0x5eed),
        ..config(10)
    };
    let mut from_config = Field::from_config(seeded, extent).unwrap();
    let mut explicit = Field::new(config(10), extent, 0x5eed).unwrap();
    for _ in 0..60 {
        from_config.step();
        explicit.step();
    }
    assert_eq!(from_config.shapes(), explicit.shapes());

    let other = FieldConfig {
        seed: Some(0x5eee),
        ..config(10)
    };
    let other = Field::from_config(other, extent).unwrap();
    let fresh = Field::new(config(10), extent, 0x5eed).unwrap();
    assert_ne!(other.shapes()[0].position, fresh.shapes()[0].position);
}

#[test]
fn rendering_does_not_disturb_simulation() {
    let cfg = FieldConfig {
        count: 12,
        line_style: LineStyle::Electric,
        ..FieldConfig::default()
    };
    let mut painted = Field::new(cfg.clone(), Extent::new(500.0, 500.0), 21).unwrap();
    let mut headless = Field::new(cfg, Extent::new(500.0, 500.0), 21).unwrap();
    let mut log = CommandLog::new();
    for _ in 0..30 {
        painted.step();
        painted.render(&mut log).unwrap();
        headless.step();
    }
    assert_eq!(painted.shapes(), headless.shapes());
}

#[test]
fn connection_lines_fade_with_distance() {
    let cfg = config(2);
    let mut field = Field::new(cfg.clone(), Extent::new(600.0, 600.0), 1).unwrap();
    let mut log = CommandLog::new();
    field.render(&mut log).unwrap();

    let [a, b] = field.shapes() else {
        panic!("expected two shapes");
    };
    let d = a.position.distance(b.position);
    let lines: Vec<_> = log.polylines().collect();
    if d < cfg.connection_distance {
        assert_eq!(lines.len(), 1);
        let (_, stroke) = lines[0];
        assert_eq!(stroke.alpha, fade(d, cfg.connection_distance, cfg.connection_opacity));
    } else {
        assert!(lines.is_empty());
    }
    assert!(matches!(log.commands[0], Command::Clear { width, height } if width == 600.0 && height == 600.0));
}

#[test]
fn pointer_lines_reach_nearby_shapes_only() {
    let cfg = FieldConfig {
        count: 20,
        connection_distance: 1e-3,
        ..FieldConfig::default()
    };
    let mut field = Field::new(cfg.clone(), Extent::new(900.0, 900.0), 4).unwrap();
    field.set_pointer(450.0, 450.0);
    let pointer = DVec2::new(450.0, 450.0);
    let near = field
        .shapes()
        .iter()
        .filter(|s| s.position.distance(pointer) < cfg.pointer_line_radius)
        .count();

    let mut log = CommandLog::new();
    field.render(&mut log).unwrap();
    let lines: Vec<_> = log.polylines().collect();
    assert_eq!(lines.len(), near);
    for (points, stroke) in lines {
        assert_eq!(points[0], pointer);
        assert_eq!(stroke.color, cfg.pointer_line_color.main());
        assert!(stroke.alpha > 0.0 && stroke.alpha <= cfg.pointer_line_opacity);
    }
}

#[test]
fn every_shape_paints_core_last() {
    let mut field = Field::new(config(3), Extent::new(300.0, 300.0), 8).unwrap();
    let mut log = CommandLog::new();
    field.render(&mut log).unwrap();
    // clear + 4 layers per shape, then any lines
    let layers = &log.commands[1..13];
    for chunk in layers.chunks(4) {
        match &chunk[3] {
            Command::Radial { stops, .. } => {
                assert_eq!(stops[0].color, voltage_wasm::palette::Rgb::WHITE)
            }
            other => panic!("expected core highlight, got {other:?}"),
        }
    }
}

#[test]
fn stopped_loop_does_not_advance() {
    let mut frames = FrameLoop::new(Field::new(config(5), Extent::new(200.0, 200.0), 2).unwrap());
    let handle = frames.handle();
    let mut log = CommandLog::new();

    assert_eq!(frames.frame(&mut log).unwrap(), Control::Continue);
    assert_eq!(frames.field().frame(), 1);

    handle.clone().stop();
    let before = frames.field().shapes().to_vec();
    assert_eq!(frames.frame(&mut log).unwrap(), Control::Stop);
    assert_eq!(frames.field().frame(), 1);
    assert_eq!(frames.field().shapes(), before.as_slice());
    assert!(handle.is_stopped());
}
