use super::*;

use rand::SeedableRng as _;
use rand::rngs::StdRng;

const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);
const GREEN: Rgba8 = Rgba8::new(0, 255, 0, 255);
const BLUE: Rgba8 = Rgba8::new(0, 0, 255, 255);
const YELLOW: Rgba8 = Rgba8::new(255, 255, 0, 255);

/// 4x4 texture with one solid color per 2x2 quadrant.
fn quadrant_texture() -> Texture {
    let mut img = image::RgbaImage::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            let c = match (x >= 2, y >= 2) {
                (false, false) => RED,
                (true, false) => GREEN,
                (false, true) => BLUE,
                (true, true) => YELLOW,
            };
            img.put_pixel(x, y, image::Rgba([c.r, c.g, c.b, c.a]));
        }
    }
    Texture::from_rgba8(img).unwrap()
}

fn solid_texture(size: u32, color: Rgba8) -> Texture {
    let img = image::RgbaImage::from_pixel(size, size, image::Rgba([color.r, color.g, color.b, color.a]));
    Texture::from_rgba8(img).unwrap()
}

#[test]
fn solved_state_reproduces_source_quadrants() {
    let mut rng = StdRng::seed_from_u64(42);
    let tex = quadrant_texture();
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();
    let mut frame = Frame::new(40, 40).unwrap();

    render(&mut mesh, 0.0, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Opaque).unwrap();

    let mut interior = 0;
    for y in 0..40 {
        for x in 0..40 {
            let px = frame.pixel(x, y);
            if px == Rgba8::WHITE || px == Rgba8::BLACK {
                continue;
            }
            // Sub-window scale is 16 with offset 0.75, so the source's left
            // half lands on columns < 20 (and likewise for rows).
            let expected = match (x >= 20, y >= 20) {
                (false, false) => RED,
                (true, false) => GREEN,
                (false, true) => BLUE,
                (true, true) => YELLOW,
            };
            assert_eq!(px, expected, "pixel ({x}, {y})");
            interior += 1;
        }
    }
    assert!(interior > 0, "no interior pixels were filled");
}

#[test]
fn render_is_idempotent_for_identical_state() {
    let mut rng = StdRng::seed_from_u64(7);
    let tex = quadrant_texture();
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();

    let mut frame = Frame::new(40, 40).unwrap();
    render(&mut mesh, 0.25, &mut frame, &tex, SamplingMode::Bilinear, AlphaMode::Opaque).unwrap();
    let first = frame.data().to_vec();

    frame.fill(Rgba8::WHITE);
    render(&mut mesh, 0.25, &mut frame, &tex, SamplingMode::Bilinear, AlphaMode::Opaque).unwrap();
    assert_eq!(frame.data(), &first[..]);
}

#[test]
fn progress_zero_parks_triangles_on_their_texture_centroids() {
    let mut rng = StdRng::seed_from_u64(11);
    let tex = quadrant_texture();
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();
    let mut frame = Frame::new(40, 40).unwrap();

    render(&mut mesh, 0.0, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Opaque).unwrap();

    for model in mesh.models() {
        let c = model.texture_triangle().centroid();
        let [a, b, cc] = model.current_triangle().vertices();
        let sx = f64::from(a.x + b.x + cc.x) / 3.0;
        let sy = f64::from(a.y + b.y + cc.y) / 3.0;
        assert!((sx - (c.x + 0.75) * 16.0).abs() < 2.5, "x centroid drift");
        assert!((sy - (c.y + 0.75) * 16.0).abs() < 2.5, "y centroid drift");
    }
}

#[test]
fn full_progress_lands_on_the_curve_start() {
    let mut rng = StdRng::seed_from_u64(13);
    let tex = solid_texture(8, RED);
    let mut mesh = Mesh::build(8, 8, 2, &mut rng).unwrap();
    let mut frame = Frame::new(400, 400).unwrap();

    render(&mut mesh, 1.0, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Opaque).unwrap();

    for model in mesh.models() {
        let start = model.curve().start();
        let [a, b, c] = model.current_triangle().vertices();
        let sx = f64::from(a.x + b.x + c.x) / 3.0;
        let sy = f64::from(a.y + b.y + c.y) / 3.0;
        assert!((sx - (start.x + 0.75) * 160.0).abs() < 2.5, "x centroid drift");
        assert!((sy - (start.y + 0.75) * 160.0).abs() < 2.5, "y centroid drift");
    }
}

#[test]
fn out_of_range_progress_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let tex = quadrant_texture();
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();
    let mut frame = Frame::new(40, 40).unwrap();
    let err = render(&mut mesh, 1.5, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Opaque)
        .unwrap_err();
    assert!(matches!(err, TrishardError::Validation(_)));
}

#[test]
fn undersized_frame_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let tex = quadrant_texture();
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();
    let mut frame = Frame::new(8, 8).unwrap();
    let err = render(&mut mesh, 0.0, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Opaque)
        .unwrap_err();
    assert!(matches!(err, TrishardError::Validation(_)));
}

#[test]
fn weighted_alpha_blends_against_the_white_canvas() {
    let mut rng = StdRng::seed_from_u64(21);
    let tex = solid_texture(4, Rgba8::new(100, 60, 220, 128));
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();
    let mut frame = Frame::new(40, 40).unwrap();

    render(&mut mesh, 0.0, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Weighted).unwrap();

    let w = 128.0 / 255.0;
    let mix = |s: u8| ((1.0 - w) * 255.0 + w * f64::from(s)) as u8;
    let expected = Rgba8::new(mix(100), mix(60), mix(220), 255);
    let mut interior = 0;
    for y in 0..40 {
        for x in 0..40 {
            let px = frame.pixel(x, y);
            if px == Rgba8::WHITE || px == Rgba8::BLACK {
                continue;
            }
            assert_eq!(px, expected, "pixel ({x}, {y})");
            interior += 1;
        }
    }
    assert!(interior > 0);

    // Half-weight pixels are not counted as fully applied.
    for model in mesh.models() {
        assert_eq!(model.stats().opaque, 0);
    }
}

#[test]
fn stats_count_borders_and_opaque_interiors() {
    let mut rng = StdRng::seed_from_u64(23);
    let tex = solid_texture(4, RED);
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();
    let mut frame = Frame::new(40, 40).unwrap();

    render(&mut mesh, 0.0, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Opaque).unwrap();

    for model in mesh.models() {
        let stats = model.stats();
        assert!(stats.border > 0);
        assert!(stats.total >= stats.border);
        // Opaque mode applies every interior pixel fully.
        assert_eq!(stats.opaque, stats.total - stats.border);
    }
}

#[test]
fn hit_test_matches_rendered_placements() {
    let mut rng = StdRng::seed_from_u64(29);
    let tex = quadrant_texture();
    let mut mesh = Mesh::build(4, 4, 2, &mut rng).unwrap();
    let mut frame = Frame::new(40, 40).unwrap();
    render(&mut mesh, 0.0, &mut frame, &tex, SamplingMode::Nearest, AlphaMode::Opaque).unwrap();

    // The sub-window spans roughly pixels 12..=28; its center is covered.
    let hit = mesh.hit_test(PointI::new(20, 20));
    assert!(hit.is_some());
    assert!(mesh.models()[hit.unwrap()].contains(PointI::new(20, 20)));
    assert_eq!(mesh.hit_test(PointI::new(2, 2)), None);
}

#[test]
fn edge_tracker_walks_vertical_edges() {
    let mut t = EdgeTracker::new(PointI::new(3, 0), PointI::new(3, 4));
    let mut descents = 0;
    while !t.at_end() {
        if t.step() {
            descents += 1;
        }
    }
    assert_eq!(descents, 4);
    assert_eq!((t.x, t.y), (3, 4));
}

#[test]
fn edge_tracker_walks_diagonals_one_scanline_at_a_time() {
    let mut t = EdgeTracker::new(PointI::new(0, 0), PointI::new(3, 3));
    let mut points = vec![(t.x, t.y)];
    while !t.at_end() {
        t.step();
        points.push((t.x, t.y));
    }
    assert_eq!(points, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn edge_tracker_walks_horizontal_runs_without_descending() {
    let mut t = EdgeTracker::new(PointI::new(0, 2), PointI::new(4, 2));
    let mut descents = 0;
    while !t.at_end() {
        if t.step() {
            descents += 1;
        }
    }
    assert_eq!(descents, 0);
    assert_eq!((t.x, t.y), (4, 2));
}
