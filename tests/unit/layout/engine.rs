use super::*;
use crate::{
    foundation::options::PosterOptions,
    params::derive::{FORMAT_VERSION, derive_params},
    stream::bytes::ByteStream,
};

fn cell(col: u32, row: u32, kind: ShapeKind) -> CellParams {
    CellParams {
        col,
        row,
        skip: false,
        kind,
        color: 0,
        jitter_x: 0.5,
        jitter_y: 0.5,
        scale: 0.5,
        rotation_deg: 0.0,
        opacity: 0.5,
        flip: false,
    }
}

fn hand_params(cells: u32, cell_params: Vec<CellParams>) -> PosterParams {
    PosterParams {
        version: FORMAT_VERSION,
        size: 100,
        margin: 0,
        cells,
        background: Rgb8::new(1, 2, 3),
        palette: vec![Rgb8::new(200, 0, 0), Rgb8::new(0, 200, 0)],
        cell_params,
        motif: None,
        bytes_consumed: 0,
    }
}

fn seeded(seed: &str, cells: u32, motif: bool) -> PosterParams {
    let opts = PosterOptions::default()
        .with_cells(cells)
        .with_motif(motif)
        .resolve()
        .unwrap();
    derive_params(&mut ByteStream::new(seed), &opts)
}

#[test]
fn centered_shapes_sit_in_the_middle_of_their_cell() {
    let params = hand_params(
        2,
        vec![
            cell(0, 0, ShapeKind::Circle),
            cell(1, 0, ShapeKind::Square),
            CellParams {
                skip: true,
                ..cell(0, 1, ShapeKind::Circle)
            },
            cell(1, 1, ShapeKind::Circle),
        ],
    );
    let drawing = layout_drawing(&params);
    assert_eq!(drawing.background, Rgb8::new(1, 2, 3));
    assert_eq!(drawing.elements.len(), 3);

    assert_eq!(
        drawing.elements[0],
        DrawElement::Circle {
            center: Point::new(25.0, 25.0),
            radius: 12.5,
            fill: Rgb8::new(200, 0, 0),
            opacity: Some(0.5),
        }
    );
    let DrawElement::Rect { rect, .. } = &drawing.elements[1] else {
        panic!("expected rect, got {:?}", drawing.elements[1]);
    };
    assert!((rect.center().x - 75.0).abs() < 1e-9);
    assert!((rect.width() - 12.5 * SQRT_2).abs() < 1e-9);
    // Skipped cell (0, 1) emits nothing; (1, 1) comes next.
    let DrawElement::Circle { center, .. } = &drawing.elements[2] else {
        panic!("expected circle");
    };
    assert_eq!(*center, Point::new(75.0, 75.0));
}

#[test]
fn diagonal_split_covers_cell_with_two_colors() {
    for flip in [false, true] {
        let params = hand_params(
            1,
            vec![CellParams {
                flip,
                color: 1,
                ..cell(0, 0, ShapeKind::DiagonalSplit)
            }],
        );
        let drawing = layout_drawing(&params);
        assert_eq!(drawing.elements.len(), 2);
        let fills = drawing
            .elements
            .iter()
            .map(|e| match e {
                DrawElement::Polygon { points, fill, .. } => {
                    assert_eq!(points.len(), 3);
                    *fill
                }
                other => panic!("unexpected element {other:?}"),
            })
            .collect::<Vec<_>>();
        // Second half wraps to the next palette entry.
        assert_eq!(fills, vec![Rgb8::new(0, 200, 0), Rgb8::new(200, 0, 0)]);
    }
}

#[test]
fn triangle_first_vertex_points_up_without_rotation() {
    let params = hand_params(1, vec![cell(0, 0, ShapeKind::Triangle)]);
    let drawing = layout_drawing(&params);
    let DrawElement::Polygon { points, .. } = &drawing.elements[0] else {
        panic!("expected polygon");
    };
    assert!((points[0].x - 50.0).abs() < 1e-9);
    assert!((points[0].y - 25.0).abs() < 1e-9);
}

#[test]
fn shapes_stay_inside_their_cells() {
    for seed in ["hello", "deadbeef", "containment"] {
        let params = seeded(seed, 12, false);
        let geometry = CanvasGeometry::new(params.size, params.margin, params.cells);
        for c in params.cell_params.iter().filter(|c| !c.skip) {
            let rect = geometry.cell_rect(c.col, c.row);
            let at = place(rect, c);
            let eps = 1e-9;
            assert!(at.center.x - at.radius >= rect.x0 - eps);
            assert!(at.center.x + at.radius <= rect.x1 + eps);
            assert!(at.center.y - at.radius >= rect.y0 - eps);
            assert!(at.center.y + at.radius <= rect.y1 + eps);
        }
    }
}

#[test]
fn element_count_matches_cells_and_motif() {
    let params = seeded("count elements", 10, true);
    let expected_cells = params
        .cell_params
        .iter()
        .filter(|c| !c.skip)
        .map(|c| match c.kind {
            ShapeKind::DiagonalSplit => 2,
            _ => 1,
        })
        .sum::<usize>();
    let drawing = layout_drawing(&params);
    let motif = params.motif.as_ref().unwrap().rays.len() + 1;
    assert_eq!(drawing.elements.len(), expected_cells + motif);

    assert!(matches!(
        drawing.elements.last(),
        Some(DrawElement::Circle { opacity: None, .. })
    ));
}

#[test]
fn rays_start_on_inner_radius() {
    let params = seeded("rays", 2, true);
    let drawing = layout_drawing(&params);
    let size = f64::from(params.size);
    let center = Point::new(size / 2.0, size / 2.0);
    let lines = drawing
        .elements
        .iter()
        .filter_map(|e| match e {
            DrawElement::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(lines.len(), 40);
    for (from, to) in lines {
        assert!((from.distance(center) - size * RAY_INNER).abs() < 1e-6);
        let len = to.distance(center) / (size * RAY_OUTER);
        assert!((0.8 - 1e-9..=1.2 + 1e-9).contains(&len));
    }
}

#[test]
fn layout_is_deterministic() {
    let a = layout_drawing(&seeded("same", 16, true));
    let b = layout_drawing(&seeded("same", 16, true));
    assert_eq!(a, b);
}

#[test]
fn first_ray_endpoints_are_bit_exact() {
    let drawing = layout_drawing(&seeded("hello", 1, true));
    let Some(DrawElement::Line { from, to, .. }) = drawing
        .elements
        .iter()
        .find(|e| matches!(e, DrawElement::Line { .. }))
    else {
        panic!("expected a ray");
    };
    assert_eq!(from.x.to_bits(), 0x407b_ffed_0e20_93c2);
    assert_eq!(from.y.to_bits(), 0x4078_f556_b4bd_b528);
    assert_eq!(to.x.to_bits(), 0x4084_be70_fada_6eec);
    assert_eq!(to.y.to_bits(), 0x4078_c566_8412_b8f7);
}

#[test]
fn oversized_margin_on_hand_built_params_stays_on_canvas() {
    let params = PosterParams {
        margin: 60,
        ..hand_params(
            2,
            vec![
                cell(0, 0, ShapeKind::Circle),
                cell(1, 0, ShapeKind::Square),
                cell(0, 1, ShapeKind::Triangle),
                cell(1, 1, ShapeKind::DiagonalSplit),
            ],
        )
    };
    let drawing = layout_drawing(&params);
    assert_eq!(drawing.elements.len(), 5);
    for element in &drawing.elements {
        let points = match element {
            DrawElement::Rect { rect, .. } => vec![rect.origin(), Point::new(rect.x1, rect.y1)],
            DrawElement::Circle { center, .. } => vec![*center],
            DrawElement::Polygon { points, .. } => points.clone(),
            DrawElement::Line { from, to, .. } => vec![*from, *to],
        };
        for p in points {
            assert!((0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y), "{p:?}");
        }
    }
}
