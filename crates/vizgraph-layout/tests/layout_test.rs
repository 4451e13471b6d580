use vizgraph_graphlib::{Graph, GraphSource};
use vizgraph_layout::{
    Algorithm, Box2D, CircleLayout, Error, FrLayout, LayoutAlgorithm, LayoutModel, Point,
    RandomLayout, Rescale, layout,
};

fn sample_graph() -> Graph<(), ()> {
    let mut g = Graph::directed();
    for (v, w) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "C"),
        ("C", "D"),
        ("D", "E"),
        ("E", "A"),
    ] {
        g.set_edge(v, w);
    }
    g
}

fn run<A>(mut algo: A, g: &Graph<(), ()>, area: Box2D) -> LayoutModel<String>
where
    A: LayoutAlgorithm<Graph<(), ()>>,
{
    let mut model = LayoutModel::new(area).unwrap();
    algo.layout(g, &mut model).unwrap();
    model
}

#[test]
fn random_layout_places_every_vertex_inside_the_area() {
    let g = sample_graph();
    let area = Box2D::square(500.0);
    let model = run(RandomLayout::new(3), &g, area);

    assert_eq!(model.len(), g.vertex_count());
    for v in g.vertices() {
        let p = model.position(&v).unwrap();
        assert!(area.contains(p), "{v} placed outside the area at {p:?}");
    }
}

#[test]
fn random_layout_is_reproducible_for_a_seed() {
    let g = sample_graph();
    let area = Box2D::square(500.0);
    let a = run(RandomLayout::new(11), &g, area);
    let b = run(RandomLayout::new(11), &g, area);
    let c = run(RandomLayout::new(12), &g, area);

    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    assert_ne!(a.iter().collect::<Vec<_>>(), c.iter().collect::<Vec<_>>());
}

#[test]
fn circle_layout_spaces_vertices_evenly_around_the_center() {
    let g = sample_graph();
    let area = Box2D::square(400.0);
    let model = run(CircleLayout::with_radius(100.0), &g, area);
    let center = area.center();

    for (_, p) in model.iter() {
        assert!((p.distance(center) - 100.0).abs() < 1e-9);
    }
    let first = model.position(&"A".to_string()).unwrap();
    assert!((first.x - 300.0).abs() < 1e-9);
    assert!((first.y - 200.0).abs() < 1e-9);
}

#[test]
fn circle_layout_defaults_its_radius_to_the_shorter_side() {
    let g = sample_graph();
    let area = Box2D::new(500.0, 200.0);
    let model = run(CircleLayout::default(), &g, area);

    for (_, p) in model.iter() {
        assert!((p.distance(area.center()) - 80.0).abs() < 1e-9);
    }
}

#[test]
fn fr_layout_stays_inside_the_area_and_separates_vertices() {
    let g = sample_graph();
    let area = Box2D::square(500.0);
    let model = run(FrLayout::new(50, 5), &g, area);

    let points: Vec<Point> = model.iter().map(|(_, p)| *p).collect();
    assert_eq!(points.len(), 5);
    for (i, a) in points.iter().enumerate() {
        assert!(area.contains(*a));
        for b in &points[i + 1..] {
            assert!(a.distance(*b) > 1.0, "vertices collapsed: {a:?} {b:?}");
        }
    }
}

#[test]
fn fr_layout_is_deterministic() {
    let g = sample_graph();
    let area = Box2D::square(500.0);
    let a = run(FrLayout::default(), &g, area);
    let b = run(FrLayout::default(), &g, area);
    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
}

#[test]
fn fr_layout_rejects_a_degenerate_normalization_factor() {
    let g = sample_graph();
    for factor in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        let mut model = LayoutModel::new(Box2D::square(300.0)).unwrap();
        let mut fr = FrLayout {
            normalization_factor: factor,
            ..Default::default()
        };
        let err = fr.layout(&g, &mut model).unwrap_err();
        assert!(
            matches!(err, Error::InvalidParameter { name: "normalizationFactor", .. }),
            "{factor}: {err}"
        );
        assert!(model.is_empty());
    }
}

#[test]
fn circle_layout_rejects_a_negative_or_non_finite_radius() {
    let g = sample_graph();
    for radius in [-1.0, f64::NAN, f64::INFINITY] {
        let mut model = LayoutModel::new(Box2D::square(300.0)).unwrap();
        let err = CircleLayout::with_radius(radius)
            .layout(&g, &mut model)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "radius", .. }));
    }

    let model = run(CircleLayout::with_radius(0.0), &g, Box2D::square(300.0));
    for (_, p) in model.iter() {
        assert_eq!(*p, Point::new(150.0, 150.0));
    }
}

#[test]
fn rescale_scales_positions_about_the_area_center() {
    let mut model: LayoutModel<&str> = LayoutModel::new(Box2D::square(200.0)).unwrap();
    model.set("a", Point::new(150.0, 100.0));
    model.set("b", Point::new(50.0, 20.0));

    Rescale::new(2.0).apply(&mut model).unwrap();

    assert_eq!(model.get(&"a"), Some(Point::new(200.0, 100.0)));
    assert_eq!(model.get(&"b"), Some(Point::new(0.0, -60.0)));
}

#[test]
fn rescale_rejects_degenerate_factors() {
    let mut model: LayoutModel<&str> = LayoutModel::new(Box2D::square(200.0)).unwrap();
    model.set("a", Point::new(1.0, 1.0));

    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = Rescale::new(scale).apply(&mut model).unwrap_err();
        assert!(matches!(err, Error::InvalidScale { .. }));
    }
    assert_eq!(model.get(&"a"), Some(Point::new(1.0, 1.0)));
}

#[test]
fn model_rejects_empty_areas_and_reports_missing_positions() {
    assert!(matches!(
        LayoutModel::<String>::new(Box2D::new(0.0, 10.0)),
        Err(Error::InvalidArea { .. })
    ));

    let model: LayoutModel<String> = LayoutModel::new(Box2D::square(10.0)).unwrap();
    let err = model.position(&"ghost".to_string()).unwrap_err();
    assert_eq!(err.to_string(), "layout produced no position for vertex \"ghost\"");
}

#[test]
fn algorithm_config_round_trips_through_json() {
    let algo: Algorithm = serde_json::from_str(r#"{"algorithm":"fr","iterations":10}"#).unwrap();
    assert_eq!(
        algo,
        Algorithm::FruchtermanReingold(FrLayout {
            iterations: 10,
            ..Default::default()
        })
    );

    let algo: Algorithm = serde_json::from_str(r#"{"algorithm":"circle"}"#).unwrap();
    assert_eq!(algo, Algorithm::Circle(CircleLayout::default()));

    let g = sample_graph();
    let model = layout(&g, Box2D::square(300.0), &Algorithm::default()).unwrap();
    assert_eq!(model.len(), 5);
}
