use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use vizgraph::{
    ActionOnClick, CircleLayout, DisplayOptions, EdgeKey, Error, FrLayout, Graph, GraphDisplay,
    LayoutAlgorithm, LayoutModel, Point, RandomLayout, Renderable, SceneItem, Shape, Text,
    VisualKind,
};

fn key(v: &str, w: &str) -> EdgeKey {
    EdgeKey::new(v, w, None::<String>)
}

fn chain() -> Graph<(), ()> {
    let mut g = Graph::directed();
    g.set_path(&["A", "B", "C"]);
    g
}

fn full_display(g: Graph<(), ()>) -> GraphDisplay<Graph<(), ()>> {
    GraphDisplay::builder(g)
        .algorithm(RandomLayout::new(7))
        .vertices(|_| Shape::circle(5.0, "steelblue"))
        .edges(|_, path| path)
        .labels(|p| p.translate(8.0, -8.0), |v: &String| Text::new(v.clone()))
        .build()
        .unwrap()
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn render_produces_one_shape_per_vertex() {
    let mut g = chain();
    g.ensure_node("lonely");
    let mut display = full_display(g);
    display.render().unwrap();

    let shapes: HashSet<_> = display.vertices().unwrap().keys().cloned().collect();
    let expected: HashSet<_> = ["A", "B", "C", "lonely"].map(String::from).into();
    assert_eq!(shapes, expected);
    assert_eq!(display.labels().unwrap().len(), 4);
    assert_eq!(display.edges().unwrap().len(), 2);
}

#[test]
fn shapes_sit_on_their_layout_positions() {
    let mut display = full_display(chain());
    display.render().unwrap();
    let layout = display.layout().unwrap();

    for (v, shape) in display.vertices().unwrap() {
        assert_eq!(shape.layout, layout.position(v).unwrap());
    }
    for (v, text) in display.labels().unwrap() {
        let p = layout.position(v).unwrap();
        assert!(close(text.position, p.translate(8.0, -8.0)));
    }
}

#[test]
fn edge_endpoints_equal_vertex_positions() {
    let mut display = full_display(chain());
    display.render().unwrap();
    let layout = display.layout().unwrap();

    for (e, path) in display.edges().unwrap() {
        assert_eq!(path.start(), Some(layout.position(&e.v).unwrap()));
        assert_eq!(path.end(), Some(layout.position(&e.w).unwrap()));
        // Directed graph: an arrowhead follows the line.
        assert_eq!(path.elements.len(), 5);
    }
}

#[test]
fn undirected_graphs_get_plain_edges_unless_forced() {
    let pair = || {
        let mut g: Graph<(), ()> = Graph::undirected();
        g.set_edge("A", "B");
        g
    };

    let mut plain = GraphDisplay::builder(pair())
        .edges(|_, path| path)
        .build()
        .unwrap();
    plain.render().unwrap();
    assert_eq!(plain.edges().unwrap()[&key("A", "B")].elements.len(), 2);

    let mut forced = GraphDisplay::builder(pair())
        .edges_with_arrow(true, |_, path| path)
        .build()
        .unwrap();
    forced.render().unwrap();
    assert_eq!(forced.edges().unwrap()[&key("A", "B")].elements.len(), 5);
}

#[test]
fn edge_formatter_sees_the_edge_and_basic_path() {
    let mut display = GraphDisplay::builder(chain())
        .edges(|e: &EdgeKey, mut path| {
            path.color = if e.v == "A" { "red" } else { "gray" }.to_string();
            path.dash_array = vec![4.0, 2.0];
            path
        })
        .build()
        .unwrap();
    display.render().unwrap();

    let edges = display.edges().unwrap();
    assert_eq!(edges[&key("A", "B")].color, "red");
    assert_eq!(edges[&key("B", "C")].color, "gray");
    assert_eq!(edges[&key("B", "C")].dash_array, vec![4.0, 2.0]);
}

#[test]
fn rendering_twice_with_a_seeded_layout_is_deterministic() {
    let mut display = full_display(chain());
    display.render().unwrap();
    let first: Vec<_> = display.vertices().unwrap().values().map(|s| s.layout).collect();
    display.render().unwrap();
    let second: Vec<_> = display.vertices().unwrap().values().map(|s| s.layout).collect();
    assert_eq!(first, second);
    assert_eq!(display.generation(), 2);
}

#[test]
fn scene_draws_vertices_then_edges_then_labels() {
    let mut display = full_display(chain());
    display.render().unwrap();

    let items = display.scene_items().unwrap();
    assert_eq!(items.len(), 3 + 2 + 3);
    assert!(matches!(items[0], SceneItem::Vertex(_)));
    assert!(matches!(items[2], SceneItem::Vertex(_)));
    assert!(matches!(items[3], SceneItem::Edge(_)));
    assert!(matches!(items[4], SceneItem::Edge(_)));
    assert!(matches!(items[5], SceneItem::Label(_)));
    assert!(matches!(items[7], SceneItem::Label(_)));

    let scene = display.scene().unwrap();
    assert_eq!(scene.len(), 8);
    assert!(matches!(scene[0], Renderable::Shape(_)));
    assert!(matches!(scene[3], Renderable::Path(_)));
    assert!(matches!(scene[7], Renderable::Text(_)));
}

#[test]
fn unconfigured_kinds_are_skipped_and_reported() {
    let mut display = GraphDisplay::builder(chain())
        .vertices(|_| Shape::rectangle(10.0, 6.0, "white"))
        .build()
        .unwrap();
    display.render().unwrap();

    assert_eq!(display.vertices().unwrap().len(), 3);
    assert!(matches!(
        display.edges(),
        Err(Error::MissingConfiguration {
            kind: VisualKind::Edges
        })
    ));
    assert!(matches!(
        display.labels(),
        Err(Error::MissingConfiguration {
            kind: VisualKind::Labels
        })
    ));
    assert_eq!(display.scene().unwrap().len(), 3);
}

#[test]
fn accessors_fail_before_the_first_render() {
    let mut display = full_display(chain());
    assert!(matches!(display.vertices(), Err(Error::NotRendered)));
    assert!(matches!(display.labels(), Err(Error::NotRendered)));
    assert!(matches!(display.edges(), Err(Error::NotRendered)));
    assert!(matches!(display.scene(), Err(Error::NotRendered)));
    assert!(matches!(display.update(), Err(Error::NotRendered)));
    assert!(matches!(display.rescale(2.0), Err(Error::NotRendered)));
    assert!(!display.is_rendered());
}

#[test]
fn algorithm_is_locked_once_visuals_exist() {
    let mut display = full_display(chain());
    display.set_algorithm(CircleLayout::default()).unwrap();
    display.render().unwrap();
    assert!(matches!(
        display.set_algorithm(RandomLayout::new(1)),
        Err(Error::LayoutLocked)
    ));
}

#[test]
fn builder_validates_the_configuration() {
    let bad_size = GraphDisplay::builder(chain()).size(-1.0).build();
    assert!(matches!(bad_size, Err(Error::InvalidConfig { .. })));

    let half_custom = GraphDisplay::builder(chain())
        .with_custom_action_on_click(|_, _| {})
        .build();
    assert!(matches!(half_custom, Err(Error::InvalidConfig { .. })));

    let reset_only = GraphDisplay::builder(chain())
        .with_custom_action_on_click_reset(|_, _| {})
        .build();
    assert!(matches!(reset_only, Err(Error::InvalidConfig { .. })));
}

#[test]
fn default_canvas_is_500_square() {
    let mut display = full_display(chain());
    display.render().unwrap();
    let area = display.layout().unwrap().area();
    assert_eq!((area.width, area.height), (500.0, 500.0));
    for (_, p) in display.layout().unwrap().iter() {
        assert!(area.contains(*p));
    }
}

#[test]
fn rescale_scales_about_the_center_and_compounds() {
    let mut display = GraphDisplay::builder(chain())
        .size(200.0)
        .algorithm(CircleLayout::with_radius(50.0))
        .vertices(|_| Shape::circle(5.0, "black"))
        .edges(|_, path| path)
        .build()
        .unwrap();
    display.render().unwrap();
    let before = display.vertices().unwrap()["A"].layout;
    assert!(close(before, Point::new(150.0, 100.0)));

    display.rescale(2.0).unwrap();
    assert!(close(display.vertices().unwrap()["A"].layout, Point::new(200.0, 100.0)));
    display.rescale(0.5).unwrap();
    assert!(close(display.vertices().unwrap()["A"].layout, Point::new(150.0, 100.0)));
    display.rescale(2.0).unwrap();
    display.rescale(2.0).unwrap();
    assert!(close(display.vertices().unwrap()["A"].layout, Point::new(300.0, 100.0)));

    // Edges follow the rescaled positions.
    let layout = display.layout().unwrap();
    let ab = &display.edges().unwrap()[&key("A", "B")];
    assert_eq!(ab.start(), Some(layout.position(&"A".to_string()).unwrap()));

    assert!(matches!(
        display.rescale(0.0),
        Err(Error::Layout(vizgraph_layout::Error::InvalidScale { .. }))
    ));
}

#[test]
fn rescale_with_post_processes_new_shapes() {
    let mut display = GraphDisplay::builder(chain())
        .vertices(|_| Shape::circle(5.0, "black"))
        .build()
        .unwrap();
    display.render().unwrap();
    display
        .rescale_with(1.5, |v, shape| {
            if v == "B" {
                shape.fill = "orange".to_string();
            }
        })
        .unwrap();
    let shapes = display.vertices().unwrap();
    assert_eq!(shapes["B"].fill, "orange");
    assert_eq!(shapes["A"].fill, "black");
    assert_eq!(display.generation(), 2);
}

#[test]
fn rescale_does_not_run_the_layout_again() {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();

    struct Counting(Rc<Cell<u32>>, RandomLayout);
    impl LayoutAlgorithm<Graph<(), ()>> for Counting {
        fn layout(
            &mut self,
            graph: &Graph<(), ()>,
            model: &mut LayoutModel<String>,
        ) -> vizgraph_layout::Result<()> {
            self.0.set(self.0.get() + 1);
            self.1.layout(graph, model)
        }
    }

    let mut display = GraphDisplay::builder(chain())
        .algorithm(Counting(counter, RandomLayout::new(3)))
        .vertices(|_| Shape::circle(5.0, "black"))
        .build()
        .unwrap();
    display.render().unwrap();
    display.rescale(2.0).unwrap();
    display.rescale(0.5).unwrap();
    assert_eq!(runs.get(), 1);
    display.render().unwrap();
    assert_eq!(runs.get(), 2);
}

#[test]
fn update_runs_updaters_in_place() {
    let mut display = GraphDisplay::builder(chain())
        .vertices(|_| Shape::circle(5.0, "black"))
        .edges(|_, path| path)
        .labels(|p| p, |v: &String| Text::new(v.clone()))
        .with_vertex_updater(|_, s| s.fill = "green".to_string())
        .with_edge_updater(|_, p| p.stroke_width = 3.0)
        .with_label_updater(|v, t| t.content = format!("<{v}>"))
        .build()
        .unwrap();
    display.render().unwrap();
    let ids: Vec<_> = display.vertices().unwrap().values().map(Shape::id).collect();

    display.update().unwrap();
    assert!(display.vertices().unwrap().values().all(|s| s.fill == "green"));
    assert!(display.edges().unwrap().values().all(|p| p.stroke_width == 3.0));
    assert_eq!(display.labels().unwrap()["A"].content, "<A>");

    // Same visuals, same generation.
    let after: Vec<_> = display.vertices().unwrap().values().map(Shape::id).collect();
    assert_eq!(ids, after);
    assert_eq!(display.generation(), 1);
}

#[test]
fn resize_renders_into_the_new_canvas() {
    let mut display = full_display(chain());
    display.render().unwrap();
    display.resize(100.0).unwrap();
    assert_eq!(display.options().size, 100.0);
    let layout = display.layout().unwrap();
    assert_eq!(layout.area().width, 100.0);
    for (_, p) in layout.iter() {
        assert!(layout.area().contains(*p));
    }
    assert_eq!(display.generation(), 2);
    assert!(matches!(display.resize(0.0), Err(Error::InvalidConfig { .. })));
}

#[test]
fn an_invalid_layout_parameter_fails_the_render() {
    let mut display = GraphDisplay::builder(chain())
        .algorithm(FrLayout {
            normalization_factor: 0.0,
            ..Default::default()
        })
        .vertices(|_| Shape::circle(5.0, "black"))
        .build()
        .unwrap();
    let err = display.render().unwrap_err();
    assert!(matches!(
        err,
        Error::Layout(vizgraph_layout::Error::InvalidParameter { .. })
    ));
    assert!(!display.is_rendered());
}

#[test]
fn a_layout_that_skips_a_vertex_fails_the_render() {
    struct Partial;
    impl LayoutAlgorithm<Graph<(), ()>> for Partial {
        fn layout(
            &mut self,
            _graph: &Graph<(), ()>,
            model: &mut LayoutModel<String>,
        ) -> vizgraph_layout::Result<()> {
            model.set("A".to_string(), Point::new(1.0, 1.0));
            Ok(())
        }
    }

    let mut display = GraphDisplay::builder(chain())
        .algorithm(Partial)
        .vertices(|_| Shape::circle(5.0, "black"))
        .build()
        .unwrap();
    let err = display.render().unwrap_err();
    assert!(matches!(
        err,
        Error::Layout(vizgraph_layout::Error::MissingPosition { .. })
    ));
    assert!(!display.is_rendered());
}

#[test]
fn options_drive_the_display() {
    let options: DisplayOptions = serde_json::from_str(
        r#"{"size": 300, "arrowHeadSize": 8, "actionOnClick": "connected-edges"}"#,
    )
    .unwrap();
    let mut display = GraphDisplay::builder(chain())
        .options(options)
        .vertices(|_| Shape::circle(5.0, "black"))
        .edges(|_, path| path)
        .build()
        .unwrap();
    assert!(display.is_interactive());
    display.render().unwrap();
    assert_eq!(display.layout().unwrap().area().width, 300.0);

    let path = &display.edges().unwrap()[&key("A", "B")];
    let tip = path.elements[4].point();
    let barb = path.elements[2].point();
    assert!((tip.distance(barb) - 8.0).abs() < 1e-9);
    assert_eq!(
        display.options().action_on_click,
        Some(ActionOnClick::ConnectedEdges)
    );
}
