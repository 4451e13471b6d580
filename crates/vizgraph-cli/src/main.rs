mod document;
mod svg;

use document::{GraphDocument, Styles};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vizgraph::{Graph, GraphDisplay, Path, Shape, Text, Visual};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Display(vizgraph::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Display(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<vizgraph::Error> for CliError {
    fn from(value: vizgraph::Error) -> Self {
        Self::Display(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    format: OutputFormat,
    pretty: bool,
    verbose: bool,
    size: Option<f64>,
    rescale: Option<f64>,
    clicks: Vec<String>,
}

fn usage() -> &'static str {
    "vizgraph-cli\n\
\n\
USAGE:\n\
  vizgraph-cli [--format svg|json] [--out <path>] [--size <n>] [--rescale <factor>] [--click <vertex>]... [--pretty] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the JSON graph document is read from stdin.\n\
  - Output goes to stdout unless --out is given.\n\
  - --click may be repeated; clicks are replayed in order after rendering.\n\
  - Logs go to stderr. RUST_LOG overrides the level (default warn, --verbose gives debug).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--size" => {
                let Some(size) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.size = Some(size.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--rescale" => {
                let Some(factor) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.rescale = Some(factor.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--click" => {
                let Some(vertex) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.clicks.push(vertex.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if let Err(err) = installed {
        // Keep whichever global subscriber won; logging through it still works.
        debug!(%err, "tracing subscriber already installed");
    }
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

const DEFAULT_RADIUS: f64 = 10.0;
const DEFAULT_FILL: &str = "#9ecae1";

fn build_display(doc: GraphDocument) -> Result<GraphDisplay<Graph<(), ()>>, CliError> {
    let (graph, styles, options, layout) = doc.into_parts();
    let Styles { nodes, edges } = styles;
    let label_styles = nodes.clone();

    let display = GraphDisplay::builder(graph)
        .options(options)
        .algorithm(layout)
        .vertices(move |v: &String| {
            let style = nodes.get(v);
            let radius = style.and_then(|s| s.radius).unwrap_or(DEFAULT_RADIUS);
            let fill = style
                .and_then(|s| s.fill.clone())
                .unwrap_or_else(|| DEFAULT_FILL.to_string());
            Shape::circle(radius, fill).with_stroke("#3182bd", 1.5)
        })
        .edges(move |e, mut path: Path| {
            if let Some(style) = edges.get(e) {
                if let Some(color) = &style.color {
                    path.color = color.clone();
                }
                if style.dashed {
                    path.dash_array = vec![6.0, 4.0];
                }
            }
            path
        })
        .labels(
            |p| p.translate(DEFAULT_RADIUS + 4.0, -DEFAULT_RADIUS - 4.0),
            move |v: &String| {
                let content = label_styles
                    .get(v)
                    .and_then(|s| s.label.clone())
                    .unwrap_or_else(|| v.clone());
                Text::new(content).with_font_size(12.0)
            },
        )
        .build()?;
    Ok(display)
}

#[derive(Serialize)]
struct VertexOut<'a> {
    id: &'a str,
    x: f64,
    y: f64,
    opacity: f64,
    fill: &'a str,
}

#[derive(Serialize)]
struct EdgeOut<'a> {
    source: &'a str,
    target: &'a str,
    opacity: f64,
}

#[derive(Serialize)]
struct LabelOut<'a> {
    id: &'a str,
    text: &'a str,
    opacity: f64,
}

#[derive(Serialize)]
struct SceneOut<'a> {
    generation: u64,
    size: f64,
    selected: Option<&'a str>,
    vertices: Vec<VertexOut<'a>>,
    edges: Vec<EdgeOut<'a>>,
    labels: Vec<LabelOut<'a>>,
}

fn scene_json(display: &GraphDisplay<Graph<(), ()>>, pretty: bool) -> Result<String, CliError> {
    let vertices = display
        .vertices()?
        .iter()
        .map(|(id, s)| VertexOut {
            id,
            x: s.layout.x,
            y: s.layout.y,
            opacity: s.opacity(),
            fill: &s.fill,
        })
        .collect();
    let edges = display
        .edges()?
        .iter()
        .map(|(e, p)| EdgeOut {
            source: &e.v,
            target: &e.w,
            opacity: p.opacity(),
        })
        .collect();
    let labels = display
        .labels()?
        .iter()
        .map(|(id, t)| LabelOut {
            id,
            text: &t.content,
            opacity: t.opacity(),
        })
        .collect();
    let out = SceneOut {
        generation: display.generation(),
        size: display.options().size,
        selected: display.selection().selected_vertex().map(String::as_str),
        vertices,
        edges,
        labels,
    };
    let mut text = if pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    text.push('\n');
    Ok(text)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut doc = GraphDocument::parse(&text)?;
    if let Some(size) = args.size {
        doc.options.size = size;
    }
    info!(
        nodes = doc.nodes.len(),
        edges = doc.edges.len(),
        "loaded graph document"
    );

    let mut display = build_display(doc)?;
    display.render()?;
    if let Some(factor) = args.rescale {
        display.rescale(factor)?;
    }
    for vertex in &args.clicks {
        debug!(%vertex, "replaying click");
        display.click_vertex(vertex)?;
    }

    let output = match args.format {
        OutputFormat::Svg => svg::write_svg(display.scene()?, display.options().size),
        OutputFormat::Json => scene_json(&display, args.pretty)?,
    };
    write_text(&output, args.out.as_deref())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
