//! Burin CLI - render stroke text to SVG.
//!
//! Usage: `burin <font-file> <text> [height]`
//!
//! Loads a FontoBene-style stroke font, strokes the text at the given
//! cap height (default 4.0) and prints an SVG document to stdout.
//! Model coordinates have Y pointing up; Y is negated at output time
//! for SVG's y-down space, so the text renders right-side up.

use burin_font::{FontData, StrokeFont};
use burin_geometry::{paths_bounding_box, Alignment, Path};
use burin_text::TextStroker;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use svg::node::element::Path as SvgPath;
use svg::Document;

const DEFAULT_HEIGHT: f64 = 4.0;
const STROKE_WIDTH_RATIO: f64 = 0.15;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (font_file, text) = match (args.next(), args.next()) {
        (Some(font_file), Some(text)) => (font_file, text),
        _ => {
            eprintln!("usage: burin <font-file> <text> [height]");
            std::process::exit(2);
        }
    };
    let height: f64 = match args.next() {
        Some(arg) => arg.parse().map_err(|_| format!("invalid height: {arg:?}"))?,
        None => DEFAULT_HEIGHT,
    };

    let data = fs::read_to_string(&font_file)?;
    let font = StrokeFont::load_with_notify(font_file, FontData(data), || {
        tracing::debug!("stroke font ready");
    });

    let stroker = TextStroker::new(&font);
    let paths = stroker.stroke(&text, height, 1.0, Alignment::default());
    tracing::info!(
        glyphs = font.glyph_count(),
        paths = paths.len(),
        "stroked text"
    );

    print!("{}", render_svg(&paths, height * STROKE_WIDTH_RATIO));
    Ok(())
}

fn render_svg(paths: &[Path], stroke_width: f64) -> Document {
    let view_box = match paths_bounding_box(paths) {
        Some((bottom_left, top_right)) => {
            let margin = stroke_width.max(0.1);
            // Y is negated: the model's top edge becomes SVG's min Y.
            (
                bottom_left.x - margin,
                -top_right.y - margin,
                (top_right.x - bottom_left.x) + 2.0 * margin,
                (top_right.y - bottom_left.y) + 2.0 * margin,
            )
        }
        None => (0.0, 0.0, 1.0, 1.0),
    };

    let mut document = Document::new().set("viewBox", view_box);
    for path in paths {
        if let Some(d) = path_data(path) {
            document = document.add(
                SvgPath::new()
                    .set("fill", "none")
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .set("stroke-linecap", "round")
                    .set("stroke-linejoin", "round")
                    .set("d", d),
            );
        }
    }
    document
}

/// Build the `d` attribute for one stroke path, or `None` for paths
/// with fewer than two vertices.
///
/// Raw string building keeps full `f64` precision. An arc segment
/// becomes an `A` command: the radius follows from chord and sweep,
/// the large-arc flag is always 0 (sweeps are capped at 180 degrees)
/// and a counter-clockwise model sweep maps to sweep-flag 1 in SVG's
/// y-down space.
fn path_data(path: &Path) -> Option<String> {
    let vertices = path.vertices();
    let (first, rest) = vertices.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut d = String::new();
    let _ = write!(d, "M{} {}", first.position.x, -first.position.y);
    let mut previous = first;
    for vertex in rest {
        let sweep = previous.angle;
        if sweep.is_zero() {
            let _ = write!(d, " L{} {}", vertex.position.x, -vertex.position.y);
        } else {
            let delta = vertex.position - previous.position;
            let chord = (delta.x * delta.x + delta.y * delta.y).sqrt();
            let radius = chord / (2.0 * (sweep.to_rad().abs() / 2.0).sin());
            let sweep_flag = i32::from(sweep.to_deg() > 0.0);
            let _ = write!(
                d,
                " A{radius} {radius} 0 0 {sweep_flag} {} {}",
                vertex.position.x, -vertex.position.y
            );
        }
        previous = vertex;
    }
    Some(d)
}
