//! arbor: build an AVL tree from integer keys and render it as SVG.
//!
//! Pipeline: parse keys -> build tree -> compute layout -> render -> emit
//! to stdout or a one-shot HTTP response.

mod cli;
mod serve;

use std::process;

use arbor_core::ArborError;
use arbor_export::{export_svg, RenderOptions};
use arbor_layout::compute_layout;
use arbor_parser::parse_args;
use arbor_tree::AvlTree;

use crate::cli::{Opts, OutputFormat, OutputSink};

fn main() {
    env_logger::init();

    let (opts, tokens) = Opts::parse();
    if let Err(err) = run(&opts, &tokens) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(opts: &Opts, tokens: &[String]) -> Result<(), ArborError> {
    let keys = parse_args(tokens)?;
    let tree: AvlTree<i64> = keys.into_iter().collect();
    log::info!("built tree: {} keys, height {}", tree.len(), tree.height());

    let layout = compute_layout(&tree)?;

    let options = RenderOptions::default()
        .with_canvas(opts.canvas_width, opts.canvas_height)
        .with_labels(opts.labels);

    let (body, content_type) = match opts.format {
        OutputFormat::Svg => (export_svg(&layout, &options)?, "image/svg+xml"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&layout)
                .map_err(|err| arbor_core::ExportError::Io(err.into()))?;
            (json, "application/json")
        }
    };

    match opts.output {
        OutputSink::Stdout => {
            println!("{body}");
            Ok(())
        }
        OutputSink::Serve => {
            serve::serve_once(&body, content_type, opts.port).map_err(ArborError::from)
        }
    }
}
