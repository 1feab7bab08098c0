// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Read;
use std::path::{Path, PathBuf};

use pathfit::{Pathfit, ReferenceBox, WriteOptions};

const HELP: &str = "\
pathfit re-expresses SVG path data under transforms and fits it into a box.

USAGE:
  pathfit [OPTIONS] <PATH-DATA>

  pathfit --transform 'rotate(90 40 40)' 'M0 0 80 80'
  pathfit --viewbox '0 0 80 80' --fit 160x160 'M0 0 80 80'
  pathfit --reference icon.svgz --object 64x32 --object-fit cover 'M0 0 80 80'

OPTIONS:
  -h, --help                    Prints help information
  -V, --version                 Prints version information
  -v, --verbose                 Prints debug output

  --transform LIST              Applies a transform list to the path.
                                Can be repeated; lists are applied in the
                                order given
  --pretransform LIST           Bakes a transform list into the path
                                before anything else
  --fit WxH                     Fits the path into a box using
                                preserveAspectRatio
  --object WxH                  Fits the path into a box using
                                object-fit and object-position

  --reference FILE              Reads width, height, viewBox,
                                preserveAspectRatio and style from the root
                                element of an SVG or SVGZ file
  --width LENGTH                Reference width, unit-less or in px
  --height LENGTH               Reference height, unit-less or in px
  --viewbox BOX                 Reference viewBox
  --preserve-aspect-ratio PAR   Reference preserveAspectRatio
                                [default: xMidYMid meet]
  --object-fit FIT              CSS object-fit [default: fill]
                                [possible values: fill, contain, cover,
                                none, scale-down]
  --object-position POS         CSS object-position [default: 50% 50%]
  --style CSS                   A CSS declaration block to read object-fit
                                and object-position from

  --precision N                 Number of significant digits [default: 6]
  --collapse-lines              Writes axis-aligned lines as H and V
  --svg-out FILE                Also saves the result as an SVG file

ARGS:
  <PATH-DATA>                   SVG path data
";

#[derive(Debug)]
struct Args {
    help: bool,
    version: bool,
    verbose: bool,
    transforms: Vec<String>,
    pretransform: Option<String>,
    fit: Option<(f64, f64)>,
    object: Option<(f64, f64)>,
    reference: Option<PathBuf>,
    width: Option<String>,
    height: Option<String>,
    view_box: Option<String>,
    preserve_aspect_ratio: Option<String>,
    object_fit: Option<String>,
    object_position: Option<String>,
    style: Option<String>,
    precision: Option<usize>,
    collapse_lines: bool,
    svg_out: Option<PathBuf>,
    free: Vec<String>,
}

fn collect_args(mut input: pico_args::Arguments) -> Result<Args, pico_args::Error> {
    let mut transforms = Vec::new();
    while let Some(list) = input.opt_value_from_str("--transform")? {
        transforms.push(list);
    }

    Ok(Args {
        help:                   input.contains(["-h", "--help"]),
        version:                input.contains(["-V", "--version"]),
        verbose:                input.contains(["-v", "--verbose"]),
        transforms,
        pretransform:           input.opt_value_from_str("--pretransform")?,
        fit:                    input.opt_value_from_fn("--fit", parse_size)?,
        object:                 input.opt_value_from_fn("--object", parse_size)?,
        reference:              input.opt_value_from_str("--reference")?,
        width:                  input.opt_value_from_str("--width")?,
        height:                 input.opt_value_from_str("--height")?,
        view_box:               input.opt_value_from_str("--viewbox")?,
        preserve_aspect_ratio:  input.opt_value_from_str("--preserve-aspect-ratio")?,
        object_fit:             input.opt_value_from_str("--object-fit")?,
        object_position:        input.opt_value_from_str("--object-position")?,
        style:                  input.opt_value_from_str("--style")?,
        precision:              input.opt_value_from_str("--precision")?,
        collapse_lines:         input.contains("--collapse-lines"),
        svg_out:                input.opt_value_from_str("--svg-out")?,
        free:                   input.free()?,
    })
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let err = || format!("'{}' is not a WxH size", s);

    let mut parts = s.splitn(2, |c| c == 'x' || c == 'X');
    let w = parts.next().ok_or_else(err)?;
    let h = parts.next().ok_or_else(err)?;
    let w: f64 = w.trim().parse().map_err(|_| err())?;
    let h: f64 = h.trim().parse().map_err(|_| err())?;

    Ok((w, h))
}

/// Root attributes of a reference document.
#[derive(Default, Debug)]
struct Reference {
    width: Option<String>,
    height: Option<String>,
    view_box: Option<String>,
    preserve_aspect_ratio: Option<String>,
    style: Option<String>,
}

impl Reference {
    fn from_file(path: &Path) -> Result<Self, String> {
        let data = std::fs::read(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;

        let is_svgz = path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("svgz"));
        let data = if is_svgz || data.starts_with(&[0x1f, 0x8b]) {
            decompress_svgz(&data)?
        } else {
            data
        };

        let text = String::from_utf8(data)
            .map_err(|_| format!("'{}' is not UTF-8", path.display()))?;

        Reference::from_str(&text)
    }

    fn from_str(text: &str) -> Result<Self, String> {
        let doc = roxmltree::Document::parse(text).map_err(|e| e.to_string())?;

        let root = doc.root_element();
        if !root.has_tag_name("svg") {
            return Err("the reference root element is not an 'svg'".to_string());
        }

        let attr = |name: &str| root.attribute(name).map(str::to_string);
        Ok(Reference {
            width: attr("width"),
            height: attr("height"),
            view_box: attr("viewBox"),
            preserve_aspect_ratio: attr("preserveAspectRatio"),
            style: attr("style"),
        })
    }
}

fn decompress_svgz(data: &[u8]) -> Result<Vec<u8>, String> {
    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decoded = Vec::with_capacity(data.len() * 2);
    decoder.read_to_end(&mut decoded).map_err(|_| "malformed gzip data".to_string())?;
    Ok(decoded)
}

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = collect_args(pico_args::Arguments::from_env()).map_err(|e| e.to_string())?;

    if args.help {
        print!("{}", HELP);
        return Ok(());
    }

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let path = match args.free.as_slice() {
        [path] => path,
        [] => return Err("no path data given".to_string()),
        _ => return Err("only one path data argument is allowed".to_string()),
    };

    let targets = !args.transforms.is_empty() as u8
        + args.fit.is_some() as u8
        + args.object.is_some() as u8;
    if targets > 1 {
        return Err("--transform, --fit and --object are mutually exclusive".to_string());
    }

    let mut opt = WriteOptions::default();
    if let Some(precision) = args.precision {
        opt.precision = precision;
    }

    let mut pf = Pathfit::with_options(opt);
    pf.set_collapse_lines(args.collapse_lines);

    let mut reference = match args.reference {
        Some(ref file) => Reference::from_file(file)?,
        None => Reference::default(),
    };

    // Command line values override the reference file.
    override_with(&mut reference.width, &args.width);
    override_with(&mut reference.height, &args.height);
    override_with(&mut reference.view_box, &args.view_box);
    override_with(&mut reference.preserve_aspect_ratio, &args.preserve_aspect_ratio);

    if reference.width.is_some() || reference.height.is_some() || reference.view_box.is_some() {
        pf.set_viewbox(&ReferenceBox {
            width: reference.width.as_deref(),
            height: reference.height.as_deref(),
            view_box: reference.view_box.as_deref(),
            preserve_aspect_ratio: reference.preserve_aspect_ratio.as_deref(),
        }).map_err(|e| e.to_string())?;

        if let Some(ref css) = reference.style {
            pf.set_object_style_css(css).map_err(|e| e.to_string())?;
        }

        if let Some(ref css) = args.style {
            pf.set_object_style_css(css).map_err(|e| e.to_string())?;
        }

        pf.set_object_style(args.object_fit.as_deref(), args.object_position.as_deref())
            .map_err(|e| e.to_string())?;
    } else if args.style.is_some() || args.object_fit.is_some() || args.object_position.is_some() {
        log::warn!("Object styles are ignored without a reference viewport.");
    }

    let mut d = pf.set_path(path, args.pretransform.as_deref()).map_err(|e| e.to_string())?;

    let mut size = None;
    if !args.transforms.is_empty() {
        d = pf.transform_all(args.transforms.as_slice()).map_err(|e| e.to_string())?;
    } else if let Some((w, h)) = args.fit {
        d = pf.scale_with_aspect_ratio(w, h).map_err(|e| e.to_string())?;
        size = Some((w, h));
    } else if let Some((w, h)) = args.object {
        d = pf.scale_with_object_fit(w, h).map_err(|e| e.to_string())?;
        size = Some((w, h));
    } else if let Some(vp) = pf.viewport_fit().and_then(|f| f.viewport()) {
        if vp.x == 0.0 && vp.y == 0.0 {
            size = Some((vp.width, vp.height));
        }
    }

    println!("{}", d);

    if let Some(ref file) = args.svg_out {
        std::fs::write(file, preview_svg(&d, size))
            .map_err(|e| format!("failed to write '{}': {}", file.display(), e))?;
    }

    Ok(())
}

fn override_with(value: &mut Option<String>, arg: &Option<String>) {
    if arg.is_some() {
        *value = arg.clone();
    }
}

fn preview_svg(d: &str, size: Option<(f64, f64)>) -> String {
    let mut xml = xmlwriter::XmlWriter::new(xmlwriter::Options::default());
    xml.start_element("svg");
    xml.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    if let Some((w, h)) = size {
        xml.write_attribute("width", &w);
        xml.write_attribute("height", &h);
        xml.write_attribute_fmt("viewBox", format_args!("0 0 {} {}", w, h));
    }

    xml.start_element("path");
    xml.write_attribute("d", d);
    xml.end_document()
}
