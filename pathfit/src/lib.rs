// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
A stateful path fitter.

`Pathfit` stores one path and one reference viewport, and returns formatted
path data for every transform asked of it. The stored path only changes
through `set_path`.

```
use pathfit::{Pathfit, ReferenceBox};

let mut pf = Pathfit::new();
pf.set_viewbox(&ReferenceBox { view_box: Some("0 0 80 80"), ..ReferenceBox::default() }).unwrap();
pf.set_path("M0 0 80 80", None).unwrap();
assert_eq!(pf.scale_with_aspect_ratio(160.0, 160.0).unwrap(), "M0 0 160 160");
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use pathfit_core::{
    AspectRatio, Error, ErrorKind, FitSpec, ObjectFit, ObjectPosition, ObjectStyle,
    PathData, Result, TransformList, Viewport, ViewportFit, WriteOptions,
};

use pathfit_core::{collapse_lines, write_path, Transformer};

/// Root attributes of a reference SVG.
///
/// Values are taken as written in the markup.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct ReferenceBox<'a> {
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
    pub view_box: Option<&'a str>,
    pub preserve_aspect_ratio: Option<&'a str>,
}

/// Fits a stored path into target boxes.
#[derive(Clone, Default, Debug)]
pub struct Pathfit {
    fit: Option<ViewportFit>,
    path: Option<PathData>,
    options: WriteOptions,
    collapse: bool,
}

impl Pathfit {
    /// Creates a fitter with default formatting.
    pub fn new() -> Self {
        Pathfit::default()
    }

    /// Creates a fitter with custom formatting.
    pub fn with_options(options: WriteOptions) -> Self {
        Pathfit { options, ..Pathfit::default() }
    }

    /// Re-emits axis-aligned lines as `H`/`V` in every returned path.
    pub fn set_collapse_lines(&mut self, collapse: bool) {
        self.collapse = collapse;
    }

    /// Sets the reference viewport.
    ///
    /// Resets the object fit and position to `fill` and `50% 50%`.
    pub fn set_viewbox(&mut self, attrs: &ReferenceBox) -> Result<()> {
        let viewport = Viewport::from_attributes(attrs.width, attrs.height, attrs.view_box)?;

        let mut fit = ViewportFit::new(viewport);
        if let Some(text) = attrs.preserve_aspect_ratio {
            fit.set_spec(FitSpec::AspectRatio(text.parse()?));
        }

        log::debug!("Reference viewport: {:?}.", viewport);
        self.fit = Some(fit);
        Ok(())
    }

    /// Returns the current fitting state.
    pub fn viewport_fit(&self) -> Option<&ViewportFit> {
        self.fit.as_ref()
    }

    /// Replaces the `preserveAspectRatio` policy.
    pub fn set_aspect_ratio(&mut self, text: &str) -> Result<()> {
        let ar: AspectRatio = text.parse()?;
        self.fit_mut()?.set_spec(FitSpec::AspectRatio(ar));
        Ok(())
    }

    /// Updates the `object-fit` and `object-position` policy.
    ///
    /// A missing value keeps its current setting. Nothing changes on error.
    pub fn set_object_style(&mut self, fit: Option<&str>, position: Option<&str>) -> Result<()> {
        let vf = self.fit_mut()?;
        let mut style = vf.object_style();
        style.update(fit, position)?;
        vf.set_spec(FitSpec::ObjectFit(style));
        Ok(())
    }

    /// Like `set_object_style`, but reads a CSS declaration block.
    pub fn set_object_style_css(&mut self, css: &str) -> Result<()> {
        let vf = self.fit_mut()?;
        let mut style = vf.object_style();
        style.update_from_css(css)?;
        vf.set_spec(FitSpec::ObjectFit(style));
        Ok(())
    }

    /// Stores a path, optionally baking `pretransform` into it, and returns
    /// the stored path formatted.
    ///
    /// On error the previously stored path is kept.
    pub fn set_path(&mut self, path: &str, pretransform: Option<&str>) -> Result<String> {
        let mut ast: PathData = path.parse()?;

        if let Some(text) = pretransform {
            let list: TransformList = text.parse()?;
            ast = Transformer::new(&list).transform(&ast);
        }

        log::debug!("Stored a path with {} command(s).", ast.len());

        let out = self.format(&ast);
        self.path = Some(ast);
        Ok(out)
    }

    /// Returns the stored path.
    pub fn path(&self) -> Option<&PathData> {
        self.path.as_ref()
    }

    /// Returns the stored path under a transform list.
    pub fn transform(&self, text: &str) -> Result<String> {
        self.apply(&text.parse()?)
    }

    /// Like `transform`, but concatenates several lists in order.
    pub fn transform_all<S: AsRef<str>>(&self, parts: &[S]) -> Result<String> {
        self.apply(&TransformList::from_parts(parts)?)
    }

    /// Returns the stored path fitted into `width` x `height` according to
    /// `preserveAspectRatio`.
    pub fn scale_with_aspect_ratio(&self, width: f64, height: f64) -> Result<String> {
        let list = self.fit()?.transform_for_aspect_ratio(width, height)?;
        self.apply(&list)
    }

    /// Returns the stored path fitted into `width` x `height` according to
    /// `object-fit` and `object-position`.
    pub fn scale_with_object_fit(&self, width: f64, height: f64) -> Result<String> {
        let list = self.fit()?.transform_for_object_fit(width, height)?;
        self.apply(&list)
    }

    fn fit(&self) -> Result<&ViewportFit> {
        self.fit.as_ref().ok_or_else(|| Error::new(ErrorKind::ReferenceNotSet, ""))
    }

    fn fit_mut(&mut self) -> Result<&mut ViewportFit> {
        self.fit.as_mut().ok_or_else(|| Error::new(ErrorKind::ReferenceNotSet, ""))
    }

    fn apply(&self, list: &TransformList) -> Result<String> {
        let path = self.path.as_ref().ok_or_else(|| Error::new(ErrorKind::PathNotSet, ""))?;
        Ok(self.format(&Transformer::new(list).transform(path)))
    }

    fn format(&self, path: &PathData) -> String {
        if self.collapse {
            write_path(&collapse_lines(path), &self.options)
        } else {
            write_path(path, &self.options)
        }
    }
}
