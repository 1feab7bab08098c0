// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fitting a source viewport into a target box.
//!
//! Two policies are supported: SVG `preserveAspectRatio` and CSS
//! `object-fit`/`object-position`. Both produce a transform list of an
//! optional `translate` followed by an optional `scale`.

use svgtypes::{FuzzyEq, FuzzyZero};

use crate::{Error, ErrorKind, Result, TransformList, TransformOp};

mod object;
mod viewport;

pub use self::object::*;
pub use self::viewport::*;

/// A fitting policy.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FitSpec {
    AspectRatio(AspectRatio),
    ObjectFit(ObjectStyle),
}

/// Derives transforms that fit a viewport into a target box.
///
/// Both policies are kept, so either can be applied to the same viewport.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ViewportFit {
    viewport: Option<Viewport>,
    aspect_ratio: AspectRatio,
    object_style: ObjectStyle,
}

impl ViewportFit {
    /// Creates a fit with default policies: `xMidYMid meet`, `fill`
    /// and `50% 50%`.
    pub fn new(viewport: Viewport) -> Self {
        ViewportFit {
            viewport: Some(viewport),
            ..ViewportFit::default()
        }
    }

    /// Creates a fit with one policy set.
    pub fn with_spec(viewport: Option<Viewport>, spec: FitSpec) -> Self {
        let mut fit = ViewportFit { viewport, ..ViewportFit::default() };
        fit.set_spec(spec);
        fit
    }

    /// Returns the source viewport.
    #[inline]
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Sets the source viewport.
    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Replaces one of the policies.
    pub fn set_spec(&mut self, spec: FitSpec) {
        match spec {
            FitSpec::AspectRatio(aspect_ratio) => self.aspect_ratio = aspect_ratio,
            FitSpec::ObjectFit(object_style) => self.object_style = object_style,
        }
    }

    /// Returns the `preserveAspectRatio` policy.
    #[inline]
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Returns the `object-fit` policy.
    #[inline]
    pub fn object_style(&self) -> ObjectStyle {
        self.object_style
    }

    fn scale_factors(&self, width: f64, height: f64) -> Result<(Viewport, f64, f64)> {
        let viewport = match self.viewport {
            Some(vp) => vp,
            None => return Err(Error::new(ErrorKind::ReferenceNotSet, "")),
        };

        let width = check_length(width)?;
        let height = check_length(height)?;

        Ok((viewport, width / viewport.width, height / viewport.height))
    }

    /// Returns the transform fitting the viewport into `width` x `height`
    /// according to `preserveAspectRatio`.
    pub fn transform_for_aspect_ratio(&self, width: f64, height: f64) -> Result<TransformList> {
        let (vp, mut sx, mut sy) = self.scale_factors(width, height)?;

        let ar = self.aspect_ratio;
        if ar.preserve {
            let s = if ar.slice { sx.max(sy) } else { sx.min(sy) };
            sx = s;
            sy = s;
        }

        let mut tx = -vp.x * sx;
        let mut ty = -vp.y * sy;

        if ar.preserve {
            tx += align_offset(ar.x, width - vp.width * sx);
            ty += align_offset(ar.y, height - vp.height * sy);
        }

        log::debug!("Fit {} into {}x{}: scale {} {}, translate {} {}.",
                    ar, width, height, sx, sy, tx, ty);

        Ok(translate_then_scale(tx, ty, sx, sy))
    }

    /// Returns the transform fitting the viewport into `width` x `height`
    /// according to `object-fit` and `object-position`.
    pub fn transform_for_object_fit(&self, width: f64, height: f64) -> Result<TransformList> {
        let (vp, mut sx, mut sy) = self.scale_factors(width, height)?;

        let style = self.object_style;
        match style.fit {
            ObjectFit::Fill => {}
            ObjectFit::Contain => {
                sx = sx.min(sy);
                sy = sx;
            }
            ObjectFit::Cover => {
                sx = sx.max(sy);
                sy = sx;
            }
            ObjectFit::None => {
                sx = 1.0;
                sy = 1.0;
            }
            ObjectFit::ScaleDown => {
                sx = sx.min(sy).min(1.0);
                sy = sx;
            }
        }

        let tx = -vp.x * sx + style.position.x.offset(width - vp.width * sx);
        let ty = -vp.y * sy + style.position.y.offset(height - vp.height * sy);

        log::debug!("Fit object ({}) into {}x{}: scale {} {}, translate {} {}.",
                    style.fit, width, height, sx, sy, tx, ty);

        Ok(translate_then_scale(tx, ty, sx, sy))
    }
}

fn align_offset(align: Align, free: f64) -> f64 {
    match align {
        Align::Min => 0.0,
        Align::Mid => free / 2.0,
        Align::Max => free,
    }
}

fn translate_then_scale(tx: f64, ty: f64, sx: f64, sy: f64) -> TransformList {
    let mut list = TransformList::new();

    if !(tx.is_fuzzy_zero() && ty.is_fuzzy_zero()) {
        list.push(TransformOp::Translate { tx: tx + 0.0, ty: Some(ty + 0.0) });
    }

    if !(sx.fuzzy_eq(&1.0) && sy.fuzzy_eq(&1.0)) {
        list.push(TransformOp::Scale { sx, sy: Some(sy) });
    }

    list
}


#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [(f64, f64); 4] = [(100.0, 100.0), (300.0, 300.0), (300.0, 100.0), (100.0, 400.0)];

    macro_rules! test_aspect {
        ($name:ident, $par:expr, $fit:expr, $scale:expr, $wide:expr, $high:expr) => (
            #[test]
            fn $name() {
                let ar: AspectRatio = $par.parse().unwrap();
                let vp = Viewport::from_size(100.0, 100.0).unwrap();
                let fit = ViewportFit::with_spec(Some(vp), FitSpec::AspectRatio(ar));
                for (&(w, h), expected) in SIZES.iter().zip(&[$fit, $scale, $wide, $high]) {
                    let ts = fit.transform_for_aspect_ratio(w, h).unwrap();
                    assert_eq!(ts.to_string(), *expected, "{}x{}", w, h);
                }
            }
        )
    }

    test_aspect!(none, "none",
        "", "scale(3 3)", "scale(3 1)", "scale(1 4)");

    test_aspect!(min_min_meet, "xMinYMin meet",
        "", "scale(3 3)", "", "");
    test_aspect!(min_mid_meet, "xMinYMid meet",
        "", "scale(3 3)", "", "translate(0 150)");
    test_aspect!(min_max_meet, "xMinYMax meet",
        "", "scale(3 3)", "", "translate(0 300)");
    test_aspect!(mid_min_meet, "xMidYMin meet",
        "", "scale(3 3)", "translate(100 0)", "");
    test_aspect!(mid_mid_meet, "xMidYMid meet",
        "", "scale(3 3)", "translate(100 0)", "translate(0 150)");
    test_aspect!(mid_max_meet, "xMidYMax meet",
        "", "scale(3 3)", "translate(100 0)", "translate(0 300)");
    test_aspect!(max_min_meet, "xMaxYMin meet",
        "", "scale(3 3)", "translate(200 0)", "");
    test_aspect!(max_mid_meet, "xMaxYMid meet",
        "", "scale(3 3)", "translate(200 0)", "translate(0 150)");
    test_aspect!(max_max_meet, "xMaxYMax meet",
        "", "scale(3 3)", "translate(200 0)", "translate(0 300)");

    test_aspect!(min_min_slice, "xMinYMin slice",
        "", "scale(3 3)", "scale(3 3)", "scale(4 4)");
    test_aspect!(min_mid_slice, "xMinYMid slice",
        "", "scale(3 3)", "translate(0 -100) scale(3 3)", "scale(4 4)");
    test_aspect!(min_max_slice, "xMinYMax slice",
        "", "scale(3 3)", "translate(0 -200) scale(3 3)", "scale(4 4)");
    test_aspect!(mid_min_slice, "xMidYMin slice",
        "", "scale(3 3)", "scale(3 3)", "translate(-150 0) scale(4 4)");
    test_aspect!(mid_mid_slice, "xMidYMid slice",
        "", "scale(3 3)", "translate(0 -100) scale(3 3)", "translate(-150 0) scale(4 4)");
    test_aspect!(mid_max_slice, "xMidYMax slice",
        "", "scale(3 3)", "translate(0 -200) scale(3 3)", "translate(-150 0) scale(4 4)");
    test_aspect!(max_min_slice, "xMaxYMin slice",
        "", "scale(3 3)", "scale(3 3)", "translate(-300 0) scale(4 4)");
    test_aspect!(max_mid_slice, "xMaxYMid slice",
        "", "scale(3 3)", "translate(0 -100) scale(3 3)", "translate(-300 0) scale(4 4)");
    test_aspect!(max_max_slice, "xMaxYMax slice",
        "", "scale(3 3)", "translate(0 -200) scale(3 3)", "translate(-300 0) scale(4 4)");

    const OBJECT_SIZES: [(f64, f64); 5] = [
        (100.0, 100.0), (300.0, 300.0), (300.0, 200.0), (200.0, 400.0), (80.0, 80.0),
    ];

    macro_rules! test_object {
        ($name:ident, $fit:expr, $position:expr,
         $s_fit:expr, $s_scale:expr, $s_wide:expr, $s_high:expr, $s_small:expr) => (
            #[test]
            fn $name() {
                let style = ObjectStyle::new(Some($fit), Some($position)).unwrap();
                let vp = Viewport::from_size(100.0, 100.0).unwrap();
                let fit = ViewportFit::with_spec(Some(vp), FitSpec::ObjectFit(style));
                let expected = [$s_fit, $s_scale, $s_wide, $s_high, $s_small];
                for (&(w, h), expected) in OBJECT_SIZES.iter().zip(&expected) {
                    let ts = fit.transform_for_object_fit(w, h).unwrap();
                    assert_eq!(ts.to_string(), *expected, "{}x{}", w, h);
                }
            }
        )
    }

    test_object!(fill_left_top, "fill", "left top",
        "", "scale(3 3)", "scale(3 2)", "scale(2 4)", "scale(0.8 0.8)");
    test_object!(contain_left_top, "contain", "left top",
        "", "scale(3 3)", "scale(2 2)", "scale(2 2)", "scale(0.8 0.8)");
    test_object!(cover_left_top, "cover", "left top",
        "", "scale(3 3)", "scale(3 3)", "scale(4 4)", "scale(0.8 0.8)");
    test_object!(none_left_top, "none", "left top",
        "", "", "", "", "");
    test_object!(scale_down_left_top, "scale-down", "left top",
        "", "", "", "", "scale(0.8 0.8)");
    test_object!(contain_right_bottom, "contain", "right bottom",
        "", "scale(3 3)", "translate(100 0) scale(2 2)", "translate(0 200) scale(2 2)",
        "scale(0.8 0.8)");
    test_object!(contain_lengths, "contain", "20px 30px",
        "translate(20 30)", "translate(20 30) scale(3 3)", "translate(20 30) scale(2 2)",
        "translate(20 30) scale(2 2)", "translate(20 30) scale(0.8 0.8)");
    test_object!(contain_percents, "contain", "10% 50%",
        "", "scale(3 3)", "translate(10 0) scale(2 2)", "translate(0 100) scale(2 2)",
        "scale(0.8 0.8)");
    test_object!(contain_far_lengths, "contain", "right 20px bottom 30px",
        "translate(-20 -30)", "translate(-20 -30) scale(3 3)", "translate(80 -30) scale(2 2)",
        "translate(-20 170) scale(2 2)", "translate(-20 -30) scale(0.8 0.8)");
    test_object!(contain_far_percents, "contain", "right 10% bottom 50%",
        "", "scale(3 3)", "translate(90 0) scale(2 2)", "translate(0 100) scale(2 2)",
        "scale(0.8 0.8)");
    test_object!(cover_right_bottom, "cover", "right bottom",
        "", "scale(3 3)", "translate(0 -100) scale(3 3)", "translate(-200 0) scale(4 4)",
        "scale(0.8 0.8)");
    test_object!(cover_lengths, "cover", "20px 30px",
        "translate(20 30)", "translate(20 30) scale(3 3)", "translate(20 30) scale(3 3)",
        "translate(20 30) scale(4 4)", "translate(20 30) scale(0.8 0.8)");
    test_object!(cover_percents, "cover", "10% 50%",
        "", "scale(3 3)", "translate(0 -50) scale(3 3)", "translate(-20 0) scale(4 4)",
        "scale(0.8 0.8)");
    test_object!(cover_far_lengths, "cover", "right 20px bottom 30px",
        "translate(-20 -30)", "translate(-20 -30) scale(3 3)", "translate(-20 -130) scale(3 3)",
        "translate(-220 -30) scale(4 4)", "translate(-20 -30) scale(0.8 0.8)");
    test_object!(cover_far_percents, "cover", "right 10% bottom 50%",
        "", "scale(3 3)", "translate(0 -50) scale(3 3)", "translate(-180 0) scale(4 4)",
        "scale(0.8 0.8)");

    #[test]
    fn view_box_origin_is_translated() {
        let vp = Viewport::from_view_box("10 20 100 100").unwrap();
        let ts = ViewportFit::new(vp).transform_for_aspect_ratio(200.0, 200.0).unwrap();
        assert_eq!(ts.to_string(), "translate(-20 -40) scale(2 2)");
    }

    #[test]
    fn view_box_origin_under_object_fit() {
        let vp = Viewport::from_view_box("10 20 100 100").unwrap();
        let cases = [
            ("fill", "left top", "translate(-30 -40) scale(3 2)"),
            ("contain", "center", "translate(30 -40) scale(2 2)"),
            ("contain", "right 20px bottom 30px", "translate(60 -70) scale(2 2)"),
            ("cover", "right bottom", "translate(-30 -160) scale(3 3)"),
            ("none", "left top", "translate(-10 -20)"),
        ];

        for &(fit, position, expected) in &cases {
            let style = ObjectStyle::new(Some(fit), Some(position)).unwrap();
            let fit = ViewportFit::with_spec(Some(vp), FitSpec::ObjectFit(style));
            let ts = fit.transform_for_object_fit(300.0, 200.0).unwrap();
            assert_eq!(ts.to_string(), expected, "{} {}", position, expected);
        }
    }

    #[test]
    fn missing_viewport() {
        let fit = ViewportFit::default();
        let e = fit.transform_for_object_fit(10.0, 10.0).unwrap_err();
        assert_eq!(e.kind, ErrorKind::ReferenceNotSet);
    }

    #[test]
    fn bad_target_size() {
        let fit = ViewportFit::new(Viewport::from_size(10.0, 10.0).unwrap());
        let e = fit.transform_for_aspect_ratio(0.0, 10.0).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidLength);
        let e = fit.transform_for_object_fit(10.0, -1.0).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidLength);
    }
}
