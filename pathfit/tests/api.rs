// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pathfit::{AspectRatio, ErrorKind, ObjectFit, Pathfit, ReferenceBox, Viewport};

#[test]
fn full_workflow() {
    let mut pf = Pathfit::new();
    assert!(pf.viewport_fit().is_none());
    assert!(pf.set_aspect_ratio("xMinYMax slice").is_err());
    assert!(pf.set_object_style(Some("contain"), Some("right top")).is_err());

    pf.set_viewbox(&ReferenceBox { view_box: Some("0 0 80 80"), ..ReferenceBox::default() })
        .unwrap();
    let fit = pf.viewport_fit().unwrap();
    assert_eq!(fit.viewport(), Some(&Viewport { x: 0.0, y: 0.0, width: 80.0, height: 80.0 }));
    assert_eq!(fit.aspect_ratio(), AspectRatio::default());
    assert_eq!(fit.object_style().fit, ObjectFit::Fill);

    pf.set_aspect_ratio("xMinYMax slice").unwrap();
    pf.set_object_style(Some("contain"), Some("right top")).unwrap();
    pf.set_object_style(None, Some("10px")).unwrap();

    let style = pf.viewport_fit().unwrap().object_style();
    assert_eq!(style.fit, ObjectFit::Contain);
    assert_eq!(style.position.x.value, 10.0);
    assert!(!style.position.x.percent);
    assert_eq!(style.position.y.value, 50.0);

    assert_eq!(pf.set_path("M0 0 80 80", None).unwrap(), "M0 0 80 80");
    assert_eq!(pf.set_path("M0 0 80 80", Some("rotate(90 40,40)")).unwrap(), "M80 0 0 80");
    assert_eq!(pf.transform("rotate(-90 40,40)").unwrap(), "M0 0 80 80");

    // The stored path is unchanged by `transform`.
    assert_eq!(pf.scale_with_aspect_ratio(160.0, 160.0).unwrap(), "M160 0 0 160");
    assert_eq!(pf.scale_with_object_fit(160.0, 160.0).unwrap(), "M170 0 10 160");
}

#[test]
fn reference_from_size() {
    let mut pf = Pathfit::new();
    let attrs = ReferenceBox {
        width: Some("40px"),
        height: Some("20"),
        preserve_aspect_ratio: Some("none"),
        ..ReferenceBox::default()
    };
    pf.set_viewbox(&attrs).unwrap();
    pf.set_path("M0 0 40 20", None).unwrap();
    assert_eq!(pf.scale_with_aspect_ratio(80.0, 80.0).unwrap(), "M0 0 80 80");
}

#[test]
fn reference_errors() {
    let mut pf = Pathfit::new();

    let attrs = ReferenceBox { width: Some("40"), ..ReferenceBox::default() };
    assert_eq!(pf.set_viewbox(&attrs).unwrap_err().kind, ErrorKind::InsufficientData);

    let attrs = ReferenceBox { view_box: Some("0 0 0 10"), ..ReferenceBox::default() };
    assert_eq!(pf.set_viewbox(&attrs).unwrap_err().kind, ErrorKind::InvalidViewBox);

    let attrs = ReferenceBox {
        view_box: Some("0 0 10 10"),
        preserve_aspect_ratio: Some("xMidYMid cover"),
        ..ReferenceBox::default()
    };
    assert_eq!(pf.set_viewbox(&attrs).unwrap_err().kind, ErrorKind::InvalidPreserveAspectRatio);
    assert!(pf.viewport_fit().is_none());
}

#[test]
fn css_style() {
    let mut pf = Pathfit::new();
    pf.set_viewbox(&ReferenceBox { view_box: Some("0 0 100 100"), ..ReferenceBox::default() })
        .unwrap();
    pf.set_object_style_css("object-fit: cover; object-position: right bottom").unwrap();
    pf.set_path("M0 0 100 100", None).unwrap();
    assert_eq!(pf.scale_with_object_fit(300.0, 200.0).unwrap(), "M0 -100 300 200");
}

#[test]
fn transform_parts_in_order() {
    let mut pf = Pathfit::new();
    pf.set_path("M1 1", None).unwrap();
    assert_eq!(pf.transform_all(&["translate(10)", "scale(2)"]).unwrap(), "M12 2");
}

#[test]
fn relative_arc_through_fit() {
    let mut pf = Pathfit::new();
    pf.set_viewbox(&ReferenceBox { view_box: Some("0 0 10 10"), ..ReferenceBox::default() })
        .unwrap();
    pf.set_path("M0 5a5 5 0 0 1 10 0z", None).unwrap();
    assert_eq!(pf.scale_with_aspect_ratio(20.0, 20.0).unwrap(), "M0 10a10 10 0 0 1 20 0z");
}

#[test]
fn error_message() {
    let mut pf = Pathfit::new();
    let e = pf.set_path("M0 0 L 1 x", None).unwrap_err();
    assert_eq!(e.kind, ErrorKind::ExpectedNumber);
    assert!(e.to_string().starts_with("expected number\n"));
}
