//! Snapshot tests for converted markup.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use miette::Diagnostic;
use svgjsx_codegen::{Indent, embed_template};
use svgjsx_convert::{ConversionError, MarkupConverter, SvgToJsx};
use svgjsx_core::ComponentName;

const INKSCAPE_EXPORT: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- Created with Inkscape (http://www.inkscape.org/) -->
<svg
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
   xmlns="http://www.w3.org/2000/svg"
   xmlns:xlink="http://www.w3.org/1999/xlink"
   width="24"
   height="24"
   viewBox="0 0 24 24"
   sodipodi:docname="star.svg">
  <sodipodi:namedview id="base" inkscape:zoom="8" />
  <defs>
    <linearGradient id="fade">
      <stop offset="0" style="stop-color:#ffcc00;stop-opacity:1" />
    </linearGradient>
  </defs>
  <g inkscape:label="Layer 1" inkscape:groupmode="layer" class="layer">
    <title>Star</title>
    <path
       fill-rule="evenodd"
       stroke-linejoin="round"
       d="M12 2l3 7h7l-6 4 2 7-6-4-6 4 2-7-6-4h7z" />
    <use xlink:href="#fade" />
  </g>
</svg>
"##;

#[test]
fn test_inkscape_export() {
    let jsx = SvgToJsx::new().convert("star.svg", INKSCAPE_EXPORT).unwrap();

    insta::assert_snapshot!(jsx, @r##"
<svg xmlns="http://www.w3.org/2000/svg" xmlnsXlink="http://www.w3.org/1999/xlink" width="24" height="24" viewBox="0 0 24 24">
  <defs>
    <linearGradient id="fade">
      <stop offset="0" style={{ stopColor: "#ffcc00", stopOpacity: "1" }} />
    </linearGradient>
  </defs>
  <g className="layer">
    <title>Star</title>
    <path fillRule="evenodd" strokeLinejoin="round" d="M12 2l3 7h7l-6 4 2 7-6-4-6 4 2-7-6-4h7z" />
    <use xlinkHref="#fade" />
  </g>
</svg>
"##);
}

#[test]
fn test_four_space_indent() {
    let jsx = SvgToJsx::with_indent(Indent::Spaces(4))
        .convert("box.svg", "<svg><g><rect width=\"1\"/></g></svg>")
        .unwrap();

    insta::assert_snapshot!(jsx, @r#"
<svg>
    <g>
        <rect width="1" />
    </g>
</svg>
"#);
}

#[test]
fn test_escaped_style_and_multiline_cdata_in_component() {
    let svg = concat!(
        "<svg><style><![CDATA[.a {\n  fill: red;\n}]]></style>",
        r#"<text style="font-family:&quot;Open Sans&quot;;fill:red">A</text></svg>"#,
    );
    let jsx = SvgToJsx::new().convert("label.svg", svg).unwrap();
    let code = embed_template(&ComponentName::parse("Label").unwrap(), &jsx, false);

    insta::assert_snapshot!(code, @r##"
const Label = ({ className, ...props }) => {
    return (
        <svg {...props}>
          <style>
            {`.a {\n  fill: red;\n}`}
          </style>
          <text style={{ fontFamily: "\"Open Sans\"", fill: "red" }}>A</text>
        </svg>
    );
};

export default Label;
"##);
}

#[test]
fn test_malformed_markup_diagnostic() {
    let err = SvgToJsx::new()
        .convert("broken.svg", "<svg><g></svg>")
        .unwrap_err();

    assert!(matches!(*err, ConversionError::Malformed { .. }));
    assert_eq!(
        err.code().map(|code| code.to_string()).as_deref(),
        Some("svgjsx::convert::malformed")
    );
}

#[test]
fn test_html_root_is_rejected() {
    let err = SvgToJsx::new()
        .convert("page.svg", "<html><body/></html>")
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"expected an <svg> root element, found <html>");
}
