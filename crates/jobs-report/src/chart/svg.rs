//! Minimal SVG canvas over the quick-xml event writer.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{ReportError, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Horizontal alignment of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Format a coordinate with one decimal so output is byte-stable.
pub fn coord(value: f64) -> String {
    format!("{value:.1}")
}

/// SVG document under construction, buffered in memory.
pub struct SvgCanvas {
    name: String,
    writer: Writer<Vec<u8>>,
}

impl SvgCanvas {
    /// Start a document of `width` x `height` with a white background.
    pub fn new(name: &str, width: f64, height: f64) -> Result<Self> {
        let mut canvas = Self {
            name: name.to_string(),
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        };
        canvas.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let (w, h) = (coord(width), coord(height));
        let view_box = format!("0 0 {w} {h}");
        canvas.emit(Event::Start(BytesStart::new("svg").with_attributes([
            ("xmlns", SVG_NS),
            ("width", w.as_str()),
            ("height", h.as_str()),
            ("viewBox", view_box.as_str()),
            ("font-family", FONT_FAMILY),
        ])))?;
        canvas.rect(0.0, 0.0, width, height, "#ffffff", None)?;
        Ok(canvas)
    }

    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &str,
        tooltip: Option<&str>,
    ) -> Result<()> {
        let (x, y) = (coord(x), coord(y));
        let (w, h) = (coord(width.max(0.0)), coord(height.max(0.0)));
        let element = BytesStart::new("rect").with_attributes([
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("width", w.as_str()),
            ("height", h.as_str()),
            ("fill", fill),
        ]);
        match tooltip {
            Some(text) => {
                self.emit(Event::Start(element))?;
                self.text_element("title", text)?;
                self.emit(Event::End(BytesEnd::new("rect")))
            }
            None => self.emit(Event::Empty(element)),
        }
    }

    /// Unfilled rectangle with a stroke.
    pub fn outline(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &str,
        stroke: &str,
    ) -> Result<()> {
        let (x, y) = (coord(x), coord(y));
        let (w, h) = (coord(width.max(0.0)), coord(height.max(0.0)));
        self.emit(Event::Empty(BytesStart::new("rect").with_attributes([
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("width", w.as_str()),
            ("height", h.as_str()),
            ("fill", fill),
            ("stroke", stroke),
        ])))
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> Result<()> {
        let (x1, y1, x2, y2) = (coord(x1), coord(y1), coord(x2), coord(y2));
        self.emit(Event::Empty(BytesStart::new("line").with_attributes([
            ("x1", x1.as_str()),
            ("y1", y1.as_str()),
            ("x2", x2.as_str()),
            ("y2", y2.as_str()),
            ("stroke", stroke),
        ])))
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, stroke: &str) -> Result<()> {
        let (cx, cy, r) = (coord(cx), coord(cy), coord(r));
        self.emit(Event::Empty(BytesStart::new("circle").with_attributes([
            ("cx", cx.as_str()),
            ("cy", cy.as_str()),
            ("r", r.as_str()),
            ("fill", "none"),
            ("stroke", stroke),
        ])))
    }

    /// Text at (`x`, `y`), optionally rotated around that point.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        anchor: Anchor,
        size: u32,
        rotate: Option<f64>,
        content: &str,
    ) -> Result<()> {
        let (x_attr, y_attr) = (coord(x), coord(y));
        let size = size.to_string();
        let mut element = BytesStart::new("text").with_attributes([
            ("x", x_attr.as_str()),
            ("y", y_attr.as_str()),
            ("font-size", size.as_str()),
            ("text-anchor", anchor.as_str()),
        ]);
        if let Some(angle) = rotate {
            let transform = format!("rotate({} {} {})", coord(angle), x_attr, y_attr);
            element.push_attribute(("transform", transform.as_str()));
        }
        self.emit(Event::Start(element))?;
        self.emit(Event::Text(BytesText::new(content)))?;
        self.emit(Event::End(BytesEnd::new("text")))
    }

    /// Close the document and return its text.
    pub fn finish(mut self) -> Result<String> {
        self.emit(Event::End(BytesEnd::new("svg")))?;
        let bytes = self.writer.into_inner();
        String::from_utf8(bytes).map_err(|error| ReportError::Chart {
            name: self.name,
            message: error.to_string(),
        })
    }

    fn text_element(&mut self, name: &str, content: &str) -> Result<()> {
        self.emit(Event::Start(BytesStart::new(name)))?;
        self.emit(Event::Text(BytesText::new(content)))?;
        self.emit(Event::End(BytesEnd::new(name)))
    }

    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|error| ReportError::Chart {
                name: self.name.clone(),
                message: error.to_string(),
            })
    }
}
