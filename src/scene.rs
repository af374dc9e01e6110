// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// External Crate Imports
use serde_json::{Value, json};

// Public API ==========================================================================================================

pub const XMLNS: &str = "http://www.w3.org/2000/svg";
pub const GRADIENT_ID_PREFIX: &str = "robotGradient";

/// A complete, immutable description of one rendered icon: the viewport it's painted at, the fixed shapes that make up
/// the robot, and the gradient those shapes are painted with.
///
/// The `Display` implementation writes the scene out as standalone SVG markup.
#[derive(Clone, PartialEq, Debug)]
pub struct VectorScene {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
    pub class_name: String,
    pub shapes: Vec<Shape>,
    pub gradient: LinearGradient,
}

impl VectorScene {
    pub fn parts(&self, part: Part) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |shape| shape.part == part)
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// The logical coordinate box that all shape geometry is defined in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const LOGICAL: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        width: 100.0,
        height: 100.0,
    };
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Part {
    Head,
    AntennaTip,
    AntennaStem,
    Eye,
    Pupil,
    Mouth,
}

impl Part {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::AntennaTip => "antenna-tip",
            Self::AntennaStem => "antenna-stem",
            Self::Eye => "eye",
            Self::Pupil => "pupil",
            Self::Mouth => "mouth",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Shape {
    pub part: Part,
    pub primitive: Primitive,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Primitive {
    Rect(Rect),
    Circle(Circle),
    Line(Line),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub fill: Paint,
    pub stroke: Option<Stroke>,
    pub opacity: Option<f64>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Paint,
    pub opacity: Option<f64>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Paint {
    Gradient(GradientId),
    Color(&'static str),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub linecap: Option<LineCap>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LineCap {
    Round,
}

/// Identifies the gradient of a single icon instance, so that several icons on one page never pick up each other's
/// `<linearGradient>` definitions
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GradientId(u64);

impl GradientId {
    #[must_use]
    pub const fn new(instance: u64) -> Self {
        Self(instance)
    }
}

/// A linear gradient whose endpoints are given as percentages of the painted shape's bounding box
#[derive(Clone, PartialEq, Debug)]
pub struct LinearGradient {
    pub id: GradientId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct GradientStop {
    /// Percentage along the gradient vector
    pub offset: f64,
    pub color: &'static str,
}

// SVG Markup ==========================================================================================================

impl Display for VectorScene {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            width,
            height,
            view_box,
            class_name,
            shapes,
            gradient,
        } = self;
        let class_name = XmlEscaped(class_name);

        writeln!(
            f,
            r#"<svg width="{width}" height="{height}" viewBox="{view_box}" fill="none" xmlns="{XMLNS}" class="{class_name}" style="display: block">"#
        )?;
        for shape in shapes {
            writeln!(f, "  {}", shape.primitive)?;
        }
        writeln!(f, "  <defs>")?;
        writeln!(
            f,
            r#"    <linearGradient id="{}" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
            gradient.id, gradient.x1, gradient.y1, gradient.x2, gradient.y2
        )?;
        for stop in &gradient.stops {
            writeln!(
                f,
                r#"      <stop offset="{}%" stop-color="{}"/>"#,
                stop.offset, stop.color
            )?;
        }
        writeln!(f, "    </linearGradient>")?;
        writeln!(f, "  </defs>")?;
        writeln!(f, "</svg>")
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect(rect) => {
                write!(
                    f,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
                    rect.x, rect.y, rect.width, rect.height, rect.rx, rect.fill
                )?;
                if let Some(stroke) = &rect.stroke {
                    write!(f, "{stroke}")?;
                }
                write_opacity(f, rect.opacity)?;
            }
            Self::Circle(circle) => {
                write!(
                    f,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                    circle.cx, circle.cy, circle.r, circle.fill
                )?;
                write_opacity(f, circle.opacity)?;
            }
            Self::Line(line) => {
                write!(
                    f,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}"#,
                    line.x1, line.y1, line.x2, line.y2, line.stroke
                )?;
            }
        }

        f.write_str("/>")
    }
}

// NOTE: Writes a leading space so that it can be dropped straight into the attribute list of an element
impl Display for Stroke {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, r#" stroke="{}" stroke-width="{}""#, self.paint, self.width)?;
        if let Some(linecap) = self.linecap {
            write!(f, r#" stroke-linecap="{linecap}""#)?;
        }

        Ok(())
    }
}

impl Display for ViewBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

impl Display for Paint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gradient(id) => write!(f, "url(#{id})"),
            Self::Color(color) => f.write_str(color),
        }
    }
}

impl Display for LineCap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Round => "round",
        })
    }
}

impl Display for GradientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{GRADIENT_ID_PREFIX}-{}", self.0)
    }
}

impl Display for GradientStop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}%", self.color, self.offset)
    }
}

// JSON Description ====================================================================================================

impl From<&VectorScene> for Value {
    fn from(value: &VectorScene) -> Self {
        let shapes: Vec<_> = value.shapes.iter().map(Self::from).collect();

        json!({
            "width": dimension(value.width),
            "height": dimension(value.height),
            "viewBox": value.view_box.to_string(),
            "className": value.class_name,
            "shapes": shapes,
            "gradient": Self::from(&value.gradient),
        })
    }
}

impl From<VectorScene> for Value {
    fn from(value: VectorScene) -> Self {
        Self::from(&value)
    }
}

impl From<&Shape> for Value {
    fn from(value: &Shape) -> Self {
        let mut shape = Self::from(&value.primitive);
        shape["part"] = json!(value.part.as_str());
        shape
    }
}

impl From<&Primitive> for Value {
    fn from(value: &Primitive) -> Self {
        match value {
            Primitive::Rect(rect) => {
                let mut json = json!({
                    "type": "rect",
                    "x": rect.x,
                    "y": rect.y,
                    "width": rect.width,
                    "height": rect.height,
                    "rx": rect.rx,
                    "fill": rect.fill.to_string(),
                });
                if let Some(stroke) = &rect.stroke {
                    json["stroke"] = Self::from(stroke);
                }
                if let Some(opacity) = rect.opacity {
                    json["opacity"] = json!(opacity);
                }
                json
            }
            Primitive::Circle(circle) => {
                let mut json = json!({
                    "type": "circle",
                    "cx": circle.cx,
                    "cy": circle.cy,
                    "r": circle.r,
                    "fill": circle.fill.to_string(),
                });
                if let Some(opacity) = circle.opacity {
                    json["opacity"] = json!(opacity);
                }
                json
            }
            Primitive::Line(line) => json!({
                "type": "line",
                "x1": line.x1,
                "y1": line.y1,
                "x2": line.x2,
                "y2": line.y2,
                "stroke": Self::from(&line.stroke),
            }),
        }
    }
}

impl From<&Stroke> for Value {
    fn from(value: &Stroke) -> Self {
        let mut json = json!({
            "paint": value.paint.to_string(),
            "width": value.width,
        });
        if let Some(linecap) = value.linecap {
            json["linecap"] = json!(linecap.to_string());
        }
        json
    }
}

impl From<&LinearGradient> for Value {
    fn from(value: &LinearGradient) -> Self {
        let stops: Vec<_> = value
            .stops
            .iter()
            .map(|stop| {
                json!({
                    "offset": format!("{}%", stop.offset),
                    "color": stop.color,
                })
            })
            .collect();

        json!({
            "id": value.id.to_string(),
            "x1": format!("{}%", value.x1),
            "y1": format!("{}%", value.y1),
            "x2": format!("{}%", value.x2),
            "y2": format!("{}%", value.y2),
            "stops": stops,
        })
    }
}

// Private Helper Code =================================================================================================

// NOTE: JSON has no NaN or infinity, so those sizes are written as strings instead of collapsing to `null`
fn dimension(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else {
        json!(value.to_string())
    }
}

fn write_opacity(f: &mut Formatter<'_>, opacity: Option<f64>) -> fmt::Result {
    if let Some(opacity) = opacity {
        write!(f, r#" opacity="{opacity}""#)?;
    }

    Ok(())
}

struct XmlEscaped<'a>(&'a str);

impl Display for XmlEscaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => write!(f, "{c}")?,
            }
        }

        Ok(())
    }
}

// Unit Tests ==========================================================================================================
