// Standard Library Imports
use std::sync::atomic::{AtomicU64, Ordering};

// External Crate Imports
use dioxus::logger::tracing::{debug, trace};

use crate::scene::{
    Circle, GradientId, GradientStop, Line, LineCap, LinearGradient, Paint, Part, Primitive, Rect,
    Shape, Stroke, VectorScene, ViewBox,
};

// Public API ==========================================================================================================

/// Display parameters for a single icon
#[derive(Clone, PartialEq, Debug)]
pub struct IconConfig {
    /// Width and height of the viewport in pixels. Not validated: whatever is given ends up on the scene as-is
    pub size: f64,
    /// Opaque styling hook for the host application
    pub class_name: String,
}

impl IconConfig {
    pub const DEFAULT_SIZE: f64 = 40.0;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            class_name: String::new(),
        }
    }
}

/// Builds the robot icon's [`VectorScene`]. Each renderer owns its own gradient identifier, so every icon drawn on the
/// same page should get its own renderer.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IconRenderer {
    gradient_id: GradientId,
}

impl IconRenderer {
    #[must_use]
    pub fn new() -> Self {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        debug!(instance, "allocated a new robot icon renderer");

        Self::with_instance(instance)
    }

    #[must_use]
    pub const fn with_instance(instance: u64) -> Self {
        Self {
            gradient_id: GradientId::new(instance),
        }
    }

    #[must_use]
    pub const fn gradient_id(&self) -> GradientId {
        self.gradient_id
    }

    #[must_use]
    pub fn render(&self, config: &IconConfig) -> VectorScene {
        trace!(
            size = config.size,
            class_name = %config.class_name,
            gradient_id = %self.gradient_id,
            "rendering robot icon"
        );

        let gradient = Paint::Gradient(self.gradient_id);

        let head = rect(Part::Head, (20.0, 25.0, 60.0, 50.0), 8.0, gradient.clone())
            .with_stroke(Stroke {
                paint: Paint::Color(HEAD_OUTLINE),
                width: 2.0,
                linecap: None,
            });
        let antenna_tips = ANTENNA_XS.map(|x| circle(Part::AntennaTip, (x, 20.0), 4.0, gradient.clone()));
        let antenna_stems = ANTENNA_XS.map(|x| Shape {
            part: Part::AntennaStem,
            primitive: Primitive::Line(Line {
                x1: x,
                y1: 20.0,
                x2: x,
                y2: 25.0,
                stroke: Stroke {
                    paint: gradient.clone(),
                    width: 3.0,
                    linecap: Some(LineCap::Round),
                },
            }),
        });
        let eyes = EYE_XS.map(|x| {
            circle(Part::Eye, (x, 42.0), 6.0, Paint::Color(WHITE)).with_opacity(0.9)
        });
        let pupils = EYE_XS.map(|x| circle(Part::Pupil, (x, 42.0), 3.0, Paint::Color(INDIGO)));
        let mouth =
            rect(Part::Mouth, (42.0, 58.0, 16.0, 4.0), 2.0, Paint::Color(WHITE)).with_opacity(0.7);

        let shapes = [head]
            .into_iter()
            .chain(antenna_tips)
            .chain(antenna_stems)
            .chain(eyes)
            .chain(pupils)
            .chain([mouth])
            .collect();

        VectorScene {
            width: config.size,
            height: config.size,
            view_box: ViewBox::LOGICAL,
            class_name: config.class_name.clone(),
            shapes,
            gradient: self.gradient(),
        }
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// Private Helper Code =================================================================================================

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

const ANTENNA_XS: [f64; 2] = [35.0, 65.0];
const EYE_XS: [f64; 2] = [38.0, 62.0];

const WHITE: &str = "#ffffff";
const INDIGO: &str = "#667eea";
const PURPLE: &str = "#764ba2";
const PINK: &str = "#f093fb";
const HEAD_OUTLINE: &str = "rgba(255, 255, 255, 0.2)";

impl IconRenderer {
    fn gradient(&self) -> LinearGradient {
        let stops = [(0.0, INDIGO), (50.0, PURPLE), (100.0, PINK)]
            .into_iter()
            .map(|(offset, color)| GradientStop { offset, color })
            .collect();

        LinearGradient {
            id: self.gradient_id,
            x1: 0.0,
            y1: 0.0,
            x2: 100.0,
            y2: 100.0,
            stops,
        }
    }
}

fn rect(part: Part, (x, y, width, height): (f64, f64, f64, f64), rx: f64, fill: Paint) -> Shape {
    Shape {
        part,
        primitive: Primitive::Rect(Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            stroke: None,
            opacity: None,
        }),
    }
}

fn circle(part: Part, (cx, cy): (f64, f64), r: f64, fill: Paint) -> Shape {
    Shape {
        part,
        primitive: Primitive::Circle(Circle {
            cx,
            cy,
            r,
            fill,
            opacity: None,
        }),
    }
}

impl Shape {
    fn with_stroke(mut self, stroke: Stroke) -> Self {
        if let Primitive::Rect(rect) = &mut self.primitive {
            rect.stroke = Some(stroke);
        }
        self
    }

    fn with_opacity(mut self, opacity: f64) -> Self {
        match &mut self.primitive {
            Primitive::Rect(Rect { opacity: o, .. }) | Primitive::Circle(Circle { opacity: o, .. }) => {
                *o = Some(opacity);
            }
            Primitive::Line(_) => {}
        }
        self
    }
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    static RENDERER: LazyLock<IconRenderer> = LazyLock::new(|| IconRenderer::with_instance(0));

    fn stop_labels(scene: &VectorScene) -> Vec<String> {
        scene.gradient.stops.iter().map(ToString::to_string).collect()
    }

    fn gradient_references(scene: &VectorScene) -> Vec<&Paint> {
        scene
            .shapes
            .iter()
            .flat_map(|shape| match &shape.primitive {
                Primitive::Rect(rect) => {
                    let mut paints = vec![&rect.fill];
                    paints.extend(rect.stroke.as_ref().map(|stroke| &stroke.paint));
                    paints
                }
                Primitive::Circle(circle) => vec![&circle.fill],
                Primitive::Line(line) => vec![&line.stroke.paint],
            })
            .filter(|paint| matches!(paint, Paint::Gradient(_)))
            .collect()
    }

    #[test]
    fn default_config() {
        let config = IconConfig::new();

        assert_eq!(config.size, 40.0);
        assert_eq!(config.class_name, "");
        assert_eq!(config, IconConfig::default());
    }

    #[test]
    fn render_default() {
        let scene = RENDERER.render(&IconConfig::default());

        assert_eq!(scene.width, 40.0);
        assert_eq!(scene.height, 40.0);
        assert_eq!(scene.view_box, ViewBox::LOGICAL);
        assert_eq!(scene.class_name, "");

        let head: Vec<_> = scene.parts(Part::Head).collect();
        assert_eq!(
            head[..],
            [&Shape {
                part: Part::Head,
                primitive: Primitive::Rect(Rect {
                    x: 20.0,
                    y: 25.0,
                    width: 60.0,
                    height: 50.0,
                    rx: 8.0,
                    fill: Paint::Gradient(GradientId::new(0)),
                    stroke: Some(Stroke {
                        paint: Paint::Color("rgba(255, 255, 255, 0.2)"),
                        width: 2.0,
                        linecap: None,
                    }),
                    opacity: None,
                }),
            }]
        );

        assert_eq!(stop_labels(&scene), ["#667eea@0%", "#764ba2@50%", "#f093fb@100%"]);
    }

    #[test]
    fn render_sized_with_class() {
        let config = IconConfig::new().with_size(100.0).with_class_name("nav-icon");
        let scene = RENDERER.render(&config);
        let default_scene = RENDERER.render(&IconConfig::default());

        assert_eq!(scene.width, 100.0);
        assert_eq!(scene.height, 100.0);
        assert_eq!(scene.view_box, ViewBox::LOGICAL);
        assert_eq!(scene.class_name, "nav-icon");

        // Only the viewport and styling hook change, the geometry stays put
        assert_eq!(scene.shapes, default_scene.shapes);
        assert_eq!(scene.gradient, default_scene.gradient);
    }

    #[test]
    fn viewport_tracks_size() {
        for size in [1.0, 16.0, 24.5, 40.0, 512.0, 10_000.0] {
            let scene = RENDERER.render(&IconConfig::new().with_size(size));

            assert_eq!(scene.width, size);
            assert_eq!(scene.height, size);
            assert_eq!(scene.view_box.to_string(), "0 0 100 100");
        }
    }

    #[test]
    fn class_name_passes_through() {
        for class_name in ["", "nav-icon", "w-8 h-8 text-primary", "  spaced  ", "<weird & \"quoted\">"] {
            let scene = RENDERER.render(&IconConfig::new().with_class_name(class_name));

            assert_eq!(scene.class_name, class_name);
        }
    }

    #[test]
    fn invalid_sizes_pass_through() {
        let negative = RENDERER.render(&IconConfig::new().with_size(-12.0));
        assert_eq!(negative.width, -12.0);
        assert_eq!(negative.height, -12.0);

        let nan = RENDERER.render(&IconConfig::new().with_size(f64::NAN));
        assert!(nan.width.is_nan() && nan.height.is_nan());
        assert_eq!(nan.shape_count(), 10);
    }

    #[test]
    fn fixed_shape_set() {
        let scene = RENDERER.render(&IconConfig::default());

        let counts: Vec<_> = [
            Part::Head,
            Part::AntennaTip,
            Part::AntennaStem,
            Part::Eye,
            Part::Pupil,
            Part::Mouth,
        ]
        .into_iter()
        .map(|part| scene.parts(part).count())
        .collect();
        assert_eq!(counts, [1, 2, 2, 2, 2, 1]);
        assert_eq!(scene.shape_count(), 10);
        assert_eq!(scene.gradient.stops.len(), 3);

        let primitive_kinds: Vec<_> = scene
            .shapes
            .iter()
            .map(|shape| match shape.primitive {
                Primitive::Rect(_) => "rect",
                Primitive::Circle(_) => "circle",
                Primitive::Line(_) => "line",
            })
            .collect();
        assert_eq!(
            primitive_kinds,
            [
                "rect", "circle", "circle", "line", "line", "circle", "circle", "circle", "circle",
                "rect"
            ]
        );
    }

    #[test]
    fn eyes_and_mouth() {
        let scene = RENDERER.render(&IconConfig::default());

        let eyes: Vec<_> = scene.parts(Part::Eye).map(|shape| &shape.primitive).collect();
        assert_eq!(
            eyes[..],
            [
                &Primitive::Circle(Circle {
                    cx: 38.0,
                    cy: 42.0,
                    r: 6.0,
                    fill: Paint::Color("#ffffff"),
                    opacity: Some(0.9),
                }),
                &Primitive::Circle(Circle {
                    cx: 62.0,
                    cy: 42.0,
                    r: 6.0,
                    fill: Paint::Color("#ffffff"),
                    opacity: Some(0.9),
                }),
            ]
        );

        for pupil in scene.parts(Part::Pupil) {
            let Primitive::Circle(circle) = &pupil.primitive else {
                panic!("pupils should be circles, found {:?}", pupil.primitive);
            };
            assert_eq!(circle.r, 3.0);
            assert_eq!(circle.fill, Paint::Color("#667eea"));
        }

        let mouth: Vec<_> = scene.parts(Part::Mouth).map(|shape| &shape.primitive).collect();
        assert_eq!(
            mouth[..],
            [&Primitive::Rect(Rect {
                x: 42.0,
                y: 58.0,
                width: 16.0,
                height: 4.0,
                rx: 2.0,
                fill: Paint::Color("#ffffff"),
                stroke: None,
                opacity: Some(0.7),
            })]
        );
    }

    #[test]
    fn antenna_stems_join_tips_to_head() {
        let scene = RENDERER.render(&IconConfig::default());

        let tips: Vec<_> = scene
            .parts(Part::AntennaTip)
            .map(|shape| match &shape.primitive {
                Primitive::Circle(circle) => (circle.cx, circle.cy),
                primitive => panic!("antenna tips should be circles, found {primitive:?}"),
            })
            .collect();
        assert_eq!(tips, [(35.0, 20.0), (65.0, 20.0)]);

        for (stem, tip) in scene.parts(Part::AntennaStem).zip(tips) {
            let Primitive::Line(line) = &stem.primitive else {
                panic!("antenna stems should be lines, found {:?}", stem.primitive);
            };
            assert_eq!((line.x1, line.y1), tip);
            // The head's top edge
            assert_eq!((line.x2, line.y2), (tip.0, 25.0));
            assert_eq!(line.stroke.width, 3.0);
            assert_eq!(line.stroke.linecap, Some(LineCap::Round));
        }
    }

    #[test]
    fn render_is_idempotent() {
        let config = IconConfig::new().with_size(64.0).with_class_name("logo");
        let renderer = IconRenderer::new();

        assert_eq!(renderer.render(&config), renderer.render(&config));
        assert_eq!(renderer.clone().render(&config), renderer.render(&config));
    }

    #[test]
    fn gradient_ids_are_unique_per_renderer() {
        let renderers: Vec<_> = (0..8).map(|_| IconRenderer::new()).collect();

        for (i, a) in renderers.iter().enumerate() {
            for b in &renderers[i + 1..] {
                assert_ne!(a.gradient_id(), b.gradient_id());
            }
        }
    }

    #[test]
    fn gradient_references_stay_local() {
        let renderer = IconRenderer::with_instance(17);
        let scene = renderer.render(&IconConfig::default());

        assert_eq!(scene.gradient.id, renderer.gradient_id());

        // Head fill, both antenna tips, and both antenna stems
        let references = gradient_references(&scene);
        assert_eq!(references.len(), 5);
        assert!(
            references
                .iter()
                .all(|paint| **paint == Paint::Gradient(GradientId::new(17)))
        );
    }
}
