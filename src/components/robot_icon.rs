use dioxus::prelude::*;

use crate::{
    icon::{IconConfig, IconRenderer},
    scene::{Primitive, Shape, XMLNS},
};

/// The robot face logo. Each mounted instance keeps its own [`IconRenderer`], so any number of them can share a page
/// without their gradients clashing.
#[component]
pub fn RobotIcon(
    /// Width and height in pixels
    #[props(default = IconConfig::DEFAULT_SIZE)]
    size: f64,
    /// Passed straight through to the `<svg>` element's `class`
    #[props(default, into)]
    class: String,
) -> Element {
    let renderer = use_hook(IconRenderer::new);
    let scene = renderer.render(&IconConfig::new().with_size(size).with_class_name(class));

    let [width, height] = [scene.width, scene.height].map(number);
    let view_box = scene.view_box.to_string();
    let gradient = &scene.gradient;
    let gradient_id = gradient.id.to_string();
    let [x1, y1, x2, y2] = [gradient.x1, gradient.y1, gradient.x2, gradient.y2].map(percent);

    rsx! {
        svg {
            class: scene.class_name.clone(),
            width,
            height,
            view_box,
            fill: "none",
            xmlns: XMLNS,
            style: "display: block",

            for shape in &scene.shapes {
                { shape_element(shape) }
            }

            defs {
                linearGradient {
                    id: gradient_id,
                    x1,
                    y1,
                    x2,
                    y2,

                    for gradient_stop in &gradient.stops {
                        stop {
                            offset: percent(gradient_stop.offset),
                            stop_color: gradient_stop.color,
                        }
                    }
                }
            }
        }
    }
}

fn number(value: f64) -> String {
    value.to_string()
}

fn percent(value: f64) -> String {
    format!("{value}%")
}

fn shape_element(shape: &Shape) -> Element {
    match &shape.primitive {
        Primitive::Rect(rect) => {
            let stroke = rect.stroke.as_ref();

            rsx! {
                rect {
                    x: number(rect.x),
                    y: number(rect.y),
                    width: number(rect.width),
                    height: number(rect.height),
                    rx: number(rect.rx),
                    fill: rect.fill.to_string(),
                    stroke: stroke.map(|stroke| stroke.paint.to_string()),
                    stroke_width: stroke.map(|stroke| number(stroke.width)),
                    stroke_linecap: stroke.and_then(|stroke| stroke.linecap).map(|linecap| linecap.to_string()),
                    opacity: rect.opacity.map(number),
                }
            }
        }
        Primitive::Circle(circle) => rsx! {
            circle {
                cx: number(circle.cx),
                cy: number(circle.cy),
                r: number(circle.r),
                fill: circle.fill.to_string(),
                opacity: circle.opacity.map(number),
            }
        },
        Primitive::Line(line) => rsx! {
            line {
                x1: number(line.x1),
                y1: number(line.y1),
                x2: number(line.x2),
                y2: number(line.y2),
                stroke: line.stroke.paint.to_string(),
                stroke_width: number(line.stroke.width),
                stroke_linecap: line.stroke.linecap.map(|linecap| linecap.to_string()),
            }
        },
    }
}

// Unit Tests ==========================================================================================================
