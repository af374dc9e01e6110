use color_eyre::Result;
use dioxus::{
    desktop::{self, WindowBuilder},
    logger::tracing::info,
    prelude::*,
};

use robot_icon::components::RobotIcon;

const INDEX_HTML: &str = include_str!("../index.html");

const PREVIEW_SIZES: [f64; 5] = [16.0, 24.0, 40.0, 64.0, 128.0];

#[component]
fn App() -> Element {
    use_hook(|| info!(sizes = ?PREVIEW_SIZES, "previewing robot icon"));

    rsx! {
        header {
            class: "header",

            RobotIcon { size: 96.0, class: "logo" }
            h1 { "Robot Icon" }
        }

        main {
            class: "previews",

            for size in PREVIEW_SIZES {
                Preview { key: "{size}", size }
            }
        }
    }
}

#[component]
fn Preview(size: f64) -> Element {
    rsx! {
        figure {
            class: "preview",

            RobotIcon { size, class: "preview-icon" }
            figcaption { "{size}px" }
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    dioxus::LaunchBuilder::new()
        .with_cfg(
            desktop::Config::default()
                .with_menu(None)
                .with_window(WindowBuilder::new().with_title("Robot Icon"))
                .with_custom_index(INDEX_HTML.to_string()),
        )
        .launch(App);

    Ok(())
}
