//! Label functions: how windows are grouped into ranges and bars.

use crate::models::window::Window;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Raw window name
    Window,
    /// Parsed application identity
    #[default]
    App,
}

impl LabelMode {
    pub fn lm_as_str(&self) -> &'static str {
        match self {
            LabelMode::Window => "window",
            LabelMode::App => "app",
        }
    }

    /// Axis caption for charts built with this mode.
    pub fn x_label(&self) -> &'static str {
        match self {
            LabelMode::Window => "Window",
            LabelMode::App => "App",
        }
    }

    pub fn label(&self, w: &Window) -> String {
        match self {
            LabelMode::Window => window_label(w),
            LabelMode::App => app_label(w),
        }
    }
}

pub fn window_label(w: &Window) -> String {
    w.name.clone()
}

/// App, then sub app, then title, then the raw name.
pub fn app_label(w: &Window) -> String {
    let info = w.info();
    match info.app_label() {
        Some(label) => label.to_string(),
        None => w.name.clone(),
    }
}
