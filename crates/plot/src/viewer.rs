//! Interactive egui window for inspecting traces.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::Trace;

/// Configuration for [`show`].
///
/// # Example
///
/// ```ignore
/// show(traces, ShowConfig::new().title("Pendulum Dynamics").legend())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a config with defaults: no title, no axis labels, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x and y axis labels.
    #[must_use]
    pub fn labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

/// Opens a blocking egui window displaying `traces`.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(traces: Vec<Trace>, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.clone().unwrap_or_default();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp { traces, config }))),
    )
}

/// The egui [`eframe::App`] that renders the traces.
struct ViewerApp {
    traces: Vec<Trace>,
    config: ShowConfig,
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("pendulum_viewer");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.as_str());
            }
            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let points: PlotPoints = trace.points().iter().copied().collect();
                    plot_ui.line(Line::new(points).name(trace.name()));
                }
            });
        });
    }
}
