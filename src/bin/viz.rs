use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use double_pendulum::config::SimConfig;
use double_pendulum::render::{self, AnimationClip, FrameWindow, Trace, VIEW_EXTENT};
use double_pendulum::sim::{self, Simulation};

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let config = SimConfig::default();
    let run = match sim::simulate(&config) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("simulation failed: {e}");
            std::process::exit(1);
        }
    };
    let simulation = run.simulation;

    let duration = simulation.last().time;
    let trace_window = FrameWindow::new(0.0, duration - config.dt, 0.02);
    let anim_window = FrameWindow::new(0.0, duration - config.dt, 1.0 / 30.0);
    let (trace, clip) = match (
        render::trace(&simulation, &trace_window),
        render::clip(&simulation, &anim_window, 1.0),
    ) {
        (Ok(t), Ok(c)) => (t, c),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("no frames: {e}");
            std::process::exit(1);
        }
    };

    let times = simulation.times();
    let kinetic = simulation.kinetic_energy();
    let potential = simulation.potential_energy();
    let total = kinetic.iter().zip(&potential).map(|(a, b)| a + b).collect();
    let drift = simulation.energy_drift_rate();

    let app = PendulumViz { simulation, trace, clip, times, kinetic, potential, total, drift };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Double Pendulum", options, Box::new(|_| Ok(Box::new(app))))
}

struct PendulumViz {
    simulation: Simulation,
    trace: Trace,
    clip: AnimationClip,
    // derived series, computed once
    times: Vec<f64>,
    kinetic: Vec<f64>,
    potential: Vec<f64>,
    total: Vec<f64>,
    drift: Option<f64>,
}

impl eframe::App for PendulumViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let samples = self.simulation.samples();
        let step = (samples.len() / 2000).max(1);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let s0 = &samples[0];
            ui.heading(format!(
                "x0 = {:.3}  y0 = {:.3}  x_dot0 = {:.3}  y_dot0 = {:.3}",
                s0.x(), s0.y(), s0.x_dot(), s0.y_dot()
            ));
            let drift = self
                .drift
                .map_or("n/a".to_string(), |d| format!("{:.2e}", d));
            ui.label(format!(
                "dt: {}  |  Steps: {}  |  Simulated: {:.1}  |  dE/E0/dt: {}",
                self.simulation.dt(),
                samples.len() - 1,
                self.simulation.last().time,
                drift,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Animated pendulum
                ui.vertical(|ui| {
                    let elapsed = ctx.input(|i| i.time);
                    let frame = self.clip.frame_at(elapsed);
                    ui.label(format!("t = {:.2}", frame.map_or(0.0, |f| f.time)));
                    Plot::new("pendulum")
                        .width(half_w)
                        .height(half_h)
                        .data_aspect(1.0)
                        .include_x(-VIEW_EXTENT)
                        .include_x(VIEW_EXTENT)
                        .include_y(-VIEW_EXTENT)
                        .include_y(VIEW_EXTENT)
                        .show(ui, |plot_ui| {
                            if let Some(f) = frame {
                                let rods: PlotPoints =
                                    vec![[0.0, 0.0], f.tips.elbow, f.tips.tip].into();
                                plot_ui.line(Line::new("Rods", rods));
                                let masses: PlotPoints = vec![f.tips.elbow, f.tips.tip].into();
                                plot_ui.points(Points::new("Masses", masses).radius(5.0));
                            }
                        });
                    ctx.request_repaint();
                });

                // Tip traces
                ui.vertical(|ui| {
                    ui.label("Traces");
                    let elbow: PlotPoints = self.trace.elbow.clone().into();
                    let tip: PlotPoints = self.trace.tip.clone().into();
                    Plot::new("traces")
                        .width(half_w)
                        .height(half_h)
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.points(Points::new("Inner mass", elbow).radius(1.0));
                            plot_ui.points(Points::new("Outer mass", tip).radius(1.0));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Energy vs Time
                ui.vertical(|ui| {
                    ui.label("Energy");
                    let series = |values: &[f64]| -> PlotPoints {
                        self.times
                            .iter()
                            .zip(values)
                            .step_by(step)
                            .map(|(&t, &v)| [t, v])
                            .collect()
                    };
                    Plot::new("energy")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Kinetic", series(&self.kinetic)));
                            plot_ui.line(Line::new("Potential", series(&self.potential)));
                            plot_ui.line(Line::new("Total", series(&self.total)));
                        });
                });

                // Angles vs Time
                ui.vertical(|ui| {
                    ui.label("Angles (rad)");
                    let x: PlotPoints = samples.iter().step_by(step).map(|s| [s.time, s.x()]).collect();
                    let y: PlotPoints = samples.iter().step_by(step).map(|s| [s.time, s.y()]).collect();
                    Plot::new("angles")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("x", x));
                            plot_ui.line(Line::new("y", y));
                        });
                });
            });
        });
    }
}
