use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use mazevis_core::{Algorithm, AnimationController, load_mazes};

use crate::config::Config;
use crate::render::{self, Layout};
use crate::theme::Theme;

const TOAST_DURATION: f32 = 1.5;
const TOAST_FADE_START: f32 = 1.0;

/// Command-line choices for the animation window.
pub struct LaunchOptions {
    pub files: Vec<PathBuf>,
    pub algorithms: Vec<Algorithm>,
    /// 1-indexed maze to start on.
    pub start_maze: Option<usize>,
}

/// A user request decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    SelectAlgorithm(Algorithm),
    NextAlgorithm,
    NextMaze,
    PreviousMaze,
    Restart,
    Quit,
}

const BOUND_KEYS: [egui::Key; 11] = [
    egui::Key::B,
    egui::Key::D,
    egui::Key::Tab,
    egui::Key::ArrowRight,
    egui::Key::N,
    egui::Key::ArrowLeft,
    egui::Key::P,
    egui::Key::R,
    egui::Key::Escape,
    egui::Key::Q,
    egui::Key::Space,
];

fn request_for_key(key: egui::Key) -> Option<Request> {
    match key {
        egui::Key::B => Some(Request::SelectAlgorithm(Algorithm::BreadthFirst)),
        egui::Key::D => Some(Request::SelectAlgorithm(Algorithm::DepthFirst)),
        egui::Key::Tab => Some(Request::NextAlgorithm),
        egui::Key::ArrowRight | egui::Key::N => Some(Request::NextMaze),
        egui::Key::ArrowLeft | egui::Key::P => Some(Request::PreviousMaze),
        egui::Key::R | egui::Key::Space => Some(Request::Restart),
        egui::Key::Escape | egui::Key::Q => Some(Request::Quit),
        _ => None,
    }
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

struct MazeApp {
    controller: AnimationController,
    theme: Theme,
    cell_size: f32,
    last_frame: Instant,
    toast: Option<Toast>,
}

impl MazeApp {
    fn new(controller: AnimationController, theme: Theme, cell_size: f32) -> Self {
        Self {
            controller,
            theme,
            cell_size,
            last_frame: Instant::now(),
            toast: None,
        }
    }

    fn layout(&self) -> Layout {
        Layout::for_maze(self.controller.current_maze(), self.cell_size)
    }

    /// Resize and retitle the window for the current maze.
    fn maze_viewport_commands(&self) -> Vec<egui::ViewportCommand> {
        vec![
            egui::ViewportCommand::InnerSize(self.layout().window_size()),
            egui::ViewportCommand::Title(render::window_title(self.controller.current_maze())),
        ]
    }

    /// Apply a request and return the viewport commands it needs.
    fn handle(&mut self, request: Request) -> Vec<egui::ViewportCommand> {
        tracing::debug!(?request, "key request");
        match request {
            Request::SelectAlgorithm(algorithm) => {
                if !self.controller.select_algorithm(algorithm) {
                    self.toast = Some(Toast::new(format!(
                        "{} is not enabled",
                        algorithm.display_name()
                    )));
                }
                Vec::new()
            }
            Request::NextAlgorithm => {
                self.controller.next_algorithm();
                Vec::new()
            }
            Request::NextMaze => {
                if self.controller.next_maze() {
                    self.maze_viewport_commands()
                } else {
                    self.toast = Some(Toast::new("Already at the last maze".to_string()));
                    Vec::new()
                }
            }
            Request::PreviousMaze => {
                if self.controller.previous_maze() {
                    self.maze_viewport_commands()
                } else {
                    self.toast = Some(Toast::new("Already at the first maze".to_string()));
                    Vec::new()
                }
            }
            Request::Restart => {
                self.controller.restart();
                Vec::new()
            }
            Request::Quit => vec![egui::ViewportCommand::Close],
        }
    }

    fn draw_toast(&self, ui: &egui::Ui, rect: egui::Rect) {
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let color = Theme::with_opacity(self.theme.text, opacity * 0.9);
        let bg = Theme::with_opacity(self.theme.toast_background, opacity * 0.9);
        let font = egui::FontId::proportional(18.0);
        let galley = ui.painter().layout_no_wrap(toast.message.clone(), font, color);
        let padding = 12.0;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - galley.rect.height() - padding * 4.0,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0, bg);
        ui.painter().galley(
            egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding),
            galley,
            color,
        );
    }
}

impl eframe::App for MazeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let delta_ms = now.duration_since(self.last_frame).as_secs_f64() * 1000.0;
        self.last_frame = now;

        // Collected first; viewport commands must not be sent inside ctx.input().
        let mut requests = Vec::new();
        ctx.input(|i| {
            for key in BOUND_KEYS {
                if i.key_pressed(key) {
                    requests.extend(request_for_key(key));
                }
            }
        });

        let mut viewport_cmds = Vec::new();
        for request in requests {
            viewport_cmds.extend(self.handle(request));
        }

        let outcome = self.controller.tick(delta_ms);
        if outcome.switched_maze {
            viewport_cmds.extend(self.maze_viewport_commands());
        }
        if outcome.finished {
            tracing::info!("animation finished");
            viewport_cmds.push(egui::ViewportCommand::Close);
        }
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;
        let layout = self.layout();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                render::draw_frame(ui.painter(), rect, &self.theme, &layout, &self.controller);
                self.draw_toast(ui, rect);
            });

        ctx.request_repaint();
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let algorithms = if options.algorithms.is_empty() {
        config.algorithms()?
    } else {
        options.algorithms
    };
    let timing = config.timing()?;

    let paths = crate::commands::maze_paths(options.files);
    let report = load_mazes(&paths, &algorithms);
    crate::commands::print_load_failures(&report.failures);
    let mazes = report.into_mazes()?;

    let mut controller = AnimationController::new(mazes, algorithms, timing)?;
    if let Some(n) = options.start_maze {
        if n == 0 || !controller.select_maze(n - 1) {
            anyhow::bail!(
                "Maze {n} does not exist. {} maze(s) loaded.",
                controller.maze_count()
            );
        }
    }

    let theme = Theme::from_name(config.theme_name());
    let cell_size = config.cell_size() as f32;
    let layout = Layout::for_maze(controller.current_maze(), cell_size);
    let title = render::window_title(controller.current_maze());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(layout.window_size())
        .with_title(&title);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!(mazes = controller.maze_count(), "starting animation");
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(MazeApp::new(controller, theme, cell_size)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
