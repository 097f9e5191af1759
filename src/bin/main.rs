use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use particle_life::{Color, Config, Simulation};

#[derive(Parser, Debug)]
#[command(about = "Groups of particles pulling and pushing each other around")]
struct Args {
    /// YAML configuration; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for initial placement, overrides the configuration
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run this many frames without a window and report where the groups ended up
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,
}

fn color32([r, g, b]: Color) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

struct ParticleLife {
    simulation: Simulation,
    background: egui::Color32,
    particle_radius: f32,
    step_interval: Duration,
    last_frame_time: Instant,
    accumulated_time: Duration,
}

impl ParticleLife {
    fn new(config: &Config, simulation: Simulation) -> Self {
        Self {
            simulation,
            background: color32(config.window.background),
            particle_radius: config.arena.radius as f32,
            step_interval: Duration::from_secs_f64(1.0 / f64::from(config.window.fps)),
            last_frame_time: Instant::now(),
            accumulated_time: Duration::ZERO,
        }
    }
}

impl eframe::App for ParticleLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_time = Instant::now();
        self.accumulated_time += current_time.duration_since(self.last_frame_time);
        self.last_frame_time = current_time;

        // one step per repaint at most, the window never fast-forwards
        if self.accumulated_time >= self.step_interval {
            self.simulation.step();
            self.accumulated_time = self.accumulated_time.saturating_sub(self.step_interval);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.background))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let painter = ui.painter_at(rect);

                for group in self.simulation.groups() {
                    let color = color32(group.color);
                    for particle in group.iter() {
                        let center = rect.min
                            + egui::vec2(particle.position.x as f32, particle.position.y as f32);
                        painter.circle_filled(center, self.particle_radius, color);
                    }
                }
            });

        ctx.request_repaint();
    }
}

fn run_headless(mut simulation: Simulation, frames: u64) {
    let started = Instant::now();
    for _ in 0..frames {
        simulation.step();
    }
    log::info!("ran {} frames in {:.3}s", simulation.frame(), started.elapsed().as_secs_f64());

    for group in simulation.groups() {
        log::info!("{}", group.summary());
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    let (simulation, seed) =
        Simulation::from_config(&config, args.seed).context("invalid configuration")?;

    if let Some(frames) = args.headless {
        run_headless(simulation, frames);
        log::info!("replay with --seed {}", seed);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        initial_window_size: Some(egui::vec2(
            config.window.width as f32,
            config.window.height as f32,
        )),
        resizable: false,
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(ParticleLife::new(&config, simulation))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}
