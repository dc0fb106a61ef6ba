use anyhow::{Context, Result};
use clap::Parser;

use suzanne_island::camera::NavigationMode;
use suzanne_island::cli::Cli;
use suzanne_island::config::SceneConfig;
use suzanne_island::core::InputSnapshot;
use suzanne_island::frame::FixedFrames;
use suzanne_island::scene::{CullStats, Scene};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if cli.follow_path {
        config.camera.navigation = NavigationMode::FollowPath;
    }
    if cli.no_culling {
        config.frustum_culling = false;
    }

    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let mut scene = Scene::new(&config).context("Failed to build scene")?;
    log::info!(
        "scene with {} objects, navigation {:?}, culling {}",
        scene.objects().len(),
        scene.navigation().mode(),
        scene.frustum_culling()
    );

    let input = InputSnapshot::idle();
    let mut total = CullStats::default();
    let report_every = cli.report_every.max(1);

    for frame in FixedFrames::new(cli.frames, cli.dt) {
        if !scene.is_running() {
            break;
        }
        scene.update(&input, frame.delta)?;

        let stats = scene.cull();
        total.candidates += stats.candidates;
        total.drawn += stats.drawn;

        if frame.number % report_every == 0 {
            let camera = scene.camera().location();
            log::info!(
                "frame {:>5} t={:>6.2}s camera=({:.1}, {:.1}, {:.1}) drawn {}/{} sun {:?}",
                frame.number,
                frame.time,
                camera.x,
                camera.y,
                camera.z,
                stats.drawn,
                stats.candidates,
                scene.sun().day_time()
            );
        }
    }

    log::info!(
        "done: {} surfaces drawn, {} culled",
        total.drawn,
        total.culled()
    );
    Ok(())
}
