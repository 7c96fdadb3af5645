#[macro_use]
extern crate log;

use std::path::PathBuf;
use std::process;

use env_logger::Env;
use structopt::StructOpt;

use raylaunch::*;

const DEFAULT_LOGGING_LEVEL: &str = "info";

#[derive(Debug, StructOpt)]
#[structopt(name = "raylaunch", about = "Fires rays at spheres and reports where they hit.")]
struct Opt {
    /// JSON scene file. The built-in demo scene is used if omitted.
    #[structopt(short, long, parse(from_os_str))]
    scene: Option<PathBuf>,

    /// Spread the rays across a thread pool.
    #[structopt(short, long)]
    parallel: bool,

    /// Reject zero-length directions and negative radii instead of letting
    /// NaN through.
    #[structopt(long)]
    strict: bool,

    /// Thread pool size for --parallel. Defaults to one per CPU.
    #[structopt(short, long)]
    threads: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    let opt = Opt::from_args();

    if let Err(e) = run(opt) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(threads) = opt.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let scene = match &opt.scene {
        Some(path) => {
            info!("loading scene from {}", path.display());
            Scene::load(path)?
        }
        None => Scene::demo(),
    };

    if opt.strict {
        validate(&scene.rays, &scene.spheres)?;
    }

    info!(
        "launching {} rays at {} spheres",
        scene.rays.len(),
        scene.spheres.len()
    );
    let hits = if opt.parallel {
        par_launch_indexed(&scene.rays, &scene.spheres)
    } else {
        launch_indexed(&scene.rays, &scene.spheres)
    };

    for hit in &hits {
        println!("{}", describe(hit));
    }
    info!("done: {} intersections", hits.len());
    Ok(())
}

fn describe(hit: &LaunchHit) -> String {
    let p = hit.intersection.point;
    let s = hit.intersection.sphere;
    format!(
        "ray {}: intersection at ({:.6}, {:.6}, {:.6}) with sphere centered at ({:.6}, {:.6}, {:.6}), radius {:.6}",
        hit.ray, p.0, p.1, p.2, s.center.0, s.center.1, s.center.2, s.radius
    )
}
