use clap::{Parser, Subcommand};
use lightstage_update::{AnimatedEntity, FrameDriver, ShadowRig, advance};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lightstage-cli", about = "Headless demos of the lightstage core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Run the orbit/bob animation headless and print entity poses
    Animate {
        /// Number of frames to advance
        #[arg(short, long, default_value = "10")]
        frames: u64,
        /// Frame interval in seconds
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Number of animated entities
        #[arg(short, long, default_value = "4")]
        entities: usize,
    },
    /// Drive the shadow camera controls and print the resulting frustum
    Frustum {
        /// Frustum width and height
        #[arg(short, long, default_value = "40")]
        size: f32,
        /// Near plane (far follows if it would cross under)
        #[arg(long, default_value = "0.5")]
        near: f32,
        /// Far plane
        #[arg(long, default_value = "100")]
        far: f32,
    },
    /// Serialize a default shadow rig to JSON on stdout
    Dump,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("lightstage-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: {}", lightstage_scene::crate_info());
            println!("bind: {}", lightstage_bind::crate_info());
            println!("view: {}", lightstage_view::crate_info());
            println!("update: {}", lightstage_update::crate_info());
        }
        Commands::Animate {
            frames,
            dt,
            entities,
        } => {
            println!("Animating {entities} entities for {frames} frames at dt={dt}");
            let mut scene: Vec<AnimatedEntity> =
                (0..entities).map(|i| AnimatedEntity::new(i, 3.0)).collect();
            let mut driver = FrameDriver::new();

            for frame in 0..frames {
                let elapsed = frame as f32 * dt;
                driver.advance_to(&mut scene, elapsed, |s, t| {
                    advance(s, t);
                    Ok(())
                })?;
            }

            for e in &scene {
                let p = e.primary.position;
                println!(
                    "  [{}] primary=({:.2}, {:.2}, {:.2}) shadow_opacity={:.2}",
                    e.index, p.x, p.y, p.z, e.shadow.opacity
                );
            }
            println!("Frames completed: {}", driver.frame());
        }
        Commands::Frustum { size, near, far } => {
            println!("Shadow frustum: size={size}, near={near}, far={far}");
            let mut rig = ShadowRig::new();
            let mut propagation = ShadowRig::propagation();

            ShadowRig::width_binding().set_value(&mut rig, size);
            ShadowRig::height_binding().set_value(&mut rig, size);
            let near_far = ShadowRig::near_far_binding();
            near_far.set_min(&mut rig, near);
            near_far.set_max(&mut rig, far);
            propagation.run(&mut rig)?;

            println!(
                "Effective near/far: {} / {}",
                near_far.min(&rig),
                near_far.max(&rig)
            );
            for (i, c) in rig.camera_helper.corners().iter().enumerate() {
                let plane = if i < 4 { "near" } else { "far " };
                println!("  {plane} corner ({:>6.2}, {:>6.2}, {:>8.2})", c.x, c.y, c.z);
            }
        }
        Commands::Dump => {
            let mut rig = ShadowRig::new();
            let mut propagation = ShadowRig::propagation();
            propagation.run(&mut rig)?;
            println!("{}", serde_json::to_string_pretty(&rig)?);
        }
    }

    Ok(())
}
