use anyhow::{Context, Result};
use clap::Parser;
use influence::demo::{create_demo_scene, DEFAULT_EYE};
use influence::{CameraSettings, Vector3};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera position as x,y,z
    #[arg(long, default_value_t = DEFAULT_EYE)]
    eye: Vector3,

    /// Point the camera looks at, as x,y,z
    #[arg(long, default_value_t = Vector3::ZERO)]
    target: Vector3,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Near clipping plane
    #[arg(long, default_value_t = 0.1)]
    near: f32,

    /// Far clipping plane
    #[arg(long, default_value_t = 1000.0)]
    far: f32,

    /// Viewport width over height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f32,

    /// World-space point to project, as x,y,z
    #[arg(long)]
    point: Option<Vector3>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.eye == args.target {
        log::warn!("--eye and --target coincide, keeping the default orientation");
    }

    let settings = CameraSettings {
        field_of_view: args.fov,
        near: args.near,
        far: args.far,
        aspect: args.aspect,
    };
    let scene = create_demo_scene(settings, args.eye, args.target)
        .context("Failed to build the demo scene")?;

    let main = scene.main_camera().context("Demo scene has no main camera")?;
    let camera = main.camera.as_ref().context("Main camera object lost its camera")?;

    println!("Camera at {} looking along {}", main.transform.position(), main.transform.forward());
    println!("View:\n{}", camera.view_matrix(&main.transform));
    println!("Projection:\n{}", camera.projection_matrix());

    let point = args.point.unwrap_or(args.target);
    let clip = camera.world_to_clip(&main.transform, point);
    println!("{} -> {}", point, clip);

    for object in scene.objects() {
        log::info!("{} '{}' at {}", object.id(), object.name, object.transform.position());
    }

    Ok(())
}
