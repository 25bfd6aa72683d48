use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};
use solidraster::config::DEFAULT_ANIMATION_DIR;
use solidraster::prelude::*;

const DEFAULT_OUTPUT: &str = "scene.png";

struct Args {
    output: PathBuf,
    frames: usize,
    display: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        output: PathBuf::from(DEFAULT_OUTPUT),
        frames: 0,
        display: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--display" => args.display = true,
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value
                    .parse()
                    .map_err(|_| format!("invalid frame count '{}'", value))?;
            }
            _ if arg.starts_with("--") => return Err(format!("unknown option '{}'", arg)),
            _ => args.output = PathBuf::from(arg),
        }
    }
    Ok(args)
}

/// A box, a sphere resting on it and a torus around the sphere, all turning
/// with the `spin` knob.
fn demo_scene(args: &Args) -> Vec<Command> {
    let spin = || Some("spin".to_string());
    let mut commands = vec![
        Command::Light(PointLight::new(Vec3::new(0.5, 0.75, 1.0), Color::new(255, 220, 200))),
        Command::Push,
        Command::Move {
            x: 250.0,
            y: 250.0,
            z: 0.0,
            knob: None,
        },
        Command::Rotate {
            axis: Axis::Y,
            degrees: 30.0,
            knob: spin(),
        },
        Command::Rotate {
            axis: Axis::X,
            degrees: 20.0,
            knob: None,
        },
        Command::Push,
        Command::Move {
            x: 0.0,
            y: -60.0,
            z: 0.0,
            knob: None,
        },
        Command::Box {
            corner: [-100.0, 0.0, 100.0],
            size: [200.0, 60.0, 200.0],
            material: Some("shiny".to_string()),
        },
        Command::Pop,
        Command::Sphere {
            center: [0.0, 20.0, 0.0],
            radius: 70.0,
            material: None,
        },
        Command::Rotate {
            axis: Axis::X,
            degrees: 90.0,
            knob: spin(),
        },
        Command::Torus {
            center: [0.0, 0.0, 0.0],
            r1: 12.0,
            r2: 110.0,
            material: Some("shiny".to_string()),
        },
        Command::Pop,
        Command::Curve {
            kind: CurveKind::Bezier,
            points: [[30.0, 460.0], [150.0, 520.0], [350.0, 400.0], [470.0, 460.0]],
        },
    ];

    if args.frames == 0 {
        commands.push(Command::Save(args.output.clone()));
        if args.display {
            commands.push(Command::Display);
        }
    }
    commands
}

fn run(args: &Args) -> Result<(), RenderError> {
    let mut engine = Engine::new(RenderConfig::default());
    engine.define_material("shiny", Material::uniform(0.2, 0.4, 0.9));
    let commands = demo_scene(args);

    if args.frames == 0 {
        engine.run(&commands, &|name: &str| (name == "spin").then_some(1.0))
    } else {
        let animation = Animation::new(
            args.frames,
            Some("demo".to_string()),
            vec![Vary::new("spin", 0, args.frames - 1, 0.0, 12.0)],
        )?;
        let written = engine.render_animation(&commands, &animation, DEFAULT_ANIMATION_DIR)?;
        info!("wrote {} frames to {}", written.len(), DEFAULT_ANIMATION_DIR);
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: solidraster [OUTPUT.png] [--frames N] [--display]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
