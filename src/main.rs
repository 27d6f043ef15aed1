use std::process::ExitCode;

use bevy::app::AppExit;
use third_person_controller::{core::ControllerConfig, generate_app, parse_config};

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match parse_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => ControllerConfig::default(),
    };

    let mut app = generate_app(config);
    match app.run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(_) => ExitCode::FAILURE,
    }
}
