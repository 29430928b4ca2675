use std::process::ExitCode;

use journey_engine::logging::{init_logging, LoggingConfig};
use journey_lessons::Lesson;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let lesson = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Lesson>() {
            Ok(lesson) => lesson,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Lesson::default(),
    };

    match lesson.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{lesson} failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
