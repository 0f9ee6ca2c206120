extern crate termcolor;

use cf_selector::{
    handles::Validation,
    problem::ProblemEntry,
    render::{Surface, EMPTY_MESSAGE},
};
use std::io::Write;
use termcolor::{Color, StandardStream, WriteColor};

pub struct Terminal {
    pub stdout: StandardStream,
}
impl Terminal {
    pub fn new(stdout: StandardStream) -> Self {
        Terminal { stdout }
    }
}

impl Surface for Terminal {
    /// Printed lines stay on screen, so there is nothing to take back.
    fn clear_status(&mut self) {}
    fn show_status(&mut self, validation: &Validation) {
        for status in validation.results() {
            if status.valid {
                write_ok!(&mut self.stdout, "Valid", "{}", status.handle);
            } else {
                write_error!(&mut self.stdout, "Invalid", "{}", status.handle);
            }
        }
        let _ = self.stdout.reset();
    }
    fn set_inputs_enabled(&mut self, enabled: bool) {
        if enabled {
            write_info!(&mut self.stdout, "Info", "Rating and count inputs enabled");
        } else {
            write_warn!(
                &mut self.stdout,
                "Locked",
                "Rating and count inputs disabled until all handles are valid"
            );
        }
        let _ = self.stdout.reset();
    }
    fn render_problems(&mut self, problems: &[ProblemEntry]) {
        if problems.is_empty() {
            write_info!(&mut self.stdout, "Result", "{}", EMPTY_MESSAGE);
        }
        for (index, problem) in problems.iter().enumerate() {
            write_progress!(
                &mut self.stdout,
                format!("#{}", index + 1),
                "{}\n          {}",
                problem,
                problem.link
            );
        }
        let _ = self.stdout.reset();
    }
    fn clear(&mut self) {
        write_info!(
            &mut self.stdout,
            "Reset",
            "Cleared handles, ratings and problem list"
        );
        let _ = self.stdout.reset();
    }
}
