extern crate termcolor;

use std::io::{stdin, Write};
use termcolor::{Color, StandardStream, WriteColor};

/// `None` once stdin is closed.
pub fn read_line_to(stdout: &mut StandardStream, prompt: &str, dest: &mut String) -> Option<()> {
    dest.clear();
    loop {
        let _ = stdout.write_all(prompt.as_bytes());
        let _ = stdout.flush();
        match stdin().read_line(dest) {
            Ok(0) => return None,
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return Some(());
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e),
        }
        let _ = stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &str) -> Option<String> {
    let mut ret = String::new();
    read_line_to(stdout, prompt, &mut ret).map(|_| ret)
}

/// Prompts with the current value; a blank answer keeps it.
pub fn read_field(stdout: &mut StandardStream, name: &str, current: &str) -> Option<String> {
    let prompt = if current.is_empty() {
        format!("{}: ", name)
    } else {
        format!("{} [{}]: ", name, current)
    };
    let value = read_line(stdout, &prompt)?;
    Some(if value.trim().is_empty() {
        current.to_string()
    } else {
        value
    })
}
