extern crate termcolor;

use cf_selector::error::Error;
use std::io::Write;
use termcolor::{Color, StandardStream};

pub fn write_result<E: Error>(stdout: &mut StandardStream, result: Result<(), E>, success: &str) {
    match result {
        Ok(_) => write_ok!(stdout, "Success", "{}", success),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}
