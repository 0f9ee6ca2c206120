extern crate termcolor;

use crate::{read::read_field, terminal::Terminal, Session};
use std::io::Write;
use termcolor::{Color, WriteColor};

pub async fn verify(terminal: &mut Terminal, session: &mut Session) -> Option<()> {
    let current = session.state().form.handles.clone();
    session.form_mut().handles = read_field(&mut terminal.stdout, "Handles", &current)?;
    write_info!(&mut terminal.stdout, "Info", "Verifying handles...");
    match session.verify(terminal).await {
        Ok(v) if v.all_valid() => {
            write_ok!(&mut terminal.stdout, "Success", "All {} handles are valid", v.len())
        }
        Ok(v) => write_error!(
            &mut terminal.stdout,
            "Fail",
            "{} of {} handles are invalid",
            v.invalid().count(),
            v.len()
        ),
        Err(e) => write_error!(&mut terminal.stdout, "Error", "{}", e),
    }
    Some(())
}

pub fn status(terminal: &mut Terminal, session: &Session) {
    let state = session.state();
    let stdout = &mut terminal.stdout;
    write_info!(stdout, "Handles", "{}", state.form.handles);
    match state.handles_valid {
        Some(true) => write_ok!(stdout, "Valid", "{}", state.valid_handles.join(";")),
        Some(false) => write_error!(stdout, "Valid", "{}", state.valid_handles.join(";")),
        None => write_info!(stdout, "Valid", "not checked"),
    }
    write_info!(
        stdout,
        "Rating",
        "{} .. {}",
        state.form.min_rating,
        state.form.max_rating
    );
    write_info!(stdout, "Count", "{}", state.form.count);
    if state.inputs_enabled {
        write_info!(stdout, "Inputs", "enabled");
    } else {
        write_warn!(stdout, "Inputs", "disabled");
    }
    write_info!(
        stdout,
        "Picked",
        "{} problems in the last list",
        state.selection.len()
    );
    let _ = stdout.reset();
}

pub fn reset(terminal: &mut Terminal, session: &mut Session) {
    session.reset(terminal);
}
