extern crate rand;
extern crate termcolor;

use crate::{read::read_field, terminal::Terminal, write::write_result, Session};
use cf_selector::{export::Exporter, form::InputError, settings::Settings};
use std::{
    fs::{self, File},
    io::Write,
};
use termcolor::{Color, WriteColor};

pub async fn fetch(terminal: &mut Terminal, session: &mut Session) -> Option<()> {
    if !session.state().inputs_enabled {
        write_error!(&mut terminal.stdout, "Error", "{}", InputError::Locked);
        return Some(());
    }
    let form = session.state().form.clone();
    let min_rating = read_field(&mut terminal.stdout, "Min rating", &form.min_rating)?;
    let max_rating = read_field(&mut terminal.stdout, "Max rating", &form.max_rating)?;
    let count = read_field(&mut terminal.stdout, "Count", &form.count)?;
    {
        let form = session.form_mut();
        form.min_rating = min_rating;
        form.max_rating = max_rating;
        form.count = count;
    }
    write_info!(&mut terminal.stdout, "Info", "Fetching problems...");
    match session.fetch(terminal, &mut rand::thread_rng()).await {
        Ok(v) if !v.is_empty() => {
            write_ok!(&mut terminal.stdout, "Success", "Picked {} problems", v.len())
        }
        Ok(_) => (),
        Err(e) => write_error!(&mut terminal.stdout, "Error", "{}", e),
    }
    let _ = terminal.stdout.reset();
    Some(())
}

fn exporter(terminal: &mut Terminal, settings: &Settings) -> Option<Exporter<'static>> {
    let path = match &settings.template {
        Some(p) => p,
        None => return Some(Exporter::default()),
    };
    let result = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|t| Exporter::new(&t).map_err(|e| e.to_string()));
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            write_error!(
                &mut terminal.stdout,
                "Error",
                "template {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

pub fn export(terminal: &mut Terminal, session: &Session, settings: &Settings) -> Option<()> {
    let path = read_field(&mut terminal.stdout, "File path", "problems.html")?;
    if let Some(exporter) = exporter(terminal, settings) {
        match File::create(&path) {
            Ok(f) => write_result(
                &mut terminal.stdout,
                exporter.write(&session.state().selection, f),
                &format!("Written problem list to {}", path),
            ),
            Err(e) => write_error!(&mut terminal.stdout, "Error", "Error create {}: {}", path, e),
        }
    }
    let _ = terminal.stdout.reset();
    Some(())
}
