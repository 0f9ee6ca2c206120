extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_selector::{
    api::Client,
    config::state::FILE,
    selector::Selector,
    settings::{self, Settings},
    storage::FileStore,
};
use clap::{crate_description, crate_name, Arg, Command};
use pretty_env_logger::init_timed;
use std::io::Write;
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod handle;
    pub mod problem;
}
mod read;
mod terminal;
mod write;

use command::{
    handle::{reset, status, verify},
    problem::{export, fetch},
};
use read::read_line;
use terminal::Terminal;

pub type Session = Selector<Client, FileStore>;

const HELP: &[(&str, &str)] = &[
    ("verify", "enter handles separated by ';' and check them"),
    ("fetch", "pick unsolved problems in a rating band"),
    ("status", "show the current handles and inputs"),
    ("export", "write the last problem list through a template"),
    ("reset", "clear everything, including the saved state"),
    ("help", "show this message"),
    ("exit", "quit"),
];

fn report_store_error(terminal: &mut Terminal, session: &mut Session) {
    if let Some(e) = session.take_store_error() {
        write_error!(&mut terminal.stdout, "Error", "{}", e);
        let _ = terminal.stdout.reset();
    }
}

#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("state")
                .short('s')
                .long("state")
                .takes_value(true)
                .value_name("FILE")
                .help("Path to the saved session"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("Path to a yaml settings file"),
        )
        .get_matches();
    let settings = match app.value_of("config") {
        Some(f) => match settings::from_path(f) {
            Ok(v) => v,
            Err(e) => {
                write_error!(&mut stdout, "Error", "Error load {}: {}", f, e);
                write_warn!(&mut stdout, "Warning", "Using default settings");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    let client = match Client::new(&settings) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            let _ = stdout.reset();
            return;
        }
    };
    let store = FileStore::new(app.value_of("state").unwrap_or(FILE));
    let mut session = Selector::new(client, store, &settings);
    let mut terminal = Terminal::new(stdout);
    session.restore(&mut terminal);
    report_store_error(&mut terminal, &mut session);

    loop {
        let line = match read_line(&mut terminal.stdout, "cf-selector> ") {
            Some(v) => v,
            None => break,
        };
        let done = match line.trim() {
            "" => Some(()),
            "verify" => verify(&mut terminal, &mut session).await,
            "fetch" => fetch(&mut terminal, &mut session).await,
            "status" => {
                status(&mut terminal, &session);
                Some(())
            }
            "export" => export(&mut terminal, &session, &settings),
            "reset" => {
                reset(&mut terminal, &mut session);
                Some(())
            }
            "help" => {
                for (name, about) in HELP {
                    write_info!(&mut terminal.stdout, name, "{}", about);
                }
                Some(())
            }
            "exit" => None,
            unknown => {
                write_error!(
                    &mut terminal.stdout,
                    "Error",
                    r#"cf-selector: unknown command "{}", try "help""#,
                    unknown
                );
                Some(())
            }
        };
        report_store_error(&mut terminal, &mut session);
        let _ = terminal.stdout.reset();
        if done.is_none() {
            break;
        }
    }
}
