extern crate handlebars;
extern crate serde;

use crate::{problem::ProblemEntry, render::EMPTY_MESSAGE};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::{error::Error as StdError, fmt, io::Write};

pub const DEFAULT_TEMPLATE: &str = r#"<div class="problem-list">
{{#if problems}}{{#each problems}}  <div class="problem-item"><a href="{{link}}" target="_blank">{{name}} {{#if rating}}(Rating: {{rating}}){{else}}(Unrated){{/if}}</a></div>
{{/each}}{{else}}  {{empty}}
{{/if}}</div>
"#;

#[derive(Debug)]
pub enum Error {
    Template(TemplateError),
    Render(RenderError),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Template(err) => write!(f, "Error parsing template: {}", err),
            Error::Render(err) => write!(f, "Error rendering problem list: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Template(err) => Some(err),
            Error::Render(err) => Some(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize)]
struct ListParam<'a> {
    problems: &'a [ProblemEntry],
    empty: &'a str,
}

pub struct Exporter<'a> {
    engine: Handlebars<'a>,
}
impl<'a> Exporter<'a> {
    pub fn new(template: &str) -> Result<Self> {
        let mut engine = Handlebars::new();
        engine
            .register_template_string("list", template)
            .map_err(Error::Template)?;
        Ok(Exporter { engine })
    }
    pub fn render(&self, problems: &[ProblemEntry]) -> Result<String> {
        self.engine
            .render(
                "list",
                &ListParam {
                    problems,
                    empty: EMPTY_MESSAGE,
                },
            )
            .map_err(Error::Render)
    }
    pub fn write<W: Write>(&self, problems: &[ProblemEntry], wdr: W) -> Result<()> {
        self.engine
            .render_to_write(
                "list",
                &ListParam {
                    problems,
                    empty: EMPTY_MESSAGE,
                },
                wdr,
            )
            .map_err(Error::Render)
    }
}
impl Default for Exporter<'_> {
    fn default() -> Self {
        let mut engine = Handlebars::new();
        engine
            .register_template_string("list", DEFAULT_TEMPLATE)
            .expect("default template is valid");
        Exporter { engine }
    }
}
