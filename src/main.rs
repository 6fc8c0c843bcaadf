#![forbid(unsafe_code)]

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate reqwest;
extern crate serde;

mod client;
mod config;
mod forecast;
mod render;

use crate::client::file::FileForecastSource;
use crate::client::http::HttpForecastSource;
use crate::client::ForecastSource;
use crate::config::Config;
use crate::render::{HtmlSurface, LOAD_ERROR_TEXT};

use clap::{Arg, Command};
use env_logger::Env;

use std::fs;
use std::process::ExitCode;

const DEFAULT_URL: &str = "http://localhost:5000/data/previsoes.json";
const DEFAULT_OUTPUT: &str = "previsoes.html";

fn main() -> ExitCode {
    let env = Env::default().filter_or("MY_LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let matches = Command::new("praiacast")
        .version("0.1")
        .about("Renders a surf and tide forecast document as an HTML page")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Endpoint serving the forecast JSON document"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Read the forecast document from a local file instead"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output HTML file, or - for stdout"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON settings file; flags given here override it"),
        )
        .get_matches();

    let config = matches
        .get_one::<String>("config")
        .map(|path| Config::from_file(path));

    let url = matches
        .get_one::<String>("url")
        .cloned()
        .or_else(|| config.as_ref().and_then(|c| c.url.clone()))
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let output = matches
        .get_one::<String>("output")
        .cloned()
        .or_else(|| config.as_ref().and_then(|c| c.output_file.clone()))
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let source: Box<dyn ForecastSource> = match matches.get_one::<String>("file") {
        Some(path) => Box::new(FileForecastSource::new(path)),
        None => Box::new(HttpForecastSource::new(url)),
    };

    let mut surface = HtmlSurface::new();
    let code = match source.fetch() {
        Ok(document) => {
            info!(
                "Rendering forecast for {}",
                document.beaches[0].name
            );
            render::render(&document, &mut surface);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Unable to load forecast data: {err}");
            surface.set_text(LOAD_ERROR_TEXT);
            ExitCode::FAILURE
        }
    };

    let page = surface.to_page();
    if output == "-" {
        print!("{page}");
    } else {
        info!("Writing page to {output}");
        fs::write(&output, &page)
            .unwrap_or_else(|err| panic!("Unable to write output file {output}: {err}"));
    }

    code
}
