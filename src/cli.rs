use std::env;

use termcal::app::ViewType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub sample: bool,
    pub view: Option<ViewType>,
    pub theme: Option<String>,
}

pub const USAGE: &str = "Usage: termcal [--sample] [--view month|week] [--theme NAME]";

pub fn parse_cli_options() -> Result<CliOptions, String> {
    parse_args(env::args().skip(1))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                options.sample = true;
            }
            "--view" => {
                let Some(value) = args.next() else {
                    return Err("--view requires a value (month or week)".to_string());
                };
                options.view = Some(parse_view(&value)?);
            }
            "--theme" => {
                let Some(value) = args.next() else {
                    return Err("--theme requires a value".to_string());
                };
                options.theme = Some(value);
            }
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(options)
}

fn parse_view(value: &str) -> Result<ViewType, String> {
    match value.to_lowercase().as_str() {
        "month" => Ok(ViewType::Month),
        "week" => Ok(ViewType::Week),
        other => Err(format!("Invalid view '{}'. Use month or week.", other)),
    }
}
