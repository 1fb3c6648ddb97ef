use std::io::{self, BufRead, Write};

use url::Url;

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{ReportError, Result};

fn prompt(out: &mut impl Write, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn render_config(default_place: &str, api_url: &str) -> Result<String> {
    let config = Config {
        default_place: Some(default_place)
            .filter(|place| !place.is_empty())
            .map(String::from),
        api_url: Some(api_url)
            .filter(|url| !url.is_empty() && *url != DEFAULT_API_URL)
            .map(String::from),
        ..Config::default()
    };

    Ok(toml::to_string(&config)?)
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let mut out = io::stdout().lock();

    if config_path.exists() {
        let answer = prompt(
            &mut out,
            &format!(
                "Config file already exists at {}. Overwrite? [y/N] ",
                config_path.display()
            ),
        )?;

        if !answer.eq_ignore_ascii_case("y") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }

    writeln!(out, "SeeClickFix Report Configuration")?;
    writeln!(out, "================================\n")?;

    let default_place = prompt(
        &mut out,
        "Enter default place URL slug (e.g., jersey-city) [optional]: ",
    )?;
    let api_url = prompt(&mut out, &format!("Enter issues API URL [{DEFAULT_API_URL}]: "))?;

    if !api_url.is_empty() {
        Url::parse(&api_url).map_err(|_| ReportError::InvalidUrl(api_url.clone()))?;
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, render_config(&default_place, &api_url)?).map_err(|e| {
        ReportError::ConfigRead {
            path: config_path.clone(),
            source: e,
        }
    })?;

    writeln!(out, "\nConfig saved to {}", config_path.display())?;
    writeln!(out, "You can now run 'scf report --category trees'")?;

    Ok(())
}
