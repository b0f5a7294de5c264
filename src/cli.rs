// src/cli.rs
use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::dates;

/// Everything one invocation asks for. Free tokens mirror the chat
/// command: an optional leading date token, then the canteen query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pub config_path: Option<PathBuf>,
    pub lang: Option<String>,       // overrides config
    pub max_items: Option<usize>,   // overrides config
    pub list_canteens: bool,        // list names for the date, then exit
    pub date_token: Option<String>,
    pub canteen_query: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown argument: {0}")]
    Unknown(String),
}

pub fn parse() -> Result<Params, ArgError> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<Params, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut free: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--list" => params.list_canteens = true,
            "--lang" => {
                let v = args.next().ok_or(ArgError::MissingValue("--lang"))?;
                params.lang = Some(v); }
            "--max-items" => {
                let v = args.next().ok_or(ArgError::MissingValue("--max-items"))?;
                let n = v.parse().map_err(|_| ArgError::InvalidValue { flag: "--max-items", value: v })?;
                params.max_items = Some(n); }
            "--config" => {
                let v = args.next().ok_or(ArgError::MissingValue("--config"))?;
                params.config_path = Some(PathBuf::from(v)); }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => return Err(ArgError::Unknown(other.to_string())),
            _ => free.push(a),
        }
    }

    // Only the first free token may name the date; everything after it
    // is the canteen query, whitespace-joined.
    if free.first().is_some_and(|t| dates::is_date_token(t)) {
        params.date_token = Some(free.remove(0));
    }
    if !free.is_empty() {
        params.canteen_query = Some(free.join(" "));
    }
    Ok(params)
}
