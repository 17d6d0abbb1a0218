//! dirlist: list directory contents in columns or long form.
//!
//! Every input path is resolved before anything is rendered, because the
//! presentation (section headers, section order) depends on the whole set of
//! resolved inputs. Rendering then goes: missing paths first, then the file
//! arguments as one shared listing, then each directory listing in label
//! order.

use std::ffi::OsString;
use std::io::{BufWriter, ErrorKind, Stdout, Write, stdout};
use std::num::IntErrorKind;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::ValueParser, crate_version};
use thiserror::Error;

use dlcore::display::Quotable;
use dlcore::error::{DlError, DlResult, set_exit_code};
use dlcore::{show, show_error, util_name};

mod grid;
mod listing;
mod long;

use listing::{Entry, Listing, Resolved};

pub mod options {
    pub static ALL: &str = "all";
    pub static LONG: &str = "long";
    pub static REVERSE: &str = "reverse";
    pub static WIDTH: &str = "width";
    pub static PATHS: &str = "paths";
}

const DEFAULT_TERM_WIDTH: u16 = 80;

#[derive(Error, Debug)]
enum LsError {
    #[error("invalid line width: {}", .0.quote())]
    InvalidLineWidth(String),

    #[error("cannot access {}: {}", .0.quote(), .1)]
    AccessFailed(String, std::io::Error),
}

impl DlError for LsError {
    fn code(&self) -> i32 {
        match self {
            Self::InvalidLineWidth(_) => 2,
            Self::AccessFailed(_, _) => 1,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Format {
    Columns,
    Long,
}

pub struct Config {
    format: Format,
    include_hidden: bool,
    reverse: bool,
    width: u16,
}

/// Parses the width from the `-w` argument, the `COLUMNS` environment
/// variable, or the terminal itself, in that order.
fn parse_width(width_match: Option<&String>) -> Result<u16, LsError> {
    let parse_width_from_args = |s: &str| -> Result<u16, LsError> {
        let radix = if s.starts_with('0') && s.len() > 1 {
            8
        } else {
            10
        };
        match u16::from_str_radix(s, radix) {
            Ok(x) => Ok(x),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(u16::MAX),
                _ => Err(LsError::InvalidLineWidth(s.into())),
            },
        }
    };

    if let Some(x) = width_match {
        return parse_width_from_args(x);
    }

    if let Some(columns) = std::env::var_os("COLUMNS") {
        match columns.to_str().and_then(|s| s.parse().ok()) {
            Some(columns) => return Ok(columns),
            None => show_error!(
                "ignoring invalid width in environment variable COLUMNS: {}",
                columns.quote()
            ),
        }
    }

    Ok(match terminal_size::terminal_size() {
        Some((width, _)) => width.0,
        None => DEFAULT_TERM_WIDTH,
    })
}

impl Config {
    pub fn from(options: &clap::ArgMatches) -> DlResult<Self> {
        let format = if options.get_flag(options::LONG) {
            Format::Long
        } else {
            Format::Columns
        };
        let width = parse_width(options.get_one::<String>(options::WIDTH))?;

        Ok(Self {
            format,
            include_hidden: options.get_flag(options::ALL),
            reverse: options.get_flag(options::REVERSE),
            width,
        })
    }
}

pub fn dlmain(args: impl dlcore::Args) -> DlResult<()> {
    let matches = match dl_app().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            set_exit_code(if e.use_stderr() { 2 } else { 0 });
            e.print()?;
            return Ok(());
        }
    };

    let config = Config::from(&matches)?;

    let locs = matches
        .get_many::<OsString>(options::PATHS)
        .map_or_else(|| vec![PathBuf::from(".")], |v| v.map(PathBuf::from).collect());

    list(&locs, &config)
}

pub fn dl_app() -> Command {
    Command::new(util_name())
        .version(crate_version!())
        .about("List information about files and directories")
        .override_usage(format!("{} [OPTION]... [PATH]...", util_name()))
        .infer_long_args(true)
        .args_override_self(true)
        .arg(
            Arg::new(options::ALL)
                .short('a')
                .long(options::ALL)
                .help("do not ignore entries starting with .")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(options::LONG)
                .short('l')
                .help("use a long listing format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(options::REVERSE)
                .short('r')
                .long(options::REVERSE)
                .help("reverse order while sorting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(options::WIDTH)
                .short('w')
                .long(options::WIDTH)
                .value_name("COLS")
                .help("assume screen width instead of current value"),
        )
        .arg(
            Arg::new(options::PATHS)
                .action(ArgAction::Append)
                .value_parser(ValueParser::os_string())
                .value_hint(clap::ValueHint::AnyPath),
        )
}

/// One run over all input paths: resolve everything, then render.
pub fn list(locs: &[PathBuf], config: &Config) -> DlResult<()> {
    let mut missing: Vec<String> = Vec::new();
    let mut file_entries: Vec<Entry> = Vec::new();
    let mut dirs: Vec<Listing> = Vec::new();

    for loc in locs {
        match listing::collect(loc, config.include_hidden) {
            Ok(Resolved::Directory(listing)) => dirs.push(listing),
            Ok(Resolved::File(entry)) => file_entries.push(*entry),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                missing.push(loc.display().to_string());
            }
            Err(err) => {
                show!(LsError::AccessFailed(loc.display().to_string(), err));
            }
        }
    }

    let mut out = BufWriter::new(stdout());

    missing.sort();
    for path in &missing {
        set_exit_code(1);
        writeln!(out, "{}: {path}: No such file or directory", util_name())?;
    }

    // A header is only worth printing when the output has more than one
    // section to tell apart.
    let show_headers = dirs.len() > 1 || !file_entries.is_empty();

    if !file_entries.is_empty() {
        let mut files = Listing {
            label: String::new(),
            entries: file_entries,
        };
        files.sort(config.reverse);
        render_set(&mut out, &files.entries, config)?;
        writeln!(out)?;
    }

    dirs.sort_by(|a, b| a.label.cmp(&b.label));
    if config.reverse {
        dirs.reverse();
    }

    for dir in &mut dirs {
        if dir.entries.is_empty() {
            continue;
        }
        if show_headers {
            writeln!(out, "{}:", dir.label)?;
        }
        dir.sort(config.reverse);
        render_set(&mut out, &dir.entries, config)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

fn render_set(out: &mut BufWriter<Stdout>, entries: &[Entry], config: &Config) -> DlResult<()> {
    let lines = match config.format {
        Format::Long => long::layout(entries),
        Format::Columns => {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            grid::layout(&names, usize::from(config.width))
        }
    };
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
