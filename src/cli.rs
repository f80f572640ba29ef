// src/cli.rs
use std::path::PathBuf;

use crate::config::consts::DEFAULT_NOTES_ZIP;
use crate::config::options::{Command, OutputTarget, SiteOptions};
use crate::error::{Error, Result};
use crate::progress::Progress;

pub enum Parsed {
    Run(SiteOptions),
    Help,
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

/// Parse arguments (program name excluded).
pub fn parse_args<I>(args: I) -> Result<Parsed>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut opts = SiteOptions::default();
    let mut targets: Vec<OutputTarget> = Vec::new();
    let mut input: Option<PathBuf> = None;
    let mut command: Option<Command> = None;

    let mut args = args.into_iter().map(Into::<String>::into);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => targets.push(OutputTarget::public(value(&mut args, &a)?)),
            "--private-out" => targets.push(OutputTarget::private(value(&mut args, &a)?)),
            "--days" => {
                let v = value(&mut args, &a)?;
                opts.total_days = match v.parse::<u32>() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(usage(format!("Invalid day count: {}", v))),
                };
            }
            "--base-url" => opts.base_url = Some(value(&mut args, &a)?),
            "--label" => opts.nav.label = value(&mut args, &a)?,
            "--style" => opts.nav.style = value(&mut args, &a)?,
            "--notes-dir" => opts.notes_dir = PathBuf::from(value(&mut args, &a)?),
            "--zip" => opts.notes_zip = Some(PathBuf::from(value(&mut args, &a)?)),
            "--default-zip" => opts.notes_zip = Some(PathBuf::from(DEFAULT_NOTES_ZIP)),
            "--strict" => opts.parse.strict = true,
            "-h" | "--help" => return Ok(Parsed::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(usage(format!("Unknown arg: {}", flag)));
            }
            word => {
                if command.is_none() && input.is_none() {
                    if let Some(c) = Command::from_arg(word) {
                        command = Some(c);
                        continue;
                    }
                }
                if input.is_some() {
                    return Err(usage(format!("Unexpected argument: {}", word)));
                }
                input = Some(PathBuf::from(word));
            }
        }
    }

    if let Some(c) = command {
        opts.command = c;
    }
    if let Some(p) = input {
        opts.input = p;
    }
    if !targets.is_empty() {
        opts.targets = targets;
    }
    Ok(Parsed::Run(opts))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| usage(format!("Missing value for {}", flag)))
}

fn usage(msg: String) -> Error {
    Error::Usage(msg)
}

/// Prints one line per written file and a closing summary.
#[derive(Default)]
pub struct ConsoleProgress {
    written: usize,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }
    fn item_done(&mut self, path: &std::path::Path) {
        self.written += 1;
        println!("Wrote {}", path.display());
    }
    fn finish(&mut self) {
        if self.written > 0 {
            println!("✅ {} files written", self.written);
        }
    }
}

pub fn run(opts: &SiteOptions) -> Result<()> {
    if opts.command == Command::Records {
        println!("{}", crate::runner::records_json(opts)?);
        return Ok(());
    }

    let mut console = ConsoleProgress::default();
    let progress: &mut dyn Progress = &mut console;
    let summary = crate::runner::run(opts, Some(progress))?;

    if opts.command == Command::Inject {
        if summary.files_patched == 0 {
            println!("No changes (already patched or folders not found).");
        } else {
            println!("✅ Injected back link into {} files.", summary.files_patched);
        }
    }
    Ok(())
}
