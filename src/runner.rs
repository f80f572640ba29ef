// src/runner.rs
use std::path::PathBuf;

use chrono::Utc;

use crate::{
    config::consts::{INDEX_FILE, ROBOTS_FILE, SITEMAP_FILE},
    config::options::{Command, OutputTarget, SiteOptions},
    core::html::with_noindex,
    csv::{Record, parse_records},
    day::{Day, days_from_records},
    error::Result,
    file::{read_text, remove_if_exists, write_text, write_zip},
    inject::patch_folder,
    progress::Progress,
    render::{index::render_index, notes, page::render_day_page, site},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub files_patched: usize,
    pub days: usize,
}

/// Top-level runner: dispatch on command and run.
/// `Command::Records` writes nothing; use `records_json` for it.
pub fn run(opts: &SiteOptions, mut progress: Option<&mut (dyn Progress + '_)>) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    if !opts.command.reads_csv() {
        summary.files_patched = inject_all(opts, progress.as_deref_mut())?;
        finish(progress);
        return Ok(summary);
    }

    let days = load_days(opts)?;
    summary.days = days.len();
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} day records found", days.len()));
    }

    let written = &mut summary.files_written;
    match opts.command {
        Command::Build => {
            write_pages(opts, &days, written, progress.as_deref_mut())?;
            write_index(opts, &days, written, progress.as_deref_mut())?;
            write_site_meta(opts, &days, written, progress.as_deref_mut())?;
        }
        Command::Pages => write_pages(opts, &days, written, progress.as_deref_mut())?,
        Command::Index => write_index(opts, &days, written, progress.as_deref_mut())?,
        Command::Notes => write_notes(opts, &days, written, progress.as_deref_mut())?,
        Command::Records | Command::Inject => {}
    }

    finish(progress);
    Ok(summary)
}

fn finish(progress: Option<&mut (dyn Progress + '_)>) {
    if let Some(p) = progress {
        p.finish();
    }
}

/* ---------------- Input ---------------- */

pub fn load_records(opts: &SiteOptions) -> Result<Vec<Record>> {
    logf!(path = %opts.input.display(), "reading csv");
    let text = read_text(&opts.input)?;
    parse_records(&text, opts.parse)
}

pub fn load_days(opts: &SiteOptions) -> Result<Vec<Day>> {
    let records = load_records(opts)?;
    logf!(records = records.len(), "parsed day records");
    Ok(days_from_records(&records))
}

/// Retained records as a pretty JSON array of header-keyed objects.
pub fn records_json(opts: &SiteOptions) -> Result<String> {
    let records = load_records(opts)?;
    Ok(serde_json::to_string_pretty(&records)?)
}

/* ---------------- Output ---------------- */

fn emit(
    path: PathBuf,
    contents: &str,
    written: &mut Vec<PathBuf>,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<()> {
    write_text(&path, contents)?;
    if let Some(p) = progress {
        p.item_done(&path);
    }
    written.push(path);
    Ok(())
}

fn for_target(target: &OutputTarget, html: String) -> String {
    if target.private { with_noindex(&html) } else { html }
}

fn write_pages(
    opts: &SiteOptions,
    days: &[Day],
    written: &mut Vec<PathBuf>,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<()> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(days.len() * opts.targets.len());
    }
    // Render once; only the robots meta differs between targets.
    let pages: Vec<(String, String)> = days
        .iter()
        .map(|d| -> Result<(String, String)> {
            Ok((d.file_name(), render_day_page(d, opts.total_days)?))
        })
        .collect::<Result<_>>()?;

    for target in &opts.targets {
        for (name, html) in &pages {
            let html = for_target(target, html.clone());
            emit(target.dir.join(name), &html, written, progress.as_deref_mut())?;
        }
        logf!(dir = %target.dir.display(), pages = pages.len(), "day pages written");
    }
    Ok(())
}

fn write_index(
    opts: &SiteOptions,
    days: &[Day],
    written: &mut Vec<PathBuf>,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<()> {
    let html = render_index(days, opts.total_days)?;
    for target in &opts.targets {
        let html = for_target(target, html.clone());
        emit(target.dir.join(INDEX_FILE), &html, written, progress.as_deref_mut())?;
        logf!(dir = %target.dir.display(), "index written");
    }
    Ok(())
}

fn write_site_meta(
    opts: &SiteOptions,
    days: &[Day],
    written: &mut Vec<PathBuf>,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<()> {
    let base_url = opts.base_url();
    let numbers: Vec<u32> = days.iter().map(|d| d.number).collect();

    for target in &opts.targets {
        let robots = site::robots_txt(target.private, base_url);
        emit(target.dir.join(ROBOTS_FILE), &robots, written, progress.as_deref_mut())?;

        let sitemap_path = target.dir.join(SITEMAP_FILE);
        match (target.private, base_url) {
            (false, Some(base)) => {
                let xml = site::sitemap_xml(base, &numbers, Utc::now());
                emit(sitemap_path, &xml, written, progress.as_deref_mut())?;
            }
            (true, _) => {
                if remove_if_exists(&sitemap_path)? {
                    logd!(path = %sitemap_path.display(), "removed sitemap from private target");
                }
            }
            (false, None) => {}
        }
    }
    Ok(())
}

fn write_notes(
    opts: &SiteOptions,
    days: &[Day],
    written: &mut Vec<PathBuf>,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<()> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(days.len());
    }
    let entries: Vec<(String, String)> = days
        .iter()
        .map(|d| (notes::note_file_name(d), notes::render_note(d)))
        .collect();
    for (name, text) in &entries {
        emit(opts.notes_dir.join(name), text, written, progress.as_deref_mut())?;
    }
    logf!(dir = %opts.notes_dir.display(), notes = entries.len(), "notes written");

    if let Some(zip_path) = &opts.notes_zip {
        write_zip(zip_path, &entries)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(zip_path);
        }
        written.push(zip_path.clone());
        logf!(path = %zip_path.display(), "notes archive written");
    }
    Ok(())
}

fn inject_all(opts: &SiteOptions, mut progress: Option<&mut (dyn Progress + '_)>) -> Result<usize> {
    let mut total = 0;
    for target in &opts.targets {
        let count = patch_folder(&target.dir, &opts.nav)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("[{}] patched {} files", target.dir.display(), count));
        }
        total += count;
    }
    Ok(total)
}
