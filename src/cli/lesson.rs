//! Curriculum commands: lessons, show, check, complete.

use std::path::PathBuf;

use jiff::Timestamp;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::identity::Identity;
use crate::model::{Field, ProgressRecord};
use crate::progress;
use crate::session::Session;
use crate::storage::{ProgressStore, Storage, StorageError};
use crate::validate;
use crate::workspace::Workspace;

use super::format::{format_completion, format_outcome, format_status};
use super::{BufferArgs, NoPreview, preview_host};

pub(super) fn cmd_lessons(
    catalog: &Catalog,
    storage: &Storage,
    identity: &Identity,
) -> Result<(), String> {
    // Learners who never enrolled see the curriculum as a new learner would.
    let record = match storage.load_progress(&identity.learner) {
        Ok(record) => record,
        Err(StorageError::LearnerNotFound(_)) => ProgressRecord::new(catalog.first().key),
        Err(e) => return Err(format!("failed to load progress: {e}")),
    };

    for (i, (track, units)) in catalog.by_track().into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let tier = units.first().map(|l| l.tier.to_string()).unwrap_or_default();
        println!("{track} ({tier})");
        for lesson in units {
            let status = progress::status(&record, lesson.key);
            println!(
                "  [{:<7}]  {:<20}  {}",
                format_status(status),
                lesson.key,
                lesson.title
            );
        }
    }
    Ok(())
}

pub(super) fn cmd_show(catalog: &Catalog, key: &str) -> Result<(), String> {
    let lesson = catalog.get(key).map_err(|e| e.to_string())?;

    println!("{}", lesson.title);
    println!("{} · {}", lesson.track, lesson.tier);
    println!();
    println!("{}", lesson.description);
    println!();
    println!("{}", lesson.content.trim());

    let initial = lesson.initial.to_buffers();
    for field in [Field::Markup, Field::Style, Field::Script] {
        let code = initial.get(field);
        if !code.is_empty() {
            println!();
            println!("── starting {field} ──");
            println!("{code}");
        }
    }

    match lesson.next {
        Some(next) => println!("\nNext: {next}"),
        None => println!("\nThis is the final unit."),
    }
    Ok(())
}

pub(super) fn cmd_check(
    catalog: &Catalog,
    key: &str,
    args: &BufferArgs,
    preview: Option<PathBuf>,
) -> Result<(), String> {
    let lesson = catalog.get(key).map_err(|e| e.to_string())?;
    let mut workspace = Workspace::open(lesson);
    for (field, text) in args.read()? {
        workspace.edit(field, text);
    }

    let host = preview_host(preview);
    host.mount(&crate::render::render(workspace.snapshot()));
    let outcome = validate::run(lesson, workspace.snapshot());

    println!("{}", format_outcome(&outcome));
    if outcome.is_pass() {
        Ok(())
    } else {
        Err(format!("{key} did not pass"))
    }
}

pub(super) fn cmd_complete(
    catalog: &Catalog,
    config: &Config,
    storage: &Storage,
    identity: &Identity,
    key: &str,
    args: &BufferArgs,
) -> Result<(), String> {
    let mut session = Session::load(catalog, storage, &identity.learner, config.rewards)
        .map_err(|e| format!("{e} (run `codetrail enroll` first?)"))?;

    session.open(key).map_err(|e| e.to_string())?;
    for (field, text) in args.read()? {
        session.edit(field, text).map_err(|e| e.to_string())?;
    }

    let outcome = session.run(&NoPreview).map_err(|e| e.to_string())?;
    println!("{}", format_outcome(&outcome));
    if !outcome.is_pass() {
        return Err(format!("{key} did not pass; nothing recorded"));
    }

    let completion = session
        .commit(storage, Timestamp::now())
        .map_err(|e| format!("{e}; try again"))?;
    println!("{}", format_completion(key, &completion));
    Ok(())
}
