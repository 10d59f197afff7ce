//! Learner commands: enroll, status, certificate, roster.

use jiff::Timestamp;

use crate::catalog::Catalog;
use crate::certificate;
use crate::config::Config;
use crate::identity::Identity;
use crate::model::ProgressRecord;
use crate::progress;
use crate::session::Session;
use crate::storage::{ProgressStore, Storage, StorageError};

use super::format::format_summary;
use super::require_admin;

pub(super) fn cmd_enroll(
    catalog: &Catalog,
    storage: &Storage,
    identity: &Identity,
) -> Result<(), String> {
    let record = ProgressRecord::new(catalog.first().key);
    match storage.enroll(&identity.learner, &record) {
        Ok(()) => {
            println!("Enrolled {}. Start with: {}", identity.learner, record.current_unit);
            Ok(())
        }
        Err(StorageError::LearnerExists(_)) => {
            println!("{} is already enrolled", identity.learner);
            Ok(())
        }
        Err(e) => Err(format!("failed to enroll: {e}")),
    }
}

pub(super) fn cmd_status(
    catalog: &Catalog,
    config: &Config,
    storage: &Storage,
    identity: &Identity,
    json: bool,
) -> Result<(), String> {
    let session = Session::load(catalog, storage, &identity.learner, config.rewards)
        .map_err(|e| e.to_string())?;
    let summary = session.summary();

    if json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("failed to serialize summary: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", format_summary(session.learner(), &summary));
    }
    Ok(())
}

pub(super) fn cmd_certificate(
    catalog: &Catalog,
    storage: &Storage,
    identity: &Identity,
    json: bool,
) -> Result<(), String> {
    let record = storage
        .load_progress(&identity.learner)
        .map_err(|e| e.to_string())?;

    let Some(cert) = certificate::issue(catalog, &identity.learner, &record, Timestamp::now())
    else {
        let remaining = catalog.count() - progress::completed_count(catalog, &record);
        return Err(format!(
            "not eligible yet: {remaining} of {} units left",
            catalog.count()
        ));
    };

    if json {
        let json = serde_json::to_string_pretty(&cert)
            .map_err(|e| format!("failed to serialize certificate: {e}"))?;
        println!("{json}");
    } else {
        println!("Certificate {}", cert.id);
        println!("Awarded to {} for completing all {} units", cert.learner, cert.units);
        println!("XP earned: {}", cert.xp);
        println!("Issued: {}", cert.issued_at);
    }
    Ok(())
}

pub(super) fn cmd_roster(
    catalog: &Catalog,
    storage: &Storage,
    identity: &Identity,
) -> Result<(), String> {
    require_admin(identity)?;

    let learners = storage
        .learners()
        .map_err(|e| format!("failed to list learners: {e}"))?;
    if learners.is_empty() {
        println!("No learners");
        return Ok(());
    }

    for learner in &learners {
        let record = storage
            .load_progress(learner)
            .map_err(|e| format!("failed to load {learner}: {e}"))?;
        let summary = progress::summarize(catalog, &record);
        println!(
            "{learner:<20}  {:>3}%  {:>5} XP  streak {:<3}  badges {}",
            summary.percent,
            summary.xp,
            summary.streak,
            summary.badges.len()
        );
    }
    Ok(())
}
