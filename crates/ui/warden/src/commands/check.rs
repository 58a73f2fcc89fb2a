//! `warden check`: run passwords through the form without the TUI.

use std::fmt::Write as _;

use color_eyre::{Result, eyre::WrapErr};
use policy::{FormController, ResultList, SubmitRejected};
use serde::Serialize;
use tracing::info;

use crate::cli::CheckArgs;

/// Outcome of a batch check: the filled form plus every password that did not
/// produce a result.
pub struct Batch {
    pub form: FormController,
    pub skipped: Vec<(String, SubmitRejected)>,
}

#[derive(Serialize)]
struct Report<'a> {
    results: &'a ResultList,
    valid: usize,
    not_valid: usize,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let batch = check_all(args)?;
    for (password, reason) in &batch.skipped {
        eprintln!("skipped {password:?}: {reason}");
    }

    if args.json {
        let report = Report {
            results: batch.form.results(),
            valid: batch.form.valid_count(),
            not_valid: batch.form.invalid_count(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&batch.form));
    }
    Ok(())
}

/// Each password gets the same rule re-entered, just like a user filling the
/// form again after every successful check.
pub fn check_all(args: &CheckArgs) -> Result<Batch> {
    let mut form = FormController::new();
    let mut skipped = Vec::new();

    for password in &args.passwords {
        form.set_required_char(&args.required_char)
            .wrap_err("invalid --char")?;
        form.set_min_count(&args.min).wrap_err("invalid --min")?;
        form.set_max_count(&args.max).wrap_err("invalid --max")?;
        form.set_candidate_text(password);

        if let Err(reason) = form.submit() {
            skipped.push((password.clone(), reason));
        }
    }

    info!(
        checked = form.results().len(),
        skipped = skipped.len(),
        "batch check finished"
    );
    Ok(Batch { form, skipped })
}

pub fn render_text(form: &FormController) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Valid: {}", form.valid_count());
    let _ = writeln!(out, "Not Valid: {}", form.invalid_count());
    if form.results().is_empty() {
        return out;
    }

    let _ = writeln!(
        out,
        "{:<10} {:<10} {:<10} {:<20} {}",
        "Req Param", "Min Count", "Max Count", "Password", "Is Valid"
    );
    for r in form.results() {
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:<10} {:<20} {}",
            r.required_char(),
            r.min_count(),
            r.max_count(),
            r.password(),
            r.verdict()
        );
    }
    out
}
