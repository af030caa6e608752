use std::{env, path::PathBuf, process};

use uuid::Uuid;

use survey_core::{
    cli::{output, runner},
    config::ConfigManager,
    errors::SurveyError,
    init,
    report::{AnnualReport, FormKind, MonthlyReport},
    submit::FileSink,
    utils::{
        persistence::{load_annual_from_file, load_monthly_from_file, DraftStore},
        resolve_base,
    },
    wizard::SurveyForm,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "annual" => {
            let (edit, prior) = parse_wizard_flags(args)?;
            let context = Context::open()?;
            let existing = edit.as_deref().map(load_annual_from_file).transpose()?;
            let mut sink = context.sink()?;
            runner::run_annual(
                context.profile(),
                existing,
                prior,
                &mut sink,
                Some(&context.drafts()?),
            )?;
        }
        "monthly" => {
            let (edit, prior) = parse_wizard_flags(args)?;
            let context = Context::open()?;
            let existing = edit.as_deref().map(load_monthly_from_file).transpose()?;
            let mut sink = context.sink()?;
            runner::run_monthly(
                context.profile(),
                existing,
                prior,
                &mut sink,
                Some(&context.drafts()?),
            )?;
        }
        "new" => match parse_kind(args.next())? {
            FormKind::Annual => {
                println!("{}", serde_json::to_string_pretty(&AnnualReport::default())?)
            }
            FormKind::Monthly => {
                println!("{}", serde_json::to_string_pretty(&MonthlyReport::default())?)
            }
        },
        "validate" => {
            let kind = parse_kind(args.next())?;
            let path = parse_path(args.next())?;
            match kind {
                FormKind::Annual => print_step_status(&load_annual_from_file(&path)?),
                FormKind::Monthly => print_step_status(&load_monthly_from_file(&path)?),
            }
        }
        "submit" => {
            let kind = parse_kind(args.next())?;
            let path = parse_path(args.next())?;
            let (_, prior) = parse_wizard_flags(args)?;
            let context = Context::open()?;
            let mut sink = context.sink()?;
            let receipt = match kind {
                FormKind::Annual => {
                    submit_record(&load_annual_from_file(&path)?, prior, &mut sink)?
                }
                FormKind::Monthly => {
                    submit_record(&load_monthly_from_file(&path)?, prior, &mut sink)?
                }
            };
            output::success(format!("Submission stored as {}.", receipt.id));
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

/// Shared handles resolved from the saved configuration.
struct Context {
    config: survey_core::config::PortalConfig,
}

impl Context {
    fn open() -> Result<Self, SurveyError> {
        let config = ConfigManager::new()?.load()?;
        Ok(Self { config })
    }

    fn profile(&self) -> survey_core::session::SessionProfile {
        self.config.session_profile()
    }

    fn sink(&self) -> Result<FileSink, SurveyError> {
        FileSink::new(resolve_base(self.config.data_dir.clone()).join("submissions"))
    }

    fn drafts(&self) -> Result<DraftStore, SurveyError> {
        DraftStore::new(self.config.data_dir.clone())
    }
}

fn submit_record<F: SurveyForm + serde::Serialize>(
    record: &F,
    prior: Option<Uuid>,
    sink: &mut FileSink,
) -> Result<survey_core::submit::SubmissionReceipt, Box<dyn std::error::Error>> {
    use survey_core::submit::{SubmissionPayload, SubmissionSink};

    let incomplete: Vec<usize> = (1..=F::STEPS)
        .filter(|step| !record.step_complete(*step))
        .collect();
    if !incomplete.is_empty() {
        return Err(Box::new(SurveyError::Submission(format!(
            "required fields missing in step(s) {:?}",
            incomplete
        ))));
    }
    let payload = SubmissionPayload::new(F::kind(), prior, serde_json::to_value(record)?);
    Ok(sink.submit(&payload)?)
}

fn print_step_status<F: SurveyForm>(record: &F) {
    for step in 1..=F::STEPS {
        let status = if record.step_complete(step) {
            "complete"
        } else {
            "incomplete"
        };
        println!("step {step}: {status}");
    }
}

fn parse_kind(arg: Option<String>) -> Result<FormKind, Box<dyn std::error::Error>> {
    match arg.as_deref() {
        Some("annual") => Ok(FormKind::Annual),
        Some("monthly") => Ok(FormKind::Monthly),
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn parse_path(arg: Option<String>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match arg {
        Some(path) => Ok(PathBuf::from(path)),
        None => {
            print_usage();
            process::exit(1);
        }
    }
}

fn parse_wizard_flags(
    mut args: impl Iterator<Item = String>,
) -> Result<(Option<PathBuf>, Option<Uuid>), Box<dyn std::error::Error>> {
    let mut edit = None;
    let mut prior = None;
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--edit" => {
                edit = Some(PathBuf::from(args.next().ok_or("--edit expects a file")?));
            }
            "--update" => {
                prior = Some(Uuid::parse_str(
                    &args.next().ok_or("--update expects a submission id")?,
                )?);
            }
            other => return Err(format!("unknown flag `{other}`").into()),
        }
    }
    Ok((edit, prior))
}

fn print_usage() {
    eprintln!("Usage: survey_core_cli <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  annual [--edit FILE] [--update ID]           run the annual wizard");
    eprintln!("  monthly [--edit FILE] [--update ID]          run the monthly wizard");
    eprintln!("  new <annual|monthly>                         print an all-defaults record");
    eprintln!("  validate <annual|monthly> FILE               report per-step completeness");
    eprintln!("  submit <annual|monthly> FILE [--update ID]   validate and store a record");
}
