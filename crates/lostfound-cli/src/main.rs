//! CLI entry point for lostfound.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `lostfound-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use lostfound_app::{
    AppContext, AppError, ExplainOutput, browse, claim, detail_markdown, format_explanation,
    format_not_found, heading_for, listing_markdown, load_policy, mark_recovered, match_notices,
    match_notices_markdown, my_reports, my_reports_markdown, recent, run_explain, submit_report,
    view_report,
};
use lostfound_domain::search::ReportFilter;
use lostfound_render::render_json;
use lostfound_repo::{FileRepository, LocalSession};
use lostfound_settings::Overrides;
use lostfound_types::{ImageRef, ItemType, NewItemReport, ReportId, UserId};
use serde::Serialize;
use std::process::ExitCode;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: u8 = 1;
const EXIT_RETRYABLE: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "lostfound",
    version,
    about = "Lost-and-found reports with privacy-preserving disclosure"
)]
struct Cli {
    /// Path to the JSON item store (created on first write).
    #[arg(long, default_value = "lostfound.store.json")]
    store: Utf8PathBuf,

    /// Path to lostfound config TOML (optional; defaults apply when missing).
    #[arg(long, default_value = "lostfound.toml")]
    config: Utf8PathBuf,

    /// Act as this signed-in user. Omit to browse anonymously.
    #[arg(long = "as", value_name = "USER")]
    user: Option<String>,

    /// Override profile (standard|strict|lenient).
    #[arg(long)]
    profile: Option<String>,

    /// Print JSON instead of Markdown.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Lost,
    Found,
}

impl From<Kind> for ItemType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Lost => ItemType::Lost,
            Kind::Found => ItemType::Found,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    All,
    Lost,
    Found,
}

impl From<Filter> for ReportFilter {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => ReportFilter::All,
            Filter::Lost => ReportFilter::Lost,
            Filter::Found => ReportFilter::Found,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report a lost or found item.
    Submit {
        #[arg(long = "type", value_enum)]
        kind: Kind,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        category: String,
        /// Where it was lost or found; a leading "Lost at"/"Found at" is dropped.
        #[arg(long, default_value = "")]
        location: String,
        /// Calendar date, YYYY-MM-DD.
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        contact: String,
        /// Reference to an uploaded image.
        #[arg(long)]
        image: Option<String>,
    },

    /// List active reports.
    List {
        #[arg(long, value_enum)]
        tab: Option<Kind>,
        /// Case-insensitive search over visible fields.
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Show one report.
    Show { id: String },

    /// Claim a found item that matches one of your lost reports.
    Claim { id: String },

    /// Mark your lost item as found.
    Recover { id: String },

    /// List your own reports.
    Mine {
        #[arg(long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
    },

    /// Found items that may match your lost reports.
    Matches,

    /// The most recent active reports.
    Recent {
        /// Override the configured number of reports.
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Explain an error or notice code.
    Explain { code: String },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lostfound error: {err:#}");
            match err.downcast_ref::<AppError>() {
                Some(app) if app.is_retryable() => {
                    eprintln!("hint: the item changed since you loaded it; refresh and try again");
                    ExitCode::from(EXIT_RETRYABLE)
                }
                Some(app) => {
                    eprintln!("hint: run `lostfound explain {}`", app.code());
                    ExitCode::from(EXIT_FAILURE)
                }
                None => ExitCode::from(EXIT_FAILURE),
            }
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOSTFOUND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e).with_context(|| format!("read config: {}", path)),
    }
}

fn print_output<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    markdown: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        print!("{}", render_json(value).context("serialize output")?);
    } else {
        print!("{}", markdown());
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Explain { code } = &cli.cmd {
        return cmd_explain(code);
    }

    let cfg_text = read_config(&cli.config)?;
    let overrides = Overrides {
        profile: cli.profile.clone(),
        recent_limit: match &cli.cmd {
            Commands::Recent { limit } => *limit,
            _ => None,
        },
    };
    let policy = load_policy(&cfg_text, overrides)?;

    let session = match cli.user.as_deref().map(str::trim) {
        None => LocalSession::new(),
        Some("") => anyhow::bail!("--as must name a user"),
        Some(user) => LocalSession::signed_in_as(UserId::new(user)),
    };
    let repo = FileRepository::open(cli.store.clone());
    tracing::debug!(store = %cli.store, profile = %policy.profile, "opened store");

    let ctx = AppContext::new(&repo, &session, policy);
    let viewer = ctx.viewer()?;
    let now = OffsetDateTime::now_utc();
    let json = cli.json;

    match cli.cmd {
        Commands::Submit {
            kind,
            title,
            category,
            location,
            date,
            description,
            contact,
            image,
        } => {
            let input = NewItemReport {
                item_type: Some(kind.into()),
                title,
                category,
                location,
                date,
                description,
                contact_info: contact,
                image_ref: image.map(ImageRef::new),
            };
            let report = submit_report(&ctx, &viewer, &input, now)?;
            print_output(json, &report, || {
                format!(
                    "Created {} report `{}`.\n",
                    report.item_type.as_str(),
                    report.id
                )
            })
        }
        Commands::List { tab, query } => {
            let tab = tab.map(ItemType::from);
            let rows = browse(&ctx, &viewer, tab, &query)?;
            print_output(json, &rows, || listing_markdown(heading_for(tab), &rows))
        }
        Commands::Show { id } => {
            let view = view_report(&ctx, &viewer, &ReportId::new(id))?;
            print_output(json, &view, || detail_markdown(&view))
        }
        Commands::Claim { id } => {
            let outcome = claim(&ctx, &viewer, &ReportId::new(id), now)?;
            print_output(json, &outcome, || {
                format!(
                    "Claimed `{}` for your lost report `{}`. The finder's contact is now visible.\n",
                    outcome.record.found_id, outcome.record.lost_id
                )
            })
        }
        Commands::Recover { id } => {
            let report = mark_recovered(&ctx, &viewer, &ReportId::new(id), now)?;
            print_output(json, &report, || {
                format!("Marked `{}` as found.\n", report.id)
            })
        }
        Commands::Mine { filter } => {
            let reports = my_reports(&ctx, &viewer, filter.into())?;
            print_output(json, &reports, || my_reports_markdown(&reports))
        }
        Commands::Matches => {
            let notices = match_notices(&ctx, &viewer)?;
            print_output(json, &notices, || match_notices_markdown(&notices))
        }
        Commands::Recent { .. } => {
            let rows = recent(&ctx, &viewer, ctx.policy.recent_limit)?;
            print_output(json, &rows, || listing_markdown("Recent items", &rows))
        }
        Commands::Explain { .. } => Ok(()),
    }
}

fn cmd_explain(code: &str) -> anyhow::Result<()> {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!("{}", format_not_found(&identifier, available_codes));
            anyhow::bail!("unknown code: {identifier}")
        }
    }
}
