use super::render::{
    colors_supported, render_config, render_json, render_messages, render_page, Renderer,
};
use super::setup::{ActionArg, Cli, Commands, ViewArg};
use super::styles::ARTISTLY_THEME;
use artistly::api::{
    CmdMessage, CmdResult, ConfigAction, MessageLevel, Page, SimulatedIntake, SubmissionOutcome,
};
use artistly::config::ArtistlyConfig;
use artistly::error::{ArtistlyError, Result};
use artistly::filter::FilterState;
use artistly::init::{config_dir, initialize, ArtistlyContext};
use artistly::validation::ArtistApplication;
use clap::Parser;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ARTISTLY_LOG";

struct AppContext {
    ctx: ArtistlyContext,
    renderer: Renderer,
}

impl AppContext {
    fn config(&self) -> &ArtistlyConfig {
        &self.ctx.config
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = config_dir()?;
    let ctx = initialize(&dir, cli.data.as_deref())?;
    let use_color = !cli.no_color && ctx.config.color && colors_supported();
    let renderer = Renderer::with_color(ARTISTLY_THEME.clone(), use_color)?;
    let app = AppContext { ctx, renderer };

    match cli.command {
        Some(Commands::Home) | None => handle_home(&app),
        Some(Commands::Artists {
            category,
            location,
            price,
            view,
            clear,
            json,
        }) => {
            let filters = ArtistFilters {
                category,
                location,
                price,
                view,
                clear,
            };
            handle_artists(&app, filters, json)
        }
        Some(Commands::Dashboard {
            search,
            category,
            status,
            json,
        }) => handle_dashboard(&app, search, category, status, json),
        Some(Commands::Respond { booking, action }) => handle_respond(&app, &booking, action),
        Some(Commands::Onboard {
            name,
            bio,
            location,
            categories,
            languages,
            fee,
            image,
            delay_ms,
            json,
        }) => {
            let form = ArtistApplication {
                name,
                bio,
                categories,
                languages,
                fee_range: fee,
                location,
                profile_image: image,
            };
            handle_onboard(&app, &form, delay_ms, json)
        }
        Some(Commands::Routes) => handle_routes(&app),
        Some(Commands::Config { key, value }) => handle_config(&app, key, value),
    }
}

/// Logs go to stderr. `ARTISTLY_LOG` takes an `EnvFilter` directive and wins
/// over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "artistly=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

struct ArtistFilters {
    category: Option<String>,
    location: Option<String>,
    price: Option<String>,
    view: Option<ViewArg>,
    clear: bool,
}

impl ArtistFilters {
    fn into_state(self, config: &ArtistlyConfig) -> FilterState {
        let mut state = FilterState::new().with_view(config.default_view);
        if let Some(category) = &self.category {
            state.set_category(category);
        }
        if let Some(location) = self.location {
            state.set_location(location);
        }
        if let Some(price) = &self.price {
            state.set_price(price);
        }
        if self.clear {
            state.clear();
        }
        if let Some(view) = self.view {
            state.set_view(view.into());
        }
        state
    }
}

fn handle_home(app: &AppContext) -> Result<()> {
    let result = app.ctx.api.home()?;
    print_result(app, &result, false)
}

fn handle_artists(app: &AppContext, filters: ArtistFilters, json: bool) -> Result<()> {
    let state = filters.into_state(app.config());
    tracing::debug!(?state, "listing artists");
    let result = app.ctx.api.list_artists(&state)?;
    print_result(app, &result, json)
}

fn handle_dashboard(
    app: &AppContext,
    search: Option<String>,
    category: Option<String>,
    status: Option<String>,
    json: bool,
) -> Result<()> {
    let mut state = FilterState::new();
    if let Some(search) = search {
        state.set_search(search);
    }
    if let Some(category) = &category {
        state.set_category(category);
    }
    if let Some(status) = &status {
        state.set_status(status);
    }
    let result = app.ctx.api.dashboard(&state)?;
    print_result(app, &result, json)
}

fn handle_respond(app: &AppContext, booking: &str, action: ActionArg) -> Result<()> {
    let id = booking.strip_prefix('#').unwrap_or(booking);
    let result = app.ctx.api.respond(id, action.into())?;
    print_result(app, &result, false)
}

fn handle_onboard(
    app: &AppContext,
    form: &ArtistApplication,
    delay_ms: Option<u64>,
    json: bool,
) -> Result<()> {
    let delay = Duration::from_millis(delay_ms.unwrap_or(app.config().submit_delay_ms));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let cancel = CancellationToken::new();

    if !json && !delay.is_zero() {
        eprintln!("Submitting...");
    }
    let result = runtime.block_on(app.ctx.api.onboard(form, &SimulatedIntake, delay, &cancel))?;
    print_result(app, &result, json)?;

    match &result.page {
        Some(Page::Onboard(page)) if !page.verdict.errors.is_empty() => {
            Err(ArtistlyError::Validation(page.verdict.clone()))
        }
        Some(Page::Onboard(page)) => match &page.outcome {
            Some(SubmissionOutcome::Failed { reason }) => {
                Err(ArtistlyError::Submission(reason.clone()))
            }
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

fn handle_routes(app: &AppContext) -> Result<()> {
    let result = app.ctx.api.routes()?;
    print_result(app, &result, false)
}

fn handle_config(app: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = app.ctx.api.config(action)?;
    if let Some(error) = first_error(&result.messages) {
        return Err(ArtistlyError::Api(error.content.clone()));
    }

    if let (true, Some(config)) = (show_all, &result.config) {
        print!("{}", render_config(&app.renderer, config, &config_source(config))?);
    }
    print!("{}", render_messages(&app.renderer, &result.messages)?);
    Ok(())
}

fn config_source(config: &ArtistlyConfig) -> String {
    match &config.data_file {
        Some(path) => path.display().to_string(),
        None => "bundled demo data".to_string(),
    }
}

fn first_error(messages: &[CmdMessage]) -> Option<&CmdMessage> {
    messages.iter().find(|m| m.level == MessageLevel::Error)
}

fn print_result(app: &AppContext, result: &CmdResult, json: bool) -> Result<()> {
    if json {
        print!("{}", render_json(result.page.as_ref(), &result.messages)?);
        return Ok(());
    }

    if let Some(page) = &result.page {
        print!("{}", render_page(&app.renderer, page)?);
    }
    let messages = render_messages(&app.renderer, &result.messages)?;
    if !messages.is_empty() {
        println!();
        print!("{}", messages);
    }
    Ok(())
}
