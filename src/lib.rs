pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod mock;
pub mod rate_limiter;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::api::models::{PlayersGridView, SubEventItem};
use crate::config::{AppConfig, Category};
use crate::services::grid::PlayersGrid;
use crate::services::participants::{Catalogue, ParticipantService};
use crate::services::report;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(port: u16, offline: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env()?;
        let service = ServerService::new(port, config, offline);
        service.run().await
    })
}

pub fn handle_players(category: &str, draw: Option<&str>, offline: bool) -> Result<()> {
    let category: Category = category.parse()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env()?;
        let (grid, catalogue) = load_players_grid(&config, category, draw, offline).await?;

        let view = PlayersGridView::new(&grid, &catalogue.profile_pics);
        print!("{}", report::format_grid(&view));
        grid.ensure_loaded()
    })
}

pub fn handle_sub_events(offline: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env()?;
        let mut service = build_service(&config, offline)?;
        let catalogue = service.load_catalogue().await?;

        let items: Vec<SubEventItem> = catalogue.sub_events.iter().map(SubEventItem::from).collect();
        print!("{}", report::format_sub_events(&items));
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}

fn build_service(config: &AppConfig, offline: bool) -> Result<ParticipantService> {
    let service = ParticipantService::new(config)?;
    Ok(if offline { service.offline() } else { service })
}

/// Select `category`, fetch its entries and pick `draw` when the fetch succeeded.
///
/// A failed fetch is recorded on the returned grid, not returned as an error.
async fn load_players_grid(
    config: &AppConfig,
    category: Category,
    draw: Option<&str>,
    offline: bool,
) -> Result<(PlayersGrid, Catalogue)> {
    let mut service = build_service(config, offline)?;
    let catalogue = service.load_catalogue().await?;

    let mut grid = PlayersGrid::new(
        config.event.enabled_categories.clone(),
        catalogue.sub_events.clone(),
    );
    let Some(ticket) = grid.select_category(category)? else {
        anyhow::bail!("No sub-events available");
    };
    grid.load(&service, &ticket).await;

    if let Some(draw) = draw {
        if grid.error().is_none() {
            grid.select_draw(draw)?;
        }
    }
    Ok((grid, catalogue))
}
