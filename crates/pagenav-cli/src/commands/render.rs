//! Render command implementation.

use std::sync::Arc;

use clap::Parser;
use pagenav_common_config::LinksConfig;
use pagenav_common_i18n::Catalog;
use pagenav_render::{
    ActionUrl, FailurePolicy, HtmlLinkRenderer, Pager, RenderMode, RouteTemplate,
};

use super::PageArgs;
use crate::cli::CommandContext;
use crate::error::CliError;

/// Output format for the rendered pager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PagerFormat {
    #[default]
    Html,
    Json,
    Text,
}

/// Render the pager as HTML, JSON or text
#[derive(Debug, Parser)]
pub struct RenderCommand {
    #[command(flatten)]
    pub page: PageArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = PagerFormat::Html)]
    pub format: PagerFormat,

    /// Issue all link renders at once
    #[arg(long)]
    pub concurrent: bool,

    /// Render failing items as this text instead of failing
    #[arg(long)]
    pub placeholder: Option<String>,
}

impl RenderCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<String, CliError> {
        let state = self.page.state(&ctx.config.display)?;
        let renderer = build_renderer(&ctx.config.links, ctx.catalog()?)?;

        let mode = if self.concurrent {
            RenderMode::Concurrent
        } else {
            RenderMode::Sequential
        };
        let policy = match &self.placeholder {
            Some(text) => FailurePolicy::Placeholder(text.clone()),
            None => FailurePolicy::Abort,
        };

        let pager = Pager::new(renderer)
            .with_mode(mode)
            .with_policy(policy)
            .render(&state)
            .await?;

        Ok(match self.format {
            PagerFormat::Html => pager.to_html(),
            PagerFormat::Json => serde_json::to_string_pretty(&pager)?,
            PagerFormat::Text => pager.to_text(),
        })
    }
}

/// Build a renderer from the `links` settings.
///
/// Action links fall back to a relative `/` base when no base URL is set.
pub fn build_renderer(
    links: &LinksConfig,
    catalog: Arc<Catalog>,
) -> Result<HtmlLinkRenderer, CliError> {
    let mut renderer = HtmlLinkRenderer::new(catalog);

    if let Some(template) = &links.route_template {
        let route = RouteTemplate::parse(template.as_str())?.with_values(links.route_values.clone());
        renderer = renderer.with_route(route);
    }

    let action = ActionUrl::parse(links.base_url.as_deref().unwrap_or("/"))?
        .with_query_param(links.query_param.clone())
        .with_render_empty_parameters(links.render_empty_parameters)
        .with_boolean_parameter_names(links.boolean_parameter_names.clone());

    Ok(renderer.with_action(action))
}
