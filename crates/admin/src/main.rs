//! `myron-admin` -- terminal admin console for the Myron NGO backend.
//!
//! Lists, views, adds, edits and deletes categories, donations, events
//! and contact messages, and prints the dashboard.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                              |
//! |------------------------|----------|---------|------------------------------------------|
//! | `API_BASE_URL`         | yes      | --      | Backend REST root, e.g. `http://host/api/` |
//! | `IGNORE_DELETE_ERRORS` | no       | `true`  | Treat failed deletes as done             |
//! | `RUST_LOG`             | no       | `myron_admin=info,myron_client=info` | Log filter |

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use myron_client::api::ApiClient;
use myron_client::resources::{ResourceApi, ResourceService};
use myron_core::image::ImageUpload;
use myron_core::models::{Category, Contact, Donation, Event};
use myron_core::resource::{Draft, ResourceKind};

use myron_admin::categories::CategoryOptions;
use myron_admin::cli::{self, Action, Assignment, Command, USAGE};
use myron_admin::config::AdminConfig;
use myron_admin::controller::{DeleteOutcome, DeletePolicy, FormListController};
use myron_admin::dashboard::DashboardAggregator;
use myron_admin::prompt::{ConsolePrompter, Prompter};
use myron_admin::render::{self, TableView, Tabular};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "myron_admin=info,myron_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(command).await {
        tracing::error!("Command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = AdminConfig::from_env().context("Failed to load configuration")?;
    let api = ApiClient::from_config(&config.client);
    let prompter: Arc<dyn Prompter> = Arc::new(ConsolePrompter::new(command.assume_yes));

    tracing::debug!(
        base_url = api.base_url(),
        route = command.route.path(),
        "Starting myron-admin",
    );

    println!("{}\n", render::render_sidebar(command.route));

    let page = Page {
        api: &api,
        prompter,
        policy: config.delete_policy,
    };

    match command.route.resource() {
        None => {
            let mut dashboard = DashboardAggregator::from_api(&api);
            // A failed load still shows the last (here zeroed) snapshot.
            let loaded = dashboard.load().await.map(|_| ());
            println!("{}", render::render_dashboard(dashboard.snapshot()));
            loaded?;
            Ok(())
        }
        Some(ResourceKind::Category) => page.run::<Category>(command.action).await,
        Some(ResourceKind::Donation) => page.run::<Donation>(command.action).await,
        Some(ResourceKind::Event) => page.run::<Event>(command.action).await,
        Some(ResourceKind::Contact) => page.run::<Contact>(command.action).await,
    }
}

/// One resource page driven from the command line.
struct Page<'a> {
    api: &'a ApiClient,
    prompter: Arc<dyn Prompter>,
    policy: DeletePolicy,
}

impl Page<'_> {
    async fn run<R: Tabular>(&self, action: Action) -> anyhow::Result<()> {
        let service: Arc<dyn ResourceService<R>> = Arc::new(ResourceApi::<R>::new(self.api.clone()));
        let mut controller = FormListController::new(service, Arc::clone(&self.prompter))
            .with_delete_policy(self.policy);
        controller.load().await;

        match action {
            Action::List => {}
            Action::View(id) => {
                controller.open_view(id)?;
                let options = self.category_options::<R>().await;
                self.print_form(&controller, options.as_ref());
                return Ok(());
            }
            Action::Add(fields) => {
                controller.open_add();
                self.fill(&mut controller, &fields).await?;
                controller.submit().await?;
            }
            Action::Edit(id, fields) => {
                controller.open_edit(id)?;
                self.fill(&mut controller, &fields).await?;
                controller.submit().await?;
            }
            Action::Delete(id) => {
                if controller.delete(id).await? == DeleteOutcome::Cancelled {
                    println!("Cancelled.");
                }
            }
        }

        println!("{}", render::list_heading(R::KIND));
        println!(
            "{}",
            TableView::build(controller.items(), self.api.base_url()).to_text()
        );
        Ok(())
    }

    /// The live category list, for pages whose records are filed under a
    /// category.
    async fn category_options<R: Tabular>(&self) -> Option<CategoryOptions> {
        if !takes_category(R::KIND) {
            return None;
        }
        let categories: Arc<dyn ResourceService<Category>> = Arc::new(self.api.categories());
        Some(CategoryOptions::load(&categories).await)
    }

    /// Apply command-line assignments to the open draft.
    ///
    /// When the draft still has no category afterwards, the selector is
    /// printed so the user can pick one.
    async fn fill<R: Tabular>(
        &self,
        controller: &mut FormListController<R>,
        fields: &[Assignment],
    ) -> anyhow::Result<()> {
        let options = self.category_options::<R>().await;

        for Assignment { field, value } in fields {
            match (field.as_str(), &options) {
                ("image", _) => {
                    let upload = read_image(Path::new(value)).await?;
                    controller.set_image(upload)?;
                }
                ("category" | "category_id", Some(options)) if !value.trim().is_empty() => {
                    let id = value
                        .trim()
                        .parse()
                        .with_context(|| format!("'{value}' is not a category id"))?;
                    let id = options.select(id)?;
                    controller.apply_input(field, &id.to_string())?;
                }
                _ => controller.apply_input(field, value)?,
            }
        }

        if let Some(options) = &options {
            let selected = controller.form().draft().and_then(|d| d.category_id());
            if selected.is_none() {
                println!("{}", render::render_category_options(options));
            }
        }
        Ok(())
    }

    fn print_form<R: Tabular>(
        &self,
        controller: &FormListController<R>,
        options: Option<&CategoryOptions>,
    ) {
        if let (Some(mode), Some(draft)) = (controller.form().mode(), controller.form().draft()) {
            println!("{}", render::render_form(R::KIND, mode, draft, options));
        }
    }
}

fn takes_category(kind: ResourceKind) -> bool {
    matches!(kind, ResourceKind::Donation | ResourceKind::Event)
}

async fn read_image(path: &Path) -> anyhow::Result<ImageUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok(ImageUpload::new(file_name, bytes))
}
