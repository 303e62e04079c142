use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod display;
mod metrics;
mod models;
mod session;

use api::{ApiClient, ApiError};
use models::{AuthMode, Category, OutcomeType};
use session::SessionStore;

/// SkillBridge - track what you learn and how you apply it
#[derive(Parser)]
#[command(name = "skillbridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the SkillBridge learning tracker", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration in the app directory
    Init {
        /// Base URL of the SkillBridge API
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Log in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and log in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show configuration and session state
    Status,

    /// Show the confidence dashboard
    Dashboard,

    /// Manage learning items
    Learning {
        #[command(subcommand)]
        action: LearningAction,
    },

    /// Manage applied skills on a learning item
    Apply {
        #[command(subcommand)]
        action: ApplyAction,
    },
}

#[derive(Subcommand)]
enum LearningAction {
    /// List all learning items
    List,

    /// Show one learning item with its applied skills
    Show { id: i64 },

    /// Add a new learning item
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, value_enum)]
        category: Category,
    },

    /// Update a learning item's title and category
    Edit {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long, value_enum)]
        category: Category,
    },

    /// Delete a learning item
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum ApplyAction {
    /// List applied skills for a learning item
    List { learning_id: i64 },

    /// Record an applied skill
    Add {
        learning_id: i64,
        #[arg(long)]
        description: String,
        #[arg(long = "type", value_enum)]
        outcome_type: OutcomeType,
    },

    /// Delete an applied skill
    Remove { learning_id: i64, outcome_id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app_dir = get_app_dir()?;
    let mut app_config = config::load_config(&app_dir)?;
    if let Ok(url) = std::env::var("SKILLBRIDGE_API_URL") {
        if !url.is_empty() {
            app_config.api_url = url;
        }
    }

    let session = SessionStore::new(&app_dir);
    let client = ApiClient::new(&app_config.api_url, session);

    match cli.command {
        Commands::Init { api_url } => {
            let new_config = config::AppConfig {
                api_url: api_url.unwrap_or(app_config.api_url),
            };
            config::save_config(&new_config, &app_dir)?;
            info!("Configuration written to {:?}", app_dir);
            println!("Initialized SkillBridge in {:?}", app_dir);
            println!("API URL: {}", new_config.api_url);
        }
        Commands::Login { email, password } => {
            handle_auth(&client, &email, &password, AuthMode::Login).await?;
        }
        Commands::Signup { email, password } => {
            handle_auth(&client, &email, &password, AuthMode::Signup).await?;
        }
        Commands::Logout => {
            if client.session().is_authenticated() {
                client.session().clear()?;
                println!("Logged out.");
            } else {
                println!("Not logged in.");
            }
        }
        Commands::Status => {
            println!("SkillBridge Status");
            println!("==================");
            println!();
            println!("App directory: {:?}", app_dir);
            println!("API URL: {}", app_config.api_url);
            if client.session().is_authenticated() {
                println!("Session: authenticated");
            } else {
                println!("Session: not logged in (run 'skillbridge login')");
            }
        }
        Commands::Dashboard => {
            // Independent reads; issue both and join.
            let (items, metrics_data) =
                tokio::try_join!(client.list_learning(), client.get_dashboard())
                    .map_err(|e| anyhow!(e.user_message("Failed to load data.")))?;
            display::render_dashboard(&items, &metrics_data);
        }
        Commands::Learning { action } => match action {
            LearningAction::List => {
                let items = client
                    .list_learning()
                    .await
                    .map_err(|e| anyhow!(e.user_message("Failed to load learning items.")))?;
                display::render_learning_list(&items);
            }
            LearningAction::Show { id } => {
                let (item, outcomes) =
                    tokio::try_join!(client.get_learning(id), client.list_outcomes(id))
                        .map_err(|e| anyhow!(e.user_message("Failed to load details.")))?;
                display::render_learning_detail(&item, &outcomes);
            }
            LearningAction::Add { title, category } => {
                let created = client
                    .create_learning(&title, category)
                    .await
                    .map_err(|e| anyhow!(e.user_message("Failed to add learning.")))?;
                println!("Added learning [{}] {}", created.id, created.title);
            }
            LearningAction::Edit { id, title, category } => {
                let updated = client
                    .update_learning(id, &title, category)
                    .await
                    .map_err(|e| anyhow!(e.user_message("Failed to update learning.")))?;
                println!("Updated learning [{}] {}", updated.id, updated.title);
            }
            LearningAction::Remove { id } => {
                client
                    .delete_learning(id)
                    .await
                    .map_err(|e| anyhow!(e.user_message("Failed to delete learning.")))?;
                println!("Deleted learning {id}");
            }
        },
        Commands::Apply { action } => match action {
            ApplyAction::List { learning_id } => {
                let outcomes = client
                    .list_outcomes(learning_id)
                    .await
                    .map_err(|e| anyhow!(e.user_message("Failed to load applied skills.")))?;
                display::render_outcomes(learning_id, &outcomes);
            }
            ApplyAction::Add { learning_id, description, outcome_type } => {
                let created = client
                    .create_outcome(learning_id, &description, outcome_type)
                    .await
                    .map_err(|e| anyhow!(e.user_message("Failed to add applied skill.")))?;
                println!("Added applied skill [{}] to learning {}", created.id, learning_id);
            }
            ApplyAction::Remove { learning_id, outcome_id } => {
                client
                    .delete_outcome(learning_id, outcome_id)
                    .await
                    .map_err(|e| anyhow!(e.user_message("Failed to delete skill.")))?;
                println!("Deleted applied skill {outcome_id} from learning {learning_id}");
            }
        },
    }

    Ok(())
}

/// Login and signup share one endpoint; only the mode differs.
async fn handle_auth(
    client: &ApiClient,
    email: &str,
    password: &str,
    mode: AuthMode,
) -> Result<()> {
    match client.authenticate(email, password, mode).await {
        Ok(_) => {
            match mode {
                AuthMode::Login => println!("Logged in as {email}."),
                AuthMode::Signup => println!("Account created. Logged in as {email}."),
            }
            Ok(())
        }
        Err(ApiError::UserNotFound) => Err(anyhow!(
            "No account found for {email}. Create one with `skillbridge signup --email {email} --password ...`."
        )),
        // 401 and 403 read the same at the login form. Global teardown stays
        // keyed on 401 only, so a login 403 never clears a stored session.
        Err(ApiError::SessionExpired) | Err(ApiError::Rejected { status: 403, .. }) => {
            Err(anyhow!("Invalid email or password."))
        }
        Err(ApiError::Rejected { message: Some(msg), .. }) => Err(anyhow!(msg)),
        Err(_) => Err(anyhow!("Something went wrong.")),
    }
}

fn get_app_dir() -> Result<std::path::PathBuf> {
    // Check for a project-local directory first
    let cwd = std::env::current_dir()?;
    let project_dir = cwd.join(".skillbridge");
    if project_dir.exists() {
        return Ok(project_dir);
    }

    // Fall back to home directory
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".skillbridge"))
}
