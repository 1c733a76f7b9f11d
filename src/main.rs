/******************************************************************************
   Author: Tenant Admin Contributors
   Date: 03/10/26
******************************************************************************/

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tenant_admin::application::resolver::split_names;
use tenant_admin::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "tenant-admin", version)]
#[command(about = "Administer a tenant of the SaaS management API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file holding credentials and the session token
    #[arg(long, global = true, env = "TENANT_CONFIG", default_value = "tenant-admin.json")]
    config: PathBuf,

    /// Re-authentications allowed per operation
    #[arg(long, global = true)]
    max_attempts: Option<u32>,

    /// Items requested per page on listings
    #[arg(long, global = true)]
    page_size: Option<u32>,
}

/// Entity addressed by id or by name
#[derive(Args, Debug)]
struct Target {
    /// Id, used as-is
    #[arg(long)]
    id: Option<String>,

    /// Name, resolved to an id
    #[arg(long)]
    name: Option<String>,
}

impl Target {
    fn key(self, kind: EntityKind) -> Result<EntityKey, AppError> {
        EntityKey::from_id_or_name(kind, self.id, self.name)
            .ok_or_else(|| AppError::InvalidInput("either --id or --name is required".to_string()))
    }
}

/// Repository object addressed by id or by path and type
#[derive(Args, Debug)]
struct ObjectTarget {
    /// Object id, used as-is
    #[arg(long)]
    id: Option<String>,

    /// Object path, e.g. `Default/Sales/m_load`
    #[arg(long)]
    path: Option<String>,

    /// Object type, e.g. `MTT`
    #[arg(long = "type", default_value = "FOLDER")]
    object_type: String,
}

impl ObjectTarget {
    fn key(self) -> Result<EntityKey, AppError> {
        match (self.id, self.path) {
            (Some(id), _) => Ok(EntityKey::id(id)),
            (None, Some(path)) => Ok(EntityKey::typed_path(path, self.object_type)),
            (None, None) => Err(AppError::InvalidInput(
                "either --id or --path is required".to_string(),
            )),
        }
    }
}

/// Task addressed by id or by path; the type is always required
#[derive(Args, Debug)]
struct TaskTarget {
    /// Task id, used as-is
    #[arg(long)]
    id: Option<String>,

    /// Task path, e.g. `Default/Sales/mt_load`
    #[arg(long)]
    path: Option<String>,

    /// Task type, e.g. `MTT`
    #[arg(long = "type")]
    task_type: String,
}

impl TaskTarget {
    fn key(&self) -> Result<EntityKey, AppError> {
        match (&self.id, &self.path) {
            (Some(id), _) => Ok(EntityKey::id(id.clone())),
            (None, Some(path)) => Ok(EntityKey::typed_path(path.clone(), self.task_type.clone())),
            (None, None) => Err(AppError::InvalidInput(
                "either --id or --path is required".to_string(),
            )),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store credentials in the configuration file
    Configure {
        #[arg(long)]
        username: String,
        #[arg(long, env = "TENANT_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        pod: String,
        #[arg(long)]
        region: String,
    },

    /// Users
    #[command(subcommand)]
    Users(UserCommands),

    /// Roles
    #[command(subcommand)]
    Roles(RoleCommands),

    /// User groups
    #[command(subcommand)]
    Groups(GroupCommands),

    /// Repository objects
    #[command(subcommand)]
    Objects(ObjectCommands),

    /// Schedules
    #[command(subcommand)]
    Schedules(ScheduleCommands),

    /// Secure agents and runtime environments
    #[command(subcommand)]
    Agents(AgentCommands),

    /// Source control
    #[command(subcommand)]
    Sc(SourceControlCommands),

    /// Jobs
    #[command(subcommand)]
    Jobs(JobCommands),
}

#[derive(Subcommand, Debug)]
enum UserCommands {
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        name: Option<String>,
    },
    Get(Target),
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated role names
        #[arg(long, default_value = "")]
        roles: String,
        /// Comma-separated group names
        #[arg(long, default_value = "")]
        groups: String,
    },
    #[command(alias = "rm")]
    Delete(Target),
}

#[derive(Subcommand, Debug)]
enum RoleCommands {
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        name: Option<String>,
    },
    Get(Target),
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated privilege ids
        #[arg(long, default_value = "")]
        privileges: String,
    },
    #[command(alias = "rm")]
    Delete(Target),
    AddPrivileges {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        privileges: String,
    },
    RemovePrivileges {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        privileges: String,
    },
}

#[derive(Subcommand, Debug)]
enum GroupCommands {
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        name: Option<String>,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "")]
        roles: String,
        #[arg(long, default_value = "")]
        users: String,
    },
    #[command(alias = "rm")]
    Delete(Target),
}

#[derive(Subcommand, Debug)]
enum ObjectCommands {
    #[command(alias = "ls")]
    List {
        #[arg(long = "type")]
        object_type: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// RFC 3339 lower bound on the update time
        #[arg(long)]
        updated_since: Option<DateTime<Utc>>,
    },
    Lookup {
        #[arg(long)]
        path: String,
        #[arg(long = "type")]
        object_type: String,
    },
    Permissions(ObjectTarget),
}

#[derive(Subcommand, Debug)]
enum ScheduleCommands {
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        name: Option<String>,
    },
    Get(Target),
    /// Creates a schedule from a JSON definition
    Create {
        #[arg(long)]
        definition: String,
    },
    #[command(alias = "rm")]
    Delete(Target),
    Enable(Target),
    Disable(Target),
}

#[derive(Subcommand, Debug)]
enum AgentCommands {
    #[command(alias = "ls")]
    List,
    Get(Target),
    #[command(alias = "rm")]
    Delete(Target),
    RuntimeEnvironments,
}

#[derive(Subcommand, Debug)]
enum SourceControlCommands {
    Commit {
        #[arg(long)]
        summary: String,
        #[command(flatten)]
        object: ObjectTarget,
    },
    Pull {
        #[arg(long)]
        hash: String,
    },
    History,
    Details {
        #[arg(long)]
        hash: String,
    },
}

#[derive(Subcommand, Debug)]
enum JobCommands {
    Start {
        #[command(flatten)]
        task: TaskTarget,
    },
    Stop {
        #[command(flatten)]
        task: TaskTarget,
    },
    Running,
    Log {
        #[arg(long, default_value_t = 20)]
        rows: u32,
    },
}

fn listing(items: Vec<Value>) -> Value {
    Value::Array(items)
}

fn build_client(cli: &Cli, store: Arc<JsonFileStore>) -> Result<Client, AppError> {
    let mut config = Config::from_store(store.as_ref());
    if !config.is_configured() {
        config = Config::new();
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.retry = RetryBudget::new(max_attempts);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    Client::new(config, store)
}

async fn run(cli: Cli) -> Result<Value, AppError> {
    let store = Arc::new(JsonFileStore::open(&cli.config)?);

    if let Commands::Configure {
        username,
        password,
        pod,
        region,
    } = &cli.command
    {
        store.set("username", username)?;
        store.set("password", password)?;
        store.set("pod", pod)?;
        store.set("region", region)?;
        return Ok(json!({ "message": "Configuration saved" }));
    }

    let client = build_client(&cli, store)?;
    let cancel = client.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            cancel.cancel();
        }
    });

    match cli.command {
        Commands::Configure { .. } => Ok(Value::Null),
        Commands::Users(command) => match command {
            UserCommands::List { name } => client.list_users(name.as_deref()).await.map(listing),
            UserCommands::Get(target) => client.get_user(&target.key(EntityKind::User)?).await,
            UserCommands::Create {
                name,
                first_name,
                last_name,
                email,
                description,
                roles,
                groups,
            } => {
                let user = NewUser {
                    name,
                    first_name,
                    last_name,
                    email,
                    description,
                    roles: split_names(&roles),
                    groups: split_names(&groups),
                };
                client.create_user(&user).await
            }
            UserCommands::Delete(target) => {
                client.delete_user(&target.key(EntityKind::User)?).await
            }
        },
        Commands::Roles(command) => match command {
            RoleCommands::List { name } => client.list_roles(name.as_deref()).await.map(listing),
            RoleCommands::Get(target) => client.get_role(&target.key(EntityKind::Role)?).await,
            RoleCommands::Create {
                name,
                description,
                privileges,
            } => {
                let role = NewRole {
                    name,
                    description,
                    privileges: split_names(&privileges),
                };
                client.create_role(&role).await
            }
            RoleCommands::Delete(target) => {
                client.delete_role(&target.key(EntityKind::Role)?).await
            }
            RoleCommands::AddPrivileges { target, privileges } => {
                client
                    .add_role_privileges(&target.key(EntityKind::Role)?, &split_names(&privileges))
                    .await
            }
            RoleCommands::RemovePrivileges { target, privileges } => {
                client
                    .remove_role_privileges(
                        &target.key(EntityKind::Role)?,
                        &split_names(&privileges),
                    )
                    .await
            }
        },
        Commands::Groups(command) => match command {
            GroupCommands::List { name } => {
                client.list_groups(name.as_deref()).await.map(listing)
            }
            GroupCommands::Create {
                name,
                description,
                roles,
                users,
            } => {
                let group = NewGroup {
                    name,
                    description,
                    roles: split_names(&roles),
                    users: split_names(&users),
                };
                client.create_group(&group).await
            }
            GroupCommands::Delete(target) => {
                client.delete_group(&target.key(EntityKind::Group)?).await
            }
        },
        Commands::Objects(command) => match command {
            ObjectCommands::List {
                object_type,
                location,
                tag,
                updated_since,
            } => {
                let query = ObjectQuery {
                    object_type,
                    location,
                    tag,
                    updated_since,
                    updated_until: None,
                };
                client.list_objects(&query).await.map(listing)
            }
            ObjectCommands::Lookup { path, object_type } => {
                client.lookup_object(&path, &object_type).await
            }
            ObjectCommands::Permissions(object) => client.get_permissions(&object.key()?).await,
        },
        Commands::Schedules(command) => match command {
            ScheduleCommands::List { name } => {
                client.list_schedules(name.as_deref()).await.map(listing)
            }
            ScheduleCommands::Get(target) => {
                client.get_schedule(&target.key(EntityKind::Schedule)?).await
            }
            ScheduleCommands::Create { definition } => {
                let definition: Value = serde_json::from_str(&definition)?;
                client.create_schedule(&definition).await
            }
            ScheduleCommands::Delete(target) => {
                client.delete_schedule(&target.key(EntityKind::Schedule)?).await
            }
            ScheduleCommands::Enable(target) => {
                client.enable_schedule(&target.key(EntityKind::Schedule)?).await
            }
            ScheduleCommands::Disable(target) => {
                client.disable_schedule(&target.key(EntityKind::Schedule)?).await
            }
        },
        Commands::Agents(command) => match command {
            AgentCommands::List => client.list_agents().await.map(listing),
            AgentCommands::Get(target) => client.get_agent(&target.key(EntityKind::Agent)?).await,
            AgentCommands::Delete(target) => {
                client.delete_agent(&target.key(EntityKind::Agent)?).await
            }
            AgentCommands::RuntimeEnvironments => {
                client.list_runtime_environments().await.map(listing)
            }
        },
        Commands::Sc(command) => match command {
            SourceControlCommands::Commit { summary, object } => {
                client.commit(&summary, &[object.key()?]).await
            }
            SourceControlCommands::Pull { hash } => client.pull(&hash, &[]).await,
            SourceControlCommands::History => client.commit_history(None).await.map(listing),
            SourceControlCommands::Details { hash } => client.commit_details(&hash).await,
        },
        Commands::Jobs(command) => match command {
            JobCommands::Start { task } => client.start_job(&task.key()?, &task.task_type).await,
            JobCommands::Stop { task } => client.stop_job(&task.key()?, &task.task_type).await,
            JobCommands::Running => client.running_jobs().await.map(listing),
            JobCommands::Log { rows } => client.activity_log(None, rows).await.map(listing),
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(payload) => {
            match serde_json::to_string_pretty(&payload) {
                Ok(text) => println!("{text}"),
                Err(e) => error!("Failed to render response: {}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let AppError::AggregationPartial { items, .. } = &e {
                warn!(
                    "Listing incomplete: {} items were collected before the failure",
                    items.len()
                );
            }
            eprintln!("{}", e.report());
            ExitCode::FAILURE
        }
    }
}
