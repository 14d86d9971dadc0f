use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::process;
use std::sync::{Arc, Mutex};
use terminal_size::{terminal_size, Width};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use nimbus::actions;
use nimbus::api;
use nimbus::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use nimbus::handlers;
use nimbus::models::{AppState, UserRecord};
use nimbus::resources::userdata;
use nimbus::services::{generate_password_hash, load_users_from_file, persist_users_file};

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

async fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let users = load_users_from_file();

    let client = reqwest::Client::builder()
        .user_agent(format!("Nimbus/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        users,
        sessions: Arc::new(Mutex::new(HashMap::new())),
        flash_store: Arc::new(Mutex::new(HashMap::new())),
        api_base_url: config::get_api_base_url(),
        api_token: config::get_api_token(),
        public_base_url: config::get_public_base_url(),
        client,
        custom_css: None,
    }
}

fn build_app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/servers", get(handlers::servers::servers_list))
        .route(
            "/servers/launch",
            get(handlers::servers::launch_get).post(handlers::servers::launch_post),
        )
        .route("/servers/:server_id", get(handlers::servers::server_detail))
        .route(
            "/servers/:server_id/requests/:request_id",
            get(handlers::servers::request_events),
        )
        .route("/servers/:server_id/start", post(handlers::servers::server_start_post))
        .route("/servers/:server_id/stop", post(handlers::servers::server_stop_post))
        .route("/servers/:server_id/reboot", post(handlers::servers::server_reboot_post))
        .route("/servers/:server_id/lock", post(handlers::servers::server_lock_post))
        .route("/servers/:server_id/unlock", post(handlers::servers::server_unlock_post))
        .route("/servers/:server_id/delete", post(handlers::servers::server_delete_post))
        .route("/roles", get(handlers::roles::roles_list))
        .route("/roles/:role_id", get(handlers::roles::role_detail))
        .route("/ports", get(handlers::ports::ports_list))
        .route("/ports/:port_id", get(handlers::ports::port_detail))
        .route("/volumes", get(handlers::volumes::volumes_list))
        .route("/volumes/:volume_id", get(handlers::volumes::volume_detail))
        .route("/containers", get(handlers::containers::containers_list))
        .route(
            "/containers/:container_id",
            get(handlers::containers::container_detail),
        )
        .route("/capsules", get(handlers::capsules::capsules_list))
        .route(
            "/capsules/:capsule_id/delete",
            post(handlers::capsules::capsule_delete_post),
        )
        .route(
            "/share-group-types",
            get(handlers::share_types::share_group_types_list),
        )
        .route("/confirm/:action/:id", get(handlers::system::confirmation_get))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handlers::middleware::auth_middleware,
        ));

    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let app = Router::new()
        .route("/", get(handlers::auth::root_get))
        .route(
            "/login",
            get(handlers::auth::login_get).post(handlers::auth::login_post),
        )
        .route("/logout", post(handlers::auth::logout_post))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(axum::http::header::CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .merge(protected_routes);

    app.nest_service(
        "/static",
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=31536000, immutable"),
            ))
            .service(ServeDir::new("static")),
    )
    .with_state(state)
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!(
                    "{} {}: {}",
                    yansi::Paint::red("Failed to read custom stylesheet at"),
                    path,
                    e
                );
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_app(state.clone());
    tracing::info!(%addr, "Starting Nimbus console");
    println!(
        "{} {}",
        yansi::Paint::new("Console running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the console with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn json_value_to_string(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            serde_json::to_string(v).unwrap_or_default()
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table
}

fn print_table(value: &serde_json::Value) {
    let mut table = new_table();

    match value {
        serde_json::Value::Array(arr) => {
            if arr.is_empty() {
                println!("(empty list)");
                return;
            }
            if let Some(first) = arr.iter().find_map(|v| v.as_object()) {
                let headers: Vec<&String> = first.keys().collect();
                table.set_header(&headers);
                for item in arr {
                    if let Some(obj) = item.as_object() {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|k| obj.get(*k).map(json_value_to_string).unwrap_or_default())
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![json_value_to_string(item)]);
                }
            }
        }
        serde_json::Value::Object(obj) => {
            table.set_header(vec!["Field", "Value"]);
            for (k, v) in obj {
                table.add_row(vec![k, &json_value_to_string(v)]);
            }
        }
        _ => {
            println!("{}", json_value_to_string(value));
            return;
        }
    }

    println!("\n{table}\n");
}

fn print_api_response(value: &serde_json::Value) {
    if let Some(obj) = value.as_object() {
        // Unwrap the single-key envelopes the services respond with
        for key in ["server", "servers", "role", "roles"] {
            if let Some(inner) = obj.get(key) {
                print_table(inner);
                return;
            }
        }
    }
    print_table(value);
}

#[derive(Parser)]
#[command(
    name = "nimbus",
    author,
    version,
    about = "Nimbus cloud console",
    long_about = r#"Nimbus — a self-hosted console for an OpenStack-style cloud.

Runs a web console against the platform's API gateway and surfaces the same
operations as subcommands for scripting. Use the `--env-file` option or
environment variables (API_BASE_URL, API_TOKEN) to provide API credentials.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Manage servers:
      nimbus servers list
      nimbus servers show 3f9c...
  3) Compose boot user-data:
      nimbus user-data compose --password secret --base64
"#,
    after_help = "Use `nimbus <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web console
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / API credentials)
    #[command(
        about = "Validate configuration and ensure API connectivity.",
        long_about = "Validate the environment variables required for the console, then validate the configured token by listing roles from the identity service."
    )]
    CheckConfig { env_file: Option<String> },
    /// Manage local console accounts (users.json)
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
    /// Manage compute servers via the configured API
    #[command(
        about = "Manage compute servers via the API (list, show, power, delete).",
        long_about = "These commands perform the same actions the web console's buttons perform; they make API requests using the current configuration and token. Be careful with commands that mutate state."
    )]
    Servers {
        #[command(subcommand)]
        sub: ServerCommands,
    },
    /// Compose cloud-init user-data payloads
    UserData {
        #[command(subcommand)]
        sub: UserDataCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    #[command(about = "List console accounts")]
    List,
    #[command(
        about = "Add an account",
        long_about = "Add an account with a role (admin|member). The password is hashed before it is saved to users.json."
    )]
    Add {
        username: String,
        password: String,
        role: String,
    },
    #[command(about = "Reset an account's password")]
    ResetPassword { username: String, password: String },
}

#[derive(Subcommand)]
enum ServerCommands {
    /// List servers (optional --name to filter)
    List {
        #[arg(long)]
        name: Option<String>,
    },
    /// Show server details
    Show { server_id: String },
    /// Start a stopped server
    Start { server_id: String },
    /// Stop a running server
    Stop { server_id: String },
    /// Soft-reboot a server
    Reboot { server_id: String },
    /// Delete a server
    Delete { server_id: String },
}

#[derive(Subcommand)]
enum UserDataCommands {
    /// Compose the MIME payload from a password and/or script file
    #[command(
        about = "Compose a cloud-init user-data document",
        long_about = "Compose the MIME multipart user-data document the launch form injects: a cloud-config password part, a chpasswd shell part, and/or the literal init script."
    )]
    Compose {
        /// Root password to set on first boot
        #[arg(long)]
        password: Option<String>,
        /// Path to a shell script to run on first boot
        #[arg(long)]
        script_file: Option<String>,
        /// Emit the payload base64-encoded, ready for the compute API
        #[arg(long, default_value_t = false)]
        base64: bool,
    },
}

async fn run_server_cli_action(state: &AppState, action_id: &str, server_id: &str) {
    let action = actions::lookup(action_id).expect("registered action");
    let payload = action.submit(state, server_id).await;
    print_api_response(&payload);
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        nimbus::api::client::set_silent(true);
    }

    // Dispatch CLI commands. If no command provided, serve the web app by default
    if cli.command.is_none() {
        let state = build_state_from_env(None).await;
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            let mut ok = true;
            if state.api_base_url.trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("API_BASE_URL is not configured").red());
                ok = false;
            }
            if state.api_token.trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("API_TOKEN is not configured").red());
                ok = false;
            }
            if !ok {
                process::exit(1);
            }
            let roles = api::load_roles(&state.client, &state.api_base_url, &state.api_token, None).await;
            if roles.is_empty() {
                eprintln!(
                    "{}",
                    yansi::Paint::new("Configuration appears invalid (no roles returned from the identity service)").red()
                );
                process::exit(1);
            }
            println!(
                "{}",
                yansi::Paint::new(format!(
                    "Configuration looks valid ({} roles returned)",
                    roles.len()
                ))
                .green()
            );
        }
        Commands::Users { sub } => {
            let state = build_state_from_env(None).await;
            match sub {
                UserCommands::List => {
                    let users = state.users.lock().unwrap();
                    println!(
                        "{}",
                        yansi::Paint::new("username\trole").bold().underline()
                    );
                    for (u, rec) in users.iter() {
                        println!("{}\t{}", u, rec.role);
                    }
                }
                UserCommands::Add {
                    username,
                    password,
                    role,
                } => {
                    if role != "admin" && role != "member" {
                        eprintln!(
                            "{} '{}' {}",
                            yansi::Paint::new("Role").red(),
                            role,
                            yansi::Paint::new("is not one of admin|member").red()
                        );
                        process::exit(1);
                    }
                    let uname = username.trim().to_lowercase();
                    let mut users = state.users.lock().unwrap();
                    if users.contains_key(&uname) {
                        eprintln!(
                            "{} '{}' {}",
                            yansi::Paint::new("Account").red(),
                            uname,
                            yansi::Paint::new("already exists").red()
                        );
                        process::exit(1);
                    }
                    let hash = generate_password_hash(&password);
                    users.insert(
                        uname.clone(),
                        UserRecord {
                            password: hash,
                            role: role.clone(),
                        },
                    );
                    drop(users);
                    if let Err(e) = persist_users_file(&state.users) {
                        eprintln!(
                            "{}: {}",
                            yansi::Paint::new("Failed to persist users.json").red(),
                            e
                        );
                        process::exit(1);
                    }
                    println!(
                        "{} '{}' {}",
                        yansi::Paint::new("Account").green(),
                        uname,
                        yansi::Paint::new("added").green()
                    );
                }
                UserCommands::ResetPassword { username, password } => {
                    let uname = username.trim().to_lowercase();
                    let mut users = state.users.lock().unwrap();
                    if let Some(rec) = users.get_mut(&uname) {
                        rec.password = generate_password_hash(&password);
                    } else {
                        eprintln!(
                            "{} '{}' {}",
                            yansi::Paint::new("Account").red(),
                            uname,
                            yansi::Paint::new("not found").red()
                        );
                        process::exit(1);
                    }
                    drop(users);
                    if let Err(e) = persist_users_file(&state.users) {
                        eprintln!(
                            "{}: {}",
                            yansi::Paint::new("Failed to persist users.json").red(),
                            e
                        );
                        process::exit(1);
                    }
                    println!(
                        "{} '{}' {}",
                        yansi::Paint::new("Password for").green(),
                        uname,
                        yansi::Paint::new("updated").green()
                    );
                }
            }
        }
        Commands::Servers { sub } => {
            let state = build_state_from_env(None).await;
            match sub {
                ServerCommands::List { name } => {
                    let servers = api::load_servers(
                        &state.client,
                        &state.api_base_url,
                        &state.api_token,
                        name.as_deref(),
                    )
                    .await;
                    let mut table = new_table();
                    table.set_header(vec!["ID", "Name", "Status", "Created"]);
                    for s in &servers {
                        table.add_row(vec![
                            &s.id,
                            &s.name,
                            &s.status_display,
                            &s.created_display,
                        ]);
                    }
                    println!("\n{table}\n");
                }
                ServerCommands::Show { server_id } => {
                    let (_view, raw) = api::load_server(
                        &state.client,
                        &state.api_base_url,
                        &state.api_token,
                        &server_id,
                    )
                    .await;
                    print_api_response(&raw);
                }
                ServerCommands::Start { server_id } => {
                    run_server_cli_action(&state, "start-server", &server_id).await;
                }
                ServerCommands::Stop { server_id } => {
                    run_server_cli_action(&state, "stop-server", &server_id).await;
                }
                ServerCommands::Reboot { server_id } => {
                    run_server_cli_action(&state, "reboot-server", &server_id).await;
                }
                ServerCommands::Delete { server_id } => {
                    run_server_cli_action(&state, "delete-server", &server_id).await;
                }
            }
        }
        Commands::UserData { sub } => match sub {
            UserDataCommands::Compose {
                password,
                script_file,
                base64: encode,
            } => {
                let script = match script_file {
                    Some(path) => match std::fs::read_to_string(&path) {
                        Ok(text) => Some(text),
                        Err(e) => {
                            eprintln!(
                                "{} {}: {}",
                                yansi::Paint::new("Failed to read script file").red(),
                                path,
                                e
                            );
                            process::exit(1);
                        }
                    },
                    None => None,
                };
                let request = userdata::UserDataRequest { password, script };
                let payload = request.compose();
                if encode {
                    use base64::Engine;
                    println!(
                        "{}",
                        base64::engine::general_purpose::STANDARD.encode(payload)
                    );
                } else {
                    println!("{}", payload);
                }
            }
        },
    }
}
