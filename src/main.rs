use anyhow::Context;
use stockreader_accounts::application_port::*;
use stockreader_accounts::domain_model::*;
use stockreader_accounts::logger::*;
use stockreader_accounts::server::*;
use stockreader_accounts::settings::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    debug!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let server = Server::try_new(&project_settings).await?;
    let result = run(&server, cli.command).await;
    server.shutdown().await;

    result
}

async fn run(server: &Server, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Users(UsersCommand::List) => {
            let users = server.user_service.get_registered_users().await?;
            for user in users {
                println!("{} {}", user.id, user.username);
            }
        }
        Command::Users(UsersCommand::Add {
            username,
            password,
            id,
        }) => {
            let id = id.map(UserId).unwrap_or_else(UserId::new_v4);
            server
                .user_service
                .add_user(RegisteredUser::new(id, username.as_str(), password))
                .await
                .with_context(|| format!("adding user '{}'", username))?;
            println!("{}", id);
        }
        Command::Login { username, password } => {
            let ok = server
                .authorization_service
                .login(LoginInput { username, password })
                .await?;
            println!("{}", ok);
        }
    }

    Ok(())
}
