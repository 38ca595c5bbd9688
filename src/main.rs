use panel_auth::application_port::*;
use panel_auth::domain_model::Principal;
use panel_auth::host::Host;
use panel_auth::logger::*;
use panel_auth::settings::*;
use serde_json::json;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let Some(command) = cli.command else {
        return Err(anyhow::anyhow!("no command given, see --help"));
    };

    let host = Host::try_new(&project_settings).await?;
    let code = run(&host, command).await;
    host.shutdown().await;
    code
}

async fn run(host: &Host, command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Login {
            identifier,
            password,
        } => match host
            .login_service
            .login(LoginInput {
                identifier,
                password,
            })
            .await
        {
            Ok(user_id) => {
                println!("{}", json!({ "user_id": user_id }));
                Ok(ExitCode::SUCCESS)
            }
            Err(LoginError::CredentialRejected(field)) => {
                let mut errors = serde_json::Map::new();
                errors.insert(field.field, json!([field.message]));
                println!("{}", json!({ "errors": errors }));
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
        Command::UpdateProfile {
            user_id,
            name,
            email,
            password,
        } => {
            let user = host
                .user_repo
                .get(user_id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("user {} not found", user_id))?;
            let previous_hash = user.password_hash.clone();

            let update = host
                .profile_service
                .save(
                    &Principal::Record(user),
                    ProfileUpdateRequest {
                        name,
                        email,
                        password,
                    },
                )
                .await?;

            println!(
                "{}",
                json!({
                    "user_id": update.user.user_id,
                    "password_changed": update.password_changed(&previous_hash),
                    "owner": update.owner,
                })
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
