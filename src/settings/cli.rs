use super::{Parser, Subcommand};
use crate::domain_model::UserId;
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[command(name = "panel-auth", about = "Profile update and login checks for the admin panel")]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a login identifier (username or email) and password.
    Login {
        #[arg(long)]
        identifier: String,
        #[arg(long, env = "PANEL_AUTH_PASSWORD", hide_env_values = true)]
        password: SecretString,
    },
    /// Save a profile: new password and/or name and email for the linked owner.
    UpdateProfile {
        #[arg(long)]
        user_id: UserId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, env = "PANEL_AUTH_NEW_PASSWORD", hide_env_values = true)]
        password: Option<SecretString>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn login_password_is_kept_secret() {
        let cli = Cli::try_parse_from([
            "panel-auth",
            "login",
            "--identifier",
            "ada",
            "--password",
            "analytical",
        ])
        .unwrap();

        assert!(!format!("{cli:?}").contains("analytical"));
        let Some(Command::Login { password, .. }) = cli.command else {
            panic!("expected login");
        };
        assert_eq!(password.expose_secret(), "analytical");
    }

    #[test]
    fn update_profile_password_is_optional() {
        let cli = Cli::try_parse_from([
            "panel-auth",
            "update-profile",
            "--user-id",
            "3c6e0b8a-9f1d-4a2b-8c7d-5e4f3a2b1c0d",
            "--name",
            "Ada",
        ])
        .unwrap();

        let Some(Command::UpdateProfile { password, name, .. }) = cli.command else {
            panic!("expected update-profile");
        };
        assert!(password.is_none());
        assert_eq!(name.as_deref(), Some("Ada"));
    }
}
