use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use waymeet::validators::is_valid_url;
use waymeet::{SocialProvider, UserPatch};

use crate::context::{CliApp, CliContext, Device};
use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::SessionView;

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Signing In",
        commands: &[
            "waymeet session login ana@waymeet.app          # Sign in as a sample user",
            "waymeet session signup me@mail.com --name Eu   # Create a fresh account",
            "waymeet session social google                  # Social sign-in",
        ],
    },
    ExampleGroup {
        title: "Session State",
        commands: &[
            "waymeet session status                         # Show the restored session",
            "waymeet session onboard 1 5                    # Pick categories and finish onboarding",
            "waymeet session logout                         # Forget the stored session",
            "waymeet session delete                         # Forget session and onboarding flag",
        ],
    },
];

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the session restored from storage
    #[command(name = "status")]
    Status,

    /// Sign in with email (any password is accepted)
    #[command(name = "login")]
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Create an account
    #[command(name = "signup")]
    Signup {
        email: String,
        /// Display name
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign in through a social provider (google, apple)
    #[command(name = "social")]
    Social { provider: SocialProvider },

    /// Sign out and remove the stored session
    #[command(name = "logout")]
    Logout,

    /// Remove every stored session flag
    #[command(name = "delete")]
    Delete,

    /// Request a password reset email
    #[command(name = "reset-password")]
    ResetPassword { email: String },

    /// Select categories by id and finish onboarding
    #[command(name = "onboard")]
    Onboard {
        #[arg(required = true)]
        categories: Vec<String>,
    },

    /// Resend the verification email
    #[command(name = "verify")]
    Verify,

    /// Edit profile fields for this run
    #[command(name = "profile")]
    Profile(ProfileArgs),
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    bio: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    avatar: Option<String>,
}

impl ProfileArgs {
    fn into_patch(self) -> UserPatch {
        UserPatch {
            display_name: self.name,
            bio: self.bio,
            home_city: self.city,
            avatar_url: self.avatar,
            ..UserPatch::default()
        }
    }
}

pub async fn handle_session_commands(command: SessionCommands, device: Device, output: &OutputManager) -> Result<()> {
    let mut ctx = CliContext::open(device, output).await?;
    let storage = ctx.app.session.storage().backend_name();
    let config = ctx.config.loaded.then(|| ctx.config.config_path.display().to_string());
    let app = &mut ctx.app;

    match command {
        SessionCommands::Status => {}
        SessionCommands::Login { email, password } => {
            output.progress("Signing in");
            let user = app.session.login(&email, &password).await?;
            output.clear_line();
            output.success(&format!("Signed in as {}", user.display_name));
        }
        SessionCommands::Signup { email, name, password } => {
            output.progress("Creating account");
            let result = app.session.signup(&email, &password, &name).await;
            output.clear_line();
            let user = result?;
            output.success(&format!("Welcome, {} ({})", user.display_name, user.id));
        }
        SessionCommands::Social { provider } => {
            output.progress(&format!("Signing in with {provider}"));
            let user = app.session.social_login(provider).await?;
            output.clear_line();
            output.success(&format!("Signed in as {}", user.display_name));
        }
        SessionCommands::Logout => {
            app.session.logout().await?;
            output.success("Signed out");
        }
        SessionCommands::Delete => {
            app.session.delete_account().await?;
            output.success("Account data removed from this device");
        }
        SessionCommands::ResetPassword { email } => {
            output.progress("Requesting reset");
            app.session.reset_password(&email).await?;
            output.clear_line();
            output.success(&format!("Reset instructions sent to {email}"));
            return Ok(());
        }
        SessionCommands::Onboard { categories } => {
            require_user(app)?;
            for id in &categories {
                if !waymeet::mock::categories().iter().any(|c| &c.id == id) {
                    output.warning(&format!("Unknown category id {id}"));
                }
            }
            app.finish_onboarding(categories).await?;
            output.success("Onboarding complete");
        }
        SessionCommands::Verify => {
            output.progress("Sending verification");
            app.session.resend_verification_email().await?;
            output.clear_line();
            output.success("Email verified");
        }
        SessionCommands::Profile(args) => {
            require_user(app)?;
            if let Some(avatar) = &args.avatar
                && !is_valid_url(avatar)
            {
                bail!("--avatar must be a valid URL");
            }
            let patch = args.into_patch();
            if patch.is_empty() {
                output.warning("Nothing to change");
            } else {
                app.session.update_profile(patch);
                output.info("Profile changes last for this run only");
            }
        }
    }

    let view = SessionView {
        status: app.session.auth_status(),
        has_completed_onboarding: app.session.has_completed_onboarding(),
        storage,
        config,
        user: app.session.user().cloned(),
    };
    output.display(&view)
}

fn require_user(app: &CliApp) -> Result<()> {
    if !app.session.is_authenticated() {
        bail!("Not signed in. Run 'waymeet session login <email>' first.");
    }
    Ok(())
}
