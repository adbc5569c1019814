//! Mail Config

use clap::Args;

use storefront_app::mail::MailConfig;

/// Outgoing mail settings. All optional; the server starts without them and reports a
/// configuration error when an order email is requested.
#[derive(Debug, Args)]
pub struct MailArgs {
    /// Mail API endpoint accepting JSON messages
    #[arg(long, env = "MAIL_API_URL")]
    pub mail_api_url: Option<String>,

    /// Mail account address, used as the sender
    #[arg(long, env = "EMAIL_USER")]
    pub email_user: Option<String>,

    /// Mail account secret
    #[arg(long, env = "EMAIL_PASS", hide_env_values = true)]
    pub email_pass: Option<String>,

    /// Address receiving order and contact notifications
    #[arg(long, env = "OWNER_EMAIL")]
    pub owner_email: Option<String>,
}

impl From<MailArgs> for MailConfig {
    fn from(args: MailArgs) -> Self {
        MailConfig {
            api_url: args.mail_api_url,
            sender: args.email_user,
            api_token: args.email_pass,
            owner: args.owner_email,
        }
    }
}
