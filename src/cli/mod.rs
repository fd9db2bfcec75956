// ABOUTME: Command-line interface definitions and launch-context resolution

pub mod status;

use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;

use crate::config::session::StoredSession;

#[derive(Parser)]
#[command(
    name = "shoptalk",
    about = "Merchant console for the ShopTalk shopping assistant",
    version
)]
pub struct Cli {
    /// Output format for non-interactive commands
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Seller identifier for the dashboard
    #[arg(long, global = true)]
    pub seller_id: Option<String>,

    /// Storefront launch link; its query string carries the seller or shop
    /// context (sellerId / sellerID / shop / accessToken)
    #[arg(long, global = true)]
    pub launch_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the dashboard TUI (default when no command is given)
    Tui,
    /// Run the onboarding wizard
    Onboard(OnboardArgs),
    /// Fetch and print the store profile, then exit
    Status,
}

#[derive(Args)]
pub struct OnboardArgs {
    /// Store URL as handed over by the storefront
    #[arg(long)]
    pub shop: Option<String>,

    /// Access token as handed over by the storefront
    #[arg(long)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// First matching query parameter from a launch link.
pub fn query_param(launch_url: &str, keys: &[&str]) -> Option<String> {
    let parsed = Url::parse(launch_url).ok()?;
    parsed
        .query_pairs()
        .find(|(k, _)| keys.contains(&k.as_ref()))
        .map(|(_, v)| v.into_owned())
}

/// Resolve the active seller id: explicit flag, then launch-link query
/// string (either capitalization), then the stored session from a previous
/// onboarding run.
pub fn resolve_seller_id(explicit: Option<&str>, launch_url: Option<&str>) -> Option<String> {
    if let Some(id) = explicit {
        return Some(id.to_string());
    }
    if let Some(link) = launch_url {
        if let Some(id) = query_param(link, &["sellerId", "sellerID"]) {
            return Some(id);
        }
    }
    StoredSession::load().ok().flatten().map(|s| s.seller_id)
}

/// Resolve the wizard's storefront context: explicit flags win over the
/// launch link. Both values are opaque carries.
pub fn resolve_onboarding_context(args: &OnboardArgs, launch_url: Option<&str>) -> (String, String) {
    let shop = args
        .shop
        .clone()
        .or_else(|| launch_url.and_then(|link| query_param(link, &["shop"])))
        .unwrap_or_default();
    let access_token = args
        .access_token
        .clone()
        .or_else(|| launch_url.and_then(|link| query_param(link, &["accessToken"])))
        .unwrap_or_default();
    (shop, access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_reads_either_capitalization() {
        let link = "https://console.example/?sellerID=s9&foo=bar";
        assert_eq!(
            query_param(link, &["sellerId", "sellerID"]),
            Some("s9".to_string())
        );
        assert_eq!(query_param(link, &["missing"]), None);
        assert_eq!(query_param("not a url", &["sellerId"]), None);
    }

    #[test]
    fn explicit_seller_id_wins() {
        let link = "https://console.example/?sellerId=from-link";
        assert_eq!(
            resolve_seller_id(Some("explicit"), Some(link)),
            Some("explicit".to_string())
        );
        assert_eq!(
            resolve_seller_id(None, Some(link)),
            Some("from-link".to_string())
        );
    }

    #[test]
    fn onboarding_context_from_launch_link() {
        let args = OnboardArgs {
            shop: None,
            access_token: None,
        };
        let link = "https://console.example/onboarding?shop=demo.myshop.com&accessToken=tok1";
        let (shop, token) = resolve_onboarding_context(&args, Some(link));
        assert_eq!(shop, "demo.myshop.com");
        assert_eq!(token, "tok1");
    }
}
