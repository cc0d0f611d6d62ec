use anyhow::Result;
use databricks_sp_cli::api::ProvisioningClient;
use databricks_sp_cli::auth::Credentials;
use databricks_sp_cli::config::{Profile, Settings};

#[tokio::test]
#[ignore = "requires real service principal credentials in .env"]
async fn test_directory_login_with_real_credentials() -> Result<()> {
    dotenvy::dotenv().ok();
    let profile = Profile::from(Credentials::from_env()?);

    let mut client = ProvisioningClient::new(profile.client_config(&Settings::default()))?;
    client.fetch_directory_token().await?;
    assert!(client.ad_token().is_some());
    Ok(())
}
