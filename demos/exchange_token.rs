use nord_session::provider_client::connect_webapi;
use nord_session::settings::MemorySettingsStore;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    simple_logging::log_to_stderr(LevelFilter::Debug);
    
    let token = std::env::var("NORD_TOKEN")?;
    let country_id = std::env::var("NORD_COUNTRY_ID").unwrap_or_else(|_| "228".into());
    let client = connect_webapi(MemorySettingsStore::new())?;
    let servers = client.list_servers(&country_id).await?;
    
    println!("{servers}");
    
    client.exchange_token_for_key(&token).await?;
    
    if let Some(credentials) = client.saved_credentials()? {
        println!("Got NordLynx key ({} chars)", credentials.private_key.len());
    }
    
    Ok(())
}
