use company_stocks_api::Application;
use company_stocks_infra::StocksContext;
use company_stocks_sdk::StocksSDK;

// Launch the application as a background task
pub async fn spawn_app() -> (StocksSDK, String) {
    // Every test gets its own store so that listing starts out empty
    let mut ctx = StocksContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = StocksSDK::new(address.clone());
    (sdk, address)
}
