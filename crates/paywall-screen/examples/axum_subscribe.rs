use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use paywall_kit::{
    mock::MockBillingClient,
    navigation::{Navigator, Route},
    providers::ProviderStack,
    types::{Offering, Offerings, Package, PackageId, Price, ProductInfo, UserAccount},
};
use paywall_screen::screen::SubscribeScreen;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

/// Navigator that only logs. A real host would push into its router here.
#[derive(Clone)]
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &Route) {
        tracing::info!("Navigating to {}", route);
    }
}

struct App {
    stack: ProviderStack,
    screen: SubscribeScreen<MockBillingClient, LoggingNavigator>,
}

type SharedApp = Arc<Mutex<App>>;

async fn subscribe_page(State(app): State<SharedApp>) -> impl IntoResponse {
    let mut app = app.lock().await;
    let app = &mut *app;

    app.screen.sync(app.stack.snapshot()).await;
    app.screen.render()
}

async fn purchase(
    State(app): State<SharedApp>,
    Path(package_id): Path<String>,
) -> impl IntoResponse {
    let mut app = app.lock().await;

    let package_id = PackageId::from(package_id);
    app.screen.purchase(&package_id).await;
    app.screen.render()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let client = MockBillingClient::new().with_offerings(demo_offerings());
    let user = UserAccount::builder()
        .id("demo-user")
        .email("demo@example.com")
        .build();

    let mut stack = ProviderStack::compose(Some(user));
    stack
        .connect_billing(&client)
        .await
        .expect("Failed to connect the billing provider");

    let screen = SubscribeScreen::new(client, LoggingNavigator);
    let app: SharedApp = Arc::new(Mutex::new(App { stack, screen }));

    let router = Router::new()
        .route("/subscribe", get(subscribe_page))
        .route("/subscribe/purchase/{package_id}", post(purchase))
        .layer(TraceLayer::new_for_http())
        .with_state(app);

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid u16 integer");
    let addr: std::net::SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", addr);
    axum::serve(listener, router).await.expect("Server failed");
}

fn demo_offerings() -> Offerings {
    Offerings::builder()
        .current(
            Offering::builder()
                .identifier("default")
                .available_packages(vec![
                    demo_package(
                        "$rc_monthly",
                        "Premium Monthly",
                        "Full access, billed monthly",
                        "$9.99",
                    ),
                    demo_package(
                        "$rc_annual",
                        "Premium Annual",
                        "Full access, billed yearly",
                        "$89.99",
                    ),
                ])
                .build(),
        )
        .build()
}

fn demo_package(id: &str, name: &str, description: &str, price: &str) -> Package {
    Package::builder()
        .identifier(id)
        .product(
            ProductInfo::builder()
                .display_name(name)
                .description(description)
                .current_price(Price::builder().formatted_price(price).build())
                .build(),
        )
        .build()
}
