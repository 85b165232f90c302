//! # Paywall Screen
//!
//! A headless subscribe screen for subscription paywalls built on hosted
//! billing providers.
//!
//! This crate provides [`SubscribeScreen`](screen::SubscribeScreen), a view
//! controller that owns the whole paywall flow: it loads offerings once the
//! billing provider is ready, renders a purchase grid, drives purchases, and
//! redirects customers who already hold an active subscription. Rendering is
//! headless; each pass produces a [`ViewModel`](view::ViewModel) for the host
//! UI to draw.
//!
//! ## Quick Start
//!
//! ```rust
//! use paywall_kit::mock::{MockBillingClient, RecordingNavigator};
//! use paywall_kit::providers::ProviderStack;
//! use paywall_kit::types::UserAccount;
//! use paywall_screen::screen::SubscribeScreen;
//!
//! # async fn quick_start() {
//! let billing = MockBillingClient::new();
//! let navigator = RecordingNavigator::new();
//!
//! let mut stack = ProviderStack::compose(Some(UserAccount::builder().id("user-1").build()));
//! stack.connect_billing(&billing).await.unwrap();
//!
//! let mut screen = SubscribeScreen::new(billing, navigator);
//! screen.sync(stack.snapshot()).await;
//!
//! let view = screen.render();
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`screen`]: The [`SubscribeScreen`](screen::SubscribeScreen) view
//!   controller and its configuration.
//! - [`view`]: The [`ViewModel`](view::ViewModel) render contract and the
//!   fixed user-facing messages.
//!
//! ## Screen Flow
//!
//! The standard flow using [`SubscribeScreen::sync`](screen::SubscribeScreen::sync):
//!
//! 1. **Compose providers**: Build a [`ProviderStack`](paywall_kit::providers::ProviderStack)
//!    and connect the billing provider.
//! 2. **Sync**: Feed the screen a provider snapshot. Subscribed customers
//!    are redirected; otherwise the offerings fetch runs on the first sync
//!    that observes the provider ready with a user signed in.
//! 3. **Render**: Produce the view model for the current mode. Rendering
//!    never fires effects.
//! 4. **Purchase**: Dispatch a package identifier from the grid. Success
//!    and already-owned receipts redirect; cancellation stays silent.
//!
//! ## Framework Integration
//!
//! The screen is framework-agnostic; any host that can call `sync` and draw
//! a [`ViewModel`](view::ViewModel) works. Here's an example with Axum:
//!
//! ```rust,ignore
//! use axum::{Router, extract::State, response::IntoResponse, routing::get};
//!
//! async fn subscribe_page(State(app): State<SharedApp>) -> impl IntoResponse {
//!     let mut app = app.lock().await;
//!     let app = &mut *app;
//!
//!     app.screen.sync(app.stack.snapshot()).await;
//!     app.screen.render()
//! }
//!
//! let router = Router::new().route("/subscribe", get(subscribe_page));
//! ```
//!
//! ## Error Handling
//!
//! Billing failures never escape the screen. Fetch failures put the screen
//! into a terminal error mode with a deliberately generic message; purchase
//! failures leave the grid up and attach a retry notice. Provider detail is
//! logged, not displayed.
//!
//! [`ViewModel`](view::ViewModel) implements `IntoResponse` for Axum and can
//! be easily adapted to other frameworks. It returns appropriate HTTP status
//! codes:
//!
//! - `401 Unauthorized`: No signed-in user; the sign-in prompt is returned.
//! - `200 OK`: Every other view, including load failures the screen already
//!   folded into its render.

pub mod screen;
pub mod view;

#[cfg(feature = "axum")]
pub mod axum;
