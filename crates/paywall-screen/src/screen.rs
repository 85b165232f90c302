use bon::Builder;
use paywall_kit::{
    billing::BillingClient,
    errors::{BillingError, BillingErrorCode},
    navigation::{Navigator, Route},
    providers::ProviderSnapshot,
    types::{Package, PackageId},
};

use crate::view::{PackageCard, ViewModel, messages};

/// Subscribe screen behavior configuration.
#[derive(Builder, Debug, Clone)]
pub struct ScreenConfig {
    /// Where customers with an active subscription are sent.
    #[builder(into, default = Route::from("/admin"))]
    pub authenticated_route: Route,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig::builder().build()
    }
}

/// Rendering mode of the subscribe screen, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    /// Navigation away has fired; the screen renders nothing from now on.
    Redirecting,
    /// No signed-in user.
    Unauthenticated,
    /// Offerings fetch not yet resolved.
    Loading,
    /// Offerings fetch failed or came back unusable.
    Error,
    /// Purchase grid available.
    Ready,
}

/// The subscribe screen's view controller.
///
/// Owns the screen state and drives the two operations behind it: loading
/// offerings once the billing provider is ready, and purchasing a package.
/// The billing client and navigator are injected; nothing here reaches for
/// process-global state.
///
/// Both operations take `&mut self`, so overlapping invocations cannot be
/// expressed; the state is only ever observed between them.
#[derive(Debug)]
pub struct SubscribeScreen<B, N>
where
    B: BillingClient,
    N: Navigator,
{
    /// The injected billing client.
    pub billing: B,
    /// Where redirects are sent.
    pub navigator: N,
    /// Behavior configuration.
    pub config: ScreenConfig,

    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    packages: Vec<Package>,
    authenticated: bool,
    redirected: bool,
    fetch_armed: bool,
}

impl<B, N> SubscribeScreen<B, N>
where
    B: BillingClient,
    N: Navigator,
{
    /// Screen with the default configuration.
    pub fn new(billing: B, navigator: N) -> Self {
        SubscribeScreen::with_config(billing, navigator, ScreenConfig::default())
    }

    pub fn with_config(billing: B, navigator: N, config: ScreenConfig) -> Self {
        SubscribeScreen {
            billing,
            navigator,
            config,
            loading: true,
            error: None,
            notice: None,
            packages: Vec::new(),
            authenticated: false,
            redirected: false,
            fetch_armed: true,
        }
    }

    /// Reconcile the screen with the current provider state.
    ///
    /// Call once after composing the providers and again whenever their
    /// state changes. Customers with an active subscription are redirected
    /// on the spot; otherwise the offerings fetch runs on the first sync
    /// that observes the billing provider ready with a user signed in.
    pub async fn sync(&mut self, snapshot: ProviderSnapshot<'_>) {
        if self.redirected {
            return;
        }

        let subscribed = snapshot.subscription.is_subscribed()
            || snapshot
                .customer_info
                .is_some_and(|info| info.has_any_active());
        if subscribed {
            self.redirect();
            return;
        }

        self.authenticated = snapshot.current_user.is_some();

        if !snapshot.billing_ready {
            // A not-ready provider re-arms the fetch for the next
            // readiness edge.
            self.fetch_armed = true;
            return;
        }

        if self.authenticated && self.fetch_armed {
            // Disarm before the await so a sync racing in behind this one
            // cannot start a second fetch for the same readiness edge.
            self.fetch_armed = false;
            self.load_offerings().await;
        }
    }

    /// Purchase one of the fetched packages.
    ///
    /// Only dispatches from the ready grid; stray activations while
    /// loading, errored, or already redirecting are ignored, as are
    /// identifiers that are not part of the fetched sequence.
    pub async fn purchase(&mut self, package_id: &PackageId) {
        if self.mode() != ScreenMode::Ready {
            return;
        }

        let Some(package) = self
            .packages
            .iter()
            .find(|p| &p.identifier == package_id)
            .cloned()
        else {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring purchase of unknown package '{package_id}'");

            return;
        };

        match self.billing.purchase(&package).await {
            Ok(_result) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Purchase complete: package='{}'", package.identifier);

                self.redirect();
            }
            Err(err) => {
                let err: BillingError = err.into();
                match err.code {
                    BillingErrorCode::Cancelled => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("Purchase cancelled by user");
                    }
                    BillingErrorCode::ReceiptAlreadyInUse => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("Receipt already in use, treating purchase as complete");

                        self.redirect();
                    }
                    _ => {
                        #[cfg(feature = "tracing")]
                        tracing::error!("Purchase failed: {err}");

                        self.notice = Some(messages::PURCHASE_FAILED.to_string());
                    }
                }
            }
        }
    }

    /// Current rendering mode.
    pub fn mode(&self) -> ScreenMode {
        if self.redirected {
            ScreenMode::Redirecting
        } else if !self.authenticated {
            ScreenMode::Unauthenticated
        } else if self.loading {
            ScreenMode::Loading
        } else if self.error.is_some() {
            ScreenMode::Error
        } else {
            ScreenMode::Ready
        }
    }

    /// Build the view for the current mode. Pure; never fires effects.
    pub fn render(&self) -> ViewModel {
        match self.mode() {
            ScreenMode::Redirecting => ViewModel::Empty,
            ScreenMode::Unauthenticated => ViewModel::SignInPrompt {
                title: messages::SIGN_IN_TITLE.to_string(),
                message: messages::SIGN_IN_REQUIRED.to_string(),
            },
            ScreenMode::Loading => ViewModel::Loading {
                message: messages::LOADING.to_string(),
            },
            ScreenMode::Error => ViewModel::LoadFailed {
                message: self.error.clone().unwrap_or_default(),
            },
            ScreenMode::Ready => ViewModel::PurchaseGrid {
                title: messages::GRID_TITLE.to_string(),
                cards: self.packages.iter().map(PackageCard::from_package).collect(),
                notice: self.notice.clone(),
            },
        }
    }

    /// Fetched packages, in provider order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Terminal fetch error message, if the screen is in error mode.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Non-terminal purchase failure notice, if one is showing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn redirect(&mut self) {
        self.redirected = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Active subscription, redirecting to '{}'",
            self.config.authenticated_route
        );

        self.navigator.navigate(&self.config.authenticated_route);
    }

    async fn load_offerings(&mut self) {
        match self.billing.offerings().await {
            Ok(offerings) => match offerings.current {
                Some(offering) => {
                    if offering.available_packages.is_empty() {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("Offering '{}' has no packages", offering.identifier);

                        self.error = Some(messages::NO_PACKAGES.to_string());
                    } else {
                        self.packages = offering.available_packages;
                        self.error = None;
                    }
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("No current offering configured");

                    self.error = Some(messages::NO_OFFERINGS.to_string());
                }
            },
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to fetch offerings: {err}");

                self.error = Some(messages::FETCH_FAILED.to_string());
            }
        }

        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use paywall_kit::mock::{MockBillingClient, RecordingNavigator};

    use super::*;

    fn screen() -> SubscribeScreen<MockBillingClient, RecordingNavigator> {
        SubscribeScreen::new(MockBillingClient::new(), RecordingNavigator::new())
    }

    #[test]
    fn default_route_is_admin() {
        assert_eq!(ScreenConfig::default().authenticated_route, Route::from("/admin"));
    }

    #[test]
    fn mode_priority() {
        let mut screen = screen();
        assert_eq!(screen.mode(), ScreenMode::Unauthenticated);

        screen.authenticated = true;
        assert_eq!(screen.mode(), ScreenMode::Loading);

        screen.loading = false;
        screen.error = Some("nope".to_string());
        assert_eq!(screen.mode(), ScreenMode::Error);

        screen.error = None;
        assert_eq!(screen.mode(), ScreenMode::Ready);

        // Redirecting wins over everything else.
        screen.redirected = true;
        screen.loading = true;
        assert_eq!(screen.mode(), ScreenMode::Redirecting);
    }

    #[test]
    fn error_mode_short_circuits_stale_packages() {
        let mut screen = screen();
        screen.authenticated = true;
        screen.loading = false;
        screen.packages = vec![];
        screen.error = Some(messages::FETCH_FAILED.to_string());

        assert_eq!(screen.mode(), ScreenMode::Error);
        assert!(matches!(screen.render(), ViewModel::LoadFailed { .. }));
    }
}
