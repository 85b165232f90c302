use paywall_core::types::{CustomerInfo, UserAccount, UserId};

use crate::{billing::BillingClient, subscription::SubscriptionStatus};

/// A unit of shared state established during application startup.
///
/// Providers form an explicit initialization graph: `Deps` names the
/// upstream contexts a provider reads while initializing, so a composition
/// root that constructs them out of order does not compile.
pub trait ContextProvider: Sized {
    /// Upstream contexts read during initialization.
    type Deps<'a>;

    fn initialize(deps: Self::Deps<'_>) -> Self;
}

/// Holds the signed-in user, if any.
///
/// Fed by the host application's auth layer; everything downstream only
/// reads it.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    current_user: Option<UserAccount>,
}

impl ContextProvider for UserContext {
    type Deps<'a> = Option<UserAccount>;

    fn initialize(deps: Self::Deps<'_>) -> Self {
        UserContext { current_user: deps }
    }
}

impl UserContext {
    pub fn current_user(&self) -> Option<&UserAccount> {
        self.current_user.as_ref()
    }

    /// Swap the signed-in user, e.g. after login or logout.
    pub fn set_current_user(&mut self, user: Option<UserAccount>) {
        self.current_user = user;
    }
}

/// Color scheme selected for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Theme slot. Carries no logic of its own; it exists so downstream
/// providers have a scheme to inherit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeContext {
    pub scheme: ColorScheme,
}

impl ContextProvider for ThemeContext {
    type Deps<'a> = ();

    fn initialize(_deps: Self::Deps<'_>) -> Self {
        ThemeContext::default()
    }
}

/// Header chrome theme, derived from the base theme at initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderThemeContext {
    pub scheme: ColorScheme,
}

impl ContextProvider for HeaderThemeContext {
    type Deps<'a> = &'a ThemeContext;

    fn initialize(deps: Self::Deps<'_>) -> Self {
        HeaderThemeContext {
            scheme: deps.scheme,
        }
    }
}

/// Owns the billing provider connection state and the customer snapshot it
/// reports.
///
/// Initialization reads the user context to derive the billing alias, which
/// is why this provider comes after it in the stack. Readiness starts false
/// and flips on a successful [`BillingContext::connect`].
#[derive(Debug, Clone, Default)]
pub struct BillingContext {
    app_user_id: Option<UserId>,
    customer_info: Option<CustomerInfo>,
    ready: bool,
}

impl ContextProvider for BillingContext {
    type Deps<'a> = &'a UserContext;

    fn initialize(deps: Self::Deps<'_>) -> Self {
        BillingContext {
            app_user_id: deps.current_user().map(|u| u.id.clone()),
            customer_info: None,
            ready: false,
        }
    }
}

impl BillingContext {
    /// The billing alias this context was initialized with.
    pub fn app_user_id(&self) -> Option<&UserId> {
        self.app_user_id.as_ref()
    }

    /// Whether the provider connection finished initializing.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Latest customer snapshot reported by the provider.
    pub fn customer_info(&self) -> Option<&CustomerInfo> {
        self.customer_info.as_ref()
    }

    /// Fetch the initial customer snapshot and mark the context ready.
    pub async fn connect<B: BillingClient>(&mut self, client: &B) -> Result<(), B::Error> {
        let info = client.customer_info().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Billing provider connected, {} active entitlement(s)",
            info.entitlements.active.len()
        );

        self.customer_info = Some(info);
        self.ready = true;
        Ok(())
    }

    /// Replace the snapshot, e.g. with the one a purchase resolved with.
    pub fn apply(&mut self, info: CustomerInfo) {
        self.customer_info = Some(info);
    }
}

/// The application composition root.
///
/// [`ProviderStack::compose`] constructs the contexts in their one valid
/// order: user, theme, header theme, billing. Each constructor borrows only
/// contexts that already exist, which is what makes the order load-bearing;
/// the billing context, for example, reads the user context for its alias.
#[derive(Debug, Clone)]
pub struct ProviderStack {
    pub user: UserContext,
    pub theme: ThemeContext,
    pub header_theme: HeaderThemeContext,
    pub billing: BillingContext,
}

impl ProviderStack {
    /// Build the full provider stack for a session.
    pub fn compose(current_user: Option<UserAccount>) -> Self {
        let user = UserContext::initialize(current_user);
        let theme = ThemeContext::initialize(());
        let header_theme = HeaderThemeContext::initialize(&theme);
        let billing = BillingContext::initialize(&user);

        ProviderStack {
            user,
            theme,
            header_theme,
            billing,
        }
    }

    /// Connect the billing provider and record its initial snapshot.
    pub async fn connect_billing<B: BillingClient>(&mut self, client: &B) -> Result<(), B::Error> {
        self.billing.connect(client).await
    }

    /// Swap the signed-in user.
    ///
    /// The billing alias is derived at composition time; changing the user
    /// afterwards does not re-alias an already connected billing context.
    pub fn set_current_user(&mut self, user: Option<UserAccount>) {
        self.user.set_current_user(user);
    }

    /// Read-only view of the stack for one sync pass, with the subscription
    /// signal derived from the billing snapshot.
    pub fn snapshot(&self) -> ProviderSnapshot<'_> {
        self.snapshot_with(SubscriptionStatus::derive(self.billing.customer_info()))
    }

    /// Read-only view of the stack with an externally derived subscription
    /// signal, e.g. one keyed to a single entitlement.
    pub fn snapshot_with(&self, subscription: SubscriptionStatus) -> ProviderSnapshot<'_> {
        ProviderSnapshot {
            current_user: self.user.current_user(),
            billing_ready: self.billing.is_ready(),
            customer_info: self.billing.customer_info(),
            subscription,
        }
    }
}

/// Everything a screen reads from the provider stack in one sync pass.
#[derive(Debug, Clone, Copy)]
pub struct ProviderSnapshot<'a> {
    pub current_user: Option<&'a UserAccount>,
    pub billing_ready: bool,
    pub customer_info: Option<&'a CustomerInfo>,
    pub subscription: SubscriptionStatus,
}

#[cfg(test)]
mod tests {
    use paywall_core::types::{CustomerInfo, Entitlement, Entitlements, Record};

    use super::*;
    use crate::mock::MockBillingClient;

    fn user(id: &str) -> UserAccount {
        UserAccount::builder().id(id).build()
    }

    #[test]
    fn compose_derives_billing_alias_from_user() {
        let stack = ProviderStack::compose(Some(user("user-7")));
        assert_eq!(stack.billing.app_user_id().map(|id| id.0.as_str()), Some("user-7"));

        let stack = ProviderStack::compose(None);
        assert!(stack.billing.app_user_id().is_none());
    }

    #[test]
    fn header_theme_inherits_scheme() {
        let stack = ProviderStack::compose(None);
        assert_eq!(stack.header_theme.scheme, stack.theme.scheme);
    }

    #[test]
    fn billing_starts_not_ready() {
        let stack = ProviderStack::compose(Some(user("user-7")));
        assert!(!stack.billing.is_ready());
        assert!(stack.billing.customer_info().is_none());
        assert!(!stack.snapshot().billing_ready);
    }

    #[tokio::test]
    async fn connect_records_snapshot_and_flips_readiness() {
        let mut active = Record::new();
        active.insert(
            "premium".to_string(),
            Entitlement::builder()
                .identifier("premium")
                .is_active(true)
                .build(),
        );
        let info = CustomerInfo::builder()
            .entitlements(Entitlements::builder().active(active).build())
            .build();

        let client = MockBillingClient::new().with_customer_info(info);
        let mut stack = ProviderStack::compose(Some(user("user-7")));
        stack.connect_billing(&client).await.unwrap();

        assert!(stack.billing.is_ready());
        let snapshot = stack.snapshot();
        assert!(snapshot.billing_ready);
        assert!(snapshot.subscription.is_subscribed());
    }

    #[tokio::test]
    async fn failed_connect_leaves_context_not_ready() {
        let client = MockBillingClient::new()
            .with_customer_info_error(paywall_core::errors::BillingError::network("down"));
        let mut stack = ProviderStack::compose(None);

        assert!(stack.connect_billing(&client).await.is_err());
        assert!(!stack.billing.is_ready());
    }

    #[test]
    fn set_current_user_updates_user_context_only() {
        let mut stack = ProviderStack::compose(None);
        stack.set_current_user(Some(user("late-login")));

        assert!(stack.user.current_user().is_some());
        assert!(stack.billing.app_user_id().is_none());
    }
}
