// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wallet Manager
//!
//! Owns the wallet session: connects and disconnects, reacts to provider
//! notifications and keeps the session on the required network.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::api::config::WalletConfig;
use crate::api::contract::ContractConfig;
use crate::api::error::{WalletError, WalletResult};
use crate::api::events::{ListenerRegistry, WalletEvent, WalletListener};
use crate::chain::{ChainId, NetworkIdentity};
use crate::provider::{ProviderError, ProviderEvent, ProviderEventKind, WalletProvider};
use crate::rpc::{EndpointSelector, ReadProvider, RpcConnector};

use super::enforcer::NetworkEnforcer;
use super::handles::{ContractHandle, ProviderHandle, SignerHandle};
use super::state::{Session, SessionState};

/// Result of a successful [`WalletManager::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectInfo {
    pub account: String,
    pub chain_id: ChainId,
}

/// Snapshot for health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHealth {
    pub state: SessionState,
    /// The last chain the session saw is the target chain.
    pub on_target_network: bool,
    /// Automatic correction gave up (budget spent or the switch failed)
    /// and the target network has not been seen since.
    pub auto_switch_exhausted: bool,
}

#[derive(Default)]
struct Handles {
    signer: Option<SignerHandle>,
    contract: Option<ContractHandle>,
}

/// Holds the `connecting` flag for the duration of a `connect`.
struct ConnectingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ConnectingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> WalletResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ConnectingGuard { flag })
            .map_err(|_| WalletError::AlreadyConnecting)
    }
}

impl Drop for ConnectingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Wallet session manager.
///
/// One instance per application, constructed explicitly and shared (e.g.
/// in an `Arc`) with the layers that need it. All methods take `&self`.
///
/// Provider notifications are queued on a channel registered during
/// [`init`](Self::init) and applied by [`process_events`](Self::process_events).
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use otcswap_wallet::{WalletConfig, WalletManager};
///
/// let manager = WalletManager::new(WalletConfig::default(), Some(Arc::new(provider)))?;
/// manager.init()?;
/// let info = manager.connect()?;
///
/// // Later, from the host's event loop
/// manager.process_events();
/// ```
pub struct WalletManager {
    config: WalletConfig,
    enforcer: NetworkEnforcer,
    contract: ContractConfig,
    injected: Option<Arc<dyn WalletProvider>>,
    provider: Mutex<Option<ProviderHandle>>,
    session: Mutex<Session>,
    handles: Mutex<Handles>,
    connecting: AtomicBool,
    auto_switch_attempts: AtomicU32,
    auto_switch_gave_up: AtomicBool,
    inbox: Mutex<Option<Receiver<ProviderEvent>>>,
    listeners: ListenerRegistry,
}

impl WalletManager {
    /// Creates a manager. `injected` is the host's wallet provider, if any.
    pub fn new(
        config: WalletConfig,
        injected: Option<Arc<dyn WalletProvider>>,
    ) -> WalletResult<Self> {
        config.validate()?;
        let enforcer = NetworkEnforcer::new(config.target_network()?.clone());
        let contract = config.contract_config()?;

        Ok(WalletManager {
            config,
            enforcer,
            contract,
            injected,
            provider: Mutex::new(None),
            session: Mutex::new(Session::new()),
            handles: Mutex::new(Handles::default()),
            connecting: AtomicBool::new(false),
            auto_switch_attempts: AtomicU32::new(0),
            auto_switch_gave_up: AtomicBool::new(false),
            inbox: Mutex::new(None),
            listeners: ListenerRegistry::new(),
        })
    }

    /// Creates a manager around a concrete provider.
    pub fn with_provider<P>(config: WalletConfig, provider: P) -> WalletResult<Self>
    where
        P: WalletProvider + 'static,
    {
        Self::new(config, Some(Arc::new(provider)))
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().expect("mutex poisoned")
    }

    fn injected(&self) -> WalletResult<Arc<dyn WalletProvider>> {
        self.injected
            .as_ref()
            .map(Arc::clone)
            .ok_or(WalletError::ProviderUnavailable)
    }

    // === Lifecycle ===

    /// Subscribes to provider notifications and restores a previously
    /// authorized session without prompting.
    ///
    /// Call once. A second call replaces the notification channel.
    pub fn init(&self) -> WalletResult<()> {
        let injected = self.injected().inspect_err(|e| error!(error = %e, "init failed"))?;
        info!("initializing wallet session");

        self.lock_session().begin_init();
        let result = self.init_inner(&injected);
        self.lock_session().finish_init(result.is_ok());

        match result {
            Ok(Some((account, chain_id))) => {
                info!(account = %account, chain = %chain_id, "restored authorized session");
                self.listeners.publish(&WalletEvent::Connect {
                    account,
                    chain_id: Some(chain_id),
                });
                self.reset_auto_switch();
                self.auto_correct(chain_id);
                Ok(())
            }
            Ok(None) => {
                info!("initialization complete");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "init failed");
                Err(e)
            }
        }
    }

    fn init_inner(
        &self,
        injected: &Arc<dyn WalletProvider>,
    ) -> WalletResult<Option<(String, ChainId)>> {
        *self.provider.lock().expect("mutex poisoned") =
            Some(ProviderHandle::new(Arc::clone(injected)));

        let (sink, inbox) = mpsc::channel();
        for kind in ProviderEventKind::ALL {
            injected.subscribe(kind, sink.clone())?;
            debug!(kind = kind.as_str(), "subscribed to provider notifications");
        }
        *self.inbox.lock().expect("mutex poisoned") = Some(inbox);

        let accounts = injected.accounts()?;
        let Some(account) = accounts.into_iter().next() else {
            return Ok(None);
        };
        let chain_id = injected.chain_id()?;

        self.lock_session().establish(account.clone(), Some(chain_id));
        self.rebuild_handles();
        Ok(Some((account, chain_id)))
    }

    /// Requests account access and puts the session on the target network.
    ///
    /// Fails fast with [`WalletError::AlreadyConnecting`] while another
    /// `connect` is in flight.
    pub fn connect(&self) -> WalletResult<ConnectInfo> {
        let injected = self.injected()?;
        let _guard = ConnectingGuard::acquire(&self.connecting)?;

        self.ensure_provider_handle(&injected);
        self.connect_inner(injected.as_ref())
            .inspect_err(|e| error!(error = %e, "connection failed"))
    }

    fn connect_inner(&self, provider: &dyn WalletProvider) -> WalletResult<ConnectInfo> {
        info!("requesting accounts");
        let accounts = provider.request_accounts()?;
        let account = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;

        let mut chain_id = provider.chain_id()?;
        debug!(chain = %chain_id, "provider chain");
        if chain_id != self.enforcer.target_chain() {
            self.enforcer.enforce(provider, Some(chain_id))?;
            chain_id = self.enforcer.target_chain();
        }

        self.reset_auto_switch();
        self.lock_session().establish(account.clone(), Some(chain_id));
        info!(account = %account, chain = %chain_id, "wallet connected");

        self.listeners.publish(&WalletEvent::Connect {
            account: account.clone(),
            chain_id: Some(chain_id),
        });
        self.rebuild_handles();

        Ok(ConnectInfo { account, chain_id })
    }

    /// Ends the session locally. Provider-side authorization is untouched.
    pub fn disconnect(&self) {
        self.lock_session().reset();
        self.rebuild_handles();
        info!("wallet disconnected");
        self.listeners
            .publish(&WalletEvent::Disconnect { reason: None });
    }

    /// Asks the provider, without prompting, whether an account is still
    /// authorized.
    pub fn check_connection(&self) -> bool {
        let Ok(provider) = self.injected() else {
            return false;
        };
        match provider.accounts() {
            Ok(accounts) => !accounts.is_empty(),
            Err(e) => {
                warn!(error = %e, "connection check failed");
                false
            }
        }
    }

    // === Provider notifications ===

    /// Applies every queued provider notification, in arrival order.
    ///
    /// Returns the number handled. A call made while another drain is
    /// running (from a listener, or another thread) returns 0. Each drain
    /// that handles at least one event starts a fresh auto-switch budget.
    pub fn process_events(&self) -> usize {
        let Ok(inbox) = self.inbox.try_lock() else {
            debug!("event drain already running");
            return 0;
        };
        let Some(inbox) = inbox.as_ref() else {
            return 0;
        };
        let Ok(first) = inbox.try_recv() else {
            return 0;
        };

        self.auto_switch_attempts.store(0, Ordering::Release);
        self.handle_event(first);
        let mut handled = 1;
        while let Ok(event) = inbox.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    // Only reachable through `process_events`, which holds the drain lock.
    fn handle_event(&self, event: ProviderEvent) {
        debug!(kind = event.kind().as_str(), "provider event");
        match event {
            ProviderEvent::AccountsChanged(accounts) => self.on_accounts_changed(&accounts),
            ProviderEvent::ChainChanged(chain_id) => self.on_chain_changed(chain_id),
            ProviderEvent::Connect { chain_id } => self.on_connect(chain_id),
            ProviderEvent::Disconnect { error } => self.on_disconnect(error),
        }
    }

    fn on_accounts_changed(&self, accounts: &[String]) {
        let event = {
            let mut session = self.lock_session();
            match accounts.first() {
                None => {
                    session.reset();
                    Some(WalletEvent::Disconnect { reason: None })
                }
                Some(first)
                    if !session.is_connected() || session.account() != Some(first.as_str()) =>
                {
                    session.set_account(first.clone());
                    Some(WalletEvent::AccountsChanged {
                        account: first.clone(),
                    })
                }
                Some(_) => None,
            }
        };

        if let Some(event) = event {
            info!(event = event.name(), "accounts changed");
            self.rebuild_handles();
            self.listeners.publish(&event);
        }
    }

    fn on_chain_changed(&self, chain_id: ChainId) {
        self.lock_session().set_chain(chain_id);
        info!(chain = %chain_id, "chain changed");
        self.rebuild_handles();
        self.listeners
            .publish(&WalletEvent::ChainChanged { chain_id });
        self.auto_correct(chain_id);
    }

    fn on_connect(&self, chain_id: ChainId) {
        debug!(chain = %chain_id, "provider connected");
    }

    /// The last account is kept, but handles are dropped until the session
    /// is connected again.
    fn on_disconnect(&self, error: Option<ProviderError>) {
        let was_connected = {
            let mut session = self.lock_session();
            let was = session.is_connected();
            session.mark_offline();
            was
        };
        self.rebuild_handles();

        warn!(error = ?error, "provider disconnected");
        if was_connected {
            self.listeners.publish(&WalletEvent::Disconnect {
                reason: error.map(|e| e.to_string()),
            });
        }
    }

    /// Pushes the provider back to the target network after an external
    /// change. Failures are logged; the session stays on the wrong network.
    fn auto_correct(&self, chain_id: ChainId) {
        if chain_id == self.enforcer.target_chain() {
            self.auto_switch_gave_up.store(false, Ordering::Release);
            return;
        }
        if !self.config.auto_enforce_network {
            return;
        }
        let Some(provider) = self.injected.as_ref() else {
            return;
        };
        if self.connecting.load(Ordering::Acquire) {
            debug!("connect in flight, leaving network enforcement to it");
            return;
        }

        let max = self.config.max_auto_switch_attempts;
        let admitted = self
            .auto_switch_attempts
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < max).then_some(n + 1)
            });
        if admitted.is_err() {
            warn!(chain = %chain_id, max, "automatic network switch budget exhausted");
            self.auto_switch_gave_up.store(true, Ordering::Release);
            return;
        }

        match self.enforcer.enforce(provider.as_ref(), Some(chain_id)) {
            Ok(outcome) => debug!(?outcome, "network corrected"),
            Err(e) => {
                warn!(error = %e, "automatic network switch failed");
                self.auto_switch_gave_up.store(true, Ordering::Release);
            }
        }
    }

    fn reset_auto_switch(&self) {
        self.auto_switch_attempts.store(0, Ordering::Release);
        self.auto_switch_gave_up.store(false, Ordering::Release);
    }

    // === Handles ===

    fn ensure_provider_handle(&self, injected: &Arc<dyn WalletProvider>) {
        let mut provider = self.provider.lock().expect("mutex poisoned");
        if provider.is_none() {
            *provider = Some(ProviderHandle::new(Arc::clone(injected)));
        }
    }

    fn rebuild_handles(&self) {
        let (account, chain_id) = {
            let session = self.lock_session();
            let account = session
                .is_connected()
                .then(|| session.account().map(str::to_string))
                .flatten();
            (account, session.chain_id())
        };
        let provider = self.provider.lock().expect("mutex poisoned").clone();

        let mut handles = self.handles.lock().expect("mutex poisoned");
        match (account, provider) {
            (Some(account), Some(provider)) => {
                let signer = SignerHandle::new(provider, account, chain_id);
                handles.contract = Some(ContractHandle::new(self.contract.clone(), signer.clone()));
                handles.signer = Some(signer);
            }
            _ => *handles = Handles::default(),
        }
    }

    // === Accessors ===

    pub fn state(&self) -> SessionState {
        self.lock_session().state()
    }

    pub fn account(&self) -> Option<String> {
        self.lock_session().account().map(str::to_string)
    }

    pub fn chain_id(&self) -> Option<ChainId> {
        self.lock_session().chain_id()
    }

    pub fn is_connected(&self) -> bool {
        self.lock_session().is_connected()
    }

    pub fn is_initialized(&self) -> bool {
        self.lock_session().is_initialized()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting.load(Ordering::Acquire)
    }

    /// Copy of the session data.
    pub fn session(&self) -> Session {
        self.lock_session().clone()
    }

    pub fn provider(&self) -> Option<ProviderHandle> {
        self.provider.lock().expect("mutex poisoned").clone()
    }

    pub fn signer(&self) -> Option<SignerHandle> {
        self.handles.lock().expect("mutex poisoned").signer.clone()
    }

    pub fn contract(&self) -> Option<ContractHandle> {
        self.handles.lock().expect("mutex poisoned").contract.clone()
    }

    pub fn contract_config(&self) -> ContractConfig {
        self.contract.clone()
    }

    pub fn target_network(&self) -> &NetworkIdentity {
        self.enforcer.target()
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    pub fn health(&self) -> SessionHealth {
        let session = self.lock_session();
        SessionHealth {
            state: session.state(),
            on_target_network: session.chain_id() == Some(self.enforcer.target_chain()),
            auto_switch_exhausted: self.auto_switch_gave_up.load(Ordering::Acquire),
        }
    }

    // === Listeners ===

    /// Adds a listener. Returns false if it was already subscribed.
    pub fn subscribe(&self, listener: Arc<dyn WalletListener>) -> bool {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, listener: &Arc<dyn WalletListener>) -> bool {
        self.listeners.unsubscribe(listener)
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    // === Read-only data ===

    /// Selects a working read-only endpoint of the target network.
    pub fn read_only_provider<C: RpcConnector>(
        &self,
        connector: C,
    ) -> WalletResult<ReadProvider<C::Transport>> {
        EndpointSelector::new(connector).select(self.enforcer.target())
    }

    /// Same as [`read_only_provider`](Self::read_only_provider) over HTTP,
    /// using the configured probe timeout.
    #[cfg(feature = "http")]
    pub fn http_read_only_provider(
        &self,
    ) -> WalletResult<ReadProvider<crate::rpc::HttpRpcTransport>> {
        let connector = crate::rpc::HttpRpcConnector::new(self.config.probe_timeout)
            .map_err(|e| WalletError::Configuration(e.to_string()))?;
        self.read_only_provider(connector)
    }
}

// INLINE_TEST_REQUIRED: Tests the private connecting guard and switch budget
#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockProvider, ProviderCall};

    #[test]
    fn test_connecting_guard_releases_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = ConnectingGuard::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::Acquire));
            assert!(matches!(
                ConnectingGuard::acquire(&flag),
                Err(WalletError::AlreadyConnecting)
            ));
        }
        assert!(!flag.load(Ordering::Acquire));
    }

    #[test]
    fn test_auto_correct_respects_budget() {
        let provider = MockProvider::new();
        provider.fail_switch_with(ProviderError::Rpc {
            code: -32603,
            message: "internal".into(),
        });
        let config = WalletConfig::default().with_max_auto_switch_attempts(2);
        let manager = WalletManager::with_provider(config, provider.clone()).unwrap();

        for _ in 0..5 {
            manager.auto_correct(ChainId::new(1));
        }

        let switches = provider.count_calls(|c| matches!(c, ProviderCall::SwitchChain(_)));
        assert_eq!(switches, 2);
        assert_eq!(manager.auto_switch_attempts.load(Ordering::Acquire), 2);
        assert!(manager.auto_switch_gave_up.load(Ordering::Acquire));

        manager.auto_correct(ChainId::AMOY);
        assert!(!manager.auto_switch_gave_up.load(Ordering::Acquire));
    }

    #[test]
    fn test_successful_corrections_do_not_mark_gave_up() {
        let provider = MockProvider::new();
        provider.add_known_chain(ChainId::AMOY);
        let config = WalletConfig::default().with_max_auto_switch_attempts(2);
        let manager = WalletManager::with_provider(config, provider.clone()).unwrap();

        manager.auto_correct(ChainId::new(1));
        manager.auto_correct(ChainId::new(1));

        assert_eq!(manager.auto_switch_attempts.load(Ordering::Acquire), 2);
        assert!(!manager.health().auto_switch_exhausted);
    }

    #[test]
    fn test_auto_correct_skipped_while_connecting() {
        let provider = MockProvider::new();
        let manager = WalletManager::with_provider(WalletConfig::default(), provider.clone()).unwrap();

        let _guard = ConnectingGuard::acquire(&manager.connecting).unwrap();
        manager.auto_correct(ChainId::new(1));

        assert_eq!(
            provider.count_calls(|c| matches!(c, ProviderCall::SwitchChain(_))),
            0
        );
    }
}
