//! Session selection state and stale-read protection
//!
//! External reads race freely: the user can switch token or chain while
//! a balance or price request is in flight, and completions arrive in no
//! particular order. Every read is therefore keyed to the selection
//! epoch it was issued under; a completion whose key no longer matches
//! is discarded rather than applied to the wrong token's view.

use tracing::debug;

use crate::config::{reselect_token, ChainConfig, Token};

/// Key a read carries back to prove which selection it was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadKey {
    epoch: u64,
}

/// Per-session selection: active chain and token
#[derive(Debug, Clone)]
pub struct Session {
    chain_id: u64,
    selected: Option<Token>,
    epoch: u64,
}

impl Session {
    pub fn new(config: &ChainConfig) -> Self {
        Session {
            chain_id: config.chain_id,
            selected: config.tokens.first().cloned(),
            epoch: 0,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn selected_token(&self) -> Option<&Token> {
        self.selected.as_ref()
    }

    /// Change the active token; outstanding reads become stale
    pub fn select_token(&mut self, token: Token) {
        if self.selected.as_ref() == Some(&token) {
            return;
        }
        self.selected = Some(token);
        self.epoch += 1;
    }

    /// Move the session to another chain, re-resolving the selection:
    /// same address first, then same symbol, then the chain's first
    /// token. Outstanding reads become stale.
    pub fn switch_chain(&mut self, config: &ChainConfig) {
        if self.chain_id == config.chain_id {
            return;
        }
        self.chain_id = config.chain_id;
        self.selected = match &self.selected {
            Some(previous) => reselect_token(previous, &config.tokens),
            None => config.tokens.first().cloned(),
        };
        self.epoch += 1;
    }

    /// Key to attach to a read issued right now
    pub fn read_key(&self) -> ReadKey {
        ReadKey { epoch: self.epoch }
    }

    /// Accept a completed read only if its key is still current
    pub fn accept<T>(&self, key: ReadKey, value: T) -> Option<T> {
        if key.epoch == self.epoch {
            Some(value)
        } else {
            debug!(
                issued = key.epoch,
                current = self.epoch,
                "discarding result of superseded read"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain_config;

    const HATSIN: u64 = 2_763_818_285_453_000;

    #[test]
    fn test_initial_selection() {
        let session = Session::new(&chain_config(HATSIN).unwrap());
        assert_eq!(session.selected_token().unwrap().symbol, "WETH");
    }

    #[test]
    fn test_stale_read_discarded() {
        let hatsin = chain_config(HATSIN).unwrap();
        let mut session = Session::new(&hatsin);

        let key = session.read_key();
        session.select_token(hatsin.tokens[1].clone());

        // the price that was in flight for WETH must not land on USDC
        assert_eq!(session.accept(key, 2000.0), None);
        // a read issued after the switch is fine
        assert_eq!(session.accept(session.read_key(), 1.0), Some(1.0));
    }

    #[test]
    fn test_reselecting_same_token_keeps_reads_valid() {
        let hatsin = chain_config(HATSIN).unwrap();
        let mut session = Session::new(&hatsin);

        let key = session.read_key();
        session.select_token(hatsin.tokens[0].clone());
        assert_eq!(session.accept(key, 2000.0), Some(2000.0));
    }

    #[test]
    fn test_chain_switch_reselects_by_symbol() {
        let hatsin = chain_config(HATSIN).unwrap();
        let rootstock_testnet = chain_config(31).unwrap();
        let mut session = Session::new(&hatsin);

        let key = session.read_key();
        session.switch_chain(&rootstock_testnet);

        // WETH exists on the new chain under a different address
        let selected = session.selected_token().unwrap();
        assert_eq!(selected.symbol, "WETH");
        assert_eq!(selected.address, rootstock_testnet.tokens[2].address);
        // and the in-flight read is gone
        assert_eq!(session.accept(key, 2000.0), None);
    }
}
