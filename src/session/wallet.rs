use chrono::{DateTime, Utc};

/// Simulated wallet connection. No chain access; just an address and a
/// timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    address: Option<String>,
    connected_at: Option<DateTime<Utc>>,
}

impl WalletState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect with the given address, replacing any existing connection
    pub fn connect(&mut self, address: String) {
        tracing::debug!(%address, "wallet connected");
        self.address = Some(address);
        self.connected_at = Some(Utc::now());
    }

    /// Disconnect. Returns true if a wallet was connected.
    pub fn disconnect(&mut self) -> bool {
        let was_connected = self.address.take().is_some();
        self.connected_at = None;
        if was_connected {
            tracing::debug!("wallet disconnected");
        }
        was_connected
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn connected_at(&self) -> Option<DateTime<Utc>> {
        self.connected_at
    }

    /// Abbreviated address for display, e.g. "0x1234...abcd"
    pub fn short_address(&self) -> Option<String> {
        self.address.as_deref().map(shorten_address)
    }
}

fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        address.to_string()
    } else {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

    #[test]
    fn test_new_wallet_disconnected() {
        let wallet = WalletState::new();
        assert!(!wallet.is_connected());
        assert!(wallet.address().is_none());
        assert!(wallet.connected_at().is_none());
        assert!(wallet.short_address().is_none());
    }

    #[test]
    fn test_connect_and_disconnect() {
        let mut wallet = WalletState::new();
        wallet.connect(ADDRESS.to_string());
        assert!(wallet.is_connected());
        assert_eq!(wallet.address(), Some(ADDRESS));
        assert!(wallet.connected_at().is_some());

        assert!(wallet.disconnect());
        assert!(!wallet.is_connected());
        assert!(wallet.connected_at().is_none());
    }

    #[test]
    fn test_disconnect_when_not_connected() {
        let mut wallet = WalletState::new();
        assert!(!wallet.disconnect());
    }

    #[test]
    fn test_reconnect_replaces_address() {
        let mut wallet = WalletState::new();
        wallet.connect(ADDRESS.to_string());
        wallet.connect("0xffffffffffffffffffffffffffffffffffffffff".to_string());
        assert_eq!(
            wallet.address(),
            Some("0xffffffffffffffffffffffffffffffffffffffff")
        );
    }

    #[test]
    fn test_short_address() {
        let mut wallet = WalletState::new();
        wallet.connect(ADDRESS.to_string());
        assert_eq!(wallet.short_address().unwrap(), "0x1234...5678");
    }

    #[test]
    fn test_short_address_keeps_short_values() {
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }
}
