//! Slot labels for committed events
//!
//! A label is the human-readable identity of an event inside the tree:
//! `P3_ID7` reads as "producer in slot 3, certificate 7". The rendered
//! grammar is hash-critical — leaves are Keccak-256 over the rendered label,
//! so any change here invalidates every previously distributed proof.

use crate::registry::{Party, RegistrySnapshot};
use serde::{Deserialize, Serialize};
use solcert_primitives::CertificateEvent;

/// The resolved label of a single committed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Registry slot of the acting account
    pub party: Party,

    /// Certificate the event concerns
    pub certificate_id: u64,
}

impl Label {
    /// Create a label from an already-resolved party
    pub fn new(party: Party, certificate_id: u64) -> Self {
        Self {
            party,
            certificate_id,
        }
    }

    /// Resolve the label for an event against a registry snapshot
    pub fn for_event(registry: &RegistrySnapshot, event: &CertificateEvent) -> Self {
        Self {
            party: registry.resolve(event.actor()),
            certificate_id: event.certificate_id(),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.party {
            Party::Producer(index) => write!(f, "P{}_ID{}", index, self.certificate_id),
            Party::Company(index) => write!(f, "C{}_ID{}", index, self.certificate_id),
            Party::Unknown => write!(f, "ID{}", self.certificate_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solcert_primitives::{Address, Hash256, IssuedEvent, PurchasedEvent};

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_producer_label_rendering() {
        assert_eq!(Label::new(Party::Producer(1), 5).to_string(), "P1_ID5");
    }

    #[test]
    fn test_company_label_rendering() {
        assert_eq!(Label::new(Party::Company(2), 7).to_string(), "C2_ID7");
    }

    #[test]
    fn test_unknown_label_rendering() {
        assert_eq!(Label::new(Party::Unknown, 9).to_string(), "ID9");
    }

    #[test]
    fn test_label_for_issued_event() {
        let registry = RegistrySnapshot::new(vec![addr(0xaa), addr(0xbb)], vec![]);
        let event = CertificateEvent::Issued(IssuedEvent {
            certificate_id: 5,
            issuer: addr(0xaa),
            tx_hash: Hash256::keccak256(b"tx"),
            block_number: 1,
            log_index: 0,
        });
        assert_eq!(Label::for_event(&registry, &event).to_string(), "P1_ID5");
    }

    #[test]
    fn test_label_for_purchase_event() {
        let registry = RegistrySnapshot::new(vec![addr(0xaa)], vec![addr(0xcc), addr(0xdd)]);
        let event = CertificateEvent::Purchased(PurchasedEvent {
            certificate_id: 7,
            buyer: addr(0xdd),
            tx_hash: Hash256::keccak256(b"tx"),
            block_number: 1,
            log_index: 0,
        });
        assert_eq!(Label::for_event(&registry, &event).to_string(), "C2_ID7");
    }

    #[test]
    fn test_label_for_unregistered_actor() {
        let registry = RegistrySnapshot::new(vec![addr(0xaa)], vec![addr(0xcc)]);
        let event = CertificateEvent::Purchased(PurchasedEvent {
            certificate_id: 7,
            buyer: addr(0x99),
            tx_hash: Hash256::keccak256(b"tx"),
            block_number: 1,
            log_index: 0,
        });
        assert_eq!(Label::for_event(&registry, &event).to_string(), "ID7");
    }
}
