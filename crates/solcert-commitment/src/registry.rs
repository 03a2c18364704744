//! Registry snapshots and label resolution
//!
//! The ledger contract keeps two ordered allow-lists: approved producers and
//! approved companies. A `RegistrySnapshot` is a point-in-time read of both.
//! Resolution maps an address to its 1-based registration slot; producers
//! win when an address would match both lists, and double registration is a
//! contract invariant that is assumed rather than re-verified here.

use serde::{Deserialize, Serialize};
use solcert_primitives::Address;

/// The role an address resolves to within a registry snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "role", content = "index")]
pub enum Party {
    /// Registered producer, 1-based slot in the producer list
    Producer(u32),
    /// Registered company, 1-based slot in the company list
    Company(u32),
    /// Present in neither registry
    Unknown,
}

/// A point-in-time read of both on-chain allow-lists
///
/// Index equals registration order; addresses are already canonical 20-byte
/// values, so lookup needs no case normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    /// Approved producer addresses, in registration order
    pub producers: Vec<Address>,

    /// Approved company addresses, in registration order
    pub companies: Vec<Address>,
}

impl RegistrySnapshot {
    /// Create a snapshot from both registry reads
    pub fn new(producers: Vec<Address>, companies: Vec<Address>) -> Self {
        Self {
            producers,
            companies,
        }
    }

    /// Resolve an address to its registry slot
    pub fn resolve(&self, address: &Address) -> Party {
        if let Some(pos) = self.producers.iter().position(|a| a == address) {
            return Party::Producer(pos as u32 + 1);
        }
        if let Some(pos) = self.companies.iter().position(|a| a == address) {
            return Party::Company(pos as u32 + 1);
        }
        Party::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_resolve_producer_is_one_based() {
        let snapshot = RegistrySnapshot::new(vec![addr(0xaa), addr(0xbb)], vec![]);
        assert_eq!(snapshot.resolve(&addr(0xaa)), Party::Producer(1));
        assert_eq!(snapshot.resolve(&addr(0xbb)), Party::Producer(2));
    }

    #[test]
    fn test_resolve_company_after_producers() {
        let snapshot = RegistrySnapshot::new(vec![addr(0xaa)], vec![addr(0xcc), addr(0xdd)]);
        assert_eq!(snapshot.resolve(&addr(0xdd)), Party::Company(2));
    }

    #[test]
    fn test_resolve_unknown() {
        let snapshot = RegistrySnapshot::new(vec![addr(0xaa)], vec![addr(0xcc)]);
        assert_eq!(snapshot.resolve(&addr(0x11)), Party::Unknown);
    }

    #[test]
    fn test_resolve_is_case_insensitive_via_parsing() {
        // mixed-case and lowercase spellings of one address parse to the
        // same bytes, so registry lookup cannot be confused by casing
        let checksummed = Address::from_hex("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
        let lowercase = Address::from_hex("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        let snapshot = RegistrySnapshot::new(vec![checksummed], vec![]);
        assert_eq!(snapshot.resolve(&lowercase), Party::Producer(1));
    }

    #[test]
    fn test_empty_snapshot_resolves_unknown() {
        let snapshot = RegistrySnapshot::default();
        assert_eq!(snapshot.resolve(&addr(0x01)), Party::Unknown);
    }
}
