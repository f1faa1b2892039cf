use anchor_lang::prelude::*;

use crate::constants::MAX_PAGE_SIZE;
use crate::error::{LaunchpadError, LaunchpadResult};

/// Ordered, deduplicated list of every wallet that deposited into a sale.
/// The account grows by one key per new depositor.
#[account]
pub struct Participants {
    pub sale: Pubkey,
    pub entries: Vec<Pubkey>,
}

impl Participants {
    /// Account size (discriminator included) for `len` entries.
    pub const fn space(len: usize) -> usize {
        8 +                 // discriminator
        32 +                // sale
        4 + 32 * len        // entries
    }

    /// Account size once `wallet` is listed.
    pub fn space_with(&self, wallet: &Pubkey) -> usize {
        let len = self.entries.len() + usize::from(!self.entries.contains(wallet));
        Self::space(len)
    }

    pub fn count(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Appends `wallet` unless already listed. Returns true when appended.
    pub fn push_unique(&mut self, wallet: Pubkey) -> bool {
        if self.entries.contains(&wallet) {
            return false;
        }
        self.entries.push(wallet);
        true
    }

    /// Entries `[page * limit, page * limit + limit)`, padded with the null key.
    pub fn page(&self, page: u32, limit: u32) -> LaunchpadResult<Vec<Pubkey>> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(LaunchpadError::InvalidPageSize);
        }
        let start = (page as usize).saturating_mul(limit as usize);
        let mut out: Vec<Pubkey> = self
            .entries
            .iter()
            .skip(start)
            .take(limit as usize)
            .copied()
            .collect();
        out.resize(limit as usize, Pubkey::default());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn wide_key(i: u64) -> Pubkey {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&(i + 1).to_le_bytes());
        Pubkey::new_from_array(bytes)
    }

    fn list() -> Participants {
        Participants {
            sale: key(200),
            entries: Vec::new(),
        }
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let mut p = list();
        assert!(p.push_unique(key(3)));
        assert!(p.push_unique(key(1)));
        assert!(!p.push_unique(key(3)));
        assert!(p.push_unique(key(2)));
        assert_eq!(p.entries, vec![key(3), key(1), key(2)]);
        assert_eq!(p.count(), 3);
    }

    #[test]
    fn pages_are_null_padded() {
        let mut p = list();
        for n in 1..=5 {
            p.push_unique(key(n));
        }
        assert_eq!(p.page(0, 2).unwrap(), vec![key(1), key(2)]);
        assert_eq!(p.page(2, 2).unwrap(), vec![key(5), Pubkey::default()]);
        assert_eq!(p.page(7, 3).unwrap(), vec![Pubkey::default(); 3]);
        assert!(matches!(p.page(0, 0), Err(LaunchpadError::InvalidPageSize)));
        assert!(matches!(
            p.page(0, MAX_PAGE_SIZE + 1),
            Err(LaunchpadError::InvalidPageSize)
        ));
    }

    #[test]
    fn list_grows_past_three_hundred() {
        let mut p = list();
        for i in 0..301 {
            assert!(p.push_unique(wide_key(i)));
        }
        assert_eq!(p.count(), 301);
        assert_eq!(p.page(6, 50).unwrap()[0], wide_key(300));
        assert!(!p.push_unique(wide_key(0)));
    }

    #[test]
    fn space_tracks_new_entries_only() {
        let mut p = list();
        assert_eq!(Participants::space(0), 8 + 32 + 4);
        assert_eq!(p.space_with(&key(1)), Participants::space(1));
        p.push_unique(key(1));
        assert_eq!(p.space_with(&key(1)), Participants::space(1));
        assert_eq!(p.space_with(&key(2)), Participants::space(2));

        let mut data = Vec::new();
        p.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Participants::space(1));
    }
}
