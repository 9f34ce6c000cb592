//! Capability flags for application identities.

use serde::{Deserialize, Serialize};

/// The capability set granted to an application token.
///
/// Stored as a 16-bit mask. Bit positions match what the API dashboard
/// issues and must never be reordered; persisted masks and tokens minted
/// against them depend on the numbering.
///
/// An identity's intents are fixed at construction. Operations check them
/// locally and refuse to dispatch a request the token could not satisfy,
/// so a missing capability surfaces as a named error instead of a 403.
///
/// # Examples
///
/// ```
/// use plural_core::Intents;
///
/// let intents = Intents::MEMBERS_READ | Intents::MEMBERS_WRITE;
/// assert!(intents.contains(Intents::MEMBERS_READ));
/// assert!(!intents.contains(Intents::GROUPS_WRITE));
/// assert_eq!(
///     intents.first_missing(Intents::MEMBERS_WRITE | Intents::GROUPS_WRITE),
///     Some(Intents::GROUPS_WRITE),
/// );
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Intents(u16);

impl Intents {
    /// No capabilities.
    pub const NONE: Intents = Intents(0);
    /// Read members.
    pub const MEMBERS_READ: Intents = Intents(1 << 0);
    /// Edit members.
    pub const MEMBERS_WRITE: Intents = Intents(1 << 1);
    /// Receive member events.
    pub const MEMBERS_EVENTS: Intents = Intents(1 << 2);
    /// Read groups.
    pub const GROUPS_READ: Intents = Intents(1 << 3);
    /// Edit groups.
    pub const GROUPS_WRITE: Intents = Intents(1 << 4);
    /// Receive group events.
    pub const GROUPS_EVENTS: Intents = Intents(1 << 5);
    /// Read the autoproxy latch.
    pub const LATCH_READ: Intents = Intents(1 << 6);
    /// Edit the autoproxy latch.
    pub const LATCH_WRITE: Intents = Intents(1 << 7);
    /// Receive latch events.
    pub const LATCH_EVENTS: Intents = Intents(1 << 8);
    /// Send proxied messages.
    pub const MESSAGES_WRITE: Intents = Intents(1 << 9);
    /// Receive message events.
    pub const MESSAGES_EVENTS: Intents = Intents(1 << 10);
    /// Read userproxy tokens and public keys.
    pub const MEMBERS_USERPROXY_TOKEN_READ: Intents = Intents(1 << 11);
    /// Edit userproxy tokens and public keys.
    pub const MEMBERS_USERPROXY_TOKEN_WRITE: Intents = Intents(1 << 12);
    /// Share groups with other users.
    pub const GROUPS_SHARE: Intents = Intents(1 << 13);
    /// Every defined capability.
    pub const ALL: Intents = Intents((1 << 14) - 1);

    /// The raw mask, for persistence.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Rebuild a set from a persisted mask. Undefined bits are dropped.
    pub const fn from_bits(bits: u16) -> Intents {
        Intents(bits & Intents::ALL.0)
    }

    /// True when no capability is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every capability in `other` is also in `self`.
    pub const fn contains(self, other: Intents) -> bool {
        self.0 & other.0 == other.0
    }

    /// The lowest-numbered capability in `required` that `self` lacks.
    ///
    /// Drives intent errors: the first missing flag is the one named.
    pub fn first_missing(self, required: Intents) -> Option<Intents> {
        let missing = required.0 & !self.0 & Intents::ALL.0;
        if missing == 0 {
            None
        } else {
            Some(Intents(1u16 << missing.trailing_zeros()))
        }
    }

    /// Dotted name of a single capability, as used in error messages and
    /// dashboard scopes.
    pub fn name(self) -> &'static str {
        match self {
            Intents::MEMBERS_READ => "members.read",
            Intents::MEMBERS_WRITE => "members.write",
            Intents::MEMBERS_EVENTS => "members.events",
            Intents::GROUPS_READ => "groups.read",
            Intents::GROUPS_WRITE => "groups.write",
            Intents::GROUPS_EVENTS => "groups.events",
            Intents::LATCH_READ => "latch.read",
            Intents::LATCH_WRITE => "latch.write",
            Intents::LATCH_EVENTS => "latch.events",
            Intents::MESSAGES_WRITE => "messages.write",
            Intents::MESSAGES_EVENTS => "messages.events",
            Intents::MEMBERS_USERPROXY_TOKEN_READ => "members.userproxy_token.read",
            Intents::MEMBERS_USERPROXY_TOKEN_WRITE => "members.userproxy_token.write",
            Intents::GROUPS_SHARE => "groups.share",
            _ => "unknown",
        }
    }

    /// Iterate over the single-capability flags set in this mask.
    pub fn iter(self) -> impl Iterator<Item = Intents> {
        (0..14u16)
            .map(|shift| Intents(1 << shift))
            .filter(move |flag| self.contains(*flag))
    }
}

impl std::ops::BitOr for Intents {
    type Output = Intents;

    fn bitor(self, rhs: Intents) -> Intents {
        Intents(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Intents {
    fn bitor_assign(&mut self, rhs: Intents) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for Intents {
    type Output = Intents;

    fn bitand(self, rhs: Intents) -> Intents {
        Intents(self.0 & rhs.0)
    }
}

impl std::ops::BitAndAssign for Intents {
    fn bitand_assign(&mut self, rhs: Intents) {
        self.0 &= rhs.0;
    }
}

impl std::fmt::Display for Intents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.iter().map(Intents::name).collect();
        write!(f, "{}", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_positions_are_stable() {
        assert_eq!(Intents::MEMBERS_READ.bits(), 1);
        assert_eq!(Intents::MEMBERS_WRITE.bits(), 1 << 1);
        assert_eq!(Intents::MEMBERS_EVENTS.bits(), 1 << 2);
        assert_eq!(Intents::GROUPS_READ.bits(), 1 << 3);
        assert_eq!(Intents::GROUPS_WRITE.bits(), 1 << 4);
        assert_eq!(Intents::GROUPS_EVENTS.bits(), 1 << 5);
        assert_eq!(Intents::LATCH_READ.bits(), 1 << 6);
        assert_eq!(Intents::LATCH_WRITE.bits(), 1 << 7);
        assert_eq!(Intents::LATCH_EVENTS.bits(), 1 << 8);
        assert_eq!(Intents::MESSAGES_WRITE.bits(), 1 << 9);
        assert_eq!(Intents::MESSAGES_EVENTS.bits(), 1 << 10);
        assert_eq!(Intents::MEMBERS_USERPROXY_TOKEN_READ.bits(), 1 << 11);
        assert_eq!(Intents::MEMBERS_USERPROXY_TOKEN_WRITE.bits(), 1 << 12);
        assert_eq!(Intents::GROUPS_SHARE.bits(), 1 << 13);
    }

    #[test]
    fn union_and_intersection_behave_as_bitsets() {
        let read = Intents::MEMBERS_READ | Intents::GROUPS_READ;
        let write = Intents::MEMBERS_WRITE | Intents::GROUPS_WRITE;
        let both = read | write;
        assert!(both.contains(read));
        assert!(both.contains(write));
        assert_eq!(both & read, read);
        assert_eq!(read & write, Intents::NONE);
    }

    #[test]
    fn contains_checks_the_whole_subset() {
        let held = Intents::MEMBERS_READ | Intents::MEMBERS_WRITE;
        assert!(held.contains(Intents::MEMBERS_READ));
        assert!(held.contains(held));
        assert!(!held.contains(Intents::MEMBERS_READ | Intents::GROUPS_READ));
        assert!(held.contains(Intents::NONE));
    }

    #[test]
    fn first_missing_names_the_lowest_bit() {
        let held = Intents::MEMBERS_WRITE;
        let required =
            Intents::MEMBERS_READ | Intents::MEMBERS_WRITE | Intents::GROUPS_SHARE;
        assert_eq!(held.first_missing(required), Some(Intents::MEMBERS_READ));
        assert_eq!(Intents::ALL.first_missing(required), None);
    }

    #[test]
    fn dotted_names_match_dashboard_scopes() {
        assert_eq!(Intents::MEMBERS_WRITE.name(), "members.write");
        assert_eq!(
            Intents::MEMBERS_USERPROXY_TOKEN_WRITE.name(),
            "members.userproxy_token.write"
        );
        assert_eq!(Intents::GROUPS_SHARE.name(), "groups.share");
        assert_eq!(Intents::NONE.name(), "unknown");
    }

    #[test]
    fn from_bits_drops_undefined_bits() {
        let restored = Intents::from_bits(0b1100_0000_0000_0011);
        assert!(restored.contains(Intents::MEMBERS_READ | Intents::MEMBERS_WRITE));
        assert_eq!(restored.bits() & !Intents::ALL.bits(), 0);
    }

    #[test]
    fn display_joins_dotted_names() {
        let intents = Intents::MEMBERS_READ | Intents::MESSAGES_WRITE;
        assert_eq!(format!("{}", intents), "members.read | messages.write");
        assert_eq!(format!("{}", Intents::NONE), "none");
    }

    #[test]
    fn serde_round_trips_the_mask() {
        let intents = Intents::MEMBERS_READ | Intents::GROUPS_SHARE;
        let json = serde_json::to_string(&intents).unwrap();
        assert_eq!(json, format!("{}", intents.bits()));
        let back: Intents = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intents);
    }
}
