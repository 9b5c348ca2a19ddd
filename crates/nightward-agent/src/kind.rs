//! `AgentKind` — the tagged variant replacing dynamic `getObjectType` dispatch.

/// Pursuer subtypes, chosen at random when a spawn wave resolves.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PursuerSubtype {
    /// Slow, high-HP grinder.
    Shambler,
    /// Fast, low-HP chaser.
    Runner,
    /// Slow, hard-hitting heavyweight.
    Brute,
}

impl PursuerSubtype {
    pub const ALL: [PursuerSubtype; 3] = [PursuerSubtype::Shambler, PursuerSubtype::Runner, PursuerSubtype::Brute];
}

/// Follower roles, assigned at spawn (`World::spawn_follower`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FollowerRole {
    /// Higher HP, holds position more readily.
    Guard,
    /// Faster, drifts further during Avoid.
    Scout,
    /// Heals player/followers on Attack ticks instead of dealing damage.
    Medic,
}

/// The tagged kind of an agent. The subtype/role is part of the tag, per the
/// "dynamic typing" design note: no runtime method injection, no separate
/// `getObjectType` lookup.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Player,
    Pursuer(PursuerSubtype),
    Follower(FollowerRole),
}

impl AgentKind {
    pub fn is_player(&self) -> bool {
        matches!(self, AgentKind::Player)
    }

    pub fn is_pursuer(&self) -> bool {
        matches!(self, AgentKind::Pursuer(_))
    }

    pub fn is_follower(&self) -> bool {
        matches!(self, AgentKind::Follower(_))
    }
}
