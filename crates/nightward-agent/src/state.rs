//! Per-kind state enums, §4.E.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerState {
    Idle,
    Moving,
    Attacking,
    Dead,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PursuerState {
    Idle,
    Chase,
    Attack,
    Dead,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FollowerState {
    Init,
    Idle,
    Follow,
    Attack,
    Avoid,
    Dead,
}

/// The kind-specific state enum, wrapped so `Agent` can hold one field
/// regardless of kind.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    Player(PlayerState),
    Pursuer(PursuerState),
    Follower(FollowerState),
}

impl AgentState {
    pub fn is_dead(&self) -> bool {
        matches!(
            self,
            AgentState::Player(PlayerState::Dead)
                | AgentState::Pursuer(PursuerState::Dead)
                | AgentState::Follower(FollowerState::Dead)
        )
    }

    pub fn as_player(&self) -> Option<PlayerState> {
        match self {
            AgentState::Player(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_pursuer(&self) -> Option<PursuerState> {
        match self {
            AgentState::Pursuer(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_follower(&self) -> Option<FollowerState> {
        match self {
            AgentState::Follower(s) => Some(*s),
            _ => None,
        }
    }
}
