use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MatchSide {
    Home,
    Away,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum MatchEventType {
    Goal,
    OwnGoal,
    YellowCard,
    RedCard,
    Injury,
    Substitution,
    Penalty,
    PenaltyMiss,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub event_type: MatchEventType,
    pub player_name: String,
    pub side: MatchSide,
    pub assist_name: Option<String>,
}

impl MatchEvent {
    pub fn new(minute: u8, event_type: MatchEventType, player_name: String, side: MatchSide) -> Self {
        MatchEvent {
            minute,
            event_type,
            player_name,
            side,
            assist_name: None,
        }
    }

    pub fn goal(minute: u8, scorer: String, side: MatchSide, assist_name: Option<String>) -> Self {
        MatchEvent {
            minute,
            event_type: MatchEventType::Goal,
            player_name: scorer,
            side,
            assist_name,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.event_type, MatchEventType::Goal | MatchEventType::Penalty)
    }
}
