#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PlayerStatistics {
    pub played: u16,
    pub goals: u16,
    pub assists: u16,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PlayerDiscipline {
    pub yellow_cards: u16,
    pub red_cards: u16,
}
