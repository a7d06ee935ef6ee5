use crate::monster::Monster;

/// What the player does with a combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Flee,
}

/// Encounter progress. `InProgress` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStatus {
    InProgress,
    Victory,
    Fled,
    Defeat,
}

impl CombatStatus {
    pub fn is_terminal(self) -> bool {
        self != CombatStatus::InProgress
    }
}

/// One monster confrontation, from generation to a terminal outcome.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub monster: Monster,
    /// Signed so a killing blow can overshoot below zero.
    pub monster_hp: i32,
    status: CombatStatus,
}

impl Encounter {
    pub fn new(monster: Monster) -> Self {
        let monster_hp = monster.health as i32;
        Self {
            monster,
            monster_hp,
            status: CombatStatus::InProgress,
        }
    }

    pub fn status(&self) -> CombatStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub(crate) fn finish(&mut self, status: CombatStatus) {
        self.status = status;
    }
}

/// Everything that happened during a turn, in order, for the caller to
/// narrate. This is the core's only reporting channel.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerAttack { damage: u32 },
    WeaponBroke { name: String },
    /// Monster retaliation, after armor mitigation.
    MonsterAttack { damage: u32 },
    ArmorBroke { name: String },
    MonsterDefeated { reward: f64 },
    PlayerDefeated,
    PlayerFled,
    ConsumableUsed { name: String, reward: f64 },
    DoctorRevival { fee: f64 },
}
