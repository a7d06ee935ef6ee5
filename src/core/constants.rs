// New-game defaults
pub const STARTING_HP: i32 = 30;
pub const STARTING_MAX_HP: i32 = 30;
pub const STARTING_GOLD: f64 = 10.0;

// Combat damage ranges (inclusive)
pub const WEAPON_DAMAGE_MIN: u32 = 10;
pub const WEAPON_DAMAGE_MAX: u32 = 20;
pub const UNARMED_DAMAGE_MIN: u32 = 5;
pub const UNARMED_DAMAGE_MAX: u32 = 10;

// Armor soaks a flat amount of each hit, never below zero
pub const ARMOR_DAMAGE_REDUCTION: u32 = 5;

// Inn rest
pub const INN_COST: f64 = 5.0;
pub const INN_HEAL: i32 = 10;

// Doctor revival: hp floor after a defeat; the first visit is free,
// every later visit bills the flat fee with no floor on gold
pub const REVIVAL_HP: i32 = 10;
pub const REVIVAL_FEE: f64 = 10.0;

// Persisted record schema version
pub const SAVE_VERSION: u32 = 1;
