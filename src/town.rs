//! Town services: the shop's bulk price calculator and the inn.

use crate::core::constants::{INN_COST, INN_HEAL};
use crate::core::game_state::GameState;
use crate::core::money::round_cents;
use crate::error::GameError;

/// Works out how many units of an item the money actually buys.
///
/// Buys the full `quantity` when affordable, otherwise as many whole units
/// as the money covers, spending exactly `units * price`. Returns
/// `(units_bought, remaining_money)`. A non-positive price is
/// `InvalidPrice`.
pub fn purchase_item(price: f64, money: f64, quantity: u32) -> Result<(u32, f64), GameError> {
    if price <= 0.0 {
        return Err(GameError::InvalidPrice);
    }
    let total = price * quantity as f64;
    if total <= money {
        Ok((quantity, round_cents(money - total)))
    } else {
        let units = (money / price).floor() as u32;
        Ok((units, round_cents(money - units as f64 * price)))
    }
}

/// A night at the inn: costs a flat fee and restores a fixed amount of HP,
/// capped at `max_hp`. Returns the HP actually restored. Fails with
/// `InsufficientFunds` when gold does not cover the fee, leaving the state
/// unchanged.
pub fn sleep(state: &mut GameState) -> Result<i32, GameError> {
    if state.player_gold < INN_COST {
        return Err(GameError::InsufficientFunds {
            needed: INN_COST,
            available: state.player_gold,
        });
    }
    state.player_gold = round_cents(state.player_gold - INN_COST);
    let before = state.player_hp;
    state.player_hp = (state.player_hp + INN_HEAL).min(state.max_hp);
    Ok(state.player_hp - before)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_item_affordable_quantity() {
        let (bought, remaining) = purchase_item(1.23, 10.0, 3).unwrap();
        assert_eq!(bought, 3);
        assert_eq!(remaining, 6.31);
    }

    #[test]
    fn test_purchase_item_caps_at_what_money_covers() {
        let (bought, remaining) = purchase_item(1.23, 2.01, 3).unwrap();
        assert_eq!(bought, 1);
        assert_eq!(remaining, 0.78);
    }

    #[test]
    fn test_purchase_item_spends_exactly_for_whole_units() {
        let (bought, remaining) = purchase_item(5.0, 50.0, 12).unwrap();
        assert_eq!(bought, 10);
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn test_purchase_item_too_expensive_buys_nothing() {
        let (bought, remaining) = purchase_item(31.41, 21.12, 1).unwrap();
        assert_eq!(bought, 0);
        assert_eq!(remaining, 21.12);
    }

    #[test]
    fn test_purchase_item_rejects_zero_price() {
        assert!(matches!(
            purchase_item(0.0, 10.0, 1),
            Err(GameError::InvalidPrice)
        ));
        assert!(matches!(
            purchase_item(-1.0, 10.0, 1),
            Err(GameError::InvalidPrice)
        ));
    }

    #[test]
    fn test_purchase_item_money_is_conserved() {
        let cases = [(1.23, 10.0, 3u32), (3.41, 21.12, 1), (2.5, 10.0, 1)];
        for (price, money, qty) in cases {
            let (bought, remaining) = purchase_item(price, money, qty).unwrap();
            assert!(remaining >= 0.0);
            assert_eq!(remaining, round_cents(money - bought as f64 * price));
        }
    }

    #[test]
    fn test_sleep_heals_and_charges() {
        let mut state = GameState::new("Tired");
        state.player_hp = 12;

        let healed = sleep(&mut state).unwrap();

        assert_eq!(healed, 10);
        assert_eq!(state.player_hp, 22);
        assert_eq!(state.player_gold, 5.0);
    }

    #[test]
    fn test_sleep_caps_at_max_hp() {
        let mut state = GameState::new("Rested");
        state.player_hp = 25;

        let healed = sleep(&mut state).unwrap();

        assert_eq!(healed, 5);
        assert_eq!(state.player_hp, 30);
    }

    #[test]
    fn test_sleep_scenario_chain() {
        // hp=30 gold=10: first night caps at 30 hp, gold drops to 5;
        // gold==5 still covers the fee; the third night is refused.
        let mut state = GameState::new("Regular");

        sleep(&mut state).unwrap();
        assert_eq!(state.player_hp, 30);
        assert_eq!(state.player_gold, 5.0);

        sleep(&mut state).unwrap();
        assert_eq!(state.player_hp, 30);
        assert_eq!(state.player_gold, 0.0);

        let result = sleep(&mut state);
        assert!(matches!(result, Err(GameError::InsufficientFunds { .. })));
        assert_eq!(state.player_hp, 30);
        assert_eq!(state.player_gold, 0.0);
    }

    #[test]
    fn test_sleep_broke_changes_nothing() {
        let mut state = GameState::new("Broke");
        state.player_hp = 4;
        state.player_gold = 4.99;

        let result = sleep(&mut state);

        assert!(matches!(result, Err(GameError::InsufficientFunds { .. })));
        assert_eq!(state.player_hp, 4);
        assert_eq!(state.player_gold, 4.99);
    }
}
