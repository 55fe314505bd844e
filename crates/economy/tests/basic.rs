use miniplay_economy::*;
use rust_decimal::Decimal;

fn example_schedule() -> RankRewardSchedule {
    RankRewardSchedule {
        first: 1000,
        second: 500,
        third: 250,
        top100: 100,
        basic: 50,
    }
}

fn achievement(id: &str, reward: Coins) -> Achievement {
    Achievement::new(id, id, "", "", reward)
}

#[test]
fn test_weekly_total_fixed_tiers() {
    assert_eq!(compute_weekly_total(&example_schedule(), &[]), 31_450);
}

#[test]
fn test_weekly_total_with_both_custom_tiers() {
    let tiers = vec![
        CustomRewardTier::range("r", 501, 1000, 10),
        CustomRewardTier::specific("s", [5, 10, 15], 20),
    ];
    assert_eq!(
        compute_weekly_total(&example_schedule(), &tiers),
        31_450 + 5_000 + 60
    );
}

#[test]
fn test_achievement_total_example() {
    let list = vec![achievement("a", 100), achievement("b", 200)];
    assert_eq!(compute_achievement_total(&list), Decimal::from(33_000));
}

#[test]
fn test_charge_examples() {
    assert_eq!(compute_credited_coins(10_000, 5), 1_050);
    assert_eq!(compute_credited_coins(5_990, 0), 599);
}

#[test]
fn test_budget_example() {
    let state = BudgetPolicy::evaluate(31_450, Decimal::from(33_000), 15_000);
    assert_eq!(state.total_liability, Decimal::from(64_450));
    assert!(state.is_over_budget);
    assert_eq!(state.deficit, Decimal::from(49_450));
}

#[test]
fn test_budget_from_calculators() {
    let weekly = compute_weekly_total(&example_schedule(), &[]);
    let achievements = compute_achievement_total(&[achievement("a", 100), achievement("b", 200)]);
    let state = BudgetPolicy::evaluate(weekly, achievements, 100_000);
    assert!(!state.is_over_budget);
    assert_eq!(state.deficit, Decimal::ZERO);
    assert_eq!(state.remaining(), Decimal::from(35_550));
}

#[test]
fn test_empty_inputs_contribute_zero() {
    assert_eq!(compute_achievement_total(&[]), Decimal::ZERO);
    assert_eq!(
        compute_weekly_total(&example_schedule(), &[]),
        fixed_tier_total(&example_schedule())
    );
}

#[test]
fn test_calculators_are_idempotent() {
    let schedule = example_schedule();
    let tiers = vec![CustomRewardTier::new("t")];
    let list = vec![achievement("a", 123)];

    assert_eq!(
        compute_weekly_total(&schedule, &tiers),
        compute_weekly_total(&schedule, &tiers)
    );
    assert_eq!(
        compute_achievement_total(&list),
        compute_achievement_total(&list)
    );
    assert_eq!(
        compute_credited_coins(3_000, 4),
        compute_credited_coins(3_000, 4)
    );
    let a = BudgetPolicy::evaluate(10, Decimal::ONE, 5);
    let b = BudgetPolicy::evaluate(10, Decimal::ONE, 5);
    assert_eq!(a, b);
}

#[test]
fn test_form_values_feed_calculators() {
    let mut schedule = RankRewardSchedule::zero();
    schedule.first = parse_coin_field("1000");
    schedule.top100 = parse_coin_field("ten");

    let mut tier = CustomRewardTier::specific("s", parse_rank_list("5, 10, x, 15"), 0);
    tier.reward = parse_coin_field("20");

    assert_eq!(compute_weekly_total(&schedule, &[tier]), 1_060);
}
