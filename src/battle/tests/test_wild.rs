#[cfg(test)]
mod tests {
    use crate::battle::calculators::flee_succeeds;
    use crate::battle::engine::Battle;
    use crate::battle::state::{
        BattleEvent, BattleOutcome, BattlePhase, CaptureDestination, PlayerAction, TurnRng,
    };
    use crate::battle::tests::common::{profile_with, quiet_config, test_dex, CreatureBuilder};
    use crate::config::GameConfig;
    use crate::creature::Creature;
    use pretty_assertions::assert_eq;

    fn strong_fighter() -> Creature {
        CreatureBuilder::new("rattata")
            .with_level(50)
            .with_move(0, "quick-attack", 40, 100, 1, 1)
            .build()
    }

    fn weak_wild() -> Creature {
        CreatureBuilder::new("caterpie").with_hp(2).build()
    }

    // Wild flee check, wild move, then a knockout blow from the player.
    const KNOCKOUT: [u32; 5] = [50, 0, 0, 254, 15];

    fn script(capture_draw: Option<u32>) -> TurnRng {
        let mut outcomes = KNOCKOUT.to_vec();
        outcomes.extend(capture_draw);
        TurnRng::new_for_test(outcomes)
    }

    #[test]
    fn test_fainted_wild_creature_joins_party() {
        let dex = test_dex();
        let config = quiet_config();
        let mut profile = profile_with(vec![strong_fighter()]);
        let mut rng = script(Some(10));

        let mut battle = Battle::wild(&mut profile, weak_wild(), &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();
        let bus = battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();
        bus.print_debug_with_message("Events for test_fainted_wild_creature_joins_party:");

        assert_eq!(
            battle.outcome(),
            Some(BattleOutcome::Captured {
                destination: CaptureDestination::Party
            })
        );
        assert!(bus.events().contains(&BattleEvent::BallThrown { balls_left: 5 }));
        assert_eq!(rng.remaining(), 0);
        drop(battle);
        assert_eq!(profile.balls, 5);
        assert_eq!(profile.party().len(), 2);
        assert_eq!(profile.party()[1].name, "caterpie");
    }

    #[test]
    fn test_capture_with_full_party_goes_to_storage() {
        let dex = test_dex();
        let config = quiet_config();
        let mut party = vec![strong_fighter()];
        party.extend((0..5).map(|_| CreatureBuilder::new("pidgey").build()));
        let mut profile = profile_with(party);
        let mut rng = script(Some(0));

        let mut battle = Battle::wild(&mut profile, weak_wild(), &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();
        battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();

        assert_eq!(
            battle.outcome(),
            Some(BattleOutcome::Captured {
                destination: CaptureDestination::Storage
            })
        );
        drop(battle);
        assert_eq!(profile.party().len(), 6);
        assert_eq!(profile.storage().len(), 1);
    }

    #[test]
    fn test_capture_with_nowhere_to_go_releases() {
        let dex = test_dex();
        let config = quiet_config();
        let mut party = vec![strong_fighter()];
        party.extend((0..5).map(|_| CreatureBuilder::new("pidgey").build()));
        let mut profile = profile_with(party);
        for _ in 0..6 {
            profile.add_to_storage(CreatureBuilder::new("oddish").build());
        }
        let mut rng = script(Some(0));

        let mut battle = Battle::wild(&mut profile, weak_wild(), &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();
        battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();

        assert_eq!(
            battle.outcome(),
            Some(BattleOutcome::Captured {
                destination: CaptureDestination::Released
            })
        );
        drop(battle);
        assert_eq!(profile.storage().len(), 6);
        assert!(profile.storage().iter().all(|c| c.name == "oddish"));
    }

    #[test]
    fn test_failed_capture_is_a_plain_victory() {
        let dex = test_dex();
        let config = quiet_config();
        let mut profile = profile_with(vec![strong_fighter()]);
        let mut rng = script(Some(30));

        let mut battle = Battle::wild(&mut profile, weak_wild(), &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();
        let bus = battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();

        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { reward: 0 }));
        assert!(bus.events().contains(&BattleEvent::CaptureFailed {
            creature: "caterpie".to_string()
        }));
        drop(battle);
        assert_eq!(profile.balls, 5);
        assert_eq!(profile.party().len(), 1);
        assert_eq!(profile.currency, 0);
    }

    #[test]
    fn test_no_balls_means_no_capture_draw() {
        let dex = test_dex();
        let config = quiet_config();
        let mut profile = profile_with(vec![strong_fighter()]);
        profile.balls = 0;
        let mut rng = script(None);

        let mut battle = Battle::wild(&mut profile, weak_wild(), &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();
        let bus = battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();

        assert!(bus.events().contains(&BattleEvent::NoBallsLeft));
        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { reward: 0 }));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_wild_creature_can_run_away() {
        let dex = test_dex();
        let config = GameConfig::default();
        let mut profile = profile_with(vec![strong_fighter()]);
        // Below the default two percent.
        let mut rng = TurnRng::new_for_test(vec![1]);

        let mut battle = Battle::wild(&mut profile, weak_wild(), &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();
        let bus = battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();

        assert_eq!(battle.outcome(), Some(BattleOutcome::OpponentFled));
        assert_eq!(
            bus.formatted_lines().last().map(String::as_str),
            Some("The wild caterpie fled!")
        );
        assert!(!bus
            .events()
            .iter()
            .any(|e| matches!(e, BattleEvent::MoveUsed { .. })));
    }

    #[test]
    fn test_escape_odds_improve_with_each_attempt() {
        let dex = test_dex();
        let config = quiet_config();
        let fighter = CreatureBuilder::new("slowpoke")
            .with_speed(10)
            .with_max_hp(200)
            .build();
        let wild = CreatureBuilder::new("jolteon").with_speed(400).build();
        let mut profile = profile_with(vec![fighter]);
        let mut rng = TurnRng::new_for_test(vec![
            50, // flee at 33%: fails
            50, 1, 0, 254, 15, // the wild creature attacks
            50, // flee at 63%: succeeds
        ]);

        let mut battle = Battle::wild(&mut profile, wild, &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();

        let bus = battle.resolve_round(PlayerAction::Flee, &mut rng).unwrap();
        assert!(bus
            .events()
            .contains(&BattleEvent::FleeAttempted { succeeded: false }));
        assert_eq!(battle.phase(), &BattlePhase::TurnLoop);
        assert!(battle.fighter().unwrap().hp < 200);

        let bus = battle.resolve_round(PlayerAction::Flee, &mut rng).unwrap();
        assert!(bus
            .events()
            .contains(&BattleEvent::FleeAttempted { succeeded: true }));
        assert_eq!(battle.outcome(), Some(BattleOutcome::Fled));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_fast_fighter_always_escapes() {
        let dex = test_dex();
        let config = quiet_config();
        for seed in 0..50 {
            let fighter = CreatureBuilder::new("pidgey").with_speed(200).build();
            let wild = CreatureBuilder::new("slowpoke").with_speed(20).build();
            let mut profile = profile_with(vec![fighter]);
            let mut rng = TurnRng::seeded(seed);

            let mut battle = Battle::wild(&mut profile, wild, &dex, &config);
            battle.begin(10, &mut rng).unwrap();
            battle.send_out(0).unwrap();
            battle.resolve_round(PlayerAction::Flee, &mut rng).unwrap();

            assert_eq!(battle.outcome(), Some(BattleOutcome::Fled), "seed {}", seed);
        }
    }

    #[test]
    fn test_slow_fighter_escapes_about_a_third_of_the_time() {
        let mut rng = TurnRng::seeded(7);
        let trials = 3000;
        let escapes = (0..trials)
            .filter(|_| flee_succeeds(10, 400, 1, &mut rng))
            .count();
        let rate = escapes as f64 / trials as f64;
        assert!((0.28..0.38).contains(&rate), "escape rate {}", rate);
    }
}
