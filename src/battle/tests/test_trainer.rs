#[cfg(test)]
mod tests {
    use crate::battle::engine::Battle;
    use crate::battle::state::{BattleEvent, BattleOutcome, BattlePhase, PlayerAction, TurnRng};
    use crate::battle::tests::common::{
        profile_with, quiet_config, test_dex, trainer_with, CreatureBuilder,
    };
    use crate::config::GameConfig;
    use crate::creature::Creature;
    use crate::errors::ActionError;
    use crate::trainer::{CreatureHolder, Movement};
    use pretty_assertions::assert_eq;

    fn hard_hitter() -> Creature {
        CreatureBuilder::new("pikachu")
            .with_max_hp(200)
            .with_attack_defense(500, 5)
            .build()
    }

    #[test]
    fn test_beating_last_creature_pays_reward() {
        let dex = test_dex();
        let config = quiet_config();
        let mut profile = profile_with(vec![hard_hitter()]);
        let mut trainer = trainer_with(
            vec![CreatureBuilder::new("geodude").build()],
            Movement::Pursue,
        );
        let mut rng = TurnRng::new_for_test(vec![
            50, // growth check
            0,  // trainer picks its first move
            0, 254, 0, // geodude strikes first on the priority tie
            0, 254, 15, // pikachu knocks it out
            42, // reward for the one creature held
        ]);

        let mut battle = Battle::trainer(&mut profile, &mut trainer, &dex, &config);
        let intro = battle.begin(10, &mut rng).unwrap();
        assert_eq!(
            intro.formatted_lines(),
            vec!["Youngster wants to battle! Youngster sends out geodude (Lv.1)!".to_string()]
        );
        battle.send_out(0).unwrap();
        let bus = battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();
        bus.print_debug_with_message("Events for test_beating_last_creature_pays_reward:");

        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { reward: 42 }));
        assert!(bus.events().contains(&BattleEvent::RewardEarned { amount: 42 }));
        assert_eq!(rng.remaining(), 0);
        drop(battle);
        assert_eq!(profile.currency, 42);
        assert!(trainer.is_defeated());
        assert_eq!(trainer.movement, Movement::Wander);
    }

    #[test]
    fn test_next_creature_comes_out_before_reward() {
        let dex = test_dex();
        let config = quiet_config();
        let mut profile = profile_with(vec![hard_hitter()]);
        let mut trainer = trainer_with(
            vec![
                CreatureBuilder::new("geodude").build(),
                CreatureBuilder::new("onix").build(),
            ],
            Movement::Sentry,
        );
        let mut rng = TurnRng::new_for_test(vec![
            50, // growth check
            0, 0, 254, 0, 0, 254, 15, // geodude goes down
            1, 0, 254, 0, 0, 254, 15, // onix goes down
            30, 12, // one reward roll per creature held
        ]);

        let mut battle = Battle::trainer(&mut profile, &mut trainer, &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();

        let bus = battle
            .resolve_round(PlayerAction::UseMove { move_index: 0 }, &mut rng)
            .unwrap();
        assert!(bus.events().contains(&BattleEvent::CreatureSentOut {
            side: crate::battle::state::Side::Opponent,
            creature: "onix".to_string(),
        }));
        assert_eq!(battle.phase(), &BattlePhase::TurnLoop);
        assert_eq!(battle.opponent_creature().unwrap().name, "onix");

        battle
            .resolve_round(PlayerAction::UseMove { move_index: 1 }, &mut rng)
            .unwrap();
        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { reward: 42 }));
        drop(battle);
        assert_eq!(profile.currency, 42);
        assert_eq!(trainer.movement, Movement::Sentry);
        assert!(trainer.is_defeated());
    }

    #[test]
    fn test_trainer_recruits_before_battle() {
        let dex = test_dex();
        let config = GameConfig {
            trainer_growth_chance: 100,
            ..quiet_config()
        };
        let mut profile = profile_with(vec![hard_hitter()]);
        let mut trainer = trainer_with(
            vec![CreatureBuilder::new("geodude").build()],
            Movement::Pace,
        );
        let mut rng = TurnRng::seeded(11);

        let mut battle = Battle::trainer(&mut profile, &mut trainer, &dex, &config);
        let bus = battle.begin(40, &mut rng).unwrap();

        assert!(bus
            .events()
            .iter()
            .any(|e| matches!(e, BattleEvent::TrainerRecruited { .. })));
        assert_eq!(battle.opponent_creature().unwrap().name, "geodude");
        drop(battle);
        assert_eq!(trainer.inventory().len(), 2);
        assert!(trainer.inventory()[1].level <= 20);
    }

    #[test]
    fn test_full_trainer_skips_growth_roll() {
        let dex = test_dex();
        let config = GameConfig {
            trainer_growth_chance: 100,
            ..quiet_config()
        };
        let mut profile = profile_with(vec![hard_hitter()]);
        let mut trainer = trainer_with(
            (0..6).map(|_| CreatureBuilder::new("zubat").build()).collect(),
            Movement::Explore,
        );
        let mut rng = TurnRng::new_for_test(vec![]);

        let mut battle = Battle::trainer(&mut profile, &mut trainer, &dex, &config);
        battle.begin(10, &mut rng).unwrap();

        assert_eq!(battle.phase(), &BattlePhase::SelectFighter);
        drop(battle);
        assert_eq!(trainer.inventory().len(), 6);
    }

    #[test]
    fn test_trainer_with_nothing_standing_loses_at_once() {
        let dex = test_dex();
        let config = quiet_config();
        let mut profile = profile_with(vec![hard_hitter()]);
        let mut trainer = trainer_with(
            vec![CreatureBuilder::new("geodude").with_hp(0).build()],
            Movement::Pursue,
        );
        let mut rng = TurnRng::new_for_test(vec![50, 20]);

        let mut battle = Battle::trainer(&mut profile, &mut trainer, &dex, &config);
        battle.begin(10, &mut rng).unwrap();

        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { reward: 20 }));
        drop(battle);
        assert_eq!(profile.currency, 20);
        assert!(trainer.is_defeated());
    }

    #[test]
    fn test_cannot_flee_from_trainer() {
        let dex = test_dex();
        let config = quiet_config();
        let mut profile = profile_with(vec![hard_hitter()]);
        let mut trainer = trainer_with(
            vec![CreatureBuilder::new("geodude").build()],
            Movement::Wander,
        );
        let mut rng = TurnRng::new_for_test(vec![50]);

        let mut battle = Battle::trainer(&mut profile, &mut trainer, &dex, &config);
        battle.begin(10, &mut rng).unwrap();
        battle.send_out(0).unwrap();

        assert_eq!(
            battle.resolve_round(PlayerAction::Flee, &mut rng).unwrap_err(),
            ActionError::CannotFleeTrainer
        );
        assert_eq!(battle.phase(), &BattlePhase::TurnLoop);
        assert_eq!(battle.attempt(), 1);
    }
}
