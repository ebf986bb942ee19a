//! Unit tests for configuration parsing and rule validation

use super::*;

const FULL_CONFIG: &str = r#"
[players]
"Sardaukar" = 1139641
"Pointus Maximus" = 954786
"Playmakers" = 594887
"The unsullied" = 2276264

[teams]
"Team ABS" = ["Sardaukar", "Pointus Maximus"]
"Team Sam" = ["Playmakers", "The unsullied"]

[rules]
max_sum_player_count = 1
max_position_for_award = 2

[rules.gameweek]
average_bonus = 4.0
sum_bonus = 1.5
position_awards = [2.0, 1.0]

[rules.halfway]
gameweek = 2
average_bonus = 8.0
sum_bonus = 3.0
position_awards = [4.0, 2.0]

[rules.end_of_season]
gameweek = 3
average_bonus = 16.0
sum_bonus = 6.0
"#;

#[cfg(test)]
mod game_config_tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = GameConfig::from_toml_str(FULL_CONFIG).unwrap();

        assert_eq!(config.team_names(), vec!["Team ABS", "Team Sam"]);
        assert_eq!(
            config.team("Team ABS").unwrap(),
            &["Sardaukar".to_string(), "Pointus Maximus".to_string()]
        );
        assert_eq!(config.player_id("Playmakers").unwrap(), PlayerId::new(594887));

        let rules = config.rules();
        assert_eq!(rules.max_sum_player_count, 1);
        assert_eq!(rules.max_position_for_award, 2);
        assert_eq!(rules.gameweek.sum_bonus, 1.5);
        assert_eq!(rules.halfway.gameweek, Gameweek::new(2));
        assert_eq!(rules.halfway.awards.position_awards, vec![4.0, 2.0]);
        assert!(rules.end_of_season.awards.position_awards.is_empty());
    }

    #[test]
    fn test_rules_section_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [players]
            "A" = 1
            "B" = 2

            [teams]
            "Pair" = ["A", "B"]
            "#,
        )
        .unwrap();

        assert_eq!(config.rules(), &RuleBundle::default());
    }

    #[test]
    fn test_team_smaller_than_sum_count_rejected() {
        // Default rules sum the top two players.
        let err = GameConfig::from_toml_str(
            r#"
            [players]
            "A" = 1

            [teams]
            "Solo" = ["A"]
            "#,
        )
        .unwrap_err();

        match err {
            BonusError::InsufficientPlayers {
                ref team,
                required,
                found,
            } => {
                assert_eq!(team, "Solo");
                assert_eq!(required, 2);
                assert_eq!(found, 1);
            }
            ref other => panic!("Expected InsufficientPlayers, got {:?}", other),
        }
        assert!(err.is_config_error());
    }

    #[test]
    fn test_undeclared_team_member_rejected() {
        let err = GameConfig::from_toml_str(
            r#"
            [players]
            "A" = 1
            "B" = 2
            "C" = 3
            "D" = 4
            "E" = 5

            [teams]
            "First" = ["A", "B"]
            "Second" = ["C", "D"]
            "Third" = ["E", "Ghost"]
            "#,
        )
        .unwrap_err();

        match err {
            BonusError::PlayerNotFound { name } => assert_eq!(name, "Ghost"),
            other => panic!("Expected PlayerNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_team_checks_use_configured_sum_count() {
        let mut players = BTreeMap::new();
        players.insert("A".to_string(), PlayerId::new(1));
        let mut teams = BTreeMap::new();
        teams.insert("Solo".to_string(), vec!["A".to_string()]);
        let rules = RuleBundle {
            max_sum_player_count: 1,
            ..RuleBundle::default()
        };

        assert!(GameConfig::new(players.clone(), teams.clone(), rules).is_ok());
        assert!(matches!(
            GameConfig::new(players, teams, RuleBundle::default()),
            Err(BonusError::InsufficientPlayers { required: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_missing_players_section() {
        let err = GameConfig::from_toml_str("[teams]\n\"X\" = [\"A\"]\n").unwrap_err();
        match err {
            BonusError::MissingSection { section } => assert_eq!(section, PLAYERS_SECTION),
            other => panic!("Expected MissingSection, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_teams_section() {
        let err = GameConfig::from_toml_str("[players]\n\"A\" = 1\n").unwrap_err();
        match err {
            BonusError::MissingSection { section } => assert_eq!(section, TEAMS_SECTION),
            other => panic!("Expected MissingSection, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_rule_key_is_config_error() {
        let err = GameConfig::from_toml_str(
            r#"
            [players]
            "A" = 1

            [teams]
            "Solo" = ["A"]

            [rules]
            max_position_for_award = 3
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, BonusError::ConfigParse(_)));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_unknown_team_and_player() {
        let config = GameConfig::from_toml_str(FULL_CONFIG).unwrap();

        assert!(matches!(
            config.team("Nobody"),
            Err(BonusError::TeamNotFound { .. })
        ));
        assert!(matches!(
            config.player_id("Ghost"),
            Err(BonusError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, FULL_CONFIG).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.team_names().len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, BonusError::Io(_)));
        assert!(err.is_config_error());
        assert!(!err.is_fetch_error());
    }
}

#[cfg(test)]
mod rule_validation_tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        assert!(RuleBundle::default().validate().is_ok());
    }

    #[test]
    fn test_zero_sum_player_count_rejected() {
        let rules = RuleBundle {
            max_sum_player_count: 0,
            ..RuleBundle::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(BonusError::InvalidRules { .. })
        ));
    }

    #[test]
    fn test_zero_stage_gameweek_rejected() {
        let mut rules = RuleBundle::default();
        rules.halfway.gameweek = Gameweek::new(0);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_halfway_after_end_rejected() {
        let mut rules = RuleBundle::default();
        rules.halfway.gameweek = Gameweek::new(30);
        rules.end_of_season.gameweek = Gameweek::new(20);

        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("halfway gameweek 30"));
    }

    #[test]
    fn test_negative_award_rejected() {
        let mut rules = RuleBundle::default();
        rules.end_of_season.awards.position_awards = vec![5.0, -1.0];
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_nan_bonus_rejected() {
        let mut rules = RuleBundle::default();
        rules.gameweek.average_bonus = f64::NAN;
        assert!(rules.validate().is_err());
    }
}
