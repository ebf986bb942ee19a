//! Plain text and JSON rendering of results

use crate::{
    models::{TeamStanding, TeamWeeks},
    Result,
};

/// First line of every standings report.
pub const STANDINGS_BANNER: &str = "Final standings:";

/// One `"<team> - <points>"` line per team under the banner.
pub fn render_standings(standings: &[TeamStanding]) -> String {
    std::iter::once(STANDINGS_BANNER.to_string())
        .chain(
            standings
                .iter()
                .map(|s| format!("{} - {}", s.name, s.points)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_standings_json(standings: &[TeamStanding]) -> Result<String> {
    Ok(serde_json::to_string_pretty(standings)?)
}

/// Per-team weekly averages followed by each player's weekly points.
pub fn render_roster(teams: &[TeamWeeks]) -> String {
    let mut lines = Vec::new();
    for team in teams {
        lines.push(format!(
            "{} : average {:.2} {:?}",
            team.name, team.total_average, team.averages
        ));
        for player in &team.players {
            lines.push(format!(
                "  {} ({}): Points - {:?}",
                player.name, player.id, player.points
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerWeeks;

    fn standings() -> Vec<TeamStanding> {
        vec![
            TeamStanding {
                name: "#teamABS".to_string(),
                points: 86.0,
            },
            TeamStanding {
                name: "#teamSam".to_string(),
                points: 18.5,
            },
        ]
    }

    #[test]
    fn test_render_standings() {
        assert_eq!(
            render_standings(&standings()),
            "Final standings:\n#teamABS - 86\n#teamSam - 18.5"
        );
    }

    #[test]
    fn test_render_standings_empty_is_banner_only() {
        assert_eq!(render_standings(&[]), STANDINGS_BANNER);
    }

    #[test]
    fn test_render_standings_json() {
        let json = render_standings_json(&standings()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "#teamABS");
        assert_eq!(value[1]["points"], 18.5);
    }

    #[test]
    fn test_render_roster() {
        let teams = vec![TeamWeeks {
            name: "ABS".to_string(),
            averages: vec![7.5, 6.0],
            total_average: 6.75,
            players: vec![PlayerWeeks {
                id: 4113,
                name: "Vetti Dogs".to_string(),
                points: vec![10, 8],
            }],
        }];

        assert_eq!(
            render_roster(&teams),
            "ABS : average 6.75 [7.5, 6.0]\n  Vetti Dogs (4113): Points - [10, 8]"
        );
    }
}
