use std::fs;
use tempfile::TempDir;
use u_lineup::pool::{load_pool, Position};
use u_lineup::{report, LineupError, LineupOptimizer, RunConfig};

const SALARIES: &str = "\
Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
RB,Christian McCaffrey (1),Christian McCaffrey,1,RB/FLEX,9500,SF@SEA,SF,25.1
RB,Kenneth Walker III (2),Kenneth Walker III,2,RB/FLEX,6500,SF@SEA,SEA,15.3
RB,Elijah Mitchell (3),Elijah Mitchell,3,RB/FLEX,4500,SF@SEA,SF,8.0
WR,Deebo Samuel (4),Deebo Samuel,4,WR/FLEX,7000,SF@SEA,SF,16.0
WR,DK Metcalf (5),DK Metcalf,5,WR/FLEX,6800,SF@SEA,SEA,14.4
WR,Tyler Lockett (6),Tyler Lockett,6,WR/FLEX,6000,SF@SEA,SEA,13.9
WR,Jauan Jennings (7),Jauan Jennings,7,WR/FLEX,3500,SF@SEA,SF,6.5
TE,George Kittle (8),George Kittle,8,TE/FLEX,5800,SF@SEA,SF,12.0
DST,49ers (9),49ers ,9,DST,3400,SF@SEA,SF,8.1
";

const PROJECTIONS: &str = "\
Position,Name,Team,Opp,Fpts,Ownership
RB,Christian McCaffrey,SF,SEA,26.2,35.1%
RB,Kenneth Walker III,SEA,SF,15.8,12.0%
RB,Elijah Mitchell,SF,SEA,6.1,
WR,Deebo Samuel,SF,SEA,15.5,18%
WR,DK Metcalf,SEA,SF,14.9,11%
WR,Tyler Lockett,SEA,SF,13.2,9%
WR,Jauan Jennings,SF,SEA,7.4,3%
TE,George Kittle,SF,SEA,12.3,10%
DST,San Francisco,SF,SEA,9.0,14%
";

fn write_inputs(dir: &TempDir, slots: &str, exclude: &str, budget: u64) -> std::path::PathBuf {
    let salaries = dir.path().join("salaries.csv");
    let projections = dir.path().join("projections.csv");
    fs::write(&salaries, SALARIES).unwrap();
    fs::write(&projections, PROJECTIONS).unwrap();

    let config = format!(
        r#"
salaries = {salaries:?}
projections = {projections:?}
slots = {slots}
flex = ["RB", "WR", "TE"]
budget = {budget}
lineups = 3
exclude = {exclude}

[search]
batch_size = 16
parallel = false
"#,
        salaries = salaries.to_str().unwrap(),
        projections = projections.to_str().unwrap(),
    );
    let path = dir.path().join("run.toml");
    fs::write(&path, config).unwrap();
    path
}

#[test]
fn test_end_to_end_from_files() {
    let dir = TempDir::new().unwrap();
    let config_path = write_inputs(
        &dir,
        r#"["RB", "WR", "WR", "FLEX", "DST"]"#,
        r#"["Tyler Lockett", "Not On Slate"]"#,
        31_000,
    );

    let config = RunConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();

    let pool = load_pool(&config.salaries, &config.projections).unwrap();
    assert_eq!(pool.len(), 9);
    let dst = pool.iter().find(|p| p.position == Position::DST).unwrap();
    assert_eq!(dst.name, "49ers");
    assert_eq!(dst.projection, 9.0);

    let template = config.template().unwrap();
    let lineups = LineupOptimizer::run(&pool, &template, &config.search_config()).unwrap();
    assert!(!lineups.is_empty());
    assert!(lineups.len() <= 3);
    for lineup in &lineups {
        assert!(lineup.total_salary <= 31_000);
        assert!(!lineup.names().contains(&"Tyler Lockett"));
        assert_eq!(lineup.slots[4].position, Position::DST);
    }

    let text = report::render(&lineups);
    assert!(text.starts_with("Lineup 1:"));
    assert!(text.contains("49ers"));
}

#[test]
fn test_unaffordable_template_is_empty() {
    let dir = TempDir::new().unwrap();
    let config_path = write_inputs(&dir, r#"["RB", "RB", "RB"]"#, "[]", 15_000);
    let config = RunConfig::from_file(&config_path).unwrap();

    let pool = load_pool(&config.salaries, &config.projections).unwrap();
    let template = config.template().unwrap();
    let lineups = LineupOptimizer::run(&pool, &template, &config.search_config()).unwrap();
    assert!(lineups.is_empty());
    assert_eq!(report::render(&lineups), "No valid lineups.\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        load_pool(&missing, &missing),
        Err(LineupError::Io(_))
    ));
    assert!(matches!(
        RunConfig::from_file(dir.path().join("nope.toml")),
        Err(LineupError::Io(_))
    ));
}
