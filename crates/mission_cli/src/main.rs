use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mission_core::{
    available_pets, owned_pet_ids, plan_pass, used_pet_ids, EligibilityIndex, Mission, Pet,
};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "mission_cli", about = "Offline mission planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every assignment a pass would make against a saved snapshot.
    Plan {
        /// JSON file with `pets` and `missions`.
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// List the pets not committed to any joined mission.
    Available {
        #[arg(long)]
        snapshot: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    pets: Vec<Pet>,
    #[serde(default)]
    missions: Vec<Mission>,
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing snapshot {}", path.display()))
}

fn render_available(snapshot: &Snapshot) -> String {
    let owned = owned_pet_ids(&snapshot.pets);
    let used = used_pet_ids(&snapshot.missions);
    let available = available_pets(&owned, &used);

    let mut out = format!(
        "owned={} used={} available={}\n",
        owned.len(),
        used.len(),
        available.len()
    );
    for id in &available {
        let _ = writeln!(out, "  {id}");
    }
    out
}

fn render_plan(snapshot: &Snapshot) -> String {
    let owned = owned_pet_ids(&snapshot.pets);
    let index = EligibilityIndex::from_pets(&snapshot.pets);
    let plan = plan_pass(&snapshot.missions, &owned, &index);
    let open = snapshot.missions.iter().filter(|m| m.is_open()).count();

    let mut out = format!(
        "missions={} open={} planned_joins={}\n",
        snapshot.missions.len(),
        open,
        plan.len()
    );
    for assignment in &plan {
        let [first, second, third] = &assignment.pets;
        let _ = writeln!(
            out,
            "  {} <- {first}, {second}, {third}",
            assignment.mission_id
        );
    }
    if plan.is_empty() {
        out.push_str("  no mission can be filled\n");
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Plan { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            print!("{}", render_plan(&snapshot));
        }
        Commands::Available { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            print!("{}", render_available(&snapshot));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_core::test_fixtures::{base_pets, joined_mission, triple};
    use std::io::Write;

    #[test]
    fn test_plan_lists_each_join() {
        let snapshot = Snapshot {
            pets: base_pets(),
            missions: vec![triple("m1", "fire", 1), triple("m2", "water", 2)],
        };
        let rendered = render_plan(&snapshot);
        assert!(rendered.starts_with("missions=2 open=2 planned_joins=2\n"), "{rendered}");
        assert!(rendered.contains("m2 <- water_a, water_b, water_c"), "{rendered}");
    }

    #[test]
    fn test_plan_reports_when_nothing_fits() {
        let snapshot = Snapshot {
            pets: base_pets(),
            missions: vec![triple("m1", "earth", 1)],
        };
        assert!(render_plan(&snapshot).contains("no mission can be filled"));
    }

    #[test]
    fn test_available_subtracts_joined_pets() {
        let snapshot = Snapshot {
            pets: base_pets(),
            missions: vec![joined_mission("m1", &["fire_a", "fire_b", "water_a"])],
        };
        let rendered = render_available(&snapshot);
        assert!(rendered.starts_with("owned=9 used=3 available=6\n"), "{rendered}");
        assert!(!rendered.contains("fire_a"), "{rendered}");
    }

    #[test]
    fn test_snapshot_loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{
            "pets": [{"id": "p1", "class": "fire", "star": 2}],
            "missions": [{"id": "m1", "slots": [null, null, null]}]
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.pets.len(), 1);
        assert!(snapshot.missions[0].is_open());
    }
}
