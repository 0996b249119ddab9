//! Property tests for plan merge rules.

use std::path::PathBuf;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use task_master_planner::{
    evolve_plan, fresh_plan, ArchitectureFields, Blueprint, GenerationMode, LoadedBaseline,
    PlanContext, GENERATED_BY,
};

fn ctx() -> PlanContext {
    PlanContext {
        repo_root: "/work/demo".to_string(),
        generated_on: "2026-01-15".to_string(),
        mode: GenerationMode::Evolve,
    }
}

fn fields() -> ArchitectureFields {
    ArchitectureFields {
        project_name: "Demo".to_string(),
        last_updated: None,
    }
}

fn blueprint_with(phases: Vec<Value>) -> Blueprint {
    serde_json::from_value(json!({ "phases": phases })).unwrap()
}

fn baseline_of(document: Map<String, Value>) -> LoadedBaseline {
    LoadedBaseline {
        path: PathBuf::from("task_master_plan.json"),
        document,
    }
}

fn phase_values() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(any::<u32>(), 0..=6)
        .prop_map(|ids| ids.into_iter().map(|id| json!({ "id": id })).collect())
}

fn foreign_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z_]{0,10}").unwrap()
        .prop_filter("not a merged key", |k| k != "project" && k != "phases")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: evolve output phases are exactly baseline phases followed
    /// by blueprint phases.
    #[test]
    fn property_evolve_appends_all_phases(
        base_phases in phase_values(),
        new_phases in phase_values(),
    ) {
        let mut document = Map::new();
        document.insert("phases".to_string(), Value::Array(base_phases.clone()));

        let out = evolve_plan(
            baseline_of(document),
            &blueprint_with(new_phases.clone()),
            &fields(),
            &ctx(),
        )
        .unwrap();

        let mut expected = base_phases;
        expected.extend(new_phases);
        prop_assert_eq!(out["phases"].clone(), Value::Array(expected));
    }

    /// PROPERTY: keys the merge does not know about survive evolve
    /// untouched, whatever they hold.
    #[test]
    fn property_evolve_preserves_foreign_keys(
        extras in proptest::collection::hash_map(foreign_key(), "[A-Za-z0-9 ]{0,12}", 0..=5),
    ) {
        let mut document = Map::new();
        for (key, value) in &extras {
            document.insert(key.clone(), json!(value));
        }

        let out = evolve_plan(
            baseline_of(document),
            &blueprint_with(Vec::new()),
            &fields(),
            &ctx(),
        )
        .unwrap();

        for (key, value) in &extras {
            prop_assert_eq!(out.get(key.as_str()), Some(&json!(value)));
        }
    }

    /// PROPERTY: evolve always stamps the run metadata regardless of what
    /// the baseline claimed.
    #[test]
    fn property_evolve_stamps_run_metadata(
        prior_tool in "[A-Za-z0-9 _\\-]{0,20}",
        prior_root in "[A-Za-z0-9/_\\-]{0,30}",
    ) {
        let mut project = Map::new();
        project.insert("generated_by".to_string(), json!(prior_tool));
        project.insert("repo_root".to_string(), json!(prior_root));
        let mut document = Map::new();
        document.insert("project".to_string(), Value::Object(project));

        let out = evolve_plan(
            baseline_of(document),
            &blueprint_with(Vec::new()),
            &fields(),
            &ctx(),
        )
        .unwrap();

        prop_assert_eq!(out["project"]["generated_by"].clone(), json!(GENERATED_BY));
        prop_assert_eq!(out["project"]["repo_root"].clone(), json!("/work/demo"));
        prop_assert_eq!(out["project"]["generation_mode"].clone(), json!("evolve"));
    }

    /// PROPERTY: fresh plans carry the extracted name verbatim, whatever
    /// it contains.
    #[test]
    fn property_fresh_plan_carries_any_name(
        name in "(?s).{0,64}",
    ) {
        let extracted = ArchitectureFields {
            project_name: name.clone(),
            last_updated: None,
        };
        let plan = fresh_plan(&blueprint_with(Vec::new()), &extracted, &ctx());
        let value = serde_json::to_value(&plan).unwrap();

        prop_assert_eq!(value["project"]["name"].clone(), json!(name));
        prop_assert_eq!(value["project"]["generated_by"].clone(), json!(GENERATED_BY));
    }
}
