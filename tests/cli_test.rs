#[cfg(test)]
mod cli_tests {
    use std::fs;
    use std::path::PathBuf;

    use alchemist_config::ExportConfig;
    use alchemist_errors::AlchemistError;
    use data_alchemist::cli::{DatasetFiles, ExportArgs, ValidateArgs, ReportFormat};
    use data_alchemist::commands::{export::run_export, validate::run_validate};
    use serde_json::Value;
    use tempfile::TempDir;

    const CLIENTS_CSV: &str = "ClientID,ClientName,PriorityLevel,RequestedTaskIDs\n\
                               C1,Acme,3,T1\n";
    const WORKERS_CSV: &str = "WorkerID,WorkerName,Skills,AvailableSlots,MaxLoadPerPhase\n\
                               W1,Bob,sql,\"1,2,3\",1\n";
    const TASKS_JSON: &str = r#"[
        {"TaskID": "T1", "TaskName": "Load", "Duration": 2, "RequiredSkills": "sql"}
    ]"#;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn dataset_files(dir: &TempDir, clients_csv: &str) -> DatasetFiles {
        DatasetFiles {
            clients: Some(write_file(dir, "clients.csv", clients_csv)),
            workers: Some(write_file(dir, "workers.csv", WORKERS_CSV)),
            tasks: Some(write_file(dir, "tasks.json", TASKS_JSON)),
        }
    }

    fn export_args(files: DatasetFiles, out: Option<PathBuf>) -> ExportArgs {
        ExportArgs {
            files,
            rules: None,
            weights: None,
            preset: None,
            out,
        }
    }

    #[test]
    fn test_validate_clean_files() {
        let dir = TempDir::new().unwrap();
        let args = ValidateArgs {
            files: dataset_files(&dir, CLIENTS_CSV),
            format: ReportFormat::Text,
        };

        let report = run_validate(&args).unwrap();
        assert!(report.findings.is_empty());
        assert_eq!(report.summary.quality_score, 100);
    }

    #[test]
    fn test_validate_reports_errors() {
        let dir = TempDir::new().unwrap();
        let args = ValidateArgs {
            files: dataset_files(&dir, "ClientID,ClientName,PriorityLevel,RequestedTaskIDs\nC1,Acme,9,T99\n"),
            format: ReportFormat::Json,
        };

        let report = run_validate(&args).unwrap();
        let ids: Vec<&str> = report.findings.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["invalid-priority-C1", "unknown-task-C1-T99"]);
        assert!(report.has_errors());
    }

    #[test]
    fn test_validate_requires_a_file() {
        let args = ValidateArgs {
            files: DatasetFiles::default(),
            format: ReportFormat::Text,
        };
        assert!(run_validate(&args).is_err());
    }

    #[test]
    fn test_export_writes_bundle() {
        let dir = TempDir::new().unwrap();
        let rules = write_file(
            &dir,
            "rules.json",
            r#"[{"id": "r1", "type": "loadLimit", "name": "cap", "parameters": {"max": 2}}]"#,
        );
        let out = dir.path().join("out").join("bundle.json");
        let mut args = export_args(dataset_files(&dir, CLIENTS_CSV), Some(out.clone()));
        args.rules = Some(rules);

        let written = run_export(&args, &ExportConfig::default()).unwrap();
        assert_eq!(written, out);

        let bundle: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(bundle["clients"][0]["ClientID"], "C1");
        assert_eq!(bundle["rulesConfig"]["rules"][0]["id"], "r1");
        assert_eq!(bundle["rulesConfig"]["priorityWeights"]["priorityLevel"], 30);
        assert_eq!(bundle["rulesConfig"]["metadata"]["totalWorkers"], 1);
        assert_eq!(bundle["summary"]["qualityScore"], 100);
    }

    #[test]
    fn test_export_default_output_path() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            output_dir: dir.path().join("exports").to_string_lossy().into_owned(),
            pretty: false,
            ..ExportConfig::default()
        };
        let mut args = export_args(dataset_files(&dir, CLIENTS_CSV), None);
        args.preset = Some("minimize-workload".parse().unwrap());

        let written = run_export(&args, &config).unwrap();
        let name = written.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("data-alchemist-export-"));
        assert!(name.ends_with(".json"));

        let content = fs::read_to_string(&written).unwrap();
        assert!(!content.contains('\n'));
        let bundle: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(bundle["rulesConfig"]["priorityWeights"]["workloadBalance"], 30);
    }

    #[test]
    fn test_export_blocked_by_errors() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("bundle.json");
        let args = export_args(
            dataset_files(&dir, "ClientID,ClientName,PriorityLevel\nC1,Acme,0\n"),
            Some(out.clone()),
        );

        let err = run_export(&args, &ExportConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AlchemistError>(),
            Some(AlchemistError::ExportBlocked { errors: 1 })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_export_bad_weights_file() {
        let dir = TempDir::new().unwrap();
        let mut args = export_args(dataset_files(&dir, CLIENTS_CSV), Some(dir.path().join("b.json")));
        args.weights = Some(write_file(&dir, "weights.json", "{\"fairness\": \"high\"}"));

        assert!(run_export(&args, &ExportConfig::default()).is_err());
    }
}
