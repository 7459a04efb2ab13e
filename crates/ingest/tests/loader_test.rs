#[cfg(test)]
mod loader_tests {
    use std::fs;
    use std::path::PathBuf;

    use alchemist_domain::{Attributes, AvailableSlots, DatasetKind, Slot};
    use alchemist_errors::AlchemistError;
    use alchemist_ingest::{load_dataset, load_file};
    use serde_json::json;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_clients_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "clients.csv",
            "Client ID,Client Name,Priority Level,Requested TaskIDs,GroupTag,AttributesJSON\n\
             C1,Acme,3,\"T1, T2\",GroupA,\"{\"\"vip\"\": true}\"\n\
             \n\
             C2,Globex,,T3,,\n",
        );

        let dataset = load_file(&path, DatasetKind::Clients).unwrap();
        assert_eq!(dataset.clients.len(), 2);

        let acme = &dataset.clients[0];
        assert_eq!(acme.id, "C1");
        assert_eq!(acme.priority_level, Some(3));
        assert_eq!(acme.requested_task_ids, vec!["T1", "T2"]);
        assert_eq!(acme.group_tag.as_deref(), Some("GroupA"));
        assert_eq!(
            acme.attributes,
            Some(Attributes::Text("{\"vip\": true}".to_string()))
        );

        let globex = &dataset.clients[1];
        assert_eq!(globex.priority_level, None);
        assert_eq!(globex.group_tag, None);
    }

    #[test]
    fn test_load_workers_csv_keeps_bad_slots() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "workers.csv",
            "WorkerID,WorkerName,Skills,AvailableSlots,MaxLoadPerPhase\n\
             W1,Bob,sql,\"[1, 'x']\",2\n\
             W2,Eve,python,\"1,2,3\",1\n",
        );

        let dataset = load_file(&path, DatasetKind::Workers).unwrap();
        assert_eq!(
            dataset.workers[0].available_slots,
            AvailableSlots::List(vec![Slot::Phase(1), Slot::Invalid(json!("x"))])
        );
        assert_eq!(
            dataset.workers[1].available_slots,
            AvailableSlots::from_phases([1, 2, 3])
        );
    }

    #[test]
    fn test_load_tasks_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "tasks.json",
            r#"[
                {"TaskID": "T1", "TaskName": "Load", "Duration": 2,
                 "RequiredSkills": "sql", "PreferredPhases": "[1,2]"},
                {"task_id": "T2", "task_name": "Report", "duration": "1",
                 "required_skills": ["python"], "MaxConcurrent": null}
            ]"#,
        );

        let dataset = load_file(&path, DatasetKind::Tasks).unwrap();
        assert_eq!(dataset.tasks.len(), 2);
        assert_eq!(dataset.tasks[0].preferred_phases, vec![1, 2]);
        assert_eq!(dataset.tasks[0].required_skills, vec!["sql"]);
        assert_eq!(dataset.tasks[1].id, "T2");
        assert_eq!(dataset.tasks[1].duration, Some(1));
        assert_eq!(dataset.tasks[1].max_concurrent, None);
    }

    #[test]
    fn test_json_must_be_array() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "tasks.json", r#"{"TaskID": "T1"}"#);

        let result = load_file(&path, DatasetKind::Tasks);
        assert!(matches!(result, Err(AlchemistError::Serialization(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "clients.xlsx", "binary");

        let result = load_file(&path, DatasetKind::Clients);
        assert!(matches!(result, Err(AlchemistError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load_file(&dir.path().join("absent.json"), DatasetKind::Clients);
        assert!(matches!(result, Err(AlchemistError::Io(_))));
    }

    #[test]
    fn test_load_dataset_merges_files() {
        let dir = TempDir::new().unwrap();
        let clients = write_file(&dir, "c.json", r#"[{"ClientID": "C1"}]"#);
        let tasks = write_file(&dir, "t.csv", "TaskID,TaskName\nT1,Load\nT2,Report\n");

        let dataset = load_dataset(Some(&clients), None, Some(&tasks)).unwrap();
        assert_eq!(dataset.clients.len(), 1);
        assert!(dataset.workers.is_empty());
        assert_eq!(dataset.tasks.len(), 2);
    }
}
