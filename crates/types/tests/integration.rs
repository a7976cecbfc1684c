//! Integration tests for types

#[cfg(test)]
mod tests {
    use assetsweep_types::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    #[test]
    fn test_mode_round_trips_cli_names() {
        for mode in [Mode::UpdateLocation, Mode::ListUseless, Mode::DeleteUseless] {
            assert_eq!(Mode::from_str(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_not_implemented() {
        let err = Mode::from_str("archive_useless").unwrap_err();
        assert!(err.to_string().contains("archive_useless"));
    }

    #[test]
    fn test_mode_default_is_list() {
        assert_eq!(Mode::default(), Mode::ListUseless);
        assert!(!Mode::ListUseless.is_mutating());
        assert!(Mode::DeleteUseless.is_mutating());
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = ActionReport::new(Mode::DeleteUseless, false);
        report.outcomes.push(ActionOutcome::Deleted {
            path: PathBuf::from("/notes/assets/orphan.png"),
            planned: false,
        });
        report.outcomes.push(ActionOutcome::Failed {
            operation: FsOperation::RemoveDir,
            path: PathBuf::from("/notes/assets"),
            message: "permission denied".to_string(),
            code: Some("storage.permission_denied".to_string()),
        });

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["mode"], "delete_useless");
        assert_eq!(json["outcomes"][0]["kind"], "deleted");
        assert_eq!(json["outcomes"][1]["operation"], "remove_dir");
        assert_eq!(report.failure_count(), 1);
    }
}
