use hireflow::service::ApplicantDirectory;
use hireflow::storage::{JsonApplicantStorage, StorageError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Open the applicant book stored at `data_file`, starting empty when it does not exist.
pub(crate) fn open_directory(data_file: PathBuf) -> Result<ApplicantDirectory, StorageError> {
    ApplicantDirectory::open(JsonApplicantStorage::new(data_file))
}
