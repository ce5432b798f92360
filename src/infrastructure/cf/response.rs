//! Cloud Controller v3 responses, as returned by `cf curl`

use serde::Deserialize;

use crate::domain::entities::{LastOperation, RemoteService};
use crate::domain::value_objects::OperationState;

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceInstancePage {
    #[serde(default)]
    pub resources: Vec<ServiceInstanceResource>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceInstanceResource {
    pub name: String,
    #[serde(default)]
    pub last_operation: Option<LastOperationResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LastOperationResource {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `cf curl` exits 0 on HTTP errors; the body carries these instead
#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

impl ServiceInstancePage {
    pub fn parse(body: &str) -> Result<Self, String> {
        let page: Self = serde_json::from_str(body).map_err(|e| e.to_string())?;
        if !page.errors.is_empty() {
            let message = page
                .errors
                .iter()
                .map(|e| format!("{} ({} {})", e.detail, e.title, e.code))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(message);
        }
        Ok(page)
    }

    pub fn into_services(self) -> Vec<RemoteService> {
        self.resources.into_iter().map(Into::into).collect()
    }
}

impl From<ServiceInstanceResource> for RemoteService {
    fn from(resource: ServiceInstanceResource) -> Self {
        // User-provided instances have no last operation; they are ready as soon as they exist.
        let last_operation = match resource.last_operation {
            Some(op) => LastOperation::new(
                OperationState::parse(&op.state),
                op.description.unwrap_or_default(),
            ),
            None => LastOperation::new(OperationState::Succeeded, ""),
        };
        RemoteService::new(resource.name, last_operation)
    }
}
