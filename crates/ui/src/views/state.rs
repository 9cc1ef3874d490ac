use dioxus::prelude::*;

use services::RegistryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Fetch,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotFound => "This section's content could not be found.",
            ViewError::Fetch => "Unable to load this section right now.",
        }
    }
}

impl From<&RegistryError> for ViewError {
    fn from(err: &RegistryError) -> Self {
        match err {
            RegistryError::NotFound(_) => Self::NotFound,
            RegistryError::Fetch { .. } => Self::Fetch,
            _ => Self::Fetch,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Fetch),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// One-line user-visible notice ("coming soon" and friends), shown until
/// dismissed or replaced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notice(pub Option<String>);
