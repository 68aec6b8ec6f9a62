use validator::Validate;

/// A request to rename a department label across the store.
///
/// Both names must be non-empty before any file access happens; a request
/// decoded from an empty or malformed body fails validation here.
#[derive(Debug, Validate)]
pub struct RenameRequest {
    #[validate(length(min = 1, message = "origin department name is empty"))]
    pub origin: String,
    #[validate(length(min = 1, message = "target department name is empty"))]
    pub target: String,
}

impl RenameRequest {
    pub fn new(origin: String, target: String) -> Self {
        Self { origin, target }
    }
}
