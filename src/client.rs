// Interactive client for the catalog service.
//
// - `api`: blocking HTTP calls against the documented catalog endpoints.
// - `ui`: dialoguer prompts that collect form values and render responses.
pub mod api;
pub mod ui;
