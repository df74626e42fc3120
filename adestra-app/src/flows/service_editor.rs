//! Service editor wizard
//!
//! Editing one service is split into three ordered steps. Navigation and
//! validation live in a single state machine with one named policy per
//! editor variant:
//!
//! - [`ValidationPolicy::Soft`]: required fields never gate navigation or
//!   save (wizard variant; incomplete drafts may be committed)
//! - [`ValidationPolicy::Hard`]: the step's required fields gate `next()`
//!   and `save()` (single-page variant)
//!
//! Deleting is two-phase: `request_delete` arms a confirmation,
//! `confirm_delete` performs the irreversible removal and closes the
//! editor, `cancel_delete` changes nothing.

use shared::ServiceDetail;

use crate::core::config_store::ConfigStore;
use crate::core::error::{AppError, AppResult};
use crate::services::gallery::GalleryImage;
use crate::utils::image_import;

/// Ordered wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStep {
    /// Title, tag, tag color, popular flag
    Identity,
    /// Descriptions and image selection
    Content,
    /// Duration, location, benefits list
    Details,
}

impl EditorStep {
    pub const ORDER: [EditorStep; 3] = [EditorStep::Identity, EditorStep::Content, EditorStep::Details];

    fn forward(self) -> Option<EditorStep> {
        match self {
            EditorStep::Identity => Some(EditorStep::Content),
            EditorStep::Content => Some(EditorStep::Details),
            EditorStep::Details => None,
        }
    }

    fn backward(self) -> Option<EditorStep> {
        match self {
            EditorStep::Identity => None,
            EditorStep::Content => Some(EditorStep::Identity),
            EditorStep::Details => Some(EditorStep::Content),
        }
    }
}

/// Per-step validation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Required fields never block navigation or save
    Soft,
    /// Required fields gate both `next()` and `save()`
    Hard,
}

/// Wizard state for editing a single service
#[derive(Debug)]
pub struct ServiceEditor {
    service: ServiceDetail,
    step: EditorStep,
    policy: ValidationPolicy,
    pending_delete: bool,
}

impl ServiceEditor {
    /// Start editing a brand-new draft (generated id, placeholder content).
    /// Nothing is committed to the store until [`ServiceEditor::save`].
    pub fn create(policy: ValidationPolicy) -> Self {
        Self {
            service: ServiceDetail::draft(),
            step: EditorStep::Identity,
            policy,
            pending_delete: false,
        }
    }

    /// Open an existing service for editing (works on a copy; the store is
    /// only touched on save/delete)
    pub fn open(store: &ConfigStore, id: &str, policy: ValidationPolicy) -> AppResult<Self> {
        let service = store
            .service(id)
            .cloned()
            .ok_or_else(|| AppError::ServiceNotFound(id.to_string()))?;
        Ok(Self {
            service,
            step: EditorStep::Identity,
            policy,
            pending_delete: false,
        })
    }

    pub fn step(&self) -> EditorStep {
        self.step
    }

    pub fn service(&self) -> &ServiceDetail {
        &self.service
    }

    /// Direct field edits (title, tag, flags, ...)
    pub fn service_mut(&mut self) -> &mut ServiceDetail {
        &mut self.service
    }

    /// Required fields of `step` that are currently empty
    pub fn missing_fields(&self, step: EditorStep) -> Vec<&'static str> {
        let s = &self.service;
        let required: Vec<(&'static str, &str)> = match step {
            EditorStep::Identity => vec![("title", s.title.as_str()), ("tag", s.tag.as_str())],
            EditorStep::Content => vec![
                ("description", s.description.as_str()),
                ("fullDescription", s.full_description.as_str()),
            ],
            EditorStep::Details => vec![
                ("duration", s.duration.as_str()),
                ("location", s.location.as_str()),
            ],
        };
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Advance one step. Returns `false` when already at the last step.
    /// Under [`ValidationPolicy::Hard`] the current step's required fields
    /// must be non-empty.
    pub fn next(&mut self) -> AppResult<bool> {
        if self.policy == ValidationPolicy::Hard {
            let missing = self.missing_fields(self.step);
            if !missing.is_empty() {
                return Err(AppError::missing_fields(&missing));
            }
        }
        match self.step.forward() {
            Some(step) => {
                self.step = step;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Go back one step. Returns `false` when already at the first step
    /// (the caller closes the editor). Never validates.
    pub fn back(&mut self) -> bool {
        match self.step.backward() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    // ============ Benefits (multi-line text <-> ordered list) ============

    /// Replace the benefits from the editor's multi-line blob: one entry
    /// per line, empty lines preserved exactly as given. An empty blob
    /// clears the list.
    pub fn set_benefits_text(&mut self, text: &str) {
        self.service.benefits = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(str::to_string).collect()
        };
    }

    /// The benefits as the multi-line blob shown in the editor
    pub fn benefits_text(&self) -> String {
        self.service.benefits.join("\n")
    }

    // ============ Image selection (three paths, last write wins) ============

    /// Pick a bundled preset; the full-resolution reference is stored
    pub fn pick_gallery_image(&mut self, preset: &GalleryImage) {
        self.service.image = preset.full.to_string();
    }

    /// Paste an external URL directly
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.service.image = url.into();
    }

    /// Import a local file: downscaled, re-encoded and embedded as a
    /// `data:` payload. On failure the previous image reference is kept.
    pub fn import_image(&mut self, data: &[u8]) -> AppResult<()> {
        let data_url = image_import::import_to_data_url(data)?;
        self.service.image = data_url;
        Ok(())
    }

    // ============ Terminal actions ============

    /// Commit the edited service to the catalog (replace by id, append if
    /// missing) and close the editor. Returns the service id.
    pub fn save(self, store: &mut ConfigStore) -> AppResult<String> {
        if self.policy == ValidationPolicy::Hard {
            let missing: Vec<&'static str> = EditorStep::ORDER
                .iter()
                .flat_map(|step| self.missing_fields(*step))
                .collect();
            if !missing.is_empty() {
                return Err(AppError::missing_fields(&missing));
            }
        }
        let id = self.service.id.clone();
        store.upsert_service(self.service)?;
        Ok(id)
    }

    /// Arm the delete confirmation
    pub fn request_delete(&mut self) {
        self.pending_delete = true;
    }

    pub fn delete_pending(&self) -> bool {
        self.pending_delete
    }

    /// Disarm; nothing changes
    pub fn cancel_delete(&mut self) {
        self.pending_delete = false;
    }

    /// Perform the irreversible removal and close the editor. Requires a
    /// prior [`ServiceEditor::request_delete`]. Returns whether a stored
    /// record was removed (a never-saved draft removes nothing).
    pub fn confirm_delete(self, store: &mut ConfigStore) -> AppResult<bool> {
        if !self.pending_delete {
            return Err(AppError::Validation("delete was not confirmed".to_string()));
        }
        store.delete_service(&self.service.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::AppPaths;
    use crate::services::gallery::SERVICE_GALLERY;

    fn store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::load(&AppPaths::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn soft_policy_never_blocks_navigation() {
        let mut editor = ServiceEditor::create(ValidationPolicy::Soft);
        editor.service_mut().title.clear();

        assert!(editor.next().unwrap());
        assert_eq!(editor.step(), EditorStep::Content);
        assert!(editor.next().unwrap());
        assert_eq!(editor.step(), EditorStep::Details);
        // At the end, next is a no-op
        assert!(!editor.next().unwrap());

        assert!(editor.back());
        assert!(editor.back());
        assert_eq!(editor.step(), EditorStep::Identity);
        // Back at the first step signals "close the editor"
        assert!(!editor.back());
    }

    #[test]
    fn hard_policy_gates_next_until_fields_are_filled() {
        let mut editor = ServiceEditor::create(ValidationPolicy::Hard);
        editor.service_mut().title = "  ".to_string();

        let err = editor.next().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(editor.step(), EditorStep::Identity);

        // The error clears as soon as the field becomes non-empty
        editor.service_mut().title = "Creche Canina".to_string();
        assert!(editor.next().unwrap());
        assert_eq!(editor.step(), EditorStep::Content);
    }

    #[test]
    fn benefits_blob_preserves_empty_lines_and_order() {
        let mut editor = ServiceEditor::create(ValidationPolicy::Soft);
        editor.set_benefits_text("Primeiro\n\nSegundo\nSegundo");
        assert_eq!(editor.service().benefits, ["Primeiro", "", "Segundo", "Segundo"]);
        assert_eq!(editor.benefits_text(), "Primeiro\n\nSegundo\nSegundo");

        editor.set_benefits_text("");
        assert!(editor.service().benefits.is_empty());
    }

    #[test]
    fn image_paths_are_mutually_exclusive_last_write_wins() {
        let mut editor = ServiceEditor::create(ValidationPolicy::Soft);
        editor.pick_gallery_image(&SERVICE_GALLERY[0]);
        assert_eq!(editor.service().image, SERVICE_GALLERY[0].full);

        editor.set_image_url("https://example.com/dog.png");
        assert_eq!(editor.service().image, "https://example.com/dog.png");

        // A failed import keeps the previous reference
        assert!(editor.import_image(b"not an image").is_err());
        assert_eq!(editor.service().image, "https://example.com/dog.png");
    }

    #[test]
    fn save_commits_draft_to_the_catalog() {
        let (_dir, mut store) = store();
        let mut editor = ServiceEditor::create(ValidationPolicy::Soft);
        editor.service_mut().title = "Creche Canina".to_string();
        let id = editor.save(&mut store).unwrap();

        assert_eq!(store.config().services.len(), 5);
        assert_eq!(store.service(&id).unwrap().title, "Creche Canina");
        // Soft never validates, so the incomplete draft commits as-is
        assert!(store.service(&id).unwrap().duration.is_empty());
    }

    #[test]
    fn hard_save_requires_every_step() {
        let (_dir, mut store) = store();
        let mut editor = ServiceEditor::create(ValidationPolicy::Hard);
        editor.service_mut().duration.clear();
        editor.service_mut().location.clear();

        let err = editor.save(&mut store).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // Nothing was committed
        assert_eq!(store.config().services.len(), 4);
    }

    #[test]
    fn delete_is_two_phase() {
        let (_dir, mut store) = store();
        let mut editor = ServiceEditor::open(&store, "online", ValidationPolicy::Soft).unwrap();

        // Unarmed delete is refused
        let unarmed = ServiceEditor::open(&store, "online", ValidationPolicy::Soft).unwrap();
        assert!(unarmed.confirm_delete(&mut store).is_err());
        assert_eq!(store.config().services.len(), 4);

        // Declining leaves state unchanged
        editor.request_delete();
        editor.cancel_delete();
        assert!(!editor.delete_pending());

        editor.request_delete();
        assert!(editor.confirm_delete(&mut store).unwrap());
        assert_eq!(store.config().services.len(), 3);
        assert!(store.service("online").is_none());
    }

    #[test]
    fn open_unknown_id_is_not_found() {
        let (_dir, store) = store();
        let err = ServiceEditor::open(&store, "missing", ValidationPolicy::Soft).unwrap_err();
        assert!(matches!(err, AppError::ServiceNotFound(_)));
    }
}
