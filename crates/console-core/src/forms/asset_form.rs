//! Asset create/edit form state

use validator::Validate;

use console_shared::EntityId;

use crate::domain::{Asset, AssetField, AssetKind, CreateAssetRequest, UpdateAssetRequest};
use crate::error::DomainError;
use crate::forms::field_list::FieldList;

/// Asset forms always keep at least one field row on screen.
pub const MIN_ASSET_FIELDS: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct AssetForm {
    pub name: String,
    pub description: String,
    pub kind: AssetKind,
    pub showroom_id: Option<EntityId>,
    pub fields: FieldList<AssetField>,
}

impl Default for AssetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind: AssetKind::default(),
            showroom_id: None,
            fields: FieldList::with_min_len(Vec::new(), MIN_ASSET_FIELDS),
        }
    }
}

impl AssetForm {
    pub fn for_showroom(showroom_id: &str) -> Self {
        Self {
            showroom_id: Some(showroom_id.to_string()),
            ..Self::default()
        }
    }

    /// Seeds the form from a stored asset for editing.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            description: asset.description.clone().unwrap_or_default(),
            kind: asset.kind,
            showroom_id: asset.showroom_id.clone(),
            fields: FieldList::with_min_len(asset.fields.clone(), MIN_ASSET_FIELDS),
        }
    }

    /// Rows with an empty key are left out of the submission.
    fn submitted_fields(&self) -> Vec<AssetField> {
        self.fields.iter().filter(|f| !f.is_blank()).cloned().collect()
    }

    fn description(&self) -> Option<String> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn check_duplicate_keys(fields: &[AssetField]) -> Result<(), DomainError> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.key.trim() == field.key.trim()) {
                return Err(DomainError::ValidationError(format!(
                    "Field key '{}' is used more than once",
                    field.key.trim()
                )));
            }
        }
        Ok(())
    }

    pub fn to_create_request(&self) -> Result<CreateAssetRequest, DomainError> {
        let fields = self.submitted_fields();
        Self::check_duplicate_keys(&fields)?;
        let request = CreateAssetRequest {
            name: self.name.trim().to_string(),
            description: self.description(),
            kind: self.kind,
            fields,
            showroom_id: self.showroom_id.clone(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Full replacement of the editable members of an existing asset. Seed
    /// the form with [`AssetForm::from_asset`] first; an empty description
    /// is sent as `""` so it clears the stored one.
    pub fn to_update_request(&self) -> Result<UpdateAssetRequest, DomainError> {
        let fields = self.submitted_fields();
        Self::check_duplicate_keys(&fields)?;
        let request = UpdateAssetRequest {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            kind: Some(self.kind),
            fields: Some(fields),
        };
        request.validate()?;
        Ok(request)
    }
}
