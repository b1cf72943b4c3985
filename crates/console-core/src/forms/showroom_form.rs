//! Showroom create/edit form state

use validator::Validate;

use crate::domain::{
    CreateShowroomRequest, MetaField, Showroom, ShowroomKind, ShowroomSize, UpdateShowroomRequest,
};
use crate::error::DomainError;
use crate::forms::field_list::FieldList;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowroomForm {
    pub name: String,
    pub location: String,
    pub kind: ShowroomKind,
    pub template: String,
    pub sizes: FieldList<ShowroomSize>,
    pub meta_fields: FieldList<MetaField>,
    pub is_active: bool,
}

impl ShowroomForm {
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }

    pub fn from_showroom(showroom: &Showroom) -> Self {
        Self {
            name: showroom.name.clone(),
            location: showroom.location.clone().unwrap_or_default(),
            kind: showroom.kind,
            template: showroom.template.clone().unwrap_or_default(),
            sizes: FieldList::new(showroom.sizes.clone()),
            meta_fields: FieldList::new(showroom.meta_fields.clone()),
            is_active: showroom.is_active,
        }
    }

    fn optional(value: &str) -> Option<String> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn submitted_sizes(&self) -> Vec<ShowroomSize> {
        self.sizes
            .iter()
            .filter(|s| !s.label.trim().is_empty())
            .cloned()
            .collect()
    }

    fn submitted_meta(&self) -> Vec<MetaField> {
        self.meta_fields
            .iter()
            .filter(|m| !m.key.trim().is_empty())
            .cloned()
            .collect()
    }

    pub fn to_create_request(&self) -> Result<CreateShowroomRequest, DomainError> {
        let request = CreateShowroomRequest {
            name: self.name.trim().to_string(),
            location: Self::optional(&self.location),
            kind: self.kind,
            template: Self::optional(&self.template),
            sizes: self.submitted_sizes(),
            meta_fields: self.submitted_meta(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Full replacement; seed with [`ShowroomForm::from_showroom`]. Blank
    /// location or template are sent as `""` to clear them.
    pub fn to_update_request(&self) -> Result<UpdateShowroomRequest, DomainError> {
        let request = UpdateShowroomRequest {
            name: Some(self.name.trim().to_string()),
            location: Some(self.location.trim().to_string()),
            kind: Some(self.kind),
            template: Some(self.template.trim().to_string()),
            sizes: Some(self.submitted_sizes()),
            meta_fields: Some(self.submitted_meta()),
            is_active: Some(self.is_active),
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_drops_unlabelled_rows() {
        let mut form = ShowroomForm::new();
        form.name = "Bandung Outlet".into();
        form.template = "compact".into();
        form.sizes = form
            .sizes
            .append_blank()
            .update(0, "label", "Hall")
            .unwrap()
            .update(0, "width", "10")
            .unwrap()
            .append_blank();
        form.meta_fields = form.meta_fields.append_blank();

        let req = form.to_create_request().unwrap();
        assert_eq!(req.sizes.len(), 1);
        assert_eq!(req.sizes[0].width, 10.0);
        assert!(req.meta_fields.is_empty());
        assert_eq!(req.template.as_deref(), Some("compact"));
        assert!(req.location.is_none());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut form = ShowroomForm::new();
        form.name = "X".into();
        assert!(form.to_create_request().is_err());
    }

    #[test]
    fn test_edit_keeps_active_flag() {
        let showroom: Showroom = serde_json::from_value(serde_json::json!({
            "id": "s1", "name": "Virtual Tour", "type": "virtual", "isActive": false
        }))
        .unwrap();
        let form = ShowroomForm::from_showroom(&showroom);
        let req = form.to_update_request().unwrap();
        assert_eq!(req.is_active, Some(false));
        assert_eq!(req.kind, Some(ShowroomKind::Virtual));
    }
}
